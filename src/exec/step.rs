//! Launcher steps and the runner seam that executes them

use std::ffi::OsString;
use std::fmt;
use std::path::PathBuf;

use crate::error::LaunchError;

/// A program with its arguments
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: PathBuf,
    pub args: Vec<OsString>,
}

impl Invocation {
    pub fn new(program: impl Into<PathBuf>, args: Vec<OsString>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }

    /// Arguments as strings, lossily converted
    pub fn args_lossy(&self) -> Vec<String> {
        self.args
            .iter()
            .map(|arg| arg.to_string_lossy().into_owned())
            .collect()
    }
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program.display())?;
        for arg in self.args_lossy() {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

/// One blocking unit of launcher work
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// Remove the build-output directory; a missing directory is fine
    RemoveDir(PathBuf),
    /// Generate build metadata; `build_dir` is created first
    Configure {
        build_dir: PathBuf,
        invocation: Invocation,
    },
    /// Compile and link from existing build metadata
    Build(Invocation),
    /// Run the built executable with no arguments
    Execute(PathBuf),
}

impl Step {
    /// Short human-readable name
    pub fn label(&self) -> &'static str {
        match self {
            Step::RemoveDir(_) => "Remove build directory",
            Step::Configure { .. } => "CMake configure",
            Step::Build(_) => "CMake build",
            Step::Execute(_) => "Executable",
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Step::RemoveDir(path) => write!(f, "remove {}", path.display()),
            Step::Configure { invocation, .. } | Step::Build(invocation) => {
                write!(f, "{}", invocation)
            }
            Step::Execute(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Exit status of a finished step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepStatus {
    /// Process exit code; `None` when terminated by a signal
    pub code: Option<i32>,
}

impl StepStatus {
    pub const SUCCESS: StepStatus = StepStatus { code: Some(0) };

    #[cfg(test)]
    pub fn from_code(code: i32) -> Self {
        Self { code: Some(code) }
    }

    pub fn success(&self) -> bool {
        self.code == Some(0)
    }

    /// Turn an unsuccessful status into a step failure
    pub fn check(self, step: &Step) -> Result<(), LaunchError> {
        if self.success() {
            Ok(())
        } else {
            Err(LaunchError::step_failed(step.label(), self.code))
        }
    }
}

impl From<std::process::ExitStatus> for StepStatus {
    fn from(status: std::process::ExitStatus) -> Self {
        Self {
            code: status.code(),
        }
    }
}

/// Executes launcher steps, blocking until each one finishes
pub trait StepRunner {
    /// Run a step to completion and report its status
    ///
    /// `Err` means the step could not be carried out at all (missing tool,
    /// spawn or filesystem failure); a step that ran and failed returns its
    /// unsuccessful status.
    fn run(&mut self, step: &Step) -> Result<StepStatus, LaunchError>;
}
