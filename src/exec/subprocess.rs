//! Blocking subprocess execution of launcher steps

use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use std::time::Instant;

use super::step::{Invocation, Step, StepRunner, StepStatus};
use crate::build::cmake::find_cmake;
use crate::error::LaunchError;
use crate::utils::terminal;

/// Runs steps as real processes with inherited stdout/stderr
#[derive(Debug)]
pub struct SubprocessRunner {
    /// Project root; working directory for the build step and the executable
    working_dir: PathBuf,
    /// Echo each step before running it
    verbose: bool,
}

impl SubprocessRunner {
    pub fn new(working_dir: PathBuf, verbose: bool) -> Self {
        Self {
            working_dir,
            verbose,
        }
    }

    fn run_cmake(&self, invocation: &Invocation, cwd: &Path) -> Result<StepStatus, LaunchError> {
        let cmake = find_cmake(&invocation.program)?;

        let mut cmd = Command::new(&cmake);
        cmd.args(&invocation.args).current_dir(cwd);

        let status = cmd
            .stdin(Stdio::null())
            .status()
            .map_err(|source| LaunchError::Spawn {
                program: cmake,
                source,
            })?;

        Ok(status.into())
    }

    fn run_executable(&self, path: &Path) -> Result<StepStatus, LaunchError> {
        let status = Command::new(path)
            .current_dir(&self.working_dir)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|source| LaunchError::Spawn {
                program: path.to_path_buf(),
                source,
            })?;

        Ok(status.into())
    }
}

/// Remove a directory tree, treating a missing directory as already removed
pub fn remove_dir(path: &Path) -> Result<(), LaunchError> {
    match std::fs::remove_dir_all(path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(source) => Err(LaunchError::RemoveDir {
            path: path.to_path_buf(),
            source,
        }),
    }
}

impl StepRunner for SubprocessRunner {
    fn run(&mut self, step: &Step) -> Result<StepStatus, LaunchError> {
        if self.verbose {
            terminal::print_verbose(&format!("Running: {}", step));
        }

        let start = Instant::now();
        let status = match step {
            Step::RemoveDir(path) => {
                remove_dir(path)?;
                StepStatus::SUCCESS
            }
            Step::Configure {
                build_dir,
                invocation,
            } => {
                std::fs::create_dir_all(build_dir).map_err(|source| LaunchError::CreateDir {
                    path: build_dir.clone(),
                    source,
                })?;
                self.run_cmake(invocation, build_dir)?
            }
            Step::Build(invocation) => self.run_cmake(invocation, &self.working_dir)?,
            Step::Execute(path) => self.run_executable(path)?,
        };

        if self.verbose {
            terminal::print_verbose(&format!(
                "{} finished in {:.2}s (exit code: {:?})",
                step.label(),
                start.elapsed().as_secs_f64(),
                status.code
            ));
        }

        Ok(status)
    }
}
