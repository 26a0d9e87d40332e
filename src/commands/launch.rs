//! Launch command implementation
//!
//! Configures and builds the project with CMake according to the mode token,
//! then runs the built executable on the local host.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use crate::build::cmake::CMakeConfig;
use crate::build::mode::{Mode, Selection, USAGE};
use crate::config::LauncherConfig;
use crate::error::{LaunchError, GENERIC_FAILURE};
use crate::exec::{Step, StepRunner, SubprocessRunner};
use crate::utils::terminal;

/// Exit code when no mode token is given
pub const USAGE_EXIT_CODE: i32 = 1;

/// Build the project and run the resulting executable
#[derive(Args, Debug)]
pub struct LaunchCommand {
    /// Build mode: --debug, --release or --clean
    #[arg(value_name = "MODE", allow_hyphen_values = true)]
    pub mode: Option<String>,

    /// Arguments after the mode are accepted and ignored
    #[arg(hide = true, trailing_var_arg = true, allow_hyphen_values = true)]
    pub ignored: Vec<String>,

    /// Launcher config file (TOML) overriding the built-in paths
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

impl LaunchCommand {
    /// Execute the launch command, returning the exit code to report
    pub fn execute(self, verbose: bool) -> Result<i32> {
        let selection = Selection::from_arg(self.mode.as_deref());
        // Usage wins over a missing or broken config file
        if selection == Selection::Missing {
            return Ok(print_usage());
        }

        let project_root = std::env::current_dir().context("Failed to get current directory")?;
        let config = match &self.config {
            Some(path) => LauncherConfig::load_from_path(path)?,
            None => LauncherConfig::default(),
        }
        .resolve(&project_root);

        if verbose {
            terminal::print_verbose(&format!("Project root: {}", project_root.display()));
        }

        let runner = SubprocessRunner::new(project_root, verbose);
        Launcher::new(config, runner, verbose).launch(&selection)
    }
}

fn print_usage() -> i32 {
    println!("{}", USAGE);
    USAGE_EXIT_CODE
}

/// Drives the mode's build steps and the final executable through a runner
pub struct Launcher<R> {
    config: LauncherConfig,
    runner: R,
    verbose: bool,
}

impl<R: StepRunner> Launcher<R> {
    pub fn new(config: LauncherConfig, runner: R, verbose: bool) -> Self {
        Self {
            config,
            runner,
            verbose,
        }
    }

    /// Consume the launcher, handing back its runner
    #[cfg(test)]
    pub fn into_runner(self) -> R {
        self.runner
    }

    fn cmake(&self, mode: Mode) -> CMakeConfig {
        CMakeConfig::new(self.config.source_dir.clone(), self.config.build_dir.clone())
            .program(self.config.cmake.clone())
            .build_type(mode.build_type())
            .generator(self.config.generator.clone())
            .jobs(self.config.jobs)
            .verbose(self.verbose)
    }

    /// Build steps for a mode, in execution order
    pub fn build_steps(&self, mode: Mode) -> Vec<Step> {
        let cmake = self.cmake(mode);

        let mut steps = Vec::with_capacity(3);
        if mode.wipes_build_dir() {
            steps.push(Step::RemoveDir(self.config.build_dir.clone()));
        }
        steps.push(cmake.configure_step());
        steps.push(cmake.build_step());
        steps
    }

    /// Run the selection and return the exit code to report
    ///
    /// Build failures are reported here and turned into the failing step's
    /// exit code. A failure to start the executable is returned as an error.
    pub fn launch(&mut self, selection: &Selection) -> Result<i32> {
        match selection {
            Selection::Missing => return Ok(print_usage()),
            Selection::Mode(mode) => {
                terminal::print_info(mode.banner());
                if let Err(err) = self.build(*mode) {
                    self.report_build_failure(&err);
                    return Ok(err.exit_code());
                }
            }
            // Nothing is built, but the executable is still run
            Selection::Unknown(token) => {
                println!("Unknown option: {}", token);
            }
        }

        self.run_executable()
    }

    fn build(&mut self, mode: Mode) -> Result<(), LaunchError> {
        for step in self.build_steps(mode) {
            self.runner.run(&step)?.check(&step)?;
        }
        Ok(())
    }

    fn report_build_failure(&self, err: &LaunchError) {
        // CMake prints its own diagnostics for a failed step
        if self.verbose || !matches!(err, LaunchError::StepFailed { .. }) {
            err.display_with_hints();
        }
        println!("Build failed");
    }

    fn run_executable(&mut self) -> Result<i32> {
        let executable = self.config.executable.clone();
        let status = self
            .runner
            .run(&Step::Execute(executable.clone()))
            .with_context(|| format!("Failed to run {}", executable.display()))?;

        Ok(status.code.unwrap_or(GENERIC_FAILURE))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exec::step::StepStatus;
    use std::collections::VecDeque;
    use std::path::Path;

    /// Records every step and answers with scripted results
    #[derive(Default)]
    struct RecordingRunner {
        steps: Vec<Step>,
        results: VecDeque<Result<StepStatus, LaunchError>>,
    }

    impl RecordingRunner {
        fn with_results(results: Vec<Result<StepStatus, LaunchError>>) -> Self {
            Self {
                steps: Vec::new(),
                results: results.into(),
            }
        }
    }

    impl StepRunner for RecordingRunner {
        fn run(&mut self, step: &Step) -> Result<StepStatus, LaunchError> {
            self.steps.push(step.clone());
            self.results
                .pop_front()
                .unwrap_or(Ok(StepStatus::SUCCESS))
        }
    }

    fn root() -> &'static Path {
        Path::new("/work/engine")
    }

    fn launcher(runner: RecordingRunner) -> Launcher<RecordingRunner> {
        Launcher::new(LauncherConfig::default().resolve(root()), runner, false)
    }

    fn run(token: Option<&str>, runner: RecordingRunner) -> (Result<i32>, Vec<Step>) {
        let mut launcher = launcher(runner);
        let result = launcher.launch(&Selection::from_arg(token));
        (result, launcher.into_runner().steps)
    }

    fn executable() -> Step {
        Step::Execute(root().join("build-debug/Project/Project"))
    }

    fn build_type_arg(step: &Step) -> String {
        let Step::Configure { invocation, .. } = step else {
            panic!("expected configure step, got {step:?}");
        };
        invocation
            .args_lossy()
            .into_iter()
            .find(|arg| arg.starts_with("-DCMAKE_BUILD_TYPE="))
            .unwrap()
    }

    #[test]
    fn test_no_mode_prints_usage_and_runs_nothing() {
        let (result, steps) = run(None, RecordingRunner::default());
        assert_eq!(result.unwrap(), USAGE_EXIT_CODE);
        assert!(steps.is_empty());
    }

    #[test]
    fn test_debug_configures_builds_then_runs() {
        let (result, steps) = run(Some("--debug"), RecordingRunner::default());
        assert_eq!(result.unwrap(), 0);

        assert_eq!(steps.len(), 3);
        assert!(matches!(steps[0], Step::Configure { .. }));
        assert!(matches!(steps[1], Step::Build(_)));
        assert_eq!(steps[2], executable());
        assert_eq!(build_type_arg(&steps[0]), "-DCMAKE_BUILD_TYPE=Debug");
    }

    #[test]
    fn test_release_configures_builds_then_runs() {
        let (result, steps) = run(Some("--release"), RecordingRunner::default());
        assert_eq!(result.unwrap(), 0);

        assert_eq!(steps.len(), 3);
        assert!(matches!(steps[0], Step::Configure { .. }));
        assert!(matches!(steps[1], Step::Build(_)));
        assert_eq!(steps[2], executable());
        assert_eq!(build_type_arg(&steps[0]), "-DCMAKE_BUILD_TYPE=Release");
    }

    #[test]
    fn test_clean_removes_configures_builds_then_runs() {
        let (result, steps) = run(Some("--clean"), RecordingRunner::default());
        assert_eq!(result.unwrap(), 0);

        assert_eq!(steps.len(), 4);
        assert_eq!(steps[0], Step::RemoveDir(root().join("build-debug")));
        assert!(matches!(steps[1], Step::Configure { .. }));
        assert!(matches!(steps[2], Step::Build(_)));
        assert_eq!(steps[3], executable());
    }

    #[test]
    fn test_configure_failure_skips_build_and_executable() {
        let runner = RecordingRunner::with_results(vec![Ok(StepStatus::from_code(2))]);
        let (result, steps) = run(Some("--debug"), runner);

        assert_eq!(result.unwrap(), 2);
        assert_eq!(steps.len(), 1);
        assert!(matches!(steps[0], Step::Configure { .. }));
    }

    #[test]
    fn test_build_failure_skips_executable() {
        let runner = RecordingRunner::with_results(vec![
            Ok(StepStatus::SUCCESS),
            Ok(StepStatus::SUCCESS),
            Ok(StepStatus::from_code(1)),
        ]);
        let (result, steps) = run(Some("--clean"), runner);

        assert_eq!(result.unwrap(), 1);
        assert_eq!(steps.len(), 3);
        assert!(!steps.contains(&executable()));
    }

    #[test]
    fn test_missing_cmake_is_build_failure() {
        let runner = RecordingRunner::with_results(vec![Err(LaunchError::missing_tool(
            "cmake",
            "configuring and building the project",
            "install cmake",
        ))]);
        let (result, steps) = run(Some("--release"), runner);

        assert_eq!(result.unwrap(), GENERIC_FAILURE);
        assert_eq!(steps.len(), 1);
    }

    #[test]
    fn test_unknown_mode_still_runs_executable() {
        let (result, steps) = run(Some("--fast"), RecordingRunner::default());
        assert_eq!(result.unwrap(), 0);
        assert_eq!(steps, vec![executable()]);
    }

    #[test]
    fn test_executable_exit_code_passes_through() {
        let runner = RecordingRunner::with_results(vec![
            Ok(StepStatus::SUCCESS),
            Ok(StepStatus::SUCCESS),
            Ok(StepStatus::from_code(7)),
        ]);
        let (result, _) = run(Some("--debug"), runner);
        assert_eq!(result.unwrap(), 7);
    }

    #[test]
    fn test_executable_killed_by_signal_is_generic_failure() {
        let runner = RecordingRunner::with_results(vec![Ok(StepStatus { code: None })]);
        let (result, _) = run(Some("--bogus"), runner);
        assert_eq!(result.unwrap(), GENERIC_FAILURE);
    }

    #[test]
    fn test_executable_spawn_failure_propagates() {
        let runner = RecordingRunner::with_results(vec![Err(LaunchError::Spawn {
            program: root().join("build-debug/Project/Project"),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        })]);
        let (result, steps) = run(Some("--bogus"), runner);

        let err = result.unwrap_err();
        assert!(err.to_string().starts_with("Failed to run"));
        assert!(err.downcast_ref::<LaunchError>().is_some());
        assert_eq!(steps, vec![executable()]);
    }

    #[test]
    fn test_build_steps_use_config() {
        let config = LauncherConfig {
            build_dir: PathBuf::from("out"),
            jobs: Some(8),
            ..LauncherConfig::default()
        }
        .resolve(root());
        let launcher = Launcher::new(config, RecordingRunner::default(), false);

        let steps = launcher.build_steps(Mode::Clean);
        assert_eq!(steps[0], Step::RemoveDir(root().join("out")));

        let Step::Build(invocation) = &steps[2] else {
            panic!("expected build step");
        };
        let out = root().join("out").to_string_lossy().into_owned();
        assert_eq!(invocation.args_lossy(), vec!["--build", out.as_str(), "-j", "8"]);
    }
}
