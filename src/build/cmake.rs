//! CMake configuration and execution
//!
//! This module turns the launcher's build settings into the configure and
//! build steps handed to a [`StepRunner`](crate::exec::StepRunner).

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::error::{hints, LaunchError};
use crate::exec::{Invocation, Step};

/// CMake build type
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BuildType {
    #[default]
    Debug,
    Release,
}

impl std::fmt::Display for BuildType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BuildType::Debug => write!(f, "Debug"),
            BuildType::Release => write!(f, "Release"),
        }
    }
}

/// CMake configuration builder
#[derive(Debug)]
pub struct CMakeConfig {
    /// CMake program name or path
    program: PathBuf,
    /// Source directory (where CMakeLists.txt is located)
    source_dir: PathBuf,
    /// Build directory
    build_dir: PathBuf,
    /// Build type
    build_type: BuildType,
    /// Generator (e.g., "Ninja", "Unix Makefiles")
    generator: Option<String>,
    /// Number of parallel jobs
    jobs: Option<usize>,
    /// Verbose output
    verbose: bool,
}

impl CMakeConfig {
    /// Create a new CMake configuration
    pub fn new(source_dir: PathBuf, build_dir: PathBuf) -> Self {
        Self {
            program: PathBuf::from("cmake"),
            source_dir,
            build_dir,
            build_type: BuildType::Debug,
            generator: None,
            jobs: None,
            verbose: false,
        }
    }

    /// Set the CMake program to invoke
    pub fn program(mut self, program: impl Into<PathBuf>) -> Self {
        self.program = program.into();
        self
    }

    /// Set the build type
    pub fn build_type(mut self, build_type: BuildType) -> Self {
        self.build_type = build_type;
        self
    }

    /// Set the generator
    pub fn generator(mut self, generator: Option<String>) -> Self {
        self.generator = generator;
        self
    }

    /// Set number of parallel jobs
    pub fn jobs(mut self, jobs: Option<usize>) -> Self {
        self.jobs = jobs;
        self
    }

    /// Enable verbose output
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Configure step: `cmake -S <src> -B <build> -DCMAKE_BUILD_TYPE=<type>`
    pub fn configure_step(&self) -> Step {
        let mut args: Vec<OsString> = vec![
            "-S".into(),
            self.source_dir.clone().into(),
            "-B".into(),
            self.build_dir.clone().into(),
            format!("-DCMAKE_BUILD_TYPE={}", self.build_type).into(),
        ];

        if let Some(generator) = &self.generator {
            args.push("-G".into());
            args.push(generator.into());
        }

        Step::Configure {
            build_dir: self.build_dir.clone(),
            invocation: Invocation::new(self.program.clone(), args),
        }
    }

    /// Build step: `cmake --build <build> -j [jobs]`
    pub fn build_step(&self) -> Step {
        let mut args: Vec<OsString> = vec!["--build".into(), self.build_dir.clone().into()];

        // Parallel jobs
        args.push("-j".into());
        if let Some(jobs) = self.jobs {
            args.push(jobs.to_string().into());
        }

        if self.verbose {
            args.push("--verbose".into());
        }

        Step::Build(Invocation::new(self.program.clone(), args))
    }
}

/// Find the CMake executable, by name on PATH or at an explicit path
pub fn find_cmake(program: &Path) -> Result<PathBuf, LaunchError> {
    which::which(program).map_err(|_| {
        LaunchError::missing_tool(
            program.display().to_string(),
            "configuring and building the project",
            hints::cmake(),
        )
    })
}
