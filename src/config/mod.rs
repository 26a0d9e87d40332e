//! Launcher configuration
//!
//! The launcher works with built-in defaults. A TOML file passed with
//! `--config` may override any of them:
//!
//! ```toml
//! source_dir = "."
//! build_dir = "build-debug"
//! executable = "build-debug/Project/Project"
//! cmake = "cmake"
//! generator = "Ninja"
//! jobs = 8
//! ```

mod validation;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

pub use validation::validate_config;

/// Default CMake build-output directory
pub const DEFAULT_BUILD_DIR: &str = "build-debug";

/// Default location of the built executable
pub const DEFAULT_EXECUTABLE: &str = "build-debug/Project/Project";

/// Paths and tools used by the launcher
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LauncherConfig {
    /// CMake source directory (where CMakeLists.txt is located)
    pub source_dir: PathBuf,

    /// Build-output directory, removed by `--clean`
    pub build_dir: PathBuf,

    /// Executable run after a successful build
    pub executable: PathBuf,

    /// CMake program name or path
    pub cmake: PathBuf,

    /// CMake generator (e.g. "Ninja")
    pub generator: Option<String>,

    /// Parallel build jobs; CMake decides when unset
    pub jobs: Option<usize>,
}

impl Default for LauncherConfig {
    fn default() -> Self {
        Self {
            source_dir: PathBuf::from("."),
            build_dir: PathBuf::from(DEFAULT_BUILD_DIR),
            executable: PathBuf::from(DEFAULT_EXECUTABLE),
            cmake: PathBuf::from("cmake"),
            generator: None,
            jobs: None,
        }
    }
}

impl LauncherConfig {
    /// Load configuration from a specific path
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read configuration from {}", path.display()))?;

        Self::parse(&content)
            .with_context(|| format!("Invalid launcher configuration in {}", path.display()))
    }

    /// Parse configuration from TOML string
    pub fn parse(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).context("Failed to parse launcher config")?;
        validate_config(&config)?;
        Ok(config)
    }

    /// Resolve relative paths against the project root
    ///
    /// A bare program name for `cmake` is left alone so it is looked up on
    /// PATH.
    pub fn resolve(mut self, project_root: &Path) -> Self {
        self.source_dir = project_root.join(&self.source_dir);
        self.build_dir = project_root.join(&self.build_dir);
        self.executable = project_root.join(&self.executable);
        if self.cmake.components().count() > 1 {
            self.cmake = project_root.join(&self.cmake);
        }
        self
    }
}
