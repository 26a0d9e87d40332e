//! Error types and helpers for user-friendly error messages
//!
//! Every failure the launcher can hit carries the exit code it maps to and,
//! where the fix is obvious, a hint for the user.

use std::path::PathBuf;

use thiserror::Error;

use crate::utils::terminal;

/// Exit code used when a failure has no process status of its own
pub const GENERIC_FAILURE: i32 = 1;

/// Failures raised while running launcher steps
#[derive(Error, Debug)]
pub enum LaunchError {
    /// An external command ran and exited unsuccessfully
    #[error("{step} failed with exit code: {}", display_code(.code))]
    StepFailed { step: String, code: Option<i32> },

    /// Tool/executable not found
    #[error("Missing tool: {tool}")]
    MissingTool {
        tool: String,
        required_for: String,
        hint: String,
    },

    /// An external command could not be started
    #[error("Failed to execute {}", .program.display())]
    Spawn {
        program: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The build-output directory could not be removed
    #[error("Failed to remove directory: {}", .path.display())]
    RemoveDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The build-output directory could not be created
    #[error("Failed to create CMake build directory: {}", .path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Launcher configuration errors
    #[error("Configuration error: {message}")]
    Config {
        message: String,
        hint: Option<String>,
    },
}

/// Convert a process exit code to the launcher's own exit status
///
/// Codes outside `0..=255` cannot be reported faithfully and become a
/// generic failure.
pub fn to_exit_code(code: i32) -> std::process::ExitCode {
    std::process::ExitCode::from(exit_status_byte(code))
}

fn exit_status_byte(code: i32) -> u8 {
    u8::try_from(code).unwrap_or(GENERIC_FAILURE as u8)
}

fn display_code(code: &Option<i32>) -> String {
    match code {
        Some(code) => code.to_string(),
        None => "none (terminated by signal)".to_string(),
    }
}

impl LaunchError {
    /// Create a step failure from the step's exit code
    pub fn step_failed(step: impl Into<String>, code: Option<i32>) -> Self {
        Self::StepFailed {
            step: step.into(),
            code,
        }
    }

    /// Create a missing tool error
    pub fn missing_tool(
        tool: impl Into<String>,
        required_for: impl Into<String>,
        hint: impl Into<String>,
    ) -> Self {
        Self::MissingTool {
            tool: tool.into(),
            required_for: required_for.into(),
            hint: hint.into(),
        }
    }

    /// Create a configuration error with a hint
    pub fn config_error_with_hint(message: impl Into<String>, hint: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
            hint: Some(hint.into()),
        }
    }

    /// Process exit code this failure maps to
    ///
    /// A failed step reports its own status; everything else, including a
    /// step killed by a signal, is a generic failure.
    pub fn exit_code(&self) -> i32 {
        match self {
            LaunchError::StepFailed {
                code: Some(code), ..
            } if *code != 0 => *code,
            _ => GENERIC_FAILURE,
        }
    }

    /// Hint to show below the error, if any
    pub fn hint(&self) -> Option<&str> {
        match self {
            LaunchError::MissingTool { hint, .. } => Some(hint),
            LaunchError::Config { hint, .. } => hint.as_deref(),
            _ => None,
        }
    }

    /// Underlying causes, outermost first
    pub fn causes(&self) -> Vec<String> {
        let mut causes = Vec::new();
        let mut source = std::error::Error::source(self);
        while let Some(err) = source {
            causes.push(err.to_string());
            source = err.source();
        }
        causes
    }

    /// Display error with its causes and hint
    pub fn display_with_hints(&self) {
        terminal::print_error(&self.to_string());

        for cause in self.causes() {
            eprintln!("  caused by: {}", cause);
        }

        if let LaunchError::MissingTool { required_for, .. } = self {
            eprintln!("  required for: {}", required_for);
        }

        if let Some(hint) = self.hint() {
            terminal::print_hint(hint);
        }
    }
}

/// Common error hints
pub mod hints {
    /// Get hint for missing CMake
    pub fn cmake() -> &'static str {
        "Install CMake from https://cmake.org/ or use your package manager:\n\
         • macOS: brew install cmake\n\
         • Ubuntu: sudo apt install cmake\n\
         • Windows: winget install Kitware.CMake"
    }

    /// Get hint for an invalid launcher config file
    pub fn invalid_config() -> &'static str {
        "The launcher config is invalid. Common issues:\n\
         • Invalid TOML syntax (check quotes, brackets, commas)\n\
         • Empty path values for build_dir, source_dir or executable\n\
         • jobs = 0"
    }
}
