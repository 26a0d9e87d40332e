//! Build modes selected by the launcher's single mode token

use std::fmt;

use crate::build::cmake::BuildType;

/// Usage line printed when no mode token is supplied
pub const USAGE: &str = "Usage: build [--debug | --release | --clean]";

/// Build mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Configure and build with debug settings
    Debug,
    /// Configure and build with release settings
    Release,
    /// Wipe the build-output directory, reconfigure and build
    Clean,
}

impl Mode {
    /// All modes, in the order they are listed in the usage text
    pub const ALL: [Mode; 3] = [Mode::Debug, Mode::Release, Mode::Clean];

    /// Command-line token for this mode
    pub fn token(self) -> &'static str {
        match self {
            Mode::Debug => "--debug",
            Mode::Release => "--release",
            Mode::Clean => "--clean",
        }
    }

    /// Parse a mode token; tokens are matched exactly
    pub fn from_token(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|mode| mode.token() == token)
    }

    /// Message printed when the mode starts
    pub fn banner(self) -> &'static str {
        match self {
            Mode::Debug => "Building debug...",
            Mode::Release => "Building release...",
            Mode::Clean => "Cleaning build...",
        }
    }

    /// CMake build type used by the configure step
    pub fn build_type(self) -> BuildType {
        match self {
            Mode::Release => BuildType::Release,
            Mode::Debug | Mode::Clean => BuildType::Debug,
        }
    }

    /// Whether the build-output directory is removed before configuring
    pub fn wipes_build_dir(self) -> bool {
        matches!(self, Mode::Clean)
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// What the launcher was asked to do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// No mode token on the command line
    Missing,
    /// A recognized mode
    Mode(Mode),
    /// A token that names no mode
    Unknown(String),
}

impl Selection {
    /// Classify the (optional) mode token
    pub fn from_arg(arg: Option<&str>) -> Self {
        match arg {
            None => Selection::Missing,
            Some(token) => match Mode::from_token(token) {
                Some(mode) => Selection::Mode(mode),
                None => Selection::Unknown(token.to_string()),
            },
        }
    }
}
