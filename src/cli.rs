//! CLI argument parsing using clap derive macros

use anyhow::Result;
use clap::Parser;

use crate::commands::launch::LaunchCommand;
use crate::utils::terminal;

/// Build the CMake project and run it
///
/// Configures and builds with CMake for the given mode, then runs the built
/// executable.
#[derive(Parser, Debug)]
#[command(name = "build")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    #[command(flatten)]
    pub launch: LaunchCommand,
}

impl Cli {
    /// Execute the CLI command, returning the exit code to report
    pub fn execute(self) -> Result<i32> {
        // Set up terminal colors
        if self.no_color {
            terminal::set_colors(false);
        }

        self.launch.execute(self.verbose)
    }
}
