//! Build launcher - configure, build and run a CMake project
//!
//! ```text
//! build --debug | --release | --clean
//!   → cmake -S . -B build-debug → cmake --build build-debug → ./build-debug/Project/Project
//! ```

mod build;
mod cli;
mod commands;
mod config;
mod error;
mod exec;
mod utils;

use std::process::ExitCode;

use clap::Parser;

use cli::Cli;
use error::LaunchError;
use utils::terminal;

fn main() -> ExitCode {
    let cli = Cli::parse();

    match cli.execute() {
        Ok(code) => error::to_exit_code(code),
        Err(err) => {
            terminal::print_error(&format!("{:#}", err));
            if let Some(hint) = err.downcast_ref::<LaunchError>().and_then(LaunchError::hint) {
                terminal::print_hint(hint);
            }
            ExitCode::FAILURE
        }
    }
}
