//! Terminal output utilities

use console::style;

/// Print an error message to stderr
pub fn print_error(message: &str) {
    eprintln!("{}: {}", style("error").red().bold(), message);
}

/// Print a hint below an error, to stderr
pub fn print_hint(message: &str) {
    eprintln!("{}: {}", style("hint").yellow().bold(), message);
}

/// Print an info message
pub fn print_info(message: &str) {
    println!("{}: {}", style("info").blue().bold(), message);
}

/// Print a verbose trace line to stderr
pub fn print_verbose(message: &str) {
    eprintln!("{}", style(message).dim());
}

/// Enable or disable colored output on both streams
pub fn set_colors(enabled: bool) {
    console::set_colors_enabled(enabled);
    console::set_colors_enabled_stderr(enabled);
}
