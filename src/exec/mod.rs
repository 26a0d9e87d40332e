//! External command execution

pub mod step;
pub mod subprocess;

pub use step::{Invocation, Step, StepRunner};
pub use subprocess::SubprocessRunner;
