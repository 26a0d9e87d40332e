//! Build orchestration
//!
//! Mode selection and the CMake invocations each mode needs.

pub mod cmake;
pub mod mode;
