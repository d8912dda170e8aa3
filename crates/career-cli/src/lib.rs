//! Library half of the `career-form` command line tool.

pub mod input;
pub mod logging;
pub mod workflow;
