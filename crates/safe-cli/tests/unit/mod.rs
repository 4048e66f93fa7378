//! Console tests without a terminal.

pub mod cli_test;
pub mod session_test;
