//! End-to-end tests: a line goes in, operator calls and messages come out.

pub mod dispatch_test;
pub mod property_test;
