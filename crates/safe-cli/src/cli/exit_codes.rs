//! Exit code constants for the console binary.

/// The console was closed normally.
pub const EXIT_SUCCESS: i32 = 0;

/// Startup failed (configuration, logging, terminal).
pub const EXIT_ERROR: i32 = 2;
