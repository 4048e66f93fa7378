//! Fuzz target for console line resolution.
//!
//! Feeds arbitrary UTF-8 lines to the default registry. Resolution must
//! return an error for bad input, never panic.
//!
//! # Running
//!
//! ```bash
//! cargo +nightly fuzz run command_resolve
//! ```

#![no_main]

use libfuzzer_sys::fuzz_target;
use safe_cli_command::default_registry;

fuzz_target!(|data: &[u8]| {
    let Ok(line) = std::str::from_utf8(data) else {
        return;
    };

    let registry = default_registry();
    if let Ok(parsed) = registry.resolve(line) {
        assert!(registry.supports(parsed.name()));
        assert!(parsed.arguments().len() <= registry.get(parsed.name()).map_or(0, |s| s.arguments().len()));
    }
});
