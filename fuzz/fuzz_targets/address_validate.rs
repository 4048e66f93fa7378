//! Fuzz target for the address validator.
//!
//! Anything accepted must render back to exactly the input.
//!
//! # Running
//!
//! ```bash
//! cargo +nightly fuzz run address_validate
//! ```

#![no_main]

use libfuzzer_sys::fuzz_target;
use safe_cli_core::address;

fuzz_target!(|data: &[u8]| {
    let Ok(candidate) = std::str::from_utf8(data) else {
        return;
    };

    if let Ok(parsed) = address::validate(candidate) {
        assert_eq!(parsed.to_checksum(None), candidate);
    }
});
