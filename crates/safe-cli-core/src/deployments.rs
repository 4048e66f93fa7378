//! Well-known Safe contract deployments.
//!
//! Addresses are identical on every network the Safe contracts are deployed to.

use alloy_primitives::{address, Address};

/// Latest master copy the console upgrades to (v1.1.1).
pub const LAST_SAFE_CONTRACT: Address = address!("34CfAC646f301356fAa8B21e94227e3583Fe3F5F");

/// Version string of [`LAST_SAFE_CONTRACT`].
pub const LAST_SAFE_VERSION: &str = "1.1.1";

/// Default fallback handler installed by `update`.
pub const LAST_DEFAULT_CALLBACK_HANDLER: Address =
    address!("d5D82B6aDDc9027B22dCA772Aa68D5d74cdBdF44");

/// Multisend contract used to batch the `update` calls.
pub const LAST_MULTISEND_CONTRACT: Address = address!("A238CBeb142c10Ef7Ad8442C6D1f9E89e07e7761");

/// First version with fallback handler support.
pub const FALLBACK_HANDLER_MIN_VERSION: &str = "1.1.0";

/// Master copies the console accepts, with their versions.
pub const KNOWN_MASTER_COPIES: [(Address, &str); 5] = [
    (address!("b6029EA3B2c51D09a50B53CA8012FeEB05bDa35A"), "1.0.0"),
    (LAST_SAFE_CONTRACT, "1.1.1"),
    (address!("6851D6fDFAfD08c0295C392436245E5bc78B0185"), "1.2.0"),
    (address!("d9Db270c1B5E3Bd161E8c8503c55cEABeE709552"), "1.3.0"),
    (address!("3E5c63644E683549055b9Be8653de26E0B4CD36E"), "1.3.0"),
];

/// Version of a known master copy, if recognized.
#[must_use]
pub fn master_copy_version(master_copy: &Address) -> Option<&'static str> {
    KNOWN_MASTER_COPIES
        .iter()
        .find(|(candidate, _)| candidate == master_copy)
        .map(|(_, version)| *version)
}
