//! The wallet-operator collaborator interface.
//!
//! The console never signs, submits or reads chain state itself. Each console
//! command maps onto one method here, with already-validated arguments. A
//! method either completes (writing whatever output it wants) or fails with an
//! [`OperatorError`].

use alloy_primitives::Address;

use crate::error::OperatorError;
use crate::integer::Integer;

/// Result type for operator calls.
pub type OperatorResult = Result<(), OperatorError>;

/// Operations a Safe wallet operator exposes to the console.
///
/// Integer arguments are passed through exactly as typed by the user; range
/// checks belong to the implementation.
pub trait SafeOperator {
    /// List the accounts loaded into this session.
    fn show_cli_owners(&mut self) -> OperatorResult;

    /// Load accounts from private keys (or names of environment variables holding them).
    fn load_cli_owners(&mut self, keys: &[String]) -> OperatorResult;

    /// Remove loaded accounts.
    fn unload_cli_owners(&mut self, addresses: &[Address]) -> OperatorResult;

    /// Add an owner, keeping the threshold.
    fn add_owner(&mut self, address: Address) -> OperatorResult;

    /// Remove an owner, keeping the threshold.
    fn remove_owner(&mut self, address: Address) -> OperatorResult;

    /// Point the Safe at a new fallback handler.
    fn change_fallback_handler(&mut self, address: Address) -> OperatorResult;

    /// Point the proxy at a new master copy.
    fn change_master_copy(&mut self, address: Address) -> OperatorResult;

    /// Change the signature threshold.
    fn change_threshold(&mut self, threshold: Integer) -> OperatorResult;

    /// Transfer ether from the Safe.
    fn send_ether(&mut self, to: Address, value: Integer) -> OperatorResult;

    /// Transfer ERC-20 tokens from the Safe.
    fn send_erc20(&mut self, to: Address, token: Address, value: Integer) -> OperatorResult;

    /// Transfer an ERC-721 token from the Safe.
    fn send_erc721(&mut self, to: Address, token: Address, token_id: Integer) -> OperatorResult;

    /// Print the current threshold.
    fn get_threshold(&mut self) -> OperatorResult;

    /// Print the current Safe nonce.
    fn get_nonce(&mut self) -> OperatorResult;

    /// Print the current owners.
    fn get_owners(&mut self) -> OperatorResult;

    /// Enable a module.
    fn enable_module(&mut self, address: Address) -> OperatorResult;

    /// Disable a module.
    fn disable_module(&mut self, address: Address) -> OperatorResult;

    /// Upgrade master copy and fallback handler to the latest deployment.
    fn update(&mut self) -> OperatorResult;

    /// Print everything known about the Safe.
    fn info(&mut self) -> OperatorResult;

    /// Reload Safe state from its source.
    fn refresh(&mut self) -> OperatorResult;

    /// Print ether and token balances.
    fn balances(&mut self) -> OperatorResult;

    /// Print the transaction history.
    fn history(&mut self) -> OperatorResult;
}
