//! A wallet operator that dry-runs every command against a snapshot.
//!
//! [`OfflineOperator`] keeps the session state a live operator would (loaded
//! accounts, default sender, wallet owners and settings) but never signs or
//! submits anything. Transactional commands check their preconditions, pass
//! the signing gate, print a dry-run line and apply the change to the
//! in-memory snapshot.
//!
//! # Signing gate
//!
//! 1. A default sender must be loaded, otherwise [`SafeError::MissingSender`].
//!    `change_threshold`, `enable_module` and `disable_module` check this
//!    before anything else, so a missing sender wins over their notices.
//! 2. At least `threshold` loaded accounts must be owners, otherwise
//!    [`SafeError::InsufficientSignatures`] with the shortfall.

use std::fmt;
use std::io::Write;

use alloy_primitives::utils::format_ether;
use alloy_primitives::{Address, U256};
use safe_cli_core::deployments::{
    master_copy_version, FALLBACK_HANDLER_MIN_VERSION, LAST_DEFAULT_CALLBACK_HANDLER,
    LAST_MULTISEND_CONTRACT, LAST_SAFE_CONTRACT, LAST_SAFE_VERSION,
};
use safe_cli_core::{
    redact_sensitive, Config, Integer, OperatorError, OperatorResult, SafeError, SafeOperator,
    SafeSnapshot, SafeVersion,
};

use zeroize::Zeroize;

use crate::account::Account;
use crate::networks::Network;

/// A transaction accepted by the signing gate during this session.
#[derive(Debug, Clone, PartialEq, Eq)]
struct DryRun {
    nonce: u64,
    description: String,
}

/// Dry-run operator over an in-memory wallet snapshot.
///
/// Output goes to `W`, typically stdout in the console and a `Vec<u8>` in tests.
pub struct OfflineOperator<W: Write> {
    address: Address,
    node_url: String,
    network: Network,
    configured: SafeSnapshot,
    safe: SafeSnapshot,
    accounts: Vec<Account>,
    default_sender: Option<Address>,
    executed: Vec<DryRun>,
    out: W,
}

impl<W: Write> OfflineOperator<W> {
    /// Create an operator for `address`, starting from the configured snapshot.
    pub fn new(address: Address, config: &Config, out: W) -> Self {
        let mut configured = config.safe.clone();
        configured.address = Some(address);

        Self {
            address,
            node_url: config.network.node_url.clone(),
            network: Network::from_chain_id(config.network.chain_id),
            safe: configured.clone(),
            configured,
            accounts: Vec::new(),
            default_sender: None,
            executed: Vec::new(),
            out,
        }
    }

    /// The Safe address.
    #[must_use]
    pub const fn address(&self) -> Address {
        self.address
    }

    /// The current snapshot, including dry-run changes.
    #[must_use]
    pub const fn snapshot(&self) -> &SafeSnapshot {
        &self.safe
    }

    /// The network the operator reports URLs for.
    #[must_use]
    pub const fn network(&self) -> &Network {
        &self.network
    }

    /// Addresses of the loaded accounts, in load order.
    #[must_use]
    pub fn loaded_accounts(&self) -> Vec<Address> {
        self.accounts.iter().map(Account::address).collect()
    }

    /// The default sender, if one is loaded.
    #[must_use]
    pub const fn default_sender(&self) -> Option<Address> {
        self.default_sender
    }

    /// Borrow the output writer.
    #[must_use]
    pub const fn output(&self) -> &W {
        &self.out
    }

    /// Consume the operator, returning the output writer.
    pub fn into_output(self) -> W {
        self.out
    }

    fn line(&mut self, text: impl fmt::Display) -> OperatorResult {
        writeln!(self.out, "{text}").map_err(OperatorError::unclassified)
    }

    fn owner_count(&self) -> u64 {
        self.safe.owners.len() as u64
    }

    fn version(&self) -> Result<SafeVersion, OperatorError> {
        self.safe
            .parsed_version()
            .map_err(OperatorError::unclassified)
    }

    fn is_updated(&self) -> Result<bool, OperatorError> {
        if self.safe.master_copy == LAST_SAFE_CONTRACT {
            return Ok(true);
        }
        Ok(self.version()? >= parse_version(LAST_SAFE_VERSION)?)
    }

    fn require_sender(&self) -> Result<Address, SafeError> {
        self.default_sender.ok_or(SafeError::MissingSender)
    }

    /// Signing gate, then record the dry run and bump the nonce.
    fn execute(&mut self, description: String) -> OperatorResult {
        let sender = self.require_sender()?;

        let signers = self
            .accounts
            .iter()
            .filter(|account| self.safe.is_owner(&account.address()))
            .count() as u64;
        if signers < self.safe.threshold {
            return Err(SafeError::insufficient_signatures(self.safe.threshold - signers).into());
        }

        let nonce = self.safe.nonce;
        self.line(format_args!(
            "Dry run: {description} (sender={sender}, safe-nonce={nonce})"
        ))?;
        tracing::info!(safe = %self.address, nonce, %description, "dry-run transaction");

        self.executed.push(DryRun { nonce, description });
        self.safe.nonce += 1;
        Ok(())
    }
}

fn parse_version(version: &str) -> Result<SafeVersion, OperatorError> {
    version.parse().map_err(OperatorError::unclassified)
}

fn amount(value: Integer) -> Result<U256, OperatorError> {
    value
        .to_unsigned()
        .ok_or_else(|| OperatorError::unclassified(format!("amount must not be negative: {value}")))
}

fn address_list(addresses: &[Address]) -> String {
    let joined: Vec<String> = addresses.iter().map(ToString::to_string).collect();
    format!("[{}]", joined.join(", "))
}

impl<W: Write> SafeOperator for OfflineOperator<W> {
    fn show_cli_owners(&mut self) -> OperatorResult {
        if self.accounts.is_empty() {
            return self.line("No accounts loaded");
        }

        for address in self.loaded_accounts() {
            self.line(format_args!("Account {address} loaded"))?;
        }
        match self.default_sender {
            Some(sender) => self.line(format_args!("Default sender: {sender}")),
            None => self.line("No default sender set"),
        }
    }

    fn load_cli_owners(&mut self, keys: &[String]) -> OperatorResult {
        for key in keys {
            let mut secret = std::env::var(key).unwrap_or_else(|_| key.clone());
            let loaded = Account::from_hex(&secret);
            secret.zeroize();

            let account = match loaded {
                Ok(account) => account,
                Err(error) => {
                    let redacted = redact_sensitive(key);
                    tracing::warn!(key = %redacted, %error, "cannot load key");
                    self.line(format_args!("Cannot load key={redacted}"))?;
                    continue;
                }
            };

            let address = account.address();
            if self.accounts.contains(&account) {
                self.line(format_args!("Account {address} is already loaded"))?;
                continue;
            }

            self.accounts.push(account);
            tracing::info!(%address, "account loaded");
            self.line(format_args!("Loaded account {address}"))?;

            if self.default_sender.is_none() {
                self.default_sender = Some(address);
                self.line(format_args!("Set account {address} as default sender of txs"))?;
            }
        }
        Ok(())
    }

    fn unload_cli_owners(&mut self, addresses: &[Address]) -> OperatorResult {
        let before = self.accounts.len();
        self.accounts
            .retain(|account| !addresses.contains(&account.address()));

        if self
            .default_sender
            .is_some_and(|sender| addresses.contains(&sender))
        {
            self.default_sender = None;
        }

        if self.accounts.len() < before {
            self.line("Accounts have been deleted")
        } else {
            self.line("No account was deleted")
        }
    }

    fn add_owner(&mut self, address: Address) -> OperatorResult {
        if self.safe.is_owner(&address) {
            return Err(SafeError::owner_already_present(address).into());
        }

        let threshold = self.safe.threshold;
        self.execute(format!("addOwnerWithThreshold({address}, {threshold})"))?;
        self.safe.owners.push(address);
        Ok(())
    }

    fn remove_owner(&mut self, address: Address) -> OperatorResult {
        if !self.safe.is_owner(&address) {
            return Err(SafeError::owner_not_present(address).into());
        }
        if self.owner_count() == self.safe.threshold {
            return Err(SafeError::ThresholdBelowOwnerFloor.into());
        }

        let threshold = self.safe.threshold;
        self.execute(format!("removeOwner({address}, {threshold})"))?;
        self.safe.owners.retain(|owner| *owner != address);
        Ok(())
    }

    fn change_fallback_handler(&mut self, address: Address) -> OperatorResult {
        if address == self.safe.fallback_handler {
            return Err(SafeError::fallback_handler_unchanged(address).into());
        }
        if self.version()? < parse_version(FALLBACK_HANDLER_MIN_VERSION)? {
            return Err(SafeError::FallbackHandlerUnsupported.into());
        }

        self.execute(format!("setFallbackHandler({address})"))?;
        self.safe.fallback_handler = address;
        Ok(())
    }

    fn change_master_copy(&mut self, address: Address) -> OperatorResult {
        if address == self.safe.master_copy {
            return Err(SafeError::master_copy_unchanged(address).into());
        }
        let version = master_copy_version(&address).ok_or(SafeError::master_copy_invalid(address))?;

        self.execute(format!("changeMasterCopy({address})"))?;
        self.safe.master_copy = address;
        self.safe.version = version.to_string();
        Ok(())
    }

    fn change_threshold(&mut self, threshold: Integer) -> OperatorResult {
        self.require_sender()?;
        if threshold == Integer::from(self.safe.threshold) {
            return self.line(format_args!("Threshold is already {threshold}"));
        }

        let owners = self.owner_count();
        let threshold = threshold
            .to_u64()
            .filter(|value| (1..=owners).contains(value))
            .ok_or(SafeError::ThresholdBelowOwnerFloor)?;

        self.execute(format!("changeThreshold({threshold})"))?;
        self.safe.threshold = threshold;
        Ok(())
    }

    fn send_ether(&mut self, to: Address, value: Integer) -> OperatorResult {
        let value = amount(value)?;
        let balance = self.safe.balance;
        if value > balance {
            return Err(SafeError::insufficient_balance(balance).into());
        }

        self.execute(format!("send {value} wei to {to}"))?;
        self.safe.balance = balance - value;
        Ok(())
    }

    fn send_erc20(&mut self, to: Address, token: Address, value: Integer) -> OperatorResult {
        let value = amount(value)?;
        let balance = self.safe.token_balance(&token);
        if value > balance {
            return Err(SafeError::insufficient_balance(balance).into());
        }

        self.execute(format!("transfer({to}, {value}) on ERC-20 {token}"))?;
        self.safe.token_balances.insert(token, balance - value);
        Ok(())
    }

    fn send_erc721(&mut self, to: Address, token: Address, token_id: Integer) -> OperatorResult {
        let token_id = amount(token_id)?;
        let from = self.address;
        self.execute(format!(
            "transferFrom({from}, {to}, {token_id}) on ERC-721 {token}"
        ))
    }

    fn get_threshold(&mut self) -> OperatorResult {
        let threshold = self.safe.threshold;
        self.line(threshold)
    }

    fn get_nonce(&mut self) -> OperatorResult {
        let nonce = self.safe.nonce;
        self.line(nonce)
    }

    fn get_owners(&mut self) -> OperatorResult {
        let owners = address_list(&self.safe.owners);
        self.line(owners)
    }

    fn enable_module(&mut self, address: Address) -> OperatorResult {
        self.require_sender()?;
        if self.safe.modules.contains(&address) {
            return self.line(format_args!("Module {address} is already enabled"));
        }

        self.execute(format!("enableModule({address})"))?;
        self.safe.modules.push(address);
        Ok(())
    }

    fn disable_module(&mut self, address: Address) -> OperatorResult {
        self.require_sender()?;
        if !self.safe.modules.contains(&address) {
            return self.line(format_args!("Module {address} is not enabled"));
        }

        self.execute(format!("disableModule({address})"))?;
        self.safe.modules.retain(|module| *module != address);
        Ok(())
    }

    fn update(&mut self) -> OperatorResult {
        if self.is_updated()? {
            return Err(SafeError::AlreadyAtLatestVersion.into());
        }

        self.execute(format!(
            "multiSend({LAST_MULTISEND_CONTRACT}): changeMasterCopy({LAST_SAFE_CONTRACT}), \
             setFallbackHandler({LAST_DEFAULT_CALLBACK_HANDLER})"
        ))?;
        self.safe.master_copy = LAST_SAFE_CONTRACT;
        self.safe.fallback_handler = LAST_DEFAULT_CALLBACK_HANDLER;
        self.safe.version = LAST_SAFE_VERSION.to_string();
        Ok(())
    }

    fn info(&mut self) -> OperatorResult {
        let safe = self.safe.clone();
        let network = self.network;
        let address = self.address;

        self.line(format_args!("Address={address}"))?;
        self.line(format_args!("Nonce={}", safe.nonce))?;
        self.line(format_args!("Threshold={}", safe.threshold))?;
        self.line(format_args!("Owners={}", address_list(&safe.owners)))?;
        self.line(format_args!("Master_copy={}", safe.master_copy))?;
        self.line(format_args!("Modules={}", address_list(&safe.modules)))?;
        self.line(format_args!("Fallback_handler={}", safe.fallback_handler))?;
        self.line(format_args!("Balance_ether={}", format_ether(safe.balance)))?;
        self.line(format_args!("Version={}", safe.version))?;
        let node_url = self.node_url.clone();
        self.line(format_args!("Node_url={node_url}"))?;
        self.line(format_args!("Network={} ({})", network.name, network.chain_id))?;

        if let Some(url) = network.tx_service_url(&address) {
            self.line(format_args!("Safe Tx Service={url}"))?;
        }
        if let Some(url) = network.relay_service_url(&address) {
            self.line(format_args!("Safe Relay Service={url}"))?;
        }
        if let Some(url) = network.etherscan_url(&address) {
            self.line(format_args!("Etherscan={url}"))?;
        }

        if !self.is_updated()? {
            self.line(
                "Safe is not updated! You can use update command to update the Safe to a newest version",
            )?;
        }
        Ok(())
    }

    fn refresh(&mut self) -> OperatorResult {
        self.line("Reloading Safe information")?;
        self.safe = self.configured.clone();
        tracing::debug!(safe = %self.address, "snapshot reloaded");
        Ok(())
    }

    fn balances(&mut self) -> OperatorResult {
        let balance = self.safe.balance;
        self.line(format_args!(
            "ETH balance={} ({balance} wei)",
            format_ether(balance)
        ))?;

        let tokens: Vec<(Address, U256)> = self
            .safe
            .token_balances
            .iter()
            .map(|(token, value)| (*token, *value))
            .collect();
        for (token, value) in tokens {
            self.line(format_args!("Token {token} balance={value}"))?;
        }
        Ok(())
    }

    fn history(&mut self) -> OperatorResult {
        let network = self.network;
        let Some(url) = network.tx_service_url(&self.address) else {
            if let Some(etherscan) = network.etherscan_url(&self.address) {
                self.line(format_args!("Try Etherscan instead {etherscan}"))?;
            }
            return Err(SafeError::generic(format!(
                "No tx service available for network={}",
                network.name
            ))
            .into());
        };

        self.line(url)?;
        if self.executed.is_empty() {
            return self.line("No transactions sent in this session");
        }
        let executed = self.executed.clone();
        for run in executed {
            self.line(format_args!("nonce={} {}", run.nonce, run.description))?;
        }
        Ok(())
    }
}

impl<W: Write> fmt::Debug for OfflineOperator<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OfflineOperator")
            .field("address", &self.address)
            .field("network", &self.network.name)
            .field("accounts", &self.accounts)
            .field("default_sender", &self.default_sender)
            .finish_non_exhaustive()
    }
}
