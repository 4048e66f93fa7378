//! # Test Utilities
//!
//! - [`StubOperator`] - Records every operator call and injects failures
//! - [`Console`] - Registry, stub operator and message sink in one place
//! - [`checksummed_address`] - Proptest strategy for valid addresses

#![allow(dead_code)]

use std::collections::VecDeque;

use alloy_primitives::Address;
use proptest::prelude::*;
use safe_cli_command::{default_registry, ClassifiedMessage, CommandRegistry, ResolveError};
use safe_cli_core::operator::OperatorResult;
use safe_cli_core::{Integer, OperatorError, SafeOperator, UnclassifiedError};

/// A checksummed owner address.
pub const OWNER: &str = "0x52908400098527886E0F7030069857D2E4169EE7";

/// A second checksummed address, used as a token contract.
pub const TOKEN: &str = "0x8617E340B3D01FA5F11F306F4090FD50E238070D";

/// One recorded operator call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Call {
    pub method: &'static str,
    pub args: Vec<String>,
}

/// Operator double: records calls, fails them from a queue of preset errors.
#[derive(Debug, Default)]
pub struct StubOperator {
    pub calls: Vec<Call>,
    failures: VecDeque<OperatorError>,
}

impl StubOperator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fail the next call with `error`.
    pub fn fail_next(&mut self, error: impl Into<OperatorError>) -> &mut Self {
        self.failures.push_back(error.into());
        self
    }

    /// How many times `method` was called.
    pub fn count(&self, method: &str) -> usize {
        self.calls.iter().filter(|call| call.method == method).count()
    }

    fn record(&mut self, method: &'static str, args: Vec<String>) -> OperatorResult {
        self.calls.push(Call { method, args });
        self.failures.pop_front().map_or(Ok(()), Err)
    }
}

impl SafeOperator for StubOperator {
    fn show_cli_owners(&mut self) -> OperatorResult {
        self.record("show_cli_owners", vec![])
    }

    fn load_cli_owners(&mut self, keys: &[String]) -> OperatorResult {
        self.record("load_cli_owners", keys.to_vec())
    }

    fn unload_cli_owners(&mut self, addresses: &[Address]) -> OperatorResult {
        self.record(
            "unload_cli_owners",
            addresses.iter().map(ToString::to_string).collect(),
        )
    }

    fn add_owner(&mut self, address: Address) -> OperatorResult {
        self.record("add_owner", vec![address.to_string()])
    }

    fn remove_owner(&mut self, address: Address) -> OperatorResult {
        self.record("remove_owner", vec![address.to_string()])
    }

    fn change_fallback_handler(&mut self, address: Address) -> OperatorResult {
        self.record("change_fallback_handler", vec![address.to_string()])
    }

    fn change_master_copy(&mut self, address: Address) -> OperatorResult {
        self.record("change_master_copy", vec![address.to_string()])
    }

    fn change_threshold(&mut self, threshold: Integer) -> OperatorResult {
        self.record("change_threshold", vec![threshold.to_string()])
    }

    fn send_ether(&mut self, to: Address, value: Integer) -> OperatorResult {
        self.record("send_ether", vec![to.to_string(), value.to_string()])
    }

    fn send_erc20(&mut self, to: Address, token: Address, value: Integer) -> OperatorResult {
        self.record(
            "send_erc20",
            vec![to.to_string(), token.to_string(), value.to_string()],
        )
    }

    fn send_erc721(&mut self, to: Address, token: Address, token_id: Integer) -> OperatorResult {
        self.record(
            "send_erc721",
            vec![to.to_string(), token.to_string(), token_id.to_string()],
        )
    }

    fn get_threshold(&mut self) -> OperatorResult {
        self.record("get_threshold", vec![])
    }

    fn get_nonce(&mut self) -> OperatorResult {
        self.record("get_nonce", vec![])
    }

    fn get_owners(&mut self) -> OperatorResult {
        self.record("get_owners", vec![])
    }

    fn enable_module(&mut self, address: Address) -> OperatorResult {
        self.record("enable_module", vec![address.to_string()])
    }

    fn disable_module(&mut self, address: Address) -> OperatorResult {
        self.record("disable_module", vec![address.to_string()])
    }

    fn update(&mut self) -> OperatorResult {
        self.record("update", vec![])
    }

    fn info(&mut self) -> OperatorResult {
        self.record("info", vec![])
    }

    fn refresh(&mut self) -> OperatorResult {
        self.record("refresh", vec![])
    }

    fn balances(&mut self) -> OperatorResult {
        self.record("balances", vec![])
    }

    fn history(&mut self) -> OperatorResult {
        self.record("history", vec![])
    }
}

/// What happened to one line.
#[derive(Debug)]
pub enum Outcome {
    /// The handler ran; classified messages (if any) are on the sink.
    Dispatched,
    /// Resolution failed; nothing ran.
    Rejected(ResolveError),
    /// The handler failed outside the classified set.
    Failed(UnclassifiedError),
}

/// A registry wired to a stub operator and a message buffer.
pub struct Console {
    pub registry: CommandRegistry,
    pub operator: StubOperator,
    pub messages: Vec<ClassifiedMessage>,
}

impl Console {
    pub fn new() -> Self {
        Self {
            registry: default_registry(),
            operator: StubOperator::new(),
            messages: Vec::new(),
        }
    }

    /// Resolve and dispatch one line.
    pub fn run(&mut self, line: &str) -> Outcome {
        match self.registry.resolve(line) {
            Ok(parsed) => match parsed.invoke(&mut self.operator, &mut self.messages) {
                Ok(()) => Outcome::Dispatched,
                Err(error) => Outcome::Failed(error),
            },
            Err(error) => Outcome::Rejected(error),
        }
    }
}

/// Random 20 bytes, rendered with EIP-55 casing.
pub fn checksummed_address() -> impl Strategy<Value = String> {
    any::<[u8; 20]>().prop_map(|bytes| Address::from(bytes).to_checksum(None))
}
