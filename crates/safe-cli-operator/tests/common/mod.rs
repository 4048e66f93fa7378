//! Shared fixtures for the operator integration tests.

use safe_cli_command::{default_registry, ClassifiedMessage, CommandRegistry, ResolveError};
use safe_cli_core::{Address, Config, SafeSnapshot, UnclassifiedError, U256};
use safe_cli_operator::{Account, OfflineOperator};

/// Private key of the first owner.
pub const OWNER_KEY: &str = "0xfad9c8855b740a0b7ed4c221dbad0f33a83a49cad6b3fe8d5817ac83d38b6a19";

/// Address derived from [`OWNER_KEY`].
pub const OWNER: &str = "0x96216849c49358B10257cb55b28eA603c874b05E";

/// A second owner whose key is never loaded.
pub const COSIGNER: &str = "0x52908400098527886E0F7030069857D2E4169EE7";

/// Address of the Safe under test.
pub const SAFE: &str = "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed";

#[derive(Debug)]
pub enum Outcome {
    Dispatched,
    Rejected(ResolveError),
    Failed(UnclassifiedError),
}

pub fn address(text: &str) -> Address {
    safe_cli_core::validate(text).unwrap()
}

/// Two owners, threshold 1, 2 ether on mainnet.
pub fn snapshot() -> SafeSnapshot {
    SafeSnapshot {
        owners: vec![address(OWNER), address(COSIGNER)],
        threshold: 1,
        balance: U256::from(2_000_000_000_000_000_000u128),
        ..SafeSnapshot::default()
    }
}

pub struct Session {
    pub registry: CommandRegistry,
    pub operator: OfflineOperator<Vec<u8>>,
    pub messages: Vec<ClassifiedMessage>,
}

impl Session {
    pub fn with_config(config: &Config) -> Self {
        Self {
            registry: default_registry(),
            operator: OfflineOperator::new(address(SAFE), config, Vec::new()),
            messages: Vec::new(),
        }
    }

    pub fn new() -> Self {
        Self::with_config(&Config::builder().safe(snapshot()).build())
    }

    /// A session with the first owner's key already loaded.
    pub fn signed_in() -> Self {
        let mut session = Self::new();
        let outcome = session.run(&format!("load_cli_owners {OWNER_KEY}"));
        assert!(matches!(outcome, Outcome::Dispatched));
        session
    }

    pub fn run(&mut self, line: &str) -> Outcome {
        match self.registry.resolve(line) {
            Ok(parsed) => match parsed.invoke(&mut self.operator, &mut self.messages) {
                Ok(()) => Outcome::Dispatched,
                Err(error) => Outcome::Failed(error),
            },
            Err(error) => Outcome::Rejected(error),
        }
    }

    pub fn output(&self) -> String {
        String::from_utf8_lossy(self.operator.output()).into_owned()
    }

    pub fn texts(&self) -> Vec<&str> {
        self.messages.iter().map(ClassifiedMessage::text).collect()
    }
}

/// Address of an account built from a fixed key byte.
pub fn account_address(byte: u8) -> Address {
    Account::from_bytes([byte; 32]).unwrap().address()
}
