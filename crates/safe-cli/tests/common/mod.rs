//! Shared fixtures for the console integration tests.

use std::path::PathBuf;

use safe_cli::Shell;
use safe_cli_command::default_registry;
use safe_cli_core::{Config, ConfigLoader};
use safe_cli_operator::OfflineOperator;
use tempfile::TempDir;

pub const SAFE: &str = "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed";
pub const OWNER_KEY: &str = "fad9c8855b740a0b7ed4c221dbad0f33a83a49cad6b3fe8d5817ac83d38b6a19";
pub const OWNER: &str = "0x96216849c49358B10257cb55b28eA603c874b05E";

/// A Safe on rinkeby owned by [`OWNER`] alone, holding 5 wei.
pub const RINKEBY_CONFIG: &str = r#"
[network]
chain_id = 4
node_url = "http://localhost:8545"

[shell]
history_file = "history"

[safe]
owners = ["0x96216849c49358B10257cb55b28eA603c874b05E"]
threshold = 1
nonce = 7
balance = "5"
"#;

/// A config directory holding `config.toml` with `contents`.
pub struct ConfigDir {
    pub dir: TempDir,
}

impl ConfigDir {
    pub fn with(contents: &str) -> Self {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("config.toml"), contents).unwrap();
        Self { dir }
    }

    pub fn path(&self) -> PathBuf {
        self.dir.path().join("config.toml")
    }

    pub fn load(&self) -> Config {
        ConfigLoader::load_file(&self.path()).unwrap()
    }
}

pub fn shell_for(config: &Config) -> Shell<OfflineOperator<Vec<u8>>> {
    let safe = safe_cli_core::validate(SAFE).unwrap();
    Shell::new(
        default_registry(),
        OfflineOperator::new(safe, config, Vec::new()),
        safe,
    )
}

pub fn output(shell: &Shell<OfflineOperator<Vec<u8>>>) -> String {
    String::from_utf8_lossy(shell.operator().output()).into_owned()
}
