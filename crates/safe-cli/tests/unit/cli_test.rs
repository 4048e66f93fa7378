//! Argument parsing as the binary sees it.

use clap::Parser;
use safe_cli::cli::Cli;

use crate::common::{ConfigDir, RINKEBY_CONFIG, SAFE};

#[test]
fn test_config_flag_points_at_loadable_file() {
    let config_dir = ConfigDir::with(RINKEBY_CONFIG);
    let path = config_dir.path();

    let cli = Cli::try_parse_from(["safe-cli", SAFE, "-c", path.to_str().unwrap()]).unwrap();

    assert_eq!(cli.config.as_deref(), Some(path.as_path()));
    assert_eq!(config_dir.load().network.chain_id, 4);
}

#[test]
fn test_repeated_verbose_flags_count() {
    let cli = Cli::try_parse_from(["safe-cli", "-vvv", SAFE]).unwrap();
    assert_eq!(cli.verbose, 3);
}

#[test]
fn test_malformed_addresses_are_rejected() {
    for candidate in [
        "notanaddress",
        "5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed",
        "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAe",
        "0x5AAEB6053F3E94C9B9A09F33669435E7EF1BEAED",
    ] {
        assert!(
            Cli::try_parse_from(["safe-cli", candidate]).is_err(),
            "{candidate}"
        );
    }
}
