//! Shell sessions over a snapshot loaded from a config file.

use safe_cli::{Flow, LineError};
use safe_cli_command::ResolveError;

use crate::common::{output, shell_for, ConfigDir, OWNER, OWNER_KEY, RINKEBY_CONFIG, SAFE};

#[test]
fn test_session_from_config_file() {
    let config = ConfigDir::with(RINKEBY_CONFIG).load();
    let mut shell = shell_for(&config);
    let mut messages = Vec::new();

    let lines = [
        "get_nonce".to_string(),
        format!("load_cli_owners {OWNER_KEY}"),
        format!("send_ether {OWNER} 3"),
        "get_nonce".to_string(),
        "history".to_string(),
    ];
    for line in &lines {
        assert_eq!(shell.execute_line(line, &mut messages).unwrap(), Flow::Continue, "{line}");
    }

    let out = output(&shell);
    assert!(messages.is_empty());
    assert!(out.starts_with("7\n"));
    assert!(out.contains(&format!("Loaded account {OWNER}")));
    assert!(out.contains("\n8\n"));
    assert!(out.contains(&format!(
        "https://safe-transaction.rinkeby.gnosis.io/api/v1/safes/{SAFE}/transactions/"
    )));
    assert!(out.contains("nonce=7 send 3 wei"));
}

#[test]
fn test_balance_shortfall_is_a_message_not_an_error() {
    let config = ConfigDir::with(RINKEBY_CONFIG).load();
    let mut shell = shell_for(&config);
    let mut messages = Vec::new();

    shell
        .execute_line(&format!("load_cli_owners {OWNER_KEY}"), &mut messages)
        .unwrap();
    let flow = shell
        .execute_line(&format!("send_ether {OWNER} 6"), &mut messages)
        .unwrap();

    assert_eq!(flow, Flow::Continue);
    assert_eq!(
        messages[0].text(),
        "Cannot find enough to send. Current balance is 5"
    );
}

#[test]
fn test_wrong_arguments_are_resolve_errors() {
    let config = ConfigDir::with(RINKEBY_CONFIG).load();
    let mut shell = shell_for(&config);
    let mut messages = Vec::new();

    let err = shell
        .execute_line(&format!("add_owner {}", OWNER.to_lowercase()), &mut messages)
        .unwrap_err();

    assert!(matches!(err, LineError::Resolve(ResolveError::Format(_))));
    assert!(err.to_string().contains(&OWNER.to_lowercase()));
    assert!(output(&shell).is_empty());
}

#[test]
fn test_invalid_config_is_rejected_on_load() {
    let config_dir = ConfigDir::with("[safe]\nthreshold = 0\n");
    assert!(safe_cli_core::ConfigLoader::load_file(&config_dir.path()).is_err());
}
