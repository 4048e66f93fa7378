//! Console sessions against the offline operator.

use safe_cli_core::{Config, SafeSnapshot};

use crate::common::{account_address, address, snapshot, Outcome, Session, COSIGNER, OWNER, SAFE};

// ----------------------------------------------------------------------------
// Accounts
// ----------------------------------------------------------------------------

#[test]
fn test_loading_a_key_sets_default_sender() {
    let session = Session::signed_in();

    assert_eq!(session.operator.default_sender(), Some(address(OWNER)));
    assert!(session.output().contains(&format!("Loaded account {OWNER}")));
    assert!(session.messages.is_empty());
}

#[test]
fn test_show_and_unload_accounts() {
    let mut session = Session::signed_in();

    session.run("show_cli_owners");
    assert!(session.output().contains(&format!("Account {OWNER} loaded")));

    session.run(&format!("unload_cli_owners {OWNER}"));
    assert!(session.output().contains("Accounts have been deleted"));
    assert_eq!(session.operator.default_sender(), None);
}

// ----------------------------------------------------------------------------
// Transactions
// ----------------------------------------------------------------------------

#[test]
fn test_owner_management_session() {
    let mut session = Session::signed_in();
    let newcomer = account_address(0x22).to_checksum(None);

    assert!(matches!(
        session.run(&format!("add_owner {newcomer}")),
        Outcome::Dispatched
    ));
    session.run(&format!("remove_owner {newcomer}"));
    session.run("change_threshold 2");

    assert!(session.messages.is_empty(), "{:?}", session.texts());
    let snapshot = session.operator.snapshot();
    assert_eq!(snapshot.owners, vec![address(OWNER), address(COSIGNER)]);
    assert_eq!(snapshot.threshold, 2);
    assert_eq!(snapshot.nonce, 3);
}

#[test]
fn test_transaction_without_sender_is_reported() {
    let mut session = Session::new();

    session.run(&format!("add_owner {}", account_address(0x33).to_checksum(None)));

    assert_eq!(session.texts(), vec!["Please load a default sender"]);
    assert_eq!(session.operator.snapshot().nonce, 0);
}

#[test]
fn test_sender_check_precedes_notices() {
    let mut session = Session::new();

    session.run("change_threshold 1");
    session.run(&format!("disable_module {COSIGNER}"));

    assert_eq!(
        session.texts(),
        vec!["Please load a default sender", "Please load a default sender"]
    );
    assert!(session.output().is_empty());
}

#[test]
fn test_missing_signatures_are_reported() {
    let config = Config::builder()
        .safe(SafeSnapshot {
            threshold: 2,
            ..snapshot()
        })
        .build();
    let mut session = Session::with_config(&config);
    session.run(&format!("load_cli_owners {}", crate::common::OWNER_KEY));

    session.run("change_threshold 1");

    assert_eq!(
        session.texts(),
        vec!["Cannot find enough owners to sign. 1 missing"]
    );
}

#[test]
fn test_precondition_failures_are_translated() {
    let mut session = Session::signed_in();

    session.run(&format!("add_owner {COSIGNER}"));
    session.run("change_threshold 5");
    session.run("update");
    session.run(&format!("send_ether {COSIGNER} 3000000000000000000"));

    assert_eq!(
        session.texts(),
        vec![
            format!("Owner {COSIGNER} is already an owner of the Safe").as_str(),
            "Having less owners than threshold is not allowed",
            "Safe is already updated",
            "Cannot find enough to send. Current balance is 2000000000000000000",
        ]
    );
}

#[test]
fn test_negative_amount_propagates_unclassified() {
    let mut session = Session::signed_in();

    match session.run(&format!("send_ether {COSIGNER} -5")) {
        Outcome::Failed(err) => assert!(err.to_string().contains("must not be negative")),
        other => panic!("expected an unclassified failure, got {other:?}"),
    }
    assert!(session.messages.is_empty());
}

// ----------------------------------------------------------------------------
// Reads
// ----------------------------------------------------------------------------

#[test]
fn test_info_lists_safe_and_services() {
    let mut session = Session::new();

    session.run("info");

    let out = session.output();
    assert!(out.contains(&format!("Address={SAFE}")));
    assert!(out.contains("Threshold=1"));
    assert!(out.contains("Balance_ether=2.000000000000000000"));
    assert!(out.contains("Safe Relay Service="));
}

#[test]
fn test_history_on_chain_without_tx_service() {
    let config = Config::builder().chain_id(42).safe(snapshot()).build();
    let mut session = Session::with_config(&config);

    session.run("history");

    assert_eq!(
        session.texts(),
        vec!["No tx service available for network=kovan"]
    );
    assert!(session.output().contains("Try Etherscan instead"));
}

#[test]
fn test_refresh_restores_configured_snapshot() {
    let mut session = Session::signed_in();
    session.run("change_threshold 2");

    session.run("refresh");

    assert_eq!(session.operator.snapshot().threshold, 1);
    assert!(session.output().contains("Reloading Safe information"));
}
