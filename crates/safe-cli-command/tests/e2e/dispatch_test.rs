//! Lines through resolution, translation and the stub operator.

use safe_cli_command::{ArgumentError, ResolveError};
use safe_cli_core::{address, OperatorError, SafeError, U256};

use crate::common::{Call, Console, Outcome, OWNER, TOKEN};

// ----------------------------------------------------------------------------
// Console scenarios
// ----------------------------------------------------------------------------

#[test]
fn test_add_owner_with_valid_address_succeeds_silently() {
    let mut console = Console::new();

    assert!(matches!(
        console.run(&format!("add_owner {OWNER}")),
        Outcome::Dispatched
    ));

    assert!(console.messages.is_empty());
    assert_eq!(
        console.operator.calls,
        vec![Call {
            method: "add_owner",
            args: vec![OWNER.to_string()]
        }]
    );
}

#[test]
fn test_add_owner_with_bad_address_never_dispatches() {
    let mut console = Console::new();

    match console.run("add_owner notanaddress") {
        Outcome::Rejected(ResolveError::Format(err)) => {
            assert_eq!(err.candidate(), "notanaddress");
        }
        other => panic!("expected a format error, got {other:?}"),
    }
    assert_eq!(console.operator.count("add_owner"), 0);
    assert!(console.messages.is_empty());
}

#[test]
fn test_add_owner_with_wrong_checksum_never_dispatches() {
    let mut console = Console::new();
    let lowered = OWNER.to_lowercase();

    assert!(matches!(
        console.run(&format!("add_owner {lowered}")),
        Outcome::Rejected(ResolveError::Format(_))
    ));
    assert!(console.operator.calls.is_empty());
}

#[test]
fn test_change_threshold_floor_violation_is_reported() {
    let mut console = Console::new();
    console
        .operator
        .fail_next(SafeError::ThresholdBelowOwnerFloor);

    assert!(matches!(
        console.run("change_threshold 3"),
        Outcome::Dispatched
    ));

    assert_eq!(console.messages.len(), 1);
    assert_eq!(
        console.messages[0].text(),
        "Having less owners than threshold is not allowed"
    );
    assert_eq!(console.operator.count("change_threshold"), 1);
}

#[test]
fn test_send_ether_insufficient_balance_reports_balance() {
    let mut console = Console::new();
    console
        .operator
        .fail_next(SafeError::insufficient_balance(U256::from(500u64)));

    console.run(&format!("send_ether {OWNER} 1000000"));

    assert_eq!(console.messages.len(), 1);
    assert!(console.messages[0].text().contains("500"));
    assert_eq!(
        console.operator.calls[0].args,
        vec![OWNER.to_string(), "1000000".to_string()]
    );
}

#[test]
fn test_unknown_command_leaves_console_ready() {
    let mut console = Console::new();

    assert!(matches!(
        console.run("bogus_command"),
        Outcome::Rejected(ResolveError::UnknownCommand { ref name }) if name == "bogus_command"
    ));
    assert!(matches!(console.run("get_nonce"), Outcome::Dispatched));
    assert_eq!(console.operator.count("get_nonce"), 1);
}

#[test]
fn test_console_continues_after_classified_failure() {
    let mut console = Console::new();
    console.operator.fail_next(SafeError::MissingSender);

    console.run(&format!("remove_owner {OWNER}"));
    console.run(&format!("remove_owner {OWNER}"));

    assert_eq!(console.operator.count("remove_owner"), 2);
    assert_eq!(console.messages.len(), 1);
}

// ----------------------------------------------------------------------------
// Translation of every classified failure
// ----------------------------------------------------------------------------

#[test]
fn test_each_classified_failure_yields_its_message() {
    let owner = address::validate(OWNER).unwrap();
    let cases = [
        (SafeError::generic("Transaction reverted"), "Transaction reverted".to_string()),
        (
            SafeError::insufficient_signatures(1),
            "Cannot find enough owners to sign. 1 missing".to_string(),
        ),
        (SafeError::MissingSender, "Please load a default sender".to_string()),
        (
            SafeError::owner_already_present(owner),
            format!("Owner {OWNER} is already an owner of the Safe"),
        ),
        (
            SafeError::owner_not_present(owner),
            format!("Owner {OWNER} is not an owner of the Safe"),
        ),
        (
            SafeError::ThresholdBelowOwnerFloor,
            "Having less owners than threshold is not allowed".to_string(),
        ),
        (
            SafeError::fallback_handler_unchanged(owner),
            format!("Fallback handler {OWNER} is the current one"),
        ),
        (
            SafeError::FallbackHandlerUnsupported,
            "Fallback handler is not supported for your Safe, you need to update first"
                .to_string(),
        ),
        (
            SafeError::master_copy_unchanged(owner),
            format!("Master Copy {OWNER} is the current one"),
        ),
        (
            SafeError::master_copy_invalid(owner),
            format!("Master Copy {OWNER} is not valid"),
        ),
        (SafeError::AlreadyAtLatestVersion, "Safe is already updated".to_string()),
        (
            SafeError::insufficient_balance(U256::from(42u64)),
            "Cannot find enough to send. Current balance is 42".to_string(),
        ),
    ];

    for (error, expected) in cases {
        let mut console = Console::new();
        let kind = error.kind_name();
        console.operator.fail_next(error);

        assert!(matches!(console.run("update"), Outcome::Dispatched), "{kind}");

        let texts: Vec<&str> = console.messages.iter().map(|m| m.text()).collect();
        assert_eq!(texts, vec![expected.as_str()], "{kind}");
    }
}

#[test]
fn test_generic_failure_without_details_prints_nothing() {
    let mut console = Console::new();
    console
        .operator
        .fail_next(SafeError::GenericOperatorFailure { message: None });

    assert!(matches!(console.run("info"), Outcome::Dispatched));
    assert!(console.messages.is_empty());
    assert!(matches!(console.run("get_nonce"), Outcome::Dispatched));
}

#[test]
fn test_unclassified_failure_propagates_without_message() {
    let mut console = Console::new();
    console
        .operator
        .fail_next(OperatorError::unclassified("node unreachable"));

    match console.run("balances") {
        Outcome::Failed(err) => assert_eq!(err.to_string(), "node unreachable"),
        other => panic!("expected an unclassified failure, got {other:?}"),
    }
    assert!(console.messages.is_empty());
}

// ----------------------------------------------------------------------------
// Argument shapes
// ----------------------------------------------------------------------------

#[test]
fn test_send_erc20_passes_all_arguments() {
    let mut console = Console::new();

    console.run(&format!("send_erc20 {OWNER} {TOKEN} -1"));

    assert_eq!(
        console.operator.calls,
        vec![Call {
            method: "send_erc20",
            args: vec![OWNER.to_string(), TOKEN.to_string(), "-1".to_string()]
        }]
    );
}

#[test]
fn test_load_cli_owners_passes_raw_tokens() {
    let mut console = Console::new();

    console.run("load_cli_owners MY_KEY 0xabcdef");

    assert_eq!(
        console.operator.calls[0].args,
        vec!["MY_KEY".to_string(), "0xabcdef".to_string()]
    );
}

#[test]
fn test_wrong_arity_never_dispatches() {
    let mut console = Console::new();
    let lines = [
        "add_owner".to_string(),
        format!("add_owner {OWNER} {OWNER}"),
        format!("send_ether {OWNER}"),
        format!("send_erc721 {OWNER} {TOKEN}"),
        "change_threshold".to_string(),
        "get_owners extra".to_string(),
        "unload_cli_owners".to_string(),
        "load_cli_owners".to_string(),
    ];

    for line in &lines {
        assert!(
            matches!(console.run(line), Outcome::Rejected(ResolveError::Argument(_))),
            "{line}"
        );
    }
    assert!(console.operator.calls.is_empty());
}

#[test]
fn test_non_numeric_threshold_is_argument_error() {
    let mut console = Console::new();

    match console.run("change_threshold two") {
        Outcome::Rejected(ResolveError::Argument(err)) => {
            assert_eq!(err, ArgumentError::invalid_integer("threshold", "two"));
        }
        other => panic!("expected an argument error, got {other:?}"),
    }
}

#[test]
fn test_send_erc721_accepts_full_uint256_token_id() {
    let token_id = U256::MAX.to_string();
    let mut console = Console::new();

    let outcome = console.run(&format!("send_erc721 {OWNER} {TOKEN} {token_id}"));

    assert!(matches!(outcome, Outcome::Dispatched), "{outcome:?}");
    assert_eq!(
        console.operator.calls,
        vec![Call {
            method: "send_erc721",
            args: vec![OWNER.to_string(), TOKEN.to_string(), token_id]
        }]
    );
}

#[test]
fn test_token_id_past_uint256_is_argument_error() {
    let token_id = "115792089237316195423570985008687907853269984665640564039457584007913129639936";
    let mut console = Console::new();

    match console.run(&format!("send_erc721 {OWNER} {TOKEN} {token_id}")) {
        Outcome::Rejected(ResolveError::Argument(err)) => {
            assert_eq!(err, ArgumentError::invalid_integer("token_id", token_id));
        }
        other => panic!("expected an argument error, got {other:?}"),
    }
    assert!(console.operator.calls.is_empty());
}
