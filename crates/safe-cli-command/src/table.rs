//! The console's command table.
//!
//! One entry per wallet-operator method. Each handler reads its typed
//! arguments by position and makes exactly one operator call.

use crate::registry::{CommandRegistry, CommandSpec};
use crate::value::ArgKind::{EthereumAddress, Integer, RawString};
use crate::value::ArgumentSpec;

/// Every console command, in help order.
#[must_use]
pub fn commands() -> Vec<CommandSpec> {
    let address = || ArgumentSpec::one("address", EthereumAddress);
    let token_address = || ArgumentSpec::one("token_address", EthereumAddress);

    vec![
        // Session accounts
        CommandSpec::new("show_cli_owners", vec![], |operator, _| {
            operator.show_cli_owners()
        })
        .with_summary("List the accounts loaded into this session"),
        CommandSpec::new(
            "load_cli_owners",
            vec![ArgumentSpec::many("keys", RawString)],
            |operator, args| operator.load_cli_owners(&args.raw_list(0)?),
        )
        .with_summary("Load accounts from private keys or environment variables"),
        CommandSpec::new(
            "unload_cli_owners",
            vec![ArgumentSpec::many("addresses", EthereumAddress)],
            |operator, args| operator.unload_cli_owners(&args.addresses(0)?),
        )
        .with_summary("Remove loaded accounts"),
        // Owners and configuration
        CommandSpec::new("add_owner", vec![address()], |operator, args| {
            operator.add_owner(args.address(0)?)
        })
        .with_summary("Add an owner to the Safe"),
        CommandSpec::new("remove_owner", vec![address()], |operator, args| {
            operator.remove_owner(args.address(0)?)
        })
        .with_summary("Remove an owner from the Safe"),
        CommandSpec::new("change_fallback_handler", vec![address()], |operator, args| {
            operator.change_fallback_handler(args.address(0)?)
        })
        .with_summary("Set a new fallback handler"),
        CommandSpec::new("change_master_copy", vec![address()], |operator, args| {
            operator.change_master_copy(args.address(0)?)
        })
        .with_summary("Set a new master copy"),
        CommandSpec::new(
            "change_threshold",
            vec![ArgumentSpec::one("threshold", Integer)],
            |operator, args| operator.change_threshold(args.integer(0)?),
        )
        .with_summary("Change the signature threshold"),
        // Transfers
        CommandSpec::new(
            "send_ether",
            vec![address(), ArgumentSpec::one("value", Integer)],
            |operator, args| operator.send_ether(args.address(0)?, args.integer(1)?),
        )
        .with_summary("Send ether (in wei) from the Safe"),
        CommandSpec::new(
            "send_erc20",
            vec![address(), token_address(), ArgumentSpec::one("value", Integer)],
            |operator, args| {
                operator.send_erc20(args.address(0)?, args.address(1)?, args.integer(2)?)
            },
        )
        .with_summary("Send ERC-20 tokens from the Safe"),
        CommandSpec::new(
            "send_erc721",
            vec![address(), token_address(), ArgumentSpec::one("token_id", Integer)],
            |operator, args| {
                operator.send_erc721(args.address(0)?, args.address(1)?, args.integer(2)?)
            },
        )
        .with_summary("Send an ERC-721 token from the Safe"),
        // Reads
        CommandSpec::new("get_threshold", vec![], |operator, _| operator.get_threshold())
            .with_summary("Show the signature threshold"),
        CommandSpec::new("get_nonce", vec![], |operator, _| operator.get_nonce())
            .with_summary("Show the Safe nonce"),
        CommandSpec::new("get_owners", vec![], |operator, _| operator.get_owners())
            .with_summary("Show the Safe owners"),
        // Modules
        CommandSpec::new("enable_module", vec![address()], |operator, args| {
            operator.enable_module(args.address(0)?)
        })
        .with_summary("Enable a module"),
        CommandSpec::new("disable_module", vec![address()], |operator, args| {
            operator.disable_module(args.address(0)?)
        })
        .with_summary("Disable a module"),
        // Maintenance
        CommandSpec::new("update", vec![], |operator, _| operator.update())
            .with_summary("Upgrade to the latest master copy and fallback handler"),
        CommandSpec::new("info", vec![], |operator, _| operator.info())
            .with_summary("Show everything known about the Safe"),
        CommandSpec::new("refresh", vec![], |operator, _| operator.refresh())
            .with_summary("Reload the Safe state"),
        CommandSpec::new("balances", vec![], |operator, _| operator.balances())
            .with_summary("Show ether and token balances"),
        CommandSpec::new("history", vec![], |operator, _| operator.history())
            .with_summary("Show the transaction history"),
    ]
}

/// Build the registry holding every console command.
#[must_use]
pub fn default_registry() -> CommandRegistry {
    let mut registry = CommandRegistry::empty();
    for spec in commands() {
        if let Err(error) = registry.register(spec) {
            tracing::error!(%error, "skipping invalid command");
        }
    }
    registry
}
