//! Resolution properties over generated input.

use proptest::prelude::*;
use safe_cli_command::{default_registry, ResolveError};

use crate::common::{checksummed_address, Console, Outcome};

proptest! {
    #[test]
    fn prop_resolve_is_deterministic(address in checksummed_address(), value in any::<i64>()) {
        let registry = default_registry();
        let line = format!("send_ether {address} {value}");

        let first = registry.resolve(&line).unwrap();
        let second = registry.resolve(&line).unwrap();

        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_unknown_names_are_rejected(name in "[a-z_]{1,24}") {
        let registry = default_registry();
        prop_assume!(!registry.supports(&name));

        let is_unknown = matches!(
            registry.resolve(&name),
            Err(ResolveError::UnknownCommand { .. })
        );
        prop_assert!(is_unknown);
    }

    #[test]
    fn prop_extra_tokens_never_dispatch(
        address in checksummed_address(),
        extra in proptest::collection::vec("[0-9]{1,4}", 1..4),
    ) {
        let mut console = Console::new();
        let line = format!("add_owner {address} {}", extra.join(" "));

        let rejected = matches!(console.run(&line), Outcome::Rejected(ResolveError::Argument(_)));
        prop_assert!(rejected);
        prop_assert_eq!(console.operator.calls.len(), 0);
    }

    #[test]
    fn prop_variadic_keeps_every_token(keys in proptest::collection::vec("[A-Za-z0-9_]{1,16}", 1..6)) {
        let mut console = Console::new();
        console.run(&format!("load_cli_owners {}", keys.join(" ")));

        prop_assert_eq!(console.operator.calls.len(), 1);
        prop_assert_eq!(&console.operator.calls[0].args, &keys);
    }

    #[test]
    fn prop_arbitrary_lines_never_panic(line in "\\PC{0,64}") {
        let _ = default_registry().resolve(&line);
    }
}
