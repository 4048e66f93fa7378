//! Snapshot properties over generated sessions.

use proptest::prelude::*;

use crate::common::{Outcome, Session};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn prop_nonce_counts_accepted_transactions(thresholds in proptest::collection::vec(0i64..5, 1..8)) {
        let mut session = Session::signed_in();
        let mut accepted = 0u64;

        for threshold in thresholds {
            let before = session.messages.len();
            let current = session.operator.snapshot().threshold;
            let outcome = session.run(&format!("change_threshold {threshold}"));
            prop_assert!(matches!(outcome, Outcome::Dispatched));

            let notice = u64::try_from(threshold).is_ok_and(|t| t == current);
            if session.messages.len() == before && !notice {
                accepted += 1;
            }
        }

        prop_assert_eq!(session.operator.snapshot().nonce, accepted);
    }

    #[test]
    fn prop_threshold_never_exceeds_owner_count(thresholds in proptest::collection::vec(-3i64..6, 1..8)) {
        let mut session = Session::signed_in();

        for threshold in thresholds {
            session.run(&format!("change_threshold {threshold}"));
            let snapshot = session.operator.snapshot();
            prop_assert!(snapshot.threshold >= 1);
            prop_assert!(snapshot.threshold <= snapshot.owners.len() as u64);
        }
    }
}
