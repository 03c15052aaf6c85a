//! Include-minus-exclude reconciliation of canonical sets.

use std::collections::BTreeSet;

/// Subtract the exclude set from the include set.
///
/// The result keeps the include set's ascending order. Pure and total: an
/// empty exclude set returns the include set unchanged, an empty include
/// set returns nothing.
pub fn reconcile(include: &BTreeSet<String>, exclude: &BTreeSet<String>) -> Vec<String> {
    include
        .iter()
        .filter(|record| !exclude.contains(*record))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(items: &[&str]) -> BTreeSet<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_reconcile_removes_excluded() {
        let include = set(&["0.0.0.0 a.com", "0.0.0.0 b.com", "0.0.0.0 c.com"]);
        let exclude = set(&["0.0.0.0 b.com"]);
        assert_eq!(
            reconcile(&include, &exclude),
            vec!["0.0.0.0 a.com", "0.0.0.0 c.com"]
        );
    }

    #[test]
    fn test_reconcile_empty_exclude_is_identity() {
        let include = set(&["0.0.0.0 a.com", "0.0.0.0 b.com"]);
        let result = reconcile(&include, &BTreeSet::new());
        assert_eq!(result, include.into_iter().collect::<Vec<_>>());
    }

    #[test]
    fn test_reconcile_empty_include_is_empty() {
        let exclude = set(&["0.0.0.0 a.com"]);
        assert!(reconcile(&BTreeSet::new(), &exclude).is_empty());
    }

    #[test]
    fn test_reconcile_exclude_not_in_include_is_noop() {
        let include = set(&["0.0.0.0 a.com"]);
        let exclude = set(&["0.0.0.0 other.com"]);
        assert_eq!(reconcile(&include, &exclude), vec!["0.0.0.0 a.com"]);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn record_set_strategy(max: usize) -> impl Strategy<Value = BTreeSet<String>> {
        prop::collection::btree_set("0\\.0\\.0\\.0 [a-z]{1,8}\\.com", 0..max)
    }

    proptest! {
        /// The result never contains an excluded record.
        #[test]
        fn prop_no_excluded_survives(
            include in record_set_strategy(50),
            exclude in record_set_strategy(20)
        ) {
            for record in reconcile(&include, &exclude) {
                prop_assert!(!exclude.contains(&record));
            }
        }

        /// Every result record came from the include set.
        #[test]
        fn prop_result_subset_of_include(
            include in record_set_strategy(50),
            exclude in record_set_strategy(20)
        ) {
            for record in reconcile(&include, &exclude) {
                prop_assert!(include.contains(&record));
            }
        }

        /// The result preserves ascending order.
        #[test]
        fn prop_result_sorted(
            include in record_set_strategy(50),
            exclude in record_set_strategy(20)
        ) {
            let result = reconcile(&include, &exclude);
            let mut sorted = result.clone();
            sorted.sort();
            prop_assert_eq!(result, sorted);
        }
    }
}
