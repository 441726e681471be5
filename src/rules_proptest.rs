//! Property-based tests for include rule resolution.
//!
//! These tests use proptest to generate class catalogs and verify that
//! resolution invariants hold for all of them.

#[cfg(test)]
mod proptest_tests {
    use crate::generators::include_rules::{to_match_path, to_namespace, IncludeRules};
    use proptest::prelude::*;

    fn class_name() -> impl Strategy<Value = String> {
        r"[A-Z][a-z]{0,5}(\\[A-Z][a-z]{0,5}){0,3}"
    }

    fn catalog() -> impl Strategy<Value = Vec<String>> {
        prop::collection::vec(class_name(), 0..20)
    }

    proptest! {
        /// Property: resolution only returns catalog entries, in catalog order
        #[test]
        fn resolved_is_ordered_subsequence(classes in catalog(), rule in class_name()) {
            let rules = IncludeRules::new([format!("{}/**", to_match_path(&rule)), "*".to_string()]);
            let resolved = rules.resolve(&classes).unwrap();

            let mut remaining = classes.iter();
            for class in &resolved {
                prop_assert!(
                    remaining.any(|c| c == class),
                    "'{}' is not in catalog order",
                    class
                );
            }
        }

        /// Property: `**` with no exclusions keeps the whole catalog
        #[test]
        fn recursive_wildcard_keeps_everything(classes in catalog()) {
            let resolved = IncludeRules::parse("**").resolve(&classes).unwrap();
            prop_assert_eq!(resolved, classes);
        }

        /// Property: an exclusion of the included pattern empties the result
        #[test]
        fn exclusion_wins_over_inclusion(classes in catalog()) {
            let resolved = IncludeRules::parse("**\n!**").resolve(&classes).unwrap();
            prop_assert!(resolved.is_empty());
        }

        /// Property: no inclusion rules selects nothing
        #[test]
        fn no_inclusions_select_nothing(classes in catalog(), rule in class_name()) {
            let rules = IncludeRules::new([format!("!{}", rule)]);
            prop_assert!(rules.resolve(&classes).unwrap().is_empty());
        }

        /// Property: `*` never crosses a namespace separator
        #[test]
        fn single_star_stays_in_one_segment(classes in catalog()) {
            let resolved = IncludeRules::parse("*").resolve(&classes).unwrap();
            for class in resolved {
                prop_assert!(!class.contains('\\'));
            }
        }

        /// Property: separator conversion round-trips for class names
        #[test]
        fn namespace_conversion_round_trips(class in class_name()) {
            prop_assert_eq!(to_namespace(&to_match_path(&class)), class);
        }
    }
}
