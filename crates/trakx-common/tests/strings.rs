use std::collections::HashSet;

use proptest::prelude::*;
use trakx_common::collections::to_csv_distinct_list;
use trakx_common::strings::split_csv_to_lowercase_distinct;
use trakx_common::{EthereumAddress, is_valid_ethereum_address};

proptest! {
    #[test]
    fn split_csv_entries_are_distinct_lowercase_and_trimmed(csv in "[a-zA-Z ,\t]{0,40}") {
        let entries = split_csv_to_lowercase_distinct(&csv);
        let distinct: HashSet<&String> = entries.iter().collect();

        prop_assert_eq!(distinct.len(), entries.len());
        for entry in &entries {
            prop_assert!(!entry.is_empty());
            prop_assert_eq!(entry.trim(), entry.as_str());
            prop_assert_eq!(entry.to_lowercase(), entry.clone());
        }
    }

    #[test]
    fn csv_list_splits_back_into_same_entries(items in prop::collection::vec("[a-z]{1,6}", 0..8)) {
        let csv = to_csv_distinct_list(&items, true);
        let mut expected = Vec::new();
        for item in &items {
            if !expected.contains(item) {
                expected.push(item.clone());
            }
        }
        prop_assert_eq!(split_csv_to_lowercase_distinct(&csv), expected);
    }

    #[test]
    fn generated_addresses_are_valid(hex in "[0-9a-fA-F]{40}") {
        let raw = format!("0x{hex}");
        prop_assert!(is_valid_ethereum_address(&raw));
        let address: EthereumAddress = raw.parse().unwrap();
        prop_assert_eq!(address.to_string(), raw);
    }

    #[test]
    fn wrong_length_addresses_are_invalid(hex in "[0-9a-f]{0,39}|[0-9a-f]{41,45}") {
        let raw = format!("0x{hex}");
        prop_assert!(!is_valid_ethereum_address(&raw));
    }
}
