//! Property-based tests for name search
//!
//! Tests invariants:
//! - Results keep the input order and never invent records
//! - Matching ignores case of both the name and the query
//! - The empty query matches every record
//! - Searching the store never depends on a previous search

use proptest::prelude::*;

use crate::core::directory::{filter, search, EmployeeRecord, RecordStore};
use crate::tests::common::employee;

fn arb_name() -> impl Strategy<Value = String> {
    "[A-Za-z]{1,8}"
}

fn arb_directory() -> impl Strategy<Value = Vec<EmployeeRecord>> {
    prop::collection::vec((arb_name(), arb_name()), 0..16).prop_map(|names| {
        names
            .into_iter()
            .enumerate()
            .map(|(i, (first, last))| employee(&format!("id-{i}"), &first, &last))
            .collect()
    })
}

fn ids(records: &[EmployeeRecord]) -> Vec<String> {
    records.iter().map(|r| r.id().to_string()).collect()
}

proptest! {
    #[test]
    fn results_are_ordered_subsequence(records in arb_directory(), query in "[a-zA-Z ]{0,4}") {
        let results = filter(&records, &query);
        let all = ids(&records);

        let mut cursor = 0;
        for id in ids(&results) {
            let found = all[cursor..].iter().position(|candidate| *candidate == id);
            prop_assert!(found.is_some(), "{} missing or out of order", id);
            cursor += found.unwrap() + 1;
        }
    }

    #[test]
    fn every_result_matches_and_every_match_is_kept(records in arb_directory(), query in "[a-zA-Z]{1,3}") {
        let results = filter(&records, &query);
        let needle = query.to_lowercase();
        let expected = records
            .iter()
            .filter(|r| r.full_name().to_lowercase().contains(&needle))
            .count();

        prop_assert_eq!(results.len(), expected);
        for record in &results {
            prop_assert!(record.full_name().to_lowercase().contains(&needle));
        }
    }

    #[test]
    fn case_of_query_is_irrelevant(records in arb_directory(), query in "[a-zA-Z]{0,4}") {
        let upper = ids(&filter(&records, &query.to_uppercase()));
        let lower = ids(&filter(&records, &query.to_lowercase()));
        prop_assert_eq!(upper, lower);
    }

    #[test]
    fn empty_query_matches_everything(records in arb_directory()) {
        let store = RecordStore::new(records.clone());
        let outcome = search(&store, "");
        prop_assert_eq!(ids(&outcome.results), ids(&records));
        prop_assert_eq!(outcome.no_results, records.is_empty());
    }

    #[test]
    fn search_is_stateless(records in arb_directory(), first in "[a-z]{1,3}", second in "[a-z]{1,3}") {
        let store = RecordStore::new(records);
        let direct = ids(&search(&store, &second).results);
        let _ = search(&store, &first);
        let after = ids(&search(&store, &second).results);
        prop_assert_eq!(direct, after);
    }

    #[test]
    fn no_results_flag_tracks_emptiness(records in arb_directory(), query in "[a-z]{1,4}") {
        let store = RecordStore::new(records);
        let outcome = search(&store, &query);
        prop_assert_eq!(outcome.no_results, outcome.results.is_empty());
    }
}
