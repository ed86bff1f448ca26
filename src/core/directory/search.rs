//! Client-side name search over the fetched directory.

use super::models::{ActiveList, EmployeeRecord, RecordStore};

/// Whether `record`'s full name contains `query_lower`.
///
/// `query_lower` must already be lower-cased.
fn name_matches(record: &EmployeeRecord, query_lower: &str) -> bool {
    record.full_name().to_lowercase().contains(query_lower)
}

/// Keep the records whose `first last` name contains `query`, ignoring case.
///
/// An empty query keeps everything. Relative order is preserved.
pub fn filter(records: &[EmployeeRecord], query: &str) -> Vec<EmployeeRecord> {
    let query_lower = query.to_lowercase();
    records
        .iter()
        .filter(|record| name_matches(record, &query_lower))
        .cloned()
        .collect()
}

/// Result of one search keystroke.
#[derive(Debug, Clone)]
pub struct SearchOutcome {
    /// The new active list.
    pub results: ActiveList,
    /// Whether the "No results found" region should be shown.
    pub no_results: bool,
}

/// Re-filter the full store from scratch.
pub fn search(store: &RecordStore, query: &str) -> SearchOutcome {
    let results = if query.is_empty() {
        store.full_list()
    } else {
        ActiveList::new(filter(store.records(), query))
    };
    let no_results = results.is_empty();
    log::debug!(
        "Search {query:?}: {} of {} employees match",
        results.len(),
        store.len()
    );
    SearchOutcome {
        results,
        no_results,
    }
}
