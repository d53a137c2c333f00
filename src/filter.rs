// SPDX-License-Identifier: PMPL-1.0-or-later

//! Filter engine: reduces the full record set to the filtered subset.
//!
//! Two conjunctive predicates, a case-insensitive keyword substring match
//! against [`Record::searchable_identity`] and an exact category match.
//! Empty predicates match everything. The result keeps the original record
//! order.

use crate::types::{Query, Record};

/// Resolve the keyword for a filter pass.
///
/// A non-empty explicit keyword (the quick-brand path) wins over the live
/// search input; otherwise the input is trimmed. The result is case-folded.
pub fn resolve_keyword(explicit: Option<&str>, input: &str) -> String {
    match explicit {
        Some(keyword) if !keyword.is_empty() => keyword.to_lowercase(),
        _ => input.trim().to_lowercase(),
    }
}

/// Whether `record` passes both predicates of `query`.
///
/// `query.keyword` must already be case-folded, as [`Query::new`] does.
pub fn matches(record: &Record, query: &Query) -> bool {
    if !query.keyword.is_empty() && !record.searchable_identity().contains(&query.keyword) {
        return false;
    }
    query.category.is_empty() || record.category_or_empty() == query.category
}

/// Indices of the records passing `query`, in ascending order.
pub fn filter_indices(records: &[Record], query: &Query) -> Vec<usize> {
    records
        .iter()
        .enumerate()
        .filter(|(_, record)| matches(record, query))
        .map(|(idx, _)| idx)
        .collect()
}

/// Records passing `keyword` and `category`, in original order.
pub fn filter<'a>(records: &'a [Record], keyword: &str, category: &str) -> Vec<&'a Record> {
    let query = Query::new(keyword, category);
    records.iter().filter(|record| matches(record, &query)).collect()
}
