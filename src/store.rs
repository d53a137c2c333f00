// SPDX-License-Identifier: PMPL-1.0-or-later

//! Catalog store: the full record set and the current filtered subset.
//!
//! The record set is populated at most once and is read-only afterwards.
//! The filtered subset is only ever produced by [`CatalogStore::refilter`].

use crate::filter;
use crate::types::{Query, Record};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error, PartialEq, Eq)]
#[error("catalog already loaded with {0} records")]
pub struct AlreadyLoaded(pub usize);

#[derive(Debug, Default)]
pub struct CatalogStore {
    records: Vec<Record>,
    loaded: bool,
    filtered: Vec<usize>,
}

impl CatalogStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Install the loaded record set. The filtered subset is left empty
    /// until the next [`refilter`](Self::refilter).
    pub fn populate(&mut self, records: Vec<Record>) -> Result<(), AlreadyLoaded> {
        if self.loaded {
            return Err(AlreadyLoaded(self.records.len()));
        }
        self.records = records;
        self.loaded = true;
        Ok(())
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Recompute the filtered subset for `query`.
    pub fn refilter(&mut self, query: &Query) {
        self.filtered = filter::filter_indices(&self.records, query);
        debug!(
            keyword = %query.keyword,
            category = %query.category,
            matched = self.filtered.len(),
            total = self.records.len(),
            "filter pass"
        );
    }

    /// Positions of the filtered records within [`records`](Self::records).
    pub fn filtered_indices(&self) -> &[usize] {
        &self.filtered
    }

    pub fn filtered(&self) -> impl ExactSizeIterator<Item = &Record> + '_ {
        self.filtered.iter().map(move |&idx| &self.records[idx])
    }

    /// Distinct non-empty categories in first-seen order.
    pub fn categories(&self) -> Vec<String> {
        let mut seen: Vec<String> = Vec::new();
        for category in self.records.iter().filter_map(|r| r.category.as_deref()) {
            if !category.is_empty() && !seen.iter().any(|c| c == category) {
                seen.push(category.to_string());
            }
        }
        seen
    }
}
