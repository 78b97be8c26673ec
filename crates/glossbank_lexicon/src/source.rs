//! The collaborator contract for raw tabular rows.
//!
//! Fetching is the only blocking boundary in the core: everything after the
//! fetch is synchronous string work. Implementations live outside the core
//! (spreadsheet exports, HTTP endpoints); [`MemoryRowSource`] is provided for
//! embedders with static tables and for tests.

use std::collections::HashMap;

use glossbank_foundation::{Error, Result};

/// An opaque version token for one fetched batch.
///
/// Tokens are compared only for equality; a changed token signals upstream
/// drift but never triggers a reload by itself.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SourceVersion(String);

impl SourceVersion {
    /// Wraps a token value.
    #[must_use]
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// The raw token.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// One fetched batch of raw rows.
#[derive(Clone, Debug)]
pub struct RowBatch {
    /// Raw rows in source order; each row is an ordered tuple of strings
    /// with no semantic interpretation.
    pub rows: Vec<Vec<String>>,
    /// The batch's version token.
    pub version: SourceVersion,
}

/// Yields raw tabular rows for named lexicon sources.
pub trait RowSource {
    /// Fetches all rows of `source_id`.
    ///
    /// # Errors
    ///
    /// Fails with a source-level error when the upstream is unreachable or
    /// returns garbage; callers surface this as
    /// [`SourceUnavailable`](glossbank_foundation::ErrorKind::SourceUnavailable)
    /// and retain their previous snapshot.
    fn fetch(&mut self, source_id: &str) -> Result<RowBatch>;
}

/// An in-memory row source backed by named tables.
///
/// Each table carries a version counter that bumps on every mutation, so
/// tests and embedders can observe staleness signaling.
#[derive(Clone, Debug, Default)]
pub struct MemoryRowSource {
    tables: HashMap<String, (Vec<Vec<String>>, u64)>,
}

impl MemoryRowSource {
    /// Creates an empty source.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the rows of `source_id`, bumping its version.
    pub fn set_rows(&mut self, source_id: impl Into<String>, rows: Vec<Vec<String>>) {
        let entry = self
            .tables
            .entry(source_id.into())
            .or_insert_with(|| (Vec::new(), 0));
        entry.0 = rows;
        entry.1 += 1;
    }

    /// Appends one row to `source_id`, bumping its version.
    pub fn push_row(&mut self, source_id: impl Into<String>, row: Vec<String>) {
        let entry = self
            .tables
            .entry(source_id.into())
            .or_insert_with(|| (Vec::new(), 0));
        entry.0.push(row);
        entry.1 += 1;
    }
}

impl RowSource for MemoryRowSource {
    fn fetch(&mut self, source_id: &str) -> Result<RowBatch> {
        let (rows, version) = self
            .tables
            .get(source_id)
            .ok_or_else(|| Error::source_unavailable(source_id, "no such table"))?;
        Ok(RowBatch {
            rows: rows.clone(),
            version: SourceVersion::new(format!("{source_id}@{version}")),
        })
    }
}
