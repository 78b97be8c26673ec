//! Per-lexicon in-memory record stores.
//!
//! A cache is created unloaded; the first search or explicit reload performs
//! a blocking load through the [`RowSource`]. Reloads replace the record
//! snapshot atomically — the snapshot is a persistent vector, so readers
//! holding a previous snapshot keep a fully consistent view. The cache never
//! reloads on elapsed time alone; staleness is demand-driven.

use std::time::Instant;

use glossbank_foundation::{Error, GbVec, Result};

use crate::record::{ColumnLayout, WordRecord};
use crate::source::{RowSource, SourceVersion};

/// The in-memory store for one named lexicon.
#[derive(Clone, Debug)]
pub struct LexemeCache {
    /// Lexicon name, used in error reporting.
    lexicon: String,
    /// Upstream table identifier; several lexicons may share one table.
    source_id: String,
    layout: ColumnLayout,
    records: GbVec<WordRecord>,
    version: Option<SourceVersion>,
    last_loaded: Option<Instant>,
    /// Rows dropped by the last load because they failed to parse.
    skipped_rows: usize,
    stale: bool,
}

impl LexemeCache {
    /// Creates an unloaded cache.
    #[must_use]
    pub fn new(
        lexicon: impl Into<String>,
        source_id: impl Into<String>,
        layout: ColumnLayout,
    ) -> Self {
        Self {
            lexicon: lexicon.into(),
            source_id: source_id.into(),
            layout,
            records: GbVec::new(),
            version: None,
            last_loaded: None,
            skipped_rows: 0,
            stale: true,
        }
    }

    /// The lexicon's name.
    #[must_use]
    pub fn lexicon(&self) -> &str {
        &self.lexicon
    }

    /// The upstream table identifier.
    #[must_use]
    pub fn source_id(&self) -> &str {
        &self.source_id
    }

    /// The cache's column layout.
    #[must_use]
    pub fn layout(&self) -> &ColumnLayout {
        &self.layout
    }

    /// The version token of the current snapshot, if loaded.
    #[must_use]
    pub fn version(&self) -> Option<&SourceVersion> {
        self.version.as_ref()
    }

    /// When the current snapshot was loaded, if ever.
    #[must_use]
    pub fn last_loaded(&self) -> Option<Instant> {
        self.last_loaded
    }

    /// Rows dropped by the last load because they failed to parse.
    ///
    /// Surfaced as a value so a collaborator can log partial loads.
    #[must_use]
    pub fn skipped_rows(&self) -> usize {
        self.skipped_rows
    }

    /// Returns true if a load or reload is pending.
    #[must_use]
    pub fn is_stale(&self) -> bool {
        self.stale
    }

    /// Loads the cache if it is unloaded or marked stale.
    ///
    /// Returns whether a fetch occurred. Malformed rows are skipped and
    /// tallied; the load succeeds with the rows that parsed.
    ///
    /// # Errors
    ///
    /// On fetch failure the previous snapshot is retained, the cache stays
    /// stale so the next call retries, and
    /// [`SourceUnavailable`](glossbank_foundation::ErrorKind::SourceUnavailable)
    /// propagates to the caller.
    pub fn ensure_loaded(&mut self, source: &mut dyn RowSource) -> Result<bool> {
        if !self.stale {
            return Ok(false);
        }

        let batch = source
            .fetch(&self.source_id)
            .map_err(|err| Error::source_unavailable(&self.lexicon, err.to_string()))?;

        let mut skipped = 0;
        let records: GbVec<WordRecord> = batch
            .rows
            .iter()
            .enumerate()
            .filter_map(|(line, row)| match self.layout.parse_row(row, line) {
                Ok(record) => Some(record),
                Err(_) => {
                    skipped += 1;
                    None
                }
            })
            .collect();

        // Snapshot replacement is a single assignment; readers hold either
        // the old vector or the new one, never a mix.
        self.records = records;
        self.version = Some(batch.version);
        self.last_loaded = Some(Instant::now());
        self.skipped_rows = skipped;
        self.stale = false;
        Ok(true)
    }

    /// Unconditionally marks the cache stale and reloads it.
    ///
    /// # Errors
    ///
    /// Propagates fetch failures exactly as [`ensure_loaded`](Self::ensure_loaded);
    /// the cache remains stale afterwards.
    pub fn force_reload(&mut self, source: &mut dyn RowSource) -> Result<()> {
        self.stale = true;
        self.ensure_loaded(source)?;
        Ok(())
    }

    /// Returns the current record snapshot, loading first if needed.
    ///
    /// The returned vector is an O(1) clone; it stays consistent even if the
    /// cache reloads afterwards.
    ///
    /// # Errors
    ///
    /// Propagates fetch failures from the implied load.
    pub fn rows(&mut self, source: &mut dyn RowSource) -> Result<GbVec<WordRecord>> {
        self.ensure_loaded(source)?;
        Ok(self.records.clone())
    }

    /// Returns the current snapshot without loading.
    ///
    /// An unloaded cache yields an empty snapshot; callers that need the
    /// load-first contract use [`rows`](Self::rows).
    #[must_use]
    pub fn snapshot(&self) -> GbVec<WordRecord> {
        self.records.clone()
    }
}
