//! Substring search with duplicate collapsing and the truncation policy.
//!
//! Matching is a plain case-sensitive substring scan over headwords and
//! glossed fields — intentionally not fuzzy and not tokenized. Results keep
//! source row order throughout; duplicate collapsing marks entries, it never
//! reorders them.

use std::collections::HashMap;

use glossbank_foundation::Result;
use glossbank_phonology::HeadwordTransform;

use crate::cache::LexemeCache;
use crate::record::WordRecord;
use crate::source::RowSource;

/// The display cap: a query matching more raw rows than this is truncated.
pub const MAX_RESULTS: usize = 25;

/// One search hit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchMatch {
    /// The matched record, with any dialect transform already applied.
    pub record: WordRecord,
    /// True if this entry's detail folds into the first occurrence of the
    /// same headword rather than rendering as its own block.
    pub render_as_duplicate: bool,
}

/// The outcome class of a query, for renderer message selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SearchOutcome {
    /// Nothing matched at all.
    NoMatches,
    /// Raw matches existed but truncation discarded every one of them.
    AllTruncated {
        /// How many raw matches were discarded.
        discarded: usize,
    },
    /// At least one entry survived to render.
    Hits,
}

/// The ordered result of one search.
#[derive(Clone, Debug)]
pub struct QueryResult {
    /// Surviving matches in source row order.
    pub matches: Vec<SearchMatch>,
    /// True if the raw match count exceeded [`MAX_RESULTS`].
    pub truncated: bool,
    /// True if the cache had to be refreshed to serve this query.
    pub source_reloaded: bool,
    raw_match_count: usize,
}

impl QueryResult {
    /// The number of raw matches before truncation.
    #[must_use]
    pub fn raw_match_count(&self) -> usize {
        self.raw_match_count
    }

    /// How many raw matches truncation discarded.
    #[must_use]
    pub fn discarded(&self) -> usize {
        self.raw_match_count - self.matches.len()
    }

    /// Classifies the result so renderers can distinguish "no results" from
    /// "every match was truncated away".
    #[must_use]
    pub fn outcome(&self) -> SearchOutcome {
        if self.raw_match_count == 0 {
            SearchOutcome::NoMatches
        } else if self.matches.is_empty() {
            SearchOutcome::AllTruncated {
                discarded: self.raw_match_count,
            }
        } else {
            SearchOutcome::Hits
        }
    }
}

/// Executes substring queries against a [`LexemeCache`].
pub struct SearchEngine;

impl SearchEngine {
    /// Searches `cache` for `query`.
    ///
    /// The algorithm, in order: load if stale; scan the snapshot for
    /// case-sensitive substring matches on headword or glossed fields; flag
    /// duplicates by grouping the pre-truncation match list by headword
    /// (first of each group unflagged); if the raw count exceeds
    /// [`MAX_RESULTS`], keep only entries participating in a same-headword
    /// group and clear the flags. The dialect `transform`, when supplied, is
    /// applied to each surviving record *after* matching — queries match the
    /// stored source form, display shows the derived form.
    ///
    /// # Errors
    ///
    /// Propagates a failed load; the query is not answered from a stale
    /// cache as if it had zero results.
    pub fn search(
        cache: &mut LexemeCache,
        source: &mut dyn RowSource,
        query: &str,
        transform: Option<&HeadwordTransform>,
    ) -> Result<QueryResult> {
        let source_reloaded = cache.ensure_loaded(source)?;
        // Local snapshot: a reload triggered elsewhere mid-scan can never
        // mix old and new rows into one result.
        let snapshot = cache.snapshot();

        let raw: Vec<&WordRecord> = snapshot.iter().filter(|r| r.matches(query)).collect();
        let raw_match_count = raw.len();

        // Group positions in the raw match list by headword; flags derive
        // from group sizes, never from mutating a working list.
        let mut groups: HashMap<&str, Vec<usize>> = HashMap::new();
        for (position, record) in raw.iter().enumerate() {
            groups
                .entry(record.headword.as_str())
                .or_default()
                .push(position);
        }

        let mut flagged = vec![false; raw_match_count];
        for positions in groups.values() {
            for &position in &positions[1..] {
                flagged[position] = true;
            }
        }

        let truncated = raw_match_count > MAX_RESULTS;
        let matches: Vec<SearchMatch> = raw
            .iter()
            .enumerate()
            // Past the cap, only entries in a same-headword group survive;
            // their merging flags are cleared below.
            .filter(|(_, record)| !truncated || groups[record.headword.as_str()].len() > 1)
            .map(|(position, record)| SearchMatch {
                record: match transform {
                    Some(t) => record.with_transformed_headword(t),
                    None => (*record).clone(),
                },
                render_as_duplicate: !truncated && flagged[position],
            })
            .collect();

        Ok(QueryResult {
            matches,
            truncated,
            source_reloaded,
            raw_match_count,
        })
    }
}
