//! Lexeme caches and substring search for Glossbank.
//!
//! This crate provides:
//! - [`WordRecord`] / [`Field`] - Parsed lexicon entries
//! - [`ColumnLayout`] - Per-lexicon column interpretation
//! - [`RowSource`] - The collaborator contract for raw tabular rows
//! - [`LexemeCache`] - Lazily loaded per-lexicon record snapshots
//! - [`SearchEngine`] / [`QueryResult`] - Substring search with duplicate
//!   collapsing and the truncation policy
//! - [`LexiconRegistry`] - An explicit named collection of caches

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod cache;
mod record;
mod registry;
mod search;
mod source;

pub use cache::LexemeCache;
pub use record::{ColumnLayout, Field, WordRecord};
pub use registry::LexiconRegistry;
pub use search::{MAX_RESULTS, QueryResult, SearchEngine, SearchMatch, SearchOutcome};
pub use source::{MemoryRowSource, RowBatch, RowSource, SourceVersion};
