//! Error types for the Glossbank system.
//!
//! Uses `thiserror` for ergonomic error definition. Failures are always
//! scoped to one lexicon or one call; nothing here is fatal to the process.

use thiserror::Error;

/// The crate-wide result alias.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// The main error type for Glossbank operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self { kind }
    }

    /// Creates a source unavailable error.
    ///
    /// Raised when a row source fetch fails; the affected cache retains its
    /// last good snapshot and stays marked stale.
    #[must_use]
    pub fn source_unavailable(lexicon: impl Into<String>, cause: impl Into<String>) -> Self {
        Self::new(ErrorKind::SourceUnavailable {
            lexicon: lexicon.into(),
            cause: cause.into(),
        })
    }

    /// Creates a malformed row error.
    ///
    /// Loads recover from this locally: the offending row is skipped and the
    /// load otherwise succeeds.
    #[must_use]
    pub fn malformed_row(line: usize, reason: impl Into<String>) -> Self {
        Self::new(ErrorKind::MalformedRow {
            line,
            reason: reason.into(),
        })
    }

    /// Creates an invalid template error.
    #[must_use]
    pub fn invalid_template(pattern: impl Into<String>, offending: char) -> Self {
        Self::new(ErrorKind::InvalidTemplate {
            pattern: pattern.into(),
            offending,
        })
    }

    /// Creates an unknown lexicon error.
    #[must_use]
    pub fn unknown_lexicon(name: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnknownLexicon(name.into()))
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// A row source fetch failed (network or upstream parse error).
    #[error("source unavailable for lexicon {lexicon}: {cause}")]
    SourceUnavailable {
        /// The lexicon whose source failed.
        lexicon: String,
        /// Description of the underlying failure.
        cause: String,
    },

    /// A single raw row failed to parse under its column layout.
    #[error("malformed row at line {line}: {reason}")]
    MalformedRow {
        /// Zero-based row index in the fetched batch.
        line: usize,
        /// Why the row was rejected.
        reason: String,
    },

    /// A word template contained characters outside `c`/`v`.
    #[error("invalid template {pattern:?}: unexpected character {offending:?}")]
    InvalidTemplate {
        /// The offending pattern.
        pattern: String,
        /// The first character outside the slot alphabet.
        offending: char,
    },

    /// A registry lookup named a lexicon that was never registered.
    #[error("unknown lexicon: {0}")]
    UnknownLexicon(String),
}
