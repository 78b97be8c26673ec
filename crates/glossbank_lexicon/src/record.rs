//! Parsed lexicon entries and per-lexicon column layouts.
//!
//! A raw row is an ordered tuple of strings with no inherent meaning; a
//! [`ColumnLayout`] bound to the lexicon at construction decides which column
//! is the headword, which are glossed, and how they are labeled. Rows that
//! fail to parse are dropped by the cache, never stored malformed.

use glossbank_foundation::{Error, Result};
use glossbank_phonology::HeadwordTransform;

/// One displayable column of a lexicon entry.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Field {
    /// Display label for the column.
    pub label: String,
    /// The column's value.
    pub value: String,
    /// Whether substring search matches against this field.
    pub glossed: bool,
}

impl Field {
    /// Creates a glossed (searchable) field.
    #[must_use]
    pub fn glossed(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
            glossed: true,
        }
    }

    /// Creates a display-only field.
    #[must_use]
    pub fn display(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
            glossed: false,
        }
    }
}

/// One parsed lexicon entry.
///
/// Invariant: `headword` is never empty.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WordRecord {
    /// The form being searched on.
    pub headword: String,
    /// Remaining displayable columns, in layout order.
    pub fields: Vec<Field>,
}

impl WordRecord {
    /// Returns true if `query` occurs as a case-sensitive substring of the
    /// headword or of any glossed field value.
    #[must_use]
    pub fn matches(&self, query: &str) -> bool {
        self.headword.contains(query)
            || self
                .fields
                .iter()
                .any(|field| field.glossed && field.value.contains(query))
    }

    /// Returns a copy with the headword rewritten by `transform`.
    #[must_use]
    pub fn with_transformed_headword(&self, transform: &HeadwordTransform) -> Self {
        Self {
            headword: transform.apply(&self.headword),
            fields: self.fields.clone(),
        }
    }
}

/// Default field labels for positional layouts.
const POSITIONAL_LABELS: [&str; 3] = ["pos", "gloss", "example"];

/// How raw-row columns map onto a [`WordRecord`].
///
/// A closed set of variants, each carrying its configuration as data and
/// dispatched through a single [`parse_row`](ColumnLayout::parse_row).
#[derive(Clone, Debug)]
pub enum ColumnLayout {
    /// Headword in column 0; every remaining column becomes a glossed field.
    ///
    /// Labels are taken from the list, falling back to the column number for
    /// unlabeled trailing columns.
    Simple {
        /// Labels for columns 1.. in order.
        labels: Vec<String>,
    },

    /// Explicit column indices, allowing reordering and omission.
    ///
    /// Only the gloss column participates in substring matching.
    Positional {
        /// Column index of the headword.
        headword: usize,
        /// Column index of the part of speech, if present.
        pos: Option<usize>,
        /// Column index of the gloss, if present.
        gloss: Option<usize>,
        /// Column index of the example, if present.
        example: Option<usize>,
    },

    /// Wraps another lexicon's layout; rows parse through `base` and keep
    /// their source form, while `transform` derives the display headword for
    /// search results after matching.
    DialectDerived {
        /// The wrapped layout.
        base: Box<ColumnLayout>,
        /// The display-form transform.
        transform: HeadwordTransform,
    },
}

impl ColumnLayout {
    /// A simple layout with no field labels.
    #[must_use]
    pub fn simple() -> Self {
        Self::Simple { labels: Vec::new() }
    }

    /// A simple layout labeling columns 1.. with `labels`.
    #[must_use]
    pub fn simple_labeled<L: Into<String>>(labels: impl IntoIterator<Item = L>) -> Self {
        Self::Simple {
            labels: labels.into_iter().map(Into::into).collect(),
        }
    }

    /// The default positional layout: word, pos, gloss, example in order.
    #[must_use]
    pub fn positional() -> Self {
        Self::Positional {
            headword: 0,
            pos: Some(1),
            gloss: Some(2),
            example: Some(3),
        }
    }

    /// A positional layout with every index shifted right by `offset`.
    ///
    /// Used when two lexicons share one sheet and the second lexicon's
    /// columns start partway in.
    #[must_use]
    pub fn positional_offset(offset: usize) -> Self {
        Self::Positional {
            headword: offset,
            pos: Some(offset + 1),
            gloss: Some(offset + 2),
            example: Some(offset + 3),
        }
    }

    /// Wraps this layout with a dialect transform.
    #[must_use]
    pub fn derived(self, transform: HeadwordTransform) -> Self {
        Self::DialectDerived {
            base: Box::new(self),
            transform,
        }
    }

    /// The dialect transform carried by this layout, if any.
    #[must_use]
    pub fn dialect_transform(&self) -> Option<&HeadwordTransform> {
        match self {
            Self::DialectDerived { transform, .. } => Some(transform),
            Self::Simple { .. } | Self::Positional { .. } => None,
        }
    }

    /// Parses one raw row into a [`WordRecord`].
    ///
    /// # Errors
    ///
    /// Returns [`MalformedRow`](glossbank_foundation::ErrorKind::MalformedRow)
    /// if the headword column is missing or empty. Callers treat this as a
    /// partial-success condition: the row is skipped, the load goes on.
    pub fn parse_row(&self, row: &[String], line: usize) -> Result<WordRecord> {
        match self {
            Self::Simple { labels } => {
                let headword = required_column(row, 0, line)?;
                let fields = row
                    .iter()
                    .enumerate()
                    .skip(1)
                    .map(|(index, value)| {
                        let label = labels
                            .get(index - 1)
                            .cloned()
                            .unwrap_or_else(|| format!("column {index}"));
                        Field::glossed(label, value.clone())
                    })
                    .collect();
                Ok(WordRecord { headword, fields })
            }
            Self::Positional {
                headword,
                pos,
                gloss,
                example,
            } => {
                let headword = required_column(row, *headword, line)?;
                let mut fields = Vec::new();
                for (label, column, glossed) in [
                    (POSITIONAL_LABELS[0], *pos, false),
                    (POSITIONAL_LABELS[1], *gloss, true),
                    (POSITIONAL_LABELS[2], *example, false),
                ] {
                    if let Some(value) = column.and_then(|index| row.get(index)) {
                        fields.push(Field {
                            label: label.to_string(),
                            value: value.clone(),
                            glossed,
                        });
                    }
                }
                Ok(WordRecord { headword, fields })
            }
            Self::DialectDerived { base, .. } => base.parse_row(row, line),
        }
    }
}

fn required_column(row: &[String], index: usize, line: usize) -> Result<String> {
    match row.get(index) {
        Some(value) if !value.is_empty() => Ok(value.clone()),
        Some(_) => Err(Error::malformed_row(line, "empty headword")),
        None => Err(Error::malformed_row(
            line,
            format!("missing headword column {index}"),
        )),
    }
}
