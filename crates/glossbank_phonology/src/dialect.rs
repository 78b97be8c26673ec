//! Named pure transforms for dialect derivation.
//!
//! A dialect lexicon stores no rows of its own: it reads another lexicon's
//! rows and derives its display form through a [`HeadwordTransform`]. The
//! lexicon layer applies the transform to search results after matching, so
//! queries always match against the stored source form.

use std::sync::LazyLock;

use crate::substitution::SubstitutionTable;

/// A named, pure headword transform.
///
/// Plain function pointers keep the value `Copy` and trivially comparable by
/// name, which is all the lexicon layer needs.
#[derive(Clone, Copy)]
pub struct HeadwordTransform {
    name: &'static str,
    apply: fn(&str) -> String,
}

impl HeadwordTransform {
    /// Creates a named transform.
    #[must_use]
    pub const fn new(name: &'static str, apply: fn(&str) -> String) -> Self {
        Self { name, apply }
    }

    /// The transform's name, for display and diagnostics.
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Applies the transform.
    #[must_use]
    pub fn apply(&self, input: &str) -> String {
        (self.apply)(input)
    }
}

impl std::fmt::Debug for HeadwordTransform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("HeadwordTransform").field(&self.name).finish()
    }
}

static SIMETASISE_TABLE: LazyLock<SubstitutionTable> = LazyLock::new(|| {
    SubstitutionTable::new([
        ("ts", "c"),
        ("sh", "š"),
        ("ch", "č"),
        ("k", "c"),
        ("z", "s"),
        ("w", "v"),
    ])
});

/// Derives the Simetasise form of a Zasokese headword.
#[must_use]
pub fn zasokese_to_simetasise(word: &str) -> String {
    SIMETASISE_TABLE.apply(word)
}

/// The shipped Zasokese-to-Simetasise transform.
pub const ZASOKESE_TO_SIMETASISE: HeadwordTransform =
    HeadwordTransform::new("zasokese_to_simetasise", zasokese_to_simetasise);
