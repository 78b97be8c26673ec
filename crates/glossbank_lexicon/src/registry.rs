//! An explicit, named collection of lexeme caches.
//!
//! The registry is an ordinary value constructed once at process start and
//! passed by reference to search and reload operations — no module-global
//! state. Caches keep their registration order, so bulk operations are
//! deterministic and strictly sequential.

use std::collections::HashMap;

use glossbank_foundation::{Error, Result};
use glossbank_phonology::ZASOKESE_TO_SIMETASISE;

use crate::cache::LexemeCache;
use crate::record::ColumnLayout;
use crate::search::{QueryResult, SearchEngine};
use crate::source::RowSource;

/// A named collection of [`LexemeCache`]s.
#[derive(Clone, Debug, Default)]
pub struct LexiconRegistry {
    order: Vec<String>,
    caches: HashMap<String, LexemeCache>,
}

impl LexiconRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The standard Shtelo lexicon wiring.
    ///
    /// Berquam and 4351 read their sheets at a column offset; Simetasispika
    /// is a dialect view over the Zasokese sheet; Xei's sheet stores the
    /// headword and part of speech in the same column.
    #[must_use]
    pub fn standard() -> Self {
        let mut registry = Self::new();
        let worded = || ColumnLayout::simple_labeled(["pos", "gloss", "example"]);
        registry.register("zasokese", "zasokese_database", worded());
        registry.register("thravelemeh", "thravelemeh_database", worded());
        registry.register(
            "berquam",
            "zasokese_database",
            ColumnLayout::positional_offset(1),
        );
        registry.register(
            "simetasispika",
            "zasokese_database",
            worded().derived(ZASOKESE_TO_SIMETASISE),
        );
        registry.register("felinkia", "felinkia_database", worded());
        registry.register("4351", "4351_database", ColumnLayout::positional_offset(1));
        registry.register("semal", "semal_database", ColumnLayout::positional());
        registry.register(
            "xei",
            "xei_database",
            ColumnLayout::Positional {
                headword: 0,
                pos: Some(0),
                gloss: Some(2),
                example: Some(3),
            },
        );
        registry
    }

    /// Registers a lexicon, replacing any cache previously under `name`.
    pub fn register(&mut self, name: impl Into<String>, source_id: impl Into<String>, layout: ColumnLayout) {
        let name = name.into();
        if !self.caches.contains_key(&name) {
            self.order.push(name.clone());
        }
        let cache = LexemeCache::new(name.clone(), source_id, layout);
        self.caches.insert(name, cache);
    }

    /// Registered lexicon names, in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    /// Looks up a cache by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&LexemeCache> {
        self.caches.get(name)
    }

    /// Looks up a cache by name, mutably.
    #[must_use]
    pub fn get_mut(&mut self, name: &str) -> Option<&mut LexemeCache> {
        self.caches.get_mut(name)
    }

    /// Searches one lexicon.
    ///
    /// Dialect lexicons carry their transform in their layout, so callers
    /// never pass one explicitly.
    ///
    /// # Errors
    ///
    /// Returns [`UnknownLexicon`](glossbank_foundation::ErrorKind::UnknownLexicon)
    /// for an unregistered name, and propagates load failures.
    pub fn search(
        &mut self,
        source: &mut dyn RowSource,
        name: &str,
        query: &str,
    ) -> Result<QueryResult> {
        let cache = self
            .caches
            .get_mut(name)
            .ok_or_else(|| Error::unknown_lexicon(name))?;
        let transform = cache.layout().dialect_transform().copied();
        SearchEngine::search(cache, source, query, transform.as_ref())
    }

    /// Force-reloads one lexicon.
    ///
    /// # Errors
    ///
    /// Returns [`UnknownLexicon`](glossbank_foundation::ErrorKind::UnknownLexicon)
    /// for an unregistered name, and propagates fetch failures.
    pub fn reload(&mut self, source: &mut dyn RowSource, name: &str) -> Result<()> {
        let cache = self
            .caches
            .get_mut(name)
            .ok_or_else(|| Error::unknown_lexicon(name))?;
        cache.force_reload(source)
    }

    /// Force-reloads every lexicon, one at a time in registration order.
    ///
    /// Each reload runs to completion before the next begins — a deliberate
    /// sequential policy to bound peak load on the upstream source. A failed
    /// reload is recorded and the sweep continues.
    pub fn reload_all(&mut self, source: &mut dyn RowSource) -> Vec<(String, Result<()>)> {
        let names: Vec<String> = self.order.clone();
        names
            .into_iter()
            .map(|name| {
                let outcome = self.reload(source, &name);
                (name, outcome)
            })
            .collect()
    }
}
