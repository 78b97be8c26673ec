//! Glossbank - Lexicon cache and phonology engine for constructed languages
//!
//! This crate re-exports all layers of the Glossbank system for convenient
//! access. For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 2: glossbank_lexicon    — Word records, caches, search, registry
//! Layer 1: glossbank_phonology  — Character tables, pipelines, generation
//! Layer 0: glossbank_foundation — Core types (Error, GbVec)
//! ```

pub use glossbank_foundation as foundation;
pub use glossbank_lexicon as lexicon;
pub use glossbank_phonology as phonology;
