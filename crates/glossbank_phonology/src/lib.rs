//! Deterministic text transformations for constructed languages.
//!
//! This crate provides:
//! - [`CharClasses`] - Static character classification tables
//! - [`SubstitutionTable`] - Longest-match-first literal substitution
//! - [`PhonologyPipeline`] - The staged base-to-Thravelemeh conversion
//! - [`HeadwordTransform`] - Named pure transforms for dialect derivation
//! - [`WordGenerator`] - Random words from `c`/`v` slot templates
//!
//! Everything here is pure string computation: no I/O, no hidden state.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod dialect;
mod generator;
mod numeral;
mod pipeline;
mod substitution;
mod tables;

pub use dialect::{HeadwordTransform, ZASOKESE_TO_SIMETASISE, zasokese_to_simetasise};
pub use generator::WordGenerator;
pub use numeral::lumiere_numeral;
pub use pipeline::PhonologyPipeline;
pub use substitution::SubstitutionTable;
pub use tables::{CharClasses, THRAVELEMEH};
