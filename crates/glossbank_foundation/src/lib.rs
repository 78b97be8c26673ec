//! Core types and persistent collections for Glossbank.
//!
//! This crate provides:
//! - [`Error`] - Categorized error types for lexicon and transform operations
//! - [`Result`] - The crate-wide result alias
//! - [`GbVec`] - Persistent vector with structural sharing

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod collections;
mod error;

pub use collections::GbVec;
pub use error::{Error, ErrorKind, Result};
