//! Cross-layer integration tests
//!
//! End-to-end scenarios that exercise phonology, caching, and search
//! together the way a chat frontend would drive them.

mod session;
