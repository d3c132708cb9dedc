//! Unitwise - Natural-language unit conversion
//!
//! This crate re-exports all layers of the Unitwise system for convenient
//! access. For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 3: unitwise_runtime    — REPL, CLI
//! Layer 2: unitwise_grammar    — Numbers, unit catalog, conversion queries
//! Layer 1: unitwise_combinator — Backtracking parser combinators
//! Layer 0: unitwise_foundation — Cursor, parse caches, trie, Error
//! ```

pub use unitwise_combinator as combinator;
pub use unitwise_foundation as foundation;
pub use unitwise_grammar as grammar;
pub use unitwise_runtime as runtime;
