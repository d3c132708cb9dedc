//! Core input state, trie, and error types for Unitwise.
//!
//! This crate provides:
//! - [`Cursor`] - Immutable position into the text being parsed
//! - [`ParseCaches`] - Memoization state scoped to one top-level parse
//! - [`Trie`] - Longest-match and prefix-enumeration lookup
//! - [`Error`] - Error types with context

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod cursor;
pub mod error;
pub mod trie;

pub use cursor::{Cursor, MemoKey, ParseCaches};
pub use error::{Error, ErrorKind, Result};
pub use trie::Trie;
