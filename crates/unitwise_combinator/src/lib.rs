//! Backtracking parser combinators for Unitwise.
//!
//! A [`Parser`] maps an immutable cursor to an optional (cursor, value)
//! pair; failure is silent and drives ordered-choice backtracking. The core
//! provides sequencing, choice, repetition, optionality, laziness for
//! recursive rules, and named memoization with a recursion guard, all
//! scoped to a single top-level [`run`] call.
//!
//! # Modules
//!
//! - [`parser`] - The parser type, combinators, and `run`
//! - [`primitive`] - Character, literal, class, and trie-backed parsers
//! - [`span`] - Source-span capture for parsed values
//! - [`either`] - Two-case alternation across result types

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod either;
pub mod parser;
pub mod primitive;
pub mod span;

pub use either::{Either, either};
pub use parser::{
    Parser, Step, always, choice, consume_trailing, lazy, many, many1, memoize, never, optional,
    run, trailing_whitespace,
};
pub use primitive::{
    collect_trie_prefix, digit, letter, literal, literal_char, match_trie, satisfy, whitespace,
    word,
};
pub use span::{Spanned, spanned};
