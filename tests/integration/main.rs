//! Whole-system integration tests
//!
//! Drives the full stack from query text to converted values, plus
//! property tests over the grammar.

mod end_to_end;
