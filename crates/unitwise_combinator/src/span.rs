//! Source-span capture for parsed values.
//!
//! Candidate selection needs to know exactly which slice of the input the
//! unit token came from, so it can be rewritten in place.

use crate::parser::{Parser, Step};

/// A parsed value together with the byte range and text it consumed.
#[derive(Clone, Debug, PartialEq)]
pub struct Spanned<T> {
    /// The parsed value.
    pub value: T,
    /// Byte offset where consumption started.
    pub start: usize,
    /// Byte offset one past the last consumed byte.
    pub end: usize,
    /// The consumed source text.
    pub text: String,
}

/// Wraps a parser so its result records the input span it consumed.
pub fn spanned<T: Clone + 'static>(parser: Parser<T>) -> Parser<Spanned<T>> {
    Parser::new(move |cursor| {
        let step = parser.parse(cursor)?;
        let text = cursor.consumed_to(&step.cursor).to_string();
        Some(Step {
            value: Spanned {
                value: step.value,
                start: cursor.pos(),
                end: step.cursor.pos(),
                text,
            },
            cursor: step.cursor,
        })
    })
}
