//! Two-case sum type letting one parser alternate between result shapes.

use crate::parser::{Parser, Step};

/// A value of one of two types.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Either<L, R> {
    /// The first alternative.
    Left(L),
    /// The second alternative.
    Right(R),
}

/// Ordered choice across two parsers of different result types.
///
/// Tries `left` against the original cursor, then `right`; fails only when
/// both fail.
pub fn either<L: Clone + 'static, R: Clone + 'static>(
    left: Parser<L>,
    right: Parser<R>,
) -> Parser<Either<L, R>> {
    Parser::new(move |cursor| {
        if let Some(step) = left.parse(cursor) {
            return Some(Step {
                cursor: step.cursor,
                value: Either::Left(step.value),
            });
        }
        let step = right.parse(cursor)?;
        Some(Step {
            cursor: step.cursor,
            value: Either::Right(step.value),
        })
    })
}
