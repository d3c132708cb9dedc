//! The parser type and its combinators.
//!
//! A parser is a function from a cursor to an optional (cursor, value)
//! pair. Absence means "no match at this position" and drives backtracking;
//! it is never an error. Parsers are immutable values built once and reused
//! across many parses; cloning one is a reference-count bump.

use std::rc::Rc;

use unitwise_foundation::{Cursor, ParseCaches};

/// A successful parse outcome: the advanced cursor and the produced value.
#[derive(Clone, Copy, Debug)]
pub struct Step<'a, T> {
    /// Cursor past the consumed input.
    pub cursor: Cursor<'a>,
    /// The parsed value.
    pub value: T,
}

type ParseFn<T> = dyn for<'a> Fn(Cursor<'a>) -> Option<Step<'a, T>>;

/// A backtracking parser producing values of type `T`.
///
/// Optionally tagged with a name by [`memoize`]; named parsers cache their
/// outcome per (name, position) in the caches carried by the cursor, and
/// apply a recursion guard that stops runaway left recursion.
pub struct Parser<T> {
    name: Option<&'static str>,
    run: Rc<ParseFn<T>>,
}

impl<T> Clone for Parser<T> {
    fn clone(&self) -> Self {
        Self {
            name: self.name,
            run: Rc::clone(&self.run),
        }
    }
}

impl<T: Clone + 'static> Parser<T> {
    /// Wraps a parse function.
    pub fn new(f: impl for<'a> Fn(Cursor<'a>) -> Option<Step<'a, T>> + 'static) -> Self {
        Self {
            name: None,
            run: Rc::new(f),
        }
    }

    /// Runs this parser at the given cursor.
    ///
    /// Unnamed parsers call straight through. Named parsers first consult
    /// the memo table; on a miss they check the attempt counter against
    /// `remaining characters + 1` (failing outright beyond it, which bounds
    /// left-recursive grammars), then run and cache the outcome, failures
    /// included.
    pub fn parse<'a>(&self, cursor: Cursor<'a>) -> Option<Step<'a, T>> {
        let Some(name) = self.name else {
            return (self.run)(cursor);
        };

        let key = (name, cursor.pos());
        let caches = cursor.caches();
        if let Some(cached) = caches.lookup::<T>(key) {
            return cached.map(|(pos, value)| Step {
                cursor: cursor.at_pos(pos),
                value,
            });
        }

        let bound = u32::try_from(cursor.remaining_len() + 1).unwrap_or(u32::MAX);
        if caches.attempts(key) > bound {
            return None;
        }
        caches.bump_attempts(key);

        let outcome = (self.run)(cursor);
        caches.cache(
            key,
            outcome
                .as_ref()
                .map(|step| (step.cursor.pos(), step.value.clone())),
        );
        outcome
    }

    /// Monadic sequencing: run `self`, feed its value to `f`, run the
    /// resulting parser against the advanced cursor.
    pub fn flat_map<U: Clone + 'static>(
        self,
        f: impl Fn(T) -> Parser<U> + 'static,
    ) -> Parser<U> {
        Parser::new(move |cursor| {
            let step = self.parse(cursor)?;
            f(step.value).parse(step.cursor)
        })
    }

    /// Transforms the parsed value without consuming further input.
    pub fn map<U: Clone + 'static>(self, f: impl Fn(T) -> U + 'static) -> Parser<U> {
        Parser::new(move |cursor| {
            let step = self.parse(cursor)?;
            Some(Step {
                cursor: step.cursor,
                value: f(step.value),
            })
        })
    }

    /// Binary ordered choice: `self`, falling back to `other` against the
    /// original cursor.
    #[must_use]
    pub fn or(self, other: Parser<T>) -> Parser<T> {
        Parser::new(move |cursor| self.parse(cursor).or_else(|| other.parse(cursor)))
    }
}

/// Zero-width success producing a clone of `value`.
pub fn always<T: Clone + 'static>(value: T) -> Parser<T> {
    Parser::new(move |cursor| {
        Some(Step {
            cursor,
            value: value.clone(),
        })
    })
}

/// Zero-width unconditional failure.
#[must_use]
pub fn never<T: Clone + 'static>() -> Parser<T> {
    Parser::new(|_| None)
}

/// Ordered alternation: tries each parser in turn against the original
/// cursor and returns the first success. Order encodes grammar priority.
pub fn choice<T: Clone + 'static>(parsers: Vec<Parser<T>>) -> Parser<T> {
    Parser::new(move |cursor| parsers.iter().find_map(|p| p.parse(cursor)))
}

/// Greedy zero-or-more repetition. Never fails; stops at the first
/// non-match and never backtracks into fewer repetitions. A zero-width
/// success ends the repetition, since repeating it could not make progress.
pub fn many<T: Clone + 'static>(parser: Parser<T>) -> Parser<Vec<T>> {
    Parser::new(move |cursor| {
        let mut values = Vec::new();
        let mut current = cursor;
        while let Some(step) = parser.parse(current) {
            if step.cursor.pos() == current.pos() {
                break;
            }
            current = step.cursor;
            values.push(step.value);
        }
        Some(Step {
            cursor: current,
            value: values,
        })
    })
}

/// Greedy one-or-more repetition.
pub fn many1<T: Clone + 'static>(parser: Parser<T>) -> Parser<Vec<T>> {
    Parser::new(move |cursor| {
        let first = parser.parse(cursor)?;
        let mut values = vec![first.value];
        let mut current = first.cursor;
        while let Some(step) = parser.parse(current) {
            if step.cursor.pos() == current.pos() {
                break;
            }
            current = step.cursor;
            values.push(step.value);
        }
        Some(Step {
            cursor: current,
            value: values,
        })
    })
}

/// Always succeeds, wrapping the inner value or its absence.
pub fn optional<T: Clone + 'static>(parser: Parser<T>) -> Parser<Option<T>> {
    Parser::new(move |cursor| match parser.parse(cursor) {
        Some(step) => Some(Step {
            cursor: step.cursor,
            value: Some(step.value),
        }),
        None => Some(Step {
            cursor,
            value: None,
        }),
    })
}

/// Defers parser construction until first use, breaking value-level cycles
/// in recursive grammar definitions.
pub fn lazy<T: Clone + 'static>(thunk: impl Fn() -> Parser<T> + 'static) -> Parser<T> {
    Parser::new(move |cursor| thunk().parse(cursor))
}

/// Tags a parser with a name, enabling memoization and the recursion guard.
///
/// Wrapping a parser in `memoize` never changes its outcome for any input,
/// only how often the underlying function runs. Names must be unique within
/// a grammar.
#[must_use]
pub fn memoize<T>(name: &'static str, parser: Parser<T>) -> Parser<T> {
    Parser {
        name: Some(name),
        run: parser.run,
    }
}

/// Runs `parser`, then `trailing`, yielding only the first value. Used to
/// eat separators without including them in the result.
pub fn consume_trailing<T: Clone + 'static, U: Clone + 'static>(
    parser: Parser<T>,
    trailing: Parser<U>,
) -> Parser<T> {
    Parser::new(move |cursor| {
        let step = parser.parse(cursor)?;
        let rest = trailing.parse(step.cursor)?;
        Some(Step {
            cursor: rest.cursor,
            value: step.value,
        })
    })
}

/// Discards any whitespace after `parser`.
pub fn trailing_whitespace<T: Clone + 'static>(parser: Parser<T>) -> Parser<T> {
    consume_trailing(parser, many(crate::primitive::whitespace()))
}

/// Top-level entry: parses `input` from the start with fresh caches.
///
/// Returns the value on success. Trailing unconsumed input is accepted;
/// callers that need full consumption must demand end-of-input in their
/// grammar.
#[must_use]
pub fn run<T: Clone + 'static>(parser: &Parser<T>, input: &str) -> Option<T> {
    let caches = ParseCaches::new();
    let cursor = Cursor::new(input, &caches);
    parser.parse(cursor).map(|step| step.value)
}
