//! Immutable input cursor and per-parse caches.
//!
//! A [`Cursor`] is a cheap `Copy` value pointing into the text being parsed.
//! Advancing never mutates; it returns a new cursor over the same buffer.
//! Each cursor carries a reference to the [`ParseCaches`] owned by the
//! top-level parse call, so memoized parsers can consult their cache without
//! any global state.

use std::any::Any;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// Key for the memo and attempt-counter tables: a memoized parser's name
/// paired with the byte position it was invoked at.
pub type MemoKey = (&'static str, usize);

/// A cached parse outcome: the position the parser advanced to plus the
/// produced value, type-erased so outcomes of different value types can
/// share one table. `None` records a cached failure.
struct CachedStep {
    pos: usize,
    value: Rc<dyn Any>,
}

/// Memoization state scoped to a single top-level parse.
///
/// Constructed fresh by `run`, discarded when the parse returns. Never
/// shared across concurrent parses; cursors only hold a shared reference,
/// so the tables cannot outlive their parse.
#[derive(Default)]
pub struct ParseCaches {
    memo: RefCell<HashMap<MemoKey, Option<CachedStep>>>,
    attempts: RefCell<HashMap<MemoKey, u32>>,
}

impl ParseCaches {
    /// Creates empty caches for one parse invocation.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Looks up a cached outcome.
    ///
    /// The outer `Option` distinguishes "not cached yet" from a cached
    /// entry; the inner `Option` is the recorded outcome, where `None` is a
    /// cached failure. A cached value whose type does not match `T` is
    /// reported as a failure; memo names must be unique per result type.
    #[must_use]
    pub fn lookup<T: Clone + 'static>(&self, key: MemoKey) -> Option<Option<(usize, T)>> {
        let memo = self.memo.borrow();
        let entry = memo.get(&key)?;
        Some(entry.as_ref().and_then(|step| {
            step.value
                .downcast_ref::<T>()
                .map(|value| (step.pos, value.clone()))
        }))
    }

    /// Records an outcome for a memo key. Failures are cached too, so a
    /// parser that failed at a position is never re-run there.
    pub fn cache<T: Clone + 'static>(&self, key: MemoKey, outcome: Option<(usize, T)>) {
        let entry = outcome.map(|(pos, value)| CachedStep {
            pos,
            value: Rc::new(value) as Rc<dyn Any>,
        });
        self.memo.borrow_mut().insert(key, entry);
    }

    /// Returns the number of times a memoized parser has been entered at a
    /// position without completing.
    #[must_use]
    pub fn attempts(&self, key: MemoKey) -> u32 {
        self.attempts.borrow().get(&key).copied().unwrap_or(0)
    }

    /// Increments the attempt counter for a memo key.
    pub fn bump_attempts(&self, key: MemoKey) {
        *self.attempts.borrow_mut().entry(key).or_insert(0) += 1;
    }
}

/// An immutable position into the input text.
#[derive(Clone, Copy)]
pub struct Cursor<'a> {
    input: &'a str,
    pos: usize,
    caches: &'a ParseCaches,
}

impl<'a> Cursor<'a> {
    /// Creates a cursor at the start of `input`.
    #[must_use]
    pub fn new(input: &'a str, caches: &'a ParseCaches) -> Self {
        Self {
            input,
            pos: 0,
            caches,
        }
    }

    /// The byte offset of this cursor.
    #[must_use]
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// The full input buffer.
    #[must_use]
    pub fn input(&self) -> &'a str {
        self.input
    }

    /// The caches owned by the enclosing top-level parse.
    #[must_use]
    pub fn caches(&self) -> &'a ParseCaches {
        self.caches
    }

    /// True when no input remains.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pos >= self.input.len()
    }

    /// The next character, if any, without advancing.
    #[must_use]
    pub fn first(&self) -> Option<char> {
        self.remaining().chars().next()
    }

    /// The unconsumed tail of the input.
    #[must_use]
    pub fn remaining(&self) -> &'a str {
        &self.input[self.pos..]
    }

    /// Number of unconsumed characters; bounds the recursion guard.
    #[must_use]
    pub fn remaining_len(&self) -> usize {
        self.remaining().chars().count()
    }

    /// Returns a cursor advanced past `c`.
    #[must_use]
    pub fn advance(&self, c: char) -> Self {
        self.advance_bytes(c.len_utf8())
    }

    /// Returns a cursor advanced by `n` bytes.
    #[must_use]
    pub fn advance_bytes(&self, n: usize) -> Self {
        Self {
            input: self.input,
            pos: (self.pos + n).min(self.input.len()),
            caches: self.caches,
        }
    }

    /// Returns a cursor at an absolute byte position over the same buffer.
    /// Used to replay memoized results.
    #[must_use]
    pub fn at_pos(&self, pos: usize) -> Self {
        Self {
            input: self.input,
            pos: pos.min(self.input.len()),
            caches: self.caches,
        }
    }

    /// True when the unconsumed input starts with `s`.
    #[must_use]
    pub fn starts_with(&self, s: &str) -> bool {
        self.remaining().starts_with(s)
    }

    /// The text between this cursor and a later cursor over the same buffer.
    #[must_use]
    pub fn consumed_to(&self, other: &Cursor<'a>) -> &'a str {
        &self.input[self.pos..other.pos]
    }
}

impl std::fmt::Debug for Cursor<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Cursor")
            .field("pos", &self.pos)
            .field("remaining", &self.remaining())
            .finish()
    }
}
