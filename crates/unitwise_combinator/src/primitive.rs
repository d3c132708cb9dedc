//! Primitive parsers built on the combinator core.

use std::rc::Rc;

use unitwise_foundation::Trie;

use crate::parser::{Parser, Step, many1};

/// Consumes one character satisfying `pred`.
pub fn satisfy(pred: impl Fn(char) -> bool + 'static) -> Parser<char> {
    Parser::new(move |cursor| {
        let c = cursor.first()?;
        pred(c).then(|| Step {
            cursor: cursor.advance(c),
            value: c,
        })
    })
}

/// Consumes exactly the character `expected`.
#[must_use]
pub fn literal_char(expected: char) -> Parser<char> {
    satisfy(move |c| c == expected)
}

/// Consumes exactly the string `expected`.
#[must_use]
pub fn literal(expected: &'static str) -> Parser<&'static str> {
    Parser::new(move |cursor| {
        cursor.starts_with(expected).then(|| Step {
            cursor: cursor.advance_bytes(expected.len()),
            value: expected,
        })
    })
}

/// Consumes one alphabetic character.
#[must_use]
pub fn letter() -> Parser<char> {
    satisfy(char::is_alphabetic)
}

/// Consumes one ASCII digit.
#[must_use]
pub fn digit() -> Parser<char> {
    satisfy(|c| c.is_ascii_digit())
}

/// Consumes one whitespace character.
#[must_use]
pub fn whitespace() -> Parser<char> {
    satisfy(char::is_whitespace)
}

/// Consumes one or more letters as a `String`.
#[must_use]
pub fn word() -> Parser<String> {
    many1(letter()).map(|letters| letters.into_iter().collect())
}

/// Longest-match lookup in a trie from the current position.
///
/// Fails when the deepest reachable node holds no value; see
/// [`Trie::match_longest`] for the non-backtracking walk semantics.
pub fn match_trie<T: Clone + 'static>(trie: Rc<Trie<T>>) -> Parser<T> {
    Parser::new(move |cursor| {
        let (value, next) = trie.match_longest(cursor)?;
        Some(Step {
            cursor: next,
            value,
        })
    })
}

/// Collects every trie value reachable from the longest matched prefix.
///
/// Fails when the walk makes no progress or reaches a subtree with no
/// values; otherwise yields the candidate list in trie traversal order.
pub fn collect_trie_prefix<T: Clone + 'static>(trie: Rc<Trie<T>>) -> Parser<Vec<T>> {
    Parser::new(move |cursor| {
        let (next, values) = trie.collect_from_longest_prefix(cursor);
        if values.is_empty() {
            return None;
        }
        Some(Step {
            cursor: next,
            value: values,
        })
    })
}
