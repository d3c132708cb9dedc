//! Prefix tree used for unit and number-word lookup.
//!
//! The trie serves two purposes: exact longest-match lookup from a cursor
//! position (driving the unit and word-number grammars) and enumeration of
//! every value reachable from a typed prefix (driving candidate lists for
//! incomplete input).

use std::collections::BTreeMap;

use crate::cursor::Cursor;
use crate::error::{Error, Result};

/// A node holds a value iff the path from the root to it spells a
/// registered key. Children are ordered so subtree collection is
/// deterministic.
#[derive(Clone, Debug)]
struct TrieNode<T> {
    value: Option<T>,
    children: BTreeMap<char, TrieNode<T>>,
}

impl<T> Default for TrieNode<T> {
    fn default() -> Self {
        Self {
            value: None,
            children: BTreeMap::new(),
        }
    }
}

impl<T: Clone> TrieNode<T> {
    /// Depth-first collection of this node's value and every value below it,
    /// in child-key order.
    fn collect_into(&self, values: &mut Vec<T>) {
        if let Some(value) = &self.value {
            values.push(value.clone());
        }
        for child in self.children.values() {
            child.collect_into(values);
        }
    }
}

/// A mapping from string keys to values supporting longest-match lookup.
///
/// Built once at startup from a fixed vocabulary and read-only afterwards;
/// there is no removal operation.
#[derive(Clone, Debug)]
pub struct Trie<T> {
    root: TrieNode<T>,
    len: usize,
}

impl<T> Default for Trie<T> {
    fn default() -> Self {
        Self {
            root: TrieNode {
                value: None,
                children: BTreeMap::new(),
            },
            len: 0,
        }
    }
}

impl<T> Trie<T> {
    /// Creates an empty trie.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of keys that hold a value.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// True when no keys are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Inserts or overwrites a key.
    ///
    /// Walks the existing matching prefix, creates nodes for the remainder,
    /// and sets the value on the terminal node.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ErrorKind::EmptyKey`] for the empty string, which
    /// would otherwise register a zero-width match at the root.
    pub fn insert(&mut self, key: &str, value: T) -> Result<()> {
        if key.is_empty() {
            return Err(Error::empty_key());
        }
        let mut node = &mut self.root;
        for c in key.chars() {
            node = node.children.entry(c).or_default();
        }
        if node.value.replace(value).is_none() {
            self.len += 1;
        }
        Ok(())
    }

    /// Exact lookup of a full key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&T> {
        let mut node = &self.root;
        for c in key.chars() {
            node = node.children.get(&c)?;
        }
        node.value.as_ref()
    }

    /// Walks the deepest path the input permits, returning the node reached
    /// and the cursor past the walked text.
    fn walk<'a>(&self, cursor: Cursor<'a>) -> (&TrieNode<T>, Cursor<'a>) {
        let mut node = &self.root;
        let mut current = cursor;
        while let Some(c) = current.first() {
            match node.children.get(&c) {
                Some(child) => {
                    node = child;
                    current = current.advance(c);
                }
                None => break,
            }
        }
        (node, current)
    }
}

impl<T: Clone> Trie<T> {
    /// Longest-match lookup from the cursor position.
    ///
    /// Walks the input while a child edge exists and succeeds only if the
    /// deepest node reached holds a value. The walk never retries shorter
    /// prefixes: with "mi" and "mile" registered, input "mil" walks to the
    /// valueless "mil" node and fails even though "mi" was passed on the
    /// way. Registered keys shadowed this way stay reachable through
    /// [`Trie::collect_from_longest_prefix`].
    #[must_use]
    pub fn match_longest<'a>(&self, cursor: Cursor<'a>) -> Option<(T, Cursor<'a>)> {
        let (node, next) = self.walk(cursor);
        node.value.clone().map(|value| (value, next))
    }

    /// Enumerates every value reachable from the longest matched prefix.
    ///
    /// Walks as far as the input permits, then returns the cursor past the
    /// matched text and the deepest node's value (if any) plus all values
    /// in its subtree, depth-first in child-key order. The value list is
    /// empty when the walk makes no progress.
    #[must_use]
    pub fn collect_from_longest_prefix<'a>(&self, cursor: Cursor<'a>) -> (Cursor<'a>, Vec<T>) {
        let (node, next) = self.walk(cursor);
        if next.pos() == cursor.pos() {
            return (cursor, Vec::new());
        }
        let mut values = Vec::new();
        node.collect_into(&mut values);
        (next, values)
    }
}
