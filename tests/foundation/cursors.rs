//! Integration tests for Cursor and ParseCaches
//!
//! Tests cursor navigation, the copy semantics that make backtracking free,
//! and the memoization cache shared across one parse.

use unitwise_foundation::{Cursor, ParseCaches};

// =============================================================================
// Cursor Navigation
// =============================================================================

#[test]
fn cursor_starts_at_origin() {
    let caches = ParseCaches::new();
    let cursor = Cursor::new("10 miles", &caches);
    assert_eq!(cursor.pos(), 0);
    assert_eq!(cursor.remaining(), "10 miles");
    assert_eq!(cursor.first(), Some('1'));
    assert!(!cursor.is_empty());
}

#[test]
fn cursor_advance_moves_past_char() {
    let caches = ParseCaches::new();
    let cursor = Cursor::new("abc", &caches);
    let next = cursor.advance('a');
    assert_eq!(next.remaining(), "bc");
    // The original cursor is untouched.
    assert_eq!(cursor.remaining(), "abc");
}

#[test]
fn cursor_advance_handles_multibyte_chars() {
    let caches = ParseCaches::new();
    let cursor = Cursor::new("µm", &caches);
    let next = cursor.advance('µ');
    assert_eq!(next.remaining(), "m");
    assert_eq!(next.pos(), 'µ'.len_utf8());
}

#[test]
fn cursor_remaining_len_counts_chars() {
    let caches = ParseCaches::new();
    let cursor = Cursor::new("µµµ", &caches);
    assert_eq!(cursor.remaining_len(), 3);
}

#[test]
fn cursor_exhausts_at_end() {
    let caches = ParseCaches::new();
    let cursor = Cursor::new("x", &caches);
    let end = cursor.advance('x');
    assert!(end.is_empty());
    assert_eq!(end.first(), None);
    assert_eq!(end.remaining(), "");
}

#[test]
fn cursor_starts_with_checks_remaining() {
    let caches = ParseCaches::new();
    let cursor = Cursor::new("miles to feet", &caches);
    assert!(cursor.starts_with("miles"));
    let after = cursor.advance_bytes(6);
    assert!(after.starts_with("to"));
    assert!(!after.starts_with("miles"));
}

#[test]
fn cursor_consumed_to_yields_slice() {
    let caches = ParseCaches::new();
    let start = Cursor::new("123 km", &caches);
    let end = start.advance_bytes(3);
    assert_eq!(start.consumed_to(&end), "123");
}

#[test]
fn cursor_at_pos_rewinds() {
    let caches = ParseCaches::new();
    let cursor = Cursor::new("hello", &caches).advance_bytes(4);
    let rewound = cursor.at_pos(1);
    assert_eq!(rewound.remaining(), "ello");
}

// =============================================================================
// Parse Caches
// =============================================================================

#[test]
fn caches_miss_then_hit() {
    let caches = ParseCaches::new();
    let key = ("rule", 0);
    assert_eq!(caches.lookup::<i64>(key), None);

    caches.cache::<i64>(key, Some((3, 42)));
    assert_eq!(caches.lookup::<i64>(key), Some(Some((3, 42))));
}

#[test]
fn caches_remember_failures() {
    let caches = ParseCaches::new();
    let key = ("rule", 5);
    caches.cache::<i64>(key, None);
    assert_eq!(caches.lookup::<i64>(key), Some(None));
}

#[test]
fn caches_key_on_position() {
    let caches = ParseCaches::new();
    caches.cache::<i64>(("rule", 0), Some((1, 10)));
    assert_eq!(caches.lookup::<i64>(("rule", 1)), None);
}

#[test]
fn attempt_counters_start_at_zero_and_bump() {
    let caches = ParseCaches::new();
    let key = ("recursive", 2);
    assert_eq!(caches.attempts(key), 0);
    caches.bump_attempts(key);
    caches.bump_attempts(key);
    assert_eq!(caches.attempts(key), 2);
    // Other keys are unaffected.
    assert_eq!(caches.attempts(("recursive", 3)), 0);
}
