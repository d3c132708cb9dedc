//! Integration tests for the conversion-query grammar
//!
//! Drives `QueryParser` end to end over realistic inputs: prepositions,
//! plurals, word numbers, defaulted values, ambiguity, and rewriting.

use unitwise_grammar::{ParseOutcome, QueryParser, UnitConversion};

fn parser() -> QueryParser {
    QueryParser::standard().expect("standard tables")
}

fn conversion(input: &str) -> UnitConversion {
    match parser().parse_outcome(input) {
        Some(ParseOutcome::Conversion(conversion)) => conversion,
        other => panic!("expected a conversion for {input:?}, got {other:?}"),
    }
}

// =============================================================================
// Conversions
// =============================================================================

#[test]
fn numeric_conversion_with_to() {
    let c = conversion("3 feet to meters");
    assert!((c.convert() - 0.9144).abs() < 1e-9);
    assert_eq!(c.to.name, "meter");
}

#[test]
fn word_number_conversion_with_in() {
    let c = conversion("ten pounds in grams");
    assert!((c.convert() - 4535.9237).abs() < 1e-6);
}

#[test]
fn equals_sign_preposition() {
    let c = conversion("2 yards = inches");
    assert!((c.convert() - 72.0).abs() < 1e-9);
}

#[test]
fn preposition_is_optional() {
    let c = conversion("2 mile meter");
    assert!((c.convert() - 3218.688).abs() < 1e-9);
}

#[test]
fn bare_units_default_to_one() {
    let c = conversion("mile in feet");
    assert_eq!(c.from.value, 1.0);
    assert!((c.convert() - 5280.0).abs() < 1e-9);
}

#[test]
fn plural_s_is_accepted_everywhere() {
    let c = conversion("50 centimeters to miles");
    assert_eq!(c.from.unit.name, "centimeter");
    assert_eq!(c.to.name, "mile");
    assert!((c.convert() - 0.5 / 1609.344).abs() < 1e-12);
}

#[test]
fn aliases_and_symbols_parse() {
    let c = conversion("12 \" to '");
    assert_eq!(c.from.unit.name, "inch");
    assert_eq!(c.to.name, "foot");
    assert!((c.convert() - 1.0).abs() < 1e-9);
}

#[test]
fn cross_category_parses_but_is_invalid() {
    let c = conversion("pounds in meters");
    assert!(!c.is_valid());
    assert!(format!("{c}").contains("INVALID!"));
}

#[test]
fn trailing_garbage_is_ignored() {
    let c = conversion("1 mile to feet and then some");
    assert!((c.convert() - 5280.0).abs() < 1e-9);
}

#[test]
fn leading_garbage_is_not() {
    assert!(parser().parse_outcome("q 1 mile to feet").is_none());
}

// =============================================================================
// Ambiguity and Rewriting
// =============================================================================

#[test]
fn incomplete_unit_yields_candidates_with_span() {
    let p = parser();
    let Some(ParseOutcome::Ambiguous(c)) = p.parse_outcome("10 mi") else {
        panic!("expected candidates");
    };
    assert_eq!(c.value, 10.0);
    assert_eq!(c.typed, "mi");
    assert_eq!(c.span, (3, 5));
    let names: Vec<&str> = c.candidates.iter().map(|u| u.name.as_str()).collect();
    assert!(names.contains(&"mile"));
    assert!(names.contains(&"thou")); // via the "mil" alias
}

#[test]
fn selection_rewrites_and_reparses() {
    let p = parser();
    let Some(ParseOutcome::Ambiguous(c)) = p.parse_outcome("10 mi") else {
        panic!("expected candidates");
    };
    let mile = p.catalog().get("mile").expect("mile").clone();
    let rewritten = p.apply_candidate_selection("10 mi", &c, &mile);
    assert_eq!(rewritten, "10 mile");

    let full = format!("{rewritten} to meters");
    let c = conversion(&full);
    assert!((c.convert() - 16_093.44).abs() < 1e-6);
}

#[test]
fn canonical_render_round_trips() {
    let c = conversion("ten pounds in grams");
    let rendered = c.render();
    assert_eq!(rendered, "10 pound to gram");
    let again = conversion(&rendered);
    assert_eq!(again, c);
}

#[test]
fn nothing_matches_nothing() {
    assert!(parser().parse_outcome("").is_none());
    assert!(parser().parse_outcome("quux").is_none());
}
