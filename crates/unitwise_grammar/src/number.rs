//! Number grammar: numerals, fractions, decimals, and spelled-out words.

use std::rc::Rc;

use unitwise_combinator::{
    Parser, always, choice, consume_trailing, digit, literal_char, many, many1, match_trie, never,
    trailing_whitespace, whitespace,
};
use unitwise_foundation::{Result, Trie};

/// One or more digits by positional-decimal accumulation. Fails on zero
/// digits, and on digit runs that overflow `i64`.
#[must_use]
pub fn positive_integer() -> Parser<i64> {
    many1(digit()).flat_map(|digits| {
        let text: String = digits.into_iter().collect();
        match text.parse::<i64>() {
            Ok(n) => always(n),
            Err(_) => never(),
        }
    })
}

/// A `-` followed by a positive integer, negated.
#[must_use]
pub fn negative_integer() -> Parser<i64> {
    literal_char('-').flat_map(|_| positive_integer()).map(|n| -n)
}

/// Positive or negative integer; positive tried first.
#[must_use]
pub fn integer() -> Parser<i64> {
    choice(vec![positive_integer(), negative_integer()])
}

/// `integer "/" integer` as division. A zero denominator is a non-match,
/// not a numeric exception.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn fraction() -> Parser<f64> {
    integer().flat_map(|numerator| {
        literal_char('/').flat_map(move |_| {
            integer().flat_map(move |denominator| {
                if denominator == 0 {
                    never()
                } else {
                    always(numerator as f64 / denominator as f64)
                }
            })
        })
    })
}

/// Optional integer part (default 0), `.`, mandatory fractional digits.
///
/// The two halves are composed textually before the numeric parse so
/// leading zeros in the fractional part survive ("5.05"). Without a `.`
/// the parser falls back to a plain integer read as a decimal.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn decimal() -> Parser<f64> {
    let with_point = choice(vec![integer(), always(0)]).flat_map(|int_part| {
        literal_char('.').flat_map(move |_| {
            many1(digit()).flat_map(move |frac_digits| {
                let frac: String = frac_digits.into_iter().collect();
                match format!("{int_part}.{frac}").parse::<f64>() {
                    Ok(value) => always(value),
                    Err(_) => never(),
                }
            })
        })
    });
    choice(vec![with_point, integer().map(|n| n as f64)])
}

/// Fraction or decimal. Fraction first: the two are disjoint on the
/// separator character, so order is a priority statement, not a tiebreak.
#[must_use]
pub fn numeric_number() -> Parser<f64> {
    choice(vec![fraction(), decimal()])
}

/// The fixed dictionary of spelled-out number words.
///
/// Owns the word trie; built once and handed by reference to the parsers
/// that need it.
#[derive(Clone, Debug)]
pub struct NumberWords {
    trie: Rc<Trie<f64>>,
}

impl NumberWords {
    /// Builds the standard English dictionary: "zero".."nineteen", the
    /// tens, "dozen", and the scale words through "trillion".
    ///
    /// # Errors
    ///
    /// Returns an error only if the built-in table is malformed, which the
    /// tests rule out.
    pub fn standard() -> Result<Self> {
        let words: [(&str, f64); 34] = [
            ("zero", 0.0),
            ("one", 1.0),
            ("two", 2.0),
            ("three", 3.0),
            ("four", 4.0),
            ("five", 5.0),
            ("six", 6.0),
            ("seven", 7.0),
            ("eight", 8.0),
            ("nine", 9.0),
            ("ten", 10.0),
            ("eleven", 11.0),
            ("twelve", 12.0),
            ("thirteen", 13.0),
            ("fourteen", 14.0),
            ("fifteen", 15.0),
            ("sixteen", 16.0),
            ("seventeen", 17.0),
            ("eighteen", 18.0),
            ("nineteen", 19.0),
            ("twenty", 20.0),
            ("thirty", 30.0),
            ("forty", 40.0),
            ("fifty", 50.0),
            ("sixty", 60.0),
            ("seventy", 70.0),
            ("eighty", 80.0),
            ("ninety", 90.0),
            ("dozen", 12.0),
            ("hundred", 100.0),
            ("thousand", 1_000.0),
            ("million", 1_000_000.0),
            ("billion", 1_000_000_000.0),
            ("trillion", 1_000_000_000_000.0),
        ];
        let mut trie = Trie::new();
        for (word, value) in words {
            trie.insert(word, value)?;
        }
        Ok(Self {
            trie: Rc::new(trie),
        })
    }

    /// The word trie, shared with parsers.
    #[must_use]
    pub fn trie(&self) -> Rc<Trie<f64>> {
        Rc::clone(&self.trie)
    }
}

/// Spelled-out number: optional numeric coefficient (default 1) followed by
/// one or more dictionary words, each with optional trailing whitespace or
/// hyphens.
///
/// Words combine left to right: when the running total is at most the next
/// word's value the total is multiplied ("five hundred"), otherwise the
/// word is added ("one hundred twenty"). A greedy fold, not a full scale
/// grammar, but it handles conventional English grouping.
#[must_use]
pub fn word_number(words: &NumberWords) -> Parser<f64> {
    let coefficient = trailing_whitespace(choice(vec![numeric_number(), always(1.0)]));
    let separator = many(choice(vec![whitespace(), literal_char('-')]));
    let word = consume_trailing(match_trie(words.trie()), separator);

    coefficient.flat_map(move |coefficient| {
        many1(word.clone()).map(move |values| {
            values.into_iter().fold(
                coefficient,
                |acc, next| if acc <= next { acc * next } else { acc + next },
            )
        })
    })
}

/// Any number the grammar understands; the word form is tried first.
#[must_use]
pub fn number(words: &NumberWords) -> Parser<f64> {
    choice(vec![word_number(words), numeric_number()])
}
