//! The conversion-query grammar and its two public entry points.

use unitwise_combinator::{
    Either, Parser, Spanned, Step, always, choice, collect_trie_prefix, consume_trailing, either,
    literal, literal_char, match_trie, memoize, optional, run, spanned, trailing_whitespace,
};
use unitwise_foundation::Result;

use crate::catalog::{Unit, UnitCatalog};
use crate::conversion::{ParseOutcome, Quantity, QuantityCandidates, UnitConversion};
use crate::number::{NumberWords, number};

/// Parses free-form conversion queries against a unit catalog and number
/// dictionary.
///
/// Every call re-parses the whole input from scratch with fresh caches, so
/// a `QueryParser` is freely shareable; it holds no per-parse state.
#[derive(Clone, Debug)]
pub struct QueryParser {
    catalog: UnitCatalog,
    numbers: NumberWords,
}

impl QueryParser {
    /// Creates a parser over the given catalog and number dictionary.
    #[must_use]
    pub fn new(catalog: UnitCatalog, numbers: NumberWords) -> Self {
        Self { catalog, numbers }
    }

    /// Creates a parser over the standard catalog and dictionary.
    ///
    /// # Errors
    ///
    /// Returns an error if the built-in tables fail validation.
    pub fn standard() -> Result<Self> {
        Ok(Self::new(UnitCatalog::standard()?, NumberWords::standard()?))
    }

    /// The catalog this parser reads from.
    #[must_use]
    pub fn catalog(&self) -> &UnitCatalog {
        &self.catalog
    }

    /// A fully specified unit: trie longest match on name or alias, then an
    /// optional plural `s`, consumed and discarded.
    #[must_use]
    pub fn unit_parser(&self) -> Parser<Unit> {
        consume_trailing(match_trie(self.catalog.trie()), optional(literal_char('s')))
    }

    /// An as-yet-ambiguous unit: every unit reachable from the typed
    /// prefix, with the consumed span recorded for later rewriting.
    #[must_use]
    pub fn unit_prefix_parser(&self) -> Parser<Spanned<Vec<Unit>>> {
        spanned(consume_trailing(
            collect_trie_prefix(self.catalog.trie()),
            optional(literal_char('s')),
        ))
    }

    /// A value followed by an ambiguous unit prefix.
    #[must_use]
    pub fn quantity_prefix_parser(&self) -> Parser<QuantityCandidates> {
        let value = self.quantity_value_parser();
        let prefix = self.unit_prefix_parser();
        Parser::new(move |cursor| {
            let v = value.parse(cursor)?;
            let p = prefix.parse(v.cursor)?;
            let span = p.value;
            Some(Step {
                cursor: p.cursor,
                value: QuantityCandidates {
                    value: v.value,
                    candidates: span.value,
                    span: (span.start, span.end),
                    typed: span.text,
                },
            })
        })
    }

    /// The numeric part of a quantity; a bare unit defaults to 1.
    ///
    /// Memoized: the conversion grammar and the ambiguous-prefix fallback
    /// both start by parsing a value at position 0, and the second attempt
    /// should replay the first.
    #[must_use]
    pub fn quantity_value_parser(&self) -> Parser<f64> {
        memoize(
            "quantity-value",
            trailing_whitespace(choice(vec![number(&self.numbers), always(1.0)])),
        )
    }

    /// A value followed by a fully specified unit.
    #[must_use]
    pub fn quantity_parser(&self) -> Parser<Quantity> {
        let value = self.quantity_value_parser();
        let unit = self.unit_parser();
        Parser::new(move |cursor| {
            let v = value.parse(cursor)?;
            let u = unit.parse(v.cursor)?;
            Some(Step {
                cursor: u.cursor,
                value: Quantity {
                    value: v.value,
                    unit: u.value,
                },
            })
        })
    }

    /// A full conversion: quantity, optional preposition ("to", "in", "="),
    /// target unit.
    #[must_use]
    pub fn conversion_parser(&self) -> Parser<UnitConversion> {
        let from = trailing_whitespace(self.quantity_parser());
        let preposition = trailing_whitespace(optional(choice(vec![
            literal("to"),
            literal("in"),
            literal("="),
        ])));
        let to = self.unit_parser();
        Parser::new(move |cursor| {
            let f = from.parse(cursor)?;
            let p = preposition.parse(f.cursor)?;
            let t = to.parse(p.cursor)?;
            Some(Step {
                cursor: t.cursor,
                value: UnitConversion {
                    from: f.value,
                    to: t.value,
                },
            })
        })
    }

    /// The top-level grammar: a conversion, else an ambiguous quantity.
    #[must_use]
    pub fn outcome_parser(&self) -> Parser<ParseOutcome> {
        either(self.conversion_parser(), self.quantity_prefix_parser()).map(|parsed| match parsed {
            Either::Left(conversion) => ParseOutcome::Conversion(conversion),
            Either::Right(candidates) => ParseOutcome::Ambiguous(candidates),
        })
    }

    /// Parses the whole input, trying the conversion grammar first and
    /// falling back to the ambiguous-prefix form.
    ///
    /// Returns `None` when neither alternative matches at position 0; there
    /// is no skipping of leading garbage. Trailing input past the match is
    /// ignored.
    #[must_use]
    pub fn parse_outcome(&self, input: &str) -> Option<ParseOutcome> {
        run(&self.outcome_parser(), input)
    }

    /// Rewrites `input` so the ambiguous unit token reads as the chosen
    /// unit's canonical name. The result is ready to re-parse.
    ///
    /// `candidates` must come from a [`QueryParser::parse_outcome`] call on
    /// this same `input`; if its span no longer fits the text, the input is
    /// returned unchanged.
    #[must_use]
    pub fn apply_candidate_selection(
        &self,
        input: &str,
        candidates: &QuantityCandidates,
        unit: &Unit,
    ) -> String {
        let (start, end) = candidates.span;
        if start > end
            || end > input.len()
            || !input.is_char_boundary(start)
            || !input.is_char_boundary(end)
        {
            return input.to_string();
        }
        let mut rewritten = String::with_capacity(input.len() + unit.name.len());
        rewritten.push_str(&input[..start]);
        rewritten.push_str(&unit.name);
        rewritten.push_str(&input[end..]);
        rewritten
    }
}
