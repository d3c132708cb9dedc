//! Number and unit grammar for natural-language conversion queries.
//!
//! This crate turns input like "50 centimeters to miles" or "ten pounds in
//! grams" into structured outcomes:
//!
//! ```text
//! "ten pounds in grams"
//!          |
//!          v
//! +------------------+
//! |  NUMBER GRAMMAR  |  -> 10.0          (words, fractions, decimals)
//! +------------------+
//!          |
//!          v
//! +------------------+
//! |  UNIT LOOKUP     |  -> pound         (trie longest match + plural s)
//! +------------------+
//!          |
//!          v
//! +------------------+
//! |  CONVERSION      |  -> pound -> gram (optional "to"/"in"/"=")
//! +------------------+
//!          |
//!          v
//! ParseOutcome::Conversion { 10 pound -> gram }
//! ```
//!
//! When the unit text is an incomplete prefix ("10 mi"), the fallback
//! grammar produces [`QuantityCandidates`] listing every unit consistent
//! with the typed text, plus the source span needed to rewrite it once the
//! user picks one.
//!
//! # Modules
//!
//! - [`number`] - Numeric and spelled-out number parsers
//! - [`catalog`] - Unit domain model and the standard unit tables
//! - [`conversion`] - Quantities, conversions, and [`ParseOutcome`]
//! - [`query`] - The [`QueryParser`] entry points

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod catalog;
pub mod conversion;
pub mod number;
pub mod query;

pub use catalog::{Category, SI_PREFIXES, Unit, UnitCatalog};
pub use conversion::{ParseOutcome, Quantity, QuantityCandidates, UnitConversion};
pub use number::NumberWords;
pub use query::QueryParser;
