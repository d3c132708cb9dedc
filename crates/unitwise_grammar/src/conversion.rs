//! Parsed quantities, conversions, and the top-level parse outcome.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::catalog::Unit;

/// A number paired with the unit it was expressed in.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Quantity {
    /// The numeric value.
    pub value: f64,
    /// The unit the value is denominated in.
    pub unit: Unit,
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.value, self.unit.name)
    }
}

/// A quantity whose unit text was an ambiguous prefix.
///
/// Produced while the user is still typing: "10 mi" matches several
/// registered units. The span records where in the original input the unit
/// token sits, so a chosen candidate can be spliced over it.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct QuantityCandidates {
    /// The numeric value.
    pub value: f64,
    /// Every unit consistent with the typed prefix, in trie order.
    pub candidates: Vec<Unit>,
    /// Byte range of the unit token in the original input.
    pub span: (usize, usize),
    /// The unit text as typed.
    pub typed: String,
}

/// A fully specified conversion request.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct UnitConversion {
    /// The source quantity.
    pub from: Quantity,
    /// The target unit.
    pub to: Unit,
}

impl UnitConversion {
    /// The converted value: `from.value * from.factor / to.factor`.
    ///
    /// Defined even for cross-category conversions; gate on
    /// [`UnitConversion::is_valid`] before trusting the number.
    #[must_use]
    pub fn convert(&self) -> f64 {
        self.from.value * self.from.unit.factor / self.to.factor
    }

    /// True when both units measure the same dimension.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.from.unit.category == self.to.category
    }

    /// Canonical query text for this conversion ("10 mile to meter").
    ///
    /// Re-parsing the rendered text yields an equivalent conversion.
    #[must_use]
    pub fn render(&self) -> String {
        format!("{} {} to {}", self.from.value, self.from.unit.name, self.to.name)
    }
}

impl fmt::Display for UnitConversion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_valid() {
            write!(f, "{} = {} {}", self.from, self.convert(), self.to.name)
        } else {
            write!(
                f,
                "{} -> {}: INVALID! ({} vs {})",
                self.from, self.to.name, self.from.unit.category, self.to.category
            )
        }
    }
}

/// What a top-level parse produced: a full conversion, or a quantity whose
/// unit is still ambiguous.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ParseOutcome {
    /// Both units were fully specified.
    Conversion(UnitConversion),
    /// The unit text matched more than a single registered unit prefix.
    Ambiguous(QuantityCandidates),
}
