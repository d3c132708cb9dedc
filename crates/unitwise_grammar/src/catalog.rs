//! The unit domain model: categories, units, SI prefixes, and the catalog.

use std::fmt;
use std::rc::Rc;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use unitwise_foundation::{Error, Result, Trie};

/// The physical dimension a unit measures.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Category {
    /// Linear distance; base unit meter.
    Length,
    /// Mass; base unit gram.
    Weight,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Length => write!(f, "length"),
            Self::Weight => write!(f, "weight"),
        }
    }
}

/// A unit of measure.
///
/// `factor` is relative to the category's base unit (meter for length,
/// gram for weight): converting `v` from `a` to `b` in the same category is
/// `v * a.factor / b.factor`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Unit {
    /// Canonical name, also the text candidate selection splices in.
    pub name: String,
    /// The dimension this unit measures.
    pub category: Category,
    /// Multiplier to the category base unit.
    pub factor: f64,
    /// Alternate spellings registered in the lookup trie.
    pub aliases: Vec<String>,
}

impl Unit {
    /// Creates a unit.
    #[must_use]
    pub fn new(name: impl Into<String>, category: Category, factor: f64, aliases: &[&str]) -> Self {
        Self {
            name: name.into(),
            category,
            factor,
            aliases: aliases.iter().map(|a| (*a).to_string()).collect(),
        }
    }
}

/// The twenty SI magnitude prefixes, yotta through yocto.
pub const SI_PREFIXES: [(&str, f64); 20] = [
    ("yotta", 1e24),
    ("zetta", 1e21),
    ("exa", 1e18),
    ("peta", 1e15),
    ("tera", 1e12),
    ("giga", 1e9),
    ("mega", 1e6),
    ("kilo", 1e3),
    ("hecto", 1e2),
    ("deca", 1e1),
    ("deci", 1e-1),
    ("centi", 1e-2),
    ("milli", 1e-3),
    ("micro", 1e-6),
    ("nano", 1e-9),
    ("pico", 1e-12),
    ("femto", 1e-15),
    ("atto", 1e-18),
    ("zepto", 1e-21),
    ("yocto", 1e-24),
];

/// The registry of known units, indexed by every name and alias in one
/// shared trie.
///
/// Built once at startup and read-only afterwards.
#[derive(Clone, Debug)]
pub struct UnitCatalog {
    units: Vec<Unit>,
    trie: Rc<Trie<Unit>>,
}

impl UnitCatalog {
    /// Builds a catalog from a unit list, validating every entry.
    ///
    /// # Errors
    ///
    /// Returns an error for a non-finite or non-positive factor, an empty
    /// name or alias, or a name/alias registered twice.
    pub fn from_units(units: Vec<Unit>) -> Result<Self> {
        let mut trie = Trie::new();
        for unit in &units {
            if !(unit.factor.is_finite() && unit.factor > 0.0) {
                return Err(Error::invalid_factor(&unit.name, unit.factor));
            }
            let names = std::iter::once(unit.name.as_str())
                .chain(unit.aliases.iter().map(String::as_str));
            for name in names {
                if trie.get(name).is_some() {
                    return Err(Error::duplicate_unit(name));
                }
                trie.insert(name, unit.clone())?;
            }
        }
        Ok(Self {
            units,
            trie: Rc::new(trie),
        })
    }

    /// Builds the standard length and weight catalog with SI expansion.
    ///
    /// Every unit in each category is expanded with all twenty SI prefixes.
    /// A prefixed variant carries the bare prefix factor, not
    /// `prefix x base`: "kilometer" is exact because meter's factor is 1,
    /// while "kilofoot" is 1000 relative to the meter. Kept for
    /// compatibility with the established tables.
    ///
    /// # Errors
    ///
    /// Returns an error only if the built-in table is malformed, which the
    /// tests rule out.
    pub fn standard() -> Result<Self> {
        let length = expand_category(vec![
            Unit::new("thou", Category::Length, 2.54e-5, &["mil"]),
            Unit::new("inch", Category::Length, 0.0254, &["inches", "in", "\""]),
            Unit::new("yard", Category::Length, 0.9144, &[]),
            Unit::new("foot", Category::Length, 0.3048, &["feet", "ft", "'"]),
            Unit::new("mile", Category::Length, 1609.344, &[]),
            Unit::new(
                "light year",
                Category::Length,
                9.460_528_4e15,
                &["light-year", "lightyear", "ly", "l.y."],
            ),
            Unit::new("parsec", Category::Length, 3.085_677_58e16, &[]),
            Unit::new("meter", Category::Length, 1.0, &["m"]),
        ]);
        let weight = expand_category(vec![
            Unit::new("pound", Category::Weight, 453.592_37, &["pounds", "lb", "lbs"]),
            Unit::new("ton", Category::Weight, 9_071_847.4, &["tons"]),
            Unit::new("ounce", Category::Weight, 28.349_523_125, &["ounces", "oz"]),
            Unit::new("gram", Category::Weight, 1.0, &["g"]),
        ]);

        let mut units = length;
        units.extend(weight);
        Self::from_units(units)
    }

    /// Exact lookup by name or alias.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Unit> {
        self.trie.get(name)
    }

    /// Every registered unit, SI-expanded variants included.
    #[must_use]
    pub fn units(&self) -> &[Unit] {
        &self.units
    }

    /// Number of registered units.
    #[must_use]
    pub fn len(&self) -> usize {
        self.units.len()
    }

    /// True when the catalog holds no units.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// The lookup trie, shared with the grammar's parsers.
    #[must_use]
    pub fn trie(&self) -> Rc<Trie<Unit>> {
        Rc::clone(&self.trie)
    }
}

/// Appends the SI-prefixed variant of every unit in the list.
fn expand_category(mut units: Vec<Unit>) -> Vec<Unit> {
    let prefixed: Vec<Unit> = units
        .iter()
        .flat_map(|unit| {
            SI_PREFIXES.iter().map(|(prefix, factor)| Unit {
                name: format!("{prefix}{}", unit.name),
                category: unit.category,
                factor: *factor,
                aliases: Vec::new(),
            })
        })
        .collect();
    units.extend(prefixed);
    units
}
