//! Unit definitions - the static table and its alias index

use std::collections::HashMap;
use std::sync::LazyLock;

use crate::{Dimension, Unit, UnitId};

/// Global alias index over [`UNIT_TABLE`]
pub static UNITS: LazyLock<UnitRegistry> = LazyLock::new(UnitRegistry::new);

const fn length(
    id: UnitId,
    singular: &'static str,
    plural: &'static str,
    multiplier: f64,
    aliases: &'static [&'static str],
) -> Unit {
    Unit {
        id,
        dimension: Dimension::Length,
        singular,
        plural,
        multiplier,
        offset: 0.0,
        aliases,
        degree_alias: None,
    }
}

const fn mass(
    id: UnitId,
    singular: &'static str,
    plural: &'static str,
    multiplier: f64,
    aliases: &'static [&'static str],
) -> Unit {
    Unit {
        id,
        dimension: Dimension::Mass,
        singular,
        plural,
        multiplier,
        offset: 0.0,
        aliases,
        degree_alias: None,
    }
}

const fn temperature(
    id: UnitId,
    singular: &'static str,
    plural: &'static str,
    multiplier: f64,
    offset: f64,
    aliases: &'static [&'static str],
    degree_alias: Option<&'static str>,
) -> Unit {
    Unit {
        id,
        dimension: Dimension::Temperature,
        singular,
        plural,
        multiplier,
        offset,
        aliases,
        degree_alias,
    }
}

/// Every unit, in [`UnitId`] order
pub static UNIT_TABLE: [Unit; 17] = [
    Unit {
        id: UnitId::Null,
        dimension: Dimension::None,
        singular: "???",
        plural: "???",
        multiplier: 1.0,
        offset: 0.0,
        aliases: &[],
        degree_alias: None,
    },

    // Length, relative to the meter
    length(UnitId::Meter, "meter", "meters", 1.0, &["meter", "meters", "m"]),
    length(UnitId::Kilometer, "kilometer", "kilometers", 1000.0, &["kilometer", "kilometers", "km"]),
    length(UnitId::Centimeter, "centimeter", "centimeters", 0.01, &["centimeter", "centimeters", "cm"]),
    length(UnitId::Millimeter, "millimeter", "millimeters", 0.001, &["millimeter", "millimeters", "mm"]),
    length(UnitId::Mile, "mile", "miles", 1609.35, &["mile", "miles", "mi"]),
    length(UnitId::Yard, "yard", "yards", 0.9144, &["yard", "yards", "yd"]),
    length(UnitId::Foot, "foot", "feet", 0.3048, &["foot", "feet", "ft"]),
    length(UnitId::Inch, "inch", "inches", 0.0254, &["inch", "inches", "in"]),

    // Mass, relative to the gram
    mass(UnitId::Gram, "gram", "grams", 1.0, &["gram", "grams", "g"]),
    mass(UnitId::Kilogram, "kilogram", "kilograms", 1000.0, &["kilogram", "kilograms", "kg"]),
    mass(UnitId::Milligram, "milligram", "milligrams", 0.001, &["milligram", "milligrams", "mg"]),
    mass(UnitId::Pound, "pound", "pounds", 453.592, &["pound", "pounds", "lb"]),
    mass(UnitId::Ounce, "ounce", "ounces", 28.3495, &["ounce", "ounces", "oz"]),

    // Temperature, relative to the Celsius scale
    temperature(
        UnitId::Celsius,
        "degree Celsius",
        "degrees Celsius",
        1.0,
        0.0,
        &["celsius", "dc", "c"],
        Some("celsius"),
    ),
    temperature(
        UnitId::Kelvin,
        "Kelvin",
        "Kelvins",
        1.0,
        273.15,
        &["kelvin", "kelvins", "k"],
        None,
    ),
    temperature(
        UnitId::Fahrenheit,
        "degree Fahrenheit",
        "degrees Fahrenheit",
        5.0 / 9.0,
        32.0,
        &["fahrenheit", "df", "f"],
        Some("fahrenheit"),
    ),
];

/// The "unit not recognized" sentinel
pub fn null_unit() -> &'static Unit {
    &UNIT_TABLE[0]
}

/// Alias lookup over the unit table
pub struct UnitRegistry {
    aliases: HashMap<&'static str, UnitId>,
    degree_aliases: HashMap<&'static str, UnitId>,
}

impl UnitRegistry {
    pub fn new() -> Self {
        let mut registry = UnitRegistry {
            aliases: HashMap::new(),
            degree_aliases: HashMap::new(),
        };
        for unit in UNIT_TABLE.iter() {
            for alias in unit.aliases {
                registry.aliases.insert(*alias, unit.id);
            }
            if let Some(word) = unit.degree_alias {
                registry.degree_aliases.insert(word, unit.id);
            }
        }
        registry
    }

    /// Get a unit by its lowercase single-token alias
    pub fn get(&self, alias: &str) -> Option<&'static Unit> {
        self.aliases.get(alias).map(|id| self.unit(*id))
    }

    /// Get a unit by the lowercase word that follows "degree"/"degrees"
    pub fn get_degree(&self, word: &str) -> Option<&'static Unit> {
        self.degree_aliases.get(word).map(|id| self.unit(*id))
    }

    pub fn unit(&self, id: UnitId) -> &'static Unit {
        &UNIT_TABLE[id as usize]
    }

    /// All real units (the sentinel excluded)
    pub fn iter(&self) -> impl Iterator<Item = &'static Unit> {
        UNIT_TABLE.iter().filter(|u| !u.is_null())
    }

    /// Get all units in a dimension
    pub fn by_dimension(&self, dimension: Dimension) -> Vec<&'static Unit> {
        self.iter().filter(|u| u.dimension == dimension).collect()
    }

    /// Number of single-token aliases
    #[cfg(test)]
    pub(crate) fn alias_count(&self) -> usize {
        self.aliases.len()
    }
}

impl Default for UnitRegistry {
    fn default() -> Self {
        Self::new()
    }
}
