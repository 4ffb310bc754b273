use std::{
    collections::BTreeSet,
    fmt,
    str::FromStr,
};

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;

static COLORED_PIP: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\{([WUBRG])\}").expect("colored pip pattern is valid")
});

static GENERIC_MANA: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\{(\d+)\}").expect("generic mana pattern is valid")
});

/// Declared in WUBRG order; the derived `Ord` is the canonical color order
/// used wherever a deterministic "first color" is needed.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum ManaType {
    White,
    Blue,
    Black,
    Red,
    Green,
    Colorless,
}

impl ManaType {
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        use ManaType::*;
        match symbol.trim().to_ascii_uppercase().as_str() {
            "W" => Some(White),
            "U" => Some(Blue),
            "B" => Some(Black),
            "R" => Some(Red),
            "G" => Some(Green),
            "C" => Some(Colorless),
            _ => None,
        }
    }

    pub fn symbol(self) -> char {
        use ManaType::*;
        match self {
            White => 'W',
            Blue => 'U',
            Black => 'B',
            Red => 'R',
            Green => 'G',
            Colorless => 'C',
        }
    }

    /// The basic land that produces this mana.
    pub fn basic_land(self) -> &'static str {
        use ManaType::*;
        match self {
            White => "Plains",
            Blue => "Island",
            Black => "Swamp",
            Red => "Mountain",
            Green => "Forest",
            Colorless => "Wastes",
        }
    }

    pub fn is_colored(self) -> bool {
        self != ManaType::Colorless
    }
}

impl fmt::Display for ManaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// The set of colors a card (or a deck) is allowed to touch.
#[derive(Clone, PartialEq, Eq, Default, Debug, Deserialize)]
#[serde(from = "Vec<String>")]
pub struct ColorIdentity(BTreeSet<ManaType>);

impl ColorIdentity {
    pub fn empty() -> Self {
        Self(BTreeSet::new())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn is_subset_of(&self, other: &ColorIdentity) -> bool {
        self.0.is_subset(&other.0)
    }

    /// First color in WUBRG order.
    pub fn first(&self) -> Option<ManaType> {
        self.0.iter().next().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = ManaType> + '_ {
        self.0.iter().copied()
    }
}

impl FromIterator<ManaType> for ColorIdentity {
    fn from_iter<T: IntoIterator<Item = ManaType>>(iter: T) -> Self {
        Self(iter.into_iter().filter(|color| color.is_colored()).collect())
    }
}

// card data is lenient: symbols we don't know about are dropped
impl From<Vec<String>> for ColorIdentity {
    fn from(symbols: Vec<String>) -> Self {
        symbols
            .iter()
            .filter_map(|symbol| ManaType::from_symbol(symbol))
            .collect()
    }
}

/// Parses compact color strings such as `WB` or `wub`. Strict, unlike the
/// card-data conversion, since this comes from the user.
impl FromStr for ColorIdentity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.chars()
            .filter(|c| !c.is_whitespace() && *c != ',')
            .map(|c| match ManaType::from_symbol(&c.to_string()) {
                Some(color) if color.is_colored() => Ok(color),
                _ => Err(format!("'{c}' is not one of W, U, B, R, G")),
            })
            .collect()
    }
}

impl fmt::Display for ColorIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("C");
        }
        self.0.iter().try_for_each(|color| write!(f, "{color}"))
    }
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub struct ManaCost {
    pub mana: Vec<ManaType>,
    pub generic_mana: usize,
}

impl ManaCost {
    pub fn new(mana: Vec<ManaType>, generic_mana: usize) -> Self {
        Self { mana, generic_mana }
    }

    pub fn empty() -> Self {
        Self::new(vec![], 0)
    }

    /// Reads a cost in `{2}{W}{W}` notation. Only single-letter colored
    /// symbols count as pips; hybrid, phyrexian, `{X}` and anything we
    /// can't read contribute nothing.
    pub fn parse(cost: &str) -> Self {
        let mana = COLORED_PIP
            .captures_iter(cost)
            .filter_map(|caps| ManaType::from_symbol(&caps[1]))
            .collect();
        let generic_mana = GENERIC_MANA
            .captures_iter(cost)
            .filter_map(|caps| caps[1].parse::<usize>().ok())
            .sum();
        Self::new(mana, generic_mana)
    }

    pub fn pips(&self, color: ManaType) -> usize {
        self.mana.iter().filter(|&&pip| pip == color).count()
    }

    pub fn colored_pips(&self) -> usize {
        self.mana.len()
    }
}
