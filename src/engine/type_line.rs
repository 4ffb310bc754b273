use std::fmt;

pub const BASIC_LAND_TYPES: [&str; 5] = ["Plains", "Island", "Swamp", "Mountain", "Forest"];

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TypeLine {
    pub card_super_types: Vec<CardSuperType>,
    pub card_types: Vec<CardType>,
    pub card_sub_types: Vec<CardSubType>,
}

impl TypeLine {
    pub fn empty() -> Self {
        Self {
            card_sub_types: vec![],
            card_super_types: vec![],
            card_types: vec![],
        }
    }

    /// Reads a printed type line such as `Legendary Creature — Human Wizard`.
    /// Both faces of a `A // B` line are merged. Words left of the dash that
    /// aren't a known super or card type are dropped.
    pub fn parse(line: &str) -> Self {
        let mut type_line = Self::empty();
        for face in line.split("//") {
            let (types, subtypes) = match face.split_once('—') {
                Some(split) => split,
                None => face.split_once(" - ").unwrap_or((face, "")),
            };

            for word in types.split_whitespace() {
                if let Some(super_type) = CardSuperType::from_word(word) {
                    type_line = type_line.add(super_type);
                } else if let Some(card_type) = CardType::from_word(word) {
                    type_line = type_line.add(card_type);
                }
            }
            for word in subtypes.split_whitespace() {
                type_line = type_line.add(word);
            }
        }
        type_line
    }

    /// Carries one of the five basic land types. Dual lands like
    /// `Land — Plains Island` count as well.
    pub fn is_basic_land_type(&self) -> bool {
        BASIC_LAND_TYPES.iter().any(|land_type| self.is(*land_type))
    }
}

impl fmt::Display for TypeLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let types: Vec<String> = self.card_super_types.iter()
            .map(|t| format!("{t:?}"))
            .chain(self.card_types.iter().map(|t| format!("{t:?}")))
            .collect();
        f.write_str(&types.join(" "))?;
        if !self.card_sub_types.is_empty() {
            write!(f, " — {}", self.card_sub_types.join(" "))?;
        }
        Ok(())
    }
}


#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Eq)]
pub enum CardType {
    Land,
    Creature,
    Artifact,
    Sorcery,
    Instant,
    Enchantment,
    Planeswalker,
    Battle,
    Kindred,
}

impl CardType {
    fn from_word(word: &str) -> Option<Self> {
        use CardType::*;
        match word.to_ascii_lowercase().as_str() {
            "land" => Some(Land),
            "creature" => Some(Creature),
            "artifact" => Some(Artifact),
            "sorcery" => Some(Sorcery),
            "instant" => Some(Instant),
            "enchantment" => Some(Enchantment),
            "planeswalker" => Some(Planeswalker),
            "battle" => Some(Battle),
            "kindred" | "tribal" => Some(Kindred),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Eq)]
pub enum CardSuperType {
    Basic,
    Legendary,
    Ongoing,
    Snow,
    World,
}

impl CardSuperType {
    fn from_word(word: &str) -> Option<Self> {
        use CardSuperType::*;
        match word.to_ascii_lowercase().as_str() {
            "basic" => Some(Basic),
            "legendary" => Some(Legendary),
            "ongoing" => Some(Ongoing),
            "snow" => Some(Snow),
            "world" => Some(World),
            _ => None,
        }
    }
}

// too many to try and use an enum
pub type CardSubType = String;

pub trait TypeClassQuery<T> {
    fn add(self, a_new_type: T) -> Self;
    fn is(&self, a_type: T) -> bool;
}

impl TypeClassQuery<CardSuperType> for TypeLine {
    fn add(mut self, a_new_type: CardSuperType) -> Self {
        self.card_super_types.push(a_new_type);
        self
    }

    fn is(&self, a_type: CardSuperType) -> bool {
        self.card_super_types.contains(&a_type)
    }
}


impl TypeClassQuery<CardType> for TypeLine {
    fn add(mut self, a_new_type: CardType) -> Self {
        self.card_types.push(a_new_type);
        self
    }

    fn is(&self, a_type: CardType) -> bool {
        self.card_types.contains(&a_type)
    }
}


/// Subtypes compare case-insensitively.
impl<'a> TypeClassQuery<&'a str> for TypeLine {
    fn add(mut self, a_new_type: &'a str) -> Self {
        self.card_sub_types.push(a_new_type.to_string());
        self
    }

    fn is(&self, a_type: &'a str) -> bool {
        self.card_sub_types.iter().any(|sub_type| sub_type.eq_ignore_ascii_case(a_type))
    }
}
