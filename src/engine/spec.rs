use std::fmt;

use serde::Deserialize;

use crate::engine::prelude::*;

/// A constructed format. Anything we don't know gets the generic
/// 60 card, 4 copy rules.
#[derive(Clone, PartialEq, Eq, Debug, Deserialize)]
#[serde(from = "String")]
pub struct Format {
    name: String,
    key: String,
}

impl Format {
    pub const COMMANDER: &'static str = "commander";

    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        let key = name.trim().to_lowercase();
        Self { name, key }
    }

    /// As the user wrote it.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Lower-cased, as card legality maps spell it.
    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn is_singleton(&self) -> bool {
        self.key == Self::COMMANDER
    }

    pub fn copy_limit(&self) -> usize {
        if self.is_singleton() { 1 } else { 4 }
    }

    pub fn deck_size(&self) -> usize {
        if self.is_singleton() { 100 } else { 60 }
    }
}

impl From<String> for Format {
    fn from(name: String) -> Self {
        Self::new(name)
    }
}

impl Default for Format {
    fn default() -> Self {
        Self::new(Self::COMMANDER)
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// The blueprint for one build. Targets are counts of card copies.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct DeckSpec {
    pub format: Format,
    pub color_identity: ColorIdentity,
    pub target_creatures: usize,
    pub target_removal: usize,
    pub target_ramp: usize,
    pub target_draw: usize,
    pub target_board_wipes: usize,
    pub target_lands: usize,
}

impl Default for DeckSpec {
    fn default() -> Self {
        Self {
            format: Format::default(),
            color_identity: [ManaType::White, ManaType::Black].into_iter().collect(),
            target_creatures: 25,
            target_removal: 10,
            target_ramp: 10,
            target_draw: 8,
            target_board_wipes: 2,
            target_lands: 37,
        }
    }
}

impl DeckSpec {
    /// Only these roles are steered towards a count; threats use the
    /// creature target.
    pub fn target_for(&self, role: Role) -> Option<usize> {
        match role {
            Role::Removal => Some(self.target_removal),
            Role::Ramp => Some(self.target_ramp),
            Role::Draw => Some(self.target_draw),
            Role::Threat => Some(self.target_creatures),
            Role::BoardWipe => Some(self.target_board_wipes),
            _ => None,
        }
    }

    /// Land slots, capped at the format's deck size.
    pub fn land_slots(&self) -> usize {
        self.target_lands.min(self.format.deck_size())
    }

    pub fn nonland_target(&self) -> usize {
        self.format.deck_size() - self.land_slots()
    }
}
