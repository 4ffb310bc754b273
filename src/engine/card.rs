use std::collections::HashMap;

use serde::Deserialize;

use crate::engine::prelude::*;

/// One printing as the card-data cache hands it over. Field names follow
/// that JSON.
#[derive(Clone, Debug, Deserialize)]
pub struct CardPrinting {
    pub name: String,
    #[serde(default)]
    pub type_line: String,
    #[serde(default)]
    pub oracle_text: Option<String>,
    #[serde(default)]
    pub mana_cost: Option<String>,
    #[serde(default)]
    pub color_identity: ColorIdentity,
    #[serde(default)]
    pub cmc: f64,
    #[serde(default)]
    pub legalities: HashMap<String, String>,
}

impl CardPrinting {
    /// Formats missing from the legality map are not legal.
    pub fn legality(&self, format: &Format) -> Legality {
        self.legalities
            .get(format.key())
            .map(|status| Legality::parse(status))
            .unwrap_or(Legality::NotLegal)
    }
}

/// A line of a collection: how many copies of a printing somebody owns.
#[derive(Clone, Debug, Deserialize)]
pub struct OwnedCard {
    pub quantity: usize,
    #[serde(default, alias = "is_foil")]
    pub foil: bool,
    pub card: CardPrinting,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Legality {
    Legal,
    Restricted,
    NotLegal,
    Banned,
}

impl Legality {
    pub fn parse(status: &str) -> Self {
        match status.trim().to_ascii_lowercase().as_str() {
            "legal" => Legality::Legal,
            "restricted" => Legality::Restricted,
            "banned" => Legality::Banned,
            _ => Legality::NotLegal,
        }
    }

    pub fn is_playable(self) -> bool {
        matches!(self, Legality::Legal | Legality::Restricted)
    }
}

/// A pool card with everything the builder needs precomputed.
///
/// The role set is derived once from the type line and rules text and can't
/// be changed afterwards.
#[derive(Clone, Debug)]
pub struct AnalyzedCard {
    pub name: String,
    pub quantity: usize,
    pub type_line: String,
    pub types: TypeLine,
    pub oracle_text: Option<String>,
    pub mana_cost: Option<String>,
    pub cost: ManaCost,
    pub color_identity: ColorIdentity,
    pub mana_value: f64,
    roles: RoleSet,
}

impl AnalyzedCard {
    pub fn analyze(printing: &CardPrinting, quantity: usize, classifier: &RoleClassifier) -> Self {
        let roles = classifier.classify(&printing.type_line, printing.oracle_text.as_deref());
        Self {
            name: printing.name.clone(),
            quantity,
            type_line: printing.type_line.clone(),
            types: TypeLine::parse(&printing.type_line),
            oracle_text: printing.oracle_text.clone(),
            mana_cost: printing.mana_cost.clone(),
            cost: printing.mana_cost.as_deref().map(ManaCost::parse).unwrap_or_else(ManaCost::empty),
            color_identity: printing.color_identity.clone(),
            mana_value: printing.cmc,
            roles,
        }
    }

    pub fn roles(&self) -> &RoleSet {
        &self.roles
    }

    pub fn has_role(&self, role: Role) -> bool {
        self.roles.contains(&role)
    }

    pub fn is_land(&self) -> bool {
        self.has_role(Role::Land)
    }
}
