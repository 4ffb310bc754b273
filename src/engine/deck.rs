use std::collections::{BTreeMap, HashMap};

use log::{trace, warn};
use serde::Serialize;

use crate::engine::prelude::*;

pub type CardID = ID<AnalyzedCard>;

/// The ledger for one build: which pool cards are in, how many copies, and
/// how many copies of each role that adds up to.
///
/// Pool cards get IDs in the order they were handed in, so iterating the pool
/// is first-seen order.
pub struct DeckConstruction<'a> {
    pub spec: &'a DeckSpec,
    pool: BTreeMap<CardID, AnalyzedCard>,
    names: HashMap<String, CardID>,
    main_deck: BTreeMap<CardID, usize>,
    basic_lands: BTreeMap<ManaType, usize>,
    role_counts: BTreeMap<Role, usize>,
}

impl<'a> DeckConstruction<'a> {
    pub fn new(spec: &'a DeckSpec, cards: Vec<AnalyzedCard>) -> Self {
        let mut ids = IDFactory::new();
        let mut pool = BTreeMap::new();
        let mut names = HashMap::new();

        for card in cards {
            if names.contains_key(&card.name) {
                warn!("deck: '{}' is already in the pool, ignoring the later copy", card.name);
                continue;
            }
            let id = ids.get_id();
            names.insert(card.name.clone(), id);
            pool.insert(id, card);
        }

        Self {
            spec,
            pool,
            names,
            main_deck: BTreeMap::new(),
            basic_lands: BTreeMap::new(),
            role_counts: BTreeMap::new(),
        }
    }

    pub fn total_cards(&self) -> usize {
        self.main_deck.values().sum::<usize>() + self.basic_lands.values().sum::<usize>()
    }

    pub fn copy_limit(&self) -> usize {
        self.spec.format.copy_limit()
    }

    pub fn id(&self, name: &str) -> Option<CardID> {
        self.names.get(name).copied()
    }

    pub fn card(&self, id: CardID) -> Option<&AnalyzedCard> {
        self.pool.get(&id)
    }

    pub fn quantity(&self, id: CardID) -> usize {
        self.main_deck.get(&id).copied().unwrap_or(0)
    }

    pub fn quantity_of(&self, name: &str) -> usize {
        self.id(name).map_or(0, |id| self.quantity(id))
    }

    pub fn role_count(&self, role: Role) -> usize {
        self.role_counts.get(&role).copied().unwrap_or(0)
    }

    pub fn role_counts(&self) -> &BTreeMap<Role, usize> {
        &self.role_counts
    }

    /// Pool cards in first-seen order.
    pub fn pool(&self) -> impl Iterator<Item = (CardID, &AnalyzedCard)> {
        self.pool.iter().map(|(id, card)| (*id, card))
    }

    /// Chosen pool cards with their quantities, in first-seen order.
    pub fn chosen(&self) -> impl Iterator<Item = (&AnalyzedCard, usize)> {
        let pool = &self.pool;
        self.main_deck
            .iter()
            .filter_map(move |(id, qty)| pool.get(id).map(|card| (card, *qty)))
    }

    /// Another copy would stay within both the owned quantity and the
    /// format's copy limit.
    pub fn can_add(&self, id: CardID) -> bool {
        match self.pool.get(&id) {
            Some(card) => {
                let current = self.quantity(id);
                current < card.quantity && current < self.copy_limit()
            }
            None => false,
        }
    }

    pub fn add_card(&mut self, name: &str) -> bool {
        match self.id(name) {
            Some(id) => self.add(id),
            None => false,
        }
    }

    /// Adds one copy and counts every role it carries. Leaves the ledger
    /// untouched and returns false if the copy isn't allowed.
    pub fn add(&mut self, id: CardID) -> bool {
        if !self.can_add(id) {
            return false;
        }
        let Some(card) = self.pool.get(&id) else {
            return false;
        };

        *self.main_deck.entry(id).or_insert(0) += 1;
        for role in card.roles() {
            *self.role_counts.entry(*role).or_insert(0) += 1;
        }
        trace!("deck: added '{}', now {} cards", card.name, self.total_cards());
        true
    }

    pub fn add_basic_lands(&mut self, lands: &BTreeMap<ManaType, usize>) {
        for (color, count) in lands {
            *self.basic_lands.entry(*color).or_insert(0) += count;
        }
    }

    pub fn into_decklist(self, message: String) -> Decklist {
        let mut main_deck: BTreeMap<String, usize> = BTreeMap::new();
        for (card, qty) in self.chosen() {
            *main_deck.entry(card.name.clone()).or_insert(0) += qty;
        }
        for (color, count) in &self.basic_lands {
            if *count > 0 {
                *main_deck.entry(color.basic_land().to_string()).or_insert(0) += count;
            }
        }
        Decklist {
            main_deck,
            sideboard: BTreeMap::new(),
            message,
        }
    }
}

/// The finished list. The sideboard is always empty for now.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Decklist {
    pub main_deck: BTreeMap<String, usize>,
    pub sideboard: BTreeMap<String, usize>,
    pub message: String,
}

impl Decklist {
    pub fn empty(message: impl Into<String>) -> Self {
        Self {
            main_deck: BTreeMap::new(),
            sideboard: BTreeMap::new(),
            message: message.into(),
        }
    }

    pub fn total_cards(&self) -> usize {
        self.main_deck.values().sum()
    }
}
