use std::collections::HashMap;

use log::{debug, info};

use crate::engine::prelude::*;

/// Keeps the owned cards that are playable under `spec` and analyzes them.
///
/// A card survives when its legality in the spec's format is `legal` or
/// `restricted` and its color identity fits inside the spec's. Printings of
/// the same name are merged into one entry at the first one's position, with
/// their quantities summed.
pub fn filter_pool(owned: &[OwnedCard], spec: &DeckSpec, classifier: &RoleClassifier) -> Vec<AnalyzedCard> {
    let mut pool: Vec<AnalyzedCard> = Vec::new();
    let mut seen: HashMap<&str, usize> = HashMap::new();

    for line in owned {
        let card = &line.card;
        let legality = card.legality(&spec.format);
        if !legality.is_playable() {
            debug!("pool: dropping '{}', {:?} in {}", card.name, legality, spec.format);
            continue;
        }
        if !card.color_identity.is_subset_of(&spec.color_identity) {
            debug!("pool: dropping '{}', identity {} is outside {}", card.name, card.color_identity, spec.color_identity);
            continue;
        }

        match seen.get(card.name.as_str()) {
            Some(&idx) => pool[idx].quantity += line.quantity,
            None => {
                seen.insert(&card.name, pool.len());
                pool.push(AnalyzedCard::analyze(card, line.quantity, classifier));
            }
        }
    }

    info!("pool: found and analyzed {} unique buildable cards", pool.len());
    pool
}
