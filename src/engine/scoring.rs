use crate::engine::prelude::*;

pub const BASE_SCORE: f64 = 1.0;
/// Bonus for a role nobody in the deck fills yet.
pub const ROLE_BONUS: f64 = 10.0;
/// Mana value above which a spell starts losing points.
pub const CURVE_CEILING: f64 = 5.0;
pub const CURVE_PENALTY: f64 = 0.5;

/// How much the deck wants one more copy of `card` right now.
///
/// Every targeted role still below its target adds a bonus that shrinks
/// linearly to zero at the target. Roles with a zero target give nothing.
/// Spells above the curve ceiling lose half a point per mana over it.
pub fn score_card(card: &AnalyzedCard, deck: &DeckConstruction) -> f64 {
    let mut score = BASE_SCORE;

    for role in card.roles() {
        let Some(target) = deck.spec.target_for(*role) else { continue };
        let current = deck.role_count(*role);
        if target > 0 && current < target {
            score += ROLE_BONUS * (1.0 - current as f64 / target as f64);
        }
    }

    if card.mana_value > CURVE_CEILING {
        score -= (card.mana_value - CURVE_CEILING) * CURVE_PENALTY;
    }

    score
}
