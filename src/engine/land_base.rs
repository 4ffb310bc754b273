use std::collections::BTreeMap;

use log::{debug, info};

use crate::engine::prelude::*;

/// Colored pips per color, WUBRG ordered. Colors without pips are absent.
pub type PipCount = BTreeMap<ManaType, usize>;

/// Basic lands per color; `Colorless` stands for Wastes.
pub type BasicLandBase = BTreeMap<ManaType, usize>;

/// Pips across every chosen nonland card, one count per copy in the deck.
pub fn count_pips(deck: &DeckConstruction) -> PipCount {
    let mut pips = PipCount::new();
    for (card, qty) in deck.chosen().filter(|(card, _)| !card.is_land()) {
        for pip in card.cost.mana.iter().filter(|pip| pip.is_colored()) {
            *pips.entry(*pip).or_insert(0) += qty;
        }
    }
    pips
}

/// Splits `lands_to_add` basics across colors in proportion to the deck's
/// pips.
///
/// Without any pips everything goes to the first color of the spec's
/// identity, or to Wastes for a colorless identity. Otherwise each color gets
/// its rounded share and the rounding error is walked back one land at a
/// time: shortfalls go to the color with the most pips, overshoots come off
/// the color with the fewest pips that still has a land. Ties go to the
/// earlier color in WUBRG order.
pub fn synthesize_basics(deck: &DeckConstruction, lands_to_add: usize) -> BasicLandBase {
    let mut base = BasicLandBase::new();
    if lands_to_add == 0 {
        return base;
    }

    let pips = count_pips(deck);
    let total_pips: usize = pips.values().sum();
    if total_pips == 0 {
        let color = deck.spec.color_identity.first().unwrap_or(ManaType::Colorless);
        info!("lands: no colored pips, all {} basics go to {}", lands_to_add, color.basic_land());
        base.insert(color, lands_to_add);
        return base;
    }

    for (color, count) in &pips {
        let share = lands_to_add as f64 * *count as f64 / total_pips as f64;
        base.insert(*color, share.round() as usize);
    }
    debug!("lands: pips {:?}, rounded shares {:?}", pips, base);

    loop {
        let allocated: usize = base.values().sum();
        if allocated < lands_to_add {
            let Some(color) = most_pips(&pips) else { break };
            *base.entry(color).or_insert(0) += 1;
        } else if allocated > lands_to_add {
            let Some(color) = fewest_pips_with_land(&pips, &base) else { break };
            if let Some(count) = base.get_mut(&color) {
                *count -= 1;
            }
        } else {
            break;
        }
    }

    info!("lands: basic land base {:?}", base);
    base
}

fn most_pips(pips: &PipCount) -> Option<ManaType> {
    let mut best: Option<(ManaType, usize)> = None;
    for (color, count) in pips {
        if best.map_or(true, |(_, most)| *count > most) {
            best = Some((*color, *count));
        }
    }
    best.map(|(color, _)| color)
}

fn fewest_pips_with_land(pips: &PipCount, base: &BasicLandBase) -> Option<ManaType> {
    pips.iter()
        .filter(|(color, _)| base.get(*color).copied().unwrap_or(0) > 0)
        .min_by_key(|(_, count)| **count)
        .map(|(color, _)| *color)
}
