use std::collections::BTreeMap;

use log::{debug, info};

use crate::engine::prelude::*;

pub const NO_BUILDABLE_CARDS: &str = "No buildable cards found.";

/// A decklist along with what the builder saw while making it.
#[derive(Clone, Debug)]
pub struct DeckBuild {
    pub decklist: Decklist,
    pub diagnostics: BuildDiagnostics,
}

#[derive(Clone, Debug, Default)]
pub struct BuildDiagnostics {
    pub expected_size: usize,
    pub nonland_target: usize,
    pub nonland_chosen: usize,
    pub nonbasic_lands: Vec<String>,
    pub basic_lands: BTreeMap<ManaType, usize>,
    pub role_counts: BTreeMap<Role, usize>,
}

/// Runs the whole pipeline: filter the collection, pick spells greedily by
/// score, then lay down the mana base.
#[derive(Clone)]
pub struct DeckBuilder {
    classifier: RoleClassifier,
}

impl DeckBuilder {
    pub fn new(classifier: RoleClassifier) -> Self {
        Self { classifier }
    }

    pub fn build(&self, owned: &[OwnedCard], spec: &DeckSpec) -> DeckBuild {
        let pool = filter_pool(owned, spec, &self.classifier);
        self.build_from_pool(pool, spec)
    }

    /// Same as [`DeckBuilder::build`] for a pool that was already filtered.
    pub fn build_from_pool(&self, pool: Vec<AnalyzedCard>, spec: &DeckSpec) -> DeckBuild {
        let expected_size = spec.format.deck_size();
        let nonland_target = spec.nonland_target();
        let mut diagnostics = BuildDiagnostics {
            expected_size,
            nonland_target,
            ..BuildDiagnostics::default()
        };

        if pool.is_empty() {
            info!("builder: nothing to build with");
            return DeckBuild { decklist: Decklist::empty(NO_BUILDABLE_CARDS), diagnostics };
        }

        info!("builder: building a {} deck in {} from {} cards", spec.format, spec.color_identity, pool.len());
        let mut deck = DeckConstruction::new(spec, pool);

        select_nonland(&mut deck, nonland_target);
        diagnostics.nonland_chosen = deck.total_cards();

        diagnostics.nonbasic_lands = add_nonbasic_lands(&mut deck);
        let lands_to_add = spec.land_slots().saturating_sub(diagnostics.nonbasic_lands.len());
        diagnostics.basic_lands = synthesize_basics(&deck, lands_to_add);
        deck.add_basic_lands(&diagnostics.basic_lands);

        diagnostics.role_counts = deck.role_counts().clone();

        let total = deck.total_cards();
        let mut message = format!("Deck built successfully with {total} cards!");
        if total != expected_size {
            message += &format!(
                " WARNING: Final deck count is {total}, which is incorrect for the '{}' format.",
                spec.format
            );
        }
        info!("builder: {}", message);

        DeckBuild { decklist: deck.into_decklist(message), diagnostics }
    }
}

impl Default for DeckBuilder {
    fn default() -> Self {
        Self::new(RoleClassifier::standard())
    }
}

/// Builds with the standard classifier and returns only the list.
pub fn build_deck(owned: &[OwnedCard], spec: &DeckSpec) -> Decklist {
    DeckBuilder::default().build(owned, spec).decklist
}

/// Adds the best scoring nonland card, one copy at a time, until the deck
/// holds `target` cards or nothing more can be added.
///
/// Every candidate is rescored against the current deck on each pass. On
/// equal scores the card seen first in the pool wins. There is no score
/// floor: the best candidate is taken even when it scores -1 or lower.
pub fn select_nonland(deck: &mut DeckConstruction, target: usize) {
    while deck.total_cards() < target {
        let mut best: Option<(CardID, f64)> = None;
        for (id, card) in deck.pool() {
            if card.is_land() || !deck.can_add(id) {
                continue;
            }
            let score = score_card(card, deck);
            if best.map_or(true, |(_, best_score)| score > best_score) {
                best = Some((id, score));
            }
        }

        match best {
            Some((id, score)) => {
                deck.add(id);
                if let Some(card) = deck.card(id) {
                    debug!("builder: picked '{}' at {:.2}", card.name, score);
                }
            }
            None => {
                info!("builder: ran out of cards at {} of {} spells", deck.total_cards(), target);
                break;
            }
        }
    }
}

/// Takes utility lands from the pool, up to (but not reaching) half of the
/// land slots. Returns the names added.
pub fn add_nonbasic_lands(deck: &mut DeckConstruction) -> Vec<String> {
    let land_slots = deck.spec.land_slots();
    let candidates: Vec<(CardID, String)> = deck
        .pool()
        .filter(|(id, card)| card.is_land() && !card.types.is_basic_land_type() && deck.quantity(*id) == 0)
        .map(|(id, card)| (id, card.name.clone()))
        .collect();

    let mut added = vec![];
    for (id, name) in candidates {
        if 2 * added.len() >= land_slots {
            break;
        }
        if deck.add(id) {
            debug!("builder: added utility land '{}'", name);
            added.push(name);
        }
    }
    added
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::card::testing::*;

    use rand::{rngs::StdRng, seq::SliceRandom, Rng, SeedableRng};

    fn spec(format: &str, colors: &str) -> DeckSpec {
        DeckSpec {
            format: Format::new(format),
            color_identity: colors.parse().unwrap(),
            target_creatures: 0,
            target_removal: 0,
            target_ramp: 0,
            target_draw: 0,
            target_board_wipes: 0,
            target_lands: 0,
        }
    }

    #[test]
    fn empty_pool_gives_empty_list() {
        let list = build_deck(&[], &DeckSpec::default());
        assert_eq!(list, Decklist::empty("No buildable cards found."));
    }

    #[test]
    fn fully_filtered_pool_gives_empty_list() {
        let owned = vec![owned(4, creature("Merfolk", "{U}", "U", 1.0))];
        let list = build_deck(&owned, &spec("modern", "WB"));
        assert_eq!(list.message, NO_BUILDABLE_CARDS);
        assert!(list.main_deck.is_empty());
    }

    #[test]
    fn single_creature_stops_at_the_nonland_target() {
        // 59 lands leave exactly one nonland slot
        let spec = DeckSpec { target_creatures: 1, target_lands: 59, ..spec("modern", "") };
        let owned = vec![owned(3, creature("Construct", "", "", 0.0))];
        let build = DeckBuilder::default().build(&owned, &spec);

        assert_eq!(build.decklist.main_deck.get("Construct"), Some(&1));
        assert_eq!(build.diagnostics.nonland_chosen, 1);
        assert_eq!(build.decklist.main_deck.get("Wastes"), Some(&59));
        assert_eq!(build.decklist.total_cards(), 60);
        assert_eq!(build.decklist.message, "Deck built successfully with 60 cards!");
    }

    #[test]
    fn short_decks_carry_a_warning() {
        let spec = DeckSpec { target_creatures: 1, ..spec("modern", "") };
        let owned = vec![owned(3, creature("Construct", "", "", 0.0))];
        let list = build_deck(&owned, &spec);

        assert_eq!(list.main_deck.get("Construct"), Some(&3));
        assert_eq!(
            list.message,
            "Deck built successfully with 3 cards! WARNING: Final deck count is 3, which is incorrect for the 'modern' format."
        );
    }

    #[test]
    fn greedy_loop_follows_role_needs() {
        let spec = DeckSpec {
            target_creatures: 2,
            target_removal: 2,
            target_lands: 56,
            ..spec("modern", "R")
        };
        let owned = vec![
            owned(4, creature("Goblin", "{R}", "R", 1.0)),
            owned(4, printing("Shock", "Instant", "Shock deals 2 damage to any target.", "{R}", "R", 1.0)),
            owned(4, printing("Filler", "Enchantment", "", "{R}", "R", 1.0)),
        ];
        let build = DeckBuilder::default().build(&owned, &spec);
        let deck = &build.decklist.main_deck;
        assert_eq!(deck.get("Goblin"), Some(&2));
        assert_eq!(deck.get("Shock"), Some(&2));
        assert_eq!(deck.get("Filler"), None);
        assert_eq!(build.diagnostics.role_counts.get(&Role::Threat), Some(&2));
        assert_eq!(build.diagnostics.role_counts.get(&Role::Removal), Some(&2));
    }

    #[test]
    fn ties_go_to_the_first_card_seen() {
        let spec = DeckSpec { target_lands: 59, ..spec("modern", "") };
        let owned = vec![
            owned(1, printing("First", "Artifact", "", "{1}", "", 1.0)),
            owned(1, printing("Second", "Artifact", "", "{1}", "", 1.0)),
        ];
        let list = build_deck(&owned, &spec);
        assert_eq!(list.main_deck.get("First"), Some(&1));
        assert_eq!(list.main_deck.get("Second"), None);
    }

    #[test]
    fn expensive_cards_are_still_picked_when_nothing_else_is_left() {
        let spec = DeckSpec { target_lands: 58, ..spec("modern", "G") };
        let owned = vec![owned(1, printing("Huge", "Sorcery", "", "{9}{G}", "G", 10.0))];

        let pool = filter_pool(&owned, &spec, &RoleClassifier::standard());
        let deck = DeckConstruction::new(&spec, pool);
        let (_, huge) = deck.pool().next().unwrap();
        assert!(score_card(huge, &deck) < -1.0);

        let list = build_deck(&owned, &spec);
        assert_eq!(list.main_deck.get("Huge"), Some(&1));
        assert_eq!(list.main_deck.get("Forest"), Some(&58));
        assert!(list.message.contains("WARNING: Final deck count is 59"), "{}", list.message);
    }

    #[test]
    fn custom_classifier_drives_the_picks() {
        let spec = DeckSpec { target_removal: 1, target_lands: 59, ..spec("modern", "") };
        let owned = vec![
            owned(1, printing("Plain Rock", "Artifact", "", "{1}", "", 1.0)),
            owned(1, printing("Sac Outlet", "Artifact", "Sacrifice a creature: Scry 1.", "{1}", "", 1.0)),
        ];

        let standard = DeckBuilder::default().build(&owned, &spec);
        assert_eq!(standard.decklist.main_deck.get("Plain Rock"), Some(&1));

        let classifier = RoleClassifier::standard()
            .with_rule(TextRule::new(TextMatch::pattern(r"\bsacrifice\b"), vec![Role::Removal]));
        let custom = DeckBuilder::new(classifier).build(&owned, &spec);
        assert_eq!(custom.decklist.main_deck.get("Sac Outlet"), Some(&1));
        assert_eq!(custom.diagnostics.role_counts.get(&Role::Removal), Some(&1));
    }

    #[test]
    fn utility_lands_fill_less_than_half_the_land_slots() {
        let spec = DeckSpec { target_lands: 5, ..spec("modern", "W") };
        let mut collection: Vec<OwnedCard> = (0..5)
            .map(|i| owned(1, printing(&format!("Utility {i}"), "Land", "{T}: Add {C}.", "", "", 0.0)))
            .collect();
        collection.push(owned_basic("Plains", "Basic Land — Plains"));
        collection.push(owned(4, creature("Knight", "{W}", "W", 1.0)));

        let build = DeckBuilder::default().build(&collection, &spec);
        assert_eq!(build.diagnostics.nonbasic_lands, vec!["Utility 0", "Utility 1", "Utility 2"]);
        assert_eq!(build.diagnostics.basic_lands, BTreeMap::from([(ManaType::White, 2)]));
        assert_eq!(build.decklist.main_deck.get("Plains"), Some(&2));
        assert_eq!(build.decklist.main_deck.get("Utility 3"), None);
    }

    fn owned_basic(name: &str, type_line: &str) -> OwnedCard {
        owned(20, printing(name, type_line, "({T}: Add {W}.)", "", "", 0.0))
    }

    #[test]
    fn land_roles_never_enter_the_spell_phase() {
        let spec = DeckSpec { target_lands: 0, ..spec("modern", "W") };
        let owned = vec![
            owned(4, printing("Dryad Arbor", "Land Creature — Forest Dryad", "", "", "", 0.0)),
            owned(1, creature("Knight", "{W}", "W", 1.0)),
        ];
        let list = build_deck(&owned, &spec);
        assert_eq!(list.main_deck.get("Dryad Arbor"), None);
        assert_eq!(list.main_deck.get("Knight"), Some(&1));
    }

    #[test]
    fn oversized_land_target_never_overflows_the_deck() {
        let spec = DeckSpec { target_lands: 80, ..spec("modern", "W") };
        let owned = vec![owned(4, creature("Knight", "{W}", "W", 1.0))];
        let list = build_deck(&owned, &spec);
        assert_eq!(list.total_cards(), 60);
        assert_eq!(list.main_deck.get("Knight"), None);
    }

    fn random_card(rng: &mut StdRng, i: usize) -> OwnedCard {
        let texts = [
            "",
            "{T}: Add {G}.",
            "Draw two cards.",
            "Destroy target creature.",
            "Destroy all creatures.",
            "Counter target spell.",
            "Creatures you control get +1/+1.",
            "When this creature enters, draw a card.",
        ];
        let types = ["Creature — Elf", "Instant", "Sorcery", "Artifact", "Enchantment", "Land", "Basic Land — Swamp"];
        let colors = ["", "W", "B", "G", "WB", "BG"];

        let color = *colors.choose(rng).unwrap();
        let cost: String = color.chars().map(|c| format!("{{{c}}}")).collect();
        let card = printing(
            &format!("Card {i}"),
            types.choose(rng).unwrap(),
            texts.choose(rng).unwrap(),
            &cost,
            color,
            rng.gen_range(0..9) as f64,
        );
        owned(rng.gen_range(0..6), card)
    }

    #[test]
    fn random_builds_hold_the_deck_invariants() {
        let mut rng = StdRng::seed_from_u64(0x0dec_c0de);
        let builder = DeckBuilder::default();

        for round in 0..200 {
            let format = if round % 2 == 0 { "commander" } else { "modern" };
            let colors = ["", "W", "WB", "BG", "WBG"][round % 5];
            let spec = DeckSpec {
                format: Format::new(format),
                color_identity: colors.parse().unwrap(),
                target_creatures: rng.gen_range(0..30),
                target_removal: rng.gen_range(0..12),
                target_ramp: rng.gen_range(0..12),
                target_draw: rng.gen_range(0..12),
                target_board_wipes: rng.gen_range(0..4),
                target_lands: rng.gen_range(0..110),
            };
            let owned: Vec<OwnedCard> = (0..rng.gen_range(0..80)).map(|i| random_card(&mut rng, i)).collect();
            let owned_by_name: BTreeMap<String, usize> = owned.iter()
                .map(|line| (line.card.name.clone(), line.quantity))
                .collect();

            let build = builder.build(&owned, &spec);
            let list = &build.decklist;
            assert!(list.total_cards() <= spec.format.deck_size(), "round {round}: {}", list.total_cards());
            assert!(list.sideboard.is_empty());

            for (name, qty) in &list.main_deck {
                if let Some(owned_qty) = owned_by_name.get(name) {
                    assert!(*qty <= spec.format.copy_limit(), "round {round}: {name} x{qty}");
                    assert!(qty <= owned_qty, "round {round}: {name} x{qty} of {owned_qty}");
                }
            }

            let lands: usize = build.diagnostics.nonbasic_lands.len() + build.diagnostics.basic_lands.values().sum::<usize>();
            if !list.main_deck.is_empty() {
                assert_eq!(lands, spec.land_slots(), "round {round}");
            }
        }
    }

    #[test]
    fn role_counts_match_the_chosen_cards() {
        let mut rng = StdRng::seed_from_u64(7);
        let spec = DeckSpec {
            format: Format::new("modern"),
            color_identity: "WBG".parse().unwrap(),
            target_lands: 20,
            ..DeckSpec::default()
        };
        let owned: Vec<OwnedCard> = (0..60).map(|i| random_card(&mut rng, i)).collect();
        let pool = filter_pool(&owned, &spec, &RoleClassifier::standard());
        let mut deck = DeckConstruction::new(&spec, pool);

        select_nonland(&mut deck, spec.nonland_target());
        add_nonbasic_lands(&mut deck);

        for role in Role::ALL {
            let expected: usize = deck.chosen()
                .filter(|(card, _)| card.has_role(role))
                .map(|(_, qty)| qty)
                .sum();
            assert_eq!(deck.role_count(role), expected, "{role}");
        }
    }
}
