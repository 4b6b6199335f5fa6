//! Deck generation.
//!
//! A deck is `2 × pair_count` items. Twins share the mode's dimension, taken
//! from the catalog in order; every other dimension is drawn independently
//! per item, so twins may or may not look alike otherwise.

use tracing::debug;

use crate::catalog::{Accessory, Catalog, Category, Color, Size, WheelCount};
use crate::core::{ConfigError, GameRng, PairCounts, SessionConfig};
use crate::items::{Item, ItemId, PairId};
use crate::modes::{rule_for, Difficulty, GameMode};

/// Builds shuffled decks for a (mode, difficulty) cell.
#[derive(Clone, Debug, Default)]
pub struct DeckGenerator {
    pair_counts: PairCounts,
}

impl DeckGenerator {
    /// Create a generator from a validated configuration.
    pub fn new(config: &SessionConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            pair_counts: config.pair_counts,
        })
    }

    /// Pairs dealt for a difficulty.
    #[must_use]
    pub fn pair_count(&self, difficulty: Difficulty) -> usize {
        self.pair_counts.for_difficulty(difficulty)
    }

    /// Deal a shuffled deck.
    #[must_use]
    pub fn generate(&self, mode: GameMode, difficulty: Difficulty, rng: &mut GameRng) -> Vec<Item> {
        let rule = rule_for(mode);
        let pair_count = self.pair_count(difficulty);
        let mut items = Vec::with_capacity(pair_count * 2);

        for pair_index in 0..pair_count {
            let pair_id = PairId::new(pair_index as u32);
            for _twin in 0..2 {
                let id = ItemId::new(items.len() as u32);
                let mut item = random_item(id, pair_id, rng);
                (rule.assign)(&mut item, pair_index);
                items.push(item);
            }
        }

        rng.shuffle(&mut items);
        debug!(%mode, %difficulty, pairs = pair_count, "dealt deck");
        items
    }

    /// Parse tokens, then deal. Unknown tokens are reported, never substituted.
    pub fn generate_from_tokens(
        &self,
        mode: &str,
        difficulty: &str,
        rng: &mut GameRng,
    ) -> Result<Vec<Item>, ConfigError> {
        let mode: GameMode = mode.parse()?;
        let difficulty: Difficulty = difficulty.parse()?;
        Ok(self.generate(mode, difficulty, rng))
    }
}

fn random_item(id: ItemId, pair_id: PairId, rng: &mut GameRng) -> Item {
    Item {
        id,
        pair_id,
        color: Color::random(rng),
        size: Size::random(rng),
        wheels: WheelCount::random(rng),
        accessory: Accessory::random(rng),
        category: Category::random(rng),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::AttributeValue;
    use rustc_hash::FxHashMap;

    fn generator() -> DeckGenerator {
        DeckGenerator::new(&SessionConfig::default()).unwrap()
    }

    #[test]
    fn test_deck_size() {
        let generator = generator();
        let mut rng = GameRng::new(1);
        assert_eq!(generator.generate(GameMode::Colors, Difficulty::Easy, &mut rng).len(), 4);
        assert_eq!(generator.generate(GameMode::Colors, Difficulty::Medium, &mut rng).len(), 6);
        assert_eq!(generator.generate(GameMode::Colors, Difficulty::Hard, &mut rng).len(), 8);
    }

    #[test]
    fn test_twins_share_mode_value() {
        let generator = generator();
        let mut rng = GameRng::new(2);
        let deck = generator.generate(GameMode::Sizes, Difficulty::Hard, &mut rng);

        let mut by_pair: FxHashMap<PairId, Vec<Item>> = FxHashMap::default();
        for item in deck {
            by_pair.entry(item.pair_id).or_default().push(item);
        }

        assert_eq!(by_pair.len(), 4);
        for (pair_id, twins) in by_pair {
            assert_eq!(twins.len(), 2);
            assert_eq!(twins[0].size, twins[1].size);
            assert_eq!(
                AttributeValue::Size(twins[0].size),
                rule_for(GameMode::Sizes).value_for_pair(pair_id.index())
            );
        }
    }

    #[test]
    fn test_ids_unique() {
        let generator = generator();
        let mut rng = GameRng::new(3);
        let deck = generator.generate(GameMode::Where, Difficulty::Hard, &mut rng);

        let mut ids: Vec<_> = deck.iter().map(|i| i.id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), deck.len());
    }

    #[test]
    fn test_same_seed_same_deck() {
        let generator = generator();
        let a = generator.generate(GameMode::Details, Difficulty::Medium, &mut GameRng::new(9));
        let b = generator.generate(GameMode::Details, Difficulty::Medium, &mut GameRng::new(9));
        assert_eq!(a, b);
    }

    #[test]
    fn test_catalog_cycles_past_its_length() {
        let config = SessionConfig::default().with_pair_counts(PairCounts {
            easy: 4,
            medium: 4,
            hard: 4,
        });
        let generator = DeckGenerator::new(&config).unwrap();
        let deck = generator.generate(GameMode::Wheels, Difficulty::Easy, &mut GameRng::new(5));

        // Pair 3 wraps around to the first wheel count
        for item in deck.iter().filter(|i| i.pair_id == PairId::new(3)) {
            assert_eq!(item.wheels, WheelCount::Two);
        }
    }

    #[test]
    fn test_unknown_tokens() {
        let generator = generator();
        let mut rng = GameRng::new(0);
        assert_eq!(
            generator.generate_from_tokens("boats", "easy", &mut rng),
            Err(ConfigError::UnknownMode("boats".into()))
        );
        assert_eq!(
            generator.generate_from_tokens("wheels", "insane", &mut rng),
            Err(ConfigError::UnknownDifficulty("insane".into()))
        );
        assert_eq!(generator.generate_from_tokens("wheels", "easy", &mut rng).unwrap().len(), 4);
    }

    #[test]
    fn test_zero_pairs_rejected() {
        let config = SessionConfig::default().with_pair_counts(PairCounts {
            easy: 0,
            medium: 3,
            hard: 4,
        });
        assert_eq!(
            DeckGenerator::new(&config).err(),
            Some(ConfigError::ZeroPairs(Difficulty::Easy))
        );
    }
}
