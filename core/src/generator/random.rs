use alloc::vec::Vec;

use super::*;

/// Picks a random subset of the symbol pool and deals every chosen symbol twice in random order.
#[derive(Clone, Debug, PartialEq)]
pub struct RandomDeckGenerator {
    seed: u64,
}

impl RandomDeckGenerator {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl DeckGenerator for RandomDeckGenerator {
    fn generate(self, config: &GameConfig) -> Deck {
        use rand::prelude::*;

        let mut rng = SmallRng::seed_from_u64(self.seed);
        let pairs = usize::from(config.pairs());

        let mut chosen = config.symbols().to_vec();
        chosen.shuffle(&mut rng);
        if chosen.len() < pairs {
            log::warn!(
                "Symbol pool too small, requested {} pairs but only {} symbols",
                pairs,
                chosen.len()
            );
        }
        chosen.truncate(pairs);

        let mut symbols: Vec<Symbol> = chosen.iter().chain(chosen.iter()).cloned().collect();
        symbols.shuffle(&mut rng);

        let deck = Deck::from_symbols(symbols);
        log::debug!("Generated deck of {} cards, seed: {}", deck.len(), self.seed);
        deck
    }
}
