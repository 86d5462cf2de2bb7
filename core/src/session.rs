use crate::*;

/// Owns the running game and replaces it wholesale on every reset.
#[derive(Clone, Debug, PartialEq)]
pub struct GameSession {
    config: GameConfig,
    engine: MatchEngine,
}

impl GameSession {
    pub fn new(config: GameConfig, seed: u64) -> Self {
        let deck = RandomDeckGenerator::new(seed).generate(&config);
        Self {
            config,
            engine: MatchEngine::new(deck),
        }
    }

    /// Session around an already dealt deck.
    pub fn with_deck(config: GameConfig, deck: Deck) -> Self {
        Self {
            config,
            engine: MatchEngine::new(deck),
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn engine(&self) -> &MatchEngine {
        &self.engine
    }

    /// Deals a fresh deck, drawing a new set of symbols from the pool.
    pub fn new_game(&mut self, seed: u64) {
        let deck = RandomDeckGenerator::new(seed).generate(&self.config);
        self.replace_deck(deck);
        log::debug!("New game, generation: {}", self.engine.generation());
    }

    /// Keeps the symbols of the current deck and only changes their order.
    pub fn reshuffle(&mut self, seed: u64) {
        let deck = self.engine.deck().clone().reshuffled(seed);
        self.replace_deck(deck);
        log::debug!("Reshuffled game, generation: {}", self.engine.generation());
    }

    pub fn flip_card(&mut self, id: CardId) -> Result<FlipOutcome> {
        self.engine.flip_card(id)
    }

    pub fn resolve_pending_pair(&mut self, pair: PendingPair) -> Result<ResolveOutcome> {
        self.engine.resolve_pending_pair(pair)
    }

    pub fn observe(&self) -> Observation {
        Observation::from_engine(&self.engine)
    }

    fn replace_deck(&mut self, deck: Deck) {
        let generation = self.engine.generation().wrapping_add(1);
        self.engine = MatchEngine::with_generation(deck, generation);
    }
}
