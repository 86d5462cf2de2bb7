use alloc::collections::BTreeSet;
use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum EngineState {
    Active,
    Over,
}

impl EngineState {
    pub const fn is_over(self) -> bool {
        matches!(self, Self::Over)
    }
}

impl Default for EngineState {
    fn default() -> Self {
        Self::Active
    }
}

/// Face-up cards that have not been resolved yet.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Selection {
    Empty,
    One(CardId),
    Two(CardId, CardId),
}

impl Selection {
    pub const fn len(self) -> usize {
        match self {
            Self::Empty => 0,
            Self::One(_) => 1,
            Self::Two(_, _) => 2,
        }
    }

    pub const fn is_empty(self) -> bool {
        matches!(self, Self::Empty)
    }

    pub const fn contains(self, id: CardId) -> bool {
        match self {
            Self::Empty => false,
            Self::One(first) => first == id,
            Self::Two(first, second) => first == id || second == id,
        }
    }
}

impl Default for Selection {
    fn default() -> Self {
        Self::Empty
    }
}

/// The two cards of a turn, captured when the second one was flipped.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingPair {
    pub first: CardId,
    pub second: CardId,
    pub generation: Generation,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MatchEngine {
    deck: Deck,
    selection: Selection,
    matched: BTreeSet<CardId>,
    current_player: Player,
    scores: Scores,
    move_count: u32,
    state: EngineState,
    generation: Generation,
}

impl MatchEngine {
    pub fn new(deck: Deck) -> Self {
        Self::with_generation(deck, 0)
    }

    /// Fresh game whose pending pairs are tagged with `generation`.
    pub fn with_generation(deck: Deck, generation: Generation) -> Self {
        Self {
            deck,
            selection: Selection::Empty,
            matched: BTreeSet::new(),
            current_player: Player::One,
            scores: Scores::default(),
            move_count: 0,
            state: Default::default(),
            generation,
        }
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    pub fn matched(&self) -> &BTreeSet<CardId> {
        &self.matched
    }

    pub fn current_player(&self) -> Player {
        self.current_player
    }

    pub fn scores(&self) -> Scores {
        self.scores
    }

    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    pub fn state(&self) -> EngineState {
        self.state
    }

    pub fn is_over(&self) -> bool {
        self.state.is_over()
    }

    pub fn generation(&self) -> Generation {
        self.generation
    }

    pub fn card(&self, id: CardId) -> Option<&Card> {
        self.deck.card(id)
    }

    /// `None` while the game is still running.
    pub fn winner(&self) -> Option<Winner> {
        self.is_over().then(|| self.scores.winner())
    }

    pub fn pending_pair(&self) -> Option<PendingPair> {
        match self.selection {
            Selection::Two(first, second) => Some(PendingPair {
                first,
                second,
                generation: self.generation,
            }),
            _ => None,
        }
    }

    pub fn can_flip(&self, id: CardId) -> bool {
        self.check_flippable(id).is_ok()
    }

    pub fn flip_card(&mut self, id: CardId) -> Result<FlipOutcome> {
        self.check_flippable(id)?;

        let selection = match self.selection {
            Selection::Empty => Selection::One(id),
            Selection::One(first) => Selection::Two(first, id),
            Selection::Two(_, _) => return Err(GameError::ResolutionPending),
        };
        let card = self.deck.card_mut(id).ok_or(GameError::UnknownCard)?;
        card.is_flipped = true;
        self.selection = selection;
        log::trace!("{} flipped card {} ({})", self.current_player, id, card.symbol);

        Ok(match self.pending_pair() {
            Some(pair) => {
                self.move_count = self.move_count.saturating_add(1);
                FlipOutcome::PairPending(pair)
            }
            None => FlipOutcome::Flipped,
        })
    }

    pub fn resolve_pending_pair(&mut self, pair: PendingPair) -> Result<ResolveOutcome> {
        if self.pending_pair() != Some(pair) {
            log::debug!(
                "Dropping stale resolution {:?}, current generation: {}",
                pair,
                self.generation
            );
            return Err(GameError::StaleResolution);
        }

        let PendingPair { first, second, .. } = pair;
        let is_match = match (self.deck.card(first), self.deck.card(second)) {
            (Some(a), Some(b)) => a.symbol == b.symbol,
            _ => return Err(GameError::UnknownCard),
        };
        self.selection = Selection::Empty;

        if is_match {
            for id in [first, second] {
                if let Some(card) = self.deck.card_mut(id) {
                    card.is_matched = true;
                }
                self.matched.insert(id);
            }
            let player = self.current_player;
            self.scores[player] = self.scores[player].saturating_add(1);
            log::trace!("{} matched cards {} and {}", player, first, second);

            if self.check_completion() {
                Ok(ResolveOutcome::Completed)
            } else {
                Ok(ResolveOutcome::Matched)
            }
        } else {
            for id in [first, second] {
                if let Some(card) = self.deck.card_mut(id) {
                    card.is_flipped = false;
                }
            }
            self.current_player = self.current_player.other();
            log::trace!("Mismatch, turn passes to {}", self.current_player);
            Ok(ResolveOutcome::Mismatched)
        }
    }

    fn check_completion(&mut self) -> bool {
        if !self.deck.is_empty() && self.matched.len() == self.deck.len() {
            self.state = EngineState::Over;
            log::debug!("Game over, final scores: {:?}", self.scores);
        }
        self.state.is_over()
    }

    fn check_flippable(&self, id: CardId) -> Result<()> {
        if self.state.is_over() {
            return Err(GameError::AlreadyEnded);
        }
        if matches!(self.selection, Selection::Two(_, _)) {
            return Err(GameError::ResolutionPending);
        }

        let card = self.deck.card(id).ok_or(GameError::UnknownCard)?;
        if card.is_flipped || card.is_matched {
            Err(GameError::CardUnavailable)
        } else {
            Ok(())
        }
    }
}
