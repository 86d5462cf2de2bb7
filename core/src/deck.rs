use alloc::vec::Vec;
use core::ops::Index;
use rand::prelude::*;
use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub id: CardId,
    pub symbol: Symbol,
    pub is_flipped: bool,
    pub is_matched: bool,
}

impl Card {
    pub const fn new(id: CardId, symbol: Symbol) -> Self {
        Self {
            id,
            symbol,
            is_flipped: false,
            is_matched: false,
        }
    }

    /// Whether the face should be shown, matched cards stay revealed.
    pub const fn is_face_up(&self) -> bool {
        self.is_flipped || self.is_matched
    }

    fn reset(&mut self) {
        self.is_flipped = false;
        self.is_matched = false;
    }
}

/// Cards in board order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Lays out the symbols in the given order, ids follow the position.
    pub fn from_symbols<I>(symbols: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Symbol>,
    {
        let cards = symbols
            .into_iter()
            .enumerate()
            .map(|(i, symbol)| Card::new(i as CardId, symbol.into()))
            .collect();
        Self { cards }
    }

    /// Same cards in a new random order, every card face down again.
    pub fn reshuffled(mut self, seed: u64) -> Self {
        let mut rng = SmallRng::seed_from_u64(seed);
        self.cards.shuffle(&mut rng);
        self.cards.iter_mut().for_each(Card::reset);
        log::debug!("Reshuffled deck of {} cards", self.cards.len());
        self
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    pub fn card(&self, id: CardId) -> Option<&Card> {
        self.cards.iter().find(|card| card.id == id)
    }

    pub(crate) fn card_mut(&mut self, id: CardId) -> Option<&mut Card> {
        self.cards.iter_mut().find(|card| card.id == id)
    }
}

impl Index<usize> for Deck {
    type Output = Card;

    fn index(&self, position: usize) -> &Self::Output {
        &self.cards[position]
    }
}
