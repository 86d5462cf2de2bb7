use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

use crate::*;

/// Player-visible state of a single card, face-down cards do not leak their symbol.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CardView {
    pub id: CardId,
    pub symbol: Option<Symbol>,
    pub is_flipped: bool,
    pub is_matched: bool,
}

impl CardView {
    pub fn from_card(card: &Card) -> Self {
        Self {
            id: card.id,
            symbol: card.is_face_up().then(|| card.symbol.clone()),
            is_flipped: card.is_flipped,
            is_matched: card.is_matched,
        }
    }
}

/// Read-only snapshot handed to the presentation layer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    pub cards: Vec<CardView>,
    pub current_player: Player,
    pub scores: Scores,
    pub move_count: u32,
    pub is_over: bool,
    pub winner: Option<Winner>,
    /// A pair is face up and waiting for its resolution.
    pub resolving: bool,
}

impl Observation {
    pub fn from_engine(engine: &MatchEngine) -> Self {
        Self {
            cards: engine.deck().iter().map(CardView::from_card).collect(),
            current_player: engine.current_player(),
            scores: engine.scores(),
            move_count: engine.move_count(),
            is_over: engine.is_over(),
            winner: engine.winner(),
            resolving: engine.pending_pair().is_some(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hidden_cards_do_not_expose_symbols() {
        let mut engine = MatchEngine::new(Deck::from_symbols(["A", "B", "A", "B"]));
        engine.flip_card(0).unwrap();
        engine.flip_card(1).unwrap();

        let obs = Observation::from_engine(&engine);

        assert_eq!(obs.cards[0].symbol, Some(Symbol::from("A")));
        assert_eq!(obs.cards[1].symbol, Some(Symbol::from("B")));
        assert_eq!(obs.cards[2].symbol, None);
        assert!(obs.resolving);
        assert_eq!(obs.move_count, 1);
        assert_eq!(obs.winner, None);
    }

    #[test]
    fn finished_game_reports_winner() {
        let mut engine = MatchEngine::new(Deck::from_symbols(["A", "A"]));
        engine.flip_card(0).unwrap();
        let pair = engine.flip_card(1).unwrap().pending_pair().unwrap();
        engine.resolve_pending_pair(pair).unwrap();

        let obs = Observation::from_engine(&engine);

        assert!(obs.is_over);
        assert!(!obs.resolving);
        assert_eq!(obs.winner, Some(Winner::Player(Player::One)));
        assert!(obs.cards.iter().all(|card| card.is_matched && card.symbol.is_some()));
    }

    #[test]
    fn serializes_for_the_front_end() {
        let engine = MatchEngine::new(Deck::from_symbols(["A", "A"]));

        let json = serde_json::to_value(Observation::from_engine(&engine)).unwrap();

        assert_eq!(json["current_player"], "One");
        assert_eq!(json["scores"][0], 0);
        assert_eq!(json["scores"][1], 0);
        assert_eq!(json["cards"][0]["symbol"], serde_json::Value::Null);
    }
}
