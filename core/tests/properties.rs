//! Invariants of the turn controller over random decks and random click sequences.

use std::collections::{BTreeMap, BTreeSet};

use memorito_core::{
    CardId, Deck, DeckGenerator, FlipOutcome, GameConfig, GameError, GameSession, MatchEngine,
    PairCount, Player, RandomDeckGenerator, ResolveOutcome, Scores, Selection, Symbol, Winner,
};
use proptest::prelude::*;

fn pool(size: usize) -> Vec<Symbol> {
    (0..size).map(|i| Symbol::from(format!("s{i}"))).collect()
}

fn config(pairs: PairCount) -> GameConfig {
    GameConfig::new(pool(20), pairs).unwrap()
}

fn assert_deck_integrity(deck: &Deck, pairs: PairCount) {
    assert_eq!(deck.len(), 2 * usize::from(pairs));

    let ids: BTreeSet<CardId> = deck.iter().map(|card| card.id).collect();
    let expected: BTreeSet<CardId> = (0..deck.len() as CardId).collect();
    assert_eq!(ids, expected);

    let mut counts = BTreeMap::new();
    for card in deck.iter() {
        *counts.entry(card.symbol.clone()).or_insert(0) += 1;
    }
    assert_eq!(counts.len(), usize::from(pairs));
    assert!(counts.values().all(|&count| count == 2));
}

fn play(engine: &mut MatchEngine, first: CardId, second: CardId) -> ResolveOutcome {
    engine.flip_card(first).unwrap();
    let pair = engine.flip_card(second).unwrap().pending_pair().unwrap();
    engine.resolve_pending_pair(pair).unwrap()
}

proptest! {
    #[test]
    fn generated_decks_hold_every_symbol_twice(seed in any::<u64>(), pairs in 1u8..=20) {
        let deck = RandomDeckGenerator::new(seed).generate(&config(pairs));
        assert_deck_integrity(&deck, pairs);
    }

    #[test]
    fn reshuffled_decks_keep_integrity(seed in any::<u64>(), reseed in any::<u64>(), pairs in 1u8..=20) {
        let mut session = GameSession::new(config(pairs), seed);
        session.reshuffle(reseed);
        assert_deck_integrity(session.engine().deck(), pairs);
    }

    #[test]
    fn random_play_keeps_invariants(
        seed in any::<u64>(),
        pairs in 1u8..=8,
        clicks in prop::collection::vec(any::<u16>(), 0..400),
    ) {
        let mut engine = MatchEngine::new(RandomDeckGenerator::new(seed).generate(&config(pairs)));
        let deck_len = engine.deck().len() as u16;

        for click in clicks {
            // reach slightly past the deck so unknown ids are exercised too
            let id = click % (deck_len + 2);
            let before = engine.clone();
            let matched_before = engine.matched().clone();
            let player_before = engine.current_player();
            let was_over = engine.is_over();

            match engine.flip_card(id) {
                Ok(FlipOutcome::PairPending(pair)) => {
                    prop_assert_eq!(engine.selection().len(), 2);
                    let outcome = engine.resolve_pending_pair(pair).unwrap();
                    if outcome.is_match() {
                        prop_assert_eq!(engine.current_player(), player_before);
                    } else {
                        prop_assert_eq!(engine.current_player(), player_before.other());
                    }
                    prop_assert_eq!(engine.selection(), Selection::Empty);
                }
                Ok(FlipOutcome::Flipped) => {
                    prop_assert_eq!(engine.selection(), Selection::One(id));
                }
                Err(_) => {
                    prop_assert_eq!(&engine, &before);
                }
            }

            if was_over {
                prop_assert!(engine.is_over());
                prop_assert_eq!(engine.matched(), &matched_before);
            }
            prop_assert!(matched_before.is_subset(engine.matched()));
            for id in engine.matched() {
                prop_assert!(engine.card(*id).unwrap().is_matched);
            }
            prop_assert_eq!(
                engine.scores().total() as usize,
                engine.matched().len() / 2
            );
            prop_assert_eq!(engine.is_over(), engine.matched().len() == engine.deck().len());
        }
    }
}

#[test]
fn flips_after_game_over_are_rejected_for_every_card() {
    let mut engine = MatchEngine::new(Deck::from_symbols(["A", "B", "A", "B"]));
    play(&mut engine, 0, 2);
    play(&mut engine, 1, 3);

    assert!(engine.is_over());
    for id in 0..4 {
        assert_eq!(engine.flip_card(id), Err(GameError::AlreadyEnded));
    }
    assert_eq!(engine.scores(), Scores::new(2, 0));
    assert_eq!(engine.winner(), Some(Winner::Player(Player::One)));
}

#[test]
fn tie_when_both_players_find_the_same_number_of_pairs() {
    let mut engine = MatchEngine::new(Deck::from_symbols(["A", "B", "C", "D", "A", "B", "C", "D"]));

    assert_eq!(play(&mut engine, 0, 4), ResolveOutcome::Matched);
    assert_eq!(play(&mut engine, 1, 5), ResolveOutcome::Matched);
    assert_eq!(play(&mut engine, 2, 3), ResolveOutcome::Mismatched);
    assert_eq!(engine.current_player(), Player::Two);
    assert_eq!(play(&mut engine, 2, 6), ResolveOutcome::Matched);
    assert_eq!(play(&mut engine, 3, 7), ResolveOutcome::Completed);

    assert_eq!(engine.scores(), Scores::new(2, 2));
    assert_eq!(engine.winner(), Some(Winner::Tie));
    assert_eq!(engine.move_count(), 5);
}
