#![no_std]

extern crate alloc;

use alloc::borrow::Cow;
use alloc::vec::Vec;
use core::fmt;
use serde::{Deserialize, Serialize};

pub use deck::*;
pub use engine::*;
pub use error::*;
pub use generator::*;
pub use observation::*;
pub use session::*;
pub use types::*;

mod deck;
mod engine;
mod error;
mod generator;
mod observation;
mod session;
mod types;

/// Opaque glyph printed on the face of a card, two cards match when their symbols are equal.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Symbol(Cow<'static, str>);

impl Symbol {
    pub const fn from_static(glyph: &'static str) -> Self {
        Self(Cow::Borrowed(glyph))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&'static str> for Symbol {
    fn from(glyph: &'static str) -> Self {
        Self::from_static(glyph)
    }
}

impl From<alloc::string::String> for Symbol {
    fn from(glyph: alloc::string::String) -> Self {
        Self(Cow::Owned(glyph))
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

pub const DEFAULT_SYMBOLS: [Symbol; 15] = [
    Symbol::from_static("💸"),
    Symbol::from_static("🏠"),
    Symbol::from_static("✨"),
    Symbol::from_static("💪"),
    Symbol::from_static("⏳"),
    Symbol::from_static("🏆"),
    Symbol::from_static("💚"),
    Symbol::from_static("🌿"),
    Symbol::from_static("💖"),
    Symbol::from_static("♻️"),
    Symbol::from_static("🎯"),
    Symbol::from_static("🏅"),
    Symbol::from_static("🪅"),
    Symbol::from_static("💎"),
    Symbol::from_static("🌹"),
];

#[derive(Clone, Debug, PartialEq)]
pub struct GameConfig {
    symbols: Vec<Symbol>,
    pairs: PairCount,
    reveal_delay_ms: u32,
    columns: u8,
}

impl GameConfig {
    pub const DEFAULT_PAIRS: PairCount = 15;
    pub const DEFAULT_REVEAL_DELAY_MS: u32 = 1000;
    pub const DEFAULT_COLUMNS: u8 = 6;

    pub fn new(symbols: Vec<Symbol>, pairs: PairCount) -> Result<Self> {
        if pairs == 0 {
            return Err(GameError::NoPairs);
        }
        if usize::from(pairs) > symbols.len() {
            return Err(GameError::NotEnoughSymbols {
                pairs: pairs.into(),
                symbols: symbols.len(),
            });
        }

        let has_duplicates = symbols
            .iter()
            .enumerate()
            .any(|(i, symbol)| symbols[..i].contains(symbol));
        if has_duplicates {
            log::warn!("Symbol pool contains duplicates, some pairs may share a glyph");
        }

        Ok(Self {
            symbols,
            pairs,
            reveal_delay_ms: Self::DEFAULT_REVEAL_DELAY_MS,
            columns: Self::DEFAULT_COLUMNS,
        })
    }

    /// Resolution always waits at least one millisecond so both cards get shown.
    pub fn with_reveal_delay_ms(mut self, reveal_delay_ms: u32) -> Self {
        self.reveal_delay_ms = reveal_delay_ms.max(1);
        self
    }

    pub fn with_columns(mut self, columns: u8) -> Self {
        self.columns = columns.max(1);
        self
    }

    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }

    pub const fn pairs(&self) -> PairCount {
        self.pairs
    }

    pub const fn total_cards(&self) -> usize {
        2 * self.pairs as usize
    }

    pub const fn reveal_delay_ms(&self) -> u32 {
        self.reveal_delay_ms
    }

    pub const fn columns(&self) -> u8 {
        self.columns
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            symbols: DEFAULT_SYMBOLS.to_vec(),
            pairs: Self::DEFAULT_PAIRS,
            reveal_delay_ms: Self::DEFAULT_REVEAL_DELAY_MS,
            columns: Self::DEFAULT_COLUMNS,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum FlipOutcome {
    Flipped,
    /// Second card of the turn is up, resolve the pair once the reveal delay has passed.
    PairPending(PendingPair),
}

impl FlipOutcome {
    pub const fn pending_pair(self) -> Option<PendingPair> {
        match self {
            Self::Flipped => None,
            Self::PairPending(pair) => Some(pair),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum ResolveOutcome {
    Matched,
    Mismatched,
    Completed,
}

impl ResolveOutcome {
    pub const fn has_update(self) -> bool {
        use ResolveOutcome::*;
        match self {
            Matched => true,
            Mismatched => true,
            Completed => true,
        }
    }

    pub const fn is_match(self) -> bool {
        matches!(self, Self::Matched | Self::Completed)
    }
}
