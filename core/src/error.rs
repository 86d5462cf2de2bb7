use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Unknown card")]
    UnknownCard,
    #[error("Card is already face up")]
    CardUnavailable,
    #[error("Two cards are already waiting to be resolved")]
    ResolutionPending,
    #[error("Game already ended, no new moves are accepted")]
    AlreadyEnded,
    #[error("Pair is no longer pending")]
    StaleResolution,
    #[error("A game needs at least one pair")]
    NoPairs,
    #[error("Not enough symbols, {pairs} pairs requested but only {symbols} available")]
    NotEnoughSymbols { pairs: usize, symbols: usize },
}

pub type Result<T> = core::result::Result<T, GameError>;
