//! Error types for game operations.

extern crate alloc;

use alloc::string::String;

use thiserror::Error;

/// Errors that can occur when placing or parsing a bet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BetError {
    /// Bet amount is zero.
    #[error("bet needs to be a number greater than 0")]
    Zero,
    /// Bet exceeds the chip balance.
    #[error("not enough chips for this bet")]
    InsufficientFunds,
    /// Input is not a whole, non-negative number.
    #[error("bet needs to be a positive number")]
    NotANumber,
    /// A bet is already waiting to be settled.
    #[error("a bet is already pending settlement")]
    Pending,
}

/// A card was drawn from an empty deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("no cards left in the deck")]
pub struct DeckExhausted;

/// Errors that can occur when validating a high-score name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum NameError {
    /// Name is empty after trimming.
    #[error("name is empty")]
    Empty,
    /// Name is longer than three letters.
    #[error("3 letters max")]
    TooLong,
    /// Name contains something other than letters.
    #[error("only letters allowed")]
    InvalidCharacter,
}

/// Errors that can occur while a round is being played.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RoundError {
    /// Invalid round state for this step.
    #[error("invalid round state for this step")]
    InvalidState,
    /// The ledger has no bet to settle.
    #[error("no bet has been placed")]
    NoBet,
    /// The deck ran out mid-round.
    #[error(transparent)]
    DeckExhausted(#[from] DeckExhausted),
}

/// Errors raised by a high-score repository.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// The backing store could not be read or written.
    #[error("high-score store i/o failed: {0}")]
    Io(String),
    /// The backing store holds data that cannot be decoded.
    #[error("high-score store is malformed: {0}")]
    Format(String),
}

/// Errors that can occur while driving a session.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    /// The player has no chips left.
    #[error("no chips left, the game is over")]
    GameOver,
    /// The bet was rejected.
    #[error(transparent)]
    Bet(#[from] BetError),
    /// The high-score name was rejected.
    #[error(transparent)]
    Name(#[from] NameError),
    /// The round could not be completed.
    #[error(transparent)]
    Round(#[from] RoundError),
    /// The high-score store failed.
    #[error(transparent)]
    Store(#[from] StoreError),
}
