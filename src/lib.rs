//! A single-player blackjack engine with chip betting and a top-3 high-score
//! table, with optional `no_std` support.
//!
//! A [`GameSession`] carries the player's chips from round to round. Each
//! round runs through the [`Round`] state machine: the opening deal, the
//! natural check, the player's hit/stand loop, the dealer's fixed drawing
//! rule and settlement. Decisions come in through a [`DecisionSource`] and
//! the table goes out through a [`DisplaySink`], so the engine does no I/O.
//! When the session ends the final balance can be submitted to a
//! [`HighScoreBoard`].
//!
//! # Example
//!
//! ```
//! use bjround::{
//!     Decision, GameSession, HighScoreBoard, MemoryRepository, SessionOptions, TableView,
//! };
//!
//! let board = HighScoreBoard::open(MemoryRepository::new()).unwrap();
//! let mut session = GameSession::new(SessionOptions::default(), 7, &board);
//!
//! let mut basic = |view: &TableView| {
//!     if view.player_total < 17 { Decision::Hit } else { Decision::Stand }
//! };
//! let result = session.play_round(10, &mut basic, &mut ()).unwrap();
//! assert_eq!(session.balance() as isize, 100 + result.net);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod chips;
pub mod deck;
pub mod error;
pub mod hand;
pub mod options;
pub mod result;
pub mod round;
pub mod scores;
pub mod session;
mod sync;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use chips::{ChipLedger, STARTING_CHIPS, parse_bet};
pub use deck::Deck;
pub use error::{BetError, DeckExhausted, NameError, RoundError, SessionError, StoreError};
pub use hand::{BLACKJACK, Hand};
pub use options::{DeckPolicy, SessionOptions};
pub use result::{RoundOutcome, RoundResult, Settlement};
pub use round::{
    DEALER_STANDS_ON, Decision, DecisionSource, DisplaySink, Round, RoundState, TableView,
    parse_decision, play_round,
};
#[cfg(feature = "std")]
pub use scores::JsonFileRepository;
pub use scores::{
    HighScoreBoard, HighScoreEntry, HighScoreRepository, HighScores, MemoryRepository,
    PlayerName, TOP_SCORES,
};
pub use session::GameSession;
