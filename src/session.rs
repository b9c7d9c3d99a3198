//! A player's session: chips carried from round to round, ending with a
//! shot at the high-score table.

extern crate alloc;

use alloc::vec::Vec;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::chips::ChipLedger;
use crate::deck::Deck;
use crate::error::SessionError;
use crate::options::{DeckPolicy, SessionOptions};
use crate::result::RoundResult;
use crate::round::{self, DecisionSource, DisplaySink};
use crate::scores::{HighScoreBoard, HighScoreEntry, HighScoreRepository, PlayerName};

/// One player's game from the first bet to the high-score prompt.
///
/// The session owns the random number generator, the chip ledger and, under
/// [`DeckPolicy::Shared`], the deck. The high-score board is borrowed so
/// several sessions can report to the same table.
#[derive(Debug)]
pub struct GameSession<'a, R> {
    options: SessionOptions,
    rng: ChaCha8Rng,
    ledger: ChipLedger,
    /// Deck carried between rounds under [`DeckPolicy::Shared`].
    deck: Option<Deck>,
    rounds_played: usize,
    board: &'a HighScoreBoard<R>,
}

impl<'a, R: HighScoreRepository> GameSession<'a, R> {
    /// Creates a session with the given seed.
    ///
    /// # Example
    ///
    /// ```
    /// use bjround::{GameSession, HighScoreBoard, MemoryRepository, SessionOptions};
    ///
    /// let board = HighScoreBoard::open(MemoryRepository::new()).unwrap();
    /// let session = GameSession::new(SessionOptions::default(), 42, &board);
    /// assert_eq!(session.balance(), 100);
    /// ```
    #[must_use]
    pub fn new(options: SessionOptions, seed: u64, board: &'a HighScoreBoard<R>) -> Self {
        Self {
            ledger: ChipLedger::new(options.starting_chips),
            options,
            rng: ChaCha8Rng::seed_from_u64(seed),
            deck: None,
            rounds_played: 0,
            board,
        }
    }

    /// Returns the chip balance.
    #[must_use]
    pub const fn balance(&self) -> usize {
        self.ledger.balance()
    }

    /// Returns the chip ledger.
    #[must_use]
    pub const fn ledger(&self) -> &ChipLedger {
        &self.ledger
    }

    /// Returns the number of rounds settled so far.
    #[must_use]
    pub const fn rounds_played(&self) -> usize {
        self.rounds_played
    }

    /// Returns the cards left in the shared deck, if one is being carried.
    #[must_use]
    pub fn deck_remaining(&self) -> Option<usize> {
        self.deck.as_ref().map(Deck::len)
    }

    /// Returns whether the player has run out of chips.
    #[must_use]
    pub const fn is_over(&self) -> bool {
        self.ledger.balance() == 0
    }

    /// Picks the deck for the next round according to the deck policy.
    fn next_deck(&mut self) -> Deck {
        match self.options.deck_policy {
            DeckPolicy::Shared { reshuffle_below } => match self.deck.take() {
                Some(deck) if deck.len() >= reshuffle_below => deck,
                _ => Deck::new(&mut self.rng),
            },
            DeckPolicy::FreshEachRound => Deck::new(&mut self.rng),
        }
    }

    /// Places `bet` and plays one round.
    ///
    /// # Errors
    ///
    /// Returns an error if the player has no chips left, the bet is
    /// rejected, or the deck runs out mid-round. A round that fails leaves
    /// the balance untouched.
    pub fn play_round<D, S>(
        &mut self,
        bet: usize,
        decisions: &mut D,
        sink: &mut S,
    ) -> Result<RoundResult, SessionError>
    where
        D: DecisionSource + ?Sized,
        S: DisplaySink + ?Sized,
    {
        if self.is_over() {
            return Err(SessionError::GameOver);
        }
        self.ledger.place_bet(bet)?;

        let mut deck = self.next_deck();
        let result = self.run_round(&mut deck, decisions, sink);
        if result.is_ok() && matches!(self.options.deck_policy, DeckPolicy::Shared { .. }) {
            self.deck = Some(deck);
        }
        result
    }

    /// Places `bet` and plays one round from `deck`, bypassing the deck
    /// policy. Useful for replaying a known card order.
    ///
    /// # Errors
    ///
    /// Same as [`play_round`](Self::play_round).
    pub fn play_round_with_deck<D, S>(
        &mut self,
        deck: &mut Deck,
        bet: usize,
        decisions: &mut D,
        sink: &mut S,
    ) -> Result<RoundResult, SessionError>
    where
        D: DecisionSource + ?Sized,
        S: DisplaySink + ?Sized,
    {
        if self.is_over() {
            return Err(SessionError::GameOver);
        }
        self.ledger.place_bet(bet)?;

        self.run_round(deck, decisions, sink)
    }

    fn run_round<D, S>(
        &mut self,
        deck: &mut Deck,
        decisions: &mut D,
        sink: &mut S,
    ) -> Result<RoundResult, SessionError>
    where
        D: DecisionSource + ?Sized,
        S: DisplaySink + ?Sized,
    {
        match round::play_round(deck, &mut self.ledger, decisions, sink) {
            Ok(result) => {
                self.rounds_played += 1;
                Ok(result)
            }
            Err(err) => {
                // the round is void, the bet goes back untouched
                self.ledger.cancel_bet();
                Err(SessionError::Round(err))
            }
        }
    }

    /// Returns whether the current balance would make the high-score table.
    ///
    /// A player who lost every chip never qualifies.
    #[must_use]
    pub fn qualifies_for_high_score(&self) -> bool {
        !self.is_over() && self.board.is_high_score(self.balance())
    }

    /// Records the current balance under `name` if it qualifies.
    ///
    /// Returns `true` if the score was recorded.
    ///
    /// # Errors
    ///
    /// Returns an error if the name is invalid or the high-score store
    /// fails.
    pub fn submit_high_score(&self, name: &str) -> Result<bool, SessionError> {
        let name = PlayerName::parse(name)?;
        if !self.qualifies_for_high_score() {
            return Ok(false);
        }
        self.board.record(name, self.balance())?;
        Ok(true)
    }

    /// Returns the current high-score table.
    #[must_use]
    pub fn high_scores(&self) -> Vec<HighScoreEntry> {
        self.board.top()
    }
}
