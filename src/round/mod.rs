//! Round engine and state management.

use crate::chips::ChipLedger;
use crate::deck::Deck;
use crate::error::RoundError;
use crate::hand::Hand;
use crate::result::{RoundOutcome, RoundResult};

mod actions;
mod deal;
mod dealer;
pub mod state;
pub mod view;

pub use dealer::DEALER_STANDS_ON;
pub use state::{Decision, RoundState, parse_decision};
pub use view::{DecisionSource, DisplaySink, TableView};

/// One round of blackjack between the player and the dealer.
///
/// A round is driven step by step: [`deal`](Self::deal),
/// [`check_naturals`](Self::check_naturals), any number of
/// [`hit`](Self::hit) calls, [`stand`](Self::stand),
/// [`dealer_play`](Self::dealer_play) and finally [`settle`](Self::settle).
/// Each step checks the current [`RoundState`] and rejects calls made out of
/// order. [`play_round`] runs all of them against a decision source.
#[derive(Debug, Clone)]
pub struct Round {
    state: RoundState,
    player: Hand,
    dealer: Hand,
    /// Whether the dealer's hole card is face up.
    hole_revealed: bool,
    outcome: Option<RoundOutcome>,
}

impl Round {
    /// Creates a round waiting for the deal.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            state: RoundState::Dealing,
            player: Hand::new(),
            dealer: Hand::new(),
            hole_revealed: false,
            outcome: None,
        }
    }

    /// Returns the current round state.
    #[must_use]
    pub const fn state(&self) -> RoundState {
        self.state
    }

    /// Returns the player's hand.
    #[must_use]
    pub const fn player_hand(&self) -> &Hand {
        &self.player
    }

    /// Returns the dealer's hand, hole card included.
    #[must_use]
    pub const fn dealer_hand(&self) -> &Hand {
        &self.dealer
    }

    /// Returns the outcome once it is known.
    #[must_use]
    pub const fn outcome(&self) -> Option<RoundOutcome> {
        self.outcome
    }

    fn ensure_state(&self, expected: RoundState) -> Result<(), RoundError> {
        if self.state == expected {
            Ok(())
        } else {
            Err(RoundError::InvalidState)
        }
    }

    fn finish_with(&mut self, outcome: RoundOutcome) {
        self.outcome = Some(outcome);
        self.state = RoundState::Settlement;
    }
}

impl Default for Round {
    fn default() -> Self {
        Self::new()
    }
}

/// Plays one round start to finish.
///
/// The ledger must already hold a bet. `sink` sees the table after every
/// state change and the result once the bet is settled.
///
/// # Errors
///
/// Returns [`RoundError::NoBet`] if no bet is pending, or
/// [`RoundError::DeckExhausted`] if the deck runs out mid-round.
///
/// # Example
///
/// ```
/// use bjround::{Card, ChipLedger, Decision, Deck, Rank, RoundOutcome, Suit, play_round};
///
/// let mut deck = Deck::from_draws(&[
///     Card::new(Suit::Hearts, Rank::Ten),
///     Card::new(Suit::Clubs, Rank::Nine),
///     Card::new(Suit::Spades, Rank::Ten),
///     Card::new(Suit::Diamonds, Rank::Eight),
/// ]);
/// let mut ledger = ChipLedger::new(100);
/// ledger.place_bet(10).unwrap();
///
/// let mut stand = |_: &bjround::TableView| Decision::Stand;
/// let result = play_round(&mut deck, &mut ledger, &mut stand, &mut ()).unwrap();
/// assert_eq!(result.outcome, RoundOutcome::PlayerWin);
/// assert_eq!(ledger.balance(), 110);
/// ```
pub fn play_round<D, S>(
    deck: &mut Deck,
    ledger: &mut ChipLedger,
    decisions: &mut D,
    sink: &mut S,
) -> Result<RoundResult, RoundError>
where
    D: DecisionSource + ?Sized,
    S: DisplaySink + ?Sized,
{
    if !ledger.has_bet() {
        return Err(RoundError::NoBet);
    }

    let mut round = Round::new();
    round.deal(deck)?;
    sink.show(&round.view());

    round.check_naturals()?;
    sink.show(&round.view());

    while round.state() == RoundState::PlayerTurn {
        match decisions.decide(&round.view()) {
            Decision::Hit => {
                round.hit(deck)?;
            }
            Decision::Stand => round.stand()?,
        }
        sink.show(&round.view());
    }

    if round.state() == RoundState::DealerTurn {
        round.dealer_play(deck)?;
        sink.show(&round.view());
    }

    let result = round.settle(ledger)?;
    sink.show(&round.view());
    sink.finished(&result);
    Ok(result)
}
