extern crate alloc;

use alloc::vec::Vec;

use crate::card::Card;
use crate::chips::ChipLedger;
use crate::deck::Deck;
use crate::error::RoundError;
use crate::result::{RoundOutcome, RoundResult};

use super::{Round, RoundState};

/// The dealer hits below this total and stands at or above it, soft or hard.
pub const DEALER_STANDS_ON: u16 = 17;

impl Round {
    /// Dealer plays their hand according to the house rule.
    ///
    /// The dealer draws while their total is below [`DEALER_STANDS_ON`] and
    /// stands as soon as it reaches it. There is no soft-17 exception.
    ///
    /// Returns the cards drawn by the dealer.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not in the dealer's turn or the deck
    /// runs out while the dealer must draw.
    pub fn dealer_play(&mut self, deck: &mut Deck) -> Result<Vec<Card>, RoundError> {
        self.ensure_state(RoundState::DealerTurn)?;

        let mut drawn_cards = Vec::new();
        while self.dealer.total() < DEALER_STANDS_ON {
            let card = deck.draw()?;
            self.dealer.add_card(card);
            drawn_cards.push(card);
        }

        let outcome = RoundOutcome::decide(self.player.total(), self.dealer.total(), false);
        self.finish_with(outcome);

        Ok(drawn_cards)
    }

    /// Settles the bet held by `ledger` and closes the round.
    ///
    /// This is the only place a round touches the ledger, and it can only
    /// run once.
    ///
    /// # Errors
    ///
    /// Returns an error if the outcome is not known yet, the round was
    /// already settled, or the ledger holds no bet.
    pub fn settle(&mut self, ledger: &mut ChipLedger) -> Result<RoundResult, RoundError> {
        self.ensure_state(RoundState::Settlement)?;
        let outcome = self.outcome.ok_or(RoundError::InvalidState)?;
        if !ledger.has_bet() {
            return Err(RoundError::NoBet);
        }

        let bet = ledger.bet();
        let net = ledger.settle(outcome.settlement());

        self.hole_revealed = true;
        self.state = RoundState::Done;

        Ok(RoundResult {
            outcome,
            bet,
            net,
            balance: ledger.balance(),
            player_cards: self.player.cards().to_vec(),
            player_total: self.player.total(),
            dealer_cards: self.dealer.cards().to_vec(),
            dealer_total: self.dealer.total(),
        })
    }
}
