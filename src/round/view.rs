//! What a round shows to the outside, and where decisions come from.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::Card;
use crate::result::RoundResult;

use super::{Decision, Round, RoundState};

/// Snapshot of the table as the player is allowed to see it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableView {
    /// Round state at the time of the snapshot.
    pub state: RoundState,
    /// All of the player's cards.
    pub player_cards: Vec<Card>,
    /// The player's total.
    pub player_total: u16,
    /// The dealer's cards that are face up.
    pub dealer_cards: Vec<Card>,
    /// Total of the face-up dealer cards.
    pub dealer_total: u16,
    /// Whether a dealer card is still face down.
    pub hole_hidden: bool,
}

impl Round {
    /// Returns the table as the player sees it.
    ///
    /// Until the hole card is turned over only the dealer's up card, the
    /// second card dealt to them, is visible.
    #[must_use]
    pub fn view(&self) -> TableView {
        let (dealer_cards, dealer_total) = if self.hole_revealed {
            (self.dealer.cards().to_vec(), self.dealer.total())
        } else {
            let up = self.dealer.cards().get(1..2).unwrap_or(&[]);
            (up.to_vec(), up.iter().map(|card| u16::from(card.value())).sum())
        };

        TableView {
            state: self.state,
            player_cards: self.player.cards().to_vec(),
            player_total: self.player.total(),
            hole_hidden: !self.hole_revealed && !self.dealer.is_empty(),
            dealer_cards,
            dealer_total,
        }
    }
}

/// Supplies the player's decisions during [`RoundState::PlayerTurn`].
///
/// Any `FnMut(&TableView) -> Decision` closure is a decision source.
pub trait DecisionSource {
    /// Returns the next decision for the table shown.
    fn decide(&mut self, view: &TableView) -> Decision;
}

impl<F> DecisionSource for F
where
    F: FnMut(&TableView) -> Decision,
{
    fn decide(&mut self, view: &TableView) -> Decision {
        self(view)
    }
}

/// Receives the table after each state change and the result of the round.
///
/// Both methods do nothing by default; `()` is a sink that shows nothing.
pub trait DisplaySink {
    /// Called after every state transition.
    fn show(&mut self, view: &TableView) {
        let _ = view;
    }

    /// Called once the bet is settled.
    fn finished(&mut self, result: &RoundResult) {
        let _ = result;
    }
}

impl DisplaySink for () {}
