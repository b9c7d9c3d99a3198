use crate::card::Card;
use crate::deck::Deck;
use crate::error::RoundError;
use crate::result::RoundOutcome;

use super::{Round, RoundState};

impl Round {
    /// Player action: Hit (draw a card).
    ///
    /// A hand that goes over 21 ends the round as a player bust; the dealer
    /// does not play.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn or the deck is empty.
    pub fn hit(&mut self, deck: &mut Deck) -> Result<Card, RoundError> {
        self.ensure_state(RoundState::PlayerTurn)?;

        let card = deck.draw()?;
        self.player.add_card(card);

        if self.player.is_bust() {
            let dealer_total = self.dealer.total();
            self.finish_with(RoundOutcome::decide(self.player.total(), dealer_total, true));
        }

        Ok(card)
    }

    /// Player action: Stand (keep current hand).
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn.
    pub fn stand(&mut self) -> Result<(), RoundError> {
        self.ensure_state(RoundState::PlayerTurn)?;

        self.hole_revealed = true;
        self.state = RoundState::DealerTurn;
        Ok(())
    }
}
