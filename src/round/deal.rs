use crate::deck::Deck;
use crate::error::RoundError;
use crate::result::RoundOutcome;

use super::{Round, RoundState};

impl Round {
    /// Deals the opening hands: player, player, dealer, dealer.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not waiting for the deal or the deck
    /// runs out.
    pub fn deal(&mut self, deck: &mut Deck) -> Result<(), RoundError> {
        self.ensure_state(RoundState::Dealing)?;

        self.player.add_card(deck.draw()?);
        self.player.add_card(deck.draw()?);
        self.dealer.add_card(deck.draw()?);
        self.dealer.add_card(deck.draw()?);

        self.state = RoundState::NaturalCheck;
        Ok(())
    }

    /// Checks both opening hands for naturals.
    ///
    /// If either side holds one the hole card is turned over and the round
    /// goes straight to settlement; otherwise the player's turn begins.
    /// Returns the outcome when a natural ended the round.
    ///
    /// # Errors
    ///
    /// Returns an error if the opening hands have not just been dealt.
    pub fn check_naturals(&mut self) -> Result<Option<RoundOutcome>, RoundError> {
        self.ensure_state(RoundState::NaturalCheck)?;

        let outcome =
            RoundOutcome::from_naturals(self.player.is_natural(), self.dealer.is_natural());

        match outcome {
            Some(outcome) => {
                self.hole_revealed = true;
                self.finish_with(outcome);
            }
            None => self.state = RoundState::PlayerTurn,
        }

        Ok(outcome)
    }
}
