//! The 52-card deck.

extern crate alloc;

use alloc::vec::Vec;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::error::DeckExhausted;

/// A single deck of cards drawn without replacement.
///
/// The top of the deck is the end of the backing vector, so a draw is a pop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Builds all 52 cards and shuffles them with `rng`.
    #[must_use]
    pub fn new<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut deck = Self::ordered();
        deck.shuffle(rng);
        deck
    }

    /// Builds all 52 cards in suit-major order without shuffling.
    #[must_use]
    pub fn ordered() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);
        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push(Card::new(suit, rank));
            }
        }
        Self { cards }
    }

    /// Builds a stacked deck whose draws return `draws` in slice order.
    #[must_use]
    pub fn from_draws(draws: &[Card]) -> Self {
        let mut cards = draws.to_vec();
        cards.reverse();
        Self { cards }
    }

    /// Re-randomizes the order of the remaining cards.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Removes and returns the top card.
    ///
    /// # Errors
    ///
    /// Returns [`DeckExhausted`] if no cards remain.
    pub fn draw(&mut self) -> Result<Card, DeckExhausted> {
        self.cards.pop().ok_or(DeckExhausted)
    }

    /// Returns the number of cards remaining.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn fresh_deck_holds_every_card_once() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let mut deck = Deck::new(&mut rng);
        assert_eq!(deck.len(), DECK_SIZE);

        let mut seen = Vec::new();
        while let Ok(card) = deck.draw() {
            assert!(!seen.contains(&card));
            seen.push(card);
        }
        assert_eq!(seen.len(), DECK_SIZE);
        assert_eq!(deck.draw(), Err(DeckExhausted));
    }

    #[test]
    fn stacked_deck_draws_in_order() {
        let first = Card::new(Suit::Clubs, Rank::Ace);
        let second = Card::new(Suit::Hearts, Rank::Two);
        let mut deck = Deck::from_draws(&[first, second]);
        assert_eq!(deck.draw(), Ok(first));
        assert_eq!(deck.draw(), Ok(second));
        assert!(deck.is_empty());
    }
}
