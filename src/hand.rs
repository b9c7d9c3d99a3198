//! Hand representation with incremental ace adjustment.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::Card;

/// Highest total a hand can hold without busting.
pub const BLACKJACK: u16 = 21;

/// A hand of cards, shared by the player and the dealer.
///
/// The total is kept up to date as cards arrive. Each ace enters at 11 and is
/// demoted to 1 only when the hand would otherwise bust; a demoted ace is
/// never promoted again.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Card>,
    total: u16,
    /// Aces still counted as 11.
    soft_aces: u8,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cards: Vec::new(),
            total: 0,
            soft_aces: 0,
        }
    }

    /// Adds a card and re-applies the ace adjustment.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
        self.total += u16::from(card.value());
        if card.is_ace() {
            self.soft_aces += 1;
        }

        while self.total > BLACKJACK && self.soft_aces > 0 {
            self.total -= 10;
            self.soft_aces -= 1;
        }
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the ace-adjusted total.
    #[must_use]
    pub const fn total(&self) -> u16 {
        self.total
    }

    /// Returns whether the hand is soft (contains an ace counted as 11).
    #[must_use]
    pub const fn is_soft(&self) -> bool {
        self.soft_aces > 0
    }

    /// Returns whether the hand is bust (over 21).
    #[must_use]
    pub const fn is_bust(&self) -> bool {
        self.total > BLACKJACK
    }

    /// Returns whether the hand is a natural: two cards totalling 21.
    #[must_use]
    pub fn is_natural(&self) -> bool {
        self.cards.len() == 2 && self.total == BLACKJACK
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
