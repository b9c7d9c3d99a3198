//! Session configuration options.

use crate::chips::STARTING_CHIPS;

/// How a session sources the deck for each round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[non_exhaustive]
pub enum DeckPolicy {
    /// Shuffle a fresh 52-card deck for every round.
    #[default]
    FreshEachRound,
    /// Draw down one deck across rounds, rebuilding it before a round that
    /// would start with fewer than `reshuffle_below` cards.
    Shared {
        /// Minimum cards required to start a round from the shared deck.
        reshuffle_below: usize,
    },
}

/// Configuration options for a game session.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use bjround::{DeckPolicy, SessionOptions};
///
/// let options = SessionOptions::default()
///     .with_starting_chips(250)
///     .with_deck_policy(DeckPolicy::Shared { reshuffle_below: 15 });
/// assert_eq!(options.starting_chips, 250);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionOptions {
    /// Chips the player starts the session with.
    pub starting_chips: usize,
    /// Where each round's cards come from.
    pub deck_policy: DeckPolicy,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            starting_chips: STARTING_CHIPS,
            deck_policy: DeckPolicy::FreshEachRound,
        }
    }
}

impl SessionOptions {
    /// Sets the starting chip balance.
    ///
    /// # Example
    ///
    /// ```
    /// use bjround::SessionOptions;
    ///
    /// let options = SessionOptions::default().with_starting_chips(500);
    /// assert_eq!(options.starting_chips, 500);
    /// ```
    #[must_use]
    pub const fn with_starting_chips(mut self, chips: usize) -> Self {
        self.starting_chips = chips;
        self
    }

    /// Sets the deck policy.
    ///
    /// # Example
    ///
    /// ```
    /// use bjround::{DeckPolicy, SessionOptions};
    ///
    /// let options = SessionOptions::default()
    ///     .with_deck_policy(DeckPolicy::Shared { reshuffle_below: 20 });
    /// assert_eq!(options.deck_policy, DeckPolicy::Shared { reshuffle_below: 20 });
    /// ```
    #[must_use]
    pub const fn with_deck_policy(mut self, policy: DeckPolicy) -> Self {
        self.deck_policy = policy;
        self
    }
}
