//! Round state types.

/// Phase of a round. A round only ever moves forward through these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RoundState {
    /// Waiting for the opening four cards.
    Dealing,
    /// Opening hands are dealt; naturals have not been checked yet.
    NaturalCheck,
    /// Waiting for the player's hit/stand decisions.
    PlayerTurn,
    /// Dealer plays out their hand.
    DealerTurn,
    /// Outcome is known; the bet has not been settled yet.
    Settlement,
    /// Bet settled. Nothing more can happen in this round.
    Done,
}

/// A player decision during [`RoundState::PlayerTurn`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Decision {
    /// Take another card.
    Hit,
    /// Keep the current hand.
    Stand,
}

/// Parses a typed decision. Only the first character counts: `h` hits and
/// `s` stands, in either case.
///
/// # Example
///
/// ```
/// use bjround::{Decision, parse_decision};
///
/// assert_eq!(parse_decision("Hit me"), Some(Decision::Hit));
/// assert_eq!(parse_decision(" s"), Some(Decision::Stand));
/// assert_eq!(parse_decision("x"), None);
/// ```
#[must_use]
pub fn parse_decision(input: &str) -> Option<Decision> {
    match input.trim().chars().next()?.to_ascii_lowercase() {
        'h' => Some(Decision::Hit),
        's' => Some(Decision::Stand),
        _ => None,
    }
}
