//! Round result types for settlement.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::Card;
use crate::hand::BLACKJACK;

/// How a settled bet moves the chip balance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Settlement {
    /// Balance grows by the bet.
    Win,
    /// Balance shrinks by the bet.
    Loss,
    /// Balance is unchanged.
    Push,
}

/// Terminal outcome of a round, from the player's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundOutcome {
    /// Both hands were naturals.
    BothBlackjack,
    /// Player was dealt a natural.
    PlayerBlackjack,
    /// Dealer was dealt a natural.
    DealerBlackjack,
    /// Player went over 21.
    PlayerBust,
    /// Dealer went over 21.
    DealerBust,
    /// Player finished closer to 21.
    PlayerWin,
    /// Dealer finished closer to 21.
    DealerWin,
    /// Equal totals.
    Push,
}

impl RoundOutcome {
    /// Decides a played-out round from the final totals.
    ///
    /// A busted player loses before the dealer's total is looked at.
    #[must_use]
    pub const fn decide(player_total: u16, dealer_total: u16, player_busted: bool) -> Self {
        if player_busted {
            Self::PlayerBust
        } else if dealer_total > BLACKJACK {
            Self::DealerBust
        } else if dealer_total > player_total {
            Self::DealerWin
        } else if dealer_total < player_total {
            Self::PlayerWin
        } else {
            Self::Push
        }
    }

    /// Decides the round from the two opening hands, if either is a natural.
    #[must_use]
    pub const fn from_naturals(player_natural: bool, dealer_natural: bool) -> Option<Self> {
        match (player_natural, dealer_natural) {
            (true, true) => Some(Self::BothBlackjack),
            (true, false) => Some(Self::PlayerBlackjack),
            (false, true) => Some(Self::DealerBlackjack),
            (false, false) => None,
        }
    }

    /// Returns how the outcome settles the bet.
    #[must_use]
    pub const fn settlement(self) -> Settlement {
        match self {
            Self::PlayerBlackjack | Self::DealerBust | Self::PlayerWin => Settlement::Win,
            Self::DealerBlackjack | Self::PlayerBust | Self::DealerWin => Settlement::Loss,
            Self::BothBlackjack | Self::Push => Settlement::Push,
        }
    }

    /// Short announcement for the outcome.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::BothBlackjack => "Dealer and Player tie! It's a push.",
            Self::PlayerBlackjack => "Blackjack! Player wins!",
            Self::DealerBlackjack => "Dealer has blackjack. Dealer wins!",
            Self::PlayerBust => "Player busts!",
            Self::DealerBust => "Dealer busts! Player wins!",
            Self::PlayerWin => "Player wins!",
            Self::DealerWin => "Dealer wins!",
            Self::Push => "It's a push!",
        }
    }
}

/// Result of a settled round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundResult {
    /// The terminal outcome.
    pub outcome: RoundOutcome,
    /// The bet that was settled.
    pub bet: usize,
    /// Net change in chips (positive = profit, negative = loss).
    pub net: isize,
    /// Chip balance after settlement.
    pub balance: usize,
    /// The player's final cards.
    pub player_cards: Vec<Card>,
    /// The player's final total.
    pub player_total: u16,
    /// The dealer's final cards.
    pub dealer_cards: Vec<Card>,
    /// The dealer's final total.
    pub dealer_total: u16,
}

impl RoundResult {
    /// Returns how the round settled the bet.
    #[must_use]
    pub const fn settlement(&self) -> Settlement {
        self.outcome.settlement()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn settlement_table() {
        assert_eq!(RoundOutcome::decide(23, 30, true), RoundOutcome::PlayerBust);
        assert_eq!(RoundOutcome::decide(18, 22, false), RoundOutcome::DealerBust);
        assert_eq!(RoundOutcome::decide(18, 20, false), RoundOutcome::DealerWin);
        assert_eq!(RoundOutcome::decide(20, 18, false), RoundOutcome::PlayerWin);
        assert_eq!(RoundOutcome::decide(19, 19, false), RoundOutcome::Push);
    }

    #[test]
    fn naturals() {
        assert_eq!(
            RoundOutcome::from_naturals(true, true).map(RoundOutcome::settlement),
            Some(Settlement::Push)
        );
        assert_eq!(
            RoundOutcome::from_naturals(false, true),
            Some(RoundOutcome::DealerBlackjack)
        );
        assert_eq!(RoundOutcome::from_naturals(false, false), None);
    }
}
