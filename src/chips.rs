//! The player's chip balance and escrowed bet.

use crate::error::BetError;
use crate::result::Settlement;

/// Chips a new session starts with.
pub const STARTING_CHIPS: usize = 100;

/// A single player's chip balance and the bet riding on the current round.
///
/// A placed bet is held in escrow: the balance only moves when the round is
/// settled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChipLedger {
    balance: usize,
    bet: usize,
}

impl ChipLedger {
    /// Creates a ledger holding `balance` chips and no bet.
    #[must_use]
    pub const fn new(balance: usize) -> Self {
        Self { balance, bet: 0 }
    }

    /// Returns the chip balance.
    #[must_use]
    pub const fn balance(&self) -> usize {
        self.balance
    }

    /// Returns the bet awaiting settlement, zero if there is none.
    #[must_use]
    pub const fn bet(&self) -> usize {
        self.bet
    }

    /// Returns whether a bet is awaiting settlement.
    #[must_use]
    pub const fn has_bet(&self) -> bool {
        self.bet > 0
    }

    /// Places a bet for the next round.
    ///
    /// # Errors
    ///
    /// Returns an error if the amount is zero, exceeds the balance, or a bet
    /// is already pending.
    pub const fn place_bet(&mut self, amount: usize) -> Result<(), BetError> {
        if self.bet > 0 {
            return Err(BetError::Pending);
        }
        if amount == 0 {
            return Err(BetError::Zero);
        }
        if amount > self.balance {
            return Err(BetError::InsufficientFunds);
        }

        self.bet = amount;
        Ok(())
    }

    /// Adds the bet to the balance.
    pub const fn settle_win(&mut self) {
        self.balance += self.bet;
        self.bet = 0;
    }

    /// Takes the bet from the balance.
    pub const fn settle_loss(&mut self) {
        // bet <= balance was checked when the bet was placed
        self.balance = self.balance.saturating_sub(self.bet);
        self.bet = 0;
    }

    /// Returns the bet untouched.
    pub const fn settle_push(&mut self) {
        self.bet = 0;
    }

    /// Withdraws the pending bet without settling it.
    pub const fn cancel_bet(&mut self) {
        self.bet = 0;
    }

    /// Settles the pending bet and returns the net change in chips.
    #[expect(clippy::cast_possible_wrap, reason = "chip amounts fit in isize")]
    pub const fn settle(&mut self, settlement: Settlement) -> isize {
        let bet = self.bet as isize;
        match settlement {
            Settlement::Win => {
                self.settle_win();
                bet
            }
            Settlement::Loss => {
                self.settle_loss();
                -bet
            }
            Settlement::Push => {
                self.settle_push();
                0
            }
        }
    }
}

impl Default for ChipLedger {
    fn default() -> Self {
        Self::new(STARTING_CHIPS)
    }
}

/// Parses a typed bet and checks it against `balance`.
///
/// # Errors
///
/// Returns an error if the input is not a whole number, is zero, or exceeds
/// the balance.
///
/// # Example
///
/// ```
/// use bjround::{BetError, parse_bet};
///
/// assert_eq!(parse_bet(" 25 ", 100), Ok(25));
/// assert_eq!(parse_bet("0", 100), Err(BetError::Zero));
/// assert_eq!(parse_bet("ten", 100), Err(BetError::NotANumber));
/// ```
pub fn parse_bet(input: &str, balance: usize) -> Result<usize, BetError> {
    let input = input.trim();
    if input.is_empty() || !input.bytes().all(|b| b.is_ascii_digit()) {
        return Err(BetError::NotANumber);
    }

    // All digits: the only parse failure left is overflow, which no balance covers.
    let amount = input
        .parse::<usize>()
        .map_err(|_| BetError::InsufficientFunds)?;

    if amount == 0 {
        return Err(BetError::Zero);
    }
    if amount > balance {
        return Err(BetError::InsufficientFunds);
    }
    Ok(amount)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bet_is_escrow_until_settled() {
        let mut ledger = ChipLedger::new(100);
        ledger.place_bet(50).unwrap();
        assert_eq!(ledger.balance(), 100);
        assert_eq!(ledger.settle(Settlement::Loss), -50);
        assert_eq!(ledger.balance(), 50);
        assert!(!ledger.has_bet());
    }

    #[test]
    fn push_leaves_balance_alone() {
        let mut ledger = ChipLedger::default();
        ledger.place_bet(30).unwrap();
        assert_eq!(ledger.settle(Settlement::Push), 0);
        assert_eq!(ledger.balance(), STARTING_CHIPS);
    }

    #[test]
    fn rejects_invalid_bets() {
        let mut ledger = ChipLedger::new(10);
        assert_eq!(ledger.place_bet(0), Err(BetError::Zero));
        assert_eq!(ledger.place_bet(11), Err(BetError::InsufficientFunds));
        ledger.place_bet(10).unwrap();
        assert_eq!(ledger.place_bet(1), Err(BetError::Pending));
        ledger.settle_win();
        assert_eq!(ledger.balance(), 20);
    }

    #[test]
    fn parse_bet_cases() {
        assert_eq!(parse_bet("100", 100), Ok(100));
        assert_eq!(parse_bet("101", 100), Err(BetError::InsufficientFunds));
        assert_eq!(parse_bet("-5", 100), Err(BetError::NotANumber));
        assert_eq!(parse_bet("", 100), Err(BetError::NotANumber));
        assert_eq!(parse_bet("4.5", 100), Err(BetError::NotANumber));
        assert_eq!(
            parse_bet("99999999999999999999999999", 100),
            Err(BetError::InsufficientFunds)
        );
    }
}
