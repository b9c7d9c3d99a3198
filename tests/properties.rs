//! Property tests for hand valuation, dealer play and the high-score table.

use bjround::{
    Card, ChipLedger, DEALER_STANDS_ON, Decision, Deck, Hand, HighScores, PlayerName, Rank,
    RoundOutcome, Suit, TOP_SCORES, TableView, play_round,
};
use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn rank() -> impl Strategy<Value = Rank> {
    (0..Rank::ALL.len()).prop_map(|i| Rank::ALL[i])
}

/// Best total over every way of counting each ace as 1 or 11.
fn best_total(ranks: &[Rank]) -> u32 {
    let hard: u32 = ranks
        .iter()
        .map(|&r| if r == Rank::Ace { 1 } else { u32::from(r.value()) })
        .sum();
    let aces = ranks.iter().filter(|&&r| r == Rank::Ace).count() as u32;

    (0..=aces)
        .map(|elevated| hard + 10 * elevated)
        .filter(|&total| total <= 21)
        .max()
        .unwrap_or(hard)
}

fn hand_of(ranks: &[Rank]) -> Hand {
    let mut hand = Hand::new();
    for &rank in ranks {
        hand.add_card(Card::new(Suit::Clubs, rank));
    }
    hand
}

proptest! {
    #[test]
    fn incremental_total_matches_best_total(ranks in prop::collection::vec(rank(), 1..52)) {
        let hand = hand_of(&ranks);
        prop_assert_eq!(u32::from(hand.total()), best_total(&ranks));
    }

    #[test]
    fn dealer_stops_exactly_at_17(seed in any::<u64>()) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut deck = Deck::new(&mut rng);
        let mut ledger = ChipLedger::new(100);
        ledger.place_bet(1).unwrap();

        let mut stand = |_: &TableView| Decision::Stand;
        let result = play_round(&mut deck, &mut ledger, &mut stand, &mut ()).unwrap();

        let dealer = &result.dealer_cards;
        if dealer.len() > 2 {
            prop_assert!(result.dealer_total >= DEALER_STANDS_ON);
            let before_last: Vec<Rank> = dealer[..dealer.len() - 1].iter().map(|c| c.rank).collect();
            prop_assert!(hand_of(&before_last).total() < DEALER_STANDS_ON);
        } else if !matches!(
            result.outcome,
            RoundOutcome::PlayerBlackjack | RoundOutcome::BothBlackjack | RoundOutcome::DealerBlackjack
        ) {
            prop_assert!(result.dealer_total >= DEALER_STANDS_ON);
        }
    }

    #[test]
    fn settlement_follows_the_table(player in 4u16..=21, dealer in 17u16..=26) {
        let outcome = RoundOutcome::decide(player, dealer, false);
        let expected = if dealer > 21 {
            RoundOutcome::DealerBust
        } else if dealer > player {
            RoundOutcome::DealerWin
        } else if dealer < player {
            RoundOutcome::PlayerWin
        } else {
            RoundOutcome::Push
        };
        prop_assert_eq!(outcome, expected);
        prop_assert_eq!(RoundOutcome::decide(player + 10, dealer, true), RoundOutcome::PlayerBust);
    }

    #[test]
    fn table_stays_bounded_and_sorted(scores in prop::collection::vec(0usize..200, 0..20)) {
        let mut table = HighScores::new();
        for (i, &score) in scores.iter().enumerate() {
            let name = PlayerName::parse(["AAA", "BB", "C"][i % 3]).unwrap();
            table.record(name, score);
            prop_assert!(table.len() <= TOP_SCORES);
        }

        let top = table.top();
        prop_assert!(top.windows(2).all(|w| w[0].score >= w[1].score));

        let mut sorted = scores.clone();
        sorted.sort_unstable_by(|a, b| b.cmp(a));
        sorted.truncate(TOP_SCORES);
        let kept: Vec<usize> = top.iter().map(|e| e.score).collect();
        prop_assert_eq!(kept, sorted);
    }
}
