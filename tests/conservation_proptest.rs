//! Property tests: the 52-card total is conserved for every seed, and
//! any terminal state accounts for all cards.

use proptest::prelude::*;

use war_engine::{Game, GameResult, Player, RoundOutcome};

const ROUND_BUDGET: usize = 20_000;

proptest! {
    #[test]
    fn conservation_holds_for_any_seed(seed in any::<u64>()) {
        let mut game = Game::new(seed);
        game.start().unwrap();

        prop_assert_eq!(game.deck1().len(), 26);
        prop_assert_eq!(game.deck2().len(), 26);

        let mut terminal = None;
        for _ in 0..ROUND_BUDGET {
            prop_assert_eq!(game.cards_in_play(), 52);
            match game.play_round().unwrap() {
                RoundOutcome::Continuing { cards_won, .. } => {
                    // A settled round always moves at least the two
                    // flipped cards, and the pile is drained.
                    prop_assert!(cards_won >= 2);
                    prop_assert!(game.pile().is_empty());
                }
                RoundOutcome::GameOver(result) => {
                    terminal = Some(result);
                    break;
                }
            }
        }

        prop_assert_eq!(game.cards_in_play(), 52);

        if let Some(result) = terminal {
            match result {
                GameResult::Winner(Player::One) => {
                    prop_assert!(game.deck2().is_empty());
                    prop_assert_eq!(game.deck1().len(), 52);
                }
                GameResult::Winner(Player::Two) => {
                    prop_assert!(game.deck1().is_empty());
                    prop_assert_eq!(game.deck2().len(), 52);
                }
                GameResult::Draw => {
                    prop_assert!(game.deck1().is_empty());
                    prop_assert!(game.deck2().is_empty());
                }
            }
        }
    }

    #[test]
    fn replaying_a_seed_reproduces_the_deal(seed in any::<u64>()) {
        let mut g1 = Game::new(seed);
        let mut g2 = Game::new(seed);
        g1.start().unwrap();
        g2.start().unwrap();

        prop_assert_eq!(g1.deck1(), g2.deck1());
        prop_assert_eq!(g1.deck2(), g2.deck2());
    }
}
