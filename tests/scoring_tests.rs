//! Scoring tests.
//!
//! Covers the delta formula at its boundaries and the running total.

use proptest::prelude::*;

use magic_cards::cards::{CardFactory, TemplateRegistry};
use magic_cards::core::{CardError, CardRng};
use magic_cards::scoring::{base_delta, compute_delta, try_compute_delta, Scoreboard};

#[test]
fn test_documented_deltas() {
    assert_eq!(compute_delta(30, 2), 60);
    assert_eq!(compute_delta(51, 2), 127);
    assert_eq!(compute_delta(50, 1), 50);
    assert_eq!(base_delta(50), 50);
    assert_eq!(base_delta(51), 76);
}

#[test]
fn test_interaction_on_power_80() {
    let mut f = CardFactory::new(TemplateRegistry::builtin(), CardRng::new(0));
    let mut card = f.generate_card();
    card.power = 80;

    let mut scoreboard = Scoreboard::new();
    scoreboard.apply_interaction(&card);
    let before = scoreboard.total();
    scoreboard.apply_interaction(&card);

    assert_eq!(scoreboard.total() - before, 185);
}

#[test]
fn test_checked_rejects_bad_input() {
    assert!(matches!(try_compute_delta(0, 1), Err(CardError::PowerOutOfRange { power: 0 })));
    assert!(matches!(try_compute_delta(5, 0), Err(CardError::InvalidMultiplier { multiplier: 0 })));
}

proptest! {
    #[test]
    fn delta_is_pure(power in 1i64..=100, multiplier in 1i64..=10) {
        prop_assert_eq!(compute_delta(power, multiplier), compute_delta(power, multiplier));
    }

    #[test]
    fn bonus_only_above_threshold(power in 1i64..=100, multiplier in 1i64..=10) {
        let bonus = compute_delta(power, multiplier) - power * multiplier;
        prop_assert_eq!(bonus, if power > 50 { 25 } else { 0 });
    }

    #[test]
    fn checked_agrees_with_unchecked(power in 1i64..=100, multiplier in 1i64..=10) {
        prop_assert_eq!(try_compute_delta(power, multiplier), Ok(compute_delta(power, multiplier)));
    }

    #[test]
    fn total_is_sum_of_deltas(seed in any::<u64>(), clicks in 1usize..50) {
        let mut f = CardFactory::new(TemplateRegistry::builtin(), CardRng::new(seed));
        let mut scoreboard = Scoreboard::new();
        let mut expected = 0;

        for _ in 0..clicks {
            let card = f.generate_card();
            expected += scoreboard.apply_interaction(&card);
        }

        prop_assert_eq!(scoreboard.total(), expected);
        prop_assert!(scoreboard.total() >= 0);
    }
}
