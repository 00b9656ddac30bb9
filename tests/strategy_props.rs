use std::collections::HashSet;

use proptest::prelude::*;
use rand::{rngs::SmallRng, SeedableRng};
use seabattle::{
    AdaptiveStrategy, Board, Coordinate, Mode, RandomStrategy, ShotResult, TargetingStrategy,
};

fn random_board(seed: u64) -> Board {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut board = Board::new();
    board.place_fleet_randomly(&mut rng).unwrap();
    board
}

fn orthogonally_adjacent(a: Coordinate, b: Coordinate) -> bool {
    a.row.abs_diff(b.row) + a.col.abs_diff(b.col) == 1
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn adaptive_finishes_without_repeating(board_seed in any::<u64>(), ai_seed in any::<u64>()) {
        let mut board = random_board(board_seed);
        let mut ai = AdaptiveStrategy::new(SmallRng::seed_from_u64(ai_seed));
        let mut fired = HashSet::new();
        let mut won = false;
        for _ in 0..100 {
            let target = ai.choose_target().expect("targets remain while ships are afloat");
            prop_assert!(fired.insert(target), "{} chosen twice", target);
            let result = board.shoot(target);
            prop_assert_ne!(result, ShotResult::Invalid);
            ai.observe(target, result).unwrap();
            if result == ShotResult::Win {
                won = true;
                break;
            }
        }
        prop_assert!(won);
    }

    #[test]
    fn adaptive_pursuit_stays_next_to_hits(board_seed in any::<u64>(), ai_seed in any::<u64>()) {
        let mut board = random_board(board_seed);
        let mut ai = AdaptiveStrategy::new(SmallRng::seed_from_u64(ai_seed));
        let mut pursuit: Vec<Coordinate> = Vec::new();
        let mut last = ShotResult::Miss;
        while last != ShotResult::Win {
            let pursuing = ai.state().mode == Mode::Target;
            let target = ai.choose_target().unwrap();
            if pursuing {
                prop_assert!(!pursuit.is_empty());
                prop_assert!(
                    pursuit.iter().any(|&hit| orthogonally_adjacent(hit, target)),
                    "{} is not next to any of {:?}",
                    target,
                    pursuit
                );
            }
            last = board.shoot(target);
            ai.observe(target, last).unwrap();
            match last {
                ShotResult::Hit => pursuit.push(target),
                ShotResult::Sunk => pursuit.clear(),
                _ => {}
            }
            if pursuit.len() >= 2 {
                let orientation = ai.state().inferred_orientation();
                prop_assert!(orientation.is_some());
            }
        }
    }

    #[test]
    fn random_strategy_is_a_permutation(seed in any::<u64>()) {
        let mut ai = RandomStrategy::new(&mut SmallRng::seed_from_u64(seed));
        let mut seen = HashSet::new();
        while let Some(target) = ai.choose_target() {
            prop_assert!(target.is_valid());
            prop_assert!(seen.insert(target));
            ai.observe(target, ShotResult::Hit).unwrap();
        }
        prop_assert_eq!(seen.len(), 100);
        prop_assert_eq!(ai.remaining(), 0);
    }
}
