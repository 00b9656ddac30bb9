use std::collections::{HashSet, VecDeque};

use rand::rngs::SmallRng;
use rand::SeedableRng;
use seabattle::{
    AdaptiveStrategy, Coordinate, Mode, Orientation, ShotResult, StrategyError, TargetingState,
    TargetingStrategy,
};

fn c(row: u8, col: u8) -> Coordinate {
    Coordinate::new(row, col)
}

fn strategy(state: TargetingState) -> AdaptiveStrategy {
    AdaptiveStrategy::with_state(state, SmallRng::seed_from_u64(11))
}

fn attacked(cells: &[Coordinate]) -> TargetingState {
    let mut state = TargetingState::new();
    state.attacked = cells.iter().copied().collect();
    state
}

#[test]
fn test_first_hit_queues_orthogonal_neighbours() {
    let mut ai = strategy(TargetingState::new());
    ai.observe(c(1, 3), ShotResult::Hit).unwrap();
    let state = ai.state();
    assert_eq!(state.mode, Mode::Target);
    assert_eq!(state.last_hit, Some(c(1, 3)));
    assert_eq!(state.current_ship_hits, vec![c(1, 3)]);
    assert_eq!(
        state.pending,
        VecDeque::from(vec![c(0, 3), c(2, 3), c(1, 2), c(1, 4)])
    );
    // earliest queued fires first
    assert_eq!(ai.choose_target(), Some(c(0, 3)));
}

#[test]
fn test_first_hit_skips_edges_and_attacked_cells() {
    let mut state = attacked(&[c(0, 1)]);
    state.apply(c(0, 0), ShotResult::Hit).unwrap();
    assert_eq!(state.pending, VecDeque::from(vec![c(1, 0)]));
}

#[test]
fn test_second_hit_infers_horizontal() {
    let mut state = TargetingState::new();
    state.apply(c(1, 3), ShotResult::Hit).unwrap();
    state.apply(c(1, 4), ShotResult::Hit).unwrap();
    assert_eq!(state.inferred_orientation(), Some(Orientation::Horizontal));
    assert_eq!(state.pending, VecDeque::from(vec![c(1, 2), c(1, 5)]));
}

#[test]
fn test_second_hit_infers_vertical() {
    let mut state = TargetingState::new();
    state.apply(c(5, 4), ShotResult::Hit).unwrap();
    state.apply(c(4, 4), ShotResult::Hit).unwrap();
    assert_eq!(state.inferred_orientation(), Some(Orientation::Vertical));
    assert_eq!(state.pending, VecDeque::from(vec![c(3, 4), c(6, 4)]));
}

#[test]
fn test_endpoint_extension_respects_edges_and_history() {
    let mut state = TargetingState::new();
    state.apply(c(0, 9), ShotResult::Hit).unwrap();
    state.apply(c(0, 8), ShotResult::Hit).unwrap();
    assert_eq!(state.pending, VecDeque::from(vec![c(0, 7)]));

    state.apply(c(0, 7), ShotResult::Hit).unwrap();
    assert_eq!(state.pending, VecDeque::from(vec![c(0, 6)]));
    assert_eq!(state.current_ship_hits.len(), 3);
}

#[test]
fn test_extension_spans_all_hits() {
    let mut state = attacked(&[c(3, 2)]);
    state.apply(c(3, 4), ShotResult::Hit).unwrap();
    state.apply(c(3, 3), ShotResult::Hit).unwrap();
    assert_eq!(state.pending, VecDeque::from(vec![c(3, 5)]));
    state.apply(c(3, 5), ShotResult::Hit).unwrap();
    assert_eq!(state.pending, VecDeque::from(vec![c(3, 6)]));
}

#[test]
fn test_sunk_resets_to_hunt() {
    let mut state = TargetingState::new();
    state.apply(c(4, 4), ShotResult::Hit).unwrap();
    state.apply(c(4, 5), ShotResult::Sunk).unwrap();
    assert_eq!(state.mode, Mode::Hunt);
    assert!(state.pending.is_empty());
    assert!(state.current_ship_hits.is_empty());
    assert!(state.attacked.contains(c(4, 5)));
}

#[test]
fn test_miss_with_queue_left_stays_in_target() {
    let mut state = TargetingState::new();
    state.apply(c(4, 4), ShotResult::Hit).unwrap();
    state.pending.pop_front();
    state.apply(c(3, 4), ShotResult::Miss).unwrap();
    assert_eq!(state.mode, Mode::Target);
    assert_eq!(state.pending.len(), 3);
}

#[test]
fn test_miss_emptying_queue_retries_untried_neighbours() {
    let mut state = attacked(&[c(4, 3), c(4, 4), c(4, 5)]);
    state.mode = Mode::Target;
    state.current_ship_hits = vec![c(4, 4), c(4, 5)];
    state.apply(c(4, 6), ShotResult::Miss).unwrap();
    assert_eq!(state.mode, Mode::Target);
    assert_eq!(
        state.pending,
        VecDeque::from(vec![c(3, 4), c(5, 4), c(3, 5), c(5, 5)])
    );
}

#[test]
fn test_miss_emptying_queue_returns_to_hunt() {
    let mut state = attacked(&[c(0, 0), c(1, 0)]);
    state.mode = Mode::Target;
    state.current_ship_hits = vec![c(0, 0)];
    state.apply(c(0, 1), ShotResult::Miss).unwrap();
    assert_eq!(state.mode, Mode::Hunt);
    assert!(state.current_ship_hits.is_empty());
}

#[test]
fn test_win_changes_nothing_else() {
    let mut state = TargetingState::new();
    state.apply(c(2, 2), ShotResult::Hit).unwrap();
    let before = state.clone();
    state.apply(c(2, 3), ShotResult::Win).unwrap();
    assert_eq!(state.mode, before.mode);
    assert_eq!(state.pending, before.pending);
    assert_eq!(state.current_ship_hits, before.current_ship_hits);
}

#[test]
fn test_invalid_is_reported() {
    let mut ai = strategy(TargetingState::new());
    let before = ai.state().clone();
    assert_eq!(
        ai.observe(c(2, 2), ShotResult::Invalid),
        Err(StrategyError::InvalidShotReported(c(2, 2)))
    );
    assert_eq!(ai.state(), &before);
}

#[test]
fn test_attacked_queue_entries_are_skipped() {
    let mut state = attacked(&[c(1, 1), c(0, 1)]);
    state.mode = Mode::Target;
    state.current_ship_hits = vec![c(1, 1)];
    state.pending = VecDeque::from(vec![c(0, 1), c(2, 1)]);
    let mut ai = strategy(state);
    assert_eq!(ai.choose_target(), Some(c(2, 1)));
}

#[test]
fn test_empty_queue_in_target_falls_back_to_hunt() {
    let mut state = TargetingState::new();
    state.mode = Mode::Target;
    let mut ai = strategy(state);
    let pick = ai.choose_target().unwrap();
    assert_eq!((pick.row + pick.col) % 2, 0);
    assert_eq!(ai.state().mode, Mode::Hunt);
}

#[test]
fn test_hunt_uses_parity_then_everything_then_stops() {
    let mut ai = AdaptiveStrategy::new(SmallRng::seed_from_u64(5));
    let mut seen = HashSet::new();
    for _ in 0..50 {
        let pick = ai.choose_target().unwrap();
        assert_eq!((pick.row + pick.col) % 2, 0, "{} is not on the checkerboard", pick);
        assert!(seen.insert(pick), "{} chosen twice", pick);
    }
    for _ in 0..50 {
        let pick = ai.choose_target().unwrap();
        assert_eq!((pick.row + pick.col) % 2, 1);
        assert!(seen.insert(pick), "{} chosen twice", pick);
    }
    assert_eq!(ai.choose_target(), None);
}

#[test]
fn test_hunt_candidates_exclude_attacked() {
    let state = attacked(&[c(0, 0), c(1, 1), c(0, 1)]);
    let candidates = state.hunt_candidates();
    assert_eq!(candidates.len(), 48);
    assert!(!candidates.contains(&c(0, 0)));
    assert!(!candidates.contains(&c(1, 1)));
}
