// Hunt/target strategy: parity search until a hit, then work outwards from
// the hit until the ship is reported sunk.

use alloc::collections::VecDeque;
use alloc::vec::Vec;

use log::{debug, error, trace};
use rand::{rngs::SmallRng, seq::IndexedRandom, Rng};

use crate::board::BB;
use crate::common::{Coordinate, ShotResult, StrategyError};
use crate::ship::Orientation;

use super::TargetingStrategy;

/// Search mode of the adaptive strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Mode {
    /// Looking for an undiscovered ship.
    #[default]
    Hunt,
    /// Finishing a ship that has been hit at least once.
    Target,
}

/// Complete decision state of [`AdaptiveStrategy`], kept apart from its RNG so
/// it can be saved and injected.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct TargetingState {
    pub mode: Mode,
    /// Candidates awaiting a shot; the earliest discovered fires first.
    pub pending: VecDeque<Coordinate>,
    /// Confirmed hits on the ship being pursued, in the order they landed.
    pub current_ship_hits: Vec<Coordinate>,
    pub last_hit: Option<Coordinate>,
    /// Every cell this strategy has fired at.
    pub attacked: BB,
}

impl TargetingState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop the current pursuit and go back to searching.
    fn enter_hunt(&mut self) {
        self.mode = Mode::Hunt;
        self.pending.clear();
        self.current_ship_hits.clear();
    }

    fn is_candidate(&self, coord: Coordinate) -> bool {
        coord.is_valid() && !self.attacked.contains(coord)
    }

    fn enqueue(&mut self, coord: Coordinate) {
        if self.is_candidate(coord) && !self.pending.contains(&coord) {
            self.pending.push_back(coord);
        }
    }

    fn enqueue_neighbors(&mut self, coord: Coordinate) {
        for n in coord.orthogonal_neighbors() {
            self.enqueue(n);
        }
    }

    /// Axis shared by the first two hits of the pursued ship.
    pub fn inferred_orientation(&self) -> Option<Orientation> {
        match self.current_ship_hits.as_slice() {
            [a, b, ..] if a.row == b.row => Some(Orientation::Horizontal),
            [a, b, ..] if a.col == b.col => Some(Orientation::Vertical),
            _ => None,
        }
    }

    /// Replace the queue with the two cells just past either end of the hits.
    fn extend_along_axis(&mut self) {
        let Some(orientation) = self.inferred_orientation() else {
            // hits do not line up; restart the pursuit from the newest one
            let newest = self.current_ship_hits.last().copied();
            self.pending.clear();
            self.current_ship_hits.clear();
            if let Some(hit) = newest {
                self.current_ship_hits.push(hit);
                self.enqueue_neighbors(hit);
            }
            return;
        };
        let hits = &self.current_ship_hits;
        let anchor = hits[0];
        let (low, high) = match orientation {
            Orientation::Horizontal => {
                let min = hits.iter().map(|c| c.col).min().unwrap_or(anchor.col);
                let max = hits.iter().map(|c| c.col).max().unwrap_or(anchor.col);
                (
                    Coordinate::new(anchor.row, min).offset(0, -1),
                    Coordinate::new(anchor.row, max).offset(0, 1),
                )
            }
            Orientation::Vertical => {
                let min = hits.iter().map(|c| c.row).min().unwrap_or(anchor.row);
                let max = hits.iter().map(|c| c.row).max().unwrap_or(anchor.row);
                (
                    Coordinate::new(min, anchor.col).offset(-1, 0),
                    Coordinate::new(max, anchor.col).offset(1, 0),
                )
            }
        };
        self.pending.clear();
        for end in [low, high].into_iter().flatten() {
            self.enqueue(end);
        }
        trace!("ship runs {:?}, probing {:?}", orientation, self.pending);
    }

    /// Queue every untried orthogonal neighbour of the recorded hits. Returns
    /// `true` if anything was queued.
    fn recover_pending(&mut self) -> bool {
        let hits = self.current_ship_hits.clone();
        for hit in hits {
            self.enqueue_neighbors(hit);
        }
        !self.pending.is_empty()
    }

    /// Called when the queue runs dry in Target mode.
    fn refill_or_hunt(&mut self) {
        if self.recover_pending() {
            debug!("probes exhausted, retrying {} neighbours of known hits", self.pending.len());
        } else {
            debug!("probes exhausted, back to hunt");
            self.enter_hunt();
        }
    }

    /// Apply the outcome of a shot at `coord`.
    pub fn apply(&mut self, coord: Coordinate, result: ShotResult) -> Result<(), StrategyError> {
        if result == ShotResult::Invalid {
            error!("strategy was told its shot at {} was invalid", coord);
            return Err(StrategyError::InvalidShotReported(coord));
        }
        self.attacked.insert(coord);
        match result {
            ShotResult::Hit => {
                self.mode = Mode::Target;
                self.last_hit = Some(coord);
                self.current_ship_hits.push(coord);
                if self.current_ship_hits.len() == 1 {
                    self.enqueue_neighbors(coord);
                } else {
                    self.extend_along_axis();
                }
            }
            ShotResult::Sunk => self.enter_hunt(),
            ShotResult::Miss => {
                if self.mode == Mode::Target && self.pending.is_empty() {
                    self.refill_or_hunt();
                }
            }
            ShotResult::Win | ShotResult::Invalid => {}
        }
        Ok(())
    }

    /// Next queued candidate that has not been attacked, if in Target mode.
    fn next_pending(&mut self) -> Option<Coordinate> {
        if self.mode != Mode::Target {
            return None;
        }
        loop {
            while let Some(next) = self.pending.pop_front() {
                if self.is_candidate(next) {
                    return Some(next);
                }
            }
            self.refill_or_hunt();
            if self.mode == Mode::Hunt {
                return None;
            }
        }
    }

    /// Unattacked cells with even `row + col`, or every unattacked cell once
    /// the even ones are used up.
    pub fn hunt_candidates(&self) -> Vec<Coordinate> {
        let open: Vec<Coordinate> = (!self.attacked).iter().collect();
        let parity: Vec<Coordinate> = open
            .iter()
            .copied()
            .filter(|c| (c.row + c.col) % 2 == 0)
            .collect();
        if parity.is_empty() {
            open
        } else {
            parity
        }
    }
}

/// Hunt/target strategy with checkerboard search.
pub struct AdaptiveStrategy<R = SmallRng> {
    state: TargetingState,
    rng: R,
}

impl<R: Rng> AdaptiveStrategy<R> {
    /// Fresh strategy in Hunt mode.
    pub fn new(rng: R) -> Self {
        Self::with_state(TargetingState::new(), rng)
    }

    /// Resume from a saved or hand-built state.
    pub fn with_state(state: TargetingState, rng: R) -> Self {
        Self { state, rng }
    }

    pub fn state(&self) -> &TargetingState {
        &self.state
    }

    pub fn into_state(self) -> TargetingState {
        self.state
    }
}

impl<R: Rng + Send> TargetingStrategy for AdaptiveStrategy<R> {
    fn name(&self) -> &'static str {
        "adaptive"
    }

    fn choose_target(&mut self) -> Option<Coordinate> {
        let target = match self.state.next_pending() {
            Some(next) => {
                trace!("target mode fires at {}", next);
                next
            }
            None => {
                self.state.enter_hunt();
                let Some(&pick) = self.state.hunt_candidates().choose(&mut self.rng) else {
                    error!("no unattacked coordinates remain");
                    return None;
                };
                trace!("hunt mode fires at {}", pick);
                pick
            }
        };
        self.state.attacked.insert(target);
        Some(target)
    }

    fn observe(&mut self, coord: Coordinate, result: ShotResult) -> Result<(), StrategyError> {
        self.state.apply(coord, result)
    }
}
