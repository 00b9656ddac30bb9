//! Targeting strategies.
//!
//! A strategy picks the next cell to fire at using only the public outcome of
//! its own previous shots:
//! - [`RandomStrategy`]: fixed random permutation, ignores outcomes
//! - [`AdaptiveStrategy`]: hunt/target state machine with parity search

use alloc::boxed::Box;

use rand::{rngs::SmallRng, SeedableRng};

use crate::common::{Coordinate, ShotResult, StrategyError};

/// Interface implemented by every way of choosing targets.
pub trait TargetingStrategy: Send {
    /// Short human readable name.
    fn name(&self) -> &'static str;

    /// Choose the next coordinate to fire at. `None` means no unattacked
    /// coordinate remains, which indicates a defect in the caller.
    fn choose_target(&mut self) -> Option<Coordinate>;

    /// Inform the strategy of the outcome of the shot it chose. Strategies
    /// that do not learn from outcomes keep this default.
    fn observe(&mut self, _coord: Coordinate, _result: ShotResult) -> Result<(), StrategyError> {
        Ok(())
    }
}

/// Selector for the built-in strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum StrategyKind {
    Random,
    Adaptive,
}

impl StrategyKind {
    /// Build a strategy with its own RNG seeded from `seed`.
    pub fn build(self, seed: u64) -> Box<dyn TargetingStrategy> {
        let mut rng = SmallRng::seed_from_u64(seed);
        match self {
            StrategyKind::Random => Box::new(RandomStrategy::new(&mut rng)),
            StrategyKind::Adaptive => Box::new(AdaptiveStrategy::new(rng)),
        }
    }
}

pub mod adaptive;
pub use adaptive::{AdaptiveStrategy, Mode, TargetingState};

pub mod random;
pub use random::RandomStrategy;
