use alloc::boxed::Box;
use alloc::string::String;
use core::fmt;

use log::debug;
use rand::Rng;

use crate::{
    board::{Board, BB},
    common::{BoardError, Coordinate, ShotResult, StrategyError},
    strategy::TargetingStrategy,
};

/// Shot counters for one side. Invalid shots are not counted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct ShotStats {
    pub shots: usize,
    pub hits: usize,
}

impl ShotStats {
    pub fn record(&mut self, result: ShotResult) {
        if result == ShotResult::Invalid {
            return;
        }
        self.shots += 1;
        if result.is_hit() {
            self.hits += 1;
        }
    }

    pub fn misses(&self) -> usize {
        self.shots - self.hits
    }

    /// Hit percentage; zero before the first shot.
    pub fn accuracy(&self) -> f64 {
        if self.shots == 0 {
            return 0.0;
        }
        self.hits as f64 / self.shots as f64 * 100.0
    }
}

/// Errors that end a match early.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchError {
    Placement(BoardError),
    Strategy(StrategyError),
    /// A turn was requested after the match was decided.
    Finished,
}

impl From<BoardError> for MatchError {
    fn from(err: BoardError) -> Self {
        MatchError::Placement(err)
    }
}

impl From<StrategyError> for MatchError {
    fn from(err: StrategyError) -> Self {
        MatchError::Strategy(err)
    }
}

impl fmt::Display for MatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchError::Placement(e) => write!(f, "Placement error: {}", e),
            MatchError::Strategy(e) => write!(f, "Strategy error: {}", e),
            MatchError::Finished => write!(f, "Match is already decided"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for MatchError {}

/// One participant: its own fleet, the strategy it fires with, and the
/// public record of its shots against the opponent.
pub struct Side {
    name: String,
    fleet: Board,
    strategy: Box<dyn TargetingStrategy>,
    shot_hits: BB,
    shot_misses: BB,
    stats: ShotStats,
}

impl Side {
    pub fn new(name: impl Into<String>, fleet: Board, strategy: Box<dyn TargetingStrategy>) -> Self {
        Self {
            name: name.into(),
            fleet,
            strategy,
            shot_hits: BB::new(),
            shot_misses: BB::new(),
            stats: ShotStats::default(),
        }
    }

    /// Build a side whose fleet is placed at random with `rng`.
    pub fn with_random_fleet<R: Rng + ?Sized>(
        name: impl Into<String>,
        strategy: Box<dyn TargetingStrategy>,
        rng: &mut R,
    ) -> Result<Self, BoardError> {
        let mut fleet = Board::new();
        fleet.place_fleet_randomly(rng)?;
        Ok(Self::new(name, fleet, strategy))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn fleet(&self) -> &Board {
        &self.fleet
    }

    pub fn strategy_name(&self) -> &'static str {
        self.strategy.name()
    }

    /// Cells where this side's shots struck a ship.
    pub fn shot_hits(&self) -> BB {
        self.shot_hits
    }

    pub fn shot_misses(&self) -> BB {
        self.shot_misses
    }

    pub fn stats(&self) -> ShotStats {
        self.stats
    }

    fn record(&mut self, coord: Coordinate, result: ShotResult) {
        self.stats.record(result);
        match result {
            ShotResult::Hit | ShotResult::Sunk | ShotResult::Win => {
                self.shot_hits.insert(coord);
            }
            ShotResult::Miss => {
                self.shot_misses.insert(coord);
            }
            ShotResult::Invalid => {}
        }
    }
}

/// A single resolved shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnReport {
    /// Index of the side that fired.
    pub shooter: usize,
    pub target: Coordinate,
    pub result: ShotResult,
}

/// How a match finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome {
    Winner { side: usize, turns: usize },
    TurnLimit { turns: usize },
}

/// Turn driver for two sides. Each turn is exactly one choose, one shoot and
/// one observe; turns alternate regardless of the result.
pub struct Match {
    sides: [Side; 2],
    to_move: usize,
    turns: usize,
    winner: Option<usize>,
}

impl Match {
    /// Start a match in which `sides[first_to_move]` fires first.
    pub fn new(first: Side, second: Side, first_to_move: usize) -> Self {
        Self {
            sides: [first, second],
            to_move: first_to_move % 2,
            turns: 0,
            winner: None,
        }
    }

    pub fn side(&self, index: usize) -> &Side {
        &self.sides[index]
    }

    pub fn turns(&self) -> usize {
        self.turns
    }

    pub fn winner(&self) -> Option<usize> {
        self.winner
    }

    /// Play one shot for the side to move.
    pub fn play_turn(&mut self) -> Result<TurnReport, MatchError> {
        if self.winner.is_some() {
            return Err(MatchError::Finished);
        }
        let shooter = self.to_move;
        let (left, right) = self.sides.split_at_mut(1);
        let (attacker, defender) = if shooter == 0 {
            (&mut left[0], &mut right[0])
        } else {
            (&mut right[0], &mut left[0])
        };

        let target = attacker
            .strategy
            .choose_target()
            .ok_or(StrategyError::Exhausted)?;
        let result = defender.fleet.shoot(target);
        attacker.strategy.observe(target, result)?;
        if result == ShotResult::Invalid {
            return Err(StrategyError::InvalidShotReported(target).into());
        }
        attacker.record(target, result);
        debug!("{} fires at {}: {}", attacker.name, target, result);

        self.turns += 1;
        if result == ShotResult::Win {
            debug!("{} wins after {} turns", attacker.name, self.turns);
            self.winner = Some(shooter);
        } else {
            self.to_move = 1 - shooter;
        }
        Ok(TurnReport {
            shooter,
            target,
            result,
        })
    }

    /// Play until one fleet is destroyed or `max_turns` shots have been fired.
    pub fn run(&mut self, max_turns: usize) -> Result<MatchOutcome, MatchError> {
        loop {
            if let Some(side) = self.winner {
                return Ok(MatchOutcome::Winner {
                    side,
                    turns: self.turns,
                });
            }
            if self.turns >= max_turns {
                return Ok(MatchOutcome::TurnLimit { turns: self.turns });
            }
            self.play_turn()?;
        }
    }
}
