//! Seeded strategy-vs-strategy matches and aggregate win statistics.

use rand::{rngs::SmallRng, Rng, SeedableRng};

use crate::{
    game::{Match, MatchError, MatchOutcome, ShotStats, Side},
    strategy::StrategyKind,
};

/// Upper bound on shots in one match; both boards are exhausted by then.
pub const MAX_TURNS: usize = 200;

/// Result of a single seeded match.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct MatchSummary {
    /// Index of the winning side, `None` if the turn cap was reached.
    pub winner: Option<usize>,
    pub turns: usize,
    /// Strategy names of side 0 and side 1.
    pub strategies: [&'static str; 2],
    pub stats: [ShotStats; 2],
}

/// Play one match between `first` and `second`. Side 0 fires first when
/// `first_to_move` is 0. The same seed always replays the same match.
pub fn play_seeded(
    first: StrategyKind,
    second: StrategyKind,
    seed: u64,
    first_to_move: usize,
) -> Result<MatchSummary, MatchError> {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut side = |name: &str, kind: StrategyKind| -> Result<Side, MatchError> {
        let strategy = kind.build(rng.random());
        Ok(Side::with_random_fleet(name, strategy, &mut rng)?)
    };
    let side0 = side("player1", first)?;
    let side1 = side("player2", second)?;

    let mut game = Match::new(side0, side1, first_to_move);
    let outcome = game.run(MAX_TURNS)?;
    let winner = match outcome {
        MatchOutcome::Winner { side, .. } => Some(side),
        MatchOutcome::TurnLimit { .. } => None,
    };
    Ok(MatchSummary {
        winner,
        turns: game.turns(),
        strategies: [game.side(0).strategy_name(), game.side(1).strategy_name()],
        stats: [game.side(0).stats(), game.side(1).stats()],
    })
}

/// Aggregate over many matches between two strategies.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct BenchmarkReport {
    pub games: usize,
    pub wins: [usize; 2],
    pub unfinished: usize,
    /// Mean number of shots the side needed in the games it won.
    pub mean_shots_to_win: [f64; 2],
}

/// Play `games` matches, alternating which side fires first. Match `g` uses
/// seed `seed + g`.
pub fn benchmark(
    first: StrategyKind,
    second: StrategyKind,
    games: usize,
    seed: u64,
) -> Result<BenchmarkReport, MatchError> {
    let mut report = BenchmarkReport {
        games,
        ..Default::default()
    };
    let mut shots_to_win = [0usize; 2];
    for g in 0..games {
        let summary = play_seeded(first, second, seed.wrapping_add(g as u64), g % 2)?;
        match summary.winner {
            Some(w) => {
                report.wins[w] += 1;
                shots_to_win[w] += summary.stats[w].shots;
            }
            None => report.unfinished += 1,
        }
    }
    for i in 0..2 {
        if report.wins[i] > 0 {
            report.mean_shots_to_win[i] = shots_to_win[i] as f64 / report.wins[i] as f64;
        }
    }
    Ok(report)
}
