#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use seabattle::{benchmark, init_logging, play_seeded, Board, StrategyKind};

#[cfg(feature = "std")]
use clap::{Parser, Subcommand, ValueEnum};
#[cfg(feature = "std")]
use rand::{rngs::SmallRng, Rng, SeedableRng};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
#[cfg(feature = "std")]
enum StrategyArg {
    Random,
    Adaptive,
}

#[cfg(feature = "std")]
impl From<StrategyArg> for StrategyKind {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::Random => StrategyKind::Random,
            StrategyArg::Adaptive => StrategyKind::Adaptive,
        }
    }
}

#[derive(Subcommand)]
#[cfg(feature = "std")]
enum Commands {
    /// Play one computer-vs-computer match and print shot statistics.
    Duel {
        #[arg(long, value_enum, default_value_t = StrategyArg::Adaptive)]
        first: StrategyArg,
        #[arg(long, value_enum, default_value_t = StrategyArg::Random)]
        second: StrategyArg,
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
    /// Play many matches between two strategies and print win statistics as JSON.
    Bench {
        #[arg(long, value_enum, default_value_t = StrategyArg::Adaptive)]
        first: StrategyArg,
        #[arg(long, value_enum, default_value_t = StrategyArg::Random)]
        second: StrategyArg,
        #[arg(long, default_value_t = 1000)]
        games: usize,
        #[arg(long, help = "Seed of the first match; match g uses seed + g")]
        seed: Option<u64>,
    },
    /// Place a random fleet and print the board.
    Place {
        #[arg(long, help = "Fix RNG seed for a reproducible layout")]
        seed: Option<u64>,
    },
}

#[cfg(feature = "std")]
fn seed_or_random(seed: Option<u64>) -> u64 {
    seed.unwrap_or_else(|| rand::rng().random())
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Duel {
            first,
            second,
            seed,
        } => {
            let seed = seed_or_random(seed);
            log::info!("duel {:?} vs {:?} with seed {}", first, second, seed);
            let summary = play_seeded(first.into(), second.into(), seed, 0)?;
            for (i, stats) in summary.stats.iter().enumerate() {
                println!(
                    "player{} ({}): {} shots, {} hits, {} misses, {:.1}% accuracy",
                    i + 1,
                    summary.strategies[i],
                    stats.shots,
                    stats.hits,
                    stats.misses(),
                    stats.accuracy()
                );
            }
            match summary.winner {
                Some(w) => println!("player{} wins after {} turns", w + 1, summary.turns),
                None => println!("no winner after {} turns", summary.turns),
            }
        }
        Commands::Bench {
            first,
            second,
            games,
            seed,
        } => {
            let seed = seed_or_random(seed);
            log::info!("benchmarking {:?} vs {:?} over {} games", first, second, games);
            let report = benchmark(first.into(), second.into(), games, seed)?;
            println!("{}", serde_json::to_string(&report)?);
        }
        Commands::Place { seed } => {
            let mut rng = SmallRng::seed_from_u64(seed_or_random(seed));
            let mut board = Board::new();
            board.place_fleet_randomly(&mut rng)?;
            print!("{}", board.view(true));
        }
    }
    Ok(())
}
