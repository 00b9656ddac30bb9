use seabattle::{play_seeded, StrategyKind};
use serde_json::json;

fn parse_strategy(name: &str) -> anyhow::Result<StrategyKind> {
    match name {
        "random" => Ok(StrategyKind::Random),
        "adaptive" => Ok(StrategyKind::Adaptive),
        other => Err(anyhow::anyhow!("unknown strategy '{}'", other)),
    }
}

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 4 {
        eprintln!("Usage: {} <first-strategy> <second-strategy> <seed>", args[0]);
        std::process::exit(1);
    }
    let first = parse_strategy(&args[1])?;
    let second = parse_strategy(&args[2])?;
    let seed: u64 = args[3].parse()?;

    let summary = play_seeded(first, second, seed, 0)?;
    let winner = summary.winner.map(|w| if w == 0 { "player1" } else { "player2" });

    let result = json!({
        "player1": {"strategy": summary.strategies[0], "shots": summary.stats[0].shots, "hits": summary.stats[0].hits},
        "player2": {"strategy": summary.strategies[1], "shots": summary.stats[1].shots, "hits": summary.stats[1].hits},
        "turns": summary.turns,
        "winner": winner,
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
