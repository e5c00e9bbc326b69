#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    use fivetwelve::{init_logging, GameConfig, GameEngine, GameStatus, RandomPlayer};
    use rand::{rngs::SmallRng, SeedableRng};
    use serde_json::json;

    init_logging();
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 3 {
        eprintln!("Usage: {} <seed> <games>", args[0]);
        std::process::exit(1);
    }
    let seed: u64 = args[1].parse()?;
    let games: u64 = args[2].parse()?;

    let mut results = Vec::new();
    let mut wins = 0;
    let mut best = 0;
    for game in 0..games {
        let game_seed = seed.wrapping_add(game);
        let mut engine = GameEngine::new(GameConfig::default().with_seed(game_seed))
            .map_err(|e| anyhow::anyhow!(e))?;
        let mut rng = SmallRng::seed_from_u64(game_seed.wrapping_mul(31).wrapping_add(7));
        let status = engine
            .run(&mut RandomPlayer::new(), &mut rng, None)
            .map_err(|e| anyhow::anyhow!(e))?;
        if status == GameStatus::Won {
            wins += 1;
        }
        best = best.max(engine.board().max_tile());
        results.push(json!({
            "seed": game_seed,
            "status": status,
            "score": engine.score(),
            "moves": engine.moves(),
            "max_tile": engine.board().max_tile(),
        }));
    }

    let result = json!({
        "games": results,
        "wins": wins,
        "best_tile": best,
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
