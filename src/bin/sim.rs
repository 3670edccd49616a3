use broadside::{AiPlayer, Game, MemoryLog, Player, RandomComputer, DEFAULT_FLEET};
use rand::{rngs::SmallRng, SeedableRng};
use serde_json::json;

/// Plays `<games>` computer games and prints a JSON summary. Player two is the
/// probability AI unless `random` is given.
fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 || args.len() > 4 {
        eprintln!("Usage: {} <games> [seed] [random]", args[0]);
        std::process::exit(1);
    }
    let games: usize = args[1].parse()?;
    let seed: u64 = match args.get(2) {
        Some(s) => s.parse()?,
        None => 0,
    };
    let random_opponent = args.get(3).is_some_and(|a| a == "random");

    let mut rng = SmallRng::seed_from_u64(seed);
    let mut wins = [0usize; 2];
    let mut winning_shots = Vec::with_capacity(games);

    for _ in 0..games {
        let first: Box<dyn Player> = Box::new(AiPlayer::new("player1", &DEFAULT_FLEET));
        let second: Box<dyn Player> = if random_opponent {
            Box::new(RandomComputer::new("player2", &DEFAULT_FLEET))
        } else {
            Box::new(AiPlayer::new("player2", &DEFAULT_FLEET))
        };
        let mut game = Game::new(first, second, MemoryLog::new());
        let outcome = game.run(&mut rng).map_err(|e| anyhow::anyhow!(e))?;
        wins[outcome.winner_index] += 1;
        // winner moved last: it fired ceil(shots / 2)
        winning_shots.push((outcome.shots + 1) / 2);
    }

    let mean = if games == 0 {
        0.0
    } else {
        winning_shots.iter().sum::<usize>() as f64 / games as f64
    };
    let result = json!({
        "games": games,
        "seed": seed,
        "wins": {"player1": wins[0], "player2": wins[1]},
        "winning_shots": {
            "mean": mean,
            "min": winning_shots.iter().min(),
            "max": winning_shots.iter().max(),
        },
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
