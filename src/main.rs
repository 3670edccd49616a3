#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use broadside::{
    init_logging, AiPlayer, CliPlayer, Game, MoveLog, Player, RandomComputer, TextBattlelog,
    DEFAULT_FLEET, DEFAULT_LOG_FILE,
};
#[cfg(feature = "std")]
use clap::{Parser, Subcommand, ValueEnum};
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;
#[cfg(feature = "std")]
use std::{fs::File, io::BufWriter, path::PathBuf};

#[derive(Parser)]
#[command(author, version, about = "Battleship against a probability-driven computer", long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[arg(long, global = true, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
    seed: Option<u64>,
    #[arg(long, global = true, default_value = DEFAULT_LOG_FILE, help = "File the battlelog is written to")]
    log: PathBuf,
    #[command(subcommand)]
    command: Commands,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
#[cfg(feature = "std")]
enum ComputerKind {
    /// Fires at random unshot squares.
    Random,
    /// Fires where a ship is most likely to be.
    Intelligent,
}

#[derive(Subcommand)]
#[cfg(feature = "std")]
enum Commands {
    /// Play against the computer in this terminal.
    Play {
        #[arg(long, default_value = "Player")]
        name: String,
        #[arg(long, value_enum, default_value_t = ComputerKind::Intelligent)]
        opponent: ComputerKind,
        #[arg(long, help = "Show the search density before every shot")]
        density: bool,
    },
    /// Watch two computer players play each other.
    Watch {
        #[arg(long, value_enum, default_value_t = ComputerKind::Intelligent)]
        first: ComputerKind,
        #[arg(long, value_enum, default_value_t = ComputerKind::Intelligent)]
        second: ComputerKind,
    },
}

#[cfg(feature = "std")]
fn computer(kind: ComputerKind, name: &str) -> Box<dyn Player> {
    match kind {
        ComputerKind::Random => Box::new(RandomComputer::new(name, &DEFAULT_FLEET)),
        ComputerKind::Intelligent => Box::new(AiPlayer::new(name, &DEFAULT_FLEET)),
    }
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    let mut rng = match cli.seed {
        Some(s) => {
            println!("Using fixed seed: {} (game will be reproducible)", s);
            SmallRng::seed_from_u64(s)
        }
        None => {
            let mut seed_rng = rand::rng();
            SmallRng::from_rng(&mut seed_rng)
        }
    };

    let (first, second) = match cli.command {
        Commands::Play {
            name,
            opponent,
            density,
        } => {
            let human = CliPlayer::stdio(name, &DEFAULT_FLEET).with_density(density);
            (Box::new(human) as Box<dyn Player>, computer(opponent, "Computer"))
        }
        Commands::Watch { first, second } => {
            (computer(first, "Computer 1"), computer(second, "Computer 2"))
        }
    };

    let file = File::create(&cli.log)
        .map_err(|e| anyhow::anyhow!("cannot open battlelog {}: {}", cli.log.display(), e))?;
    let log = TextBattlelog::new(BufWriter::new(file));
    run(Game::new(first, second, log), &mut rng)
}

#[cfg(feature = "std")]
fn run<L: MoveLog>(mut game: Game<L>, rng: &mut SmallRng) -> anyhow::Result<()> {
    let outcome = game.run(rng).map_err(|e| anyhow::anyhow!(e))?;
    if outcome.forfeit {
        println!("{} has forfeited the match. {} wins.", outcome.loser, outcome.winner);
    } else {
        println!("{} wins after {} shots.", outcome.winner, outcome.shots);
    }
    Ok(())
}
