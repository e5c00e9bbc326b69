#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use fivetwelve::{
    init_logging, GameConfig, GameEngine, LogListener, RandomPlayer, ScriptedPlayer, TileEvent,
    GRID_SIZE, INITIAL_TILES, TARGET_TILE,
};

#[cfg(feature = "std")]
use clap::{Args, Parser, Subcommand};
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args, Clone, Debug)]
#[cfg(feature = "std")]
struct BoardArgs {
    #[arg(long, default_value_t = GRID_SIZE)]
    rows: usize,
    #[arg(long, default_value_t = GRID_SIZE)]
    cols: usize,
    #[arg(long, default_value_t = TARGET_TILE, help = "Tile value that wins the game")]
    target: u32,
    #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
    seed: Option<u64>,
}

#[cfg(feature = "std")]
impl From<BoardArgs> for GameConfig {
    fn from(args: BoardArgs) -> Self {
        GameConfig {
            rows: args.rows,
            cols: args.cols,
            target: args.target,
            initial_tiles: INITIAL_TILES,
            seed: args.seed,
        }
    }
}

#[derive(Subcommand)]
#[cfg(feature = "std")]
enum Commands {
    /// Play a fixed move list such as "uurdl" and print the resulting game.
    Replay {
        moves: String,
        #[command(flatten)]
        board: BoardArgs,
        #[arg(long, help = "Print every tile event and the final board to stderr")]
        verbose: bool,
    },
    /// Play random moves until the game ends.
    Random {
        #[command(flatten)]
        board: BoardArgs,
        #[arg(long, help = "Stop after this many moves")]
        max_moves: Option<usize>,
    },
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    let engine = match cli.command {
        Commands::Replay {
            moves,
            board,
            verbose,
        } => {
            let mut player = ScriptedPlayer::parse(&moves).map_err(|e| anyhow::anyhow!(e))?;
            let mut engine = GameEngine::new(board.into()).map_err(|e| anyhow::anyhow!(e))?;
            engine.board_mut().subscribe(LogListener);
            if verbose {
                eprintln!("{}\n", engine.board());
                engine.board_mut().subscribe(|event: &TileEvent| {
                    eprintln!(
                        "{:?} tile {} -> {} at {}",
                        event.kind, event.id.0, event.value, event.position
                    );
                });
            }
            // scripted players never draw from the rng
            let mut rng = SmallRng::seed_from_u64(0);
            engine
                .run(&mut player, &mut rng, None)
                .map_err(|e| anyhow::anyhow!(e))?;
            if verbose {
                eprintln!("{}\n", engine.board());
            }
            engine
        }
        Commands::Random { board, max_moves } => {
            let mut rng = match board.seed {
                Some(s) => SmallRng::seed_from_u64(s.wrapping_add(1)),
                None => SmallRng::from_rng(&mut rand::rng()),
            };
            let mut engine = GameEngine::new(board.into()).map_err(|e| anyhow::anyhow!(e))?;
            engine.board_mut().subscribe(LogListener);
            engine
                .run(&mut RandomPlayer::new(), &mut rng, max_moves)
                .map_err(|e| anyhow::anyhow!(e))?;
            engine
        }
    };

    println!("{}", serde_json::to_string(&engine.summary())?);
    Ok(())
}
