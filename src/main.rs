//! Le compte est bon - CLI
//!
//! Numbers-round game with TUI and line-based modes, plus deal tools.

use anyhow::Result;
use clap::{Parser, Subcommand};
use countdown_numbers::{
    commands::{ReplayConfig, replay_moves, run_sample, run_simple},
    config::GameConfig,
    core::Number,
    output::{print_deal, print_replay_result, print_sample_result},
};
use std::io;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "countdown_numbers",
    about = "Le compte est bon: reach the target with six tiles and + - × ÷",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Seed for reproducible deals (random when omitted)
    #[arg(short, long, global = true)]
    seed: Option<u64>,

    /// Fixed tiles instead of a random draw, e.g. 25,8,7,3,3,1
    #[arg(long, global = true, value_delimiter = ',')]
    tiles: Option<Vec<Number>>,

    /// Fixed target instead of a random one (101-999)
    #[arg(long, global = true)]
    target: Option<Number>,

    /// Log filter, e.g. "info" or "countdown_numbers=debug" (written to stderr)
    #[arg(long, global = true, default_value = "warn")]
    log: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-based, no TUI)
    Simple,

    /// Show the tiles and target for the current options
    Deal,

    /// Replay a scripted list of moves
    Replay {
        /// Moves such as "7 x 3" "25 - 21"
        moves: Vec<String>,

        /// Number to finish on if the script stops with several left
        #[arg(short = 'f', long = "final")]
        final_choice: Option<Number>,
    },

    /// Draw many deals and report their statistics
    Sample {
        /// Number of deals to draw
        #[arg(short = 'n', long, default_value = "100000")]
        count: usize,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(&cli.log)?)
        .with_writer(io::stderr)
        .init();

    let config = GameConfig {
        seed: cli.seed,
        tiles: cli.tiles,
        target: cli.target,
    };

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(config),
        Commands::Simple => run_simple_command(&config),
        Commands::Deal => {
            print_deal(&config.deal()?);
            Ok(())
        }
        Commands::Replay {
            moves,
            final_choice,
        } => run_replay_command(&config, moves, final_choice),
        Commands::Sample { count } => {
            run_sample_command(&config, count);
            Ok(())
        }
    }
}

fn run_simple_command(config: &GameConfig) -> Result<()> {
    let deal = config.deal()?;
    run_simple(deal, io::stdin().lock()).map_err(|e| anyhow::anyhow!(e))?;
    Ok(())
}

fn run_replay_command(
    config: &GameConfig,
    moves: Vec<String>,
    final_choice: Option<Number>,
) -> Result<()> {
    let deal = config.deal()?;
    let result = replay_moves(
        deal,
        ReplayConfig {
            moves,
            final_choice,
        },
    )
    .map_err(|e| anyhow::anyhow!(e))?;

    print_replay_result(&result);
    Ok(())
}

fn run_sample_command(config: &GameConfig, count: usize) {
    let seed = config.seed.unwrap_or_else(rand::random);
    println!("Drawing {count} deals from seed {seed}...");

    let stats = run_sample(count, seed, true);
    print_sample_result(&stats);
}

fn run_play_command(config: GameConfig) -> Result<()> {
    use countdown_numbers::interactive::{App, run_tui};

    let app = App::new(config)?;
    run_tui(app)
}
