use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};

use connect_four_search::config::{AgentConfig, AppConfig, EngineKind};
use connect_four_search::game::{GameState, Player};
use connect_four_search::play::play_match_observed;

/// Minimax and alpha-beta search for Connect Four.
#[derive(Parser)]
#[command(name = "connect-four-search", about = "Play or analyze Connect Four positions")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Play a full match between two engines
    Play {
        /// Path to TOML configuration file
        #[arg(long, default_value = "config.toml")]
        config: PathBuf,

        /// Override Red's engine: minimax, alpha-beta or random
        #[arg(long)]
        red: Option<EngineKind>,

        /// Override Blue's engine: minimax, alpha-beta or random
        #[arg(long)]
        blue: Option<EngineKind>,

        /// Override the search depth of both players
        #[arg(long)]
        depth: Option<u32>,

        /// Print the match record as JSON instead of the board after each move
        #[arg(long)]
        json: bool,
    },

    /// Print the column an engine would play in a position
    BestMove {
        /// Board rows, top first, separated by '/' (R, B, '.')
        #[arg(long)]
        position: String,

        /// Player to move: red or blue
        #[arg(long, default_value = "red")]
        to_move: Player,

        /// Engine: minimax, alpha-beta or random
        #[arg(long, default_value = "alpha-beta")]
        engine: EngineKind,

        /// Search depth (omit for an unbounded minimax search)
        #[arg(long)]
        depth: Option<u32>,
    },

    /// Print the default configuration as TOML
    DefaultConfig,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Command::Play {
            config,
            red,
            blue,
            depth,
            json,
        } => run_play(config, red, blue, depth, json),
        Command::BestMove {
            position,
            to_move,
            engine,
            depth,
        } => run_best_move(&position, to_move, engine, depth),
        Command::DefaultConfig => {
            print!("{}", AppConfig::default_toml());
            Ok(())
        }
    }
}

fn run_play(
    config_path: PathBuf,
    red: Option<EngineKind>,
    blue: Option<EngineKind>,
    depth: Option<u32>,
    json: bool,
) -> Result<()> {
    let mut config = AppConfig::load_or_default(&config_path)
        .with_context(|| format!("loading config from {}", config_path.display()))?;

    // Apply CLI overrides
    if let Some(engine) = red {
        config.red.engine = engine;
    }
    if let Some(engine) = blue {
        config.blue.engine = engine;
    }
    if let Some(depth) = depth {
        config.red.depth = Some(depth);
        config.blue.depth = Some(depth);
    }
    config.validate().context("invalid configuration")?;

    let mut red_agent = config.red.build()?;
    let mut blue_agent = config.blue.build()?;
    let start = config.board.initial_state()?;

    let record = play_match_observed(red_agent.as_mut(), blue_agent.as_mut(), start, |state| {
        if !json {
            println!("{state}\n");
        }
    })?;

    if json {
        println!("{}", serde_json::to_string_pretty(&record)?);
    } else {
        println!("{}", record.summary());
    }
    Ok(())
}

fn run_best_move(
    position: &str,
    to_move: Player,
    engine: EngineKind,
    depth: Option<u32>,
) -> Result<()> {
    let rows: Vec<&str> = position.split('/').collect();
    let state = GameState::from_rows(&rows, to_move)
        .with_context(|| format!("parsing position '{position}'"))?;
    if state.is_terminal() {
        bail!("position is already decided:\n{state}");
    }

    let mut agent = AgentConfig {
        engine,
        depth,
        seed: None,
    }
    .build()?;
    let column = agent
        .select_action(&state)
        .with_context(|| format!("{} search failed", agent.name()))?;

    println!("{state}\n");
    println!("{} plays column {column}", agent.name());
    Ok(())
}
