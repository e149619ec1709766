//! Arcade sim entry point
//!
//! Runs either game headlessly in attract mode and reports the final state.

// Allow print in the CLI binary
#![allow(clippy::print_stdout, clippy::print_stderr)]

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use serde::Serialize;
use thiserror::Error;

use arcade_sim::consts::TARGET_FPS;
use arcade_sim::pong::{PongGame, PongInput, PongSnapshot, Side};
use arcade_sim::snake::{GameOver, SnakeGame, SnakeInput, SnakeSnapshot};
use arcade_sim::{ConfigError, Settings, pong, snake};

/// Deterministic Snake and Pong simulation cores
#[derive(Parser, Debug)]
#[command(name = "arcade-sim")]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Commands,
}

/// Options shared by both games
#[derive(clap::Args, Debug)]
struct RunOptions {
    /// Frames to simulate (default: one minute at 60 fps)
    #[arg(short, long, default_value = "3600")]
    frames: u64,

    /// Random seed (default: random)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Settings JSON file (missing fields use defaults)
    #[arg(long)]
    settings: Option<PathBuf>,

    /// Log a JSON snapshot every N frames
    #[arg(long)]
    snapshot_every: Option<u64>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run grid Snake on autopilot
    Snake {
        #[command(flatten)]
        opts: RunOptions,
    },
    /// Run two-player Pong on autopilot
    Pong {
        #[command(flatten)]
        opts: RunOptions,
    },
}

/// Errors surfaced by the runner
#[derive(Debug, Error)]
enum RunError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("failed to serialize report: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// A game the runner can drive on autopilot
trait Attract {
    type Outcome: Copy + Serialize;
    type Snapshot: Serialize;

    const NAME: &'static str;

    fn tick_idle(&mut self);
    fn outcome(&self) -> Option<Self::Outcome>;
    fn set_seed(&mut self, seed: u64);
    fn steps(&self) -> u64;
    fn snapshot(&self) -> Self::Snapshot;
}

impl Attract for SnakeGame {
    type Outcome = GameOver;
    type Snapshot = SnakeSnapshot;

    const NAME: &'static str = "snake";

    fn tick_idle(&mut self) {
        let input = SnakeInput {
            idle_mode: true,
            ..Default::default()
        };
        snake::tick(self, &input);
    }

    fn outcome(&self) -> Option<GameOver> {
        self.phase.outcome()
    }

    fn set_seed(&mut self, seed: u64) {
        SnakeGame::set_seed(self, seed);
    }

    fn steps(&self) -> u64 {
        self.steps
    }

    fn snapshot(&self) -> SnakeSnapshot {
        SnakeGame::snapshot(self)
    }
}

impl Attract for PongGame {
    type Outcome = Side;
    type Snapshot = PongSnapshot;

    const NAME: &'static str = "pong";

    fn tick_idle(&mut self) {
        let input = PongInput {
            idle_mode: true,
            ..Default::default()
        };
        pong::tick(self, &input);
    }

    fn outcome(&self) -> Option<Side> {
        self.phase.outcome()
    }

    fn set_seed(&mut self, seed: u64) {
        PongGame::set_seed(self, seed);
    }

    fn steps(&self) -> u64 {
        self.steps
    }

    fn snapshot(&self) -> PongSnapshot {
        PongGame::snapshot(self)
    }
}

/// One finished session
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
struct Round<O> {
    seed: u64,
    outcome: O,
}

/// Final report printed to stdout
#[derive(Serialize)]
struct Summary<O, S> {
    game: &'static str,
    seed: u64,
    frames: u64,
    simulated_secs: f32,
    /// Steps in the session still on screen
    steps: u64,
    rounds: Vec<Round<O>>,
    snapshot: S,
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    let result = match args.command {
        Commands::Snake { opts } => run(opts, |settings, seed| SnakeGame::new(settings.snake, seed)),
        Commands::Pong { opts } => run(opts, |settings, seed| PongGame::new(settings.pong, seed)),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn load_settings(opts: &RunOptions) -> Result<Settings, ConfigError> {
    match &opts.settings {
        Some(path) => Settings::load(path),
        None => Ok(Settings::default()),
    }
}

fn pick_seed(opts: &RunOptions) -> u64 {
    let seed = opts.seed.unwrap_or_else(rand::random);
    log::info!("Using seed {}", seed);
    seed
}

fn wants_snapshot(opts: &RunOptions, frame: u64) -> bool {
    opts.snapshot_every.is_some_and(|n| n > 0 && frame % n == 0)
}

/// Seed for the session after `round` finished ones
fn round_seed(base: u64, round: u64) -> u64 {
    base.wrapping_add(round)
}

fn run<G, F>(opts: RunOptions, build: F) -> Result<(), RunError>
where
    G: Attract,
    F: FnOnce(Settings, u64) -> Result<G, ConfigError>,
{
    let settings = load_settings(&opts)?;
    let seed = pick_seed(&opts);
    let mut game = build(settings, seed)?;
    let mut rounds = Vec::new();

    for frame in 1..=opts.frames {
        play_frame(&mut game, seed, &mut rounds);
        if wants_snapshot(&opts, frame) {
            log::info!("frame {}: {}", frame, serde_json::to_string(&game.snapshot())?);
        }
    }

    let summary = Summary {
        game: G::NAME,
        seed,
        frames: opts.frames,
        simulated_secs: opts.frames as f32 / TARGET_FPS as f32,
        steps: game.steps(),
        rounds,
        snapshot: game.snapshot(),
    };
    println!("{}", serde_json::to_string(&summary)?);
    Ok(())
}

/// Tick once. When a session ends, record it and reseed so the autopilot's
/// next round plays out differently.
fn play_frame<G: Attract>(game: &mut G, base_seed: u64, rounds: &mut Vec<Round<G::Outcome>>) {
    let was_over = game.outcome().is_some();
    game.tick_idle();
    if was_over {
        return;
    }
    if let Some(outcome) = game.outcome() {
        rounds.push(Round {
            seed: round_seed(base_seed, rounds.len() as u64),
            outcome,
        });
        let next = round_seed(base_seed, rounds.len() as u64);
        log::info!("{} round {} over, next seed {}", G::NAME, rounds.len(), next);
        game.set_seed(next);
    }
}
