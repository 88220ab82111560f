//! Headless arcade runner
//!
//! Replays an input script (or runs with no input until the tick limit) and
//! writes every frame's draw list to stdout as one JSON object per line.

use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result, anyhow};
use clap::Parser;

use arcade_trio::driver::{
    Driver, FrameSink, IdleInput, InputSource, JsonLinesSink, NoPacer, Pacer, RunSummary,
    ScriptedInput, SleepPacer,
};
use arcade_trio::sim::{PongState, SnakeState, TicTacToeState};
use arcade_trio::{Game, Settings, Variant};

/// Command-line arguments; flags override values from `--settings`
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct CliArgs {
    /// Game to run: pong, snake or tictactoe
    #[arg(value_name = "VARIANT", value_parser = parse_variant)]
    variant: Option<Variant>,
    /// JSON settings file
    #[arg(long, value_name = "PATH")]
    settings: Option<PathBuf>,
    /// JSON array of input batches, one batch per tick
    #[arg(long, value_name = "PATH")]
    script: Option<PathBuf>,
    /// Stop after this many ticks
    #[arg(long, value_name = "COUNT")]
    ticks: Option<u64>,
    /// Seed for snake spawns and food
    #[arg(long)]
    seed: Option<u64>,
    /// Sleep the game's tick interval between ticks
    #[arg(long)]
    realtime: bool,
}

fn parse_variant(s: &str) -> Result<Variant> {
    Variant::from_str(s)
        .ok_or_else(|| anyhow!("Unknown game '{s}' (expected pong, snake or tictactoe)"))
}

impl CliArgs {
    fn into_settings(self) -> Result<(Settings, Option<PathBuf>)> {
        let mut settings = match &self.settings {
            Some(path) => Settings::load(path)?,
            None => Settings::default(),
        };
        if let Some(variant) = self.variant {
            settings.variant = variant;
        }
        if let Some(seed) = self.seed {
            settings.seed = seed;
        }
        if self.ticks.is_some() {
            settings.max_ticks = self.ticks;
        }
        settings.realtime |= self.realtime;
        Ok((settings, self.script))
    }
}

fn load_input(path: Option<&PathBuf>, max_ticks: Option<u64>) -> Result<Box<dyn InputSource>> {
    match path {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read input script {}", path.display()))?;
            let script = ScriptedInput::from_json(&json)
                .with_context(|| format!("Failed to parse {}", path.display()))?;
            Ok(Box::new(script))
        }
        // Without a script, idle until the tick limit
        None if max_ticks.is_some() => Ok(Box::new(IdleInput)),
        None => Err(anyhow!("Either --script or --ticks is required")),
    }
}

fn run<G: Game>(
    game: G,
    input: impl InputSource,
    sink: impl FrameSink,
    pacer: impl Pacer,
    max_ticks: Option<u64>,
) -> io::Result<RunSummary> {
    Driver::new(game, input, sink, pacer).run(max_ticks)
}

fn run_paced(
    game: impl Game,
    input: impl InputSource,
    sink: impl FrameSink,
    settings: &Settings,
) -> io::Result<RunSummary> {
    if settings.realtime {
        run(game, input, sink, SleepPacer, settings.max_ticks)
    } else {
        run(game, input, sink, NoPacer, settings.max_ticks)
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let (settings, script) = CliArgs::parse().into_settings()?;
    let input = load_input(script.as_ref(), settings.max_ticks)?;
    log::info!(
        "Running {} (seed {}, realtime {})",
        settings.variant.as_str(),
        settings.seed,
        settings.realtime
    );

    let sink = JsonLinesSink::new(io::stdout().lock());
    let summary = match settings.variant {
        Variant::Pong => run_paced(PongState::new(), input, sink, &settings),
        Variant::Snake => run_paced(SnakeState::new(settings.seed), input, sink, &settings),
        Variant::TicTacToe => run_paced(TicTacToeState::new(), input, sink, &settings),
    }
    .context("Failed to write frames")?;

    log::info!("Done after {} ticks", summary.ticks);
    Ok(())
}
