//! Snowball Rush entry point
//!
//! Plays in the terminal by default; `--headless` runs the autopilot with no
//! display for a fixed number of frames.

use std::fs::File;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;

use snowball_rush::audio::{AudioLog, AudioManager};
use snowball_rush::platform::{ScriptedInput, TerminalInput};
use snowball_rush::renderer::{NullRenderer, TerminalRenderer};
use snowball_rush::{FrameClock, GameContext, GameLoop, LevelRecords, Settings};

/// Snowball Rush - catch snowballs, dodge rocks, don't melt
#[derive(Parser, Debug)]
#[command(name = "snowball-rush")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Settings file (JSON); missing file means defaults
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Run seed (default: from settings, else random)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Run the autopilot without a display
    #[arg(long)]
    headless: bool,

    /// Frames to run in headless mode
    #[arg(short, long, default_value = "36000")]
    ticks: u64,

    /// Let the autopilot play in the terminal
    #[arg(long)]
    demo: bool,

    /// Silence all audio cues
    #[arg(long)]
    mute: bool,

    /// Tick rate override (0 = unthrottled)
    #[arg(long)]
    fps: Option<u32>,

    /// Write logs here (terminal mode discards them otherwise)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

impl Args {
    /// CLI flags take precedence over the settings file
    fn apply(&self, settings: &mut Settings) {
        if let Some(seed) = self.seed {
            settings.seed = Some(seed);
        }
        if let Some(fps) = self.fps {
            settings.fps = fps;
        }
        if self.mute {
            settings.muted = true;
        }
    }
}

fn init_logging(args: &Args) -> anyhow::Result<()> {
    // Logging to stderr would tear the terminal frontend's screen
    let default_filter = if args.headless || args.log_file.is_some() {
        "info"
    } else {
        "off"
    };
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter));
    if let Some(path) = &args.log_file {
        let file = File::create(path)
            .with_context(|| format!("failed to create log file {}", path.display()))?;
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    }
    builder.init();
    Ok(())
}

fn load_records(path: Option<&Path>) -> anyhow::Result<LevelRecords> {
    match path {
        Some(path) => LevelRecords::load(path)
            .with_context(|| format!("failed to load records from {}", path.display())),
        None => Ok(LevelRecords::new()),
    }
}

/// Headless runs go full speed unless `--fps` asks otherwise
fn run_headless(game: &mut GameLoop, fps: Option<u32>) -> anyhow::Result<()> {
    let clock = fps.map_or_else(FrameClock::unthrottled, FrameClock::new);
    let mut ctx = GameContext::new(
        NullRenderer::default(),
        AudioLog::default(),
        ScriptedInput::default(),
        clock,
    );
    game.run(&mut ctx)?;

    let session = game.session();
    log::info!(
        "Headless run finished: {} frames, level {}, lives {}, temp {:.1}, {} cues",
        game.frames(),
        session.progression.level,
        session.player.lives,
        session.player.temperature,
        ctx.audio.calls.len()
    );
    Ok(())
}

fn run_terminal(game: &mut GameLoop, settings: &Settings) -> anyhow::Result<()> {
    let renderer = TerminalRenderer::new().context("failed to set up the terminal")?;
    let mut ctx = GameContext::new(
        renderer,
        AudioManager::from_settings(settings),
        TerminalInput::new(),
        FrameClock::new(settings.fps),
    );
    game.run(&mut ctx)?;
    log::info!(
        "Terminal session ended after {} frames, {} cues sounded",
        game.frames(),
        ctx.audio.cues_sounded()
    );
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(&args)?;
    log::info!("Snowball Rush starting...");

    let mut settings = match &args.config {
        Some(path) => Settings::load(path)
            .with_context(|| format!("failed to load settings from {}", path.display()))?,
        None => Settings::default(),
    };
    args.apply(&mut settings);

    let seed = settings.seed.unwrap_or_else(rand::random);
    let records = load_records(settings.records_path.as_deref())?;

    let mut game = GameLoop::new(seed)
        .with_autopilot(args.headless || args.demo)
        .with_frame_limit(args.headless.then_some(args.ticks))
        .with_records(records);

    if args.headless {
        run_headless(&mut game, args.fps)?;
    } else {
        run_terminal(&mut game, &settings)?;
    }

    if let Some(path) = &settings.records_path {
        game.records()
            .save(path)
            .with_context(|| format!("failed to save records to {}", path.display()))?;
    }
    if let Some(best) = game.records().best_level() {
        log::info!("Best level so far: {best}");
    }
    Ok(())
}
