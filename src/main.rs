//! Bunker Siege headless driver
//!
//! Stands in for the browser frame loop: feeds synthetic frame timestamps
//! through a `FrameClock`, plays with a simple autopilot, and logs how the
//! session went. Useful for balance passes on a tuning file.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use glam::Vec2;

use bunker_siege::Tuning;
use bunker_siege::sim::{
    Command, FrameClock, GameEvent, GamePhase, GameState, InputState, Snapshot, tick,
};

#[derive(Debug, Parser)]
#[command(name = "bunker-siege", about = "Run a headless Bunker Siege session")]
struct Args {
    /// JSON tuning file (defaults are used when omitted)
    #[arg(long)]
    tuning: Option<PathBuf>,

    /// Number of frames to simulate
    #[arg(long, default_value_t = 3600)]
    frames: u32,

    /// Milliseconds between synthetic frames
    #[arg(long, default_value_t = 16.0)]
    frame_ms: f64,

    /// RNG seed (defaults to the current time)
    #[arg(long)]
    seed: Option<u64>,

    /// Restart automatically after dying
    #[arg(long)]
    auto_restart: bool,

    /// Print the final snapshot as JSON
    #[arg(long)]
    dump: bool,
}

/// Session driver holding everything the frame callback needs
struct Game {
    state: GameState,
    clock: FrameClock,
    input: InputState,
    /// Commands queued since the last frame
    pending: Vec<Command>,
    last: Option<Snapshot>,
    kills_total: u32,
    best_level: u32,
}

impl Game {
    fn new(tuning: Tuning, seed: u64) -> Self {
        Self {
            state: GameState::new(tuning, seed),
            clock: FrameClock::new(),
            input: InputState::default(),
            pending: Vec::new(),
            last: None,
            kills_total: 0,
            best_level: 1,
        }
    }

    /// One animation-frame callback
    fn frame(&mut self, now_ms: f64) {
        let dt = self.clock.tick(now_ms);
        let commands = std::mem::take(&mut self.pending);
        let snapshot = tick(&mut self.state, &self.input, &commands, dt);

        for event in &snapshot.events {
            match event {
                GameEvent::EnemyKilled { .. } => self.kills_total += 1,
                GameEvent::LevelUp { level } => {
                    self.best_level = self.best_level.max(*level);
                }
                GameEvent::PlayerDied { kills, .. } => {
                    log::info!(
                        "Died: {} kills, survived {} round(s)",
                        kills,
                        snapshot.rounds_survived()
                    );
                }
                _ => {}
            }
        }

        self.last = Some(snapshot);
    }

    /// Pick inputs for the next frame from the last snapshot
    fn autopilot(&mut self, auto_restart: bool) {
        let Some(snapshot) = &self.last else {
            self.input.aim = Vec2::new(self.state.tuning.width / 2.0, 0.0);
            self.pending.push(Command::Fire);
            return;
        };

        match snapshot.phase {
            GamePhase::Dead => {
                if auto_restart {
                    self.pending.push(Command::Restart);
                }
            }
            GamePhase::Intro | GamePhase::Active => {
                let me = snapshot.player.center;
                let nearest = snapshot
                    .enemies
                    .iter()
                    .map(|e| e.center)
                    .min_by(|a, b| {
                        a.distance_squared(me)
                            .partial_cmp(&b.distance_squared(me))
                            .unwrap_or(std::cmp::Ordering::Equal)
                    });
                if let Some(target) = nearest {
                    self.input.aim = target;
                    self.pending.push(Command::Fire);
                }
            }
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let tuning = match &args.tuning {
        Some(path) => Tuning::load(path)
            .with_context(|| format!("loading tuning from {}", path.display()))?,
        None => Tuning::default(),
    };

    let seed = args.seed.unwrap_or_else(|| {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0)
    });
    log::info!("Bunker Siege starting with seed {}", seed);

    let mut game = Game::new(tuning, seed);
    for frame in 0..args.frames {
        game.autopilot(args.auto_restart);
        game.frame(frame as f64 * args.frame_ms);
    }

    log::info!(
        "Session over after {} ticks: {} kills, best level {}, {} death(s)",
        game.state.time_ticks,
        game.kills_total,
        game.best_level,
        game.state.deaths
    );

    if args.dump {
        if let Some(snapshot) = &game.last {
            let json = serde_json::to_string_pretty(snapshot).context("serializing snapshot")?;
            println!("{json}");
        }
    }

    Ok(())
}
