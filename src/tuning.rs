//! Game balance
//!
//! Every number the simulation reads lives here, so a session can be
//! rebalanced from a JSON file without touching code. Missing fields fall
//! back to the defaults below.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::{DEFAULT_HEIGHT, DEFAULT_WIDTH};

/// Errors raised while loading or validating a [`Tuning`]
#[derive(Debug, Error)]
pub enum TuningError {
    #[error("failed to read tuning file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse tuning: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid tuning value `{field}`: {reason}")]
    Invalid { field: &'static str, reason: &'static str },
}

/// Immutable game balance, fixed for the lifetime of a session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Play area ===
    pub width: f32,
    pub height: f32,

    // === Player ===
    /// Health at session start and after restart
    pub player_health: u32,
    /// Movement speed (pixels/s)
    pub player_speed: f32,
    pub player_radius: f32,
    /// Sprite edge length; center = top-left + size/2
    pub player_size: f32,
    /// Crosshair radius drawn around the pointer (HUD only)
    pub aim_radius: f32,

    // === Enemies ===
    /// Enemies placed at session start and after restart
    pub initial_enemies: u32,
    pub enemy_radius: f32,
    pub enemy_size: f32,
    /// Seek speed numerator
    pub enemy_speed: f32,
    /// Seek divisor; effective pursuit speed is `enemy_speed / seek_factor` px/s
    pub seek_factor: f32,

    // === Bullets ===
    pub bullet_radius: f32,
    /// Displacement per tick of a fired bullet
    pub bullet_speed: f32,
    /// Radius of the circle around the pointer the shot is aimed tangent to
    pub aim_circle_radius: f32,
    /// Seconds between accepted fire commands (0 = one bullet per fire edge)
    pub fire_cooldown: f32,

    // === Spawning and levels ===
    /// Seconds between spawns at level 1
    pub spawn_cadence: f32,
    /// Cadence reduction per level-up
    pub cadence_step: f32,
    /// Cadence never drops below this
    pub min_cadence: f32,
    /// Level N ends at `kills_per_level * (N + N * 0.5)` kills
    pub kills_per_level: f32,
    /// How long the "LEVEL N" banner stays up
    pub level_banner_secs: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,

            player_health: 3,
            player_speed: 200.0,
            player_radius: 25.0,
            player_size: 40.0,
            aim_radius: 10.0,

            initial_enemies: 4,
            enemy_radius: 20.0,
            enemy_size: 30.0,
            enemy_speed: 0.5,
            seek_factor: 0.02,

            bullet_radius: 5.0,
            bullet_speed: 15.0,
            aim_circle_radius: 2.0,
            fire_cooldown: 0.3,

            spawn_cadence: 0.7,
            cadence_step: 0.03,
            min_cadence: 0.1,
            kills_per_level: 5.0,
            level_banner_secs: 3.0,
        }
    }
}

impl Tuning {
    /// Parse and validate a JSON tuning document
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Load tuning from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, TuningError> {
        let json = fs::read_to_string(path.as_ref())?;
        let tuning = Self::from_json(&json)?;
        log::info!("Loaded tuning from {}", path.as_ref().display());
        Ok(tuning)
    }

    /// Reject values the simulation cannot run with
    pub fn validate(&self) -> Result<(), TuningError> {
        let positive = [
            ("width", self.width),
            ("height", self.height),
            ("player_speed", self.player_speed),
            ("player_radius", self.player_radius),
            ("player_size", self.player_size),
            ("enemy_radius", self.enemy_radius),
            ("enemy_size", self.enemy_size),
            ("enemy_speed", self.enemy_speed),
            ("seek_factor", self.seek_factor),
            ("bullet_radius", self.bullet_radius),
            ("bullet_speed", self.bullet_speed),
            ("aim_circle_radius", self.aim_circle_radius),
            ("spawn_cadence", self.spawn_cadence),
            ("min_cadence", self.min_cadence),
            ("kills_per_level", self.kills_per_level),
        ];
        for (field, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(TuningError::Invalid {
                    field,
                    reason: "must be finite and greater than zero",
                });
            }
        }

        let non_negative = [
            ("aim_radius", self.aim_radius),
            ("fire_cooldown", self.fire_cooldown),
            ("cadence_step", self.cadence_step),
            ("level_banner_secs", self.level_banner_secs),
        ];
        for (field, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(TuningError::Invalid {
                    field,
                    reason: "must be finite and not negative",
                });
            }
        }

        if self.min_cadence > self.spawn_cadence {
            return Err(TuningError::Invalid {
                field: "min_cadence",
                reason: "must not exceed spawn_cadence",
            });
        }

        if self.player_health == 0 {
            return Err(TuningError::Invalid {
                field: "player_health",
                reason: "must be at least 1",
            });
        }

        Ok(())
    }

    /// Pursuit speed of an enemy in pixels per second
    pub fn enemy_pixels_per_sec(&self) -> f32 {
        self.enemy_speed / self.seek_factor
    }
}
