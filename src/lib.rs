//! Bunker Siege - a stationary-bunker arcade shooter
//!
//! Core modules:
//! - `sim`: Simulation core (spawning, steering, collisions, game state)
//! - `tuning`: Data-driven game balance
//!
//! Rendering, audio and raw input capture live outside this crate; they read
//! the [`sim::Snapshot`] produced by each tick and push [`sim::Command`]s.

pub mod sim;
pub mod tuning;

pub use tuning::{Tuning, TuningError};

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Lowest frame rate the clock will report (slow frames are clamped here)
    pub const MIN_FPS: f32 = 12.0;
    /// Highest frame rate the clock will report
    pub const MAX_FPS: f32 = 60.0;

    /// Smallest delta-time a tick will run with (1 / MAX_FPS)
    pub const MIN_DT: f32 = 1.0 / MAX_FPS;
    /// Largest delta-time a tick will run with (1 / MIN_FPS)
    pub const MAX_DT: f32 = 1.0 / MIN_FPS;

    /// Default play area
    pub const DEFAULT_WIDTH: f32 = 640.0;
    pub const DEFAULT_HEIGHT: f32 = 480.0;
}

/// Center of an axis-aligned sprite given its top-left corner and edge length
#[inline]
pub fn sprite_center(top_left: Vec2, size: f32) -> Vec2 {
    top_left + Vec2::splat(size / 2.0)
}

/// True if `p` lies inside the half-open rectangle [0, width) x [0, height)
#[inline]
pub fn in_bounds(p: Vec2, width: f32, height: f32) -> bool {
    p.x >= 0.0 && p.x < width && p.y >= 0.0 && p.y < height
}
