//! Level progression and the level banner
//!
//! Kills raise the level; each level-up shortens the spawn cadence. The
//! banner tracks which level the UI last announced, so a level change shows
//! up as one discrete announcement rather than something to poll.

use serde::{Deserialize, Serialize};

use crate::Tuning;

/// Kills needed to finish `level`: `per_level * (level + level * 0.5)`
#[inline]
pub fn kill_threshold(level: u32, per_level: f32) -> f32 {
    let level = level as f32;
    per_level * (level + level * 0.5)
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LevelState {
    /// Current level, starting at 1
    pub level: u32,
    /// Seconds between enemy spawns at this level
    pub cadence: f32,
    /// Level most recently announced to the UI
    pub announced: Option<u32>,
    /// Seconds the banner has left on screen
    pub banner_secs: f32,
}

impl LevelState {
    pub fn new(cadence: f32) -> Self {
        Self {
            level: 1,
            cadence,
            announced: None,
            banner_secs: 0.0,
        }
    }

    /// Raise the level if `kills` has reached the current threshold.
    ///
    /// At most one level per call. Returns the new level on a level-up.
    pub fn progress(&mut self, kills: u32, tuning: &Tuning) -> Option<u32> {
        if (kills as f32) < kill_threshold(self.level, tuning.kills_per_level) {
            return None;
        }

        self.level += 1;
        self.cadence = (self.cadence - tuning.cadence_step).max(tuning.min_cadence);
        log::info!(
            "Level {} reached at {} kills (spawn every {:.2}s)",
            self.level,
            kills,
            self.cadence
        );
        Some(self.level)
    }

    /// Announce the current level if the UI has not seen it yet.
    ///
    /// Returns the level to show; the banner then stays up for `banner_secs`.
    pub fn announce(&mut self, banner_secs: f32) -> Option<u32> {
        if self.announced == Some(self.level) {
            return None;
        }
        self.announced = Some(self.level);
        self.banner_secs = banner_secs;
        Some(self.level)
    }

    /// Count the banner down
    pub fn tick_banner(&mut self, dt: f32) {
        if self.banner_secs > 0.0 {
            self.banner_secs = (self.banner_secs - dt).max(0.0);
        }
    }

    /// Level the banner is currently showing, if any
    pub fn banner(&self) -> Option<u32> {
        if self.banner_secs > 0.0 {
            self.announced
        } else {
            None
        }
    }

    /// Back to level 1 with nothing announced, so the next active tick shows
    /// the "LEVEL 1" banner again.
    pub fn reset(&mut self, cadence: f32) {
        self.level = 1;
        self.cadence = cadence;
        self.announced = None;
        self.banner_secs = 0.0;
    }
}
