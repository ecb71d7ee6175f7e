//! Timed enemy spawning

use serde::{Deserialize, Serialize};

/// Countdown that requests one enemy each time it elapses
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpawnDirector {
    /// Seconds until the next spawn
    pub cooldown: f32,
}

impl SpawnDirector {
    pub fn new(cadence: f32) -> Self {
        Self { cooldown: cadence }
    }

    /// Run the countdown for `dt` seconds.
    ///
    /// Returns true when a spawn is due; the countdown is then restarted at
    /// `cadence`, so it is never negative between ticks.
    pub fn advance(&mut self, dt: f32, cadence: f32) -> bool {
        self.cooldown -= dt;
        if self.cooldown <= 0.0 {
            self.cooldown = cadence;
            true
        } else {
            false
        }
    }
}
