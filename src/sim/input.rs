//! Abstract player input
//!
//! The input-capture layer (keyboard, pointer) lives outside the crate and
//! translates OS events into these types.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Movement directions currently held down
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeldDirections {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl HeldDirections {
    pub const NONE: Self = Self {
        up: false,
        down: false,
        left: false,
        right: false,
    };

    pub fn any(&self) -> bool {
        self.up || self.down || self.left || self.right
    }
}

/// Level-triggered input, sampled once per tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct InputState {
    pub held: HeldDirections,
    /// Latest pointer position in play-area coordinates
    pub aim: Vec2,
}

impl InputState {
    pub fn aiming_at(aim: Vec2) -> Self {
        Self {
            held: HeldDirections::NONE,
            aim,
        }
    }
}

/// Edge-triggered commands, drained at fixed points of the tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Command {
    /// Fire toward [`InputState::aim`] (also starts the game from the intro)
    Fire,
    /// Enter the pause overlay
    Pause,
    /// Leave the pause overlay
    Resume,
    /// Start over after death
    Restart,
}
