//! Simulation core
//!
//! All gameplay logic lives here. It stays free of rendering, audio and
//! platform dependencies:
//! - One `tick` per display frame with a clamped delta-time
//! - Seeded RNG only
//! - Removals are mark-then-compact, never mid-iteration

pub mod aim;
pub mod clock;
pub mod collision;
pub mod input;
pub mod level;
pub mod snapshot;
pub mod spawner;
pub mod state;
pub mod steering;
pub mod tick;

pub use aim::{fire_velocity, tangent_direction};
pub use clock::{FrameClock, clamp_dt};
pub use collision::circles_intersect;
pub use input::{Command, HeldDirections, InputState};
pub use level::{LevelState, kill_threshold};
pub use snapshot::{BulletView, EnemyView, PlayerView, Snapshot};
pub use spawner::SpawnDirector;
pub use state::{Bullet, Enemy, GameEvent, GamePhase, GameState, Player, Splatter};
pub use steering::{seek, seek_velocity};
pub use tick::tick;
