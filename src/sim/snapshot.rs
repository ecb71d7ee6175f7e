//! Render/HUD snapshot
//!
//! Built read-only from the game state at the end of every tick. The
//! renderer, HUD and audio collaborators consume this and nothing else.

use glam::Vec2;
use serde::Serialize;

use super::state::{GameEvent, GamePhase, GameState};

#[derive(Debug, Clone, Serialize)]
pub struct PlayerView {
    /// Sprite top-left corner
    pub pos: Vec2,
    pub center: Vec2,
    pub radius: f32,
    pub size: f32,
    pub health: u32,
    pub kills: u32,
    pub aim: Vec2,
    pub aim_radius: f32,
    pub dead: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct EnemyView {
    pub pos: Vec2,
    pub center: Vec2,
    pub radius: f32,
    pub size: f32,
}

#[derive(Debug, Clone, Serialize)]
pub struct BulletView {
    pub pos: Vec2,
    pub radius: f32,
}

/// Everything needed to draw one frame
#[derive(Debug, Clone, Serialize)]
pub struct Snapshot {
    pub phase: GamePhase,
    /// Pause overlay is up; draw the paused notice
    pub paused: bool,
    pub player: PlayerView,
    pub enemies: Vec<EnemyView>,
    pub bullets: Vec<BulletView>,
    pub splatters: Vec<Vec2>,
    pub level: u32,
    /// The level went up this tick
    pub level_up: bool,
    /// Level shown by the transient "LEVEL N" banner
    pub level_banner: Option<u32>,
    /// Events raised by this tick, in order
    pub events: Vec<GameEvent>,
}

impl Snapshot {
    /// Level reached, for the "You survived N rounds" card
    pub fn rounds_survived(&self) -> u32 {
        self.level
    }

    /// No position in the snapshot is NaN or infinite
    pub fn is_finite(&self) -> bool {
        self.player.pos.is_finite()
            && self.player.aim.is_finite()
            && self.enemies.iter().all(|e| e.pos.is_finite())
            && self.bullets.iter().all(|b| b.pos.is_finite())
            && self.splatters.iter().all(|s| s.is_finite())
    }
}

/// Build a snapshot from the current state
pub fn build_snapshot(state: &GameState, events: Vec<GameEvent>) -> Snapshot {
    let player = &state.player;
    let level_up = events
        .iter()
        .any(|e| matches!(e, GameEvent::LevelUp { .. }));

    Snapshot {
        phase: state.phase,
        paused: state.paused,
        player: PlayerView {
            pos: player.pos,
            center: player.center(),
            radius: player.radius,
            size: player.size,
            health: player.health,
            kills: player.kills,
            aim: player.aim,
            aim_radius: state.tuning.aim_radius,
            dead: player.dead,
        },
        enemies: state
            .enemies
            .iter()
            .map(|e| EnemyView {
                pos: e.pos,
                center: e.center(),
                radius: e.radius,
                size: e.size,
            })
            .collect(),
        bullets: state
            .bullets
            .iter()
            .map(|b| BulletView {
                pos: b.pos,
                radius: b.radius,
            })
            .collect(),
        splatters: state.splatters.iter().map(|s| s.pos).collect(),
        level: state.level.level,
        level_up,
        level_banner: state.level.banner(),
        events,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Tuning;

    #[test]
    fn test_snapshot_mirrors_state() {
        let state = GameState::new(Tuning::default(), 11);
        let snap = build_snapshot(&state, Vec::new());
        assert_eq!(snap.phase, GamePhase::Intro);
        assert_eq!(snap.enemies.len(), state.enemies.len());
        assert_eq!(snap.player.health, 3);
        assert_eq!(snap.level, 1);
        assert!(!snap.level_up);
        assert!(snap.is_finite());
    }

    #[test]
    fn test_level_up_flag_follows_events() {
        let state = GameState::new(Tuning::default(), 11);
        let snap = build_snapshot(
            &state,
            vec![
                GameEvent::LevelUp { level: 2 },
                GameEvent::LevelAnnounced { level: 2 },
            ],
        );
        assert!(snap.level_up);

        // A banner alone is not a level-up
        let snap = build_snapshot(&state, vec![GameEvent::LevelAnnounced { level: 1 }]);
        assert!(!snap.level_up);
    }

    #[test]
    fn test_rounds_survived_is_level_reached() {
        let mut state = GameState::new(Tuning::default(), 11);
        state.level.level = 4;
        let snap = build_snapshot(&state, Vec::new());
        assert_eq!(snap.rounds_survived(), 4);
    }

    #[test]
    fn test_serializes_to_json() {
        let state = GameState::new(Tuning::default(), 11);
        let snap = build_snapshot(&state, vec![GameEvent::Paused]);
        let json = serde_json::to_value(&snap).unwrap();
        assert_eq!(json["phase"], "Intro");
        assert_eq!(json["events"][0]["type"], "Paused");
        assert_eq!(json["enemies"].as_array().map(|a| a.len()), Some(4));
    }
}
