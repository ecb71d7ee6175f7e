//! Game state and core simulation types
//!
//! `GameState` is the single aggregate a tick mutates. Entities are plain
//! records; behavior lives in the sibling modules.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::input::HeldDirections;
use super::level::LevelState;
use super::spawner::SpawnDirector;
use crate::Tuning;
use crate::sprite_center;

/// Session phase. Pausing is an overlay tracked separately in
/// [`GameState::paused`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Title card; the world is static until the first shot
    Intro,
    /// Spawning, movement and collisions all run
    Active,
    /// Health ran out; only a restart is accepted
    Dead,
}

/// Something that happened during a tick, for audio/UI collaborators
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    /// First shot of the session left the intro
    GameStarted,
    Fired { bullet_id: u32 },
    EnemySpawned { enemy_id: u32 },
    EnemyKilled { enemy_id: u32, at: Vec2 },
    PlayerHit { enemy_id: u32, health: u32 },
    /// Kills crossed the threshold and the level went up by one
    LevelUp { level: u32 },
    /// The "LEVEL N" banner should appear
    LevelAnnounced { level: u32 },
    PlayerDied { kills: u32, level: u32 },
    Restarted,
    Paused,
    Resumed,
}

/// The bunker the player defends
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    /// Sprite top-left corner
    pub pos: Vec2,
    pub radius: f32,
    pub size: f32,
    /// Movement speed (pixels/s)
    pub speed: f32,
    pub health: u32,
    pub kills: u32,
    /// Latest pointer position
    pub aim: Vec2,
    pub dead: bool,
}

impl Player {
    /// Fresh player centered in the play area
    pub fn new(tuning: &Tuning) -> Self {
        let center = Vec2::new(tuning.width / 2.0, tuning.height / 2.0);
        Self {
            pos: center - Vec2::splat(tuning.player_size / 2.0),
            radius: tuning.player_radius,
            size: tuning.player_size,
            speed: tuning.player_speed,
            health: tuning.player_health,
            kills: 0,
            aim: Vec2::ZERO,
            dead: false,
        }
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        sprite_center(self.pos, self.size)
    }

    /// Move along each held direction whose edge the center has not crossed
    pub fn apply_movement(&mut self, held: HeldDirections, dt: f32, width: f32, height: f32) {
        let step = self.speed * dt;
        let center = self.center();

        if held.up && center.y > 0.0 {
            self.pos.y -= step;
        }
        if held.down && center.y <= height {
            self.pos.y += step;
        }
        if held.left && center.x > 0.0 {
            self.pos.x -= step;
        }
        if held.right && center.x <= width {
            self.pos.x += step;
        }
    }

    /// Take one point of damage. Returns the remaining health.
    pub fn take_hit(&mut self) -> u32 {
        self.health = self.health.saturating_sub(1);
        self.health
    }
}

/// A zombie steering toward the player
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enemy {
    pub id: u32,
    /// Sprite top-left corner
    pub pos: Vec2,
    pub radius: f32,
    pub size: f32,
    /// Seek speed numerator (see [`super::steering::seek`])
    pub speed: f32,
}

impl Enemy {
    pub fn new(id: u32, pos: Vec2, tuning: &Tuning) -> Self {
        Self {
            id,
            pos,
            radius: tuning.enemy_radius,
            size: tuning.enemy_size,
            speed: tuning.enemy_speed,
        }
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        sprite_center(self.pos, self.size)
    }
}

/// A projectile with a velocity fixed at fire time
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bullet {
    pub id: u32,
    /// Center
    pub pos: Vec2,
    /// Displacement per tick
    pub vel: Vec2,
    pub radius: f32,
}

impl Bullet {
    pub fn advance(&mut self) {
        self.pos += self.vel;
    }
}

/// Decorative mark left where an enemy died. Never removed during a session.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Splatter {
    pub pos: Vec2,
}

/// Complete session state
#[derive(Debug, Clone)]
pub struct GameState {
    pub tuning: Tuning,
    /// Run seed for reproducibility
    pub seed: u64,
    rng: Pcg32,
    pub phase: GamePhase,
    /// Pause overlay; freezes everything while set
    pub paused: bool,
    pub player: Player,
    pub enemies: Vec<Enemy>,
    pub bullets: Vec<Bullet>,
    pub splatters: Vec<Splatter>,
    pub level: LevelState,
    pub spawner: SpawnDirector,
    /// Seconds until another fire command is accepted
    pub fire_cooldown: f32,
    /// Ticks advanced while not paused
    pub time_ticks: u64,
    /// Deaths this session
    pub deaths: u32,
    /// Events raised by the tick in progress
    pub(crate) events: Vec<GameEvent>,
    next_id: u32,
}

impl GameState {
    /// Create a new session in the intro phase. `tuning` is expected to
    /// have passed [`Tuning::validate`].
    pub fn new(tuning: Tuning, seed: u64) -> Self {
        debug_assert!(tuning.validate().is_ok(), "invalid tuning: {tuning:?}");
        let mut state = Self {
            player: Player::new(&tuning),
            level: LevelState::new(tuning.spawn_cadence),
            spawner: SpawnDirector::new(tuning.spawn_cadence),
            tuning,
            seed,
            rng: Pcg32::seed_from_u64(seed),
            phase: GamePhase::Intro,
            paused: false,
            enemies: Vec::new(),
            bullets: Vec::new(),
            splatters: Vec::new(),
            fire_cooldown: 0.0,
            time_ticks: 0,
            deaths: 0,
            events: Vec::new(),
            next_id: 1,
        };

        state.spawn_initial_enemies();
        state
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Spawn one enemy at a uniformly random point of the play area
    pub fn spawn_enemy_random(&mut self) -> u32 {
        let x = self.rng.random_range(0.0..self.tuning.width);
        let y = self.rng.random_range(0.0..self.tuning.height);
        self.spawn_enemy_at(Vec2::new(x, y))
    }

    /// Spawn one enemy with its top-left corner at `pos`
    pub fn spawn_enemy_at(&mut self, pos: Vec2) -> u32 {
        let id = self.next_entity_id();
        self.enemies.push(Enemy::new(id, pos, &self.tuning));
        log::debug!("Enemy {} spawned at ({:.0}, {:.0})", id, pos.x, pos.y);
        id
    }

    fn spawn_initial_enemies(&mut self) {
        for _ in 0..self.tuning.initial_enemies {
            self.spawn_enemy_random();
        }
    }

    /// Wipe the session back to its starting values and enter play. The
    /// "LEVEL 1" banner is announced again on the next tick.
    pub fn restart(&mut self) {
        self.enemies.clear();
        self.bullets.clear();
        self.splatters.clear();
        self.player = Player::new(&self.tuning);
        self.level.reset(self.tuning.spawn_cadence);
        self.spawner = SpawnDirector::new(self.tuning.spawn_cadence);
        self.fire_cooldown = 0.0;
        self.spawn_initial_enemies();
        self.phase = GamePhase::Active;
    }

    pub(crate) fn push_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session() {
        let state = GameState::new(Tuning::default(), 7);
        assert_eq!(state.phase, GamePhase::Intro);
        assert!(!state.paused);
        assert_eq!(state.enemies.len(), 4);
        assert_eq!(state.player.health, 3);
        assert_eq!(state.player.center(), Vec2::new(320.0, 240.0));
        assert_eq!(state.level.level, 1);
    }

    #[test]
    fn test_spawns_inside_play_area() {
        let mut state = GameState::new(Tuning::default(), 99);
        for _ in 0..200 {
            state.spawn_enemy_random();
        }
        for enemy in &state.enemies {
            assert!(crate::in_bounds(enemy.pos, 640.0, 480.0));
        }
    }

    #[test]
    fn test_entity_ids_are_unique() {
        let mut state = GameState::new(Tuning::default(), 1);
        let a = state.spawn_enemy_random();
        let b = state.spawn_enemy_random();
        assert_ne!(a, b);
        assert!(state.enemies.iter().all(|e| e.id != 0));
    }

    #[test]
    fn test_same_seed_same_spawns() {
        let a = GameState::new(Tuning::default(), 1234);
        let b = GameState::new(Tuning::default(), 1234);
        for (ea, eb) in a.enemies.iter().zip(&b.enemies) {
            assert_eq!(ea.pos, eb.pos);
        }
    }

    #[test]
    fn test_player_movement_respects_edges() {
        let tuning = Tuning::default();
        let mut player = Player::new(&tuning);
        let held = HeldDirections {
            up: true,
            left: true,
            ..Default::default()
        };
        player.apply_movement(held, 0.1, tuning.width, tuning.height);
        assert_eq!(player.center(), Vec2::new(300.0, 220.0));

        // Center already past the top edge: no further upward motion
        player.pos.y = -30.0;
        let before = player.pos.y;
        player.apply_movement(held, 0.1, tuning.width, tuning.height);
        assert_eq!(player.pos.y, before);
    }

    #[test]
    fn test_take_hit_saturates() {
        let mut player = Player::new(&Tuning::default());
        player.health = 1;
        assert_eq!(player.take_hit(), 0);
        assert_eq!(player.take_hit(), 0);
    }

    #[test]
    fn test_restart_resets_everything() {
        let mut state = GameState::new(Tuning::default(), 5);
        state.phase = GamePhase::Dead;
        state.player.health = 0;
        state.player.kills = 12;
        state.splatters.push(Splatter { pos: Vec2::ONE });
        state.level.level = 3;
        state.fire_cooldown = 0.2;

        state.restart();

        assert_eq!(state.phase, GamePhase::Active);
        assert_eq!(state.player.health, 3);
        assert_eq!(state.player.kills, 0);
        assert!(state.splatters.is_empty());
        assert!(state.bullets.is_empty());
        assert_eq!(state.enemies.len(), 4);
        assert_eq!(state.level.level, 1);
        assert_eq!(state.fire_cooldown, 0.0);
    }
}
