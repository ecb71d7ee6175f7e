//! Per-frame simulation tick
//!
//! Advances the whole session by one display frame in a fixed order and
//! returns the snapshot for the renderer. The tick cannot fail: bad deltas
//! are clamped and degenerate geometry is guarded where it occurs.

use glam::Vec2;

use super::aim;
use super::clock::clamp_dt;
use super::collision::{bullet_enemy_hits, compact, enemies_touching};
use super::input::{Command, InputState};
use super::snapshot::{Snapshot, build_snapshot};
use super::state::{GameEvent, GamePhase, GameState, Splatter};
use super::steering::seek;
use crate::in_bounds;

/// Advance the game state by one frame.
///
/// Order:
/// 1. pause/resume commands; a paused session stops here
/// 2. level progression and the level banner
/// 3. dead: only a restart is accepted
/// 4. active: movement, spawning, fire cooldown; then fire commands
/// 5. bullets move and resolve against enemies
/// 6. enemies seek the player and resolve against it
/// 7. snapshot
pub fn tick(state: &mut GameState, input: &InputState, commands: &[Command], dt: f32) -> Snapshot {
    let dt = clamp_dt(dt);
    state.events.clear();
    state.player.aim = input.aim;

    // Pause overlay
    for command in commands {
        match command {
            Command::Pause if !state.paused => {
                state.paused = true;
                state.push_event(GameEvent::Paused);
                log::info!("Paused");
            }
            Command::Resume if state.paused => {
                state.paused = false;
                state.push_event(GameEvent::Resumed);
                log::info!("Resumed");
            }
            _ => {}
        }
    }
    if state.paused {
        return finish(state);
    }

    state.time_ticks += 1;

    // Level progression
    if let Some(level) = state.level.progress(state.player.kills, &state.tuning) {
        state.push_event(GameEvent::LevelUp { level });
    }
    if state.phase != GamePhase::Intro {
        if let Some(level) = state.level.announce(state.tuning.level_banner_secs) {
            state.push_event(GameEvent::LevelAnnounced { level });
        }
    }

    if state.phase == GamePhase::Dead {
        if commands.contains(&Command::Restart) {
            state.restart();
            state.push_event(GameEvent::Restarted);
            log::info!("Restarted (death #{})", state.deaths);
        }
        return finish(state);
    }

    if state.phase == GamePhase::Active {
        let (width, height) = (state.tuning.width, state.tuning.height);
        state.player.apply_movement(input.held, dt, width, height);

        let cadence = state.level.cadence;
        if state.spawner.advance(dt, cadence) {
            let enemy_id = state.spawn_enemy_random();
            state.push_event(GameEvent::EnemySpawned { enemy_id });
        }

        aim::cool_down(state, dt);
        state.level.tick_banner(dt);
    }

    for _ in commands.iter().filter(|c| **c == Command::Fire) {
        if state.phase == GamePhase::Intro {
            state.phase = GamePhase::Active;
            state.push_event(GameEvent::GameStarted);
            log::info!("Game started");
        }
        aim::try_fire(state);
    }

    if state.phase != GamePhase::Active {
        return finish(state);
    }

    update_bullets(state);
    update_enemies(state, dt);

    finish(state)
}

/// Move bullets, resolve bullet/enemy hits, and drop bullets that left the
/// play area
fn update_bullets(state: &mut GameState) {
    for bullet in &mut state.bullets {
        bullet.advance();
    }

    let hits = bullet_enemy_hits(&state.bullets, &state.enemies);
    let mut dead_bullets = vec![false; state.bullets.len()];
    let mut dead_enemies = vec![false; state.enemies.len()];

    for hit in &hits {
        dead_bullets[hit.bullet] = true;
        dead_enemies[hit.enemy] = true;

        let enemy = &state.enemies[hit.enemy];
        let (enemy_id, at) = (enemy.id, enemy.pos);
        state.splatters.push(Splatter { pos: at });
        state.player.kills += 1;
        state.events.push(GameEvent::EnemyKilled { enemy_id, at });
        log::debug!("Enemy {} killed (kills: {})", enemy_id, state.player.kills);
    }

    let (width, height) = (state.tuning.width, state.tuning.height);
    for (marked, bullet) in dead_bullets.iter_mut().zip(&state.bullets) {
        if !in_bounds(bullet.pos, width, height) {
            *marked = true;
        }
    }

    compact(&mut state.bullets, &dead_bullets);
    compact(&mut state.enemies, &dead_enemies);
}

/// Steer enemies at the player and resolve contacts
fn update_enemies(state: &mut GameState, dt: f32) {
    let target = state.player.center();
    let seek_factor = state.tuning.seek_factor;
    for enemy in &mut state.enemies {
        let half = Vec2::splat(enemy.size / 2.0);
        seek(&mut enemy.pos, half, target, enemy.speed, seek_factor, dt);
    }

    let touching = enemies_touching(target, state.player.radius, &state.enemies);
    if touching.is_empty() {
        return;
    }

    let mut dead_enemies = vec![false; state.enemies.len()];
    for index in touching {
        dead_enemies[index] = true;
        let enemy_id = state.enemies[index].id;
        let health = state.player.take_hit();
        state.events.push(GameEvent::PlayerHit { enemy_id, health });
        log::debug!("Player hit by enemy {} (health: {})", enemy_id, health);
    }
    compact(&mut state.enemies, &dead_enemies);

    if state.player.health == 0 {
        state.player.dead = true;
        state.phase = GamePhase::Dead;
        state.deaths += 1;
        state.events.push(GameEvent::PlayerDied {
            kills: state.player.kills,
            level: state.level.level,
        });
        log::info!(
            "Player died at level {} with {} kills",
            state.level.level,
            state.player.kills
        );
    }
}

fn finish(state: &mut GameState) -> Snapshot {
    let events = std::mem::take(&mut state.events);
    build_snapshot(state, events)
}
