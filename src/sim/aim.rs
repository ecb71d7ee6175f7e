//! Aiming and firing
//!
//! Shots are not fired straight at the pointer. The direction is the tangent
//! from the firing point to a small circle around the pointer, which makes
//! the shot land slightly beside the crosshair:
//!
//! ```text
//! dist = origin - pointer
//! a    = acos(r / |dist|)        r = aim circle radius
//! b    = atan2(dist.y, dist.x)
//! t    = b - a
//! dir  = (sin t, -cos t)
//! ```
//!
//! With screen coordinates (y down) this points from the origin toward the
//! pointer once the pointer is more than a few radii away.

use glam::Vec2;

use super::state::{Bullet, GameEvent, GameState};

/// Unit direction of a shot from `origin` toward `pointer`.
///
/// When the pointer sits inside the aim circle the acos argument is
/// clamped, so the result is always finite.
pub fn tangent_direction(origin: Vec2, pointer: Vec2, aim_circle_radius: f32) -> Vec2 {
    let dist = origin - pointer;
    let len = dist.length();
    let ratio = if len > 0.0 {
        (aim_circle_radius / len).min(1.0)
    } else {
        1.0
    };

    let a = ratio.acos();
    let b = dist.y.atan2(dist.x);
    let t = b - a;
    Vec2::new(t.sin(), -t.cos())
}

/// Per-tick velocity of a shot fired from `origin` toward `pointer`
pub fn fire_velocity(origin: Vec2, pointer: Vec2, aim_circle_radius: f32, speed: f32) -> Vec2 {
    tangent_direction(origin, pointer, aim_circle_radius) * speed
}

/// Fire a bullet from the player's center toward the current aim point.
///
/// Ignored while the fire cooldown runs or the player is dead. Returns the
/// new bullet's id.
pub fn try_fire(state: &mut GameState) -> Option<u32> {
    if state.player.dead || state.fire_cooldown > 0.0 {
        return None;
    }

    let origin = state.player.center();
    let vel = fire_velocity(
        origin,
        state.player.aim,
        state.tuning.aim_circle_radius,
        state.tuning.bullet_speed,
    );

    let id = state.next_entity_id();
    state.bullets.push(Bullet {
        id,
        pos: origin,
        vel,
        radius: state.tuning.bullet_radius,
    });
    state.fire_cooldown = state.tuning.fire_cooldown;
    state.push_event(GameEvent::Fired { bullet_id: id });
    Some(id)
}

/// Run the fire cooldown for `dt` seconds
pub fn cool_down(state: &mut GameState, dt: f32) {
    if state.fire_cooldown > 0.0 {
        state.fire_cooldown = (state.fire_cooldown - dt).max(0.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Tuning;

    #[test]
    fn test_pointer_above() {
        let origin = Vec2::new(320.0, 240.0);
        let dir = tangent_direction(origin, Vec2::new(320.0, 140.0), 2.0);
        // Mostly up, nudged right by the tangent offset
        assert!(dir.y < -0.99);
        assert!((dir.x - 0.02).abs() < 1e-4);
        assert!((dir.length() - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_pointer_right() {
        let origin = Vec2::new(320.0, 240.0);
        let dir = tangent_direction(origin, Vec2::new(420.0, 240.0), 2.0);
        assert!(dir.x > 0.99);
        assert!((dir.y - 0.02).abs() < 1e-4);
    }

    #[test]
    fn test_pointer_on_origin_is_finite() {
        let origin = Vec2::new(320.0, 240.0);
        let dir = tangent_direction(origin, origin, 2.0);
        assert!(dir.is_finite());
        assert!((dir - Vec2::new(0.0, -1.0)).length() < 1e-6);

        let dir = tangent_direction(origin, origin + Vec2::new(1.0, 0.0), 2.0);
        assert!(dir.is_finite());
    }

    #[test]
    fn test_fire_respects_cooldown() {
        let mut state = GameState::new(Tuning::default(), 3);
        state.player.aim = Vec2::new(100.0, 100.0);

        assert!(try_fire(&mut state).is_some());
        assert!(try_fire(&mut state).is_none());
        assert_eq!(state.bullets.len(), 1);
        assert_eq!(state.bullets[0].pos, state.player.center());
        assert!((state.bullets[0].vel.length() - 15.0).abs() < 1e-4);

        cool_down(&mut state, 0.2);
        assert!(try_fire(&mut state).is_none());
        cool_down(&mut state, 0.2);
        assert_eq!(state.fire_cooldown, 0.0);
        assert!(try_fire(&mut state).is_some());
        assert_eq!(state.bullets.len(), 2);
    }

    #[test]
    fn test_zero_cooldown_fires_every_edge() {
        let tuning = Tuning {
            fire_cooldown: 0.0,
            ..Tuning::default()
        };
        let mut state = GameState::new(tuning, 3);
        for _ in 0..5 {
            assert!(try_fire(&mut state).is_some());
        }
        assert_eq!(state.bullets.len(), 5);
    }

    #[test]
    fn test_dead_player_cannot_fire() {
        let mut state = GameState::new(Tuning::default(), 3);
        state.player.dead = true;
        assert!(try_fire(&mut state).is_none());
    }
}
