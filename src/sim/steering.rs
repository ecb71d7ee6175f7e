//! Pure seek steering
//!
//! Each tick the pursuer points straight at the target's current position
//! and moves at constant speed. No prediction, no avoidance.

use glam::Vec2;

/// Velocity (pixels/s) that carries `from` toward `target`.
///
/// The direction is normalized and scaled by `speed / seek_factor`.
/// Coincident points yield zero so the pursuer holds position.
pub fn seek_velocity(from: Vec2, target: Vec2, speed: f32, seek_factor: f32) -> Vec2 {
    let d = target - from;
    let len = d.length();
    if len <= f32::EPSILON {
        return Vec2::ZERO;
    }
    d * speed / (len * seek_factor)
}

/// Move `pos` toward `target` for `dt` seconds.
///
/// `offset` maps `pos` to the point that should converge on the target
/// (for sprites, the half-size that turns a top-left into a center).
pub fn seek(pos: &mut Vec2, offset: Vec2, target: Vec2, speed: f32, seek_factor: f32, dt: f32) {
    let vel = seek_velocity(*pos + offset, target, speed, seek_factor);
    *pos += vel * dt;
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_seek_velocity_magnitude() {
        let v = seek_velocity(Vec2::ZERO, Vec2::new(300.0, 400.0), 0.5, 0.02);
        assert!((v.length() - 25.0).abs() < 1e-4);
        assert!((v.normalize() - Vec2::new(0.6, 0.8)).length() < 1e-5);
    }

    #[test]
    fn test_coincident_holds_position() {
        let mut pos = Vec2::new(10.0, 10.0);
        seek(&mut pos, Vec2::ZERO, Vec2::new(10.0, 10.0), 0.5, 0.02, 1.0 / 60.0);
        assert_eq!(pos, Vec2::new(10.0, 10.0));
    }

    #[test]
    fn test_offset_converges_center() {
        let mut pos = Vec2::new(0.0, 85.0);
        let offset = Vec2::splat(15.0);
        // Center (15, 100) heading for (15, 0): straight up
        seek(&mut pos, offset, Vec2::new(15.0, 0.0), 0.5, 0.02, 1.0);
        assert!((pos - Vec2::new(0.0, 60.0)).length() < 1e-4);
    }

    proptest! {
        #[test]
        fn seek_closes_distance(
            ex in 0.0f32..640.0,
            ey in 0.0f32..480.0,
            tx in 0.0f32..640.0,
            ty in 0.0f32..480.0,
            dt in (1.0f32 / 60.0)..(1.0f32 / 12.0),
        ) {
            let target = Vec2::new(tx, ty);
            let mut pos = Vec2::new(ex, ey);
            let step = 25.0 * dt;
            prop_assume!(pos.distance(target) > step);

            for _ in 0..10_000 {
                let before = pos.distance(target);
                if before <= step {
                    break;
                }
                seek(&mut pos, Vec2::ZERO, target, 0.5, 0.02, dt);
                let after = pos.distance(target);
                prop_assert!(after < before);
                prop_assert!(pos.is_finite());
            }
        }
    }
}
