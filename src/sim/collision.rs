//! Circle collision detection and pair resolution
//!
//! Every collider is a circle. Removal is two-phase: the pair scan only
//! marks entities, and a single compaction pass per collection drops them
//! afterward, so no entity is skipped by an index shifting under the scan.

use glam::Vec2;

use super::state::{Bullet, Enemy};

/// Circle-sum overlap test (touching counts as a hit)
#[inline]
pub fn circles_intersect(p1: Vec2, r1: f32, p2: Vec2, r2: f32) -> bool {
    let reach = r1 + r2;
    p1.distance_squared(p2) <= reach * reach
}

/// A bullet/enemy pair that collided this tick (indices into the scanned slices)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BulletHit {
    pub bullet: usize,
    pub enemy: usize,
}

/// Pair each bullet with the first live enemy it overlaps.
///
/// A bullet stops at its first hit, and an enemy already claimed by an
/// earlier bullet is no longer a candidate, so each entity takes part in at
/// most one pair.
pub fn bullet_enemy_hits(bullets: &[Bullet], enemies: &[Enemy]) -> Vec<BulletHit> {
    let mut claimed = vec![false; enemies.len()];
    let mut hits = Vec::new();

    for (bi, bullet) in bullets.iter().enumerate() {
        let found = enemies.iter().enumerate().find(|(ei, enemy)| {
            !claimed[*ei]
                && circles_intersect(bullet.pos, bullet.radius, enemy.center(), enemy.radius)
        });
        if let Some((ei, _)) = found {
            claimed[ei] = true;
            hits.push(BulletHit { bullet: bi, enemy: ei });
        }
    }

    hits
}

/// Indices of enemies overlapping a circle (the player)
pub fn enemies_touching(center: Vec2, radius: f32, enemies: &[Enemy]) -> Vec<usize> {
    enemies
        .iter()
        .enumerate()
        .filter(|(_, e)| circles_intersect(center, radius, e.center(), e.radius))
        .map(|(i, _)| i)
        .collect()
}

/// Drop every item whose index is marked, preserving the order of the rest
pub fn compact<T>(items: &mut Vec<T>, marked: &[bool]) {
    debug_assert_eq!(items.len(), marked.len());
    let mut index = 0;
    items.retain(|_| {
        let keep = !marked[index];
        index += 1;
        keep
    });
}
