//! Projectiles fired from the player's muzzle
//!
//! Thin layer over [`LifetimePool`]: every shot lives for a fixed number of
//! seconds and flies in a straight line. Saturation drops new shots.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use super::pool::LifetimePool;
use crate::consts::*;

/// Payload of one projectile slot
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Projectile {
    pub position: Vec3,
    /// Velocity; magnitude is the muzzle speed
    pub direction: Vec3,
}

impl Projectile {
    /// Move along `direction` for `dt` seconds
    #[inline]
    pub fn advance(&mut self, dt: f32) {
        self.position += self.direction * dt;
    }
}

/// A live projectile as seen from outside the pool
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LiveProjectile {
    pub slot: usize,
    pub remaining_lifetime: f32,
    pub position: Vec3,
    pub direction: Vec3,
}

/// Box extents drawn for every projectile
pub const PROJECTILE_SIZE: Vec3 = Vec3::new(PROJECTILE_WIDTH, PROJECTILE_HEIGHT, PROJECTILE_LENGTH);

/// All projectiles in flight
#[derive(Debug, Clone)]
pub struct ProjectileSystem<const N: usize = PROJECTILE_CAPACITY> {
    pool: LifetimePool<Projectile, N>,
    /// Set while spawns are being dropped, so saturation is logged once
    saturated: bool,
}

impl<const N: usize> Default for ProjectileSystem<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> ProjectileSystem<N> {
    pub fn new() -> Self {
        Self {
            pool: LifetimePool::new(),
            saturated: false,
        }
    }

    /// Fire a projectile from `origin` with `velocity`.
    ///
    /// Silently does nothing when every slot is in flight.
    pub fn spawn(&mut self, origin: Vec3, velocity: Vec3) -> Option<usize> {
        let projectile = Projectile {
            position: origin,
            direction: velocity,
        };
        let slot = self.pool.insert(PROJECTILE_LIFETIME, projectile);
        match slot {
            Some(_) => self.saturated = false,
            None if !self.saturated => {
                self.saturated = true;
                log::debug!("Projectile pool saturated ({} in flight), dropping shots", N);
            }
            None => {}
        }
        slot
    }

    /// Age and move every projectile in flight
    pub fn update(&mut self, dt: f32) {
        self.pool.tick_with(dt, |projectile| projectile.advance(dt));
    }

    /// Issue one axis-aligned box per live projectile: `draw_box(center, size)`
    pub fn render(&self, mut draw_box: impl FnMut(Vec3, Vec3)) {
        self.pool
            .for_each_occupied(|_, slot| draw_box(slot.value.position, PROJECTILE_SIZE));
    }

    /// Live projectiles in slot order
    pub fn live(&self) -> impl Iterator<Item = LiveProjectile> + '_ {
        self.pool.iter().map(|(slot, entry)| LiveProjectile {
            slot,
            remaining_lifetime: entry.lifetime,
            position: entry.value.position,
            direction: entry.value.direction,
        })
    }

    /// Live projectile in `slot`, if any
    pub fn get(&self, slot: usize) -> Option<LiveProjectile> {
        self.pool.get(slot).map(|entry| LiveProjectile {
            slot,
            remaining_lifetime: entry.lifetime,
            position: entry.value.position,
            direction: entry.value.direction,
        })
    }

    /// Number of projectiles in flight
    pub fn len(&self) -> usize {
        self.pool.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pool.is_empty()
    }

    pub const fn capacity(&self) -> usize {
        N
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn approx_eq(a: Vec3, b: Vec3) -> bool {
        (a - b).length() < 1e-4
    }

    #[test]
    fn test_spawn_beyond_capacity_is_ignored() {
        let mut projectiles: ProjectileSystem<2> = ProjectileSystem::new();
        assert_eq!(projectiles.spawn(Vec3::ZERO, Vec3::X), Some(0));
        assert_eq!(projectiles.spawn(Vec3::ONE, Vec3::Y), Some(1));
        assert_eq!(projectiles.spawn(Vec3::NEG_ONE, Vec3::Z), None);

        assert_eq!(projectiles.len(), 2);
        let first = projectiles.get(0).unwrap();
        assert_eq!(first.position, Vec3::ZERO);
        assert_eq!(first.direction, Vec3::X);
        assert_eq!(first.remaining_lifetime, PROJECTILE_LIFETIME);
        assert_eq!(projectiles.get(1).unwrap().position, Vec3::ONE);
    }

    #[test]
    fn test_update_moves_linearly() {
        let mut projectiles: ProjectileSystem<4> = ProjectileSystem::new();
        projectiles.spawn(Vec3::ZERO, Vec3::X);
        projectiles.update(2.0);

        let shot = projectiles.get(0).unwrap();
        assert!(approx_eq(shot.position, Vec3::new(2.0, 0.0, 0.0)));
        assert!((shot.remaining_lifetime - (PROJECTILE_LIFETIME - 2.0)).abs() < 1e-6);
    }

    #[test]
    fn test_full_lifetime_expires_and_is_not_drawn() {
        let mut projectiles: ProjectileSystem<4> = ProjectileSystem::new();
        projectiles.spawn(Vec3::ZERO, Vec3::Z);
        projectiles.update(PROJECTILE_LIFETIME);

        assert!(projectiles.is_empty());
        let mut drawn = 0;
        projectiles.render(|_, _| drawn += 1);
        assert_eq!(drawn, 0);
    }

    #[test]
    fn test_huge_step_right_after_spawn_expires() {
        let mut projectiles: ProjectileSystem<4> = ProjectileSystem::new();
        projectiles.spawn(Vec3::ZERO, Vec3::X);
        projectiles.update(100.0);

        assert_eq!(projectiles.live().count(), 0);
        // The freed slot is handed out again
        assert_eq!(projectiles.spawn(Vec3::ONE, Vec3::X), Some(0));
    }

    #[test]
    fn test_render_draws_axis_aligned_boxes_at_positions() {
        let mut projectiles: ProjectileSystem<8> = ProjectileSystem::new();
        projectiles.spawn(Vec3::new(1.0, 2.0, 3.0), Vec3::X);
        projectiles.spawn(Vec3::new(-1.0, 0.0, 0.0), Vec3::NEG_Z);

        let mut boxes = Vec::new();
        projectiles.render(|center, size| boxes.push((center, size)));
        assert_eq!(
            boxes,
            vec![
                (Vec3::new(1.0, 2.0, 3.0), PROJECTILE_SIZE),
                (Vec3::new(-1.0, 0.0, 0.0), PROJECTILE_SIZE),
            ]
        );
    }

    #[test]
    fn test_default_capacity() {
        let projectiles: ProjectileSystem = ProjectileSystem::new();
        assert_eq!(projectiles.capacity(), PROJECTILE_CAPACITY);
        assert!(projectiles.is_empty());
    }

    proptest! {
        #[test]
        fn prop_position_update_is_linear(
            x in -10.0f32..10.0, y in -10.0f32..10.0, z in -10.0f32..10.0,
            dx in -5.0f32..5.0, dy in -5.0f32..5.0, dz in -5.0f32..5.0,
            dt in 0.0f32..1.0,
        ) {
            let mut projectiles: ProjectileSystem<1> = ProjectileSystem::new();
            let origin = Vec3::new(x, y, z);
            let direction = Vec3::new(dx, dy, dz);
            projectiles.spawn(origin, direction);
            projectiles.update(dt);

            let shot = projectiles.get(0).unwrap();
            prop_assert!(approx_eq(shot.position, origin + direction * dt));
            prop_assert_eq!(shot.direction, direction);
        }

        #[test]
        fn prop_occupancy_never_exceeds_capacity(spawns in 0usize..64) {
            let mut projectiles: ProjectileSystem<32> = ProjectileSystem::new();
            let accepted = (0..spawns)
                .filter(|&i| projectiles.spawn(Vec3::splat(i as f32), Vec3::X).is_some())
                .count();
            prop_assert_eq!(accepted, spawns.min(32));
            prop_assert_eq!(projectiles.len(), accepted);
        }
    }
}
