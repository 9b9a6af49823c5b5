//! # Area Effects Module
//!
//! This module implements the shout: a single-shot removal of every
//! eligible block within a spherical region projected in front of the
//! player. The enumeration is a brute-force sphere-in-cube walk over the
//! lattice, which is correct and simple at the small design radius; cost
//! grows cubically with the radius, so it is not meant for large regions.

use cgmath::{Point3, Vector3};
use log::debug;

use crate::world::World;

/// Radius of the spherical region cleared by a shout, in blocks.
pub const SHOUT_RADIUS: f32 = 2.0;

/// Distance from the origin to the center of the cleared region, along
/// the facing direction.
pub const SHOUT_DISTANCE: f32 = 5.0;

/// Slack added to the radius check to absorb floating-point rounding.
const DISTANCE_EPSILON: f32 = 0.01;

/// Clears a sphere of blocks in front of the given origin.
///
/// The center is `origin + facing * SHOUT_DISTANCE`. Every lattice point
/// inside the inclusive bounding box of the sphere whose Euclidean
/// distance to the center is within `SHOUT_RADIUS + epsilon` is removed
/// through `World::remove`; ground-protected cells are silently skipped by
/// the store's own guard, and the shout performs no additional filtering.
///
/// # Arguments
/// * `world` - The world store to mutate
/// * `origin` - World-space origin of the shout (the camera position)
/// * `facing` - Facing direction (the camera's forward vector)
pub fn shout(world: &mut World, origin: Point3<f32>, facing: Vector3<f32>) {
    let center = origin + facing * SHOUT_DISTANCE;

    let lower = |component: f32| (component - SHOUT_RADIUS).floor() as i32;
    let upper = |component: f32| (component + SHOUT_RADIUS).ceil() as i32;

    let before = world.len();
    for x in lower(center.x)..=upper(center.x) {
        for y in lower(center.y)..=upper(center.y) {
            for z in lower(center.z)..=upper(center.z) {
                let dx = x as f32 - center.x;
                let dy = y as f32 - center.y;
                let dz = z as f32 - center.z;
                let distance = (dx * dx + dy * dy + dz * dz).sqrt();
                if distance <= SHOUT_RADIUS + DISTANCE_EPSILON {
                    world.remove(Point3::new(x, y, z));
                }
            }
        }
    }

    debug!(
        "shout at {:?} cleared {} blocks",
        center,
        before - world.len()
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::block::{Block, BlockType};
    use crate::world::coords::BlockKey;
    use crate::world::BlockMap;

    fn filled_world(positions: &[Point3<i32>]) -> World {
        let mut map = BlockMap::new();
        for &position in positions {
            map.insert(
                BlockKey::pack(position),
                Block::new(position, BlockType::STONE),
            );
        }
        let mut world = World::new();
        world.replace_all(map);
        world
    }

    #[test]
    fn shout_clears_blocks_within_the_sphere() {
        let center = Point3::new(0, 5, 0);
        let mut world = filled_world(&[
            center,
            Point3::new(1, 5, 0),
            Point3::new(0, 5, 2),
            Point3::new(0, 3, 0),
        ]);

        // Facing straight down from above so the sphere centers on (0,5,0).
        shout(
            &mut world,
            Point3::new(0.0, 10.0, 0.0),
            Vector3::new(0.0, -1.0, 0.0),
        );

        assert!(world.is_empty());
    }

    #[test]
    fn shout_leaves_blocks_outside_the_radius() {
        let mut world = filled_world(&[Point3::new(0, 5, 0), Point3::new(0, 5, 4)]);

        shout(
            &mut world,
            Point3::new(0.0, 10.0, 0.0),
            Vector3::new(0.0, -1.0, 0.0),
        );

        assert!(!world.contains(Point3::new(0, 5, 0)));
        assert!(world.contains(Point3::new(0, 5, 4)));
    }

    #[test]
    fn shout_never_clears_the_ground_layer() {
        // Sphere centered at y = 1 overlaps the ground layer at y <= 0.
        let mut world = filled_world(&[
            Point3::new(0, 0, 0),
            Point3::new(1, 0, 0),
            Point3::new(0, 1, 0),
            Point3::new(0, 2, 0),
        ]);

        shout(
            &mut world,
            Point3::new(0.0, 6.0, 0.0),
            Vector3::new(0.0, -1.0, 0.0),
        );

        assert!(world.contains(Point3::new(0, 0, 0)));
        assert!(world.contains(Point3::new(1, 0, 0)));
        assert!(!world.contains(Point3::new(0, 1, 0)));
        assert!(!world.contains(Point3::new(0, 2, 0)));
    }
}
