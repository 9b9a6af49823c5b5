//! # World Generation Module
//!
//! This module produces the initial block map from a deterministic seeded
//! noise function over a fixed radius. Terrain is a Perlin heightmap: a
//! full stone/snow ground layer at `GROUND_Y`, short columns above it, and
//! sparse wood/metal surface features scattered by a seeded RNG.
//!
//! Generation only builds the map; the caller installs it wholesale via
//! `World::replace_all`. The output satisfies every world invariant: no
//! block below `GROUND_Y`, one block per coordinate, and every key derived
//! from its block's own coordinates.

use cgmath::Point3;
use log::info;
use noise::{NoiseFn, Perlin};

use super::block::{Block, BlockType};
use super::coords::BlockKey;
use super::rules::GROUND_Y;
use super::BlockMap;

/// Half-width of the generated square of terrain, in blocks.
pub const WORLD_RADIUS: i32 = 16;

/// Scaling factor applied to world coordinates when sampling Perlin noise.
const HEIGHT_NOISE_SCALE: f64 = 0.07;

/// Tallest column of terrain blocks generated above the ground layer.
const MAX_COLUMN_HEIGHT: f64 = 4.0;

/// Noise value above which terrain is capped with snow instead of stone.
const SNOW_THRESHOLD: f64 = 0.35;

/// Probability that a surface cell sprouts a decorative feature block.
const FEATURE_CHANCE: f32 = 0.02;

/// Generates the initial block map for the given seed.
///
/// The same seed always produces the same map.
///
/// # Arguments
/// * `seed` - Seed for both the height noise and the feature scatter
///
/// # Returns
/// A complete `BlockMap` ready to be installed via `World::replace_all`.
pub fn generate(seed: u32) -> BlockMap {
    let perlin = Perlin::new(seed);
    let mut rng = fastrand::Rng::with_seed(seed as u64);
    let mut blocks = BlockMap::new();

    for x in -WORLD_RADIUS..=WORLD_RADIUS {
        for z in -WORLD_RADIUS..=WORLD_RADIUS {
            let sample = perlin.get([
                x as f64 * HEIGHT_NOISE_SCALE,
                z as f64 * HEIGHT_NOISE_SCALE,
            ]);

            // Map the [-1, 1] sample onto [0, MAX_COLUMN_HEIGHT].
            let height = ((sample + 1.0) * 0.5 * MAX_COLUMN_HEIGHT) as i32;
            let surface_type = if sample > SNOW_THRESHOLD {
                BlockType::SNOW
            } else {
                BlockType::STONE
            };

            insert(&mut blocks, Point3::new(x, GROUND_Y, z), BlockType::STONE);
            for y in (GROUND_Y + 1)..=(GROUND_Y + height) {
                insert(&mut blocks, Point3::new(x, y, z), surface_type);
            }

            if rng.f32() < FEATURE_CHANCE {
                let feature = if rng.bool() {
                    BlockType::WOOD
                } else {
                    BlockType::METAL
                };
                insert(&mut blocks, Point3::new(x, GROUND_Y + height + 1, z), feature);
            }
        }
    }

    info!(
        "generated {} blocks over radius {} (seed {})",
        blocks.len(),
        WORLD_RADIUS,
        seed
    );
    blocks
}

fn insert(blocks: &mut BlockMap, position: Point3<i32>, block_type: BlockType) {
    blocks.insert(BlockKey::pack(position), Block::new(position, block_type));
}
