//! # Block Module
//!
//! This module defines the block record and the closed set of block types
//! available in the sandbox. Block types are purely descriptive: each one
//! carries a display label and a render color, and metal additionally
//! reports a reflectivity factor for the rendering layer.

use cgmath::Point3;
use num_derive::FromPrimitive;

/// The underlying integer type used to represent block types at the
/// input boundary (hotkey slots, HUD indices).
pub type BlockTypeSize = u8;

/// Number of selectable block types.
pub const BLOCK_TYPE_COUNT: BlockTypeSize = 5;

/// Enumerates all block types in the sandbox.
///
/// This is a closed set; the discriminants double as hotkey slot indices
/// (slot 1 selects `STONE`, slot 5 selects `METAL`). The `FromPrimitive`
/// derive provides the integer-to-type conversion used by the hotkey path.
#[allow(non_camel_case_types)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, FromPrimitive)]
pub enum BlockType {
    /// Plain gray stone, the default placement material.
    STONE,

    /// Bright white snow.
    SNOW,

    /// Brown wood.
    WOOD,

    /// Near-black volcanic glass.
    OBSIDIAN,

    /// Reflective silver metal.
    METAL,
}

impl BlockType {
    /// Converts a `BlockTypeSize` to a `BlockType`.
    ///
    /// # Arguments
    /// * `btype` - The block type as a `BlockTypeSize`
    ///
    /// # Returns
    /// The corresponding `BlockType`, or `None` if the value is outside
    /// the closed set.
    pub fn from_int(btype: BlockTypeSize) -> Option<Self> {
        num::FromPrimitive::from_u8(btype)
    }

    /// Returns all block types in hotkey-slot order.
    pub fn all() -> [BlockType; BLOCK_TYPE_COUNT as usize] {
        [
            BlockType::STONE,
            BlockType::SNOW,
            BlockType::WOOD,
            BlockType::OBSIDIAN,
            BlockType::METAL,
        ]
    }

    /// The display label shown by the HUD for this type.
    pub fn label(&self) -> &'static str {
        match self {
            BlockType::STONE => "Stone",
            BlockType::SNOW => "Snow",
            BlockType::WOOD => "Wood",
            BlockType::OBSIDIAN => "Obsidian",
            BlockType::METAL => "Metal",
        }
    }

    /// The render color for this type as linear RGB.
    pub fn color(&self) -> [f32; 3] {
        match self {
            BlockType::STONE => [0.55, 0.55, 0.55],
            BlockType::SNOW => [0.95, 0.95, 0.98],
            BlockType::WOOD => [0.55, 0.37, 0.2],
            BlockType::OBSIDIAN => [0.09, 0.05, 0.14],
            BlockType::METAL => [0.75, 0.76, 0.78],
        }
    }

    /// The reflectivity factor the rendering layer applies to this type.
    ///
    /// Metal is the only type with a non-zero value; this is the single
    /// behavioral distinction between types, and it is a rendering
    /// concern only.
    pub fn reflectivity(&self) -> f32 {
        match self {
            BlockType::METAL => 0.8,
            _ => 0.0,
        }
    }
}

/// A single block in the world.
///
/// A block's identity is its integer coordinate triple; the store enforces
/// one block per coordinate. Blocks are never mutated in place: the type
/// is fixed once placed, and every change to the world is an insert or a
/// delete of a whole record.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Block {
    /// The block's integer grid coordinates.
    pub position: Point3<i32>,
    /// The block's material type, fixed at creation.
    pub block_type: BlockType,
}

impl Block {
    /// Creates a new block of the specified type at the given coordinates.
    pub fn new(position: Point3<i32>, block_type: BlockType) -> Self {
        Block {
            position,
            block_type,
        }
    }
}
