//! # World Module
//!
//! This module provides the `World` struct, the single source of truth for
//! the block map and the currently selected placement type. All player
//! actions mutate the world through its operation set; no other component
//! holds a mutable reference to either piece of state.
//!
//! ## Snapshot Semantics
//!
//! Every successful mutation installs a **new** map value rather than
//! editing the previous one in place. The map lives behind an `Arc`, so a
//! consumer holding the previous snapshot observes no change, and a
//! reactive rendering layer can detect edits with a single pointer
//! comparison (`Arc::ptr_eq`).
//!
//! ## Mutation Rules
//!
//! - Placement is rejected below the build floor and on occupied cells.
//! - Removal is rejected inside the protected ground layer and on empty
//!   cells.
//! - Rejected mutations are silent no-ops; "no visible effect" is the
//!   complete signal. They are logged at `debug!` for diagnostics only.

use std::collections::HashMap;
use std::sync::Arc;

use cgmath::Point3;
use log::debug;

use block::{Block, BlockType, BlockTypeSize};
use coords::BlockKey;

pub mod block;
pub mod coords;
pub mod generation;
pub mod rules;

/// The mapping from packed coordinate keys to block records.
pub type BlockMap = HashMap<BlockKey, Block>;

/// The authoritative in-memory block world.
///
/// Owns the block map and the process-wide selected placement type.
/// Reads hand out cheap shared snapshots; writes go through the mutation
/// operations below, which enforce the world rules.
pub struct World {
    /// The current block map snapshot. Replaced wholesale on every
    /// successful mutation.
    blocks: Arc<BlockMap>,
    /// The currently active placement material.
    selected_type: BlockType,
}

impl World {
    /// Creates a new, empty world with stone selected for placement.
    pub fn new() -> Self {
        World {
            blocks: Arc::new(BlockMap::new()),
            selected_type: BlockType::STONE,
        }
    }

    /// Discards the previous map entirely and installs `blocks`.
    ///
    /// Used by world generation and by test fixtures. No validation is
    /// performed; the caller is responsible for the world invariants.
    pub fn replace_all(&mut self, blocks: BlockMap) {
        self.blocks = Arc::new(blocks);
    }

    /// Returns a shared snapshot of the current block map.
    ///
    /// The snapshot is immutable and unaffected by later mutations; two
    /// snapshots compare equal under `Arc::ptr_eq` exactly when no
    /// mutation happened between them.
    pub fn snapshot(&self) -> Arc<BlockMap> {
        self.blocks.clone()
    }

    /// Returns the block at the given coordinates, if one exists.
    pub fn block_at(&self, position: Point3<i32>) -> Option<&Block> {
        self.blocks.get(&BlockKey::pack(position))
    }

    /// Whether a block exists at the given coordinates.
    pub fn contains(&self, position: Point3<i32>) -> bool {
        self.blocks.contains_key(&BlockKey::pack(position))
    }

    /// The number of blocks currently in the world.
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// Whether the world contains no blocks.
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Iterates over all current block records.
    ///
    /// This is the read-only enumeration the rendering layer draws from.
    pub fn iter_blocks(&self) -> impl Iterator<Item = &Block> {
        self.blocks.values()
    }

    /// Places a new block of `block_type` at `position`.
    ///
    /// No-op if the position is below the build floor or already occupied;
    /// placement never overwrites. On success the world gains one entry in
    /// a freshly installed map snapshot.
    pub fn place(&mut self, position: Point3<i32>, block_type: BlockType) {
        if !rules::is_above_build_floor(position.y) {
            debug!("place rejected below build floor: {:?}", position);
            return;
        }

        let key = BlockKey::pack(position);
        if self.blocks.contains_key(&key) {
            debug!("place rejected, cell occupied: {:?}", position);
            return;
        }

        let mut next = BlockMap::clone(&self.blocks);
        next.insert(key, Block::new(position, block_type));
        self.blocks = Arc::new(next);
    }

    /// Removes the block at `position`.
    ///
    /// No-op if the position is ground-protected or empty. On success the
    /// world loses one entry in a freshly installed map snapshot.
    pub fn remove(&mut self, position: Point3<i32>) {
        if rules::is_ground_protected(position) {
            debug!("remove rejected, ground protected: {:?}", position);
            return;
        }

        let key = BlockKey::pack(position);
        if !self.blocks.contains_key(&key) {
            return;
        }

        let mut next = BlockMap::clone(&self.blocks);
        next.remove(&key);
        self.blocks = Arc::new(next);
    }

    /// The currently selected placement type.
    pub fn selected_type(&self) -> BlockType {
        self.selected_type
    }

    /// Overwrites the selected placement type.
    ///
    /// The typed parameter cannot carry an out-of-range value; integer
    /// inputs from the hotkey path go through [`World::select_type_by_index`]
    /// instead.
    pub fn set_selected_type(&mut self, block_type: BlockType) {
        self.selected_type = block_type;
    }

    /// Selects the placement type by hotkey slot index (0-based).
    ///
    /// Indices outside the closed block-type set are rejected and leave
    /// the selection unchanged.
    pub fn select_type_by_index(&mut self, index: BlockTypeSize) {
        match BlockType::from_int(index) {
            Some(block_type) => self.selected_type = block_type,
            None => debug!("type selection rejected, no slot {}", index),
        }
    }
}

impl Default for World {
    fn default() -> Self {
        World::new()
    }
}
