//! # World Rules Module
//!
//! This module defines the pure predicates the store consults before
//! mutating the world: ground protection (a deletion guard) and the build
//! floor (a creation guard). The two constants currently coincide at 0 but
//! are kept separate so either rule can move without silently dragging the
//! other along.

use cgmath::Point3;

/// The y index of the bottom-most generated layer. Blocks at or below this
/// level are immutable once generated.
pub const GROUND_Y: i32 = 0;

/// The minimum y coordinate at which a new block may be placed.
pub const MIN_BUILD_Y: i32 = 0;

/// Whether the given coordinate lies in the protected ground layer.
///
/// Used exclusively to gate removal: the ground layer is append-only once
/// generated and no removal path may delete it.
pub fn is_ground_protected(position: Point3<i32>) -> bool {
    position.y <= GROUND_Y
}

/// Whether the given y coordinate is at or above the build floor.
///
/// Used exclusively to gate placement.
pub fn is_above_build_floor(y: i32) -> bool {
    y >= MIN_BUILD_Y
}
