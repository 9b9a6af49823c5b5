//! # Coordinate Key Module
//!
//! This module provides the packed integer key the world map is indexed
//! by. The encoding is an explicit, documented, collision-free function
//! from three bounded integer coordinates to a single 64-bit value, chosen
//! over a formatted string to avoid format edge cases and per-lookup
//! allocation.

use cgmath::Point3;

/// Bits allocated to each axis within the packed key.
const AXIS_BITS: u32 = 21;

/// Per-axis bit mask for the packed key.
const AXIS_MASK: u64 = (1 << AXIS_BITS) - 1;

/// The smallest coordinate value representable by a [`BlockKey`].
pub const MIN_COORD: i32 = -(1 << (AXIS_BITS - 1));

/// The largest coordinate value representable by a [`BlockKey`].
pub const MAX_COORD: i32 = (1 << (AXIS_BITS - 1)) - 1;

/// A packed 64-bit key uniquely identifying one grid coordinate.
///
/// Each axis occupies 21 bits in two's complement, laid out as
/// `x << 42 | y << 21 | z`. The encoding is lossless and collision-free
/// for coordinates within `[MIN_COORD, MAX_COORD]` on every axis, a range
/// that comfortably covers the generated world and any reachable build.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct BlockKey(u64);

impl BlockKey {
    /// Packs integer grid coordinates into a key.
    ///
    /// # Arguments
    /// * `position` - The grid coordinates to encode
    ///
    /// # Returns
    /// The packed key for that coordinate triple.
    pub fn pack(position: Point3<i32>) -> Self {
        BlockKey(
            (pack_axis(position.x) << (2 * AXIS_BITS))
                | (pack_axis(position.y) << AXIS_BITS)
                | pack_axis(position.z),
        )
    }

    /// Recovers the grid coordinates this key encodes.
    pub fn unpack(self) -> Point3<i32> {
        Point3::new(
            unpack_axis(self.0 >> (2 * AXIS_BITS)),
            unpack_axis(self.0 >> AXIS_BITS),
            unpack_axis(self.0),
        )
    }
}

/// Truncates one signed axis value to its 21-bit two's complement form.
fn pack_axis(value: i32) -> u64 {
    (value as i64 as u64) & AXIS_MASK
}

/// Sign-extends one 21-bit axis field back to a full `i32`.
fn unpack_axis(bits: u64) -> i32 {
    let shifted = ((bits & AXIS_MASK) << (64 - AXIS_BITS)) as i64;
    (shifted >> (64 - AXIS_BITS)) as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pack_unpack_roundtrips_signed_coordinates() {
        let samples = [
            Point3::new(0, 0, 0),
            Point3::new(1, 2, 3),
            Point3::new(-1, -2, -3),
            Point3::new(-17, 0, 42),
            Point3::new(MAX_COORD, MIN_COORD, MAX_COORD),
        ];
        for position in samples {
            assert_eq!(BlockKey::pack(position).unpack(), position);
        }
    }

    #[test]
    fn neighboring_coordinates_get_distinct_keys() {
        let origin = BlockKey::pack(Point3::new(0, 0, 0));
        assert_ne!(origin, BlockKey::pack(Point3::new(1, 0, 0)));
        assert_ne!(origin, BlockKey::pack(Point3::new(0, 1, 0)));
        assert_ne!(origin, BlockKey::pack(Point3::new(0, 0, 1)));
        assert_ne!(origin, BlockKey::pack(Point3::new(0, 0, -1)));
    }

    #[test]
    fn axis_fields_do_not_bleed_into_each_other() {
        // A large z must not carry into y's bit field.
        let a = BlockKey::pack(Point3::new(0, 1, 0));
        let b = BlockKey::pack(Point3::new(0, 0, MAX_COORD));
        assert_ne!(a, b);
        assert_eq!(b.unpack(), Point3::new(0, 0, MAX_COORD));
    }
}
