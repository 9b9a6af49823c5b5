//! # Geometry Utilities
//!
//! This module provides the pure vector helpers the interaction layer is
//! built on:
//! - Coercion of loosely-shaped vector inputs into proper `cgmath` vectors
//! - Reduction of an arbitrary vector to its dominant axis as a unit vector
//!
//! Both helpers are total: malformed input never panics and always resolves
//! to `None` or to the up-vector default.

use cgmath::Vector3;

/// The up direction, used as the safe fallback wherever a vector cannot be
/// derived from the input at hand.
pub const UP: Vector3<f32> = Vector3::new(0.0, 1.0, 0.0);

/// A vector-shaped input as it arrives from the interaction boundary.
///
/// Pointer events populate their vector fields in two shapes depending on
/// how the hit was produced: either a fully-formed vector, or a loose bag
/// of per-component values where any component may be missing. Both shapes
/// are carried here so callers can defer validation to [`coerce_vector`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum VectorInput {
    /// A fully-formed vector.
    Vector(Vector3<f32>),
    /// Loose per-component values, each independently possibly absent.
    Components {
        /// The x component, if present.
        x: Option<f32>,
        /// The y component, if present.
        y: Option<f32>,
        /// The z component, if present.
        z: Option<f32>,
    },
}

impl VectorInput {
    /// Convenience constructor for a fully-populated component shape.
    pub fn components(x: f32, y: f32, z: f32) -> Self {
        VectorInput::Components {
            x: Some(x),
            y: Some(y),
            z: Some(z),
        }
    }
}

/// Coerces a possibly-absent, possibly-malformed vector input into a vector.
///
/// Returns `None` if the input is absent, if any component is missing, or
/// if any component is non-finite (NaN or infinite). The returned vector is
/// an independent copy; the caller may mutate it freely.
///
/// # Arguments
/// * `input` - The vector-shaped input to coerce, if any
///
/// # Returns
/// The coerced vector, or `None` if no finite vector can be produced.
pub fn coerce_vector(input: Option<&VectorInput>) -> Option<Vector3<f32>> {
    let vector = match input? {
        VectorInput::Vector(v) => *v,
        VectorInput::Components { x, y, z } => Vector3::new((*x)?, (*y)?, (*z)?),
    };

    if vector.x.is_finite() && vector.y.is_finite() && vector.z.is_finite() {
        Some(vector)
    } else {
        None
    }
}

/// Reduces a vector to a unit vector along its dominant axis.
///
/// The dominant axis is the axis with the greatest absolute magnitude.
/// Ties are broken in fixed order: x wins over y, y wins over z. The
/// returned vector has exactly one component of ±1 (sign taken from the
/// winning component, with an exact 0 treated as positive) and zeros
/// elsewhere.
///
/// # Arguments
/// * `vector` - The vector to reduce, if any
///
/// # Returns
/// A unit axis vector, or [`UP`] when the input is absent or any component
/// is non-finite.
pub fn dominant_axis_unit(vector: Option<Vector3<f32>>) -> Vector3<f32> {
    let v = match vector {
        Some(v) if v.x.is_finite() && v.y.is_finite() && v.z.is_finite() => v,
        _ => return UP,
    };

    let abs_x = v.x.abs();
    let abs_y = v.y.abs();
    let abs_z = v.z.abs();

    if abs_x >= abs_y && abs_x >= abs_z {
        Vector3::new(axis_sign(v.x), 0.0, 0.0)
    } else if abs_y >= abs_z {
        Vector3::new(0.0, axis_sign(v.y), 0.0)
    } else {
        Vector3::new(0.0, 0.0, axis_sign(v.z))
    }
}

/// The sign of an axis component, with an exact 0 treated as positive.
pub(crate) fn axis_sign(component: f32) -> f32 {
    if component < 0.0 {
        -1.0
    } else {
        1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coerce_accepts_full_vector() {
        let input = VectorInput::Vector(Vector3::new(1.0, 2.0, 3.0));
        assert_eq!(
            coerce_vector(Some(&input)),
            Some(Vector3::new(1.0, 2.0, 3.0))
        );
    }

    #[test]
    fn coerce_accepts_loose_components() {
        let input = VectorInput::components(-1.0, 0.0, 0.5);
        assert_eq!(
            coerce_vector(Some(&input)),
            Some(Vector3::new(-1.0, 0.0, 0.5))
        );
    }

    #[test]
    fn coerce_rejects_absent_input() {
        assert_eq!(coerce_vector(None), None);
    }

    #[test]
    fn coerce_rejects_missing_component() {
        let input = VectorInput::Components {
            x: Some(1.0),
            y: None,
            z: Some(1.0),
        };
        assert_eq!(coerce_vector(Some(&input)), None);
    }

    #[test]
    fn coerce_rejects_non_finite_components() {
        let nan = VectorInput::components(f32::NAN, 0.0, 0.0);
        assert_eq!(coerce_vector(Some(&nan)), None);

        let infinite = VectorInput::Vector(Vector3::new(0.0, f32::INFINITY, 0.0));
        assert_eq!(coerce_vector(Some(&infinite)), None);
    }

    #[test]
    fn dominant_axis_picks_largest_magnitude() {
        assert_eq!(
            dominant_axis_unit(Some(Vector3::new(0.2, -0.9, 0.3))),
            Vector3::new(0.0, -1.0, 0.0)
        );
        assert_eq!(
            dominant_axis_unit(Some(Vector3::new(0.1, 0.2, -0.8))),
            Vector3::new(0.0, 0.0, -1.0)
        );
    }

    #[test]
    fn dominant_axis_is_a_unit_axis_vector() {
        let samples = [
            Vector3::new(0.3, 0.2, 0.1),
            Vector3::new(-5.0, 4.0, 3.0),
            Vector3::new(0.0, 0.0, -2.0),
            Vector3::new(1e-8, -1e-9, 0.0),
        ];
        for v in samples {
            let unit = dominant_axis_unit(Some(v));
            let abs_sum = unit.x.abs() + unit.y.abs() + unit.z.abs();
            assert_eq!(abs_sum, 1.0, "not a unit axis vector for {:?}", v);
        }
    }

    #[test]
    fn dominant_axis_ties_prefer_x_then_y() {
        assert_eq!(
            dominant_axis_unit(Some(Vector3::new(0.5, 0.5, 0.0))),
            Vector3::new(1.0, 0.0, 0.0)
        );
        assert_eq!(
            dominant_axis_unit(Some(Vector3::new(0.0, 0.5, 0.5))),
            Vector3::new(0.0, 1.0, 0.0)
        );
        assert_eq!(
            dominant_axis_unit(Some(Vector3::new(0.5, 0.5, 0.5))),
            Vector3::new(1.0, 0.0, 0.0)
        );
    }

    #[test]
    fn dominant_axis_zero_vector_resolves_positive_x() {
        // All magnitudes tie at zero, so x wins and 0 is treated as positive.
        assert_eq!(
            dominant_axis_unit(Some(Vector3::new(0.0, 0.0, 0.0))),
            Vector3::new(1.0, 0.0, 0.0)
        );
    }

    #[test]
    fn dominant_axis_falls_back_to_up() {
        assert_eq!(dominant_axis_unit(None), UP);
        assert_eq!(dominant_axis_unit(Some(Vector3::new(f32::NAN, 1.0, 0.0))), UP);
        assert_eq!(
            dominant_axis_unit(Some(Vector3::new(0.0, f32::NEG_INFINITY, 0.0))),
            UP
        );
    }
}
