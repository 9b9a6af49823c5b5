//! # Placement Normal Resolver
//!
//! Given an arbitrary pointer event, this module derives the unit
//! axis-aligned outward normal of the cube face that was hit. The resolver
//! is total: it never panics, and it always returns a finite unit axis
//! vector, degrading to the up vector whenever the event does not carry
//! enough well-formed information.
//!
//! Resolution order, first applicable wins:
//! 1. An explicit face normal (from the event or its first intersection),
//!    snapped to the nearest cube face to absorb diagonal or interpolated
//!    normals.
//! 2. Point-relative inference: the hit point is transformed into the
//!    target's local frame (a unit cube centered at the origin) and the
//!    face plane nearest to it determines the axis and sign.
//! 3. The up vector.
//!
//! A wrong value here directly corrupts placement coordinates, which is
//! why each tier validates its inputs instead of trusting any one event
//! shape.

use cgmath::{EuclideanSpace, InnerSpace, Point3, Vector3};

use crate::geometry::{self, VectorInput, UP};

use super::event::{HitTarget, PointerEvent};

/// Half-extent of the unit cube assumed around a hit target's local origin.
const HALF_EXTENT: f32 = 0.5;

/// Resolves the placement normal for an interaction event.
///
/// # Arguments
/// * `event` - The pointer event, if the interaction carried one at all
///
/// # Returns
/// A finite unit axis vector; [`UP`] whenever no usable face normal or
/// point/target pair exists.
pub fn compute_placement_normal(event: Option<&PointerEvent>) -> Vector3<f32> {
    let event = match event {
        Some(event) => event,
        None => return UP,
    };

    if let Some(normal) = event.face_normal_input() {
        return normal_from_face(normal);
    }

    if let (Some(point), Some(target)) = (event.point_input(), event.hit_target()) {
        return normal_from_point(point, target);
    }

    UP
}

/// Snaps an explicit face normal to the nearest cube face.
///
/// A normal that fails coercion or has zero length resolves to [`UP`].
fn normal_from_face(input: &VectorInput) -> Vector3<f32> {
    let normal = match geometry::coerce_vector(Some(input)) {
        Some(normal) => normal,
        None => return UP,
    };

    if normal.magnitude2() == 0.0 {
        return UP;
    }

    geometry::dominant_axis_unit(Some(normal.normalize()))
}

/// Infers the hit face from the hit point's position in the target's
/// local frame.
///
/// Each axis's distance from the cube surface is `||local| - 0.5|`; the
/// smallest distance wins, tie-broken in fixed x, y, z order. The sign
/// comes from the local coordinate on the winning axis, with zero treated
/// as positive.
fn normal_from_point(input: &VectorInput, target: &HitTarget) -> Vector3<f32> {
    let point = match geometry::coerce_vector(Some(input)) {
        Some(point) => Point3::from_vec(point),
        None => return UP,
    };

    let local = match target.world_to_local(point) {
        Some(local) => local,
        None => return UP,
    };

    let face_distance = |component: f32| (component.abs() - HALF_EXTENT).abs();
    let dist_x = face_distance(local.x);
    let dist_y = face_distance(local.y);
    let dist_z = face_distance(local.z);

    if !dist_x.is_finite() || !dist_y.is_finite() || !dist_z.is_finite() {
        return UP;
    }

    if dist_x <= dist_y && dist_x <= dist_z {
        Vector3::new(geometry::axis_sign(local.x), 0.0, 0.0)
    } else if dist_y <= dist_z {
        Vector3::new(0.0, geometry::axis_sign(local.y), 0.0)
    } else {
        Vector3::new(0.0, 0.0, geometry::axis_sign(local.z))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interaction::event::{Face, Intersection};
    use cgmath::Matrix4;

    fn origin_cube() -> HitTarget {
        HitTarget::unit_cube_at(Point3::new(0.0, 0.0, 0.0))
    }

    fn point_event(point: (f32, f32, f32), target: HitTarget) -> PointerEvent {
        PointerEvent {
            point: Some(VectorInput::components(point.0, point.1, point.2)),
            object: Some(target),
            ..Default::default()
        }
    }

    #[test]
    fn absent_event_resolves_up() {
        assert_eq!(compute_placement_normal(None), UP);
    }

    #[test]
    fn event_with_no_recognized_fields_resolves_up() {
        assert_eq!(compute_placement_normal(Some(&PointerEvent::default())), UP);
    }

    #[test]
    fn empty_intersections_resolve_up() {
        let event = PointerEvent {
            intersections: Vec::new(),
            ..Default::default()
        };
        assert_eq!(compute_placement_normal(Some(&event)), UP);
    }

    #[test]
    fn intersection_with_neither_face_nor_point_resolves_up() {
        let event = PointerEvent {
            intersections: vec![Intersection::default()],
            ..Default::default()
        };
        assert_eq!(compute_placement_normal(Some(&event)), UP);
    }

    #[test]
    fn explicit_face_normal_is_snapped_to_an_axis() {
        let event = PointerEvent {
            face: Some(Face {
                normal: Some(VectorInput::Vector(Vector3::new(0.6, 0.1, -0.3))),
            }),
            ..Default::default()
        };
        assert_eq!(
            compute_placement_normal(Some(&event)),
            Vector3::new(1.0, 0.0, 0.0)
        );
    }

    #[test]
    fn intersection_face_normal_is_used_when_the_event_has_none() {
        let event = PointerEvent {
            intersections: vec![Intersection {
                face: Some(Face {
                    normal: Some(VectorInput::Vector(Vector3::new(0.0, -0.9, 0.2))),
                }),
                ..Default::default()
            }],
            ..Default::default()
        };
        assert_eq!(
            compute_placement_normal(Some(&event)),
            Vector3::new(0.0, -1.0, 0.0)
        );
    }

    #[test]
    fn malformed_face_normal_resolves_up() {
        let nan = PointerEvent {
            face: Some(Face {
                normal: Some(VectorInput::components(f32::NAN, 0.0, 0.0)),
            }),
            ..Default::default()
        };
        assert_eq!(compute_placement_normal(Some(&nan)), UP);

        let zero_length = PointerEvent {
            face: Some(Face {
                normal: Some(VectorInput::Vector(Vector3::new(0.0, 0.0, 0.0))),
            }),
            ..Default::default()
        };
        assert_eq!(compute_placement_normal(Some(&zero_length)), UP);
    }

    #[test]
    fn point_past_a_face_yields_that_face_normal() {
        let event = point_event((0.0, 0.0, 0.51), origin_cube());
        assert_eq!(
            compute_placement_normal(Some(&event)),
            Vector3::new(0.0, 0.0, 1.0)
        );

        let event = point_event((0.0, -0.51, 0.0), origin_cube());
        assert_eq!(
            compute_placement_normal(Some(&event)),
            Vector3::new(0.0, -1.0, 0.0)
        );
    }

    #[test]
    fn point_inference_uses_the_targets_world_transform() {
        let target = HitTarget::unit_cube_at(Point3::new(4.0, 2.0, -7.0));
        let event = point_event((4.51, 2.0, -7.0), target);
        assert_eq!(
            compute_placement_normal(Some(&event)),
            Vector3::new(1.0, 0.0, 0.0)
        );
    }

    #[test]
    fn exact_corner_tie_resolves_to_x() {
        let event = point_event((0.5, 0.5, 0.0), origin_cube());
        assert_eq!(
            compute_placement_normal(Some(&event)),
            Vector3::new(1.0, 0.0, 0.0)
        );
    }

    #[test]
    fn singular_target_transform_resolves_up() {
        let event = point_event((0.0, 0.0, 0.51), HitTarget::new(Matrix4::from_scale(0.0)));
        assert_eq!(compute_placement_normal(Some(&event)), UP);
    }

    #[test]
    fn point_from_intersection_pairs_with_event_object() {
        let event = PointerEvent {
            object: Some(origin_cube()),
            intersections: vec![Intersection {
                point: Some(VectorInput::components(-0.51, 0.0, 0.0)),
                ..Default::default()
            }],
            ..Default::default()
        };
        assert_eq!(
            compute_placement_normal(Some(&event)),
            Vector3::new(-1.0, 0.0, 0.0)
        );
    }
}
