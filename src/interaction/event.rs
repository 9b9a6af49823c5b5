//! # Pointer Event Module
//!
//! This module models the interaction events the sandbox consumes. The
//! rendering layer populates different subsets of these fields depending
//! on how a hit was produced (direct hit, propagated/synthetic event, or a
//! raycast result list), so every field is optional and independently
//! possibly malformed. The accessor methods encode the fixed preference
//! order the resolver reads them in.

use cgmath::{Matrix4, Point3, SquareMatrix, Transform};

use crate::geometry::VectorInput;

/// Button code for a primary (left) pointer press.
pub const PRIMARY_BUTTON: u16 = 0;

/// Button code for a secondary (right) pointer press.
pub const SECONDARY_BUTTON: u16 = 2;

/// The face record a hit may carry.
#[derive(Debug, Clone, Copy, Default)]
pub struct Face {
    /// The face's outward normal, possibly absent or malformed.
    pub normal: Option<VectorInput>,
}

/// The scene object a hit landed on.
///
/// The sandbox only needs one capability from the object: transforming a
/// world-space point into the object's local frame, where the object is
/// assumed to be a unit cube centered at its local origin.
#[derive(Debug, Clone, Copy)]
pub struct HitTarget {
    /// The object's local-to-world transform.
    world_transform: Matrix4<f32>,
}

impl HitTarget {
    /// Creates a target from its local-to-world transform.
    pub fn new(world_transform: Matrix4<f32>) -> Self {
        HitTarget { world_transform }
    }

    /// Creates a target for a unit cube centered at `center`.
    pub fn unit_cube_at(center: Point3<f32>) -> Self {
        use cgmath::EuclideanSpace;
        HitTarget::new(Matrix4::from_translation(center.to_vec()))
    }

    /// Transforms a world-space point into this object's local frame.
    ///
    /// Returns `None` if the transform cannot be inverted or the result is
    /// non-finite; callers treat that the same as any other malformed
    /// field and fall back.
    pub fn world_to_local(&self, point: Point3<f32>) -> Option<Point3<f32>> {
        let inverse = self.world_transform.invert()?;
        let local = inverse.transform_point(point);
        if local.x.is_finite() && local.y.is_finite() && local.z.is_finite() {
            Some(local)
        } else {
            None
        }
    }
}

/// One entry of a raycast result list.
#[derive(Debug, Clone, Copy, Default)]
pub struct Intersection {
    /// The face that was hit, if reported.
    pub face: Option<Face>,
    /// The world-space hit point, if reported.
    pub point: Option<VectorInput>,
    /// The object that was hit, if reported.
    pub object: Option<HitTarget>,
}

/// A pointer interaction event as delivered by the rendering layer.
///
/// Any field may be absent; the resolver and router must treat each one as
/// optional and degrade gracefully rather than assume any single shape.
#[derive(Debug, Clone, Default)]
pub struct PointerEvent {
    /// The numeric button code, if the event carries one.
    pub button: Option<u16>,
    /// The face that was hit directly, if any.
    pub face: Option<Face>,
    /// The world-space hit point, if carried on the event itself.
    pub point: Option<VectorInput>,
    /// The object that was hit, if carried on the event itself.
    pub object: Option<HitTarget>,
    /// The object the event was dispatched to, for propagated events.
    pub event_object: Option<HitTarget>,
    /// The ordered raycast result list, nearest hit first.
    pub intersections: Vec<Intersection>,
}

impl PointerEvent {
    /// Whether the event carries any usable hit information: a face, a
    /// non-empty intersections list, or a point paired with a target
    /// object. An event without any of these is a miss on empty space.
    pub fn has_hit_information(&self) -> bool {
        self.face.is_some()
            || !self.intersections.is_empty()
            || (self.point.is_some() && (self.object.is_some() || self.event_object.is_some()))
    }

    /// The face-normal input, preferring the event's own face over the
    /// first intersection's.
    pub(crate) fn face_normal_input(&self) -> Option<&VectorInput> {
        self.face
            .as_ref()
            .and_then(|face| face.normal.as_ref())
            .or_else(|| {
                self.intersections
                    .first()
                    .and_then(|hit| hit.face.as_ref())
                    .and_then(|face| face.normal.as_ref())
            })
    }

    /// The candidate hit point, preferring the event's own point over the
    /// first intersection's.
    pub(crate) fn point_input(&self) -> Option<&VectorInput> {
        self.point
            .as_ref()
            .or_else(|| self.intersections.first().and_then(|hit| hit.point.as_ref()))
    }

    /// The candidate target object, in preference order: the event's
    /// object, the dispatch object, then the first intersection's object.
    pub(crate) fn hit_target(&self) -> Option<&HitTarget> {
        self.object
            .as_ref()
            .or(self.event_object.as_ref())
            .or_else(|| self.intersections.first().and_then(|hit| hit.object.as_ref()))
    }
}
