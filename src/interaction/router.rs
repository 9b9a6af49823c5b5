//! # Interaction Router
//!
//! This module translates a raw pointer-down event on an existing block
//! into a world mutation. The primary button mines the block under the
//! pointer; the secondary button builds against the face that was hit,
//! using the placement-normal resolver to pick the neighboring cell. All
//! world rules (ground protection, build floor, occupancy) are enforced
//! inside the store, so the router never second-guesses a mutation.

use cgmath::Point3;
use log::debug;

use crate::world::World;

use super::event::{PointerEvent, PRIMARY_BUTTON, SECONDARY_BUTTON};
use super::normal::compute_placement_normal;

/// What the host boundary should do after a pointer event was routed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PointerResponse {
    /// Whether the host environment's context menu must be suppressed so
    /// secondary-button side effects never reach the page.
    pub suppress_context_menu: bool,
}

/// Routes a pointer-down event targeting the existing block at `target`.
///
/// - Primary button: removes the target block. Ground protection is
///   enforced inside `World::remove`.
/// - Secondary button: if the event carries any usable hit information,
///   computes the placement normal, rounds each component to the nearest
///   integer, and places the currently selected type at the offset cell.
///   An event without hit information is a miss on empty space and
///   mutates nothing.
/// - Any other button (or none): no mutation.
///
/// # Arguments
/// * `world` - The world store to mutate
/// * `target` - Grid coordinates of the block the pointer landed on
/// * `event` - The raw pointer event
///
/// # Returns
/// The boundary response; `suppress_context_menu` is set for every
/// secondary-button press, hit or miss.
pub fn handle_pointer_event(
    world: &mut World,
    target: Point3<i32>,
    event: &PointerEvent,
) -> PointerResponse {
    match event.button {
        Some(PRIMARY_BUTTON) => {
            world.remove(target);
            PointerResponse::default()
        }
        Some(SECONDARY_BUTTON) => {
            if !event.has_hit_information() {
                debug!("secondary press without hit information at {:?}", target);
                return PointerResponse {
                    suppress_context_menu: true,
                };
            }

            let normal = compute_placement_normal(Some(event));
            let cell = Point3::new(
                target.x + normal.x.round() as i32,
                target.y + normal.y.round() as i32,
                target.z + normal.z.round() as i32,
            );
            world.place(cell, world.selected_type());

            PointerResponse {
                suppress_context_menu: true,
            }
        }
        _ => PointerResponse::default(),
    }
}
