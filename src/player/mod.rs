//! # Player Module
//!
//! The player-facing collaborators around the world core:
//!
//! * `input_state` / `input_manager` - Discrete key-event intake and
//!   per-step input sampling
//! * `camera` - First-person position/orientation, the origin and facing
//!   supplier for the area effect

pub mod camera;
pub mod input_manager;
pub mod input_state;
