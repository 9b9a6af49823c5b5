//! # Interaction Module
//!
//! Everything between a raw pointer event and a world mutation:
//!
//! * `event` - The duck-typed pointer-event model and its capability
//!   accessors
//! * `normal` - The placement-normal resolver
//! * `router` - Pointer-button routing into store operations

pub mod event;
pub mod normal;
pub mod router;
