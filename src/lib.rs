#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![warn(rustdoc::invalid_rust_codeblocks)]

//! # Voxel Sandbox
//!
//! The core of a browser-based first-person voxel sandbox: a procedurally
//! generated block world the player can explore, mine, and build in.
//!
//! This crate owns the authoritative world state and the interaction
//! logic that mutates it. Rendering, pointer-lock lifecycle, and HUD
//! layout live in the host rendering layer, which consumes the world's
//! read-only snapshots and feeds events back in.
//!
//! ## Key Modules
//!
//! * `geometry` - Vector coercion and dominant-axis reduction
//! * `interaction` - Pointer-event model, placement-normal resolver, and
//!   the router that turns pointer presses into mutations
//! * `world` - The block store, its mutation rules, and terrain generation
//! * `effects` - The area-effect removal ("shout")
//! * `player` - Input sampling and the first-person camera
//! * `session` - The controller wiring all of the above together
//!
//! ## Mutation Model
//!
//! All world edits are synchronous, run to completion inside one event
//! handler, and install a fresh map snapshot, so a consumer holding the
//! previous snapshot never observes a change and edit detection is a
//! pointer comparison. Invalid mutations are silently dropped; "no visible
//! effect" is the complete failure signal.

pub mod effects;
pub mod geometry;
pub mod interaction;
pub mod player;
pub mod session;
pub mod world;

pub use session::Session;
pub use world::block::BlockType;
pub use world::World;

/// Initializes the process-wide logger from the `RUST_LOG` environment
/// variable, writing to stdout.
///
/// Call once at startup, before the first session is created.
pub fn init_logging() {
    let mut log_builder = env_logger::Builder::new();
    log_builder
        .target(env_logger::Target::Stdout)
        .parse_env("RUST_LOG")
        .init();

    log::info!("logger initialized");
}
