//! Simulation core for a 2-D space-mining arcade mission.
//!
//! A pilot-controlled ship navigates a wrapped field of planets,
//! asteroids, and collectible minerals under hand-rolled kinematics.
//! The crate is headless: it consumes a per-step [`input::InputState`]
//! and exposes a serializable [`snapshot::Snapshot`] for an external
//! presentation layer.

pub mod body;
pub mod input;
pub mod rng;
pub mod scenario;
pub mod ship;
pub mod simulation;
pub mod snapshot;
pub mod vec2;
