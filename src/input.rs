//! Logical input intents sampled once per simulation step.
//!
//! The core is agnostic to physical bindings; the embedding layer maps
//! keys/buttons to these booleans and passes a fresh snapshot to
//! [`Simulation::step`](crate::simulation::Simulation::step) each frame.

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct InputState {
    pub rotate_left: bool,
    pub rotate_right: bool,
    pub thrust: bool,
    pub tractor: bool,
    pub reset: bool,
}

impl InputState {
    pub const fn none() -> InputState {
        InputState {
            rotate_left: false,
            rotate_right: false,
            thrust: false,
            tractor: false,
            reset: false,
        }
    }
}
