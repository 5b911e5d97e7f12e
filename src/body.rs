//! Ambient celestial bodies: planets, asteroids, and minerals.
//!
//! All three share the same motion/geometry core and differ only in their
//! class payload. Collision always uses `radius`; the asteroid silhouette
//! and mineral pulse are carried for the presentation layer only.

use crate::vec2::Vec2;

/// Velocities are tuned in units per 60 fps tick; integration scales by
/// this factor so the tuning holds under a variable frame clock.
pub const BASE_FRAME_RATE: f64 = 60.0;

/// Ambient bodies wrap on a viewport padded by this margin on every edge.
pub const WRAP_MARGIN: f64 = 100.0;

pub const MINERAL_RADIUS: f64 = 6.0;

/// Fixed catalog, assigned to planets in spawn order.
pub const PLANET_NAMES: [&str; 5] = [
    "Kepler-442b",
    "Proxima-b",
    "TRAPPIST-1e",
    "HD 40307g",
    "Gliese 667Cc",
];

#[derive(Clone, Debug, PartialEq)]
pub enum BodyClass {
    Planet {
        hue: f64,
        name: &'static str,
    },
    Asteroid {
        rotation: f64,
        silhouette: [f64; 8],
    },
    Mineral {
        collected: bool,
        pulse_phase: f64,
    },
}

#[derive(Clone, Debug)]
pub struct Body {
    pub position: Vec2,
    pub velocity: Vec2,
    pub radius: f64,
    pub class: BodyClass,
}

impl Body {
    /// Integrate one step and wrap on the padded viewport.
    pub fn tick(&mut self, dt: f64, width: f64, height: f64) {
        self.position = self.position + self.velocity * (dt * BASE_FRAME_RATE);

        if self.position.x < -WRAP_MARGIN {
            self.position.x = width + WRAP_MARGIN;
        }
        if self.position.x > width + WRAP_MARGIN {
            self.position.x = -WRAP_MARGIN;
        }
        if self.position.y < -WRAP_MARGIN {
            self.position.y = height + WRAP_MARGIN;
        }
        if self.position.y > height + WRAP_MARGIN {
            self.position.y = -WRAP_MARGIN;
        }
    }

    pub fn name(&self) -> Option<&'static str> {
        match self.class {
            BodyClass::Planet { name, .. } => Some(name),
            _ => None,
        }
    }

    pub fn is_collected(&self) -> bool {
        matches!(self.class, BodyClass::Mineral { collected: true, .. })
    }

    pub fn collect(&mut self) {
        if let BodyClass::Mineral { collected, .. } = &mut self.class {
            *collected = true;
        }
    }
}

pub fn planet(position: Vec2, radius: f64, hue: f64, name: &'static str) -> Body {
    Body {
        position,
        velocity: Vec2::ZERO,
        radius,
        class: BodyClass::Planet { hue, name },
    }
}

pub fn asteroid(
    position: Vec2,
    velocity: Vec2,
    radius: f64,
    rotation: f64,
    silhouette: [f64; 8],
) -> Body {
    Body {
        position,
        velocity,
        radius,
        class: BodyClass::Asteroid {
            rotation,
            silhouette,
        },
    }
}

pub fn mineral(position: Vec2, pulse_phase: f64) -> Body {
    Body {
        position,
        velocity: Vec2::ZERO,
        radius: MINERAL_RADIUS,
        class: BodyClass::Mineral {
            collected: false,
            pulse_phase,
        },
    }
}
