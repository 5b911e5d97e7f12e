//! Mission setup: seeds a fresh field of planets, asteroids, and
//! minerals and respawns the ship. Runs at construction and on every
//! reset intent, drawing from the simulation's seeded RNG stream so
//! consecutive missions differ but the whole session is reproducible
//! from the seed.

use crate::body::{self, PLANET_NAMES};
use crate::ship::Ship;
use crate::simulation::Simulation;
use crate::vec2::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::f64::consts::TAU;

pub const NUM_PLANETS: usize = 5;
pub const NUM_ASTEROIDS: usize = 15;
pub const NUM_MINERALS: usize = 25;
pub const MISSION_GOAL: u32 = 10;

/// Planets spawn at least this far from every viewport edge.
pub const PLANET_EDGE_MARGIN: f64 = 200.0;

/// Probability that a mineral anchors to a planet rather than an asteroid.
const MINERAL_PLANET_BIAS: f64 = 0.6;

pub const INITIAL_MESSAGE: &str = "Collect 10 minerals to complete mission!";

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub enum Status {
    Running,
    Failed,
    Victory,
}

pub fn reset(sim: &mut Simulation) {
    sim.planets.clear();
    sim.asteroids.clear();
    sim.minerals.clear();
    sim.collected = 0;
    sim.status = Status::Running;
    sim.time = 0.0;

    let (width, height) = (sim.width, sim.height);

    for name in PLANET_NAMES {
        let position = Vec2::new(
            sim.rng.gen_range(PLANET_EDGE_MARGIN..width - PLANET_EDGE_MARGIN),
            sim.rng.gen_range(PLANET_EDGE_MARGIN..height - PLANET_EDGE_MARGIN),
        );
        let radius = sim.rng.gen_range(50.0..90.0);
        let hue = sim.rng.gen_range(180.0..280.0);
        sim.planets.push(body::planet(position, radius, hue, name));
    }

    for _ in 0..NUM_ASTEROIDS {
        let position = Vec2::new(sim.rng.gen_range(0.0..width), sim.rng.gen_range(0.0..height));
        let velocity = Vec2::new(sim.rng.gen_range(-0.3..0.3), sim.rng.gen_range(-0.3..0.3));
        let radius = sim.rng.gen_range(12.0..28.0);
        let rotation = sim.rng.gen_range(0.0..TAU);
        let mut silhouette = [0.0; 8];
        for point in silhouette.iter_mut() {
            *point = sim.rng.gen_range(0.7..1.0);
        }
        sim.asteroids
            .push(body::asteroid(position, velocity, radius, rotation, silhouette));
    }

    for _ in 0..NUM_MINERALS {
        let (anchor_position, anchor_radius) = if sim.rng.gen_bool(MINERAL_PLANET_BIAS) {
            let index = sim.rng.gen_range(0..sim.planets.len());
            let anchor = &sim.planets[index];
            (anchor.position, anchor.radius)
        } else {
            let index = sim.rng.gen_range(0..sim.asteroids.len());
            let anchor = &sim.asteroids[index];
            (anchor.position, anchor.radius)
        };
        let angle = sim.rng.gen_range(0.0..TAU);
        let dist = anchor_radius + sim.rng.gen_range(15.0..80.0);
        let position = anchor_position + Vec2::new(angle.cos(), angle.sin()) * dist;
        let pulse_phase = sim.rng.gen_range(0.0..TAU);
        sim.minerals.push(body::mineral(position, pulse_phase));
    }

    sim.ship = Ship::new(Vec2::new(width / 2.0, height / 2.0));
    sim.message = INITIAL_MESSAGE.to_string();

    log::debug!(
        "mission seeded: {} planets, {} asteroids, {} minerals",
        sim.planets.len(),
        sim.asteroids.len(),
        sim.minerals.len()
    );
}
