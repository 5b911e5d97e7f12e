//! The player ship and its per-frame controller.
//!
//! `tick` runs the whole control/collision sequence for one step:
//! rotation, thrust, integration and wrap, tractor beam, planet and
//! asteroid collision classification, mineral collection, and the fuel
//! check. The ordering (planets, then asteroids, then minerals, then
//! fuel) is load-bearing: simultaneous triggers all evaluate and the
//! last message written wins.

use crate::input::InputState;
use crate::scenario::{Status, MISSION_GOAL};
use crate::simulation::Simulation;
use crate::vec2::Vec2;
use std::f64::consts::FRAC_PI_2;

pub const MAX_FUEL: f64 = 100.0;
pub const ROTATION_RATE: f64 = 4.0;
pub const THRUST_ACCELERATION: f64 = 150.0;
pub const THRUST_FUEL_BURN: f64 = 15.0;

pub const TRACTOR_MIN_FUEL: f64 = 5.0;
pub const TRACTOR_FUEL_BURN: f64 = 10.0;
pub const TRACTOR_RANGE: f64 = 150.0;
pub const TRACTOR_PULL_SPEED: f64 = 200.0;
/// Minerals closer than this are left in place; the pull direction is
/// singular at zero separation.
pub const TRACTOR_DEADZONE: f64 = 1.0;

pub const PLANET_CLEARANCE: f64 = 12.0;
pub const PLANET_CRASH_SPEED: f64 = 60.0;
pub const LANDING_REFUEL: f64 = 30.0;
pub const LANDING_SPEED_FACTOR: f64 = 0.3;
/// A landed ship is pushed out one unit past the collision clearance so
/// the contact does not re-trigger on the next step.
pub const LANDING_PUSHOUT: f64 = 13.0;

pub const ASTEROID_CLEARANCE: f64 = 10.0;
pub const ASTEROID_CRASH_SPEED: f64 = 50.0;

pub const COLLECTION_RANGE: f64 = 15.0;

#[derive(Clone, Debug)]
pub struct Ship {
    pub position: Vec2,
    pub velocity: Vec2,
    /// Heading in radians, 0 = facing +x.
    pub angle: f64,
    pub fuel: f64,
    pub alive: bool,
    pub tractor_active: bool,
}

impl Ship {
    pub fn new(position: Vec2) -> Ship {
        Ship {
            position,
            velocity: Vec2::ZERO,
            angle: -FRAC_PI_2,
            fuel: MAX_FUEL,
            alive: true,
            tractor_active: false,
        }
    }

    pub fn speed(&self) -> f64 {
        self.velocity.magnitude()
    }

    pub fn heading(&self) -> Vec2 {
        Vec2::new(self.angle.cos(), self.angle.sin())
    }
}

pub fn tick(sim: &mut Simulation, dt: f64, input: &InputState) {
    if !sim.ship.alive {
        return;
    }

    if input.rotate_left {
        sim.ship.angle -= ROTATION_RATE * dt;
    }
    if input.rotate_right {
        sim.ship.angle += ROTATION_RATE * dt;
    }

    if input.thrust && sim.ship.fuel > 0.0 {
        let accel = sim.ship.heading() * (THRUST_ACCELERATION * dt);
        sim.ship.velocity = sim.ship.velocity + accel;
        sim.ship.fuel = (sim.ship.fuel - THRUST_FUEL_BURN * dt).max(0.0);
    }

    sim.ship.position = sim.ship.position + sim.ship.velocity * dt;

    // Tight wrap, no margin: the ship stays inside the viewport proper.
    if sim.ship.position.x < 0.0 {
        sim.ship.position.x = sim.width;
    }
    if sim.ship.position.x > sim.width {
        sim.ship.position.x = 0.0;
    }
    if sim.ship.position.y < 0.0 {
        sim.ship.position.y = sim.height;
    }
    if sim.ship.position.y > sim.height {
        sim.ship.position.y = 0.0;
    }

    sim.ship.tractor_active = input.tractor && sim.ship.fuel > TRACTOR_MIN_FUEL;
    if sim.ship.tractor_active {
        sim.ship.fuel = (sim.ship.fuel - TRACTOR_FUEL_BURN * dt).max(0.0);
        let ship_position = sim.ship.position;
        for mineral in sim.minerals.iter_mut() {
            if mineral.is_collected() {
                continue;
            }
            let separation = ship_position.sub(mineral.position);
            let dist = separation.magnitude();
            if dist < TRACTOR_RANGE && dist > TRACTOR_DEADZONE {
                let pull = (TRACTOR_PULL_SPEED * dt).min(dist);
                mineral.position = mineral.position + separation.normalize() * pull;
            }
        }
    }

    // Speed is sampled once here and reused for the asteroid checks below,
    // even if a soft landing damps the velocity in between.
    let speed = sim.ship.speed();

    for planet in &sim.planets {
        let separation = sim.ship.position.sub(planet.position);
        let dist = separation.magnitude();
        if dist < planet.radius + PLANET_CLEARANCE {
            let name = planet.name().unwrap_or("Planet");
            if speed > PLANET_CRASH_SPEED {
                sim.ship.alive = false;
                sim.status = Status::Failed;
                sim.message = format!("Crashed into {name}! Press R to retry.");
            } else {
                sim.ship.fuel = (sim.ship.fuel + LANDING_REFUEL).min(MAX_FUEL);
                sim.ship.velocity = sim.ship.velocity * LANDING_SPEED_FACTOR;
                sim.ship.position =
                    planet.position + separation.normalize() * (planet.radius + LANDING_PUSHOUT);
                sim.message = format!("Refueled at {name}!");
            }
        }
    }

    for asteroid in &sim.asteroids {
        let dist = sim.ship.position.distance(asteroid.position);
        if dist < asteroid.radius + ASTEROID_CLEARANCE && speed > ASTEROID_CRASH_SPEED {
            sim.ship.alive = false;
            sim.status = Status::Failed;
            sim.message = "Asteroid collision! Press R to retry.".to_string();
        }
    }

    let ship_position = sim.ship.position;
    for mineral in sim.minerals.iter_mut() {
        if mineral.is_collected() {
            continue;
        }
        if ship_position.distance(mineral.position) < COLLECTION_RANGE {
            mineral.collect();
            sim.collected += 1;
            sim.message = format!("Mineral collected! ({}/{})", sim.collected, MISSION_GOAL);
            if sim.collected >= MISSION_GOAL {
                sim.ship.alive = false;
                sim.status = Status::Victory;
                sim.message = "Mission complete! All minerals collected! Press R for new mission."
                    .to_string();
                break;
            }
        }
    }

    if sim.ship.fuel <= 0.0 && sim.status != Status::Victory {
        sim.ship.alive = false;
        sim.status = Status::Failed;
        sim.message = "Out of fuel! Press R to retry.".to_string();
    }
}
