use crate::body::{Body, BodyClass};
use crate::input::InputState;
use crate::rng::{new_rng, SeededRng};
use crate::scenario::{self, Status};
use crate::ship::{self, Ship};
use crate::snapshot::{
    AsteroidSnapshot, MineralSnapshot, PlanetSnapshot, ShipSnapshot, Snapshot,
};
use crate::vec2::Vec2;

/// Upper bound on a single step's elapsed time. A long pause in the
/// driving frame clock must not turn into a non-physical position jump.
pub const MAX_TICK_LENGTH: f64 = 0.05;

pub struct Simulation {
    pub planets: Vec<Body>,
    pub asteroids: Vec<Body>,
    pub minerals: Vec<Body>,
    pub ship: Ship,
    pub collected: u32,
    pub status: Status,
    pub message: String,
    pub time: f64,
    pub width: f64,
    pub height: f64,
    pub(crate) rng: SeededRng,
}

impl Simulation {
    pub fn new(width: f64, height: f64, seed: u32) -> Simulation {
        assert!(
            width > 2.0 * scenario::PLANET_EDGE_MARGIN
                && height > 2.0 * scenario::PLANET_EDGE_MARGIN,
            "viewport too small to place planets"
        );
        log::info!("seed {seed}");
        let mut sim = Simulation {
            planets: Vec::new(),
            asteroids: Vec::new(),
            minerals: Vec::new(),
            ship: Ship::new(Vec2::new(width / 2.0, height / 2.0)),
            collected: 0,
            status: Status::Running,
            message: String::new(),
            time: 0.0,
            width,
            height,
            rng: new_rng(seed),
        };
        scenario::reset(&mut sim);
        sim
    }

    /// Advance the mission by one step. `input` is the caller's snapshot
    /// of the logical intents for this frame.
    pub fn step(&mut self, dt: f64, input: &InputState) {
        let dt = dt.clamp(0.0, MAX_TICK_LENGTH);

        if input.reset {
            scenario::reset(self);
            return;
        }

        self.time += dt;

        ship::tick(self, dt, input);

        let (width, height) = (self.width, self.height);
        for planet in self.planets.iter_mut() {
            planet.tick(dt, width, height);
        }
        for asteroid in self.asteroids.iter_mut() {
            asteroid.tick(dt, width, height);
        }
    }

    pub fn game_over(&self) -> bool {
        self.status == Status::Failed
    }

    pub fn game_won(&self) -> bool {
        self.status == Status::Victory
    }

    /// Adopt new viewport dimensions; wrap bounds apply from the next
    /// step, nothing is relocated eagerly.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            time: self.time,
            status: self.status,
            status_message: self.message.clone(),
            fuel_percent: self.ship.fuel.floor() as u32,
            minerals_collected: self.collected,
            ship_speed: self.ship.speed(),
            ship: ShipSnapshot {
                position: self.ship.position,
                velocity: self.ship.velocity,
                angle: self.ship.angle,
                fuel: self.ship.fuel,
                alive: self.ship.alive,
                tractor_active: self.ship.tractor_active,
            },
            planets: self
                .planets
                .iter()
                .filter_map(|body| match &body.class {
                    BodyClass::Planet { hue, name } => Some(PlanetSnapshot {
                        position: body.position,
                        radius: body.radius,
                        hue: *hue,
                        name: (*name).to_string(),
                    }),
                    _ => None,
                })
                .collect(),
            asteroids: self
                .asteroids
                .iter()
                .filter_map(|body| match &body.class {
                    BodyClass::Asteroid {
                        rotation,
                        silhouette,
                    } => Some(AsteroidSnapshot {
                        position: body.position,
                        radius: body.radius,
                        rotation: *rotation,
                        silhouette: *silhouette,
                    }),
                    _ => None,
                })
                .collect(),
            minerals: self
                .minerals
                .iter()
                .filter_map(|body| match &body.class {
                    BodyClass::Mineral {
                        collected,
                        pulse_phase,
                    } => Some(MineralSnapshot {
                        position: body.position,
                        radius: body.radius,
                        collected: *collected,
                        pulse_phase: *pulse_phase,
                    }),
                    _ => None,
                })
                .collect(),
        }
    }
}
