//! Per-step state snapshot consumed by the presentation layer. The core
//! never draws; everything a renderer or HUD needs is carried here.

use crate::scenario::{Status, MISSION_GOAL};
use crate::vec2::Vec2;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Snapshot {
    pub time: f64,
    pub status: Status,
    pub status_message: String,
    pub fuel_percent: u32,
    pub minerals_collected: u32,
    pub ship_speed: f64,
    pub ship: ShipSnapshot,
    pub planets: Vec<PlanetSnapshot>,
    pub asteroids: Vec<AsteroidSnapshot>,
    pub minerals: Vec<MineralSnapshot>,
}

impl Snapshot {
    pub fn fuel_display(&self) -> String {
        format!("{}%", self.fuel_percent)
    }

    pub fn minerals_display(&self) -> String {
        format!("{} / {}", self.minerals_collected, MISSION_GOAL)
    }

    pub fn speed_display(&self) -> String {
        format!("{:.2}", self.ship_speed)
    }
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ShipSnapshot {
    pub position: Vec2,
    pub velocity: Vec2,
    pub angle: f64,
    pub fuel: f64,
    pub alive: bool,
    pub tractor_active: bool,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct PlanetSnapshot {
    pub position: Vec2,
    pub radius: f64,
    pub hue: f64,
    pub name: String,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct AsteroidSnapshot {
    pub position: Vec2,
    pub radius: f64,
    pub rotation: f64,
    pub silhouette: [f64; 8],
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct MineralSnapshot {
    pub position: Vec2,
    pub radius: f64,
    pub collected: bool,
    pub pulse_phase: f64,
}
