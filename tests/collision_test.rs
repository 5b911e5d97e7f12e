use approx::assert_abs_diff_eq;
use aurora_simulator::body;
use aurora_simulator::input::InputState;
use aurora_simulator::ship::{LANDING_PUSHOUT, LANDING_SPEED_FACTOR};
use aurora_simulator::simulation::Simulation;
use aurora_simulator::vec2::Vec2;
use test_log::test;

const WIDTH: f64 = 1600.0;
const HEIGHT: f64 = 900.0;
const DT: f64 = 0.001;

fn empty_sim() -> Simulation {
    let mut sim = Simulation::new(WIDTH, HEIGHT, 0);
    sim.planets.clear();
    sim.asteroids.clear();
    sim.minerals.clear();
    sim
}

fn sim_with_planet() -> Simulation {
    let mut sim = empty_sim();
    sim.planets.push(body::planet(
        Vec2::new(400.0, 450.0),
        60.0,
        220.0,
        "Proxima-b",
    ));
    sim
}

#[test]
fn test_soft_landing_at_threshold_speed() {
    // The crash condition is strictly above 60: touching down at exactly
    // 60 is still a landing.
    let mut sim = sim_with_planet();
    sim.ship.position = Vec2::new(471.0, 450.0);
    sim.ship.velocity = Vec2::new(0.0, 60.0);
    sim.ship.fuel = 50.0;

    sim.step(DT, &InputState::none());

    assert!(sim.ship.alive);
    assert!(!sim.game_over());
    assert_eq!(sim.ship.fuel, 80.0);
    assert_abs_diff_eq!(sim.ship.speed(), 60.0 * LANDING_SPEED_FACTOR, epsilon = 1e-9);
    let dist = sim.ship.position.distance(sim.planets[0].position);
    assert_abs_diff_eq!(dist, 60.0 + LANDING_PUSHOUT, epsilon = 1e-9);
    assert_eq!(sim.message, "Refueled at Proxima-b!");
}

#[test]
fn test_crash_just_above_threshold_speed() {
    let mut sim = sim_with_planet();
    sim.ship.position = Vec2::new(471.0, 450.0);
    sim.ship.velocity = Vec2::new(0.0, 61.0);

    sim.step(DT, &InputState::none());

    assert!(!sim.ship.alive);
    assert!(sim.game_over());
    assert_eq!(sim.message, "Crashed into Proxima-b! Press R to retry.");
}

#[test]
fn test_crash_message_names_planet() {
    let mut sim = sim_with_planet();
    sim.ship.position = Vec2::new(471.0, 450.0);
    sim.ship.velocity = Vec2::new(0.0, 70.0);

    sim.step(DT, &InputState::none());

    assert!(sim.game_over());
    assert!(sim.message.contains("Crashed into"));
    assert!(sim.message.contains("Proxima-b"));
}

#[test]
fn test_landing_fuel_caps_at_maximum() {
    let mut sim = sim_with_planet();
    sim.ship.position = Vec2::new(471.0, 450.0);
    sim.ship.fuel = 90.0;

    sim.step(DT, &InputState::none());

    assert_eq!(sim.ship.fuel, 100.0);
}

#[test]
fn test_landing_does_not_retrigger() {
    let mut sim = sim_with_planet();
    sim.ship.position = Vec2::new(471.0, 450.0);
    sim.ship.velocity = Vec2::ZERO;
    sim.ship.fuel = 10.0;

    sim.step(DT, &InputState::none());
    assert_eq!(sim.ship.fuel, 40.0);

    // Pushed out past the contact clearance, the next step refuels no
    // further.
    sim.step(DT, &InputState::none());
    assert_eq!(sim.ship.fuel, 40.0);
}

#[test]
fn test_asteroid_graze_at_threshold_speed() {
    let mut sim = empty_sim();
    sim.asteroids.push(body::asteroid(
        Vec2::new(400.0, 450.0),
        Vec2::ZERO,
        20.0,
        0.0,
        [1.0; 8],
    ));
    sim.ship.position = Vec2::new(425.0, 450.0);
    sim.ship.velocity = Vec2::new(0.0, 50.0);

    sim.step(DT, &InputState::none());

    assert!(sim.ship.alive);
    assert!(!sim.game_over());
}

#[test]
fn test_asteroid_crash_just_above_threshold() {
    let mut sim = empty_sim();
    sim.asteroids.push(body::asteroid(
        Vec2::new(400.0, 450.0),
        Vec2::ZERO,
        20.0,
        0.0,
        [1.0; 8],
    ));
    sim.ship.position = Vec2::new(425.0, 450.0);
    sim.ship.velocity = Vec2::new(0.0, 51.0);

    sim.step(DT, &InputState::none());

    assert!(!sim.ship.alive);
    assert!(sim.game_over());
    assert_eq!(sim.message, "Asteroid collision! Press R to retry.");
}

#[test]
fn test_slow_asteroid_contact_is_harmless() {
    let mut sim = empty_sim();
    sim.asteroids.push(body::asteroid(
        Vec2::new(400.0, 450.0),
        Vec2::ZERO,
        20.0,
        0.0,
        [1.0; 8],
    ));
    sim.ship.position = Vec2::new(425.0, 450.0);
    sim.ship.velocity = Vec2::new(0.0, 10.0);

    for _ in 0..10 {
        sim.step(DT, &InputState::none());
    }

    assert!(sim.ship.alive);
}

#[test]
fn test_landing_then_collection_last_message_wins() {
    // Planet landing and mineral pickup in the same frame: both apply,
    // the mineral message lands last.
    let mut sim = sim_with_planet();
    sim.ship.position = Vec2::new(471.0, 450.0);
    sim.ship.velocity = Vec2::ZERO;
    sim.ship.fuel = 50.0;
    sim.minerals
        .push(body::mineral(Vec2::new(480.0, 450.0), 0.0));

    sim.step(DT, &InputState::none());

    assert!(sim.ship.alive);
    assert_eq!(sim.ship.fuel, 80.0);
    assert_eq!(sim.collected, 1);
    assert!(sim.minerals[0].is_collected());
    assert_eq!(sim.message, "Mineral collected! (1/10)");
}

#[test]
fn test_crash_then_collection_same_frame() {
    // A fatal crash does not stop the rest of the frame's checks; the
    // collection still happens and its message wins.
    let mut sim = sim_with_planet();
    sim.ship.position = Vec2::new(471.0, 450.0);
    sim.ship.velocity = Vec2::new(0.0, 70.0);
    sim.minerals
        .push(body::mineral(Vec2::new(476.0, 450.0), 0.0));

    sim.step(DT, &InputState::none());

    assert!(sim.game_over());
    assert!(!sim.ship.alive);
    assert_eq!(sim.collected, 1);
    assert_eq!(sim.message, "Mineral collected! (1/10)");
}
