//! Circular orbit kinematics for asteroids.
//!
//! Orbits are decorative: each asteroid circles the Earth at a fixed radius
//! with an angular speed that falls off as `1/√r`, a qualitative nod to
//! Kepler's third law rather than a physical model.

use std::f64::consts::{FRAC_PI_6, TAU};

use bevy::prelude::*;
use rand::Rng;

/// Orbit radius of an object at zero approach distance, in scene units.
pub const BASE_ORBIT_RADIUS: f64 = 2.5;

/// Scene units per AU of approach distance.
pub const ORBIT_DISTANCE_SCALE: f64 = 200.0;

/// Angular speed numerator: `speed = ORBIT_SPEED_FACTOR / √radius` rad/tick.
pub const ORBIT_SPEED_FACTOR: f64 = 0.0005;

/// Upper bound (exclusive) for random orbit inclination.
pub const MAX_INCLINATION: f64 = FRAC_PI_6;

/// Transient orbit state of one asteroid, advanced once per tick.
#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct OrbitState {
    /// Orbit radius in scene units.
    pub radius: f64,
    /// Angle advance per tick, in radians.
    pub angular_speed: f64,
    /// Current angle in `[0, 2π)`.
    pub angle: f64,
    /// Tilt of the orbit plane about the Z axis.
    pub inclination: f64,
}

impl OrbitState {
    /// Build an orbit for an object at `distance_au` with the given phase and tilt.
    pub fn from_distance(distance_au: f64, angle: f64, inclination: f64) -> Self {
        let radius = orbit_radius(distance_au);
        Self {
            radius,
            angular_speed: angular_speed(radius),
            angle: angle.rem_euclid(TAU),
            inclination,
        }
    }

    /// Build an orbit with a random starting angle and inclination.
    pub fn random(distance_au: f64, rng: &mut impl Rng) -> Self {
        let angle = rng.random_range(0.0..TAU);
        let inclination = rng.random_range(0.0..MAX_INCLINATION);
        Self::from_distance(distance_au, angle, inclination)
    }

    /// Advance by one tick.
    pub fn tick(&mut self) {
        self.angle = (self.angle + self.angular_speed).rem_euclid(TAU);
    }

    /// Angle after `ticks` further ticks, without mutating the state.
    pub fn angle_after(&self, ticks: u64) -> f64 {
        (self.angle + ticks as f64 * self.angular_speed).rem_euclid(TAU)
    }

    /// Position relative to the Earth.
    ///
    /// The orbit lies in the XZ plane, tilted about Z by the inclination.
    pub fn position(&self) -> Vec3 {
        let x = self.radius * self.angle.cos();
        let z = self.radius * self.angle.sin();
        Vec3::new(
            (x * self.inclination.cos()) as f32,
            (x * self.inclination.sin()) as f32,
            z as f32,
        )
    }
}

/// Orbit radius for an approach distance in AU.
pub fn orbit_radius(distance_au: f64) -> f64 {
    BASE_ORBIT_RADIUS + distance_au * ORBIT_DISTANCE_SCALE
}

/// Angular speed per tick for an orbit radius.
pub fn angular_speed(radius: f64) -> f64 {
    ORBIT_SPEED_FACTOR / radius.sqrt()
}

/// Shortest distance between two angles on the circle.
pub fn angle_distance(a: f64, b: f64) -> f64 {
    let d = (a - b).rem_euclid(TAU);
    d.min(TAU - d)
}
