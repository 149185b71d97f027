//! Core scene types and constants shared across the viewer.

use bevy::prelude::*;

/// System set for ordering per-frame interaction and camera systems.
///
/// Input handlers mutate the focus controller, the focus step turns pending
/// jumps into camera moves, and the camera step writes the final transform.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum ViewerSet {
    /// Keyboard and pointer handling
    Input,
    /// Applying focus transitions to the orbit controls
    Focus,
    /// Orbit-control integration and camera transform update
    Camera,
}

/// Scene units: the Earth has radius 1.0.
pub const EARTH_RADIUS: f32 = 1.0;

/// Axial tilt applied to the Earth group, in degrees (about Z).
pub const EARTH_TILT_DEG: f32 = -23.4;

/// Earth's mean diameter in kilometers, used to scale asteroid sizes.
pub const EARTH_DIAMETER_KM: f64 = 12742.0;

/// Moon distance from its pivot at the origin, in scene units.
pub const MOON_DISTANCE: f32 = 3.84;

/// Moon radius in scene units.
pub const MOON_RADIUS: f32 = 0.27;

/// Scene seconds added to the clock on every animation tick.
pub const TICK_SECONDS: f32 = 0.016;

/// Animation ticks per real second.
pub const TICK_HZ: f64 = 60.0;

/// Identifies a pickable body in the scene.
///
/// Used by picking, the info panel, and focus handling to tell the
/// singletons apart from catalog asteroids.
#[derive(Component, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BodyKind {
    /// The Earth surface mesh
    Earth,
    /// The Moon mesh
    Moon,
    /// An asteroid, identified by its catalog index
    Asteroid(usize),
}

/// Constant rotation about the local Y axis, in radians per tick.
#[derive(Component, Clone, Copy, Debug)]
pub struct Spin(pub f32);

/// Bounding sphere radius used for ray picking, in scene units.
#[derive(Component, Clone, Copy, Debug)]
pub struct PickRadius(pub f32);

/// Scene clock driving the day/night cycle.
///
/// Advances by a fixed amount per animation tick rather than by wall time,
/// so the cycle stays in step with the orbit updates. Scene time is derived
/// from the tick count so it never loses precision as it grows.
#[derive(Resource, Clone, Debug, Default)]
pub struct SceneClock {
    /// Number of animation ticks since startup
    pub ticks: u64,
}

impl SceneClock {
    /// Advance the clock by one tick.
    pub fn advance(&mut self) {
        self.ticks += 1;
    }

    /// Scene seconds since startup.
    pub fn elapsed_secs(&self) -> f64 {
        self.ticks as f64 * TICK_SECONDS as f64
    }

    /// Fraction of the current day elapsed, in `[0, 1)`.
    pub fn day_progress(&self, day_duration: f32) -> f32 {
        if day_duration <= 0.0 {
            return 0.0;
        }
        let day = day_duration as f64;
        (self.elapsed_secs().rem_euclid(day) / day) as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_clock_advances_per_tick() {
        let mut clock = SceneClock::default();
        for _ in 0..10 {
            clock.advance();
        }
        assert_eq!(clock.ticks, 10);
        assert_relative_eq!(clock.elapsed_secs(), 0.16, epsilon = 1e-6);
    }

    #[test]
    fn test_day_progress_wraps() {
        // 5625 ticks of 0.016 s is 90 s, half way through the second day.
        let clock = SceneClock { ticks: 5625 };
        assert_relative_eq!(clock.day_progress(60.0), 0.5, epsilon = 1e-5);
    }

    #[test]
    fn test_day_progress_keeps_moving_after_long_runs() {
        // Roughly a week of runtime at 60 Hz.
        let mut clock = SceneClock { ticks: 36_000_000 };
        let before = clock.day_progress(60.0);
        clock.advance();
        let after = clock.day_progress(60.0);
        assert_relative_eq!(after - before, TICK_SECONDS / 60.0, epsilon = 1e-5);
    }

    #[test]
    fn test_day_progress_degenerate_duration() {
        let clock = SceneClock { ticks: 750 };
        assert_eq!(clock.day_progress(0.0), 0.0);
    }
}
