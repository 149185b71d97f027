//! Camera focus state machine.
//!
//! The focus controller is the single owner of "what is the camera looking
//! at". Input handlers call its transition methods; the camera systems read
//! the current state every frame and consume pending jumps.

use std::time::Duration;

use bevy::prelude::*;

/// Field of view of the planet overview, in degrees.
pub const DEFAULT_FOV_DEG: f32 = 75.0;

/// Close-up field of view for an asteroid of reference size, in degrees.
pub const BASE_FOCUS_FOV_DEG: f32 = 5.0;

/// Narrowest close-up field of view, in degrees.
pub const MIN_FOCUS_FOV_DEG: f32 = 0.1;

/// Widest close-up field of view, in degrees.
pub const MAX_FOCUS_FOV_DEG: f32 = 10.0;

/// Asteroid radius at which the close-up uses `BASE_FOCUS_FOV_DEG`.
pub const REFERENCE_SIZE: f32 = 0.01;

/// Smallest size used when computing the size factor.
pub const MIN_SIZE_FOR_FOV: f32 = 0.001;

/// Camera distance from a focused asteroid, in multiples of its radius.
pub const CLOSE_UP_DISTANCE_FACTOR: f32 = 20.0;

/// How long manual control stays disabled after an automatic camera jump.
pub const CONTROL_LOCK_SECS: f32 = 1.0;

/// What the camera is centered on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FocusState {
    /// Planet overview, orbiting the Earth.
    Earth,
    /// Close-up on a single asteroid.
    Asteroid(Entity),
    /// Unbounded free camera.
    Free,
}

/// Coarse camera mode derived from the focus state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewMode {
    Overview,
    Focused,
    Free,
}

/// A camera move requested by a focus transition, applied by the camera systems.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CameraJump {
    /// Reset to the overview pose around the Earth.
    Overview,
    /// Switch the orbit controls to unbounded free flight.
    Free,
    /// Frame the given asteroid from `distance` away.
    CloseUp { target: Entity, distance: f32 },
}

/// Resource owning the focus state and the post-jump control lock.
#[derive(Resource, Debug)]
pub struct FocusController {
    state: FocusState,
    fov_degrees: f32,
    pending: Option<CameraJump>,
    control_lock: Option<Timer>,
}

impl Default for FocusController {
    fn default() -> Self {
        Self {
            state: FocusState::Earth,
            fov_degrees: DEFAULT_FOV_DEG,
            pending: None,
            control_lock: None,
        }
    }
}

impl FocusController {
    pub fn state(&self) -> FocusState {
        self.state
    }

    pub fn view_mode(&self) -> ViewMode {
        match self.state {
            FocusState::Earth => ViewMode::Overview,
            FocusState::Asteroid(_) => ViewMode::Focused,
            FocusState::Free => ViewMode::Free,
        }
    }

    /// The focused asteroid, if any.
    pub fn focused_asteroid(&self) -> Option<Entity> {
        match self.state {
            FocusState::Asteroid(entity) => Some(entity),
            _ => None,
        }
    }

    /// Target field of view in degrees.
    pub fn fov_degrees(&self) -> f32 {
        self.fov_degrees
    }

    /// Whether manual camera control is currently suppressed.
    pub fn controls_locked(&self) -> bool {
        self.control_lock.is_some()
    }

    /// Return to the Earth overview.
    pub fn focus_earth(&mut self) {
        self.state = FocusState::Earth;
        self.fov_degrees = DEFAULT_FOV_DEG;
        self.pending = Some(CameraJump::Overview);
        self.control_lock = None;
        info!("Camera focus: Earth");
    }

    /// Jump to a close-up of an asteroid with the given rendered radius.
    pub fn focus_asteroid(&mut self, target: Entity, size: f32) {
        self.state = FocusState::Asteroid(target);
        self.fov_degrees = close_up_fov(size);
        self.pending = Some(CameraJump::CloseUp {
            target,
            distance: size * CLOSE_UP_DISTANCE_FACTOR,
        });
        self.control_lock = Some(Timer::from_seconds(CONTROL_LOCK_SECS, TimerMode::Once));
        info!("Camera focus: asteroid {target} (fov {:.2}°)", self.fov_degrees);
    }

    /// Camera-mode button: overview goes free, anything else returns to the Earth.
    pub fn toggle_camera_mode(&mut self) -> FocusState {
        match self.state {
            FocusState::Earth => {
                self.state = FocusState::Free;
                self.pending = Some(CameraJump::Free);
                self.control_lock = None;
                info!("Camera focus: free");
            }
            FocusState::Asteroid(_) | FocusState::Free => self.focus_earth(),
        }
        self.state
    }

    /// Drop focus on an asteroid that no longer exists or is hidden.
    /// Returns true when the focus moved back to the Earth.
    pub fn release_asteroid(&mut self, entity: Entity) -> bool {
        if self.state != FocusState::Asteroid(entity) {
            return false;
        }
        self.focus_earth();
        true
    }

    /// Advance the control lock timer.
    pub fn tick(&mut self, delta: Duration) {
        if let Some(timer) = self.control_lock.as_mut() {
            timer.tick(delta);
            if timer.is_finished() {
                self.control_lock = None;
                debug!("Manual camera control re-enabled");
            }
        }
    }

    /// Take the pending camera jump, if any.
    pub fn take_jump(&mut self) -> Option<CameraJump> {
        self.pending.take()
    }
}

/// Close-up field of view in degrees for an asteroid of the given radius.
///
/// Smaller objects get a narrower view so they fill a similar share of the
/// screen.
pub fn close_up_fov(size: f32) -> f32 {
    let size_factor = size.max(MIN_SIZE_FOR_FOV) / REFERENCE_SIZE;
    (BASE_FOCUS_FOV_DEG / size_factor).clamp(MIN_FOCUS_FOV_DEG, MAX_FOCUS_FOV_DEG)
}

/// System advancing the control lock with frame time.
pub fn tick_focus_controller(time: Res<Time>, mut focus: ResMut<FocusController>) {
    if focus.controls_locked() {
        focus.tick(time.delta());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn entity(index: u32) -> Entity {
        let mut world = World::new();
        let mut last = world.spawn_empty().id();
        for _ in 0..index {
            last = world.spawn_empty().id();
        }
        last
    }

    #[test]
    fn test_starts_in_overview() {
        let focus = FocusController::default();
        assert_eq!(focus.state(), FocusState::Earth);
        assert_eq!(focus.view_mode(), ViewMode::Overview);
        assert_eq!(focus.fov_degrees(), DEFAULT_FOV_DEG);
        assert!(!focus.controls_locked());
    }

    #[test]
    fn test_close_up_fov() {
        assert_relative_eq!(close_up_fov(0.01), 5.0);
        assert_relative_eq!(close_up_fov(0.02), 2.5);
        // Tiny objects clamp at the widest view.
        assert_relative_eq!(close_up_fov(0.0001), MAX_FOCUS_FOV_DEG);
        // Huge objects clamp at the narrowest view.
        assert_relative_eq!(close_up_fov(10.0), MIN_FOCUS_FOV_DEG);
    }

    #[test]
    fn test_focus_asteroid_then_earth_restores_fov() {
        let mut focus = FocusController::default();
        let target = entity(5);

        focus.focus_asteroid(target, 0.01);
        assert_eq!(focus.state(), FocusState::Asteroid(target));
        assert_eq!(focus.view_mode(), ViewMode::Focused);
        assert_relative_eq!(focus.fov_degrees(), 5.0);
        let Some(CameraJump::CloseUp {
            target: jump_target,
            distance,
        }) = focus.take_jump()
        else {
            panic!("expected a close-up jump");
        };
        assert_eq!(jump_target, target);
        assert_relative_eq!(distance, 0.2, epsilon = 1e-6);

        focus.focus_earth();
        assert_eq!(focus.fov_degrees(), DEFAULT_FOV_DEG);
        assert_eq!(focus.take_jump(), Some(CameraJump::Overview));
        assert_eq!(focus.take_jump(), None);
    }

    #[test]
    fn test_only_one_asteroid_focused() {
        let mut focus = FocusController::default();
        focus.focus_asteroid(entity(1), 0.01);
        focus.focus_asteroid(entity(2), 0.01);
        assert_eq!(focus.focused_asteroid(), Some(entity(2)));
    }

    #[test]
    fn test_control_lock_expires_after_one_second() {
        let mut focus = FocusController::default();
        focus.focus_asteroid(entity(1), 0.01);
        assert!(focus.controls_locked());

        focus.tick(Duration::from_millis(600));
        assert!(focus.controls_locked());

        focus.tick(Duration::from_millis(400));
        assert!(!focus.controls_locked());
    }

    #[test]
    fn test_toggle_camera_mode_cycle() {
        let mut focus = FocusController::default();
        assert_eq!(focus.toggle_camera_mode(), FocusState::Free);
        assert_eq!(focus.take_jump(), Some(CameraJump::Free));
        // Free keeps whatever field of view was active.
        assert_eq!(focus.fov_degrees(), DEFAULT_FOV_DEG);

        assert_eq!(focus.toggle_camera_mode(), FocusState::Earth);

        focus.focus_asteroid(entity(3), 0.05);
        assert_eq!(focus.toggle_camera_mode(), FocusState::Earth);
        assert_eq!(focus.fov_degrees(), DEFAULT_FOV_DEG);
        assert!(!focus.controls_locked());
    }

    #[test]
    fn test_release_asteroid() {
        let mut focus = FocusController::default();
        focus.focus_asteroid(entity(4), 0.01);
        assert!(!focus.release_asteroid(entity(9)));
        assert_eq!(focus.state(), FocusState::Asteroid(entity(4)));
        assert!(focus.release_asteroid(entity(4)));
        assert_eq!(focus.state(), FocusState::Earth);
        assert!(!focus.release_asteroid(entity(4)));
    }
}
