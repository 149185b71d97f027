//! Camera system for the viewer.
//!
//! Provides orbit controls (rotate, zoom, pan around a target) and applies
//! the framing requested by the focus controller.

use std::f32::consts::{FRAC_PI_2, TAU};

use bevy::{
    core_pipeline::tonemapping::Tonemapping,
    input::mouse::{AccumulatedMouseMotion, AccumulatedMouseScroll},
    prelude::*,
    window::PrimaryWindow,
};
use bevy_egui::EguiContexts;

use crate::focus::{CameraJump, FocusController, FocusState, tick_focus_controller};
use crate::render::asteroids::Asteroid;
use crate::types::ViewerSet;
use crate::ui::InfoPanel;

/// Camera distance from the Earth in the overview pose.
pub const OVERVIEW_DISTANCE: f32 = 3.0;

/// Near clipping plane. Close-ups sit a fraction of a unit from their target.
pub const NEAR_PLANE: f32 = 0.001;

/// Far clipping plane; the starfield shell ends well inside it.
pub const FAR_PLANE: f32 = 1000.0;

/// Fraction of the pending rotation applied per frame.
pub const DAMPING_FACTOR: f32 = 0.05;

/// Dolly ratio per scroll unit at zoom speed 1.
pub const ZOOM_BASE: f32 = 0.95;

/// Keeps the camera off the poles so `looking_at` stays well defined.
const PITCH_LIMIT: f32 = FRAC_PI_2 - 0.01;

/// Marker component for the main camera.
#[derive(Component)]
pub struct MainCamera;

/// Limits and speeds for each camera mode.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ControlPreset {
    /// Bounded orbit around the Earth.
    Overview,
    /// Unbounded orbit with panning.
    Free,
    /// Orbit around a tracked asteroid.
    CloseUp,
}

/// Orbit-style camera controls around a target point.
///
/// The camera sits at `target + distance * dir(yaw, pitch)`. Rotation input
/// accumulates into a pending velocity that is applied with damping.
#[derive(Component, Clone, Debug, PartialEq)]
pub struct OrbitControls {
    pub target: Vec3,
    pub distance: f32,
    /// Azimuth about +Y; zero looks down -Z from +Z.
    pub yaw: f32,
    /// Elevation above the XZ plane.
    pub pitch: f32,
    pub min_distance: f32,
    pub max_distance: f32,
    pub rotate_speed: f32,
    pub zoom_speed: f32,
    pub enable_pan: bool,
    pub damping: f32,
    yaw_velocity: f32,
    pitch_velocity: f32,
}

impl Default for OrbitControls {
    fn default() -> Self {
        let mut controls = Self {
            target: Vec3::ZERO,
            distance: OVERVIEW_DISTANCE,
            yaw: 0.0,
            pitch: 0.0,
            min_distance: 0.0,
            max_distance: f32::INFINITY,
            rotate_speed: 1.0,
            zoom_speed: 1.0,
            enable_pan: false,
            damping: DAMPING_FACTOR,
            yaw_velocity: 0.0,
            pitch_velocity: 0.0,
        };
        controls.apply_preset(ControlPreset::Overview);
        controls
    }
}

impl OrbitControls {
    /// Switch limits and speeds to a preset. Pose is left untouched apart
    /// from clamping the distance into the new range.
    pub fn apply_preset(&mut self, preset: ControlPreset) {
        let (min, max, rotate, zoom, pan) = match preset {
            ControlPreset::Overview => (1.5, 4.0, 0.3, 0.5, false),
            ControlPreset::Free => (0.0, f32::INFINITY, 0.5, 1.0, true),
            ControlPreset::CloseUp => (0.0, f32::INFINITY, 0.5, 1.0, false),
        };
        self.min_distance = min;
        self.max_distance = max;
        self.rotate_speed = rotate;
        self.zoom_speed = zoom;
        self.enable_pan = pan;
        self.distance = self.clamp_distance(self.distance);
    }

    /// Place the camera `distance` in front of `target` along +Z and stop
    /// any pending rotation.
    pub fn reset_pose(&mut self, target: Vec3, distance: f32) {
        self.target = target;
        self.distance = self.clamp_distance(distance);
        self.yaw = 0.0;
        self.pitch = 0.0;
        self.yaw_velocity = 0.0;
        self.pitch_velocity = 0.0;
    }

    /// Queue a rotation from a pointer drag of `delta` pixels in a viewport
    /// `viewport_height` pixels tall.
    pub fn rotate(&mut self, delta: Vec2, viewport_height: f32) {
        if viewport_height <= 0.0 {
            return;
        }
        let scale = TAU / viewport_height * self.rotate_speed;
        self.yaw_velocity -= delta.x * scale;
        self.pitch_velocity += delta.y * scale;
    }

    /// Dolly toward (positive) or away from (negative) the target.
    pub fn zoom(&mut self, scroll: f32) {
        let factor = ZOOM_BASE.powf(self.zoom_speed * scroll);
        self.distance = self.clamp_distance(self.distance * factor);
    }

    /// Move the target in the camera plane by a pointer drag of `delta` pixels.
    pub fn pan(&mut self, delta: Vec2, viewport_height: f32, fov_radians: f32, rotation: Quat) {
        if !self.enable_pan || viewport_height <= 0.0 {
            return;
        }
        let world_per_pixel = 2.0 * self.distance * (fov_radians * 0.5).tan() / viewport_height;
        let right = rotation * Vec3::X;
        let up = rotation * Vec3::Y;
        self.target += (-right * delta.x + up * delta.y) * world_per_pixel;
    }

    /// Apply one frame of damped rotation.
    pub fn update(&mut self) {
        self.yaw = (self.yaw + self.yaw_velocity * self.damping).rem_euclid(TAU);
        self.pitch = (self.pitch + self.pitch_velocity * self.damping)
            .clamp(-PITCH_LIMIT, PITCH_LIMIT);
        self.yaw_velocity *= 1.0 - self.damping;
        self.pitch_velocity *= 1.0 - self.damping;
    }

    /// Camera position for the current pose.
    pub fn eye(&self) -> Vec3 {
        let offset = Vec3::new(
            self.pitch.cos() * self.yaw.sin(),
            self.pitch.sin(),
            self.pitch.cos() * self.yaw.cos(),
        );
        self.target + offset * self.distance
    }

    /// Camera transform looking at the target.
    pub fn transform(&self) -> Transform {
        Transform::from_translation(self.eye()).looking_at(self.target, Vec3::Y)
    }

    fn clamp_distance(&self, distance: f32) -> f32 {
        // Never collapse onto the target, even when the preset allows zero.
        distance.clamp(self.min_distance.max(NEAR_PLANE), self.max_distance)
    }
}

/// Plugin providing camera functionality.
pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<FocusController>()
            .init_resource::<InfoPanel>()
            .configure_sets(
                Update,
                (ViewerSet::Input, ViewerSet::Focus, ViewerSet::Camera).chain(),
            )
            .add_systems(Startup, setup_camera)
            .add_systems(
                Update,
                (
                    (tick_focus_controller, apply_focus_jump, follow_focus_target)
                        .chain()
                        .in_set(ViewerSet::Focus),
                    (orbit_controls_input, update_camera_transform)
                        .chain()
                        .in_set(ViewerSet::Camera),
                ),
            );
    }
}

/// Spawn the main camera in the overview pose.
pub fn setup_camera(mut commands: Commands, focus: Res<FocusController>) {
    let controls = OrbitControls::default();
    commands.spawn((
        Camera3d::default(),
        Projection::from(PerspectiveProjection {
            fov: focus.fov_degrees().to_radians(),
            near: NEAR_PLANE,
            far: FAR_PLANE,
            ..default()
        }),
        Tonemapping::AcesFitted,
        controls.transform(),
        controls,
        MainCamera,
    ));
}

/// Turn a pending focus jump into new control limits and pose.
///
/// A close-up on an asteroid that is gone or hidden falls back to the Earth
/// and closes its card instead of framing it.
pub fn apply_focus_jump(
    mut focus: ResMut<FocusController>,
    mut panel: ResMut<InfoPanel>,
    mut cameras: Query<&mut OrbitControls, With<MainCamera>>,
    asteroids: Query<(&Transform, &InheritedVisibility), With<Asteroid>>,
) {
    let Some(jump) = focus.take_jump() else {
        return;
    };

    let Ok(mut controls) = cameras.single_mut() else {
        return;
    };

    match jump {
        CameraJump::Overview => {
            controls.apply_preset(ControlPreset::Overview);
            controls.reset_pose(Vec3::ZERO, OVERVIEW_DISTANCE);
        }
        CameraJump::Free => controls.apply_preset(ControlPreset::Free),
        CameraJump::CloseUp { target, distance } => {
            let transform = match asteroids.get(target) {
                Ok((transform, visibility)) if visibility.get() => transform,
                Ok(_) => {
                    debug!("Focus target {target} is hidden");
                    focus.focus_earth();
                    panel.hide();
                    return;
                }
                Err(_) => {
                    warn!("Focus target {target} is not an asteroid");
                    focus.focus_earth();
                    panel.hide();
                    return;
                }
            };
            controls.apply_preset(ControlPreset::CloseUp);
            controls.reset_pose(transform.translation, distance);
        }
    }
}

/// Keep the orbit target on the focused body as it moves.
pub fn follow_focus_target(
    mut focus: ResMut<FocusController>,
    mut panel: ResMut<InfoPanel>,
    mut cameras: Query<&mut OrbitControls, With<MainCamera>>,
    asteroids: Query<(&Transform, &InheritedVisibility), With<Asteroid>>,
) {
    let Ok(mut controls) = cameras.single_mut() else {
        return;
    };

    match focus.state() {
        FocusState::Earth => controls.target = Vec3::ZERO,
        FocusState::Asteroid(entity) => match asteroids.get(entity) {
            Ok((transform, visibility)) if visibility.get() => {
                controls.target = transform.translation;
            }
            _ => {
                if focus.release_asteroid(entity) {
                    panel.hide();
                }
            }
        },
        FocusState::Free => {}
    }
}

/// Mouse input for the orbit controls: left drag rotates, right drag pans,
/// the wheel zooms.
pub fn orbit_controls_input(
    mouse_buttons: Res<ButtonInput<MouseButton>>,
    mouse_motion: Res<AccumulatedMouseMotion>,
    mouse_scroll: Res<AccumulatedMouseScroll>,
    focus: Res<FocusController>,
    window_query: Query<&Window, With<PrimaryWindow>>,
    mut cameras: Query<(&mut OrbitControls, &Transform, &Projection), With<MainCamera>>,
    mut contexts: EguiContexts,
) {
    // Automatic camera moves own the camera until the lock expires.
    if focus.controls_locked() {
        return;
    }

    if let Ok(ctx) = contexts.ctx_mut()
        && (ctx.wants_pointer_input() || ctx.is_pointer_over_area())
    {
        return;
    }

    let Ok(window) = window_query.single() else {
        return;
    };

    let Ok((mut controls, transform, projection)) = cameras.single_mut() else {
        return;
    };

    let height = window.height();

    if mouse_buttons.pressed(MouseButton::Left) && mouse_motion.delta != Vec2::ZERO {
        controls.rotate(mouse_motion.delta, height);
    }

    if mouse_buttons.pressed(MouseButton::Right) && mouse_motion.delta != Vec2::ZERO {
        let fov = match projection {
            Projection::Perspective(perspective) => perspective.fov,
            _ => return,
        };
        controls.pan(mouse_motion.delta, height, fov, transform.rotation);
    }

    if mouse_scroll.delta.y != 0.0 {
        controls.zoom(mouse_scroll.delta.y);
    }
}

/// Integrate the controls and write the camera transform and field of view.
pub fn update_camera_transform(
    focus: Res<FocusController>,
    mut cameras: Query<(&mut OrbitControls, &mut Transform, &mut Projection), With<MainCamera>>,
) {
    let Ok((mut controls, mut transform, mut projection)) = cameras.single_mut() else {
        return;
    };

    controls.update();
    *transform = controls.transform();

    if let Projection::Perspective(ref mut perspective) = *projection {
        let fov = focus.fov_degrees().to_radians();
        if (perspective.fov - fov).abs() > f32::EPSILON {
            perspective.fov = fov;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_overview_pose() {
        let controls = OrbitControls::default();
        assert_relative_eq!(controls.eye().z, OVERVIEW_DISTANCE);
        assert_eq!(controls.min_distance, 1.5);
        assert_eq!(controls.max_distance, 4.0);
        assert!(!controls.enable_pan);
    }

    #[test]
    fn test_zoom_respects_limits() {
        let mut controls = OrbitControls::default();
        for _ in 0..200 {
            controls.zoom(1.0);
        }
        assert_relative_eq!(controls.distance, 1.5);
        for _ in 0..200 {
            controls.zoom(-1.0);
        }
        assert_relative_eq!(controls.distance, 4.0);
    }

    #[test]
    fn test_free_preset_unbounds_distance() {
        let mut controls = OrbitControls::default();
        controls.apply_preset(ControlPreset::Free);
        for _ in 0..100 {
            controls.zoom(-1.0);
        }
        assert!(controls.distance > 4.0);
        assert!(controls.enable_pan);
    }

    #[test]
    fn test_rotation_is_damped() {
        let mut controls = OrbitControls::default();
        controls.rotate(Vec2::new(-100.0, 0.0), 800.0);
        controls.update();
        let first = controls.yaw;
        assert!(first > 0.0);
        controls.update();
        // Second frame still moves, but by less.
        assert!(controls.yaw - first < first);
        assert!(controls.yaw > first);
    }

    #[test]
    fn test_pitch_is_clamped() {
        let mut controls = OrbitControls::default();
        controls.rotate(Vec2::new(0.0, 1.0e6), 800.0);
        for _ in 0..100 {
            controls.update();
        }
        assert!(controls.pitch <= PITCH_LIMIT);
        let transform = controls.transform();
        assert!(transform.translation.is_finite());
    }

    #[test]
    fn test_pan_disabled_in_overview() {
        let mut controls = OrbitControls::default();
        controls.pan(Vec2::new(50.0, 50.0), 800.0, 1.0, Quat::IDENTITY);
        assert_eq!(controls.target, Vec3::ZERO);

        controls.apply_preset(ControlPreset::Free);
        controls.pan(Vec2::new(50.0, 0.0), 800.0, 1.0, Quat::IDENTITY);
        assert!(controls.target.x < 0.0);
    }

    #[test]
    fn test_close_up_pose() {
        let mut controls = OrbitControls::default();
        controls.apply_preset(ControlPreset::CloseUp);
        controls.reset_pose(Vec3::new(3.0, 0.5, -1.0), 0.2);
        let eye = controls.eye();
        assert_relative_eq!(eye.x, 3.0);
        assert_relative_eq!(eye.y, 0.5);
        assert_relative_eq!(eye.z, -0.8, epsilon = 1e-6);
    }
}
