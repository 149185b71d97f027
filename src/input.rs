//! Keyboard shortcuts and click-to-select.
//!
//! `C`, `N` and `A` toggle the cloud, night-light and asteroid layers; `Q`
//! opens or closes the quiz. A left click that does not drag selects the
//! nearest body under the cursor.

use bevy::prelude::*;
use bevy::window::PrimaryWindow;
use bevy_egui::EguiContexts;

use crate::camera::MainCamera;
use crate::catalog::InfoCard;
use crate::focus::{FocusController, FocusState};
use crate::layers::{Layer, LayerVisibility};
use crate::picking::nearest_hit;
use crate::render::asteroids::Asteroid;
use crate::types::{BodyKind, PickRadius, ViewerSet};
use crate::ui::{InfoPanel, QuizWindow};

/// Cursor travel, in logical pixels, beyond which a press counts as a drag.
pub const CLICK_SLOP: f32 = 5.0;

/// Layer toggled by each key.
pub const LAYER_KEYS: [(KeyCode, Layer); 3] = [
    (KeyCode::KeyC, Layer::Clouds),
    (KeyCode::KeyN, Layer::NightLights),
    (KeyCode::KeyA, Layer::Asteroids),
];

/// Tells clicks apart from camera drags.
#[derive(Resource, Default, Debug)]
pub struct ClickTracker {
    pressed_at: Option<Vec2>,
}

impl ClickTracker {
    pub fn press(&mut self, position: Vec2) {
        self.pressed_at = Some(position);
    }

    /// End a press. Returns true when the cursor stayed within the slop.
    pub fn release(&mut self, position: Vec2) -> bool {
        self.pressed_at
            .take()
            .is_some_and(|start| start.distance(position) <= CLICK_SLOP)
    }

    pub fn cancel(&mut self) {
        self.pressed_at = None;
    }
}

/// Plugin providing keyboard and mouse selection handling.
pub struct InputPlugin;

impl Plugin for InputPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ClickTracker>().add_systems(
            Update,
            (keyboard_shortcuts, pick_on_click).in_set(ViewerSet::Input),
        );
    }
}

/// Focus a body and show its info card.
///
/// Earth and Moon return the camera to the overview; asteroids get a
/// close-up framed from `size`.
pub fn select_body(
    kind: BodyKind,
    entity: Entity,
    size: f32,
    focus: &mut FocusController,
    panel: &mut InfoPanel,
) {
    match kind {
        BodyKind::Earth | BodyKind::Moon => focus.focus_earth(),
        BodyKind::Asteroid(_) => focus.focus_asteroid(entity, size),
    }
    match InfoCard::for_body(kind) {
        Some(card) => panel.show(card),
        None => panel.hide(),
    }
}

/// Apply a click's pick result: select the hit body, or close the card on
/// a miss.
pub fn apply_pick(
    hit: Option<(Entity, BodyKind, f32)>,
    focus: &mut FocusController,
    panel: &mut InfoPanel,
) {
    match hit {
        Some((entity, kind, size)) => select_body(kind, entity, size, focus, panel),
        None => panel.hide(),
    }
}

/// Flip between the Earth and the free camera.
///
/// Landing on the Earth shows its card; leaving it closes the card.
pub fn apply_camera_toggle(focus: &mut FocusController, panel: &mut InfoPanel) -> FocusState {
    let state = focus.toggle_camera_mode();
    match (state, InfoCard::for_body(BodyKind::Earth)) {
        (FocusState::Earth, Some(card)) => panel.show(card),
        _ => panel.hide(),
    }
    state
}

/// Handle layer and quiz shortcuts.
pub fn keyboard_shortcuts(
    keys: Res<ButtonInput<KeyCode>>,
    mut layers: ResMut<LayerVisibility>,
    mut quiz: ResMut<QuizWindow>,
) {
    for (key, layer) in LAYER_KEYS {
        if keys.just_pressed(key) {
            let visible = layers.toggle(layer);
            info!(
                "Layer {}: {}",
                layer.label(),
                if visible { "shown" } else { "hidden" }
            );
        }
    }

    if keys.just_pressed(KeyCode::KeyQ) {
        quiz.open = !quiz.open;
        info!("Quiz {}", if quiz.open { "opened" } else { "closed" });
    }
}

/// Select the nearest visible body under the cursor on a left click.
pub fn pick_on_click(
    mouse: Res<ButtonInput<MouseButton>>,
    window_query: Query<&Window, With<PrimaryWindow>>,
    camera_query: Query<(&Camera, &GlobalTransform), With<MainCamera>>,
    pickables: Query<(Entity, &BodyKind, &PickRadius, &GlobalTransform, &InheritedVisibility)>,
    asteroids: Query<&Asteroid>,
    mut tracker: ResMut<ClickTracker>,
    mut focus: ResMut<FocusController>,
    mut panel: ResMut<InfoPanel>,
    mut contexts: EguiContexts,
) {
    let Ok(window) = window_query.single() else {
        return;
    };
    let Some(cursor) = window.cursor_position() else {
        return;
    };

    if mouse.just_pressed(MouseButton::Left) {
        let over_ui = contexts
            .ctx_mut()
            .is_ok_and(|ctx| ctx.wants_pointer_input() || ctx.is_pointer_over_area());
        if over_ui {
            tracker.cancel();
        } else {
            tracker.press(cursor);
        }
    }

    if !mouse.just_released(MouseButton::Left) || !tracker.release(cursor) {
        return;
    }

    let Ok((camera, camera_transform)) = camera_query.single() else {
        return;
    };
    let Ok(ray) = camera.viewport_to_world(camera_transform, cursor) else {
        return;
    };

    let candidates = pickables
        .iter()
        .filter(|(.., visibility)| visibility.get())
        .map(|(entity, kind, radius, transform, _)| {
            ((entity, *kind), transform.translation(), radius.0)
        });

    let hit = nearest_hit(ray, candidates).map(|((entity, kind), distance)| {
        debug!("Picked {kind:?} at distance {distance:.3}");
        let size = asteroids.get(entity).map(|a| a.size).unwrap_or_default();
        (entity, kind, size)
    });
    apply_pick(hit, &mut focus, &mut panel);
}
