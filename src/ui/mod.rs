//! egui overlay: controls help, camera-mode button, NEO list, info popup
//! and the quiz window.

mod controls;
mod info_panel;
mod neo_list;
mod quiz_panel;

use bevy::prelude::*;
use bevy_egui::EguiPrimaryContextPass;

pub use info_panel::InfoPanel;
pub use quiz_panel::QuizWindow;

/// Shared palette for the overlay panels.
pub(crate) mod colors {
    use bevy_egui::egui::Color32;

    pub const PANEL_BG: Color32 = Color32::from_rgba_premultiplied(20, 20, 30, 220);
    pub const PANEL_BORDER: Color32 = Color32::from_rgb(60, 60, 80);
    pub const TEXT: Color32 = Color32::from_rgb(220, 220, 230);
    pub const MUTED: Color32 = Color32::from_rgb(150, 150, 165);
    pub const ACCENT: Color32 = Color32::from_rgb(85, 153, 221);
    pub const SUCCESS: Color32 = Color32::from_rgb(85, 176, 85);
    pub const DANGER: Color32 = Color32::from_rgb(224, 85, 85);
}

/// Plugin that adds all UI systems.
pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<InfoPanel>()
            .init_resource::<QuizWindow>()
            .add_systems(
                EguiPrimaryContextPass,
                (
                    controls::controls_panel,
                    neo_list::neo_list_panel,
                    info_panel::info_panel,
                    quiz_panel::quiz_panel,
                ),
            );
    }
}
