//! Toggleable scene layers (clouds, night lights, asteroids).

use bevy::prelude::*;

use crate::types::ViewerSet;

/// A scene layer the user can show or hide.
#[derive(Component, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Layer {
    Clouds,
    NightLights,
    Asteroids,
}

impl Layer {
    pub fn label(&self) -> &'static str {
        match self {
            Layer::Clouds => "clouds",
            Layer::NightLights => "night lights",
            Layer::Asteroids => "near-Earth objects",
        }
    }
}

/// Visibility of each layer.
#[derive(Resource, Clone, Debug, PartialEq, Eq)]
pub struct LayerVisibility {
    pub clouds: bool,
    pub night_lights: bool,
    pub asteroids: bool,
}

impl Default for LayerVisibility {
    fn default() -> Self {
        Self {
            clouds: true,
            night_lights: true,
            asteroids: true,
        }
    }
}

impl LayerVisibility {
    pub fn is_visible(&self, layer: Layer) -> bool {
        match layer {
            Layer::Clouds => self.clouds,
            Layer::NightLights => self.night_lights,
            Layer::Asteroids => self.asteroids,
        }
    }

    /// Flip a layer and return its new visibility.
    pub fn toggle(&mut self, layer: Layer) -> bool {
        let flag = match layer {
            Layer::Clouds => &mut self.clouds,
            Layer::NightLights => &mut self.night_lights,
            Layer::Asteroids => &mut self.asteroids,
        };
        *flag = !*flag;
        *flag
    }
}

/// Plugin keeping layer entities in sync with `LayerVisibility`.
pub struct LayerPlugin;

impl Plugin for LayerPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<LayerVisibility>()
            .add_systems(Update, sync_layer_visibility.after(ViewerSet::Input));
    }
}

/// Apply layer flags to every entity tagged with a `Layer`.
pub fn sync_layer_visibility(
    layers: Res<LayerVisibility>,
    mut tagged: Query<(&Layer, &mut Visibility)>,
) {
    if !layers.is_changed() {
        return;
    }

    for (layer, mut visibility) in tagged.iter_mut() {
        let wanted = if layers.is_visible(*layer) {
            Visibility::Inherited
        } else {
            Visibility::Hidden
        };
        visibility.set_if_neq(wanted);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_twice_restores() {
        let mut layers = LayerVisibility::default();
        for layer in [Layer::Clouds, Layer::NightLights, Layer::Asteroids] {
            let before = layers.clone();
            assert!(!layers.toggle(layer));
            assert!(!layers.is_visible(layer));
            assert!(layers.toggle(layer));
            assert_eq!(layers, before);
        }
    }

    #[test]
    fn test_layers_are_independent() {
        let mut layers = LayerVisibility::default();
        layers.toggle(Layer::Clouds);
        assert!(layers.night_lights);
        assert!(layers.asteroids);
    }
}
