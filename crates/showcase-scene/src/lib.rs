//! Showcase Scene - Bevy rendering of the showcase
//!
//! Owns a [`ShowcaseState`] resource and wires it into the Bevy frame:
//! window input becomes showcase events, the showcase ticks with mesh ray
//! casts for hover picking, and its visual state is copied onto the camera,
//! emblem, gallery cards and starfield.

pub mod camera;
pub mod input;
pub mod picking;
pub mod scene;
pub mod types;
pub mod ui;
pub mod visuals;

use bevy::prelude::*;

/// Plugin that sets up the 3D scene and drives the showcase each frame.
/// Expects a [`ShowcaseState`] resource to be inserted first.
pub struct ShowcaseScenePlugin;

impl Plugin for ShowcaseScenePlugin {
    fn build(&self, app: &mut App) {
        app.configure_sets(
            Update,
            (ShowcaseSystems::Input, ShowcaseSystems::Tick, ShowcaseSystems::Apply).chain(),
        )
        .add_plugins(scene::SceneSetupPlugin)
        .add_plugins(input::InputPlugin)
        .add_plugins(picking::PickingDriverPlugin)
        .add_plugins(camera::CameraPlugin)
        .add_plugins(visuals::VisualsPlugin);
    }
}

// Re-export commonly used types
pub use types::*;
