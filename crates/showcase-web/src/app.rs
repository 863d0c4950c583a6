//! Bevy application setup

use anyhow::Context;
use bevy::prelude::*;
use bevy_egui::EguiPlugin;
use bevy_picking::{DefaultPickingPlugins, prelude::MeshPickingPlugin};

use showcase_core::{Showcase, ShowcaseConfig};
use showcase_scene::{ShowcaseScenePlugin, ShowcaseState};

use crate::probe::ProbePlugin;
use crate::router::HashRouterPlugin;
use crate::ui::UiPlugin;

/// Build the showcase from the embedded configuration and run the Bevy app
pub fn run() -> anyhow::Result<()> {
    let config = ShowcaseConfig::builtin().context("Invalid built-in configuration")?;
    let showcase = Showcase::new(config).context("Failed to initialize showcase")?;

    let exit = App::new()
        .insert_resource(ClearColor(Color::srgb(0.02, 0.02, 0.05)))
        .add_plugins(DefaultPlugins
            .set(WindowPlugin {
                primary_window: Some(Window {
                    title: "Showcase".to_string(),
                    canvas: Some("#showcase-canvas".to_string()),
                    fit_canvas_to_parent: true,
                    prevent_default_event_handling: false,
                    ..default()
                }),
                ..default()
            })
            .set(AssetPlugin {
                // Logos are served next to index.html
                file_path: "".to_string(),
                // Don't look for .meta files - the static host doesn't have them
                meta_check: bevy::asset::AssetMetaCheck::Never,
                ..default()
            })
        )
        // These must be added BEFORE EguiPlugin so it can detect PickingPlugin
        .add_plugins(DefaultPickingPlugins)
        .add_plugins(MeshPickingPlugin)
        .add_plugins(EguiPlugin::default())
        .insert_resource(ShowcaseState(showcase))
        .add_plugins(ShowcaseScenePlugin)
        .add_plugins(HashRouterPlugin)
        .add_plugins(ProbePlugin)
        .add_plugins(UiPlugin)
        .run();

    tracing::info!(?exit, "Showcase exited");
    Ok(())
}
