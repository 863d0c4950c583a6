//! UI overlays using bevy_egui

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts, EguiPrimaryContextPass};

use showcase_core::{AppState, Event};
use showcase_scene::ui::{faded, render_detail_panel, render_metrics};
use showcase_scene::{ShowcaseState, UiLayout};

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        // Main UI system runs in EguiPrimaryContextPass for proper input handling (bevy_egui 0.38+)
        app.add_systems(EguiPrimaryContextPass, ui_system);
    }
}

/// Offset of the hover label from the cursor, in points
const HOVER_LABEL_OFFSET: egui::Vec2 = egui::vec2(16.0, 16.0);

fn ui_system(
    mut contexts: EguiContexts,
    mut showcase: ResMut<ShowcaseState>,
    ui_layout: Res<UiLayout>,
    windows: Query<&Window>,
) {
    // Get the egui context - early return if not available
    let Ok(ctx) = contexts.ctx_mut() else { return };
    let ui_scale = ui_layout.ui_scale();
    let mut events = Vec::new();

    let ui_state = showcase.0.ui().clone();
    let visual = showcase.0.visual();

    // Landing header, fades out during the gallery transition
    if ui_state.header_visible || visual.header_opacity > 0.01 {
        let opacity = visual.header_opacity;
        egui::Area::new(egui::Id::new("landing_header"))
            .anchor(egui::Align2::CENTER_BOTTOM, egui::vec2(0.0, -80.0 * ui_scale))
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(
                        egui::RichText::new("Frontend Frameworks")
                            .size(40.0 * ui_scale)
                            .strong()
                            .color(faded(egui::Color32::WHITE, opacity)),
                    );
                    ui.label(
                        egui::RichText::new("A 3D tour of the modern web")
                            .size(16.0 * ui_scale)
                            .color(faded(egui::Color32::LIGHT_GRAY, opacity)),
                    );
                    ui.add_space(12.0);
                    if ui_state.header_visible
                        && ui.button(egui::RichText::new("Enter").size(18.0 * ui_scale)).clicked()
                    {
                        events.push(Event::Enter);
                    }
                });
            });
    }

    // Gallery container
    if ui_state.gallery_container_visible || visual.gallery_opacity > 0.01 {
        let opacity = visual.gallery_opacity;
        egui::Area::new(egui::Id::new("gallery_title"))
            .anchor(egui::Align2::CENTER_TOP, egui::vec2(0.0, 24.0))
            .interactable(false)
            .show(ctx, |ui| {
                ui.label(
                    egui::RichText::new("Choose a framework")
                        .size(24.0 * ui_scale)
                        .color(faded(egui::Color32::WHITE, opacity)),
                );
            });
    }

    // Hover label follows the cursor
    if let Some(label) = &ui_state.hover_label {
        let cursor = windows.single().ok().and_then(|w| w.cursor_position());
        if let Some(cursor) = cursor {
            egui::Area::new(egui::Id::new("hover_label"))
                .fixed_pos(egui::pos2(cursor.x, cursor.y) + HOVER_LABEL_OFFSET)
                .interactable(false)
                .show(ctx, |ui| {
                    egui::Frame::popup(ui.style()).show(ui, |ui| {
                        ui.label(egui::RichText::new(label).size(14.0 * ui_scale).strong());
                    });
                });
        }
    }

    // Detail panel
    if showcase.0.state() == AppState::Detail {
        if let Some(panel) = &ui_state.detail {
            egui::SidePanel::right("detail_panel")
                .default_width(ui_layout.detail_panel_width())
                .resizable(!ui_layout.is_mobile)
                .show(ctx, |ui| {
                    if render_detail_panel(ui, panel, &ui_layout) {
                        events.push(Event::Back);
                    }
                });
        }
    }

    // Diagnostics
    egui::Window::new("Metrics")
        .anchor(egui::Align2::LEFT_BOTTOM, egui::vec2(8.0, -8.0))
        .resizable(false)
        .collapsible(true)
        .default_open(false)
        .show(ctx, |ui| {
            render_metrics(ui, showcase.0.metrics());
            ui.label(
                egui::RichText::new(format!("State: {}", showcase.0.state()))
                    .small()
                    .color(egui::Color32::GRAY),
            );
        });

    for event in events {
        showcase.0.handle(event);
    }
}
