//! Shared egui widgets for the showcase overlays

use bevy_egui::egui;

use showcase_core::{DetailPanel, FrameMetrics};

use crate::types::UiLayout;

/// Render the detail panel contents; returns true when Back was clicked
pub fn render_detail_panel(ui: &mut egui::Ui, panel: &DetailPanel, ui_layout: &UiLayout) -> bool {
    let ui_scale = ui_layout.ui_scale();

    ui.heading(egui::RichText::new(&panel.name).size(24.0 * ui_scale));
    ui.separator();

    ui.label(egui::RichText::new(&panel.description).size(14.0 * ui_scale));
    ui.add_space(8.0);
    ui.hyperlink_to(
        egui::RichText::new("Logo").small().color(egui::Color32::GRAY),
        &panel.logo_url,
    );

    ui.add_space(16.0);
    ui.button(egui::RichText::new("← Back to gallery").size(14.0 * ui_scale))
        .clicked()
}

/// Render the diagnostics readout
pub fn render_metrics(ui: &mut egui::Ui, metrics: Option<&FrameMetrics>) {
    let Some(metrics) = metrics else {
        ui.label(egui::RichText::new("Sampling...").small().color(egui::Color32::GRAY));
        return;
    };

    egui::Grid::new("metrics_grid").num_columns(2).show(ui, |ui| {
        ui.label("FPS");
        ui.label(metrics.fps_label());
        ui.end_row();

        ui.label("Heap");
        ui.label(metrics.heap_label());
        ui.end_row();

        ui.label("Draw calls");
        ui.label(metrics.draw_calls_label());
        ui.end_row();
    });
}

/// Scale an overlay color's alpha by an animated opacity
pub fn faded(color: egui::Color32, opacity: f32) -> egui::Color32 {
    color.gamma_multiply(opacity.clamp(0.0, 1.0))
}
