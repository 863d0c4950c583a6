//! Window input forwarded to the showcase as events

use bevy::prelude::*;
use bevy::window::{CursorMoved, PrimaryWindow};
use bevy_egui::EguiContexts;

use showcase_core::Event;

use crate::types::{ShowcaseState, ShowcaseSystems, UiLayout};

pub struct InputPlugin;

impl Plugin for InputPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<UiLayout>()
            .add_systems(Update, (track_viewport, forward_input).chain().in_set(ShowcaseSystems::Input));
    }
}

/// Report the window size whenever it changes, including the first frame
fn track_viewport(
    windows: Query<&Window, With<PrimaryWindow>>,
    mut showcase: ResMut<ShowcaseState>,
    mut ui_layout: ResMut<UiLayout>,
    mut last_size: Local<Vec2>,
) {
    let Ok(window) = windows.single() else {
        return;
    };
    let size = Vec2::new(window.width(), window.height());
    if (size - *last_size).abs().max_element() <= 1.0 {
        return;
    }

    *last_size = size;
    ui_layout.update_from_window(size.x, size.y);
    showcase.0.handle(Event::Resized {
        width: size.x,
        height: size.y,
    });
    tracing::debug!(width = size.x, height = size.y, "Viewport resized");
}

fn forward_input(
    mut showcase: ResMut<ShowcaseState>,
    mut cursor_moved: MessageReader<CursorMoved>,
    mouse_button: Res<ButtonInput<MouseButton>>,
    keyboard: Res<ButtonInput<KeyCode>>,
    mut contexts: EguiContexts,
) {
    // Check if egui wants the pointer - if so, clicks belong to the UI
    let egui_wants_pointer = contexts
        .ctx_mut()
        .map(|ctx| ctx.wants_pointer_input())
        .unwrap_or(false);

    if let Some(moved) = cursor_moved.read().last() {
        showcase.0.handle(Event::CursorMoved(moved.position));
    }

    if mouse_button.just_pressed(MouseButton::Left) && !egui_wants_pointer {
        if let Some(transition) = showcase.0.handle(Event::Click) {
            tracing::debug!(?transition, "Card clicked");
        }
    }

    if keyboard.just_pressed(KeyCode::Escape) {
        showcase.0.handle(Event::Back);
    }
}
