//! Shared resources, markers and system sets

use bevy::prelude::*;
use showcase_core::Showcase;

/// The showcase context, owned by the Bevy world
#[derive(Resource)]
pub struct ShowcaseState(pub Showcase);

/// JS heap in use, reported by the host platform when it can
#[derive(Debug, Clone, Copy, Default, Resource)]
pub struct HeapUsage(pub Option<u64>);

/// Per-frame ordering: input is forwarded to the showcase, the showcase
/// ticks, then its visual state is copied onto the scene
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShowcaseSystems {
    Input,
    Tick,
    Apply,
}

/// Marker component for the main camera
#[derive(Component)]
pub struct MainCamera;

/// The landing emblem
#[derive(Component)]
pub struct Emblem;

/// Parent of all gallery cards; rotates as a whole
#[derive(Component)]
pub struct GalleryGroup;

/// A gallery card body
#[derive(Component)]
pub struct GalleryCard {
    pub index: usize,
    /// Emissive color at intensity 1.0
    pub accent: LinearRgba,
}

/// A mesh whose ray hits count as hits on the card with this index
#[derive(Component, Clone, Copy)]
pub struct CardHitbox(pub usize);

/// Parent of the background stars
#[derive(Component)]
pub struct Starfield;

/// UI layout detection and responsive settings
#[derive(Debug, Clone, Resource)]
pub struct UiLayout {
    pub is_mobile: bool,
    pub screen_width: f32,
    pub screen_height: f32,
}

impl Default for UiLayout {
    fn default() -> Self {
        Self {
            is_mobile: false,
            screen_width: 1920.0,
            screen_height: 1080.0,
        }
    }
}

impl UiLayout {
    pub fn update_from_window(&mut self, width: f32, height: f32) {
        self.screen_width = width;
        self.screen_height = height;
        // Consider mobile if width < 800 or in portrait orientation
        self.is_mobile = width < 800.0 || (height > width * 1.2);
    }

    pub fn detail_panel_width(&self) -> f32 {
        if self.is_mobile {
            self.screen_width * 0.85
        } else {
            360.0
        }
    }

    pub fn ui_scale(&self) -> f32 {
        if self.is_mobile { 1.2 } else { 1.0 }
    }
}
