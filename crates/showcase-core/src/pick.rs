//! Hover picking for gallery cards
//!
//! Ray intersection itself is delegated to a [`RayCaster`] (mesh ray casts in
//! the renderer, fakes in tests). This module picks the nearest card among
//! the hits and turns hover changes into paired exit/enter events.

use bevy_math::Vec2;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PickError {
    #[error("No camera available for picking")]
    NoCamera,
    #[error("Ray cast failed: {0}")]
    Backend(String),
}

/// A ray hit on a gallery card
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayHit {
    /// Card (framework) index
    pub card: usize,
    /// Distance along the ray
    pub distance: f32,
}

/// Casts a ray from the active camera through a normalized pointer position
pub trait RayCaster {
    fn cast(&mut self, pointer: Vec2) -> Result<Vec<RayHit>, PickError>;
}

/// Nearest card along the ray; hits behind the origin or with a NaN
/// distance are ignored
pub fn nearest_card(hits: &[RayHit]) -> Option<usize> {
    hits.iter()
        .filter(|hit| hit.distance >= 0.0)
        .min_by(|a, b| a.distance.total_cmp(&b.distance))
        .map(|hit| hit.card)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HoverChange {
    Exit(usize),
    Enter(usize),
}

/// Tracks the hovered card between frames
#[derive(Debug, Clone, Default)]
pub struct HoverTracker {
    hovered: Option<usize>,
}

impl HoverTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn hovered(&self) -> Option<usize> {
        self.hovered
    }

    /// Compare against the previous frame; an exit always precedes the
    /// enter of the new card
    pub fn update(&mut self, candidate: Option<usize>) -> Vec<HoverChange> {
        if candidate == self.hovered {
            return Vec::new();
        }

        let mut changes = Vec::with_capacity(2);
        if let Some(previous) = self.hovered {
            changes.push(HoverChange::Exit(previous));
        }
        if let Some(next) = candidate {
            changes.push(HoverChange::Enter(next));
        }
        self.hovered = candidate;
        changes
    }

    pub fn clear(&mut self) -> Option<HoverChange> {
        self.hovered.take().map(HoverChange::Exit)
    }
}

/// Convert a cursor position in window pixels (origin top-left) into
/// normalized device coordinates in [-1, 1], +Y up
pub fn normalize_pointer(cursor: Vec2, viewport: Vec2) -> Option<Vec2> {
    if viewport.x <= 0.0 || viewport.y <= 0.0 {
        return None;
    }
    let x = cursor.x / viewport.x * 2.0 - 1.0;
    let y = -(cursor.y / viewport.y * 2.0 - 1.0);
    Some(Vec2::new(x, y).clamp(Vec2::NEG_ONE, Vec2::ONE))
}

/// Inverse of [`normalize_pointer`]
pub fn pointer_to_viewport(pointer: Vec2, viewport: Vec2) -> Vec2 {
    Vec2::new(
        (pointer.x + 1.0) * 0.5 * viewport.x,
        (1.0 - pointer.y) * 0.5 * viewport.y,
    )
}
