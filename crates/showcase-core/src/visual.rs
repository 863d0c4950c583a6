//! Animated visual state of the scene
//!
//! This is the single source of truth for every value the renderer shows.
//! The frame loop and the timeline write it; the frontend reads it once per
//! frame and applies it to transforms, materials and visibility.

use bevy_math::{Quat, Vec3};

use crate::config::ShowcaseConfig;
use crate::scene::SceneLayout;
use crate::tween::{Property, TweenValue};

/// Mutable visual state of one gallery card
#[derive(Debug, Clone, PartialEq)]
pub struct CardVisual {
    /// Resting position in gallery-local space
    pub position: Vec3,
    /// Yaw captured at creation, restored when the card is selected
    pub initial_rotation: f32,
    pub rotation: f32,
    pub scale: f32,
    pub emissive: f32,
    /// Vertical offset from the resting position
    pub rise: f32,
    pub visible: bool,
}

impl CardVisual {
    pub fn new(position: Vec3, rotation: f32, emissive: f32) -> Self {
        Self {
            position,
            initial_rotation: rotation,
            rotation,
            scale: 1.0,
            emissive,
            rise: 0.0,
            visible: true,
        }
    }

    /// Position in gallery-local space including the rise offset
    pub fn local_position(&self) -> Vec3 {
        self.position + Vec3::Y * self.rise
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct VisualState {
    pub header_opacity: f32,
    pub gallery_opacity: f32,
    pub emblem_scale: f32,
    pub emblem_spin: f32,
    pub emblem_visible: bool,
    pub gallery_visible: bool,
    pub gallery_rotation: f32,
    pub camera_position: Vec3,
    pub camera_target: Vec3,
    pub starfield_rotation: f32,
    pub cards: Vec<CardVisual>,
}

impl VisualState {
    /// Landing view: header and emblem shown, cards hidden below the circle
    pub fn initial(layout: &SceneLayout, config: &ShowcaseConfig) -> Self {
        let cards = layout
            .cards
            .iter()
            .map(|spec| {
                let mut card = CardVisual::new(spec.position, spec.rotation, config.hover.emissive_rest);
                card.rise = -config.scene.card_drop;
                card.visible = false;
                card
            })
            .collect();

        Self {
            header_opacity: 1.0,
            gallery_opacity: 0.0,
            emblem_scale: 1.0,
            emblem_spin: 0.0,
            emblem_visible: true,
            gallery_visible: false,
            gallery_rotation: 0.0,
            camera_position: config.camera.default_position(),
            camera_target: config.camera.default_target(),
            starfield_rotation: 0.0,
            cards,
        }
    }

    /// World position of a card for a given gallery rotation
    pub fn card_world_position_at(&self, index: usize, gallery_rotation: f32) -> Option<Vec3> {
        let card = self.cards.get(index)?;
        Some(Quat::from_rotation_y(gallery_rotation) * card.local_position())
    }

    pub fn card_world_position(&self, index: usize) -> Option<Vec3> {
        self.card_world_position_at(index, self.gallery_rotation)
    }

    pub fn read(&self, property: Property) -> Option<TweenValue> {
        use TweenValue::{Flag, Scalar, Vector};

        let value = match property {
            Property::HeaderOpacity => Scalar(self.header_opacity),
            Property::GalleryOpacity => Scalar(self.gallery_opacity),
            Property::EmblemScale => Scalar(self.emblem_scale),
            Property::EmblemSpin => Scalar(self.emblem_spin),
            Property::EmblemVisible => Flag(self.emblem_visible),
            Property::GalleryVisible => Flag(self.gallery_visible),
            Property::GalleryRotation => Scalar(self.gallery_rotation),
            Property::CameraPosition => Vector(self.camera_position),
            Property::CameraTarget => Vector(self.camera_target),
            Property::CardScale(i) => Scalar(self.cards.get(i)?.scale),
            Property::CardEmissive(i) => Scalar(self.cards.get(i)?.emissive),
            Property::CardRise(i) => Scalar(self.cards.get(i)?.rise),
            Property::CardRotation(i) => Scalar(self.cards.get(i)?.rotation),
            Property::CardVisible(i) => Flag(self.cards.get(i)?.visible),
        };
        Some(value)
    }

    /// Write a value; mismatched kinds and unknown cards are ignored
    pub fn write(&mut self, property: Property, value: TweenValue) {
        match property {
            Property::HeaderOpacity => set(&mut self.header_opacity, value.as_scalar()),
            Property::GalleryOpacity => set(&mut self.gallery_opacity, value.as_scalar()),
            Property::EmblemScale => set(&mut self.emblem_scale, value.as_scalar()),
            Property::EmblemSpin => set(&mut self.emblem_spin, value.as_scalar()),
            Property::EmblemVisible => set(&mut self.emblem_visible, value.as_flag()),
            Property::GalleryVisible => set(&mut self.gallery_visible, value.as_flag()),
            Property::GalleryRotation => set(&mut self.gallery_rotation, value.as_scalar()),
            Property::CameraPosition => set(&mut self.camera_position, value.as_vector()),
            Property::CameraTarget => set(&mut self.camera_target, value.as_vector()),
            Property::CardScale(i) => {
                if let Some(card) = self.cards.get_mut(i) {
                    set(&mut card.scale, value.as_scalar());
                }
            }
            Property::CardEmissive(i) => {
                if let Some(card) = self.cards.get_mut(i) {
                    set(&mut card.emissive, value.as_scalar());
                }
            }
            Property::CardRise(i) => {
                if let Some(card) = self.cards.get_mut(i) {
                    set(&mut card.rise, value.as_scalar());
                }
            }
            Property::CardRotation(i) => {
                if let Some(card) = self.cards.get_mut(i) {
                    set(&mut card.rotation, value.as_scalar());
                }
            }
            Property::CardVisible(i) => {
                if let Some(card) = self.cards.get_mut(i) {
                    set(&mut card.visible, value.as_flag());
                }
            }
        }
    }
}

fn set<T>(slot: &mut T, value: Option<T>) {
    if let Some(value) = value {
        *slot = value;
    }
}
