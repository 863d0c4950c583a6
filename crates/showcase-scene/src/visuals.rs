//! Copies the showcase's visual state onto scene entities each frame

use bevy::prelude::*;

use crate::scene::{card_transform, emblem_transform, visibility};
use crate::types::{Emblem, GalleryCard, GalleryGroup, ShowcaseState, ShowcaseSystems, Starfield};

/// Plugin for visual updates
pub struct VisualsPlugin;

impl Plugin for VisualsPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (apply_emblem, apply_gallery, apply_cards, apply_starfield).in_set(ShowcaseSystems::Apply),
        );
    }
}

fn apply_emblem(
    showcase: Res<ShowcaseState>,
    mut emblem_query: Query<(&mut Transform, &mut Visibility), With<Emblem>>,
) {
    let visual = showcase.0.visual();
    let position = showcase.0.layout().emblem.position;
    for (mut transform, mut vis) in emblem_query.iter_mut() {
        *transform = emblem_transform(position, visual);
        vis.set_if_neq(visibility(visual.emblem_visible));
    }
}

fn apply_gallery(
    showcase: Res<ShowcaseState>,
    mut gallery_query: Query<(&mut Transform, &mut Visibility), With<GalleryGroup>>,
) {
    let visual = showcase.0.visual();
    for (mut transform, mut vis) in gallery_query.iter_mut() {
        transform.rotation = Quat::from_rotation_y(visual.gallery_rotation);
        vis.set_if_neq(visibility(visual.gallery_visible));
    }
}

fn apply_cards(
    showcase: Res<ShowcaseState>,
    mut card_query: Query<(
        &GalleryCard,
        &mut Transform,
        &mut Visibility,
        &MeshMaterial3d<StandardMaterial>,
    )>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let visual = showcase.0.visual();
    for (card, mut transform, mut vis, material) in card_query.iter_mut() {
        let Some(card_visual) = visual.cards.get(card.index) else {
            continue;
        };

        *transform = card_transform(card_visual.local_position(), card_visual.rotation, card_visual.scale);
        vis.set_if_neq(visibility(card_visual.visible));

        let emissive = card.accent * card_visual.emissive;
        // Only touch the asset when it changes, get_mut marks it for re-upload
        let changed = materials
            .get(&material.0)
            .is_some_and(|m| m.emissive != emissive);
        if changed {
            if let Some(mat) = materials.get_mut(&material.0) {
                mat.emissive = emissive;
            }
        }
    }
}

fn apply_starfield(
    showcase: Res<ShowcaseState>,
    mut star_query: Query<&mut Transform, With<Starfield>>,
) {
    let rotation = showcase.0.visual().starfield_rotation;
    for mut transform in star_query.iter_mut() {
        transform.rotation = Quat::from_rotation_y(rotation);
    }
}
