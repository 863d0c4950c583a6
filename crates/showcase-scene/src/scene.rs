//! Scene setup - camera, lights, emblem, gallery cards and starfield

use bevy::prelude::*;
use std::f32::consts::FRAC_PI_2;

use showcase_core::{CardSpec, VisualState};

use crate::types::{CardHitbox, Emblem, GalleryCard, GalleryGroup, MainCamera, ShowcaseState, Starfield};

/// Plugin for scene setup
pub struct SceneSetupPlugin;

impl Plugin for SceneSetupPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_scene);
    }
}

/// Gap between a card face and its logo, avoids z-fighting
const LOGO_OFFSET: f32 = 0.01;

fn setup_scene(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    asset_server: Res<AssetServer>,
    showcase: Res<ShowcaseState>,
) {
    let layout = showcase.0.layout();
    let visual = showcase.0.visual();

    commands.spawn((
        Camera3d::default(),
        Projection::Perspective(PerspectiveProjection {
            near: 0.1,
            far: 500.0,
            ..default()
        }),
        Transform::from_translation(visual.camera_position).looking_at(visual.camera_target, Vec3::Y),
        MainCamera,
    ));

    commands.insert_resource(AmbientLight {
        color: Color::srgb(0.8, 0.85, 1.0),
        brightness: 300.0,
        ..default()
    });

    commands.spawn((
        DirectionalLight {
            illuminance: 6000.0,
            shadows_enabled: false,
            ..default()
        },
        Transform::from_xyz(4.0, 8.0, 10.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));

    commands.spawn((
        PointLight {
            intensity: 200000.0,
            shadows_enabled: false,
            color: Color::srgb(0.6, 0.7, 1.0),
            ..default()
        },
        Transform::from_xyz(-6.0, 3.0, 6.0),
    ));

    // Emblem
    let emblem = &layout.emblem;
    let emblem_color = Color::srgb(emblem.color[0], emblem.color[1], emblem.color[2]);
    commands.spawn((
        Mesh3d(meshes.add(Torus {
            minor_radius: emblem.tube,
            major_radius: emblem.radius,
        })),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: emblem_color,
            emissive: emblem_color.to_linear() * 0.4,
            metallic: 0.6,
            perceptual_roughness: 0.3,
            ..default()
        })),
        emblem_transform(emblem.position, visual),
        Visibility::Visible,
        Emblem,
    ));

    // Gallery cards, hidden until the landing transition reveals them
    let card_meshes: Vec<Handle<Mesh>> = layout
        .cards
        .iter()
        .map(|card| meshes.add(Cuboid::from_size(card.size)))
        .collect();

    commands
        .spawn((
            Transform::from_rotation(Quat::from_rotation_y(visual.gallery_rotation)),
            Visibility::Hidden,
            GalleryGroup,
        ))
        .with_children(|gallery| {
            for (card, mesh) in layout.cards.iter().zip(card_meshes) {
                let Some(card_visual) = visual.cards.get(card.framework) else {
                    continue;
                };
                let accent = Color::srgb(card.accent[0], card.accent[1], card.accent[2]);
                let body = materials.add(StandardMaterial {
                    base_color: Color::srgb(0.08, 0.09, 0.12),
                    emissive: accent.to_linear() * card_visual.emissive,
                    metallic: 0.2,
                    perceptual_roughness: 0.5,
                    ..default()
                });
                let logo_material = materials.add(StandardMaterial {
                    base_color_texture: Some(asset_server.load(card.logo_url.clone())),
                    alpha_mode: AlphaMode::Blend,
                    unlit: true,
                    ..default()
                });
                let logo_mesh = meshes.add(Rectangle::new(card.logo_size, card.logo_size));

                gallery
                    .spawn((
                        Mesh3d(mesh),
                        MeshMaterial3d(body),
                        card_transform(card_visual.local_position(), card_visual.rotation, card_visual.scale),
                        visibility(card_visual.visible),
                        GalleryCard {
                            index: card.framework,
                            accent: accent.to_linear(),
                        },
                        CardHitbox(card.framework),
                        Name::new(card.name.clone()),
                    ))
                    .with_children(|body| {
                        body.spawn((
                            Mesh3d(logo_mesh),
                            MeshMaterial3d(logo_material),
                            Transform::from_translation(logo_offset(card)),
                            CardHitbox(card.framework),
                        ));
                    });
            }
        });

    // Starfield
    let star_mesh = meshes.add(Sphere::new(layout.starfield.star_size).mesh().uv(8, 6));
    let star_material = materials.add(StandardMaterial {
        base_color: Color::WHITE,
        emissive: LinearRgba::rgb(1.5, 1.5, 1.6),
        unlit: true,
        ..default()
    });
    let points = layout.starfield.points();
    commands
        .spawn((Transform::default(), Visibility::Visible, Starfield))
        .with_children(|stars| {
            for point in points {
                stars.spawn((
                    Mesh3d(star_mesh.clone()),
                    MeshMaterial3d(star_material.clone()),
                    Transform::from_translation(point),
                ));
            }
        });

    tracing::info!(
        cards = layout.cards.len(),
        stars = layout.starfield.count,
        "Scene setup complete"
    );
}

/// Logo sits just in front of the card's outward face
fn logo_offset(card: &CardSpec) -> Vec3 {
    Vec3::new(0.0, 0.0, card.size.z * 0.5 + LOGO_OFFSET)
}

/// Emblem pose: the torus stands upright facing the camera and spins about Y
pub fn emblem_transform(position: Vec3, visual: &VisualState) -> Transform {
    Transform {
        translation: position,
        rotation: Quat::from_rotation_y(visual.emblem_spin) * Quat::from_rotation_x(FRAC_PI_2),
        scale: Vec3::splat(visual.emblem_scale.max(0.0)),
    }
}

/// Card pose relative to the gallery group
pub fn card_transform(local_position: Vec3, rotation: f32, scale: f32) -> Transform {
    Transform {
        translation: local_position,
        rotation: Quat::from_rotation_y(rotation),
        scale: Vec3::splat(scale.max(0.0)),
    }
}

pub fn visibility(visible: bool) -> Visibility {
    if visible {
        Visibility::Inherited
    } else {
        Visibility::Hidden
    }
}
