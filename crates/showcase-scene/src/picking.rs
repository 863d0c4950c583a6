//! Frame driver: mesh ray casts for hover picking, then the showcase tick

use bevy::prelude::*;
use bevy::window::PrimaryWindow;
use bevy_picking::mesh_picking::ray_cast::{MeshRayCast, MeshRayCastSettings, RayCastVisibility};

use showcase_core::{pick::pointer_to_viewport, FrameProbe, PickError, RayCaster, RayHit};

use crate::types::{CardHitbox, HeapUsage, MainCamera, ShowcaseState, ShowcaseSystems};

pub struct PickingDriverPlugin;

impl Plugin for PickingDriverPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<HeapUsage>()
            .add_systems(Update, drive_showcase.in_set(ShowcaseSystems::Tick));
    }
}

/// Casts rays through the scene's card meshes
struct MeshRayCaster<'a, 'w, 's> {
    ray_cast: &'a mut MeshRayCast<'w, 's>,
    camera: Option<(&'a Camera, &'a GlobalTransform)>,
    viewport: Vec2,
    /// Card index of a hit entity, if it is part of a card
    card_of: &'a dyn Fn(Entity) -> Option<usize>,
}

impl RayCaster for MeshRayCaster<'_, '_, '_> {
    fn cast(&mut self, pointer: Vec2) -> Result<Vec<RayHit>, PickError> {
        let (camera, camera_transform) = self.camera.ok_or(PickError::NoCamera)?;
        let cursor = pointer_to_viewport(pointer, self.viewport);
        let ray = camera
            .viewport_to_world(camera_transform, cursor)
            .map_err(|e| PickError::Backend(format!("{:?}", e)))?;

        let card_of = self.card_of;
        let filter = |entity: Entity| card_of(entity).is_some();
        let settings = MeshRayCastSettings::default()
            .with_visibility(RayCastVisibility::Visible)
            .with_filter(&filter);

        Ok(self
            .ray_cast
            .cast_ray(ray, &settings)
            .iter()
            .filter_map(|(entity, hit)| {
                card_of(*entity).map(|card| RayHit {
                    card,
                    distance: hit.distance,
                })
            })
            .collect())
    }
}

fn drive_showcase(
    mut showcase: ResMut<ShowcaseState>,
    time: Res<Time>,
    mut ray_cast: MeshRayCast,
    camera_query: Query<(&Camera, &GlobalTransform), With<MainCamera>>,
    windows: Query<&Window, With<PrimaryWindow>>,
    hitboxes: Query<&CardHitbox>,
    rendered: Query<&ViewVisibility, With<Mesh3d>>,
    heap: Res<HeapUsage>,
) {
    let viewport = windows
        .single()
        .map(|window| Vec2::new(window.width(), window.height()))
        .unwrap_or(Vec2::ZERO);

    let card_of = |entity: Entity| hitboxes.get(entity).ok().map(|hitbox| hitbox.0);
    let mut caster = MeshRayCaster {
        ray_cast: &mut ray_cast,
        camera: camera_query.single().ok(),
        viewport,
        card_of: &card_of,
    };

    // No GPU counters on the web; visible meshes approximate draw calls
    let draw_calls = rendered.iter().filter(|v| v.get()).count();
    let probe = FrameProbe {
        heap_bytes: heap.0,
        draw_calls: u32::try_from(draw_calls).ok(),
    };

    showcase.0.tick(time.delta_secs(), &mut caster, probe);
}
