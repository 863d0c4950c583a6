//! Camera follows the showcase's animated camera pose

use bevy::prelude::*;

use crate::types::{MainCamera, ShowcaseState, ShowcaseSystems};

/// Plugin for camera updates
pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, apply_camera.in_set(ShowcaseSystems::Apply));
    }
}

fn apply_camera(
    showcase: Res<ShowcaseState>,
    mut camera_query: Query<&mut Transform, With<MainCamera>>,
) {
    let visual = showcase.0.visual();
    let Ok(mut transform) = camera_query.single_mut() else {
        return;
    };

    transform.translation = visual.camera_position;
    // Degenerate when position and target coincide; keep the last orientation
    if (visual.camera_target - visual.camera_position).length_squared() > f32::EPSILON {
        transform.look_at(visual.camera_target, Vec3::Y);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use showcase_core::{Event, Showcase, ShowcaseConfig};

    #[test]
    fn test_camera_tracks_visual_state() {
        let mut showcase = Showcase::new(ShowcaseConfig::builtin().unwrap()).unwrap();
        showcase.handle(Event::Enter);

        let mut app = App::new();
        app.insert_resource(ShowcaseState(showcase));
        app.add_systems(Update, apply_camera);
        let camera = app.world_mut().spawn((Transform::default(), MainCamera)).id();

        app.update();

        let transform = app.world().get::<Transform>(camera).unwrap();
        assert_eq!(transform.translation, Vec3::new(0.0, 0.0, 12.0));
        let forward = transform.forward();
        assert!((*forward - Vec3::NEG_Z).length() < 1e-5);
    }
}
