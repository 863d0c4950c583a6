//! Scene registry - static description of the objects in the scene
//!
//! The layout is computed once at startup from the configuration and the
//! framework registry. The frontend spawns one entity per spec.

use bevy_math::Vec3;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::SceneConfig;
use crate::framework::FrameworkRegistry;

/// The collaboration emblem shown in the landing view
#[derive(Debug, Clone, PartialEq)]
pub struct EmblemSpec {
    pub position: Vec3,
    pub radius: f32,
    pub tube: f32,
    pub color: [f32; 3],
}

/// One gallery card
#[derive(Debug, Clone, PartialEq)]
pub struct CardSpec {
    /// Index into the framework registry
    pub framework: usize,
    pub name: String,
    pub logo_url: String,
    /// Position in gallery-local space
    pub position: Vec3,
    /// Initial yaw (card faces away from the circle center)
    pub rotation: f32,
    pub size: Vec3,
    pub logo_size: f32,
    pub accent: [f32; 3],
}

/// Background starfield
#[derive(Debug, Clone, PartialEq)]
pub struct StarfieldSpec {
    pub count: usize,
    pub inner_radius: f32,
    pub outer_radius: f32,
    pub star_size: f32,
    pub seed: u64,
}

impl StarfieldSpec {
    /// Deterministic star positions in a spherical shell around the origin
    pub fn points(&self) -> Vec<Vec3> {
        let mut rng = StdRng::seed_from_u64(self.seed);

        (0..self.count)
            .map(|_| {
                let direction = loop {
                    let v = Vec3::new(
                        rng.gen_range(-1.0..=1.0),
                        rng.gen_range(-1.0..=1.0),
                        rng.gen_range(-1.0..=1.0),
                    );
                    let len_sq = v.length_squared();
                    if len_sq > 1e-4 && len_sq <= 1.0 {
                        break v / len_sq.sqrt();
                    }
                };
                let radius = rng.gen_range(self.inner_radius..=self.outer_radius);
                direction * radius
            })
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SceneLayout {
    pub emblem: EmblemSpec,
    pub cards: Vec<CardSpec>,
    pub starfield: StarfieldSpec,
}

impl SceneLayout {
    pub fn build(config: &SceneConfig, registry: &FrameworkRegistry) -> Self {
        let count = registry.len();
        let cards = registry
            .iter()
            .enumerate()
            .map(|(i, framework)| {
                let (position, rotation) = circle_slot(i, count, config.gallery_radius);
                CardSpec {
                    framework: i,
                    name: framework.name.clone(),
                    logo_url: framework.logo_url.clone(),
                    position,
                    rotation,
                    size: Vec3::from_array(config.card_size),
                    logo_size: config.logo_size,
                    accent: framework.accent,
                }
            })
            .collect();

        Self {
            emblem: EmblemSpec {
                position: Vec3::ZERO,
                radius: config.emblem_radius,
                tube: config.emblem_tube,
                color: config.emblem_color,
            },
            cards,
            starfield: StarfieldSpec {
                count: config.star_count,
                inner_radius: config.star_inner_radius,
                outer_radius: config.star_outer_radius,
                star_size: config.star_size,
                seed: config.star_seed,
            },
        }
    }
}

/// Position and outward-facing yaw of slot `index` out of `count` on a
/// circle in the XZ plane. Slot 0 sits on +Z, facing the default camera.
pub fn circle_slot(index: usize, count: usize, radius: f32) -> (Vec3, f32) {
    let angle = index as f32 * std::f32::consts::TAU / count.max(1) as f32;
    let position = Vec3::new(radius * angle.sin(), 0.0, radius * angle.cos());
    (position, angle)
}
