//! Configuration loading and validation

use bevy_math::Vec3;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;
use tracing::info;

use crate::framework::{Framework, FrameworkRegistry, RegistryError};
use crate::tween::Easing;

/// Configuration shipped with the crate
pub const BUILTIN_CONFIG: &str = include_str!("../showcase.toml");

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read configuration: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse configuration: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("Invalid framework registry: {0}")]
    Registry(#[from] RegistryError),
    #[error("Invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },
}

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ShowcaseConfig {
    #[serde(default)]
    pub scene: SceneConfig,
    #[serde(default)]
    pub camera: CameraConfig,
    #[serde(default)]
    pub landing: LandingConfig,
    #[serde(default)]
    pub gallery: GalleryConfig,
    #[serde(default)]
    pub hover: HoverConfig,
    #[serde(default)]
    pub transitions: TransitionConfig,
    #[serde(default)]
    pub metrics: MetricsConfig,
    #[serde(default, rename = "framework")]
    pub frameworks: Vec<Framework>,
}

/// Static scene geometry
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    /// Radius of the gallery circle
    pub gallery_radius: f32,
    /// Card width, height, depth
    pub card_size: [f32; 3],
    /// Edge length of the square logo overlay on each card
    pub logo_size: f32,
    /// How far below their resting height cards start before the reveal
    pub card_drop: f32,
    pub emblem_radius: f32,
    pub emblem_tube: f32,
    pub emblem_color: [f32; 3],
    pub star_count: usize,
    pub star_inner_radius: f32,
    pub star_outer_radius: f32,
    pub star_size: f32,
    pub star_seed: u64,
    /// Starfield rotation in radians per second
    pub starfield_spin: f32,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            gallery_radius: 6.0,
            card_size: [2.0, 2.8, 0.08],
            logo_size: 1.4,
            card_drop: 3.0,
            emblem_radius: 1.6,
            emblem_tube: 0.35,
            emblem_color: [0.35, 0.55, 1.0],
            star_count: 800,
            star_inner_radius: 40.0,
            star_outer_radius: 90.0,
            star_size: 0.12,
            star_seed: 7,
            starfield_spin: 0.02,
        }
    }
}

/// Camera defaults and motion
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Default (landing and gallery) camera position
    pub position: [f32; 3],
    /// Default look-at point
    pub target: [f32; 3],
    /// Camera offset from the selected card in detail view
    pub detail_offset: [f32; 3],
    /// Landing parallax: camera offset per unit of pointer movement
    pub parallax: f32,
    /// Per-frame damping factor at 60 fps
    pub damping: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            position: [0.0, 0.0, 12.0],
            target: [0.0, 0.0, 0.0],
            detail_offset: [0.0, 0.4, 3.5],
            parallax: 2.0,
            damping: 0.05,
        }
    }
}

impl CameraConfig {
    pub fn default_position(&self) -> Vec3 {
        Vec3::from_array(self.position)
    }

    pub fn default_target(&self) -> Vec3 {
        Vec3::from_array(self.target)
    }

    pub fn detail_offset(&self) -> Vec3 {
        Vec3::from_array(self.detail_offset)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LandingConfig {
    /// Emblem rotation in radians per second
    pub emblem_spin: f32,
}

impl Default for LandingConfig {
    fn default() -> Self {
        Self { emblem_spin: 0.3 }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GalleryConfig {
    /// Target gallery yaw per unit of horizontal pointer position
    pub rotation_factor: f32,
    /// Per-frame damping factor at 60 fps
    pub damping: f32,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            rotation_factor: 0.5,
            damping: 0.05,
        }
    }
}

/// Hover feedback on gallery cards
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HoverConfig {
    pub scale: f32,
    pub emissive_highlight: f32,
    pub emissive_rest: f32,
    /// Seconds
    pub duration: f32,
    pub easing: Easing,
}

impl Default for HoverConfig {
    fn default() -> Self {
        Self {
            scale: 1.2,
            emissive_highlight: 0.6,
            emissive_rest: 0.1,
            duration: 0.3,
            easing: Easing::CubicOut,
        }
    }
}

/// Durations (seconds) of the steps in the scene transition sequences
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TransitionConfig {
    pub header_fade: f32,
    pub emblem_shrink: f32,
    pub cards_raise: f32,
    pub card_stagger: f32,
    pub container_fade: f32,
    pub camera_move: f32,
    /// How much adjacent steps may overlap
    pub overlap: f32,
}

impl Default for TransitionConfig {
    fn default() -> Self {
        Self {
            header_fade: 0.6,
            emblem_shrink: 1.0,
            cards_raise: 0.8,
            card_stagger: 0.08,
            container_fade: 0.5,
            camera_move: 1.2,
            overlap: 0.3,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MetricsConfig {
    /// Recompute metrics every N frames
    pub sample_interval: u32,
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self { sample_interval: 10 }
    }
}

impl ShowcaseConfig {
    /// Parse the configuration embedded in the crate
    pub fn builtin() -> Result<Self, ConfigError> {
        Self::from_toml(BUILTIN_CONFIG)
    }

    /// Parse and validate a configuration from a TOML string
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: ShowcaseConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Build the validated framework registry
    pub fn registry(&self) -> Result<FrameworkRegistry, ConfigError> {
        Ok(FrameworkRegistry::new(self.frameworks.clone())?)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        FrameworkRegistry::new(self.frameworks.clone())?;

        positive("scene.gallery_radius", self.scene.gallery_radius)?;
        positive("hover.duration", self.hover.duration)?;
        positive("hover.scale", self.hover.scale)?;

        let t = &self.transitions;
        positive("transitions.header_fade", t.header_fade)?;
        positive("transitions.emblem_shrink", t.emblem_shrink)?;
        positive("transitions.cards_raise", t.cards_raise)?;
        positive("transitions.container_fade", t.container_fade)?;
        positive("transitions.camera_move", t.camera_move)?;
        non_negative("transitions.card_stagger", t.card_stagger)?;
        non_negative("transitions.overlap", t.overlap)?;

        damping("camera.damping", self.camera.damping)?;
        damping("gallery.damping", self.gallery.damping)?;

        if self.scene.star_inner_radius > self.scene.star_outer_radius {
            return Err(ConfigError::InvalidValue {
                field: "scene.star_inner_radius",
                reason: "must not exceed scene.star_outer_radius".to_string(),
            });
        }
        if self.metrics.sample_interval == 0 {
            return Err(ConfigError::InvalidValue {
                field: "metrics.sample_interval",
                reason: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}

fn positive(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value > 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::InvalidValue {
            field,
            reason: format!("must be a positive number, got {}", value),
        })
    }
}

fn non_negative(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value >= 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::InvalidValue {
            field,
            reason: format!("must be zero or positive, got {}", value),
        })
    }
}

/// Per-frame damping must lie in (0, 1]
fn damping(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value > 0.0 && value <= 1.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidValue {
            field,
            reason: format!("must be in (0, 1], got {}", value),
        })
    }
}

/// Load configuration from file, falling back to the built-in one
pub fn load_config(path: &Path) -> Result<ShowcaseConfig, ConfigError> {
    if path.exists() {
        let content = std::fs::read_to_string(path)?;
        let config = ShowcaseConfig::from_toml(&content)?;
        info!(path = %path.display(), "Loaded configuration");
        Ok(config)
    } else {
        info!(
            path = %path.display(),
            "Configuration file not found, using built-in configuration"
        );
        ShowcaseConfig::builtin()
    }
}
