//! Showcase Core - Scene registry, state machine, routing and animation
//!
//! This crate holds everything the Showcase page decides, independent of any
//! renderer or browser API:
//! - Framework registry and scene layout (emblem, gallery cards, starfield)
//! - Application state machine and URL hash router
//! - Hover picking on top of a pluggable ray caster
//! - Tween timelines for hover feedback and scene transitions
//! - The per-frame loop and its diagnostic metrics
//!
//! [`Showcase`] is the single context object that owns all mutable state; the
//! frontend feeds it [`Event`]s and calls [`Showcase::tick`] once per frame.

pub mod animator;
pub mod config;
pub mod frame;
pub mod framework;
pub mod pick;
pub mod route;
pub mod scene;
pub mod showcase;
pub mod state;
pub mod tween;
pub mod visual;

pub use animator::InteractionAnimator;
pub use config::{load_config, ConfigError, ShowcaseConfig};
pub use frame::{FrameClock, FrameMetrics, FrameProbe, MetricsSampler};
pub use framework::{Framework, FrameworkRegistry, RegistryError};
pub use pick::{HoverChange, HoverTracker, PickError, RayCaster, RayHit};
pub use route::{Route, Router};
pub use scene::{CardSpec, EmblemSpec, SceneLayout, StarfieldSpec};
pub use showcase::{DetailPanel, Event, Showcase, UiState};
pub use state::{AppState, StateMachine, Transition};
pub use tween::{Easing, Property, Sequence, Timeline, Tween, TweenValue};
pub use visual::{CardVisual, VisualState};
