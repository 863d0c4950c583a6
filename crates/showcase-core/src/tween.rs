//! Tweens, sequences and the timeline that plays them
//!
//! Animations are plain data: a [`Tween`] names one [`Property`] of the
//! [`VisualState`] and the value it should reach. A [`Timeline`] advances all
//! running tweens each frame and writes the interpolated values back into the
//! visual state, which the frontend then copies onto the scene graph.

use bevy_math::curve::{Curve, EaseFunction};
use bevy_math::Vec3;
use serde::{Deserialize, Serialize};

use crate::visual::VisualState;

/// Easing curves available to tweens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Easing {
    Linear,
    QuadraticInOut,
    #[default]
    CubicOut,
    CubicInOut,
    BackOut,
}

impl Easing {
    /// Map linear progress in [0, 1] onto the eased progress
    pub fn apply(self, t: f32) -> f32 {
        self.function().sample_clamped(t.clamp(0.0, 1.0))
    }

    fn function(self) -> EaseFunction {
        match self {
            Easing::Linear => EaseFunction::Linear,
            Easing::QuadraticInOut => EaseFunction::QuadraticInOut,
            Easing::CubicOut => EaseFunction::CubicOut,
            Easing::CubicInOut => EaseFunction::CubicInOut,
            Easing::BackOut => EaseFunction::BackOut,
        }
    }
}

/// A value a property can take
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TweenValue {
    Scalar(f32),
    Vector(Vec3),
    /// Switches to the target value when the tween completes
    Flag(bool),
}

impl TweenValue {
    fn interpolate(self, to: TweenValue, t: f32) -> TweenValue {
        match (self, to) {
            (TweenValue::Scalar(a), TweenValue::Scalar(b)) => TweenValue::Scalar(a + (b - a) * t),
            (TweenValue::Vector(a), TweenValue::Vector(b)) => TweenValue::Vector(a.lerp(b, t)),
            (from, TweenValue::Flag(_)) if t < 1.0 => from,
            (_, to) => to,
        }
    }

    pub fn as_scalar(self) -> Option<f32> {
        match self {
            TweenValue::Scalar(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_vector(self) -> Option<Vec3> {
        match self {
            TweenValue::Vector(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_flag(self) -> Option<bool> {
        match self {
            TweenValue::Flag(v) => Some(v),
            _ => None,
        }
    }
}

/// Animatable properties of the visual state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Property {
    HeaderOpacity,
    GalleryOpacity,
    EmblemScale,
    EmblemSpin,
    EmblemVisible,
    GalleryVisible,
    GalleryRotation,
    CameraPosition,
    CameraTarget,
    CardScale(usize),
    CardEmissive(usize),
    CardRise(usize),
    CardRotation(usize),
    CardVisible(usize),
}

/// Animate one property toward a value
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween {
    pub property: Property,
    pub to: TweenValue,
    /// Seconds; zero applies the value on the first frame the tween runs
    pub duration: f32,
    pub easing: Easing,
}

impl Tween {
    pub fn new(property: Property, to: TweenValue, duration: f32) -> Self {
        Self {
            property,
            to,
            duration: duration.max(0.0),
            easing: Easing::default(),
        }
    }

    pub fn scalar(property: Property, to: f32, duration: f32) -> Self {
        Self::new(property, TweenValue::Scalar(to), duration)
    }

    pub fn vector(property: Property, to: Vec3, duration: f32) -> Self {
        Self::new(property, TweenValue::Vector(to), duration)
    }

    /// Instant step
    pub fn set(property: Property, to: TweenValue) -> Self {
        Self::new(property, to, 0.0)
    }

    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Step {
    /// Start time relative to the start of the sequence
    pub offset: f32,
    pub tween: Tween,
}

/// An ordered chain of steps
///
/// Step offsets never decrease: a step may start alongside or overlap the
/// previous one, but never before it.
#[derive(Debug, Clone, PartialEq)]
pub struct Sequence {
    name: &'static str,
    steps: Vec<Step>,
}

impl Sequence {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            steps: Vec::new(),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    fn last_offset(&self) -> f32 {
        self.steps.last().map(|s| s.offset).unwrap_or(0.0)
    }

    fn last_end(&self) -> f32 {
        self.steps
            .last()
            .map(|s| s.offset + s.tween.duration)
            .unwrap_or(0.0)
    }

    fn push(mut self, offset: f32, tween: Tween) -> Self {
        let offset = offset.max(self.last_offset());
        self.steps.push(Step { offset, tween });
        self
    }

    /// Start after the previous step finishes
    pub fn then(self, tween: Tween) -> Self {
        let offset = self.last_end();
        self.push(offset, tween)
    }

    /// Start together with the previous step
    pub fn with(self, tween: Tween) -> Self {
        let offset = self.last_offset();
        self.push(offset, tween)
    }

    /// Start `overlap` seconds before the previous step finishes
    pub fn overlapping(self, tween: Tween, overlap: f32) -> Self {
        let offset = self.last_end() - overlap.max(0.0);
        self.push(offset, tween)
    }

    /// Start `delay` seconds after the previous step starts
    pub fn after(self, tween: Tween, delay: f32) -> Self {
        let offset = self.last_offset() + delay.max(0.0);
        self.push(offset, tween)
    }

    /// Total running time
    pub fn duration(&self) -> f32 {
        self.steps
            .iter()
            .map(|s| s.offset + s.tween.duration)
            .fold(0.0, f32::max)
    }
}

#[derive(Debug, Clone)]
struct ActiveTween {
    tween: Tween,
    delay: f32,
    elapsed: f32,
    /// Captured from the visual state when the tween actually starts
    from: Option<TweenValue>,
}

/// Runs tweens against a [`VisualState`]
///
/// Scheduling a tween replaces any running or pending tween on the same
/// property.
#[derive(Debug, Clone, Default)]
pub struct Timeline {
    active: Vec<ActiveTween>,
}

impl Timeline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn play(&mut self, tween: Tween) {
        self.schedule(tween, 0.0);
    }

    pub fn play_sequence(&mut self, sequence: &Sequence) {
        for step in sequence.steps() {
            self.schedule(step.tween, step.offset);
        }
    }

    fn schedule(&mut self, tween: Tween, delay: f32) {
        self.cancel(tween.property);
        self.active.push(ActiveTween {
            tween,
            delay,
            elapsed: 0.0,
            from: None,
        });
    }

    /// Drop running or pending tweens on a property
    pub fn cancel(&mut self, property: Property) {
        self.active.retain(|a| a.tween.property != property);
    }

    pub fn is_animating(&self, property: Property) -> bool {
        self.active.iter().any(|a| a.tween.property == property)
    }

    pub fn is_idle(&self) -> bool {
        self.active.is_empty()
    }

    /// The value a property is heading to, if a tween targets it
    pub fn target_of(&self, property: Property) -> Option<TweenValue> {
        self.active
            .iter()
            .find(|a| a.tween.property == property)
            .map(|a| a.tween.to)
    }

    /// Advance every tween by `dt` seconds and write the results
    pub fn tick(&mut self, dt: f32, state: &mut VisualState) {
        let dt = dt.max(0.0);

        self.active.retain_mut(|active| {
            let mut step = dt;
            if active.delay > 0.0 {
                active.delay -= step;
                if active.delay > 0.0 {
                    return true;
                }
                step = -active.delay;
                active.delay = 0.0;
            }

            let Some(from) = active.from.or_else(|| state.read(active.tween.property)) else {
                // Property no longer exists (card index out of range)
                return false;
            };
            active.from = Some(from);
            active.elapsed += step;

            let t = if active.tween.duration <= 0.0 {
                1.0
            } else {
                (active.elapsed / active.tween.duration).min(1.0)
            };
            let value = from.interpolate(active.tween.to, active.tween.easing.apply(t));
            state.write(active.tween.property, value);

            t < 1.0
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::visual::CardVisual;

    fn state_with_cards(count: usize) -> VisualState {
        let mut state = VisualState::default();
        state.cards = (0..count)
            .map(|i| CardVisual::new(Vec3::new(i as f32, 0.0, 0.0), 0.0, 0.1))
            .collect();
        state
    }

    #[test]
    fn test_easing_endpoints() {
        for easing in [
            Easing::Linear,
            Easing::QuadraticInOut,
            Easing::CubicOut,
            Easing::CubicInOut,
            Easing::BackOut,
        ] {
            assert!(easing.apply(0.0).abs() < 1e-5, "{:?}", easing);
            assert!((easing.apply(1.0) - 1.0).abs() < 1e-5, "{:?}", easing);
        }
        // Decelerating: more than halfway there at the midpoint
        assert!((Easing::CubicOut.apply(0.5) - 0.875).abs() < 1e-4);
        assert_eq!(Easing::Linear.apply(2.0), 1.0);
    }

    #[test]
    fn test_sequence_offsets_never_decrease() {
        let seq = Sequence::new("test")
            .then(Tween::scalar(Property::HeaderOpacity, 0.0, 0.6))
            .overlapping(Tween::scalar(Property::EmblemScale, 0.0, 1.0), 0.2)
            .with(Tween::scalar(Property::EmblemSpin, 6.0, 1.0))
            .then(Tween::set(Property::EmblemVisible, TweenValue::Flag(false)))
            .overlapping(Tween::scalar(Property::GalleryOpacity, 1.0, 0.5), 5.0);

        let offsets: Vec<f32> = seq.steps().iter().map(|s| s.offset).collect();
        assert_eq!(offsets.len(), 5);
        assert!((offsets[1] - 0.4).abs() < 1e-6);
        assert_eq!(offsets[1], offsets[2]);
        assert!((offsets[3] - 1.4).abs() < 1e-6);
        // A large overlap is clamped to the previous step's start
        assert_eq!(offsets[4], offsets[3]);
        assert!((seq.duration() - 1.9).abs() < 1e-5);
    }

    #[test]
    fn test_timeline_reaches_target() {
        let mut state = state_with_cards(2);
        let mut timeline = Timeline::new();
        timeline.play(Tween::scalar(Property::CardScale(1), 1.2, 0.3));

        timeline.tick(0.15, &mut state);
        let mid = state.cards[1].scale;
        assert!(mid > 1.1 && mid < 1.2, "mid-way scale {}", mid);
        assert_eq!(state.cards[0].scale, 1.0);

        timeline.tick(0.2, &mut state);
        assert!((state.cards[1].scale - 1.2).abs() < 1e-6);
        assert!(timeline.is_idle());
    }

    #[test]
    fn test_later_tween_overrides_same_property() {
        let mut state = state_with_cards(1);
        let mut timeline = Timeline::new();
        timeline.play(Tween::scalar(Property::CardScale(0), 1.2, 0.3));
        timeline.tick(0.1, &mut state);
        timeline.play(Tween::scalar(Property::CardScale(0), 1.0, 0.3));

        assert_eq!(timeline.target_of(Property::CardScale(0)), Some(TweenValue::Scalar(1.0)));
        for _ in 0..10 {
            timeline.tick(0.05, &mut state);
        }
        assert!((state.cards[0].scale - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_delayed_step_captures_value_when_it_starts() {
        let mut state = VisualState::default();
        state.header_opacity = 1.0;
        let seq = Sequence::new("fade")
            .then(Tween::scalar(Property::HeaderOpacity, 0.5, 0.5).with_easing(Easing::Linear))
            .then(Tween::scalar(Property::GalleryOpacity, 1.0, 0.5).with_easing(Easing::Linear));

        let mut timeline = Timeline::new();
        timeline.play_sequence(&seq);

        timeline.tick(0.25, &mut state);
        assert!((state.header_opacity - 0.75).abs() < 1e-5);
        assert_eq!(state.gallery_opacity, 0.0);

        timeline.tick(0.5, &mut state);
        assert!((state.header_opacity - 0.5).abs() < 1e-5);
        assert!((state.gallery_opacity - 0.5).abs() < 1e-5);
    }

    #[test]
    fn test_flag_switches_at_end() {
        let mut state = VisualState::default();
        state.emblem_visible = true;
        let mut timeline = Timeline::new();
        timeline.play(Tween::new(Property::EmblemVisible, TweenValue::Flag(false), 0.2));

        timeline.tick(0.1, &mut state);
        assert!(state.emblem_visible);
        timeline.tick(0.1, &mut state);
        assert!(!state.emblem_visible);
    }

    #[test]
    fn test_tween_on_missing_card_is_dropped() {
        let mut state = state_with_cards(1);
        let mut timeline = Timeline::new();
        timeline.play(Tween::scalar(Property::CardScale(5), 1.2, 0.3));
        timeline.tick(0.1, &mut state);
        assert!(timeline.is_idle());
    }
}
