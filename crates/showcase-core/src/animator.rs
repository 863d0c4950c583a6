//! Interaction animator - hover feedback and scene transition sequences

use bevy_math::Quat;
use std::f32::consts::{PI, TAU};
use tracing::debug;

use crate::config::ShowcaseConfig;
use crate::tween::{Easing, Property, Sequence, Timeline, Tween, TweenValue};
use crate::visual::VisualState;

#[derive(Debug, Clone, Default)]
pub struct InteractionAnimator {
    timeline: Timeline,
    /// Card currently styled as hovered
    entered: Option<usize>,
}

impl InteractionAnimator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn timeline(&self) -> &Timeline {
        &self.timeline
    }

    pub fn entered_card(&self) -> Option<usize> {
        self.entered
    }

    pub fn tick(&mut self, dt: f32, state: &mut VisualState) {
        self.timeline.tick(dt, state);
    }

    pub fn cancel(&mut self, property: Property) {
        self.timeline.cancel(property);
    }

    pub fn hover_enter(&mut self, card: usize, config: &ShowcaseConfig) {
        // Never two entered cards at once
        if let Some(previous) = self.entered.filter(|&p| p != card) {
            self.hover_exit(previous, config);
        }

        let hover = &config.hover;
        self.timeline.play(
            Tween::scalar(Property::CardScale(card), hover.scale, hover.duration)
                .with_easing(hover.easing),
        );
        self.timeline.play(
            Tween::scalar(Property::CardEmissive(card), hover.emissive_highlight, hover.duration)
                .with_easing(hover.easing),
        );
        self.entered = Some(card);
        debug!(card, "Hover enter");
    }

    pub fn hover_exit(&mut self, card: usize, config: &ShowcaseConfig) {
        let hover = &config.hover;
        self.timeline.play(
            Tween::scalar(Property::CardScale(card), 1.0, hover.duration).with_easing(hover.easing),
        );
        self.timeline.play(
            Tween::scalar(Property::CardEmissive(card), hover.emissive_rest, hover.duration)
                .with_easing(hover.easing),
        );
        if self.entered == Some(card) {
            self.entered = None;
        }
        debug!(card, "Hover exit");
    }

    /// Header out, emblem shrinks away spinning, cards rise into view, gallery
    /// container fades in
    pub fn landing_to_gallery(&mut self, state: &VisualState, config: &ShowcaseConfig) {
        let t = &config.transitions;

        let mut seq = Sequence::new("landing-to-gallery")
            .then(Tween::scalar(Property::HeaderOpacity, 0.0, t.header_fade))
            .overlapping(
                Tween::scalar(Property::EmblemScale, 0.0, t.emblem_shrink)
                    .with_easing(Easing::CubicInOut),
                t.overlap,
            )
            .with(
                Tween::scalar(Property::EmblemSpin, state.emblem_spin + TAU, t.emblem_shrink)
                    .with_easing(Easing::CubicInOut),
            )
            .then(Tween::set(Property::EmblemVisible, TweenValue::Flag(false)))
            .with(Tween::set(Property::GalleryVisible, TweenValue::Flag(true)));

        for i in 0..state.cards.len() {
            let stagger = if i == 0 { 0.0 } else { t.card_stagger };
            seq = seq
                .after(Tween::set(Property::CardVisible(i), TweenValue::Flag(true)), stagger)
                .with(
                    Tween::scalar(Property::CardRise(i), 0.0, t.cards_raise)
                        .with_easing(Easing::BackOut),
                );
        }

        let seq = seq.overlapping(
            Tween::scalar(Property::GalleryOpacity, 1.0, t.container_fade),
            t.overlap,
        );
        self.play(&seq);
    }

    /// Camera flies to the selected card while the gallery turns it to face
    /// forward and the card returns to its initial orientation
    pub fn gallery_to_detail(&mut self, card: usize, state: &VisualState, config: &ShowcaseConfig) {
        let Some(visual) = state.cards.get(card) else {
            return;
        };
        let t = &config.transitions;

        let gallery_rotation = nearest_angle(state.gallery_rotation, -visual.initial_rotation);
        // Resting position, in case the card is still rising
        let card_position = Quat::from_rotation_y(gallery_rotation) * visual.position;
        let camera_position = card_position + config.camera.detail_offset();

        let seq = Sequence::new("gallery-to-detail")
            .then(Tween::scalar(Property::GalleryOpacity, 0.0, t.container_fade))
            .with(
                Tween::scalar(Property::GalleryRotation, gallery_rotation, t.camera_move)
                    .with_easing(Easing::CubicInOut),
            )
            .with(
                Tween::scalar(Property::CardRotation(card), visual.initial_rotation, t.camera_move)
                    .with_easing(Easing::CubicInOut),
            )
            .with(
                Tween::vector(Property::CameraPosition, camera_position, t.camera_move)
                    .with_easing(Easing::CubicInOut),
            )
            .with(
                Tween::vector(Property::CameraTarget, card_position, t.camera_move)
                    .with_easing(Easing::CubicInOut),
            );
        self.play(&seq);
    }

    /// Opening a framework link from Landing: the landing scene is swapped for
    /// the raised gallery at once, then the usual flight to the card
    pub fn landing_to_detail(&mut self, card: usize, state: &VisualState, config: &ShowcaseConfig) {
        let mut seq = Sequence::new("landing-to-detail")
            .then(Tween::set(Property::HeaderOpacity, TweenValue::Scalar(0.0)))
            .with(Tween::set(Property::EmblemScale, TweenValue::Scalar(0.0)))
            .with(Tween::set(Property::EmblemVisible, TweenValue::Flag(false)))
            .with(Tween::set(Property::GalleryVisible, TweenValue::Flag(true)));
        for i in 0..state.cards.len() {
            seq = seq
                .with(Tween::set(Property::CardVisible(i), TweenValue::Flag(true)))
                .with(Tween::set(Property::CardRise(i), TweenValue::Scalar(0.0)));
        }
        self.play(&seq);
        self.gallery_to_detail(card, state, config);
    }

    /// Camera returns to its default pose and the gallery container fades in
    pub fn detail_to_gallery(&mut self, config: &ShowcaseConfig) {
        let t = &config.transitions;

        self.timeline.cancel(Property::GalleryRotation);
        let seq = Sequence::new("detail-to-gallery")
            .then(
                Tween::vector(Property::CameraPosition, config.camera.default_position(), t.camera_move)
                    .with_easing(Easing::CubicInOut),
            )
            .with(
                Tween::vector(Property::CameraTarget, config.camera.default_target(), t.camera_move)
                    .with_easing(Easing::CubicInOut),
            )
            .overlapping(
                Tween::scalar(Property::GalleryOpacity, 1.0, t.container_fade),
                t.overlap,
            );
        self.play(&seq);
    }

    fn play(&mut self, sequence: &Sequence) {
        debug!(
            sequence = sequence.name(),
            steps = sequence.steps().len(),
            duration = sequence.duration(),
            "Playing sequence"
        );
        self.timeline.play_sequence(sequence);
    }
}

/// The angle equivalent to `target` (mod 2π) closest to `current`
fn nearest_angle(current: f32, target: f32) -> f32 {
    let delta = (target - current + PI).rem_euclid(TAU) - PI;
    current + delta
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::SceneLayout;
    use bevy_math::Vec3;

    fn setup() -> (ShowcaseConfig, VisualState) {
        let config = ShowcaseConfig::builtin().unwrap();
        let registry = config.registry().unwrap();
        let layout = SceneLayout::build(&config.scene, &registry);
        let state = VisualState::initial(&layout, &config);
        (config, state)
    }

    fn run(animator: &mut InteractionAnimator, state: &mut VisualState, seconds: f32) {
        let mut elapsed = 0.0;
        while elapsed < seconds {
            animator.tick(1.0 / 60.0, state);
            elapsed += 1.0 / 60.0;
        }
    }

    #[test]
    fn test_hover_enter_and_exit() {
        let (config, mut state) = setup();
        let mut animator = InteractionAnimator::new();

        animator.hover_enter(1, &config);
        run(&mut animator, &mut state, 0.5);
        assert!((state.cards[1].scale - 1.2).abs() < 1e-4);
        assert!((state.cards[1].emissive - 0.6).abs() < 1e-4);
        assert_eq!(animator.entered_card(), Some(1));

        animator.hover_exit(1, &config);
        run(&mut animator, &mut state, 0.5);
        assert!((state.cards[1].scale - 1.0).abs() < 1e-4);
        assert!((state.cards[1].emissive - 0.1).abs() < 1e-4);
        assert_eq!(animator.entered_card(), None);
    }

    #[test]
    fn test_enter_on_new_card_exits_previous() {
        let (config, mut state) = setup();
        let mut animator = InteractionAnimator::new();

        animator.hover_enter(0, &config);
        run(&mut animator, &mut state, 0.5);
        animator.hover_enter(2, &config);
        assert_eq!(animator.entered_card(), Some(2));
        assert_eq!(
            animator.timeline().target_of(Property::CardScale(0)),
            Some(TweenValue::Scalar(1.0))
        );

        run(&mut animator, &mut state, 0.5);
        let entered: Vec<_> = state.cards.iter().filter(|c| c.scale > 1.01).collect();
        assert_eq!(entered.len(), 1);
        assert!((state.cards[2].scale - 1.2).abs() < 1e-4);
    }

    #[test]
    fn test_landing_to_detail_skips_gallery_reveal() {
        let (config, mut state) = setup();
        let mut animator = InteractionAnimator::new();

        animator.landing_to_detail(1, &state, &config);
        run(&mut animator, &mut state, 1.0 / 60.0);
        assert!(!state.emblem_visible);
        assert!(state.header_opacity.abs() < 1e-4);
        assert!(state.cards.iter().all(|c| c.visible && c.rise.abs() < 1e-4));

        run(&mut animator, &mut state, 5.0);
        assert!(animator.timeline().is_idle());
        assert!(state.gallery_visible);
        assert!(state.gallery_opacity.abs() < 1e-4);
        let expected = (state.gallery_rotation + state.cards[1].initial_rotation).rem_euclid(TAU);
        assert!(expected.abs() < 1e-3 || (expected - TAU).abs() < 1e-3);
    }

    #[test]
    fn test_landing_to_gallery_reveals_cards() {
        let (config, mut state) = setup();
        let mut animator = InteractionAnimator::new();

        animator.landing_to_gallery(&state, &config);
        run(&mut animator, &mut state, 5.0);

        assert!(animator.timeline().is_idle());
        assert!(state.header_opacity.abs() < 1e-4);
        assert!(state.emblem_scale.abs() < 1e-4);
        assert!((state.emblem_spin - TAU).abs() < 1e-3);
        assert!(!state.emblem_visible);
        assert!(state.gallery_visible);
        assert!((state.gallery_opacity - 1.0).abs() < 1e-4);
        for card in &state.cards {
            assert!(card.visible);
            assert!(card.rise.abs() < 1e-4);
        }
    }

    #[test]
    fn test_gallery_to_detail_faces_card_forward() {
        let (config, mut state) = setup();
        let mut animator = InteractionAnimator::new();
        for card in &mut state.cards {
            card.rise = 0.0;
        }
        state.cards[1].rotation = 0.4;

        animator.gallery_to_detail(1, &state, &config);
        run(&mut animator, &mut state, 3.0);

        let card = state.card_world_position(1).unwrap();
        assert!((card - Vec3::new(0.0, 0.0, 6.0)).length() < 1e-3, "card at {:?}", card);
        assert!((state.camera_target - card).length() < 1e-3);
        assert!((state.camera_position - (card + config.camera.detail_offset())).length() < 1e-3);
        assert!((state.cards[1].rotation - state.cards[1].initial_rotation).abs() < 1e-4);
        assert!(state.gallery_opacity.abs() < 1e-4);
    }

    #[test]
    fn test_nearest_angle() {
        assert!((nearest_angle(0.0, 0.5) - 0.5).abs() < 1e-6);
        assert!((nearest_angle(0.0, -3.0 * PI / 2.0) - PI / 2.0).abs() < 1e-5);
        assert!((nearest_angle(TAU, 0.1) - (TAU + 0.1)).abs() < 1e-5);
    }
}
