//! The Showcase context: owns all mutable state and drives it
//!
//! The frontend translates browser/window input into [`Event`]s, calls
//! [`Showcase::tick`] once per frame, writes back any hash returned by
//! [`Showcase::take_hash_update`] (confirming it with
//! [`Showcase::confirm_hash_written`]), and renders [`Showcase::visual`] and
//! [`Showcase::ui`].

use bevy_math::{Vec2, Vec3};
use tracing::{debug, info, warn};

use crate::animator::InteractionAnimator;
use crate::config::{ConfigError, ShowcaseConfig};
use crate::frame::{damping_factor, FrameClock, FrameMetrics, FrameProbe, MetricsSampler};
use crate::framework::{Framework, FrameworkRegistry};
use crate::pick::{nearest_card, normalize_pointer, HoverChange, HoverTracker, RayCaster};
use crate::route::{Route, Router};
use crate::scene::SceneLayout;
use crate::state::{AppState, StateMachine, Transition};
use crate::visual::VisualState;

/// Input to the showcase
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// Cursor position in window pixels, origin top-left
    CursorMoved(Vec2),
    /// Pointer position already normalized to [-1, 1]
    PointerMoved(Vec2),
    /// Viewport size in window pixels
    Resized { width: f32, height: f32 },
    /// The landing "enter" control
    Enter,
    /// The detail "back" control
    Back,
    /// Primary click on the scene
    Click,
    /// The URL hash changed (also sent once with the initial hash)
    HashChanged(String),
}

/// Contents of the detail panel
#[derive(Debug, Clone, PartialEq)]
pub struct DetailPanel {
    pub name: String,
    pub description: String,
    pub logo_url: String,
}

impl From<&Framework> for DetailPanel {
    fn from(framework: &Framework) -> Self {
        Self {
            name: framework.name.clone(),
            description: framework.description.clone(),
            logo_url: framework.logo_url.clone(),
        }
    }
}

/// State of the 2D overlays
#[derive(Debug, Clone, PartialEq)]
pub struct UiState {
    pub header_visible: bool,
    pub gallery_container_visible: bool,
    /// Hovered framework name shown near the pointer
    pub hover_label: Option<String>,
    pub detail: Option<DetailPanel>,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            header_visible: true,
            gallery_container_visible: false,
            hover_label: None,
            detail: None,
        }
    }
}

pub struct Showcase {
    config: ShowcaseConfig,
    registry: FrameworkRegistry,
    layout: SceneLayout,
    machine: StateMachine,
    router: Router,
    hover: HoverTracker,
    animator: InteractionAnimator,
    visual: VisualState,
    ui: UiState,
    pointer: Vec2,
    viewport: Vec2,
    clock: FrameClock,
    metrics: MetricsSampler,
    pending_hash: Option<String>,
}

impl Showcase {
    pub fn new(config: ShowcaseConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let registry = config.registry()?;
        let layout = SceneLayout::build(&config.scene, &registry);
        let visual = VisualState::initial(&layout, &config);
        let metrics = MetricsSampler::new(config.metrics.sample_interval);

        info!(frameworks = registry.len(), "Showcase initialized");

        Ok(Self {
            config,
            registry,
            layout,
            machine: StateMachine::new(),
            router: Router::new(),
            hover: HoverTracker::new(),
            animator: InteractionAnimator::new(),
            visual,
            ui: UiState::default(),
            pointer: Vec2::ZERO,
            viewport: Vec2::ZERO,
            clock: FrameClock::new(),
            metrics,
            pending_hash: None,
        })
    }

    pub fn config(&self) -> &ShowcaseConfig {
        &self.config
    }

    pub fn registry(&self) -> &FrameworkRegistry {
        &self.registry
    }

    pub fn layout(&self) -> &SceneLayout {
        &self.layout
    }

    pub fn state(&self) -> AppState {
        self.machine.state()
    }

    pub fn selected_framework(&self) -> Option<&Framework> {
        self.machine.selected().and_then(|i| self.registry.get(i))
    }

    pub fn hovered_card(&self) -> Option<usize> {
        self.hover.hovered()
    }

    /// Card currently styled as hovered by the animator
    pub fn entered_card(&self) -> Option<usize> {
        self.animator.entered_card()
    }

    pub fn pointer(&self) -> Vec2 {
        self.pointer
    }

    pub fn visual(&self) -> &VisualState {
        &self.visual
    }

    pub fn ui(&self) -> &UiState {
        &self.ui
    }

    pub fn clock(&self) -> &FrameClock {
        &self.clock
    }

    pub fn metrics(&self) -> Option<&FrameMetrics> {
        self.metrics.latest()
    }

    pub fn current_hash(&self) -> &str {
        self.router.current_hash()
    }

    /// Hash the frontend should write to the URL, if any
    pub fn take_hash_update(&mut self) -> Option<String> {
        self.pending_hash.take()
    }

    /// The frontend wrote `hash` to the URL
    pub fn confirm_hash_written(&mut self, hash: &str) {
        self.router.commit(hash);
    }

    /// Dispatch one input event; returns the transition it caused
    pub fn handle(&mut self, event: Event) -> Option<Transition> {
        match event {
            Event::CursorMoved(position) => {
                if let Some(pointer) = normalize_pointer(position, self.viewport) {
                    self.pointer = pointer;
                }
                None
            }
            Event::PointerMoved(pointer) => {
                self.pointer = pointer.clamp(Vec2::NEG_ONE, Vec2::ONE);
                None
            }
            Event::Resized { width, height } => {
                if width > 0.0 && height > 0.0 {
                    self.viewport = Vec2::new(width, height);
                }
                None
            }
            Event::Enter => {
                let transition = self.machine.request_enter()?;
                self.navigate(transition, Route::Gallery)
            }
            Event::Back => {
                let transition = self.machine.request_back()?;
                self.navigate(transition, Route::Gallery)
            }
            Event::Click => {
                if self.machine.state() != AppState::Gallery {
                    return None;
                }
                let card = self.hover.hovered()?;
                let framework = self.registry.get(card)?;
                let route = Route::Framework(framework.route_key());
                let transition = self.machine.request_detail(card)?;
                self.navigate(transition, route)
            }
            Event::HashChanged(hash) => {
                let transition = self.router.route(&hash, &self.machine, &self.registry)?;
                self.perform(transition)
            }
        }
    }

    /// Transition requested by a control: perform it and mirror it in the hash
    fn navigate(&mut self, transition: Transition, route: Route) -> Option<Transition> {
        let performed = self.perform(transition)?;
        if let Some(hash) = self.router.sync(&route) {
            debug!(hash = %hash, "Hash update queued");
            self.pending_hash = Some(hash);
        }
        Some(performed)
    }

    fn perform(&mut self, transition: Transition) -> Option<Transition> {
        let from = self.machine.state();
        if !self.machine.apply(transition) {
            return None;
        }

        match transition {
            Transition::EnterGallery => {
                self.ui.header_visible = false;
                self.ui.gallery_container_visible = true;
                self.animator.landing_to_gallery(&self.visual, &self.config);
            }
            Transition::ShowDetail { framework } => {
                if let Some(HoverChange::Exit(card)) = self.hover.clear() {
                    self.animator.hover_exit(card, &self.config);
                }
                self.ui.hover_label = None;
                self.ui.gallery_container_visible = false;
                self.ui.detail = self.registry.get(framework).map(DetailPanel::from);
                self.animator.gallery_to_detail(framework, &self.visual, &self.config);
            }
            Transition::OpenDetail { framework } => {
                self.ui.header_visible = false;
                self.ui.gallery_container_visible = false;
                self.ui.detail = self.registry.get(framework).map(DetailPanel::from);
                self.animator.landing_to_detail(framework, &self.visual, &self.config);
            }
            Transition::ReturnToGallery => {
                self.ui.detail = None;
                self.ui.gallery_container_visible = true;
                self.animator.detail_to_gallery(&self.config);
            }
        }

        info!(
            from = %from,
            to = %self.machine.state(),
            selected = self.selected_framework().map(|f| f.name.as_str()).unwrap_or("-"),
            "State transition"
        );
        Some(transition)
    }

    /// Run one frame
    pub fn tick(&mut self, dt: f32, caster: &mut dyn RayCaster, probe: FrameProbe) {
        self.clock.advance(dt);
        let dt = self.clock.last_delta();

        self.visual.starfield_rotation += self.config.scene.starfield_spin * dt;

        match self.machine.state() {
            AppState::Landing => self.update_landing(dt),
            AppState::Gallery => {
                self.update_gallery_rotation(dt);
                self.update_hover(caster);
            }
            AppState::Detail => {}
        }

        self.animator.tick(dt, &mut self.visual);
        self.metrics.sample(&self.clock, &probe);
    }

    fn update_landing(&mut self, dt: f32) {
        self.visual.emblem_spin += self.config.landing.emblem_spin * dt;

        let camera = &self.config.camera;
        let base = camera.default_position();
        let target = Vec3::new(
            base.x + self.pointer.x * camera.parallax,
            base.y + self.pointer.y * camera.parallax,
            self.visual.camera_position.z,
        );
        let k = damping_factor(camera.damping, dt);
        self.visual.camera_position += (target - self.visual.camera_position) * k;
        self.visual.camera_target = self.layout.emblem.position;
    }

    fn update_gallery_rotation(&mut self, dt: f32) {
        let gallery = &self.config.gallery;
        let target = self.pointer.x * gallery.rotation_factor;
        let k = damping_factor(gallery.damping, dt);
        self.visual.gallery_rotation += (target - self.visual.gallery_rotation) * k;
    }

    fn update_hover(&mut self, caster: &mut dyn RayCaster) {
        let candidate = match caster.cast(self.pointer) {
            Ok(hits) => nearest_card(&hits).filter(|&card| card < self.registry.len()),
            Err(e) => {
                warn!(error = %e, "Picking failed, treating as no hit");
                None
            }
        };

        for change in self.hover.update(candidate) {
            match change {
                HoverChange::Exit(card) => {
                    self.animator.hover_exit(card, &self.config);
                    self.ui.hover_label = None;
                }
                HoverChange::Enter(card) => {
                    self.animator.hover_enter(card, &self.config);
                    self.ui.hover_label = self.registry.get(card).map(|f| f.name.clone());
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pick::{PickError, RayHit};

    /// Reports whatever hits it was last given
    #[derive(Default)]
    struct FakeCaster {
        hits: Vec<RayHit>,
        fail: bool,
        calls: usize,
    }

    impl FakeCaster {
        fn hovering(card: usize) -> Self {
            Self {
                hits: vec![RayHit { card, distance: 5.0 }],
                ..Default::default()
            }
        }
    }

    impl RayCaster for FakeCaster {
        fn cast(&mut self, _pointer: Vec2) -> Result<Vec<RayHit>, PickError> {
            self.calls += 1;
            if self.fail {
                return Err(PickError::Backend("boom".to_string()));
            }
            Ok(self.hits.clone())
        }
    }

    const DT: f32 = 1.0 / 60.0;

    fn showcase() -> Showcase {
        Showcase::new(ShowcaseConfig::builtin().unwrap()).unwrap()
    }

    fn run(showcase: &mut Showcase, caster: &mut FakeCaster, seconds: f32) {
        let frames = (seconds / DT).ceil() as usize;
        for _ in 0..frames {
            showcase.tick(DT, caster, FrameProbe::default());
        }
    }

    fn in_gallery() -> Showcase {
        let mut showcase = showcase();
        showcase.handle(Event::Enter);
        showcase.take_hash_update();
        showcase
    }

    #[test]
    fn test_every_framework_route_selects_it() {
        let names: Vec<String> = showcase().registry().iter().map(|f| f.name.clone()).collect();
        for name in names {
            let mut showcase = in_gallery();
            let t = showcase.handle(Event::HashChanged(format!("#/framework/{}", name)));
            assert!(matches!(t, Some(Transition::ShowDetail { .. })));
            assert_eq!(showcase.state(), AppState::Detail);

            let selected = showcase.selected_framework().unwrap().clone();
            assert_eq!(selected.name, name);
            let panel = showcase.ui().detail.as_ref().unwrap();
            assert_eq!(panel.name, selected.name);
            assert_eq!(panel.description, selected.description);
        }
    }

    #[test]
    fn test_vue_scenario() {
        let mut showcase = in_gallery();
        showcase.handle(Event::HashChanged("#/framework/vue".to_string()));

        assert_eq!(showcase.state(), AppState::Detail);
        assert_eq!(showcase.selected_framework().unwrap().name, "Vue");
        assert_eq!(
            showcase.ui().detail.as_ref().unwrap().description,
            showcase.registry().find("Vue").unwrap().1.description
        );
        // The hash already says where we are
        assert_eq!(showcase.take_hash_update(), None);
    }

    #[test]
    fn test_mixed_case_route() {
        let mut showcase = in_gallery();
        showcase.handle(Event::HashChanged("#/framework/REACT".to_string()));
        assert_eq!(showcase.selected_framework().unwrap().name, "React");
    }

    #[test]
    fn test_unknown_framework_never_changes_state() {
        for mut showcase in [showcase(), in_gallery()] {
            let before = showcase.state();
            assert!(showcase
                .handle(Event::HashChanged("#/framework/unknown".to_string()))
                .is_none());
            assert!(showcase.handle(Event::HashChanged("#/nowhere".to_string())).is_none());
            assert!(showcase.handle(Event::HashChanged(String::new())).is_none());
            assert_eq!(showcase.state(), before);
            assert!(showcase.selected_framework().is_none());
        }
    }

    #[test]
    fn test_return_to_gallery_clears_selection() {
        for (i, back) in [true, false].into_iter().enumerate() {
            let mut showcase = in_gallery();
            let hash = format!("#/framework/{}", showcase.registry().get(i + 1).unwrap().name);
            showcase.handle(Event::HashChanged(hash));

            if back {
                assert_eq!(showcase.handle(Event::Back), Some(Transition::ReturnToGallery));
                assert_eq!(showcase.take_hash_update(), Some("#/gallery".to_string()));
            } else {
                showcase.handle(Event::HashChanged("#/gallery".to_string()));
                assert_eq!(showcase.take_hash_update(), None);
            }

            assert_eq!(showcase.state(), AppState::Gallery);
            assert!(showcase.selected_framework().is_none());
            assert!(showcase.ui().detail.is_none());
        }
    }

    #[test]
    fn test_detail_ignores_other_framework() {
        let mut showcase = in_gallery();
        showcase.handle(Event::HashChanged("#/framework/react".to_string()));
        assert!(showcase
            .handle(Event::HashChanged("#/framework/svelte".to_string()))
            .is_none());
        assert_eq!(showcase.selected_framework().unwrap().name, "React");
    }

    #[test]
    fn test_gallery_trigger_twice_is_noop() {
        let mut showcase = showcase();
        assert_eq!(showcase.handle(Event::Enter), Some(Transition::EnterGallery));
        assert_eq!(showcase.take_hash_update(), Some("#/gallery".to_string()));

        assert!(showcase.handle(Event::Enter).is_none());
        assert!(showcase.handle(Event::HashChanged("#/gallery".to_string())).is_none());
        assert_eq!(showcase.take_hash_update(), None);
        assert_eq!(showcase.state(), AppState::Gallery);
    }

    #[test]
    fn test_framework_link_opens_detail_from_landing() {
        let mut showcase = showcase();
        let mut caster = FakeCaster::hovering(0);
        let t = showcase.handle(Event::HashChanged("#/framework/vue".to_string()));
        assert_eq!(t, Some(Transition::OpenDetail { framework: 2 }));
        assert_eq!(showcase.state(), AppState::Detail);
        assert_eq!(showcase.selected_framework().unwrap().name, "Vue");
        assert!(!showcase.ui().header_visible);
        assert!(!showcase.ui().gallery_container_visible);
        assert_eq!(showcase.ui().detail.as_ref().unwrap().name, "Vue");
        assert_eq!(showcase.take_hash_update(), None);

        run(&mut showcase, &mut caster, 3.0);
        assert!(!showcase.visual().emblem_visible);
        assert!(showcase.visual().cards.iter().all(|c| c.visible));
        assert_eq!(caster.calls, 0);

        // Back lands in a fully revealed gallery
        assert_eq!(showcase.handle(Event::Back), Some(Transition::ReturnToGallery));
        run(&mut showcase, &mut caster, 3.0);
        assert_eq!(showcase.state(), AppState::Gallery);
        assert!(showcase.ui().gallery_container_visible);
        assert!((showcase.visual().gallery_opacity - 1.0).abs() < 1e-4);
    }

    #[test]
    fn test_enter_ignored_outside_landing() {
        let mut showcase = in_gallery();
        showcase.handle(Event::HashChanged("#/framework/react".to_string()));
        assert!(showcase.handle(Event::Enter).is_none());
        assert_eq!(showcase.state(), AppState::Detail);
        assert_eq!(showcase.selected_framework().unwrap().name, "React");
        assert_eq!(showcase.take_hash_update(), None);
    }

    #[test]
    fn test_spaced_name_round_trips_through_hash() {
        let mut config = ShowcaseConfig::builtin().unwrap();
        config.frameworks[0].name = "Next JS".to_string();
        let mut showcase = Showcase::new(config).unwrap();
        showcase.handle(Event::Enter);
        showcase.take_hash_update();

        let mut caster = FakeCaster::hovering(0);
        showcase.tick(DT, &mut caster, FrameProbe::default());
        showcase.handle(Event::Click);
        let hash = showcase.take_hash_update().unwrap();
        assert_eq!(hash, "#/framework/next%20js");
        showcase.confirm_hash_written(&hash);

        showcase.handle(Event::Back);
        assert_eq!(showcase.state(), AppState::Gallery);
        // Browser history back to the framework page
        let t = showcase.handle(Event::HashChanged("#/framework/next%20js".to_string()));
        assert_eq!(t, Some(Transition::ShowDetail { framework: 0 }));
        assert_eq!(showcase.selected_framework().unwrap().name, "Next JS");
    }

    #[test]
    fn test_unconfirmed_hash_write_keeps_known_url() {
        let mut showcase = in_gallery();
        showcase.handle(Event::HashChanged("#/framework/react".to_string()));
        showcase.handle(Event::Back);
        // The write failed: the URL still shows the framework
        assert_eq!(showcase.take_hash_update(), Some("#/gallery".to_string()));
        assert_eq!(showcase.current_hash(), "#/framework/react");

        // Reopening it needs no write, but leaving it again does
        let mut caster = FakeCaster::hovering(0);
        showcase.tick(DT, &mut caster, FrameProbe::default());
        showcase.handle(Event::Click);
        assert_eq!(showcase.take_hash_update(), None);
        showcase.handle(Event::Back);
        let hash = showcase.take_hash_update().unwrap();
        assert_eq!(hash, "#/gallery");

        showcase.confirm_hash_written(&hash);
        assert_eq!(showcase.current_hash(), "#/gallery");
    }

    #[test]
    fn test_gallery_hash_from_landing() {
        let mut showcase = showcase();
        let t = showcase.handle(Event::HashChanged("#/gallery".to_string()));
        assert_eq!(t, Some(Transition::EnterGallery));
        assert!(!showcase.ui().header_visible);
        assert_eq!(showcase.take_hash_update(), None);
    }

    #[test]
    fn test_at_most_one_card_entered() {
        let mut showcase = in_gallery();
        let mut caster = FakeCaster::hovering(0);
        run(&mut showcase, &mut caster, 3.0);
        assert_eq!(showcase.hovered_card(), Some(0));
        assert_eq!(showcase.entered_card(), Some(0));
        assert_eq!(showcase.ui().hover_label.as_deref(), Some("React"));

        caster.hits = vec![
            RayHit { card: 3, distance: 8.0 },
            RayHit { card: 2, distance: 7.0 },
        ];
        showcase.tick(DT, &mut caster, FrameProbe::default());
        assert_eq!(showcase.hovered_card(), Some(2));
        assert_eq!(showcase.entered_card(), Some(2));
        assert_eq!(showcase.ui().hover_label.as_deref(), Some("Vue"));

        run(&mut showcase, &mut caster, 1.0);
        let enlarged: Vec<usize> = showcase
            .visual()
            .cards
            .iter()
            .enumerate()
            .filter(|(_, c)| c.scale > 1.01)
            .map(|(i, _)| i)
            .collect();
        assert_eq!(enlarged, vec![2]);

        caster.hits.clear();
        showcase.tick(DT, &mut caster, FrameProbe::default());
        assert_eq!(showcase.hovered_card(), None);
        assert_eq!(showcase.entered_card(), None);
        assert!(showcase.ui().hover_label.is_none());
    }

    #[test]
    fn test_picking_inert_outside_gallery() {
        let mut showcase = showcase();
        let mut caster = FakeCaster::hovering(1);
        run(&mut showcase, &mut caster, 0.5);
        assert_eq!(caster.calls, 0);
        assert_eq!(showcase.hovered_card(), None);

        showcase.handle(Event::Enter);
        showcase.tick(DT, &mut caster, FrameProbe::default());
        assert_eq!(caster.calls, 1);

        showcase.handle(Event::HashChanged("#/framework/angular".to_string()));
        // Entering detail clears the hover
        assert_eq!(showcase.hovered_card(), None);
        assert!(showcase.ui().hover_label.is_none());
        run(&mut showcase, &mut caster, 0.5);
        assert_eq!(caster.calls, 1);
    }

    #[test]
    fn test_failed_pick_keeps_running() {
        let mut showcase = in_gallery();
        let mut caster = FakeCaster::hovering(1);
        showcase.tick(DT, &mut caster, FrameProbe::default());
        assert_eq!(showcase.hovered_card(), Some(1));

        caster.fail = true;
        run(&mut showcase, &mut caster, 0.2);
        assert_eq!(showcase.hovered_card(), None);
        assert_eq!(showcase.clock().frames(), 1 + (0.2f32 / DT).ceil() as u64);
    }

    #[test]
    fn test_click_on_hovered_card_opens_detail() {
        let mut showcase = in_gallery();
        assert!(showcase.handle(Event::Click).is_none());

        let mut caster = FakeCaster::hovering(3);
        showcase.tick(DT, &mut caster, FrameProbe::default());
        assert_eq!(
            showcase.handle(Event::Click),
            Some(Transition::ShowDetail { framework: 3 })
        );
        assert_eq!(showcase.take_hash_update(), Some("#/framework/svelte".to_string()));

        // The browser echoes the hash back; nothing happens
        assert!(showcase
            .handle(Event::HashChanged("#/framework/svelte".to_string()))
            .is_none());
        assert_eq!(showcase.selected_framework().unwrap().name, "Svelte");
    }

    #[test]
    fn test_round_trip_restores_camera() {
        let mut showcase = showcase();
        let mut caster = FakeCaster::default();
        let default_position = showcase.visual().camera_position;
        let default_target = showcase.visual().camera_target;

        showcase.handle(Event::Enter);
        run(&mut showcase, &mut caster, 4.0);
        showcase.handle(Event::HashChanged("#/framework/angular".to_string()));
        run(&mut showcase, &mut caster, 3.0);
        assert!((showcase.visual().camera_position - default_position).length() > 1.0);

        showcase.handle(Event::Back);
        run(&mut showcase, &mut caster, 3.0);
        assert!((showcase.visual().camera_position - default_position).length() < 1e-3);
        assert!((showcase.visual().camera_target - default_target).length() < 1e-3);
        assert_eq!(showcase.state(), AppState::Gallery);
    }

    #[test]
    fn test_landing_parallax_follows_pointer() {
        let mut showcase = showcase();
        let mut caster = FakeCaster::default();
        showcase.handle(Event::Resized { width: 1000.0, height: 500.0 });
        showcase.handle(Event::CursorMoved(Vec2::new(1000.0, 0.0)));
        assert_eq!(showcase.pointer(), Vec2::new(1.0, 1.0));

        run(&mut showcase, &mut caster, 5.0);
        let camera = showcase.visual().camera_position;
        assert!((camera.x - 2.0).abs() < 1e-2, "camera {:?}", camera);
        assert!((camera.y - 2.0).abs() < 1e-2);
        assert_eq!(camera.z, 12.0);
        assert_eq!(showcase.visual().camera_target, Vec3::ZERO);
        assert!(showcase.visual().emblem_spin > 1.0);
    }

    #[test]
    fn test_gallery_rotation_eases_toward_pointer() {
        let mut showcase = in_gallery();
        let mut caster = FakeCaster::default();
        showcase.handle(Event::PointerMoved(Vec2::new(-1.0, 0.0)));
        run(&mut showcase, &mut caster, 5.0);
        assert!((showcase.visual().gallery_rotation + 0.5).abs() < 1e-2);

        let stars = showcase.visual().starfield_rotation;
        assert!((stars - 0.02 * 5.0).abs() < 1e-2);
    }

    #[test]
    fn test_metrics_sampled_every_tenth_tick() {
        let mut showcase = showcase();
        let mut caster = FakeCaster::default();
        let probe = FrameProbe {
            heap_bytes: None,
            draw_calls: Some(40),
        };
        for _ in 0..9 {
            showcase.tick(0.02, &mut caster, probe);
        }
        assert!(showcase.metrics().is_none());
        showcase.tick(0.02, &mut caster, probe);
        let metrics = showcase.metrics().unwrap();
        assert_eq!(metrics.heap_label(), "unavailable");
        assert_eq!(metrics.draw_calls, Some(40));
    }
}
