//! Rotation state machine for the promotional overlay.
//!
//! Two states, Hidden and Visible. Entry into Visible applies the provider
//! content, locks background scroll, and cancels any pending timer so
//! scheduled transitions never overlap. Entry into Hidden unlocks scroll
//! and, when the re-show policy allows, schedules a re-entry with a fresh
//! random provider.

use std::time::{Duration, Instant};

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::analytics::{EventSink, TrackEvents};

use super::providers::{provider_or_default, random_provider, ProviderDescriptor};
use super::surface::{PopupContent, PopupSurface};
use super::timer::{TimerHandle, TimerQueue};

/// Delay between page init and the automatic first show.
pub const AUTO_SHOW_DELAY: Duration = Duration::from_secs(2);

/// Delay between a dismissal and the scheduled re-show.
pub const RESHOW_DELAY: Duration = Duration::from_secs(4);

/// Whether a dismissal schedules a later re-show. Both behaviors ship in the
/// wild; the default is the re-showing variant.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReshowPolicy {
    AfterDelay(Duration),
    Never,
}

impl Default for ReshowPolicy {
    fn default() -> Self {
        ReshowPolicy::AfterDelay(RESHOW_DELAY)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PopupTimer {
    AutoShow,
    Reshow,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DismissReason {
    CloseControl,
    OverlayClick,
    EscapeKey,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PopupPhase {
    Hidden,
    Visible,
}

pub struct PopupController {
    surface: Box<dyn PopupSurface>,
    timers: TimerQueue<PopupTimer>,
    pending: Option<TimerHandle>,
    policy: ReshowPolicy,
    rng: StdRng,
    phase: PopupPhase,
    current: &'static ProviderDescriptor,
}

impl PopupController {
    pub fn new(surface: Box<dyn PopupSurface>, policy: ReshowPolicy) -> Self {
        Self::with_rng(surface, policy, StdRng::from_entropy())
    }

    /// Deterministic construction for tests.
    pub fn with_rng(surface: Box<dyn PopupSurface>, policy: ReshowPolicy, rng: StdRng) -> Self {
        Self {
            surface,
            timers: TimerQueue::new(),
            pending: None,
            policy,
            rng,
            phase: PopupPhase::Hidden,
            current: provider_or_default(""),
        }
    }

    pub fn phase(&self) -> PopupPhase {
        self.phase
    }

    pub fn current_provider(&self) -> &'static ProviderDescriptor {
        self.current
    }

    pub fn has_pending_timer(&self) -> bool {
        self.pending.is_some()
    }

    /// Arms the automatic first show. Called once at page init.
    pub fn schedule_auto_show(&mut self, delay: Duration, now: Instant) {
        self.cancel_pending();
        self.pending = Some(self.timers.schedule(PopupTimer::AutoShow, delay, now));
    }

    /// Hidden→Visible (or content replacement when already visible).
    /// `key = None` picks a provider uniformly at random; an unrecognized
    /// key degrades to the default provider.
    pub fn show(&mut self, key: Option<&str>, sink: &dyn EventSink) {
        let provider = match key {
            Some(key) => provider_or_default(key),
            None => random_provider(&mut self.rng),
        };

        // Entering Visible invalidates any scheduled transition.
        self.cancel_pending();

        self.current = provider;
        self.surface.apply(&PopupContent::for_provider(provider));
        self.surface.set_visible(true);
        self.surface.set_scroll_locked(true);
        self.phase = PopupPhase::Visible;
        sink.track_popup_interaction("show", provider.display_name);
    }

    /// Visible→Hidden. No-op while hidden so repeated Escape presses or
    /// overlay clicks cannot stack re-show timers.
    pub fn dismiss(&mut self, _reason: DismissReason, now: Instant, sink: &dyn EventSink) {
        if self.phase == PopupPhase::Hidden {
            return;
        }

        self.surface.set_visible(false);
        self.surface.set_scroll_locked(false);
        self.phase = PopupPhase::Hidden;
        sink.track_popup_interaction("dismiss", self.current.display_name);

        if let ReshowPolicy::AfterDelay(delay) = self.policy {
            self.cancel_pending();
            self.pending = Some(self.timers.schedule(PopupTimer::Reshow, delay, now));
        }
    }

    /// Fires due timers. Both timer kinds re-enter Visible with a fresh
    /// random provider.
    pub fn poll(&mut self, now: Instant, sink: &dyn EventSink) {
        let fired = self.timers.due(now);
        if !fired.is_empty() {
            self.pending = None;
        }
        for timer in fired {
            match timer {
                PopupTimer::AutoShow | PopupTimer::Reshow => self.show(None, sink),
            }
        }
    }

    pub fn next_due(&self) -> Option<Instant> {
        self.timers.next_due()
    }

    fn cancel_pending(&mut self) {
        if let Some(handle) = self.pending.take() {
            self.timers.cancel(handle);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::providers::{DEFAULT_PROVIDER_KEY, PROVIDERS};
    use super::super::surface::RecordingSurface;
    use super::*;
    use crate::analytics::RecordingSink;
    use crate::engage::{Clock, ManualClock};
    use std::collections::HashMap;

    fn controller(policy: ReshowPolicy) -> (PopupController, RecordingSurface) {
        let surface = RecordingSurface::new();
        let controller = PopupController::with_rng(
            Box::new(surface.clone()),
            policy,
            StdRng::seed_from_u64(11),
        );
        (controller, surface)
    }

    #[test]
    fn unknown_key_resolves_to_default_provider() {
        let (mut controller, surface) = controller(ReshowPolicy::Never);
        let sink = RecordingSink::new();

        controller.show(Some("dialup"), &sink);

        assert_eq!(controller.phase(), PopupPhase::Visible);
        assert_eq!(controller.current_provider().key, DEFAULT_PROVIDER_KEY);
        let state = surface.state();
        assert!(state.visible);
        assert!(state.scroll_locked);
        assert_eq!(state.content.unwrap().variant, "verizon");
    }

    #[test]
    fn keyless_show_draws_from_the_full_set() {
        let (mut controller, _surface) = controller(ReshowPolicy::Never);
        let sink = RecordingSink::new();

        let mut counts: HashMap<&str, u32> = HashMap::new();
        for _ in 0..2_500 {
            controller.show(None, &sink);
            *counts.entry(controller.current_provider().key).or_default() += 1;
        }
        assert_eq!(counts.len(), PROVIDERS.len());
        for count in counts.values() {
            assert!((350..=650).contains(count), "skewed draw: {count}/2500");
        }
    }

    #[test]
    fn auto_show_fires_after_two_seconds() {
        let clock = ManualClock::new();
        let (mut controller, surface) = controller(ReshowPolicy::default());
        let sink = RecordingSink::new();

        controller.schedule_auto_show(AUTO_SHOW_DELAY, clock.now());
        clock.advance(Duration::from_secs(1));
        controller.poll(clock.now(), &sink);
        assert_eq!(controller.phase(), PopupPhase::Hidden);

        clock.advance(Duration::from_secs(1));
        controller.poll(clock.now(), &sink);
        assert_eq!(controller.phase(), PopupPhase::Visible);
        assert!(surface.state().visible);
        assert_eq!(sink.event_names(), ["popup_interaction"]);
    }

    #[test]
    fn dismissal_schedules_reshow_after_delay_not_before() {
        let clock = ManualClock::new();
        let (mut controller, surface) = controller(ReshowPolicy::default());
        let sink = RecordingSink::new();

        controller.show(Some("spectrum"), &sink);
        controller.dismiss(DismissReason::CloseControl, clock.now(), &sink);
        assert_eq!(controller.phase(), PopupPhase::Hidden);
        assert!(!surface.state().scroll_locked);

        clock.advance(Duration::from_secs(3));
        controller.poll(clock.now(), &sink);
        assert_eq!(controller.phase(), PopupPhase::Hidden);

        clock.advance(Duration::from_secs(1));
        controller.poll(clock.now(), &sink);
        assert_eq!(controller.phase(), PopupPhase::Visible);
    }

    #[test]
    fn never_policy_leaves_popup_hidden_after_dismiss() {
        let clock = ManualClock::new();
        let (mut controller, _surface) = controller(ReshowPolicy::Never);
        let sink = RecordingSink::new();

        controller.show(None, &sink);
        controller.dismiss(DismissReason::EscapeKey, clock.now(), &sink);

        clock.advance(Duration::from_secs(60));
        controller.poll(clock.now(), &sink);
        assert_eq!(controller.phase(), PopupPhase::Hidden);
        assert!(!controller.has_pending_timer());
    }

    #[test]
    fn manual_show_cancels_pending_reshow() {
        let clock = ManualClock::new();
        let (mut controller, surface) = controller(ReshowPolicy::default());
        let sink = RecordingSink::new();

        controller.show(Some("att"), &sink);
        controller.dismiss(DismissReason::OverlayClick, clock.now(), &sink);
        assert!(controller.has_pending_timer());

        // Clicking a provider logo while the re-show is pending must not
        // produce a second scheduled transition later.
        controller.show(Some("optimum"), &sink);
        assert!(!controller.has_pending_timer());

        clock.advance(Duration::from_secs(30));
        controller.poll(clock.now(), &sink);
        assert_eq!(controller.current_provider().key, "optimum");
        assert_eq!(surface.state().applied.len(), 2);
    }

    #[test]
    fn dismiss_while_hidden_is_a_noop() {
        let clock = ManualClock::new();
        let (mut controller, _surface) = controller(ReshowPolicy::default());
        let sink = RecordingSink::new();

        controller.dismiss(DismissReason::EscapeKey, clock.now(), &sink);
        assert!(sink.take_events().is_empty());
        assert!(!controller.has_pending_timer());
    }

    #[test]
    fn showing_a_new_provider_replaces_prior_content() {
        let (mut controller, surface) = controller(ReshowPolicy::Never);
        let sink = RecordingSink::new();

        controller.show(Some("xfinity"), &sink);
        controller.show(Some("spectrum"), &sink);

        let state = surface.state();
        assert_eq!(state.content.as_ref().unwrap().variant, "spectrum");
        assert_eq!(state.applied.len(), 2);
        assert_eq!(controller.phase(), PopupPhase::Visible);
    }
}
