//! Page bootstrap and the notification surface the host loop drives.
//!
//! `initialize_page` performs the once-per-page-view work in a fixed order:
//! attribution capture, document scan, tracker construction, auto-show
//! scheduling. Everything afterwards flows through the `on_*` entry points,
//! which the host calls as the corresponding browser notifications arrive.

use std::sync::Arc;

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::analytics::{Analytics, DataLayer, TrackEvents};
use crate::attribution::{self, SessionStore};
use crate::dom::{ElementLocator, MemoryDom, NodeId};
use crate::effects::{resolve_fragment, AccordionGroup, CounterAnimation, CounterRegistry,
    FadeInObserver, MockSubmit, Reveal, ScrollRequest, SubmitOutcome, CONFIRMATION_RESET_DELAY};
use crate::engage::{Clock, ScrollDepthTracker, ScrollMetrics, SystemClock, TimeOnPageTracker};
use crate::instrument::{dispatch, Binder, DomainEvent};
use crate::logger::Logger;
use crate::page::PageContext;
use crate::popup::{DismissReason, DomPopupSurface, PopupController, PopupPhase, TimerQueue};

use super::config::PageConfig;

/// Live state of one page view.
pub struct PageRuntime {
    dom: MemoryDom,
    analytics: Analytics,
    binder: Binder,
    scroll: ScrollDepthTracker,
    time: TimeOnPageTracker,
    popup: PopupController,
    forms: MockSubmit,
    form_resets: TimerQueue<NodeId>,
    fades: FadeInObserver,
    counters: CounterRegistry,
    accordion: AccordionGroup,
    clock: Arc<dyn Clock>,
    config: PageConfig,
}

/// Builds the runtime for a page view, appending events to the process-wide
/// data layer. Attribution capture runs before anything else so the stored
/// record exists for the rest of the session.
pub fn initialize_page(
    context: PageContext,
    dom: MemoryDom,
    store: &dyn SessionStore,
    config: PageConfig,
) -> PageRuntime {
    build(
        context,
        dom,
        store,
        config,
        Arc::new(SystemClock),
        StdRng::from_entropy(),
        DataLayer::shared(),
    )
}

/// Deterministic construction for tests: explicit clock and rotation seed,
/// and a private data layer so assertions see only this page's events.
pub fn initialize_page_with(
    context: PageContext,
    dom: MemoryDom,
    store: &dyn SessionStore,
    config: PageConfig,
    clock: Arc<dyn Clock>,
    rng: StdRng,
) -> PageRuntime {
    build(context, dom, store, config, clock, rng, DataLayer::new())
}

fn build(
    context: PageContext,
    dom: MemoryDom,
    store: &dyn SessionStore,
    config: PageConfig,
    clock: Arc<dyn Clock>,
    rng: StdRng,
    data_layer: DataLayer,
) -> PageRuntime {
    let logger = Logger::new("sitetag/runtime");
    let analytics = Analytics::new(context, data_layer);

    attribution::capture(analytics.page(), store, &analytics);

    let binder = Binder::scan(&dom, analytics.page());
    let now = clock.now();
    let surface = DomPopupSurface::bind(dom.clone());
    let mut popup = PopupController::with_rng(Box::new(surface), config.reshow_policy, rng);
    popup.schedule_auto_show(config.popup_auto_show_delay, now);

    let mut fades = FadeInObserver::new();
    for node in dom.document_order() {
        if dom.has_class(node, "fade-in") {
            fades.register(node);
        }
    }
    let counters = CounterRegistry::scan(&dom);
    let accordion = AccordionGroup::new(binder.tracked_faqs());

    logger.debug(format!("page initialized: {}", analytics.page().path()));

    PageRuntime {
        forms: MockSubmit::new(dom.clone()),
        dom,
        binder,
        scroll: ScrollDepthTracker::new(),
        time: TimeOnPageTracker::new(now),
        popup,
        form_resets: TimerQueue::new(),
        fades,
        counters,
        accordion,
        clock,
        config,
        analytics,
    }
}

impl PageRuntime {
    pub fn analytics(&self) -> &Analytics {
        &self.analytics
    }

    pub fn dom(&self) -> &MemoryDom {
        &self.dom
    }

    pub fn popup_phase(&self) -> PopupPhase {
        self.popup.phase()
    }

    pub fn current_provider_key(&self) -> &'static str {
        self.popup.current_provider().key
    }

    /// Click notification. Tracked elements produce their event, a provider
    /// logo opens the popup for its provider, and a same-page fragment link
    /// yields the smooth-scroll destination for the host to animate.
    pub fn on_click(&mut self, target: NodeId) -> Option<ScrollRequest> {
        if let Some(event) = self.binder.handle_click(&self.dom, target) {
            if let DomainEvent::FaqToggled { question_index, .. } = &event {
                self.accordion.toggle(question_index - 1);
            }
            dispatch(&event, &self.analytics);
        }

        for node in self.dom.ancestry(target) {
            if self.dom.has_class(node, "provider-logo") {
                let key = self.dom.attr(node, "data-provider").unwrap_or_default();
                self.popup.show(Some(key.as_str()), &self.analytics);
                return None;
            }
        }

        for node in self.dom.ancestry(target) {
            if let Some(href) = self.dom.href(node) {
                if href.starts_with('#') {
                    return resolve_fragment(&self.dom, &href, self.config.header_height);
                }
                break;
            }
        }
        None
    }

    pub fn on_focus(&mut self, field: NodeId) {
        if let Some(event) = self.binder.handle_focus(field) {
            dispatch(&event, &self.analytics);
        }
    }

    /// Submit notification. Validation runs in place of real submission; the
    /// tracked outcome carries the success flag, and an accepted submission
    /// schedules the confirmation reset.
    pub fn on_submit(&mut self, form: NodeId) -> SubmitOutcome {
        let outcome = self.forms.submit(form);
        if let Some(DomainEvent::FormSubmitted { form_name }) = self.binder.handle_submit(form) {
            self.analytics
                .track_form_submit(&form_name, outcome == SubmitOutcome::Accepted);
        }
        if outcome == SubmitOutcome::Accepted {
            self.form_resets
                .schedule(form, CONFIRMATION_RESET_DELAY, self.clock.now());
        }
        outcome
    }

    pub fn on_scroll(&mut self, metrics: ScrollMetrics) {
        self.scroll.observe(metrics, &self.analytics);
    }

    /// Intersection notification batch: starts any stat counters that
    /// crossed their trigger ratio and returns the staggered fade reveals
    /// for the host to animate.
    pub fn on_intersection(&mut self, entries: &[(NodeId, f64)]) -> Vec<Reveal> {
        for (node, ratio) in entries {
            self.counters.trigger(*node, *ratio);
        }
        self.fades.observe_batch(entries)
    }

    pub fn counter_animation(&self, node: NodeId) -> Option<CounterAnimation> {
        self.counters.animation(node)
    }

    /// Zero-based index of the currently open FAQ item, if any.
    pub fn open_faq(&self) -> Option<usize> {
        self.accordion.open_item()
    }

    /// Periodic tick: advances time-on-page, fires due popup transitions,
    /// and resets forms whose confirmation delay elapsed.
    pub fn on_tick(&mut self) {
        let now = self.clock.now();
        self.time.poll(now, &self.analytics);
        self.popup.poll(now, &self.analytics);
        for form in self.form_resets.due(now) {
            self.forms.reset(form);
        }
    }

    pub fn on_escape(&mut self) {
        self.popup
            .dismiss(DismissReason::EscapeKey, self.clock.now(), &self.analytics);
    }

    pub fn on_overlay_click(&mut self) {
        self.popup
            .dismiss(DismissReason::OverlayClick, self.clock.now(), &self.analytics);
    }

    pub fn show_popup(&mut self, provider_key: Option<&str>) {
        self.popup.show(provider_key, &self.analytics);
    }

    pub fn dismiss_popup(&mut self) {
        self.popup
            .dismiss(DismissReason::CloseControl, self.clock.now(), &self.analytics);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attribution::MemorySessionStore;
    use crate::dom::ElementSpec;
    use crate::popup::ReshowPolicy;
    use crate::engage::ManualClock;
    use std::time::Duration;

    fn runtime_on(url: &str, dom: MemoryDom) -> (PageRuntime, Arc<ManualClock>) {
        let clock = Arc::new(ManualClock::new());
        let runtime = initialize_page_with(
            PageContext::new(url, "Home").unwrap(),
            dom,
            &MemorySessionStore::new(),
            PageConfig::default(),
            clock.clone(),
            StdRng::seed_from_u64(7),
        );
        (runtime, clock)
    }

    fn empty_dom() -> MemoryDom {
        let dom = MemoryDom::new();
        dom.insert(None, ElementSpec::new("body"));
        dom
    }

    #[test]
    fn auto_show_follows_the_configured_delay() {
        let (mut runtime, clock) = runtime_on("https://example.com/", empty_dom());
        assert_eq!(runtime.popup_phase(), PopupPhase::Hidden);

        clock.advance(Duration::from_secs(2));
        runtime.on_tick();
        assert_eq!(runtime.popup_phase(), PopupPhase::Visible);
    }

    #[test]
    fn escape_dismisses_and_reshow_follows_policy() {
        let (mut runtime, clock) = runtime_on("https://example.com/", empty_dom());
        clock.advance(Duration::from_secs(2));
        runtime.on_tick();

        runtime.on_escape();
        assert_eq!(runtime.popup_phase(), PopupPhase::Hidden);

        clock.advance(Duration::from_secs(4));
        runtime.on_tick();
        assert_eq!(runtime.popup_phase(), PopupPhase::Visible);
    }

    #[test]
    fn never_policy_stays_hidden_after_dismissal() {
        let clock = Arc::new(ManualClock::new());
        let mut runtime = initialize_page_with(
            PageContext::new("https://example.com/", "Home").unwrap(),
            empty_dom(),
            &MemorySessionStore::new(),
            PageConfig {
                reshow_policy: ReshowPolicy::Never,
                ..PageConfig::default()
            },
            clock.clone(),
            StdRng::seed_from_u64(7),
        );

        clock.advance(Duration::from_secs(2));
        runtime.on_tick();
        runtime.on_overlay_click();

        clock.advance(Duration::from_secs(60));
        runtime.on_tick();
        assert_eq!(runtime.popup_phase(), PopupPhase::Hidden);
    }

    #[test]
    fn fragment_click_yields_a_scroll_request() {
        let dom = MemoryDom::new();
        let body = dom.insert(None, ElementSpec::new("body"));
        let link = dom.insert(
            Some(body),
            ElementSpec::new("a").attr("href", "#pricing"),
        );
        let section = dom.insert(Some(body), ElementSpec::new("section").id("pricing"));
        dom.set_offset_top(section, 500);

        let (mut runtime, _clock) = runtime_on("https://example.com/", dom);
        let request = runtime.on_click(link).expect("fragment resolves");
        assert_eq!(request.target, section);
        assert_eq!(request.top, 420);
    }

    #[test]
    fn accepted_submission_resets_after_the_confirmation_delay() {
        let dom = MemoryDom::new();
        let body = dom.insert(None, ElementSpec::new("body"));
        let form = dom.insert(Some(body), ElementSpec::new("form").id("contact"));
        let field = dom.insert(
            Some(form),
            ElementSpec::new("input").attr("required", "").attr("value", "Ada"),
        );

        let (mut runtime, clock) = runtime_on("https://example.com/contact", dom.clone());
        assert_eq!(runtime.on_submit(form), SubmitOutcome::Accepted);
        assert!(dom.has_class(form, "submitted"));

        clock.advance(Duration::from_secs(2));
        runtime.on_tick();
        assert!(!dom.has_class(form, "submitted"));
        assert_eq!(dom.attr(field, "value").as_deref(), Some(""));
    }

    #[test]
    fn provider_logo_click_opens_its_popup() {
        let dom = MemoryDom::new();
        let body = dom.insert(None, ElementSpec::new("body"));
        let logo = dom.insert(
            Some(body),
            ElementSpec::new("img")
                .class("provider-logo")
                .attr("data-provider", "spectrum"),
        );
        let caption = dom.insert(Some(logo), ElementSpec::new("span").text("Spectrum"));

        let (mut runtime, _clock) = runtime_on("https://example.com/", dom);
        assert_eq!(runtime.popup_phase(), PopupPhase::Hidden);

        // A click on nested markup inside the logo still opens the popup.
        runtime.on_click(caption);
        assert_eq!(runtime.popup_phase(), PopupPhase::Visible);
        assert_eq!(runtime.current_provider_key(), "spectrum");
        let events: Vec<_> = runtime
            .analytics()
            .data_layer()
            .snapshot()
            .into_iter()
            .map(|entry| entry.event)
            .collect();
        assert!(events.contains(&"popup_interaction".to_owned()));
    }

    #[test]
    fn logo_without_provider_attribute_falls_back_to_default() {
        let dom = MemoryDom::new();
        let body = dom.insert(None, ElementSpec::new("body"));
        let logo = dom.insert(Some(body), ElementSpec::new("img").class("provider-logo"));

        let (mut runtime, _clock) = runtime_on("https://example.com/", dom);
        runtime.on_click(logo);
        assert_eq!(runtime.popup_phase(), PopupPhase::Visible);
        assert_eq!(runtime.current_provider_key(), "verizon");
    }

    #[test]
    fn intersection_batch_reveals_fades_and_starts_counters_once() {
        let dom = MemoryDom::new();
        let body = dom.insert(None, ElementSpec::new("body"));
        let card = dom.insert(Some(body), ElementSpec::new("section").class("fade-in"));
        let late = dom.insert(Some(body), ElementSpec::new("section").class("fade-in"));
        let stat = dom.insert(
            Some(body),
            ElementSpec::new("span").attr("data-count", "25000"),
        );

        let (mut runtime, _clock) = runtime_on("https://example.com/", dom);

        let reveals = runtime.on_intersection(&[(card, 0.4), (late, 0.3), (stat, 0.6)]);
        let delays: Vec<_> = reveals.iter().map(|reveal| (reveal.node, reveal.delay)).collect();
        assert_eq!(
            delays,
            [
                (card, Duration::ZERO),
                (late, Duration::from_millis(100))
            ]
        );
        let animation = runtime.counter_animation(stat).expect("counter started");
        assert_eq!(animation.target(), 25_000);

        // A later batch neither re-reveals nor restarts anything.
        assert!(runtime.on_intersection(&[(card, 1.0), (stat, 1.0)]).is_empty());
        assert_eq!(runtime.counter_animation(stat), Some(animation));
    }

    #[test]
    fn faq_clicks_follow_single_open_accordion_semantics() {
        let dom = MemoryDom::new();
        let body = dom.insert(None, ElementSpec::new("body"));
        let first = dom.insert(
            Some(body),
            ElementSpec::new("button").class("faq-question").text("First?"),
        );
        let second = dom.insert(
            Some(body),
            ElementSpec::new("button").class("faq-question").text("Second?"),
        );

        let (mut runtime, _clock) = runtime_on("https://example.com/faq", dom);
        assert_eq!(runtime.open_faq(), None);

        runtime.on_click(first);
        assert_eq!(runtime.open_faq(), Some(0));

        runtime.on_click(second);
        assert_eq!(runtime.open_faq(), Some(1));

        runtime.on_click(second);
        assert_eq!(runtime.open_faq(), None);

        let faq_events = runtime
            .analytics()
            .data_layer()
            .snapshot()
            .into_iter()
            .filter(|entry| entry.event == "faq_expand")
            .count();
        assert_eq!(faq_events, 3);
    }

    #[test]
    fn production_bootstrap_feeds_the_process_wide_queue() {
        let mut runtime = initialize_page(
            PageContext::new(
                "https://example.com/?utm_source=bootstrap_check&utm_medium=cpc",
                "Home",
            )
            .unwrap(),
            empty_dom(),
            &MemorySessionStore::new(),
            PageConfig::default(),
        );
        runtime.on_scroll(ScrollMetrics {
            scroll_top: 300.0,
            scroll_height: 2000.0,
            client_height: 1000.0,
        });

        let shared: Vec<_> = DataLayer::shared()
            .snapshot()
            .into_iter()
            .map(|entry| entry.event)
            .collect();
        assert!(shared.contains(&"utm_captured".to_owned()));
        assert!(shared.contains(&"scroll_depth".to_owned()));
    }

    #[test]
    fn scroll_and_time_events_reach_the_data_layer() {
        let (mut runtime, clock) = runtime_on("https://example.com/", empty_dom());

        runtime.on_scroll(ScrollMetrics {
            scroll_top: 600.0,
            scroll_height: 2000.0,
            client_height: 1000.0,
        });
        clock.advance(Duration::from_secs(35));
        runtime.on_tick();

        let events: Vec<_> = runtime
            .analytics()
            .data_layer()
            .snapshot()
            .into_iter()
            .map(|entry| entry.event)
            .collect();
        assert!(events.contains(&"scroll_depth".to_owned()));
        assert!(events.contains(&"time_on_page".to_owned()));
    }
}
