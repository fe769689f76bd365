//! Typed tracking helpers mirroring the site's event taxonomy.
//!
//! Each helper fixes the event name and the `event_category`/`event_label`
//! conventions the tag-management container is configured against, so call
//! sites cannot drift from the taxonomy. Blanket-implemented for every
//! [`EventSink`], which keeps the helpers available on test sinks too.

use url::Url;

use super::api::EventSink;
use super::params::{entry, EventParams};

const QUESTION_TEXT_LIMIT: usize = 100;
const LINK_TEXT_LIMIT: usize = 100;
const CTA_TEXT_LIMIT: usize = 50;

pub trait TrackEvents: EventSink {
    fn track_phone_click(&self, phone_number: &str, location: &str) {
        self.emit(
            "phone_click",
            EventParams::from([
                entry("phone_number", phone_number),
                entry("click_location", location),
                entry("event_category", "engagement"),
                entry("event_label", format!("{location}_phone_click")),
            ]),
        );
    }

    fn track_form_interaction(&self, form_name: &str, action: &str, details: EventParams) {
        let mut params = EventParams::from([
            entry("form_name", form_name),
            entry("event_category", "form"),
            entry("event_label", format!("{form_name}_{action}")),
        ]);
        params.extend(details);
        self.emit(&format!("form_{action}"), params);
    }

    fn track_form_start(&self, form_name: &str) {
        self.track_form_interaction(form_name, "start", EventParams::new());
    }

    fn track_form_submit(&self, form_name: &str, success: bool) {
        let action = if success { "submit" } else { "error" };
        self.track_form_interaction(
            form_name,
            action,
            EventParams::from([entry("form_success", success)]),
        );
    }

    fn track_faq_expand(&self, question_text: &str, question_index: usize) {
        self.emit(
            "faq_expand",
            EventParams::from([
                entry("question_text", truncate(question_text, QUESTION_TEXT_LIMIT)),
                entry("question_index", question_index),
                entry("event_category", "engagement"),
                entry("event_label", format!("faq_{question_index}")),
            ]),
        );
    }

    fn track_scroll_depth(&self, percentage: u32) {
        self.emit(
            "scroll_depth",
            EventParams::from([
                entry("scroll_percentage", percentage),
                entry("event_category", "engagement"),
                entry("event_label", format!("scroll_{percentage}")),
            ]),
        );
    }

    fn track_time_on_page(&self, seconds: u32) {
        self.emit(
            "time_on_page",
            EventParams::from([
                entry("seconds", seconds),
                entry("event_category", "engagement"),
                entry("event_label", format!("time_{seconds}s")),
            ]),
        );
    }

    /// A malformed destination degrades to the raw URL as the label rather
    /// than failing the emission.
    fn track_outbound_click(&self, url: &str, link_text: &str) {
        let label = Url::parse(url)
            .ok()
            .and_then(|parsed| parsed.host_str().map(str::to_owned))
            .unwrap_or_else(|| url.to_owned());
        self.emit(
            "outbound_click",
            EventParams::from([
                entry("outbound_url", url),
                entry("link_text", truncate(link_text.trim(), LINK_TEXT_LIMIT)),
                entry("event_category", "outbound"),
                entry("event_label", label),
            ]),
        );
    }

    fn track_cta_click(&self, cta_text: &str, cta_location: &str, cta_type: &str) {
        self.emit(
            "cta_click",
            EventParams::from([
                entry("cta_text", truncate(cta_text, CTA_TEXT_LIMIT)),
                entry("cta_location", cta_location),
                entry("cta_type", cta_type),
                entry("event_category", "cta"),
                entry("event_label", format!("{cta_location}_{cta_type}")),
            ]),
        );
    }

    fn track_provider_view(&self, provider: &str) {
        self.emit(
            "provider_page_view",
            EventParams::from([
                entry("provider_name", provider),
                entry("event_category", "pageview"),
                entry("event_label", format!("provider_{}", slug(provider))),
            ]),
        );
    }

    fn track_popup_interaction(&self, action: &str, provider: &str) {
        self.emit(
            "popup_interaction",
            EventParams::from([
                entry("popup_action", action),
                entry("provider_name", provider),
                entry("event_category", "popup"),
                entry(
                    "event_label",
                    format!("popup_{action}_{}", provider.to_lowercase()),
                ),
            ]),
        );
    }

    fn track_pricing_view(&self) {
        self.emit(
            "view_pricing",
            EventParams::from([
                entry("event_category", "conversion_funnel"),
                entry("event_label", "pricing_page_view"),
            ]),
        );
    }

    fn track_service_select(&self, service_name: &str, price: f64) {
        self.emit(
            "select_service",
            EventParams::from([
                entry("service_name", service_name),
                entry("service_price", price),
                entry("event_category", "conversion_funnel"),
                entry("event_label", service_name),
            ]),
        );
    }

    fn track_script_error(&self, message: &str, source: &str, line: u32) {
        self.emit(
            "js_error",
            EventParams::from([
                entry("error_message", message),
                entry("error_source", source),
                entry("error_line", line),
                entry("event_category", "error"),
            ]),
        );
    }
}

impl<T: EventSink + ?Sized> TrackEvents for T {}

fn truncate(text: &str, limit: usize) -> String {
    text.chars().take(limit).collect()
}

fn slug(name: &str) -> String {
    name.to_lowercase().split_whitespace().collect::<Vec<_>>().join("_")
}
