//! Campaign attribution capture.
//!
//! Runs once per page construction, before anything that might read the
//! stored record. The record exists for the external analytics runtime to
//! query; no other component in this crate reads it back.

use serde::{Deserialize, Serialize};

use crate::analytics::{entry, EventParams, EventSink};
use crate::logger::Logger;
use crate::page::PageContext;

use super::store::SessionStore;

pub const UTM_STORAGE_KEY: &str = "utm_params";

/// The five fixed campaign parameters. Fields missing from the URL are
/// stored as empty strings so the record is always written whole.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributionRecord {
    pub utm_source: String,
    pub utm_medium: String,
    pub utm_campaign: String,
    pub utm_content: String,
    pub utm_term: String,
}

impl AttributionRecord {
    pub fn from_page(page: &PageContext) -> Self {
        let mut record = Self::default();
        for (key, value) in page.url().query_pairs() {
            let slot = match key.as_ref() {
                "utm_source" => &mut record.utm_source,
                "utm_medium" => &mut record.utm_medium,
                "utm_campaign" => &mut record.utm_campaign,
                "utm_content" => &mut record.utm_content,
                "utm_term" => &mut record.utm_term,
                _ => continue,
            };
            *slot = value.into_owned();
        }
        record
    }

    fn into_params(self) -> EventParams {
        EventParams::from([
            entry("utm_source", self.utm_source),
            entry("utm_medium", self.utm_medium),
            entry("utm_campaign", self.utm_campaign),
            entry("utm_content", self.utm_content),
            entry("utm_term", self.utm_term),
        ])
    }
}

/// Captures campaign parameters from the page URL.
///
/// Strict no-op when `utm_source` is absent: no storage write and no event.
/// Otherwise all five fields are persisted together and a single
/// `utm_captured` event is emitted. Storage failure downgrades to a warning;
/// the event is still emitted so attribution reaches the data layer.
pub fn capture(page: &PageContext, store: &dyn SessionStore, sink: &dyn EventSink) {
    let record = AttributionRecord::from_page(page);
    if record.utm_source.is_empty() {
        return;
    }

    match serde_json::to_string(&record) {
        Ok(serialized) => {
            if let Err(err) = store.set(UTM_STORAGE_KEY, &serialized) {
                Logger::new("sitetag/attribution")
                    .warn(format!("failed to persist attribution record: {err}"));
            }
        }
        Err(err) => {
            Logger::new("sitetag/attribution")
                .warn(format!("failed to serialize attribution record: {err}"));
        }
    }

    sink.emit("utm_captured", record.into_params());
}

/// Reads back the record persisted by [`capture`], if any.
pub fn load_stored(store: &dyn SessionStore) -> Option<AttributionRecord> {
    let raw = store.get(UTM_STORAGE_KEY).ok()??;
    serde_json::from_str(&raw).ok()
}
