use std::fmt;
use std::sync::{Arc, Mutex};

use chrono::{SecondsFormat, Utc};

use crate::logger::Logger;
use crate::page::{Environment, PageContext};

use super::data_layer::{DataLayer, DataLayerEntry};
use super::params::{entry, EventParams};

/// Consumer of structured analytics events. [`Analytics`] is the production
/// implementation; tests substitute [`RecordingSink`] to assert on emissions
/// without a queue or page context.
pub trait EventSink: Send + Sync {
    fn emit(&self, name: &str, params: EventParams);
}

/// Formats and dispatches analytics events into the data layer.
///
/// Every event is enriched with the page path, title, full URL, and an
/// ISO-8601 timestamp before being appended. Emission is best-effort and
/// never fails; an empty event name is dropped with a warning.
#[derive(Clone)]
pub struct Analytics {
    inner: Arc<AnalyticsInner>,
}

struct AnalyticsInner {
    page: PageContext,
    data_layer: DataLayer,
    // Resolved once at construction; production pages never pay for the
    // diagnostic formatting.
    debug_trace: bool,
    logger: Logger,
}

impl Analytics {
    pub fn new(page: PageContext, data_layer: DataLayer) -> Self {
        let debug_trace = page.environment() == Environment::LocalDevelopment;
        Self {
            inner: Arc::new(AnalyticsInner {
                page,
                data_layer,
                debug_trace,
                logger: Logger::new("sitetag/analytics"),
            }),
        }
    }

    pub fn page(&self) -> &PageContext {
        &self.inner.page
    }

    pub fn data_layer(&self) -> &DataLayer {
        &self.inner.data_layer
    }

    pub fn emit(&self, name: &str, mut params: EventParams) {
        if name.trim().is_empty() {
            self.inner.logger.warn("dropping event with empty name");
            return;
        }

        let page = &self.inner.page;
        params.extend([
            entry("page_path", page.path()),
            entry("page_title", page.title()),
            entry("page_url", page.page_url()),
            entry(
                "timestamp",
                Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
            ),
        ]);

        if self.inner.debug_trace {
            self.inner.logger.debug(format!(
                "event {name} {}",
                serde_json::to_string(&params).unwrap_or_default()
            ));
        }

        self.inner.data_layer.push(DataLayerEntry {
            event: name.to_owned(),
            params,
        });
    }
}

impl fmt::Debug for Analytics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Analytics")
            .field("page", &self.inner.page.page_url())
            .field("debug_trace", &self.inner.debug_trace)
            .finish()
    }
}

impl EventSink for Analytics {
    fn emit(&self, name: &str, params: EventParams) {
        Analytics::emit(self, name, params);
    }
}

/// Test sink that records every emission verbatim.
#[derive(Clone, Default)]
pub struct RecordingSink {
    events: Arc<Mutex<Vec<(String, EventParams)>>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn take_events(&self) -> Vec<(String, EventParams)> {
        self.events.lock().unwrap().clone()
    }

    pub fn event_names(&self) -> Vec<String> {
        self.events
            .lock()
            .unwrap()
            .iter()
            .map(|(name, _)| name.clone())
            .collect()
    }
}

impl EventSink for RecordingSink {
    fn emit(&self, name: &str, params: EventParams) {
        self.events
            .lock()
            .unwrap()
            .push((name.to_owned(), params));
    }
}
