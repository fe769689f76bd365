use crate::analytics::{EventSink, TrackEvents};

use super::threshold::ThresholdTracker;

pub const SCROLL_DEPTH_MARKERS: [u32; 5] = [25, 50, 75, 90, 100];

/// Viewport measurements accompanying a scroll notification.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollMetrics {
    pub scroll_top: f64,
    pub scroll_height: f64,
    pub client_height: f64,
}

impl ScrollMetrics {
    /// Scroll depth as a rounded percentage, or `None` when the document
    /// height equals the viewport height (nothing to scroll).
    pub fn percent(&self) -> Option<u32> {
        let scrollable = self.scroll_height - self.client_height;
        if scrollable <= 0.0 {
            return None;
        }
        Some((self.scroll_top / scrollable * 100.0).round().max(0.0) as u32)
    }
}

/// Emits one `scroll_depth` event per marker per page view.
#[derive(Clone, Debug)]
pub struct ScrollDepthTracker {
    tracker: ThresholdTracker,
}

impl ScrollDepthTracker {
    pub fn new() -> Self {
        Self {
            tracker: ThresholdTracker::new(&SCROLL_DEPTH_MARKERS),
        }
    }

    /// Handles one scroll notification. Returns the markers newly crossed,
    /// already emitted through `sink` in ascending order.
    pub fn observe(&mut self, metrics: ScrollMetrics, sink: &dyn EventSink) -> Vec<u32> {
        let Some(percent) = metrics.percent() else {
            return Vec::new();
        };
        let crossed = self.tracker.observe(percent);
        for marker in &crossed {
            sink.track_scroll_depth(*marker);
        }
        crossed
    }
}

impl Default for ScrollDepthTracker {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::{ParamValue, RecordingSink};

    fn metrics(scroll_top: f64) -> ScrollMetrics {
        ScrollMetrics {
            scroll_top,
            scroll_height: 2000.0,
            client_height: 1000.0,
        }
    }

    #[test]
    fn markers_fire_once_regardless_of_repeat_notifications() {
        let mut tracker = ScrollDepthTracker::new();
        let sink = RecordingSink::new();

        assert_eq!(tracker.observe(metrics(500.0), &sink), vec![25, 50]);
        assert_eq!(tracker.observe(metrics(500.0), &sink), Vec::<u32>::new());
        assert_eq!(tracker.observe(metrics(1000.0), &sink), vec![75, 90, 100]);

        let percentages: Vec<_> = sink
            .take_events()
            .iter()
            .map(|(_, params)| params.get("scroll_percentage").and_then(ParamValue::as_integer))
            .collect();
        assert_eq!(
            percentages,
            [Some(25), Some(50), Some(75), Some(90), Some(100)]
        );
    }

    #[test]
    fn unscrollable_document_is_a_noop() {
        let mut tracker = ScrollDepthTracker::new();
        let sink = RecordingSink::new();
        let flat = ScrollMetrics {
            scroll_top: 0.0,
            scroll_height: 800.0,
            client_height: 800.0,
        };
        assert!(tracker.observe(flat, &sink).is_empty());
        assert!(sink.take_events().is_empty());
    }

    #[test]
    fn percent_rounds_to_nearest() {
        let metrics = ScrollMetrics {
            scroll_top: 333.0,
            scroll_height: 2000.0,
            client_height: 1000.0,
        };
        assert_eq!(metrics.percent(), Some(33));
    }
}
