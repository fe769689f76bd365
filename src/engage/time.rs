use std::sync::Mutex;
use std::time::{Duration, Instant};

use crate::analytics::{EventSink, TrackEvents};

use super::threshold::ThresholdTracker;

pub const TIME_ON_PAGE_MARKERS: [u32; 4] = [30, 60, 120, 300];

/// Cadence at which the host should call [`TimeOnPageTracker::poll`].
pub const TIME_POLL_INTERVAL: Duration = Duration::from_secs(5);

/// Source of the current instant, injectable so time-driven behavior is
/// deterministic under test.
pub trait Clock: Send + Sync {
    fn now(&self) -> Instant;
}

#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Test clock advanced explicitly.
#[derive(Debug)]
pub struct ManualClock {
    start: Instant,
    offset: Mutex<Duration>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
            offset: Mutex::new(Duration::ZERO),
        }
    }

    pub fn advance(&self, by: Duration) {
        *self.offset.lock().unwrap() += by;
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        self.start + *self.offset.lock().unwrap()
    }
}

/// Emits one `time_on_page` event per marker per page view, driven by a
/// fixed polling tick.
#[derive(Clone, Debug)]
pub struct TimeOnPageTracker {
    loaded_at: Instant,
    tracker: ThresholdTracker,
}

impl TimeOnPageTracker {
    pub fn new(loaded_at: Instant) -> Self {
        Self {
            loaded_at,
            tracker: ThresholdTracker::new(&TIME_ON_PAGE_MARKERS),
        }
    }

    pub fn elapsed_seconds(&self, now: Instant) -> u32 {
        now.saturating_duration_since(self.loaded_at)
            .as_secs_f64()
            .round() as u32
    }

    /// Handles one polling tick. Returns the markers newly crossed, already
    /// emitted through `sink` in ascending order.
    pub fn poll(&mut self, now: Instant, sink: &dyn EventSink) -> Vec<u32> {
        let crossed = self.tracker.observe(self.elapsed_seconds(now));
        for marker in &crossed {
            sink.track_time_on_page(*marker);
        }
        crossed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::RecordingSink;

    #[test]
    fn markers_fire_once_as_time_advances() {
        let clock = ManualClock::new();
        let mut tracker = TimeOnPageTracker::new(clock.now());
        let sink = RecordingSink::new();

        clock.advance(Duration::from_secs(35));
        assert_eq!(tracker.poll(clock.now(), &sink), vec![30]);
        assert_eq!(tracker.poll(clock.now(), &sink), Vec::<u32>::new());

        // A long gap between polls reports every marker passed in between.
        clock.advance(Duration::from_secs(300));
        assert_eq!(tracker.poll(clock.now(), &sink), vec![60, 120, 300]);
        assert_eq!(sink.event_names().len(), 4);
    }

    #[test]
    fn elapsed_seconds_rounds() {
        let clock = ManualClock::new();
        let tracker = TimeOnPageTracker::new(clock.now());
        clock.advance(Duration::from_millis(29_600));
        assert_eq!(tracker.elapsed_seconds(clock.now()), 30);
    }

    #[test]
    fn manual_clock_accumulates_offsets() {
        let clock = ManualClock::new();
        let before = clock.now();
        clock.advance(Duration::from_secs(2));
        clock.advance(Duration::from_secs(3));
        assert_eq!(clock.now() - before, Duration::from_secs(5));
    }
}
