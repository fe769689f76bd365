use std::collections::BTreeMap;
use std::time::Duration;

use crate::dom::{ElementLocator, NodeId};

/// Total animation length.
pub const COUNTER_DURATION: Duration = Duration::from_millis(2_000);

/// Frame cadence the increments are synchronized to.
pub const COUNTER_FRAME: Duration = Duration::from_millis(16);

/// Visibility ratio that starts a counter.
pub const COUNTER_TRIGGER_RATIO: f64 = 0.5;

/// Frame-synchronized count-up from zero to a fixed target.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CounterAnimation {
    target: u64,
}

impl CounterAnimation {
    pub fn new(target: u64) -> Self {
        Self { target }
    }

    pub fn target(&self) -> u64 {
        self.target
    }

    /// Value shown `elapsed` into the animation.
    pub fn value_at(&self, elapsed: Duration) -> u64 {
        if elapsed >= COUNTER_DURATION {
            return self.target;
        }
        let frames = (elapsed.as_millis() / COUNTER_FRAME.as_millis()) as f64;
        let total_frames =
            (COUNTER_DURATION.as_millis() / COUNTER_FRAME.as_millis()) as f64;
        let step = self.target as f64 / total_frames;
        ((step * frames).floor() as u64).min(self.target)
    }

    /// Display string at `elapsed`: thousands-separated with a trailing `+`.
    pub fn display_at(&self, elapsed: Duration) -> String {
        format!("{}+", format_count(self.value_at(elapsed)))
    }

    pub fn is_complete(&self, elapsed: Duration) -> bool {
        elapsed >= COUNTER_DURATION
    }
}

/// Formats with `,` thousands separators.
pub fn format_count(value: u64) -> String {
    let digits = value.to_string();
    let mut formatted = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            formatted.push(',');
        }
        formatted.push(digit);
    }
    formatted
}

/// One-shot trigger bookkeeping for every `data-count` element on the page.
#[derive(Clone, Debug, Default)]
pub struct CounterRegistry {
    targets: BTreeMap<NodeId, u64>,
    started: BTreeMap<NodeId, CounterAnimation>,
}

impl CounterRegistry {
    /// Scans the document for `data-count` elements. Malformed targets are
    /// skipped rather than reported.
    pub fn scan(dom: &dyn ElementLocator) -> Self {
        let mut targets = BTreeMap::new();
        for node in dom.document_order() {
            if let Some(raw) = dom.attr(node, "data-count") {
                if let Ok(target) = raw.trim().parse::<u64>() {
                    targets.insert(node, target);
                }
            }
        }
        Self {
            targets,
            started: BTreeMap::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.targets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    /// Starts the animation for `node` when it first reaches the trigger
    /// ratio; later notifications return `None`.
    pub fn trigger(&mut self, node: NodeId, ratio: f64) -> Option<CounterAnimation> {
        if ratio < COUNTER_TRIGGER_RATIO || self.started.contains_key(&node) {
            return None;
        }
        let target = *self.targets.get(&node)?;
        let animation = CounterAnimation::new(target);
        self.started.insert(node, animation);
        Some(animation)
    }

    pub fn animation(&self, node: NodeId) -> Option<CounterAnimation> {
        self.started.get(&node).copied()
    }
}
