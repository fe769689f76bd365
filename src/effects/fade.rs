use std::collections::BTreeSet;
use std::time::Duration;

use crate::dom::NodeId;

/// Minimum intersection ratio before a registered element reveals.
pub const FADE_THRESHOLD: f64 = 0.1;

/// Per-element delay step within one intersection batch.
pub const FADE_STAGGER: Duration = Duration::from_millis(100);

/// Initial downward offset of hidden elements, in pixels.
pub const FADE_HIDDEN_OFFSET_PX: i64 = 30;

/// Instruction to animate one element to visible after `delay`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Reveal {
    pub node: NodeId,
    pub delay: Duration,
}

/// One-shot reveal tracking for fade-in-on-view elements.
///
/// Registered elements start hidden (opacity 0, offset
/// [`FADE_HIDDEN_OFFSET_PX`] down). Each element reveals at most once, when
/// a batch reports it intersecting by at least [`FADE_THRESHOLD`]; reveals
/// within one batch are staggered in report order.
#[derive(Clone, Debug, Default)]
pub struct FadeInObserver {
    registered: BTreeSet<NodeId>,
    revealed: BTreeSet<NodeId>,
}

impl FadeInObserver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, node: NodeId) {
        self.registered.insert(node);
    }

    pub fn is_revealed(&self, node: NodeId) -> bool {
        self.revealed.contains(&node)
    }

    /// Processes one batch of `(element, intersection ratio)` notifications.
    pub fn observe_batch(&mut self, entries: &[(NodeId, f64)]) -> Vec<Reveal> {
        let mut reveals = Vec::new();
        for (node, ratio) in entries {
            if *ratio < FADE_THRESHOLD
                || !self.registered.contains(node)
                || !self.revealed.insert(*node)
            {
                continue;
            }
            reveals.push(Reveal {
                node: *node,
                delay: FADE_STAGGER * reveals.len() as u32,
            });
        }
        reveals
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(index: usize) -> NodeId {
        NodeId(index)
    }

    #[test]
    fn reveals_are_staggered_within_a_batch() {
        let mut observer = FadeInObserver::new();
        for index in 0..3 {
            observer.register(node(index));
        }

        let reveals = observer.observe_batch(&[(node(0), 0.5), (node(1), 0.2), (node(2), 0.15)]);
        let delays: Vec<_> = reveals.iter().map(|reveal| reveal.delay).collect();
        assert_eq!(
            delays,
            [
                Duration::ZERO,
                Duration::from_millis(100),
                Duration::from_millis(200)
            ]
        );
    }

    #[test]
    fn below_threshold_entries_stay_hidden() {
        let mut observer = FadeInObserver::new();
        observer.register(node(0));
        assert!(observer.observe_batch(&[(node(0), 0.05)]).is_empty());
        assert!(!observer.is_revealed(node(0)));
    }

    #[test]
    fn each_element_reveals_at_most_once() {
        let mut observer = FadeInObserver::new();
        observer.register(node(0));
        assert_eq!(observer.observe_batch(&[(node(0), 0.9)]).len(), 1);
        assert!(observer.observe_batch(&[(node(0), 0.9)]).is_empty());
    }

    #[test]
    fn unregistered_elements_are_ignored() {
        let mut observer = FadeInObserver::new();
        assert!(observer.observe_batch(&[(node(9), 1.0)]).is_empty());
    }
}
