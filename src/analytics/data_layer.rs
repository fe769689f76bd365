//! Append-only event queue consumed by the external tag-management runtime.
//!
//! The queue itself carries no behavior beyond ordered append and drain; all
//! enrichment happens in [`super::Analytics`] before an entry is pushed.

use std::sync::{Arc, LazyLock, Mutex};

use serde::Serialize;

use super::params::EventParams;

/// One pushed event: the mandatory `event` name plus flattened parameters,
/// matching the wire shape the tag-management runtime reads.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DataLayerEntry {
    pub event: String,
    #[serde(flatten)]
    pub params: EventParams,
}

#[derive(Debug, Default)]
struct DataLayerQueue {
    entries: Mutex<Vec<DataLayerEntry>>,
}

/// Cloneable handle to an append-only entry queue. [`DataLayer::shared`]
/// returns the process-wide instance, created lazily on first use; tests
/// construct private queues with [`DataLayer::new`].
#[derive(Clone, Debug)]
pub struct DataLayer {
    inner: Arc<DataLayerQueue>,
}

impl DataLayer {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(DataLayerQueue::default()),
        }
    }

    pub fn shared() -> Self {
        static INSTANCE: LazyLock<Arc<DataLayerQueue>> =
            LazyLock::new(|| Arc::new(DataLayerQueue::default()));
        Self {
            inner: INSTANCE.clone(),
        }
    }

    pub fn push(&self, entry: DataLayerEntry) {
        self.inner.entries.lock().unwrap().push(entry);
    }

    /// Copy of all entries pushed so far, in push order.
    pub fn snapshot(&self) -> Vec<DataLayerEntry> {
        self.inner.entries.lock().unwrap().clone()
    }

    /// Removes and returns every queued entry. The external consumer calls
    /// this from its own cadence; producers are never blocked on it.
    pub fn drain(&self) -> Vec<DataLayerEntry> {
        std::mem::take(&mut *self.inner.entries.lock().unwrap())
    }

    pub fn len(&self) -> usize {
        self.inner.entries.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for DataLayer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::super::params::entry;
    use super::*;

    fn sample(name: &str) -> DataLayerEntry {
        DataLayerEntry {
            event: name.to_owned(),
            params: EventParams::from([entry("event_category", "engagement")]),
        }
    }

    #[test]
    fn push_preserves_order() {
        let layer = DataLayer::new();
        layer.push(sample("first"));
        layer.push(sample("second"));

        let names: Vec<_> = layer
            .snapshot()
            .into_iter()
            .map(|entry| entry.event)
            .collect();
        assert_eq!(names, ["first", "second"]);
    }

    #[test]
    fn drain_empties_the_queue() {
        let layer = DataLayer::new();
        layer.push(sample("only"));
        assert_eq!(layer.drain().len(), 1);
        assert!(layer.is_empty());
        assert!(layer.drain().is_empty());
    }

    #[test]
    fn clones_share_the_same_queue() {
        let layer = DataLayer::new();
        let alias = layer.clone();
        alias.push(sample("shared"));
        assert_eq!(layer.len(), 1);
    }

    // Asserts with `any` on a snapshot and leaves the queue alone: other
    // tests may be appending to the shared instance concurrently.
    #[test]
    fn shared_handles_alias_one_queue() {
        let first = DataLayer::shared();
        let second = DataLayer::shared();
        first.push(sample("global_entry"));
        assert!(second
            .snapshot()
            .iter()
            .any(|entry| entry.event == "global_entry"));
    }

    #[test]
    fn entries_serialize_with_flattened_params() {
        let json = serde_json::to_value(sample("phone_click")).unwrap();
        assert_eq!(json["event"], "phone_click");
        assert_eq!(json["event_category"], "engagement");
    }
}
