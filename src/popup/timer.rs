use std::time::{Duration, Instant};

/// Identifies one scheduled entry; canceling a handle that already fired or
/// was canceled is a no-op.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TimerHandle(u64);

#[derive(Clone, Debug)]
struct TimerEntry<T> {
    handle: TimerHandle,
    due: Instant,
    token: T,
}

/// Host-polled timer queue.
///
/// Scheduling never spawns anything; the host loop calls [`TimerQueue::due`]
/// on its own cadence and acts on the returned tokens. This keeps scheduled
/// transitions cancelable and test-controllable.
#[derive(Clone, Debug)]
pub struct TimerQueue<T> {
    entries: Vec<TimerEntry<T>>,
    next_handle: u64,
}

impl<T: Copy> TimerQueue<T> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            next_handle: 1,
        }
    }

    pub fn schedule(&mut self, token: T, delay: Duration, now: Instant) -> TimerHandle {
        let handle = TimerHandle(self.next_handle);
        self.next_handle += 1;
        self.entries.push(TimerEntry {
            handle,
            due: now + delay,
            token,
        });
        handle
    }

    /// Returns whether an entry was actually removed.
    pub fn cancel(&mut self, handle: TimerHandle) -> bool {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.handle != handle);
        before != self.entries.len()
    }

    pub fn is_scheduled(&self, handle: TimerHandle) -> bool {
        self.entries.iter().any(|entry| entry.handle == handle)
    }

    /// Removes and returns every token whose deadline has passed, earliest
    /// deadline first.
    pub fn due(&mut self, now: Instant) -> Vec<T> {
        let mut fired: Vec<TimerEntry<T>> = Vec::new();
        self.entries.retain(|entry| {
            if entry.due <= now {
                fired.push(entry.clone());
                false
            } else {
                true
            }
        });
        fired.sort_by_key(|entry| entry.due);
        fired.into_iter().map(|entry| entry.token).collect()
    }

    pub fn next_due(&self) -> Option<Instant> {
        self.entries.iter().map(|entry| entry.due).min()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<T: Copy> Default for TimerQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}
