//! Trailing-edge debounce for the cooperative event loop.
//!
//! Tasks are identified by a key. Scheduling a key sets its deadline to
//! `now + window`; scheduling it again before the deadline supersedes the
//! earlier, unfired deadline. The event loop polls [`Debouncer::due`] with
//! the current instant and runs whatever drained.

use std::collections::HashMap;
use std::hash::Hash;
use std::time::{Duration, Instant};

pub struct Debouncer<K> {
    window: Duration,
    pending: HashMap<K, Instant>,
}

impl<K: Eq + Hash + Clone> Debouncer<K> {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            pending: HashMap::new(),
        }
    }

    /// Schedule (or reschedule) the task for `key` at `now + window`.
    pub fn schedule(&mut self, key: K, now: Instant) {
        self.pending.insert(key, now + self.window);
    }

    /// Drop an unfired task for `key`, if any.
    pub fn cancel(&mut self, key: &K) {
        self.pending.remove(key);
    }

    pub fn is_pending(&self, key: &K) -> bool {
        self.pending.contains_key(key)
    }

    /// Drain and return every key whose deadline has passed.
    pub fn due(&mut self, now: Instant) -> Vec<K> {
        let fired: Vec<K> = self
            .pending
            .iter()
            .filter(|(_, deadline)| **deadline <= now)
            .map(|(k, _)| k.clone())
            .collect();
        for key in &fired {
            self.pending.remove(key);
        }
        fired
    }

    /// Drain every pending task regardless of deadline. Used when the
    /// session ends and trailing work must not be lost.
    pub fn drain(&mut self) -> Vec<K> {
        self.pending.drain().map(|(k, _)| k).collect()
    }
}
