//! Bounded reading window.
//!
//! The window is the single piece of state shared between the line reader
//! and the analysis scheduler. All access goes through one mutex, held for
//! exactly one append or one full snapshot copy, so a snapshot is never torn.

use crate::reading::TimestampReading;
use std::collections::VecDeque;
use std::sync::Mutex;


pub const DEFAULT_CAPACITY: usize = 10_000;

#[derive(Debug)]
pub struct ReadingWindow {
    capacity: usize,
    inner: Mutex<WindowState>,
}

#[derive(Debug, Default)]
struct WindowState {
    readings: VecDeque<TimestampReading>,
    total_appended: u64,
}

impl ReadingWindow {
    /// Create a window holding at most `capacity` readings (minimum 1).
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            capacity,
            inner: Mutex::new(WindowState {
                readings: VecDeque::with_capacity(capacity.min(DEFAULT_CAPACITY)),
                total_appended: 0,
            }),
        }
    }

    /// Append a reading, evicting the oldest one when full.
    ///
    /// Returns the evicted reading, if any.
    pub fn append(&self, reading: TimestampReading) -> Option<TimestampReading> {
        let mut state = self.lock();

        let evicted = if state.readings.len() >= self.capacity {
            state.readings.pop_front()
        } else {
            None
        };

        state.readings.push_back(reading);
        state.total_appended += 1;

        evicted
    }

    /// Owned copy of the retained readings, oldest first.
    pub fn snapshot(&self) -> Vec<TimestampReading> {
        let state = self.lock();
        state.readings.iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.lock().readings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().readings.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Readings appended over the window's lifetime, evicted ones included.
    pub fn total_appended(&self) -> u64 {
        self.lock().total_appended
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, WindowState> {
        // A panic while holding the lock cannot leave the deque half-updated
        // (push/pop are atomic w.r.t. unwinding), so poisoning is ignored.
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Default for ReadingWindow {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}
