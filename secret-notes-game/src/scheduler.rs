//! Deferred one-shot tasks on a virtual clock.
//!
//! The scheduler owns no threads and reads no wall clock. The owner calls
//! [`Scheduler::advance`] with the elapsed milliseconds and receives every task
//! that has come due, in due order. Dropping or clearing the scheduler discards
//! pending work, so a torn-down session can never observe a late callback.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TaskId(u64);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct Entry<T> {
    due_ms: u64,
    id: TaskId,
    task: T,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scheduler<T> {
    now_ms: u64,
    next_id: u64,
    /// Kept sorted by `(due_ms, id)`.
    entries: Vec<Entry<T>>,
}

impl<T> Default for Scheduler<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Scheduler<T> {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            now_ms: 0,
            next_id: 0,
            entries: Vec::new(),
        }
    }

    /// Current position of the virtual clock.
    #[must_use]
    pub const fn now_ms(&self) -> u64 {
        self.now_ms
    }

    /// Queue `task` to fire `delay_ms` from now.
    pub fn schedule(&mut self, delay_ms: u64, task: T) -> TaskId {
        let id = TaskId(self.next_id);
        self.next_id += 1;
        let due_ms = self.now_ms.saturating_add(delay_ms);
        let pos = self
            .entries
            .partition_point(|entry| (entry.due_ms, entry.id) <= (due_ms, id));
        self.entries.insert(pos, Entry { due_ms, id, task });
        id
    }

    /// Remove a pending task. Returns `true` if it was still pending.
    pub fn cancel(&mut self, id: TaskId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.id != id);
        self.entries.len() != before
    }

    /// Drop every pending task.
    pub fn cancel_all(&mut self) {
        self.entries.clear();
    }

    #[must_use]
    pub fn pending(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.entries.is_empty()
    }

    /// Move the clock forward and drain tasks that are now due.
    pub fn advance(&mut self, elapsed_ms: u64) -> Vec<T> {
        self.now_ms = self.now_ms.saturating_add(elapsed_ms);
        let due = self
            .entries
            .partition_point(|entry| entry.due_ms <= self.now_ms);
        self.entries.drain(..due).map(|entry| entry.task).collect()
    }

    /// Absolute clock value `elapsed_ms` from now.
    #[must_use]
    pub const fn deadline(&self, elapsed_ms: u64) -> u64 {
        self.now_ms.saturating_add(elapsed_ms)
    }

    /// Step the clock to the earliest task due at or before `deadline_ms` and
    /// return it. When nothing else is due, the clock settles on the deadline.
    ///
    /// Owners whose handlers schedule follow-up work call this in a loop, so a
    /// follow-up that lands inside the same window still fires.
    pub fn poll_until(&mut self, deadline_ms: u64) -> Option<T> {
        match self.entries.first() {
            Some(entry) if entry.due_ms <= deadline_ms => {
                self.now_ms = self.now_ms.max(entry.due_ms);
                Some(self.entries.remove(0).task)
            }
            _ => {
                self.now_ms = self.now_ms.max(deadline_ms);
                None
            }
        }
    }
}
