//! Scheduled-event list.
//!
//! `Timeline` holds deferred tasks keyed by `(due time, insertion order)`.
//! The host moves the clock forward with `advance_to` and runs whatever
//! comes back. Nothing fires on its own.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use serde::{Deserialize, Serialize};

/// Milliseconds on the timeline clock.
pub type Millis = u64;

/// Identifier of a scheduled task. Also its tie-break order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TaskId(pub u64);

/// A task together with when it fires.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Scheduled<T> {
    pub id: TaskId,
    pub due: Millis,
    pub task: T,
}

impl<T> Scheduled<T> {
    fn key(&self) -> (Millis, TaskId) {
        (self.due, self.id)
    }
}

impl<T: Eq> Ord for Scheduled<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed: BinaryHeap is a max-heap, we want the earliest first.
        other.key().cmp(&self.key())
    }
}

impl<T: Eq> PartialOrd for Scheduled<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Deferred task queue with its own clock.
///
/// ## Example
///
/// ```
/// use magic_cards::timing::Timeline;
///
/// let mut timeline = Timeline::new();
/// timeline.schedule(300, "b");
/// timeline.schedule(100, "a");
/// timeline.schedule(300, "c");
///
/// let fired: Vec<_> = timeline.advance_to(300).into_iter().map(|s| s.task).collect();
/// assert_eq!(fired, vec!["a", "b", "c"]);
/// ```
#[derive(Clone, Debug)]
pub struct Timeline<T> {
    now: Millis,
    next_id: u64,
    queue: BinaryHeap<Scheduled<T>>,
}

impl<T: Eq> Default for Timeline<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Eq> Timeline<T> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            now: 0,
            next_id: 0,
            queue: BinaryHeap::new(),
        }
    }

    /// Current clock value.
    #[must_use]
    pub fn now(&self) -> Millis {
        self.now
    }

    /// Run `task` `delay` ms from now.
    pub fn schedule(&mut self, delay: Millis, task: T) -> TaskId {
        let id = TaskId(self.next_id);
        self.next_id += 1;
        self.queue.push(Scheduled {
            id,
            due: self.now.saturating_add(delay),
            task,
        });
        id
    }

    /// Schedule one task per item, the `i`th at `base + i * stagger`.
    pub fn schedule_staggered<I>(&mut self, base: Millis, stagger: Millis, tasks: I) -> Vec<TaskId>
    where
        I: IntoIterator<Item = T>,
    {
        tasks
            .into_iter()
            .enumerate()
            .map(|(i, task)| {
                let offset = (i as Millis).saturating_mul(stagger);
                self.schedule(base.saturating_add(offset), task)
            })
            .collect()
    }

    /// Move the clock to `now` and pop every task due by then, earliest
    /// first. The clock never moves backwards.
    pub fn advance_to(&mut self, now: Millis) -> Vec<Scheduled<T>> {
        self.now = self.now.max(now);

        let mut due = Vec::new();
        while self.queue.peek().is_some_and(|s| s.due <= self.now) {
            if let Some(next) = self.queue.pop() {
                due.push(next);
            }
        }
        due
    }

    /// Advance by `delta` ms.
    pub fn advance_by(&mut self, delta: Millis) -> Vec<Scheduled<T>> {
        self.advance_to(self.now.saturating_add(delta))
    }

    /// Due time of the earliest pending task.
    #[must_use]
    pub fn next_due(&self) -> Option<Millis> {
        self.queue.peek().map(|s| s.due)
    }

    #[must_use]
    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.queue.is_empty()
    }

    /// Drop every pending task. The clock is kept.
    pub fn clear(&mut self) {
        self.queue.clear();
    }
}
