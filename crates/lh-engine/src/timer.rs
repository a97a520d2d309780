//! Deterministic timer queue advanced by host-supplied timestamps.
//!
//! Every scheduled task has a [`TimerHandle`]; nothing is fire-and-forget.
//! Time only moves when the owner calls [`TimerQueue::pop_due`] with a new
//! reading, so tests simulate time by passing numbers.

/// Handle to a scheduled task. Cancelling a fired or unknown handle is a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerHandle(u64);

#[derive(Debug, Clone)]
struct Entry<K> {
    handle: TimerHandle,
    deadline: f64,
    interval: Option<f64>,
    kind: K,
}

/// Pending one-shot and repeating tasks keyed by deadline.
#[derive(Debug, Clone)]
pub struct TimerQueue<K> {
    entries: Vec<Entry<K>>,
    next_id: u64,
}

impl<K> Default for TimerQueue<K> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            next_id: 0,
        }
    }
}

impl<K: Clone> TimerQueue<K> {
    /// An empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    fn allocate(&mut self) -> TimerHandle {
        self.next_id += 1;
        TimerHandle(self.next_id)
    }

    /// Fire `kind` once at `deadline`.
    pub fn schedule_once(&mut self, deadline: f64, kind: K) -> TimerHandle {
        let handle = self.allocate();
        self.entries.push(Entry {
            handle,
            deadline,
            interval: None,
            kind,
        });
        handle
    }

    /// Fire `kind` at `first`, then every `interval` ms until cancelled.
    pub fn schedule_every(&mut self, first: f64, interval: f64, kind: K) -> TimerHandle {
        let handle = self.allocate();
        self.entries.push(Entry {
            handle,
            deadline: first,
            interval: Some(interval.max(1.0)),
            kind,
        });
        handle
    }

    /// Cancel a task. Returns whether it was still pending.
    pub fn cancel(&mut self, handle: TimerHandle) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.handle != handle);
        self.entries.len() != before
    }

    /// Whether a task is still pending.
    pub fn is_pending(&self, handle: TimerHandle) -> bool {
        self.entries.iter().any(|e| e.handle == handle)
    }

    /// Number of pending tasks.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing is pending.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Pending tasks of a given kind.
    pub fn count_where(&self, mut pred: impl FnMut(&K) -> bool) -> usize {
        self.entries.iter().filter(|e| pred(&e.kind)).count()
    }

    /// Earliest pending deadline.
    pub fn next_deadline(&self) -> Option<f64> {
        self.entries
            .iter()
            .map(|e| e.deadline)
            .min_by(f64::total_cmp)
    }

    /// Take the earliest task due at `now`, ties broken by scheduling order.
    ///
    /// Repeating tasks are rescheduled one interval later; a repeating task
    /// that fell behind fires once and resumes from `now` rather than
    /// replaying every missed tick.
    pub fn pop_due(&mut self, now: f64) -> Option<(TimerHandle, K)> {
        let index = self
            .entries
            .iter()
            .enumerate()
            .filter(|(_, e)| e.deadline <= now)
            .min_by(|(_, a), (_, b)| {
                a.deadline
                    .total_cmp(&b.deadline)
                    .then(a.handle.cmp(&b.handle))
            })
            .map(|(i, _)| i)?;

        let entry = &mut self.entries[index];
        let fired = (entry.handle, entry.kind.clone());
        if let Some(interval) = entry.interval {
            entry.deadline += interval;
            if entry.deadline <= now {
                entry.deadline = now + interval;
            }
        } else {
            self.entries.swap_remove(index);
        }
        Some(fired)
    }
}
