//! One-shot timer queue
//!
//! Owned replacement for ad-hoc per-node timeout handles: every scheduled
//! delay lives in one registry, keyed by [`TimerId`], and delivers its
//! payload event when the queue is advanced past its due time.

use slotmap::{new_key_type, SlotMap};

new_key_type! {
    /// Handle to a scheduled timer
    pub struct TimerId;
}

struct TimerEntry<E> {
    due_ms: f64,
    seq: u64,
    event: E,
}

/// A queue of one-shot timers advanced by explicit delta-time ticks.
///
/// Timers fire in (due-time, insertion) order. A scheduled timer either
/// fires exactly once or is cancelled; there is no retry or repetition at
/// this level (repeating behavior is built by rescheduling on fire).
pub struct TimerQueue<E> {
    timers: SlotMap<TimerId, TimerEntry<E>>,
    now_ms: f64,
    next_seq: u64,
}

impl<E> TimerQueue<E> {
    pub fn new() -> Self {
        Self {
            timers: SlotMap::with_key(),
            now_ms: 0.0,
            next_seq: 0,
        }
    }

    /// Schedule `event` to fire `delay_ms` from the queue's current time.
    pub fn schedule(&mut self, delay_ms: u64, event: E) -> TimerId {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.timers.insert(TimerEntry {
            due_ms: self.now_ms + delay_ms as f64,
            seq,
            event,
        })
    }

    /// Cancel a pending timer. Returns false if it already fired or was
    /// cancelled before.
    pub fn cancel(&mut self, id: TimerId) -> bool {
        self.timers.remove(id).is_some()
    }

    /// Whether a timer is still pending.
    pub fn is_pending(&self, id: TimerId) -> bool {
        self.timers.contains_key(id)
    }

    /// Number of pending timers.
    pub fn pending(&self) -> usize {
        self.timers.len()
    }

    /// Advance the queue by `dt_ms` and return the events of every timer
    /// that came due, in (due-time, insertion) order.
    pub fn advance(&mut self, dt_ms: f64) -> Vec<E> {
        self.now_ms += dt_ms;

        let mut due: Vec<(f64, u64, TimerId)> = self
            .timers
            .iter()
            .filter(|(_, t)| t.due_ms <= self.now_ms)
            .map(|(id, t)| (t.due_ms, t.seq, id))
            .collect();

        if due.is_empty() {
            return Vec::new();
        }

        due.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap().then(a.1.cmp(&b.1)));
        tracing::trace!(fired = due.len(), now_ms = self.now_ms, "timers due");

        due.into_iter()
            .filter_map(|(_, _, id)| self.timers.remove(id))
            .map(|t| t.event)
            .collect()
    }

    /// Current logical time of the queue in milliseconds.
    pub fn now_ms(&self) -> f64 {
        self.now_ms
    }
}

impl<E> Default for TimerQueue<E> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_in_due_order() {
        let mut queue = TimerQueue::new();
        queue.schedule(300, "late");
        queue.schedule(100, "early");
        queue.schedule(200, "middle");

        assert_eq!(queue.advance(50.0), Vec::<&str>::new());
        assert_eq!(queue.advance(300.0), vec!["early", "middle", "late"]);
        assert_eq!(queue.pending(), 0);
    }

    #[test]
    fn same_due_time_preserves_insertion_order() {
        let mut queue = TimerQueue::new();
        queue.schedule(100, 1);
        queue.schedule(100, 2);
        queue.schedule(100, 3);

        assert_eq!(queue.advance(100.0), vec![1, 2, 3]);
    }

    #[test]
    fn cancel_prevents_fire() {
        let mut queue = TimerQueue::new();
        let keep = queue.schedule(100, "keep");
        let drop = queue.schedule(100, "drop");

        assert!(queue.cancel(drop));
        assert!(!queue.cancel(drop));
        assert!(queue.is_pending(keep));

        assert_eq!(queue.advance(150.0), vec!["keep"]);
    }

    #[test]
    fn delays_are_relative_to_queue_time() {
        let mut queue = TimerQueue::new();
        queue.advance(500.0);
        queue.schedule(100, "a");

        assert!(queue.advance(99.0).is_empty());
        assert_eq!(queue.advance(1.0), vec!["a"]);
    }
}
