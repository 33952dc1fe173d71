//! One-shot timer queue on a caller-supplied clock.
//!
//! Tasks are ordered by due time, then by insertion order so that tasks
//! scheduled for the same instant fire in the order they were queued. The
//! queue never reads a wall clock itself; the browser passes
//! `performance.now()` and tests pass whatever virtual time they like.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;
use std::time::Duration;

struct Entry<T> {
    due: Duration,
    seq: u64,
    task: T,
}

impl<T> PartialEq for Entry<T> {
    fn eq(&self, other: &Self) -> bool {
        self.due == other.due && self.seq == other.seq
    }
}

impl<T> Eq for Entry<T> {}

impl<T> PartialOrd for Entry<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for Entry<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.due
            .cmp(&other.due)
            .then_with(|| self.seq.cmp(&other.seq))
    }
}

pub struct Scheduler<T> {
    queue: BinaryHeap<Reverse<Entry<T>>>,
    next_seq: u64,
}

impl<T> Default for Scheduler<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Scheduler<T> {
    pub fn new() -> Self {
        Self {
            queue: BinaryHeap::new(),
            next_seq: 0,
        }
    }

    /// Queue `task` to fire once `delay` after `now`.
    pub fn schedule(&mut self, now: Duration, delay: Duration, task: T) {
        let entry = Entry {
            due: now + delay,
            seq: self.next_seq,
            task,
        };
        self.next_seq += 1;
        self.queue.push(Reverse(entry));
    }

    /// Pop the earliest task due at or before `now`, with its due time.
    pub fn pop_due(&mut self, now: Duration) -> Option<(Duration, T)> {
        match self.queue.peek() {
            Some(Reverse(head)) if head.due <= now => {}
            _ => return None,
        }
        self.queue.pop().map(|Reverse(e)| (e.due, e.task))
    }

    pub fn next_due(&self) -> Option<Duration> {
        self.queue.peek().map(|Reverse(e)| e.due)
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    #[test]
    fn fires_in_due_order() {
        let mut s = Scheduler::new();
        s.schedule(ms(0), ms(30), "c");
        s.schedule(ms(0), ms(10), "a");
        s.schedule(ms(5), ms(10), "b");

        assert_eq!(s.pop_due(ms(100)), Some((ms(10), "a")));
        assert_eq!(s.pop_due(ms(100)), Some((ms(15), "b")));
        assert_eq!(s.pop_due(ms(100)), Some((ms(30), "c")));
        assert_eq!(s.pop_due(ms(100)), None);
    }

    #[test]
    fn ties_keep_insertion_order() {
        let mut s = Scheduler::new();
        for i in 0..5 {
            s.schedule(ms(0), ms(50), i);
        }
        let order: Vec<i32> = std::iter::from_fn(|| s.pop_due(ms(50)).map(|(_, t)| t)).collect();
        assert_eq!(order, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn holds_tasks_that_are_not_due() {
        let mut s = Scheduler::new();
        s.schedule(ms(0), ms(80), ());
        assert!(s.pop_due(ms(79)).is_none());
        assert_eq!(s.next_due(), Some(ms(80)));
        assert_eq!(s.len(), 1);
        assert!(s.pop_due(ms(80)).is_some());
        assert!(s.is_empty());
    }
}
