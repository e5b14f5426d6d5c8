//! Virtual-clock timer queue with cancellable handles.
//!
//! Every delayed effect in the storefront is a task parked here. Nothing
//! fires until the owner advances the clock, so tests can step time
//! deterministically and the runtime can feed it wall-clock deltas.

use std::{
    collections::{BTreeMap, HashMap},
    time::Duration,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimerHandle(u64);

pub struct Scheduler<T> {
    now: Duration,
    next_seq: u64,
    queue: BTreeMap<(Duration, u64), T>,
    deadlines: HashMap<u64, Duration>,
}

impl<T> Default for Scheduler<T> {
    fn default() -> Self {
        Self {
            now: Duration::ZERO,
            next_seq: 0,
            queue: BTreeMap::new(),
            deadlines: HashMap::new(),
        }
    }
}

impl<T> Scheduler<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now(&self) -> Duration {
        self.now
    }

    /// Parks `task` until `delay` past the current instant. Tasks sharing a
    /// deadline fire in scheduling order.
    pub fn schedule(&mut self, delay: Duration, task: T) -> TimerHandle {
        let seq = self.next_seq;
        self.next_seq += 1;
        let deadline = self.now.saturating_add(delay);
        self.queue.insert((deadline, seq), task);
        self.deadlines.insert(seq, deadline);
        TimerHandle(seq)
    }

    /// Returns `false` when the timer already fired or was cancelled.
    pub fn cancel(&mut self, handle: TimerHandle) -> bool {
        match self.deadlines.remove(&handle.0) {
            Some(deadline) => self.queue.remove(&(deadline, handle.0)).is_some(),
            None => false,
        }
    }

    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    pub fn is_idle(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn next_deadline(&self) -> Option<Duration> {
        self.queue.keys().next().map(|(deadline, _)| *deadline)
    }

    /// Pops the earliest task due at or before `until`, moving the clock to
    /// its deadline. Tasks scheduled by the caller in response are eligible
    /// on the next call.
    pub fn pop_due(&mut self, until: Duration) -> Option<(TimerHandle, T)> {
        let (&(deadline, seq), _) = self.queue.iter().next()?;
        if deadline > until {
            return None;
        }
        let task = self.queue.remove(&(deadline, seq))?;
        self.deadlines.remove(&seq);
        self.now = self.now.max(deadline);
        Some((TimerHandle(seq), task))
    }

    /// Moves the clock to `until` once every due task has been popped.
    pub fn settle(&mut self, until: Duration) {
        self.now = self.now.max(until);
    }
}

#[cfg(test)]
#[path = "tests/scheduler_tests.rs"]
mod tests;
