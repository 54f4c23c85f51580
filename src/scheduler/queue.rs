use std::time::{Duration, Instant};

use super::clock::{Clock, SystemClock};

/// Handle to a scheduled timer. Ids are allocated in increasing order and
/// never reused, so a stale handle can never cancel or match a newer timer.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimerId(u64);

/// Post-after-delay / cancel primitive.
pub trait Scheduler {
    /// Arm a one-shot timer firing after `delay`. `Duration::ZERO` means
    /// "on the next loop turn".
    fn schedule(&mut self, delay: Duration) -> TimerId;
    /// Disarm a timer. Unknown or already-fired ids are ignored.
    fn cancel(&mut self, id: TimerId);
}

/// Pending one-shot timers, polled by the event loop.
#[derive(Debug)]
pub struct TimerQueue<C: Clock = SystemClock> {
    clock: C,
    next_id: u64,
    pending: Vec<(Instant, TimerId)>,
}

impl<C: Clock> TimerQueue<C> {
    pub fn new(clock: C) -> Self {
        Self {
            clock,
            next_id: 0,
            pending: Vec::new(),
        }
    }

    /// Remove and return the earliest timer whose deadline has passed.
    /// Timers sharing a deadline come out in the order they were scheduled.
    pub fn pop_due(&mut self) -> Option<TimerId> {
        let now = self.clock.now();
        let pos = self
            .pending
            .iter()
            .enumerate()
            .filter(|(_, (deadline, _))| *deadline <= now)
            .min_by_key(|(_, entry)| **entry)
            .map(|(i, _)| i)?;
        Some(self.pending.remove(pos).1)
    }

    /// Deadline of the soonest pending timer, if any.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending.iter().map(|(deadline, _)| *deadline).min()
    }

    /// Number of armed timers.
    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    pub fn is_pending(&self, id: TimerId) -> bool {
        self.pending.iter().any(|(_, p)| *p == id)
    }
}

impl<C: Clock> Scheduler for TimerQueue<C> {
    fn schedule(&mut self, delay: Duration) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        self.pending.push((self.clock.now() + delay, id));
        id
    }

    fn cancel(&mut self, id: TimerId) {
        self.pending.retain(|(_, p)| *p != id);
    }
}
