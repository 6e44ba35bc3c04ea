use crate::foundation::{
    core::Millis,
    error::{FolioError, FolioResult},
};

/// Opaque id for a scheduled timer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimerHandle(u64);

#[derive(Clone, Copy, Debug)]
struct Timer {
    handle: TimerHandle,
    deadline: Millis,
    period_ms: Option<u64>,
}

/// Cooperative single-threaded timer queue.
///
/// Nothing fires on its own: the owner calls [`Scheduler::advance`] from its
/// frame loop and dispatches the returned handles. Owners keep the handles
/// they create and cancel them on teardown.
#[derive(Debug, Default)]
pub struct Scheduler {
    now: Millis,
    next_id: u64,
    timers: Vec<Timer>,
}

impl Scheduler {
    pub fn new(now: Millis) -> Self {
        Self {
            now,
            next_id: 0,
            timers: Vec::new(),
        }
    }

    pub fn now(&self) -> Millis {
        self.now
    }

    /// Schedule a periodic timer that first fires one period from now.
    pub fn every(&mut self, period_ms: u64) -> FolioResult<TimerHandle> {
        if period_ms == 0 {
            return Err(FolioError::validation("timer period must be > 0 ms"));
        }
        Ok(self.push(self.now.add_ms(period_ms), Some(period_ms)))
    }

    /// Schedule a one-shot timer.
    pub fn after(&mut self, delay_ms: u64) -> TimerHandle {
        self.push(self.now.add_ms(delay_ms), None)
    }

    fn push(&mut self, deadline: Millis, period_ms: Option<u64>) -> TimerHandle {
        let handle = TimerHandle(self.next_id);
        self.next_id += 1;
        self.timers.push(Timer {
            handle,
            deadline,
            period_ms,
        });
        handle
    }

    /// Returns `true` if the timer was still scheduled.
    pub fn cancel(&mut self, handle: TimerHandle) -> bool {
        let before = self.timers.len();
        self.timers.retain(|t| t.handle != handle);
        self.timers.len() != before
    }

    pub fn cancel_all(&mut self) {
        self.timers.clear();
    }

    pub fn is_active(&self, handle: TimerHandle) -> bool {
        self.timers.iter().any(|t| t.handle == handle)
    }

    pub fn active_count(&self) -> usize {
        self.timers.len()
    }

    /// Move the clock to `now` and return every timer whose deadline passed,
    /// ordered by deadline. A periodic timer that missed several periods fires
    /// once and is re-armed on its next future deadline.
    pub fn advance(&mut self, now: Millis) -> Vec<TimerHandle> {
        if now > self.now {
            self.now = now;
        }

        let mut due: Vec<(Millis, TimerHandle)> = self
            .timers
            .iter()
            .filter(|t| t.deadline <= self.now)
            .map(|t| (t.deadline, t.handle))
            .collect();
        due.sort();

        let now = self.now;
        self.timers.retain_mut(|t| {
            if t.deadline > now {
                return true;
            }
            match t.period_ms {
                Some(period) => {
                    let missed = now.since(t.deadline) / period + 1;
                    t.deadline = t.deadline.add_ms(missed.saturating_mul(period));
                    true
                }
                None => false,
            }
        });

        due.into_iter().map(|(_, h)| h).collect()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/timer.rs"]
mod tests;
