//! Countdown timer - a cancellable single-shot timer.
//!
//! At most one countdown is pending at a time. Scheduling a new one replaces
//! the old one, and every schedule gets a fresh [`TimerId`], so an expiry that
//! was observed for an old countdown can never be fired against a newer one.

/// Handle identifying one scheduled countdown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerId(u32);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Pending {
    id: TimerId,
    deadline_ms: u64,
}

#[derive(Debug, Clone, Default)]
pub struct Countdown {
    next_id: u32,
    pending: Option<Pending>,
}

impl Countdown {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a countdown of `duration_ms` from `now_ms`, cancelling any pending one.
    pub fn schedule(&mut self, now_ms: u64, duration_ms: u32) -> TimerId {
        self.next_id = self.next_id.wrapping_add(1);
        let id = TimerId(self.next_id);
        self.pending = Some(Pending {
            id,
            deadline_ms: now_ms.saturating_add(duration_ms as u64),
        });
        id
    }

    /// Cancel the pending countdown, if any.
    pub fn cancel(&mut self) -> Option<TimerId> {
        self.pending.take().map(|p| p.id)
    }

    pub fn is_active(&self) -> bool {
        self.pending.is_some()
    }

    /// Id of the pending countdown
    pub fn current(&self) -> Option<TimerId> {
        self.pending.map(|p| p.id)
    }

    /// Id of the pending countdown if its deadline has passed.
    ///
    /// This only observes; the owner decides whether to [`fire`](Self::fire).
    pub fn expired(&self, now_ms: u64) -> Option<TimerId> {
        self.pending
            .filter(|p| now_ms >= p.deadline_ms)
            .map(|p| p.id)
    }

    /// Consume the countdown identified by `id`.
    ///
    /// Returns `false` for stale or cancelled ids.
    pub fn fire(&mut self, id: TimerId) -> bool {
        match self.pending {
            Some(p) if p.id == id => {
                self.pending = None;
                true
            }
            _ => false,
        }
    }

    /// Time left on the pending countdown (0 when inactive)
    pub fn remaining_ms(&self, now_ms: u64) -> u32 {
        self.pending
            .map(|p| p.deadline_ms.saturating_sub(now_ms) as u32)
            .unwrap_or(0)
    }
}
