use std::time::{Duration, Instant};

/// Deferred move of the view to freshly rendered results
///
/// Results are drawn first; the move happens once the delay has passed so
/// the new layout has settled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AutoScroll {
    delay: Duration,
    due: Option<Instant>,
}

impl AutoScroll {
    pub fn new(delay: Duration) -> Self {
        Self { delay, due: None }
    }

    /// Schedule a move; a newer schedule replaces a pending one
    pub fn schedule(&mut self, now: Instant) {
        self.due = Some(now + self.delay);
    }

    pub fn cancel(&mut self) {
        self.due = None;
    }

    pub fn is_pending(&self) -> bool {
        self.due.is_some()
    }

    /// Returns true exactly once, when the scheduled move is due
    pub fn fire(&mut self, now: Instant) -> bool {
        match self.due {
            Some(due) if now >= due => {
                self.due = None;
                true
            }
            _ => false,
        }
    }
}
