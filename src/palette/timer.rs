use std::time::{Duration, Instant};

/// Cancellable one-shot deadline for the delayed page reset after the
/// palette closes. Polled from the tick action rather than driven by a
/// runtime timer so the schedule/cancel/fire behavior is testable in
/// isolation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ResetTimer {
    deadline: Option<Instant>,
}

impl ResetTimer {
    pub fn schedule(&mut self, now: Instant, delay: Duration) {
        self.deadline = Some(now + delay);
    }

    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// Returns true exactly once, when polled at or after the deadline.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_after_delay() {
        let start = Instant::now();
        let mut timer = ResetTimer::default();
        timer.schedule(start, Duration::from_millis(200));
        assert!(!timer.poll(start + Duration::from_millis(199)));
        assert!(timer.poll(start + Duration::from_millis(200)));
        // One-shot: a second poll stays quiet.
        assert!(!timer.poll(start + Duration::from_millis(500)));
    }

    #[test]
    fn cancel_suppresses_the_pending_fire() {
        let start = Instant::now();
        let mut timer = ResetTimer::default();
        timer.schedule(start, Duration::from_millis(200));
        timer.cancel();
        assert!(!timer.is_pending());
        assert!(!timer.poll(start + Duration::from_secs(1)));
    }

    #[test]
    fn reschedule_moves_the_deadline() {
        let start = Instant::now();
        let mut timer = ResetTimer::default();
        timer.schedule(start, Duration::from_millis(100));
        timer.schedule(start, Duration::from_millis(300));
        assert!(!timer.poll(start + Duration::from_millis(150)));
        assert!(timer.poll(start + Duration::from_millis(300)));
    }
}
