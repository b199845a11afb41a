use std::time::{Duration, Instant};

/// Cancellable delayed delivery of the latest value.
///
/// Each [`input`](Debounce::input) replaces the pending value and restarts
/// the quiescence deadline; [`poll`](Debounce::poll) delivers the pending
/// value once the deadline has passed. Superseded intermediate values are
/// discarded, never queued. Time is injected so callers (and tests) control
/// the clock.
#[derive(Debug, Clone)]
pub struct Debounce {
    quiescence: Duration,
    pending: Option<Pending>,
}

#[derive(Debug, Clone)]
struct Pending {
    value: String,
    deadline: Instant,
}

impl Debounce {
    pub fn new(quiescence: Duration) -> Self {
        Self {
            quiescence,
            pending: None,
        }
    }

    /// Record a new raw value and restart the quiescence window.
    pub fn input(&mut self, value: impl Into<String>, now: Instant) {
        self.pending = Some(Pending {
            value: value.into(),
            deadline: now + self.quiescence,
        });
    }

    /// Deliver the pending value if the window has elapsed.
    ///
    /// Fires at most once per quiescent value; after delivery the debounce
    /// is idle until the next `input`.
    pub fn poll(&mut self, now: Instant) -> Option<String> {
        match &self.pending {
            Some(p) if now >= p.deadline => self.pending.take().map(|p| p.value),
            _ => None,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WINDOW: Duration = Duration::from_millis(300);

    #[test]
    fn does_not_fire_before_the_window_elapses() {
        let mut debounce = Debounce::new(WINDOW);
        let t0 = Instant::now();

        debounce.input("asp", t0);
        assert_eq!(debounce.poll(t0 + Duration::from_millis(299)), None);
        assert!(debounce.is_pending());
    }

    #[test]
    fn fires_once_after_quiescence() {
        let mut debounce = Debounce::new(WINDOW);
        let t0 = Instant::now();

        debounce.input("asp", t0);
        assert_eq!(debounce.poll(t0 + WINDOW), Some("asp".to_string()));
        // Already delivered; nothing further pending.
        assert_eq!(debounce.poll(t0 + WINDOW * 2), None);
        assert!(!debounce.is_pending());
    }

    #[test]
    fn new_input_restarts_the_window_and_supersedes_the_old_value() {
        let mut debounce = Debounce::new(WINDOW);
        let t0 = Instant::now();

        debounce.input("a", t0);
        debounce.input("as", t0 + Duration::from_millis(200));

        // The original deadline has passed, but the restarted one has not.
        assert_eq!(debounce.poll(t0 + Duration::from_millis(400)), None);
        // Only the last value is ever delivered.
        assert_eq!(
            debounce.poll(t0 + Duration::from_millis(500)),
            Some("as".to_string())
        );
    }

    #[test]
    fn idle_debounce_delivers_nothing() {
        let mut debounce = Debounce::new(WINDOW);
        assert_eq!(debounce.poll(Instant::now()), None);
    }
}
