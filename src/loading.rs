use std::time::Duration;

/// One-shot gate in front of the main content. Opens once `delay` has elapsed
/// and stays open for the rest of the page's life.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadingGate {
    delay: Duration,
    open: bool,
}

impl LoadingGate {
    pub fn new(delay: Duration) -> Self {
        Self { delay, open: false }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Reports `elapsed` time since mount. Returns `true` only on the call
    /// that opens the gate.
    pub fn advance(&mut self, elapsed: Duration) -> bool {
        if self.open || elapsed < self.delay {
            return false;
        }
        self.open = true;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closed_before_delay() {
        let mut gate = LoadingGate::new(Duration::from_millis(2000));
        assert!(!gate.advance(Duration::ZERO));
        assert!(!gate.advance(Duration::from_millis(1999)));
        assert!(!gate.is_open());
    }

    #[test]
    fn test_opens_exactly_once() {
        let mut gate = LoadingGate::new(Duration::from_millis(2000));
        assert!(gate.advance(Duration::from_millis(2000)));
        assert!(gate.is_open());
        assert!(!gate.advance(Duration::from_millis(2500)));
        assert!(!gate.advance(Duration::from_millis(10)));
        assert!(gate.is_open());
    }

    #[test]
    fn test_zero_delay_opens_immediately() {
        let mut gate = LoadingGate::new(Duration::ZERO);
        assert!(gate.advance(Duration::ZERO));
    }
}
