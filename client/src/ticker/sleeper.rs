use std::time::{Duration, Instant};

/// Paces a loop to a fixed period, accounting for the time spent between calls.
pub struct Sleeper {
    pub target_delta_time: Duration,
    pub last_instant: Option<Instant>,
}

impl Sleeper {
    pub fn new(target_delta_time: Duration) -> Self {
        Self {
            target_delta_time,
            last_instant: None,
        }
    }

    /// Sleeps out the rest of the current period. Returns whether any sleeping happened,
    /// the first call and calls that are already late return right away.
    pub fn sleep(&mut self) -> bool {
        let slept = match self.remaining() {
            Some(remaining) if !remaining.is_zero() => {
                spin_sleep::sleep(remaining);
                true
            }
            _ => false,
        };

        self.last_instant = Some(Instant::now());
        slept
    }

    fn remaining(&self) -> Option<Duration> {
        let last_instant = self.last_instant?;
        Some(self.target_delta_time.saturating_sub(last_instant.elapsed()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_call_does_not_sleep() {
        let mut sleeper = Sleeper::new(Duration::from_secs(10));
        assert!(!sleeper.sleep());
        assert!(sleeper.last_instant.is_some());
    }

    #[test]
    fn keeps_the_period() {
        let period = Duration::from_millis(20);
        let mut sleeper = Sleeper::new(period);
        sleeper.sleep();

        let before = Instant::now();
        assert!(sleeper.sleep());
        assert!(before.elapsed() >= period / 2);
    }

    #[test]
    fn late_calls_return_immediately() {
        let mut sleeper = Sleeper::new(Duration::ZERO);
        sleeper.sleep();
        assert!(!sleeper.sleep());
    }
}
