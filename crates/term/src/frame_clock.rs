use std::time::{Duration, Instant};

/// Fixed-timestep pacing for the main loop.
///
/// Each step hands out the whole milliseconds elapsed since the previous
/// one and moves its mark by exactly that amount, so sub-millisecond
/// remainders and time spent between the measurement and the next step
/// carry over instead of being dropped.
#[derive(Debug, Clone)]
pub struct FrameClock {
    step: Duration,
    last: Instant,
}

impl FrameClock {
    pub fn new(step_ms: u32, now: Instant) -> Self {
        Self {
            step: Duration::from_millis(step_ms as u64),
            last: now,
        }
    }

    /// How long input polling may block before the next step is due.
    pub fn timeout(&self, now: Instant) -> Duration {
        self.step.saturating_sub(now.saturating_duration_since(self.last))
    }

    /// Elapsed whole milliseconds, once at least one step has passed.
    pub fn take_due(&mut self, now: Instant) -> Option<u32> {
        let elapsed = now.saturating_duration_since(self.last);
        if elapsed < self.step {
            return None;
        }
        let ms = u32::try_from(elapsed.as_millis()).unwrap_or(u32::MAX);
        self.last += Duration::from_millis(ms as u64);
        Some(ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nothing_due_before_one_step() {
        let t0 = Instant::now();
        let mut clock = FrameClock::new(16, t0);
        assert_eq!(clock.take_due(t0 + Duration::from_millis(15)), None);
        assert_eq!(
            clock.timeout(t0 + Duration::from_millis(10)),
            Duration::from_millis(6)
        );
        assert_eq!(clock.timeout(t0 + Duration::from_millis(40)), Duration::ZERO);
    }

    #[test]
    fn remainders_carry_into_the_next_step() {
        let t0 = Instant::now();
        let mut clock = FrameClock::new(16, t0);

        assert_eq!(clock.take_due(t0 + Duration::from_micros(16_700)), Some(16));
        // 0.7 ms left over from the first step.
        assert_eq!(clock.take_due(t0 + Duration::from_micros(32_400)), Some(16));
        // 16 + 16 + 968 adds up to the full second.
        assert_eq!(clock.take_due(t0 + Duration::from_millis(1_000)), Some(968));
    }
}
