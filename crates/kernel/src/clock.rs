use std::time::{Duration, Instant};

/// Largest delta handed to the controller. Long stalls (window drags,
/// breakpoints) become one short step instead of a teleport.
pub const MAX_FRAME_DELTA: f32 = 0.1;

/// Frame time source: seconds since the previous tick, plus a short history
/// for display.
#[derive(Debug, Clone)]
pub struct FrameClock {
    start: Instant,
    last: Instant,
    max_delta: f32,
    history: Vec<Duration>,
    index: usize,
    filled: bool,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::starting_at(Instant::now())
    }

    pub fn starting_at(now: Instant) -> Self {
        Self {
            start: now,
            last: now,
            max_delta: MAX_FRAME_DELTA,
            history: vec![Duration::ZERO; 60],
            index: 0,
            filled: false,
        }
    }

    /// Forget all history and start timing from now. Call once setup is done
    /// so the first frame does not absorb startup time.
    pub fn restart(&mut self) {
        self.restart_at(Instant::now());
    }

    pub fn restart_at(&mut self, now: Instant) {
        *self = Self::starting_at(now);
    }

    /// Advance to the current instant.
    pub fn tick(&mut self) -> f32 {
        self.tick_at(Instant::now())
    }

    /// Advance to `now`, returning the capped, non-negative delta in seconds.
    pub fn tick_at(&mut self, now: Instant) -> f32 {
        let raw = now.saturating_duration_since(self.last);
        self.last = now;
        self.record(raw);
        raw.as_secs_f32().min(self.max_delta)
    }

    /// Seconds since the clock was created; drives time-varying transforms.
    pub fn elapsed(&self) -> f32 {
        self.last.saturating_duration_since(self.start).as_secs_f32()
    }

    /// Mean of the recorded frame durations.
    pub fn average_frame_time(&self) -> Duration {
        let count = if self.filled { self.history.len() } else { self.index };
        if count == 0 {
            return Duration::ZERO;
        }
        let total: Duration = self.history[..count].iter().sum();
        total / count as u32
    }

    fn record(&mut self, dt: Duration) {
        self.history[self.index] = dt;
        self.index = (self.index + 1) % self.history.len();
        if self.index == 0 {
            self.filled = true;
        }
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delta_is_time_since_last_tick() {
        let t0 = Instant::now();
        let mut clock = FrameClock::starting_at(t0);
        let dt = clock.tick_at(t0 + Duration::from_millis(16));
        assert!((dt - 0.016).abs() < 1e-6);
        let dt = clock.tick_at(t0 + Duration::from_millis(40));
        assert!((dt - 0.024).abs() < 1e-6);
        assert!((clock.elapsed() - 0.040).abs() < 1e-6);
    }

    #[test]
    fn delta_is_capped() {
        let t0 = Instant::now();
        let mut clock = FrameClock::starting_at(t0);
        let dt = clock.tick_at(t0 + Duration::from_secs(3));
        assert_eq!(dt, MAX_FRAME_DELTA);
        // Elapsed time is not capped.
        assert!((clock.elapsed() - 3.0).abs() < 1e-6);
    }

    #[test]
    fn going_backwards_yields_zero() {
        let t0 = Instant::now() + Duration::from_secs(1);
        let mut clock = FrameClock::starting_at(t0);
        let dt = clock.tick_at(t0 - Duration::from_millis(500));
        assert_eq!(dt, 0.0);
    }

    #[test]
    fn average_frame_time_over_history() {
        let t0 = Instant::now();
        let mut clock = FrameClock::starting_at(t0);
        assert_eq!(clock.average_frame_time(), Duration::ZERO);
        clock.tick_at(t0 + Duration::from_millis(10));
        clock.tick_at(t0 + Duration::from_millis(30));
        assert_eq!(clock.average_frame_time(), Duration::from_millis(15));
    }

    #[test]
    fn restart_discards_setup_time() {
        let t0 = Instant::now();
        let mut clock = FrameClock::starting_at(t0);
        clock.tick_at(t0 + Duration::from_millis(20));

        // Two seconds of setup before the first real frame.
        let ready = t0 + Duration::from_secs(2);
        clock.restart_at(ready);
        assert_eq!(clock.elapsed(), 0.0);
        assert_eq!(clock.average_frame_time(), Duration::ZERO);

        let dt = clock.tick_at(ready + Duration::from_millis(16));
        assert!((dt - 0.016).abs() < 1e-6);
        assert!((clock.elapsed() - 0.016).abs() < 1e-6);
    }
}
