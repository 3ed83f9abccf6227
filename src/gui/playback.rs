use super::Config;
use std::time::{Duration, Instant};

/// Schedules generation ticks while the simulation is running.
#[derive(Debug)]
pub struct Playback {
    is_running: bool,
    interval: Duration,
    next_tick: Instant,
}

impl Default for Playback {
    fn default() -> Self {
        Self::new(Config::TICK_INTERVAL)
    }
}

impl Playback {
    pub fn new(interval: Duration) -> Self {
        Self {
            is_running: false,
            interval,
            next_tick: Instant::now(),
        }
    }

    pub fn is_running(&self) -> bool {
        self.is_running
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// The first tick is due immediately.
    pub fn start(&mut self, now: Instant) {
        self.is_running = true;
        self.next_tick = now;
    }

    pub fn stop(&mut self) {
        self.is_running = false;
    }

    /// Returns whether the simulation is running afterwards.
    pub fn toggle(&mut self, now: Instant) -> bool {
        if self.is_running {
            self.stop();
        } else {
            self.start(now);
        }
        self.is_running
    }

    /// Returns `true` if a generation is due at `now` and schedules the next one.
    ///
    /// Missed ticks are dropped rather than replayed.
    pub fn poll(&mut self, now: Instant) -> bool {
        if !self.is_running || now < self.next_tick {
            return false;
        }
        self.next_tick = now + self.interval;
        true
    }

    pub fn time_until_next(&self, now: Instant) -> Option<Duration> {
        self.is_running
            .then(|| self.next_tick.saturating_duration_since(now))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MS: Duration = Duration::from_millis(1);

    #[test]
    fn test_stopped_never_ticks() {
        let now = Instant::now();
        let mut playback = Playback::default();
        assert_eq!(playback.interval(), Config::TICK_INTERVAL);
        assert!(!playback.is_running());
        assert!(!playback.poll(now + 1000 * MS));
        assert_eq!(playback.time_until_next(now), None);
    }

    #[test]
    fn test_ticks_every_interval() {
        let t0 = Instant::now();
        let mut playback = Playback::new(100 * MS);
        playback.start(t0);
        assert!(playback.poll(t0));
        assert!(!playback.poll(t0 + 50 * MS));
        assert_eq!(playback.time_until_next(t0 + 50 * MS), Some(50 * MS));
        assert!(playback.poll(t0 + 100 * MS));
        // a stall yields a single tick
        assert!(playback.poll(t0 + 1000 * MS));
        assert!(!playback.poll(t0 + 1001 * MS));
    }

    #[test]
    fn test_toggle() {
        let t0 = Instant::now();
        let mut playback = Playback::new(100 * MS);
        assert!(playback.toggle(t0));
        assert!(!playback.toggle(t0 + MS));
        assert!(!playback.poll(t0 + 500 * MS));
        assert!(playback.toggle(t0 + 600 * MS));
        assert!(playback.poll(t0 + 600 * MS));
    }
}
