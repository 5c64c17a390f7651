use std::{
    thread::sleep,
    time::{Duration, Instant},
};

/// after a stall, at most this many ticks' worth of time is carried over.
const MAX_BACKLOG_TICKS: u32 = 1;

pub trait Clock {
    /// time since the clock was created.
    fn now(&self) -> Duration;

    fn sleep(&mut self, duration: Duration);
}

#[derive(Clone, Copy, Debug)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }

    fn sleep(&mut self, duration: Duration) {
        sleep(duration);
    }
}

/// virtual time. sleeping advances the clock instantly.
#[derive(Clone, Copy, Debug, Default)]
pub struct ManualClock {
    now: Duration,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// simulates time spent outside of [`Clock::sleep`], e.g. rendering.
    pub fn advance(&mut self, duration: Duration) {
        self.now += duration;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Duration {
        self.now
    }

    fn sleep(&mut self, duration: Duration) {
        self.now += duration;
    }
}

/// fixed-timestep frame limiter. time spent between waits counts towards the next tick.
#[derive(Clone, Debug)]
pub struct TickScheduler {
    period: Duration,
    accumulator: Duration,
    last: Duration,
}

impl TickScheduler {
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            accumulator: Duration::ZERO,
            last: Duration::ZERO,
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// starts measuring from `now`, dropping any accumulated time.
    pub fn reset(&mut self, now: Duration) {
        self.accumulator = Duration::ZERO;
        self.last = now;
    }

    /// blocks until a full period has accumulated, then consumes it.
    pub fn wait_for_tick<C: Clock>(&mut self, clock: &mut C) {
        self.accumulate(clock.now());
        if self.accumulator < self.period {
            clock.sleep(self.period - self.accumulator);
            self.accumulate(clock.now());
        }
        self.accumulator = self
            .accumulator
            .saturating_sub(self.period)
            .min(self.period * MAX_BACKLOG_TICKS);
    }

    fn accumulate(&mut self, now: Duration) {
        self.accumulator += now.saturating_sub(self.last);
        self.last = now;
    }
}
