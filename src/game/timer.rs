//! Millisecond timers
//!
//! Both timers are driven by an external clock value (milliseconds since
//! start) rather than reading the time themselves.

/// Fires once every `interval_ms`. Missed periods are all reported.
#[derive(Debug, Clone)]
pub struct RepeatingTimer {
    interval_ms: u64,
    next_due_ms: u64,
}

impl RepeatingTimer {
    /// First firing happens one interval after `now_ms`
    pub fn new(interval_ms: u64, now_ms: u64) -> Self {
        let interval_ms = interval_ms.max(1);
        Self {
            interval_ms,
            next_due_ms: now_ms + interval_ms,
        }
    }

    /// Period between firings, at least 1 ms
    pub fn interval_ms(&self) -> u64 {
        self.interval_ms
    }

    /// Number of periods that elapsed up to `now_ms`
    pub fn poll(&mut self, now_ms: u64) -> u32 {
        let mut fired = 0;
        while now_ms >= self.next_due_ms {
            self.next_due_ms += self.interval_ms;
            fired += 1;
        }
        fired
    }
}

/// Blocks an action for `duration_ms` after each use.
#[derive(Debug, Clone)]
pub struct Cooldown {
    duration_ms: u64,
    ready: bool,
    last_trigger_ms: u64,
}

impl Cooldown {
    /// Starts ready
    pub fn new(duration_ms: u64) -> Self {
        Self {
            duration_ms,
            ready: true,
            last_trigger_ms: 0,
        }
    }

    /// May the action be used now?
    pub fn is_ready(&self) -> bool {
        self.ready
    }

    /// Start the cooldown at `now_ms`
    pub fn trigger(&mut self, now_ms: u64) {
        self.ready = false;
        self.last_trigger_ms = now_ms;
    }

    /// Re-enable once `duration_ms` has passed since the last trigger
    pub fn refresh(&mut self, now_ms: u64) {
        if !self.ready && now_ms.saturating_sub(self.last_trigger_ms) >= self.duration_ms {
            self.ready = true;
        }
    }
}
