//! Host-clock driven timers.
//!
//! Every timer takes the current time as a millisecond count from the
//! host, so nothing here sleeps or reads a clock.

/// Coalesces bursts of triggers into one trailing fire.
#[derive(Debug, Clone)]
pub struct Debouncer {
    delay_ms: u64,
    deadline_ms: Option<u64>,
}

impl Debouncer {
    pub fn new(delay_ms: u64) -> Self {
        Self {
            delay_ms,
            deadline_ms: None,
        }
    }

    /// Cancel any pending fire and reschedule one `delay_ms` from now.
    pub fn trigger(&mut self, now_ms: u64) {
        self.deadline_ms = Some(now_ms + self.delay_ms);
    }

    /// Returns true exactly once after the quiescence window has passed.
    pub fn poll(&mut self, now_ms: u64) -> bool {
        match self.deadline_ms {
            Some(deadline) if now_ms >= deadline => {
                self.deadline_ms = None;
                true
            }
            _ => false,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.deadline_ms.is_some()
    }

    pub fn cancel(&mut self) {
        self.deadline_ms = None;
    }
}

/// Fixed-delay repeating timer whose first fire happens at start.
#[derive(Debug, Clone)]
pub struct Interval {
    delay_ms: u64,
    next_fire_ms: u64,
    fired: usize,
    max_fires: Option<usize>,
}

impl Interval {
    /// Start the timer. The immediate first fire is counted as already
    /// delivered; the caller runs it synchronously.
    pub fn start(now_ms: u64, delay_ms: u64, max_fires: Option<usize>) -> Self {
        Self {
            delay_ms,
            next_fire_ms: now_ms + delay_ms,
            fired: 1,
            max_fires,
        }
    }

    /// Number of fires that have come due since the last poll.
    pub fn poll(&mut self, now_ms: u64) -> usize {
        let mut due = 0;
        while !self.is_finished() && now_ms >= self.next_fire_ms {
            self.fired += 1;
            self.next_fire_ms += self.delay_ms;
            due += 1;
        }
        due
    }

    /// Restart the delay from `now_ms`, counting one extra fire.
    pub fn fire_now(&mut self, now_ms: u64) {
        self.fired += 1;
        self.next_fire_ms = now_ms + self.delay_ms;
    }

    /// Total fires delivered, including the first.
    pub fn fired(&self) -> usize {
        self.fired
    }

    pub fn is_finished(&self) -> bool {
        self.max_fires.is_some_and(|max| self.fired >= max)
    }
}

/// Owns the per-frame render registration.
#[derive(Debug, Clone)]
pub struct FrameDriver {
    frame_interval_ms: u64,
    next_frame_ms: Option<u64>,
}

impl FrameDriver {
    pub fn new(frame_interval_ms: u64) -> Self {
        Self {
            frame_interval_ms,
            next_frame_ms: None,
        }
    }

    /// Start producing frames. A running driver is left untouched.
    pub fn start(&mut self, now_ms: u64) {
        if self.next_frame_ms.is_none() {
            self.next_frame_ms = Some(now_ms);
        }
    }

    /// Stop producing frames. Stopping twice is fine.
    pub fn stop(&mut self) {
        self.next_frame_ms = None;
    }

    pub fn is_running(&self) -> bool {
        self.next_frame_ms.is_some()
    }

    pub fn frame_interval_ms(&self) -> u64 {
        self.frame_interval_ms
    }

    /// Whether a frame should be rendered now. Missed frames are dropped,
    /// not replayed.
    pub fn frame_due(&mut self, now_ms: u64) -> bool {
        match self.next_frame_ms {
            Some(next) if now_ms >= next => {
                self.next_frame_ms = Some(now_ms + self.frame_interval_ms);
                true
            }
            _ => false,
        }
    }

    /// Milliseconds until the next frame, if running.
    pub fn until_next_frame(&self, now_ms: u64) -> Option<u64> {
        self.next_frame_ms.map(|next| next.saturating_sub(now_ms))
    }
}
