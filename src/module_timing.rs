//! Power sequencing timings for the UG95/UG96 family.
//!
//! Pulse widths follow the hardware design guide. Poll bounds are counted
//! in fixed intervals, the product of interval and attempts is the timeout.

use embassy_time::Duration;

/// Fixed-interval polling bound for the status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Poll {
    pub interval: Duration,
    pub attempts: u8,
}

impl Poll {
    pub const fn timeout(&self) -> Duration {
        Duration::from_ticks(self.interval.as_ticks() * self.attempts as u64)
    }
}

/// Active time of `PWR_KEY` to trigger module switch on
pub const PWR_ON_ACTIVE_TIME: Duration = Duration::from_millis(500);

/// Inactive time following the power on pulse, before polling starts
pub const PWR_ON_RELEASE_TIME: Duration = Duration::from_millis(200);

/// Status line polling after the power on pulse (5 s)
pub const BOOT_POLL: Poll = Poll {
    interval: Duration::from_millis(100),
    attempts: 50,
};

/// Time for the UART to come up once the status line is active
pub const BOOT_SETTLE_TIME: Duration = Duration::from_millis(1500);

/// Status line polling after `AT+QPOWD`, network detach included (12.5 s)
pub const GRACEFUL_OFF_POLL: Poll = Poll {
    interval: Duration::from_millis(100),
    attempts: 125,
};

/// Active time of the kill line to abruptly cut power
pub const KILL_ACTIVE_TIME: Duration = Duration::from_millis(500);

/// Inactive time following the kill pulse, before polling starts
pub const KILL_RELEASE_TIME: Duration = Duration::from_millis(200);

/// Status line polling after the kill pulse (1.5 s)
pub const FORCED_OFF_POLL: Poll = Poll {
    interval: Duration::from_millis(100),
    attempts: 15,
};

/// Status line polling while the kill line is held during initialization (5 s)
pub const IDLE_POLL: Poll = Poll {
    interval: Duration::from_millis(100),
    attempts: 50,
};

/// Time for the supply rails to collapse after power down
pub const OFF_SETTLE_TIME: Duration = Duration::from_millis(500);
