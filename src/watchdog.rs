//! Message watchdog
//!
//! Elapsed-time check for a link that is expected to deliver sentences at a
//! steady cadence. The owner kicks the watchdog on every decoded sentence (or
//! at minimum every received byte); an expired watchdog is the signal to
//! treat the link as dead and re-run module startup.

use std::time::{Duration, Instant};

#[derive(Debug)]
pub struct MessageWatchdog {
    timeout: Duration,
    last_kicked: Instant,
}

impl MessageWatchdog {
    pub fn new(timeout: Duration) -> Self {
        Self {
            timeout,
            last_kicked: Instant::now(),
        }
    }

    /// True when no kick has arrived within the timeout window
    pub fn is_expired(&self) -> bool {
        self.last_kicked.elapsed() > self.timeout
    }

    /// Restart the timer
    pub fn kick(&mut self) {
        self.last_kicked = Instant::now();
    }
}
