//! A stand-in for the adapter's retrace status bit, derived from wall time.

use std::time::{Duration, Instant};

use gfx::VsyncSignal;

/// Asserted during the first `blank` of every `period` since creation.
#[derive(Debug, Clone)]
pub struct SimulatedRetrace {
    epoch: Instant,
    period: Duration,
    blank: Duration,
}

impl SimulatedRetrace {
    #[must_use]
    pub fn new(period: Duration, blank: Duration) -> Self {
        Self {
            epoch: Instant::now(),
            period,
            blank: blank.min(period),
        }
    }
}

impl Default for SimulatedRetrace {
    /// 60 Hz with a retrace of about 8% of the frame.
    fn default() -> Self {
        Self::new(Duration::from_micros(16_667), Duration::from_micros(1_400))
    }
}

impl VsyncSignal for SimulatedRetrace {
    fn is_asserted(&mut self) -> bool {
        let period = self.period.as_nanos().max(1);
        self.epoch.elapsed().as_nanos() % period < self.blank.as_nanos()
    }
}
