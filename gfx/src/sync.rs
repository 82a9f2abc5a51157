//! Frame-boundary synchronization.
//!
//! The renderer never touches a timer or a status port itself. Callers inject
//! a [`FrameSync`]; [`PolledVsync`] adapts any pollable retrace signal and
//! [`FrameClock`] stands in on hosts without one.

use std::thread;
use std::time::{Duration, Instant};

use crate::error::{GfxError, Result};

/// Blocks until the next frame boundary.
pub trait FrameSync {
    fn wait_for_frame(&mut self) -> Result<()>;
}

impl<T: FrameSync + ?Sized> FrameSync for Box<T> {
    fn wait_for_frame(&mut self) -> Result<()> {
        (**self).wait_for_frame()
    }
}

/// A level-triggered vertical retrace line.
pub trait VsyncSignal {
    /// `true` while the beam is in vertical retrace.
    fn is_asserted(&mut self) -> bool;
}

impl<F: FnMut() -> bool> VsyncSignal for F {
    fn is_asserted(&mut self) -> bool {
        self()
    }
}

/// Waits for the retrace signal to assert, then to deassert, so that a
/// call always returns at the start of active display.
pub struct PolledVsync<S> {
    signal: S,
    timeout: Option<Duration>,
}

impl<S: VsyncSignal> PolledVsync<S> {
    /// Polls `signal` with no upper bound on the wait.
    pub const fn new(signal: S) -> Self {
        Self {
            signal,
            timeout: None,
        }
    }

    /// Gives up with [`GfxError::SyncTimeout`] once `timeout` has elapsed.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    fn wait_until(&mut self, level: bool, started: Instant) -> Result<()> {
        while self.signal.is_asserted() != level {
            if let Some(timeout) = self.timeout {
                let waited = started.elapsed();
                if waited >= timeout {
                    tracing::warn!("vertical sync timed out after {waited:?}");
                    return Err(GfxError::SyncTimeout { waited });
                }
            }
            std::hint::spin_loop();
        }

        Ok(())
    }
}

impl<S: VsyncSignal> FrameSync for PolledVsync<S> {
    fn wait_for_frame(&mut self) -> Result<()> {
        let started = Instant::now();
        self.wait_until(true, started)?;
        self.wait_until(false, started)
    }
}

/// Sleeps until the next tick of a fixed-rate clock.
#[derive(Debug, Clone)]
pub struct FrameClock {
    period: Duration,
    next: Instant,
}

impl FrameClock {
    pub const DEFAULT_HZ: u32 = 60;

    #[must_use]
    pub fn new(hz: u32) -> Self {
        let period = Duration::from_secs(1) / hz.max(1);
        Self {
            period,
            next: Instant::now() + period,
        }
    }

    #[must_use]
    pub const fn period(&self) -> Duration {
        self.period
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new(Self::DEFAULT_HZ)
    }
}

impl FrameSync for FrameClock {
    fn wait_for_frame(&mut self) -> Result<()> {
        let now = Instant::now();
        if self.next > now {
            thread::sleep(self.next - now);
            self.next += self.period;
        } else {
            // Missed one or more ticks: resynchronize instead of bursting.
            self.next = now + self.period;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    /// Replays a fixed sequence of signal levels, then stays low.
    struct Script {
        levels: Vec<bool>,
        polls: usize,
    }

    impl VsyncSignal for Script {
        fn is_asserted(&mut self) -> bool {
            let level = self.levels.get(self.polls).copied().unwrap_or(false);
            self.polls += 1;
            level
        }
    }

    #[test]
    fn waits_for_assert_then_deassert() {
        let mut sync = PolledVsync::new(Script {
            levels: vec![false, false, true, true, true, false],
            polls: 0,
        });

        sync.wait_for_frame().unwrap();

        assert_eq!(sync.signal.polls, 6);
    }

    #[test]
    fn times_out_when_the_signal_never_comes() {
        let mut sync = PolledVsync::new(|| false).with_timeout(Duration::from_millis(5));

        let err = sync.wait_for_frame().unwrap_err();

        assert!(matches!(
            err,
            GfxError::SyncTimeout { waited } if waited >= Duration::from_millis(5)
        ));
    }

    #[test]
    fn stuck_signal_times_out_too() {
        let mut sync = PolledVsync::new(|| true).with_timeout(Duration::from_millis(5));

        assert!(sync.wait_for_frame().is_err());
    }

    #[test]
    fn clock_waits_about_one_period() {
        let mut clock = FrameClock::new(200);
        assert_eq!(clock.period(), Duration::from_millis(5));

        let started = Instant::now();
        clock.wait_for_frame().unwrap();
        clock.wait_for_frame().unwrap();

        assert!(started.elapsed() >= Duration::from_millis(5));
    }
}
