//! Render task
//!
//! Owns the display pins and keeps the digits refreshed until shutdown is
//! signaled, then leaves the display dark.

use log::{info, warn};
use segment_core::config::TimingConfig;
use segment_core::glyph::SEGMENT_COUNT;
use segment_core::scroll::DIGIT_COUNT;
use segment_core::{run_until_cancelled, CancelSignal, DisplayState};
use segment_drivers::{Error, Led4};
use segment_hal::{DelayNs, Pin};

/// Run the display until `shutdown` is signaled
///
/// Returns the number of completed render passes.
///
/// # Arguments
/// - `digits`: digit-select pins, left to right
/// - `segments`: segment pins in a, b, c, d, e, f, g, dp order
/// - `delay`: hold delay provider
/// - `state`: text to display
/// - `timing`: hold time and scroll dwell
/// - `shutdown`: stop request, checked between passes
pub fn render_task<P: Pin, T: DelayNs>(
    digits: [P; DIGIT_COUNT],
    segments: [P; SEGMENT_COUNT],
    delay: T,
    state: &DisplayState,
    timing: &TimingConfig,
    shutdown: &CancelSignal,
) -> Result<u64, Error<P::Error>> {
    info!(
        "Render task started (hold {} us, sweep {} us, dwell {} sweeps)",
        timing.digit_hold_us,
        timing.sweep_us(),
        timing.dwell_sweeps
    );

    let mut display = Led4::new(digits, segments, delay, state, timing)?;

    match run_until_cancelled(&mut display, shutdown) {
        Ok(passes) => {
            info!("Render task stopped after {} passes", passes);
            Ok(passes)
        }
        Err(e) => {
            warn!("Render task aborted: {}", e);
            Err(e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::convert::Infallible;
    use segment_hal::Pull;
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
    use std::sync::Arc;
    use std::thread;
    use std::time::Duration;

    #[derive(Default)]
    struct MockPin;

    impl Pin for MockPin {
        type Error = Infallible;

        fn set_output_mode(&mut self) -> Result<(), Infallible> {
            Ok(())
        }

        fn set_high(&mut self) -> Result<(), Infallible> {
            Ok(())
        }

        fn set_low(&mut self) -> Result<(), Infallible> {
            Ok(())
        }

        fn set_pull(&mut self, _pull: Pull) -> Result<(), Infallible> {
            Ok(())
        }

        fn set_segment_active(&mut self, _active: bool) -> Result<(), Infallible> {
            Ok(())
        }
    }

    /// Delay that requests shutdown after a number of holds
    struct StopAfter<'a> {
        holds: u32,
        shutdown: &'a CancelSignal,
    }

    impl DelayNs for StopAfter<'_> {
        fn delay_ns(&mut self, _ns: u32) {
            self.holds = self.holds.saturating_sub(1);
            if self.holds == 0 {
                self.shutdown.signal(());
            }
        }
    }

    #[test]
    fn test_runs_until_shutdown() {
        let shutdown = CancelSignal::new();
        let state = DisplayState::new();
        state.update("1234").unwrap();

        let delay = StopAfter {
            holds: 10,
            shutdown: &shutdown,
        };
        let passes = render_task::<MockPin, _>(
            Default::default(),
            Default::default(),
            delay,
            &state,
            &TimingConfig::default(),
            &shutdown,
        )
        .unwrap();

        // Shutdown lands mid-pass on the 10th hold; that pass still completes
        assert_eq!(passes, 3);
    }

    #[test]
    fn test_shutdown_before_start() {
        let shutdown = CancelSignal::new();
        shutdown.signal(());
        let state = DisplayState::new();

        let delay = StopAfter {
            holds: u32::MAX,
            shutdown: &shutdown,
        };
        let passes = render_task::<MockPin, _>(
            Default::default(),
            Default::default(),
            delay,
            &state,
            &TimingConfig::default(),
            &shutdown,
        )
        .unwrap();

        assert_eq!(passes, 0);
    }

    /// Pin whose energized state is visible from another thread
    struct SharedPin {
        on: Arc<AtomicBool>,
    }

    impl Pin for SharedPin {
        type Error = Infallible;

        fn set_output_mode(&mut self) -> Result<(), Infallible> {
            Ok(())
        }

        fn set_high(&mut self) -> Result<(), Infallible> {
            self.on.store(true, Ordering::SeqCst);
            Ok(())
        }

        fn set_low(&mut self) -> Result<(), Infallible> {
            self.on.store(false, Ordering::SeqCst);
            Ok(())
        }

        fn set_pull(&mut self, _pull: Pull) -> Result<(), Infallible> {
            Ok(())
        }

        fn set_segment_active(&mut self, active: bool) -> Result<(), Infallible> {
            self.on.store(active, Ordering::SeqCst);
            Ok(())
        }
    }

    /// Short real sleep that counts holds
    struct CountingDelay {
        holds: Arc<AtomicUsize>,
    }

    impl DelayNs for CountingDelay {
        fn delay_ns(&mut self, _ns: u32) {
            self.holds.fetch_add(1, Ordering::SeqCst);
            thread::sleep(Duration::from_micros(50));
        }
    }

    #[test]
    fn test_external_shutdown_blanks_display() {
        let shutdown = CancelSignal::new();
        let state = DisplayState::new();
        state.update("8.8.8.8.").unwrap();

        let flags: Vec<Arc<AtomicBool>> = (0..12).map(|_| Arc::new(AtomicBool::new(false))).collect();
        let pin = |i: usize| SharedPin {
            on: flags[i].clone(),
        };
        let holds = Arc::new(AtomicUsize::new(0));
        let delay = CountingDelay {
            holds: holds.clone(),
        };
        let timing = TimingConfig {
            digit_hold_us: 50,
            dwell_sweeps: 1,
        };

        let passes = thread::scope(|s| {
            // Stands in for the signal handler thread
            s.spawn(|| {
                while holds.load(Ordering::SeqCst) < 40 {
                    thread::sleep(Duration::from_millis(1));
                }
                shutdown.signal(());
            });

            render_task(
                std::array::from_fn(pin),
                std::array::from_fn(|i| pin(4 + i)),
                delay,
                &state,
                &timing,
                &shutdown,
            )
            .unwrap()
        });

        // 8 frames of 4 holds per pass; shutdown came after 40 holds
        assert!(passes >= 1);
        assert!(flags.iter().all(|on| !on.load(Ordering::SeqCst)));
    }
}
