//! Hardware abstraction layer
//!
//! The harness needs three things from a board: a way to put the clock into a
//! known mode before the run starts, a monotonic cycle counter, and a
//! synchronous line transport to the host.

use core::fmt::Debug;

/// Core clock configuration requested before a run.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum ClockMode {
    /// Highest supported frequency. Flash wait states may distort cycle counts.
    Fast,

    /// Frequency at which memory runs without wait states, for stable cycle
    /// counts.
    #[default]
    Benchmark,
}

/// Board support used by the driver.
pub trait Hal {
    /// Error raised by the transport.
    type Error: Debug;

    /// Configure clocks and peripherals. Called once, before the first line is
    /// sent.
    fn setup(&mut self, mode: ClockMode);

    /// Sample the cycle counter.
    fn get_time(&self) -> u64;

    /// Send one line of text to the host. Blocks until the line is written.
    ///
    /// # Errors
    ///
    /// Returns the transport's error if the line could not be delivered.
    fn send_str(&mut self, line: &str) -> Result<(), Self::Error>;
}

impl<H: Hal + ?Sized> Hal for &mut H {
    type Error = H::Error;

    fn setup(&mut self, mode: ClockMode) {
        (**self).setup(mode);
    }

    #[inline(always)]
    fn get_time(&self) -> u64 {
        (**self).get_time()
    }

    fn send_str(&mut self, line: &str) -> Result<(), Self::Error> {
        (**self).send_str(line)
    }
}

#[cfg(feature = "std")]
pub use self::host::StdHal;

#[cfg(feature = "std")]
mod host {
    use super::{ClockMode, Hal};
    use std::io::{self, Write};
    use std::time::Instant;

    /// Host-side [`Hal`] for running the harness on a workstation.
    ///
    /// The "cycle counter" is nanoseconds since construction and lines are
    /// written newline-terminated to `W`.
    #[derive(Debug)]
    pub struct StdHal<W> {
        out: W,
        epoch: Instant,
        mode: Option<ClockMode>,
    }

    impl<W: Write> StdHal<W> {
        /// Create a HAL writing lines to `out`.
        pub fn new(out: W) -> Self {
            Self {
                out,
                epoch: Instant::now(),
                mode: None,
            }
        }

        /// Clock mode requested by the last call to [`Hal::setup`].
        pub fn clock_mode(&self) -> Option<ClockMode> {
            self.mode
        }

        /// Recover the underlying writer.
        pub fn into_inner(self) -> W {
            self.out
        }
    }

    impl<W: Write> Hal for StdHal<W> {
        type Error = io::Error;

        fn setup(&mut self, mode: ClockMode) {
            log::debug!("host clock mode {mode:?} has no effect on timing");
            self.mode = Some(mode);
        }

        fn get_time(&self) -> u64 {
            u64::try_from(self.epoch.elapsed().as_nanos()).unwrap_or(u64::MAX)
        }

        fn send_str(&mut self, line: &str) -> io::Result<()> {
            writeln!(self.out, "{line}")?;
            self.out.flush()
        }
    }

}
