//! Measurement reporting wire format
//!
//! A run is reported as plain text lines:
//!
//! ```text
//! ==========================      run start
//! keypair cycles: 4183362         one line per measured phase
//! ...
//! +                               end of an iteration
//! #                               end of the run
//! ```
//!
//! Lines are formatted into a fixed stack buffer and handed to
//! [`Hal::send_str`]; nothing is allocated.

use core::fmt::{self, Display, Write};

use crate::{
    error::{Error, Result},
    hal::Hal,
};

/// Line sent before the first iteration.
pub const SEPARATOR: &str = "==========================";

/// Line sent after every iteration.
pub const ITERATION_END: &str = "+";

/// Line sent after the last iteration.
pub const RUN_END: &str = "#";

/// Size of the buffer a single line is formatted into.
pub const LINE_CAPACITY: usize = 64;

const CYCLES_INFIX: &str = " cycles: ";

/// One timed sample.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Measurement {
    /// Name of the measured operation.
    pub label: &'static str,

    /// Elapsed cycle count.
    pub cycles: u64,
}

impl Measurement {
    /// Pair a label with a cycle count.
    pub const fn new(label: &'static str, cycles: u64) -> Self {
        Self { label, cycles }
    }
}

impl Display for Measurement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.label, CYCLES_INFIX, self.cycles)
    }
}

/// Send the run separator.
///
/// # Errors
///
/// Returns [`Error::Transport`] if the line could not be sent.
pub fn separator<H: Hal>(hal: &mut H) -> Result<(), H::Error> {
    send(hal, SEPARATOR)
}

/// Send one measurement line.
///
/// # Errors
///
/// Returns [`Error::LineOverflow`] if the label is too long for the line
/// buffer, or [`Error::Transport`] if the line could not be sent.
pub fn measurement<H: Hal>(hal: &mut H, m: &Measurement) -> Result<(), H::Error> {
    let mut line = LineBuf::new();
    write!(line, "{m}").map_err(|_| Error::LineOverflow {
        capacity: LINE_CAPACITY,
    })?;
    send(hal, line.as_str())
}

/// Send the iteration boundary marker.
///
/// # Errors
///
/// Returns [`Error::Transport`] if the line could not be sent.
pub fn iteration_end<H: Hal>(hal: &mut H) -> Result<(), H::Error> {
    send(hal, ITERATION_END)
}

/// Send the run completion marker.
///
/// # Errors
///
/// Returns [`Error::Transport`] if the line could not be sent.
pub fn run_end<H: Hal>(hal: &mut H) -> Result<(), H::Error> {
    send(hal, RUN_END)
}

fn send<H: Hal>(hal: &mut H, line: &str) -> Result<(), H::Error> {
    hal.send_str(line).map_err(Error::Transport)
}

/// A decoded line of the wire format, as seen by a host collector.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Line<'a> {
    /// [`SEPARATOR`]
    Separator,

    /// `<label> cycles: <value>`
    Measurement {
        /// Name of the measured operation.
        label: &'a str,
        /// Elapsed cycle count.
        cycles: u64,
    },

    /// [`ITERATION_END`]
    IterationEnd,

    /// [`RUN_END`]
    RunEnd,
}

impl<'a> Line<'a> {
    /// Decode one received line. Trailing `\r` and `\n` are ignored.
    ///
    /// Returns `None` for anything that is not part of the wire format.
    pub fn parse(line: &'a str) -> Option<Self> {
        match line.trim_end_matches(['\r', '\n']) {
            SEPARATOR => Some(Self::Separator),
            ITERATION_END => Some(Self::IterationEnd),
            RUN_END => Some(Self::RunEnd),
            other => {
                let (label, value) = other.split_once(CYCLES_INFIX)?;
                if label.is_empty() || label.contains(char::is_whitespace) {
                    return None;
                }
                let cycles = value.parse().ok()?;
                Some(Self::Measurement { label, cycles })
            }
        }
    }
}

/// Fixed-size line buffer.
struct LineBuf {
    bytes: [u8; LINE_CAPACITY],
    len: usize,
}

impl LineBuf {
    fn new() -> Self {
        Self {
            bytes: [0; LINE_CAPACITY],
            len: 0,
        }
    }

    fn as_str(&self) -> &str {
        // only whole `str` slices are ever copied in
        core::str::from_utf8(&self.bytes[..self.len]).unwrap_or_default()
    }
}

impl Write for LineBuf {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        let end = self.len.checked_add(s.len()).ok_or(fmt::Error)?;
        let dst = self.bytes.get_mut(self.len..end).ok_or(fmt::Error)?;
        dst.copy_from_slice(s.as_bytes());
        self.len = end;
        Ok(())
    }
}
