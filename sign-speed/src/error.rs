//! Error types

use core::fmt::Debug;

/// Errors that abort a run.
///
/// Status codes returned by the signature scheme never show up here: they are
/// ignored by the driver. Only failures to deliver the measurement stream are
/// reported, and none of them are retried.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum Error<E: Debug> {
    /// The HAL failed to send a line.
    #[error("transport write failed: {0:?}")]
    Transport(E),

    /// A formatted line does not fit in the line buffer.
    #[error("line exceeds {capacity} bytes")]
    LineOverflow {
        /// Size of the line buffer in bytes.
        capacity: usize,
    },
}

/// Result type with the crate [`Error`] over a transport error `E`.
pub type Result<T, E> = core::result::Result<T, Error<E>>;
