//! Fixed-capacity storage

/// Storage whose capacity is fixed at compile time.
///
/// Keys, messages, and key expansions are all held in values of this trait so
/// that no buffer is ever resized or allocated while a run is in progress.
pub trait Buffer<T>: AsRef<[T]> + AsMut<[T]> {
    /// Number of elements the buffer holds.
    const CAPACITY: usize;

    /// Create a buffer with every element set to zero.
    fn zeroed() -> Self;
}

impl<T: Copy + Default, const N: usize> Buffer<T> for [T; N] {
    const CAPACITY: usize = N;

    fn zeroed() -> Self {
        [T::default(); N]
    }
}
