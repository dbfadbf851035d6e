//! Compile-time build configuration

use crate::{buffer::Buffer, scheme::SignatureScheme};

/// Message length used by the reference configuration.
pub const MLEN: usize = 59;

/// Everything a flashed binary fixes at build time.
///
/// There are no runtime flags: one implementation of this trait is selected
/// per build, usually with [`speed_config!`](crate::speed_config).
pub trait Config {
    /// Scheme under test.
    type Scheme: SignatureScheme;

    /// Message storage. Its capacity is the length of the message signed in
    /// every iteration.
    type Message: Buffer<u8>;

    /// Signed message storage. Must hold the message plus
    /// [`SignatureScheme::SIGNATURE_BYTES`].
    type SignedMessage: Buffer<u8>;

    /// Number of iterations in one run.
    const ITERATIONS: usize;
}

/// Length of the message signed in every iteration of `C`.
pub const fn message_len<C: Config>() -> usize {
    <C::Message as Buffer<u8>>::CAPACITY
}

/// Declare a [`Config`] for a scheme.
///
/// The signed message buffer is sized to exactly `mlen` plus the scheme's
/// signature length. `mlen` defaults to [`MLEN`].
///
/// ```ignore
/// speed_config!(pub Mayo1Speed, Mayo1, iterations = 10);
/// speed_config!(Mayo1Short, Mayo1, iterations = 1, mlen = 32);
/// ```
#[macro_export]
macro_rules! speed_config {
    (
        $(#[$attr:meta])* $vis:vis $name:ident, $scheme:ty,
        iterations = $iterations:expr, mlen = $mlen:expr $(,)?
    ) => {
        $(#[$attr])*
        #[derive(Clone, Copy, Debug, Default)]
        $vis struct $name;

        impl $crate::Config for $name {
            type Scheme = $scheme;
            type Message = [u8; $mlen];
            type SignedMessage =
                [u8; $mlen + <$scheme as $crate::SignatureScheme>::SIGNATURE_BYTES];
            const ITERATIONS: usize = $iterations;
        }
    };
    (
        $(#[$attr:meta])* $vis:vis $name:ident, $scheme:ty,
        iterations = $iterations:expr $(,)?
    ) => {
        $crate::speed_config!(
            $(#[$attr])* $vis $name, $scheme,
            iterations = $iterations, mlen = $crate::MLEN
        );
    };
}
