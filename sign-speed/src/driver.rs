//! Benchmark driver

use core::{fmt, marker::PhantomData};

use rand_core::RngCore;

use crate::{
    buffer::Buffer,
    config::{Config, message_len},
    error::Result,
    hal::{ClockMode, Hal},
    report::{self, Measurement},
    scheme::SignatureScheme,
    timing::CycleSpan,
};

/// A timed phase of one iteration.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Phase {
    /// Key pair generation.
    Keypair,
    /// Secret key expansion.
    ExpandSk,
    /// Signing.
    Sign,
    /// Public key expansion.
    ExpandPk,
    /// Verification.
    Verify,
}

impl Phase {
    /// Phases in the order they run and are reported.
    pub const ALL: [Phase; 5] = [
        Phase::Keypair,
        Phase::ExpandSk,
        Phase::Sign,
        Phase::ExpandPk,
        Phase::Verify,
    ];

    /// Label used on the wire.
    pub const fn label(self) -> &'static str {
        match self {
            Phase::Keypair => "keypair",
            Phase::ExpandSk => "expand_sk",
            Phase::Sign => "sign",
            Phase::ExpandPk => "expand_pk",
            Phase::Verify => "verify",
        }
    }
}

/// A freshly generated key pair, owned by the driver for one iteration.
pub struct KeyPair<S: SignatureScheme> {
    pk: S::PublicKey,
    sk: S::SecretKey,
}

impl<S: SignatureScheme> KeyPair<S> {
    /// Zeroed key storage.
    pub fn new() -> Self {
        Self {
            pk: S::PublicKey::zeroed(),
            sk: S::SecretKey::zeroed(),
        }
    }

    /// Encoded public key.
    pub fn public_key(&self) -> &[u8] {
        self.pk.as_ref()
    }

    /// Encoded secret key.
    pub fn secret_key(&self) -> &[u8] {
        self.sk.as_ref()
    }
}

impl<S: SignatureScheme> Default for KeyPair<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: SignatureScheme> fmt::Debug for KeyPair<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyPair")
            .field("pk", &self.pk.as_ref())
            .finish_non_exhaustive()
    }
}

#[cfg(feature = "zeroize")]
impl<S: SignatureScheme> zeroize::Zeroize for KeyPair<S> {
    fn zeroize(&mut self) {
        zeroize::Zeroize::zeroize(self.sk.as_mut());
    }
}

#[cfg(feature = "zeroize")]
impl<S: SignatureScheme> Drop for KeyPair<S> {
    fn drop(&mut self) {
        zeroize::Zeroize::zeroize(self);
    }
}

#[cfg(feature = "zeroize")]
impl<S: SignatureScheme> zeroize::ZeroizeOnDrop for KeyPair<S> {}

/// Signed message storage with the length the scheme reported.
///
/// The occupied length never exceeds the buffer capacity.
#[derive(Debug)]
pub struct SignedMessage<B> {
    buf: B,
    len: usize,
}

impl<B: Buffer<u8>> SignedMessage<B> {
    /// Empty signed message.
    pub fn new() -> Self {
        Self {
            buf: B::zeroed(),
            len: 0,
        }
    }

    /// Total capacity in bytes.
    pub const fn capacity(&self) -> usize {
        B::CAPACITY
    }

    /// Occupied length in bytes.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Whether nothing has been written.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Occupied bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf.as_ref()[..self.len]
    }

    /// Set the occupied length, clamped to the capacity.
    pub fn set_len(&mut self, len: usize) {
        if len > B::CAPACITY {
            log::warn!("reported length {len} exceeds capacity {}", B::CAPACITY);
        }
        self.len = len.min(B::CAPACITY);
    }

    fn buffer_mut(&mut self) -> &mut [u8] {
        self.buf.as_mut()
    }
}

impl<B: Buffer<u8>> Default for SignedMessage<B> {
    fn default() -> Self {
        Self::new()
    }
}

/// Times every phase of the signature scheme selected by `C` and streams the
/// measurements through `H`.
///
/// Only the cost of each operation is measured. Status codes returned by the
/// scheme are ignored inside the timed windows, and the message recovered by
/// verification is never compared with the one that was signed.
#[derive(Debug)]
pub struct Speed<C: Config, H, R> {
    scheme: C::Scheme,
    hal: H,
    rng: R,
    config: PhantomData<C>,
}

impl<C, H, R> Speed<C, H, R>
where
    C: Config,
    H: Hal,
    R: RngCore,
{
    /// Length of the message signed in every iteration.
    pub const MLEN: usize = message_len::<C>();

    /// Bundle a scheme, a board, and a message source.
    pub fn new(scheme: C::Scheme, hal: H, rng: R) -> Self {
        Self {
            scheme,
            hal,
            rng,
            config: PhantomData,
        }
    }

    /// Scheme under test.
    pub fn scheme(&self) -> &C::Scheme {
        &self.scheme
    }

    /// Board support.
    pub fn hal(&self) -> &H {
        &self.hal
    }

    /// Release the scheme, board, and message source.
    pub fn into_parts(self) -> (C::Scheme, H, R) {
        (self.scheme, self.hal, self.rng)
    }

    /// Configure the board clock. Call once before [`Speed::run`].
    pub fn setup(&mut self, mode: ClockMode) {
        log::debug!("clock setup: {mode:?}");
        self.hal.setup(mode);
    }

    /// Run [`Config::ITERATIONS`] iterations.
    ///
    /// # Errors
    ///
    /// Any transport failure aborts the run; the host sees a truncated stream.
    pub fn run(&mut self) -> Result<(), H::Error> {
        self.run_for(C::ITERATIONS)
    }

    /// Run `iterations` iterations, framed by the separator and the run
    /// completion marker.
    ///
    /// Flashed binaries use [`Speed::run`]; a runtime count is for host-side
    /// runs and tests.
    ///
    /// # Errors
    ///
    /// Any transport failure aborts the run; the host sees a truncated stream.
    #[doc(hidden)]
    pub fn run_for(&mut self, iterations: usize) -> Result<(), H::Error> {
        const {
            assert!(
                <C::SignedMessage as Buffer<u8>>::CAPACITY
                    >= message_len::<C>() + <C::Scheme as SignatureScheme>::SIGNATURE_BYTES,
                "signed message buffer cannot hold message and signature"
            );
            assert!(
                <<C::Scheme as SignatureScheme>::ExpandedSecretKey as Buffer<u64>>::CAPACITY
                    <= <C::Scheme as SignatureScheme>::EXPANDED_LIMBS_MAX,
                "expanded secret key buffer exceeds the published maximum"
            );
            assert!(
                <<C::Scheme as SignatureScheme>::ExpandedPublicKey as Buffer<u64>>::CAPACITY
                    <= <C::Scheme as SignatureScheme>::EXPANDED_LIMBS_MAX,
                "expanded public key buffer exceeds the published maximum"
            );
        }

        log::info!(
            "{}: {} iterations, {}-byte messages",
            <C::Scheme as SignatureScheme>::NAME,
            iterations,
            Self::MLEN
        );

        report::separator(&mut self.hal)?;
        for i in 0..iterations {
            self.iteration()?;
            log::trace!("iteration {i} complete");
        }
        report::run_end(&mut self.hal)?;

        log::info!("run complete");
        Ok(())
    }

    fn iteration(&mut self) -> Result<(), H::Error> {
        let mut keys = KeyPair::<C::Scheme>::new();

        let span = CycleSpan::begin(&self.hal);
        let _ = self.scheme.keypair(keys.pk.as_mut(), keys.sk.as_mut());
        let cycles = span.end(&self.hal);
        self.report(Phase::Keypair, cycles)?;

        self.expand_sk(keys.secret_key())?;

        let mut msg = C::Message::zeroed();
        self.rng.fill_bytes(msg.as_mut());

        let mut sm = SignedMessage::<C::SignedMessage>::new();
        let mut smlen = 0;
        let span = CycleSpan::begin(&self.hal);
        let _ = self.scheme.sign(
            sm.buffer_mut(),
            &mut smlen,
            msg.as_ref(),
            keys.sk.as_ref(),
        );
        let cycles = span.end(&self.hal);
        sm.set_len(smlen);
        self.report(Phase::Sign, cycles)?;

        self.expand_pk(keys.public_key())?;

        let mut opened = SignedMessage::<C::SignedMessage>::new();
        let mut mlen = 0;
        let span = CycleSpan::begin(&self.hal);
        let _ = self.scheme.verify(
            opened.buffer_mut(),
            &mut mlen,
            sm.as_bytes(),
            keys.pk.as_ref(),
        );
        let cycles = span.end(&self.hal);
        self.report(Phase::Verify, cycles)?;

        report::iteration_end(&mut self.hal)
    }

    // Each expansion buffer lives only in its own frame, so at most one is on
    // the stack at a time.
    #[inline(never)]
    fn expand_sk(&mut self, sk: &[u8]) -> Result<(), H::Error> {
        let param_id = <C::Scheme as SignatureScheme>::PARAM_ID;
        let mut xsk = <C::Scheme as SignatureScheme>::ExpandedSecretKey::zeroed();
        let span = CycleSpan::begin(&self.hal);
        let _ = self.scheme.expand_sk(param_id, sk, xsk.as_mut());
        let cycles = span.end(&self.hal);
        self.report(Phase::ExpandSk, cycles)
    }

    #[inline(never)]
    fn expand_pk(&mut self, pk: &[u8]) -> Result<(), H::Error> {
        let param_id = <C::Scheme as SignatureScheme>::PARAM_ID;
        let mut xpk = <C::Scheme as SignatureScheme>::ExpandedPublicKey::zeroed();
        let span = CycleSpan::begin(&self.hal);
        let _ = self.scheme.expand_pk(param_id, pk, xpk.as_mut());
        let cycles = span.end(&self.hal);
        self.report(Phase::ExpandPk, cycles)
    }

    fn report(&mut self, phase: Phase, cycles: u64) -> Result<(), H::Error> {
        report::measurement(&mut self.hal, &Measurement::new(phase.label(), cycles))
    }
}

/// Configure the board for benchmarking and run every iteration of `C`.
///
/// # Errors
///
/// Any transport failure aborts the run; the host sees a truncated stream.
pub fn bench<C, H, R>(scheme: C::Scheme, hal: H, rng: R) -> Result<(), H::Error>
where
    C: Config,
    H: Hal,
    R: RngCore,
{
    let mut speed = Speed::<C, H, R>::new(scheme, hal, rng);
    speed.setup(ClockMode::Benchmark);
    speed.run()
}
