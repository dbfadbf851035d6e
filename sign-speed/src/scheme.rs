//! Signature scheme provider interface

use crate::{buffer::Buffer, params};
use signature::Error;

/// A signature scheme built for one parameter set.
///
/// This is the only view the harness has of the scheme under test. Every
/// operation writes into caller-provided buffers whose capacities are
/// published through the associated types, and every operation reports a
/// status the harness is free to ignore.
pub trait SignatureScheme {
    /// Algorithm name, e.g. `"MAYO_1"`.
    const NAME: &'static str;

    /// Bytes added to a message by signing.
    const SIGNATURE_BYTES: usize;

    /// Parameter set selector passed to the key expansion routines.
    ///
    /// `0` selects the parameter set the provider was built for.
    const PARAM_ID: u32 = 0;

    /// Largest expansion, in limbs, of any parameter set the provider may be
    /// built with. Both expansion buffers must fit within it.
    const EXPANDED_LIMBS_MAX: usize = params::EXPANDED_LIMBS_MAX;

    /// Encoded public key storage.
    type PublicKey: Buffer<u8>;

    /// Encoded secret key storage.
    type SecretKey: Buffer<u8>;

    /// Working representation of an expanded secret key, in 64-bit limbs.
    type ExpandedSecretKey: Buffer<u64>;

    /// Working representation of an expanded public key, in 64-bit limbs.
    type ExpandedPublicKey: Buffer<u64>;

    /// Encoded public key length in bytes.
    const PUBLIC_KEY_BYTES: usize = <Self::PublicKey as Buffer<u8>>::CAPACITY;

    /// Encoded secret key length in bytes.
    const SECRET_KEY_BYTES: usize = <Self::SecretKey as Buffer<u8>>::CAPACITY;

    /// Generate a fresh key pair into `pk` and `sk`.
    fn keypair(&mut self, pk: &mut [u8], sk: &mut [u8]) -> Result<(), Error>;

    /// Expand a compact secret key into its working representation.
    fn expand_sk(
        &mut self,
        param_id: u32,
        sk: &[u8],
        expanded: &mut [u64],
    ) -> Result<(), Error>;

    /// Expand a compact public key into its working representation.
    fn expand_pk(
        &mut self,
        param_id: u32,
        pk: &[u8],
        expanded: &mut [u64],
    ) -> Result<(), Error>;

    /// Sign `m` with `sk`, writing the signed message into `sm` and its
    /// occupied length into `smlen`.
    fn sign(
        &mut self,
        sm: &mut [u8],
        smlen: &mut usize,
        m: &[u8],
        sk: &[u8],
    ) -> Result<(), Error>;

    /// Open the signed message `sm` with `pk`, writing the recovered message
    /// into `m` and its length into `mlen`.
    fn verify(
        &mut self,
        m: &mut [u8],
        mlen: &mut usize,
        sm: &[u8],
        pk: &[u8],
    ) -> Result<(), Error>;
}
