//! Test doubles shared by the integration tests.
#![allow(dead_code)]

use std::cell::Cell;

use sign_speed::{
    ClockMode, Hal, SignatureScheme,
    params::{ExpandedLimbs, MAYO_1},
    signature::Error,
};

/// One call made to [`MockScheme`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Call {
    Keypair { pk: Vec<u8>, sk: Vec<u8> },
    ExpandSk { param_id: u32, sk: Vec<u8> },
    Sign { msg: Vec<u8> },
    ExpandPk { param_id: u32, pk: Vec<u8> },
    Verify { sm: Vec<u8>, pk: Vec<u8> },
}

/// Scheme with `MAYO_1` sizes whose outputs are easy to predict.
///
/// Signing writes `SIGNATURE_BYTES` of `0x5a` followed by the message.
#[derive(Debug, Default)]
pub struct MockScheme {
    pub calls: Vec<Call>,
    /// Report failure from every operation without producing output.
    pub fail: bool,
    /// Occupied length to report from signing instead of the real one.
    pub smlen_override: Option<usize>,
    keygen_counter: u8,
}

impl MockScheme {
    pub fn new(fail: bool, smlen_override: Option<usize>) -> Self {
        Self {
            fail,
            smlen_override,
            ..Self::default()
        }
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn misreporting(smlen: usize) -> Self {
        Self {
            smlen_override: Some(smlen),
            ..Self::default()
        }
    }

    pub fn signed_messages(&self) -> Vec<&[u8]> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                Call::Sign { msg } => Some(msg.as_slice()),
                _ => None,
            })
            .collect()
    }

    pub fn verified_lengths(&self) -> Vec<usize> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                Call::Verify { sm, .. } => Some(sm.len()),
                _ => None,
            })
            .collect()
    }

    fn status(&self) -> Result<(), Error> {
        if self.fail {
            Err(Error::new())
        } else {
            Ok(())
        }
    }
}

pub const SIG: usize = MAYO_1.signature_bytes();

impl SignatureScheme for MockScheme {
    const NAME: &'static str = "MOCK_MAYO_1";
    const SIGNATURE_BYTES: usize = SIG;

    type PublicKey = [u8; MAYO_1.public_key_bytes()];
    type SecretKey = [u8; MAYO_1.secret_key_bytes()];
    type ExpandedSecretKey = [u64; 32];
    type ExpandedPublicKey = [u64; 32];

    fn keypair(&mut self, pk: &mut [u8], sk: &mut [u8]) -> Result<(), Error> {
        if !self.fail {
            self.keygen_counter = self.keygen_counter.wrapping_add(1);
            pk.fill(self.keygen_counter);
            sk.fill(!self.keygen_counter);
        }
        self.calls.push(Call::Keypair {
            pk: pk.to_vec(),
            sk: sk.to_vec(),
        });
        self.status()
    }

    fn expand_sk(
        &mut self,
        param_id: u32,
        sk: &[u8],
        expanded: &mut [u64],
    ) -> Result<(), Error> {
        expanded.fill(u64::from(sk[0]));
        self.calls.push(Call::ExpandSk {
            param_id,
            sk: sk.to_vec(),
        });
        self.status()
    }

    fn expand_pk(
        &mut self,
        param_id: u32,
        pk: &[u8],
        expanded: &mut [u64],
    ) -> Result<(), Error> {
        expanded.fill(u64::from(pk[0]));
        self.calls.push(Call::ExpandPk {
            param_id,
            pk: pk.to_vec(),
        });
        self.status()
    }

    fn sign(
        &mut self,
        sm: &mut [u8],
        smlen: &mut usize,
        m: &[u8],
        _sk: &[u8],
    ) -> Result<(), Error> {
        self.calls.push(Call::Sign { msg: m.to_vec() });
        if self.fail {
            return self.status();
        }

        let len = SIG + m.len();
        let out = sm.get_mut(..len).ok_or_else(Error::new)?;
        out[..SIG].fill(0x5a);
        out[SIG..].copy_from_slice(m);
        *smlen = self.smlen_override.unwrap_or(len);
        Ok(())
    }

    fn verify(
        &mut self,
        m: &mut [u8],
        mlen: &mut usize,
        sm: &[u8],
        pk: &[u8],
    ) -> Result<(), Error> {
        self.calls.push(Call::Verify {
            sm: sm.to_vec(),
            pk: pk.to_vec(),
        });
        if self.fail {
            return self.status();
        }

        let body = sm.get(SIG..).ok_or_else(Error::new)?;
        m.get_mut(..body.len())
            .ok_or_else(Error::new)?
            .copy_from_slice(body);
        *mlen = body.len();
        Ok(())
    }
}

/// [`MockScheme`] with expansion buffers sized for the largest parameter set.
#[derive(Debug, Default)]
pub struct WideScheme(pub MockScheme);

impl SignatureScheme for WideScheme {
    const NAME: &'static str = "MOCK_MAYO_WIDE";
    const SIGNATURE_BYTES: usize = SIG;

    type PublicKey = <MockScheme as SignatureScheme>::PublicKey;
    type SecretKey = <MockScheme as SignatureScheme>::SecretKey;
    type ExpandedSecretKey = ExpandedLimbs;
    type ExpandedPublicKey = ExpandedLimbs;

    fn keypair(&mut self, pk: &mut [u8], sk: &mut [u8]) -> Result<(), Error> {
        self.0.keypair(pk, sk)
    }

    fn expand_sk(
        &mut self,
        param_id: u32,
        sk: &[u8],
        expanded: &mut [u64],
    ) -> Result<(), Error> {
        self.0.expand_sk(param_id, sk, expanded)
    }

    fn expand_pk(
        &mut self,
        param_id: u32,
        pk: &[u8],
        expanded: &mut [u64],
    ) -> Result<(), Error> {
        self.0.expand_pk(param_id, pk, expanded)
    }

    fn sign(
        &mut self,
        sm: &mut [u8],
        smlen: &mut usize,
        m: &[u8],
        sk: &[u8],
    ) -> Result<(), Error> {
        self.0.sign(sm, smlen, m, sk)
    }

    fn verify(
        &mut self,
        m: &mut [u8],
        mlen: &mut usize,
        sm: &[u8],
        pk: &[u8],
    ) -> Result<(), Error> {
        self.0.verify(m, mlen, sm, pk)
    }
}

/// Transport error raised by [`RecordingHal`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct LinkDown;

/// HAL that records every line and advances its clock by `step` per sample.
#[derive(Debug, Default)]
pub struct RecordingHal {
    pub lines: Vec<String>,
    /// Number of lines already sent when `setup` was called.
    pub setup_at: Option<usize>,
    pub mode: Option<ClockMode>,
    /// Fail every send once this many lines have been delivered.
    pub fail_after: Option<usize>,
    step: u64,
    now: Cell<u64>,
}

impl RecordingHal {
    pub fn with_step(step: u64) -> Self {
        Self {
            step,
            ..Self::default()
        }
    }

    pub fn failing_after(lines: usize) -> Self {
        Self {
            fail_after: Some(lines),
            ..Self::with_step(1)
        }
    }
}

impl Hal for RecordingHal {
    type Error = LinkDown;

    fn setup(&mut self, mode: ClockMode) {
        self.setup_at = Some(self.lines.len());
        self.mode = Some(mode);
    }

    fn get_time(&self) -> u64 {
        let t = self.now.get();
        self.now.set(t.wrapping_add(self.step));
        t
    }

    fn send_str(&mut self, line: &str) -> Result<(), LinkDown> {
        if self.fail_after == Some(self.lines.len()) {
            return Err(LinkDown);
        }
        self.lines.push(line.to_owned());
        Ok(())
    }
}
