//! MAYO parameter sets and expansion buffer capacities
//!
//! The harness never runs MAYO itself, but a provider built for any one of
//! these parameter sets must fit its expanded keys into buffers sized here.
//! Every capacity is the supremum over all parameter sets so that a single
//! buffer type can serve whichever variant the provider was built with.

/// Sizes describing one MAYO parameter set.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct MayoParams {
    /// Human-readable name, e.g. `"MAYO_1"`.
    pub name: &'static str,
    /// Number of variables.
    pub n: usize,
    /// Number of equations.
    pub m: usize,
    /// Dimension of the oil space.
    pub o: usize,
    /// Whipping parameter.
    pub k: usize,
    /// Compact secret key (seed) length in bytes.
    pub sk_seed_bytes: usize,
    /// Salt length in bytes.
    pub salt_bytes: usize,
}

/// Public key seed length in bytes, shared by every parameter set.
pub const PK_SEED_BYTES: usize = 16;

/// Equations packed per 64-bit limb (one nibble each over GF(16)).
const NIBBLES_PER_LIMB: usize = 16;

impl MayoParams {
    /// Number of vinegar variables, `n - o`.
    pub const fn v(&self) -> usize {
        self.n - self.o
    }

    /// Limbs needed to hold one vector of `m` GF(16) elements.
    pub const fn m_vec_limbs(&self) -> usize {
        self.m.div_ceil(NIBBLES_PER_LIMB)
    }

    /// Limbs of the upper triangular `P1` matrices.
    pub const fn p1_limbs(&self) -> usize {
        self.m_vec_limbs() * self.v() * (self.v() + 1) / 2
    }

    /// Limbs of the `P2` matrices.
    pub const fn p2_limbs(&self) -> usize {
        self.m_vec_limbs() * self.v() * self.o
    }

    /// Limbs of the upper triangular `P3` matrices.
    pub const fn p3_limbs(&self) -> usize {
        self.m_vec_limbs() * self.o * (self.o + 1) / 2
    }

    /// Limbs holding the oil space matrix `O`, one byte per entry.
    pub const fn o_limbs(&self) -> usize {
        (self.v() * self.o).div_ceil(8)
    }

    /// Limbs of an expanded public key: `P1`, `P2` and `P3`.
    pub const fn expanded_pk_limbs(&self) -> usize {
        self.p1_limbs() + self.p2_limbs() + self.p3_limbs()
    }

    /// Limbs of an expanded secret key: `P1`, `L` (shaped like `P2`) and `O`.
    pub const fn expanded_sk_limbs(&self) -> usize {
        self.p1_limbs() + self.p2_limbs() + self.o_limbs()
    }

    /// Encoded public key length: seed plus the packed `P3` matrices.
    pub const fn public_key_bytes(&self) -> usize {
        PK_SEED_BYTES + self.o * (self.o + 1) / 2 * self.m / 2
    }

    /// Encoded secret key length.
    pub const fn secret_key_bytes(&self) -> usize {
        self.sk_seed_bytes
    }

    /// Signature length: packed solution vector plus salt.
    pub const fn signature_bytes(&self) -> usize {
        (self.n * self.k).div_ceil(2) + self.salt_bytes
    }
}

/// `MAYO_1`
pub const MAYO_1: MayoParams = MayoParams {
    name: "MAYO_1",
    n: 86,
    m: 78,
    o: 8,
    k: 10,
    sk_seed_bytes: 24,
    salt_bytes: 24,
};

/// `MAYO_2`
pub const MAYO_2: MayoParams = MayoParams {
    name: "MAYO_2",
    n: 81,
    m: 64,
    o: 17,
    k: 4,
    sk_seed_bytes: 24,
    salt_bytes: 24,
};

/// `MAYO_3`
pub const MAYO_3: MayoParams = MayoParams {
    name: "MAYO_3",
    n: 118,
    m: 108,
    o: 10,
    k: 11,
    sk_seed_bytes: 32,
    salt_bytes: 32,
};

/// `MAYO_5`
pub const MAYO_5: MayoParams = MayoParams {
    name: "MAYO_5",
    n: 154,
    m: 142,
    o: 12,
    k: 12,
    sk_seed_bytes: 40,
    salt_bytes: 40,
};

/// Every parameter set a provider may be built with.
pub const ALL: [MayoParams; 4] = [MAYO_1, MAYO_2, MAYO_3, MAYO_5];

#[derive(Clone, Copy)]
enum Part {
    P1,
    P2,
    P3,
}

const fn max_limbs(part: Part) -> usize {
    let mut max = 0;
    let mut i = 0;
    while i < ALL.len() {
        let limbs = match part {
            Part::P1 => ALL[i].p1_limbs(),
            Part::P2 => ALL[i].p2_limbs(),
            Part::P3 => ALL[i].p3_limbs(),
        };
        if limbs > max {
            max = limbs;
        }
        i += 1;
    }
    max
}

/// Largest `P1` across all parameter sets.
pub const P1_LIMBS_MAX: usize = max_limbs(Part::P1);

/// Largest `P2` across all parameter sets.
pub const P2_LIMBS_MAX: usize = max_limbs(Part::P2);

/// Largest `P3` across all parameter sets.
pub const P3_LIMBS_MAX: usize = max_limbs(Part::P3);

/// Capacity of an expansion buffer that fits every parameter set.
pub const EXPANDED_LIMBS_MAX: usize = P1_LIMBS_MAX + P2_LIMBS_MAX + P3_LIMBS_MAX;

/// Expansion buffer usable with any parameter set.
pub type ExpandedLimbs = [u64; EXPANDED_LIMBS_MAX];
