//! GLV lattice decomposition of scalars.
//!
//! Scalar multiplication on BN curves speeds up considerably when the scalar
//! is split into several short components along the eigenspaces of an
//! efficiently computable endomorphism. The splitting reduces a scalar `k`
//! modulo the group order to the vector closest to `(k, 0, ..., 0)` in a
//! precomputed lattice, using Babai's rounding technique. All components come
//! out roughly `256 / n` bits long for an `n`-dimensional lattice.

use alloc::{vec, vec::Vec};
use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::Zero;

fn big(s: &str) -> BigInt {
    BigInt::parse_bytes(s.as_bytes(), 10).expect("decimal literal")
}

/// The order of the BN254 groups G1, G2 and GT:
/// r = 36u⁴ + 36u³ + 18u² + 6u + 1.
pub fn order() -> BigInt {
    big("21888242871839275222246405745257275088548364400416034343698204186575808495617")
}

/// A precomputed GLV lattice: an `n×n` basis of short vectors, the adjugate
/// rows used for Babai rounding, and the basis determinant.
///
/// Instances are immutable after construction and hold no secret data, so
/// they can be shared freely across threads.
pub struct Lattice {
    vectors: Vec<Vec<BigInt>>,
    inverse: Vec<BigInt>,
    det: BigInt,
    half: BigInt,
}

impl Lattice {
    /// The 2-dimensional lattice for the curve group G1, built on the
    /// endomorphism with eigenvalue λ satisfying λ² + λ + 1 ≡ 0 (mod r).
    pub fn curve_lattice() -> Self {
        Self {
            vectors: vec![
                vec![
                    big("147946756881789319000765030803803410728"),
                    big("147946756881789319010696353538189108491"),
                ],
                vec![
                    big("147946756881789319020627676272574806254"),
                    big("-147946756881789318990833708069417712965"),
                ],
            ],
            inverse: vec![
                big("147946756881789318990833708069417712965"),
                big("147946756881789319010696353538189108491"),
            ],
            det: big(
                "43776485743678550444492811490514550177096728800832068687396408373151616991234",
            ),
            half: order() >> 1,
        }
    }

    /// The 4-dimensional lattice for the pairing target group GT, built on
    /// the Frobenius endomorphism with eigenvalue 6u² + 1 ≡ p (mod r).
    pub fn target_lattice() -> Self {
        Self {
            vectors: vec![
                vec![
                    big("9931322734385697761"),
                    big("9931322734385697761"),
                    big("9931322734385697763"),
                    big("9931322734385697764"),
                ],
                vec![
                    big("4965661367192848881"),
                    big("4965661367192848881"),
                    big("4965661367192848882"),
                    big("-9931322734385697762"),
                ],
                vec![
                    big("-9931322734385697762"),
                    big("-4965661367192848881"),
                    big("4965661367192848881"),
                    big("-4965661367192848882"),
                ],
                vec![
                    big("9931322734385697763"),
                    big("-4965661367192848881"),
                    big("-4965661367192848881"),
                    big("-4965661367192848881"),
                ],
            ],
            inverse: vec![
                big("734653495049373973658254490726798021314063399421879442165"),
                big("147946756881789319000765030803803410728"),
                big("-147946756881789319005730692170996259609"),
                big("1469306990098747947464455738335385361643788813749140841702"),
            ],
            det: order(),
            half: order() >> 1,
        }
    }

    /// Number of components [`Lattice::decompose`] produces.
    pub fn dimension(&self) -> usize {
        self.inverse.len()
    }

    /// Splits `k` into `n` short components `out` such that
    /// `Σ out[i]·λⁱ ≡ k (mod r)`, where λ is the lattice's eigenvalue.
    ///
    /// The closest lattice vector to `(k, 0, ..., 0)` is found with Babai's
    /// rounding: `c[i] = round(k · inverse[i] / det)`. The result is the
    /// difference from that vector, shifted by twice the first basis vector
    /// to keep the components in the expected coset.
    pub fn decompose(&self, k: &BigInt) -> Vec<BigInt> {
        let n = self.inverse.len();

        let mut c: Vec<BigInt> = Vec::with_capacity(n);
        for inv in &self.inverse {
            let mut num = k * inv;
            round(&mut num, &self.det, &self.half);
            c.push(num);
        }

        let mut out: Vec<BigInt> = Vec::with_capacity(n);
        for i in 0..n {
            let mut acc = BigInt::zero();
            for j in 0..n {
                acc += &c[j] * &self.vectors[j][i];
            }
            acc = -acc;
            acc += &self.vectors[0][i];
            acc += &self.vectors[0][i];
            out.push(acc);
        }
        out[0] += k;

        out
    }

    /// Recodes `scalar` for simultaneous multi-scalar multiplication.
    ///
    /// Byte `i` of the result packs bit `i` of every decomposed component:
    /// component `j` contributes `1 << j` when its bit `i` is set. The result
    /// has one byte per bit of the longest component, so a Straus-style
    /// ladder can walk it most-significant byte first and use each byte as a
    /// precomputed-table index.
    pub fn multi(&self, scalar: &BigInt) -> Vec<u8> {
        let decomp = self.decompose(scalar);

        let maxlen = decomp.iter().map(|x| x.bits()).max().unwrap_or(0) as usize;

        let mut out = vec![0u8; maxlen];
        for (j, x) in decomp.iter().enumerate() {
            for (i, byte) in out.iter_mut().enumerate() {
                *byte += (x.bit(i as u64) as u8) << j;
            }
        }

        out
    }
}

/// Rounds `num / denom` into `num`: truncating division, incremented when
/// the remainder is strictly greater than `half`. Ties at exactly `half`
/// round down. A zero `denom` leaves `num` unchanged.
fn round(num: &mut BigInt, denom: &BigInt, half: &BigInt) {
    if denom.is_zero() {
        return;
    }
    let (quo, rem) = num.div_rem(denom);
    *num = quo;
    if rem > *half {
        *num += 1;
    }
}
