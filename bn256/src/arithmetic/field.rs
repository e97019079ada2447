//! BN254 base field elements.

pub(crate) mod field_4x64;

use self::field_4x64::FieldElement4x64;
use crate::{
    arithmetic::{
        constants::{self, MODULUS},
        util::sbb,
    },
    error::{Error, Result},
};
use core::{
    fmt::{self, Debug, Display},
    iter::{Product, Sum},
    ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign},
};
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};

/// An element of the BN254 base field
/// GF(21888242871839275222246405745257275088696311157297823662689037894645226208583).
///
/// Elements are held in Montgomery form (value · R mod p with R = 2^256) so
/// that multiplications reduce with cheap word-size operations. Construction
/// via [`FieldElement::from`] and [`FieldElement::mont_encode`] produces
/// Montgomery form; [`FieldElement::from_bytes`] deliberately does not, since
/// wire coordinates arrive as raw limbs.
#[derive(Clone, Copy)]
pub struct FieldElement(pub(crate) FieldElement4x64);

impl FieldElement {
    /// Zero element. Zero is its own Montgomery encoding.
    pub const ZERO: Self = Self(FieldElement4x64::ZERO);

    /// Multiplicative identity, in Montgomery form.
    pub const ONE: Self = constants::R;

    /// Returns the additive identity.
    pub const fn zero() -> Self {
        Self::ZERO
    }

    /// Resets this element to zero in place.
    pub fn set_zero(&mut self) {
        *self = Self::ZERO;
    }

    /// Determine if this element is zero.
    pub fn is_zero(&self) -> Choice {
        self.0.is_zero()
    }

    /// Attempts to parse the given byte array as a field element.
    ///
    /// The bytes are interpreted as a big-endian 256-bit integer and taken
    /// verbatim as limbs; no Montgomery conversion is applied. Returns
    /// [`Error::CoordinateExceedsModulus`] when the value is greater than the
    /// modulus and [`Error::MalformedPoint`] when it equals the modulus, so
    /// callers can tell a range violation from the single ambiguous encoding
    /// of zero.
    pub fn from_bytes(bytes: &[u8; 32]) -> Result<Self> {
        let mut w = [0u64; 4];
        for (i, chunk) in bytes.chunks_exact(8).enumerate() {
            let mut limb = [0u8; 8];
            limb.copy_from_slice(chunk);
            w[3 - i] = u64::from_be_bytes(limb);
        }

        // Evaluate both the strict bound and the equality check before
        // branching, so the limb comparisons themselves stay constant time.
        let (_, borrow) = sbb(w[0], MODULUS[0], 0);
        let (_, borrow) = sbb(w[1], MODULUS[1], borrow);
        let (_, borrow) = sbb(w[2], MODULUS[2], borrow);
        let (_, borrow) = sbb(w[3], MODULUS[3], borrow);
        let in_range = Choice::from((borrow >> 63) as u8);
        let is_modulus = w[0].ct_eq(&MODULUS[0])
            & w[1].ct_eq(&MODULUS[1])
            & w[2].ct_eq(&MODULUS[2])
            & w[3].ct_eq(&MODULUS[3]);

        if bool::from(in_range) {
            Ok(Self(FieldElement4x64::from_words(w)))
        } else if bool::from(is_modulus) {
            Err(Error::MalformedPoint)
        } else {
            Err(Error::CoordinateExceedsModulus)
        }
    }

    /// Serializes this element's limbs as a big-endian byte array.
    ///
    /// The limbs are written as-is, mirroring [`FieldElement::from_bytes`]:
    /// an element still in Montgomery form serializes its Montgomery limbs.
    pub fn to_bytes(&self) -> [u8; 32] {
        let w = self.0.words();
        let mut out = [0u8; 32];
        for i in 0..4 {
            out[i * 8..(i + 1) * 8].copy_from_slice(&w[3 - i].to_be_bytes());
        }
        out
    }

    /// Converts a raw residue into Montgomery form.
    pub fn mont_encode(&self) -> Self {
        Self(self.0.mul(&constants::R2.0))
    }

    /// Converts a Montgomery-form element back to its raw residue.
    pub fn mont_decode(&self) -> Self {
        Self(self.0.mul(&FieldElement4x64::from_words([1, 0, 0, 0])))
    }

    /// Returns self * self.
    pub const fn square(&self) -> Self {
        Self(self.0.square())
    }

    /// Computes the multiplicative inverse of this element by raising it to
    /// the power p - 2.
    ///
    /// Zero has no inverse; `FieldElement::ZERO.invert()` returns zero, and
    /// callers that care must check [`FieldElement::is_zero`] themselves.
    pub fn invert(&self) -> Self {
        // p - 2, little-endian limbs. The exponent is public, so the
        // bit-dependent multiply leaks nothing about the input.
        const P_MINUS_2: [u64; 4] = [
            0x3c20_8c16_d87c_fd45,
            0x9781_6a91_6871_ca8d,
            0xb850_45b6_8181_585d,
            0x3064_4e72_e131_a029,
        ];

        let mut sum = constants::RN1.0;
        let mut power = self.0;
        for word in P_MINUS_2 {
            for bit in 0..64 {
                if (word >> bit) & 1 == 1 {
                    sum = sum.mul(&power);
                }
                power = power.square();
            }
        }

        // Seeding with R^-1 and finishing with R^3 cancels the extra R^-1
        // factors the Montgomery multiplications accumulated, leaving the
        // inverse in Montgomery form.
        Self(sum.mul(&constants::R3.0))
    }
}

impl Debug for FieldElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FieldElement(0x{})", self)
    }
}

impl Display for FieldElement {
    /// Formats the limbs as 64 lowercase hex characters, most significant
    /// limb first.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let w = self.0.words();
        write!(f, "{:016x}{:016x}{:016x}{:016x}", w[3], w[2], w[1], w[0])
    }
}

impl Default for FieldElement {
    fn default() -> Self {
        Self::ZERO
    }
}

impl From<u64> for FieldElement {
    fn from(n: u64) -> Self {
        Self(FieldElement4x64::from_words([n, 0, 0, 0])).mont_encode()
    }
}

impl From<i64> for FieldElement {
    fn from(n: i64) -> Self {
        let abs = Self(FieldElement4x64::from_words([n.unsigned_abs(), 0, 0, 0]));
        let negated = Self(abs.0.neg());
        Self::conditional_select(&abs, &negated, Choice::from((n < 0) as u8)).mont_encode()
    }
}

impl ConditionallySelectable for FieldElement {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Self(FieldElement4x64::conditional_select(&a.0, &b.0, choice))
    }
}

impl ConstantTimeEq for FieldElement {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.0.ct_eq(&other.0)
    }
}

impl PartialEq for FieldElement {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl Eq for FieldElement {}

impl Add<FieldElement> for FieldElement {
    type Output = FieldElement;

    fn add(self, other: FieldElement) -> FieldElement {
        FieldElement(self.0.add(&other.0))
    }
}

impl Add<&FieldElement> for FieldElement {
    type Output = FieldElement;

    fn add(self, other: &FieldElement) -> FieldElement {
        FieldElement(self.0.add(&other.0))
    }
}

impl Add<&FieldElement> for &FieldElement {
    type Output = FieldElement;

    fn add(self, other: &FieldElement) -> FieldElement {
        FieldElement(self.0.add(&other.0))
    }
}

impl AddAssign<FieldElement> for FieldElement {
    fn add_assign(&mut self, other: FieldElement) {
        *self = *self + other;
    }
}

impl AddAssign<&FieldElement> for FieldElement {
    fn add_assign(&mut self, other: &FieldElement) {
        *self = *self + other;
    }
}

impl Sub<FieldElement> for FieldElement {
    type Output = FieldElement;

    fn sub(self, other: FieldElement) -> FieldElement {
        FieldElement(self.0.sub(&other.0))
    }
}

impl Sub<&FieldElement> for FieldElement {
    type Output = FieldElement;

    fn sub(self, other: &FieldElement) -> FieldElement {
        FieldElement(self.0.sub(&other.0))
    }
}

impl Sub<&FieldElement> for &FieldElement {
    type Output = FieldElement;

    fn sub(self, other: &FieldElement) -> FieldElement {
        FieldElement(self.0.sub(&other.0))
    }
}

impl SubAssign<FieldElement> for FieldElement {
    fn sub_assign(&mut self, other: FieldElement) {
        *self = *self - other;
    }
}

impl SubAssign<&FieldElement> for FieldElement {
    fn sub_assign(&mut self, other: &FieldElement) {
        *self = *self - other;
    }
}

impl Mul<FieldElement> for FieldElement {
    type Output = FieldElement;

    fn mul(self, other: FieldElement) -> FieldElement {
        FieldElement(self.0.mul(&other.0))
    }
}

impl Mul<&FieldElement> for FieldElement {
    type Output = FieldElement;

    fn mul(self, other: &FieldElement) -> FieldElement {
        FieldElement(self.0.mul(&other.0))
    }
}

impl Mul<&FieldElement> for &FieldElement {
    type Output = FieldElement;

    fn mul(self, other: &FieldElement) -> FieldElement {
        FieldElement(self.0.mul(&other.0))
    }
}

impl MulAssign<FieldElement> for FieldElement {
    fn mul_assign(&mut self, other: FieldElement) {
        *self = *self * other;
    }
}

impl MulAssign<&FieldElement> for FieldElement {
    fn mul_assign(&mut self, other: &FieldElement) {
        *self = *self * other;
    }
}

impl Neg for FieldElement {
    type Output = FieldElement;

    fn neg(self) -> FieldElement {
        FieldElement(self.0.neg())
    }
}

impl Neg for &FieldElement {
    type Output = FieldElement;

    fn neg(self) -> FieldElement {
        FieldElement(self.0.neg())
    }
}

impl Sum for FieldElement {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, |acc, x| acc + x)
    }
}

impl<'a> Sum<&'a FieldElement> for FieldElement {
    fn sum<I: Iterator<Item = &'a FieldElement>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

impl Product for FieldElement {
    fn product<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ONE, |acc, x| acc * x)
    }
}

impl<'a> Product<&'a FieldElement> for FieldElement {
    fn product<I: Iterator<Item = &'a FieldElement>>(iter: I) -> Self {
        iter.copied().product()
    }
}
