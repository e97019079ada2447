//! Limb arithmetic helpers.

#[cfg(test)]
use num_bigint::BigUint;

/// Computes `a + b + carry`, returning the result along with the new carry.
#[inline(always)]
pub const fn adc(a: u64, b: u64, carry: u64) -> (u64, u64) {
    let ret = (a as u128) + (b as u128) + (carry as u128);
    (ret as u64, (ret >> 64) as u64)
}

/// Computes `a - (b + borrow)`, returning the result along with the new
/// borrow. The borrow is an all-ones mask when a borrow occurred.
#[inline(always)]
pub const fn sbb(a: u64, b: u64, borrow: u64) -> (u64, u64) {
    let ret = (a as u128).wrapping_sub((b as u128) + ((borrow >> 63) as u128));
    (ret as u64, (ret >> 64) as u64)
}

/// Computes `a + (b * c) + carry`, returning the result along with the new
/// carry.
#[inline(always)]
pub const fn mac(a: u64, b: u64, c: u64, carry: u64) -> (u64, u64) {
    let ret = (a as u128) + ((b as u128) * (c as u128)) + (carry as u128);
    (ret as u64, (ret >> 64) as u64)
}

/// Converts a byte array (big-endian) to BigUint.
#[cfg(test)]
pub fn bytes_to_biguint(bytes: &[u8; 32]) -> BigUint {
    BigUint::from_bytes_be(bytes)
}

/// Converts a BigUint to a byte array (big-endian). The value must fit in
/// 256 bits.
#[cfg(test)]
pub fn biguint_to_bytes(x: &BigUint) -> [u8; 32] {
    let b = x.to_bytes_be();
    let mut bytes = [0u8; 32];
    bytes[32 - b.len()..].copy_from_slice(&b);
    bytes
}

#[cfg(test)]
mod tests {
    use super::{adc, mac, sbb};

    #[test]
    fn adc_carries() {
        assert_eq!(adc(u64::MAX, 1, 0), (0, 1));
        assert_eq!(adc(u64::MAX, u64::MAX, 1), (u64::MAX, 1));
    }

    #[test]
    fn sbb_borrows() {
        let (w, borrow) = sbb(0, 1, 0);
        assert_eq!(w, u64::MAX);
        assert_eq!(borrow, u64::MAX);

        // A previous borrow is only honored via its top bit.
        let (w, borrow) = sbb(5, 2, u64::MAX);
        assert_eq!(w, 2);
        assert_eq!(borrow, 0);
    }

    #[test]
    fn mac_accumulates() {
        // u64::MAX^2 + 2 * u64::MAX fills exactly 128 bits.
        let (lo, hi) = mac(u64::MAX, u64::MAX, u64::MAX, u64::MAX);
        assert_eq!(lo, u64::MAX);
        assert_eq!(hi, u64::MAX);
    }
}
