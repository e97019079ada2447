//! Process-wide constants for the BN254 base field.
//!
//! Everything here is computed once from the curve parameters and never
//! mutated, so concurrent readers need no synchronization. The field values
//! are stored in Montgomery form (value · R mod p with R = 2^256), the same
//! representation [`FieldElement`] uses internally.

use super::field::{field_4x64::FieldElement4x64, FieldElement};

const fn fe(words: [u64; 4]) -> FieldElement {
    FieldElement(FieldElement4x64::from_words(words))
}

/// u is the BN parameter. The modulus and group order are degree-4
/// polynomials in u.
pub const U: u64 = 0x44e9_92b4_4a69_09f1;

/// The base field modulus p = 36u⁴ + 36u³ + 24u² + 6u + 1, as little-endian
/// 64-bit words.
///
/// p = 21888242871839275222246405745257275088696311157297823662689037894645226208583
pub const MODULUS: [u64; 4] = [
    0x3c20_8c16_d87c_fd47,
    0x9781_6a91_6871_ca8d,
    0xb850_45b6_8181_585d,
    0x3064_4e72_e131_a029,
];

/// The negative inverse of p, mod 2^256.
pub const NP: [u64; 4] = [
    0x87d2_0782_e486_6389,
    0x9ede_7d65_1eca_6ac9,
    0xd8af_cbd0_1833_da80,
    0xf57a_22b7_9188_8c6b,
];

/// -(p^-1 mod 2^64) mod 2^64, the per-word factor consumed by Montgomery
/// reduction. Equal to the low word of [`NP`].
pub(crate) const INV: u64 = NP[0];

/// R mod p, where R = 2^256. The Montgomery encoding of one.
pub const R: FieldElement = fe([
    0xd35d_438d_c58f_0d9d,
    0x0a78_eb28_f5c7_0b3d,
    0x666e_a36f_7879_462c,
    0x0e0a_77c1_9a07_df2f,
]);

/// R^-1 mod p, where R = 2^256.
pub const RN1: FieldElement = fe([
    0xed84_884a_014a_fa37,
    0xeb20_2285_0278_edf8,
    0xcf63_e9cf_b744_92d9,
    0x2e67_1571_59e5_c639,
]);

/// R^2 mod p, where R = 2^256.
pub const R2: FieldElement = fe([
    0xf32c_fc5b_538a_fa89,
    0xb5e7_1911_d445_01fb,
    0x47ab_1eff_0a41_7ff6,
    0x06d8_9f71_cab8_351f,
]);

/// R^3 mod p, where R = 2^256.
pub const R3: FieldElement = fe([
    0xb1cd_6daf_da15_30df,
    0x62f2_10e6_a728_3db6,
    0xef7f_0b0c_0ada_0afb,
    0x20fd_6e90_2d59_2544,
]);

/// ξ^((p-1)/6), where ξ = i + 9 generates 𝔽p¹² over 𝔽p² and i² = -1.
///
/// The 𝔽p² constants are stored as `[c1, c0]` for `c1·i + c0`, matching the
/// field element pair layout of the degree-2 tower.
pub const XI_TO_P_MINUS_1_OVER_6: [FieldElement; 2] = [
    fe([
        0xa222_ae23_4c49_2d72,
        0xd00f_02a4_565d_e15b,
        0xdc2f_f3a2_53df_c926,
        0x10a7_5716_b389_9551,
    ]),
    fe([
        0xaf9b_a696_3314_4907,
        0xca6b_1d73_87af_b78a,
        0x11bd_ed5e_f08a_2087,
        0x02f3_4d75_1a1f_3a7c,
    ]),
];

/// ξ^((p-1)/3), where ξ = i + 9.
pub const XI_TO_P_MINUS_1_OVER_3: [FieldElement; 2] = [
    fe([
        0x6e84_9f1e_a0aa_4757,
        0xaa1c_7b6d_89f8_9141,
        0xb6e7_13cd_fae0_ca3a,
        0x2669_4fbb_4e82_ebc3,
    ]),
    fe([
        0xb577_3b10_4563_ab30,
        0x347f_91c8_a9aa_6454,
        0x7a00_7127_242e_0991,
        0x1956_bcd8_1182_14ec,
    ]),
];

/// ξ^((p-1)/2), where ξ = i + 9.
pub const XI_TO_P_MINUS_1_OVER_2: [FieldElement; 2] = [
    fe([
        0xa1d7_7ce4_5ffe_77c7,
        0x07af_fd11_7826_d1db,
        0x6d16_bd27_bb7e_dc6b,
        0x2c87_2002_85de_fecc,
    ]),
    fe([
        0xe4bb_dd0c_2936_b629,
        0xbb30_f162_e133_bacb,
        0x31a9_d1b6_f964_5366,
        0x2535_70be_a500_f8dd,
    ]),
];

/// ξ^((2p-2)/3), where ξ = i + 9.
pub const XI_TO_2P_MINUS_2_OVER_3: [FieldElement; 2] = [
    fe([
        0x5ddd_fd15_4bd8_c949,
        0x62cb_29a5_a444_5b60,
        0x37bc_870a_0c7d_d2b9,
        0x2483_0a9d_3171_f0fd,
    ]),
    fe([
        0x7361_d77f_843a_be92,
        0xa5bb_2bd3_2734_11fb,
        0x9c94_1f31_4b3e_2399,
        0x15df_9cdd_bb9f_d3ec,
    ]),
];

/// ξ^((p²-1)/3), where ξ = i + 9. A cubic root of unity, mod p.
pub const XI_TO_P_SQUARED_MINUS_1_OVER_3: FieldElement = fe([
    0x3350_c88e_13e8_0b9c,
    0x7dce_557c_db5e_56b9,
    0x6001_b4b8_b615_564a,
    0x2682_e617_0202_17e0,
]);

/// ξ^((2p²-2)/3), where ξ = i + 9. A cubic root of unity, mod p.
pub const XI_TO_2P_SQUARED_MINUS_2_OVER_3: FieldElement = fe([
    0x7193_0c11_d782_e155,
    0xa6bb_947c_ffbe_3323,
    0xaa30_3344_d474_1444,
    0x2c3b_3f0d_2659_4943,
]);

/// ξ^((p²-1)/6), where ξ = i + 9. A cubic root of -1, mod p.
pub const XI_TO_P_SQUARED_MINUS_1_OVER_6: FieldElement = fe([
    0xca8d_8005_00fa_1bf2,
    0xf0c5_d614_68b3_9769,
    0x0e20_1271_ad0d_4418,
    0x0429_0f65_bad8_56e6,
]);

#[cfg(test)]
mod tests {
    use super::*;
    use num_bigint::{BigUint, ToBigInt};
    use num_integer::Integer;
    use num_traits::{One, Zero};

    fn words_to_biguint(words: &[u64; 4]) -> BigUint {
        words
            .iter()
            .enumerate()
            .map(|(i, w)| BigUint::from(*w) << (64 * i))
            .sum()
    }

    fn modulus() -> BigUint {
        words_to_biguint(&MODULUS)
    }

    /// Decodes a Montgomery-form constant back to its plain residue.
    fn decode(x: &FieldElement) -> BigUint {
        let p = modulus();
        let r = BigUint::one() << 256u32;
        let rn1 = r.modpow(&(&p - 2u32), &p);
        words_to_biguint(&x.0.words()) * rn1 % p
    }

    #[test]
    fn modulus_matches_curve_polynomial() {
        let u = BigUint::from(U);
        let p = u.pow(4) * 36u32 + u.pow(3) * 36u32 + u.pow(2) * 24u32 + &u * 6u32 + 1u32;
        assert_eq!(p, modulus());
    }

    #[test]
    fn np_is_negative_modular_inverse() {
        let p = modulus().to_bigint().unwrap();
        let r = (BigUint::one() << 256u32).to_bigint().unwrap();
        let egcd = p.extended_gcd(&r);
        assert!(egcd.gcd.is_one());
        let p_inv = egcd.x.mod_floor(&r);
        let np = (&r - p_inv).mod_floor(&r);
        assert_eq!(np.to_biguint().unwrap(), words_to_biguint(&NP));
        assert_eq!(INV, NP[0]);
    }

    #[test]
    fn montgomery_auxiliaries() {
        let p = modulus();
        let r = (BigUint::one() << 256) % &p;
        assert_eq!(words_to_biguint(&R.0.words()), r);
        assert_eq!(
            words_to_biguint(&RN1.0.words()),
            r.modpow(&(&p - 2u32), &p)
        );
        assert_eq!(
            words_to_biguint(&R2.0.words()),
            r.modpow(&BigUint::from(2u32), &p)
        );
        assert_eq!(
            words_to_biguint(&R3.0.words()),
            r.modpow(&BigUint::from(3u32), &p)
        );
    }

    /// 𝔽p² value c1·i + c0, with i² = -1.
    #[derive(Clone)]
    struct Fp2(BigUint, BigUint);

    fn fp2_mul(a: &Fp2, b: &Fp2, p: &BigUint) -> Fp2 {
        let c1 = (&a.0 * &b.1 + &a.1 * &b.0) % p;
        let c0 = (&a.1 * &b.1 + p - (&a.0 * &b.0) % p) % p;
        Fp2(c1, c0)
    }

    fn fp2_pow(base: &Fp2, mut exp: BigUint, p: &BigUint) -> Fp2 {
        let mut result = Fp2(BigUint::zero(), BigUint::one());
        let mut power = base.clone();
        while !exp.is_zero() {
            if exp.is_odd() {
                result = fp2_mul(&result, &power, p);
            }
            power = fp2_mul(&power, &power, p);
            exp >>= 1;
        }
        result
    }

    #[test]
    fn frobenius_constants_over_fp2() {
        let p = modulus();
        let xi = Fp2(BigUint::one(), BigUint::from(9u32));

        for (scale, den, expected) in [
            (1u32, 6u32, &XI_TO_P_MINUS_1_OVER_6),
            (1, 3, &XI_TO_P_MINUS_1_OVER_3),
            (1, 2, &XI_TO_P_MINUS_1_OVER_2),
            (2, 3, &XI_TO_2P_MINUS_2_OVER_3),
        ] {
            let exp = (&p * scale - scale) / den;
            let got = fp2_pow(&xi, exp, &p);
            assert_eq!(got.0, decode(&expected[0]));
            assert_eq!(got.1, decode(&expected[1]));
        }
    }

    #[test]
    fn frobenius_constants_over_fp() {
        let p = modulus();
        let xi = Fp2(BigUint::one(), BigUint::from(9u32));
        let p2 = &p * &p;

        for (scale, den, expected) in [
            (1u32, 3u32, &XI_TO_P_SQUARED_MINUS_1_OVER_3),
            (2, 3, &XI_TO_2P_SQUARED_MINUS_2_OVER_3),
            (1, 6, &XI_TO_P_SQUARED_MINUS_1_OVER_6),
        ] {
            let exp = (&p2 * scale - scale) / den;
            let got = fp2_pow(&xi, exp, &p);
            assert!(got.0.is_zero());
            assert_eq!(got.1, decode(expected));
        }
    }
}
