//! Property-based tests for the Q15 multiply contract.
//! Verifies invariants hold for ALL operand pairs, not just fixed examples.

use aria_fractional::{widening_mul, Q15};

proptest::proptest! {
    /// The normalized product matches the wide-integer reference
    /// floor((2ab) / 2^16) for every operand pair except MIN x MIN,
    /// whose wrap is pinned by a unit test.
    #[test]
    fn mul_matches_wide_reference(a: i16, b: i16) {
        if !(a == i16::MIN && b == i16::MIN) {
            let reference = ((i64::from(a) * i64::from(b)) << 1) >> 16;
            let product = Q15::from_bits(a).mul(Q15::from_bits(b));
            assert_eq!(i64::from(product.to_bits()), reference,
                "mul({a}, {b}) diverged from the wide reference");
        }
    }

    /// Multiplying by a value in [-1, 1) never grows the magnitude
    /// (MIN excluded: |-1.0| is exactly 1 and MIN has no i16 negation).
    #[test]
    fn mul_never_grows_magnitude(a in -32767i16..=32767, b in -32767i16..=32767) {
        let product = Q15::from_bits(a).mul(Q15::from_bits(b));
        let bound = i32::from(a.abs()).min(i32::from(b.abs()));
        assert!(i32::from(product.to_bits()).abs() <= bound,
            "|mul({a}, {b})| = {} exceeds {bound}", product.to_bits().abs());
    }

    /// Sign follows the operands: same signs never produce a negative
    /// result, opposite signs never a positive one.
    #[test]
    fn mul_sign_follows_operands(a in -32767i16..=32767, b in -32767i16..=32767) {
        let bits = Q15::from_bits(a).mul(Q15::from_bits(b)).to_bits();
        if (a >= 0) == (b >= 0) {
            assert!(bits >= 0, "mul({a}, {b}) = {bits} flipped sign");
        } else {
            assert!(bits <= 0, "mul({a}, {b}) = {bits} flipped sign");
        }
    }

    /// Multiplication commutes.
    #[test]
    fn mul_commutes(a: i16, b: i16) {
        assert_eq!(
            Q15::from_bits(a).mul(Q15::from_bits(b)),
            Q15::from_bits(b).mul(Q15::from_bits(a)),
        );
    }

    /// Zero annihilates every operand.
    #[test]
    fn zero_annihilates(a: i16) {
        assert_eq!(Q15::from_bits(a).mul(Q15::ZERO), Q15::ZERO);
    }

    /// widening_mul is exact for every operand pair.
    #[test]
    fn widening_mul_is_exact(a: i16, b: i16) {
        assert_eq!(i64::from(widening_mul(a, b)), i64::from(a) * i64::from(b));
    }
}
