//! Signed 16-bit fractional (Q15) values and their multiply contract.
//!
//! A Q15 value uses all 16 bits as fractional precision with an implicit
//! sign bit, representing `bits / 32768` in the range [-1, 1).
//!
//! # Why fractional multiply differs from integer multiply
//!
//! Widening two Q15 operands to 32 bits and multiplying yields a Q30
//! intermediate carrying **two** sign bits — a property of two's-complement
//! fractional multiplication. Taking the high 16 bits directly would
//! therefore lose one bit of magnitude everywhere. The contract is:
//!
//! ```text
//! (16 bits) x (16 bits) -> 32-bit intermediate
//! intermediate << 1     -> discard the redundant sign bit
//! intermediate >> 16    -> arithmetic shift; keep the high half
//! ```
//!
//! The shift-then-truncate path floors toward negative infinity, so
//! results can sit one least-significant unit below the directly scaled
//! reference (0.25 x -0.5 normalizes to `0xF000` where the reference
//! encodes `0xF001`). That bounded error is part of the contract, not a
//! defect: it is what Q15 multiply-accumulate hardware and libraries
//! produce, and bit-compatibility with them is the point.
//!
//! Plain integer semantics are the contrast case: a 16x16 multiply whose
//! true product exceeds 16 bits wraps silently, and the only correct fix
//! is widening both operands *before* the multiply — see [`widening_mul`].

/// A signed 16-bit fractional value in [-1, 1).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(transparent)]
pub struct Q15(i16);

impl Q15 {
    /// Zero.
    pub const ZERO: Q15 = Q15(0);
    /// Largest representable value, 32767/32768 (just under +1.0).
    pub const MAX: Q15 = Q15(i16::MAX);
    /// Smallest representable value, exactly -1.0.
    pub const MIN: Q15 = Q15(i16::MIN);

    /// Reinterpret a raw two's-complement bit pattern as Q15.
    pub const fn from_bits(bits: i16) -> Self {
        Self(bits)
    }

    /// The raw two's-complement bit pattern.
    pub const fn to_bits(self) -> i16 {
        self.0
    }

    /// Fractional product, normalized back to Q15.
    ///
    /// Widens both operands, multiplies, shifts the 32-bit intermediate
    /// left by exactly one bit to drop the redundant sign bit, then takes
    /// the high half with an arithmetic right shift. Every operand
    /// combination has a defined result; the one wrapping case is
    /// `MIN * MIN` (-1 x -1), which lands outside [-1, 1) and wraps to
    /// `MIN`, as Q15 hardware does.
    // The intermediate after `<< 1 >> 16` always lies in i16 range.
    #[allow(clippy::cast_possible_truncation)]
    pub const fn mul(self, rhs: Self) -> Self {
        let wide = (self.0 as i32) * (rhs.0 as i32);
        let normalized = (wide << 1) >> 16;
        Self(normalized as i16)
    }
}

impl core::ops::Mul for Q15 {
    type Output = Q15;

    fn mul(self, rhs: Q15) -> Q15 {
        Q15::mul(self, rhs)
    }
}

/// The exact mathematical product of two 16-bit signed integers.
///
/// Both operands are widened to 32 bits *before* the multiply. Multiplying
/// first and widening the wrapped 16-bit result afterwards does not
/// recover the true product — `7000 x -9000` is the canonical example and
/// is pinned by test.
pub const fn widening_mul(a: i16, b: i16) -> i32 {
    (a as i32) * (b as i32)
}
