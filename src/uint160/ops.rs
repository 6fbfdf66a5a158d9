//! Arithmetic and bitwise operators for `UInt160`
//!
//! Arithmetic wraps modulo 2^160. Division is only offered through
//! `checked_div`/`checked_rem` so that a zero divisor is an error value
//! rather than a panic.

use std::ops::{
    Add, AddAssign, BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Mul,
    MulAssign, Neg, Not, Shl, ShlAssign, Shr, ShrAssign, Sub, SubAssign,
};

use super::{UInt160, UInt160Error};
use crate::printer::LIMB_COUNT;

const BITS: u32 = 160;

macro_rules! impl_bitwise {
    ($trait:ident, $method:ident, $assign_trait:ident, $assign_method:ident, $op:tt) => {
        impl $trait for UInt160 {
            type Output = UInt160;

            fn $method(self, rhs: UInt160) -> Self::Output {
                let mut out = self;
                out.$assign_method(rhs);
                out
            }
        }

        impl $assign_trait for UInt160 {
            fn $assign_method(&mut self, rhs: UInt160) {
                self.limbs
                    .iter_mut()
                    .zip(rhs.limbs.iter())
                    .for_each(|(l, r)| *l = *l $op *r);
            }
        }
    };
}

impl_bitwise!(BitAnd, bitand, BitAndAssign, bitand_assign, &);
impl_bitwise!(BitOr, bitor, BitOrAssign, bitor_assign, |);
impl_bitwise!(BitXor, bitxor, BitXorAssign, bitxor_assign, ^);

/// Binary operator built on its `*Assign` counterpart
macro_rules! impl_from_assign {
    ($trait:ident, $method:ident, $assign_method:ident, $rhs:ty) => {
        impl $trait<$rhs> for UInt160 {
            type Output = UInt160;

            fn $method(self, rhs: $rhs) -> Self::Output {
                let mut out = self;
                out.$assign_method(rhs);
                out
            }
        }
    };
}

impl Not for UInt160 {
    type Output = UInt160;

    fn not(self) -> Self::Output {
        let mut out = self;
        out.limbs.iter_mut().for_each(|limb| *limb = !*limb);
        out
    }
}

/// Logical left shift. Shifts of 160 bits or more yield zero.
impl ShlAssign<u32> for UInt160 {
    fn shl_assign(&mut self, shift: u32) {
        if shift == 0 {
            return;
        }
        if shift >= BITS {
            *self = UInt160::ZERO;
            return;
        }

        let gap = (shift / 32) as usize;
        let bits = shift % 32;
        let src = self.limbs;

        for (i, limb) in self.limbs.iter_mut().enumerate() {
            let from = i + gap;
            if from >= LIMB_COUNT {
                *limb = 0;
                continue;
            }

            let hi = src[from] << bits;
            let lo = if bits != 0 && from + 1 < LIMB_COUNT {
                src[from + 1] >> (32 - bits)
            } else {
                0
            };
            *limb = hi | lo;
        }
    }
}

/// Logical right shift. Shifts of 160 bits or more yield zero.
impl ShrAssign<u32> for UInt160 {
    fn shr_assign(&mut self, shift: u32) {
        if shift == 0 {
            return;
        }
        if shift >= BITS {
            *self = UInt160::ZERO;
            return;
        }

        let gap = (shift / 32) as usize;
        let bits = shift % 32;
        let src = self.limbs;

        for (i, limb) in self.limbs.iter_mut().enumerate() {
            if i < gap {
                *limb = 0;
                continue;
            }

            let from = i - gap;
            let lo = src[from] >> bits;
            let hi = if bits != 0 && from > 0 {
                src[from - 1] << (32 - bits)
            } else {
                0
            };
            *limb = hi | lo;
        }
    }
}

impl_from_assign!(Shl, shl, shl_assign, u32);
impl_from_assign!(Shr, shr, shr_assign, u32);

/// Wrapping addition, limb by limb from the least significant end
impl AddAssign for UInt160 {
    fn add_assign(&mut self, rhs: UInt160) {
        let mut carry = 0u64;

        for (l, r) in self.limbs.iter_mut().zip(rhs.limbs.iter()).rev() {
            let sum = u64::from(*l) + u64::from(*r) + carry;
            *l = sum as u32;
            carry = sum >> 32;
        }
    }
}

/// Two's complement: `!x + 1`
impl Neg for UInt160 {
    type Output = UInt160;

    fn neg(self) -> Self::Output {
        !self + UInt160::ONE
    }
}

impl SubAssign for UInt160 {
    fn sub_assign(&mut self, rhs: UInt160) {
        *self += -rhs;
    }
}

/// Schoolbook multiplication, truncated to 160 bits
impl MulAssign for UInt160 {
    fn mul_assign(&mut self, rhs: UInt160) {
        if self.is_zero() || rhs.is_zero() {
            *self = UInt160::ZERO;
            return;
        }

        let lhs = self.limbs;
        let mut res = [0u32; LIMB_COUNT];

        for (offset, j) in (0..LIMB_COUNT).rev().enumerate() {
            let mut carry = 0u64;

            for i in (offset..LIMB_COUNT).rev() {
                let dst = i - offset;
                let sum = u64::from(lhs[i]) * u64::from(rhs.limbs[j])
                    + u64::from(res[dst])
                    + carry;
                res[dst] = sum as u32;
                carry = sum >> 32;
            }
        }

        self.limbs = res;
    }
}

impl_from_assign!(Add, add, add_assign, UInt160);
impl_from_assign!(Sub, sub, sub_assign, UInt160);
impl_from_assign!(Mul, mul, mul_assign, UInt160);

impl UInt160 {
    /// Quotient and remainder by binary long division
    ///
    /// # Errors
    ///
    /// Returns `UInt160Error::DivisionByZero` if `rhs` is zero.
    pub fn div_rem(&self, rhs: &UInt160) -> Result<(UInt160, UInt160), UInt160Error> {
        if rhs.is_zero() {
            return Err(UInt160Error::DivisionByZero);
        }
        if self < rhs {
            return Ok((UInt160::ZERO, *self));
        }

        let mut quot = UInt160::ZERO;
        let mut rem = UInt160::ZERO;

        for i in (0..self.bit_length()).rev() {
            rem <<= 1;
            quot <<= 1;

            if self.bit(i) {
                rem.limbs[LIMB_COUNT - 1] |= 1;
            }
            if rem >= *rhs {
                rem -= *rhs;
                quot.limbs[LIMB_COUNT - 1] |= 1;
            }
        }

        Ok((quot, rem))
    }

    /// # Errors
    ///
    /// Returns `UInt160Error::DivisionByZero` if `rhs` is zero.
    pub fn checked_div(&self, rhs: &UInt160) -> Result<UInt160, UInt160Error> {
        self.div_rem(rhs).map(|(quot, _)| quot)
    }

    /// # Errors
    ///
    /// Returns `UInt160Error::DivisionByZero` if `rhs` is zero.
    pub fn checked_rem(&self, rhs: &UInt160) -> Result<UInt160, UInt160Error> {
        self.div_rem(rhs).map(|(_, rem)| rem)
    }
}
