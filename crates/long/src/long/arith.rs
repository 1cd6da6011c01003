use core::ops::{Add, Mul, Neg, Sub};

use super::Long;

impl Long {
    /// Sum with 64-bit wrap-around, tagged like the receiver.
    #[inline]
    pub fn add(self, other: impl Into<Long>) -> Long {
        let other: Long = other.into();
        Long::new(self.bits.wrapping_add(other.bits), self.unsigned)
    }

    #[inline]
    pub fn sub(self, other: impl Into<Long>) -> Long {
        let other: Long = other.into();
        self.add(other.neg())
    }

    /// Two's-complement negation. `MIN_VALUE` is its own negation.
    #[inline]
    pub fn neg(self) -> Long {
        if !self.unsigned && self.eq(Long::MIN_VALUE) {
            return Long::MIN_VALUE;
        }
        self.not().add(Long::ONE)
    }

    /// Product with 64-bit wrap-around.
    pub fn mul(self, other: impl Into<Long>) -> Long {
        let other: Long = other.into();

        if self.is_zero() || other.is_zero() {
            return Long::ZERO;
        }
        // 2^63 times anything even is a multiple of 2^64
        if self.eq(Long::MIN_VALUE) {
            return if other.is_odd() { Long::MIN_VALUE } else { Long::ZERO };
        }
        if other.eq(Long::MIN_VALUE) {
            return if self.is_odd() { Long::MIN_VALUE } else { Long::ZERO };
        }

        // sign normalisation cancels out modulo 2^64
        Long::new(self.bits.wrapping_mul(other.bits), self.unsigned)
    }
}

impl Add for Long {
    type Output = Long;

    fn add(self, rhs: Long) -> Long {
        Long::add(self, rhs)
    }
}

impl Sub for Long {
    type Output = Long;

    fn sub(self, rhs: Long) -> Long {
        Long::sub(self, rhs)
    }
}

impl Mul for Long {
    type Output = Long;

    fn mul(self, rhs: Long) -> Long {
        Long::mul(self, rhs)
    }
}

impl Neg for Long {
    type Output = Long;

    fn neg(self) -> Long {
        Long::neg(self)
    }
}
