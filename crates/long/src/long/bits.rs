use core::ops::{BitAnd, BitOr, Not, Shl};

use super::Long;
use crate::value::Value;

impl Long {
    #[inline]
    pub fn not(self) -> Long {
        Long::new(!self.bits, self.unsigned)
    }

    /// Bit-wise AND, tagged like the receiver. An operand that can't be
    /// converted to a `Long` yields `ZERO`.
    pub fn and(self, other: impl Into<Value>) -> Long {
        match Long::from_value(other, false) {
            Some(v) => Long::new(self.bits & v.bits, self.unsigned),
            None => Long::ZERO,
        }
    }

    /// Bit-wise OR, tagged like the receiver. An operand that can't be
    /// converted to a `Long` yields `ZERO`.
    pub fn or(self, other: impl Into<Value>) -> Long {
        match Long::from_value(other, false) {
            Some(v) => Long::new(self.bits | v.bits, self.unsigned),
            None => Long::ZERO,
        }
    }

    /// Left shift by `num_bits` modulo 64.
    pub fn shl(self, num_bits: impl Into<Long>) -> Long {
        let count: Long = num_bits.into();
        let n = (count.to_int() & 63) as u32;
        if n == 0 {
            return self;
        }
        Long::new(self.bits << n, self.unsigned)
    }
}

impl Not for Long {
    type Output = Long;

    fn not(self) -> Long {
        Long::not(self)
    }
}

impl BitAnd for Long {
    type Output = Long;

    fn bitand(self, rhs: Long) -> Long {
        self.and(rhs)
    }
}

impl BitOr for Long {
    type Output = Long;

    fn bitor(self, rhs: Long) -> Long {
        self.or(rhs)
    }
}

impl Shl<u32> for Long {
    type Output = Long;

    fn shl(self, rhs: u32) -> Long {
        Long::shl(self, rhs)
    }
}
