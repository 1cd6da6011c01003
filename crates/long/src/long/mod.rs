//! 64-bit integer carrying a signed/unsigned interpretation tag.
//!
//! The bits are a plain two's-complement word; the tag only decides how the
//! word is read back (comparison, negativity, decimal form and host number
//! conversion). All arithmetic wraps modulo 2^64.
use core::fmt::{self, Debug};

mod arith;
mod bits;
mod cmp;
mod convert;

/// Immutable 64-bit integer with a signed/unsigned tag.
///
/// Every operation returns a new value, so a `Long` can be shared freely
/// between threads.
#[derive(Copy, Clone)]
pub struct Long {
    bits: u64,
    unsigned: bool,
}

impl Long {
    pub const ZERO: Long = Long::new(0, false);
    pub const ONE: Long = Long::new(1, false);
    pub const UZERO: Long = Long::new(0, true);
    /// Radix step used when parsing decimal strings eight digits at a time.
    pub const TEN_TO_EIGHT: Long = Long::new(100_000_000, false);
    pub const MIN_VALUE: Long = Long::new(1 << 63, false);
    pub const MAX_VALUE: Long = Long::new(i64::MAX as u64, false);
    pub const MAX_UNSIGNED_VALUE: Long = Long::new(u64::MAX, true);

    #[inline(always)]
    const fn new(bits: u64, unsigned: bool) -> Self {
        Self { bits, unsigned }
    }

    /// Same bit pattern, new tag.
    #[inline]
    const fn retag(self, unsigned: bool) -> Self {
        Self::new(self.bits, unsigned)
    }

    #[inline]
    pub const fn is_unsigned(&self) -> bool {
        self.unsigned
    }

    /// Raw bit pattern read as a signed word, ignoring the tag.
    #[inline]
    pub const fn as_i64(&self) -> i64 {
        self.bits as i64
    }

    /// Raw bit pattern read as an unsigned word, ignoring the tag.
    #[inline]
    pub const fn as_u64(&self) -> u64 {
        self.bits
    }

    #[inline]
    pub const fn to_signed(self) -> Self {
        self.retag(false)
    }

    #[inline]
    pub const fn to_unsigned(self) -> Self {
        self.retag(true)
    }

    /// Numeric value under the tag, widened so both readings fit.
    #[inline]
    const fn value(&self) -> i128 {
        if self.unsigned {
            self.bits as i128
        } else {
            self.bits as i64 as i128
        }
    }

    #[inline]
    const fn top_bit(&self) -> bool {
        self.bits >> 63 == 1
    }
}

impl Default for Long {
    fn default() -> Self {
        Long::ZERO
    }
}

impl Debug for Long {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = if self.unsigned { "u64" } else { "i64" };
        write!(f, "Long({self}_{tag})")
    }
}

macro_rules! lossless_from {
    (unsigned: [$($u_ty:ty),*], signed: [$($s_ty:ty),*]) => {
        $(
            impl From<$u_ty> for Long {
                #[inline]
                fn from(n: $u_ty) -> Self {
                    Long::new(n as u64, true)
                }
            }
        )*
        $(
            impl From<$s_ty> for Long {
                #[inline]
                fn from(n: $s_ty) -> Self {
                    Long::new(n as i64 as u64, false)
                }
            }
        )*
    };
}

lossless_from!(
    unsigned: [u8, u16, u32, u64],
    signed: [i8, i16, i32, i64]
);

/// Host numbers convert the way `from_number` does for signed targets.
impl From<f64> for Long {
    #[inline]
    fn from(n: f64) -> Self {
        Long::from_number(n, false)
    }
}
