use core::fmt::{self, Display};
use core::str::FromStr;

use super::Long;
use crate::debug_log;
use crate::parse_error;
use crate::utils::ParseLongError;

const TWO_PWR_63_DBL: f64 = 9_223_372_036_854_775_808.0;
const TWO_PWR_64_DBL: f64 = 18_446_744_073_709_551_616.0;

/// Digits folded per step, the most that fit a decimal chunk exactly.
const CHUNK_DIGITS: usize = 8;

impl Long {
    /// Converts a host number, truncating toward zero and clamping to the
    /// range of the requested interpretation. NaN converts to zero.
    pub fn from_number(value: f64, unsigned: bool) -> Long {
        if value.is_nan() {
            return if unsigned { Long::UZERO } else { Long::ZERO };
        }

        if unsigned {
            if value < 0.0 {
                return Long::UZERO;
            }
            if value >= TWO_PWR_64_DBL {
                return Long::MAX_UNSIGNED_VALUE;
            }
        } else {
            if value <= -TWO_PWR_63_DBL {
                return Long::MIN_VALUE;
            }
            if value + 1.0 >= TWO_PWR_63_DBL {
                return Long::MAX_VALUE;
            }
        }

        if value < 0.0 {
            return Long::from_number(-value, unsigned).neg();
        }

        Long::new(value as u64, unsigned)
    }

    /// Parses an optional leading `-` followed by decimal digits. Values
    /// beyond 64 bits wrap. Returns `None` for anything else.
    ///
    /// Each further leading `-` negates again, so `"--5"` is 5.
    pub fn from_string(s: &str, unsigned: bool) -> Option<Long> {
        if s.is_empty() || matches!(s, "NaN" | "Infinity" | "+Infinity" | "-Infinity") {
            debug_log!("from_string: rejected {:?}", s);
            return None;
        }

        let digits = s.trim_start_matches('-');
        let negations = s.len() - digits.len();

        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            debug_log!("from_string: non-digit in {:?}", s);
            return None;
        }

        let mut result = Long::ZERO;
        for chunk in digits.as_bytes().chunks(CHUNK_DIGITS) {
            let value = chunk
                .iter()
                .fold(0i64, |acc, d| acc * 10 + i64::from(d - b'0'));
            let power = if chunk.len() == CHUNK_DIGITS {
                Long::TEN_TO_EIGHT
            } else {
                Long::from(10i64.pow(chunk.len() as u32))
            };
            result = result.mul(power).add(Long::from(value));
        }

        let result = result.retag(unsigned);
        // negation is an involution, MIN_VALUE included
        Some(if negations % 2 == 1 { result.neg() } else { result })
    }

    /// Signed parse for literals known to be valid. Falls back to `ZERO`.
    pub fn from_string_zero(s: &str) -> Long {
        Long::from_string(s, false).unwrap_or(Long::ZERO)
    }

    /// Nearest host number. Loses precision past 2^53.
    pub fn to_number(&self) -> f64 {
        if self.unsigned {
            self.bits as f64
        } else {
            self.bits as i64 as f64
        }
    }

    /// Low 32-bit word, sign- or zero-extended according to the tag.
    pub fn to_int(&self) -> i64 {
        if self.unsigned {
            i64::from(self.bits as u32)
        } else {
            i64::from(self.bits as u32 as i32)
        }
    }
}

impl Display for Long {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.unsigned {
            Display::fmt(&self.bits, f)
        } else {
            Display::fmt(&(self.bits as i64), f)
        }
    }
}

/// Signed decimal parse with the same acceptance rules as `from_string`.
impl FromStr for Long {
    type Err = ParseLongError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Long::from_string(s, false).ok_or_else(|| parse_error!("invalid integer literal {:?}", s))
    }
}
