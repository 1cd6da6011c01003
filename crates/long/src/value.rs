use core::fmt::{self, Debug};

use crate::long::Long;

/// Dynamically-typed input handed over by template and JSON callers.
#[derive(Clone, PartialEq)]
pub enum Value {
    Undefined,
    Null,
    Bool(bool),
    Number(f64),
    String(String),
    Long(Long),
}

impl Value {
    pub const fn is_undefined(&self) -> bool {
        matches!(self, Value::Undefined)
    }
}

impl Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Undefined => f.write_str("undefined"),
            Value::Null => f.write_str("null"),
            Value::Bool(b) => f.write_str(b.to_string().as_str()),
            Value::Number(n) => f.write_str(n.to_string().as_str()),
            Value::String(s) => f.write_str(format!("\"{s}\"").as_str()),
            Value::Long(l) => Debug::fmt(l, f),
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Number(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Number(value.into())
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Value::Number(value.into())
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_owned())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<Long> for Value {
    fn from(value: Long) -> Self {
        Value::Long(value)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => v.into(),
            None => Value::Null,
        }
    }
}

impl Long {
    /// Whether `val` already holds a `Long`.
    pub fn is_long(val: &Value) -> bool {
        matches!(val, Value::Long(_))
    }

    /// Converts a number, a decimal string or an existing `Long` (returned
    /// as-is, tag included). Anything else, `Undefined` included, is `None`.
    pub fn from_value(val: impl Into<Value>, unsigned: bool) -> Option<Long> {
        let val: Value = val.into();
        match val {
            Value::Number(n) => Some(Long::from_number(n, unsigned)),
            Value::String(s) => Long::from_string(&s, unsigned),
            Value::Long(l) => Some(l),
            Value::Undefined | Value::Null | Value::Bool(_) => None,
        }
    }

    /// Like [`Long::from_value`] but keeps `Undefined` apart: the outer
    /// `None` means the input was undefined, the inner one that it was
    /// present but not convertible.
    pub fn from_value_undef(val: impl Into<Value>, unsigned: bool) -> Option<Option<Long>> {
        let val: Value = val.into();
        if val.is_undefined() {
            return None;
        }
        Some(Long::from_value(val, unsigned))
    }
}
