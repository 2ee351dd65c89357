//! Value type definitions for Tessera.
//!
//! This module defines the `Value` enum which represents anything that can be held
//! in an object's field slot.

use crate::types::ScalarKind;
use alloc::string::{String, ToString};
use core::cmp::Ordering;

/// A value held in a field slot.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Value {
    /// Null value
    Null,
    /// 8-bit signed integer
    Byte(i8),
    /// 16-bit signed integer
    Short(i16),
    /// 32-bit signed integer
    Integer(i32),
    /// 64-bit signed integer
    Long(i64),
    /// UTF-8 string
    String(String),
}

impl Value {
    /// Returns true if this value is Null.
    #[inline]
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns the integer value widened to i64 for any integral variant.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Byte(v) => Some(*v as i64),
            Value::Short(v) => Some(*v as i64),
            Value::Integer(v) => Some(*v as i64),
            Value::Long(v) => Some(*v),
            _ => None,
        }
    }

    /// Returns a reference to the string if this is a String, None otherwise.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(v) => Some(v.as_str()),
            _ => None,
        }
    }

    /// Returns whether this value can be stored in a slot of the given kind.
    ///
    /// Null is accepted here for every kind; nullability is a property of the
    /// field, not of the kind alone.
    pub fn fits(&self, kind: ScalarKind) -> bool {
        match (self, kind) {
            (Value::Null, _) => true,
            (Value::Byte(_), ScalarKind::BoxedByte) => true,
            (Value::Short(_), ScalarKind::BoxedShort) => true,
            (Value::Integer(_), ScalarKind::BoxedInteger) => true,
            (Value::Long(_), ScalarKind::BoxedLong | ScalarKind::PrimitiveLong) => true,
            (Value::String(_), ScalarKind::String) => true,
            _ => false,
        }
    }

    /// Builds the value for `kind` from an i64, or None if it is out of range.
    pub fn integral(kind: ScalarKind, v: i64) -> Option<Self> {
        match kind {
            ScalarKind::BoxedByte => i8::try_from(v).ok().map(Value::Byte),
            ScalarKind::BoxedShort => i16::try_from(v).ok().map(Value::Short),
            ScalarKind::BoxedInteger => i32::try_from(v).ok().map(Value::Integer),
            ScalarKind::BoxedLong | ScalarKind::PrimitiveLong => Some(Value::Long(v)),
            ScalarKind::String => None,
        }
    }

    /// Returns the zero value of a kind, used for required fields.
    pub fn zero(kind: ScalarKind) -> Self {
        match kind {
            ScalarKind::BoxedByte => Value::Byte(0),
            ScalarKind::BoxedShort => Value::Short(0),
            ScalarKind::BoxedInteger => Value::Integer(0),
            ScalarKind::BoxedLong | ScalarKind::PrimitiveLong => Value::Long(0),
            ScalarKind::String => Value::String(String::new()),
        }
    }
}

impl PartialOrd for Value {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Value {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Value::Null, Value::Null) => Ordering::Equal,
            (Value::Null, _) => Ordering::Less,
            (_, Value::Null) => Ordering::Greater,
            (Value::String(a), Value::String(b)) => a.cmp(b),
            (Value::String(_), _) => Ordering::Greater,
            (_, Value::String(_)) => Ordering::Less,
            // Integral variants compare numerically, width breaks ties
            (a, b) => a
                .as_i64()
                .cmp(&b.as_i64())
                .then_with(|| a.width().cmp(&b.width())),
        }
    }
}

impl Value {
    fn width(&self) -> u8 {
        match self {
            Value::Byte(_) => 1,
            Value::Short(_) => 2,
            Value::Integer(_) => 4,
            Value::Long(_) => 8,
            Value::Null | Value::String(_) => 0,
        }
    }
}

impl From<i8> for Value {
    fn from(v: i8) -> Self {
        Value::Byte(v)
    }
}

impl From<i16> for Value {
    fn from(v: i16) -> Self {
        Value::Short(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Integer(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Long(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::String(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(v.to_string())
    }
}

impl<T> From<Option<T>> for Value
where
    T: Into<Value>,
{
    fn from(v: Option<T>) -> Self {
        match v {
            Some(val) => val.into(),
            None => Value::Null,
        }
    }
}
