//! Scalar kind definitions for Tessera.
//!
//! This module defines the value domains a schema field can declare.

use core::fmt;

/// Supported scalar kinds for object fields.
///
/// The boxed kinds are nullable: a slot can hold "no value" independently of any
/// valid number. `PrimitiveLong` always holds a value and defaults to zero.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ScalarKind {
    /// Nullable 8-bit signed integer
    BoxedByte,
    /// Nullable 16-bit signed integer
    BoxedShort,
    /// Nullable 32-bit signed integer
    BoxedInteger,
    /// Nullable 64-bit signed integer
    BoxedLong,
    /// Non-nullable 64-bit signed integer, default 0
    PrimitiveLong,
    /// Nullable UTF-8 text
    String,
}

impl ScalarKind {
    /// Returns whether a slot of this kind can hold null.
    #[inline]
    pub fn is_nullable(&self) -> bool {
        !matches!(self, ScalarKind::PrimitiveLong)
    }

    /// Returns the kind name used in error messages.
    pub fn name(&self) -> &'static str {
        match self {
            ScalarKind::BoxedByte => "byte?",
            ScalarKind::BoxedShort => "short?",
            ScalarKind::BoxedInteger => "int?",
            ScalarKind::BoxedLong => "long?",
            ScalarKind::PrimitiveLong => "long",
            ScalarKind::String => "string?",
        }
    }
}

impl fmt::Display for ScalarKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
