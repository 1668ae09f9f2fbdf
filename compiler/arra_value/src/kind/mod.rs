//! Payload kinds, shapes and scalar payloads.

use std::fmt;
use std::mem::size_of;

use crate::ValueId;

/// Payload kind of a value, independent of its shape.
///
/// `Mixed` only occurs on vectors: a mixed vector holds handles to other
/// values. `Error` only occurs on atoms.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Kind {
    Int,
    Char,
    Bool,
    Error,
    Mixed,
}

impl Kind {
    /// Name used in diagnostics.
    pub const fn name(self) -> &'static str {
        match self {
            Kind::Int => "int",
            Kind::Char => "char",
            Kind::Bool => "bool",
            Kind::Error => "error",
            Kind::Mixed => "mixed",
        }
    }

    /// Size in bytes of one vector element of this kind.
    pub(crate) const fn element_size(self) -> usize {
        match self {
            Kind::Int => size_of::<i64>(),
            Kind::Char => size_of::<char>(),
            Kind::Bool => size_of::<bool>(),
            Kind::Mixed => size_of::<ValueId>(),
            Kind::Error => 0,
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Shape of a value: a scalar atom, or a vector with an element count.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Shape {
    Atom,
    Vector(usize),
}

/// A primitive payload: one element of an int, char or bool value.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Scalar {
    Int(i64),
    Char(char),
    Bool(bool),
}

impl Scalar {
    /// The payload kind this scalar belongs to.
    pub const fn kind(self) -> Kind {
        match self {
            Scalar::Int(_) => Kind::Int,
            Scalar::Char(_) => Kind::Char,
            Scalar::Bool(_) => Kind::Bool,
        }
    }
}
