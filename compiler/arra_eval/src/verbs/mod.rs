//! The verb table.
//!
//! Verbs are a fixed, closed set, so they are plain enums matched in a
//! single dispatch routine rather than trait objects or function tables.
//!
//! # Ownership
//!
//! Operands are borrowed for the duration of a call: `apply` never releases
//! them, and the caller keeps its references. The returned handle is a new
//! owned reference.
//!
//! # Errors
//!
//! `apply` passes error operands through unchanged (retained for the
//! caller) without running the verb. Verb bodies validate their operands
//! before reading storage and report failures as [`ErrorValue`]s, which
//! `apply` turns into error atoms.

mod arith;
mod compare;
mod structural;

use arra_value::{ErrorValue, ValueId, Workspace};

/// Outcome of a verb body before it becomes a value.
type VerbResult = Result<ValueId, ErrorValue>;

/// Verbs taking a single right operand.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum MonadicVerb {
    Count,
    Negate,
    Enlist,
}

/// Verbs taking a left noun and a right operand.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum DyadicVerb {
    Take,
    Add,
    Subtract,
    Equals,
    Join,
}

impl MonadicVerb {
    pub const ALL: [MonadicVerb; 3] = [MonadicVerb::Count, MonadicVerb::Negate, MonadicVerb::Enlist];

    /// Resolve a token to a monadic verb.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|verb| verb.name() == name)
    }

    /// Token text naming this verb.
    pub const fn name(self) -> &'static str {
        match self {
            MonadicVerb::Count => "count",
            MonadicVerb::Negate => "neg",
            MonadicVerb::Enlist => "enlist",
        }
    }

    /// Apply the verb to `x`, returning a new owned value.
    pub fn apply(self, ws: &mut Workspace, x: ValueId) -> ValueId {
        if ws.is_error(x) {
            ws.retain(x);
            return x;
        }
        let result = match self {
            MonadicVerb::Count => Ok(structural::count(ws, x)),
            MonadicVerb::Negate => arith::negate(ws, x),
            MonadicVerb::Enlist => Ok(structural::enlist(ws, x)),
        };
        into_value(ws, result)
    }
}

impl DyadicVerb {
    pub const ALL: [DyadicVerb; 5] = [
        DyadicVerb::Take,
        DyadicVerb::Add,
        DyadicVerb::Subtract,
        DyadicVerb::Equals,
        DyadicVerb::Join,
    ];

    /// Resolve a token to a dyadic verb.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|verb| verb.name() == name)
    }

    /// Token text naming this verb.
    pub const fn name(self) -> &'static str {
        match self {
            DyadicVerb::Take => "take",
            DyadicVerb::Add => "+",
            DyadicVerb::Subtract => "-",
            DyadicVerb::Equals => "=",
            DyadicVerb::Join => "join",
        }
    }

    /// Apply the verb to `(x, y)`, returning a new owned value.
    pub fn apply(self, ws: &mut Workspace, x: ValueId, y: ValueId) -> ValueId {
        for operand in [x, y] {
            if ws.is_error(operand) {
                ws.retain(operand);
                return operand;
            }
        }
        let result = match self {
            DyadicVerb::Take => structural::take(ws, x, y),
            DyadicVerb::Add => arith::add(ws, x, y),
            DyadicVerb::Subtract => arith::subtract(ws, x, y),
            DyadicVerb::Equals => compare::equals(ws, x, y),
            DyadicVerb::Join => structural::join(ws, x, y),
        };
        into_value(ws, result)
    }
}

fn into_value(ws: &mut Workspace, result: VerbResult) -> ValueId {
    match result {
        Ok(value) => value,
        Err(error) => {
            tracing::debug!(%error, "verb failed");
            ws.error_value(error)
        }
    }
}
