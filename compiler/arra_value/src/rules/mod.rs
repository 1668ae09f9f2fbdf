//! Type promotion and broadcasting rules.
//!
//! These checks decide whether two operands can be combined at all,
//! independent of the verb being applied. Verbs call them before touching
//! operand storage and turn a failure into an error value.
//!
//! # Broadcasting
//!
//! An atom paired with a vector of length `n` is logically repeated `n`
//! times. Two vectors must have exactly the same length; elementwise verbs
//! never cycle the shorter side.

use crate::{ErrorValue, Kind, ValueId, Workspace};

/// Longest vector a verb will build.
///
/// Verbs that grow their result (`take`, `join`) check the requested length
/// against this before allocating, so an oversized request is a length
/// error instead of an allocation failure.
pub const MAX_VECTOR_LEN: usize = 1 << 26;

/// Check that a verb may build a vector of `len` elements.
pub fn check_vector_len(len: usize) -> Result<(), ErrorValue> {
    if len > MAX_VECTOR_LEN {
        return Err(ErrorValue::length(format!(
            "Vector too long: {len} items, limit is {MAX_VECTOR_LEN}"
        )));
    }
    Ok(())
}

/// Check that `x` and `y` have compatible payload kinds.
///
/// Kinds are compared regardless of shape. A mixed vector is compatible
/// with anything, since its elements are compared or joined pairwise.
pub fn are_promotable(ws: &Workspace, x: ValueId, y: ValueId) -> Result<(), ErrorValue> {
    let (kx, ky) = (ws.kind(x), ws.kind(y));
    if kx == ky || kx == Kind::Mixed || ky == Kind::Mixed {
        return Ok(());
    }
    Err(ErrorValue::type_error(format!(
        "Incompatible types: {kx}, {ky}"
    )))
}

/// Check that `x` and `y` can be combined elementwise.
pub fn are_broadcastable(ws: &Workspace, x: ValueId, y: ValueId) -> Result<(), ErrorValue> {
    if ws.is_atom(x) || ws.is_atom(y) {
        return Ok(());
    }
    let (nx, ny) = (ws.len(x), ws.len(y));
    if nx == ny {
        return Ok(());
    }
    Err(ErrorValue::length(format!(
        "Incompatible lengths: {nx}, {ny}"
    )))
}

/// Result length of an elementwise operation on broadcastable operands.
///
/// `None` when both operands are atoms, meaning the result is an atom too.
pub fn broadcast_len(ws: &Workspace, x: ValueId, y: ValueId) -> Option<usize> {
    match (ws.is_atom(x), ws.is_atom(y)) {
        (true, true) => None,
        (false, _) => Some(ws.len(x)),
        (true, false) => Some(ws.len(y)),
    }
}
