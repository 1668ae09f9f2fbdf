//! Integer arithmetic: negate, add, subtract.
//!
//! Arithmetic wraps on overflow: the error taxonomy has no overflow
//! category, and a wrapped result keeps `x - y == x + neg y` exact.

use arra_value::rules::{are_broadcastable, broadcast_len};
use arra_value::{ErrorValue, Kind, Scalar, Shape, ValueId, Workspace};

use super::VerbResult;

/// Element `index` of an int operand, repeating atoms.
fn int_at(ws: &Workspace, id: ValueId, index: usize) -> i64 {
    match ws.scalar_at(id, index) {
        Some(Scalar::Int(n)) => n,
        other => unreachable!("int operand {id:?} holds {other:?}"),
    }
}

pub(super) fn negate(ws: &mut Workspace, x: ValueId) -> VerbResult {
    let kind = ws.kind(x);
    if kind != Kind::Int {
        return Err(ErrorValue::type_error(format!("Can't negate type {kind}")));
    }
    match ws.shape(x) {
        Shape::Atom => {
            let negated = int_at(ws, x, 0).wrapping_neg();
            Ok(ws.int(negated))
        }
        Shape::Vector(_) => {
            let negated: Vec<i64> = match ws.as_ints(x) {
                Some(items) => items.iter().map(|n| n.wrapping_neg()).collect(),
                None => unreachable!("int vector {x:?} has no int buffer"),
            };
            Ok(ws.int_vector(negated))
        }
    }
}

pub(super) fn add(ws: &mut Workspace, x: ValueId, y: ValueId) -> VerbResult {
    let (kx, ky) = (ws.kind(x), ws.kind(y));
    if kx != Kind::Int || ky != Kind::Int {
        return Err(ErrorValue::type_error(format!(
            "Can't add type {kx} to type {ky}"
        )));
    }
    are_broadcastable(ws, x, y)?;
    match broadcast_len(ws, x, y) {
        None => {
            let sum = int_at(ws, x, 0).wrapping_add(int_at(ws, y, 0));
            Ok(ws.int(sum))
        }
        Some(len) => {
            let sums: Vec<i64> = (0..len)
                .map(|i| int_at(ws, x, i).wrapping_add(int_at(ws, y, i)))
                .collect();
            Ok(ws.int_vector(sums))
        }
    }
}

/// `x - y` is `x + neg y`.
pub(super) fn subtract(ws: &mut Workspace, x: ValueId, y: ValueId) -> VerbResult {
    let negated = negate(ws, y)?;
    let result = add(ws, x, negated);
    ws.release(negated);
    result
}
