//! Equality.
//!
//! Primitive operands compare elementwise into bools, broadcasting atoms.
//! When either side is mixed the comparison is structural: each nested
//! element is compared with `=` again, and the results are collected in a
//! mixed vector the length of the mixed operand.

use arra_value::rules::{are_broadcastable, are_promotable, broadcast_len};
use arra_value::{Kind, ValueId, Workspace};

use super::{DyadicVerb, VerbResult};
use arra_stack::ensure_sufficient_stack;

pub(super) fn equals(ws: &mut Workspace, x: ValueId, y: ValueId) -> VerbResult {
    are_promotable(ws, x, y)?;
    are_broadcastable(ws, x, y)?;
    let (x, y) = if ws.kind(y) == Kind::Mixed { (y, x) } else { (x, y) };
    if ws.kind(x) == Kind::Mixed {
        return Ok(ensure_sufficient_stack(|| equals_nested(ws, x, y)));
    }
    Ok(equals_flat(ws, x, y))
}

/// `x` is mixed; pair each of its elements with `y` or `y`'s element.
fn equals_nested(ws: &mut Workspace, x: ValueId, y: ValueId) -> ValueId {
    let len = ws.len(x);
    let mut items = Vec::with_capacity(len);
    for i in 0..len {
        let xi = ws.element_at(x, i);
        let yi = if ws.is_atom(y) {
            ws.retain(y);
            y
        } else {
            ws.element_at(y, i)
        };
        items.push(DyadicVerb::Equals.apply(ws, xi, yi));
        ws.release(xi);
        ws.release(yi);
    }
    ws.mixed_vector(items)
}

/// Both operands share a primitive kind.
fn equals_flat(ws: &mut Workspace, x: ValueId, y: ValueId) -> ValueId {
    match broadcast_len(ws, x, y) {
        None => {
            let same = ws.scalar_at(x, 0) == ws.scalar_at(y, 0);
            ws.bool(same)
        }
        Some(len) => {
            let flags: Vec<bool> = (0..len)
                .map(|i| ws.scalar_at(x, i) == ws.scalar_at(y, i))
                .collect();
            ws.bool_vector(flags)
        }
    }
}
