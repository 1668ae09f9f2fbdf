//! Shape-building verbs: count, enlist, join, take.

use arra_value::rules::{are_promotable, check_vector_len};
use arra_value::{ErrorValue, Kind, Scalar, ValueId, Workspace};

use super::VerbResult;

pub(super) fn count(ws: &mut Workspace, x: ValueId) -> ValueId {
    let len = i64::try_from(ws.len(x)).unwrap_or(i64::MAX);
    ws.int(len)
}

/// Wrap `x` in a one-element vector.
///
/// An atom becomes a vector of its own kind; a vector becomes the single
/// nested element of a mixed vector, which takes a new reference to it.
pub(super) fn enlist(ws: &mut Workspace, x: ValueId) -> ValueId {
    match ws.as_scalar(x) {
        Some(scalar) => {
            let out = ws.vector(1, scalar.kind());
            ws.set_scalar(out, 0, scalar);
            out
        }
        None => {
            ws.retain(x);
            ws.mixed_vector(vec![x])
        }
    }
}

/// An owned vector view of `x`: atoms are enlisted, vectors retained.
fn as_vector(ws: &mut Workspace, x: ValueId) -> ValueId {
    if ws.is_atom(x) {
        enlist(ws, x)
    } else {
        ws.retain(x);
        x
    }
}

pub(super) fn join(ws: &mut Workspace, x: ValueId, y: ValueId) -> VerbResult {
    are_promotable(ws, x, y)?;
    check_vector_len(ws.len(x).saturating_add(ws.len(y)))?;
    let x = as_vector(ws, x);
    let y = as_vector(ws, y);
    let out = concat(ws, x, y);
    ws.release(x);
    ws.release(y);
    Ok(out)
}

fn concat(ws: &mut Workspace, x: ValueId, y: ValueId) -> ValueId {
    let (kx, ky) = (ws.kind(x), ws.kind(y));
    let (nx, ny) = (ws.len(x), ws.len(y));

    if kx == ky {
        let out = ws.vector(nx + ny, kx);
        ws.copy_into(x, out, 0);
        ws.copy_into(y, out, nx);
        if kx == Kind::Mixed {
            // The copied handles are now shared with `out`.
            let shared = ws.as_nested(out).map(<[ValueId]>::to_vec).unwrap_or_default();
            for item in shared {
                ws.retain(item);
            }
        }
        return out;
    }

    // Exactly one side is mixed: box the other side's elements.
    let mut items = Vec::with_capacity(nx + ny);
    for (source, len) in [(x, nx), (y, ny)] {
        for i in 0..len {
            items.push(ws.element_at(source, i));
        }
    }
    ws.mixed_vector(items)
}

/// Cycle through `y` to build a vector of `x` elements.
pub(super) fn take(ws: &mut Workspace, x: ValueId, y: ValueId) -> VerbResult {
    let Some(Scalar::Int(count)) = ws.as_scalar(x) else {
        return Err(ErrorValue::type_error("Non-integer number of items to take"));
    };
    if count < 0 {
        return Err(ErrorValue::not_yet_implemented("Negative take"));
    }
    // Saturates on targets where the count does not fit; the limit check
    // rejects it either way.
    let count = usize::try_from(count).unwrap_or(usize::MAX);
    check_vector_len(count)?;
    let source_len = ws.len(y);
    if count > 0 && source_len == 0 {
        return Err(ErrorValue::length("Can't take from an empty list"));
    }

    let kind = ws.kind(y);
    let out = ws.vector(count, kind);
    for i in 0..count {
        let at = i % source_len;
        if kind == Kind::Mixed {
            let item = ws.element_at(y, at);
            ws.set_nested(out, i, item);
        } else if let Some(scalar) = ws.scalar_at(y, at) {
            ws.set_scalar(out, i, scalar);
        }
    }
    Ok(out)
}
