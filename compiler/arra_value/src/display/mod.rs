//! Rendering values for output.
//!
//! Rendering borrows the workspace and never takes ownership: the caller
//! still owns the value afterwards and releases it as usual. Nested mixed
//! values recurse through the stack guard, so nesting depth is bounded by
//! memory only.

use std::fmt;

use arra_stack::ensure_sufficient_stack;

use crate::workspace::Payload;
use crate::{ValueId, Workspace};

/// `Display` adapter for a value, created by [`Workspace::display`].
///
/// - atoms: `5`, `true`, `"a"`
/// - char vectors render as strings: `"abc"`
/// - other vectors: `[1, 2, 3]`, nested mixed values recursively
/// - errors: `Type error: <message>`
pub struct ValueDisplay<'ws> {
    ws: &'ws Workspace,
    id: ValueId,
}

impl Workspace {
    /// Render `id` without taking ownership.
    pub fn display(&self, id: ValueId) -> ValueDisplay<'_> {
        ValueDisplay { ws: self, id }
    }
}

fn write_list<T>(
    f: &mut fmt::Formatter<'_>,
    items: &[T],
    mut write_item: impl FnMut(&mut fmt::Formatter<'_>, &T) -> fmt::Result,
) -> fmt::Result {
    write!(f, "[")?;
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write_item(f, item)?;
    }
    write!(f, "]")
}

impl fmt::Display for ValueDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.ws.payload(self.id) {
            Payload::Int(n) => write!(f, "{n}"),
            Payload::Char(c) => write!(f, "\"{c}\""),
            Payload::Bool(b) => write!(f, "{b}"),
            Payload::Error(error) => write!(f, "{error}"),
            Payload::Chars(chars) => {
                write!(f, "\"")?;
                for c in chars {
                    write!(f, "{c}")?;
                }
                write!(f, "\"")
            }
            Payload::Ints(items) => write_list(f, items, |f, n| write!(f, "{n}")),
            Payload::Bools(items) => write_list(f, items, |f, b| write!(f, "{b}")),
            Payload::Mixed(items) => write_list(f, items, |f, item| {
                ensure_sufficient_stack(|| write!(f, "{}", self.ws.display(*item)))
            }),
        }
    }
}

impl fmt::Debug for ValueDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}: {self}", self.id)
    }
}
