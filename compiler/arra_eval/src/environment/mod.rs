//! Variable bindings for the read-eval loop.
//!
//! A single flat scope: the language has no functions or blocks, so a name
//! either has a binding or it doesn't. Each binding owns one reference to
//! its value in the [`Workspace`].

use rustc_hash::FxHashMap;

use arra_value::{ValueId, Workspace};

/// Name-to-value bindings, each owning one reference.
#[derive(Debug, Default)]
pub struct Environment {
    bindings: FxHashMap<String, ValueId>,
}

impl Environment {
    pub fn new() -> Self {
        Environment {
            bindings: FxHashMap::default(),
        }
    }

    /// Look up `name`, returning a new reference the caller must release.
    #[inline]
    pub fn lookup(&self, ws: &mut Workspace, name: &str) -> Option<ValueId> {
        let id = self.get(name)?;
        ws.retain(id);
        Some(id)
    }

    /// The bound handle without taking a reference.
    #[inline]
    pub fn get(&self, name: &str) -> Option<ValueId> {
        self.bindings.get(name).copied()
    }

    /// Bind `name` to `value`, taking over the caller's reference.
    ///
    /// A previous binding is released after the new one is stored, so
    /// rebinding a name to its current value is safe.
    pub fn assign(&mut self, ws: &mut Workspace, name: &str, value: ValueId) {
        let previous = self.bindings.insert(name.to_owned(), value);
        tracing::debug!(name, ?value, ?previous, "assign");
        if let Some(previous) = previous {
            ws.release(previous);
        }
    }

    /// All bindings, sorted by name.
    pub fn bindings(&self) -> Vec<(&str, ValueId)> {
        let mut out: Vec<_> = self
            .bindings
            .iter()
            .map(|(name, id)| (name.as_str(), *id))
            .collect();
        out.sort_unstable_by_key(|(name, _)| *name);
        out
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Drop every binding, releasing its reference.
    pub fn clear(&mut self, ws: &mut Workspace) {
        for (_, id) in self.bindings.drain() {
            ws.release(id);
        }
    }
}
