//! Value handles.

use std::fmt;

/// Index of a value slot in a [`Workspace`](crate::Workspace).
///
/// Handles are `Copy`; copying a handle does not add an owner. Ownership
/// is tracked by the slot's reference count.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
#[repr(transparent)]
pub struct ValueId(u32);

impl ValueId {
    /// Placeholder for unfilled mixed vector slots. Never allocated.
    pub const INVALID: ValueId = ValueId(u32::MAX);

    #[inline]
    pub(crate) const fn new(index: u32) -> Self {
        ValueId(index)
    }

    /// Get the slot index.
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    #[inline]
    pub(crate) const fn raw(self) -> u32 {
        self.0
    }

    /// Check that this is not the `INVALID` placeholder.
    #[inline]
    pub const fn is_valid(self) -> bool {
        self.0 != u32::MAX
    }
}

impl fmt::Debug for ValueId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_valid() {
            write!(f, "ValueId({})", self.0)
        } else {
            write!(f, "ValueId::INVALID")
        }
    }
}

impl Default for ValueId {
    fn default() -> Self {
        Self::INVALID
    }
}
