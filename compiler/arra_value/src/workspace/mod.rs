//! The value workspace: an arena of reference-counted value slots.
//!
//! Every runtime value lives in a slot owned by the [`Workspace`]. A slot
//! carries a reference count and a payload; released slots are pushed onto
//! a free list and reused by later allocations, so handles stay small and
//! stable for as long as their value is live.
//!
//! # Reference Counting Contract
//!
//! - Every allocation starts with a count of 1, owned by its creator.
//! - Passing a handle to a function does not transfer ownership. A caller
//!   that wants a second owner calls [`Workspace::retain`] first.
//! - Every retain is matched by exactly one [`Workspace::release`].
//! - When the count reaches zero the payload is torn down: nested handles
//!   of a mixed vector are released first, then the slot returns to the
//!   free list. Teardown runs off an explicit work list, not recursion.
//!
//! # Programming Errors
//!
//! Touching a released handle, reading a payload with the wrong accessor
//! for its kind, or building an error-kind vector are invariant violations
//! and panic. User-facing failures are error *values*, never panics.

use std::mem;

use smallvec::SmallVec;

use crate::{ErrorKind, ErrorValue, Kind, Scalar, Shape, ValueId};

/// Slot payload. Atoms hold their scalar inline, vectors own a buffer.
#[derive(Clone, Debug)]
pub(crate) enum Payload {
    Int(i64),
    Char(char),
    Bool(bool),
    Error(ErrorValue),
    Ints(Vec<i64>),
    Chars(Vec<char>),
    Bools(Vec<bool>),
    Mixed(Vec<ValueId>),
}

impl Payload {
    fn kind(&self) -> Kind {
        match self {
            Payload::Int(_) | Payload::Ints(_) => Kind::Int,
            Payload::Char(_) | Payload::Chars(_) => Kind::Char,
            Payload::Bool(_) | Payload::Bools(_) => Kind::Bool,
            Payload::Error(_) => Kind::Error,
            Payload::Mixed(_) => Kind::Mixed,
        }
    }

    fn shape(&self) -> Shape {
        match self {
            Payload::Int(_) | Payload::Char(_) | Payload::Bool(_) | Payload::Error(_) => {
                Shape::Atom
            }
            Payload::Ints(v) => Shape::Vector(v.len()),
            Payload::Chars(v) => Shape::Vector(v.len()),
            Payload::Bools(v) => Shape::Vector(v.len()),
            Payload::Mixed(v) => Shape::Vector(v.len()),
        }
    }

    /// Approximate bytes held by a slot with this payload.
    fn footprint(&self) -> usize {
        let elements = match self.shape() {
            Shape::Atom => 0,
            Shape::Vector(n) => n.saturating_mul(self.kind().element_size()),
        };
        mem::size_of::<Slot>().saturating_add(elements)
    }
}

#[derive(Debug)]
struct Slot {
    refcount: u32,
    /// `None` once the slot has been released.
    payload: Option<Payload>,
}

/// Allocation bookkeeping, as reported by [`Workspace::stats`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct WorkspaceStats {
    /// Number of values currently alive.
    pub live_values: usize,
    /// Approximate bytes held by live values (slot headers plus buffers).
    pub bytes: usize,
}

/// Arena owning every runtime value.
#[derive(Debug, Default)]
pub struct Workspace {
    slots: Vec<Slot>,
    free: Vec<u32>,
    stats: WorkspaceStats,
}

impl Workspace {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current allocation bookkeeping.
    #[inline]
    pub fn stats(&self) -> WorkspaceStats {
        self.stats
    }

    // Allocation

    fn alloc(&mut self, payload: Payload) -> ValueId {
        self.stats.live_values = self.stats.live_values.saturating_add(1);
        self.stats.bytes = self.stats.bytes.saturating_add(payload.footprint());
        let slot = Slot {
            refcount: 1,
            payload: Some(payload),
        };
        if let Some(index) = self.free.pop() {
            self.slots[index as usize] = slot;
            return ValueId::new(index);
        }
        let index = match u32::try_from(self.slots.len()) {
            Ok(index) if index != u32::MAX => index,
            _ => panic!("workspace exhausted: {} slots in use", self.slots.len()),
        };
        self.slots.push(slot);
        ValueId::new(index)
    }

    /// Create an atom holding `scalar`.
    pub fn atom(&mut self, scalar: Scalar) -> ValueId {
        self.alloc(match scalar {
            Scalar::Int(n) => Payload::Int(n),
            Scalar::Char(c) => Payload::Char(c),
            Scalar::Bool(b) => Payload::Bool(b),
        })
    }

    #[inline]
    pub fn int(&mut self, n: i64) -> ValueId {
        self.atom(Scalar::Int(n))
    }

    #[inline]
    pub fn char(&mut self, c: char) -> ValueId {
        self.atom(Scalar::Char(c))
    }

    #[inline]
    pub fn bool(&mut self, b: bool) -> ValueId {
        self.atom(Scalar::Bool(b))
    }

    /// Create an error atom.
    pub fn error(&mut self, kind: ErrorKind, message: impl Into<String>) -> ValueId {
        self.error_value(ErrorValue::new(kind, message))
    }

    /// Create an error atom from an existing error payload.
    pub fn error_value(&mut self, error: ErrorValue) -> ValueId {
        self.alloc(Payload::Error(error))
    }

    /// Create a zero-initialised vector of `len` elements.
    ///
    /// Mixed vectors start filled with [`ValueId::INVALID`]; every element
    /// must be filled with [`Workspace::set_nested`] before the vector is
    /// shared or read.
    ///
    /// # Panics
    ///
    /// Panics if `kind` is [`Kind::Error`]: errors are atoms only.
    pub fn vector(&mut self, len: usize, kind: Kind) -> ValueId {
        self.alloc(match kind {
            Kind::Int => Payload::Ints(vec![0; len]),
            Kind::Char => Payload::Chars(vec!['\0'; len]),
            Kind::Bool => Payload::Bools(vec![false; len]),
            Kind::Mixed => Payload::Mixed(vec![ValueId::INVALID; len]),
            Kind::Error => panic!("cannot create a vector of error values"),
        })
    }

    /// Create an int vector from its elements.
    pub fn int_vector(&mut self, items: impl IntoIterator<Item = i64>) -> ValueId {
        self.alloc(Payload::Ints(items.into_iter().collect()))
    }

    /// Create a char vector (a string) from its elements.
    pub fn char_vector(&mut self, items: impl IntoIterator<Item = char>) -> ValueId {
        self.alloc(Payload::Chars(items.into_iter().collect()))
    }

    /// Create a bool vector from its elements.
    pub fn bool_vector(&mut self, items: impl IntoIterator<Item = bool>) -> ValueId {
        self.alloc(Payload::Bools(items.into_iter().collect()))
    }

    /// Create a mixed vector that takes ownership of `items`.
    ///
    /// Each handle's reference moves into the vector; callers that keep
    /// using an item must retain it first.
    pub fn mixed_vector(&mut self, items: Vec<ValueId>) -> ValueId {
        debug_assert!(items.iter().all(|item| self.is_live(*item)));
        self.alloc(Payload::Mixed(items))
    }

    // Reference counting

    /// Whether `id` refers to a live slot.
    pub fn is_live(&self, id: ValueId) -> bool {
        self.slots
            .get(id.index())
            .is_some_and(|slot| slot.payload.is_some())
    }

    /// Current reference count of a live value.
    pub fn refcount(&self, id: ValueId) -> u32 {
        self.live_slot(id).refcount
    }

    /// Add an owner to `id`.
    pub fn retain(&mut self, id: ValueId) {
        let slot = self.live_slot_mut(id);
        slot.refcount = slot.refcount.saturating_add(1);
    }

    /// Remove an owner from `id`, tearing it down when none remain.
    pub fn release(&mut self, id: ValueId) {
        let mut pending: SmallVec<[ValueId; 8]> = SmallVec::new();
        pending.push(id);
        while let Some(id) = pending.pop() {
            let slot = self.live_slot_mut(id);
            slot.refcount = slot.refcount.saturating_sub(1);
            if slot.refcount > 0 {
                continue;
            }
            let Some(payload) = slot.payload.take() else {
                unreachable!("live slot without payload");
            };
            tracing::trace!(?id, kind = %payload.kind(), "freeing value");
            if let Payload::Mixed(children) = &payload {
                pending.extend(children.iter().copied().filter(|child| child.is_valid()));
            }
            self.stats.live_values = self.stats.live_values.saturating_sub(1);
            self.stats.bytes = self.stats.bytes.saturating_sub(payload.footprint());
            self.free.push(id.raw());
        }
    }

    // Inspection

    fn live_slot(&self, id: ValueId) -> &Slot {
        match self.slots.get(id.index()) {
            Some(slot) if slot.payload.is_some() => slot,
            _ => panic!("use of released or invalid value {id:?}"),
        }
    }

    fn live_slot_mut(&mut self, id: ValueId) -> &mut Slot {
        match self.slots.get_mut(id.index()) {
            Some(slot) if slot.payload.is_some() => slot,
            _ => panic!("use of released or invalid value {id:?}"),
        }
    }

    pub(crate) fn payload(&self, id: ValueId) -> &Payload {
        match &self.live_slot(id).payload {
            Some(payload) => payload,
            None => unreachable!("live slot without payload"),
        }
    }

    fn payload_mut(&mut self, id: ValueId) -> &mut Payload {
        match &mut self.live_slot_mut(id).payload {
            Some(payload) => payload,
            None => unreachable!("live slot without payload"),
        }
    }

    /// Payload kind of `id`.
    pub fn kind(&self, id: ValueId) -> Kind {
        self.payload(id).kind()
    }

    /// Shape of `id`.
    pub fn shape(&self, id: ValueId) -> Shape {
        self.payload(id).shape()
    }

    #[inline]
    pub fn is_atom(&self, id: ValueId) -> bool {
        self.shape(id) == Shape::Atom
    }

    #[inline]
    pub fn is_error(&self, id: ValueId) -> bool {
        self.kind(id) == Kind::Error
    }

    /// Logical length: 1 for atoms, the element count for vectors.
    pub fn len(&self, id: ValueId) -> usize {
        match self.shape(id) {
            Shape::Atom => 1,
            Shape::Vector(n) => n,
        }
    }

    /// The error payload of an error atom.
    pub fn as_error(&self, id: ValueId) -> Option<&ErrorValue> {
        match self.payload(id) {
            Payload::Error(error) => Some(error),
            _ => None,
        }
    }

    /// The scalar of a primitive atom.
    pub fn as_scalar(&self, id: ValueId) -> Option<Scalar> {
        match self.payload(id) {
            Payload::Int(n) => Some(Scalar::Int(*n)),
            Payload::Char(c) => Some(Scalar::Char(*c)),
            Payload::Bool(b) => Some(Scalar::Bool(*b)),
            _ => None,
        }
    }

    /// Element buffer of an int vector.
    pub fn as_ints(&self, id: ValueId) -> Option<&[i64]> {
        match self.payload(id) {
            Payload::Ints(items) => Some(items),
            _ => None,
        }
    }

    /// Element buffer of a mixed vector.
    pub fn as_nested(&self, id: ValueId) -> Option<&[ValueId]> {
        match self.payload(id) {
            Payload::Mixed(items) => Some(items),
            _ => None,
        }
    }

    /// Read element `index` of a primitive value without allocating.
    ///
    /// Atoms are logically repeated, so the index is ignored for them.
    /// Returns `None` for error atoms and mixed vectors.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds for a primitive vector.
    pub fn scalar_at(&self, id: ValueId, index: usize) -> Option<Scalar> {
        match self.payload(id) {
            Payload::Ints(items) => Some(Scalar::Int(items[index])),
            Payload::Chars(items) => Some(Scalar::Char(items[index])),
            Payload::Bools(items) => Some(Scalar::Bool(items[index])),
            Payload::Mixed(_) | Payload::Error(_) => None,
            _ => self.as_scalar(id),
        }
    }

    /// Element `index` of a vector as an owned value.
    ///
    /// Primitive elements come back as freshly created atoms. Mixed elements
    /// come back as the nested value itself, retained for the caller.
    ///
    /// # Panics
    ///
    /// Panics if `id` is an atom or `index` is out of bounds.
    pub fn element_at(&mut self, id: ValueId, index: usize) -> ValueId {
        let scalar = match self.payload(id) {
            Payload::Ints(items) => Scalar::Int(items[index]),
            Payload::Chars(items) => Scalar::Char(items[index]),
            Payload::Bools(items) => Scalar::Bool(items[index]),
            Payload::Mixed(items) => {
                let nested = items[index];
                self.retain(nested);
                return nested;
            }
            Payload::Int(_) | Payload::Char(_) | Payload::Bool(_) | Payload::Error(_) => {
                panic!("element_at called on atom {id:?}")
            }
        };
        self.atom(scalar)
    }

    // Mutation of freshly built vectors

    /// Overwrite element `index` of a primitive vector.
    ///
    /// # Panics
    ///
    /// Panics if the scalar's kind differs from the vector's or `index` is
    /// out of bounds.
    pub fn set_scalar(&mut self, id: ValueId, index: usize, scalar: Scalar) {
        match (self.payload_mut(id), scalar) {
            (Payload::Ints(items), Scalar::Int(n)) => items[index] = n,
            (Payload::Chars(items), Scalar::Char(c)) => items[index] = c,
            (Payload::Bools(items), Scalar::Bool(b)) => items[index] = b,
            (payload, scalar) => panic!(
                "cannot store {} element in {} value",
                scalar.kind(),
                payload.kind()
            ),
        }
    }

    /// Store `item` at `index` of a mixed vector, moving the caller's
    /// reference into the vector. A previously stored handle is released.
    ///
    /// # Panics
    ///
    /// Panics if `id` is not a mixed vector or `index` is out of bounds.
    pub fn set_nested(&mut self, id: ValueId, index: usize, item: ValueId) {
        let previous = match self.payload_mut(id) {
            Payload::Mixed(items) => mem::replace(&mut items[index], item),
            payload => panic!("cannot nest a value in {} value", payload.kind()),
        };
        if previous.is_valid() {
            self.release(previous);
        }
    }

    /// Copy every element of vector `from` into vector `to`, starting at
    /// `offset`. Both must have the same payload kind.
    ///
    /// Nested handles are copied as-is; the caller adjusts their reference
    /// counts for the new shared ownership.
    ///
    /// # Panics
    ///
    /// Panics if `from` and `to` are the same value, their kinds differ,
    /// either is an atom, or the span does not fit in `to`.
    pub fn copy_into(&mut self, from: ValueId, to: ValueId, offset: usize) {
        assert_ne!(from, to, "copy_into needs distinct source and destination");
        let mut dest = match self.live_slot_mut(to).payload.take() {
            Some(payload) => payload,
            None => unreachable!("live slot without payload"),
        };
        match (self.payload(from), &mut dest) {
            (Payload::Ints(src), Payload::Ints(dst)) => {
                dst[offset..offset + src.len()].copy_from_slice(src);
            }
            (Payload::Chars(src), Payload::Chars(dst)) => {
                dst[offset..offset + src.len()].copy_from_slice(src);
            }
            (Payload::Bools(src), Payload::Bools(dst)) => {
                dst[offset..offset + src.len()].copy_from_slice(src);
            }
            (Payload::Mixed(src), Payload::Mixed(dst)) => {
                dst[offset..offset + src.len()].copy_from_slice(src);
            }
            (src, dst) => panic!(
                "cannot copy {:?} {} into {:?} {}",
                src.shape(),
                src.kind(),
                dst.shape(),
                dst.kind()
            ),
        }
        self.slots[to.index()].payload = Some(dest);
    }
}

#[cfg(test)]
mod tests;
