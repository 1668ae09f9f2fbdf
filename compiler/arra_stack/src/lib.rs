//! Stack growth for deep recursion.
//!
//! Evaluation recurses once per verb in a line, and structural equality and
//! rendering recurse once per level of nesting in a value. Each of those
//! recursive steps runs inside [`ensure_sufficient_stack`], so long lines
//! and deeply nested values grow the stack instead of overflowing it.
//!
//! On wasm the closure is called directly.

/// Remaining stack below which we grow (64KB).
#[cfg(not(target_arch = "wasm32"))]
const RED_ZONE: usize = 64 * 1024;

/// Size of each new stack segment (1MB).
#[cfg(not(target_arch = "wasm32"))]
const SEGMENT: usize = 1024 * 1024;

/// Run `f`, first growing the stack if less than the red zone remains.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, SEGMENT, f)
}

/// WASM manages its own stack.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
