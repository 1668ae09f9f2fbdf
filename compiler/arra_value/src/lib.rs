//! Arra Value - runtime values for the arraylang interpreter.
//!
//! This crate provides:
//! - The value [`Workspace`]: an arena of reference-counted value slots
//!   addressed by [`ValueId`] handles
//! - Payload kinds ([`Kind`]) and scalar payloads ([`Scalar`])
//! - Error values ([`ErrorValue`], [`ErrorKind`]) for the errors-as-values model
//! - Type promotion and broadcasting rules ([`rules`])
//! - Rendering of values for display ([`ValueDisplay`])
//!
//! # Ownership
//!
//! Handles are plain `Copy` indices. Ownership is tracked by the slot's
//! reference count, not by Rust's borrow checker:
//! - Every allocation starts at count 1, owned by the caller
//! - [`Workspace::retain`] adds an owner, [`Workspace::release`] removes one
//! - When the count reaches zero the slot is torn down, releasing nested
//!   handles of mixed vectors first, and returned to the free list
//!
//! ```text
//! let mut ws = Workspace::new();
//! let v = ws.vector(2, Kind::Int);
//! let boxed = ws.vector(1, Kind::Mixed);
//! ws.set_nested(boxed, 0, v);   // boxed now owns v
//! ws.release(boxed);            // tears down boxed, then v
//! assert_eq!(ws.stats().live_values, 0);
//! ```

mod display;
mod error_value;
mod id;
mod kind;
pub mod rules;
mod workspace;

pub use display::ValueDisplay;
pub use error_value::{ErrorKind, ErrorValue};
pub use id::ValueId;
pub use kind::{Kind, Scalar, Shape};
pub use workspace::{Workspace, WorkspaceStats};
