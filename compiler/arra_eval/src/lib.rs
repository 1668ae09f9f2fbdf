//! Arra Eval - verbs and evaluator for arraylang.
//!
//! # Architecture
//!
//! - [`MonadicVerb`] / [`DyadicVerb`]: the fixed verb table, resolved from
//!   token text and applied through one dispatch routine each
//! - [`Environment`]: variable bindings, each holding one owned reference
//! - [`Evaluator`]: right-to-left recursive evaluation of a token sequence
//!
//! The evaluator works on a [`Workspace`] and an [`Environment`] passed in
//! by the caller; there is no global state.
//!
//! # Re-exports
//!
//! Value types from `arra_value` are re-exported for convenience.

mod environment;
mod evaluator;
mod verbs;

pub use arra_value::{
    ErrorKind, ErrorValue, Kind, Scalar, Shape, ValueDisplay, ValueId, Workspace, WorkspaceStats,
};

pub use environment::Environment;
pub use evaluator::{is_valid_name, Evaluator, ASSIGN};
pub use verbs::{DyadicVerb, MonadicVerb};
