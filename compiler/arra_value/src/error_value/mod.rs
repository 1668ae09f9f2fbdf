//! Error values.
//!
//! Errors are ordinary values in arraylang: a verb that cannot handle its
//! operands returns an error atom instead of unwinding, and every consumer
//! passes such atoms through unchanged.
//!
//! # Taxonomy
//!
//! | Kind | Raised for |
//! |------|------------|
//! | `Type` | operand kind mismatch |
//! | `Length` | broadcast-incompatible shapes |
//! | `Parse` | malformed token stream, bad variable name, unexpected token |
//! | `NotYetImplemented` | recognised but unsupported operation |
//! | `Undefined` | unknown variable reference |

use std::fmt;

/// Category of an error value.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Type,
    Length,
    Parse,
    NotYetImplemented,
    Undefined,
}

impl ErrorKind {
    /// Fixed human-readable label shown before the diagnostic message.
    pub const fn label(self) -> &'static str {
        match self {
            ErrorKind::Type => "Type error",
            ErrorKind::Length => "Length error",
            ErrorKind::Parse => "Parse error",
            ErrorKind::NotYetImplemented => "Not yet implemented error",
            ErrorKind::Undefined => "Undefined error",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Payload of an error atom: a category plus its diagnostic message.
///
/// Each error carries its own message, so nested errors inside a mixed
/// vector keep their individual diagnostics.
#[derive(Clone, Debug, PartialEq, Eq, Hash, thiserror::Error)]
#[error("{kind}: {message}")]
pub struct ErrorValue {
    kind: ErrorKind,
    message: String,
}

impl ErrorValue {
    #[inline]
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// Operand kind mismatch.
    pub fn type_error(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Type, message)
    }

    /// Broadcast-incompatible shapes.
    pub fn length(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Length, message)
    }

    /// Malformed input.
    pub fn parse(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Parse, message)
    }

    /// Recognised but unsupported operation.
    pub fn not_yet_implemented(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::NotYetImplemented, message)
    }

    /// Unknown variable; the message is the variable name.
    pub fn undefined(name: impl Into<String>) -> Self {
        Self::new(ErrorKind::Undefined, name)
    }

    #[inline]
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }
}

#[cfg(test)]
mod tests;
