//! Tests for `ErrorValue` and `ErrorKind`.

use super::{ErrorKind, ErrorValue};
use pretty_assertions::assert_eq;

#[test]
fn constructors_set_kind() {
    assert_eq!(ErrorValue::type_error("x").kind(), ErrorKind::Type);
    assert_eq!(ErrorValue::length("x").kind(), ErrorKind::Length);
    assert_eq!(ErrorValue::parse("x").kind(), ErrorKind::Parse);
    assert_eq!(
        ErrorValue::not_yet_implemented("x").kind(),
        ErrorKind::NotYetImplemented
    );
    assert_eq!(ErrorValue::undefined("x").kind(), ErrorKind::Undefined);
}

#[test]
fn undefined_message_is_the_name() {
    let err = ErrorValue::undefined("foo");
    assert_eq!(err.message(), "foo");
}

#[test]
fn display_uses_label_and_message() {
    let err = ErrorValue::length("Incompatible lengths: 2, 3");
    assert_eq!(err.to_string(), "Length error: Incompatible lengths: 2, 3");

    let err = ErrorValue::not_yet_implemented("Negative take");
    assert_eq!(err.to_string(), "Not yet implemented error: Negative take");
}

#[test]
fn empty_message_still_has_label() {
    let err = ErrorValue::parse("");
    assert_eq!(err.to_string(), "Parse error: ");
}
