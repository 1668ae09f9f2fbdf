use super::*;
use pretty_assertions::assert_eq;

#[test]
fn atoms_start_with_one_owner() {
    let mut ws = Workspace::new();
    let x = ws.int(5);
    assert_eq!(ws.refcount(x), 1);
    assert_eq!(ws.kind(x), Kind::Int);
    assert_eq!(ws.shape(x), Shape::Atom);
    assert_eq!(ws.len(x), 1);
    assert_eq!(ws.as_scalar(x), Some(Scalar::Int(5)));
    ws.release(x);
    assert_eq!(ws.stats(), WorkspaceStats::default());
}

#[test]
fn vectors_are_zero_initialised() {
    let mut ws = Workspace::new();
    let ints = ws.vector(3, Kind::Int);
    let chars = ws.vector(2, Kind::Char);
    let bools = ws.vector(1, Kind::Bool);
    let mixed = ws.vector(2, Kind::Mixed);

    assert_eq!(ws.as_ints(ints), Some(&[0, 0, 0][..]));
    assert_eq!(ws.scalar_at(chars, 1), Some(Scalar::Char('\0')));
    assert_eq!(ws.scalar_at(bools, 0), Some(Scalar::Bool(false)));
    assert_eq!(
        ws.as_nested(mixed),
        Some(&[ValueId::INVALID, ValueId::INVALID][..])
    );
    assert_eq!(ws.shape(mixed), Shape::Vector(2));

    // Unfilled mixed slots are skipped on teardown.
    for id in [ints, chars, bools, mixed] {
        ws.release(id);
    }
    assert_eq!(ws.stats().live_values, 0);
}

#[test]
fn empty_vector_has_zero_length() {
    let mut ws = Workspace::new();
    let v = ws.vector(0, Kind::Int);
    assert_eq!(ws.len(v), 0);
    assert!(!ws.is_atom(v));
    ws.release(v);
}

#[test]
#[should_panic(expected = "cannot create a vector of error values")]
fn error_vectors_are_rejected() {
    let mut ws = Workspace::new();
    ws.vector(1, Kind::Error);
}

#[test]
fn error_atoms_carry_their_message() {
    let mut ws = Workspace::new();
    let e = ws.error(ErrorKind::Length, "Incompatible lengths: 2, 3");
    assert!(ws.is_error(e));
    assert!(ws.is_atom(e));
    let payload = ws.as_error(e).cloned();
    assert_eq!(
        payload,
        Some(ErrorValue::length("Incompatible lengths: 2, 3"))
    );
    assert_eq!(ws.as_scalar(e), None);
    ws.release(e);
}

#[test]
fn retain_and_release_balance() {
    let mut ws = Workspace::new();
    let x = ws.int_vector([1, 2, 3]);
    ws.retain(x);
    ws.retain(x);
    assert_eq!(ws.refcount(x), 3);
    ws.release(x);
    ws.release(x);
    assert!(ws.is_live(x));
    assert_eq!(ws.refcount(x), 1);
    ws.release(x);
    assert!(!ws.is_live(x));
    assert_eq!(ws.stats(), WorkspaceStats::default());
}

#[test]
#[should_panic(expected = "use of released or invalid value")]
fn double_release_panics() {
    let mut ws = Workspace::new();
    let x = ws.int(1);
    ws.release(x);
    ws.release(x);
}

#[test]
fn released_slots_are_reused() {
    let mut ws = Workspace::new();
    let a = ws.int(1);
    ws.release(a);
    let b = ws.int(2);
    assert_eq!(a, b);
    assert_eq!(ws.as_scalar(b), Some(Scalar::Int(2)));
    ws.release(b);
}

#[test]
fn releasing_mixed_tears_down_children() {
    let mut ws = Workspace::new();
    let inner = ws.int_vector([1, 2]);
    let shared = ws.int(9);
    ws.retain(shared);
    let outer = ws.mixed_vector(vec![inner, shared]);

    ws.release(outer);
    assert!(!ws.is_live(inner));
    // `shared` still has the reference we kept.
    assert!(ws.is_live(shared));
    assert_eq!(ws.refcount(shared), 1);
    ws.release(shared);
    assert_eq!(ws.stats(), WorkspaceStats::default());
}

#[test]
fn deep_nesting_releases_without_recursion() {
    let mut ws = Workspace::new();
    let mut value = ws.int(0);
    for _ in 0..200_000 {
        value = ws.mixed_vector(vec![value]);
    }
    ws.release(value);
    assert_eq!(ws.stats().live_values, 0);
}

#[test]
fn element_at_boxes_primitives() {
    let mut ws = Workspace::new();
    let v = ws.char_vector("abc".chars());
    let b = ws.element_at(v, 1);
    assert!(ws.is_atom(b));
    assert_eq!(ws.as_scalar(b), Some(Scalar::Char('b')));
    assert_eq!(ws.refcount(b), 1);
    ws.release(b);
    ws.release(v);
}

#[test]
fn element_at_shares_nested_values() {
    let mut ws = Workspace::new();
    let inner = ws.int_vector([1, 2]);
    let outer = ws.mixed_vector(vec![inner]);
    let got = ws.element_at(outer, 0);
    assert_eq!(got, inner);
    assert_eq!(ws.refcount(inner), 2);
    ws.release(got);
    ws.release(outer);
    assert_eq!(ws.stats().live_values, 0);
}

#[test]
fn scalar_at_repeats_atoms() {
    let mut ws = Workspace::new();
    let a = ws.bool(true);
    assert_eq!(ws.scalar_at(a, 0), Some(Scalar::Bool(true)));
    assert_eq!(ws.scalar_at(a, 17), Some(Scalar::Bool(true)));
    ws.release(a);
}

#[test]
fn set_nested_replaces_and_releases_previous() {
    let mut ws = Workspace::new();
    let v = ws.vector(1, Kind::Mixed);
    let first = ws.int(1);
    let second = ws.int(2);
    ws.set_nested(v, 0, first);
    ws.set_nested(v, 0, second);
    assert!(!ws.is_live(first));
    assert_eq!(ws.as_nested(v), Some(&[second][..]));
    ws.release(v);
    assert_eq!(ws.stats().live_values, 0);
}

#[test]
#[should_panic(expected = "cannot store char element in int value")]
fn set_scalar_checks_kind() {
    let mut ws = Workspace::new();
    let v = ws.vector(1, Kind::Int);
    ws.set_scalar(v, 0, Scalar::Char('x'));
}

#[test]
fn copy_into_places_span_at_offset() {
    let mut ws = Workspace::new();
    let left = ws.int_vector([1, 2]);
    let right = ws.int_vector([3]);
    let out = ws.vector(3, Kind::Int);
    ws.copy_into(left, out, 0);
    ws.copy_into(right, out, 2);
    assert_eq!(ws.as_ints(out), Some(&[1, 2, 3][..]));
    for id in [left, right, out] {
        ws.release(id);
    }
}

#[test]
fn copy_into_leaves_nested_counts_to_caller() {
    let mut ws = Workspace::new();
    let inner = ws.int(4);
    let src = ws.mixed_vector(vec![inner]);
    let dst = ws.vector(1, Kind::Mixed);
    ws.copy_into(src, dst, 0);
    assert_eq!(ws.refcount(inner), 1);
    ws.retain(inner);
    ws.release(src);
    ws.release(dst);
    assert_eq!(ws.stats().live_values, 0);
}

#[test]
#[should_panic(expected = "cannot copy")]
fn copy_into_rejects_kind_mismatch() {
    let mut ws = Workspace::new();
    let src = ws.int_vector([1]);
    let dst = ws.vector(1, Kind::Bool);
    ws.copy_into(src, dst, 0);
}

#[test]
fn stats_track_buffer_bytes() {
    let mut ws = Workspace::new();
    let small = ws.int_vector([1]);
    let one = ws.stats().bytes;
    let big = ws.int_vector([1, 2, 3, 4]);
    assert_eq!(ws.stats().live_values, 2);
    assert_eq!(ws.stats().bytes, 2 * one + 3 * Kind::Int.element_size());
    ws.release(big);
    assert_eq!(ws.stats().bytes, one);
    ws.release(small);
    assert_eq!(ws.stats().bytes, 0);
}

mod proptest_refcounts {
    use super::super::Workspace;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn nested_build_and_release_leaves_nothing(
            widths in proptest::collection::vec(0usize..5, 1..12),
            extra_owners in 0u32..4,
        ) {
            let mut ws = Workspace::new();
            let mut current = ws.int_vector([1, 2, 3]);
            for width in widths {
                let mut items = Vec::with_capacity(width + 1);
                items.push(current);
                for i in 0..width {
                    items.push(ws.int(i as i64));
                }
                current = ws.mixed_vector(items);
            }
            for _ in 0..extra_owners {
                ws.retain(current);
            }
            for _ in 0..=extra_owners {
                ws.release(current);
            }
            prop_assert_eq!(ws.stats().live_values, 0);
            prop_assert_eq!(ws.stats().bytes, 0);
        }
    }
}
