use super::*;
use pretty_assertions::assert_eq;

fn run(config: SessionConfig, input: &str) -> (String, Session) {
    let mut session = Session::new(config);
    let mut out = Vec::new();
    let result = session.run(input.as_bytes(), &mut out);
    assert!(result.is_ok());
    (String::from_utf8_lossy(&out).into_owned(), session)
}

fn batch(input: &str) -> String {
    run(SessionConfig::batch(), input).0
}

#[test]
fn prints_each_result() {
    assert_eq!(batch("1+2\n3 take 1\n"), "3\n[1, 1, 1]\n");
}

#[test]
fn skips_blank_and_comment_lines() {
    assert_eq!(batch("\n   \n/ a comment\n/\n5\n"), "5\n");
}

#[test]
fn assignment_echoes_value() {
    assert_eq!(batch("x:5\nx+3\n"), "5\n8\n");
}

#[test]
fn errors_are_printed_not_fatal() {
    assert_eq!(
        batch("y+1\n1 2\n7\n"),
        "Undefined error: y\nParse error: Expected verb, got \"2\"\n7\n"
    );
}

#[test]
fn last_line_without_newline() {
    assert_eq!(batch("1 join 2"), "[1, 2]\n");
}

#[test]
fn interactive_prompts_before_each_read() {
    let (out, _) = run(SessionConfig::interactive(), "1\n2\n");
    assert_eq!(out, "a) 1\na) 2\na) ");
}

#[test]
fn debug_lists_bindings() {
    let mut session = Session::new(SessionConfig::batch());
    let mut out = Vec::new();
    for line in ["b:1 join 2", "a:3", "c:b"] {
        assert!(session.line(line, &mut out).is_ok());
    }
    out.clear();
    assert!(session.line("debug", &mut out).is_ok());
    let stats = session.workspace().stats();
    let expected = format!(
        "Workspace: {} bytes, 2 values\n\
         a: kind=int, refcount=1\n\
         b: kind=int, refcount=2\n\
         c: kind=int, refcount=2\n",
        stats.bytes
    );
    assert_eq!(String::from_utf8_lossy(&out), expected);
}

#[test]
fn debug_needs_to_be_alone() {
    assert_eq!(batch("debug + 1\n"), "Undefined error: debug\n");
}

#[test]
fn clean_run_leaves_nothing_alive() {
    let (_, session) = run(SessionConfig::batch(), "x:1 join 2\ny:enlist x\nx:0\ny = 1\n");
    assert!(session.environment().is_empty());
    assert_eq!(session.workspace().stats().live_values, 0);
    assert_eq!(session.workspace().stats().bytes, 0);
}

#[test]
fn invalid_utf8_line_does_not_stop_the_run() {
    let mut session = Session::new(SessionConfig::batch());
    let mut out = Vec::new();
    let input: &[u8] = b"1+1\n\xff\n2+2\n";
    assert!(session.run(input, &mut out).is_ok());
    assert_eq!(
        String::from_utf8_lossy(&out),
        "2\nUndefined error: \u{fffd}\n4\n"
    );
}
