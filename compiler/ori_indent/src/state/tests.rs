#![allow(clippy::unwrap_used, reason = "Tests can panic")]

use pretty_assertions::assert_eq;

use super::*;

fn collect(text: &str) -> Vec<Segment<'_>> {
    segments(text).collect()
}

#[test]
fn classify_characters() {
    assert_eq!(classify('\r'), CharClass::Discard);
    assert_eq!(classify('\n'), CharClass::LineEnd);
    assert_eq!(classify('a'), CharClass::Content);
    assert_eq!(classify(' '), CharClass::Content);
    assert_eq!(classify('\t'), CharClass::Content);
}

#[test]
fn segments_plain_text() {
    assert_eq!(collect("hello"), vec![Segment::Text("hello")]);
    assert!(collect("").is_empty());
}

#[test]
fn segments_embedded_newlines() {
    assert_eq!(
        collect("a\nb\nc"),
        vec![
            Segment::Text("a"),
            Segment::LineEnd,
            Segment::Text("b"),
            Segment::LineEnd,
            Segment::Text("c"),
        ]
    );
}

#[test]
fn segments_drop_carriage_returns() {
    assert_eq!(
        collect("a\r\nb"),
        vec![Segment::Text("a"), Segment::LineEnd, Segment::Text("b")]
    );
    assert!(collect("\r").is_empty());
    assert_eq!(collect("\r\r\n"), vec![Segment::LineEnd]);
    assert_eq!(collect("x\ry"), vec![Segment::Text("x"), Segment::Text("y")]);
}

#[test]
fn segments_consecutive_line_ends() {
    assert_eq!(
        collect("\n\nz\n"),
        vec![
            Segment::LineEnd,
            Segment::LineEnd,
            Segment::Text("z"),
            Segment::LineEnd,
        ]
    );
}

#[test]
fn segments_multibyte_content() {
    assert_eq!(
        collect("héllo\nwörld→"),
        vec![
            Segment::Text("héllo"),
            Segment::LineEnd,
            Segment::Text("wörld→"),
        ]
    );
}

#[test]
fn new_state_is_pending() {
    let mut state = IndentState::new("  ".into(), false);
    assert!(state.is_pending());
    assert_eq!(state.level(), 0);
    assert_eq!(state.indent_due().unwrap(), Some(""));
}

#[test]
fn prefix_follows_level() {
    let mut state = IndentState::new("ab".into(), false);
    state.set_level(3);
    assert_eq!(state.indent_due().unwrap(), Some("ababab"));
    state.set_level(1);
    assert_eq!(state.indent_due().unwrap(), Some("ab"));
    state.set_level(0);
    assert_eq!(state.indent_due().unwrap(), Some(""));
}

#[test]
fn prefix_follows_unit() {
    let mut state = IndentState::new(" ".into(), false);
    state.set_level(2);
    state.set_unit("\t".into());
    assert_eq!(state.unit(), "\t");
    assert_eq!(state.indent_due().unwrap(), Some("\t\t"));
}

#[test]
fn emission_clears_pending_until_next_line() {
    let mut state = IndentState::new(" ".into(), false);
    state.set_level(1);
    state.indent_emitted();
    assert!(!state.is_pending());
    assert_eq!(state.indent_due().unwrap(), None);
    state.line_started();
    assert_eq!(state.indent_due().unwrap(), Some(" "));
}

#[test]
fn empty_line_policy() {
    let mut skip = IndentState::new(" ".into(), false);
    skip.set_level(2);
    assert_eq!(skip.indent_due_for_line().unwrap(), None);

    let mut indent = IndentState::new(" ".into(), true);
    indent.set_level(2);
    assert!(indent.indent_empty_lines());
    assert_eq!(indent.indent_due_for_line().unwrap(), Some("  "));
    indent.indent_emitted();
    assert_eq!(indent.indent_due_for_line().unwrap(), None);
}

#[test]
fn setting_a_huge_level_allocates_nothing() {
    let mut state = IndentState::new("  ".into(), false);
    state.set_level(usize::MAX);
    assert_eq!(state.level(), usize::MAX);
    state.set_level(0);
    assert_eq!(state.indent_due().unwrap(), Some(""));
}

#[test]
fn unrepresentable_prefix_is_an_error() {
    let mut state = IndentState::new("  ".into(), false);
    state.set_level(usize::MAX);
    let err = state.indent_due().unwrap_err();
    assert!(matches!(
        err,
        WriteError::IndentTooLarge {
            level: usize::MAX,
            unit_len: 2
        }
    ));
    assert!(state.is_pending());

    // Too large for a single allocation even though the length fits in usize.
    let mut state = IndentState::new(" ".into(), false);
    state.set_level(usize::MAX);
    assert!(matches!(
        state.indent_due(),
        Err(WriteError::IndentTooLarge { .. })
    ));
    state.set_level(1);
    assert_eq!(state.indent_due().unwrap(), Some(" "));
}
