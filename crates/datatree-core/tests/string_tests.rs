//! String tier tests: inline, pre-formatted block, and disclosure-gated.

use datatree_core::{render, DisclosureOp, DisclosureState, Node, RenderTree};
use serde_json::{json, Value};

fn render_with(value: &Value, opened: &DisclosureState) -> RenderTree {
    render(value, "root", opened, None)
}

fn numbered_lines(count: usize) -> String {
    (1..=count)
        .map(|i| format!("line {}", i))
        .collect::<Vec<_>>()
        .join("\n")
}

// ============================================================================
// 1. Inline tier
// ============================================================================

#[test]
fn short_single_line_string_is_inline_text() {
    let tree = render_with(&json!("hello"), &DisclosureState::new());
    assert_eq!(tree.nodes(), &[Node::text("hello")]);
}

#[test]
fn sixty_three_chars_is_still_inline() {
    let s = "x".repeat(63);
    let tree = render_with(&json!(s), &DisclosureState::new());
    assert_eq!(tree.nodes(), &[Node::text(s)]);
}

#[test]
fn length_is_counted_in_characters() {
    let s = "\u{00e9}".repeat(40);
    let tree = render_with(&json!(s), &DisclosureState::new());
    assert_eq!(tree.nodes(), &[Node::text(s)]);
}

#[test]
fn long_single_line_string_is_one_ungated_line() {
    let s = "y".repeat(80);
    let tree = render_with(&json!(s), &DisclosureState::new());
    assert_eq!(tree.nodes(), &[Node::block(s.clone())]);
    assert_eq!(tree.lines(), vec![s]);
    assert!(tree.actions().is_empty());
}

// ============================================================================
// 2. Block tier
// ============================================================================

#[test]
fn short_string_with_line_break_is_a_block() {
    let tree = render_with(&json!("a\nb"), &DisclosureState::new());
    assert_eq!(tree.nodes(), &[Node::block("a\nb")]);
}

#[test]
fn five_lines_render_in_full_without_control() {
    let text = numbered_lines(5);
    let tree = render_with(&json!(text), &DisclosureState::new());
    assert_eq!(tree.nodes(), &[Node::block(text)]);
    assert!(tree.actions().is_empty());
}

#[test]
fn mixed_line_breaks_are_all_counted() {
    // 6 lines: \r\n, \r and \n each split once
    let text = "a\r\nb\rc\nd\ne\nf";
    let tree = render_with(&json!(text), &DisclosureState::new());
    assert_eq!(tree.actions()[0].label, "Show 6 lines");
    assert_eq!(tree.lines(), vec!["a", "b", "c", "...", "[Show 6 lines]"]);
}

#[test]
fn trailing_newline_counts_as_an_extra_line() {
    let text = format!("{}\n", numbered_lines(5));
    let tree = render_with(&json!(text), &DisclosureState::new());
    assert_eq!(tree.actions()[0].label, "Show 6 lines");
}

// ============================================================================
// 3. Gated tier
// ============================================================================

#[test]
fn seven_lines_closed_shows_preview_and_show_action() {
    let text = numbered_lines(7);
    let tree = render_with(&json!(text), &DisclosureState::new());

    assert_eq!(
        tree.lines(),
        vec!["line 1", "line 2", "line 3", "...", "[Show 7 lines]"]
    );
    let actions = tree.actions();
    assert_eq!(actions.len(), 1);
    assert_eq!(actions[0].op, DisclosureOp::Open);
    assert_eq!(actions[0].target, "root");
}

#[test]
fn seven_lines_opened_shows_everything_and_hide_action() {
    let text = numbered_lines(7);
    let opened: DisclosureState = ["root"].into_iter().collect();
    let tree = render_with(&json!(text), &opened);

    assert_eq!(tree.nodes()[0], Node::block(text));
    assert_eq!(tree.lines().len(), 8);
    let actions = tree.actions();
    assert_eq!(actions.len(), 1);
    assert_eq!(actions[0].label, "Hide lines");
    assert_eq!(actions[0].op, DisclosureOp::Close);
    assert_eq!(actions[0].target, "root");
}

#[test]
fn open_then_close_reproduces_the_closed_render() {
    let value = json!(numbered_lines(7));
    let mut opened = DisclosureState::new();

    let closed = render_with(&value, &opened);
    assert!(closed.actions()[0].apply(&mut opened));

    let expanded = render_with(&value, &opened);
    assert_ne!(closed, expanded);
    assert!(expanded.actions()[0].apply(&mut opened));

    assert_eq!(render_with(&value, &opened), closed);
    assert!(opened.is_empty());
}

#[test]
fn gated_string_inside_container_uses_child_identity() {
    let value = json!({"log": numbered_lines(9)});
    let tree = render_with(&value, &DisclosureState::new());
    assert_eq!(tree.actions()[0].target, "root/log");
    assert_eq!(
        tree.to_string(),
        "log:\n  line 1\n  line 2\n  line 3\n  ...\n  [Show 9 lines]"
    );
}
