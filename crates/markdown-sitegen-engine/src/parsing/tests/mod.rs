//! Document-level tests for the parsing module.
//!
//! Every parsed tree is run through the structural `invariants` checks
//! before its shape or rendering is asserted.


use pretty_assertions::assert_eq;
use rstest::rstest;

use crate::html::{Node, serialize};
use crate::parsing::{markdown_to_html, parse_document};

fn parse_checked(md: &str) -> Node {
    let root = parse_document(md).unwrap();
    invariants::check(&root);
    root
}

#[test]
fn heading_and_paragraph_tree() {
    let root = parse_checked("# Hi\n\nThis is **bold** and _missing_.");

    let expected = Node::element(
        "div",
        vec![
            Node::element("h1", vec![Node::leaf("Hi")]).unwrap(),
            Node::element(
                "p",
                vec![
                    Node::leaf("This is "),
                    Node::text_element("b", "bold").unwrap(),
                    Node::leaf(" and _missing_."),
                ],
            )
            .unwrap(),
        ],
    )
    .unwrap();

    assert_eq!(root, expected);
}

#[test]
fn empty_document_is_an_empty_div() {
    let root = parse_checked("");
    assert!(root.children().is_empty());
    assert_eq!(serialize(&root), "<div></div>");
}

#[test]
fn blank_lines_only() {
    assert_eq!(markdown_to_html("\n\n\n").unwrap(), "<div></div>");
}

#[rstest]
#[case("Hello world")]
#[case("No syntax here, just (parens) and [brackets].")]
#[case("Two lines\nof plain text")]
fn plain_text_renders_unchanged(#[case] md: &str) {
    assert_eq!(markdown_to_html(md).unwrap(), format!("<div><p>{md}</p></div>"));
}

#[test]
fn block_order_is_preserved() {
    let root = parse_checked("# A\n\n> B\n\n- C\n\n1. D\n\n```\nE\n```\n\nF");
    let tags: Vec<_> = root.children().iter().filter_map(Node::tag).collect();
    assert_eq!(tags, vec!["h1", "blockquote", "ul", "ol", "pre", "p"]);
}

#[test]
fn code_block_content_is_literal() {
    let html = markdown_to_html("```\n**not bold** [no](link)\n```").unwrap();
    assert_eq!(
        html,
        "<div><pre><code>**not bold** [no](link)</code></pre></div>"
    );
}

#[test]
fn code_block_with_blank_line_splits() {
    // Blank lines separate blocks before fences are considered
    let root = parse_checked("```\na\n\nb\n```");
    let tags: Vec<_> = root.children().iter().filter_map(Node::tag).collect();
    assert_eq!(tags, vec!["p", "p"]);
}

#[test]
fn broken_list_degrades_to_paragraph() {
    assert_eq!(
        markdown_to_html("1. a\n3. b").unwrap(),
        "<div><p>1. a\n3. b</p></div>"
    );
}

#[rstest]
#[case("**", "<div><p>**</p></div>")]
#[case("2 ** 3", "<div><p>2 ** 3</p></div>")]
#[case("```\nnot closed", "<div><p>```\nnot closed</p></div>")]
#[case("> a ``` b", "<div><blockquote>a ``` b</blockquote></div>")]
fn unpaired_delimiters_render_literally(#[case] md: &str, #[case] expected: &str) {
    parse_checked(md);
    assert_eq!(markdown_to_html(md).unwrap(), expected);
}

#[test]
fn mixed_inline_document() {
    let md = "Read the [guide](/guide.html) and see ![diagram](d.png) for `details`.";
    let root = parse_checked(md);
    insta::assert_snapshot!(
        serialize(&root),
        @r#"<div><p>Read the <a href="/guide.html">guide</a> and see <img src="d.png" alt="diagram"></img> for <code>details</code>.</p></div>"#
    );
}
