use pretty_assertions::assert_eq;

use super::*;
use crate::strip_markers;

#[track_caller]
fn fail(input: &str) -> crate::ParseError {
    match strip_markers(input, &Options::default()) {
        Ok(out) => panic!("expected a parse error, got output: {:?}", out),
        Err(e) => e,
    }
}

#[test]
fn unclosed_element() {
    let err = fail("const a = <div>");
    assert_eq!(err.message, "unclosed element `<div>`");
    assert_eq!(err.position.line, 1);
    assert_eq!(err.position.column, 11);
}

#[test]
fn mismatched_closing_tag() {
    let err = fail("<div><span></div></span>");
    assert_eq!(err.message, "mismatched closing tag `</div>` for `<span>`");
    assert_eq!(err.position.column, 12);
}

#[test]
fn unterminated_attribute_string() {
    let err = fail("<div className=\"oops>");
    assert_eq!(err.message, "unterminated string literal");
}

#[test]
fn unterminated_template_in_attribute() {
    let err = fail("<div className={`unclosed} />");
    assert_eq!(err.message, "unterminated template literal");
}

#[test]
fn unbalanced_attribute_value_braces() {
    let err = fail("<div className={foo >x</div>");
    assert_eq!(err.message, "unbalanced `{` in expression");
}

#[test]
fn unterminated_regex() {
    let err = fail("const re = /never closed;\n");
    assert_eq!(err.message, "unterminated regex literal");
    assert_eq!(err.position.column, 12);
}

#[test]
fn missing_attribute_value() {
    let err = fail("<div data-testid= >x</div>");
    assert_eq!(err.message, "expected attribute value after `=`");
}

#[test]
fn nesting_depth_is_bounded() {
    let mut input = String::new();
    for _ in 0..600 {
        input.push_str("<div>");
    }
    input.push('x');
    for _ in 0..600 {
        input.push_str("</div>");
    }
    let err = fail(&input);
    assert_eq!(err.message, "element nesting too deep");
}

#[test]
fn error_reports_position_on_later_lines() {
    let err = fail("const ok = 1;\nconst bad = <div><p></div>;\n");
    assert_eq!(err.position.line, 2);
}

#[test]
fn display_includes_position() {
    let err = fail("<div>");
    assert_eq!(err.to_string(), "parse error at 1:1: unclosed element `<div>`");
}
