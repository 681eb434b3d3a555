use pretty_assertions::assert_eq;

use super::*;
use crate::nodes::{AttrKey, AttrValue};
use crate::parse_source;

#[test]
fn keeps_non_marker_attributes() {
    strip(
        "<div id=\"myDiv\" data-testid=\"t\" href=\"#s\">x</div>",
        "<div id=\"myDiv\" href=\"#s\">x</div>",
    );
}

#[test]
fn boolean_attributes_survive() {
    strip(
        "<span disabled data-testid=\"t\">x</span>",
        "<span disabled>x</span>",
    );
}

#[test]
fn expression_valued_marker() {
    strip(
        "<button data-testid={dataTestId} onClick={onClick}>go</button>",
        "<button onClick={onClick}>go</button>",
    );
}

#[test]
fn template_valued_marker() {
    strip(
        "<span data-testid={`${id}_arrow`} className=\"c\" />",
        "<span className=\"c\" />",
    );
}

#[test]
fn multiline_template_value() {
    strip(
        "<div data-testid={`\n    ${dataTestId}-arrow\n   `}\n id=\"myDiv\"\n   >ok</div>",
        "<div\n id=\"myDiv\"\n   >ok</div>",
    );
}

#[test]
fn single_quoted_marker_value() {
    strip("<h1 data-testid='test_id'>Main title</h1>", "<h1>Main title</h1>");
}

#[test]
fn spaced_equals() {
    strip("<span data-testid = \"x\" id=\"a\">t</span>", "<span id=\"a\">t</span>");
}

#[test]
fn marker_prefixed_name_is_not_a_marker() {
    clean("<span data-testid-extra=\"x\">t</span>");
}

#[test]
fn custom_marker_set_replaces_defaults() {
    let options = Options::with_markers(["data-qa"]);
    strip_opts(
        "<span data-qa=\"q\" data-testid=\"t\" />",
        &options,
        "<span data-testid=\"t\" />",
    );
}

#[test]
fn marker_attribute_on_component_with_props() {
    strip("<Card data-testid=\"c\" size=\"s\" />", "<Card size=\"s\" />");
}

#[test]
fn both_markers_on_one_element() {
    strip(
        "<div data-testid={id} data-cy=\"cy\" className=\"c\">x</div>",
        "<div className=\"c\">x</div>",
    );
}

#[test]
fn jsx_inside_attribute_value() {
    strip(
        "<Wrapper render={<span data-testid=\"x\">hi</span>} />",
        "<Wrapper render={<span>hi</span>} />",
    );
}

#[test]
fn jsx_in_ternary_prop_arms() {
    strip(
        "<Wrapper icon={open ? <Up data-testid=\"u\" k=\"1\" /> : <Down data-testid=\"d\" k=\"2\" />} />",
        "<Wrapper icon={open ? <Up k=\"1\" /> : <Down k=\"2\" />} />",
    );
}

#[test]
fn component_in_attribute_value_keeps_its_shell() {
    strip(
        "<Wrapper render={<Probe data-testid=\"x\" />} />",
        "<Wrapper render={<Probe />} />",
    );
}

#[test]
fn template_value_is_categorized() {
    let tree = parse_source("<span data-testid={`${id}_arrow`} />").unwrap();
    let attr = tree
        .iter()
        .find_map(|(_, node)| node.value.attribute())
        .unwrap();
    assert_eq!(attr.key, AttrKey::Literal("data-testid".into()));
    assert_eq!(attr.value, Some(AttrValue::Template));
}

#[test]
fn boolean_attribute_has_no_value() {
    let tree = parse_source("<span disabled />").unwrap();
    let attr = tree
        .iter()
        .find_map(|(_, node)| node.value.attribute())
        .unwrap();
    assert_eq!(attr.key.as_literal(), Some("disabled"));
    assert_eq!(attr.value, None);
}
