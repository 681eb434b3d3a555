use super::*;

#[test]
fn native_element_reduced_to_no_attributes_is_kept() {
    strip("<span data-testid=\"x\"></span>", "<span></span>");
}

#[test]
fn native_self_closing_is_kept() {
    strip("<input data-testid=\"x\" />", "<input />");
}

#[test]
fn component_emptied_is_deleted() {
    strip("<Foo data-testid=\"x\"></Foo>", "");
}

#[test]
fn component_with_whitespace_children_is_deleted() {
    strip("<Foo data-testid=\"x\">\n</Foo>", "");
}

#[test]
fn component_with_text_is_kept() {
    strip("<Foo data-testid=\"x\">hi</Foo>", "<Foo>hi</Foo>");
}

#[test]
fn component_with_comment_is_kept() {
    strip("<Foo data-testid=\"x\">{/* note */}</Foo>", "<Foo>{/* note */}</Foo>");
}

#[test]
fn component_keeping_a_prop_is_kept() {
    strip("<Foo data-testid=\"x\" title=\"t\" />", "<Foo title=\"t\" />");
}

#[test]
fn untouched_empty_component_is_kept() {
    clean("<Foo></Foo>");
}

#[test]
fn elimination_cascades_through_wrappers() {
    strip("<Foo><Bar data-testid=\"x\" /></Foo>", "");
}

#[test]
fn cascade_stops_at_surviving_content() {
    strip(
        "<Foo><Bar data-testid=\"x\" /><span /></Foo>",
        "<Foo><span /></Foo>",
    );
}

#[test]
fn strip_attributes_mode_keeps_wrappers() {
    let options = Options {
        mode: Mode::StripAttributes,
        ..Options::default()
    };
    strip_opts("<Foo data-testid=\"x\" />", &options, "<Foo />");
}

#[test]
fn fragment_is_never_deleted() {
    strip("<>\n  <Foo data-testid=\"x\" />\n</>", "<>\n</>");
}

#[test]
fn member_expression_component() {
    strip("<Foo.Bar data-testid=\"x\">hi</Foo.Bar>", "<Foo.Bar>hi</Foo.Bar>");
}

#[test]
fn nested_jsx_inside_expression_container() {
    strip(
        "<div>{cond && <span data-testid=\"x\">hi</span>}</div>",
        "<div>{cond && <span>hi</span>}</div>",
    );
}

#[test]
fn component_in_expression_position_loses_attributes_only() {
    strip(
        "<div>{cond && <Probe data-testid=\"x\" />}</div>",
        "<div>{cond && <Probe />}</div>",
    );
}

#[test]
fn assigned_component_loses_attributes_only() {
    strip(
        "const a = <Probe data-testid=\"p\" />;\nconst b = <span data-testid=\"s\" />;\n",
        "const a = <Probe />;\nconst b = <span />;\n",
    );
}
