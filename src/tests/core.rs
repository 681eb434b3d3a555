use super::*;

#[test]
fn native_attribute_stripped() {
    strip("<span data-testid=\"x\">{t}</span>", "<span>{t}</span>");
}

#[test]
fn data_cy_is_a_default_marker() {
    strip("<span data-cy=\"cy_id\">ok</span>", "<span>ok</span>");
}

#[test]
fn empty_component_eliminated() {
    strip("<Foo data-testid=\"x\" />", "");
}

#[test]
fn component_with_children_kept() {
    strip("<Foo data-testid=\"x\"><Bar/></Foo>", "<Foo><Bar/></Foo>");
}

#[test]
fn conditional_spread_removed() {
    strip(
        "<div {...(id && {'data-testid': id})} className=\"c\" />",
        "<div className=\"c\" />",
    );
}

#[test]
fn clean_input_is_untouched() {
    clean("import styles from './styles.scss';\n\nconst x = () => <div className=\"c\">{x}</div>;\n");
}

#[test]
fn comparisons_are_not_markup() {
    clean("const smaller = a < b;\nconst generic: Array<string> = [];\n");
}

#[test]
fn markers_inside_strings_are_not_markup() {
    clean("const sel = '[data-testid=\"x\"]';\nconst tpl = `<span data-testid=\"y\" />`;\n");
}

#[test]
fn markers_inside_comments_are_not_markup() {
    clean("// <span data-testid=\"x\" />\n/* <Foo data-cy=\"y\" /> */\nconst a = 1;\n");
}

#[test]
fn regex_literals_are_opaque() {
    strip(
        "const clean = s.replace(/\"/g, '');\nconst el = <div data-testid=\"t\">x</div>;\n",
        "const clean = s.replace(/\"/g, '');\nconst el = <div>x</div>;\n",
    );
}

#[test]
fn regex_character_class_may_hold_a_slash() {
    clean("const parts = path.split(/[/\\\\]/);\nconst done = true;\n");
}

#[test]
fn division_is_not_a_regex() {
    clean("const ratio = a / b / 2;\nconst rate = (total) / time;\n");
}

#[test]
fn empty_input() {
    clean("");
}

#[test]
fn input_without_jsx() {
    clean("export const add = (a, b) => a + b;\n");
}
