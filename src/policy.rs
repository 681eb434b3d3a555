//! The removal policy engine.
//!
//! Marks nodes `removed`; nothing is physically deleted until the rewriter
//! compacts.  The native/component asymmetry lives here: a native tag that
//! loses all its attributes still renders structure and is kept, while a
//! component left with no props and no children is presumed to be an
//! instrumentation shim and is dropped.

use crate::arena::{NodeId, Tree};
use crate::nodes::{ElementKind, NodeValue};
use crate::parser::{Mode, Options};
use crate::strings::is_space;

/// Apply removal decisions for the flagged nodes.
pub fn apply_policy(tree: &mut Tree, source: &str, flagged: &[NodeId], options: &Options) {
    for &id in flagged {
        tree[id].removed = true;
    }
    if options.mode != Mode::EliminateEmptyComponents {
        return;
    }

    // Reverse allocation order visits children before parents (the parser
    // allocates top-down), so a wrapper whose only child was itself
    // eliminated goes too.  Unlike a content-tree walk this also reaches
    // elements nested inside attribute values.
    let ids: Vec<NodeId> = tree.iter().map(|(id, _)| id).collect();
    for &id in ids.iter().rev() {
        if eliminable(tree, source, id) {
            tree[id].removed = true;
        }
    }
}

fn eliminable(tree: &Tree, source: &str, id: NodeId) -> bool {
    let node = &tree[id];
    let element = match node.value {
        NodeValue::Element(ref el) if el.kind == ElementKind::Component => el,
        _ => return false,
    };
    // Deleting an element in expression position (`{cond && <Probe />}`,
    // `render={<Probe />}`, `const a = <Probe />`) would leave a dangling
    // operator or an empty braced value; those only lose their attributes.
    match node.parent.map(|parent| &tree[parent].value) {
        Some(NodeValue::ExpressionContainer) | Some(NodeValue::Attribute(_)) => return false,
        Some(NodeValue::Root) if !in_statement_position(source, node.span.start) => return false,
        _ => {}
    }
    if !element.attributes.iter().all(|&attr| tree[attr].removed) {
        return false;
    }
    // Untouched elements stay; elimination is triggered by a removal, either
    // of the element's own attributes or of a child.
    let touched = !element.attributes.is_empty()
        || node.children.iter().any(|&child| tree[child].removed);
    touched && node.children.iter().all(|&child| contentless(tree, source, child))
}

/// A top-level element is deletable only when nothing before it still
/// expects an operand: start of input, or after `;` or `}`.
fn in_statement_position(source: &str, start: usize) -> bool {
    let bytes = source.as_bytes();
    let mut i = start;
    while i > 0 && is_space(bytes[i - 1]) {
        i -= 1;
    }
    i == 0 || matches!(bytes[i - 1], b';' | b'}')
}

/// Removed nodes and whitespace-only text do not count as content.
fn contentless(tree: &Tree, source: &str, id: NodeId) -> bool {
    let node = &tree[id];
    if node.removed {
        return true;
    }
    match node.value {
        NodeValue::Text => node.span.slice(source).bytes().all(is_space),
        _ => false,
    }
}
