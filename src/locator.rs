//! The test-marker locator.
//!
//! Walks the tree and flags the attributes and spreads that constitute test
//! instrumentation.  Never mutates, never guesses: a computed key, or a
//! template key whose static prefix is not itself a marker name, stays
//! unflagged.

use rustc_hash::FxHashSet;

use crate::arena::{NodeId, Tree};
use crate::nodes::{AttrKey, NodeValue};
use crate::parser::Options;

/// Flag every marker attribute and every conditional-injection spread whose
/// sole injected key is a marker.  Returns flagged node ids in allocation
/// order.
pub fn locate_markers(tree: &Tree, options: &Options) -> Vec<NodeId> {
    let markers: FxHashSet<&str> = options.markers.iter().map(|m| m.as_str()).collect();
    let mut flagged = Vec::new();
    for (id, node) in tree.iter() {
        match node.value {
            NodeValue::Attribute(ref attr) => {
                if key_matches(&attr.key, &markers) {
                    flagged.push(id);
                }
            }
            NodeValue::SpreadAttribute(ref spread) => {
                if let Some(ref injection) = spread.injection {
                    // A spread injecting a marker alongside other keys is
                    // left whole; there is no span to cut without rewriting
                    // the object literal.
                    if injection.keys.len() == 1 && key_matches(&injection.keys[0], &markers) {
                        flagged.push(id);
                    }
                }
            }
            _ => {}
        }
    }
    flagged
}

fn key_matches(key: &AttrKey, markers: &FxHashSet<&str>) -> bool {
    match *key {
        AttrKey::Literal(ref name) => markers.contains(name.as_str()),
        AttrKey::Template { ref prefix, .. } => {
            !prefix.is_empty() && markers.contains(prefix.as_str())
        }
        AttrKey::Computed => false,
    }
}
