//! The rewriter.
//!
//! Serialization is subtraction: every byte outside a removed span is
//! copied verbatim and in order.  The only judgment calls are the separator
//! runs around a cut, folded in so the output never carries a double space,
//! a dangling space before `>`, or a blank line where a removed element's
//! line became empty.

use crate::arena::{NodeId, Tree};
use crate::nodes::{NodeElement, NodeValue, Span};
use crate::strings::{is_line_space, is_space};

/// Re-emit the source with all `removed` spans (and their separators)
/// excised.
pub fn rewrite(source: &str, tree: &Tree) -> String {
    let mut cuts = Vec::new();
    collect_cuts(source.as_bytes(), tree, tree.root(), &mut cuts);
    cuts.sort();

    let mut out = String::with_capacity(source.len());
    let mut at = 0;
    for cut in cuts {
        if cut.start > at {
            out.push_str(&source[at..cut.start]);
        }
        at = at.max(cut.end);
    }
    out.push_str(&source[at..]);
    out
}

fn collect_cuts(bytes: &[u8], tree: &Tree, id: NodeId, cuts: &mut Vec<Span>) {
    let node = &tree[id];
    if node.removed {
        // The element cut swallows any attribute cuts inside it.
        cuts.push(element_cut(bytes, node.span));
        return;
    }
    if let NodeValue::Element(ref el) = node.value {
        attribute_cuts(bytes, tree, el, cuts);
        // JSX nested in a surviving attribute value carries its own cuts;
        // a removed attribute's cut already covers everything inside it.
        for &attr in &el.attributes {
            if !tree[attr].removed {
                for &child in &tree[attr].children {
                    collect_cuts(bytes, tree, child, cuts);
                }
            }
        }
    }
    for &child in &node.children {
        collect_cuts(bytes, tree, child, cuts);
    }
}

/// Cuts for the removed attributes of a surviving element.  Each cut takes
/// the attribute plus its preceding separator run; if nothing but
/// whitespace survives between the last cut and a plain `>`, that run goes
/// too.
fn attribute_cuts(bytes: &[u8], tree: &Tree, el: &NodeElement, cuts: &mut Vec<Span>) {
    let mut last_removed_end = None;
    for &attr in &el.attributes {
        if !tree[attr].removed {
            continue;
        }
        let span = tree[attr].span;
        let mut start = span.start;
        while start > el.open_tag.start && is_space(bytes[start - 1]) {
            start -= 1;
        }
        cuts.push(Span::new(start, span.end));
        last_removed_end = Some(span.end);
    }
    let last_removed_end = match last_removed_end {
        Some(end) => end,
        None => return,
    };
    if el.self_closing {
        return;
    }

    let close = el.open_tag.end - 1;
    let survivor_after = el
        .attributes
        .iter()
        .any(|&attr| !tree[attr].removed && tree[attr].span.end > last_removed_end);
    if !survivor_after
        && last_removed_end < close
        && bytes[last_removed_end..close].iter().all(|&b| is_space(b))
    {
        cuts.push(Span::new(last_removed_end, close));
    }
}

/// The cut for a removed element: its full span, widened to the whole line
/// (newline included) when the element sits alone on its line(s), or by one
/// whitespace run when it is flanked by whitespace inline.
fn element_cut(bytes: &[u8], span: Span) -> Span {
    let mut a = span.start;
    while a > 0 && is_line_space(bytes[a - 1]) {
        a -= 1;
    }
    let mut b = span.end;
    while b < bytes.len() && is_line_space(bytes[b]) {
        b += 1;
    }
    let at_line_start = a == 0 || bytes[a - 1] == b'\n';
    let at_line_end = b == bytes.len() || bytes[b] == b'\n';
    if at_line_start && at_line_end {
        if b < bytes.len() {
            b += 1;
        } else if a > 0 {
            a -= 1;
        }
        return Span::new(a, b);
    }

    let mut start = span.start;
    if start > 0 && is_space(bytes[start - 1]) && span.end < bytes.len() && is_space(bytes[span.end])
    {
        while start > 0 && is_space(bytes[start - 1]) {
            start -= 1;
        }
    }
    Span::new(start, span.end)
}
