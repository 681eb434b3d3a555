//! An index-based arena tree.
//!
//! Nodes are allocated once by the parser and never physically deleted; the
//! policy pass marks nodes `removed` and the rewriter compacts at
//! serialization time.  Attribute nodes attach to their element's attribute
//! list rather than the content-child list, so content traversals see only
//! child nodes.

use std::ops::{Index, IndexMut};

use crate::nodes::{NodeValue, Span};

/// A handle into a [`Tree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(u32);

impl NodeId {
    fn index(self) -> usize {
        self.0 as usize
    }
}

/// A single allocated node.
#[derive(Debug)]
pub struct Node {
    pub value: NodeValue,
    pub span: Span,
    pub parent: Option<NodeId>,
    pub children: Vec<NodeId>,
    pub removed: bool,
}

/// The arena holding one file's tree.
#[derive(Debug)]
pub struct Tree {
    nodes: Vec<Node>,
}

impl Tree {
    /// Create a tree whose root spans the whole input.
    pub(crate) fn new(source_len: usize) -> Tree {
        Tree {
            nodes: vec![Node {
                value: NodeValue::Root,
                span: Span::new(0, source_len),
                parent: None,
                children: Vec::new(),
                removed: false,
            }],
        }
    }

    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    fn push(&mut self, node: Node) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    /// Allocate a content node and link it as the last child of `parent`.
    pub(crate) fn alloc_child(&mut self, parent: NodeId, value: NodeValue, span: Span) -> NodeId {
        let id = self.push(Node {
            value,
            span,
            parent: Some(parent),
            children: Vec::new(),
            removed: false,
        });
        self[parent].children.push(id);
        id
    }

    /// Allocate an attribute or spread node and register it on `element`'s
    /// attribute list.
    pub(crate) fn alloc_attr(&mut self, element: NodeId, value: NodeValue, span: Span) -> NodeId {
        let id = self.push(Node {
            value,
            span,
            parent: Some(element),
            children: Vec::new(),
            removed: false,
        });
        match self[element].value {
            NodeValue::Element(ref mut el) => el.attributes.push(id),
            _ => unreachable!("attributes attach to elements"),
        }
        id
    }

    /// Iterate every allocated node in allocation order.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &Node)> {
        self.nodes
            .iter()
            .enumerate()
            .map(|(ix, node)| (NodeId(ix as u32), node))
    }
}

impl Index<NodeId> for Tree {
    type Output = Node;

    fn index(&self, id: NodeId) -> &Node {
        &self.nodes[id.index()]
    }
}

impl IndexMut<NodeId> for Tree {
    fn index_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.index()]
    }
}
