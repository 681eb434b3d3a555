//! The JSX syntax tree.

use std::fmt;

use smallvec::SmallVec;

use crate::arena::NodeId;

/// The core node enum.
///
/// Every node owns a [`Span`] into the original text; the rewriter copies
/// spans verbatim and never re-derives text from the tree.
#[derive(Debug, Clone)]
pub enum NodeValue {
    /// The root of the file.  Contains top-level `Text` runs of plain
    /// JavaScript interleaved with `Element`s.
    Root,

    /// A JSX element, native (`<span>`) or component (`<Foo>`).  Its tree
    /// children are content nodes; attributes and spreads hang off the
    /// [`NodeElement::attributes`] list.
    Element(NodeElement),

    /// A single attribute in an open tag: `key`, `key="v"`, `key={expr}`.
    Attribute(NodeAttribute),

    /// A spread in an open tag: `{...props}` or the conditional-injection
    /// form `{...(guard && { key: value })}`.
    SpreadAttribute(NodeSpread),

    /// A braced expression in child position: `{buttonText}`.  Nested JSX
    /// inside the braces is parsed as children of this node; everything else
    /// is opaque.
    ExpressionContainer,

    /// A template literal used as an attribute value, e.g.
    /// `` data-testid={`${id}_arrow`} ``.  Allocated as a child of its
    /// `Attribute`; the span covers the backticks.
    TemplateLiteral,

    /// Literal text: JSX children between tags, or plain JavaScript at the
    /// top level.
    Text,

    /// A comment-only expression container: `{/* note */}`.
    Comment,
}

impl NodeValue {
    /// Return a reference to the attribute payload, if this node is one.
    pub fn attribute(&self) -> Option<&NodeAttribute> {
        match *self {
            NodeValue::Attribute(ref a) => Some(a),
            _ => None,
        }
    }
}

/// Whether a tag names a built-in renderable element or a user-defined
/// component.  Derived purely from the first character of the tag name and
/// never changes after creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementKind {
    /// Lowercase-initial tag (`span`, `div`), or a fragment.  Carries
    /// rendering semantics independent of its attributes.
    Native,

    /// Uppercase-initial tag (`Foo`, `Foo.Bar`).
    Component,
}

impl ElementKind {
    pub fn from_name(name: &str) -> ElementKind {
        match name.chars().next() {
            Some(first) if first.is_uppercase() => ElementKind::Component,
            _ => ElementKind::Native,
        }
    }
}

/// The payload of an `Element` node.
#[derive(Debug, Clone)]
pub struct NodeElement {
    /// The tag name; empty for fragments (`<>`).
    pub name: String,

    /// Native or component, per the first character of `name`.
    pub kind: ElementKind,

    /// Whether the element was written `<tag ... />`.
    pub self_closing: bool,

    /// Attribute and spread nodes, in source order.
    pub attributes: SmallVec<[NodeId; 4]>,

    /// The span of the open tag, `<` through `>`, used for separator repair
    /// when attributes are removed.
    pub open_tag: Span,
}

/// An attribute key, tagged so the locator can pattern-match static parts
/// without evaluating expressions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttrKey {
    /// A plain name: `data-testid`, or a string-literal key inside an
    /// injected object.
    Literal(String),

    /// A computed template key with known static affixes, e.g.
    /// `` [`${x}-suffix`] `` has an empty prefix and suffix `-suffix`.
    Template { prefix: String, suffix: String },

    /// A computed key nothing is statically known about.  Never matches.
    Computed,
}

impl AttrKey {
    pub fn as_literal(&self) -> Option<&str> {
        match *self {
            AttrKey::Literal(ref name) => Some(name),
            _ => None,
        }
    }
}

/// The syntactic category of an attribute value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttrValue {
    /// A quoted string: `key="v"` or `key='v'`.
    Literal,

    /// A braced expression: `key={expr}`.
    Expression,

    /// A braced template literal: `` key={`...`} ``.  The attribute node
    /// carries a `TemplateLiteral` child spanning the backticks.
    Template,
}

/// The payload of an `Attribute` node.
#[derive(Debug, Clone)]
pub struct NodeAttribute {
    pub key: AttrKey,

    /// `None` for boolean attributes (`disabled`).
    pub value: Option<AttrValue>,
}

/// The payload of a `SpreadAttribute` node.
#[derive(Debug, Clone)]
pub struct NodeSpread {
    /// `Some` when the spread expression has the conditional-injection shape
    /// `guard && { key: value, ... }`; `None` for plain spreads.
    pub injection: Option<SpreadInjection>,
}

/// The statically-resolved keys of a conditional-injection spread.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpreadInjection {
    pub keys: Vec<AttrKey>,
}

/// A contiguous byte range into the original source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Span {
        Span { start, end }
    }

    /// The original text this span covers.
    pub fn slice<'s>(&self, source: &'s str) -> &'s str {
        &source[self.start..self.end]
    }
}

/// A 1-based line and column position, used for error reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct LineColumn {
    pub line: usize,
    pub column: usize,
}

impl fmt::Display for LineColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Compute the [`LineColumn`] of a byte offset.
pub fn line_column_at(source: &str, offset: usize) -> LineColumn {
    let offset = offset.min(source.len());
    let before = &source[..offset];
    let line_start = before.rfind('\n').map_or(0, |ix| ix + 1);
    LineColumn {
        line: before.matches('\n').count() + 1,
        column: source[line_start..offset].chars().count() + 1,
    }
}
