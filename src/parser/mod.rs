//! The JSX scanner.
//!
//! A single byte-oriented pass builds the arena tree.  Plain JavaScript
//! around and between elements is kept as opaque `Text` spans; string
//! literals, template literals and comments are skipped so their contents
//! never masquerade as markup.  No text is normalized here: every span
//! reproduces the original bytes exactly.

pub mod options;

use std::error::Error;
use std::fmt;

use smallvec::SmallVec;

use crate::arena::{NodeId, Tree};
use crate::nodes::{
    line_column_at, AttrKey, AttrValue, ElementKind, LineColumn, NodeAttribute, NodeElement,
    NodeSpread, NodeValue, Span, SpreadInjection,
};
use crate::strings::{is_attr_name_byte, is_ident_byte, is_ident_start, is_space, is_tag_name_byte};

pub use crate::parser::options::{Mode, Options};

// Contrived nesting this deep is more likely hostile input than a real
// component tree.
const MAX_NESTING_DEPTH: usize = 512;

/// Tokens after which a `<` can begin a JSX element rather than a
/// comparison.
const EXPR_KEYWORDS: [&str; 10] = [
    "return", "case", "do", "else", "typeof", "yield", "await", "in", "of", "default",
];

/// Parse one file's source text into a span-annotated tree.
pub fn parse_source(source: &str) -> Result<Tree, ParseError> {
    Parser::new(source).parse()
}

/// Unparseable syntax; fatal for the file.  No partial output is emitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    pub message: String,
    pub position: LineColumn,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "parse error at {}: {}", self.position, self.message)
    }
}

impl Error for ParseError {}

struct Parser<'s> {
    source: &'s str,
    bytes: &'s [u8],
    pos: usize,
    depth: usize,
    tree: Tree,
}

impl<'s> Parser<'s> {
    fn new(source: &'s str) -> Parser<'s> {
        Parser {
            source,
            bytes: source.as_bytes(),
            pos: 0,
            depth: 0,
            tree: Tree::new(source.len()),
        }
    }

    fn parse(mut self) -> Result<Tree, ParseError> {
        let root = self.tree.root();
        let mut text_start = 0;
        while self.pos < self.bytes.len() {
            match self.bytes[self.pos] {
                b'\'' | b'"' => self.skip_string()?,
                b'`' => self.skip_template()?,
                b'/' if self.peek(1) == Some(b'/') => self.skip_line_comment(),
                b'/' if self.peek(1) == Some(b'*') => self.skip_block_comment(),
                b'/' if prev_allows_expr(self.bytes, self.pos) => self.skip_regex()?,
                b'<' if self.jsx_can_start() => {
                    self.flush_text(root, text_start, self.pos);
                    self.parse_element(root)?;
                    text_start = self.pos;
                }
                _ => self.pos += 1,
            }
        }
        self.flush_text(root, text_start, self.pos);
        Ok(self.tree)
    }

    fn peek(&self, offset: usize) -> Option<u8> {
        self.bytes.get(self.pos + offset).copied()
    }

    fn err_at(&self, message: impl Into<String>, at: usize) -> ParseError {
        ParseError {
            message: message.into(),
            position: line_column_at(self.source, at),
        }
    }

    fn flush_text(&mut self, parent: NodeId, start: usize, end: usize) {
        if end > start {
            self.tree
                .alloc_child(parent, NodeValue::Text, Span::new(start, end));
        }
    }

    /// At a `<`: does a JSX element start here?  Requires an identifier
    /// start or `>` (fragment) next, and a preceding token that permits an
    /// expression, so `a < b` stays untouched.
    fn jsx_can_start(&self) -> bool {
        match self.peek(1) {
            Some(b) if is_ident_start(b) || b == b'>' => prev_allows_expr(self.bytes, self.pos),
            _ => false,
        }
    }

    fn parse_element(&mut self, parent: NodeId) -> Result<NodeId, ParseError> {
        let start = self.pos;
        self.depth += 1;
        if self.depth > MAX_NESTING_DEPTH {
            return Err(self.err_at("element nesting too deep", start));
        }
        self.pos += 1;
        let name_start = self.pos;
        while self.pos < self.bytes.len() && is_tag_name_byte(self.bytes[self.pos]) {
            self.pos += 1;
        }
        let name = self.source[name_start..self.pos].to_string();
        let kind = ElementKind::from_name(&name);
        let id = self.tree.alloc_child(
            parent,
            NodeValue::Element(NodeElement {
                name: name.clone(),
                kind,
                self_closing: false,
                attributes: SmallVec::new(),
                open_tag: Span::new(start, start),
            }),
            Span::new(start, start),
        );

        loop {
            self.skip_tag_trivia();
            match self.peek(0) {
                None => {
                    return Err(self.err_at(format!("unexpected end of input in `<{name}>`"), start))
                }
                Some(b'>') => {
                    self.pos += 1;
                    break;
                }
                Some(b'/') if self.peek(1) == Some(b'>') => {
                    self.pos += 2;
                    let span = Span::new(start, self.pos);
                    let node = &mut self.tree[id];
                    node.span = span;
                    if let NodeValue::Element(ref mut el) = node.value {
                        el.self_closing = true;
                        el.open_tag = span;
                    }
                    self.depth -= 1;
                    return Ok(id);
                }
                Some(b'{') => self.parse_spread(id)?,
                Some(b) if is_ident_start(b) => self.parse_attribute(id)?,
                Some(b) => {
                    return Err(
                        self.err_at(format!("unexpected `{}` in `<{name}>`", b as char), self.pos)
                    )
                }
            }
        }
        let open_tag = Span::new(start, self.pos);
        if let NodeValue::Element(ref mut el) = self.tree[id].value {
            el.open_tag = open_tag;
        }

        let mut text_start = self.pos;
        loop {
            match self.peek(0) {
                None => return Err(self.err_at(format!("unclosed element `<{name}>`"), start)),
                Some(b'<') if self.peek(1) == Some(b'/') => {
                    self.flush_text(id, text_start, self.pos);
                    let close_start = self.pos;
                    self.pos += 2;
                    let cn_start = self.pos;
                    while self.pos < self.bytes.len() && is_tag_name_byte(self.bytes[self.pos]) {
                        self.pos += 1;
                    }
                    let close_name = &self.source[cn_start..self.pos];
                    if close_name != name {
                        return Err(self.err_at(
                            format!("mismatched closing tag `</{close_name}>` for `<{name}>`"),
                            close_start,
                        ));
                    }
                    self.skip_ws();
                    if self.peek(0) != Some(b'>') {
                        return Err(self.err_at("expected `>` to end closing tag", self.pos));
                    }
                    self.pos += 1;
                    self.tree[id].span = Span::new(start, self.pos);
                    self.depth -= 1;
                    return Ok(id);
                }
                Some(b'<') if self.peek(1).map_or(false, |b| is_ident_start(b) || b == b'>') => {
                    self.flush_text(id, text_start, self.pos);
                    self.parse_element(id)?;
                    text_start = self.pos;
                }
                Some(b'{') => {
                    self.flush_text(id, text_start, self.pos);
                    self.parse_expression_container(id)?;
                    text_start = self.pos;
                }
                _ => self.pos += 1,
            }
        }
    }

    fn parse_attribute(&mut self, element: NodeId) -> Result<(), ParseError> {
        let start = self.pos;
        while self.pos < self.bytes.len() && is_attr_name_byte(self.bytes[self.pos]) {
            self.pos += 1;
        }
        let name = self.source[start..self.pos].to_string();
        let name_end = self.pos;

        // Allocated before the value scan so JSX nested in a braced value
        // (`render={<span .../>}`) can attach as children of the attribute.
        let attr = self.tree.alloc_attr(
            element,
            NodeValue::Attribute(NodeAttribute {
                key: AttrKey::Literal(name),
                value: None,
            }),
            Span::new(start, name_end),
        );

        let mut probe = self.pos;
        while probe < self.bytes.len() && is_space(self.bytes[probe]) {
            probe += 1;
        }
        if self.bytes.get(probe) != Some(&b'=') {
            self.pos = name_end;
            return Ok(());
        }
        self.pos = probe + 1;
        self.skip_ws();
        let value = match self.peek(0) {
            Some(b'"') | Some(b'\'') => {
                self.skip_string()?;
                AttrValue::Literal
            }
            Some(b'{') => {
                let vstart = self.pos;
                self.scan_braces_into(attr)?;
                match self.template_value_span(vstart + 1, self.pos - 1) {
                    Some(span) => {
                        self.tree.alloc_child(attr, NodeValue::TemplateLiteral, span);
                        AttrValue::Template
                    }
                    None => AttrValue::Expression,
                }
            }
            _ => return Err(self.err_at("expected attribute value after `=`", self.pos)),
        };
        let node = &mut self.tree[attr];
        node.span = Span::new(start, self.pos);
        if let NodeValue::Attribute(ref mut a) = node.value {
            a.value = Some(value);
        }
        Ok(())
    }

    /// A braced attribute value whose whole content is one template literal.
    fn template_value_span(&self, inner_start: usize, inner_end: usize) -> Option<Span> {
        let mut a = inner_start;
        while a < inner_end && is_space(self.bytes[a]) {
            a += 1;
        }
        let mut b = inner_end;
        while b > a && is_space(self.bytes[b - 1]) {
            b -= 1;
        }
        if a >= b || self.bytes[a] != b'`' {
            return None;
        }
        let mut pos = a;
        if skip_template_at(self.bytes, &mut pos).is_err() || pos != b {
            return None;
        }
        Some(Span::new(a, b))
    }

    fn parse_spread(&mut self, element: NodeId) -> Result<(), ParseError> {
        let start = self.pos;
        self.pos += 1;
        self.skip_tag_trivia();
        if !self.bytes[self.pos..].starts_with(b"...") {
            return Err(self.err_at("expected `...` in spread attribute", self.pos));
        }
        self.pos += 3;
        let expr_start = self.pos;

        let mut pos = start;
        skip_balanced_at(self.bytes, &mut pos, b'{', b'}')
            .map_err(|at| self.err_at("unbalanced braces in spread attribute", at))?;
        self.pos = pos;

        let injection = parse_injection(&self.source[expr_start..pos - 1]);
        self.tree.alloc_attr(
            element,
            NodeValue::SpreadAttribute(NodeSpread { injection }),
            Span::new(start, self.pos),
        );
        Ok(())
    }

    fn parse_expression_container(&mut self, parent: NodeId) -> Result<NodeId, ParseError> {
        let start = self.pos;
        let id = self
            .tree
            .alloc_child(parent, NodeValue::ExpressionContainer, Span::new(start, start));
        self.scan_braces_into(id)?;
        self.tree[id].span = Span::new(start, self.pos);

        let inner = self.source[start + 1..self.pos - 1].trim();
        if self.tree[id].children.is_empty()
            && inner.len() >= 4
            && inner.starts_with("/*")
            && inner.ends_with("*/")
            && !inner[2..inner.len() - 2].contains("*/")
        {
            self.tree[id].value = NodeValue::Comment;
        }
        Ok(id)
    }

    /// Scan a balanced `{ ... }` starting at the current position, parsing
    /// any nested JSX as children of `parent`.  Leaves the cursor just past
    /// the closing brace.
    fn scan_braces_into(&mut self, parent: NodeId) -> Result<(), ParseError> {
        let start = self.pos;
        self.pos += 1;
        let mut depth = 1usize;
        loop {
            match self.peek(0) {
                None => return Err(self.err_at("unbalanced `{` in expression", start)),
                Some(b'{') => {
                    depth += 1;
                    self.pos += 1;
                }
                Some(b'}') => {
                    depth -= 1;
                    self.pos += 1;
                    if depth == 0 {
                        return Ok(());
                    }
                }
                Some(b'\'') | Some(b'"') => self.skip_string()?,
                Some(b'`') => self.skip_template()?,
                Some(b'/') if self.peek(1) == Some(b'/') => self.skip_line_comment(),
                Some(b'/') if self.peek(1) == Some(b'*') => self.skip_block_comment(),
                Some(b'/') if prev_allows_expr(self.bytes, self.pos) => self.skip_regex()?,
                Some(b'<') if self.jsx_can_start() => {
                    self.parse_element(parent)?;
                }
                _ => self.pos += 1,
            }
        }
    }

    fn skip_ws(&mut self) {
        while self.pos < self.bytes.len() && is_space(self.bytes[self.pos]) {
            self.pos += 1;
        }
    }

    /// Whitespace and comments between attributes.
    fn skip_tag_trivia(&mut self) {
        loop {
            self.skip_ws();
            match (self.peek(0), self.peek(1)) {
                (Some(b'/'), Some(b'/')) => self.skip_line_comment(),
                (Some(b'/'), Some(b'*')) => self.skip_block_comment(),
                _ => return,
            }
        }
    }

    fn skip_line_comment(&mut self) {
        while self.pos < self.bytes.len() && self.bytes[self.pos] != b'\n' {
            self.pos += 1;
        }
    }

    fn skip_block_comment(&mut self) {
        self.pos += 2;
        while self.pos < self.bytes.len() {
            if self.bytes[self.pos] == b'*' && self.peek(1) == Some(b'/') {
                self.pos += 2;
                return;
            }
            self.pos += 1;
        }
    }

    fn skip_string(&mut self) -> Result<(), ParseError> {
        let mut pos = self.pos;
        skip_string_at(self.bytes, &mut pos)
            .map_err(|at| self.err_at("unterminated string literal", at))?;
        self.pos = pos;
        Ok(())
    }

    fn skip_template(&mut self) -> Result<(), ParseError> {
        let mut pos = self.pos;
        skip_template_at(self.bytes, &mut pos)
            .map_err(|at| self.err_at("unterminated template literal", at))?;
        self.pos = pos;
        Ok(())
    }

    fn skip_regex(&mut self) -> Result<(), ParseError> {
        let mut pos = self.pos;
        skip_regex_at(self.bytes, &mut pos)
            .map_err(|at| self.err_at("unterminated regex literal", at))?;
        self.pos = pos;
        Ok(())
    }
}

/// Scan backwards from `pos` for the last significant token.  JSX and regex
/// literals may start only where an expression may start; elsewhere `<` is a
/// comparison and `/` is division.
fn prev_allows_expr(bytes: &[u8], pos: usize) -> bool {
    let mut i = pos;
    while i > 0 && is_space(bytes[i - 1]) {
        i -= 1;
    }
    if i == 0 {
        return true;
    }
    let c = bytes[i - 1];
    match c {
        b'(' | b',' | b'=' | b':' | b'?' | b'&' | b'|' | b'!' | b'{' | b'[' | b';' => true,
        b'>' => i >= 2 && bytes[i - 2] == b'=',
        _ if is_ident_byte(c) => {
            let end = i;
            while i > 0 && is_ident_byte(bytes[i - 1]) {
                i -= 1;
            }
            if i > 0 && bytes[i - 1] == b'.' {
                return false;
            }
            let word = &bytes[i..end];
            EXPR_KEYWORDS.iter().any(|kw| kw.as_bytes() == word)
        }
        _ => false,
    }
}

/// Skip a quoted string starting at `*pos`.  `Err` carries the start offset
/// of the unterminated literal.
fn skip_string_at(bytes: &[u8], pos: &mut usize) -> Result<(), usize> {
    let start = *pos;
    let quote = bytes[start];
    *pos += 1;
    while *pos < bytes.len() {
        match bytes[*pos] {
            b'\\' => *pos += 2,
            b if b == quote => {
                *pos += 1;
                return Ok(());
            }
            _ => *pos += 1,
        }
    }
    Err(start)
}

/// Skip a template literal starting at `*pos`, including nested `${ ... }`
/// interpolations.
fn skip_template_at(bytes: &[u8], pos: &mut usize) -> Result<(), usize> {
    let start = *pos;
    *pos += 1;
    while *pos < bytes.len() {
        match bytes[*pos] {
            b'\\' => *pos += 2,
            b'`' => {
                *pos += 1;
                return Ok(());
            }
            b'$' if bytes.get(*pos + 1) == Some(&b'{') => {
                *pos += 1;
                skip_balanced_at(bytes, pos, b'{', b'}')?;
            }
            _ => *pos += 1,
        }
    }
    Err(start)
}

/// Skip a regex literal starting at `*pos`, including any trailing flags.
/// Inside a character class `/` is literal.  `Err` carries the start offset.
fn skip_regex_at(bytes: &[u8], pos: &mut usize) -> Result<(), usize> {
    let start = *pos;
    *pos += 1;
    let mut in_class = false;
    while *pos < bytes.len() {
        match bytes[*pos] {
            b'\\' => *pos += 2,
            b'\n' => return Err(start),
            b'[' => {
                in_class = true;
                *pos += 1;
            }
            b']' => {
                in_class = false;
                *pos += 1;
            }
            b'/' if !in_class => {
                *pos += 1;
                while *pos < bytes.len() && is_ident_byte(bytes[*pos]) {
                    *pos += 1;
                }
                return Ok(());
            }
            _ => *pos += 1,
        }
    }
    Err(start)
}

/// Skip a balanced `open`..`close` region starting at `*pos`, skipping
/// strings, templates, comments and regex literals along the way.
fn skip_balanced_at(bytes: &[u8], pos: &mut usize, open: u8, close: u8) -> Result<(), usize> {
    let start = *pos;
    let mut depth = 0usize;
    while *pos < bytes.len() {
        let b = bytes[*pos];
        if b == open {
            depth += 1;
            *pos += 1;
        } else if b == close {
            depth = depth.checked_sub(1).ok_or(start)?;
            *pos += 1;
            if depth == 0 {
                return Ok(());
            }
        } else if b == b'\'' || b == b'"' {
            skip_string_at(bytes, pos)?;
        } else if b == b'`' {
            skip_template_at(bytes, pos)?;
        } else if b == b'/' && bytes.get(*pos + 1) == Some(&b'/') {
            while *pos < bytes.len() && bytes[*pos] != b'\n' {
                *pos += 1;
            }
        } else if b == b'/' && bytes.get(*pos + 1) == Some(&b'*') {
            *pos += 2;
            while *pos < bytes.len() {
                if bytes[*pos] == b'*' && bytes.get(*pos + 1) == Some(&b'/') {
                    *pos += 2;
                    break;
                }
                *pos += 1;
            }
        } else if b == b'/' && prev_allows_expr(bytes, *pos) {
            skip_regex_at(bytes, pos)?;
        } else {
            *pos += 1;
        }
    }
    Err(start)
}

/// Recognize the conditional-injection shape `guard && { key: value, ... }`
/// in a spread expression, with or without surrounding parens.  Anything
/// that does not statically match yields `None` and the spread is left
/// alone.
fn parse_injection(expr: &str) -> Option<SpreadInjection> {
    let expr = strip_parens(expr);
    let (guard, object) = split_guard(expr)?;
    if guard.trim().is_empty() {
        return None;
    }
    let object = strip_parens(object);
    if !object.starts_with('{') || !object.ends_with('}') {
        return None;
    }
    let bytes = object.as_bytes();
    let mut pos = 0;
    skip_balanced_at(bytes, &mut pos, b'{', b'}').ok()?;
    if pos != bytes.len() {
        return None;
    }
    let keys = parse_object_keys(&object[1..object.len() - 1])?;
    if keys.is_empty() {
        None
    } else {
        Some(SpreadInjection { keys })
    }
}

/// Peel fully-enclosing parens: `(a && { ... })` -> `a && { ... }`.
fn strip_parens(mut s: &str) -> &str {
    loop {
        let t = s.trim();
        if t.len() >= 2 && t.starts_with('(') {
            let bytes = t.as_bytes();
            let mut pos = 0;
            if skip_balanced_at(bytes, &mut pos, b'(', b')').is_ok() && pos == t.len() {
                s = &t[1..t.len() - 1];
                continue;
            }
        }
        return t;
    }
}

/// Split at the first top-level `&&`.
fn split_guard(s: &str) -> Option<(&str, &str)> {
    let bytes = s.as_bytes();
    let mut pos = 0;
    let mut depth = 0usize;
    while pos < bytes.len() {
        match bytes[pos] {
            b'(' | b'{' | b'[' => {
                depth += 1;
                pos += 1;
            }
            b')' | b'}' | b']' => {
                depth = depth.checked_sub(1)?;
                pos += 1;
            }
            b'\'' | b'"' => skip_string_at(bytes, &mut pos).ok()?,
            b'`' => skip_template_at(bytes, &mut pos).ok()?,
            b'&' if depth == 0 && bytes.get(pos + 1) == Some(&b'&') => {
                return Some((&s[..pos], &s[pos + 2..]));
            }
            _ => pos += 1,
        }
    }
    None
}

/// Split an object-literal body at top-level commas.
fn split_entries(s: &str) -> Option<Vec<&str>> {
    let bytes = s.as_bytes();
    let mut entries = Vec::new();
    let mut entry_start = 0;
    let mut pos = 0;
    let mut depth = 0usize;
    while pos < bytes.len() {
        match bytes[pos] {
            b'(' | b'{' | b'[' => {
                depth += 1;
                pos += 1;
            }
            b')' | b'}' | b']' => {
                depth = depth.checked_sub(1)?;
                pos += 1;
            }
            b'\'' | b'"' => skip_string_at(bytes, &mut pos).ok()?,
            b'`' => skip_template_at(bytes, &mut pos).ok()?,
            b',' if depth == 0 => {
                entries.push(&s[entry_start..pos]);
                pos += 1;
                entry_start = pos;
            }
            _ => pos += 1,
        }
    }
    entries.push(&s[entry_start..]);
    Some(entries)
}

fn parse_object_keys(body: &str) -> Option<Vec<AttrKey>> {
    let mut keys = Vec::new();
    for entry in split_entries(body)? {
        let entry = entry.trim();
        if entry.is_empty() {
            continue;
        }
        if entry.starts_with("...") {
            keys.push(AttrKey::Computed);
            continue;
        }
        keys.push(parse_key(entry_key(entry)));
    }
    Some(keys)
}

/// The text before the first top-level `:` of an object entry, or the whole
/// entry for shorthand properties.
fn entry_key(entry: &str) -> &str {
    let bytes = entry.as_bytes();
    let mut pos = 0;
    let mut depth = 0usize;
    while pos < bytes.len() {
        match bytes[pos] {
            b'(' | b'{' | b'[' => {
                depth += 1;
                pos += 1;
            }
            b')' | b'}' | b']' => {
                depth = depth.saturating_sub(1);
                pos += 1;
            }
            b'\'' | b'"' => {
                if skip_string_at(bytes, &mut pos).is_err() {
                    return entry;
                }
            }
            b'`' => {
                if skip_template_at(bytes, &mut pos).is_err() {
                    return entry;
                }
            }
            b':' if depth == 0 => return &entry[..pos],
            _ => pos += 1,
        }
    }
    entry
}

fn parse_key(key: &str) -> AttrKey {
    let key = key.trim();
    let bytes = key.as_bytes();
    match bytes.first() {
        Some(&q) if q == b'\'' || q == b'"' => string_literal_key(key, q as char),
        Some(b'[') if key.ends_with(']') => {
            let inner = key[1..key.len() - 1].trim();
            match inner.as_bytes().first() {
                Some(&q) if q == b'\'' || q == b'"' => string_literal_key(inner, q as char),
                Some(b'`') => template_key(inner),
                _ => AttrKey::Computed,
            }
        }
        Some(&b) if is_ident_start(b) && bytes.iter().all(|&b| is_ident_byte(b)) => {
            AttrKey::Literal(key.to_string())
        }
        _ => AttrKey::Computed,
    }
}

fn string_literal_key(key: &str, quote: char) -> AttrKey {
    if key.len() < 2 || !key.ends_with(quote) {
        return AttrKey::Computed;
    }
    let inner = &key[1..key.len() - 1];
    if inner.contains(quote) || inner.contains('\\') {
        return AttrKey::Computed;
    }
    AttrKey::Literal(inner.to_string())
}

/// A template-literal key.  The static prefix and suffix around the
/// interpolations are kept for matching; escapes are not decoded.
fn template_key(t: &str) -> AttrKey {
    let bytes = t.as_bytes();
    if bytes.len() < 2 || bytes[bytes.len() - 1] != b'`' {
        return AttrKey::Computed;
    }
    let inner_end = bytes.len() - 1;
    let mut first_interp = None;
    let mut last_interp_end = 1;
    let mut pos = 1;
    while pos < inner_end {
        match bytes[pos] {
            b'\\' | b'`' => return AttrKey::Computed,
            b'$' if bytes.get(pos + 1) == Some(&b'{') => {
                if first_interp.is_none() {
                    first_interp = Some(pos);
                }
                pos += 1;
                if skip_balanced_at(bytes, &mut pos, b'{', b'}').is_err() {
                    return AttrKey::Computed;
                }
                last_interp_end = pos;
            }
            _ => pos += 1,
        }
    }
    match first_interp {
        None => AttrKey::Literal(t[1..inner_end].to_string()),
        Some(fi) => AttrKey::Template {
            prefix: t[1..fi].to_string(),
            suffix: t[last_interp_end..inner_end].to_string(),
        },
    }
}
