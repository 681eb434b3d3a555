//! A JSX test-marker stripper.
//!
//! `jsxstrip` parses a JSX source file, locates test-instrumentation markup
//! (`data-testid` and `data-cy` attributes, conditional spreads that inject
//! a testid, wrapper components that exist only to carry one), removes it,
//! and re-emits text that is byte-identical to the input except for the
//! removed spans and the separators they leave behind.
//!
//! The pipeline per file is Parse → Locate → Policy → Rewrite, wrapped by
//! [`strip_markers`]:
//!
//! ```
//! use jsxstrip::{strip_markers, Options};
//!
//! let options = Options::default();
//! assert_eq!(
//!     strip_markers("<span data-testid=\"x\">{t}</span>", &options).unwrap(),
//!     "<span>{t}</span>",
//! );
//! assert_eq!(strip_markers("<Foo data-testid=\"x\" />", &options).unwrap(), "");
//! ```
//!
//! The transform is a pure function of `(source, options)`: no I/O, no
//! shared state, so files may be processed in parallel by the caller.  The
//! `cli` feature (on by default) builds the `jsxstrip` binary.

pub mod arena;
mod locator;
pub mod nodes;
mod parser;
mod policy;
mod rewriter;
mod strings;
#[cfg(test)]
mod tests;

pub use crate::arena::{Node, NodeId, Tree};
pub use crate::locator::locate_markers;
pub use crate::nodes::LineColumn;
pub use crate::parser::options::DEFAULT_MARKERS;
pub use crate::parser::{parse_source, Mode, Options, ParseError};
pub use crate::policy::apply_policy;
pub use crate::rewriter::rewrite;

/// Strip test markers from one file's source text.
///
/// Returns the transformed text, or the input's [`ParseError`].  Running
/// the result through again is a no-op.
pub fn strip_markers(source: &str, options: &Options) -> Result<String, ParseError> {
    let mut tree = parse_source(source)?;
    let flagged = locate_markers(&tree, options);
    apply_policy(&mut tree, source, &flagged, options);
    Ok(rewrite(source, &tree))
}
