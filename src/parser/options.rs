//! Configuration for the transform pipeline.

/// The marker names recognized when no explicit set is configured.
pub const DEFAULT_MARKERS: [&str; 2] = ["data-testid", "data-cy"];

/// Umbrella options value.  Passed by reference into each pipeline
/// invocation; never read from ambient state, so invocations stay pure and
/// parallel-safe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// Attribute names treated as test markers.
    pub markers: Vec<String>,

    /// What to do with elements once their markers are stripped.
    pub mode: Mode,
}

impl Default for Options {
    fn default() -> Options {
        Options {
            markers: DEFAULT_MARKERS.iter().map(|s| s.to_string()).collect(),
            mode: Mode::default(),
        }
    }
}

impl Options {
    /// Default mode with a replacement marker-name set.
    pub fn with_markers<I, S>(markers: I) -> Options
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Options {
            markers: markers.into_iter().map(Into::into).collect(),
            ..Options::default()
        }
    }
}

/// How far removal goes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Mode {
    /// Strip marker attributes and spreads only.
    StripAttributes,

    /// Additionally delete component elements that end up with no
    /// attributes and no children; they existed only to carry the marker.
    /// Native elements are never deleted.
    #[default]
    EliminateEmptyComponents,
}
