use std::fmt;
use std::sync::Arc;

/// Represents a location in script source
///
/// Attached to every node at parse time and carried unchanged into IR nodes
/// and diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Location {
    /// Name of the script the node came from
    pub source: Arc<str>,
    /// Line number (1-indexed)
    pub line: usize,
    /// Column number (1-indexed)
    pub column: usize,
    /// Byte offset from start of the script
    pub offset: usize,
}

impl Location {
    /// Create a new location
    pub fn new(source: impl Into<Arc<str>>, line: usize, column: usize, offset: usize) -> Self {
        Self {
            source: source.into(),
            line,
            column,
            offset,
        }
    }

    /// Create a location at the start of a script
    pub fn start(source: impl Into<Arc<str>>) -> Self {
        Self::new(source, 1, 1, 0)
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.source, self.line, self.column)
    }
}
