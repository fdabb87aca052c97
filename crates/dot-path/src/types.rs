//! Types for dotted path expressions.

use std::fmt;

/// A single component of a dotted path expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Field selector for map key access: `name`
    Field(String),
    /// Indexed selector for sequence element access: `name[3]`
    Index { field: String, index: usize },
}

impl Segment {
    /// The map key this segment attaches to.
    pub fn field(&self) -> &str {
        match self {
            Segment::Field(field) => field,
            Segment::Index { field, .. } => field,
        }
    }

    /// The sequence position, if this is an indexed segment.
    pub fn index(&self) -> Option<usize> {
        match self {
            Segment::Field(_) => None,
            Segment::Index { index, .. } => Some(*index),
        }
    }

    /// Check if this segment addresses a sequence element.
    pub fn is_indexed(&self) -> bool {
        matches!(self, Segment::Index { .. })
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Segment::Field(field) => f.write_str(field),
            Segment::Index { field, index } => write!(f, "{}[{}]", field, index),
        }
    }
}

/// A parsed dotted path expression.
///
/// Always holds at least one segment; [`parse_path`](crate::parse_path)
/// rejects empty expressions, so consumers never observe an empty path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Path {
    segments: Vec<Segment>,
}

impl Path {
    pub(crate) fn new(segments: Vec<Segment>) -> Self {
        Self { segments }
    }

    /// The segments of this path, in order.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Number of segments.
    pub fn depth(&self) -> usize {
        self.segments.len()
    }

    /// The terminal segment together with the leading segments.
    pub fn split_last(&self) -> Option<(&Segment, &[Segment])> {
        self.segments.split_last()
    }
}

impl fmt::Display for Path {
    /// Renders the canonical expression form, e.g. `a.b[3].c`.
    ///
    /// Indices are re-rendered without leading zeros.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            write!(f, "{}", segment)?;
        }
        Ok(())
    }
}
