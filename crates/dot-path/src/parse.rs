//! Parser for dotted path expressions.

use crate::types::{Path, Segment};
use crate::validate::{validate_expression, MAX_PATH_DEPTH};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PathError {
    #[error("Empty path expression")]
    Empty,
    #[error("Empty segment at position {position}")]
    EmptySegment { position: usize },
    #[error("Invalid array index in segment '{segment}'")]
    InvalidIndex { segment: String },
    #[error("Unexpected bracket in segment '{segment}'")]
    UnexpectedBracket { segment: String },
    #[error("Characters after closing bracket in segment '{segment}'")]
    TrailingCharacters { segment: String },
    #[error("Path expression too long")]
    TooLong,
    #[error("Path too deep")]
    TooDeep,
}

/// Parse a dotted path expression into a [`Path`].
///
/// The expression is `seg1.seg2.seg3...`, where each segment is either a
/// bare field name (`name`) or a field name with a single numeric index
/// (`name[3]`). Field names may contain anything except `.`, `[`, and `]`.
///
/// The whole expression is validated before a path is produced, so callers
/// can rely on a returned error meaning nothing was consumed.
///
/// # Example
///
/// ```
/// use envpatch_dot_path::{parse_path, Segment};
///
/// let path = parse_path("Nodes[0].Name").unwrap();
/// assert_eq!(path.segments().len(), 2);
/// assert_eq!(path.segments()[0], Segment::Index { field: "Nodes".to_string(), index: 0 });
/// assert_eq!(path.segments()[1], Segment::Field("Name".to_string()));
///
/// assert!(parse_path("a..b").is_err());
/// assert!(parse_path("a[x]").is_err());
/// ```
pub fn parse_path(expr: &str) -> Result<Path, PathError> {
    validate_expression(expr)?;

    let mut segments = Vec::new();
    for (position, raw) in expr.split('.').enumerate() {
        if raw.is_empty() {
            return Err(PathError::EmptySegment { position });
        }
        segments.push(parse_segment(position, raw)?);
    }
    if segments.len() > MAX_PATH_DEPTH {
        return Err(PathError::TooDeep);
    }
    Ok(Path::new(segments))
}

fn parse_segment(position: usize, raw: &str) -> Result<Segment, PathError> {
    let Some(open) = raw.find('[') else {
        if raw.contains(']') {
            return Err(PathError::UnexpectedBracket { segment: raw.to_string() });
        }
        return Ok(Segment::Field(raw.to_string()));
    };

    let field = &raw[..open];
    if field.is_empty() {
        return Err(PathError::EmptySegment { position });
    }
    if field.contains(']') {
        return Err(PathError::UnexpectedBracket { segment: raw.to_string() });
    }

    let rest = &raw[open + 1..];
    let Some(close) = rest.find(']') else {
        // Unclosed bracket
        return Err(PathError::UnexpectedBracket { segment: raw.to_string() });
    };
    if close != rest.len() - 1 {
        return Err(PathError::TrailingCharacters { segment: raw.to_string() });
    }

    let token = &rest[..close];
    if !is_index_token(token) {
        return Err(PathError::InvalidIndex { segment: raw.to_string() });
    }
    let index: usize = token
        .parse()
        .map_err(|_| PathError::InvalidIndex { segment: raw.to_string() })?;

    Ok(Segment::Index { field: field.to_string(), index })
}

/// Check if a string is a valid index token: one or more ASCII digits.
///
/// Leading zeros are accepted; a sign or any other character is not.
pub fn is_index_token(token: &str) -> bool {
    if token.is_empty() {
        return false;
    }
    token.bytes().all(|b| b.is_ascii_digit())
}
