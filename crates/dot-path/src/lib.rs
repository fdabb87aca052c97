//! Dotted/indexed path expressions.
//!
//! This crate parses, formats, and validates the path expressions used to
//! address nested values in configuration documents: dotted field access
//! plus single-level numeric array indices, e.g. `Cluster.Nodes[0].Name`.
//!
//! # Example
//!
//! ```
//! use envpatch_dot_path::{parse_path, Segment};
//!
//! let path = parse_path("Cluster.Nodes[0].Name").unwrap();
//! assert_eq!(path.depth(), 3);
//! assert_eq!(path.segments()[0], Segment::Field("Cluster".to_string()));
//! assert_eq!(
//!     path.segments()[1],
//!     Segment::Index { field: "Nodes".to_string(), index: 0 }
//! );
//!
//! // Paths render back to their canonical expression form.
//! assert_eq!(path.to_string(), "Cluster.Nodes[0].Name");
//! ```

mod types;
pub use types::{Path, Segment};

mod parse;
pub use parse::{is_index_token, parse_path, PathError};

mod validate;
pub use validate::{validate_expression, MAX_EXPRESSION_LENGTH, MAX_PATH_DEPTH};
