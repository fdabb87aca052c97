//! In-place mutation of JSON documents by dotted/indexed path.
//!
//! This crate implements the nested-property mutation engine used to patch
//! JSON configuration templates: given a document, a path expression like
//! `Cluster.Nodes[0].Name`, and a value, it walks the path segment by
//! segment, creates missing intermediate containers (objects for field
//! segments, arrays for indexed segments), and assigns the value at the
//! terminal segment.
//!
//! The document is a plain [`serde_json::Value`]; a single polymorphic tree
//! node covers objects, arrays, and scalars, so no host-representation
//! branching is needed. Mutation happens in place through a mutable cursor
//! threaded along the walk; the mutator holds no locks and keeps no state
//! between calls, so a caller with exclusive access to the document can
//! apply a batch of sequential mutations and then hand the tree to its
//! serializer.
//!
//! # Example
//!
//! ```
//! use envpatch_mutate::set_path;
//! use serde_json::json;
//!
//! let mut doc = json!({"Database": {"Host": "localhost"}});
//!
//! set_path(&mut doc, "Database.Host", json!("db.prod.internal")).unwrap();
//! set_path(&mut doc, "Nodes[1].Name", json!("node-b")).unwrap();
//!
//! assert_eq!(doc, json!({
//!     "Database": {"Host": "db.prod.internal"},
//!     "Nodes": [null, {"Name": "node-b"}]
//! }));
//! ```

use envpatch_dot_path::PathError;
use thiserror::Error;

mod set;
pub use set::{set_parsed, set_path};

mod get;
pub use get::{get, get_mut, get_path};

mod apply;
pub use apply::{apply, OnError};

// Re-export the path grammar so callers need only one crate.
pub use envpatch_dot_path::{parse_path, Path, Segment};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MutateError {
    /// The path expression violates the segment grammar. Raised before any
    /// write, so the document is never left partially mutated.
    #[error(transparent)]
    MalformedPath(#[from] PathError),
    /// The root is null or a scalar, or a node on the walk cannot host the
    /// requested segment kind (e.g. a named property on an array).
    #[error("Document node cannot host the requested segment")]
    InvalidDocument,
}
