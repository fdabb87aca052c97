//! Read access to JSON documents by dotted path.

use envpatch_dot_path::{parse_path, Path, PathError, Segment};
use serde_json::Value;

/// Get a value from a JSON document by parsed path.
///
/// Pure read: never creates structure. Returns `None` for a missing key,
/// an out-of-range index, or a node of the wrong kind.
pub fn get<'a>(doc: &'a Value, path: &Path) -> Option<&'a Value> {
    let mut current = doc;
    for segment in path.segments() {
        match segment {
            Segment::Field(field) => {
                current = current.as_object()?.get(field)?;
            }
            Segment::Index { field, index } => {
                current = current.as_object()?.get(field)?.as_array()?.get(*index)?;
            }
        }
    }
    Some(current)
}

/// Get a mutable reference to a value in a JSON document by parsed path.
pub fn get_mut<'a>(doc: &'a mut Value, path: &Path) -> Option<&'a mut Value> {
    let mut current = doc;
    for segment in path.segments() {
        match segment {
            Segment::Field(field) => {
                current = current.as_object_mut()?.get_mut(field)?;
            }
            Segment::Index { field, index } => {
                current = current
                    .as_object_mut()?
                    .get_mut(field)?
                    .as_array_mut()?
                    .get_mut(*index)?;
            }
        }
    }
    Some(current)
}

/// Get a value by path expression directly.
///
/// This is a convenience function that parses the expression and reads the
/// value.
///
/// # Example
///
/// ```
/// use envpatch_mutate::get_path;
/// use serde_json::json;
///
/// let doc = json!({"Nodes": [{"Name": "node-a"}]});
/// let val = get_path(&doc, "Nodes[0].Name").unwrap();
/// assert_eq!(val, Some(&json!("node-a")));
///
/// let missing = get_path(&doc, "Nodes[3].Name").unwrap();
/// assert_eq!(missing, None);
/// ```
pub fn get_path<'a>(doc: &'a Value, expr: &str) -> Result<Option<&'a Value>, PathError> {
    Ok(get(doc, &parse_path(expr)?))
}
