//! In-place mutation of JSON documents by dotted path.

use envpatch_dot_path::{parse_path, Path, PathError, Segment};
use serde_json::{Map, Value};

use crate::MutateError;

/// Set `value` at `expr` inside `doc`, creating intermediate containers as
/// needed.
///
/// The whole expression is parsed and validated before any write happens, so
/// a malformed path can never leave a partially mutated document.
///
/// # Errors
///
/// - [`MutateError::MalformedPath`] - the expression violates the segment
///   grammar
/// - [`MutateError::InvalidDocument`] - the root is null or a scalar, or a
///   node on the walk cannot host the requested segment kind
///
/// # Example
///
/// ```
/// use envpatch_mutate::set_path;
/// use serde_json::json;
///
/// let mut doc = json!({});
/// set_path(&mut doc, "Nodes[0].Name", json!("node-a")).unwrap();
/// assert_eq!(doc, json!({"Nodes": [{"Name": "node-a"}]}));
/// ```
pub fn set_path(doc: &mut Value, expr: &str, value: Value) -> Result<(), MutateError> {
    let path = parse_path(expr)?;
    set_parsed(doc, &path, value)
}

/// Set `value` at an already-parsed `path` inside `doc`.
///
/// Useful when the same path is applied to many documents; see
/// [`set_path`] for the single-expression form and the error contract.
pub fn set_parsed(doc: &mut Value, path: &Path, value: Value) -> Result<(), MutateError> {
    if !is_container(doc) {
        return Err(MutateError::InvalidDocument);
    }
    let Some((terminal, parents)) = path.split_last() else {
        return Err(PathError::Empty.into());
    };

    let mut cursor = doc;
    for segment in parents {
        cursor = descend(cursor, segment)?;
    }

    match terminal {
        Segment::Field(field) => {
            let map = host_object(cursor)?;
            map.insert(field.clone(), value);
        }
        Segment::Index { field, index } => {
            let map = host_object(cursor)?;
            let slot = map
                .entry(field.clone())
                .or_insert_with(|| Value::Array(Vec::new()));
            let arr = ensure_array(field, slot);
            pad_to(arr, *index);
            arr[*index] = value;
        }
    }
    Ok(())
}

/// Advance the cursor past one non-terminal segment, creating or coercing
/// the intermediate container it names.
fn descend<'a>(cursor: &'a mut Value, segment: &Segment) -> Result<&'a mut Value, MutateError> {
    match segment {
        Segment::Field(field) => {
            let map = host_object(cursor)?;
            let slot = map.entry(field.clone()).or_insert(Value::Null);
            if !is_container(slot) {
                if !slot.is_null() {
                    tracing::debug!(
                        field = %field,
                        "replacing existing non-container value with an object to extend the path"
                    );
                }
                *slot = Value::Object(Map::new());
            }
            Ok(slot)
        }
        Segment::Index { field, index } => {
            let map = host_object(cursor)?;
            let slot = map
                .entry(field.clone())
                .or_insert_with(|| Value::Array(Vec::new()));
            let arr = ensure_array(field, slot);
            pad_to(arr, *index);
            let element = &mut arr[*index];
            if !is_container(element) {
                if !element.is_null() {
                    tracing::debug!(
                        field = %field,
                        index,
                        "replacing existing non-container element with an object to extend the path"
                    );
                }
                *element = Value::Object(Map::new());
            }
            Ok(element)
        }
    }
}

/// The map that hosts the segment's named property.
///
/// Arrays and scalars cannot host named properties; only the root and
/// coerced intermediates ever reach this as non-objects.
fn host_object(cursor: &mut Value) -> Result<&mut Map<String, Value>, MutateError> {
    match cursor {
        Value::Object(map) => Ok(map),
        _ => Err(MutateError::InvalidDocument),
    }
}

/// Make `slot` an array, coercing any existing non-array value.
fn ensure_array<'a>(field: &str, slot: &'a mut Value) -> &'a mut Vec<Value> {
    if !slot.is_array() {
        let prior = slot.take();
        *slot = Value::Array(coerce_elements(field, prior));
    }
    match slot {
        Value::Array(arr) => arr,
        _ => unreachable!("slot was just coerced to an array"),
    }
}

/// Convert a prior value into array elements for index-based access.
///
/// `Null` behaves like a missing property and yields an empty array. Any
/// other non-array value becomes the sole element, so an index write never
/// discards data that was already present.
fn coerce_elements(field: &str, prior: Value) -> Vec<Value> {
    match prior {
        Value::Null => Vec::new(),
        Value::Array(elements) => elements,
        other => {
            tracing::debug!(
                field = %field,
                "coercing existing non-sequence value into a one-element sequence"
            );
            vec![other]
        }
    }
}

/// Grow `arr` with null placeholders until `index` is addressable.
fn pad_to(arr: &mut Vec<Value>, index: usize) {
    while arr.len() <= index {
        arr.push(Value::Null);
    }
}

fn is_container(value: &Value) -> bool {
    matches!(value, Value::Object(_) | Value::Array(_))
}
