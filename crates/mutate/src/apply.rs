//! Sequential batch application of path mutations.

use serde_json::Value;

use crate::{set_path, MutateError};

/// Policy for a failing entry within a batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OnError {
    /// Stop at the first failing entry and surface its error.
    Abort,
    /// Log the failing entry and continue with the rest of the batch.
    Skip,
}

/// Apply a batch of `(expression, value)` mutations to `doc` in order.
///
/// Returns the number of mutations applied. With [`OnError::Abort`] the
/// document still reflects every entry that succeeded before the failing
/// one; with [`OnError::Skip`] failing entries are logged at warn level and
/// the rest of the batch proceeds.
///
/// # Example
///
/// ```
/// use envpatch_mutate::{apply, OnError};
/// use serde_json::json;
///
/// let mut doc = json!({});
/// let applied = apply(
///     &mut doc,
///     vec![("Host", json!("db.internal")), ("Port", json!(5432))],
///     OnError::Abort,
/// )
/// .unwrap();
/// assert_eq!(applied, 2);
/// assert_eq!(doc, json!({"Host": "db.internal", "Port": 5432}));
/// ```
pub fn apply<'a, I>(doc: &mut Value, entries: I, on_error: OnError) -> Result<usize, MutateError>
where
    I: IntoIterator<Item = (&'a str, Value)>,
{
    let mut applied = 0;
    for (expr, value) in entries {
        match set_path(doc, expr, value) {
            Ok(()) => applied += 1,
            Err(err) => match on_error {
                OnError::Abort => return Err(err),
                OnError::Skip => {
                    tracing::warn!(path = %expr, error = %err, "skipping entry that failed to apply");
                }
            },
        }
    }
    Ok(applied)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_apply_all_entries() {
        let mut doc = json!({});
        let applied = apply(
            &mut doc,
            vec![("a.b", json!(1)), ("c[0]", json!(2))],
            OnError::Abort,
        )
        .unwrap();
        assert_eq!(applied, 2);
        assert_eq!(doc, json!({"a": {"b": 1}, "c": [2]}));
    }

    #[test]
    fn test_apply_abort_keeps_earlier_entries() {
        let mut doc = json!({});
        let result = apply(
            &mut doc,
            vec![("a", json!(1)), ("bad..path", json!(2)), ("c", json!(3))],
            OnError::Abort,
        );
        assert!(matches!(result, Err(MutateError::MalformedPath(_))));
        assert_eq!(doc, json!({"a": 1}));
    }

    #[test]
    fn test_apply_skip_continues_past_failure() {
        let mut doc = json!({});
        let applied = apply(
            &mut doc,
            vec![("a", json!(1)), ("bad..path", json!(2)), ("c", json!(3))],
            OnError::Skip,
        )
        .unwrap();
        assert_eq!(applied, 2);
        assert_eq!(doc, json!({"a": 1, "c": 3}));
    }
}
