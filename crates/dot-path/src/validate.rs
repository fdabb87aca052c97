//! Validation limits for path expressions.

use crate::parse::PathError;

/// Maximum allowed expression string length.
pub const MAX_EXPRESSION_LENGTH: usize = 1024;

/// Maximum allowed path depth.
pub const MAX_PATH_DEPTH: usize = 256;

/// Validate the gross shape of a path expression string.
///
/// # Errors
///
/// Returns an error if:
/// - The expression is empty
/// - The expression exceeds the maximum length (1024 characters)
///
/// # Example
///
/// ```
/// use envpatch_dot_path::validate_expression;
///
/// validate_expression("foo.bar").unwrap();
/// validate_expression("").unwrap_err();
/// ```
pub fn validate_expression(expr: &str) -> Result<(), PathError> {
    if expr.is_empty() {
        return Err(PathError::Empty);
    }
    if expr.len() > MAX_EXPRESSION_LENGTH {
        return Err(PathError::TooLong);
    }
    Ok(())
}
