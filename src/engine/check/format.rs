use crate::domain::error::ValidationError;

/// Separator used by [`format_errors`].
pub const DEFAULT_SEPARATOR: &str = "\n";

/// Joins every discrepancy message, in order, one per line.
pub fn format_errors(error: &ValidationError) -> String {
    format_errors_with(error, DEFAULT_SEPARATOR)
}

/// Joins every discrepancy message, in order, with `separator`.
pub fn format_errors_with(error: &ValidationError, separator: &str) -> String {
    error.messages().join(separator)
}
