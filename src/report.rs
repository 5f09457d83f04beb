//! Reply text reporting the outcome of a name change.

use crate::engine::TransformResult;

/// `.@screen update name complete! [name]`, or `failed.` on failure. The
/// attempted name is included either way.
pub fn format_report(screen_name: &str, result: &TransformResult) -> String {
    if result.success {
        format!(".@{} update name complete! [{}]", screen_name, result.new_name)
    } else {
        format!(".@{} update name failed. [{}]", screen_name, result.new_name)
    }
}

/// Reply for a line that is not a usable command.
pub fn format_unsupported(screen_name: &str) -> String {
    format!(".@{} unsupported.", screen_name)
}
