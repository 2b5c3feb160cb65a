/// Sample product descriptions are cut to this many characters in the prompt.
pub const MAX_DESCRIPTION_LENGTH: usize = 200;

/// Truncate to `max` characters plus an ellipsis marker. Counts chars, not
/// bytes, so multi-byte input never splits a UTF-8 boundary.
pub fn truncate_description(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        text.to_string()
    } else {
        let head: String = text.chars().take(max).collect();
        format!("{}...", head)
    }
}
