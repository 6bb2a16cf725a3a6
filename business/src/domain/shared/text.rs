/// Normalizes optional free-text input: trims whitespace and maps blank
/// strings to `None`, so "" and "   " never get persisted as values.
pub fn normalize_optional(value: Option<String>) -> Option<String> {
    value.and_then(|v| {
        let trimmed = v.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}
