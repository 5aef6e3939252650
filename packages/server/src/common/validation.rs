//! Shared input normalisation for admin and publisher forms.

use super::WorkflowError;

/// Trim a required text field and bound its length in characters.
pub fn required_text(field: &str, raw: &str, max_chars: usize) -> Result<String, WorkflowError> {
    let value = raw.trim();
    if value.is_empty() {
        return Err(WorkflowError::validation(format!("{} is required", field)));
    }
    if value.chars().count() > max_chars {
        return Err(WorkflowError::validation(format!(
            "{} must be at most {} characters",
            field, max_chars
        )));
    }
    Ok(value.to_string())
}

/// Trim an optional text field; blank becomes `None`.
pub fn optional_text(
    field: &str,
    raw: Option<String>,
    max_chars: usize,
) -> Result<Option<String>, WorkflowError> {
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => required_text(field, value, max_chars).map(Some),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_text_trims_and_bounds() {
        assert_eq!(required_text("name", "  Dinas Kesehatan ", 50).unwrap(), "Dinas Kesehatan");
        assert!(required_text("name", " ", 50).is_err());
        assert!(required_text("name", "abcdef", 5).is_err());
    }

    #[test]
    fn optional_text_maps_blank_to_none() {
        assert_eq!(optional_text("note", None, 10).unwrap(), None);
        assert_eq!(optional_text("note", Some("   ".into()), 10).unwrap(), None);
        assert_eq!(optional_text("note", Some(" ok ".into()), 10).unwrap(), Some("ok".into()));
        assert!(optional_text("note", Some("x".repeat(11)), 10).is_err());
    }
}
