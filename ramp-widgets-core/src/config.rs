//! Widget text and runtime defaults.

/// Placeholder row shown when an open dropdown has nothing to list.
pub const NO_ITEMS_LABEL: &str = "No items";

/// Appended to the caller's loading label in the loading placeholder row.
pub const LOADING_SUFFIX: &str = "...";

/// Prefix for checkbox input ids and test ids.
pub const CHECKBOX_ID_PREFIX: &str = "RampInputCheckbox-";

/// Level passed to `console_log` at startup.
pub const LOG_LEVEL: log::Level = log::Level::Debug;

/// Text of the loading placeholder row for a given loading label.
pub fn loading_row_text(loading_label: &str) -> String {
    format!("{loading_label}{LOADING_SUFFIX}")
}

/// Element id shared by a checkbox's `<input>` and its `<label for>`.
pub fn checkbox_input_id(id: &str) -> String {
    format!("{CHECKBOX_ID_PREFIX}{id}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loading_row_appends_ellipsis() {
        assert_eq!(loading_row_text("Loading employees"), "Loading employees...");
    }

    #[test]
    fn checkbox_id_is_prefixed() {
        assert_eq!(checkbox_input_id("42"), "RampInputCheckbox-42");
    }
}
