//! Defaults and path utilities for pickline.
//!
//! This module holds the values used when the caller does not override them,
//! and resolves input paths the way a shell would (expanding `~`).

/// Prompt shown before each answer is read
pub const DEFAULT_PROMPT: &str = "Choose one";
/// Separator between the fields of a selectable row
pub const DEFAULT_DELIMITER: &str = "\t";
/// Awk expression applied to the chosen row when none is given
pub const DEFAULT_EXPRESSION: &str = "{print}";
/// Program that evaluates the post-processing expression
pub const DEFAULT_POST_PROCESSOR: &str = "awk";

/// Resolves the input file path.
///
/// Shell expansions like `~` are resolved; everything else is kept as given.
///
/// # Examples
///
/// ```
/// use pickline_core::config::resolve_input_path;
///
/// assert_eq!(resolve_input_path("/etc/fstab"), "/etc/fstab");
/// assert!(!resolve_input_path("~/mounts.tsv").starts_with('~'));
/// ```
pub fn resolve_input_path(path: &str) -> String {
    shellexpand::tilde(path).to_string()
}

/// Turns the common escape spellings of a delimiter into the character itself.
///
/// Typing a literal tab on a command line is awkward, so `\t` (and `tab`)
/// are accepted in its place. Anything else is returned unchanged.
pub fn unescape_delimiter(delimiter: &str) -> String {
    match delimiter {
        "\\t" | "tab" => "\t".to_string(),
        "\\s" | "space" => " ".to_string(),
        other => other.to_string(),
    }
}

/// Options controlling one picking session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickerOptions {
    pub delimiter: String,
    pub prompt: String,
    pub default_answer: Option<String>,
}

impl Default for PickerOptions {
    fn default() -> Self {
        Self {
            delimiter: DEFAULT_DELIMITER.to_string(),
            prompt: DEFAULT_PROMPT.to_string(),
            default_answer: None,
        }
    }
}

impl PickerOptions {
    /// The full prompt text, showing the default answer in brackets when set.
    pub fn prompt_text(&self) -> String {
        match &self.default_answer {
            Some(default) => format!("{} [{}]: ", self.prompt, default),
            None => format!("{}: ", self.prompt),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_input_path_absolute() {
        assert_eq!(resolve_input_path("/tmp/rows.tsv"), "/tmp/rows.tsv");
    }

    #[test]
    fn test_resolve_input_path_with_tilde() {
        let result = resolve_input_path("~/rows.tsv");
        assert!(!result.starts_with('~'));
        assert!(result.ends_with("rows.tsv"));
    }

    #[test]
    fn test_unescape_delimiter() {
        assert_eq!(unescape_delimiter("\\t"), "\t");
        assert_eq!(unescape_delimiter("tab"), "\t");
        assert_eq!(unescape_delimiter("space"), " ");
        assert_eq!(unescape_delimiter(","), ",");
        assert_eq!(unescape_delimiter("::"), "::");
    }

    #[test]
    fn test_default_options() {
        let options = PickerOptions::default();
        assert_eq!(options.delimiter, "\t");
        assert_eq!(options.prompt, "Choose one");
        assert!(options.default_answer.is_none());
    }

    #[test]
    fn test_prompt_text_without_default() {
        let options = PickerOptions::default();
        assert_eq!(options.prompt_text(), "Choose one: ");
    }

    #[test]
    fn test_prompt_text_with_default() {
        let options = PickerOptions {
            default_answer: Some("one".to_string()),
            ..PickerOptions::default()
        };
        assert_eq!(options.prompt_text(), "Choose one [one]: ");
    }
}
