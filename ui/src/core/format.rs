//! Formatting helpers for presenting steps.

/// Creator names are cut to this many characters while a card is collapsed.
pub const CREATOR_PREVIEW_CHARS: usize = 8;

/// Shown when a record carries no creator.
pub const ANONYMOUS_CREATOR: &str = "anonymous";

/// The CLI invocation copied by the "Use Step" button.
pub fn use_step_command(step_id: &str) -> String {
    format!("lychee use_step {step_id}")
}

pub fn flow_label(inputs: &str, outputs: &str) -> String {
    format!("{inputs} → {outputs}")
}

/// Full creator name when expanded, otherwise the first few characters and
/// an ellipsis. Counts characters, not bytes.
pub fn creator_label(creator: Option<&str>, expanded: bool) -> String {
    let name = creator.unwrap_or(ANONYMOUS_CREATOR);
    if expanded {
        return name.to_string();
    }
    let preview: String = name.chars().take(CREATOR_PREVIEW_CHARS).collect();
    format!("{preview}...")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_embeds_step_id() {
        assert_eq!(
            use_step_command("567-567-567-567"),
            "lychee use_step 567-567-567-567"
        );
    }

    #[test]
    fn collapsed_creator_is_truncated() {
        assert_eq!(creator_label(Some("abhiram"), false), "abhiram...");
        assert_eq!(creator_label(Some("maximilian-j"), false), "maximili...");
        assert_eq!(creator_label(Some("maximilian-j"), true), "maximilian-j");
    }

    #[test]
    fn truncation_respects_char_boundaries() {
        assert_eq!(creator_label(Some("ŁukaszŻółw"), false), "ŁukaszŻó...");
    }

    #[test]
    fn missing_creator_falls_back() {
        assert_eq!(creator_label(None, true), ANONYMOUS_CREATOR);
        assert_eq!(creator_label(None, false), "anonymou...");
    }

    #[test]
    fn flow_joins_types() {
        assert_eq!(flow_label("array", "array"), "array → array");
    }
}
