//! Single-select expand/collapse state for step cards.

/// Next expanded id after the header of `clicked` is activated.
///
/// Activating the expanded card collapses it; any other card replaces the
/// current selection, so at most one card is ever expanded.
pub fn toggle_expanded(current: Option<&str>, clicked: &str) -> Option<String> {
    match current {
        Some(id) if id == clicked => None,
        _ => Some(clicked.to_string()),
    }
}
