//! Top-level sections reachable from the navigation sidebar.

use crate::t;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tab {
    #[default]
    Library,
    Dashboard,
    Analytics,
    Settings,
}

impl Tab {
    /// Sidebar order.
    pub const ALL: [Tab; 4] = [Tab::Library, Tab::Dashboard, Tab::Analytics, Tab::Settings];

    pub fn id(self) -> &'static str {
        match self {
            Tab::Library => "library",
            Tab::Dashboard => "dashboard",
            Tab::Analytics => "analytics",
            Tab::Settings => "settings",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Tab::Library => "▤",
            Tab::Dashboard => "◉",
            Tab::Analytics => "∿",
            Tab::Settings => "⚙",
        }
    }

    /// Localized sidebar entry and page heading.
    pub fn label(self) -> String {
        match self {
            Tab::Library => t!("tab-library"),
            Tab::Dashboard => t!("tab-dashboard"),
            Tab::Analytics => t!("tab-analytics"),
            Tab::Settings => t!("tab-settings"),
        }
    }

    /// Message for sections that are not built yet; `None` for the library.
    pub fn placeholder(self) -> Option<String> {
        match self {
            Tab::Library => None,
            Tab::Dashboard => Some(t!("placeholder-dashboard")),
            Tab::Analytics => Some(t!("placeholder-analytics")),
            Tab::Settings => Some(t!("placeholder-settings")),
        }
    }
}
