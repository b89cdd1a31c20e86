//! Shared UI crate for Lychee. The step library page, its components and all
//! platform-agnostic logic live here; the `web` and `desktop` crates only
//! launch it.

pub mod config;
pub mod core;
pub mod i18n;
pub mod net;
pub mod views;

pub mod components {
    pub mod locale_switcher;
    pub use locale_switcher::LocaleSwitcher;

    pub mod sidebar;
    pub use sidebar::NavigationSidebar;

    pub mod step_card;
    pub use step_card::StepCard;

    pub mod theme_switch;
    pub use theme_switch::ThemeSwitch;
}
