//! Light/dark theming.
//!
//! Every theme-conditional element is styled through a BEM block plus a
//! `--dark` modifier, so flipping the theme flips all of them at once. The
//! shared stylesheet (`assets/theme/main.css`) defines each block listed in
//! [`THEMED_BLOCKS`] in both variants.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

/// Blocks whose class list depends on the theme.
pub const THEMED_BLOCKS: &[&str] = &[
    "library",
    "library__search",
    "sidebar",
    "sidebar__item",
    "step-card",
    "step-card__badge",
    "step-card__meta",
    "step-card__stats",
    "step-card__detail",
    "step-card__label",
    "step-card__use",
    "step-card__code",
    "placeholder",
];

impl Theme {
    pub fn from_dark(dark: bool) -> Self {
        if dark {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    pub fn is_dark(self) -> bool {
        matches!(self, Theme::Dark)
    }

    pub fn toggled(self) -> Self {
        Self::from_dark(!self.is_dark())
    }

    /// Class list for `block`: `"block"` in light mode, `"block block--dark"` in dark mode.
    pub fn class(self, block: &str) -> String {
        match self {
            Theme::Light => block.to_string(),
            Theme::Dark => format!("{block} {block}--dark"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_flips_and_returns() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Light.toggled().toggled(), Theme::Light);
    }

    #[test]
    fn toggle_flips_every_themed_block() {
        for block in THEMED_BLOCKS {
            let light = Theme::Light.class(block);
            let dark = Theme::Light.toggled().class(block);
            assert_eq!(light, *block);
            assert_eq!(dark, format!("{block} {block}--dark"));
        }
    }

    #[test]
    fn default_is_light() {
        assert!(!Theme::default().is_dark());
        assert_eq!(Theme::from_dark(true), Theme::Dark);
    }
}
