//! Runtime configuration for the step library page.
//!
//! Platform crates provide a [`LibraryConfig`] through Dioxus context; the page
//! falls back to [`LibraryConfig::default`] when none is provided. The steps
//! URL can be overridden at build time with `LYCHEE_STEPS_URL` (the wasm build
//! has no process environment to read at runtime).

/// Used when `LYCHEE_STEPS_URL` is not set at build time.
pub const DEFAULT_STEPS_URL: &str = "http://localhost:8000/steps";

/// Storage key holding the theme preference (JSON boolean).
pub const THEME_STORAGE_KEY: &str = "darkMode";

/// Where the step list comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepSource {
    /// One unauthenticated `GET` returning a JSON array of steps.
    Remote(String),
    /// The bundled demo records.
    Sample,
}

impl Default for StepSource {
    fn default() -> Self {
        if cfg!(feature = "sample-data") {
            StepSource::Sample
        } else {
            StepSource::Remote(
                option_env!("LYCHEE_STEPS_URL")
                    .unwrap_or(DEFAULT_STEPS_URL)
                    .to_string(),
            )
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LibraryConfig {
    pub source: StepSource,
    pub theme_key: String,
}

impl Default for LibraryConfig {
    fn default() -> Self {
        Self {
            source: StepSource::default(),
            theme_key: THEME_STORAGE_KEY.to_string(),
        }
    }
}
