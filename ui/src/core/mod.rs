//! Platform-agnostic building blocks: the step model, filtering, selection,
//! theming, persistence and platform glue.

pub mod filter;
pub mod format;
pub mod platform;
pub mod selection;
pub mod step;
pub mod storage;
pub mod tab;
pub mod theme;
