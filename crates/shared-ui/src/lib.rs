//! Shared UI components for the CareBridge portal.
//!
//! Thin wrappers around `dioxus-primitives` plus a handful of standalone
//! styled components. Each component directory carries its own stylesheet,
//! linked via `asset!` so styles ship only when the component is used.

pub mod components;
pub mod theme;

pub use components::*;
pub use theme::{set_theme, ThemeFamily, ThemeSeed, ThemeState};
