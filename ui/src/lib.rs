//! Shared UI crate for ProfileScope. The analysis lifecycle, the Gemini
//! client and all views live here; platform crates only launch them.

use dioxus::prelude::*;

pub mod analysis;
pub mod core;
pub mod i18n;
pub mod views;

pub mod components {
    // Localized application header (components/app_header.rs)
    pub mod app_header;
    pub use app_header::AppHeader;
}

/// Shared theme as a bundled asset (web).
pub const THEME_CSS: Asset = asset!("/assets/theme/main.css");

/// Shared theme embedded in the binary (desktop release builds).
pub const THEME_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/theme/main.css"
));
