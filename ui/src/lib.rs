//! Shared UI crate for Fairlens. The explorer logic and views live here; the
//! `web` and `desktop` crates only launch them.

use dioxus::prelude::*;

pub mod benchmarks;
pub mod controls;
pub mod core;
pub mod i18n;
pub mod views;

pub mod components {
    // Localized application header (components/app_navbar.rs)
    pub mod app_navbar;
    pub use app_navbar::AppNavbar;
}

/// Unified theme shared by every platform.
pub const THEME_CSS: Asset = asset!("/assets/theme/main.css");

/// Bundled benchmark dataset (served next to the web build).
pub const DATASET_CSV: Asset = asset!("/assets/data/mock.csv");
