//! Light/dark theme switching for server-rendered pages.
//!
//! A page constructs one [`ThemeManager`] at startup. The controller behind
//! it restores the persisted preference, sets `data-theme` on `<html>` so
//! stylesheets can key off it, inserts a single toggle button, and pushes
//! matching colors into a charting runtime when one is present. Each
//! collaborator sits behind a trait so the same logic runs against the live
//! DOM (`hydrate` feature) or against the in-memory models used in tests.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`theme`] | The `Theme` enum and its identifiers |
//! | [`colors`] | Semantic color table and chart palette |
//! | [`config`] | Storage key, attribute, and control settings |
//! | [`store`] | Persistent key-value storage |
//! | [`document`] | Root attribute and toggle control |
//! | [`toggle`] | Switch-to icon for the control |
//! | [`chart`] | Chart re-styling sink and in-memory chart registry |
//! | [`controller`] | `ThemeController` operations |
//! | [`manager`] | Shared handle wiring clicks back into the controller |
//! | `web` | Browser bindings (`hydrate` only) |

pub mod chart;
pub mod colors;
pub mod config;
pub mod controller;
pub mod document;
pub mod error;
pub mod manager;
pub mod store;
pub mod theme;
pub mod toggle;
#[cfg(feature = "hydrate")]
pub mod web;

pub use colors::{ChartPalette, ColorRole, ThemeColors};
pub use config::ThemeConfig;
pub use controller::ThemeController;
pub use error::ThemeError;
pub use manager::ThemeManager;
pub use theme::Theme;
