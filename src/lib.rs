//! Atlas - a terminal country browser with per-country weather
//!
//! This library exposes modules for use in integration tests.

pub mod adapters;
pub mod api;
pub mod app;
pub mod models;
pub mod traits;
pub mod ui;
pub mod view_state;
