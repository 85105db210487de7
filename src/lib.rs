//! Status pipeline for the Teide visitor dashboard.
//!
//! Fetches the operational status document published for volcanoteide.com
//! (cable car, trails, facilities, weather, forecast), validates its shape,
//! and derives the ordered collections the display layer renders.
//!
//! Module map:
//! - [`model`] — domain types and the error taxonomy
//! - [`ingest`] — the widget API client
//! - [`analysis`] — pure derivation of the display collections
//! - [`display`] — icon categories, value formatting, console renderer
//! - [`prefs`] — the persisted dark-theme preference
//! - [`settings`] — optional `settings.toml` (logging configuration)
//! - [`logging`] — structured logger
//! - [`verify`] — opt-in live endpoint verification

pub mod analysis;
pub mod display;
pub mod ingest;
pub mod logging;
pub mod model;
pub mod prefs;
pub mod settings;
pub mod verify;
