/// Data organization utilities for the status service.
///
/// This module turns a validated status document into the collections the
/// display layer renders. Everything in here is pure — no I/O, no failure
/// modes, no state between calls.
///
/// Submodules:
/// - `views` — derives the trail, facility and forecast listings.

pub mod views;
