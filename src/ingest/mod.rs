/// API clients for external data sources.
///
/// One submodule per remote service. Each client owns its endpoint
/// constants and response structures and hands validated domain types to
/// the rest of the crate.
///
/// Submodules:
/// - `volcanoteide` — the widget status endpoint (the only source today).

pub mod volcanoteide;
