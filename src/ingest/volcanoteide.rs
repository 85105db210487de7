/// Volcano Teide widget API client
///
/// Retrieves the live operational status document (cable car, trails,
/// facilities, weather, 6-day forecast) published for the visitor dashboard.
///
/// Endpoint: https://api.volcanoteide.com/widgets/status

use indexmap::IndexMap;
use serde::Deserialize;

use crate::model::{
    ForecastEntry, Installation, InstallationKind, InstallationStatus, StatusDocument,
    StatusError, WeatherReport,
};

const API_BASE_URL: &str = "https://api.volcanoteide.com";

/// Site the widget is embedded in; sent as Origin/Referer.
const WIDGET_ORIGIN: &str = "https://www.volcanoteide.com";

/// Static key the public widget ships with. `TEIDE_API_KEY` in the
/// environment overrides it.
const DEFAULT_API_KEY: &str = "VOLCANO";

// ============================================================================
// Widget API Response Structures
// ============================================================================

/// Root response envelope
#[derive(Debug, Deserialize)]
struct WidgetResponse {
    status: WidgetStatus,
}

/// The `status` object. All three sections are required; a payload missing
/// any of them fails deserialization and surfaces as a parse error.
#[derive(Debug, Deserialize)]
struct WidgetStatus {
    installations: IndexMap<String, WidgetInstallation>,
    weather: WidgetWeather,
    forecast: IndexMap<String, WidgetForecastDay>,
}

/// Single installation record
#[derive(Debug, Deserialize)]
struct WidgetInstallation {
    id: String,
    name: String,
    #[serde(rename = "type")]
    kind: String,
    status: String,
    info: Option<String>,
    date: Option<String>,  // ISO 8601 last-updated timestamp, trails only
}

#[derive(Debug, Deserialize)]
struct WidgetWeather {
    /// Conditions at the cable car base station — the only station the
    /// widget reports.
    teleferico: WidgetWeatherStation,
}

#[derive(Debug, Deserialize)]
struct WidgetWeatherStation {
    temperature: f64,
    humidity: f64,
    #[serde(rename = "windSpeed")]
    wind_speed: f64,
}

#[derive(Debug, Deserialize)]
struct WidgetForecastDay {
    day: String,
    #[serde(rename = "temperatureMax")]
    temperature_max: f64,
    #[serde(rename = "temperatureMin")]
    temperature_min: f64,
}

// ============================================================================
// API Client Functions
// ============================================================================

/// Builds the widget status URL for a given API base.
pub fn status_url(base_url: &str) -> String {
    format!("{}/widgets/status", base_url)
}

/// Fetch the current status document from the production endpoint.
///
/// Issues exactly one GET request — no retry, no caching, no timeout beyond
/// what the transport itself imposes. A non-2xx response is a
/// `StatusError::Network` with no further detail; transport-level failures
/// pass the underlying message through unmodified.
pub fn fetch_status(client: &reqwest::blocking::Client) -> Result<StatusDocument, StatusError> {
    fetch_status_from(client, API_BASE_URL)
}

/// Same request and error mapping as [`fetch_status`], against an explicit
/// base URL. Integration tests point this at a local stub server.
pub fn fetch_status_from(
    client: &reqwest::blocking::Client,
    base_url: &str,
) -> Result<StatusDocument, StatusError> {
    let api_key =
        std::env::var("TEIDE_API_KEY").unwrap_or_else(|_| DEFAULT_API_KEY.to_string());

    let response = client
        .get(status_url(base_url))
        .header("Accept", "application/json, text/javascript, */*; q=0.01")
        .header("Accept-Language", "eng")
        .header("Content-Type", "application/json")
        .header("Origin", WIDGET_ORIGIN)
        .header("Referer", format!("{}/", WIDGET_ORIGIN))
        .header("x-api-key", api_key)
        .send()
        .map_err(|e| StatusError::Transport(e.to_string()))?;

    if !response.status().is_success() {
        return Err(StatusError::Network);
    }

    // A stream cut while reading the body is still a transport failure;
    // Parse is reserved for a fully received body of the wrong shape.
    let body = response
        .text()
        .map_err(|e| StatusError::Transport(e.to_string()))?;

    parse_status(&body)
}

/// Parse a widget response body into the domain model.
///
/// The deserialization structs above are the payload schema: a body that is
/// not JSON, or JSON missing any of `installations`, `weather` or
/// `forecast`, is rejected here so derivation never sees a malformed
/// document.
pub fn parse_status(body: &str) -> Result<StatusDocument, StatusError> {
    let response: WidgetResponse =
        serde_json::from_str(body).map_err(|e| StatusError::Parse(e.to_string()))?;
    Ok(into_document(response.status))
}

fn into_document(status: WidgetStatus) -> StatusDocument {
    StatusDocument {
        installations: status
            .installations
            .into_iter()
            .map(|(key, raw)| (key, into_installation(raw)))
            .collect(),
        weather: WeatherReport {
            temperature: status.weather.teleferico.temperature,
            humidity: status.weather.teleferico.humidity,
            wind_speed: status.weather.teleferico.wind_speed,
        },
        forecast: status
            .forecast
            .into_iter()
            .map(|(date, raw)| {
                (
                    date,
                    ForecastEntry {
                        day: raw.day,
                        temperature_max: raw.temperature_max,
                        temperature_min: raw.temperature_min,
                    },
                )
            })
            .collect(),
    }
}

fn into_installation(raw: WidgetInstallation) -> Installation {
    Installation {
        id: raw.id,
        name: raw.name,
        kind: InstallationKind::from_api(&raw.kind),
        status: InstallationStatus::from_api(&raw.status),
        info: raw.info,
        date: raw.date,
    }
}

// ============================================================================
// Tests
// ============================================================================
