/// Core data types for the Teide visitor status service.
///
/// This module defines the shared domain model imported by all other modules.
/// It contains no I/O and no external service knowledge — only types and the
/// conversions between raw API strings and their typed forms.

use indexmap::IndexMap;

// ---------------------------------------------------------------------------
// Well-known identifiers
// ---------------------------------------------------------------------------

/// Installation id the widget API uses for the cable car. The facility
/// listing pins this entry to the front.
pub const CABLE_CAR_ID: &str = "cablecar";

// ---------------------------------------------------------------------------
// Installation types
// ---------------------------------------------------------------------------

/// Category of a physical installation, as reported in the payload's `type`
/// field. Unrecognised values keep their raw string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstallationKind {
    Venue,
    Parking,
    Retail,
    Viewpoint,
    /// Hiking trail. Partitioned out of the facility listing.
    Path,
    Other(String),
}

impl InstallationKind {
    pub fn from_api(raw: &str) -> Self {
        match raw {
            "venue" => InstallationKind::Venue,
            "parking" => InstallationKind::Parking,
            "retail" => InstallationKind::Retail,
            "viewpoint" => InstallationKind::Viewpoint,
            "path" => InstallationKind::Path,
            other => InstallationKind::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            InstallationKind::Venue => "venue",
            InstallationKind::Parking => "parking",
            InstallationKind::Retail => "retail",
            InstallationKind::Viewpoint => "viewpoint",
            InstallationKind::Path => "path",
            InstallationKind::Other(raw) => raw,
        }
    }
}

/// Operational state of an installation.
///
/// The API documents `opened` and `closed`; anything else is carried
/// through verbatim rather than being normalised to one of the two.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstallationStatus {
    Opened,
    Closed,
    Other(String),
}

impl InstallationStatus {
    pub fn from_api(raw: &str) -> Self {
        match raw {
            "opened" => InstallationStatus::Opened,
            "closed" => InstallationStatus::Closed,
            other => InstallationStatus::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            InstallationStatus::Opened => "opened",
            InstallationStatus::Closed => "closed",
            InstallationStatus::Other(raw) => raw,
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self, InstallationStatus::Opened)
    }
}

/// A single physical installation reported by the status service: the cable
/// car, a trail, a parking area, a store, or a viewpoint.
///
/// Constructed fresh from each fetch and never mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Installation {
    pub id: String,
    pub name: String,
    pub kind: InstallationKind,
    pub status: InstallationStatus,
    /// Free-text annotation, e.g. an access restriction.
    pub info: Option<String>,
    /// Last-updated timestamp as reported, ISO 8601. Only trails carry one.
    /// Kept raw here; parsed at the display boundary.
    pub date: Option<String>,
}

// ---------------------------------------------------------------------------
// Weather and forecast
// ---------------------------------------------------------------------------

/// Current conditions at the cable car base station.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherReport {
    pub temperature: f64,
    pub humidity: f64,
    pub wind_speed: f64,
}

/// One forecast day, keyed externally by its date string.
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastEntry {
    /// Display label, e.g. "Saturday".
    pub day: String,
    pub temperature_max: f64,
    pub temperature_min: f64,
}

// ---------------------------------------------------------------------------
// Document and derived view
// ---------------------------------------------------------------------------

/// The validated status payload.
///
/// Both maps are insertion-ordered: iteration yields entries in the order
/// the API sent them, which the derived listings rely on. All three fields
/// are mandatory — a payload missing any of them is rejected at parse time.
#[derive(Debug, Clone, PartialEq)]
pub struct StatusDocument {
    pub installations: IndexMap<String, Installation>,
    pub weather: WeatherReport,
    pub forecast: IndexMap<String, ForecastEntry>,
}

/// Display-ready collections computed once per fetched document.
///
/// `trails` and `facilities` partition the installations (facilities with
/// the cable car pinned first); `forecast` pairs keep map iteration order.
#[derive(Debug, Clone, PartialEq)]
pub struct DerivedView {
    pub trails: Vec<Installation>,
    pub facilities: Vec<Installation>,
    pub forecast: Vec<(String, ForecastEntry)>,
}

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

/// Errors that can arise when fetching or parsing the status document.
///
/// All variants are terminal for the session: nothing is retried and no
/// partial document is ever produced.
#[derive(Debug, PartialEq)]
pub enum StatusError {
    /// Connection, DNS or TLS level failure before an HTTP response
    /// arrived. The underlying message is the error's description.
    Transport(String),
    /// Non-2xx HTTP response. 4xx and 5xx are deliberately not
    /// distinguished.
    Network,
    /// The response body was not JSON of the expected shape.
    Parse(String),
}

impl std::fmt::Display for StatusError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StatusError::Transport(msg) => write!(f, "{}", msg),
            StatusError::Network => write!(f, "network response was not ok"),
            StatusError::Parse(msg) => write!(f, "parse error: {}", msg),
        }
    }
}

impl std::error::Error for StatusError {}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
