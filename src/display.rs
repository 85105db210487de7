/// Presentation boundary for the status dashboard.
///
/// The fetch/derive core passes source values through untouched; everything
/// user-facing lives here — icon categories, status capitalisation,
/// one-decimal temperatures, trail-date rendering, and the console
/// renderer itself.

use std::io::IsTerminal;

use chrono::{DateTime, NaiveDate, NaiveDateTime};

use crate::model::{
    DerivedView, Installation, InstallationKind, InstallationStatus, StatusDocument,
    CABLE_CAR_ID,
};

// ---------------------------------------------------------------------------
// Icon categories
// ---------------------------------------------------------------------------

/// Display category for a facility row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    CableCar,
    Venue,
    Parking,
    Retail,
    Viewpoint,
    Generic,
}

/// Map an installation to its display category.
///
/// Total for every input: the cable car id wins over whatever kind the
/// feed reports for it, the four named kinds map to their own category,
/// and everything else — unknown kinds as well as `path`, which never
/// reaches the facility listing — renders generically.
pub fn classify(id: &str, kind: &InstallationKind) -> Category {
    if id == CABLE_CAR_ID {
        return Category::CableCar;
    }
    match kind {
        InstallationKind::Venue => Category::Venue,
        InstallationKind::Parking => Category::Parking,
        InstallationKind::Retail => Category::Retail,
        InstallationKind::Viewpoint => Category::Viewpoint,
        _ => Category::Generic,
    }
}

impl Category {
    /// Console stand-in for the dashboard icon.
    pub fn glyph(self) -> &'static str {
        match self {
            Category::CableCar => "🚠",
            Category::Venue => "⛰",
            Category::Parking => "🚗",
            Category::Retail => "🏪",
            Category::Viewpoint => "👁",
            Category::Generic => "📍",
        }
    }
}

// ---------------------------------------------------------------------------
// Value formatting
// ---------------------------------------------------------------------------

/// Render a status for display: first letter upper-cased, rest untouched.
pub fn status_label(status: &InstallationStatus) -> String {
    let raw = status.as_str();
    let mut chars = raw.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// One decimal place with unit, matching the dashboard's temperature tiles.
pub fn temperature_label(value: f64) -> String {
    format!("{:.1}°C", value)
}

/// Render a trail's last-updated timestamp as a calendar date.
///
/// The feed has been seen with full RFC 3339 stamps as well as naive
/// datetime and date-only strings, so parsing is lenient; input that
/// matches none of the formats is shown verbatim rather than failing.
pub fn date_label(raw: &str) -> String {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt.format("%d %b %Y").to_string();
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S") {
        return dt.format("%d %b %Y").to_string();
    }
    if let Ok(d) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return d.format("%d %b %Y").to_string();
    }
    raw.to_string()
}

// ---------------------------------------------------------------------------
// Console renderer
// ---------------------------------------------------------------------------

// Open/closed colouring; the dark theme uses the bright variants.
const GREEN: &str = "\x1b[32m";
const RED: &str = "\x1b[31m";
const BRIGHT_GREEN: &str = "\x1b[92m";
const BRIGHT_RED: &str = "\x1b[91m";
const RESET: &str = "\x1b[0m";

fn coloured_status(installation: &Installation, dark: bool, colour: bool) -> String {
    let label = status_label(&installation.status);
    if !colour {
        return label;
    }
    let code = match (installation.status.is_open(), dark) {
        (true, true) => BRIGHT_GREEN,
        (true, false) => GREEN,
        (false, true) => BRIGHT_RED,
        (false, false) => RED,
    };
    format!("{}{}{}", code, label, RESET)
}

/// Print the four dashboard sections to stdout.
///
/// Colour is applied only when stdout is a terminal; `dark` selects the
/// bright palette. The data itself is rendered exactly as derived — this
/// function adds formatting, never ordering or filtering.
pub fn render(doc: &StatusDocument, view: &DerivedView, dark: bool) {
    let colour = std::io::stdout().is_terminal();

    println!("Teide Volcano Status");
    println!();

    println!("── Current Weather ──");
    println!("  Temperature: {}", temperature_label(doc.weather.temperature));
    println!("  Humidity:    {:.0}%", doc.weather.humidity);
    println!("  Wind speed:  {:.0} km/h", doc.weather.wind_speed);
    println!();

    println!("── Hiking Trails ──");
    for trail in &view.trails {
        println!(
            "  {} — {}",
            trail.name,
            coloured_status(trail, dark, colour)
        );
        if let Some(info) = &trail.info {
            println!("      {}", info);
        }
        if let Some(date) = &trail.date {
            println!("      Last updated: {}", date_label(date));
        }
    }
    println!();

    println!("── Facilities ──");
    for facility in &view.facilities {
        let category = classify(&facility.id, &facility.kind);
        println!(
            "  {} {} — {}",
            category.glyph(),
            facility.name,
            coloured_status(facility, dark, colour)
        );
        if let Some(info) = &facility.info {
            println!("      {}", info);
        }
    }
    println!();

    println!("── Forecast ──");
    for (date, entry) in &view.forecast {
        println!(
            "  {:<10} {}  {} / {}",
            entry.day,
            date,
            temperature_label(entry.temperature_max),
            temperature_label(entry.temperature_min)
        );
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
