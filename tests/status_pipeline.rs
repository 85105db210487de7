/// Integration tests for the status fetch/derive pipeline
///
/// These tests verify:
/// 1. The full pipeline against a local stub server: fetch → parse → derive
/// 2. Error mapping: HTTP 500 → Network, bad body → Parse, refused
///    connection → Transport — and that no document is produced in any of
///    those cases
/// 3. Derived-view ordering rules end to end (partition, cable car pinning,
///    forecast insertion order)
///
/// The stub is a plain single-shot TcpListener so the scenarios are
/// deterministic and need no network. The live-endpoint test at the bottom
/// is #[ignore]d — run it manually with: cargo test -- --ignored

use std::io::{Read, Write};
use std::net::TcpListener;
use std::thread;

use teide_status::analysis::views;
use teide_status::ingest::volcanoteide;
use teide_status::model::{InstallationKind, StatusError};

// ---------------------------------------------------------------------------
// Test Helpers
// ---------------------------------------------------------------------------

/// Serve exactly one HTTP response on an ephemeral port, then shut down.
/// Returns the base URL to point the fetcher at.
fn serve_once(status_line: &str, body: &str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind stub listener");
    let addr = listener.local_addr().expect("stub local addr");
    let body = body.to_string();
    let status_line = status_line.to_string();

    thread::spawn(move || {
        if let Ok((mut stream, _)) = listener.accept() {
            // Drain the request head before answering; GETs carry no body.
            let mut buf = [0u8; 1024];
            let mut head: Vec<u8> = Vec::new();
            loop {
                match stream.read(&mut buf) {
                    Ok(0) => break,
                    Ok(n) => {
                        head.extend_from_slice(&buf[..n]);
                        if head.windows(4).any(|w| w == b"\r\n\r\n") {
                            break;
                        }
                    }
                    Err(_) => break,
                }
            }
            let response = format!(
                "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status_line,
                body.len(),
                body
            );
            let _ = stream.write_all(response.as_bytes());
            let _ = stream.flush();
        }
    });

    format!("http://{}", addr)
}

/// A base URL whose port is guaranteed closed: bind an ephemeral port, then
/// drop the listener before anyone connects.
fn refused_base_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind probe listener");
    let addr = listener.local_addr().expect("probe local addr");
    drop(listener);
    format!("http://{}", addr)
}

/// Widget payload with 3 trails and 5 facilities, one of them the cable car
/// sitting mid-list, and forecast keys deliberately out of date order.
const FULL_BODY: &str = r#"{
    "status": {
        "installations": {
            "telesforo-bravo": {
                "id": "telesforo-bravo",
                "name": "Telesforo Bravo trail",
                "type": "path",
                "status": "closed",
                "info": "Permit required",
                "date": "2024-05-03T17:45:00+01:00"
            },
            "visitor-centre": {
                "id": "visitor-centre",
                "name": "Visitor centre",
                "type": "venue",
                "status": "opened"
            },
            "cablecar": {
                "id": "cablecar",
                "name": "Cable car",
                "type": "venue",
                "status": "opened",
                "info": "Last ascent 16:00"
            },
            "montana-blanca": {
                "id": "montana-blanca",
                "name": "Montaña Blanca trail",
                "type": "path",
                "status": "opened",
                "date": "2024-05-04T08:30:00+01:00"
            },
            "base-parking": {
                "id": "base-parking",
                "name": "Base station parking",
                "type": "parking",
                "status": "opened"
            },
            "souvenir-shop": {
                "id": "souvenir-shop",
                "name": "Souvenir shop",
                "type": "retail",
                "status": "closed"
            },
            "roques-garcia": {
                "id": "roques-garcia",
                "name": "Roques de García trail",
                "type": "path",
                "status": "opened",
                "date": "2024-05-02T12:00:00+01:00"
            },
            "mirador": {
                "id": "mirador",
                "name": "La Rambleta viewpoint",
                "type": "viewpoint",
                "status": "opened"
            }
        },
        "weather": {
            "teleferico": {
                "temperature": 8.4,
                "humidity": 31.0,
                "windSpeed": 22.5
            }
        },
        "forecast": {
            "2024-05-04": {"day": "Saturday", "temperatureMax": 11.2, "temperatureMin": 2.7},
            "2024-05-06": {"day": "Monday", "temperatureMax": 12.8, "temperatureMin": 4.0},
            "2024-05-05": {"day": "Sunday", "temperatureMax": 10.1, "temperatureMin": 1.9}
        }
    }
}"#;

// ---------------------------------------------------------------------------
// Full Pipeline Tests
// ---------------------------------------------------------------------------

#[test]
fn test_full_pipeline_against_stub() {
    let base_url = serve_once("200 OK", FULL_BODY);
    let client = reqwest::blocking::Client::new();

    let doc = volcanoteide::fetch_status_from(&client, &base_url)
        .expect("stub response should fetch and parse");

    assert_eq!(doc.installations.len(), 8);
    assert_eq!(doc.weather.temperature, 8.4);
    assert_eq!(doc.weather.humidity, 31.0);
    assert_eq!(doc.weather.wind_speed, 22.5);

    let view = views::derive(&doc);

    // Partition is total and disjoint.
    assert_eq!(view.trails.len(), 3);
    assert_eq!(view.facilities.len(), 5);
    assert_eq!(
        view.trails.len() + view.facilities.len(),
        doc.installations.len()
    );
    assert!(view.trails.iter().all(|t| t.kind == InstallationKind::Path));

    // Trails keep payload order.
    let trail_ids: Vec<_> = view.trails.iter().map(|t| t.id.as_str()).collect();
    assert_eq!(trail_ids, ["telesforo-bravo", "montana-blanca", "roques-garcia"]);

    // Cable car pinned first, everything else in payload order.
    let facility_ids: Vec<_> = view.facilities.iter().map(|f| f.id.as_str()).collect();
    assert_eq!(
        facility_ids,
        ["cablecar", "visitor-centre", "base-parking", "souvenir-shop", "mirador"]
    );

    // Forecast entries keep the payload's key order, not date order.
    let forecast_dates: Vec<_> = view.forecast.iter().map(|(d, _)| d.as_str()).collect();
    assert_eq!(forecast_dates, ["2024-05-04", "2024-05-06", "2024-05-05"]);

    // Source values pass through the core unmodified.
    let trail = &view.trails[0];
    assert_eq!(trail.status.as_str(), "closed");
    assert_eq!(trail.date.as_deref(), Some("2024-05-03T17:45:00+01:00"));
    assert_eq!(view.forecast[0].1.temperature_max, 11.2);
}

#[test]
fn test_derivation_is_idempotent() {
    let base_url = serve_once("200 OK", FULL_BODY);
    let client = reqwest::blocking::Client::new();
    let doc = volcanoteide::fetch_status_from(&client, &base_url)
        .expect("stub response should fetch and parse");

    let first = views::derive(&doc);
    let second = views::derive(&doc);
    assert_eq!(first, second);
}

// ---------------------------------------------------------------------------
// Fetch Failure Tests
// ---------------------------------------------------------------------------

#[test]
fn test_http_500_yields_network_error() {
    let base_url = serve_once("500 Internal Server Error", "oops");
    let client = reqwest::blocking::Client::new();

    let err = volcanoteide::fetch_status_from(&client, &base_url)
        .expect_err("a 500 must not produce a document");
    assert_eq!(err, StatusError::Network);
}

#[test]
fn test_http_404_yields_the_same_network_error() {
    // 4xx and 5xx are deliberately indistinguishable to callers.
    let base_url = serve_once("404 Not Found", "");
    let client = reqwest::blocking::Client::new();

    let err = volcanoteide::fetch_status_from(&client, &base_url)
        .expect_err("a 404 must not produce a document");
    assert_eq!(err, StatusError::Network);
}

#[test]
fn test_non_json_body_yields_parse_error() {
    let base_url = serve_once("200 OK", "not json");
    let client = reqwest::blocking::Client::new();

    let err = volcanoteide::fetch_status_from(&client, &base_url)
        .expect_err("a non-JSON body must not produce a document");
    assert!(matches!(err, StatusError::Parse(_)));
}

#[test]
fn test_missing_section_yields_parse_error() {
    let body = r#"{"status": {"installations": {}, "forecast": {}}}"#;
    let base_url = serve_once("200 OK", body);
    let client = reqwest::blocking::Client::new();

    let err = volcanoteide::fetch_status_from(&client, &base_url)
        .expect_err("a document without weather must be rejected");
    assert!(matches!(err, StatusError::Parse(_)));
}

#[test]
fn test_refused_connection_yields_transport_error() {
    let base_url = refused_base_url();
    let client = reqwest::blocking::Client::new();

    let err = volcanoteide::fetch_status_from(&client, &base_url)
        .expect_err("a dead port must not produce a document");
    match err {
        StatusError::Transport(msg) => {
            assert!(!msg.is_empty(), "transport errors carry the underlying message");
        }
        other => panic!("expected Transport, got {:?}", other),
    }
}

// ---------------------------------------------------------------------------
// Live Endpoint Test
// ---------------------------------------------------------------------------

#[test]
#[ignore] // Don't run in CI - depends on the external API
fn test_live_endpoint_returns_complete_document() {
    let client = reqwest::blocking::Client::new();

    match volcanoteide::fetch_status(&client) {
        Ok(doc) => {
            println!("✓ Live endpoint returned {} installations", doc.installations.len());
            assert!(!doc.installations.is_empty(), "expected at least one installation");

            let view = views::derive(&doc);
            println!(
                "  {} trails, {} facilities, {} forecast days",
                view.trails.len(),
                view.facilities.len(),
                view.forecast.len()
            );

            // The cable car has been first in every observed payload, but
            // it is the remote service's contract, not ours — warn, don't fail.
            if view.facilities.first().map(|f| f.id.as_str()) != Some("cablecar") {
                eprintln!("⚠ WARNING: live payload has no cable car entry");
            }
        }
        Err(e) => {
            eprintln!("\n⚠ WARNING: live fetch failed: {}", e);
            eprintln!("  This may indicate:");
            eprintln!("    - No network connectivity from the test host");
            eprintln!("    - The widget API is down or the key was rotated");
        }
    }
}
