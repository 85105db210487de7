//! Command-line entry point: fetch the status document once, derive the
//! display collections, render them. A failed fetch is terminal for the
//! session — the error description is surfaced verbatim and nothing is
//! rendered.

use std::path::Path;
use std::process::ExitCode;

use teide_status::analysis::views;
use teide_status::display;
use teide_status::ingest::volcanoteide;
use teide_status::logging::{self, Subsystem};
use teide_status::prefs::Preferences;
use teide_status::settings::{Settings, SETTINGS_FILE};
use teide_status::verify;

fn main() -> ExitCode {
    dotenv::dotenv().ok();

    let settings = Settings::load(Path::new(SETTINGS_FILE)).unwrap_or_else(|e| {
        eprintln!("Warning: could not read {}: {}", SETTINGS_FILE, e);
        Settings::default()
    });
    logging::init_logger(
        settings.resolved_log_level(),
        settings.log_file.as_deref(),
        true,
    );

    let args: Vec<String> = std::env::args().collect();

    let mut prefs = Preferences::load();
    if args.iter().any(|a| a == "--toggle-theme") {
        prefs.dark_mode = !prefs.dark_mode;
        if let Err(e) = prefs.save() {
            logging::warn(
                Subsystem::Prefs,
                None,
                &format!("could not persist theme preference: {}", e),
            );
        }
    }

    // No explicit timeout: the session either gets a response or the
    // transport itself gives up.
    let client = reqwest::blocking::Client::new();

    if args.iter().any(|a| a == "--verify") {
        let report = verify::verify_endpoint(&client);
        verify::print_report(&report);
        return match report.status {
            verify::VerificationStatus::Failed => ExitCode::FAILURE,
            _ => ExitCode::SUCCESS,
        };
    }

    logging::debug(Subsystem::Widget, None, "fetching status document");
    match volcanoteide::fetch_status(&client) {
        Ok(doc) => {
            let view = views::derive(&doc);
            logging::info(
                Subsystem::Widget,
                None,
                &format!(
                    "status document received: {} trails, {} facilities, {} forecast days",
                    view.trails.len(),
                    view.facilities.len(),
                    view.forecast.len()
                ),
            );
            display::render(&doc, &view, prefs.dark_mode);
            ExitCode::SUCCESS
        }
        Err(err) => {
            logging::log_fetch_failure("status fetch", &err);
            eprintln!("Error: {}", err);
            ExitCode::FAILURE
        }
    }
}
