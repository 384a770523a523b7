//! # mech_cli
//!
//! Terminal front end for `mech_core`: prompts for a plane stress state and
//! prints its principal decomposition.
//!
//! ## Usage
//!
//! ```text
//! mech_cli [--json] [SETTINGS_FILE]
//! ```
//!
//! `SETTINGS_FILE` is an optional JSON file with report settings (see
//! `mech_core::settings`). `--json` prints the report as JSON instead of text.
//! Set `RUST_LOG=debug` to see input coercion and settings loading.

use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use mech_core::report::StateReport;
use mech_core::settings::ReportSettings;
use mech_core::stress::Stress;

fn prompt_f64(prompt: &str, default: f64) -> f64 {
    print!("{}", prompt);
    if io::stdout().flush().is_err() {
        return default;
    }

    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input).is_err() {
        return default;
    }

    input.trim().parse().unwrap_or(default)
}

struct Options {
    json: bool,
    settings_path: Option<String>,
}

fn parse_args() -> Options {
    let mut options = Options {
        json: false,
        settings_path: None,
    };
    for arg in std::env::args().skip(1) {
        if arg == "--json" {
            options.json = true;
        } else {
            options.settings_path = Some(arg);
        }
    }
    options
}

fn main() -> ExitCode {
    env_logger::init();
    let options = parse_args();

    let settings = match &options.settings_path {
        Some(path) => match ReportSettings::load(path) {
            Ok(settings) => settings,
            Err(e) => {
                eprintln!("Error [{}]: {}", e.error_code(), e);
                return ExitCode::FAILURE;
            }
        },
        None => ReportSettings::default(),
    };
    let unit = settings.pressure_unit;

    println!("Planar Stress Transformation");
    println!("============================");
    println!();

    let x = prompt_f64(&format!("Enter σx ({}) [80.0]: ", unit), 80.0);
    let y = prompt_f64(&format!("Enter σy ({}) [-20.0]: ", unit), -20.0);
    let xy = prompt_f64(&format!("Enter τxy ({}) [30.0]: ", unit), 30.0);
    let theta_deg = prompt_f64("Enter orientation of the X axis (deg) [0.0]: ", 0.0);

    let stress = Stress::from_values(x, y, xy, theta_deg.to_radians(), unit);
    log::debug!("input stress: {}", stress);

    let report = StateReport::for_stress(&stress, &settings);

    println!();
    if options.json {
        match report.to_json() {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("Error [{}]: {}", e.error_code(), e);
                return ExitCode::FAILURE;
            }
        }
    } else {
        println!("═══════════════════════════════════════");
        println!("  PRINCIPAL STRESS RESULTS");
        println!("═══════════════════════════════════════");
        println!();
        print!("{}", report.render_text(settings.precision));

        let horizontal = stress.to_horizontal();
        println!();
        println!("Horizontal frame:");
        println!("  {:.*}", settings.precision, horizontal);
    }

    ExitCode::SUCCESS
}
