//! # Yantra CLI Application
//!
//! Terminal front end for the dimension engine. Prints each instrument's
//! description and dimension table, followed by JSON for programmatic use.
//!
//! ## Usage
//!
//! ```text
//! yantra_cli                              interactive prompts (defaults: Jaipur, 10 m)
//! yantra_cli LAT LON [-s BASE_SIZE]       explicit site
//! yantra_cli -l NAME [-s BASE_SIZE]       historic observatory preset
//! yantra_cli --list-locations             show presets
//! yantra_cli --help                       usage
//! ```
//!
//! `--json` suppresses the tables. Set `YANTRA_LOG_LEVEL` (e.g. `debug`) for
//! diagnostics on stderr.

use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use clap::Parser;
use env_logger::Env;
use log::{debug, error};

use yantra_core::config::{DEFAULT_BASE_SIZE_M, DEFAULT_LATITUDE_DEG, DEFAULT_LONGITUDE_DEG};
use yantra_core::{find_preset, CalcResult, CalculatorConfig, SiteReport, PRESETS};

fn prompt_line(prompt: &str) -> Option<String> {
    print!("{}", prompt);
    io::stdout().flush().ok()?;

    let mut input = String::new();
    io::stdin().lock().read_line(&mut input).ok()?;
    Some(input.trim().to_string())
}

fn prompt_f64(prompt: &str, default: f64) -> f64 {
    prompt_line(prompt)
        .and_then(|input| input.parse().ok())
        .unwrap_or(default)
}

/// Print the dimensions of the five Jantar Mantar instruments for a site.
#[derive(Parser, Debug)]
#[command(name = "yantra_cli")]
#[command(about = "Astronomical instrument dimension calculator")]
#[command(version)]
struct Cli {
    /// Site latitude in degrees (positive north)
    #[arg(allow_negative_numbers = true, requires = "longitude", conflicts_with = "location")]
    latitude: Option<f64>,

    /// Site longitude in degrees (positive east); carried but unused by the formulas
    #[arg(allow_negative_numbers = true)]
    longitude: Option<f64>,

    /// Base size in meters
    #[arg(short = 's', long)]
    base_size: Option<f64>,

    /// Use a historic observatory preset (e.g. "jaipur")
    #[arg(short, long)]
    location: Option<String>,

    /// List observatory presets and exit
    #[arg(long)]
    list_locations: bool,

    /// Print only JSON
    #[arg(long)]
    json: bool,
}

impl Cli {
    /// Build the config from flags and positionals, prompting when no site is given.
    fn config(&self) -> CalcResult<CalculatorConfig> {
        let base_size = self.base_size.unwrap_or(DEFAULT_BASE_SIZE_M);

        if let Some(name) = &self.location {
            return find_preset(name)?.to_config(base_size);
        }

        match (self.latitude, self.longitude) {
            (Some(latitude_deg), Some(longitude_deg)) => Ok(CalculatorConfig {
                latitude_deg,
                longitude_deg,
                base_size_m: base_size,
            }),
            _ => Ok(prompt_config(base_size)),
        }
    }
}

fn prompt_config(default_base_size: f64) -> CalculatorConfig {
    println!("Quick select location (blank for custom coordinates):");
    for preset in &PRESETS {
        println!("  - {}", preset.name);
    }
    if let Some(name) = prompt_line("Location: ").filter(|s| !s.is_empty()) {
        match find_preset(&name) {
            Ok(preset) => {
                let base_size = prompt_f64(&format!("Enter base size (m) [{}]: ", default_base_size), default_base_size);
                return CalculatorConfig {
                    latitude_deg: preset.latitude_deg,
                    longitude_deg: preset.longitude_deg,
                    base_size_m: base_size,
                };
            }
            Err(e) => println!("{} - falling back to custom coordinates", e),
        }
    }

    CalculatorConfig {
        latitude_deg: prompt_f64(&format!("Enter latitude (°) [{}]: ", DEFAULT_LATITUDE_DEG), DEFAULT_LATITUDE_DEG),
        longitude_deg: prompt_f64(&format!("Enter longitude (°) [{}]: ", DEFAULT_LONGITUDE_DEG), DEFAULT_LONGITUDE_DEG),
        base_size_m: prompt_f64(&format!("Enter base size (m) [{}]: ", default_base_size), default_base_size),
    }
}

fn print_locations() {
    println!("Observatory presets:");
    for preset in &PRESETS {
        println!("  {:<24} {:>9.4}° {:>9.4}°", preset.name, preset.latitude_deg, preset.longitude_deg);
    }
}

fn print_report(report: &SiteReport) {
    let config = &report.config;
    println!("═══════════════════════════════════════");
    println!("  INSTRUMENT DIMENSIONS");
    println!("═══════════════════════════════════════");
    println!();
    println!("Site:");
    println!("  Latitude:   {:.4}° ({} hemisphere)", config.latitude_deg, config.hemisphere());
    println!("  Longitude:  {:.4}° (not used by any formula)", config.longitude_deg);
    println!("  Base size:  {:.2} m", config.base_size_m);

    for spec in &report.instruments {
        println!();
        println!("───────────────────────────────────────");
        println!("  {} [{}]", spec.name, spec.category());
        println!("  {}", spec.description);
        println!("───────────────────────────────────────");
        for field in spec.dimensions.fields() {
            println!("  {:<26} {:>12}", field.label(), field.formatted());
        }
    }
    println!();
}

fn run(args: Cli) -> CalcResult<()> {
    if args.list_locations {
        print_locations();
        return Ok(());
    }

    if !args.json {
        println!("Yantra CLI - Astronomical Instrument Dimensions");
        println!("===============================================");
        println!();
    }

    let config = args.config()?;
    debug!("Using config {:?}", config);
    let report = SiteReport::calculate(config)?;

    if !args.json {
        print_report(&report);
        println!("JSON Output (for API use):");
    }
    println!("{}", serde_json::to_string_pretty(&report.instruments)?);
    Ok(())
}

fn main() -> ExitCode {
    let logger_env = Env::new().filter_or("YANTRA_LOG_LEVEL", "warn");
    env_logger::Builder::from_env(logger_env)
        .format_timestamp_millis()
        .init();

    let args = Cli::parse();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Calculation failed: {}", e);
            if let Ok(json) = serde_json::to_string_pretty(&e) {
                eprintln!();
                eprintln!("Error JSON:");
                eprintln!("{}", json);
            }
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cli(raw: &[&str]) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(std::iter::once("yantra_cli").chain(raw.iter().copied()))
    }

    #[test]
    fn test_positional_site() {
        let config = cli(&["28.6271", "77.2166", "-s", "5"]).unwrap().config().unwrap();
        assert_eq!(config.latitude_deg, 28.6271);
        assert_eq!(config.longitude_deg, 77.2166);
        assert_eq!(config.base_size_m, 5.0);
    }

    #[test]
    fn test_positional_default_base_size() {
        let config = cli(&["28.6271", "77.2166"]).unwrap().config().unwrap();
        assert_eq!(config.base_size_m, DEFAULT_BASE_SIZE_M);
    }

    #[test]
    fn test_negative_coordinates() {
        let config = cli(&["-33.86", "-70.65", "--base-size", "2"]).unwrap().config().unwrap();
        assert_eq!(config.latitude_deg, -33.86);
        assert_eq!(config.longitude_deg, -70.65);
    }

    #[test]
    fn test_location_flag() {
        let parsed = cli(&["--json", "--location", "mathura", "-s", "12.5"]).unwrap();
        assert!(parsed.json);
        let config = parsed.config().unwrap();
        assert_eq!(config.latitude_deg, 27.4924);
        assert_eq!(config.base_size_m, 12.5);
    }

    #[test]
    fn test_bad_arguments() {
        assert!(cli(&["--location"]).is_err());
        assert!(cli(&["north", "77.0"]).is_err());
        assert!(cli(&["26.9", "75.8", "10"]).is_err());
        assert!(cli(&["26.9"]).is_err());
        assert!(cli(&["--jsn", "26.9", "75.8"]).is_err());
        assert!(cli(&["-l", "jaipur", "26.9", "75.8"]).is_err());
        assert_eq!(
            cli(&["-l", "Atlantis"]).unwrap().config().unwrap_err().error_code(),
            "LOCATION_NOT_FOUND"
        );
    }

    #[test]
    fn test_help_and_version() {
        let err = cli(&["--help"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
        let err = cli(&["--version"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayVersion);
    }

    #[test]
    fn test_cli_definition() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
