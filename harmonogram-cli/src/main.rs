//! Harmonogram CLI - command line interface
//!
//! Thin front end: argument parsing, logging setup and output. All parsing
//! goes through `harmonogram-api`.

use clap::Parser;
use std::path::PathBuf;
use std::process;

mod config;
mod logging;
mod platform;

use crate::config::{ProjectFile, Settings};
use crate::logging::{bridged_logger, LogFormat, CLI_TARGET};
use crate::platform::print_error_with_source;
use harmonogram_api::{
    init_config, locate, parse, HarmonogramError, LogLevel, Location, ParseOutput, ParseSummary,
    RunConfig,
};
use harmonogram_vfs::NativeFileSystem;

#[derive(Parser)]
#[command(
    name = "harmonogram",
    about = "Parse harmonogram description files",
    version = "0.1.0"
)]
struct Cli {
    /// Input files, parsed in order
    #[arg(value_name = "FILE", required_unless_present = "project")]
    files: Vec<PathBuf>,

    /// JSON project file listing inputs and settings
    #[arg(long, value_name = "PATH")]
    project: Option<PathBuf>,

    /// Dump entities and locations as JSON
    #[arg(long)]
    json: bool,

    /// Print the entity defined at FILE:LINE:COL
    #[arg(long, value_name = "FILE:LINE:COL", value_parser = parse_location)]
    locate: Option<Location>,

    /// Simulation step in seconds
    #[arg(long, value_parser = parse_time_delta)]
    time_delta: Option<f64>,

    /// silent, error, warn, info, debug, trace
    #[arg(long, value_parser = parse_log_level)]
    log_level: Option<LogLevel>,

    /// Tokenizer log level
    #[arg(long, value_parser = parse_log_level)]
    log_tokenizer: Option<LogLevel>,

    /// Parser log level
    #[arg(long, value_parser = parse_log_level)]
    log_parser: Option<LogLevel>,

    /// Log output format
    #[arg(long, value_enum, default_value = "pretty")]
    log_format: LogFormat,
}

fn main() {
    let cli = Cli::parse();

    let project = match &cli.project {
        Some(path) => match ProjectFile::read(path) {
            Ok(project) => Some((path.as_path(), project)),
            Err(e) => {
                eprintln!("Error: {}", e);
                process::exit(1);
            }
        },
        None => None,
    };

    let mut settings = Settings::merge(project, cli.files.clone(), cli.time_delta, cli.log_level);
    settings.log.tokenizer = cli.log_tokenizer.map(config::tracing_level);
    settings.log.parser = cli.log_parser.map(config::tracing_level);

    logging::init(&settings.log, cli.log_format);
    tracing::debug!(target: CLI_TARGET, "{} input file(s)", settings.files.len());

    init_config(RunConfig::new(settings.parser, bridged_logger(&settings.log)));

    let output = match parse(&settings.files) {
        Ok(output) => output,
        Err(e) => {
            if cli.json {
                handle_json(&error_json(&e));
            } else {
                print_error_with_source(&e, &NativeFileSystem::new());
            }
            process::exit(1);
        }
    };
    tracing::info!(target: CLI_TARGET, "parsed: {}", ParseSummary::of(&output));

    if let Some(location) = &cli.locate {
        handle_locate(&output, location);
    } else if cli.json {
        handle_json(&output);
    } else {
        for entity in &output.entities {
            println!("{entity}");
        }
    }
}

fn handle_locate(output: &ParseOutput, location: &Location) {
    match locate(output, location) {
        Some(name) => println!("{name}"),
        None => {
            eprintln!("no entity defined at {location}");
            process::exit(1);
        }
    }
}

/// `{"error": <report>}`, the `--json` form of a fatal error
fn error_json(e: &HarmonogramError) -> serde_json::Value {
    serde_json::json!({ "error": e.to_report() })
}

fn handle_json<T: serde::Serialize>(output: &T) {
    match serde_json::to_string_pretty(output) {
        Ok(json) => println!("{json}"),
        Err(e) => {
            eprintln!("Error: cannot serialize output: {}", e);
            process::exit(1);
        }
    }
}

/// `FILE:LINE:COL`; the file part may itself contain ':'
fn parse_location(s: &str) -> Result<Location, String> {
    let mut parts = s.rsplitn(3, ':');
    let column = parts.next();
    let line = parts.next();
    let file = parts.next();
    match (file, line, column) {
        (Some(file), Some(line), Some(column)) if !file.is_empty() => {
            let line = line
                .parse()
                .map_err(|_| format!("invalid line '{line}'"))?;
            let column = column
                .parse()
                .map_err(|_| format!("invalid column '{column}'"))?;
            Ok(Location::new(file, line, column))
        }
        _ => Err(format!("expected FILE:LINE:COL, got '{s}'")),
    }
}

fn parse_time_delta(s: &str) -> Result<f64, String> {
    let time_delta: f64 = s
        .parse()
        .map_err(|_| format!("invalid time delta '{s}'"))?;
    config::check_time_delta(time_delta)
}

fn parse_log_level(s: &str) -> Result<LogLevel, String> {
    LogLevel::parse(s).ok_or_else(|| format!("unknown log level '{s}'"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_location() {
        assert_eq!(
            parse_location("scene.hg:4:2"),
            Ok(Location::new("scene.hg", 4, 2))
        );
        assert_eq!(
            parse_location("C:/art/scene.hg:10:0"),
            Ok(Location::new("C:/art/scene.hg", 10, 0))
        );
        assert!(parse_location("scene.hg:4").is_err());
        assert!(parse_location(":1:1").is_err());
        assert!(parse_location("scene.hg:x:1").unwrap_err().contains("line"));
    }

    #[test]
    fn test_arguments() {
        let cli = Cli::try_parse_from([
            "harmonogram",
            "a.hg",
            "--locate",
            "a.hg:3:1",
            "--log-level",
            "silent",
            "--log-format",
            "json",
        ])
        .unwrap();
        assert_eq!(cli.files, vec![PathBuf::from("a.hg")]);
        assert_eq!(cli.locate, Some(Location::new("a.hg", 3, 1)));
        assert_eq!(cli.log_level, Some(LogLevel::Error));
        assert_eq!(cli.log_format, LogFormat::Json);
    }

    #[test]
    fn test_error_json_carries_report() {
        let err = harmonogram_api::parse_source(
            "bad.hg",
            "{ center: 0 0 }",
            &RunConfig::default(),
        )
        .unwrap_err();
        let json = error_json(&err);
        assert_eq!(json["error"]["phase"], "parser");
        assert_eq!(json["error"]["file"], "bad.hg");
        assert_eq!(json["error"]["error_kind"], "MissingSeparator");
    }

    #[test]
    fn test_time_delta_must_be_positive() {
        let cli = Cli::try_parse_from(["harmonogram", "a.hg", "--time-delta", "0.05"]).unwrap();
        assert_eq!(cli.time_delta, Some(0.05));
        for bad in ["0", "-0.01", "NaN", "inf", "fast"] {
            assert!(
                Cli::try_parse_from(["harmonogram", "a.hg", "--time-delta", bad]).is_err(),
                "{bad} accepted"
            );
        }
    }

    #[test]
    fn test_inputs_required() {
        assert!(Cli::try_parse_from(["harmonogram"]).is_err());
        assert!(Cli::try_parse_from(["harmonogram", "--project", "p.json"]).is_ok());
    }
}
