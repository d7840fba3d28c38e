// Score theory CLI entry point.
//
// Usage:
//   theory key <accidentals>          accidental count (-7..7, negative = flats) → key name
//   theory chords <root> [--json]     diatonic seventh chords of the major key on <root>
//   theory summary <file.musicxml> [--json] [--config settings.yaml]
//
// Logging goes to stderr via env_logger; set RUST_LOG=debug for parser detail.

use score_theory::config::{Settings, SettingsError};
use score_theory::converters::musicxml::{parse_score_file, MxError};
use score_theory::models::{KeySignature, PitchClass};
use score_theory::report::ScoreSummary;
use score_theory::theory::{diatonic_seventh_chords, generate_diatonic_chords, TheoryError};
use std::path::Path;
use thiserror::Error;

const USAGE: &str = "usage: theory key <accidentals> | chords <root> [--json] | summary <file> [--json] [--config <settings.yaml>]";

#[derive(Debug, Error)]
enum CliError {
    #[error("{0}")]
    Usage(String),
    #[error(transparent)]
    Theory(#[from] TheoryError),
    #[error(transparent)]
    Score(#[from] MxError),
    #[error(transparent)]
    Settings(#[from] SettingsError),
    #[error("failed to encode JSON: {0}")]
    Json(#[from] serde_json::Error),
}

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    match run(&args) {
        Ok(output) => print!("{}", output),
        Err(err) => {
            log::error!("{}", err);
            eprintln!("Error: {}", err);
            if matches!(err, CliError::Usage(_)) {
                eprintln!("{}", USAGE);
            }
            std::process::exit(1);
        }
    }
}

fn run(args: &[String]) -> Result<String, CliError> {
    let command = args.first().map(String::as_str);
    let operand = args.get(1).map(String::as_str);
    let json = args.iter().any(|a| a == "--json");

    match (command, operand) {
        (Some("key"), Some(value)) => {
            let accidentals: i32 = value
                .parse()
                .map_err(|_| {
                    CliError::Usage(format!("accidental count must be an integer, got '{}'", value))
                })?;
            key_command(accidentals)
        }
        (Some("chords"), Some(root)) => chords_command(root, json),
        (Some("summary"), Some(path)) => {
            let settings = match parse_flag(args, "--config")? {
                Some(config) => Settings::load(Path::new(config))?,
                None => Settings::default(),
            };
            summary_command(Path::new(path), json, &settings)
        }
        (Some(cmd @ ("key" | "chords" | "summary")), None) => {
            Err(CliError::Usage(format!("missing argument for '{}'", cmd)))
        }
        (Some(other), _) => Err(CliError::Usage(format!("unknown command '{}'", other))),
        (None, _) => Err(CliError::Usage("no command given".to_string())),
    }
}

fn key_command(accidentals: i32) -> Result<String, CliError> {
    let key = KeySignature::new(accidentals)?;
    Ok(format!(
        "{} major (relative minor: {} minor)\n",
        key.major_key_name(),
        key.minor_key_name()
    ))
}

fn chords_command(root: &str, json: bool) -> Result<String, CliError> {
    if json {
        let root: PitchClass = root.parse()?;
        let mut out = serde_json::to_string_pretty(&diatonic_seventh_chords(root))?;
        out.push('\n');
        return Ok(out);
    }

    let mut out = String::new();
    for chord in generate_diatonic_chords(root)? {
        out.push_str(&chord);
        out.push('\n');
    }
    Ok(out)
}

fn summary_command(path: &Path, json: bool, settings: &Settings) -> Result<String, CliError> {
    let score = parse_score_file(path)?;
    let summary = ScoreSummary::from_score(&score);
    log::info!(
        "summarized {}: {} parts, {} measures",
        path.display(),
        summary.parts.len(),
        summary.total_measures
    );

    if json {
        let mut out = serde_json::to_string_pretty(&summary)?;
        out.push('\n');
        Ok(out)
    } else {
        Ok(summary.render_text(settings))
    }
}

/// Value following `flag`, if the flag is present
fn parse_flag<'a>(args: &'a [String], flag: &str) -> Result<Option<&'a str>, CliError> {
    match args.iter().position(|a| a == flag) {
        None => Ok(None),
        Some(i) => args
            .get(i + 1)
            .map(|v| Some(v.as_str()))
            .ok_or_else(|| CliError::Usage(format!("{} needs a value", flag))),
    }
}
