//! Settlement summary for a ledger file.
//!
//! Usage:
//!   chama-summary <ledger.json>          - Print the summary as text
//!   chama-summary <ledger.json> --json   - Print the summary as JSON

mod input;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use chama_core::SummaryRenderer;
use chama_shared::{AppConfig, AppError};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::input::LedgerFile;

const USAGE: &str = "usage: chama-summary <ledger.json> [--json]";

/// Parsed command line.
#[derive(Debug, PartialEq, Eq)]
struct Args {
    path: PathBuf,
    json: bool,
}

impl Args {
    fn parse(args: impl IntoIterator<Item = String>) -> Result<Self, AppError> {
        let mut path = None;
        let mut json = false;

        for arg in args {
            match arg.as_str() {
                "--json" => json = true,
                flag if flag.starts_with("--") => {
                    return Err(AppError::Validation(format!("unknown flag {flag}; {USAGE}")));
                }
                _ if path.is_some() => {
                    return Err(AppError::Validation(format!("unexpected argument {arg}; {USAGE}")));
                }
                _ => path = Some(PathBuf::from(&arg)),
            }
        }

        let path = path.ok_or_else(|| AppError::Validation(USAGE.to_string()))?;
        Ok(Self { path, json })
    }
}

fn main() -> ExitCode {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(err) => {
            let err = AppError::from(err);
            eprintln!("error: {err}");
            return exit_code(&err);
        }
    };

    // Logs go to stderr; stdout carries only the report
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.logging.filter.as_str().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match run(&config, std::env::args().skip(1)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, "Summary failed");
            eprintln!("error: {err:#}");
            err.downcast_ref::<AppError>()
                .map_or(ExitCode::FAILURE, exit_code)
        }
    }
}

fn run(config: &AppConfig, args: impl IntoIterator<Item = String>) -> anyhow::Result<()> {
    let args = Args::parse(args)?;

    let text = std::fs::read_to_string(&args.path)
        .map_err(AppError::from)
        .with_context(|| format!("reading {}", args.path.display()))?;
    let file = LedgerFile::from_json(&text)
        .map_err(|err| AppError::Validation(err.to_string()))
        .with_context(|| format!("parsing {}", args.path.display()))?;
    let ledger = file.into_ledger().map_err(AppError::from)?;

    let summary = ledger.summary();
    info!(
        transfers = summary.transfers.len(),
        net_imbalance_cents = summary.net_imbalance,
        "Settlement ready"
    );

    if args.json {
        let json = serde_json::to_string_pretty(&summary)
            .map_err(|err| AppError::Internal(err.to_string()))?;
        println!("{json}");
    } else {
        print!("{}", SummaryRenderer::new(config.currency_format()).render(&summary));
    }

    Ok(())
}

fn exit_code(err: &AppError) -> ExitCode {
    u8::try_from(err.exit_code()).map_or(ExitCode::FAILURE, ExitCode::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Result<Args, AppError> {
        Args::parse(list.iter().map(ToString::to_string))
    }

    #[test]
    fn test_parse_path() {
        assert_eq!(
            args(&["ledger.json"]).unwrap(),
            Args {
                path: PathBuf::from("ledger.json"),
                json: false
            }
        );
    }

    #[test]
    fn test_parse_json_flag_anywhere() {
        assert!(args(&["--json", "ledger.json"]).unwrap().json);
        assert!(args(&["ledger.json", "--json"]).unwrap().json);
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(args(&[]), Err(AppError::Validation(_))));
        assert!(matches!(args(&["a.json", "b.json"]), Err(AppError::Validation(_))));
        assert!(matches!(args(&["a.json", "--yaml"]), Err(AppError::Validation(_))));
    }

    #[test]
    fn test_missing_file_is_not_found() {
        let err = run(&AppConfig::default(), vec!["/nonexistent/chama/ledger.json".to_string()])
            .unwrap_err();
        let app = err.downcast_ref::<AppError>().unwrap();
        assert_eq!(app.error_code(), "NOT_FOUND");
        assert_eq!(app.exit_code(), 66);
    }

    #[test]
    fn test_invalid_json_is_validation_error() {
        let path = std::env::temp_dir().join(format!("chama-summary-{}.json", std::process::id()));
        std::fs::write(&path, "{ not json").unwrap();

        let err = run(&AppConfig::default(), vec![path.display().to_string()]).unwrap_err();
        std::fs::remove_file(&path).ok();

        assert!(matches!(err.downcast_ref::<AppError>(), Some(AppError::Validation(_))));
    }

    #[test]
    fn test_run_with_valid_file() {
        let path = std::env::temp_dir().join(format!("chama-summary-ok-{}.json", std::process::id()));
        std::fs::write(
            &path,
            r#"{ "budget": 90, "members": [{ "name": "A", "contribution": 90 }, { "name": "B" }] }"#,
        )
        .unwrap();

        let result = run(
            &AppConfig::default(),
            vec![path.display().to_string(), "--json".to_string()],
        );
        std::fs::remove_file(&path).ok();

        assert!(result.is_ok());
    }
}
