use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, error};

use kotoba::config::{Config, Language};
use kotoba::output::ResultEnvelope;
use kotoba::pipeline::Pipeline;

/// Kotoba: keyword extraction for short text snippets.
///
/// Reads all of stdin as UTF-8 text, extracts up to top-K representative
/// keywords, and prints one JSON object to stdout. Diagnostics go to stderr
/// only — stdout is machine-read.
#[derive(Parser)]
#[command(name = "kotoba", version, about)]
struct Cli {
    /// Input language (overrides KOTOBA_LANG)
    #[arg(long, value_enum)]
    lang: Option<Language>,

    /// Maximum number of keywords to emit (overrides KOTOBA_TOP_K)
    #[arg(long)]
    top_k: Option<usize>,

    /// Diagnostic verbosity on stderr (-v info, -vv debug; default warnings only)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let (envelope, code) = match run(&cli) {
        Ok(envelope) => (envelope, ExitCode::SUCCESS),
        Err(e) => {
            // Best-effort envelope: the output contract holds even when the
            // run itself failed. Detail stays on stderr; the JSON carries
            // only the short top-level message.
            error!(error = ?e, "Unrecoverable failure");
            (ResultEnvelope::failed(e.to_string()), ExitCode::FAILURE)
        }
    };

    if let Err(e) = writeln!(io::stdout().lock(), "{}", envelope.to_json_line()) {
        error!(error = %e, "Failed to write envelope to stdout");
        return ExitCode::FAILURE;
    }

    code
}

fn run(cli: &Cli) -> Result<ResultEnvelope> {
    let mut config = Config::load()?;
    config.apply_overrides(cli.lang, cli.top_k);

    let raw = io::read_to_string(io::stdin()).context("failed to read stdin as UTF-8 text")?;
    let text = raw.trim();

    if text.is_empty() {
        debug!("Empty input after trimming, emitting empty keyword list");
        return Ok(ResultEnvelope::ok(Vec::new()));
    }

    debug!(chars = text.chars().count(), top_k = config.top_k, "Read input text");

    let pipeline = Pipeline::from_config(&config);
    Ok(ResultEnvelope::ok(pipeline.run(text)))
}

fn init_tracing(verbosity: u8) {
    // Verbosity off by default; stdout belongs to the JSON contract, so the
    // subscriber is pinned to stderr.
    let default_filter = match verbosity {
        0 => "kotoba=warn",
        1 => "kotoba=info",
        _ => "kotoba=debug",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter)),
        )
        .with_writer(io::stderr)
        .init();
}
