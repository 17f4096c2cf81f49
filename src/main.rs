//! Entry point for the catalog filler.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;
use tsfill::catalog::TranslationCatalog;
use tsfill::driver::LocaleOutcome;
use tsfill::{
    config,
    driver,
};

/// Fills missing translations in Qt Linguist `.ts` catalogs.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Settings JSON file (locales, derived-locale fallback, file prefix).
    /// Built-in defaults are used when omitted.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Phrase catalog JSON file (phrase -> locale -> text).
    #[arg(long)]
    catalog: PathBuf,

    /// Directory containing the `.ts` catalog files.
    #[arg(long, default_value = "resources/translations")]
    dir: PathBuf,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();

    let settings = match config::load_settings(args.config.as_deref()) {
        Ok(settings) => settings,
        Err(e) => {
            tracing::error!("{e}");
            return ExitCode::FAILURE;
        }
    };

    let catalog = match TranslationCatalog::load(&args.catalog) {
        Ok(catalog) => catalog,
        Err(e) => {
            tracing::error!("{e}");
            return ExitCode::FAILURE;
        }
    };

    let report = driver::run(&settings, &catalog, &args.dir);

    for (locale, outcome) in report.outcomes() {
        match outcome {
            LocaleOutcome::Updated(stats) => {
                tracing::info!(locale = %locale, filled = stats.filled, missing = stats.missing);
            }
            LocaleOutcome::Skipped(e) => tracing::warn!(locale = %locale, "skipped: {e}"),
        }
    }
    let totals = report.totals();
    tracing::info!(
        filled = totals.filled,
        missing = totals.missing,
        skipped_locales = report.skipped(),
        "Run complete"
    );

    // Partial progress is success; only unusable inputs fail the process.
    ExitCode::SUCCESS
}
