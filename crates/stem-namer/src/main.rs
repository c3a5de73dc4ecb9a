//! Stem-namer: classify audio files into short, Pro Tools-friendly names.

mod cli;
mod config;
mod error;
mod output;
#[cfg(test)]
mod tests;

pub(crate) use {
    cli::Cli,
    error::{AppError, Result as AppResult},
    output::write_labels,
};

use crate::config::Config;

use clap::Parser;
use stem_namer_core::{
    Classifier, DEFAULT_CONFIDENCE_THRESHOLD, OnnxSoundModel, Vocabulary, ensure_labels,
};
use tracing::{error, info, instrument};
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_FILTER: &str = "stem_namer=info,stem_namer_core=info";

/// Application entry point.
fn main() {
    // Logs go to stderr; stdout carries only the JSON result.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        error!(error = %e, "Classification failed");
        std::process::exit(1);
    }
}

#[instrument(skip(cli), fields(files = cli.files.len()))]
fn run(cli: &Cli) -> AppResult<()> {
    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    config.validate_model_path()?;
    let model = OnnxSoundModel::new(&config.model.path)?;

    let labels_path = ensure_labels(&config.label_source())?;
    let vocabulary = Vocabulary::from_path(&labels_path)?;

    let classifier = Classifier::new(model, vocabulary)?;
    let labels = classifier.classify(&cli.files, DEFAULT_CONFIDENCE_THRESHOLD)?;

    info!(files = labels.len(), "Classification complete");

    write_labels(std::io::stdout().lock(), &labels)
}
