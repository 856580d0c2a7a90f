// SPDX-FileCopyrightText: 2026 Costscope Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! costscope - cost estimator for multi-component AI service pipelines.
//!
//! This is the binary entry point. It loads configuration, the price catalog
//! and the customer profile table, then prints estimates.

mod report;
mod sources;

use std::io::{self, IsTerminal, Write};
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use costscope_config::CostscopeConfig;
use costscope_core::{ComponentKind, ComponentSelection, CostError};
use costscope_cost::CostEngine;

use crate::report::{EstimateReport, SummaryRow};

/// costscope - cost estimator for multi-component AI service pipelines.
#[derive(Parser, Debug)]
#[command(name = "costscope", version, about, long_about = None)]
struct Cli {
    /// Configuration file to load instead of the standard locations.
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Price catalog (TOML), overriding `sources.catalog_path`.
    #[arg(long, global = true, value_name = "PATH")]
    catalog: Option<PathBuf>,

    /// Customer profile table (CSV), overriding `sources.profiles_path`.
    #[arg(long, global = true, value_name = "PATH")]
    profiles: Option<PathBuf>,

    #[command(flatten)]
    overrides: ProviderOverrides,

    #[command(subcommand)]
    command: Commands,
}

/// Per-kind provider overrides on top of the configured selection.
#[derive(Args, Debug, Default)]
struct ProviderOverrides {
    /// LLM provider.
    #[arg(long, global = true, value_name = "PROVIDER")]
    llm: Option<String>,
    /// Embedding provider.
    #[arg(long, global = true, value_name = "PROVIDER")]
    embedding: Option<String>,
    /// Speech-to-text provider.
    #[arg(long, global = true, value_name = "PROVIDER")]
    audio: Option<String>,
    /// Image captioning provider.
    #[arg(long, global = true, value_name = "PROVIDER")]
    image_captioning: Option<String>,
    /// Face recognition provider.
    #[arg(long, global = true, value_name = "PROVIDER")]
    face_recognition: Option<String>,
    /// Vector store provider.
    #[arg(long, global = true, value_name = "PROVIDER")]
    rag: Option<String>,
    /// Blob storage tier.
    #[arg(long, global = true, value_name = "PROVIDER")]
    blob: Option<String>,
}

impl ProviderOverrides {
    fn apply(&self, selection: &mut ComponentSelection) {
        let overrides = [
            (ComponentKind::Llm, &self.llm),
            (ComponentKind::Embedding, &self.embedding),
            (ComponentKind::Audio, &self.audio),
            (ComponentKind::ImageCaptioning, &self.image_captioning),
            (ComponentKind::FaceRecognition, &self.face_recognition),
            (ComponentKind::Rag, &self.rag),
            (ComponentKind::Blob, &self.blob),
        ];
        for (kind, provider) in overrides {
            if let Some(provider) = provider {
                selection.set(kind, provider.as_str());
            }
        }
    }
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Estimate costs for one customer, or a summary for all of them.
    Estimate {
        /// Customer name from the profile table.
        #[arg(required_unless_present = "all", conflicts_with = "all")]
        customer: Option<String>,
        /// One summary line per customer.
        #[arg(long)]
        all: bool,
        /// Output as JSON.
        #[arg(long)]
        json: bool,
        /// Disable colors.
        #[arg(long)]
        plain: bool,
    },
    /// List customer profiles.
    Profiles {
        /// Output as JSON.
        #[arg(long)]
        json: bool,
        /// Disable colors.
        #[arg(long)]
        plain: bool,
    },
    /// List price catalog providers, optionally for one component kind.
    Providers {
        /// Component kind, e.g. `LLM`, `RAG` or `blob`.
        kind: Option<ComponentKind>,
        /// Disable colors.
        #[arg(long)]
        plain: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    let loaded = match &cli.config {
        Some(path) => costscope_config::load_and_validate_path(path),
        None => costscope_config::load_and_validate(),
    };
    let mut config = match loaded {
        Ok(config) => config,
        Err(errors) => {
            costscope_config::render_errors(&errors);
            std::process::exit(1);
        }
    };

    init_tracing(&config.logging.level);

    if let Some(path) = &cli.catalog {
        config.sources.catalog_path = path.display().to_string();
    }
    if let Some(path) = &cli.profiles {
        config.sources.profiles_path = path.display().to_string();
    }
    cli.overrides.apply(&mut config.selection);

    if let Err(e) = run(cli.command, &config) {
        eprintln!("costscope: {}", error_chain(&e));
        std::process::exit(1);
    }
}

fn run(command: Commands, config: &CostscopeConfig) -> Result<(), CostError> {
    let stdout = io::stdout();
    let use_color = |plain: bool| !plain && stdout.is_terminal();
    let mut out = stdout.lock();

    match command {
        Commands::Estimate {
            customer,
            all,
            json,
            plain,
        } => {
            let catalog = sources::load_catalog(Path::new(&config.sources.catalog_path))?;
            let profiles = sources::load_profiles(Path::new(&config.sources.profiles_path))?;
            let engine = CostEngine::new(&catalog, &config.conversion)?;

            if all {
                let totals = profiles
                    .iter()
                    .map(|p| engine.compute_costs(&config.selection, &p.usage))
                    .collect::<Result<Vec<_>, _>>()?;
                let rows: Vec<SummaryRow<'_>> = profiles
                    .iter()
                    .zip(&totals)
                    .map(|(p, t)| SummaryRow {
                        customer: &p.customer,
                        monthly_recurring_cost: t.monthly_recurring_cost,
                        one_time_ingestion_cost: t.one_time_ingestion_cost,
                    })
                    .collect();
                if json {
                    report::write_json(&mut out, &rows).map_err(output_error)?;
                } else {
                    report::write_summary(&mut out, &rows, use_color(plain))
                        .map_err(output_error)?;
                }
            } else {
                let name = customer.unwrap_or_default();
                let profile = sources::find_profile(&profiles, &name)?;
                let breakdown = engine.breakdown(&config.selection, &profile.usage)?;
                let estimate = EstimateReport {
                    customer: &profile.customer,
                    usage: &profile.usage,
                    selection: &config.selection,
                    breakdown: &breakdown,
                };
                if json {
                    report::write_json(&mut out, &estimate).map_err(output_error)?;
                } else {
                    report::write_estimate(&mut out, &estimate, use_color(plain))
                        .map_err(output_error)?;
                }
            }
        }
        Commands::Profiles { json, plain } => {
            let profiles = sources::load_profiles(Path::new(&config.sources.profiles_path))?;
            if json {
                report::write_json(&mut out, &profiles).map_err(output_error)?;
            } else {
                report::write_profiles(&mut out, &profiles, use_color(plain))
                    .map_err(output_error)?;
            }
        }
        Commands::Providers { kind, plain } => {
            let catalog = sources::load_catalog(Path::new(&config.sources.catalog_path))?;
            report::write_providers(&mut out, &catalog, kind, use_color(plain))
                .map_err(output_error)?;
        }
    }

    out.flush().map_err(output_error)
}

fn output_error(e: io::Error) -> CostError {
    CostError::source("failed to write output", e)
}

/// The error message followed by each underlying cause, joined with `: `.
fn error_chain(error: &CostError) -> String {
    let mut message = error.to_string();
    let mut cause = std::error::Error::source(error);
    while let Some(inner) = cause {
        message.push_str(": ");
        message.push_str(&inner.to_string());
        cause = inner.source();
    }
    message
}

/// Initialize the tracing subscriber.
///
/// `RUST_LOG` wins when set. Logs go to stderr so stdout stays parseable.
fn init_tracing(log_level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("costscope={log_level},warn")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_names(false)
        .with_writer(io::stderr)
        .init();
}
