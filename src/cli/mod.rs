//! # statusctl CLI
//!
//! Offline command-line interface for the status reconciler.
//!
//! Applies the engine's status transitions to a `StatusProbe` manifest on disk,
//! which makes it possible to inspect what a controller would persist without
//! a cluster.
//!
//! ## Usage
//!
//! ```bash
//! # Mark a probe as reconciling
//! statusctl progress probe.yaml --reason Progressing --message "Fetching artifact" --write
//!
//! # Finalize a failed attempt
//! statusctl finalize probe.yaml --error "fetch failed" --write
//!
//! # Finalize a successful attempt of a reconciler that requeues every 60s
//! statusctl finalize probe.yaml --requeue-after 60 --write
//!
//! # Recompute the declared summaries
//! statusctl summarize probe.yaml
//!
//! # Show the status patch a controller would send
//! statusctl patch probe.yaml --field-owner my-controller
//!
//! # Show conditions
//! statusctl show probe.yaml
//! ```

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use status_reconciler::config::EngineConfig;
use status_reconciler::observability::{self, metrics};
use std::path::PathBuf;

mod finalize;
mod patch;
mod progress;
mod show;
mod summarize;

/// Status reconciler CLI
#[derive(Parser)]
#[command(name = "statusctl")]
#[command(
    about = "Status reconciler CLI",
    long_about = None,
    after_help = "\
Environment:
  STATUS_FIELD_OWNER     Field manager for status patches
  READY_SUCCESS_MESSAGE  Ready=True message when the reconciler left none
  SUCCESS_REQUEUE_SECS   Success requeue interval (0 = event-driven)
  LOG_LEVEL, LOG_FORMAT  Logging (RUST_LOG takes precedence)

Examples:
  statusctl progress probe.yaml --reason Progressing --message working
  statusctl finalize probe.yaml --requeue-after 60 --write
  statusctl patch probe.yaml
"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Print Prometheus metrics after the command
    #[arg(long, global = true)]
    metrics: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Mark the resource as reconciling before the outcome is known
    Progress {
        /// Path to the StatusProbe manifest
        #[arg(value_name = "MANIFEST")]
        manifest: PathBuf,

        /// Reason for Reconciling (and Ready=Unknown when downgraded)
        #[arg(long, default_value = status_reconciler::conditions::PROGRESSING_REASON)]
        reason: String,

        /// Message for Reconciling (and Ready=Unknown when downgraded)
        #[arg(long, default_value = "")]
        message: String,

        /// An out-of-band change invalidated Ready=True
        #[arg(long)]
        drift: bool,

        /// Write the result back to the manifest
        #[arg(long)]
        write: bool,
    },
    /// Finalize the status for the outcome of a reconcile attempt
    Finalize {
        /// Path to the StatusProbe manifest
        #[arg(value_name = "MANIFEST")]
        manifest: PathBuf,

        /// The attempt failed with this error
        #[arg(long, value_name = "MESSAGE")]
        error: Option<String>,

        /// The attempt asked for an immediate requeue
        #[arg(long)]
        requeue: bool,

        /// The attempt asked for a requeue after this many seconds
        #[arg(long, value_name = "SECS", default_value_t = 0)]
        requeue_after: u64,

        /// Write the result back to the manifest
        #[arg(long)]
        write: bool,
    },
    /// Recompute the condition summaries declared in the spec
    Summarize {
        /// Path to the StatusProbe manifest
        #[arg(value_name = "MANIFEST")]
        manifest: PathBuf,

        /// Write the result back to the manifest
        #[arg(long)]
        write: bool,
    },
    /// Show the status patch and field manager a controller would use
    Patch {
        /// Path to the StatusProbe manifest
        #[arg(value_name = "MANIFEST")]
        manifest: PathBuf,

        /// Field manager (defaults to STATUS_FIELD_OWNER)
        #[arg(long)]
        field_owner: Option<String>,
    },
    /// Show the conditions of a resource
    Show {
        /// Path to the StatusProbe manifest
        #[arg(value_name = "MANIFEST")]
        manifest: PathBuf,
    },
}

fn main() -> Result<()> {
    let config = EngineConfig::from_env();
    observability::init_tracing(&config)?;

    let cli = Cli::parse();
    if cli.metrics {
        metrics::register_metrics().context("Failed to register metrics")?;
    }

    let result = match cli.command {
        Commands::Progress {
            manifest,
            reason,
            message,
            drift,
            write,
        } => progress::progress_command(&manifest, &reason, message, drift, write),
        Commands::Finalize {
            manifest,
            error,
            requeue,
            requeue_after,
            write,
        } => finalize::finalize_command(
            &config,
            &manifest,
            error,
            requeue,
            requeue_after,
            write,
        ),
        Commands::Summarize { manifest, write } => summarize::summarize_command(&manifest, write),
        Commands::Patch {
            manifest,
            field_owner,
        } => patch::patch_command(&config, &manifest, field_owner),
        Commands::Show { manifest } => show::show_command(&manifest),
    };

    if cli.metrics {
        print!("{}", metrics::gather_text()?);
    }
    result
}
