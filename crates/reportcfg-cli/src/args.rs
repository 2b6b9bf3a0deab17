use crate::types::{DimensionArg, LogLevel, OutputFormat, SubjectArg};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "reportcfg")]
#[command(
    about = "Resolve view, group-by and visualization choices for analytics reports",
    long_about = None
)]
#[command(version)]
pub struct Cli {
    /// Config file (defaults to $REPORTCFG_CONFIG, then the user config dir)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format (defaults to the config file's `format`)
    #[arg(long, global = true)]
    pub format: Option<OutputFormat>,

    #[arg(long, default_value = "warn", global = true)]
    pub log_level: LogLevel,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the options offered for a report subject
    Catalog {
        #[arg(long)]
        subject: Option<SubjectArg>,

        /// Only list one dimension
        #[arg(long)]
        dimension: Option<DimensionArg>,
    },

    /// List options of one dimension, flagged against a report's selection
    Options {
        /// Report JSON file, `-` for stdin
        report: String,

        #[arg(long)]
        dimension: DimensionArg,
    },

    /// Check whether a report's selection is a legal combination
    Check {
        /// Report JSON file, `-` for stdin
        report: String,
    },

    /// Change one dimension and resolve the others
    Update {
        /// Report JSON file, `-` for stdin
        report: String,

        #[arg(long)]
        dimension: DimensionArg,

        /// New value as JSON; bare words are taken as strings
        #[arg(long, allow_hyphen_values = true)]
        value: String,

        /// Print the patched report instead of the patch
        #[arg(long)]
        apply: bool,

        /// Write the patched report to a file (implies --apply)
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Print the display label of a value
    Label {
        #[arg(long)]
        subject: Option<SubjectArg>,

        #[arg(long)]
        dimension: DimensionArg,

        /// Value as JSON; bare words are taken as strings
        #[arg(long, allow_hyphen_values = true)]
        value: String,
    },

    /// Pick the duration axis step for millisecond values
    Ticks {
        #[arg(required = true, allow_negative_numbers = true)]
        values: Vec<f64>,
    },

    /// Write a default config file
    Init {
        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },
}
