//! Command-line argument parsing for MedScreen
//!
//! Provides clap-based CLI with subcommands and verbosity control.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// MedScreen - Interactive disease risk screening from pre-trained models
#[derive(Parser, Debug)]
#[command(name = "medscreen")]
#[command(version)]
#[command(about = "Screen for diabetes, heart disease, and Parkinson's with stored models", long_about = None)]
pub struct Args {
    /// Directory containing the model artifacts (overrides config)
    #[arg(long)]
    pub models_dir: Option<PathBuf>,

    /// Configuration file path
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Verbosity level: default (normal), -v (verbose), -vv (very verbose)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (suppress banner and non-essential output)
    #[arg(short, long)]
    pub quiet: bool,

    /// Subcommand
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start an interactive screening session (default)
    Start,

    /// Run a single prediction from the command line
    Predict {
        /// Domain: diabetes, heart, or parkinsons (or a menu index 1-3)
        domain: String,

        /// Feature values, one per field, in field order
        #[arg(value_name = "VALUES", num_args = 0.., allow_hyphen_values = true)]
        values: Vec<String>,
    },

    /// List the screening domains and their input fields
    Domains,

    /// Check that all model artifacts are present and loadable
    Doctor,

    /// Display current configuration
    Config,
}

/// Verbosity level enum
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    Quiet,
    Normal,
    Verbose,
    VeryVerbose,
}

impl Args {
    /// Get verbosity level based on flags
    pub fn verbosity(&self) -> Verbosity {
        if self.quiet {
            Verbosity::Quiet
        } else {
            match self.verbose {
                0 => Verbosity::Normal,
                1 => Verbosity::Verbose,
                _ => Verbosity::VeryVerbose,
            }
        }
    }
}

impl Verbosity {
    /// Convert to string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Verbosity::Quiet => "quiet",
            Verbosity::Normal => "normal",
            Verbosity::Verbose => "verbose",
            Verbosity::VeryVerbose => "very verbose",
        }
    }
}
