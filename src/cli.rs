use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Outsmart Setup - developer onboarding for the Outsmart arena
#[derive(Parser)]
#[command(name = "outsmart-setup")]
#[command(about = "Bootstraps the Outsmart development environment: venv, SDK, requirements")]
#[command(version)]
pub struct Cli {
    /// Dry-run mode: show what would be executed without making changes.
    ///
    /// In this mode no virtual environment is created and no pip
    /// invocation runs; each step is printed and reported successful.
    #[arg(long, global = true)]
    pub dry_run: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the environment bootstrap (same as invoking with no arguments)
    Setup {
        /// Path to a setup configuration file (defaults are used otherwise)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Project root override (skips executable-relative discovery)
        #[arg(long)]
        project_root: Option<PathBuf>,
    },
    /// Run pre-flight checks and report, without touching the filesystem
    Check,
    /// Validate a setup configuration file
    Validate {
        /// Path to configuration file to validate
        config: PathBuf,
    },
}

impl Cli {
    pub fn parse_args() -> Self {
        <Self as clap::Parser>::parse()
    }
}
