//! Outsmart Setup - Main entry point
//!
//! Developer onboarding for the Outsmart arena: invoked with no arguments it
//! bootstraps the local environment (venv, editable SDK install, pinned
//! requirements) and prints launch instructions.

use tracing::{debug, error, info};

use outsmart_setup::bootstrap;
use outsmart_setup::cli::{Cli, Commands};
use outsmart_setup::config_file::SetupConfig;
use outsmart_setup::preflight;
use outsmart_setup::tool_traits::enable_dry_run;

/// Initialize the logger with appropriate settings
fn init_logger() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter) // Allows RUST_LOG env var to override
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Main application entry point
fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging first
    init_logger();
    info!("Outsmart Setup starting up");

    let cli = Cli::parse_args();
    debug!("CLI arguments parsed");

    if cli.dry_run {
        info!("Dry-run mode enabled");
        enable_dry_run();
    }

    match cli.command {
        Some(Commands::Validate { config }) => {
            info!("Validating configuration file: {:?}", config);
            match SetupConfig::load_from_file(&config) {
                Ok(loaded) => match loaded.validate() {
                    Ok(_) => {
                        info!("Configuration validation successful");
                        println!("✓ Configuration file is valid: {:?}", config);
                    }
                    Err(e) => {
                        error!("Configuration validation failed: {}", e);
                        eprintln!("✗ Configuration validation failed: {}", e);
                        std::process::exit(1);
                    }
                },
                Err(e) => {
                    error!("Failed to load configuration file: {}", e);
                    eprintln!("✗ Failed to load configuration file: {}", e);
                    std::process::exit(1);
                }
            }
        }
        Some(Commands::Check) => {
            info!("Running pre-flight checks");
            let report = preflight::verify_environment();
            preflight::print_report(&report);
            if !report.is_ok() {
                std::process::exit(1);
            }
        }
        Some(Commands::Setup {
            config,
            project_root,
        }) => {
            run_bootstrap(config.as_deref(), project_root.as_deref());
        }
        None => {
            info!("No command specified, running the bootstrap");
            run_bootstrap(None, None);
        }
    }

    Ok(())
}

/// Run the bootstrap and exit non-zero on the first failing step.
fn run_bootstrap(config: Option<&std::path::Path>, project_root: Option<&std::path::Path>) {
    if let Err(e) = bootstrap::run_setup(config, project_root) {
        error!("Setup failed: {:#}", e);
        eprintln!("✗ Setup failed: {:#}", e);
        std::process::exit(1);
    }
}
