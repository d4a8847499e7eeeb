//! Outsmart Setup Library
//!
//! This library provides the core functionality for the Outsmart developer
//! onboarding CLI: virtual environment bootstrap, local SDK install, and
//! requirements install, orchestrated with typed tool arguments and
//! fail-fast semantics.

pub mod bootstrap;
pub mod cli;
pub mod config_file;
pub mod engine;
pub mod error;
pub mod preflight;
pub mod runtime;
pub mod tool_runner;
pub mod tool_traits;
pub mod tools;
pub mod types;

// Re-export main types for convenience
pub use cli::{Cli, Commands};
pub use config_file::SetupConfig;
pub use error::SetupError;
pub use engine::plan::{SetupOp, SetupPlan, calculate_setup_plan};
pub use preflight::{PreflightReport, verify_environment};
pub use runtime::{PyPiState, RuntimeInfo};
pub use tool_runner::{ToolOutput, run_tool_safe};
pub use tool_traits::{ToolArgs, disable_dry_run, enable_dry_run, is_dry_run};
pub use tools::pip::{EditableInstallArgs, RequirementsInstallArgs};
pub use tools::venv::CreateVenvArgs;
pub use types::{SetupStage, VenvLayout};
