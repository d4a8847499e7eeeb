//! Type-safe external tool contracts.
//!
//! This module provides the `ToolArgs` trait for ensuring compile-time
//! correctness of external command invocations. Instead of raw string
//! vectors, Rust structs implement this trait to produce validated CLI
//! arguments and environment variables.
//!
//! # Design Goals
//!
//! 1. **Compile-Time Safety**: Argument mismatches (e.g., `-e` vs `-r`)
//!    are caught at compile time, not runtime.
//! 2. **Single Source of Truth**: The struct definition IS the contract.
//! 3. **Environment Contracts**: pip behavior knobs are passed via env vars,
//!    matching what pip reads.

use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};

/// Trait for typed external tool arguments.
///
/// Implementors define the mapping between Rust struct fields and the
/// flags/environment variables of the external command. This ensures the
/// compiler catches flag mismatches.
///
/// # Contract
///
/// - `program()`: Returns the executable to invoke (may be venv-relative).
/// - `to_cli_args()`: Returns CLI arguments exactly as the tool expects them.
/// - `get_env_vars()`: Returns environment variables required by the tool.
/// - `display_name()`: Returns a short label for logs and dry-run output.
pub trait ToolArgs {
    /// Executable to invoke.
    ///
    /// Resolved at plan time: the system interpreter for venv creation, the
    /// in-venv pip for installs.
    fn program(&self) -> PathBuf;

    /// Convert struct fields to CLI arguments.
    ///
    /// Returns a vector of strings exactly as they should be passed to the
    /// tool. Example: `["install", "-e", "glueco-sdk"]`
    fn to_cli_args(&self) -> Vec<String>;

    /// Get required environment variables.
    ///
    /// Returns key-value pairs for environment variables the tool requires.
    /// Example: `[("PIP_NO_INPUT", "1")]`
    fn get_env_vars(&self) -> Vec<(String, String)> {
        Vec::new()
    }

    /// Short label for logs and dry-run output (e.g., "create-venv").
    fn display_name(&self) -> &'static str;
}

/// Global dry-run flag, set once from the CLI before any tool runs.
static DRY_RUN: AtomicBool = AtomicBool::new(false);

/// Enable dry-run mode: tools are logged and skipped.
pub fn enable_dry_run() {
    DRY_RUN.store(true, Ordering::SeqCst);
}

/// Disable dry-run mode (the default).
pub fn disable_dry_run() {
    DRY_RUN.store(false, Ordering::SeqCst);
}

/// Check whether dry-run mode is active.
pub fn is_dry_run() -> bool {
    DRY_RUN.load(Ordering::SeqCst)
}
