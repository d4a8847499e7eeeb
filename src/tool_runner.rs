//! Type-Safe Tool Execution
//!
//! This module provides the ONLY sanctioned way to execute the external
//! tools the bootstrap depends on. All execution MUST go through
//! `run_tool_safe` to ensure:
//!
//! - Type-safe argument passing via the `ToolArgs` trait
//! - Uniform dry-run handling
//! - Captured stdout/stderr for verbatim relay to the console
//!
//! # Architecture Rule
//!
//! `run_tool_safe` is the execution gatekeeper. Any attempt to use
//! `Command::new` directly for venv or pip work violates the architecture.

use crate::tool_traits::{self, ToolArgs};
use anyhow::{Context, Result};
use std::process::{Command, Stdio};
use tracing::info;

/// Execute an external tool with type-safe arguments.
///
/// # Dry-Run
///
/// When dry-run mode is active the tool is not spawned; the returned
/// output carries a `[DRY RUN]` marker, reports success, and sets
/// `dry_run` so callers can distinguish it from a real run.
///
/// # Returns
///
/// - `Ok(output)` - Tool ran (or was skipped in dry-run) with
///   stdout/stderr captured; check `success` for the exit status
/// - `Err` - Tool could not be spawned or waited on
pub fn run_tool_safe<T: ToolArgs>(args: &T) -> Result<ToolOutput> {
    let name = args.display_name();
    let program = args.program();
    let cli_args = args.to_cli_args();
    let env_vars = args.get_env_vars();

    // Log exact command and environment for transparency
    info!(
        "run_tool_safe: {} {:?} args={:?} env={:?}",
        name, program, cli_args, env_vars
    );

    if tool_traits::is_dry_run() {
        return Ok(ToolOutput {
            stdout: format!("[DRY RUN] Skipped: {}\n", name),
            stderr: String::new(),
            exit_code: Some(0),
            success: true,
            dry_run: true,
        });
    }

    let mut cmd = Command::new(&program);
    cmd.args(&cli_args)
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .stdin(Stdio::null());

    // Inject environment variables from the typed args
    for (key, value) in &env_vars {
        cmd.env(key, value);
    }

    let output = cmd
        .output()
        .with_context(|| format!("Failed to spawn {} ({})", name, program.display()))?;

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let exit_code = output.status.code();

    if output.status.success() {
        info!("Tool {} executed successfully", name);
        Ok(ToolOutput {
            stdout,
            stderr,
            exit_code,
            success: true,
            dry_run: false,
        })
    } else {
        let code = exit_code.unwrap_or(-1);
        info!("Tool {} failed with exit code {}", name, code);
        Ok(ToolOutput {
            stdout,
            stderr,
            exit_code,
            success: false,
            dry_run: false,
        })
    }
}

/// Output from a tool execution.
#[derive(Debug, Clone)]
pub struct ToolOutput {
    /// Standard output from the tool.
    pub stdout: String,
    /// Standard error from the tool.
    pub stderr: String,
    /// Exit code (None if terminated by signal).
    pub exit_code: Option<i32>,
    /// Whether the tool exited successfully (exit code 0).
    pub success: bool,
    /// Whether the tool was skipped by dry-run mode.
    pub dry_run: bool,
}

impl ToolOutput {
    /// Check if the tool succeeded and return an error if not.
    pub fn ensure_success(&self, context: &str) -> Result<()> {
        if self.success {
            Ok(())
        } else {
            let code = self.exit_code.unwrap_or(-1);
            anyhow::bail!(
                "{} failed (exit code {}): {}",
                context,
                code,
                self.stderr.trim()
            )
        }
    }
}
