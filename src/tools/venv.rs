//! Virtual environment creation arguments.

use crate::tool_traits::ToolArgs;
use std::path::PathBuf;

/// Arguments for `<python> -m venv <dir>`.
///
/// Idempotence lives a level up: the plan engine elides this op entirely
/// when the environment is already live, so reaching the runner means the
/// directory needs creating.
#[derive(Debug, Clone)]
pub struct CreateVenvArgs {
    /// Interpreter discovered by preflight (or the config override)
    pub python: PathBuf,
    /// Absolute environment directory to create
    pub venv_dir: PathBuf,
}

impl ToolArgs for CreateVenvArgs {
    fn program(&self) -> PathBuf {
        self.python.clone()
    }

    fn to_cli_args(&self) -> Vec<String> {
        vec![
            "-m".to_string(),
            "venv".to_string(),
            self.venv_dir.display().to_string(),
        ]
    }

    fn display_name(&self) -> &'static str {
        "create-venv"
    }
}
