//! pip invocation arguments for the two install steps.

use crate::tool_traits::ToolArgs;
use std::path::PathBuf;

/// Environment contract shared by every pip invocation: never prompt, and
/// skip the self-upgrade banner that confuses onboarding output.
fn pip_env() -> Vec<(String, String)> {
    vec![
        ("PIP_NO_INPUT".to_string(), "1".to_string()),
        ("PIP_DISABLE_PIP_VERSION_CHECK".to_string(), "1".to_string()),
    ]
}

/// Arguments for `<pip> install -e <package_dir>`.
///
/// Editable mode keeps the SDK checkout as the live source of truth; edits
/// there are visible without reinstalling.
#[derive(Debug, Clone)]
pub struct EditableInstallArgs {
    /// In-venv pip resolved from the environment directory
    pub pip: PathBuf,
    /// Local package directory (the SDK checkout)
    pub package_dir: PathBuf,
}

impl ToolArgs for EditableInstallArgs {
    fn program(&self) -> PathBuf {
        self.pip.clone()
    }

    fn to_cli_args(&self) -> Vec<String> {
        vec![
            "install".to_string(),
            "-e".to_string(),
            self.package_dir.display().to_string(),
        ]
    }

    fn get_env_vars(&self) -> Vec<(String, String)> {
        pip_env()
    }

    fn display_name(&self) -> &'static str {
        "pip-install-editable"
    }
}

/// Arguments for `<pip> install -r <requirements>`.
#[derive(Debug, Clone)]
pub struct RequirementsInstallArgs {
    /// In-venv pip resolved from the environment directory
    pub pip: PathBuf,
    /// Requirements file (format owned by pip)
    pub requirements: PathBuf,
}

impl ToolArgs for RequirementsInstallArgs {
    fn program(&self) -> PathBuf {
        self.pip.clone()
    }

    fn to_cli_args(&self) -> Vec<String> {
        vec![
            "install".to_string(),
            "-r".to_string(),
            self.requirements.display().to_string(),
        ]
    }

    fn get_env_vars(&self) -> Vec<(String, String)> {
        pip_env()
    }

    fn display_name(&self) -> &'static str {
        "pip-install-requirements"
    }
}
