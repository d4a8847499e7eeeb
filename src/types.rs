//! Type-safe setup types for outsmart-setup
//!
//! This module replaces stringly-typed step and platform handling with proper
//! Rust enums that provide compile-time validation and exhaustive matching.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Bootstrap stage, in execution order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[derive(Display, EnumString, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum SetupStage {
    /// Create the virtual environment if it does not exist
    #[default]
    #[strum(serialize = "venv")]
    Venv,
    /// Install the local SDK in editable mode
    #[strum(serialize = "sdk")]
    Sdk,
    /// Install the pinned requirements file
    #[strum(serialize = "requirements")]
    Requirements,
}

impl SetupStage {
    /// Check if this stage writes into the virtual environment
    pub fn installs_packages(&self) -> bool {
        matches!(self, Self::Sdk | Self::Requirements)
    }
}

/// Virtual environment directory layout
///
/// `python -m venv` places the interpreter and pip under `bin/` on POSIX
/// systems and under `Scripts/` on Windows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[derive(Display, EnumString, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum VenvLayout {
    #[default]
    #[strum(serialize = "posix")]
    Posix,
    #[strum(serialize = "windows")]
    Windows,
}

impl VenvLayout {
    /// Layout of the platform this binary was built for
    pub fn current() -> Self {
        if cfg!(windows) {
            Self::Windows
        } else {
            Self::Posix
        }
    }

    /// Directory that holds the interpreter and pip
    pub fn bin_dir(&self) -> &'static str {
        match self {
            Self::Posix => "bin",
            Self::Windows => "Scripts",
        }
    }

    /// Interpreter executable name inside `bin_dir`
    pub fn python_name(&self) -> &'static str {
        match self {
            Self::Posix => "python",
            Self::Windows => "python.exe",
        }
    }

    /// pip executable name inside `bin_dir`
    pub fn pip_name(&self) -> &'static str {
        match self {
            Self::Posix => "pip",
            Self::Windows => "pip.exe",
        }
    }

    /// Copy-pasteable activation command for the completion message
    pub fn activate_hint(&self, venv_dir: &str) -> String {
        match self {
            Self::Posix => format!("source {}/bin/activate", venv_dir),
            Self::Windows => format!("{}\\Scripts\\activate", venv_dir),
        }
    }
}
