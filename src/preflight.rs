//! Pre-flight checks for the bootstrap environment
//!
//! Verifies the host before any filesystem write:
//! - A Python interpreter with the `venv` module is present
//! - Optional helper binaries are present (warn only)
//! - Not running as root (warn only; a root-owned venv breaks later
//!   editable installs for the normal user)
//! - PyPI answers a TCP probe (warn only; pip may use a mirror or proxy)
//!
//! If the interpreter check fails, the program exits with a clear error
//! message before the bootstrap starts.

use std::path::PathBuf;
use std::process::Command;

use crate::runtime::{self, PyPiState};

/// Result of environment verification
#[derive(Debug)]
pub struct PreflightReport {
    pub interpreter: Option<PathBuf>,
    pub missing_optional: Vec<String>,
    pub running_as_root: bool,
    pub pypi: PyPiState,
}

impl PreflightReport {
    /// Returns true if the hard checks passed
    pub fn is_ok(&self) -> bool {
        self.interpreter.is_some()
    }
}

/// Optional binaries (warn if missing but don't fail)
const OPTIONAL_BINARIES: &[&str] = &[
    "git", // SDK checkout updates (editable installs track the working tree)
];

/// Check if a binary is available in PATH
fn binary_exists(name: &str) -> bool {
    Command::new("which")
        .arg(name)
        .output()
        .map(|output| output.status.success())
        .unwrap_or(false)
}

/// Check if running as root (EUID 0)
fn is_running_as_root() -> bool {
    // Using nix crate for reliable EUID check
    nix::unistd::geteuid().is_root()
}

/// Perform all pre-flight checks and return the result
pub fn verify_environment() -> PreflightReport {
    let interpreter = runtime::find_interpreter();

    let mut missing_optional = Vec::new();
    for binary in OPTIONAL_BINARIES {
        if !binary_exists(binary) {
            tracing::debug!("Optional binary not found: {}", binary);
            missing_optional.push((*binary).to_string());
        }
    }

    let running_as_root = is_running_as_root();
    if running_as_root {
        tracing::warn!("Running as root; the venv will be owned by root");
    }

    let pypi = runtime::detect_pypi();

    PreflightReport {
        interpreter,
        missing_optional,
        running_as_root,
        pypi,
    }
}

/// Print a human-readable report for the `check` subcommand.
pub fn print_report(report: &PreflightReport) {
    println!();
    println!("Outsmart Setup - Pre-flight Report");
    println!("----------------------------------");

    match &report.interpreter {
        Some(python) => println!("✓ Python interpreter: {}", python.display()),
        None => println!("✗ Python interpreter: not found (python3/python)"),
    }

    if report.missing_optional.is_empty() {
        println!("✓ Optional binaries present");
    } else {
        println!(
            "! Missing optional binaries: {}",
            report.missing_optional.join(", ")
        );
    }

    if report.running_as_root {
        println!("! Running as root; prefer your normal user account");
    } else {
        println!("✓ Not running as root");
    }

    match report.pypi {
        PyPiState::Reachable => println!("✓ PyPI reachable"),
        PyPiState::Unreachable => {
            println!("! PyPI unreachable; pip will need a mirror or proxy")
        }
    }

    println!();
}

/// Print a pretty error message to stderr and exit
/// This is called before the bootstrap starts, so nothing has been written yet
pub fn print_error_and_exit(report: &PreflightReport) -> ! {
    eprintln!();
    eprintln!("╔══════════════════════════════════════════════════════════════════╗");
    eprintln!("║             Outsmart Setup - Pre-flight Check Failed             ║");
    eprintln!("╚══════════════════════════════════════════════════════════════════╝");
    eprintln!();

    if report.interpreter.is_none() {
        eprintln!("❌ ERROR: No Python interpreter found");
        eprintln!("   Neither python3 nor python answered on PATH.");
        eprintln!();
        eprintln!("   Solution: install Python 3 with your package manager, e.g.:");
        eprintln!("     macOS:          brew install python3");
        eprintln!("     Debian/Ubuntu:  sudo apt install python3 python3-venv");
        eprintln!("     Arch:           sudo pacman -S python");
        eprintln!();
    }

    eprintln!("╔══════════════════════════════════════════════════════════════════╗");
    eprintln!("║  Fix the above issues and try again.                             ║");
    eprintln!("╚══════════════════════════════════════════════════════════════════╝");
    eprintln!();

    std::process::exit(1);
}
