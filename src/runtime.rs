//! Python runtime detection
//!
//! Discovers the interpreter, resolves in-venv executable paths, and probes
//! PyPI reachability using pure Rust. Detection never writes to disk.
//!
//! # Design
//!
//! - **Fail Fast**: A missing interpreter is the only hard failure; everything
//!   else degrades to a warning
//! - **Pure Rust**: The connectivity check uses `TcpStream::connect_timeout`,
//!   not ping/shell
//! - **No `unwrap()`**: All fallible paths use `anyhow::Result`

// Library API - consumed by preflight and bootstrap orchestration
#![allow(dead_code)]

use anyhow::{Context, Result};
use std::fmt;
use std::net::{TcpStream, ToSocketAddrs};
use std::path::{Path, PathBuf};
use std::process::Command;
use std::time::Duration;

use crate::error::SetupError;
use crate::types::VenvLayout;

/// Interpreter names probed on PATH, in preference order.
const INTERPRETER_CANDIDATES: &[&str] = &["python3", "python"];

/// Endpoint probed for package-index reachability.
const PYPI_PROBE_ADDR: &str = "pypi.org:443";

/// Timeout for the reachability probe.
const PYPI_PROBE_TIMEOUT: Duration = Duration::from_secs(2);

/// Package-index reachability state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PyPiState {
    /// TCP connection to pypi.org:443 succeeded
    Reachable,
    /// TCP connection failed or timed out
    Unreachable,
}

impl PyPiState {
    /// Returns true if the package index answered the probe.
    pub fn is_reachable(self) -> bool {
        matches!(self, Self::Reachable)
    }
}

impl fmt::Display for PyPiState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Reachable => write!(f, "Reachable"),
            Self::Unreachable => write!(f, "Unreachable"),
        }
    }
}

/// Aggregated runtime detection results.
///
/// Created via `RuntimeInfo::detect()` before the bootstrap runs. Provides
/// the orchestration with facts about the environment (which interpreter to
/// invoke, which venv layout to expect, whether pip will be able to reach
/// the index).
#[derive(Debug, Clone)]
pub struct RuntimeInfo {
    /// Interpreter used to create the virtual environment
    pub interpreter: PathBuf,
    /// Venv layout for this platform
    pub layout: VenvLayout,
    /// Package-index reachability (warn-only; pip owns retries)
    pub pypi: PyPiState,
}

impl RuntimeInfo {
    /// Detect the Python runtime environment.
    ///
    /// An interpreter override (from the config file) is probed first; when
    /// it does not answer `--version`, this is a hard error rather than a
    /// silent fallback to PATH discovery.
    pub fn detect(override_interpreter: Option<&Path>) -> Result<Self> {
        let interpreter = match override_interpreter {
            Some(python) => {
                if !interpreter_responds(python) {
                    return Err(SetupError::interpreter(format!(
                        "configured interpreter {} did not answer --version",
                        python.display()
                    ))
                    .into());
                }
                python.to_path_buf()
            }
            None => find_interpreter()
                .ok_or_else(|| SetupError::interpreter("python3 or python not found in PATH"))?,
        };

        let layout = VenvLayout::current();
        let pypi = detect_pypi();

        tracing::info!(
            "Runtime detection: interpreter={}, layout={}, pypi={}",
            interpreter.display(),
            layout,
            pypi
        );

        Ok(Self {
            interpreter,
            layout,
            pypi,
        })
    }
}

/// Probe PATH for a working interpreter.
pub fn find_interpreter() -> Option<PathBuf> {
    INTERPRETER_CANDIDATES
        .iter()
        .copied()
        .map(PathBuf::from)
        .find(|candidate| interpreter_responds(candidate))
}

/// Check whether `<python> --version` exits successfully.
fn interpreter_responds(python: &Path) -> bool {
    Command::new(python)
        .arg("--version")
        .output()
        .map(|output| output.status.success())
        .unwrap_or(false)
}

/// Probe the package index with a bounded TCP connect.
///
/// Failure here is not fatal: pip may still succeed through a proxy or a
/// local mirror, so callers only warn on `Unreachable`.
pub fn detect_pypi() -> PyPiState {
    let addrs = match PYPI_PROBE_ADDR.to_socket_addrs() {
        Ok(addrs) => addrs,
        Err(_) => return PyPiState::Unreachable,
    };

    for addr in addrs {
        if TcpStream::connect_timeout(&addr, PYPI_PROBE_TIMEOUT).is_ok() {
            return PyPiState::Reachable;
        }
    }

    PyPiState::Unreachable
}

/// Check whether a directory holds a live virtual environment.
///
/// A live venv has the `pyvenv.cfg` marker and an interpreter under the
/// platform layout's bin directory. A bare directory (or a half-created
/// venv without an interpreter) is treated as absent, so creation runs.
pub fn venv_is_live(venv_dir: &Path) -> bool {
    venv_dir.join("pyvenv.cfg").is_file() && venv_python(venv_dir).is_file()
}

/// Resolve the in-venv interpreter path.
pub fn venv_python(venv_dir: &Path) -> PathBuf {
    let layout = VenvLayout::current();
    venv_dir.join(layout.bin_dir()).join(layout.python_name())
}

/// Resolve the in-venv pip path.
pub fn venv_pip(venv_dir: &Path) -> PathBuf {
    let layout = VenvLayout::current();
    venv_dir.join(layout.bin_dir()).join(layout.pip_name())
}

/// Count declared requirement lines (informational only; pip owns the format).
///
/// Blank lines and `#` comments are skipped, matching what pip itself
/// ignores.
pub fn count_requirements(path: &Path) -> Result<usize> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read requirements from {:?}", path))?;

    Ok(count_requirement_lines(&content))
}

/// Pure counting core, split out for testability.
pub fn count_requirement_lines(content: &str) -> usize {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .count()
}

/// Resolve the project root.
///
/// The bootstrap is anchored to its own location, not the caller's current
/// directory: the executable's directory is walked upward to the first
/// directory containing the requirements file. The walk falls back to the
/// current directory for `cargo run`-style invocations where the binary
/// lives in a target directory outside the checkout. An explicit override
/// wins over discovery.
pub fn resolve_project_root(
    requirements: &Path,
    override_root: Option<&Path>,
) -> Result<PathBuf> {
    if let Some(root) = override_root {
        return Ok(root.to_path_buf());
    }

    let mut starts: Vec<PathBuf> = Vec::new();
    if let Ok(exe) = std::env::current_exe() {
        if let Some(dir) = exe.parent() {
            starts.push(dir.to_path_buf());
        }
    }
    if let Ok(cwd) = std::env::current_dir() {
        starts.push(cwd);
    }

    for start in &starts {
        if let Some(root) = find_marker_upward(start, requirements) {
            return Ok(root);
        }
    }

    Err(SetupError::validation(format!(
        "could not locate a project root containing {:?}; run from the Outsmart checkout or pass --project-root",
        requirements
    ))
    .into())
}

/// Walk `start` and its ancestors for a directory containing `marker`.
fn find_marker_upward(start: &Path, marker: &Path) -> Option<PathBuf> {
    let mut dir = Some(start);
    while let Some(candidate) = dir {
        if candidate.join(marker).is_file() {
            return Some(candidate.to_path_buf());
        }
        dir = candidate.parent();
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_requirement_lines_skips_comments_and_blanks() {
        let content = "\
# pinned by CI
streamlit==1.35.0

anthropic==0.25.7
  # indented comment
openai==1.30.1
";
        assert_eq!(count_requirement_lines(content), 3);
    }

    #[test]
    fn test_count_requirement_lines_empty_file() {
        assert_eq!(count_requirement_lines(""), 0);
        assert_eq!(count_requirement_lines("\n\n# only comments\n"), 0);
    }

    #[test]
    fn test_venv_paths_follow_platform_layout() {
        let venv = Path::new("/proj/.venv");
        let python = venv_python(venv);
        let pip = venv_pip(venv);

        let layout = VenvLayout::current();
        assert!(python.starts_with(venv.join(layout.bin_dir())));
        assert!(pip.starts_with(venv.join(layout.bin_dir())));
    }

    #[test]
    fn test_venv_is_live_rejects_missing_dir() {
        assert!(!venv_is_live(Path::new("/nonexistent/.venv")));
    }

    #[test]
    fn test_find_marker_upward_stops_at_first_hit() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let nested = tmp.path().join("a").join("b");
        std::fs::create_dir_all(&nested).expect("mkdir");
        std::fs::write(tmp.path().join("requirements.txt"), "streamlit\n").expect("write");

        let found = find_marker_upward(&nested, Path::new("requirements.txt"));
        assert_eq!(found, Some(tmp.path().to_path_buf()));
    }

    #[test]
    fn test_resolve_project_root_honors_override() {
        let root = resolve_project_root(Path::new("requirements.txt"), Some(Path::new("/src/x")))
            .expect("override should win");
        assert_eq!(root, PathBuf::from("/src/x"));
    }
}
