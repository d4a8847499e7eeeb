//! Bootstrap orchestration
//!
//! Drives the whole onboarding sequence: load config, pre-flight, compute
//! the plan, execute each operation through the tool runner, relay sub-tool
//! output verbatim, and print the completion message. Fail-fast: the first
//! failing operation aborts the run; nothing after it executes.

use anyhow::Result;
use std::path::Path;
use tracing::{info, warn};

use crate::config_file::SetupConfig;
use crate::engine::plan::{SetupOp, SetupPlan, calculate_setup_plan};
use crate::preflight;
use crate::runtime::{self, PyPiState, RuntimeInfo};
use crate::tool_runner::{ToolOutput, run_tool_safe};
use crate::tools::pip::{EditableInstallArgs, RequirementsInstallArgs};
use crate::tools::venv::CreateVenvArgs;
use crate::types::VenvLayout;

/// Run the full bootstrap.
///
/// `config_path` selects an optional setup config file; `project_root`
/// overrides executable-relative root discovery. Both default to the
/// standard checkout layout.
pub fn run_setup(config_path: Option<&Path>, project_root: Option<&Path>) -> Result<()> {
    let config = match config_path {
        Some(path) => {
            info!("Loading setup configuration from {:?}", path);
            SetupConfig::load_from_file(path)?
        }
        None => SetupConfig::default(),
    };
    config.validate()?;

    // Pre-flight runs before any filesystem write
    let report = preflight::verify_environment();
    if !report.is_ok() {
        preflight::print_error_and_exit(&report);
    }
    if report.running_as_root {
        eprintln!("⚠ Running as root; the venv will be owned by root.");
    }
    if report.pypi == PyPiState::Unreachable {
        warn!("PyPI is unreachable; pip will need a configured mirror or proxy");
    }

    let rt = RuntimeInfo::detect(config.python.as_deref())?;
    let root = runtime::resolve_project_root(&config.requirements, project_root)?;
    info!("Project root: {}", root.display());

    let venv_exists = runtime::venv_is_live(&root.join(&config.venv_dir));
    let plan = calculate_setup_plan(&root, &config, venv_exists)?;

    println!("🚀 Bootstrapping the Outsmart development environment");
    if plan.venv_exists {
        println!(
            "✓ Virtual environment already present at {}, skipping creation",
            plan.venv_dir.display()
        );
    }

    let total = plan.ops.len();
    for (step, op) in plan.ops.iter().enumerate() {
        execute_op(op, step + 1, total, &rt, &plan)?;
    }

    print_next_steps(&config, &plan);
    Ok(())
}

/// Execute a single plan operation, relaying its output and failing fast.
fn execute_op(
    op: &SetupOp,
    step: usize,
    total: usize,
    rt: &RuntimeInfo,
    plan: &SetupPlan,
) -> Result<()> {
    let output = match op {
        SetupOp::CreateVenv { venv_dir } => {
            println!(
                "🔧 [{}/{}] Creating virtual environment at {}",
                step,
                total,
                venv_dir.display()
            );
            run_tool_safe(&CreateVenvArgs {
                python: rt.interpreter.clone(),
                venv_dir: venv_dir.clone(),
            })?
        }
        SetupOp::EditableInstall { sdk_dir } => {
            println!(
                "🔧 [{}/{}] Installing the Glueco SDK (editable) from {}",
                step,
                total,
                sdk_dir.display()
            );
            run_tool_safe(&EditableInstallArgs {
                pip: runtime::venv_pip(&plan.venv_dir),
                package_dir: sdk_dir.clone(),
            })?
        }
        SetupOp::RequirementsInstall { requirements } => {
            // Informational only; pip owns the file format and its errors
            if let Ok(count) = runtime::count_requirements(requirements) {
                info!("Handing {} pinned requirements to pip", count);
            }
            println!(
                "🔧 [{}/{}] Installing requirements from {}",
                step,
                total,
                requirements.display()
            );
            run_tool_safe(&RequirementsInstallArgs {
                pip: runtime::venv_pip(&plan.venv_dir),
                requirements: requirements.clone(),
            })?
        }
    };

    relay_output(&output);
    output.ensure_success(&op.to_string())
}

/// Print captured sub-tool output verbatim, stdout to stdout and stderr to
/// stderr, with nothing added.
fn relay_output(output: &ToolOutput) {
    if !output.stdout.is_empty() {
        print!("{}", output.stdout);
    }
    if !output.stderr.is_empty() {
        eprint!("{}", output.stderr);
    }
}

/// Completion message with copy-pasteable follow-up commands.
///
/// Printed exactly once, on stdout, only after every operation succeeded.
fn print_next_steps(config: &SetupConfig, plan: &SetupPlan) {
    let layout = VenvLayout::current();
    let venv = config.venv_dir.display().to_string();

    println!();
    println!("✓ Setup complete!");
    println!();
    println!("To launch Outsmart:");
    println!("  cd {}", plan.project_root.display());
    println!("  {}", layout.activate_hint(&venv));
    println!("  streamlit run {}", config.app_entry);
    println!();
}
