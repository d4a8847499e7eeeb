//! Setup Plan Engine
//!
//! Translates a validated `SetupConfig` plus the observed environment state
//! into an ordered sequence of atomic `SetupOp` operations that the tool
//! runner can execute.
//!
//! # Generated Plans
//!
//! | Environment state | Operations Generated |
//! |-------------------|---------------------|
//! | No live venv      | CreateVenv → EditableInstall → RequirementsInstall |
//! | Live venv present | EditableInstall → RequirementsInstall |
//!
//! # Design
//!
//! - **Pure logic**: No I/O, no side effects — only generates the plan
//! - **Typed output**: Each `SetupOp` maps directly to a `ToolArgs` struct
//! - **Validated**: The plan is checked for internal consistency before returning
//! - **Testable**: config + state → plan assertions, no subprocess needed

// Library API - consumed by bootstrap orchestration
#![allow(dead_code)]

use crate::config_file::SetupConfig;
use crate::types::SetupStage;
use anyhow::{Result, bail};
use std::fmt;
use std::path::{Path, PathBuf};

// ============================================================================
// Setup Operation Types
// ============================================================================

/// A single atomic operation in the bootstrap plan.
///
/// Operations are ordered: the plan generator ensures installs never precede
/// environment creation, and the SDK install always precedes requirements.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SetupOp {
    /// Create the virtual environment (`python -m venv`)
    CreateVenv { venv_dir: PathBuf },

    /// Install the local SDK in editable mode (`pip install -e`)
    EditableInstall { sdk_dir: PathBuf },

    /// Install the pinned requirements (`pip install -r`)
    RequirementsInstall { requirements: PathBuf },
}

impl SetupOp {
    /// The stage this operation belongs to.
    pub fn stage(&self) -> SetupStage {
        match self {
            Self::CreateVenv { .. } => SetupStage::Venv,
            Self::EditableInstall { .. } => SetupStage::Sdk,
            Self::RequirementsInstall { .. } => SetupStage::Requirements,
        }
    }

    /// Returns true if this op invokes pip inside the venv.
    pub fn uses_pip(&self) -> bool {
        self.stage().installs_packages()
    }
}

impl fmt::Display for SetupOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CreateVenv { venv_dir } => write!(f, "CreateVenv({})", venv_dir.display()),
            Self::EditableInstall { sdk_dir } => {
                write!(f, "EditableInstall({})", sdk_dir.display())
            }
            Self::RequirementsInstall { requirements } => {
                write!(f, "RequirementsInstall({})", requirements.display())
            }
        }
    }
}

/// A complete bootstrap plan: an ordered list of operations.
#[derive(Debug, Clone)]
pub struct SetupPlan {
    /// Ordered sequence of setup operations
    pub ops: Vec<SetupOp>,
    /// Resolved project root
    pub project_root: PathBuf,
    /// Absolute virtual environment directory
    pub venv_dir: PathBuf,
    /// Whether a live venv was already present when the plan was computed
    pub venv_exists: bool,
}

impl SetupPlan {
    /// Returns true if this plan creates the virtual environment.
    pub fn creates_venv(&self) -> bool {
        self.ops
            .iter()
            .any(|op| matches!(op, SetupOp::CreateVenv { .. }))
    }

    /// Number of install operations in the plan.
    pub fn install_count(&self) -> usize {
        self.ops.iter().filter(|op| op.uses_pip()).count()
    }
}

// ============================================================================
// Plan Generation
// ============================================================================

/// Generate the bootstrap plan for a project root and config.
///
/// `venv_exists` is the caller's observation (`runtime::venv_is_live`);
/// passing it in keeps this function free of I/O. When the environment is
/// already live the creation op is elided, which is what makes a second run
/// idempotent at the directory-creation step.
pub fn calculate_setup_plan(
    project_root: &Path,
    config: &SetupConfig,
    venv_exists: bool,
) -> Result<SetupPlan> {
    config.validate()?;

    let venv_dir = project_root.join(&config.venv_dir);
    let sdk_dir = project_root.join(&config.sdk_dir);
    let requirements = project_root.join(&config.requirements);

    let mut ops = Vec::new();

    if !venv_exists {
        ops.push(SetupOp::CreateVenv {
            venv_dir: venv_dir.clone(),
        });
    }

    ops.push(SetupOp::EditableInstall { sdk_dir });
    ops.push(SetupOp::RequirementsInstall { requirements });

    let plan = SetupPlan {
        ops,
        project_root: project_root.to_path_buf(),
        venv_dir,
        venv_exists,
    };

    validate_plan(&plan)?;
    Ok(plan)
}

/// Internal consistency check for generated plans.
fn validate_plan(plan: &SetupPlan) -> Result<()> {
    if plan.install_count() != 2 {
        bail!(
            "invalid plan: expected exactly 2 install operations, got {}",
            plan.install_count()
        );
    }

    if plan.venv_exists && plan.creates_venv() {
        bail!("invalid plan: venv creation scheduled for a live environment");
    }
    if !plan.venv_exists && !plan.creates_venv() {
        bail!("invalid plan: no venv creation scheduled for a missing environment");
    }

    // CreateVenv (when present) first, SDK before requirements
    let stages: Vec<SetupStage> = plan.ops.iter().map(SetupOp::stage).collect();
    let expected: Vec<SetupStage> = if plan.venv_exists {
        vec![SetupStage::Sdk, SetupStage::Requirements]
    } else {
        vec![SetupStage::Venv, SetupStage::Sdk, SetupStage::Requirements]
    };
    if stages != expected {
        bail!("invalid plan: operations out of order: {:?}", stages);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn root() -> PathBuf {
        PathBuf::from("/src/outsmart")
    }

    #[test]
    fn test_fresh_checkout_plan() {
        let plan = calculate_setup_plan(&root(), &SetupConfig::default(), false)
            .expect("plan should build");

        assert_eq!(plan.ops.len(), 3);
        assert!(plan.creates_venv());
        assert_eq!(plan.install_count(), 2);
        assert!(matches!(plan.ops[0], SetupOp::CreateVenv { .. }));
        assert!(matches!(plan.ops[1], SetupOp::EditableInstall { .. }));
        assert!(matches!(plan.ops[2], SetupOp::RequirementsInstall { .. }));
    }

    #[test]
    fn test_existing_venv_plan_elides_creation() {
        let plan = calculate_setup_plan(&root(), &SetupConfig::default(), true)
            .expect("plan should build");

        assert_eq!(plan.ops.len(), 2);
        assert!(!plan.creates_venv());
        assert!(plan.venv_exists);
        assert!(matches!(plan.ops[0], SetupOp::EditableInstall { .. }));
    }

    #[test]
    fn test_plan_paths_are_rooted() {
        let plan = calculate_setup_plan(&root(), &SetupConfig::default(), false)
            .expect("plan should build");

        assert_eq!(plan.venv_dir, root().join(".venv"));
        match &plan.ops[1] {
            SetupOp::EditableInstall { sdk_dir } => {
                assert_eq!(sdk_dir, &root().join("glueco-sdk"));
            }
            other => panic!("Expected EditableInstall, got {}", other),
        }
    }

    #[test]
    fn test_plan_rejects_invalid_config() {
        let config = SetupConfig {
            venv_dir: PathBuf::from("/abs/venv"),
            ..SetupConfig::default()
        };
        assert!(calculate_setup_plan(&root(), &config, false).is_err());
    }

    #[test]
    fn test_op_display_names_paths() {
        let op = SetupOp::CreateVenv {
            venv_dir: PathBuf::from("/p/.venv"),
        };
        assert_eq!(op.to_string(), "CreateVenv(/p/.venv)");
        assert_eq!(op.stage(), SetupStage::Venv);
        assert!(!op.uses_pip());
    }
}
