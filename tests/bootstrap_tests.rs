//! Tests for Bootstrap Planning and Environment Detection
//!
//! These tests verify:
//! - Plan generation for fresh and already-bootstrapped checkouts
//! - Idempotence at the directory-creation step
//! - Fail-fast ordering invariants (installs after creation, SDK first)
//! - Filesystem fixtures for venv liveness detection

use outsmart_setup::config_file::SetupConfig;
use outsmart_setup::engine::plan::{SetupOp, calculate_setup_plan};
use outsmart_setup::runtime;
use outsmart_setup::types::VenvLayout;
use std::fs;
use std::path::{Path, PathBuf};

/// Fabricate the markers `python -m venv` leaves behind.
fn fabricate_live_venv(dir: &Path) {
    let layout = VenvLayout::current();
    let bin = dir.join(layout.bin_dir());
    fs::create_dir_all(&bin).expect("create venv bin dir");
    fs::write(dir.join("pyvenv.cfg"), "home = /usr/bin\n").expect("write pyvenv.cfg");
    fs::write(bin.join(layout.python_name()), "").expect("write interpreter marker");
}

// =============================================================================
// Plan Generation Tests
// =============================================================================

#[test]
fn test_fresh_checkout_runs_all_three_steps_in_order() {
    let plan = calculate_setup_plan(Path::new("/src/outsmart"), &SetupConfig::default(), false)
        .expect("plan should build");

    assert_eq!(plan.ops.len(), 3);
    assert!(matches!(plan.ops[0], SetupOp::CreateVenv { .. }));
    assert!(matches!(plan.ops[1], SetupOp::EditableInstall { .. }));
    assert!(matches!(plan.ops[2], SetupOp::RequirementsInstall { .. }));
}

#[test]
fn test_existing_venv_skips_creation() {
    let plan = calculate_setup_plan(Path::new("/src/outsmart"), &SetupConfig::default(), true)
        .expect("plan should build");

    assert_eq!(plan.ops.len(), 2);
    assert!(!plan.creates_venv());
    assert_eq!(plan.install_count(), 2);
}

#[test]
fn test_requirements_always_run_last() {
    for venv_exists in [false, true] {
        let plan = calculate_setup_plan(
            Path::new("/src/outsmart"),
            &SetupConfig::default(),
            venv_exists,
        )
        .expect("plan should build");

        // Fail-fast precondition: a failed SDK install must leave the
        // requirements op unexecuted, so it has to be the final op.
        assert!(matches!(
            plan.ops.last(),
            Some(SetupOp::RequirementsInstall { .. })
        ));
    }
}

#[test]
fn test_plan_resolves_paths_against_project_root() {
    let config = SetupConfig {
        venv_dir: PathBuf::from("env"),
        sdk_dir: PathBuf::from("sdk/glueco"),
        requirements: PathBuf::from("deps/requirements.txt"),
        ..SetupConfig::default()
    };

    let plan = calculate_setup_plan(Path::new("/work/outsmart"), &config, false)
        .expect("plan should build");

    assert_eq!(plan.venv_dir, PathBuf::from("/work/outsmart/env"));
    match &plan.ops[2] {
        SetupOp::RequirementsInstall { requirements } => {
            assert_eq!(
                requirements,
                &PathBuf::from("/work/outsmart/deps/requirements.txt")
            );
        }
        other => panic!("Expected RequirementsInstall, got {}", other),
    }
}

// =============================================================================
// Venv Liveness Detection Tests
// =============================================================================

#[test]
fn test_missing_directory_is_not_live() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let venv = tmp.path().join(".venv");

    assert!(!runtime::venv_is_live(&venv));
}

#[test]
fn test_bare_directory_is_not_live() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let venv = tmp.path().join(".venv");
    fs::create_dir_all(&venv).expect("mkdir");

    assert!(!runtime::venv_is_live(&venv));
}

#[test]
fn test_half_created_venv_is_not_live() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let venv = tmp.path().join(".venv");
    fs::create_dir_all(&venv).expect("mkdir");
    fs::write(venv.join("pyvenv.cfg"), "home = /usr/bin\n").expect("write marker");

    // pyvenv.cfg without an interpreter means creation was interrupted;
    // the bootstrap should run creation again
    assert!(!runtime::venv_is_live(&venv));
}

#[test]
fn test_fabricated_venv_is_live() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let venv = tmp.path().join(".venv");
    fabricate_live_venv(&venv);

    assert!(runtime::venv_is_live(&venv));
}

#[test]
fn test_second_run_is_idempotent_at_creation_step() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let root = tmp.path();
    let config = SetupConfig::default();
    let venv = root.join(&config.venv_dir);

    // First run: plan schedules creation
    let first = calculate_setup_plan(root, &config, runtime::venv_is_live(&venv))
        .expect("plan should build");
    assert!(first.creates_venv());

    // Simulate the first run having created the venv
    fabricate_live_venv(&venv);

    // Second run: creation is elided, directory untouched
    let second = calculate_setup_plan(root, &config, runtime::venv_is_live(&venv))
        .expect("plan should build");
    assert!(!second.creates_venv());
    assert!(venv.join("pyvenv.cfg").is_file());
    assert_eq!(second.install_count(), 2);
}

// =============================================================================
// Config File Round-Trip Tests
// =============================================================================

#[test]
fn test_config_save_load_roundtrip() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let path = tmp.path().join("setup.json");

    let config = SetupConfig {
        python: Some(PathBuf::from("/usr/local/bin/python3.12")),
        venv_dir: PathBuf::from("env"),
        sdk_dir: PathBuf::from("vendor/glueco-sdk"),
        requirements: PathBuf::from("requirements-dev.txt"),
        app_entry: "outsmart.py".to_string(),
    };

    config.save_to_file(&path).expect("save should succeed");
    let loaded = SetupConfig::load_from_file(&path).expect("load should succeed");

    assert_eq!(loaded.python, config.python);
    assert_eq!(loaded.venv_dir, config.venv_dir);
    assert_eq!(loaded.sdk_dir, config.sdk_dir);
    assert_eq!(loaded.requirements, config.requirements);
    assert_eq!(loaded.app_entry, config.app_entry);
}

#[test]
fn test_load_rejects_malformed_json() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let path = tmp.path().join("setup.json");
    fs::write(&path, "{ not json").expect("write");

    assert!(SetupConfig::load_from_file(&path).is_err());
}

// =============================================================================
// Requirements Counting Tests
// =============================================================================

#[test]
fn test_count_requirements_from_file() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let path = tmp.path().join("requirements.txt");
    fs::write(
        &path,
        "# Outsmart pinned deps\nstreamlit==1.35.0\n\nanthropic==0.25.7\n",
    )
    .expect("write");

    assert_eq!(runtime::count_requirements(&path).expect("count"), 2);
}

#[test]
fn test_count_requirements_missing_file_is_error() {
    let tmp = tempfile::tempdir().expect("tempdir");
    assert!(runtime::count_requirements(&tmp.path().join("requirements.txt")).is_err());
}

// =============================================================================
// Project Root Resolution Tests
// =============================================================================

#[test]
fn test_project_root_override_wins() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let root = runtime::resolve_project_root(Path::new("requirements.txt"), Some(tmp.path()))
        .expect("override should win");

    assert_eq!(root, tmp.path().to_path_buf());
}
