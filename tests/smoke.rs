//! Smoke tests for the gsd-tools binary.
//!
//! Run the real binary against temp planning trees and validate the JSON
//! records it emits, command by command. No network, no external tools.

use std::path::Path;
use std::process::Command;

use serde_json::Value;
use tempfile::TempDir;

fn gsd_tools_bin() -> &'static str {
    env!("CARGO_BIN_EXE_gsd-tools")
}

/// Run the binary with `--root` pointed at the project and parse stdout.
fn run_json(root: &Path, args: &[&str]) -> Value {
    let output = Command::new(gsd_tools_bin())
        .arg("--root")
        .arg(root)
        .args(args)
        .output()
        .expect("spawn gsd-tools");
    assert!(
        output.status.success(),
        "gsd-tools {args:?} failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).expect("stdout is one JSON record")
}

fn temp_project() -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    std::fs::create_dir_all(dir.path().join(".planning")).unwrap();
    dir
}

fn write(root: &Path, rel: &str, content: &str) {
    let path = root.join(rel);
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(path, content).unwrap();
}

#[test]
fn init_progress_returns_convention_paths() {
    let project = temp_project();
    let record = run_json(project.path(), &["init", "progress"]);
    assert_eq!(record["state_path"], ".planning/STATE.md");
    assert_eq!(record["roadmap_path"], ".planning/ROADMAP.md");
    assert_eq!(record["project_path"], ".planning/PROJECT.md");
    assert_eq!(record["config_path"], ".planning/config.json");
}

#[test]
fn init_plan_phase_resolves_directory_and_companions() {
    let project = temp_project();
    write(project.path(), ".planning/phases/03-api/03-CONTEXT.md", "# Context");
    write(project.path(), ".planning/phases/03-api/03-RESEARCH.md", "# Research");
    write(project.path(), ".planning/phases/03-api/03-VERIFICATION.md", "# Verification");
    write(project.path(), ".planning/phases/03-api/03-UAT.md", "# UAT");

    let record = run_json(project.path(), &["init", "plan-phase", "03"]);
    assert_eq!(record["state_path"], ".planning/STATE.md");
    assert_eq!(record["roadmap_path"], ".planning/ROADMAP.md");
    assert_eq!(record["requirements_path"], ".planning/REQUIREMENTS.md");
    assert_eq!(record["context_path"], ".planning/phases/03-api/03-CONTEXT.md");
    assert_eq!(record["research_path"], ".planning/phases/03-api/03-RESEARCH.md");
    assert_eq!(
        record["verification_path"],
        ".planning/phases/03-api/03-VERIFICATION.md"
    );
    assert_eq!(record["uat_path"], ".planning/phases/03-api/03-UAT.md");
    assert_eq!(record["phase_found"], true);
}

#[test]
fn init_plan_phase_omits_absent_companion_paths() {
    let project = temp_project();
    std::fs::create_dir_all(project.path().join(".planning/phases/03-api")).unwrap();

    let record = run_json(project.path(), &["init", "plan-phase", "03"]);
    let map = record.as_object().unwrap();
    assert!(!map.contains_key("context_path"));
    assert!(!map.contains_key("research_path"));
    assert_eq!(record["phase_found"], true);
    assert_eq!(record["has_context"], false);
}

#[test]
fn init_plan_phase_extracts_requirement_ids() {
    let project = temp_project();
    std::fs::create_dir_all(project.path().join(".planning/phases/03-api")).unwrap();
    write(
        project.path(),
        ".planning/ROADMAP.md",
        "# Roadmap\n\n### Phase 3: API\n**Goal:** Build API\n**Requirements**: CP-01, CP-02, CP-03\n**Plans:** 0 plans\n",
    );

    let record = run_json(project.path(), &["init", "plan-phase", "3"]);
    assert_eq!(record["phase_req_ids"], "CP-01, CP-02, CP-03");
}

#[test]
fn init_plan_phase_requirement_ids_edge_cases() {
    let project = temp_project();
    std::fs::create_dir_all(project.path().join(".planning/phases/03-api")).unwrap();

    // Bracketed value: brackets stripped.
    write(
        project.path(),
        ".planning/ROADMAP.md",
        "# Roadmap\n\n### Phase 3: API\n**Goal:** Build API\n**Requirements**: [CP-01, CP-02]\n**Plans:** 0 plans\n",
    );
    let record = run_json(project.path(), &["init", "plan-phase", "3"]);
    assert_eq!(record["phase_req_ids"], "CP-01, CP-02");

    // Placeholder value: null.
    write(
        project.path(),
        ".planning/ROADMAP.md",
        "# Roadmap\n\n### Phase 3: API\n**Goal:** Build API\n**Requirements**: TBD\n**Plans:** 0 plans\n",
    );
    let record = run_json(project.path(), &["init", "plan-phase", "3"]);
    assert!(record["phase_req_ids"].is_null());

    // Missing line: null.
    write(
        project.path(),
        ".planning/ROADMAP.md",
        "# Roadmap\n\n### Phase 3: API\n**Goal:** Build API\n**Plans:** 0 plans\n",
    );
    let record = run_json(project.path(), &["init", "plan-phase", "3"]);
    assert!(record["phase_req_ids"].is_null());
}

#[test]
fn init_execute_phase_matches_padded_and_unpadded() {
    let project = temp_project();
    write(project.path(), ".planning/phases/03-api/03-01-PLAN.md", "# Plan");

    let a = run_json(project.path(), &["init", "execute-phase", "3"]);
    let b = run_json(project.path(), &["init", "execute-phase", "03"]);
    assert_eq!(a["phase_dir"], b["phase_dir"]);
    assert_eq!(a["phase_dir"], ".planning/phases/03-api");
    assert_eq!(a["has_plans"], true);
}

#[test]
fn init_phase_op_falls_back_to_roadmap() {
    let project = temp_project();
    write(
        project.path(),
        ".planning/ROADMAP.md",
        "# Roadmap\n\n### Phase 5: Widget Builder\n**Goal:** Build widgets\n**Plans:** TBD\n",
    );

    let record = run_json(project.path(), &["init", "phase-op", "5"]);
    assert_eq!(record["phase_found"], true);
    assert!(record["phase_dir"].is_null());
    assert_eq!(record["phase_slug"], "widget-builder");
    assert_eq!(record["has_context"], false);
    assert_eq!(record["has_research"], false);
    assert_eq!(record["has_plans"], false);
}

#[test]
fn init_phase_op_reports_not_found() {
    let project = temp_project();
    write(
        project.path(),
        ".planning/ROADMAP.md",
        "# Roadmap\n\n### Phase 1: Setup\n**Goal:** Setup project\n**Plans:** TBD\n",
    );

    let record = run_json(project.path(), &["init", "phase-op", "99"]);
    assert_eq!(record["phase_found"], false);
    assert!(record["phase_dir"].is_null());
}

#[test]
fn init_todos_counts_and_filters() {
    let project = temp_project();
    write(
        project.path(),
        ".planning/todos/pending/task-1.md",
        "title: Fix bug\narea: backend\ncreated: 2026-02-25",
    );
    write(
        project.path(),
        ".planning/todos/pending/task-2.md",
        "title: Add feature\narea: frontend\ncreated: 2026-02-24",
    );

    let record = run_json(project.path(), &["init", "todos"]);
    assert_eq!(record["todo_count"], 2);
    assert_eq!(record["pending_dir_exists"], true);
    assert!(record["area_filter"].is_null());

    let filtered = run_json(project.path(), &["init", "todos", "backend"]);
    assert_eq!(filtered["todo_count"], 1);
    assert_eq!(filtered["area_filter"], "backend");
    assert_eq!(filtered["todos"][0]["file"], "task-1.md");
    assert_eq!(filtered["todos"][0]["path"], ".planning/todos/pending/task-1.md");
}

#[test]
fn init_todos_handles_missing_pending_dir() {
    let project = temp_project();
    let record = run_json(project.path(), &["init", "todos"]);
    assert_eq!(record["todo_count"], 0);
    assert_eq!(record["todos"].as_array().unwrap().len(), 0);
    assert_eq!(record["pending_dir_exists"], false);
}

#[test]
fn init_milestone_op_counts_completion_and_archive() {
    let project = temp_project();
    write(project.path(), ".planning/phases/01-setup/01-01-PLAN.md", "# Plan");
    write(project.path(), ".planning/phases/01-setup/01-01-SUMMARY.md", "# Summary");
    write(project.path(), ".planning/phases/02-api/02-01-PLAN.md", "# Plan");
    std::fs::create_dir_all(project.path().join(".planning/archive/v1.0")).unwrap();

    let record = run_json(project.path(), &["init", "milestone-op"]);
    assert_eq!(record["phase_count"], 2);
    assert_eq!(record["completed_phases"], 1);
    assert_eq!(record["all_phases_complete"], false);
    assert_eq!(record["archive_count"], 1);
    assert_eq!(record["archived_milestones"][0], "v1.0");
}

#[test]
fn config_command_emits_resolved_configuration() {
    let project = temp_project();
    write(
        project.path(),
        ".planning/config.json",
        r#"{ "model_profile": "budget", "parallelization": { "enabled": false } }"#,
    );

    let record = run_json(project.path(), &["config"]);
    assert_eq!(record["model_profile"], "budget");
    assert_eq!(record["parallelization"], false);
    assert_eq!(record["commit_docs"], true);
    assert!(record["model_overrides"].is_null());
}

#[test]
fn resolve_model_command_applies_overrides() {
    let project = temp_project();
    write(
        project.path(),
        ".planning/config.json",
        r#"{ "model_overrides": { "gsd-executor": "opus" } }"#,
    );

    let record = run_json(project.path(), &["resolve-model", "gsd-executor"]);
    assert_eq!(record["agent"], "gsd-executor");
    assert_eq!(record["model"], "inherit");
}
