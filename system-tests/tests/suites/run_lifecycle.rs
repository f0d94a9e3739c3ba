// system-tests/tests/suites/run_lifecycle.rs
// ============================================================================
// Module: Run Lifecycle Tests
// Description: Portable lifecycle coverage for the run command.
// Purpose: Confirm run exits on its own whenever holding is not required.
// Dependencies: system-tests helpers, config-gate-config, tempfile
// ============================================================================

//! ## Overview
//! Portable lifecycle coverage for the run command.
//! Purpose: Confirm run exits on its own whenever holding is not required.
//! Invariants:
//! - A passing gate proceeds immediately with exit zero.
//! - Exit mode turns a blocked gate into a prompt non-zero exit.

use std::fs;

use config_gate_cli::t;
use config_gate_config::CONFIG_ENV_VAR;
use config_gate_core::REQUIRED_VARS_VAR;
use tempfile::TempDir;

use crate::helpers::cli::cli_binary;
use crate::helpers::process::ChildGuard;
use crate::helpers::process::drain_stream;
use crate::helpers::process::spawn_gate;
use crate::helpers::process::wait_for_exit;
use crate::helpers::timeouts::DEFAULT_EXIT_TIMEOUT;
use crate::helpers::timeouts::resolve_timeout;

#[test]
fn run_proceeds_immediately_when_gate_passes() -> Result<(), Box<dyn std::error::Error>> {
    let Some(cli) = cli_binary() else {
        return Ok(());
    };
    let mut guard = ChildGuard {
        child: spawn_gate(&cli, &["run"], &[
            (REQUIRED_VARS_VAR, "GATE_DB_URL"),
            ("GATE_DB_URL", "postgres://localhost/app"),
        ])?,
    };
    let timeout = resolve_timeout(DEFAULT_EXIT_TIMEOUT)?;
    let Some(status) = wait_for_exit(&mut guard.child, timeout)? else {
        return Err("run should exit on its own when the gate passes".into());
    };
    if !status.success() {
        return Err(format!("run should exit zero: status {status}").into());
    }
    let stdout = drain_stream(guard.child.stdout.take())?;
    if stdout.trim_end() != t!("gate.report.pass", count = 1_usize) {
        return Err(format!("unexpected stdout: {stdout}").into());
    }
    Ok(())
}

#[test]
fn exit_mode_ends_run_without_parking() -> Result<(), Box<dyn std::error::Error>> {
    let Some(cli) = cli_binary() else {
        return Ok(());
    };
    let dir = TempDir::new()?;
    let config_path = dir.path().join("gate.toml");
    fs::write(&config_path, "[gate]\non_fail = \"exit\"\n")?;

    let mut guard = ChildGuard {
        child: spawn_gate(&cli, &["run"], &[
            (CONFIG_ENV_VAR, config_path.to_string_lossy().as_ref()),
            (REQUIRED_VARS_VAR, "GATE_API_KEY"),
        ])?,
    };
    let timeout = resolve_timeout(DEFAULT_EXIT_TIMEOUT)?;
    let Some(status) = wait_for_exit(&mut guard.child, timeout)? else {
        return Err("exit mode must not park the process".into());
    };
    if status.code() != Some(1) {
        return Err(format!("run should exit with code 1: status {status}").into());
    }
    let stdout = drain_stream(guard.child.stdout.take())?;
    let lines: Vec<String> = stdout.lines().map(str::to_owned).collect();
    let expected = vec![
        t!("gate.report.missing_entry", name = "GATE_API_KEY"),
        t!("gate.report.fail", missing = 1_usize, count = 1_usize),
    ];
    if lines != expected {
        return Err(format!("unexpected stdout: {stdout}").into());
    }
    Ok(())
}
