// system-tests/tests/suites/signal_wait.rs
// ============================================================================
// Module: Signal Wait Tests
// Description: Parked-gate coverage for termination signal handling.
// Purpose: Confirm a blocked gate holds until signaled, then exits cleanly.
// Dependencies: system-tests helpers, config-gate-core, config-gate-cli
// ============================================================================

//! ## Overview
//! Parked-gate coverage for termination signal handling.
//! Purpose: Confirm a blocked gate holds until signaled, then exits cleanly.
//! Invariants:
//! - A blocked gate is still alive after the grace window elapses.
//! - SIGTERM yields exit 143, SIGINT yields exit 130, both caught.
//!
//! The grace window gives the child time to evaluate, report, and install
//! its signal handlers before the signal lands. Slow machines can widen it
//! through `CONFIG_GATE_SYSTEM_TEST_GRACE_MS`.

use std::thread;

use config_gate_cli::t;
use config_gate_core::REQUIRED_VARS_VAR;

use crate::helpers::cli::cli_binary;
use crate::helpers::process::ChildGuard;
use crate::helpers::process::drain_stream;
use crate::helpers::process::is_running;
use crate::helpers::process::send_signal;
use crate::helpers::process::spawn_gate;
use crate::helpers::process::wait_for_exit;
use crate::helpers::timeouts::DEFAULT_EXIT_TIMEOUT;
use crate::helpers::timeouts::resolve_grace;
use crate::helpers::timeouts::resolve_timeout;

/// Parks a blocked gate, delivers `signal`, and checks the full exchange.
fn park_and_signal(signal: &str, expected_code: i32) -> Result<(), Box<dyn std::error::Error>> {
    let Some(cli) = cli_binary() else {
        return Ok(());
    };
    let mut guard = ChildGuard {
        child: spawn_gate(&cli, &["run"], &[(REQUIRED_VARS_VAR, "GATE_DB_URL,GATE_API_KEY")])?,
    };

    thread::sleep(resolve_grace()?);
    if !is_running(&mut guard.child)? {
        let stderr = drain_stream(guard.child.stderr.take())?;
        return Err(format!("gate should stay parked while blocked: stderr {stderr}").into());
    }

    send_signal(&guard.child, signal)?;
    let timeout = resolve_timeout(DEFAULT_EXIT_TIMEOUT)?;
    let Some(status) = wait_for_exit(&mut guard.child, timeout)? else {
        return Err(format!("gate should exit after SIG{signal}").into());
    };
    if status.code() != Some(expected_code) {
        return Err(format!("unexpected exit after SIG{signal}: status {status}").into());
    }

    let stdout = drain_stream(guard.child.stdout.take())?;
    let first_missing = t!("gate.report.missing_entry", name = "GATE_DB_URL");
    if !stdout.contains(first_missing.as_str()) {
        return Err(format!("report should precede the park: stdout {stdout}").into());
    }
    let stderr = drain_stream(guard.child.stderr.take())?;
    if stderr.trim_end() != t!("gate.blocked.waiting") {
        return Err(format!("unexpected stderr: {stderr}").into());
    }
    Ok(())
}

#[test]
fn sigterm_unparks_with_exit_143() -> Result<(), Box<dyn std::error::Error>> {
    park_and_signal("TERM", 143)
}

#[test]
fn sigint_unparks_with_exit_130() -> Result<(), Box<dyn std::error::Error>> {
    park_and_signal("INT", 130)
}
