// crates/config-gate-core/examples/minimal.rs
// ============================================================================
// Module: Config Gate Minimal Example
// Description: Minimal gate evaluation over an in-memory snapshot.
// Purpose: Demonstrate evaluate and the proceed/block collapse.
// Dependencies: config-gate-core
// ============================================================================

//! ## Overview
//! Evaluates a requirement manifest against two in-memory snapshots, one
//! complete and one with a gap, without touching the live process
//! environment. Suitable for quick verification.

use config_gate_core::EnvSnapshot;
use config_gate_core::GateOutcome;
use config_gate_core::REQUIRED_VARS_VAR;
use config_gate_core::VarName;
use config_gate_core::evaluate;

/// Error type for example preconditions.
#[derive(Debug)]
struct ExampleError(&'static str);

impl std::fmt::Display for ExampleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl std::error::Error for ExampleError {}

/// Runs both snapshots through the gate and checks the outcomes.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    let manifest_var = VarName::new(REQUIRED_VARS_VAR);

    let complete = EnvSnapshot::from_entries([
        (REQUIRED_VARS_VAR, "DATABASE_URL,SERVICE_TOKEN"),
        ("DATABASE_URL", "postgres://localhost/app"),
        ("SERVICE_TOKEN", "secret"),
    ]);
    let report = evaluate(&complete, &manifest_var)?;
    if GateOutcome::from_evaluation(&Ok(report)) != GateOutcome::Proceed {
        return Err(Box::new(ExampleError("complete snapshot must proceed")));
    }

    let gapped = EnvSnapshot::from_entries([
        (REQUIRED_VARS_VAR, "DATABASE_URL,SERVICE_TOKEN"),
        ("DATABASE_URL", "postgres://localhost/app"),
    ]);
    let report = evaluate(&gapped, &manifest_var)?;
    if report.missing() != [VarName::new("SERVICE_TOKEN")] {
        return Err(Box::new(ExampleError("gapped snapshot must report the gap")));
    }
    if GateOutcome::from_evaluation(&Ok(report)) != GateOutcome::Block {
        return Err(Box::new(ExampleError("gapped snapshot must block")));
    }
    Ok(())
}
