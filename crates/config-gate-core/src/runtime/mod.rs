// crates/config-gate-core/src/runtime/mod.rs
// ============================================================================
// Module: Gate Runtime
// Description: Evaluation algorithm and the proceed/block outcome.
// Purpose: Turn a snapshot plus manifest variable into a verdict.
// Dependencies: crate::core
// ============================================================================

//! ## Overview
//! Evaluation is a pure function of the snapshot: look up the manifest
//! variable, parse its value into required names, and check each name for
//! presence. Values are never inspected; an empty string satisfies a
//! requirement. The collapse to [`GateOutcome`] maps every non-pass result,
//! including the missing-manifest error, to [`GateOutcome::Block`] so the
//! caller cannot accidentally proceed on a configuration mistake.
//!
//! Invariants:
//! - Evaluation reads only the snapshot; repeated calls on the same snapshot
//!   return the same result.
//! - Missing names are reported in manifest order, duplicates included.

// ============================================================================
// SECTION: Imports
// ============================================================================

use crate::core::env::EnvSnapshot;
use crate::core::manifest::RequiredVarsSpec;
use crate::core::manifest::VarName;
use crate::core::verdict::GateError;
use crate::core::verdict::GateReport;
use crate::core::verdict::GateVerdict;

// ============================================================================
// SECTION: Evaluation
// ============================================================================

/// Evaluates the requirement manifest against an environment snapshot.
///
/// Presence is the only criterion. Each required name is checked against the
/// snapshot; all absences are collected before the verdict is produced.
///
/// # Errors
/// Returns [`GateError::ManifestMissing`] when the manifest variable itself
/// is not set in the snapshot.
pub fn evaluate(env: &EnvSnapshot, manifest_var: &VarName) -> Result<GateReport, GateError> {
    let Some(manifest_value) = env.get(manifest_var) else {
        return Err(GateError::ManifestMissing {
            manifest_var: manifest_var.clone(),
        });
    };
    let required = RequiredVarsSpec::parse(manifest_value);
    let missing: Vec<VarName> =
        required.iter().filter(|name| !env.contains(name)).cloned().collect();
    let verdict = if missing.is_empty() {
        GateVerdict::Pass
    } else {
        GateVerdict::Fail {
            missing,
        }
    };
    Ok(GateReport {
        manifest_var: manifest_var.clone(),
        required,
        verdict,
    })
}

// ============================================================================
// SECTION: Outcome
// ============================================================================

/// Terminal state the process should adopt after evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateOutcome {
    /// Requirements met; startup may continue.
    Proceed,
    /// Requirements unmet or unknowable; hold the process.
    Block,
}

impl GateOutcome {
    /// Collapses an evaluation result into the outcome.
    ///
    /// Both a failing verdict and a missing manifest block; only a clean
    /// pass proceeds.
    #[must_use]
    pub const fn from_evaluation(result: &Result<GateReport, GateError>) -> Self {
        match result {
            Ok(report) if report.is_pass() => Self::Proceed,
            Ok(_) | Err(_) => Self::Block,
        }
    }
}
