// crates/config-gate-core/src/core/verdict.rs
// ============================================================================
// Module: Gate Verdicts
// Description: Evaluation results and typed evaluation errors.
// Purpose: Carry the pass/fail outcome and the full missing-name list.
// Dependencies: crate::core::manifest, serde, thiserror
// ============================================================================

//! ## Overview
//! A verdict is the complete result of one evaluation: either every required
//! variable was present, or one or more were missing. The failure variant
//! carries every missing name in manifest order so callers can report all
//! gaps at once instead of stopping at the first.
//!
//! Invariants:
//! - `Fail` always carries at least one missing name.
//! - Missing names appear in manifest order, duplicates included.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

use crate::core::manifest::RequiredVarsSpec;
use crate::core::manifest::VarName;

// ============================================================================
// SECTION: Verdict
// ============================================================================

/// Outcome of evaluating the requirement manifest against a snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "status")]
pub enum GateVerdict {
    /// Every required variable is present.
    Pass,
    /// One or more required variables are absent.
    Fail {
        /// Missing names in manifest order.
        missing: Vec<VarName>,
    },
}

// ============================================================================
// SECTION: Report
// ============================================================================

/// Full account of one gate evaluation.
///
/// # Invariants
/// - `required` is exactly the parsed manifest; `verdict` is derived from it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GateReport {
    /// Name of the manifest variable that was consulted.
    pub manifest_var: VarName,
    /// Required names parsed from the manifest value.
    pub required: RequiredVarsSpec,
    /// Pass or fail result for this snapshot.
    pub verdict: GateVerdict,
}

impl GateReport {
    /// Returns whether the gate passed.
    #[must_use]
    pub const fn is_pass(&self) -> bool {
        matches!(self.verdict, GateVerdict::Pass)
    }

    /// Returns the missing names, empty on a pass.
    #[must_use]
    pub fn missing(&self) -> &[VarName] {
        match &self.verdict {
            GateVerdict::Pass => &[],
            GateVerdict::Fail {
                missing,
            } => missing,
        }
    }
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Errors that prevent an evaluation from producing a verdict.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GateError {
    /// The manifest variable itself is not set in the snapshot.
    #[error("manifest variable not set: {manifest_var}")]
    ManifestMissing {
        /// Name of the absent manifest variable.
        manifest_var: VarName,
    },
}
