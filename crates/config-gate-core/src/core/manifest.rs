// crates/config-gate-core/src/core/manifest.rs
// ============================================================================
// Module: Requirement Manifest
// Description: Variable names and the comma-separated requirement manifest.
// Purpose: Parse the manifest value into an ordered list of required names.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! The manifest is the value of a single environment variable (by default
//! [`REQUIRED_VARS_VAR`]) holding a comma-separated list of variable names.
//! Parsing splits on commas only: names are never trimmed, duplicates are
//! preserved, and empty segments from leading, trailing, or doubled commas
//! are dropped. An empty manifest value therefore parses to an empty spec.
//!
//! Invariants:
//! - Parsing preserves manifest order, including duplicate names.
//! - Parsing never fails; any string is a valid manifest.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use serde::Deserialize;
use serde::Serialize;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Default name of the environment variable holding the requirement manifest.
pub const REQUIRED_VARS_VAR: &str = "CONFIG_GATE_REQUIRED_VARS";

// ============================================================================
// SECTION: Variable Names
// ============================================================================

/// Name of an environment variable.
///
/// # Invariants
/// - Compared byte-for-byte; no trimming or case folding is applied.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VarName(String);

impl VarName {
    /// Creates a variable name from any string-like value.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Returns the name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VarName {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.0)
    }
}

impl From<&str> for VarName {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl From<String> for VarName {
    fn from(value: String) -> Self {
        Self(value)
    }
}

// ============================================================================
// SECTION: Requirement Spec
// ============================================================================

/// Ordered list of required variable names parsed from a manifest value.
///
/// # Invariants
/// - Order matches the manifest; duplicates are kept as written.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RequiredVarsSpec(Vec<VarName>);

impl RequiredVarsSpec {
    /// Parses a comma-separated manifest value.
    ///
    /// Empty segments are dropped; everything else is kept verbatim.
    #[must_use]
    pub fn parse(value: &str) -> Self {
        let names =
            value.split(',').filter(|segment| !segment.is_empty()).map(VarName::new).collect();
        Self(names)
    }

    /// Returns the required names in manifest order.
    #[must_use]
    pub fn names(&self) -> &[VarName] {
        &self.0
    }

    /// Iterates over the required names in manifest order.
    pub fn iter(&self) -> impl Iterator<Item = &VarName> {
        self.0.iter()
    }

    /// Returns the number of required names.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns whether the manifest requires nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
