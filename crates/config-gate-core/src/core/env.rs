// crates/config-gate-core/src/core/env.rs
// ============================================================================
// Module: Environment Snapshot
// Description: Immutable snapshot of the process environment.
// Purpose: Give evaluation an explicit, read-only view of ambient state.
// Dependencies: crate::core::manifest
// ============================================================================

//! ## Overview
//! The snapshot is captured once at gate invocation and never refreshed;
//! changes to the live process environment after capture are invisible to
//! evaluation. Keys are unique by process-environment construction and
//! iteration is sorted by key so diagnostic dumps are deterministic.
//!
//! Capture is total: entries whose key is not valid UTF-8 are skipped (a
//! manifest name is always UTF-8 and can never match such a key), and values
//! are converted lossily.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;

use crate::core::manifest::VarName;

// ============================================================================
// SECTION: Snapshot
// ============================================================================

/// Read-only snapshot of environment variables.
///
/// # Invariants
/// - Keys are unique and non-empty; values may be empty.
/// - Contents are fixed at construction time.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EnvSnapshot {
    /// Captured variables, sorted by key for deterministic iteration.
    vars: BTreeMap<String, String>,
}

impl EnvSnapshot {
    /// Captures the live process environment.
    #[must_use]
    pub fn capture() -> Self {
        let vars = std::env::vars_os()
            .filter_map(|(key, value)| {
                let key = key.into_string().ok()?;
                Some((key, value.to_string_lossy().into_owned()))
            })
            .collect();
        Self {
            vars,
        }
    }

    /// Builds a snapshot from explicit entries, for tests and embedders.
    pub fn from_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let vars = entries.into_iter().map(|(key, value)| (key.into(), value.into())).collect();
        Self {
            vars,
        }
    }

    /// Returns whether the named variable is present.
    #[must_use]
    pub fn contains(&self, name: &VarName) -> bool {
        self.vars.contains_key(name.as_str())
    }

    /// Returns the value of the named variable, if present.
    #[must_use]
    pub fn get(&self, name: &VarName) -> Option<&str> {
        self.vars.get(name.as_str()).map(String::as_str)
    }

    /// Iterates over `(key, value)` pairs in sorted key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.vars.iter().map(|(key, value)| (key.as_str(), value.as_str()))
    }

    /// Returns the number of captured variables.
    #[must_use]
    pub fn len(&self) -> usize {
        self.vars.len()
    }

    /// Returns whether the snapshot is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}
