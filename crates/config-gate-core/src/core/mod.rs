// crates/config-gate-core/src/core/mod.rs
// ============================================================================
// Module: Config Gate Core Types
// Description: Environment snapshot, manifest, and verdict types.
// Purpose: Group the data model shared by evaluation and callers.
// Dependencies: crate::core::{env, manifest, verdict}
// ============================================================================

//! ## Overview
//! Core types for the gate data model: the captured [`env::EnvSnapshot`], the
//! parsed [`manifest::RequiredVarsSpec`], and the [`verdict::GateReport`]
//! produced by evaluation. All types are plain values; none outlive a single
//! gate invocation.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod env;
pub mod manifest;
pub mod verdict;
