// crates/config-gate-core/src/lib.rs
// ============================================================================
// Module: Config Gate Core
// Description: Required-variable gate evaluation over environment snapshots.
// Purpose: Decide whether startup may proceed from declared requirements.
// Dependencies: serde, thiserror
// ============================================================================

//! ## Overview
//! This crate evaluates a requirement manifest, a comma-separated list of
//! environment variable names held in a single manifest variable, against an
//! immutable snapshot of the process environment. The result is either a
//! pass, or a fail carrying every missing name, or a typed error when the
//! manifest variable itself is absent. Collapsing that result yields the
//! proceed-or-block outcome the embedding process acts on.
//!
//! Invariants:
//! - Snapshots are immutable; evaluating the same snapshot twice yields the
//!   same report.
//! - Missing names preserve manifest order, duplicates included.
//! - An absent manifest is a typed error, never a panic.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod core;
pub mod runtime;

// ============================================================================
// SECTION: Re-exports
// ============================================================================

pub use crate::core::env::EnvSnapshot;
pub use crate::core::manifest::REQUIRED_VARS_VAR;
pub use crate::core::manifest::RequiredVarsSpec;
pub use crate::core::manifest::VarName;
pub use crate::core::verdict::GateError;
pub use crate::core::verdict::GateReport;
pub use crate::core::verdict::GateVerdict;
pub use crate::runtime::GateOutcome;
pub use crate::runtime::evaluate;
