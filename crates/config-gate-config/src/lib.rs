// crates/config-gate-config/src/lib.rs
// ============================================================================
// Module: Config Gate Config Library
// Description: Canonical config model and validation for the gate binary.
// Purpose: Single source of truth for config-gate.toml semantics.
// Dependencies: config-gate-core, serde, toml
// ============================================================================

//! ## Overview
//! `config-gate-config` defines the configuration model for the gate binary.
//! Loading is strict and fail-closed with hard path and size limits; the
//! file itself is optional, and every setting has a safe default that keeps
//! the gate in its hold-on-failure posture.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod config;
pub mod examples;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use config::*;
pub use examples::config_toml_example;
