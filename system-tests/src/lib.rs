// system-tests/src/lib.rs
// ============================================================================
// Module: Config Gate System Tests Library
// Description: Shared configuration and helpers for system test scenarios.
// Purpose: Provide common utilities for Config Gate system-test binaries.
// Dependencies: std
// ============================================================================

//! ## Overview
//! This crate hosts shared configuration and helper utilities used by the
//! Config Gate system-tests binaries in `system-tests/tests`. The binaries
//! drive the `config-gate` executable the way an orchestrator would: spawned
//! processes, controlled environments, exit codes, and signals.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod config;
