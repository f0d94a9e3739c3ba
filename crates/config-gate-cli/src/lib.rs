// crates/config-gate-cli/src/lib.rs
// ============================================================================
// Module: Config Gate CLI Library
// Description: Shared i18n catalog and report rendering for the CLI binary.
// Purpose: Keep user-facing output testable apart from process wiring.
// Dependencies: config-gate-core, serde_json
// ============================================================================

//! ## Overview
//! The Config Gate CLI keeps its user-facing surfaces in this library so unit
//! tests can exercise catalog lookups and report rendering without spawning
//! the binary. The binary in `main.rs` wires these pieces to real streams and
//! to the process exit status.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod i18n;
pub mod report;

// ============================================================================
// SECTION: Tests
// ============================================================================
