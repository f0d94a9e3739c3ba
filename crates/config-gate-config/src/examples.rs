// crates/config-gate-config/src/examples.rs
// ============================================================================
// Module: Config Examples
// Description: Canonical example configuration payloads.
// Purpose: Deterministic examples for docs and tooling.
// Dependencies: std
// ============================================================================

//! ## Overview
//! Canonical examples for gate configuration. Outputs are deterministic and
//! kept in sync with the config model by test.

/// Returns a canonical example `config-gate.toml` configuration.
#[must_use]
pub fn config_toml_example() -> String {
    String::from(
        r#"[gate]
manifest_var = "CONFIG_GATE_REQUIRED_VARS"
on_fail = "block"

[dump]
enabled = false
"#,
    )
}
