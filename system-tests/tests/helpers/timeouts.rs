// system-tests/tests/helpers/timeouts.rs
// ============================================================================
// Module: System Test Timeouts
// Description: Centralized timeout configuration with env overrides.
// Purpose: Keep system-test timeouts consistent and configurable across suites.
// Dependencies: system-tests
// ============================================================================

//! Timeout and grace-window resolution for system-test suites.

use std::time::Duration;

use system_tests::config::SystemTestConfig;

/// Default park observation window before a signal is sent.
pub const DEFAULT_GRACE: Duration = Duration::from_millis(300);
/// Default wait for a spawned gate to exit after a signal or failure.
pub const DEFAULT_EXIT_TIMEOUT: Duration = Duration::from_secs(10);

/// Returns the effective exit-wait timeout.
///
/// The `CONFIG_GATE_SYSTEM_TEST_TIMEOUT_SEC` override acts as a minimum to
/// avoid shortening explicitly longer test timeouts.
///
/// # Errors
///
/// Returns an error when the environment override fails validation.
pub fn resolve_timeout(requested: Duration) -> Result<Duration, String> {
    let config = SystemTestConfig::load()?;
    Ok(config.timeout.map_or(requested, |floor| requested.max(floor)))
}

/// Returns the park observation window.
///
/// `CONFIG_GATE_SYSTEM_TEST_GRACE_MS` replaces the default outright: slow
/// machines lengthen the window, fast CI shortens it.
///
/// # Errors
///
/// Returns an error when the environment override fails validation.
pub fn resolve_grace() -> Result<Duration, String> {
    let config = SystemTestConfig::load()?;
    Ok(config.grace.unwrap_or(DEFAULT_GRACE))
}
