// system-tests/src/config/env.rs
// ============================================================================
// Module: System Test Environment
// Description: Environment-backed configuration for system tests.
// Purpose: Centralize env parsing with strict UTF-8 validation.
// Dependencies: std
// ============================================================================

//! ## Overview
//! Environment values are parsed with strict UTF-8 enforcement to avoid silent
//! misconfiguration. Invalid UTF-8 fails closed. The grace window exists so
//! slow machines can lengthen the park observation phase of signal tests
//! instead of racing the signal against handler installation.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::path::PathBuf;
use std::time::Duration;

// ============================================================================
// SECTION: Environment Constants
// ============================================================================

/// Environment keys for system test configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SystemTestEnv {
    /// Optional explicit path to the config-gate binary under test.
    BinaryPath,
    /// Optional park observation window override in milliseconds.
    GraceMillis,
    /// Optional exit-wait timeout override in seconds (positive integer).
    TimeoutSeconds,
}

impl SystemTestEnv {
    /// Returns the canonical environment variable name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::BinaryPath => "CONFIG_GATE_SYSTEM_TEST_BIN",
            Self::GraceMillis => "CONFIG_GATE_SYSTEM_TEST_GRACE_MS",
            Self::TimeoutSeconds => "CONFIG_GATE_SYSTEM_TEST_TIMEOUT_SEC",
        }
    }
}

// ============================================================================
// SECTION: Config Types
// ============================================================================

/// Typed system test configuration derived from environment variables.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SystemTestConfig {
    /// Optional explicit path to the config-gate binary under test.
    pub binary: Option<PathBuf>,
    /// Optional park observation window override.
    pub grace: Option<Duration>,
    /// Optional exit-wait timeout override.
    pub timeout: Option<Duration>,
}

impl SystemTestConfig {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error when an environment value is not valid UTF-8, is empty,
    /// or fails validation (for example, a zero grace window).
    pub fn load() -> Result<Self, String> {
        let binary = read_env_nonempty(SystemTestEnv::BinaryPath.as_str())?.map(PathBuf::from);
        let grace = read_env_nonempty(SystemTestEnv::GraceMillis.as_str())?
            .map(|value| parse_positive_millis(SystemTestEnv::GraceMillis.as_str(), &value))
            .transpose()?;
        let timeout = read_env_nonempty(SystemTestEnv::TimeoutSeconds.as_str())?
            .map(|value| parse_positive_seconds(SystemTestEnv::TimeoutSeconds.as_str(), &value))
            .transpose()?;
        Ok(Self {
            binary,
            grace,
            timeout,
        })
    }
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Reads an environment variable and enforces UTF-8 validity.
///
/// # Errors
///
/// Returns an error when the environment variable contains invalid UTF-8.
pub fn read_env_strict(name: &str) -> Result<Option<String>, String> {
    std::env::var_os(name).map_or(Ok(None), |raw| {
        raw.into_string().map(Some).map_err(|_| format!("{name} must be valid UTF-8"))
    })
}

/// Reads an environment variable and rejects empty values.
///
/// # Errors
///
/// Returns an error when the variable is set but empty or whitespace.
fn read_env_nonempty(name: &str) -> Result<Option<String>, String> {
    match read_env_strict(name)? {
        Some(value) if value.trim().is_empty() => Err(format!("{name} must not be empty")),
        Some(value) => Ok(Some(value)),
        None => Ok(None),
    }
}

/// Parses a positive millisecond duration from an environment variable string.
///
/// # Errors
///
/// Returns an error when the value is missing, non-numeric, or zero.
fn parse_positive_millis(name: &str, raw: &str) -> Result<Duration, String> {
    parse_positive_integer(name, raw, "milliseconds").map(Duration::from_millis)
}

/// Parses a positive second duration from an environment variable string.
///
/// # Errors
///
/// Returns an error when the value is missing, non-numeric, or zero.
fn parse_positive_seconds(name: &str, raw: &str) -> Result<Duration, String> {
    parse_positive_integer(name, raw, "seconds").map(Duration::from_secs)
}

/// Parses a strictly positive integer from an environment variable string.
///
/// # Errors
///
/// Returns an error when the value is missing, non-numeric, or zero.
fn parse_positive_integer(name: &str, raw: &str, unit: &str) -> Result<u64, String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(format!("{name} must be a positive integer number of {unit}"));
    }
    let value: u64 = trimmed
        .parse()
        .map_err(|_| format!("{name} must be a positive integer number of {unit}"))?;
    if value == 0 {
        return Err(format!("{name} must be greater than zero"));
    }
    Ok(value)
}
