// crates/config-gate-config/src/config.rs
// ============================================================================
// Module: Config Gate Configuration
// Description: Configuration loading and validation for the gate binary.
// Purpose: Provide strict, fail-closed config parsing with hard limits.
// Dependencies: config-gate-core, serde, toml
// ============================================================================

//! ## Overview
//! Configuration is loaded from a TOML file with strict size and path limits.
//! The file is optional: when neither a CLI path, the `CONFIG_GATE_CONFIG`
//! override, nor `config-gate.toml` in the working directory is present, the
//! defaults apply. An explicitly named file that cannot be read or parsed
//! fails closed instead of falling back to defaults.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::env;
use std::fs;
use std::path::Path;
use std::path::PathBuf;

use config_gate_core::REQUIRED_VARS_VAR;
use serde::Deserialize;
use thiserror::Error;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Default configuration filename when no path is specified.
const DEFAULT_CONFIG_NAME: &str = "config-gate.toml";
/// Environment variable used to override the config path.
pub const CONFIG_ENV_VAR: &str = "CONFIG_GATE_CONFIG";
/// Maximum configuration file size in bytes.
pub(crate) const MAX_CONFIG_FILE_SIZE: usize = 1024 * 1024;
/// Maximum length of a single path component.
pub(crate) const MAX_PATH_COMPONENT_LENGTH: usize = 255;
/// Maximum total path length.
pub(crate) const MAX_TOTAL_PATH_LENGTH: usize = 4096;
/// Maximum length of the manifest variable name.
pub(crate) const MAX_MANIFEST_VAR_LENGTH: usize = 256;

// ============================================================================
// SECTION: Configuration Types
// ============================================================================

/// Config Gate configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConfigGateConfig {
    /// Gate behavior configuration.
    #[serde(default)]
    pub gate: GateConfig,
    /// Environment dump configuration.
    #[serde(default)]
    pub dump: DumpConfig,
}

impl ConfigGateConfig {
    /// Loads configuration from disk using the default resolution rules.
    ///
    /// Resolution order is the explicit `path`, then the `CONFIG_GATE_CONFIG`
    /// environment variable, then `config-gate.toml` in the working
    /// directory. Only the working-directory fallback may be absent.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when loading or validation fails.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let Some(resolved) = resolve_path(path)? else {
            return Ok(Self::default());
        };
        validate_path(&resolved)?;
        let bytes = fs::read(&resolved).map_err(|err| ConfigError::Io(err.to_string()))?;
        if bytes.len() > MAX_CONFIG_FILE_SIZE {
            return Err(ConfigError::Invalid("config file exceeds size limit".to_string()));
        }
        let content = std::str::from_utf8(&bytes)
            .map_err(|_| ConfigError::Invalid("config file must be utf-8".to_string()))?;
        let config: Self =
            toml::from_str(content).map_err(|err| ConfigError::Parse(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration for internal consistency.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when configuration is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.gate.validate()?;
        Ok(())
    }
}

/// Gate behavior configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct GateConfig {
    /// Name of the environment variable holding the requirement manifest.
    #[serde(default = "default_manifest_var")]
    pub manifest_var: String,
    /// Action taken when the gate blocks.
    #[serde(default)]
    pub on_fail: OnFailMode,
}

impl Default for GateConfig {
    fn default() -> Self {
        Self {
            manifest_var: default_manifest_var(),
            on_fail: OnFailMode::default(),
        }
    }
}

impl GateConfig {
    /// Validates gate behavior configuration.
    fn validate(&self) -> Result<(), ConfigError> {
        if self.manifest_var.trim().is_empty() {
            return Err(ConfigError::Invalid("gate.manifest_var must be non-empty".to_string()));
        }
        if self.manifest_var.len() > MAX_MANIFEST_VAR_LENGTH {
            return Err(ConfigError::Invalid("gate.manifest_var exceeds max length".to_string()));
        }
        if self.manifest_var.chars().any(char::is_whitespace) {
            return Err(ConfigError::Invalid(
                "gate.manifest_var must not contain whitespace".to_string(),
            ));
        }
        if self.manifest_var.contains('=') {
            return Err(ConfigError::Invalid(
                "gate.manifest_var must not contain '='".to_string(),
            ));
        }
        if self.manifest_var.contains('\0') {
            return Err(ConfigError::Invalid(
                "gate.manifest_var must not contain NUL".to_string(),
            ));
        }
        Ok(())
    }
}

/// Actions available when the gate blocks startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OnFailMode {
    /// Hold the process until a termination signal arrives.
    #[default]
    Block,
    /// Exit immediately with a failure status.
    Exit,
}

/// Environment dump configuration.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct DumpConfig {
    /// Print the captured environment before evaluating the gate.
    #[serde(default)]
    pub enabled: bool,
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Configuration loading or validation errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// I/O failure while reading configuration.
    #[error("config io error: {0}")]
    Io(String),
    /// TOML parsing error.
    #[error("config parse error: {0}")]
    Parse(String),
    /// Invalid configuration data.
    #[error("invalid config: {0}")]
    Invalid(String),
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Resolves the config path from CLI or environment defaults.
///
/// Returns `None` when only the optional working-directory fallback applies
/// and no such file exists.
fn resolve_path(path: Option<&Path>) -> Result<Option<PathBuf>, ConfigError> {
    if let Some(path) = path {
        return Ok(Some(path.to_path_buf()));
    }
    if let Ok(env_path) = env::var(CONFIG_ENV_VAR) {
        if env_path.len() > MAX_TOTAL_PATH_LENGTH {
            return Err(ConfigError::Invalid("config path exceeds max length".to_string()));
        }
        return Ok(Some(PathBuf::from(env_path)));
    }
    let fallback = PathBuf::from(DEFAULT_CONFIG_NAME);
    if fallback.exists() {
        return Ok(Some(fallback));
    }
    Ok(None)
}

/// Validates the resolved path against security limits.
fn validate_path(path: &Path) -> Result<(), ConfigError> {
    let text = path.to_string_lossy();
    if text.len() > MAX_TOTAL_PATH_LENGTH {
        return Err(ConfigError::Invalid("config path exceeds max length".to_string()));
    }
    for component in path.components() {
        let value = component.as_os_str().to_string_lossy();
        if value.len() > MAX_PATH_COMPONENT_LENGTH {
            return Err(ConfigError::Invalid("config path component too long".to_string()));
        }
    }
    Ok(())
}

/// Default manifest variable name.
fn default_manifest_var() -> String {
    REQUIRED_VARS_VAR.to_string()
}
