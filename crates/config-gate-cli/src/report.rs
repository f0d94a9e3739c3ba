// crates/config-gate-cli/src/report.rs
// ============================================================================
// Module: Gate Report Rendering
// Description: Renders evaluation outcomes as text lines or canonical JSON.
// Purpose: Keep CLI output deterministic and assertable in unit tests.
// Dependencies: config-gate-core, serde_json, crate::i18n
// ============================================================================

//! ## Overview
//! The reporter owns an injected writer so rendering is exercised against
//! in-memory buffers in tests and against stdout in the binary. Text output
//! is one localized line per missing variable followed by a summary line;
//! JSON output is the canonical [`GateReport`] record on a single line. A
//! failed evaluation (absent manifest variable) renders as a one-line error
//! object in JSON mode so consumers always receive exactly one object.
//!
//! Invariants:
//! - Rendering never consults the process environment.
//! - JSON mode emits exactly one object per evaluation.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::io;
use std::io::Write;

use config_gate_core::EnvSnapshot;
use config_gate_core::GateError;
use config_gate_core::GateReport;
use serde_json::json;

use crate::t;

// ============================================================================
// SECTION: Types
// ============================================================================

/// Output formats for gate reports.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ReportFormat {
    /// Human-readable lines, one per missing variable plus a summary.
    Text,
    /// The canonical report record as a single JSON line.
    Json,
}

/// Renders gate evaluations to an injected writer.
///
/// # Invariants
/// - The writer is the only output channel; nothing is printed directly.
#[derive(Debug)]
pub struct GateReporter<W> {
    /// Destination stream for rendered output.
    writer: W,
    /// Selected rendering format.
    format: ReportFormat,
}

impl<W: Write> GateReporter<W> {
    /// Creates a reporter over `writer` using `format`.
    pub const fn new(writer: W, format: ReportFormat) -> Self {
        Self {
            writer,
            format,
        }
    }

    /// Writes one `KEY = VALUE` line per snapshot entry in sorted key order.
    ///
    /// The dump is line-oriented in every format; it is a debugging aid that
    /// precedes the report rather than part of the report record.
    ///
    /// # Errors
    ///
    /// Returns any underlying write failure.
    pub fn dump_env(&mut self, env: &EnvSnapshot) -> io::Result<()> {
        for (key, value) in env.iter() {
            writeln!(&mut self.writer, "{key} = {value}")?;
        }
        Ok(())
    }

    /// Renders an evaluation outcome in the selected format.
    ///
    /// # Errors
    ///
    /// Returns any underlying write or serialization failure.
    pub fn emit(&mut self, evaluation: &Result<GateReport, GateError>) -> io::Result<()> {
        match self.format {
            ReportFormat::Text => self.emit_text(evaluation),
            ReportFormat::Json => self.emit_json(evaluation),
        }
    }

    /// Consumes the reporter and returns the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer
    }

    /// Text rendering: per-name miss lines, then a single summary line.
    fn emit_text(&mut self, evaluation: &Result<GateReport, GateError>) -> io::Result<()> {
        match evaluation {
            Ok(report) if report.is_pass() => {
                let line = t!("gate.report.pass", count = report.required.len());
                writeln!(&mut self.writer, "{line}")
            }
            Ok(report) => {
                for name in report.missing() {
                    let line = t!("gate.report.missing_entry", name = name);
                    writeln!(&mut self.writer, "{line}")?;
                }
                let line = t!(
                    "gate.report.fail",
                    missing = report.missing().len(),
                    count = report.required.len()
                );
                writeln!(&mut self.writer, "{line}")
            }
            Err(GateError::ManifestMissing {
                manifest_var,
            }) => {
                let line = t!("gate.report.manifest_missing", var = manifest_var);
                writeln!(&mut self.writer, "{line}")
            }
        }
    }

    /// JSON rendering: the canonical record or a one-line error object.
    fn emit_json(&mut self, evaluation: &Result<GateReport, GateError>) -> io::Result<()> {
        let line = match evaluation {
            Ok(report) => serde_json::to_string(report).map_err(io::Error::other)?,
            Err(GateError::ManifestMissing {
                manifest_var,
            }) => json!({
                "error": "manifest_missing",
                "manifest_var": manifest_var,
            })
            .to_string(),
        };
        writeln!(&mut self.writer, "{line}")
    }
}
