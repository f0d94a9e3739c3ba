// crates/config-gate-cli/src/main.rs
// ============================================================================
// Module: Config Gate CLI Entry Point
// Description: Command dispatcher for the required-configuration startup gate.
// Purpose: Evaluate the requirement manifest and hold, exit, or proceed.
// Dependencies: clap, config-gate-core, config-gate-config, thiserror, tokio.
// ============================================================================

//! ## Overview
//! The Config Gate CLI guards orchestrated process startup. It captures the
//! process environment once, checks every name listed by the requirement
//! manifest variable, and reports all missing names at once. On failure the
//! default action is to hold the process in a signal-terminated wait so the
//! orchestrator observes a stuck startup instead of a crash loop. All
//! user-facing strings are routed through the i18n catalog.

// ============================================================================
// SECTION: Modules
// ============================================================================


// ============================================================================
// SECTION: Imports
// ============================================================================

use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::ArgAction;
use clap::Args;
use clap::CommandFactory;
use clap::Parser;
use clap::Subcommand;
use clap::ValueEnum;
use config_gate_cli::i18n::Locale;
use config_gate_cli::i18n::set_locale;
use config_gate_cli::report::GateReporter;
use config_gate_cli::report::ReportFormat;
use config_gate_cli::t;
use config_gate_config::ConfigGateConfig;
use config_gate_config::OnFailMode;
use config_gate_core::EnvSnapshot;
use config_gate_core::GateError;
use config_gate_core::GateOutcome;
use config_gate_core::GateReport;
use config_gate_core::VarName;
use config_gate_core::evaluate;
use thiserror::Error;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Environment variable for CLI locale selection.
const LANG_ENV: &str = "CONFIG_GATE_LANG";
/// Exit status reported after SIGTERM ends the wait (128 + 15).
#[cfg(unix)]
const SIGTERM_EXIT: u8 = 143;
/// Exit status reported after SIGINT ends the wait (128 + 2).
const SIGINT_EXIT: u8 = 130;

// ============================================================================
// SECTION: CLI Types
// ============================================================================

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(name = "config-gate", disable_help_subcommand = true, disable_version_flag = true)]
struct Cli {
    /// Print version information and exit.
    #[arg(long = "version", action = ArgAction::SetTrue, global = true)]
    show_version: bool,
    /// Preferred output language (overrides `CONFIG_GATE_LANG`).
    #[arg(long, value_enum, value_name = "LANG", global = true)]
    lang: Option<LangArg>,
    /// Selected subcommand to execute.
    #[command(subcommand)]
    command: Option<Commands>,
}

/// Supported CLI subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Evaluate the gate and hold startup while requirements are missing.
    Run(RunCommand),
    /// Evaluate the gate and exit with a status instead of holding.
    Check(CheckCommand),
    /// Configuration utilities.
    Config {
        /// Selected config subcommand.
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

/// Shared evaluation arguments for gate commands.
#[derive(Args, Debug, Clone)]
struct GateArgs {
    /// Optional path to the gate configuration file.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
    /// Manifest variable to consult (overrides the config file).
    #[arg(long, value_name = "NAME")]
    manifest_var: Option<String>,
    /// Print a sorted `KEY = VALUE` snapshot dump before evaluating.
    #[arg(long, action = ArgAction::SetTrue)]
    dump_env: bool,
    /// Output format for the evaluation report.
    #[arg(long, value_enum, default_value_t = FormatArg::Text)]
    format: FormatArg,
}

/// Arguments for `run`.
#[derive(Args, Debug)]
struct RunCommand {
    /// Gate evaluation settings.
    #[command(flatten)]
    gate: GateArgs,
}

/// Arguments for `check`.
#[derive(Args, Debug)]
struct CheckCommand {
    /// Gate evaluation settings.
    #[command(flatten)]
    gate: GateArgs,
}

/// Config subcommands.
#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Validate a Config Gate configuration file.
    Validate(ConfigValidateCommand),
}

/// Arguments for `config validate`.
#[derive(Args, Debug)]
struct ConfigValidateCommand {
    /// Optional path to the gate configuration file.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

/// Report output formats selectable on the command line.
#[derive(ValueEnum, Copy, Clone, Debug)]
enum FormatArg {
    /// Human-readable text output.
    Text,
    /// Canonical JSON output.
    Json,
}

/// Supported CLI language selections.
#[derive(ValueEnum, Copy, Clone, Debug)]
enum LangArg {
    /// English.
    En,
    /// Catalan.
    Ca,
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// CLI error wrapper carrying a user-facing message.
#[derive(Debug, Error)]
#[error("{message}")]
struct CliError {
    /// Human-readable error message.
    message: String,
}

impl CliError {
    /// Creates a new CLI error from a preformatted message.
    const fn new(message: String) -> Self {
        Self {
            message,
        }
    }
}

/// Result alias for CLI operations.
type CliResult<T> = Result<T, CliError>;

// ============================================================================
// SECTION: Entry Point
// ============================================================================

/// Binary entry point.
#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    match run().await {
        Ok(code) => code,
        Err(err) => emit_error(&err.to_string()),
    }
}

/// Parses arguments, applies the locale, and dispatches the command.
async fn run() -> CliResult<ExitCode> {
    let cli = Cli::parse();
    let env_lang = std::env::var(LANG_ENV).ok();
    let locale = resolve_locale(cli.lang, env_lang.as_deref())?;
    set_locale(locale);
    if locale != Locale::En {
        write_stderr_line(&t!("i18n.disclaimer.machine_translated"))
            .map_err(|err| CliError::new(output_error("stderr", &err)))?;
    }
    if cli.show_version {
        let version = env!("CARGO_PKG_VERSION");
        write_stdout_line(&t!("main.version", version = version))
            .map_err(|err| CliError::new(output_error("stdout", &err)))?;
        return Ok(ExitCode::SUCCESS);
    }
    let Some(command) = cli.command else {
        show_help()?;
        return Ok(ExitCode::SUCCESS);
    };
    match command {
        Commands::Run(command) => command_run(&command).await,
        Commands::Check(command) => command_check(&command),
        Commands::Config {
            command,
        } => command_config(command),
    }
}

// ============================================================================
// SECTION: Gate Commands
// ============================================================================

/// Effective gate settings after merging config and flags.
#[derive(Debug, Clone, PartialEq, Eq)]
struct GateSettings {
    /// Manifest variable consulted for required names.
    manifest_var: VarName,
    /// Action taken when the gate blocks.
    on_fail: OnFailMode,
    /// Whether the snapshot dump precedes evaluation.
    dump: bool,
    /// Report rendering format.
    format: ReportFormat,
}

/// Merges file configuration with command-line overrides.
fn effective_settings(config: &ConfigGateConfig, args: &GateArgs) -> GateSettings {
    let manifest_var = args
        .manifest_var
        .as_deref()
        .map_or_else(|| VarName::new(config.gate.manifest_var.as_str()), VarName::new);
    GateSettings {
        manifest_var,
        on_fail: config.gate.on_fail,
        dump: args.dump_env || config.dump.enabled,
        format: args.format.into(),
    }
}

/// Loads config, captures the snapshot once, evaluates, and reports.
fn evaluate_gate(args: &GateArgs) -> CliResult<(GateSettings, Result<GateReport, GateError>)> {
    let config = ConfigGateConfig::load(args.config.as_deref())
        .map_err(|err| CliError::new(t!("config.load_failed", error = err)))?;
    let settings = effective_settings(&config, args);
    let env = EnvSnapshot::capture();
    let mut reporter = GateReporter::new(std::io::stdout(), settings.format);
    if settings.dump {
        reporter.dump_env(&env).map_err(|err| CliError::new(output_error("stdout", &err)))?;
    }
    let evaluation = evaluate(&env, &settings.manifest_var);
    reporter.emit(&evaluation).map_err(|err| CliError::new(output_error("stdout", &err)))?;
    Ok((settings, evaluation))
}

/// Executes the startup gate: evaluate, report, then hold or exit on failure.
async fn command_run(command: &RunCommand) -> CliResult<ExitCode> {
    let (settings, evaluation) = evaluate_gate(&command.gate)?;
    match GateOutcome::from_evaluation(&evaluation) {
        GateOutcome::Proceed => Ok(ExitCode::SUCCESS),
        GateOutcome::Block => match settings.on_fail {
            OnFailMode::Exit => Ok(ExitCode::FAILURE),
            OnFailMode::Block => {
                write_stderr_line(&t!("gate.blocked.waiting"))
                    .map_err(|err| CliError::new(output_error("stderr", &err)))?;
                Ok(block_until_terminated().await)
            }
        },
    }
}

/// Executes the gate in check mode: always exits, never holds.
fn command_check(command: &CheckCommand) -> CliResult<ExitCode> {
    let (_settings, evaluation) = evaluate_gate(&command.gate)?;
    match GateOutcome::from_evaluation(&evaluation) {
        GateOutcome::Proceed => Ok(ExitCode::SUCCESS),
        GateOutcome::Block => Ok(ExitCode::FAILURE),
    }
}

// ============================================================================
// SECTION: Config Commands
// ============================================================================

/// Dispatches config subcommands.
fn command_config(command: ConfigCommand) -> CliResult<ExitCode> {
    match command {
        ConfigCommand::Validate(command) => command_config_validate(&command),
    }
}

/// Executes the config validation command.
fn command_config_validate(command: &ConfigValidateCommand) -> CliResult<ExitCode> {
    let _config = ConfigGateConfig::load(command.config.as_deref())
        .map_err(|err| CliError::new(t!("config.load_failed", error = err)))?;
    write_stdout_line(&t!("config.validate.ok"))
        .map_err(|err| CliError::new(output_error("stdout", &err)))?;
    Ok(ExitCode::SUCCESS)
}

// ============================================================================
// SECTION: Terminal Wait
// ============================================================================

/// Parks the task until SIGTERM or SIGINT arrives.
///
/// The wait is suspension, not polling: no CPU is consumed until a signal is
/// delivered. The returned status mirrors the conventional 128 + signo value
/// an orchestrator expects from signal death. If no signal stream can be
/// installed the task stays parked and the process remains killable.
#[cfg(unix)]
async fn block_until_terminated() -> ExitCode {
    use tokio::signal::unix::SignalKind;
    use tokio::signal::unix::signal;
    let sigterm = async {
        match signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                let _ = stream.recv().await;
            }
            Err(_) => std::future::pending::<()>().await,
        }
    };
    let sigint = async {
        if tokio::signal::ctrl_c().await.is_err() {
            std::future::pending::<()>().await;
        }
    };
    tokio::select! {
        () = sigterm => ExitCode::from(SIGTERM_EXIT),
        () = sigint => ExitCode::from(SIGINT_EXIT),
    }
}

/// Parks the task until Ctrl-C arrives (non-unix fallback).
#[cfg(not(unix))]
async fn block_until_terminated() -> ExitCode {
    if tokio::signal::ctrl_c().await.is_err() {
        std::future::pending::<()>().await;
    }
    ExitCode::from(SIGINT_EXIT)
}

// ============================================================================
// SECTION: Conversions
// ============================================================================

impl From<FormatArg> for ReportFormat {
    fn from(value: FormatArg) -> Self {
        match value {
            FormatArg::Text => Self::Text,
            FormatArg::Json => Self::Json,
        }
    }
}

impl From<LangArg> for Locale {
    fn from(value: LangArg) -> Self {
        match value {
            LangArg::En => Self::En,
            LangArg::Ca => Self::Ca,
        }
    }
}

// ============================================================================
// SECTION: Output Helpers
// ============================================================================

/// Prints the top-level help text.
fn show_help() -> CliResult<()> {
    let mut command = Cli::command();
    command.print_help().map_err(|err| CliError::new(output_error("stdout", &err)))?;
    write_stdout_line("").map_err(|err| CliError::new(output_error("stdout", &err)))?;
    Ok(())
}

/// Resolves the output locale from the flag or environment.
fn resolve_locale(lang: Option<LangArg>, env_lang: Option<&str>) -> CliResult<Locale> {
    if let Some(lang) = lang {
        return Ok(lang.into());
    }
    if let Some(value) = env_lang {
        return Locale::parse(value).ok_or_else(|| {
            CliError::new(t!("i18n.lang.invalid_env", env = LANG_ENV, value = value))
        });
    }
    Ok(Locale::En)
}

/// Writes a line to stdout.
fn write_stdout_line(message: &str) -> std::io::Result<()> {
    let mut stdout = std::io::stdout();
    writeln!(&mut stdout, "{message}")
}

/// Writes a line to stderr.
fn write_stderr_line(message: &str) -> std::io::Result<()> {
    let mut stderr = std::io::stderr();
    writeln!(&mut stderr, "{message}")
}

/// Builds a localized description of an output failure.
fn output_error(stream: &str, error: &std::io::Error) -> String {
    let stream_label = match stream {
        "stdout" => t!("output.stream.stdout"),
        "stderr" => t!("output.stream.stderr"),
        _ => t!("output.stream.unknown"),
    };
    t!("output.write_failed", stream = stream_label, error = error)
}

/// Prints a fatal error and returns the failure exit code.
fn emit_error(message: &str) -> ExitCode {
    let _ = write_stderr_line(message);
    ExitCode::FAILURE
}
