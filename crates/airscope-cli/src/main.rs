use std::process::ExitCode;

use airscope_core::{HidReportSource, SessionEnd, SourceError, activate, run_session};
use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod terminal;

use terminal::TerminalDisplay;

const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (commit ",
    env!("AIRSCOPE_BUILD_COMMIT"),
    ", ",
    env!("AIRSCOPE_BUILD_DATE"),
    ")"
);

const DEFAULT_LOG_FILTER: &str = "airscope_cli=warn,airscope_core=warn";

#[derive(Parser, Debug)]
#[command(name = "airscope")]
#[command(version, long_version = LONG_VERSION)]
#[command(
    about = "Live viewer for the IMU report stream of the glasses' HID interface.",
    long_about = None,
    after_help = "Keys:\n  q, Esc, Ctrl-C   quit\n  any other key    continue past a raw frame\n\nLogs go to stderr; set RUST_LOG to change the filter."
)]
struct Cli {}

fn main() -> ExitCode {
    let _cli = Cli::parse();
    init_tracing();

    match cmd_view() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {}", err.message);
            if let Some(hint) = err.hint {
                eprintln!("hint: {}", hint);
            }
            ExitCode::from(2)
        }
    }
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()),
        )
        .init();
}

#[derive(Debug)]
struct CliError {
    message: String,
    hint: Option<String>,
}

impl CliError {
    fn new(message: impl Into<String>, hint: Option<String>) -> Self {
        Self {
            message: message.into(),
            hint,
        }
    }
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

impl From<anyhow::Error> for CliError {
    fn from(err: anyhow::Error) -> Self {
        CliError::new(format!("{err:#}"), None)
    }
}

impl From<SourceError> for CliError {
    fn from(err: SourceError) -> Self {
        let hint = match &err {
            SourceError::DeviceNotFound { .. } => {
                Some("plug in the glasses and wait for the HID interfaces to appear".to_string())
            }
            SourceError::Open(_) => Some(
                "check read/write access to the hidraw device (udev rule or elevated privileges)"
                    .to_string(),
            ),
            SourceError::Write(_) => Some("unplug and replug the glasses, then retry".to_string()),
            SourceError::Read(_) => None,
        };
        CliError::new(err.to_string(), hint)
    }
}

fn cmd_view() -> Result<(), CliError> {
    let mut source = HidReportSource::open()?;
    activate(&mut source)?;

    let summary = {
        let mut display = TerminalDisplay::enter().context("Failed to set up the terminal")?;
        run_session(&mut source, &mut display).context("Terminal session failed")?
    };

    tracing::info!(
        recognized = summary.recognized,
        unrecognized = summary.unrecognized,
        end = ?summary.end,
        "session finished"
    );
    if let SessionEnd::ReadFailed(reason) = &summary.end {
        tracing::warn!(%reason, "IMU stream ended on a read failure");
    }
    Ok(())
}
