//! Read/render loop.
//!
//! One blocking read per iteration, decoded and rendered before the next
//! read is issued. The report buffer and viewport are owned by the loop and
//! overwritten each time round.

use std::io;

use thiserror::Error;

use crate::present::{Layout, Viewport, render_decoded, render_message, render_raw};
use crate::protocols::imu::{DecodeOutcome, decode, layout};
use crate::source::ReportSource;

/// Status line shown when the transport read fails.
pub const READ_FAILURE_MESSAGE: &str = "Unable to get feature report";

/// User input seen between iterations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    Continue,
    Quit,
}

/// Screen the session draws on.
pub trait Display {
    fn viewport(&mut self) -> io::Result<Viewport>;

    /// Replace the screen contents with `layout`.
    fn present(&mut self, layout: &Layout) -> io::Result<()>;

    /// Non-blocking check for a pending key.
    fn poll_input(&mut self) -> io::Result<Input>;

    /// Block until a key is pressed.
    fn wait_input(&mut self) -> io::Result<Input>;
}

/// Why a session stopped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEnd {
    /// The transport returned a zero-length read.
    EndOfStream,
    /// The transport read failed; the status message was shown.
    ReadFailed(String),
    /// The user asked to quit.
    Stopped,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSummary {
    pub recognized: u64,
    pub unrecognized: u64,
    pub end: SessionEnd,
}

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("display error: {0}")]
    Display(#[from] io::Error),
}

/// Run the read/render loop until end of stream, read failure or quit.
///
/// Unrecognized frames stay on screen until a key is pressed. After a read
/// failure or end of stream the final screen is held the same way.
///
/// # Errors
/// Only display failures are returned; transport failures end the session
/// normally with `SessionEnd::ReadFailed`.
pub fn run_session<S, D>(source: &mut S, display: &mut D) -> Result<SessionSummary, SessionError>
where
    S: ReportSource,
    D: Display,
{
    let mut buf = [0u8; layout::REPORT_LEN];
    let mut recognized = 0u64;
    let mut unrecognized = 0u64;

    let end = loop {
        if display.poll_input()? == Input::Quit {
            break SessionEnd::Stopped;
        }

        let viewport = display.viewport()?;
        let len = match source.read_report(&mut buf) {
            Ok(len) => len.min(buf.len()),
            Err(err) => {
                tracing::debug!(%err, "IMU read failed");
                display.present(&render_message(viewport, READ_FAILURE_MESSAGE))?;
                display.wait_input()?;
                break SessionEnd::ReadFailed(err.to_string());
            }
        };
        if len == 0 {
            display.wait_input()?;
            break SessionEnd::EndOfStream;
        }

        match decode(&buf[..len]) {
            DecodeOutcome::Recognized(report) => {
                recognized += 1;
                tracing::trace!(counter = report.sample_counter_a, "IMU report");
                display.present(&render_decoded(viewport, &report))?;
            }
            DecodeOutcome::Unrecognized(bytes) => {
                unrecognized += 1;
                tracing::trace!(len = bytes.len(), "unrecognized report");
                display.present(&render_raw(viewport, bytes))?;
                if display.wait_input()? == Input::Quit {
                    break SessionEnd::Stopped;
                }
            }
        }
    };

    Ok(SessionSummary {
        recognized,
        unrecognized,
        end,
    })
}
