#[cfg(feature = "hid")]
mod hid;

#[cfg(feature = "hid")]
pub use hid::HidReportSource;

use thiserror::Error;

use crate::protocols::imu::layout;

/// Byte transport carrying IMU reports (write once, then read in a loop).
pub trait ReportSource {
    /// Write raw bytes to the device, returning the count accepted.
    fn send(&mut self, bytes: &[u8]) -> Result<usize, SourceError>;

    /// Block until one report arrives and copy it into `buf`.
    ///
    /// `Ok(0)` signals end of stream.
    fn read_report(&mut self, buf: &mut [u8]) -> Result<usize, SourceError>;
}

#[derive(Debug, Error)]
pub enum SourceError {
    #[error(
        "no HID device {vendor_id:04x}:{product_id:04x} with interface {interface} found"
    )]
    DeviceNotFound {
        vendor_id: u16,
        product_id: u16,
        interface: i32,
    },
    #[error("failed to open HID device: {0}")]
    Open(String),
    #[error("failed to write to HID device: {0}")]
    Write(String),
    #[error("failed to read from HID device: {0}")]
    Read(String),
}

/// Send the vendor command that starts the IMU stream.
///
/// # Errors
/// Returns `SourceError::Write` when the transport rejects the command.
pub fn activate<S: ReportSource>(source: &mut S) -> Result<(), SourceError> {
    let written = source.send(&layout::ACTIVATION_COMMAND)?;
    tracing::info!(written, "IMU stream activation sent");
    Ok(())
}
