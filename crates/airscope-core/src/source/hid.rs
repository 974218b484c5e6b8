//! `hidapi` transport for the glasses' IMU interface.

use hidapi::{HidApi, HidDevice};

use super::{ReportSource, SourceError};
use crate::protocols::imu::layout;

pub struct HidReportSource {
    device: HidDevice,
    _api: HidApi,
}

impl HidReportSource {
    /// Find the IMU interface of the glasses and open it.
    ///
    /// # Errors
    /// Returns `SourceError::DeviceNotFound` when no enumerated device
    /// matches the vendor/product id and interface number, and
    /// `SourceError::Open` when the HID backend fails.
    pub fn open() -> Result<Self, SourceError> {
        let api = HidApi::new().map_err(|e| SourceError::Open(e.to_string()))?;
        let info = api
            .device_list()
            .find(|info| {
                info.vendor_id() == layout::VENDOR_ID
                    && info.product_id() == layout::PRODUCT_ID
                    && info.interface_number() == layout::IMU_INTERFACE
            })
            .ok_or(SourceError::DeviceNotFound {
                vendor_id: layout::VENDOR_ID,
                product_id: layout::PRODUCT_ID,
                interface: layout::IMU_INTERFACE,
            })?;

        tracing::info!(path = ?info.path(), "opening IMU interface");
        let device = info
            .open_device(&api)
            .map_err(|e| SourceError::Open(e.to_string()))?;
        Ok(Self { device, _api: api })
    }
}

impl ReportSource for HidReportSource {
    fn send(&mut self, bytes: &[u8]) -> Result<usize, SourceError> {
        self.device
            .write(bytes)
            .map_err(|e| SourceError::Write(e.to_string()))
    }

    fn read_report(&mut self, buf: &mut [u8]) -> Result<usize, SourceError> {
        self.device
            .read(buf)
            .map_err(|e| SourceError::Read(e.to_string()))
    }
}
