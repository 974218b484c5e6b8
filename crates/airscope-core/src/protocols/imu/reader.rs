use std::ops::Range;

use super::error::ImuReportError;

/// Bounds-checked little-endian reads over one HID report.
pub struct ImuReader<'a> {
    payload: &'a [u8],
}

impl<'a> ImuReader<'a> {
    pub fn new(payload: &'a [u8]) -> Self {
        Self { payload }
    }

    pub fn require_len(&self, needed: usize) -> Result<(), ImuReportError> {
        if self.payload.len() < needed {
            return Err(ImuReportError::TooShort {
                needed,
                actual: self.payload.len(),
            });
        }
        Ok(())
    }

    pub fn read_u8(&self, offset: usize) -> Result<u8, ImuReportError> {
        self.payload
            .get(offset)
            .copied()
            .ok_or(ImuReportError::TooShort {
                needed: offset + 1,
                actual: self.payload.len(),
            })
    }

    pub fn read_u16_le(&self, range: Range<usize>) -> Result<u16, ImuReportError> {
        self.read_array(range).map(u16::from_le_bytes)
    }

    pub fn read_i16_le(&self, range: Range<usize>) -> Result<i16, ImuReportError> {
        self.read_array(range).map(i16::from_le_bytes)
    }

    pub fn read_u32_le(&self, range: Range<usize>) -> Result<u32, ImuReportError> {
        self.read_array(range).map(u32::from_le_bytes)
    }

    pub fn read_u64_le(&self, range: Range<usize>) -> Result<u64, ImuReportError> {
        self.read_array(range).map(u64::from_le_bytes)
    }

    pub fn read_slice(&self, range: Range<usize>) -> Result<&'a [u8], ImuReportError> {
        self.payload
            .get(range.clone())
            .ok_or(ImuReportError::TooShort {
                needed: range.end,
                actual: self.payload.len(),
            })
    }

    fn read_array<const N: usize>(&self, range: Range<usize>) -> Result<[u8; N], ImuReportError> {
        let bytes = self.read_slice(range)?;
        bytes.try_into().map_err(|_| ImuReportError::TooShort {
            needed: N,
            actual: bytes.len(),
        })
    }
}
