use super::error::ImuReportError;
use super::layout;
use super::reader::ImuReader;

/// Gyroscope-derived angular rate, one raw value per axis.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AngularRate {
    pub pitch: i16,
    pub roll: i16,
    pub yaw: i16,
}

/// Rotation-like values. Pitch shows up twice at distinct offsets and it is
/// not known which one (if either) is authoritative.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Rotation {
    pub roll: i16,
    pub pitch_a: i16,
    pub pitch_b: i16,
}

/// Raw magnetometer readings; scale and axis mapping are unconfirmed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Magnetometer {
    pub axis_1: i16,
    pub axis_2: i16,
    pub axis_3: i16,
}

/// Fields observed on the wire without a known meaning, named by offset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Reserved {
    pub reserved_02: u16,
    pub reserved_04: u8,
    pub reserved_09: u8,
    pub reserved_0a: u64,
    pub reserved_12: u8,
    pub reserved_15: u8,
    pub reserved_18: u8,
    pub reserved_1b: u16,
    pub reserved_1d: u32,
    pub reserved_21: u8,
    pub reserved_24: u8,
    pub reserved_27: u8,
    pub reserved_2a: u16,
    pub reserved_2c: u32,
    pub reserved_3a: u32,
    pub reserved_3e: u8,
    pub reserved_3f: u8,
}

/// One decoded IMU report with every field in host byte order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImuReport {
    pub frame_marker: u16,
    pub sample_counter_a: u32,
    pub angular_rate: AngularRate,
    pub rotation: Rotation,
    pub magnetometer: Magnetometer,
    pub sample_counter_b: u32,
    pub reserved: Reserved,
}

impl ImuReport {
    /// Raw bit pattern of the field named `name` in `layout::FIELDS`,
    /// zero-extended. Signed fields come back as their two's-complement bits.
    pub fn field_bits(&self, name: &str) -> Option<u64> {
        let r = &self.reserved;
        let bits = match name {
            "frame_marker" => u64::from(self.frame_marker),
            "sample_counter_a" => u64::from(self.sample_counter_a),
            "rate_pitch" => i16_bits(self.angular_rate.pitch),
            "rate_roll" => i16_bits(self.angular_rate.roll),
            "rate_yaw" => i16_bits(self.angular_rate.yaw),
            "rotation_roll" => i16_bits(self.rotation.roll),
            "rotation_pitch_a" => i16_bits(self.rotation.pitch_a),
            "rotation_pitch_b" => i16_bits(self.rotation.pitch_b),
            "mag_1" => i16_bits(self.magnetometer.axis_1),
            "mag_2" => i16_bits(self.magnetometer.axis_2),
            "mag_3" => i16_bits(self.magnetometer.axis_3),
            "sample_counter_b" => u64::from(self.sample_counter_b),
            "reserved_02" => u64::from(r.reserved_02),
            "reserved_04" => u64::from(r.reserved_04),
            "reserved_09" => u64::from(r.reserved_09),
            "reserved_0a" => r.reserved_0a,
            "reserved_12" => u64::from(r.reserved_12),
            "reserved_15" => u64::from(r.reserved_15),
            "reserved_18" => u64::from(r.reserved_18),
            "reserved_1b" => u64::from(r.reserved_1b),
            "reserved_1d" => u64::from(r.reserved_1d),
            "reserved_21" => u64::from(r.reserved_21),
            "reserved_24" => u64::from(r.reserved_24),
            "reserved_27" => u64::from(r.reserved_27),
            "reserved_2a" => u64::from(r.reserved_2a),
            "reserved_2c" => u64::from(r.reserved_2c),
            "reserved_3a" => u64::from(r.reserved_3a),
            "reserved_3e" => u64::from(r.reserved_3e),
            "reserved_3f" => u64::from(r.reserved_3f),
            _ => return None,
        };
        Some(bits)
    }
}

fn i16_bits(value: i16) -> u64 {
    u64::from(value as u16)
}

/// Result of decoding one transport read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeOutcome<'a> {
    /// The frame marker matched and the full record was present.
    Recognized(ImuReport),
    /// Any other shape, kept verbatim for a raw dump.
    Unrecognized(&'a [u8]),
}

/// Parse one IMU report.
///
/// Returns `Ok(None)` when the frame marker does not match; the buffer then
/// belongs to another report shape sent on the same endpoint. Bytes past
/// `REPORT_LEN` are ignored.
///
/// # Errors
/// Returns `ImuReportError::TooShort` when fewer than `REPORT_LEN` bytes are
/// available; nothing beyond the slice is read.
pub fn parse_imu_report(payload: &[u8]) -> Result<Option<ImuReport>, ImuReportError> {
    let reader = ImuReader::new(payload);
    reader.require_len(layout::REPORT_LEN)?;

    let frame_marker = reader.read_u16_le(layout::FRAME_MARKER_RANGE)?;
    if frame_marker != layout::FRAME_MARKER {
        return Ok(None);
    }

    let angular_rate = AngularRate {
        pitch: reader.read_i16_le(layout::RATE_PITCH_RANGE)?,
        roll: reader.read_i16_le(layout::RATE_ROLL_RANGE)?,
        yaw: reader.read_i16_le(layout::RATE_YAW_RANGE)?,
    };
    let rotation = Rotation {
        roll: reader.read_i16_le(layout::ROTATION_ROLL_RANGE)?,
        pitch_a: reader.read_i16_le(layout::ROTATION_PITCH_A_RANGE)?,
        pitch_b: reader.read_i16_le(layout::ROTATION_PITCH_B_RANGE)?,
    };
    let magnetometer = Magnetometer {
        axis_1: reader.read_i16_le(layout::MAG_1_RANGE)?,
        axis_2: reader.read_i16_le(layout::MAG_2_RANGE)?,
        axis_3: reader.read_i16_le(layout::MAG_3_RANGE)?,
    };
    let reserved = Reserved {
        reserved_02: reader.read_u16_le(layout::RESERVED_02_RANGE)?,
        reserved_04: reader.read_u8(layout::RESERVED_04_OFFSET)?,
        reserved_09: reader.read_u8(layout::RESERVED_09_OFFSET)?,
        reserved_0a: reader.read_u64_le(layout::RESERVED_0A_RANGE)?,
        reserved_12: reader.read_u8(layout::RESERVED_12_OFFSET)?,
        reserved_15: reader.read_u8(layout::RESERVED_15_OFFSET)?,
        reserved_18: reader.read_u8(layout::RESERVED_18_OFFSET)?,
        reserved_1b: reader.read_u16_le(layout::RESERVED_1B_RANGE)?,
        reserved_1d: reader.read_u32_le(layout::RESERVED_1D_RANGE)?,
        reserved_21: reader.read_u8(layout::RESERVED_21_OFFSET)?,
        reserved_24: reader.read_u8(layout::RESERVED_24_OFFSET)?,
        reserved_27: reader.read_u8(layout::RESERVED_27_OFFSET)?,
        reserved_2a: reader.read_u16_le(layout::RESERVED_2A_RANGE)?,
        reserved_2c: reader.read_u32_le(layout::RESERVED_2C_RANGE)?,
        reserved_3a: reader.read_u32_le(layout::RESERVED_3A_RANGE)?,
        reserved_3e: reader.read_u8(layout::RESERVED_3E_OFFSET)?,
        reserved_3f: reader.read_u8(layout::RESERVED_3F_OFFSET)?,
    };

    Ok(Some(ImuReport {
        frame_marker,
        sample_counter_a: reader.read_u32_le(layout::SAMPLE_COUNTER_A_RANGE)?,
        angular_rate,
        rotation,
        magnetometer,
        sample_counter_b: reader.read_u32_le(layout::SAMPLE_COUNTER_B_RANGE)?,
        reserved,
    }))
}

/// Decode one transport read. Never fails: short reads and foreign markers
/// both come back as `Unrecognized` with the bytes untouched.
///
/// # Examples
/// ```
/// use airscope_core::{DecodeOutcome, decode};
///
/// let outcome = decode(&[0xff, 0xff, 0x00]);
/// assert_eq!(outcome, DecodeOutcome::Unrecognized(&[0xff, 0xff, 0x00]));
/// ```
pub fn decode(payload: &[u8]) -> DecodeOutcome<'_> {
    match parse_imu_report(payload) {
        Ok(Some(report)) => DecodeOutcome::Recognized(report),
        Ok(None) => DecodeOutcome::Unrecognized(payload),
        Err(err) => {
            tracing::trace!(%err, "treating short read as unrecognized");
            DecodeOutcome::Unrecognized(payload)
        }
    }
}
