//! IMU report decoding for the glasses' HID sensor interface.
//!
//! The device streams fixed 64-byte reports. Their layout was worked out by
//! inspection: the frame marker, counters, angular rate, rotation and
//! magnetometer groups are named, everything else is kept as reserved fields
//! so that offsets stay exact. A buffer with any other marker (or a short
//! read) is not an error; it is handed back verbatim as `Unrecognized`.
//!
//! Offsets live in `layout`, bounds-checked little-endian reads in `reader`.
//!
//! Version française (résumé):
//! Le module décode les rapports IMU de 64 octets (petit-boutiste). Un
//! marqueur différent de `0x0201` ou une lecture courte donne `Unrecognized`
//! avec les octets bruts. Les positions sont dans `layout`.

pub mod error;
pub mod layout;
pub mod parser;
pub mod reader;

pub use parser::{
    AngularRate, DecodeOutcome, ImuReport, Magnetometer, Reserved, Rotation, decode,
    parse_imu_report,
};
