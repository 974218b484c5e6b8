//! airscope core library: live inspection of the glasses' IMU HID stream.
//!
//! A `ReportSource` delivers fixed-size HID reports, the `protocols::imu`
//! decoder (layout/reader/parser) turns each one into either a typed
//! `ImuReport` or an unrecognized byte buffer, and `present` lays the result
//! out as centered text for a `Display`. `session::run_session` ties the three
//! together in a single-threaded blocking loop.
//!
//! Invariants:
//! - Decoding is pure and total; short reads and foreign markers are data,
//!   not errors.
//! - Field offsets come only from `layout`; reserved fields are decoded too so
//!   nothing shifts.
//! - Layout functions never touch the terminal.
//!
//! Version française (résumé):
//! Cette crate lit les rapports HID de l'IMU, les décode (layout/reader/parser)
//! et produit une mise en page texte centrée. Les E/S restent dans `source` et
//! dans l'implémentation de `Display` fournie par l'appelant.
//!
//! # Examples
//! ```no_run
//! # #[cfg(feature = "hid")]
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use airscope_core::{HidReportSource, activate};
//!
//! let mut source = HidReportSource::open()?;
//! activate(&mut source)?;
//! # Ok(())
//! # }
//! # #[cfg(not(feature = "hid"))]
//! # fn main() {}
//! ```

mod present;
mod protocols;
mod session;
mod source;

pub use present::{HEX_ROW_BYTES, Layout, Line, Viewport, render_decoded, render_message, render_raw};
pub use protocols::imu::error::ImuReportError;
pub use protocols::imu::layout::{
    ACTIVATION_COMMAND, FIELDS, FRAME_MARKER, FieldKind, FieldSpec, IMU_INTERFACE, PRODUCT_ID,
    REPORT_LEN, VENDOR_ID,
};
pub use protocols::imu::{
    AngularRate, DecodeOutcome, ImuReport, Magnetometer, Reserved, Rotation, decode,
    parse_imu_report,
};
pub use session::{
    Display, Input, READ_FAILURE_MESSAGE, SessionEnd, SessionError, SessionSummary, run_session,
};
#[cfg(feature = "hid")]
pub use source::HidReportSource;
pub use source::{ReportSource, SourceError, activate};
