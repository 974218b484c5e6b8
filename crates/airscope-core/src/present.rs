//! Text layout for the terminal view.
//!
//! Every function here is a pure mapping from values and a viewport size to
//! positioned lines. Painting, clipping to the physical screen and refresh
//! are left to the `Display` implementation.

use crate::protocols::imu::ImuReport;

/// Bytes per row of the raw hex dump.
pub const HEX_ROW_BYTES: usize = 16;

/// Current terminal size, supplied fresh on every render.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Viewport {
    pub rows: u16,
    pub cols: u16,
}

impl Viewport {
    pub fn new(rows: u16, cols: u16) -> Self {
        Self { rows, cols }
    }
}

/// A single line of text anchored at a zero-based row/column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    pub row: u16,
    pub col: u16,
    pub text: String,
}

/// Positioned lines making up one screen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Layout {
    pub lines: Vec<Line>,
}

impl Layout {
    fn centered_block(viewport: Viewport, texts: Vec<String>) -> Self {
        let width = texts
            .iter()
            .map(|text| text.chars().count())
            .max()
            .unwrap_or(0);
        let top = center(viewport.rows, texts.len());
        let left = center(viewport.cols, width);
        let lines = texts
            .into_iter()
            .zip(0u16..)
            .map(|(text, index)| Line {
                row: top.saturating_add(index),
                col: left,
                text,
            })
            .collect();
        Self { lines }
    }
}

/// Three lines (rate, rotation, magnetometer), each value as 4 hex digits.
pub fn render_decoded(viewport: Viewport, report: &ImuReport) -> Layout {
    let rate = report.angular_rate;
    let rotation = report.rotation;
    let mag = report.magnetometer;
    let texts = vec![
        format_triplet("Rate:", [rate.roll, rate.pitch, rate.yaw]),
        format_triplet("Rot:", [rotation.roll, rotation.pitch_a, rotation.pitch_b]),
        format_triplet("Mag:", [mag.axis_1, mag.axis_2, mag.axis_3]),
    ];
    Layout::centered_block(viewport, texts)
}

/// Hex dump, 16 bytes per row, `ceil(len / 16)` rows.
pub fn render_raw(viewport: Viewport, bytes: &[u8]) -> Layout {
    let texts = bytes.chunks(HEX_ROW_BYTES).map(hex_row).collect();
    Layout::centered_block(viewport, texts)
}

/// One centered line, cut to the viewport width.
pub fn render_message(viewport: Viewport, text: &str) -> Layout {
    let visible: String = text.chars().take(usize::from(viewport.cols)).collect();
    Layout::centered_block(viewport, vec![visible])
}

fn format_triplet(label: &str, values: [i16; 3]) -> String {
    format!(
        "{label:<5} {:04x} {:04x} {:04x}",
        values[0] as u16, values[1] as u16, values[2] as u16
    )
}

fn hex_row(chunk: &[u8]) -> String {
    chunk
        .iter()
        .map(|b| format!("{:02x}", b))
        .collect::<Vec<_>>()
        .join(" ")
}

fn center(available: u16, used: usize) -> u16 {
    let used = u16::try_from(used).unwrap_or(u16::MAX);
    available.saturating_sub(used) / 2
}
