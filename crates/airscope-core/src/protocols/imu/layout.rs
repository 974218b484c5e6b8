use std::ops::Range;

pub const VENDOR_ID: u16 = 0x3318;
pub const PRODUCT_ID: u16 = 0x0424;
pub const IMU_INTERFACE: i32 = 3;

/// Vendor command that starts the IMU stream on the HID interface.
pub const ACTIVATION_COMMAND: [u8; 9] = [0xaa, 0xc5, 0xd1, 0x21, 0x42, 0x04, 0x00, 0x19, 0x01];

pub const FRAME_MARKER: u16 = 0x0201;

pub const FRAME_MARKER_RANGE: Range<usize> = 0..2;
pub const RESERVED_02_RANGE: Range<usize> = 2..4;
pub const RESERVED_04_OFFSET: usize = 4;
pub const SAMPLE_COUNTER_A_RANGE: Range<usize> = 5..9;
pub const RESERVED_09_OFFSET: usize = 9;
pub const RESERVED_0A_RANGE: Range<usize> = 10..18;
pub const RESERVED_12_OFFSET: usize = 18;
pub const RATE_PITCH_RANGE: Range<usize> = 19..21;
pub const RESERVED_15_OFFSET: usize = 21;
pub const RATE_ROLL_RANGE: Range<usize> = 22..24;
pub const RESERVED_18_OFFSET: usize = 24;
pub const RATE_YAW_RANGE: Range<usize> = 25..27;
pub const RESERVED_1B_RANGE: Range<usize> = 27..29;
pub const RESERVED_1D_RANGE: Range<usize> = 29..33;
pub const RESERVED_21_OFFSET: usize = 33;
pub const ROTATION_ROLL_RANGE: Range<usize> = 34..36;
pub const RESERVED_24_OFFSET: usize = 36;
pub const ROTATION_PITCH_A_RANGE: Range<usize> = 37..39;
pub const RESERVED_27_OFFSET: usize = 39;
pub const ROTATION_PITCH_B_RANGE: Range<usize> = 40..42;
pub const RESERVED_2A_RANGE: Range<usize> = 42..44;
pub const RESERVED_2C_RANGE: Range<usize> = 44..48;
pub const MAG_1_RANGE: Range<usize> = 48..50;
pub const MAG_2_RANGE: Range<usize> = 50..52;
pub const MAG_3_RANGE: Range<usize> = 52..54;
pub const SAMPLE_COUNTER_B_RANGE: Range<usize> = 54..58;
pub const RESERVED_3A_RANGE: Range<usize> = 58..62;
pub const RESERVED_3E_OFFSET: usize = 62;
pub const RESERVED_3F_OFFSET: usize = 63;

/// Wire representation of a single field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    U8,
    U16,
    I16,
    U32,
    U64,
}

impl FieldKind {
    pub const fn width(self) -> usize {
        match self {
            FieldKind::U8 => 1,
            FieldKind::U16 | FieldKind::I16 => 2,
            FieldKind::U32 => 4,
            FieldKind::U64 => 8,
        }
    }
}

/// One entry of the report layout: where a field lives and how wide it is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub range: Range<usize>,
    pub kind: FieldKind,
}

const fn field(name: &'static str, range: Range<usize>, kind: FieldKind) -> FieldSpec {
    FieldSpec { name, range, kind }
}

const fn byte(name: &'static str, offset: usize) -> FieldSpec {
    FieldSpec {
        name,
        range: offset..offset + 1,
        kind: FieldKind::U8,
    }
}

/// Every field of the report in wire order, reserved ones included.
///
/// Reserved fields are named after their hexadecimal offset. They carry no
/// confirmed meaning but must stay in the table so later offsets hold.
pub const FIELDS: [FieldSpec; 29] = [
    field("frame_marker", FRAME_MARKER_RANGE, FieldKind::U16),
    field("reserved_02", RESERVED_02_RANGE, FieldKind::U16),
    byte("reserved_04", RESERVED_04_OFFSET),
    field("sample_counter_a", SAMPLE_COUNTER_A_RANGE, FieldKind::U32),
    byte("reserved_09", RESERVED_09_OFFSET),
    field("reserved_0a", RESERVED_0A_RANGE, FieldKind::U64),
    byte("reserved_12", RESERVED_12_OFFSET),
    field("rate_pitch", RATE_PITCH_RANGE, FieldKind::I16),
    byte("reserved_15", RESERVED_15_OFFSET),
    field("rate_roll", RATE_ROLL_RANGE, FieldKind::I16),
    byte("reserved_18", RESERVED_18_OFFSET),
    field("rate_yaw", RATE_YAW_RANGE, FieldKind::I16),
    field("reserved_1b", RESERVED_1B_RANGE, FieldKind::U16),
    field("reserved_1d", RESERVED_1D_RANGE, FieldKind::U32),
    byte("reserved_21", RESERVED_21_OFFSET),
    field("rotation_roll", ROTATION_ROLL_RANGE, FieldKind::I16),
    byte("reserved_24", RESERVED_24_OFFSET),
    field("rotation_pitch_a", ROTATION_PITCH_A_RANGE, FieldKind::I16),
    byte("reserved_27", RESERVED_27_OFFSET),
    field("rotation_pitch_b", ROTATION_PITCH_B_RANGE, FieldKind::I16),
    field("reserved_2a", RESERVED_2A_RANGE, FieldKind::U16),
    field("reserved_2c", RESERVED_2C_RANGE, FieldKind::U32),
    field("mag_1", MAG_1_RANGE, FieldKind::I16),
    field("mag_2", MAG_2_RANGE, FieldKind::I16),
    field("mag_3", MAG_3_RANGE, FieldKind::I16),
    field("sample_counter_b", SAMPLE_COUNTER_B_RANGE, FieldKind::U32),
    field("reserved_3a", RESERVED_3A_RANGE, FieldKind::U32),
    byte("reserved_3e", RESERVED_3E_OFFSET),
    byte("reserved_3f", RESERVED_3F_OFFSET),
];

/// Fixed report size; also the transport read size.
pub const REPORT_LEN: usize = FIELDS[FIELDS.len() - 1].range.end;
