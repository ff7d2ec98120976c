//! Free-standing paths and their packed encodings.

use fctx_types::PathCommand;

/// `M10 10 L20 10 Z`
pub static TRIANGLE: &[PathCommand] = &[
    PathCommand::move_to(10.0, 10.0),
    PathCommand::line_to(20.0, 10.0),
    PathCommand::ClosePath,
];

#[rustfmt::skip]
pub static TRIANGLE_PACKED: &[u8] = &[
    0x4d, 0x00, 0xa0, 0x00, 0xa0, 0x00, // M 10 10
    0x4c, 0x00, 0x40, 0x01, 0xa0, 0x00, // L 20 10
    0x5a, 0x00,                         // Z
];

/// `m10 10 l10 0 l0 10 z`
pub static RELATIVE_SQUARE: &[PathCommand] = &[
    PathCommand::MoveTo {
        x: 10.0,
        y: 10.0,
        relative: true,
    },
    PathCommand::LineTo {
        x: 10.0,
        y: 0.0,
        relative: true,
    },
    PathCommand::LineTo {
        x: 0.0,
        y: 10.0,
        relative: true,
    },
    PathCommand::ClosePath,
];

#[rustfmt::skip]
pub static RELATIVE_SQUARE_PACKED: &[u8] = &[
    0x4d, 0x00, 0xa0, 0x00, 0xa0, 0x00, // M 10 10
    0x4c, 0x00, 0x40, 0x01, 0xa0, 0x00, // L 20 10
    0x4c, 0x00, 0x40, 0x01, 0x40, 0x01, // L 20 20
    0x5a, 0x00,                         // Z
];

/// `M0 0 H-4.5 V2.25 h1 v-1`: every single-axis form, with negative values.
pub static AXIS_LINES: &[PathCommand] = &[
    PathCommand::move_to(0.0, 0.0),
    PathCommand::horizontal_line_to(-4.5),
    PathCommand::vertical_line_to(2.25),
    PathCommand::HorizontalLineTo {
        x: 1.0,
        relative: true,
    },
    PathCommand::VerticalLineTo {
        y: -1.0,
        relative: true,
    },
];

#[rustfmt::skip]
pub static AXIS_LINES_PACKED: &[u8] = &[
    0x4d, 0x00, 0x00, 0x00, 0x00, 0x00, // M 0 0
    0x48, 0x00, 0xb8, 0xff,             // H -4.5
    0x56, 0x00, 0x24, 0x00,             // V 2.25
    0x48, 0x00, 0xc8, 0xff,             // H -3.5
    0x56, 0x00, 0x14, 0x00,             // V 1.25
];
