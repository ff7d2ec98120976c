//! Glyph outlines drawn on a 1000 unit em square.

use fctx_types::PathCommand;

pub const UNITS_PER_EM: f64 = 1000.0;
pub const ASCENT: f64 = 800.0;
pub const DESCENT: f64 = -200.0;

/// 'A', a plain triangle
pub static LATIN_CAPITAL_A: &[PathCommand] = &[
    PathCommand::move_to(0.0, 0.0),
    PathCommand::line_to(300.0, 700.0),
    PathCommand::line_to(600.0, 0.0),
    PathCommand::ClosePath,
];

/// 'B', a rectangle drawn with relative single-axis lines
pub static LATIN_CAPITAL_B: &[PathCommand] = &[
    PathCommand::MoveTo {
        x: 50.0,
        y: 0.0,
        relative: true,
    },
    PathCommand::HorizontalLineTo {
        x: 500.0,
        relative: true,
    },
    PathCommand::VerticalLineTo {
        y: 700.0,
        relative: true,
    },
    PathCommand::HorizontalLineTo {
        x: -500.0,
        relative: true,
    },
    PathCommand::ClosePath,
];

/// 'C', a single large arc (about 247 degrees)
pub static LATIN_CAPITAL_C: &[PathCommand] = &[
    PathCommand::move_to(500.0, 100.0),
    PathCommand::arc_to(300.0, 300.0, 0.0, true, false, 500.0, 600.0),
];

/// 'D', a square
pub static LATIN_CAPITAL_D: &[PathCommand] = &[
    PathCommand::move_to(0.0, 0.0),
    PathCommand::line_to(0.0, 700.0),
    PathCommand::line_to(600.0, 700.0),
    PathCommand::line_to(600.0, 0.0),
    PathCommand::ClosePath,
];

/// The 'fi' ligature
pub static LIGATURE_FI: &[PathCommand] = &[
    PathCommand::move_to(0.0, 0.0),
    PathCommand::line_to(100.0, 0.0),
    PathCommand::line_to(100.0, 100.0),
    PathCommand::ClosePath,
];

/// An outline that is far outside the em square, and cannot be packed.
pub static OVERSIZED: &[PathCommand] = &[
    PathCommand::move_to(0.0, 0.0),
    PathCommand::line_to(100_000.0, 0.0),
    PathCommand::ClosePath,
];
