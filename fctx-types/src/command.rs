//! Path drawing commands.

use std::fmt::{self, Display, Formatter};

/// The code identifying a draw command.
///
/// Packed commands store this as the value of the upper-case ASCII letter in
/// a little-endian `u16`. Elliptical arcs are never packed: they are expanded
/// into curves before encoding, and so [`Verb::ArcTo`] never appears in
/// packed data.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Verb {
    MoveTo = b'M',
    ClosePath = b'Z',
    LineTo = b'L',
    HorizontalLineTo = b'H',
    VerticalLineTo = b'V',
    CurveTo = b'C',
    SmoothCurveTo = b'S',
    QuadTo = b'Q',
    SmoothQuadTo = b'T',
    ArcTo = b'A',
}

impl Verb {
    /// The packed representation of this verb.
    pub const fn code(self) -> u16 {
        self as u8 as u16
    }

    /// The upper-case command letter.
    pub const fn letter(self) -> char {
        self as u8 as char
    }
}

/// A single path drawing command.
///
/// Each variant carries its own coordinates. When `relative` is set, every
/// coordinate of the command (but not the radii or rotation of an arc) is an
/// offset from the current point at the time the command is drawn.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PathCommand {
    MoveTo {
        x: f64,
        y: f64,
        relative: bool,
    },
    ClosePath,
    LineTo {
        x: f64,
        y: f64,
        relative: bool,
    },
    HorizontalLineTo {
        x: f64,
        relative: bool,
    },
    VerticalLineTo {
        y: f64,
        relative: bool,
    },
    CurveTo {
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        x: f64,
        y: f64,
        relative: bool,
    },
    SmoothCurveTo {
        x2: f64,
        y2: f64,
        x: f64,
        y: f64,
        relative: bool,
    },
    QuadTo {
        x1: f64,
        y1: f64,
        x: f64,
        y: f64,
        relative: bool,
    },
    SmoothQuadTo {
        x: f64,
        y: f64,
        relative: bool,
    },
    /// An elliptical arc; `x_axis_rotation` is in degrees.
    ArcTo {
        rx: f64,
        ry: f64,
        x_axis_rotation: f64,
        large_arc: bool,
        sweep: bool,
        x: f64,
        y: f64,
        relative: bool,
    },
}

impl PathCommand {
    pub const fn move_to(x: f64, y: f64) -> Self {
        PathCommand::MoveTo {
            x,
            y,
            relative: false,
        }
    }

    pub const fn line_to(x: f64, y: f64) -> Self {
        PathCommand::LineTo {
            x,
            y,
            relative: false,
        }
    }

    pub const fn horizontal_line_to(x: f64) -> Self {
        PathCommand::HorizontalLineTo { x, relative: false }
    }

    pub const fn vertical_line_to(y: f64) -> Self {
        PathCommand::VerticalLineTo { y, relative: false }
    }

    pub const fn curve_to(x1: f64, y1: f64, x2: f64, y2: f64, x: f64, y: f64) -> Self {
        PathCommand::CurveTo {
            x1,
            y1,
            x2,
            y2,
            x,
            y,
            relative: false,
        }
    }

    pub const fn smooth_curve_to(x2: f64, y2: f64, x: f64, y: f64) -> Self {
        PathCommand::SmoothCurveTo {
            x2,
            y2,
            x,
            y,
            relative: false,
        }
    }

    pub const fn quad_to(x1: f64, y1: f64, x: f64, y: f64) -> Self {
        PathCommand::QuadTo {
            x1,
            y1,
            x,
            y,
            relative: false,
        }
    }

    pub const fn smooth_quad_to(x: f64, y: f64) -> Self {
        PathCommand::SmoothQuadTo {
            x,
            y,
            relative: false,
        }
    }

    #[allow(clippy::too_many_arguments)]
    pub const fn arc_to(
        rx: f64,
        ry: f64,
        x_axis_rotation: f64,
        large_arc: bool,
        sweep: bool,
        x: f64,
        y: f64,
    ) -> Self {
        PathCommand::ArcTo {
            rx,
            ry,
            x_axis_rotation,
            large_arc,
            sweep,
            x,
            y,
            relative: false,
        }
    }

    /// Returns a copy of this command with the `relative` flag set.
    ///
    /// Has no effect on [`PathCommand::ClosePath`].
    pub fn into_relative(mut self) -> Self {
        match &mut self {
            PathCommand::ClosePath => (),
            PathCommand::MoveTo { relative, .. }
            | PathCommand::LineTo { relative, .. }
            | PathCommand::HorizontalLineTo { relative, .. }
            | PathCommand::VerticalLineTo { relative, .. }
            | PathCommand::CurveTo { relative, .. }
            | PathCommand::SmoothCurveTo { relative, .. }
            | PathCommand::QuadTo { relative, .. }
            | PathCommand::SmoothQuadTo { relative, .. }
            | PathCommand::ArcTo { relative, .. } => *relative = true,
        }
        self
    }

    /// The verb identifying this command.
    pub fn verb(&self) -> Verb {
        match self {
            PathCommand::MoveTo { .. } => Verb::MoveTo,
            PathCommand::ClosePath => Verb::ClosePath,
            PathCommand::LineTo { .. } => Verb::LineTo,
            PathCommand::HorizontalLineTo { .. } => Verb::HorizontalLineTo,
            PathCommand::VerticalLineTo { .. } => Verb::VerticalLineTo,
            PathCommand::CurveTo { .. } => Verb::CurveTo,
            PathCommand::SmoothCurveTo { .. } => Verb::SmoothCurveTo,
            PathCommand::QuadTo { .. } => Verb::QuadTo,
            PathCommand::SmoothQuadTo { .. } => Verb::SmoothQuadTo,
            PathCommand::ArcTo { .. } => Verb::ArcTo,
        }
    }

    /// `true` if the coordinates of this command are relative to the current point.
    pub fn is_relative(&self) -> bool {
        match self {
            PathCommand::ClosePath => false,
            PathCommand::MoveTo { relative, .. }
            | PathCommand::LineTo { relative, .. }
            | PathCommand::HorizontalLineTo { relative, .. }
            | PathCommand::VerticalLineTo { relative, .. }
            | PathCommand::CurveTo { relative, .. }
            | PathCommand::SmoothCurveTo { relative, .. }
            | PathCommand::QuadTo { relative, .. }
            | PathCommand::SmoothQuadTo { relative, .. }
            | PathCommand::ArcTo { relative, .. } => *relative,
        }
    }
}

/// Formats the command in SVG path data syntax, e.g. `M10 10` or `l5 -2`.
impl Display for PathCommand {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let letter = self.verb().letter();
        if self.is_relative() {
            write!(f, "{}", letter.to_ascii_lowercase())?;
        } else {
            write!(f, "{letter}")?;
        }
        match *self {
            PathCommand::ClosePath => Ok(()),
            PathCommand::MoveTo { x, y, .. }
            | PathCommand::LineTo { x, y, .. }
            | PathCommand::SmoothQuadTo { x, y, .. } => write!(f, "{x} {y}"),
            PathCommand::HorizontalLineTo { x, .. } => write!(f, "{x}"),
            PathCommand::VerticalLineTo { y, .. } => write!(f, "{y}"),
            PathCommand::CurveTo {
                x1,
                y1,
                x2,
                y2,
                x,
                y,
                ..
            } => write!(f, "{x1} {y1} {x2} {y2} {x} {y}"),
            PathCommand::SmoothCurveTo { x2, y2, x, y, .. } => write!(f, "{x2} {y2} {x} {y}"),
            PathCommand::QuadTo { x1, y1, x, y, .. } => write!(f, "{x1} {y1} {x} {y}"),
            PathCommand::ArcTo {
                rx,
                ry,
                x_axis_rotation,
                large_arc,
                sweep,
                x,
                y,
                ..
            } => write!(
                f,
                "{rx} {ry} {x_axis_rotation} {} {} {x} {y}",
                large_arc as u8, sweep as u8
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verb_codes() {
        assert_eq!(0x4d, Verb::MoveTo.code());
        assert_eq!(0x5a, Verb::ClosePath.code());
        assert_eq!('T', Verb::SmoothQuadTo.letter());
        assert_eq!(Verb::HorizontalLineTo, PathCommand::horizontal_line_to(1.0).verb());
    }

    #[test]
    fn relative_flag() {
        let cmd = PathCommand::line_to(1.0, 2.0);
        assert!(!cmd.is_relative());
        assert!(cmd.into_relative().is_relative());
        assert!(!PathCommand::ClosePath.into_relative().is_relative());
    }

    #[test]
    fn display() {
        assert_eq!("M10 10", PathCommand::move_to(10.0, 10.0).to_string());
        assert_eq!(
            "l5 -2.5",
            PathCommand::line_to(5.0, -2.5).into_relative().to_string()
        );
        assert_eq!("Z", PathCommand::ClosePath.to_string());
        assert_eq!(
            "A5 10 30 1 0 20 0",
            PathCommand::arc_to(5.0, 10.0, 30.0, true, false, 20.0, 0.0).to_string()
        );
    }
}
