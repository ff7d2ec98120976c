//! The drawing state of a single encoding pass.

use fctx_types::Fixed12Dot4;
use kurbo::Point;

use crate::error::EncodeError;

/// The pen position while a path is encoded.
///
/// A cursor belongs to exactly one path (or glyph); it starts at the origin
/// and is updated after every packed command.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Cursor {
    current: Point,
    start: Point,
    em_scale: f64,
}

impl Cursor {
    pub fn new(em_scale: f64) -> Self {
        Cursor {
            current: Point::ORIGIN,
            start: Point::ORIGIN,
            em_scale,
        }
    }

    /// The current point, in source units.
    pub fn current(&self) -> Point {
        self.current
    }

    /// The start of the current subpath, in source units.
    pub fn start(&self) -> Point {
        self.start
    }

    pub fn em_scale(&self) -> f64 {
        self.em_scale
    }

    pub(crate) fn resolve_x(&self, x: f64, relative: bool) -> f64 {
        if relative {
            x + self.current.x
        } else {
            x
        }
    }

    pub(crate) fn resolve_y(&self, y: f64, relative: bool) -> f64 {
        if relative {
            y + self.current.y
        } else {
            y
        }
    }

    pub(crate) fn resolve(&self, x: f64, y: f64, relative: bool) -> Point {
        Point::new(self.resolve_x(x, relative), self.resolve_y(y, relative))
    }

    /// Scale an absolute coordinate and convert it to fixed point.
    pub(crate) fn scale_to_fixed(&self, value: f64) -> Result<Fixed12Dot4, EncodeError> {
        let value = value * self.em_scale;
        Fixed12Dot4::checked_from_f64(value).ok_or(EncodeError::CoordinateOutOfRange { value })
    }

    /// Begin a new subpath at `point`.
    pub(crate) fn move_to(&mut self, point: Point) {
        self.current = point;
        self.start = point;
    }

    pub(crate) fn set_current(&mut self, point: Point) {
        self.current = point;
    }

    pub(crate) fn set_x(&mut self, x: f64) {
        self.current.x = x;
    }

    pub(crate) fn set_y(&mut self, y: f64) {
        self.current.y = y;
    }

    /// Return to the start of the current subpath.
    pub(crate) fn close(&mut self) {
        self.current = self.start;
    }
}
