//! Encoding path commands.

use fctx_types::{PathCommand, Verb};
use kurbo::{BezPath, PathEl, Vec2};

use crate::{
    arc::EndpointArc,
    cursor::Cursor,
    error::EncodeError,
    write::{write_fields, Field, FieldWriter},
};

/// Encodes a sequence of commands into packed path data.
///
/// # Example
///
/// ```
/// use fctx_types::PathCommand;
/// use write_fctx::PathEncoder;
///
/// let mut encoder = PathEncoder::new(1.0);
/// encoder.encode(&PathCommand::move_to(10.0, 10.0)).unwrap();
/// encoder.encode(&PathCommand::line_to(20.0, 10.0)).unwrap();
/// encoder.encode(&PathCommand::ClosePath).unwrap();
/// let packed = encoder.finish().unwrap();
/// assert_eq!(14, packed.len());
/// ```
#[derive(Clone, Debug)]
pub struct PathEncoder {
    cursor: Cursor,
    writer: FieldWriter,
}

impl PathEncoder {
    /// Create an encoder for a new path.
    ///
    /// Every coordinate is multiplied by `em_scale` before it is packed.
    pub fn new(em_scale: f64) -> Self {
        PathEncoder {
            cursor: Cursor::new(em_scale),
            writer: FieldWriter::new(),
        }
    }

    /// The drawing position after the commands encoded so far.
    pub fn cursor(&self) -> &Cursor {
        &self.cursor
    }

    /// Encode one command.
    ///
    /// Arcs are expanded into cubic curves (or a line), each packed as its
    /// own command. If an error is returned the encoder should be discarded.
    pub fn encode(&mut self, command: &PathCommand) -> Result<(), EncodeError> {
        log::trace!("{command}");
        let relative = command.is_relative();
        match *command {
            PathCommand::MoveTo { x, y, .. } => {
                self.write(relative, &[Field::Code(Verb::MoveTo), Field::X(x), Field::Y(y)])?;
                let target = self.cursor.resolve(x, y, relative);
                self.cursor.move_to(target);
            }
            PathCommand::ClosePath => {
                self.write(relative, &[Field::Code(Verb::ClosePath)])?;
                self.cursor.close();
            }
            PathCommand::LineTo { x, y, .. } => {
                self.write(relative, &[Field::Code(Verb::LineTo), Field::X(x), Field::Y(y)])?;
                let target = self.cursor.resolve(x, y, relative);
                self.cursor.set_current(target);
            }
            PathCommand::HorizontalLineTo { x, .. } => {
                self.write(relative, &[Field::Code(Verb::HorizontalLineTo), Field::X(x)])?;
                let x = self.cursor.resolve_x(x, relative);
                self.cursor.set_x(x);
            }
            PathCommand::VerticalLineTo { y, .. } => {
                self.write(relative, &[Field::Code(Verb::VerticalLineTo), Field::Y(y)])?;
                let y = self.cursor.resolve_y(y, relative);
                self.cursor.set_y(y);
            }
            PathCommand::CurveTo {
                x1,
                y1,
                x2,
                y2,
                x,
                y,
                ..
            } => {
                self.write(
                    relative,
                    &[
                        Field::Code(Verb::CurveTo),
                        Field::X(x1),
                        Field::Y(y1),
                        Field::X(x2),
                        Field::Y(y2),
                        Field::X(x),
                        Field::Y(y),
                    ],
                )?;
                let target = self.cursor.resolve(x, y, relative);
                self.cursor.set_current(target);
            }
            // the renderer reflects the previous control point itself, so
            // only the explicit points are packed
            PathCommand::SmoothCurveTo { x2, y2, x, y, .. } => {
                self.write(
                    relative,
                    &[
                        Field::Code(Verb::SmoothCurveTo),
                        Field::X(x2),
                        Field::Y(y2),
                        Field::X(x),
                        Field::Y(y),
                    ],
                )?;
                let target = self.cursor.resolve(x, y, relative);
                self.cursor.set_current(target);
            }
            PathCommand::QuadTo { x1, y1, x, y, .. } => {
                self.write(
                    relative,
                    &[
                        Field::Code(Verb::QuadTo),
                        Field::X(x1),
                        Field::Y(y1),
                        Field::X(x),
                        Field::Y(y),
                    ],
                )?;
                let target = self.cursor.resolve(x, y, relative);
                self.cursor.set_current(target);
            }
            PathCommand::SmoothQuadTo { x, y, .. } => {
                self.write(
                    relative,
                    &[Field::Code(Verb::SmoothQuadTo), Field::X(x), Field::Y(y)],
                )?;
                let target = self.cursor.resolve(x, y, relative);
                self.cursor.set_current(target);
            }
            PathCommand::ArcTo {
                rx,
                ry,
                x_axis_rotation,
                large_arc,
                sweep,
                x,
                y,
                ..
            } => {
                let arc = EndpointArc {
                    from: self.cursor.current(),
                    to: self.cursor.resolve(x, y, relative),
                    radii: Vec2::new(rx, ry),
                    x_axis_rotation,
                    large_arc,
                    sweep,
                };
                let expanded = arc.to_commands();
                if expanded.is_empty() {
                    log::debug!("dropping zero length arc '{command}'");
                }
                // the expansion is absolute and contains no arcs
                for command in &expanded {
                    self.encode(command)?;
                }
            }
        }
        Ok(())
    }

    /// Encode every command in order.
    pub fn encode_all<'a>(
        &mut self,
        commands: impl IntoIterator<Item = &'a PathCommand>,
    ) -> Result<(), EncodeError> {
        commands
            .into_iter()
            .try_for_each(|command| self.encode(command))
    }

    /// Finish the path, returning the packed data.
    ///
    /// Fails if the data is too long for the 16-bit lengths used by the format.
    pub fn finish(self) -> Result<Vec<u8>, EncodeError> {
        let len = self.writer.len();
        if len > u16::MAX as usize {
            return Err(EncodeError::PathTooLong { len });
        }
        Ok(self.writer.into_data())
    }

    fn write(&mut self, relative: bool, fields: &[Field]) -> Result<(), EncodeError> {
        write_fields(&mut self.writer, &self.cursor, relative, fields)
    }
}

/// Encode commands with the given em-scale, starting from the origin.
pub fn encode_commands(commands: &[PathCommand], em_scale: f64) -> Result<Vec<u8>, EncodeError> {
    let mut encoder = PathEncoder::new(em_scale);
    encoder.encode_all(commands)?;
    encoder.finish()
}

/// Encode a free-standing path.
///
/// Coordinates are packed as they are, without any em-scale.
pub fn encode_path(commands: &[PathCommand]) -> Result<Vec<u8>, EncodeError> {
    encode_commands(commands, 1.0)
}

/// Convert a kurbo path into absolute commands.
pub fn commands_from_bezpath(path: &BezPath) -> Vec<PathCommand> {
    path.elements()
        .iter()
        .map(|el| match *el {
            PathEl::MoveTo(p) => PathCommand::move_to(p.x, p.y),
            PathEl::LineTo(p) => PathCommand::line_to(p.x, p.y),
            PathEl::QuadTo(c0, p) => PathCommand::quad_to(c0.x, c0.y, p.x, p.y),
            PathEl::CurveTo(c0, c1, p) => PathCommand::curve_to(c0.x, c0.y, c1.x, c1.y, p.x, p.y),
            PathEl::ClosePath => PathCommand::ClosePath,
        })
        .collect()
}
