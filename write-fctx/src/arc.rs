//! Approximating elliptical arcs with cubic bezier curves.
//!
//! The renderer only draws lines and curves. Arcs are converted from the
//! endpoint parameterization used in path data to a center parameterization,
//! approximated on the unit circle, and mapped back onto the ellipse.
//!
//! See <https://www.w3.org/TR/SVG11/implnote.html#ArcImplementationNotes>

use std::f64::consts::{FRAC_PI_2, TAU};

use fctx_types::PathCommand;
use kurbo::{Affine, Point, Vec2};

// keeps an exact quarter or half circle from picking up an extra sliver
// segment due to rounding in the angle computation
const SEGMENT_TOLERANCE: f64 = 1e-9;

/// An elliptical arc, in endpoint parameterization.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EndpointArc {
    pub from: Point,
    pub to: Point,
    pub radii: Vec2,
    /// The rotation of the ellipse's x-axis, in degrees.
    pub x_axis_rotation: f64,
    pub large_arc: bool,
    pub sweep: bool,
}

impl EndpointArc {
    /// Convert this arc into absolute commands.
    ///
    /// The result is empty if the endpoints are identical, a single line if
    /// either radius is zero, and otherwise one cubic curve for every (at
    /// most) quarter turn of the arc. The final curve ends exactly at `to`.
    pub fn to_commands(&self) -> Vec<PathCommand> {
        if self.from == self.to {
            return Vec::new();
        }
        if self.radii.x == 0.0 || self.radii.y == 0.0 {
            return vec![PathCommand::line_to(self.to.x, self.to.y)];
        }

        let mut rx = self.radii.x.abs();
        let mut ry = self.radii.y.abs();
        let phi = (self.x_axis_rotation % 360.0).to_radians();
        let (sin_phi, cos_phi) = phi.sin_cos();

        // F.6.5.1: the half chord, in the ellipse's frame
        let half_chord = (self.from - self.to) / 2.0;
        let x1 = cos_phi * half_chord.x + sin_phi * half_chord.y;
        let y1 = -sin_phi * half_chord.x + cos_phi * half_chord.y;

        // F.6.6: radii too small to reach are scaled up until they just do
        let radii_check = (x1 * x1) / (rx * rx) + (y1 * y1) / (ry * ry);
        if radii_check > 1.0 {
            let scale = radii_check.sqrt();
            rx *= scale;
            ry *= scale;
        }

        // F.6.5.2: the center, in the ellipse's frame
        let rx_sq = rx * rx;
        let ry_sq = ry * ry;
        let x1_sq = x1 * x1;
        let y1_sq = y1 * y1;
        let sign = if self.large_arc == self.sweep { -1.0 } else { 1.0 };
        let sq = ((rx_sq * ry_sq - rx_sq * y1_sq - ry_sq * x1_sq)
            / (rx_sq * y1_sq + ry_sq * x1_sq))
            .max(0.0);
        let coef = sign * sq.sqrt();
        let cx1 = coef * (rx * y1 / ry);
        let cy1 = coef * -(ry * x1 / rx);

        // F.6.5.3: the center, in the user frame
        let mid = self.from.midpoint(self.to);
        let center = Point::new(
            mid.x + (cos_phi * cx1 - sin_phi * cy1),
            mid.y + (sin_phi * cx1 + cos_phi * cy1),
        );

        // F.6.5.5 and F.6.5.6: start angle and extent on the unit circle
        let u = Vec2::new((x1 - cx1) / rx, (y1 - cy1) / ry);
        let v = Vec2::new((-x1 - cx1) / rx, (-y1 - cy1) / ry);
        let start_angle = u.atan2();
        let mut extent = u.cross(v).atan2(u.dot(v));
        if !self.sweep && extent > 0.0 {
            extent -= TAU;
        } else if self.sweep && extent < 0.0 {
            extent += TAU;
        }

        // scale by the radii, rotate by the ellipse angle, move to the center
        let transform = Affine::translate(center.to_vec2())
            * Affine::rotate(phi)
            * Affine::scale_non_uniform(rx, ry);
        let mut commands = unit_arc_segments(start_angle, extent)
            .map(|[c0, c1, end]| {
                let (c0, c1, end) = (transform * c0, transform * c1, transform * end);
                PathCommand::curve_to(c0.x, c0.y, c1.x, c1.y, end.x, end.y)
            })
            .collect::<Vec<_>>();

        if let Some(PathCommand::CurveTo { x, y, .. }) = commands.last_mut() {
            *x = self.to.x;
            *y = self.to.y;
        }
        commands
    }
}

/// The number of curves needed so that none spans more than a quarter turn.
fn segment_count(extent: f64) -> usize {
    ((extent.abs() / FRAC_PI_2) - SEGMENT_TOLERANCE).ceil().max(1.0) as usize
}

/// Cubic approximations of an arc of the unit circle centered on the origin.
///
/// Yields `[control0, control1, end]` for each segment; the start of each
/// segment is the end of the previous one.
fn unit_arc_segments(start_angle: f64, extent: f64) -> impl Iterator<Item = [Point; 3]> {
    let count = segment_count(extent);
    let increment = extent / count as f64;
    let (sin_half, cos_half) = (increment / 2.0).sin_cos();
    // 4/3 * tan(increment / 4)
    let control_len = 4.0 / 3.0 * sin_half / (1.0 + cos_half);

    (0..count).map(move |i| {
        let angle = start_angle + i as f64 * increment;
        let (dy0, dx0) = angle.sin_cos();
        let (dy1, dx1) = (angle + increment).sin_cos();
        [
            Point::new(dx0 - control_len * dy0, dy0 + control_len * dx0),
            Point::new(dx1 + control_len * dy1, dy1 - control_len * dx1),
            Point::new(dx1, dy1),
        ]
    })
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    const EPSILON: f64 = 1e-9;

    fn arc(
        from: (f64, f64),
        to: (f64, f64),
        radii: (f64, f64),
        large_arc: bool,
        sweep: bool,
    ) -> EndpointArc {
        EndpointArc {
            from: from.into(),
            to: to.into(),
            radii: radii.into(),
            x_axis_rotation: 0.0,
            large_arc,
            sweep,
        }
    }

    fn end_points(commands: &[PathCommand]) -> Vec<Point> {
        commands
            .iter()
            .map(|cmd| match *cmd {
                PathCommand::CurveTo { x, y, .. } => Point::new(x, y),
                other => panic!("expected a curve, found {other}"),
            })
            .collect()
    }

    #[test]
    fn identical_endpoints_are_dropped() {
        let arc = arc((5.0, 5.0), (5.0, 5.0), (10.0, 10.0), false, true);
        assert!(arc.to_commands().is_empty());
    }

    #[rstest]
    #[case((0.0, 10.0))]
    #[case((10.0, 0.0))]
    #[case((0.0, 0.0))]
    fn zero_radius_is_a_line(#[case] radii: (f64, f64)) {
        let arc = arc((0.0, 0.0), (30.0, 40.0), radii, true, true);
        assert_eq!(vec![PathCommand::line_to(30.0, 40.0)], arc.to_commands());
    }

    #[rstest]
    // quarter circle
    #[case((10.0, 0.0), (0.0, 10.0), false, true, 1)]
    // half circle, either direction
    #[case((10.0, 0.0), (-10.0, 0.0), false, true, 2)]
    #[case((10.0, 0.0), (-10.0, 0.0), false, false, 2)]
    // three quarters
    #[case((10.0, 0.0), (0.0, 10.0), true, false, 3)]
    fn circle_segment_counts(
        #[case] from: (f64, f64),
        #[case] to: (f64, f64),
        #[case] large: bool,
        #[case] sweep: bool,
        #[case] expected: usize,
    ) {
        let commands = arc(from, to, (10.0, 10.0), large, sweep).to_commands();
        assert_eq!(expected, commands.len());
        // every segment ends on the circle around the origin
        for point in end_points(&commands) {
            assert!((point.to_vec2().hypot() - 10.0).abs() < EPSILON, "{point:?}");
        }
        assert_eq!(Point::from(to), *end_points(&commands).last().unwrap());
    }

    #[test]
    fn quarter_circle_control_points() {
        let commands = arc((1.0, 0.0), (0.0, 1.0), (1.0, 1.0), false, true).to_commands();
        let [PathCommand::CurveTo {
            x1,
            y1,
            x2,
            y2,
            x,
            y,
            relative: false,
        }] = commands[..]
        else {
            panic!("expected a single curve, found {commands:?}");
        };
        let k = 4.0 / 3.0 * (2f64.sqrt() - 1.0);
        assert!((x1 - 1.0).abs() < EPSILON && (y1 - k).abs() < EPSILON);
        assert!((x2 - k).abs() < EPSILON && (y2 - 1.0).abs() < EPSILON);
        assert_eq!((0.0, 1.0), (x, y));
    }

    #[test]
    fn small_radii_are_scaled_up() {
        // a radius of 1 cannot span a chord of 20; the result is a half
        // circle of radius 10 around (10, 0)
        let commands = arc((0.0, 0.0), (20.0, 0.0), (1.0, 1.0), false, true).to_commands();
        assert_eq!(2, commands.len());
        let mid = end_points(&commands)[0];
        assert!(((mid - Point::new(10.0, 0.0)).hypot() - 10.0).abs() < EPSILON);
        assert!((mid.x - 10.0).abs() < EPSILON);
    }

    #[test]
    fn sweep_flag_picks_the_side() {
        let positive = arc((0.0, 0.0), (20.0, 0.0), (10.0, 10.0), false, true).to_commands();
        let negative = arc((0.0, 0.0), (20.0, 0.0), (10.0, 10.0), false, false).to_commands();
        let positive_mid = end_points(&positive)[0];
        let negative_mid = end_points(&negative)[0];
        // positive angles run from +x towards +y
        assert!((positive_mid.y + 10.0).abs() < EPSILON, "{positive_mid:?}");
        assert!((negative_mid.y - 10.0).abs() < EPSILON, "{negative_mid:?}");
    }

    #[test]
    fn rotated_ellipse_ends_exactly() {
        let arc = EndpointArc {
            from: Point::new(3.3, 7.1),
            to: Point::new(41.7, -12.9),
            radii: Vec2::new(-25.0, 12.5),
            x_axis_rotation: 390.0,
            large_arc: true,
            sweep: true,
        };
        let commands = arc.to_commands();
        assert!((2..=4).contains(&commands.len()), "{commands:?}");
        assert_eq!(arc.to, *end_points(&commands).last().unwrap());
    }

    #[test]
    fn negative_radii_use_absolute_values() {
        let positive = arc((0.0, 0.0), (20.0, 0.0), (10.0, 5.0), false, true).to_commands();
        let negative = arc((0.0, 0.0), (20.0, 0.0), (-10.0, -5.0), false, true).to_commands();
        assert_eq!(positive, negative);
    }
}
