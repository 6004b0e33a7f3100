use kurbo::{BezPath, CircleSegment, Point, Shape, Vec2};

/// Dial angles are measured from 12 o'clock, sweeping clockwise in raster
/// (y-down) space. kurbo's circle shapes measure from the +x axis, so the
/// top is a quarter turn back.
const TOP: f64 = -std::f64::consts::FRAC_PI_2;

const ARC_TOLERANCE: f64 = 0.1;

/// Filled pie wedge from the top of the dial, sweeping clockwise.
pub(crate) fn pie_wedge(center: Point, radius: f64, sweep_deg: f64) -> BezPath {
    let seg = CircleSegment {
        center,
        outer_radius: radius,
        inner_radius: 0.0,
        start_angle: TOP,
        sweep_angle: sweep_deg.to_radians(),
    };
    seg.to_path(ARC_TOLERANCE)
}

/// Open arc from the top of the dial, for stroking.
pub(crate) fn dial_arc(center: Point, radius: f64, sweep_deg: f64) -> BezPath {
    let arc = kurbo::Arc {
        center,
        radii: Vec2::new(radius, radius),
        start_angle: TOP,
        sweep_angle: sweep_deg.to_radians(),
        x_rotation: 0.0,
    };
    let mut path = BezPath::new();
    for el in arc.path_elements(ARC_TOLERANCE) {
        path.push(el);
    }
    path
}

/// Point on the dial at `deg` clockwise from the top, `r` out from `center`.
pub(crate) fn dial_point(center: Point, r: f64, deg: f64) -> Point {
    let a = TOP + deg.to_radians();
    Point::new(center.x + r * a.cos(), center.y + r * a.sin())
}

/// Thick line segment as a filled quad. Degenerate segments become empty
/// paths rather than NaN geometry.
pub(crate) fn thick_line(a: Point, b: Point, width: f64) -> BezPath {
    let d = b - a;
    let len = d.hypot();
    let mut path = BezPath::new();
    if len == 0.0 || width <= 0.0 {
        return path;
    }
    let n = Vec2::new(-d.y, d.x) * (width / 2.0 / len);
    path.move_to(a + n);
    path.line_to(b + n);
    path.line_to(b - n);
    path.line_to(a - n);
    path.close_path();
    path
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_wedge_covers_the_disc_bbox() {
        let p = pie_wedge(Point::new(50.0, 50.0), 40.0, 360.0);
        let bb = p.bounding_box();
        assert!(bb.x0 <= 10.5 && bb.x1 >= 89.5);
        assert!(bb.y0 <= 10.5 && bb.y1 >= 89.5);
    }

    #[test]
    fn quarter_wedge_stays_in_the_top_right() {
        let c = Point::new(50.0, 50.0);
        let p = pie_wedge(c, 40.0, 90.0);
        let bb = p.bounding_box();
        assert!(bb.x0 >= c.x - 1.0);
        assert!(bb.y1 <= c.y + 1.0);
    }

    #[test]
    fn dial_points_at_cardinal_angles() {
        let c = Point::new(0.0, 0.0);
        let top = dial_point(c, 10.0, 0.0);
        assert!((top.x - 0.0).abs() < 1e-9 && (top.y + 10.0).abs() < 1e-9);
        let right = dial_point(c, 10.0, 90.0);
        assert!((right.x - 10.0).abs() < 1e-9 && right.y.abs() < 1e-9);
        let bottom = dial_point(c, 10.0, 180.0);
        assert!(bottom.x.abs() < 1e-9 && (bottom.y - 10.0).abs() < 1e-9);
    }

    #[test]
    fn thick_line_quad_spans_endpoints() {
        let p = thick_line(Point::new(0.0, 0.0), Point::new(10.0, 0.0), 2.0);
        let bb = p.bounding_box();
        assert_eq!(bb.x0, 0.0);
        assert_eq!(bb.x1, 10.0);
        assert_eq!(bb.y0, -1.0);
        assert_eq!(bb.y1, 1.0);
    }

    #[test]
    fn degenerate_thick_line_is_empty() {
        let p = thick_line(Point::new(5.0, 5.0), Point::new(5.0, 5.0), 2.0);
        assert!(p.elements().is_empty());
    }
}
