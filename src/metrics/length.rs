//! Cut length measurement

use crate::entities::Primitive;

/// Cut-path contribution of one primitive, in drawing length units.
///
/// Only heavy polylines participate; lightweight polylines are not part
/// of the cutting pass even though the area and extent passes treat
/// both polyline types uniformly. Circles always contribute the full
/// circumference, and arcs use the signed sweep.
pub fn primitive_cut_length(primitive: &Primitive) -> f64 {
    match primitive {
        Primitive::Line(line) => line.length(),
        Primitive::Polyline(poly) => poly.length(),
        Primitive::Arc(arc) => arc.arc_length(),
        Primitive::Circle(circle) => circle.circumference(),
        Primitive::LwPolyline(_)
        | Primitive::Text(_)
        | Primitive::MText(_)
        | Primitive::Other(_) => 0.0,
    }
}

/// Sum of [`primitive_cut_length`] over every primitive.
pub fn total_cut_length(entities: &[Primitive]) -> f64 {
    entities.iter().map(primitive_cut_length).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{Arc, Circle, Line, LwPolyline, Polyline};
    use crate::types::Vector2;
    use std::f64::consts::PI;

    #[test]
    fn test_line_cut_length() {
        let p = Primitive::Line(Line::from_coords(0.0, 0.0, 3.0, 4.0));
        assert_eq!(primitive_cut_length(&p), 5.0);
    }

    #[test]
    fn test_circle_full_circumference() {
        let p = Primitive::Circle(Circle::from_coords(0.0, 0.0, 1.0));
        assert!((primitive_cut_length(&p) - 2.0 * PI).abs() < 1e-12);
    }

    #[test]
    fn test_quarter_arc_length() {
        let p = Primitive::Arc(Arc::from_coords(0.0, 0.0, 10.0, 0.0, 90.0));
        // 10 * pi/2 = 15.71
        assert!((primitive_cut_length(&p) - 15.707_963_267_948_966).abs() < 1e-9);
    }

    #[test]
    fn test_lwpolyline_excluded_polyline_included() {
        let points = [
            Vector2::new(0.0, 0.0),
            Vector2::new(4.0, 0.0),
            Vector2::new(4.0, 3.0),
        ];
        let heavy = Primitive::Polyline(Polyline::from_points(points));
        let light = Primitive::LwPolyline(LwPolyline::from_points(points));
        assert_eq!(primitive_cut_length(&heavy), 7.0);
        assert_eq!(primitive_cut_length(&light), 0.0);
    }

    #[test]
    fn test_total_cut_length() {
        let entities = vec![
            Primitive::Line(Line::from_coords(0.0, 0.0, 3.0, 4.0)),
            Primitive::Circle(Circle::from_coords(0.0, 0.0, 1.0)),
        ];
        assert!((total_cut_length(&entities) - (5.0 + 2.0 * PI)).abs() < 1e-12);
        assert_eq!(total_cut_length(&[]), 0.0);
    }
}
