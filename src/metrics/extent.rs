//! Bounding extent measurement (width and thickness)

use crate::entities::Primitive;
use crate::types::{Extent, Vector2};

/// Coordinate axis selector for the extent passes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// Horizontal axis; its span is the drawing width
    X,
    /// Vertical axis; its span is the drawing thickness
    Y,
}

impl Axis {
    /// The selected coordinate of a point.
    pub fn of(&self, point: Vector2) -> f64 {
        match self {
            Axis::X => point.x,
            Axis::Y => point.y,
        }
    }
}

/// Extent contribution of one primitive along `axis`.
///
/// Circles and arcs both contribute full `center +/- radius` bounds.
/// For arcs that stop short of the extremal angles this overestimates;
/// exact arc bounds would need the quadrant crossings.
pub fn primitive_extent(primitive: &Primitive, axis: Axis) -> Extent {
    match primitive {
        Primitive::Line(line) => {
            let mut extent = Extent::from_value(axis.of(line.start));
            extent.include(axis.of(line.end));
            extent
        }
        Primitive::LwPolyline(poly) => {
            let mut extent = Extent::EMPTY;
            for vertex in &poly.vertices {
                extent.include(axis.of(vertex.location));
            }
            extent
        }
        Primitive::Polyline(poly) => {
            let mut extent = Extent::EMPTY;
            for point in &poly.vertices {
                extent.include(axis.of(*point));
            }
            extent
        }
        Primitive::Circle(circle) => Extent::from_center_radius(axis.of(circle.center), circle.radius),
        Primitive::Arc(arc) => Extent::from_center_radius(axis.of(arc.center), arc.radius),
        Primitive::Text(_) | Primitive::MText(_) | Primitive::Other(_) => Extent::EMPTY,
    }
}

/// Fold the per-primitive extents over the whole drawing.
pub fn drawing_extent(entities: &[Primitive], axis: Axis) -> Extent {
    entities.iter().fold(Extent::EMPTY, |acc, primitive| {
        acc.merge(&primitive_extent(primitive, axis))
    })
}

/// Drawing width: the X-axis span, 0.0 when nothing contributes.
pub fn width(entities: &[Primitive]) -> f64 {
    drawing_extent(entities, Axis::X).span()
}

/// Drawing thickness: the Y-axis span, 0.0 when nothing contributes.
pub fn thickness(entities: &[Primitive]) -> f64 {
    drawing_extent(entities, Axis::Y).span()
}
