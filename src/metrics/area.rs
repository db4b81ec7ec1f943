//! Area measurement

use crate::entities::Primitive;

/// Planar area contribution of one primitive, in square drawing units.
///
/// Lines and text annotations enclose nothing and contribute 0.0, as
/// does anything outside the recognized set. Arc sectors use the signed
/// sweep, so an arc stated with `end < start` subtracts from the total.
pub fn primitive_area(primitive: &Primitive) -> f64 {
    match primitive {
        Primitive::LwPolyline(poly) => poly.area(),
        Primitive::Polyline(poly) => poly.area(),
        Primitive::Circle(circle) => circle.area(),
        Primitive::Arc(arc) => arc.sector_area(),
        Primitive::Line(_) | Primitive::Text(_) | Primitive::MText(_) | Primitive::Other(_) => 0.0,
    }
}

/// Sum of [`primitive_area`] over every primitive, in entity order.
/// Addition commutes, so the result does not depend on the order.
pub fn total_area(entities: &[Primitive]) -> f64 {
    entities.iter().map(primitive_area).sum()
}
