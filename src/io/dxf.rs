//! DXF loading via the `dxf` crate.
//!
//! Parsing is fully delegated; this module only validates the file
//! extension, maps parsed entities onto [`Primitive`]s, and rejects
//! entities whose numeric attributes are unusable. Entity types outside
//! the recognized set become [`Primitive::Other`] and are reported
//! through the drawing's notification collection.

use crate::entities::{Arc, Circle, Line, LwPolyline, LwVertex, MText, Polyline, Primitive, Text, Unknown};
use crate::notification::{NotificationCollection, NotificationType};
use crate::types::Vector2;
use crate::{Drawing, Result, TakeoffError};
use std::path::Path;

/// True when `path` ends in `.dxf`, case-insensitive.
pub fn has_dxf_extension(path: &str) -> bool {
    Path::new(path)
        .extension()
        .map(|ext| ext.eq_ignore_ascii_case("dxf"))
        .unwrap_or(false)
}

/// Load a DXF file from disk and convert it for measurement.
pub fn load_file(path: &str) -> Result<Drawing> {
    if !has_dxf_extension(path) {
        return Err(TakeoffError::InvalidExtension(path.to_string()));
    }
    let parsed = dxf::Drawing::load_file(path)?;
    from_dxf(&parsed)
}

/// Convert an already-parsed `dxf::Drawing` into a measurable [`Drawing`].
pub fn from_dxf(parsed: &dxf::Drawing) -> Result<Drawing> {
    let mut entities = Vec::new();
    let mut notifications = NotificationCollection::new();
    for entity in parsed.entities() {
        let primitive = convert_entity(entity, &mut notifications)?;
        validate(&primitive)?;
        entities.push(primitive);
    }
    Ok(Drawing::with_notifications(entities, notifications))
}

fn point_xy(point: &dxf::Point) -> Vector2 {
    // only the drawing plane matters; Z is dropped
    Vector2::new(point.x, point.y)
}

fn convert_entity(
    entity: &dxf::entities::Entity,
    notifications: &mut NotificationCollection,
) -> Result<Primitive> {
    use dxf::entities::EntityType;

    let primitive = match &entity.specific {
        EntityType::Line(line) => {
            Primitive::Line(Line::new(point_xy(&line.p1), point_xy(&line.p2)))
        }
        EntityType::LwPolyline(poly) => {
            let mut out = LwPolyline::new();
            // bit 1 of the flags word marks a closed polyline
            out.is_closed = poly.flags & 1 != 0;
            for vertex in &poly.vertices {
                out.vertices.push(LwVertex {
                    location: Vector2::new(vertex.x, vertex.y),
                    bulge: vertex.bulge,
                    start_width: vertex.starting_width,
                    end_width: vertex.ending_width,
                });
            }
            Primitive::LwPolyline(out)
        }
        EntityType::Polyline(poly) => {
            let mut out = Polyline::new();
            out.is_closed = poly.flags & 1 != 0;
            for vertex in poly.vertices() {
                out.add_point(point_xy(&vertex.location));
            }
            Primitive::Polyline(out)
        }
        EntityType::Circle(circle) => {
            Primitive::Circle(Circle::new(point_xy(&circle.center), circle.radius))
        }
        EntityType::Arc(arc) => Primitive::Arc(Arc::new(
            point_xy(&arc.center),
            arc.radius,
            arc.start_angle,
            arc.end_angle,
        )),
        EntityType::Text(text) => {
            Primitive::Text(Text::new(text.value.clone(), point_xy(&text.location)))
        }
        EntityType::MText(mtext) => Primitive::MText(MText::new(
            mtext.text.clone(),
            point_xy(&mtext.insertion_point),
        )),
        other => {
            let name = unsupported_name(other);
            notifications.notify(
                NotificationType::NotSupported,
                format!("skipping unsupported entity {name}"),
            );
            Primitive::Other(Unknown::new(name))
        }
    };
    Ok(primitive)
}

/// Best-effort DXF name for entity types the takeoff does not measure.
fn unsupported_name(entity_type: &dxf::entities::EntityType) -> &'static str {
    use dxf::entities::EntityType;
    match entity_type {
        EntityType::ModelPoint(_) => "POINT",
        EntityType::Ellipse(_) => "ELLIPSE",
        EntityType::Spline(_) => "SPLINE",
        EntityType::Insert(_) => "INSERT",
        EntityType::Solid(_) => "SOLID",
        _ => "UNKNOWN",
    }
}

/// Reject primitives whose attributes cannot be measured: non-finite
/// coordinates or angles, negative radii. Fatal per the error policy;
/// no partial results are produced from a drawing that fails here.
fn validate(primitive: &Primitive) -> Result<()> {
    match primitive {
        Primitive::Line(line) => {
            if !line.start.is_finite() || !line.end.is_finite() {
                return Err(malformed("LINE", "non-finite endpoint"));
            }
        }
        Primitive::LwPolyline(poly) => {
            if poly.vertices.iter().any(|v| !v.location.is_finite()) {
                return Err(malformed("LWPOLYLINE", "non-finite vertex"));
            }
        }
        Primitive::Polyline(poly) => {
            if poly.vertices.iter().any(|v| !v.is_finite()) {
                return Err(malformed("POLYLINE", "non-finite vertex"));
            }
        }
        Primitive::Circle(circle) => {
            if !circle.center.is_finite() || !circle.radius.is_finite() {
                return Err(malformed("CIRCLE", "non-finite geometry"));
            }
            if circle.radius < 0.0 {
                return Err(malformed(
                    "CIRCLE",
                    format!("negative radius {}", circle.radius),
                ));
            }
        }
        Primitive::Arc(arc) => {
            if !arc.center.is_finite()
                || !arc.radius.is_finite()
                || !arc.start_angle.is_finite()
                || !arc.end_angle.is_finite()
            {
                return Err(malformed("ARC", "non-finite geometry"));
            }
            if arc.radius < 0.0 {
                return Err(malformed("ARC", format!("negative radius {}", arc.radius)));
            }
        }
        Primitive::Text(_) | Primitive::MText(_) | Primitive::Other(_) => {}
    }
    Ok(())
}

fn malformed(entity_type: &'static str, reason: impl Into<String>) -> TakeoffError {
    TakeoffError::MalformedEntity {
        entity_type,
        reason: reason.into(),
    }
}
