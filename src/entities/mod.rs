//! Geometric primitives consumed by the measurement passes.
//!
//! Every drawing element the takeoff understands is one variant of the
//! closed [`Primitive`] enum. Each variant carries only the attributes
//! measurement needs; anything the loader cannot map becomes
//! [`Primitive::Other`] and contributes to no aggregate.

use crate::types::Vector2;
use std::fmt;

pub mod arc;
pub mod circle;
pub mod line;
pub mod lwpolyline;
pub mod mtext;
pub mod polyline;
pub mod text;
pub mod unknown;

pub use arc::Arc;
pub use circle::Circle;
pub use line::Line;
pub use lwpolyline::{LwPolyline, LwVertex};
pub use mtext::MText;
pub use polyline::Polyline;
pub use text::Text;
pub use unknown::Unknown;

/// The fixed set of recognized entity type tags.
///
/// These are the census keys; the names match the DXF entity names the
/// types were loaded from. Types outside this set are never counted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveKind {
    /// LINE
    Line,
    /// LWPOLYLINE
    LwPolyline,
    /// POLYLINE (heavy 2D polyline)
    Polyline,
    /// CIRCLE
    Circle,
    /// ARC
    Arc,
    /// TEXT
    Text,
    /// MTEXT
    MText,
}

impl PrimitiveKind {
    /// All recognized kinds, in census reporting order.
    pub const ALL: [PrimitiveKind; 7] = [
        PrimitiveKind::Line,
        PrimitiveKind::LwPolyline,
        PrimitiveKind::Polyline,
        PrimitiveKind::Circle,
        PrimitiveKind::Arc,
        PrimitiveKind::Text,
        PrimitiveKind::MText,
    ];

    /// DXF entity name for this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            PrimitiveKind::Line => "LINE",
            PrimitiveKind::LwPolyline => "LWPOLYLINE",
            PrimitiveKind::Polyline => "POLYLINE",
            PrimitiveKind::Circle => "CIRCLE",
            PrimitiveKind::Arc => "ARC",
            PrimitiveKind::Text => "TEXT",
            PrimitiveKind::MText => "MTEXT",
        }
    }
}

impl fmt::Display for PrimitiveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One geometric drawing element.
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    /// Straight segment between two points
    Line(Line),
    /// Lightweight 2D polyline
    LwPolyline(LwPolyline),
    /// Heavy 2D polyline
    Polyline(Polyline),
    /// Full circle
    Circle(Circle),
    /// Circular arc
    Arc(Arc),
    /// Single-line text annotation
    Text(Text),
    /// Multi-line text annotation
    MText(MText),
    /// Entity type outside the recognized set
    Other(Unknown),
}

impl Primitive {
    /// The recognized type tag, or `None` for [`Primitive::Other`].
    pub fn kind(&self) -> Option<PrimitiveKind> {
        match self {
            Primitive::Line(_) => Some(PrimitiveKind::Line),
            Primitive::LwPolyline(_) => Some(PrimitiveKind::LwPolyline),
            Primitive::Polyline(_) => Some(PrimitiveKind::Polyline),
            Primitive::Circle(_) => Some(PrimitiveKind::Circle),
            Primitive::Arc(_) => Some(PrimitiveKind::Arc),
            Primitive::Text(_) => Some(PrimitiveKind::Text),
            Primitive::MText(_) => Some(PrimitiveKind::MText),
            Primitive::Other(_) => None,
        }
    }

    /// Entity name for display, including unrecognized types.
    pub fn type_name(&self) -> &str {
        match self {
            Primitive::Other(u) => u.type_name(),
            _ => self.kind().map(|k| k.as_str()).unwrap_or("UNKNOWN"),
        }
    }
}

/// Enclosed area of the implicitly-closed polygon through `points`,
/// by the shoelace formula. Absolute value: vertex winding does not
/// affect the result. Self-intersecting input yields whatever the
/// shoelace sum yields.
pub(crate) fn polygon_area(points: &[Vector2]) -> f64 {
    if points.len() < 3 {
        return 0.0;
    }
    let mut twice_area = 0.0;
    for i in 0..points.len() {
        let a = points[i];
        let b = points[(i + 1) % points.len()];
        twice_area += a.cross(&b);
    }
    (twice_area / 2.0).abs()
}

/// Total length of the open path through `points` (no closing segment).
pub(crate) fn path_length(points: &[Vector2]) -> f64 {
    points.windows(2).map(|w| w[0].distance(&w[1])).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_round_trip() {
        for kind in PrimitiveKind::ALL {
            assert!(!kind.as_str().is_empty());
        }
        let p = Primitive::Circle(Circle::from_coords(0.0, 0.0, 1.0));
        assert_eq!(p.kind(), Some(PrimitiveKind::Circle));
        assert_eq!(p.type_name(), "CIRCLE");
    }

    #[test]
    fn test_other_has_no_kind() {
        let p = Primitive::Other(Unknown::new("SPLINE"));
        assert_eq!(p.kind(), None);
        assert_eq!(p.type_name(), "SPLINE");
    }

    #[test]
    fn test_polygon_area_unit_square() {
        let square = [
            Vector2::new(0.0, 0.0),
            Vector2::new(1.0, 0.0),
            Vector2::new(1.0, 1.0),
            Vector2::new(0.0, 1.0),
        ];
        assert!((polygon_area(&square) - 1.0).abs() < 1e-12);

        // reversed winding gives the same area
        let mut reversed = square;
        reversed.reverse();
        assert!((polygon_area(&reversed) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_polygon_area_degenerate() {
        assert_eq!(polygon_area(&[]), 0.0);
        assert_eq!(polygon_area(&[Vector2::new(1.0, 1.0)]), 0.0);
        assert_eq!(
            polygon_area(&[Vector2::new(0.0, 0.0), Vector2::new(5.0, 5.0)]),
            0.0
        );
    }

    #[test]
    fn test_path_length() {
        let points = [
            Vector2::new(0.0, 0.0),
            Vector2::new(3.0, 4.0),
            Vector2::new(3.0, 10.0),
        ];
        assert!((path_length(&points) - 11.0).abs() < 1e-12);
        assert_eq!(path_length(&points[..1]), 0.0);
        assert_eq!(path_length(&[]), 0.0);
    }
}
