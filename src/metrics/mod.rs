//! Aggregate measurement over a primitive sequence.
//!
//! Each metric is one full traversal of the entity slice. The passes
//! are independent and read-only, so [`measure`] runs them in parallel;
//! every individual pass stays a sequential fold, which keeps repeated
//! measurement of the same slice bit-identical.

use crate::entities::Primitive;

pub mod area;
pub mod census;
pub mod extent;
pub mod length;
pub mod weight;

pub use area::{primitive_area, total_area};
pub use census::{count_entities, Census};
pub use extent::{drawing_extent, primitive_extent, thickness, width, Axis};
pub use length::{primitive_cut_length, total_cut_length};
pub use weight::{estimate_weight, METERS_TO_MILLIMETERS};

/// Aggregate metrics for one drawing. Computed once, immutable after.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawingMetrics {
    /// Total enclosed area in square drawing units
    pub total_area: f64,
    /// Per-type entity counts
    pub census: Census,
    /// Bounding width (X span) in drawing units
    pub width: f64,
    /// Bounding thickness (Y span) in drawing units
    pub thickness: f64,
    /// Total cut path length in drawing length units
    pub cut_length: f64,
    /// Derived weight estimate
    pub weight: f64,
}

/// Run every aggregation over the slice and derive the weight.
pub fn measure(entities: &[Primitive]) -> DrawingMetrics {
    let ((total_area, census), ((width, thickness), cut_length)) = rayon::join(
        || {
            rayon::join(
                || area::total_area(entities),
                || census::count_entities(entities),
            )
        },
        || {
            rayon::join(
                || {
                    rayon::join(
                        || extent::width(entities),
                        || extent::thickness(entities),
                    )
                },
                || length::total_cut_length(entities),
            )
        },
    );
    let weight = weight::estimate_weight(cut_length, width, thickness);

    DrawingMetrics {
        total_area,
        census,
        width,
        thickness,
        cut_length,
        weight,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{Circle, Line, PrimitiveKind};
    use std::f64::consts::PI;

    #[test]
    fn test_measure_empty_drawing() {
        let metrics = measure(&[]);
        assert_eq!(metrics.total_area, 0.0);
        assert_eq!(metrics.width, 0.0);
        assert_eq!(metrics.thickness, 0.0);
        assert_eq!(metrics.cut_length, 0.0);
        assert_eq!(metrics.weight, 0.0);
        assert_eq!(metrics.census.total(), 0);
        for kind in PrimitiveKind::ALL {
            assert_eq!(metrics.census.count(kind), 0);
        }
    }

    #[test]
    fn test_measure_single_circle() {
        let r = 4.0;
        let entities = vec![Primitive::Circle(Circle::from_coords(0.0, 0.0, r))];
        let metrics = measure(&entities);
        assert!((metrics.total_area - PI * r * r).abs() < 1e-12);
        assert!((metrics.cut_length - 2.0 * PI * r).abs() < 1e-12);
        assert_eq!(metrics.width, 2.0 * r);
        assert_eq!(metrics.thickness, 2.0 * r);
        assert_eq!(metrics.census.count(PrimitiveKind::Circle), 1);
    }

    #[test]
    fn test_measure_single_line() {
        let entities = vec![Primitive::Line(Line::from_coords(0.0, 0.0, 3.0, 4.0))];
        let metrics = measure(&entities);
        assert_eq!(metrics.total_area, 0.0);
        assert_eq!(metrics.cut_length, 5.0);
        assert_eq!(metrics.width, 3.0);
        assert_eq!(metrics.thickness, 4.0);
        assert_eq!(
            metrics.weight,
            (5.0 * 1000.0) * 3.0 * 4.0
        );
    }

    #[test]
    fn test_weight_derived_from_aggregates() {
        let entities = vec![
            Primitive::Line(Line::from_coords(0.0, 0.0, 10.0, 0.0)),
            Primitive::Line(Line::from_coords(0.0, 0.0, 0.0, 2.0)),
        ];
        let metrics = measure(&entities);
        assert_eq!(
            metrics.weight,
            estimate_weight(metrics.cut_length, metrics.width, metrics.thickness)
        );
    }

    #[test]
    fn test_measure_is_idempotent() {
        let entities = vec![
            Primitive::Circle(Circle::from_coords(1.5, -2.5, 3.25)),
            Primitive::Line(Line::from_coords(-7.0, 0.125, 9.5, 4.75)),
        ];
        let first = measure(&entities);
        let second = measure(&entities);
        assert_eq!(first.total_area.to_bits(), second.total_area.to_bits());
        assert_eq!(first.cut_length.to_bits(), second.cut_length.to_bits());
        assert_eq!(first.width.to_bits(), second.width.to_bits());
        assert_eq!(first.thickness.to_bits(), second.thickness.to_bits());
        assert_eq!(first.weight.to_bits(), second.weight.to_bits());
        assert_eq!(first.census, second.census);
    }
}
