//! Property tests for the aggregation invariants.

use dxf_takeoff::metrics::{count_entities, primitive_area, total_area, total_cut_length};
use dxf_takeoff::{
    measure, Arc, Circle, Line, LwPolyline, Polyline, Primitive, PrimitiveKind, Text, Unknown,
    Vector2,
};
use proptest::prelude::*;

fn vec2() -> impl Strategy<Value = Vector2> {
    (-1000.0..1000.0f64, -1000.0..1000.0f64).prop_map(|(x, y)| Vector2::new(x, y))
}

fn primitive() -> impl Strategy<Value = Primitive> {
    prop_oneof![
        (vec2(), vec2()).prop_map(|(a, b)| Primitive::Line(Line::new(a, b))),
        (vec2(), 0.0..500.0f64).prop_map(|(c, r)| Primitive::Circle(Circle::new(c, r))),
        (vec2(), 0.0..500.0f64, -360.0..720.0f64, -360.0..720.0f64)
            .prop_map(|(c, r, s, e)| Primitive::Arc(Arc::new(c, r, s, e))),
        prop::collection::vec(vec2(), 0..12)
            .prop_map(|pts| Primitive::LwPolyline(LwPolyline::from_points(pts))),
        prop::collection::vec(vec2(), 0..12)
            .prop_map(|pts| Primitive::Polyline(Polyline::from_points(pts))),
        vec2().prop_map(|p| Primitive::Text(Text::new("note", p))),
        Just(Primitive::Other(Unknown::new("SPLINE"))),
    ]
}

fn entity_sequence() -> impl Strategy<Value = Vec<Primitive>> {
    prop::collection::vec(primitive(), 0..24)
}

/// Tolerance scaled to the magnitudes being summed, so reordering
/// floating-point additions stays well inside it.
fn sum_tolerance(entities: &[Primitive]) -> f64 {
    let magnitude: f64 = entities.iter().map(|p| primitive_area(p).abs()).sum();
    1e-9 * (magnitude + 1.0)
}

proptest! {
    #[test]
    fn total_area_is_order_independent(mut entities in entity_sequence()) {
        let forward = total_area(&entities);
        entities.reverse();
        let backward = total_area(&entities);
        prop_assert!((forward - backward).abs() <= sum_tolerance(&entities));
    }

    #[test]
    fn census_counts_interleaved_lines_and_circles(pattern in prop::collection::vec(any::<bool>(), 0..64)) {
        let entities: Vec<Primitive> = pattern
            .iter()
            .map(|&is_line| {
                if is_line {
                    Primitive::Line(Line::from_coords(0.0, 0.0, 1.0, 1.0))
                } else {
                    Primitive::Circle(Circle::from_coords(0.0, 0.0, 1.0))
                }
            })
            .collect();

        let census = count_entities(&entities);
        let lines = pattern.iter().filter(|&&b| b).count();
        prop_assert_eq!(census.count(PrimitiveKind::Line), lines);
        prop_assert_eq!(census.count(PrimitiveKind::Circle), pattern.len() - lines);
        for kind in [
            PrimitiveKind::LwPolyline,
            PrimitiveKind::Polyline,
            PrimitiveKind::Arc,
            PrimitiveKind::Text,
            PrimitiveKind::MText,
        ] {
            prop_assert_eq!(census.count(kind), 0);
        }
    }

    #[test]
    fn measurement_is_idempotent(entities in entity_sequence()) {
        let first = measure(&entities);
        let second = measure(&entities);
        prop_assert_eq!(first.total_area.to_bits(), second.total_area.to_bits());
        prop_assert_eq!(first.width.to_bits(), second.width.to_bits());
        prop_assert_eq!(first.thickness.to_bits(), second.thickness.to_bits());
        prop_assert_eq!(first.cut_length.to_bits(), second.cut_length.to_bits());
        prop_assert_eq!(first.weight.to_bits(), second.weight.to_bits());
        prop_assert_eq!(first.census, second.census);
    }

    #[test]
    fn weight_is_exactly_the_scaled_product(entities in entity_sequence()) {
        let metrics = measure(&entities);
        let expected = (metrics.cut_length * 1000.0) * metrics.width * metrics.thickness;
        prop_assert_eq!(metrics.weight.to_bits(), expected.to_bits());
    }

    #[test]
    fn extents_are_never_negative_or_infinite(entities in entity_sequence()) {
        let metrics = measure(&entities);
        prop_assert!(metrics.width >= 0.0);
        prop_assert!(metrics.thickness >= 0.0);
        prop_assert!(metrics.width.is_finite());
        prop_assert!(metrics.thickness.is_finite());
    }

    #[test]
    fn cut_length_matches_manual_fold(entities in entity_sequence()) {
        let manual: f64 = entities
            .iter()
            .map(dxf_takeoff::metrics::primitive_cut_length)
            .sum();
        prop_assert_eq!(total_cut_length(&entities).to_bits(), manual.to_bits());
    }
}
