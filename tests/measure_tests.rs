//! Integration tests for the measurement passes over realistic drawings.

mod common;

use common::builders;
use dxf_takeoff::{measure, Drawing, Primitive, PrimitiveKind};
use std::f64::consts::PI;

fn assert_close(actual: f64, expected: f64) {
    let tolerance = 1e-9 * expected.abs().max(1.0);
    assert!(
        (actual - expected).abs() < tolerance,
        "expected {expected}, got {actual}"
    );
}

#[test]
fn rectangular_plate_metrics() {
    let metrics = builders::rectangular_plate().measure();

    assert_close(metrics.total_area, 4000.0 + 50.0 * PI);
    assert_close(metrics.width, 100.0);
    assert_close(metrics.thickness, 40.0);
    // only the holes cut; the lightweight outline does not
    assert_close(metrics.cut_length, 20.0 * PI);
    assert_close(
        metrics.weight,
        (20.0 * PI * 1000.0) * 100.0 * 40.0,
    );

    assert_eq!(metrics.census.count(PrimitiveKind::LwPolyline), 1);
    assert_eq!(metrics.census.count(PrimitiveKind::Circle), 2);
    assert_eq!(metrics.census.count(PrimitiveKind::Text), 1);
    assert_eq!(metrics.census.total(), 4);
}

#[test]
fn bracket_profile_metrics() {
    let metrics = builders::bracket_profile().measure();

    assert_close(metrics.total_area, 25.0 * PI + 50.0);
    assert_close(metrics.width, 60.0);
    assert_close(metrics.thickness, 30.0);
    assert_close(metrics.cut_length, 185.0 + 5.0 * PI);

    assert_eq!(metrics.census.count(PrimitiveKind::Line), 4);
    assert_eq!(metrics.census.count(PrimitiveKind::Arc), 1);
    assert_eq!(metrics.census.count(PrimitiveKind::Polyline), 1);
}

#[test]
fn annotations_do_not_contribute_geometry() {
    let metrics = builders::annotations_only().measure();

    assert_eq!(metrics.total_area, 0.0);
    assert_eq!(metrics.width, 0.0);
    assert_eq!(metrics.thickness, 0.0);
    assert_eq!(metrics.cut_length, 0.0);
    assert_eq!(metrics.weight, 0.0);
    assert_eq!(metrics.census.count(PrimitiveKind::Text), 1);
    assert_eq!(metrics.census.count(PrimitiveKind::MText), 1);
}

#[test]
fn empty_drawing_yields_zero_sentinels() {
    let metrics = Drawing::new().measure();

    assert_eq!(metrics.total_area, 0.0);
    assert_eq!(metrics.width, 0.0);
    assert_eq!(metrics.thickness, 0.0);
    assert_eq!(metrics.cut_length, 0.0);
    assert_eq!(metrics.weight, 0.0);
    for kind in PrimitiveKind::ALL {
        assert_eq!(metrics.census.count(kind), 0);
    }
}

#[test]
fn entity_order_does_not_change_the_report() {
    let drawing = builders::bracket_profile();
    let forward = drawing.measure();

    let mut reversed_entities: Vec<Primitive> = drawing.entities().to_vec();
    reversed_entities.reverse();
    let reversed = measure(&reversed_entities);

    assert_close(reversed.total_area, forward.total_area);
    assert_close(reversed.cut_length, forward.cut_length);
    assert_eq!(reversed.width, forward.width);
    assert_eq!(reversed.thickness, forward.thickness);
    assert_eq!(reversed.census, forward.census);
}

#[test]
fn repeated_measurement_is_bit_identical() {
    let drawing = builders::rectangular_plate();
    let first = drawing.measure();
    let second = drawing.measure();

    assert_eq!(first.total_area.to_bits(), second.total_area.to_bits());
    assert_eq!(first.width.to_bits(), second.width.to_bits());
    assert_eq!(first.thickness.to_bits(), second.thickness.to_bits());
    assert_eq!(first.cut_length.to_bits(), second.cut_length.to_bits());
    assert_eq!(first.weight.to_bits(), second.weight.to_bits());
    assert_eq!(first.census, second.census);
}

#[test]
fn weight_follows_aggregates_exactly() {
    let metrics = builders::bracket_profile().measure();
    assert_eq!(
        metrics.weight,
        (metrics.cut_length * 1000.0) * metrics.width * metrics.thickness
    );
}
