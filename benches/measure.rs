//! Measurement throughput over a synthetic entity soup.

use criterion::{criterion_group, criterion_main, Criterion};
use dxf_takeoff::{measure, Arc, Circle, Line, LwPolyline, Polyline, Primitive, Text, Vector2};
use std::hint::black_box;

fn synthetic_drawing(count: usize) -> Vec<Primitive> {
    (0..count)
        .map(|i| {
            let f = i as f64;
            match i % 6 {
                0 => Primitive::Line(Line::from_coords(f, 0.0, f + 10.0, 10.0)),
                1 => Primitive::Circle(Circle::from_coords(f, f, 5.0)),
                2 => Primitive::Arc(Arc::from_coords(f, 0.0, 8.0, 0.0, 135.0)),
                3 => Primitive::LwPolyline(LwPolyline::from_points([
                    Vector2::new(f, 0.0),
                    Vector2::new(f + 4.0, 0.0),
                    Vector2::new(f + 4.0, 3.0),
                    Vector2::new(f, 3.0),
                ])),
                4 => Primitive::Polyline(Polyline::from_points([
                    Vector2::new(f, f),
                    Vector2::new(f + 2.0, f),
                    Vector2::new(f + 2.0, f + 2.0),
                ])),
                _ => Primitive::Text(Text::new("note", Vector2::new(f, f))),
            }
        })
        .collect()
}

fn bench_measure(c: &mut Criterion) {
    for count in [1_000, 10_000] {
        let entities = synthetic_drawing(count);
        c.bench_function(&format!("measure_{count}_entities"), |b| {
            b.iter(|| measure(black_box(&entities)))
        });
    }
}

criterion_group!(benches, bench_measure);
criterion_main!(benches);
