//! Test drawing builders shared by the integration tests.

#![allow(dead_code)]

use dxf_takeoff::{
    Arc, Circle, Drawing, Line, LwPolyline, MText, Polyline, Primitive, Text, Vector2,
};

/// A 100 x 40 rectangular plate outline with two 10mm holes and a label.
///
/// Hand-computed expectations:
/// - area: 4000 (outline) + 2 * 25pi (holes)
/// - width: 100, thickness: 40
/// - cut length: 2 * 10pi (hole circumferences; the outline is a
///   lightweight polyline and does not cut)
pub fn rectangular_plate() -> Drawing {
    let mut drawing = Drawing::new();

    let mut outline = LwPolyline::from_points([
        Vector2::new(0.0, 0.0),
        Vector2::new(100.0, 0.0),
        Vector2::new(100.0, 40.0),
        Vector2::new(0.0, 40.0),
    ]);
    outline.is_closed = true;
    drawing.add_primitive(Primitive::LwPolyline(outline));

    drawing.add_primitive(Primitive::Circle(Circle::from_coords(20.0, 20.0, 5.0)));
    drawing.add_primitive(Primitive::Circle(Circle::from_coords(80.0, 20.0, 5.0)));

    drawing.add_primitive(Primitive::Text(Text::new(
        "2 HOLES D10",
        Vector2::new(50.0, 20.0),
    )));

    drawing
}

/// An L-shaped bracket profile cut from lines and one fillet arc, with
/// a heavy-polyline slot.
///
/// Hand-computed expectations:
/// - area: 25pi (arc sector) + 50 (slot triangle)
/// - width: 60, thickness: 30
/// - cut length: 60 + 20 + 50 + 30 (lines) + 5pi (arc) + 25 (slot)
pub fn bracket_profile() -> Drawing {
    let mut drawing = Drawing::new();

    drawing.add_primitive(Primitive::Line(Line::from_coords(0.0, 0.0, 60.0, 0.0)));
    drawing.add_primitive(Primitive::Line(Line::from_coords(60.0, 0.0, 60.0, 20.0)));
    drawing.add_primitive(Primitive::Arc(Arc::from_coords(50.0, 20.0, 10.0, 0.0, 90.0)));
    drawing.add_primitive(Primitive::Line(Line::from_coords(50.0, 30.0, 0.0, 30.0)));
    drawing.add_primitive(Primitive::Line(Line::from_coords(0.0, 30.0, 0.0, 0.0)));

    drawing.add_primitive(Primitive::Polyline(Polyline::from_points([
        Vector2::new(10.0, 10.0),
        Vector2::new(30.0, 10.0),
        Vector2::new(30.0, 15.0),
    ])));

    drawing
}

/// A drawing holding nothing but annotations: no pass should see any
/// geometry in it.
pub fn annotations_only() -> Drawing {
    let mut drawing = Drawing::new();
    drawing.add_primitive(Primitive::Text(Text::new("NOTES:", Vector2::new(0.0, 0.0))));
    drawing.add_primitive(Primitive::MText(MText::new(
        "1. DEBURR ALL EDGES\n2. BREAK SHARP CORNERS",
        Vector2::new(0.0, -10.0),
    )));
    drawing
}
