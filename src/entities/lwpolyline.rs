//! Lightweight polyline entity (2D polyline with bulges)

use super::{path_length, polygon_area};
use crate::types::Vector2;

/// A vertex in a lightweight polyline
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LwVertex {
    /// Location of the vertex
    pub location: Vector2,
    /// Bulge value (for arc segments); 0 = straight segment.
    /// Carried from the drawing but ignored by measurement, which treats
    /// every segment as straight.
    pub bulge: f64,
    /// Starting width at this vertex
    pub start_width: f64,
    /// Ending width at this vertex
    pub end_width: f64,
}

impl LwVertex {
    /// Create a new straight-segment vertex
    pub fn new(location: Vector2) -> Self {
        LwVertex {
            location,
            bulge: 0.0,
            start_width: 0.0,
            end_width: 0.0,
        }
    }

    /// Create a vertex with a bulge
    pub fn with_bulge(location: Vector2, bulge: f64) -> Self {
        LwVertex {
            bulge,
            ..LwVertex::new(location)
        }
    }
}

/// A lightweight (2D) polyline entity
#[derive(Debug, Clone, PartialEq)]
pub struct LwPolyline {
    /// Vertices of the polyline
    pub vertices: Vec<LwVertex>,
    /// Is the polyline closed?
    pub is_closed: bool,
}

impl LwPolyline {
    /// Create a new empty lightweight polyline
    pub fn new() -> Self {
        LwPolyline {
            vertices: Vec::new(),
            is_closed: false,
        }
    }

    /// Create a polyline from a list of 2D points
    pub fn from_points(points: impl IntoIterator<Item = Vector2>) -> Self {
        LwPolyline {
            vertices: points.into_iter().map(LwVertex::new).collect(),
            ..Self::new()
        }
    }

    /// Add a point to the polyline
    pub fn add_point(&mut self, point: Vector2) {
        self.vertices.push(LwVertex::new(point));
    }

    /// Number of vertices
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Vertex locations in order
    pub fn points(&self) -> Vec<Vector2> {
        self.vertices.iter().map(|v| v.location).collect()
    }

    /// Enclosed area of the implicitly-closed polygon through the
    /// vertices (shoelace, absolute value).
    pub fn area(&self) -> f64 {
        polygon_area(&self.points())
    }

    /// Total segment length of the open vertex traversal.
    pub fn length(&self) -> f64 {
        path_length(&self.points())
    }
}

impl Default for LwPolyline {
    fn default() -> Self {
        Self::new()
    }
}
