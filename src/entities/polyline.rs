//! Heavy polyline entity (vertex-record 2D polyline)

use super::{path_length, polygon_area};
use crate::types::Vector2;

/// A heavy 2D polyline built from vertex records.
///
/// Kept separate from [`super::LwPolyline`] because the two DXF entity
/// types are distinct in the drawing and are counted separately.
#[derive(Debug, Clone, PartialEq)]
pub struct Polyline {
    /// Vertex locations in drawing order
    pub vertices: Vec<Vector2>,
    /// Is the polyline closed?
    pub is_closed: bool,
}

impl Polyline {
    /// Create a new empty polyline
    pub fn new() -> Self {
        Polyline {
            vertices: Vec::new(),
            is_closed: false,
        }
    }

    /// Create a polyline from a list of 2D points
    pub fn from_points(points: impl IntoIterator<Item = Vector2>) -> Self {
        Polyline {
            vertices: points.into_iter().collect(),
            ..Self::new()
        }
    }

    /// Add a vertex to the polyline
    pub fn add_point(&mut self, point: Vector2) {
        self.vertices.push(point);
    }

    /// Number of vertices
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Enclosed area of the implicitly-closed polygon through the
    /// vertices (shoelace, absolute value).
    pub fn area(&self) -> f64 {
        polygon_area(&self.vertices)
    }

    /// Total segment length of the open vertex traversal.
    pub fn length(&self) -> f64 {
        path_length(&self.vertices)
    }
}

impl Default for Polyline {
    fn default() -> Self {
        Self::new()
    }
}
