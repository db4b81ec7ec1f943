//! Circle entity

use crate::types::Vector2;
use std::f64::consts::PI;

/// A full circle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    /// Center point
    pub center: Vector2,
    /// Radius (non-negative)
    pub radius: f64,
}

impl Circle {
    /// Create a new circle
    pub fn new(center: Vector2, radius: f64) -> Self {
        Circle { center, radius }
    }

    /// Create a new circle from center coordinates and radius
    pub fn from_coords(x: f64, y: f64, radius: f64) -> Self {
        Circle::new(Vector2::new(x, y), radius)
    }

    /// Enclosed area, `pi * r^2`
    pub fn area(&self) -> f64 {
        PI * self.radius * self.radius
    }

    /// Circumference, `2 * pi * r`
    pub fn circumference(&self) -> f64 {
        2.0 * PI * self.radius
    }
}

impl Default for Circle {
    fn default() -> Self {
        Circle::new(Vector2::ZERO, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_circle_area() {
        let circle = Circle::from_coords(0.0, 0.0, 2.0);
        assert!((circle.area() - 4.0 * PI).abs() < 1e-12);
    }

    #[test]
    fn test_circle_circumference() {
        let circle = Circle::from_coords(5.0, 5.0, 3.0);
        assert!((circle.circumference() - 6.0 * PI).abs() < 1e-12);
    }

    #[test]
    fn test_zero_radius() {
        let circle = Circle::from_coords(1.0, 1.0, 0.0);
        assert_eq!(circle.area(), 0.0);
        assert_eq!(circle.circumference(), 0.0);
    }
}
