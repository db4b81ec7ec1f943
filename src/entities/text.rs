//! Text entity

use crate::types::Vector2;

/// A single-line text annotation.
///
/// Contributes no geometry to any aggregate; it is counted in the
/// census only.
#[derive(Debug, Clone, PartialEq)]
pub struct Text {
    /// Text content
    pub value: String,
    /// Insertion point
    pub location: Vector2,
}

impl Text {
    /// Create a new text annotation
    pub fn new(value: impl Into<String>, location: Vector2) -> Self {
        Text {
            value: value.into(),
            location,
        }
    }
}

impl Default for Text {
    fn default() -> Self {
        Text::new("", Vector2::ZERO)
    }
}
