//! Multi-line text entity

use crate::types::Vector2;

/// A multi-line text annotation. Census-only, like [`super::Text`].
#[derive(Debug, Clone, PartialEq)]
pub struct MText {
    /// Text content
    pub value: String,
    /// Insertion point
    pub insertion_point: Vector2,
}

impl MText {
    /// Create a new multi-line text annotation
    pub fn new(value: impl Into<String>, insertion_point: Vector2) -> Self {
        MText {
            value: value.into(),
            insertion_point,
        }
    }
}

impl Default for MText {
    fn default() -> Self {
        MText::new("", Vector2::ZERO)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mtext_creation() {
        let mtext = MText::new("NOTES:\n1. DEBURR", Vector2::new(0.0, -20.0));
        assert_eq!(mtext.value, "NOTES:\n1. DEBURR");
        assert_eq!(mtext.insertion_point, Vector2::new(0.0, -20.0));
    }
}
