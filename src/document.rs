//! Drawing document structure

use crate::entities::Primitive;
use crate::metrics::{self, DrawingMetrics};
use crate::notification::NotificationCollection;
use crate::Result;

/// A loaded drawing: the primitive sequence every measurement pass
/// traverses, plus the notifications collected while loading it.
///
/// The sequence is immutable during measurement; [`Drawing::measure`]
/// borrows it read-only.
#[derive(Debug, Clone, Default)]
pub struct Drawing {
    entities: Vec<Primitive>,
    /// Notifications collected during loading
    pub notifications: NotificationCollection,
}

impl Drawing {
    /// Create a new empty drawing
    pub fn new() -> Self {
        Drawing {
            entities: Vec::new(),
            notifications: NotificationCollection::new(),
        }
    }

    /// Create a drawing from an already-built primitive sequence
    pub fn from_primitives(entities: Vec<Primitive>) -> Self {
        Drawing {
            entities,
            ..Self::new()
        }
    }

    /// Load and convert a DXF file from disk.
    ///
    /// The path must carry the `.dxf` extension; parsing is delegated
    /// to the `dxf` crate and its failures propagate unchanged.
    pub fn load_file(path: &str) -> Result<Self> {
        crate::io::dxf::load_file(path)
    }

    pub(crate) fn with_notifications(
        entities: Vec<Primitive>,
        notifications: NotificationCollection,
    ) -> Self {
        Drawing {
            entities,
            notifications,
        }
    }

    /// Append a primitive to the drawing
    pub fn add_primitive(&mut self, primitive: Primitive) {
        self.entities.push(primitive);
    }

    /// Number of primitives in the drawing
    pub fn entity_count(&self) -> usize {
        self.entities.len()
    }

    /// The primitive sequence, in drawing order
    pub fn entities(&self) -> &[Primitive] {
        &self.entities
    }

    /// Run every aggregation over the drawing.
    pub fn measure(&self) -> DrawingMetrics {
        metrics::measure(&self.entities)
    }
}
