//! Entity census

use crate::entities::{Primitive, PrimitiveKind};
use indexmap::IndexMap;
use std::fmt;

/// Per-type entity counts over the fixed recognized key set.
///
/// Every key from [`PrimitiveKind::ALL`] is always present, starting at
/// zero, in census reporting order. Unrecognized types are never added.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Census {
    counts: IndexMap<PrimitiveKind, usize>,
}

impl Census {
    /// Create a census with every recognized key at zero.
    pub fn new() -> Self {
        let mut counts = IndexMap::with_capacity(PrimitiveKind::ALL.len());
        for kind in PrimitiveKind::ALL {
            counts.insert(kind, 0);
        }
        Census { counts }
    }

    /// Increment the count for one recognized kind.
    pub fn record(&mut self, kind: PrimitiveKind) {
        if let Some(count) = self.counts.get_mut(&kind) {
            *count += 1;
        }
    }

    /// Count for one kind.
    pub fn count(&self, kind: PrimitiveKind) -> usize {
        self.counts.get(&kind).copied().unwrap_or(0)
    }

    /// Total count across all recognized kinds.
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// Iterate `(kind, count)` pairs in reporting order.
    pub fn iter(&self) -> impl Iterator<Item = (PrimitiveKind, usize)> + '_ {
        self.counts.iter().map(|(kind, count)| (*kind, *count))
    }
}

impl Default for Census {
    fn default() -> Self {
        Census::new()
    }
}

impl fmt::Display for Census {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (kind, count) in self.iter() {
            writeln!(f, "{}: {}", kind, count)?;
        }
        Ok(())
    }
}

/// Count every primitive whose type tag is recognized; everything else
/// is silently excluded.
pub fn count_entities(entities: &[Primitive]) -> Census {
    entities.iter().fold(Census::new(), |mut census, primitive| {
        if let Some(kind) = primitive.kind() {
            census.record(kind);
        }
        census
    })
}
