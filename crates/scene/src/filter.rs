use serde::{Deserialize, Serialize};

/// Layer mask selecting which scene objects a query may hit.
///
/// Each object carries a layer bitmask; an object is eligible when it shares
/// at least one bit with the filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ObjectFilter(pub u32);

impl ObjectFilter {
    pub const ALL: ObjectFilter = ObjectFilter(u32::MAX);
    pub const NONE: ObjectFilter = ObjectFilter(0);

    /// Filter for a single layer index (0..32). Out-of-range layers match nothing.
    pub fn layer(index: u32) -> Self {
        Self(1u32.checked_shl(index).unwrap_or(0))
    }

    pub fn union(self, other: ObjectFilter) -> Self {
        Self(self.0 | other.0)
    }

    pub fn matches(&self, layers: u32) -> bool {
        self.0 & layers != 0
    }
}

impl Default for ObjectFilter {
    fn default() -> Self {
        Self::ALL
    }
}
