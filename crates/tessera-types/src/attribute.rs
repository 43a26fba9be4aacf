use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a visual layer in the collection.
///
/// Attribute IDs are dense and zero-based: the Nth attribute ever created
/// has ID N-1, and the ID doubles as the index into every per-attribute
/// structure (trait table, CID history, positional CID updates). An ID is
/// immutable once assigned.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct AttributeId(u32);

impl AttributeId {
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    /// The raw numeric ID.
    pub const fn get(self) -> u32 {
        self.0
    }

    /// The ID as a table index.
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl From<u32> for AttributeId {
    fn from(raw: u32) -> Self {
        Self(raw)
    }
}

impl fmt::Display for AttributeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A named visual layer of the artwork (e.g. "Background").
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attribute {
    pub id: AttributeId,
    pub name: String,
}
