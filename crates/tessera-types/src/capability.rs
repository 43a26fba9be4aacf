use std::fmt;

use serde::{Deserialize, Serialize};

/// A grant checked by the access gate before any registry mutation.
///
/// The set is closed: callers either hold a capability or they do not,
/// and the registry never reasons about partial permissions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Capability {
    /// May mutate every registry structure: attributes, traits, CID
    /// histories, and the generation-script sequence.
    Administrator,
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Administrator => write!(f, "administrator"),
        }
    }
}
