use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::TypeError;

/// Opaque versioned reference to the external generation recipe.
///
/// One `ScriptRef` is appended each time an attribute is created; the
/// resulting sequence versions the script capable of combining the
/// attribute set that existed at that point in time.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScriptRef(String);

impl ScriptRef {
    /// Wrap a raw reference, rejecting empty or whitespace-only input.
    pub fn new(raw: impl Into<String>) -> Result<Self, TypeError> {
        let raw = raw.into();
        if raw.trim().is_empty() {
            return Err(TypeError::Empty("generation script reference"));
        }
        Ok(Self(raw))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ScriptRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
