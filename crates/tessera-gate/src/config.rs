use serde::{Deserialize, Serialize};

/// Configuration for the access gate.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GateConfig {
    /// When `true`, the gate runs in permissive mode: every check passes
    /// regardless of grants. This makes the registry behave like a plain
    /// local catalog for single-user embedding; enforcement activates
    /// when the embedder configures real grants.
    pub permissive: bool,
}

impl Default for GateConfig {
    fn default() -> Self {
        Self { permissive: false }
    }
}

impl GateConfig {
    /// A maximally permissive configuration for single-user embedding.
    pub fn permissive() -> Self {
        Self { permissive: true }
    }
}
