use serde::{Deserialize, Serialize};

use tessera_types::CID_V0_LEN;

/// Fixed limits consumed, not owned, by the registry core.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RegistryConfig {
    /// Maximum number of traits addable in a single batch call. Caps the
    /// cost of one logical mutation; larger imports are split by the
    /// caller into several calls.
    pub max_traits_per_batch: usize,
    /// Exact byte length a content identifier must have.
    pub cid_length: usize,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            max_traits_per_batch: 32,
            cid_length: CID_V0_LEN,
        }
    }
}
