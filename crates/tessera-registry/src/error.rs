use tessera_gate::GateError;
use tessera_types::{AttributeId, TraitId, TypeError};

/// Errors produced by registry operations.
///
/// Every error aborts the whole logical operation with zero state change
/// and zero emitted events; retrying with corrected input is the
/// caller's responsibility.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    /// The caller failed the capability check.
    #[error(transparent)]
    Denied(#[from] GateError),

    #[error("attribute name must not be empty")]
    EmptyAttributeName,

    #[error("trait name at position {index} must not be empty")]
    EmptyTraitName { index: usize },

    #[error("generation script reference must not be empty")]
    EmptyScript,

    #[error("unknown attribute {id}; {count} attributes exist")]
    UnknownAttribute { id: AttributeId, count: u32 },

    #[error("trait batch of {requested} exceeds the per-call maximum of {max}")]
    TraitBatchTooLarge { requested: usize, max: usize },

    #[error("trait id {found} is out of sequence for attribute {attribute}; expected {expected}")]
    NonSequentialTraitId {
        attribute: AttributeId,
        expected: TraitId,
        found: TraitId,
    },

    #[error("invalid content identifier: {0}")]
    InvalidCid(#[from] TypeError),

    #[error("CID batch covers {found} slots but {expected} attributes exist")]
    CidBatchMismatch { expected: u32, found: usize },

    #[error("internal error: {0}")]
    Internal(String),
}
