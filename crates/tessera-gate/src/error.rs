use tessera_types::{ActorId, Capability};

/// Errors produced by gate checks.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum GateError {
    /// The caller does not hold the required capability. Always fatal to
    /// the calling operation; there is no retry path.
    #[error("actor {actor} does not hold the {capability} capability")]
    NotAuthorized {
        actor: ActorId,
        capability: Capability,
    },

    #[error("gate internal error: {0}")]
    Internal(String),
}
