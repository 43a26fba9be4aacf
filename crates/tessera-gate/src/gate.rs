use std::collections::HashSet;
use std::sync::RwLock;

use tracing::debug;

use tessera_types::{ActorId, Capability};

use crate::config::GateConfig;
use crate::error::GateError;

/// Capability check guarding every registry mutation.
///
/// The gate is an injected collaborator: the registry calls it before
/// touching any state and aborts with zero effects when the check fails.
/// Implementations must answer from already-known grant state; the gate
/// never blocks on external I/O.
pub trait AccessGate: Send + Sync {
    /// Does `actor` currently hold `capability`?
    fn is_authorized(&self, actor: &ActorId, capability: Capability) -> Result<bool, GateError>;

    /// Check and convert a missing grant into [`GateError::NotAuthorized`].
    fn require(&self, actor: &ActorId, capability: Capability) -> Result<(), GateError> {
        if self.is_authorized(actor, capability)? {
            Ok(())
        } else {
            Err(GateError::NotAuthorized {
                actor: actor.clone(),
                capability,
            })
        }
    }
}

/// In-memory grant table, the reference [`AccessGate`] implementation for
/// embedding and tests.
///
/// Role membership itself is an external concern; production deployments
/// answer checks from their own access-control system. The grant/revoke
/// surface here is the bootstrap path for embedders and test setups.
pub struct GrantTable {
    config: GateConfig,
    grants: RwLock<HashSet<(ActorId, Capability)>>,
}

impl GrantTable {
    pub fn new(config: GateConfig) -> Self {
        Self {
            config,
            grants: RwLock::new(HashSet::new()),
        }
    }

    /// A table with default (enforcing) configuration and one
    /// administrator already granted.
    pub fn with_administrator(actor: ActorId) -> Self {
        let table = Self::new(GateConfig::default());
        table.grant(actor, Capability::Administrator);
        table
    }

    /// Grant `capability` to `actor`. Granting twice is a no-op.
    pub fn grant(&self, actor: ActorId, capability: Capability) {
        debug!(actor = %actor, %capability, "capability granted");
        self.grants
            .write()
            .expect("grant table lock poisoned")
            .insert((actor, capability));
    }

    /// Revoke a grant. Returns `true` if the grant existed.
    pub fn revoke(&self, actor: &ActorId, capability: Capability) -> bool {
        self.grants
            .write()
            .expect("grant table lock poisoned")
            .remove(&(actor.clone(), capability))
    }

    /// Whether the grant is present in the table, ignoring permissive mode.
    pub fn is_granted(&self, actor: &ActorId, capability: Capability) -> bool {
        self.grants
            .read()
            .map(|grants| grants.contains(&(actor.clone(), capability)))
            .unwrap_or(false)
    }
}

impl Default for GrantTable {
    fn default() -> Self {
        Self::new(GateConfig::default())
    }
}

impl AccessGate for GrantTable {
    fn is_authorized(&self, actor: &ActorId, capability: Capability) -> Result<bool, GateError> {
        if self.config.permissive {
            return Ok(true);
        }
        let grants = self
            .grants
            .read()
            .map_err(|_| GateError::Internal("grant table lock poisoned".into()))?;
        Ok(grants.contains(&(actor.clone(), capability)))
    }
}
