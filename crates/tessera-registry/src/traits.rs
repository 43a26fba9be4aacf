use tessera_types::{
    ActorId, Attribute, AttributeId, Cid, Rarity, ScriptRef, Trait, TraitId, TraitSpec,
};

use crate::error::RegistryError;

/// Write boundary for registry mutations.
///
/// Every method takes the calling identity first and checks it against
/// the access gate before anything else. A failed precondition anywhere
/// aborts the whole call: no partial state, no events.
pub trait RegistryWriter: Send + Sync {
    /// Create the next attribute, seed its initial traits, record its
    /// initial CID, and append the generation script reference, all as
    /// one atomic unit. Returns the newly assigned attribute ID.
    fn create_attribute(
        &self,
        actor: &ActorId,
        name: &str,
        traits: &[TraitSpec],
        cid: &str,
        script: &str,
    ) -> Result<AttributeId, RegistryError>;

    /// Append a batch of traits to an existing attribute. IDs are
    /// computed by the registry, continuing the attribute's sequence.
    fn add_traits(
        &self,
        actor: &ActorId,
        attribute: AttributeId,
        specs: &[TraitSpec],
    ) -> Result<(), RegistryError>;

    /// Append one trait with a caller-supplied ID, which must be exactly
    /// the next ID in the attribute's sequence. Callers use this path
    /// for idempotent retries with known IDs.
    fn add_single_trait(
        &self,
        actor: &ActorId,
        attribute: AttributeId,
        trait_id: TraitId,
        name: &str,
        rarity: Rarity,
    ) -> Result<(), RegistryError>;

    /// Append a CID to an attribute's history. Prior entries are never
    /// removed or overwritten.
    fn update_cid(
        &self,
        actor: &ActorId,
        attribute: AttributeId,
        cid: &str,
    ) -> Result<(), RegistryError>;

    /// Positional bulk CID update: one slot per existing attribute
    /// (slot index = attribute ID), `None` meaning "no update for this
    /// attribute". The slot count must equal the attribute count
    /// exactly, and every present entry must be valid, or the whole
    /// call fails with nothing applied.
    fn update_cids(
        &self,
        actor: &ActorId,
        updates: &[Option<String>],
    ) -> Result<(), RegistryError>;
}

/// Read boundary for registry queries and projections.
pub trait RegistryReader: Send + Sync {
    fn attribute_count(&self) -> Result<u32, RegistryError>;

    fn attribute(&self, id: AttributeId) -> Result<Attribute, RegistryError>;

    fn attributes(&self) -> Result<Vec<Attribute>, RegistryError>;

    fn trait_count(&self, attribute: AttributeId) -> Result<u32, RegistryError>;

    fn traits_of(&self, attribute: AttributeId) -> Result<Vec<Trait>, RegistryError>;

    /// The authoritative (most recently appended) CID for an attribute.
    fn current_cid(&self, attribute: AttributeId) -> Result<Cid, RegistryError>;

    fn cid_history(&self, attribute: AttributeId) -> Result<Vec<Cid>, RegistryError>;

    fn scripts(&self) -> Result<Vec<ScriptRef>, RegistryError>;

    fn script_count(&self) -> Result<u32, RegistryError>;
}
