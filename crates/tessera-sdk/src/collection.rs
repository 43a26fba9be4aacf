use std::sync::Arc;

use tracing::debug;

use tessera_events::{RecordingSink, RegistryEvent};
use tessera_gate::GrantTable;
use tessera_registry::{
    CatalogProjection, InMemoryRegistry, PinManifest, ProjectionBuilder, RegistryAuditor,
    RegistryConfig, RegistryReader, RegistryWriter, StateReport,
};
use tessera_types::{
    ActorId, Attribute, AttributeId, Capability, Cid, Rarity, ScriptRef, Trait, TraitId,
    TraitSpec,
};

use crate::draft::AttributeDraft;
use crate::error::SdkResult;

/// High-level collection registry API.
///
/// Wires a [`GrantTable`], a [`RecordingSink`], and an
/// [`InMemoryRegistry`] together and performs every mutation as the
/// configured administrator. Applications that need their own gate or
/// sink implementations assemble an `InMemoryRegistry` directly.
pub struct Collection {
    administrator: ActorId,
    gate: Arc<GrantTable>,
    sink: Arc<RecordingSink>,
    registry: InMemoryRegistry,
}

impl Collection {
    /// Initialize a new collection with a fresh ephemeral administrator.
    pub fn init() -> Self {
        Self::init_inner(ActorId::ephemeral(), RegistryConfig::default())
    }

    /// Initialize with a specific administrator identity.
    pub fn init_with_administrator(administrator: ActorId) -> Self {
        Self::init_inner(administrator, RegistryConfig::default())
    }

    /// Initialize with a specific administrator and registry limits.
    pub fn init_with_config(administrator: ActorId, config: RegistryConfig) -> Self {
        Self::init_inner(administrator, config)
    }

    fn init_inner(administrator: ActorId, config: RegistryConfig) -> Self {
        let gate = Arc::new(GrantTable::with_administrator(administrator.clone()));
        let sink = Arc::new(RecordingSink::new());
        let registry = InMemoryRegistry::new(config, gate.clone(), sink.clone());
        debug!(administrator = %administrator, "collection initialized");
        Self {
            administrator,
            gate,
            sink,
            registry,
        }
    }

    // ---- Mutations (as the administrator) ----

    pub fn create_attribute(&self, draft: AttributeDraft) -> SdkResult<AttributeId> {
        let id = self.registry.create_attribute(
            &self.administrator,
            &draft.name,
            &draft.traits,
            &draft.cid,
            &draft.script,
        )?;
        Ok(id)
    }

    pub fn add_traits(&self, attribute: AttributeId, specs: &[TraitSpec]) -> SdkResult<()> {
        self.registry
            .add_traits(&self.administrator, attribute, specs)?;
        Ok(())
    }

    pub fn add_trait(
        &self,
        attribute: AttributeId,
        trait_id: TraitId,
        name: &str,
        rarity: Rarity,
    ) -> SdkResult<()> {
        self.registry
            .add_single_trait(&self.administrator, attribute, trait_id, name, rarity)?;
        Ok(())
    }

    pub fn set_cid(&self, attribute: AttributeId, cid: &str) -> SdkResult<()> {
        self.registry
            .update_cid(&self.administrator, attribute, cid)?;
        Ok(())
    }

    pub fn set_cids(&self, updates: &[Option<String>]) -> SdkResult<()> {
        self.registry.update_cids(&self.administrator, updates)?;
        Ok(())
    }

    // ---- Grant management (bootstrap surface) ----

    pub fn grant_administrator(&self, actor: ActorId) {
        self.gate.grant(actor, Capability::Administrator);
    }

    pub fn revoke_administrator(&self, actor: &ActorId) -> bool {
        self.gate.revoke(actor, Capability::Administrator)
    }

    // ---- Queries ----

    pub fn attribute_count(&self) -> SdkResult<u32> {
        Ok(self.registry.attribute_count()?)
    }

    pub fn attribute(&self, id: AttributeId) -> SdkResult<Attribute> {
        Ok(self.registry.attribute(id)?)
    }

    pub fn traits_of(&self, attribute: AttributeId) -> SdkResult<Vec<Trait>> {
        Ok(self.registry.traits_of(attribute)?)
    }

    pub fn current_cid(&self, attribute: AttributeId) -> SdkResult<Cid> {
        Ok(self.registry.current_cid(attribute)?)
    }

    pub fn cid_history(&self, attribute: AttributeId) -> SdkResult<Vec<Cid>> {
        Ok(self.registry.cid_history(attribute)?)
    }

    pub fn scripts(&self) -> SdkResult<Vec<ScriptRef>> {
        Ok(self.registry.scripts()?)
    }

    // ---- Derived views ----

    pub fn catalog(&self) -> SdkResult<CatalogProjection> {
        Ok(ProjectionBuilder::catalog(&self.registry)?)
    }

    pub fn pin_manifest(&self) -> SdkResult<PinManifest> {
        Ok(ProjectionBuilder::pin_manifest(&self.registry)?)
    }

    pub fn audit(&self) -> SdkResult<StateReport> {
        Ok(RegistryAuditor::audit(&self.registry)?)
    }

    /// All audit events recorded so far, in mutation order.
    pub fn events(&self) -> Vec<RegistryEvent> {
        self.sink.events()
    }

    // ---- Accessors ----

    pub fn administrator(&self) -> &ActorId {
        &self.administrator
    }

    pub fn registry(&self) -> &InMemoryRegistry {
        &self.registry
    }

    pub fn gate(&self) -> &GrantTable {
        &self.gate
    }
}

#[cfg(test)]
mod tests {
    use tessera_events::EventKind;
    use tessera_registry::RegistryError;
    use tessera_types::CID_V0_LEN;

    use crate::error::SdkError;

    use super::*;

    fn cid(fill: char) -> String {
        std::iter::repeat(fill).take(CID_V0_LEN).collect()
    }

    fn background_draft() -> AttributeDraft {
        AttributeDraft::new("Background", cid('Q'), "generator-v1")
            .with_trait("Forest", Rarity::Common)
            .with_trait("Desert", Rarity::Rare)
    }

    #[test]
    fn init_grants_the_administrator() {
        let collection = Collection::init();
        assert!(collection
            .gate()
            .is_granted(collection.administrator(), Capability::Administrator));
        assert_eq!(collection.attribute_count().unwrap(), 0);
    }

    #[test]
    fn create_attribute_from_draft() {
        let collection = Collection::init();
        let id = collection.create_attribute(background_draft()).unwrap();

        assert_eq!(id, AttributeId::new(0));
        assert_eq!(collection.attribute_count().unwrap(), 1);
        assert_eq!(collection.traits_of(id).unwrap().len(), 2);
        assert_eq!(collection.cid_history(id).unwrap().len(), 1);
        assert_eq!(collection.scripts().unwrap().len(), 1);
    }

    #[test]
    fn full_lifecycle_emits_one_event_per_mutation() {
        let collection = Collection::init();
        let id = collection.create_attribute(background_draft()).unwrap(); // 4 events
        collection
            .add_traits(id, &[TraitSpec::new("Tundra", Rarity::Epic)])
            .unwrap(); // 1 event
        collection
            .add_trait(id, TraitId::new(4), "Void", Rarity::Legendary)
            .unwrap(); // 1 event
        collection.set_cid(id, &cid('R')).unwrap(); // 1 event

        let events = collection.events();
        assert_eq!(events.len(), 7);
        assert!(events.iter().all(|e| e.verify_integrity()));
        assert_eq!(events.last().unwrap().kind, EventKind::CidUpdated);
    }

    #[test]
    fn positional_cid_update_through_the_facade() {
        let collection = Collection::init();
        let first = collection.create_attribute(background_draft()).unwrap();
        let second = collection
            .create_attribute(AttributeDraft::new("Eyes", cid('E'), "generator-v2"))
            .unwrap();

        collection.set_cids(&[None, Some(cid('Z'))]).unwrap();

        assert_eq!(collection.cid_history(first).unwrap().len(), 1);
        assert_eq!(collection.current_cid(second).unwrap().as_str(), cid('Z'));
    }

    #[test]
    fn audit_is_consistent_after_mutations() {
        let collection = Collection::init();
        let id = collection.create_attribute(background_draft()).unwrap();
        collection.set_cid(id, &cid('R')).unwrap();

        let report = collection.audit().unwrap();
        assert!(report.is_consistent());
        assert_eq!(report.attribute_count, 1);
    }

    #[test]
    fn catalog_and_manifest_are_available() {
        let collection = Collection::init();
        let id = collection.create_attribute(background_draft()).unwrap();

        let catalog = collection.catalog().unwrap();
        assert_eq!(catalog.attributes[0].trait_count, 2);

        let manifest = collection.pin_manifest().unwrap();
        assert_eq!(manifest.entries[0].attribute, id);
    }

    #[test]
    fn second_administrator_can_be_granted_and_revoked() {
        let collection = Collection::init();
        let second = ActorId::ephemeral();

        collection.grant_administrator(second.clone());
        collection
            .registry()
            .create_attribute(&second, "Eyes", &[], &cid('E'), "generator-v2")
            .unwrap();

        assert!(collection.revoke_administrator(&second));
        let err = collection
            .registry()
            .create_attribute(&second, "Hat", &[], &cid('H'), "generator-v3")
            .unwrap_err();
        assert!(matches!(err, RegistryError::Denied(_)));
    }

    #[test]
    fn revoked_primary_administrator_surfaces_denial() {
        let collection = Collection::init();
        let administrator = collection.administrator().clone();
        collection.revoke_administrator(&administrator);

        let err = collection
            .create_attribute(background_draft())
            .unwrap_err();
        assert!(matches!(
            err,
            SdkError::Registry(RegistryError::Denied(_))
        ));
    }
}
