use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::debug;

use tessera_events::{EventPayload, EventSink, RegistryEvent};
use tessera_gate::AccessGate;
use tessera_types::{
    ActorId, Attribute, AttributeId, Capability, Cid, Rarity, ScriptRef, Trait, TraitId,
    TraitSpec,
};

use crate::config::RegistryConfig;
use crate::error::RegistryError;
use crate::traits::{RegistryReader, RegistryWriter};

/// In-memory registry implementation for tests, local tooling, and
/// embedding.
///
/// The attribute store, trait store, and CID ledger share one state
/// struct behind a single `RwLock`. Each mutation validates and applies
/// under one write guard, which is what makes the sequential-ID and
/// all-or-nothing guarantees hold even on a threaded embedding; events
/// are published after the guard drops so a subscriber may read the
/// registry without deadlocking.
pub struct InMemoryRegistry {
    config: RegistryConfig,
    gate: Arc<dyn AccessGate>,
    sink: Arc<dyn EventSink>,
    inner: RwLock<RegistryState>,
}

#[derive(Default)]
struct RegistryState {
    attributes: Vec<AttributeEntry>,
    scripts: Vec<ScriptRef>,
    last_seq: u64,
}

/// Everything owned per attribute: the record itself, its trait table,
/// and its append-only CID history.
struct AttributeEntry {
    attribute: Attribute,
    traits: Vec<Trait>,
    cids: Vec<Cid>,
}

impl InMemoryRegistry {
    pub fn new(
        config: RegistryConfig,
        gate: Arc<dyn AccessGate>,
        sink: Arc<dyn EventSink>,
    ) -> Self {
        Self {
            config,
            gate,
            sink,
            inner: RwLock::new(RegistryState::default()),
        }
    }

    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    fn read_state(&self) -> Result<RwLockReadGuard<'_, RegistryState>, RegistryError> {
        self.inner
            .read()
            .map_err(|_| RegistryError::Internal("registry read lock poisoned".into()))
    }

    fn write_state(&self) -> Result<RwLockWriteGuard<'_, RegistryState>, RegistryError> {
        self.inner
            .write()
            .map_err(|_| RegistryError::Internal("registry write lock poisoned".into()))
    }

    fn ensure_attribute(state: &RegistryState, id: AttributeId) -> Result<(), RegistryError> {
        if id.index() >= state.attributes.len() {
            return Err(RegistryError::UnknownAttribute {
                id,
                count: state.attributes.len() as u32,
            });
        }
        Ok(())
    }

    /// Whole-batch-upfront validation: every element is checked before
    /// the first append, so a failing batch persists nothing.
    fn validate_trait_specs(&self, specs: &[TraitSpec]) -> Result<(), RegistryError> {
        if specs.len() > self.config.max_traits_per_batch {
            return Err(RegistryError::TraitBatchTooLarge {
                requested: specs.len(),
                max: self.config.max_traits_per_batch,
            });
        }
        for (index, spec) in specs.iter().enumerate() {
            if spec.name.trim().is_empty() {
                return Err(RegistryError::EmptyTraitName { index });
            }
        }
        Ok(())
    }

    fn next_event(
        state: &mut RegistryState,
        actor: &ActorId,
        payload: EventPayload,
    ) -> RegistryEvent {
        state.last_seq += 1;
        RegistryEvent::new(state.last_seq, actor.clone(), payload)
    }

    /// Append pre-validated traits, computing each new ID as the next in
    /// the attribute's sequence. The dense-ID invariant holds by
    /// construction on this path.
    fn seed_traits(
        state: &mut RegistryState,
        actor: &ActorId,
        attribute: AttributeId,
        specs: &[TraitSpec],
    ) -> Vec<RegistryEvent> {
        let mut events = Vec::with_capacity(specs.len());
        for spec in specs {
            let entry = &mut state.attributes[attribute.index()];
            let trait_id = TraitId::new(entry.traits.len() as u32 + 1);
            entry.traits.push(Trait {
                attribute,
                id: trait_id,
                name: spec.name.clone(),
                rarity: spec.rarity,
            });
            events.push(Self::next_event(
                state,
                actor,
                EventPayload::TraitAdded {
                    attribute,
                    trait_id,
                    name: spec.name.clone(),
                    rarity: spec.rarity,
                },
            ));
        }
        events
    }

    fn append_cid(
        state: &mut RegistryState,
        actor: &ActorId,
        attribute: AttributeId,
        cid: Cid,
    ) -> RegistryEvent {
        state.attributes[attribute.index()].cids.push(cid.clone());
        Self::next_event(state, actor, EventPayload::CidUpdated { attribute, cid })
    }

    fn emit(&self, events: Vec<RegistryEvent>) {
        for event in events {
            self.sink.publish(event);
        }
    }
}

impl RegistryWriter for InMemoryRegistry {
    fn create_attribute(
        &self,
        actor: &ActorId,
        name: &str,
        traits: &[TraitSpec],
        cid: &str,
        script: &str,
    ) -> Result<AttributeId, RegistryError> {
        self.gate.require(actor, Capability::Administrator)?;

        if name.trim().is_empty() {
            return Err(RegistryError::EmptyAttributeName);
        }
        let script =
            ScriptRef::new(script).map_err(|_| RegistryError::EmptyScript)?;
        let cid = Cid::parse(cid, self.config.cid_length)?;
        self.validate_trait_specs(traits)?;

        let (id, events) = {
            let mut state = self.write_state()?;
            let id = AttributeId::new(state.attributes.len() as u32);

            let mut events = Vec::with_capacity(traits.len() + 2);
            events.push(Self::next_event(
                &mut state,
                actor,
                EventPayload::AttributeCreated {
                    id,
                    name: name.to_string(),
                    script: script.clone(),
                },
            ));

            state.attributes.push(AttributeEntry {
                attribute: Attribute {
                    id,
                    name: name.to_string(),
                },
                traits: Vec::with_capacity(traits.len()),
                cids: Vec::new(),
            });
            events.extend(Self::seed_traits(&mut state, actor, id, traits));
            events.push(Self::append_cid(&mut state, actor, id, cid));
            state.scripts.push(script);

            (id, events)
        };

        debug!(attribute = %id, traits = traits.len(), "attribute created");
        self.emit(events);
        Ok(id)
    }

    fn add_traits(
        &self,
        actor: &ActorId,
        attribute: AttributeId,
        specs: &[TraitSpec],
    ) -> Result<(), RegistryError> {
        self.gate.require(actor, Capability::Administrator)?;

        let events = {
            let mut state = self.write_state()?;
            Self::ensure_attribute(&state, attribute)?;
            self.validate_trait_specs(specs)?;
            Self::seed_traits(&mut state, actor, attribute, specs)
        };

        debug!(attribute = %attribute, added = specs.len(), "trait batch appended");
        self.emit(events);
        Ok(())
    }

    fn add_single_trait(
        &self,
        actor: &ActorId,
        attribute: AttributeId,
        trait_id: TraitId,
        name: &str,
        rarity: Rarity,
    ) -> Result<(), RegistryError> {
        self.gate.require(actor, Capability::Administrator)?;

        let event = {
            let mut state = self.write_state()?;
            Self::ensure_attribute(&state, attribute)?;

            // The caller supplies the ID on this path, so the dense-ID
            // invariant is checked rather than constructed.
            let expected =
                TraitId::new(state.attributes[attribute.index()].traits.len() as u32 + 1);
            if trait_id != expected {
                return Err(RegistryError::NonSequentialTraitId {
                    attribute,
                    expected,
                    found: trait_id,
                });
            }
            if name.trim().is_empty() {
                return Err(RegistryError::EmptyTraitName { index: 0 });
            }

            state.attributes[attribute.index()].traits.push(Trait {
                attribute,
                id: trait_id,
                name: name.to_string(),
                rarity,
            });
            Self::next_event(
                &mut state,
                actor,
                EventPayload::TraitAdded {
                    attribute,
                    trait_id,
                    name: name.to_string(),
                    rarity,
                },
            )
        };

        self.emit(vec![event]);
        Ok(())
    }

    fn update_cid(
        &self,
        actor: &ActorId,
        attribute: AttributeId,
        cid: &str,
    ) -> Result<(), RegistryError> {
        self.gate.require(actor, Capability::Administrator)?;
        let cid = Cid::parse(cid, self.config.cid_length)?;

        let event = {
            let mut state = self.write_state()?;
            Self::ensure_attribute(&state, attribute)?;
            Self::append_cid(&mut state, actor, attribute, cid)
        };

        debug!(attribute = %attribute, "cid appended");
        self.emit(vec![event]);
        Ok(())
    }

    fn update_cids(
        &self,
        actor: &ActorId,
        updates: &[Option<String>],
    ) -> Result<(), RegistryError> {
        self.gate.require(actor, Capability::Administrator)?;

        let events = {
            let mut state = self.write_state()?;
            if updates.len() != state.attributes.len() {
                return Err(RegistryError::CidBatchMismatch {
                    expected: state.attributes.len() as u32,
                    found: updates.len(),
                });
            }

            // Validate every present entry before applying any.
            let mut parsed = Vec::new();
            for (index, slot) in updates.iter().enumerate() {
                if let Some(raw) = slot {
                    let cid = Cid::parse(raw.clone(), self.config.cid_length)?;
                    parsed.push((AttributeId::new(index as u32), cid));
                }
            }

            parsed
                .into_iter()
                .map(|(attribute, cid)| Self::append_cid(&mut state, actor, attribute, cid))
                .collect::<Vec<_>>()
        };

        debug!(applied = events.len(), slots = updates.len(), "cid batch applied");
        self.emit(events);
        Ok(())
    }
}

impl RegistryReader for InMemoryRegistry {
    fn attribute_count(&self) -> Result<u32, RegistryError> {
        Ok(self.read_state()?.attributes.len() as u32)
    }

    fn attribute(&self, id: AttributeId) -> Result<Attribute, RegistryError> {
        let state = self.read_state()?;
        Self::ensure_attribute(&state, id)?;
        Ok(state.attributes[id.index()].attribute.clone())
    }

    fn attributes(&self) -> Result<Vec<Attribute>, RegistryError> {
        let state = self.read_state()?;
        Ok(state
            .attributes
            .iter()
            .map(|entry| entry.attribute.clone())
            .collect())
    }

    fn trait_count(&self, attribute: AttributeId) -> Result<u32, RegistryError> {
        let state = self.read_state()?;
        Self::ensure_attribute(&state, attribute)?;
        Ok(state.attributes[attribute.index()].traits.len() as u32)
    }

    fn traits_of(&self, attribute: AttributeId) -> Result<Vec<Trait>, RegistryError> {
        let state = self.read_state()?;
        Self::ensure_attribute(&state, attribute)?;
        Ok(state.attributes[attribute.index()].traits.clone())
    }

    fn current_cid(&self, attribute: AttributeId) -> Result<Cid, RegistryError> {
        let state = self.read_state()?;
        Self::ensure_attribute(&state, attribute)?;
        state.attributes[attribute.index()]
            .cids
            .last()
            .cloned()
            .ok_or_else(|| RegistryError::Internal("attribute has empty CID history".into()))
    }

    fn cid_history(&self, attribute: AttributeId) -> Result<Vec<Cid>, RegistryError> {
        let state = self.read_state()?;
        Self::ensure_attribute(&state, attribute)?;
        Ok(state.attributes[attribute.index()].cids.clone())
    }

    fn scripts(&self) -> Result<Vec<ScriptRef>, RegistryError> {
        Ok(self.read_state()?.scripts.clone())
    }

    fn script_count(&self) -> Result<u32, RegistryError> {
        Ok(self.read_state()?.scripts.len() as u32)
    }
}
