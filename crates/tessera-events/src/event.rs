use serde::{Deserialize, Serialize};

use tessera_types::{ActorId, AttributeId, Cid, Rarity, ScriptRef, TraitId};

/// Unique identifier for a registry event.
///
/// The ID is the BLAKE3 hash of the event content, making it both
/// verifiable and content-addressable: consumers can deduplicate by ID.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EventId {
    pub hash: [u8; 32],
}

impl EventId {
    /// Create an `EventId` from a raw hash.
    pub fn from_hash(hash: [u8; 32]) -> Self {
        Self { hash }
    }

    /// Short hex representation (first 8 hex chars).
    pub fn short_hex(&self) -> String {
        hex::encode(&self.hash[..4])
    }

    /// Full hex representation.
    pub fn to_hex(&self) -> String {
        hex::encode(self.hash)
    }
}

impl std::fmt::Display for EventId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "evt:{}", self.short_hex())
    }
}

/// Classification of registry events.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventKind {
    /// A new attribute (visual layer) has been created.
    AttributeCreated,
    /// A trait has been added to an attribute.
    TraitAdded,
    /// A new CID has been appended to an attribute's history.
    CidUpdated,
}

impl std::fmt::Display for EventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::AttributeCreated => "AttributeCreated",
            Self::TraitAdded => "TraitAdded",
            Self::CidUpdated => "CidUpdated",
        };
        write!(f, "{s}")
    }
}

/// Payload data carried by a registry event.
///
/// Exactly one payload exists per mutation kind, and field values always
/// match the state persisted by the mutation that emitted the event.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum EventPayload {
    AttributeCreated {
        id: AttributeId,
        name: String,
        script: ScriptRef,
    },
    TraitAdded {
        attribute: AttributeId,
        trait_id: TraitId,
        name: String,
        rarity: Rarity,
    },
    CidUpdated {
        attribute: AttributeId,
        cid: Cid,
    },
}

impl EventPayload {
    /// The classification this payload belongs to.
    pub fn kind(&self) -> EventKind {
        match self {
            Self::AttributeCreated { .. } => EventKind::AttributeCreated,
            Self::TraitAdded { .. } => EventKind::TraitAdded,
            Self::CidUpdated { .. } => EventKind::CidUpdated,
        }
    }

    /// The attribute this payload pertains to.
    pub fn attribute(&self) -> AttributeId {
        match self {
            Self::AttributeCreated { id, .. } => *id,
            Self::TraitAdded { attribute, .. } => *attribute,
            Self::CidUpdated { attribute, .. } => *attribute,
        }
    }
}

/// A single audit event emitted by the registry.
///
/// Every successful mutation emits exactly one event, in mutation order.
/// `seq` is the global 1-based position assigned by the registry; the
/// integrity hash is BLAKE3 over (seq, actor, payload) and doubles as the
/// event ID, so consumers can verify an event was not altered in transit.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryEvent {
    /// Unique event identifier (content-addressed).
    pub id: EventId,
    /// Global 1-based sequence number, in mutation order.
    pub seq: u64,
    /// The identity whose operation produced this event.
    pub actor: ActorId,
    /// Classification of this event.
    pub kind: EventKind,
    /// Event-specific payload data.
    pub payload: EventPayload,
    /// BLAKE3 integrity hash over (seq, actor, payload).
    pub integrity_hash: [u8; 32],
}

impl RegistryEvent {
    /// Build a new event, computing its integrity hash and ID.
    pub fn new(seq: u64, actor: ActorId, payload: EventPayload) -> Self {
        let integrity_hash = Self::compute_integrity(seq, &actor, &payload);
        Self {
            id: EventId::from_hash(integrity_hash),
            seq,
            actor,
            kind: payload.kind(),
            payload,
            integrity_hash,
        }
    }

    /// Verify the event's integrity hash matches its content.
    pub fn verify_integrity(&self) -> bool {
        let expected = Self::compute_integrity(self.seq, &self.actor, &self.payload);
        self.integrity_hash == expected
    }

    fn compute_integrity(seq: u64, actor: &ActorId, payload: &EventPayload) -> [u8; 32] {
        let mut hasher = blake3::Hasher::new();
        hasher.update(b"tessera-event-v1:");
        hasher.update(&seq.to_le_bytes());
        hasher.update(actor.as_bytes());
        if let Ok(payload_bytes) = bincode::serialize(payload) {
            hasher.update(&payload_bytes);
        }
        *hasher.finalize().as_bytes()
    }
}

#[cfg(test)]
mod tests {
    use tessera_types::{ActorMaterial, CID_V0_LEN};

    use super::*;

    fn test_actor() -> ActorId {
        ActorId::derive(&ActorMaterial::Seed([42u8; 32]))
    }

    fn cid_payload(seed: char) -> EventPayload {
        let raw: String = std::iter::repeat(seed).take(CID_V0_LEN).collect();
        EventPayload::CidUpdated {
            attribute: AttributeId::new(0),
            cid: Cid::parse(raw, CID_V0_LEN).unwrap(),
        }
    }

    #[test]
    fn event_integrity_roundtrip() {
        let event = RegistryEvent::new(1, test_actor(), cid_payload('Q'));
        assert!(event.verify_integrity());
    }

    #[test]
    fn event_id_is_deterministic() {
        let e1 = RegistryEvent::new(3, test_actor(), cid_payload('Q'));
        let e2 = RegistryEvent::new(3, test_actor(), cid_payload('Q'));
        assert_eq!(e1.id, e2.id);
    }

    #[test]
    fn different_sequences_produce_different_ids() {
        let e1 = RegistryEvent::new(1, test_actor(), cid_payload('Q'));
        let e2 = RegistryEvent::new(2, test_actor(), cid_payload('Q'));
        assert_ne!(e1.id, e2.id);
    }

    #[test]
    fn tampered_event_fails_verification() {
        let mut event = RegistryEvent::new(1, test_actor(), cid_payload('Q'));
        event.payload = cid_payload('R');
        assert!(!event.verify_integrity());
    }

    #[test]
    fn kind_matches_payload() {
        let event = RegistryEvent::new(1, test_actor(), cid_payload('Q'));
        assert_eq!(event.kind, EventKind::CidUpdated);
        assert_eq!(event.payload.kind(), EventKind::CidUpdated);
    }

    #[test]
    fn event_kind_display() {
        assert_eq!(format!("{}", EventKind::AttributeCreated), "AttributeCreated");
        assert_eq!(format!("{}", EventKind::CidUpdated), "CidUpdated");
    }

    #[test]
    fn event_id_display() {
        let id = EventId::from_hash([0xab; 32]);
        let display = format!("{id}");
        assert!(display.starts_with("evt:"));
        assert_eq!(display, "evt:abababab");
    }

    #[test]
    fn serde_roundtrip() {
        let event = RegistryEvent::new(5, test_actor(), cid_payload('Z'));
        let bytes = bincode::serialize(&event).unwrap();
        let decoded: RegistryEvent = bincode::deserialize(&bytes).unwrap();
        assert_eq!(event, decoded);
        assert!(decoded.verify_integrity());
    }
}
