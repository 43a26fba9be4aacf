//! High-level SDK for Tessera.
//!
//! Provides a wired-up collection registry for applications embedding
//! Tessera: one administrator identity, an in-memory grant table, a
//! recording event sink, and the registry itself behind a single
//! [`Collection`] value.

pub mod collection;
pub mod draft;
pub mod error;

pub use collection::Collection;
pub use draft::AttributeDraft;
pub use error::{SdkError, SdkResult};

// Re-export key types
pub use tessera_events::{EventKind, EventPayload, RegistryEvent};
pub use tessera_registry::{CatalogProjection, PinManifest, StateReport};
pub use tessera_types::{ActorId, AttributeId, Capability, Cid, Rarity, TraitId, TraitSpec};
