//! Audit event channel for the Tessera registry.
//!
//! Every successful registry mutation produces exactly one
//! [`RegistryEvent`], published synchronously and in mutation order to an
//! [`EventSink`]. Off-chain consumers (indexers, pinning services) build
//! their view of the collection from this stream, so events carry
//! content-addressed IDs and integrity hashes they can verify.

pub mod event;
pub mod sink;

pub use event::{EventId, EventKind, EventPayload, RegistryEvent};
pub use sink::{EventFilter, EventSink, FanoutSink, NullSink, RecordingSink};
