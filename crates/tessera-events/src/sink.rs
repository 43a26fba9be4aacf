use std::sync::{Arc, RwLock};

use tracing::debug;

use tessera_types::AttributeId;

use crate::event::{EventKind, RegistryEvent};

/// Receives one event per successful registry mutation, synchronously and
/// in mutation order.
///
/// By the time a sink sees an event the mutation has already committed;
/// a consumer failure must not unwind the registry, so publication is
/// infallible. Sinks that can lose events (e.g. bounded queues) are
/// responsible for their own durability story.
pub trait EventSink: Send + Sync {
    fn publish(&self, event: RegistryEvent);
}

/// Discards every event. Useful when the embedder has no audit consumer.
pub struct NullSink;

impl EventSink for NullSink {
    fn publish(&self, _event: RegistryEvent) {}
}

/// Buffers every published event in memory, for tests and embedding.
#[derive(Default)]
pub struct RecordingSink {
    events: RwLock<Vec<RegistryEvent>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all recorded events, in publication order.
    pub fn events(&self) -> Vec<RegistryEvent> {
        self.events.read().expect("sink lock poisoned").clone()
    }

    /// Drain the buffer, returning the recorded events.
    pub fn take(&self) -> Vec<RegistryEvent> {
        std::mem::take(&mut *self.events.write().expect("sink lock poisoned"))
    }

    pub fn len(&self) -> usize {
        self.events.read().expect("sink lock poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl EventSink for RecordingSink {
    fn publish(&self, event: RegistryEvent) {
        self.events.write().expect("sink lock poisoned").push(event);
    }
}

/// Filter for delivering a subset of registry events to a subscriber.
#[derive(Clone, Debug, Default)]
pub struct EventFilter {
    /// If set, only events for these attributes are delivered.
    pub attributes: Option<Vec<AttributeId>>,
    /// If set, only events of these kinds are delivered.
    pub kinds: Option<Vec<EventKind>>,
}

impl EventFilter {
    /// Returns `true` if the given event matches this filter.
    pub fn matches(&self, event: &RegistryEvent) -> bool {
        if let Some(ref attributes) = self.attributes {
            if !attributes.contains(&event.payload.attribute()) {
                return false;
            }
        }
        if let Some(ref kinds) = self.kinds {
            if !kinds.contains(&event.kind) {
                return false;
            }
        }
        true
    }
}

/// A subscriber: a filter paired with a downstream sink.
struct Subscriber {
    filter: EventFilter,
    sink: Arc<dyn EventSink>,
}

/// Fan-out sink that routes each event to every matching subscriber.
#[derive(Default)]
pub struct FanoutSink {
    subscribers: RwLock<Vec<Subscriber>>,
}

impl FanoutSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach a downstream sink behind a filter.
    pub fn attach(&self, filter: EventFilter, sink: Arc<dyn EventSink>) {
        self.subscribers
            .write()
            .expect("fanout lock poisoned")
            .push(Subscriber { filter, sink });
    }

    /// Number of attached subscribers.
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.read().expect("fanout lock poisoned").len()
    }
}

impl EventSink for FanoutSink {
    fn publish(&self, event: RegistryEvent) {
        let subscribers = self.subscribers.read().expect("fanout lock poisoned");
        for subscriber in subscribers.iter() {
            if subscriber.filter.matches(&event) {
                debug!(event = %event.id, kind = %event.kind, "routing event");
                subscriber.sink.publish(event.clone());
            }
        }
    }
}
