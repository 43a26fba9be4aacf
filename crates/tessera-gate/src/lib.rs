//! Access gate for the Tessera registry.
//!
//! Every mutating registry operation passes through an [`AccessGate`]
//! before any input is examined or any state is touched. The gate answers
//! one question, whether the calling identity holds the required
//! capability, and a failed check aborts the whole operation with no
//! partial effects.
//!
//! # Quick Start
//!
//! ```rust
//! use tessera_gate::{AccessGate, GrantTable};
//! use tessera_types::{ActorId, Capability};
//!
//! let admin = ActorId::ephemeral();
//! let gate = GrantTable::with_administrator(admin.clone());
//! assert!(gate.require(&admin, Capability::Administrator).is_ok());
//! ```

pub mod config;
pub mod error;
pub mod gate;

pub use config::GateConfig;
pub use error::GateError;
pub use gate::{AccessGate, GrantTable};
