//! Foundation types for the Tessera registry.
//!
//! This crate provides the identity and catalog types used throughout the
//! Tessera system. Every other Tessera crate depends on `tessera-types`.
//!
//! # Key Types
//!
//! - [`ActorId`] — Persistent caller identity derived from key or seed material
//! - [`Capability`] — Closed set of grants checked by the access gate
//! - [`AttributeId`] / [`Attribute`] — A named visual layer of the artwork
//! - [`TraitId`] / [`Trait`] — One concrete option within an attribute
//! - [`Rarity`] — Categorical scarcity tier for a trait
//! - [`Cid`] — Fixed-length content identifier for an asset bundle
//! - [`ScriptRef`] — Opaque versioned reference to the generation recipe

pub mod actor;
pub mod attribute;
pub mod capability;
pub mod cid;
pub mod error;
pub mod script;
pub mod trait_def;

pub use actor::{ActorId, ActorMaterial};
pub use attribute::{Attribute, AttributeId};
pub use capability::Capability;
pub use cid::{Cid, CID_V0_LEN};
pub use error::TypeError;
pub use script::ScriptRef;
pub use trait_def::{Rarity, Trait, TraitId, TraitSpec};
