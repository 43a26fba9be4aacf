use std::collections::BTreeMap;

use tessera_types::{AttributeId, Cid, Rarity};

use crate::error::RegistryError;
use crate::traits::RegistryReader;

/// Per-attribute summary row in the catalog.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AttributeSummary {
    pub id: AttributeId,
    pub name: String,
    pub trait_count: u32,
    /// How many traits sit in each rarity tier.
    pub rarities: BTreeMap<Rarity, u32>,
    pub current_cid: Cid,
    /// Number of entries in the CID history.
    pub revision_count: u32,
}

/// Full collection catalog reconstructed from the read side.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CatalogProjection {
    pub attributes: Vec<AttributeSummary>,
    pub script_count: u32,
}

/// One row of the pin manifest: the asset bundle an off-chain pinning
/// collaborator must keep available for an attribute.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PinEntry {
    pub attribute: AttributeId,
    pub cid: Cid,
}

/// The authoritative CID per attribute, in attribute order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PinManifest {
    pub entries: Vec<PinEntry>,
}

/// Deterministic projection builders.
pub struct ProjectionBuilder;

impl ProjectionBuilder {
    pub fn catalog<R: RegistryReader>(reader: &R) -> Result<CatalogProjection, RegistryError> {
        let attributes = reader.attributes()?;
        let mut summaries = Vec::with_capacity(attributes.len());

        for attribute in attributes {
            let traits = reader.traits_of(attribute.id)?;
            let mut rarities = BTreeMap::new();
            for t in &traits {
                *rarities.entry(t.rarity).or_insert(0u32) += 1;
            }

            summaries.push(AttributeSummary {
                id: attribute.id,
                name: attribute.name,
                trait_count: traits.len() as u32,
                rarities,
                current_cid: reader.current_cid(attribute.id)?,
                revision_count: reader.cid_history(attribute.id)?.len() as u32,
            });
        }

        Ok(CatalogProjection {
            attributes: summaries,
            script_count: reader.script_count()?,
        })
    }

    pub fn pin_manifest<R: RegistryReader>(reader: &R) -> Result<PinManifest, RegistryError> {
        let attributes = reader.attributes()?;
        let mut entries = Vec::with_capacity(attributes.len());
        for attribute in attributes {
            entries.push(PinEntry {
                attribute: attribute.id,
                cid: reader.current_cid(attribute.id)?,
            });
        }
        Ok(PinManifest { entries })
    }
}
