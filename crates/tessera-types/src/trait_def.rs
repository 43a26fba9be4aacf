use std::fmt;

use serde::{Deserialize, Serialize};

use crate::attribute::AttributeId;

/// Identifier of a trait, scoped to its attribute.
///
/// Trait IDs start at 1 (not 0) and are strictly sequential within an
/// attribute: after any successful mutation the ID set is exactly
/// `{1..=count}`, with no gaps and no reuse.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct TraitId(u32);

impl TraitId {
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    /// The raw numeric ID.
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl From<u32> for TraitId {
    fn from(raw: u32) -> Self {
        Self(raw)
    }
}

impl fmt::Display for TraitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Categorical scarcity tier of a trait.
///
/// Purely a classification; no draw probability is encoded here. Rarity
/// distributions belong to the generation pipeline, not the registry.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum Rarity {
    Common,
    Uncommon,
    Rare,
    Epic,
    Legendary,
}

impl Rarity {
    /// Every tier, from most to least common.
    pub const ALL: [Rarity; 5] = [
        Rarity::Common,
        Rarity::Uncommon,
        Rarity::Rare,
        Rarity::Epic,
        Rarity::Legendary,
    ];

    /// Scarcity rank from 0 (most common) to 4 (most scarce).
    pub fn rank(self) -> u8 {
        match self {
            Self::Common => 0,
            Self::Uncommon => 1,
            Self::Rare => 2,
            Self::Epic => 3,
            Self::Legendary => 4,
        }
    }
}

impl fmt::Display for Rarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Common => "Common",
            Self::Uncommon => "Uncommon",
            Self::Rare => "Rare",
            Self::Epic => "Epic",
            Self::Legendary => "Legendary",
        };
        write!(f, "{s}")
    }
}

/// One concrete option within an attribute (e.g. "Background: Forest").
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trait {
    pub attribute: AttributeId,
    pub id: TraitId,
    pub name: String,
    pub rarity: Rarity,
}

/// Input shape for adding a trait: the registry computes the ID.
///
/// Pairing name and rarity in one value makes mismatched parallel input
/// lists unrepresentable.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraitSpec {
    pub name: String,
    pub rarity: Rarity,
}

impl TraitSpec {
    pub fn new(name: impl Into<String>, rarity: Rarity) -> Self {
        Self {
            name: name.into(),
            rarity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rank_orders_tiers_by_scarcity() {
        let ranks: Vec<u8> = Rarity::ALL.iter().map(|r| r.rank()).collect();
        assert_eq!(ranks, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn rarity_display() {
        assert_eq!(Rarity::Common.to_string(), "Common");
        assert_eq!(Rarity::Legendary.to_string(), "Legendary");
    }

    #[test]
    fn trait_ids_order_sequentially() {
        assert!(TraitId::new(1) < TraitId::new(2));
    }

    #[test]
    fn serde_roundtrip() {
        let t = Trait {
            attribute: AttributeId::new(0),
            id: TraitId::new(1),
            name: "Forest".into(),
            rarity: Rarity::Rare,
        };
        let json = serde_json::to_string(&t).unwrap();
        let parsed: Trait = serde_json::from_str(&json).unwrap();
        assert_eq!(t, parsed);
    }
}
