use tessera_types::{Rarity, TraitSpec};

/// Input for creating an attribute: everything the registry persists in
/// the one atomic creation step.
#[derive(Clone, Debug)]
pub struct AttributeDraft {
    /// Display name of the visual layer.
    pub name: String,
    /// Traits to seed, in the order they receive IDs 1, 2, ...
    pub traits: Vec<TraitSpec>,
    /// Initial content identifier of the asset bundle.
    pub cid: String,
    /// Generation script reference capable of combining the attribute
    /// set as of this creation.
    pub script: String,
}

impl AttributeDraft {
    pub fn new(
        name: impl Into<String>,
        cid: impl Into<String>,
        script: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            traits: Vec::new(),
            cid: cid.into(),
            script: script.into(),
        }
    }

    /// Append one trait to the seed list.
    pub fn with_trait(mut self, name: impl Into<String>, rarity: Rarity) -> Self {
        self.traits.push(TraitSpec::new(name, rarity));
        self
    }

    /// Append several traits to the seed list.
    pub fn with_traits(mut self, specs: impl IntoIterator<Item = TraitSpec>) -> Self {
        self.traits.extend(specs);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_collects_traits_in_order() {
        let draft = AttributeDraft::new("Background", "cid", "generator-v1")
            .with_trait("Forest", Rarity::Common)
            .with_trait("Void", Rarity::Legendary);
        assert_eq!(draft.traits.len(), 2);
        assert_eq!(draft.traits[0].name, "Forest");
        assert_eq!(draft.traits[1].rarity, Rarity::Legendary);
    }
}
