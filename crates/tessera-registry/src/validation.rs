use tessera_types::AttributeId;

use crate::error::RegistryError;
use crate::traits::RegistryReader;

/// Result of a full-state structural audit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StateReport {
    pub attribute_count: u32,
    pub ids_dense: bool,
    pub traits_sequential: bool,
    pub histories_populated: bool,
    pub scripts_aligned: bool,
    pub violations: Vec<Violation>,
}

impl StateReport {
    /// Returns `true` if all checks passed.
    pub fn is_consistent(&self) -> bool {
        self.violations.is_empty()
    }
}

/// A specific structural violation detected during the audit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Violation {
    /// The attribute the violation was found in, if any.
    pub attribute: Option<AttributeId>,
    pub kind: ViolationKind,
    pub description: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViolationKind {
    /// An attribute record's ID does not equal its table position.
    IdMismatch,
    /// A per-attribute trait-ID sequence has a gap, duplicate, or
    /// out-of-order entry.
    TraitSequenceGap,
    /// A trait record points at a different attribute than the table it
    /// sits in.
    MisattributedTrait,
    /// An attribute has no CID history entry at all.
    EmptyCidHistory,
    /// The generation-script sequence length does not match the
    /// attribute count.
    ScriptCountMismatch,
}

/// Structural invariant auditor.
///
/// The registry enforces every invariant at mutation time; the auditor
/// re-derives them from the read side, as an indexer reconciling an
/// external copy would.
pub struct RegistryAuditor;

impl RegistryAuditor {
    /// Audit the full registry state reachable through `reader`.
    pub fn audit<R: RegistryReader>(reader: &R) -> Result<StateReport, RegistryError> {
        let attributes = reader.attributes()?;
        let mut violations = Vec::new();
        let mut ids_dense = true;
        let mut traits_sequential = true;
        let mut histories_populated = true;
        let mut scripts_aligned = true;

        for (index, attribute) in attributes.iter().enumerate() {
            if attribute.id.index() != index {
                ids_dense = false;
                violations.push(Violation {
                    attribute: Some(attribute.id),
                    kind: ViolationKind::IdMismatch,
                    description: format!(
                        "attribute at position {index} carries id {}",
                        attribute.id
                    ),
                });
            }

            for (position, t) in reader.traits_of(attribute.id)?.iter().enumerate() {
                let expected = position as u32 + 1;
                if t.id.get() != expected {
                    traits_sequential = false;
                    violations.push(Violation {
                        attribute: Some(attribute.id),
                        kind: ViolationKind::TraitSequenceGap,
                        description: format!(
                            "expected trait id {expected}, found {}",
                            t.id
                        ),
                    });
                }
                if t.attribute != attribute.id {
                    traits_sequential = false;
                    violations.push(Violation {
                        attribute: Some(attribute.id),
                        kind: ViolationKind::MisattributedTrait,
                        description: format!(
                            "trait {} belongs to attribute {}",
                            t.id, t.attribute
                        ),
                    });
                }
            }

            if reader.cid_history(attribute.id)?.is_empty() {
                histories_populated = false;
                violations.push(Violation {
                    attribute: Some(attribute.id),
                    kind: ViolationKind::EmptyCidHistory,
                    description: "attribute has no content identifier".into(),
                });
            }
        }

        let script_count = reader.script_count()?;
        if script_count as usize != attributes.len() {
            scripts_aligned = false;
            violations.push(Violation {
                attribute: None,
                kind: ViolationKind::ScriptCountMismatch,
                description: format!(
                    "{script_count} script references for {} attributes",
                    attributes.len()
                ),
            });
        }

        Ok(StateReport {
            attribute_count: attributes.len() as u32,
            ids_dense,
            traits_sequential,
            histories_populated,
            scripts_aligned,
            violations,
        })
    }
}
