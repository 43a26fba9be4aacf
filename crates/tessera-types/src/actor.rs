use std::fmt;
use std::hash::Hash;

use serde::{Deserialize, Serialize};

use crate::error::TypeError;

/// Material used to derive an [`ActorId`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActorMaterial {
    /// An ed25519-style public key (32 bytes) held by the caller.
    PublicKey([u8; 32]),
    /// An opaque 32-byte seed (e.g. a platform account hash).
    Seed([u8; 32]),
    /// Delegated identity derived from a parent actor and a label.
    Delegated { parent: [u8; 32], label: String },
}

/// Persistent identity of a caller interacting with the registry.
///
/// An `ActorId` is derived deterministically from [`ActorMaterial`] using
/// BLAKE3. The same material always produces the same identity. The
/// registry only ever compares actors for equality; which capabilities an
/// actor holds is the access gate's concern.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ActorId {
    hash: [u8; 32],
}

impl ActorId {
    /// Derive an `ActorId` from identity material.
    pub fn derive(material: &ActorMaterial) -> Self {
        let mut hasher = blake3::Hasher::new();
        hasher.update(b"tessera-actor-v1:");
        match material {
            ActorMaterial::PublicKey(pk) => {
                hasher.update(b"pubkey:");
                hasher.update(pk);
            }
            ActorMaterial::Seed(seed) => {
                hasher.update(b"seed:");
                hasher.update(seed);
            }
            ActorMaterial::Delegated { parent, label } => {
                hasher.update(b"delegated:");
                hasher.update(parent);
                hasher.update(b":");
                hasher.update(label.as_bytes());
            }
        }
        Self {
            hash: *hasher.finalize().as_bytes(),
        }
    }

    /// Create an ephemeral (random) ActorId for tests and demos.
    pub fn ephemeral() -> Self {
        let mut bytes = [0u8; 32];
        rand::Rng::fill(&mut rand::thread_rng(), &mut bytes);
        Self::derive(&ActorMaterial::Seed(bytes))
    }

    /// The raw 32-byte hash.
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.hash
    }

    /// Full hex-encoded string.
    pub fn to_hex(&self) -> String {
        hex::encode(self.hash)
    }

    /// Short identifier (first 8 hex characters).
    pub fn short_id(&self) -> String {
        format!("act:{}", hex::encode(&self.hash[..4]))
    }

    /// Parse from a hex string (64 hex characters).
    pub fn from_hex(s: &str) -> Result<Self, TypeError> {
        let s = s.strip_prefix("act:").unwrap_or(s);
        let bytes = hex::decode(s).map_err(|e| TypeError::InvalidHex(e.to_string()))?;
        if bytes.len() != 32 {
            return Err(TypeError::InvalidLength {
                expected: 32,
                actual: bytes.len(),
            });
        }
        let mut arr = [0u8; 32];
        arr.copy_from_slice(&bytes);
        Ok(Self { hash: arr })
    }

    /// Create from a raw 32-byte hash. Use `derive()` for production code.
    pub fn from_raw(hash: [u8; 32]) -> Self {
        Self { hash }
    }
}

impl fmt::Debug for ActorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ActorId({})", self.short_id())
    }
}

impl fmt::Display for ActorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.short_id())
    }
}
