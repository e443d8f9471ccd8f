//! Seed digest
//!
//! SHA256 over the canonical JSON serialization of the seed, so imports can
//! be correlated with their source file in logs.

use crate::seed::format::SeedV1;
use sha2::{Digest, Sha256};

/// Compute the digest of a parsed seed
pub fn compute_seed_digest(seed: &SeedV1) -> String {
    let json = serde_json::to_string(seed).unwrap_or_default();
    let mut hasher = Sha256::new();
    hasher.update(json.as_bytes());
    hex::encode(hasher.finalize())
}
