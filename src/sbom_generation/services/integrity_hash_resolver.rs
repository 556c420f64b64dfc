use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::ports::outbound::HashResolver;
use crate::sbom_generation::domain::{Hash, HashAlgorithm, HashList, PackageDescriptor};

/// IntegrityHashResolver turns npm's `_integrity` / `_shasum` into hashes
///
/// `_integrity` holds one or more Subresource Integrity entries
/// (`sha512-<base64>`) separated by whitespace. Digests are re-encoded as hex.
/// `_shasum` is only consulted when no integrity entry could be used.
#[derive(Debug, Default, Clone, Copy)]
pub struct IntegrityHashResolver;

impl IntegrityHashResolver {
    pub fn new() -> Self {
        Self
    }

    fn parse_integrity(integrity: &str) -> Vec<Hash> {
        integrity
            .split_whitespace()
            .filter_map(Self::parse_entry)
            .collect()
    }

    fn parse_entry(entry: &str) -> Option<Hash> {
        // SRI options follow '?' and carry no digest data
        let entry = entry.split('?').next().unwrap_or_default();

        let Some((alg, digest)) = entry.split_once('-') else {
            tracing::warn!(entry, "Skipping malformed integrity entry");
            return None;
        };

        let Some(alg) = HashAlgorithm::from_sri(alg) else {
            tracing::warn!(algorithm = alg, "Skipping unsupported integrity algorithm");
            return None;
        };

        match STANDARD.decode(digest) {
            Ok(bytes) if bytes.len() == alg.digest_len() => {
                Some(Hash::new(alg, hex::encode(bytes)))
            }
            Ok(bytes) => {
                tracing::warn!(
                    algorithm = %alg,
                    expected = alg.digest_len(),
                    actual = bytes.len(),
                    "Skipping integrity entry with unexpected digest length"
                );
                None
            }
            Err(e) => {
                tracing::warn!(algorithm = %alg, error = %e, "Skipping undecodable integrity entry");
                None
            }
        }
    }

    fn parse_shasum(shasum: &str) -> Option<Hash> {
        let shasum = shasum.trim();
        let expected = HashAlgorithm::Sha1.digest_len() * 2;

        if shasum.len() != expected || !shasum.chars().all(|c| c.is_ascii_hexdigit()) {
            tracing::warn!(shasum, "Ignoring malformed _shasum");
            return None;
        }

        Some(Hash::new(HashAlgorithm::Sha1, shasum.to_lowercase()))
    }
}

impl HashResolver for IntegrityHashResolver {
    fn resolve(&self, descriptor: &PackageDescriptor) -> Option<HashList> {
        let mut hashes = descriptor
            .integrity
            .as_deref()
            .map(Self::parse_integrity)
            .unwrap_or_default();

        if hashes.is_empty() {
            if let Some(hash) = descriptor.shasum.as_deref().and_then(Self::parse_shasum) {
                hashes.push(hash);
            }
        }

        if hashes.is_empty() {
            None
        } else {
            Some(HashList::new(hashes))
        }
    }
}
