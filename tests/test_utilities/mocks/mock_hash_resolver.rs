use npm_sbom_component::prelude::*;

/// Mock HashResolver for testing
pub struct MockHashResolver {
    pub hashes: Option<HashList>,
}

impl MockHashResolver {
    pub fn new() -> Self {
        Self { hashes: None }
    }

    pub fn with_hash(mut self, alg: HashAlgorithm, content: &str) -> Self {
        let mut hashes = self
            .hashes
            .take()
            .map(|list| list.hashes().to_vec())
            .unwrap_or_default();
        hashes.push(Hash::new(alg, content.to_string()));
        self.hashes = Some(HashList::new(hashes));
        self
    }
}

impl Default for MockHashResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl HashResolver for MockHashResolver {
    fn resolve(&self, _descriptor: &PackageDescriptor) -> Option<HashList> {
        self.hashes.clone()
    }
}
