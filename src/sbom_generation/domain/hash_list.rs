use serde_json::{json, Value};

/// Hash algorithms npm records for published tarballs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HashAlgorithm {
    Sha1,
    Sha256,
    Sha384,
    Sha512,
}

impl HashAlgorithm {
    /// Maps a Subresource Integrity algorithm prefix (`sha512`, ...)
    pub fn from_sri(alg: &str) -> Option<Self> {
        match alg.to_lowercase().as_str() {
            "sha1" => Some(HashAlgorithm::Sha1),
            "sha256" => Some(HashAlgorithm::Sha256),
            "sha384" => Some(HashAlgorithm::Sha384),
            "sha512" => Some(HashAlgorithm::Sha512),
            _ => None,
        }
    }

    /// CycloneDX algorithm name
    pub fn as_str(&self) -> &'static str {
        match self {
            HashAlgorithm::Sha1 => "SHA-1",
            HashAlgorithm::Sha256 => "SHA-256",
            HashAlgorithm::Sha384 => "SHA-384",
            HashAlgorithm::Sha512 => "SHA-512",
        }
    }

    /// Digest length in bytes
    pub fn digest_len(&self) -> usize {
        match self {
            HashAlgorithm::Sha1 => 20,
            HashAlgorithm::Sha256 => 32,
            HashAlgorithm::Sha384 => 48,
            HashAlgorithm::Sha512 => 64,
        }
    }
}

impl std::fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A digest of the package artifact, hex encoded
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hash {
    alg: HashAlgorithm,
    content: String,
}

impl Hash {
    pub fn new(alg: HashAlgorithm, content: String) -> Self {
        Self { alg, content }
    }

    pub fn alg(&self) -> HashAlgorithm {
        self.alg
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}

/// HashList value object holding every digest known for a package
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HashList {
    hashes: Vec<Hash>,
}

impl HashList {
    pub fn new(hashes: Vec<Hash>) -> Self {
        Self { hashes }
    }

    pub fn hashes(&self) -> &[Hash] {
        &self.hashes
    }

    pub fn is_empty(&self) -> bool {
        self.hashes.is_empty()
    }

    pub fn len(&self) -> usize {
        self.hashes.len()
    }

    /// XML view: `{"hash": [{"@alg": "SHA-512", "#text": "<hex>"}]}`
    pub fn to_xml(&self) -> Value {
        let hashes: Vec<Value> = self
            .hashes
            .iter()
            .map(|h| json!({ "@alg": h.alg.as_str(), "#text": h.content }))
            .collect();
        json!({ "hash": hashes })
    }

    /// JSON view: `[{"alg": "SHA-512", "content": "<hex>"}]`
    pub fn to_json(&self) -> Value {
        Value::Array(
            self.hashes
                .iter()
                .map(|h| json!({ "alg": h.alg.as_str(), "content": h.content }))
                .collect(),
        )
    }
}
