use serde::Deserialize;

/// How to treat descriptors whose name or version cannot produce a purl
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdentifierPolicy {
    /// Build the record anyway; a missing name leaves purl and bom-ref unset,
    /// a missing version yields a versionless purl (default)
    #[default]
    Permissive,
    /// Reject descriptors without a usable name or version
    Strict,
}

impl IdentifierPolicy {
    pub fn is_strict(&self) -> bool {
        matches!(self, IdentifierPolicy::Strict)
    }
}

impl std::str::FromStr for IdentifierPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "permissive" => Ok(IdentifierPolicy::Permissive),
            "strict" => Ok(IdentifierPolicy::Strict),
            _ => Err(format!(
                "Invalid identifier policy: {}. Please specify 'permissive' or 'strict'",
                s
            )),
        }
    }
}

impl std::fmt::Display for IdentifierPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IdentifierPolicy::Permissive => write!(f, "permissive"),
            IdentifierPolicy::Strict => write!(f, "strict"),
        }
    }
}
