use serde_json::{json, Value};

/// Kinds of external references derived from npm manifests
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExternalReferenceType {
    Website,
    IssueTracker,
    Vcs,
}

impl ExternalReferenceType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExternalReferenceType::Website => "website",
            ExternalReferenceType::IssueTracker => "issue-tracker",
            ExternalReferenceType::Vcs => "vcs",
        }
    }
}

impl std::fmt::Display for ExternalReferenceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExternalReference {
    ref_type: ExternalReferenceType,
    url: String,
}

impl ExternalReference {
    pub fn new(ref_type: ExternalReferenceType, url: String) -> Self {
        Self { ref_type, url }
    }

    pub fn ref_type(&self) -> ExternalReferenceType {
        self.ref_type
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

/// ExternalReferenceList value object
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ExternalReferenceList {
    references: Vec<ExternalReference>,
}

impl ExternalReferenceList {
    pub fn new(references: Vec<ExternalReference>) -> Self {
        Self { references }
    }

    pub fn references(&self) -> &[ExternalReference] {
        &self.references
    }

    pub fn is_empty(&self) -> bool {
        self.references.is_empty()
    }

    pub fn len(&self) -> usize {
        self.references.len()
    }

    pub fn find(&self, ref_type: ExternalReferenceType) -> Option<&ExternalReference> {
        self.references.iter().find(|r| r.ref_type == ref_type)
    }

    /// XML view: `{"reference": [{"@type": "vcs", "url": "..."}]}`
    pub fn to_xml(&self) -> Value {
        let references: Vec<Value> = self
            .references
            .iter()
            .map(|r| json!({ "@type": r.ref_type.as_str(), "url": r.url }))
            .collect();
        json!({ "reference": references })
    }

    /// JSON view: `[{"type": "vcs", "url": "..."}]`
    pub fn to_json(&self) -> Value {
        Value::Array(
            self.references
                .iter()
                .map(|r| json!({ "type": r.ref_type.as_str(), "url": r.url }))
                .collect(),
        )
    }
}
