use npm_sbom_component::prelude::*;

/// Mock ExternalReferenceResolver for testing
pub struct MockExternalReferenceResolver {
    pub references: Vec<ExternalReference>,
}

impl MockExternalReferenceResolver {
    pub fn new() -> Self {
        Self {
            references: Vec::new(),
        }
    }

    pub fn with_reference(mut self, ref_type: ExternalReferenceType, url: &str) -> Self {
        self.references
            .push(ExternalReference::new(ref_type, url.to_string()));
        self
    }
}

impl Default for MockExternalReferenceResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl ExternalReferenceResolver for MockExternalReferenceResolver {
    fn resolve(&self, _descriptor: &PackageDescriptor) -> Option<ExternalReferenceList> {
        if self.references.is_empty() {
            None
        } else {
            Some(ExternalReferenceList::new(self.references.clone()))
        }
    }
}
