use crate::ports::outbound::ExternalReferenceResolver;
use crate::sbom_generation::domain::{
    ExternalReference, ExternalReferenceList, ExternalReferenceType, PackageDescriptor,
};

/// NpmExternalReferenceResolver maps `homepage`, `bugs` and `repository`
/// onto website, issue-tracker and vcs references
#[derive(Debug, Default, Clone, Copy)]
pub struct NpmExternalReferenceResolver;

impl NpmExternalReferenceResolver {
    pub fn new() -> Self {
        Self
    }
}

impl ExternalReferenceResolver for NpmExternalReferenceResolver {
    fn resolve(&self, descriptor: &PackageDescriptor) -> Option<ExternalReferenceList> {
        let candidates = [
            (ExternalReferenceType::Website, descriptor.homepage.as_deref()),
            (
                ExternalReferenceType::IssueTracker,
                descriptor.bugs.as_ref().and_then(|b| b.url()),
            ),
            (
                ExternalReferenceType::Vcs,
                descriptor.repository.as_ref().and_then(|r| r.url()),
            ),
        ];

        let references: Vec<ExternalReference> = candidates
            .into_iter()
            .filter_map(|(ref_type, url)| {
                let url = url.map(str::trim).filter(|u| !u.is_empty())?;
                Some(ExternalReference::new(ref_type, url.to_string()))
            })
            .collect();

        if references.is_empty() {
            None
        } else {
            Some(ExternalReferenceList::new(references))
        }
    }
}
