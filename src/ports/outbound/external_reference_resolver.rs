use crate::sbom_generation::domain::{ExternalReferenceList, PackageDescriptor};

/// ExternalReferenceResolver port for deriving links to external resources
/// (website, issue tracker, version control)
pub trait ExternalReferenceResolver {
    /// Builds the external reference list for a package
    ///
    /// # Returns
    /// The reference list, or `None` if the package declares no links
    fn resolve(&self, descriptor: &PackageDescriptor) -> Option<ExternalReferenceList>;
}
