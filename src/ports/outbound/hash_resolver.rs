use crate::sbom_generation::domain::{HashList, PackageDescriptor};

/// HashResolver port for deriving artifact digests
pub trait HashResolver {
    /// Builds the hash list for a package
    ///
    /// # Returns
    /// The hash list, or `None` if no usable digest is recorded
    fn resolve(&self, descriptor: &PackageDescriptor) -> Option<HashList>;
}
