use crate::sbom_generation::domain::{LicenseChoice, PackageDescriptor};

/// LicenseResolver port for deriving license information
///
/// This port abstracts how the license choice of a component is built
/// from its raw package descriptor.
pub trait LicenseResolver {
    /// Builds the license choice for a package
    ///
    /// # Arguments
    /// * `descriptor` - The whole raw package descriptor
    /// * `include_license_text` - Whether license text should be attached
    ///
    /// # Returns
    /// The license choice, or `None` if the package declares no license
    fn resolve(
        &self,
        descriptor: &PackageDescriptor,
        include_license_text: bool,
    ) -> Option<LicenseChoice>;
}
