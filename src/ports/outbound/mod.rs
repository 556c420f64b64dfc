/// Outbound ports (Driven ports) - collaborator interfaces
///
/// These ports define the interfaces the application core uses to build
/// the nested parts of a component and to render finished records.
pub mod external_reference_resolver;
pub mod formatter;
pub mod hash_resolver;
pub mod license_resolver;

pub use external_reference_resolver::ExternalReferenceResolver;
pub use formatter::ComponentFormatter;
pub use hash_resolver::HashResolver;
pub use license_resolver::LicenseResolver;
