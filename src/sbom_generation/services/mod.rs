mod integrity_hash_resolver;
mod npm_external_reference_resolver;
mod npm_license_resolver;

pub use integrity_hash_resolver::IntegrityHashResolver;
pub use npm_external_reference_resolver::NpmExternalReferenceResolver;
pub use npm_license_resolver::NpmLicenseResolver;
