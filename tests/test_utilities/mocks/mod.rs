/// Mock implementations for testing
mod mock_external_reference_resolver;
mod mock_hash_resolver;
mod mock_license_resolver;

pub use mock_external_reference_resolver::MockExternalReferenceResolver;
pub use mock_hash_resolver::MockHashResolver;
pub use mock_license_resolver::MockLicenseResolver;
