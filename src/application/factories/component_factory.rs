use crate::config::ComponentConfig;
use crate::ports::outbound::{ExternalReferenceResolver, HashResolver, LicenseResolver};
use crate::sbom_generation::domain::{ComponentParts, ComponentRecord, PackageDescriptor};
use crate::sbom_generation::policies::IdentifierPolicy;
use crate::sbom_generation::services::{
    IntegrityHashResolver, NpmExternalReferenceResolver, NpmLicenseResolver,
};
use crate::shared::Result;

/// ComponentFactory - builds component records from package descriptors
///
/// The factory resolves the nested structures through its injected ports and
/// hands them to the domain for derivation.
///
/// # Type Parameters
/// * `L` - LicenseResolver implementation
/// * `H` - HashResolver implementation
/// * `E` - ExternalReferenceResolver implementation
pub struct ComponentFactory<L, H, E> {
    license_resolver: L,
    hash_resolver: H,
    external_reference_resolver: E,
    include_license_text: bool,
    identifier_policy: IdentifierPolicy,
}

impl ComponentFactory<NpmLicenseResolver, IntegrityHashResolver, NpmExternalReferenceResolver> {
    /// Creates a factory wired with the default npm resolvers
    pub fn npm() -> Self {
        Self::new(
            NpmLicenseResolver::new(),
            IntegrityHashResolver::new(),
            NpmExternalReferenceResolver::new(),
        )
    }
}

impl<L, H, E> ComponentFactory<L, H, E>
where
    L: LicenseResolver,
    H: HashResolver,
    E: ExternalReferenceResolver,
{
    /// Creates a new ComponentFactory with injected resolvers
    ///
    /// License text is included and the identifier policy is permissive
    /// until configured otherwise.
    pub fn new(license_resolver: L, hash_resolver: H, external_reference_resolver: E) -> Self {
        Self {
            license_resolver,
            hash_resolver,
            external_reference_resolver,
            include_license_text: true,
            identifier_policy: IdentifierPolicy::default(),
        }
    }

    pub fn with_include_license_text(mut self, include_license_text: bool) -> Self {
        self.include_license_text = include_license_text;
        self
    }

    pub fn with_identifier_policy(mut self, identifier_policy: IdentifierPolicy) -> Self {
        self.identifier_policy = identifier_policy;
        self
    }

    /// Applies a parsed configuration
    ///
    /// # Errors
    /// Returns a `ConfigParseError` when the configured identifier policy is unknown
    pub fn with_config(self, config: &ComponentConfig) -> Result<Self> {
        let identifier_policy = config.identifier_policy()?;
        Ok(self
            .with_include_license_text(config.include_license_text())
            .with_identifier_policy(identifier_policy))
    }

    pub fn include_license_text(&self) -> bool {
        self.include_license_text
    }

    pub fn identifier_policy(&self) -> IdentifierPolicy {
        self.identifier_policy
    }

    pub fn license_resolver(&self) -> &L {
        &self.license_resolver
    }

    pub fn hash_resolver(&self) -> &H {
        &self.hash_resolver
    }

    pub fn external_reference_resolver(&self) -> &E {
        &self.external_reference_resolver
    }

    /// Builds a component record
    ///
    /// # Arguments
    /// * `descriptor` - The package descriptor, or `None` for an empty record
    ///
    /// # Errors
    /// Only under `IdentifierPolicy::Strict`, see `ComponentRecord::derive`
    pub fn build(&self, descriptor: Option<&PackageDescriptor>) -> Result<ComponentRecord> {
        let Some(descriptor) = descriptor else {
            tracing::debug!("No package descriptor supplied; returning empty component record");
            return Ok(ComponentRecord::new());
        };

        let parts = ComponentParts {
            licenses: self
                .license_resolver
                .resolve(descriptor, self.include_license_text),
            hashes: self.hash_resolver.resolve(descriptor),
            external_references: self.external_reference_resolver.resolve(descriptor),
        };

        ComponentRecord::derive(descriptor, parts, self.identifier_policy)
    }
}

impl ComponentRecord {
    /// Builds a record with the default npm resolvers and permissive policy
    ///
    /// Never fails: a missing descriptor yields an empty record, a missing
    /// name leaves the identifier unset.
    pub fn from_descriptor(
        descriptor: Option<&PackageDescriptor>,
        include_license_text: bool,
    ) -> Self {
        let factory = ComponentFactory::npm()
            .with_include_license_text(include_license_text)
            .with_identifier_policy(IdentifierPolicy::Permissive);

        match factory.build(descriptor) {
            Ok(record) => record,
            Err(e) => {
                tracing::warn!(error = %e, "Permissive component build failed; returning empty record");
                ComponentRecord::new()
            }
        }
    }
}
