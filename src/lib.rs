//! npm-sbom-component - CycloneDX component records for npm packages
//!
//! This library turns an already-parsed npm package descriptor
//! (`package.json` shape) into one normalized CycloneDX component record,
//! following hexagonal architecture and Domain-Driven Design principles.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`sbom_generation`): Component record, value objects, policies and the default npm resolvers
//! - **Application Layer** (`application`): Component and formatter factories
//! - **Ports** (`ports`): Resolver and formatter interfaces
//! - **Adapters** (`adapters`): CycloneDX JSON and XML formatters
//! - **Shared** (`shared`): Common error types
//!
//! # Example
//!
//! ```
//! use npm_sbom_component::prelude::*;
//! use serde_json::json;
//!
//! # fn main() -> Result<()> {
//! let descriptor = PackageDescriptor::from_value(json!({
//!     "name": "@acme/widget",
//!     "version": "1.2.3",
//!     "license": "MIT"
//! }))?;
//!
//! let record = ComponentFactory::npm().build(Some(&descriptor))?;
//! assert_eq!(record.purl(), Some("pkg:npm/%40acme/widget@1.2.3"));
//!
//! let output = FormatterFactory::create(OutputFormat::Json).format(&record)?;
//! println!("{}", output);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod config;
pub mod ports;
pub mod sbom_generation;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::formatters::{
        CycloneDxJsonFormatter, CycloneDxXmlFormatter,
    };
    pub use crate::application::dto::OutputFormat;
    pub use crate::application::factories::{ComponentFactory, FormatterFactory};
    pub use crate::config::ComponentConfig;
    pub use crate::ports::outbound::{
        ComponentFormatter, ExternalReferenceResolver, HashResolver, LicenseResolver,
    };
    pub use crate::sbom_generation::domain::{
        ComponentRecord, ComponentType, ExternalReference, ExternalReferenceList,
        ExternalReferenceType, Hash, HashAlgorithm, HashList, License, LicenseChoice,
        PackageDescriptor, PackageName, PackageUrl,
    };
    pub use crate::sbom_generation::policies::IdentifierPolicy;
    pub use crate::sbom_generation::services::{
        IntegrityHashResolver, NpmExternalReferenceResolver, NpmLicenseResolver,
    };
    pub use crate::shared::error::SbomError;
    pub use crate::shared::Result;
}
