//! ComponentRecord: one CycloneDX component derived from an npm package
//!
//! Derived fields (`purl`, `bom_ref`) are computed once when the record is
//! built. Mutators never recompute them; `recompute_identifier` is the only
//! explicit re-derivation.

use super::{
    ComponentType, ExternalReferenceList, HashList, LicenseChoice, PackageDescriptor,
    PackageName, PackageUrl,
};
use crate::sbom_generation::policies::{ComponentTypePolicy, IdentifierPolicy};
use crate::shared::error::SbomError;
use crate::shared::Result;
use serde::Serialize;
use serde_json::{json, Map, Value};

/// Nested structures built by the resolvers, each from the whole descriptor
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ComponentParts {
    pub licenses: Option<LicenseChoice>,
    pub hashes: Option<HashList>,
    pub external_references: Option<ExternalReferenceList>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ComponentRecord {
    component_type: Option<ComponentType>,
    bom_ref: Option<String>,
    group: Option<String>,
    name: Option<String>,
    version: Option<String>,
    description: Option<String>,
    licenses: Option<LicenseChoice>,
    hashes: Option<HashList>,
    external_references: Option<ExternalReferenceList>,
    purl: Option<String>,
}

/// CycloneDX JSON component shape; absent fields are omitted
#[derive(Debug, Serialize)]
struct ComponentJson<'a> {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    component_type: Option<ComponentType>,
    #[serde(rename = "bom-ref", skip_serializing_if = "Option::is_none")]
    bom_ref: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    group: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    version: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    hashes: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    licenses: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    purl: Option<&'a str>,
    #[serde(
        rename = "externalReferences",
        skip_serializing_if = "Option::is_none"
    )]
    external_references: Option<Value>,
}

impl ComponentRecord {
    /// Creates an empty record; every accessor returns `None`
    pub fn new() -> Self {
        Self::default()
    }

    /// Derives a record from a descriptor and its already-resolved parts
    ///
    /// # Arguments
    /// * `descriptor` - The raw package descriptor
    /// * `parts` - License, hash and external reference structures
    /// * `policy` - How to treat a missing name or version
    ///
    /// # Errors
    /// Only under `IdentifierPolicy::Strict`, when the name is missing or
    /// empty, or the version is missing
    pub fn derive(
        descriptor: &PackageDescriptor,
        parts: ComponentParts,
        policy: IdentifierPolicy,
    ) -> Result<Self> {
        let component_type = ComponentTypePolicy::classify(descriptor.keywords.as_deref());

        let (group, name) = match descriptor.name.as_deref() {
            Some(raw) => {
                let (group, name) = PackageName::parse(raw).into_parts();
                (group, Some(name))
            }
            None => (None, None),
        };

        if policy.is_strict() {
            Self::validate_identity(descriptor, name.as_deref())?;
        }

        let purl = Self::build_identifier(
            group.as_deref(),
            name.as_deref(),
            descriptor.version.as_deref(),
        );
        let bom_ref = purl.clone();

        tracing::debug!(
            name = descriptor.name.as_deref().unwrap_or_default(),
            component_type = component_type.as_str(),
            purl = purl.as_deref().unwrap_or_default(),
            "Derived component record"
        );

        Ok(Self {
            component_type: Some(component_type),
            bom_ref,
            group,
            name,
            version: descriptor.version.clone(),
            description: descriptor.description.clone(),
            licenses: parts.licenses,
            hashes: parts.hashes,
            external_references: parts.external_references,
            purl,
        })
    }

    fn validate_identity(descriptor: &PackageDescriptor, name: Option<&str>) -> Result<()> {
        match name {
            None => {
                return Err(SbomError::MissingField {
                    field: "name".to_string(),
                }
                .into())
            }
            Some(n) if n.trim().is_empty() => {
                return Err(SbomError::InvalidPackageName {
                    name: descriptor.name.clone().unwrap_or_default(),
                    reason: "Package name is empty".to_string(),
                }
                .into())
            }
            Some(_) => {}
        }

        if descriptor.version.is_none() {
            return Err(SbomError::MissingField {
                field: "version".to_string(),
            }
            .into());
        }

        Ok(())
    }

    /// Builds the npm purl; a missing or empty name yields no identifier
    fn build_identifier(
        group: Option<&str>,
        name: Option<&str>,
        version: Option<&str>,
    ) -> Option<String> {
        let Some(name) = name else {
            tracing::warn!("Package descriptor has no name; purl and bom-ref left unset");
            return None;
        };

        if version.is_none() {
            tracing::debug!(name, "Package descriptor has no version; purl is versionless");
        }

        match PackageUrl::npm(group, name, version) {
            Ok(purl) => Some(purl.to_string()),
            Err(e) => {
                tracing::warn!(name, error = %e, "Could not build purl; purl and bom-ref left unset");
                None
            }
        }
    }

    /// Re-derives `purl` from the current group, name and version
    ///
    /// `bom_ref` is left untouched; use `with_bom_ref_from_purl` to re-sync it.
    pub fn recompute_identifier(mut self) -> Self {
        self.purl = Self::build_identifier(
            self.group.as_deref(),
            self.name.as_deref(),
            self.version.as_deref(),
        );
        self
    }

    /// Copies the current `purl` into `bom_ref`
    pub fn with_bom_ref_from_purl(mut self) -> Self {
        self.bom_ref = self.purl.clone();
        self
    }

    pub fn component_type(&self) -> Option<ComponentType> {
        self.component_type
    }

    pub fn bom_ref(&self) -> Option<&str> {
        self.bom_ref.as_deref()
    }

    pub fn group(&self) -> Option<&str> {
        self.group.as_deref()
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn licenses(&self) -> Option<&LicenseChoice> {
        self.licenses.as_ref()
    }

    pub fn hashes(&self) -> Option<&HashList> {
        self.hashes.as_ref()
    }

    pub fn external_references(&self) -> Option<&ExternalReferenceList> {
        self.external_references.as_ref()
    }

    pub fn purl(&self) -> Option<&str> {
        self.purl.as_deref()
    }

    pub fn with_component_type(mut self, component_type: ComponentType) -> Self {
        self.component_type = Some(component_type);
        self
    }

    pub fn with_bom_ref(mut self, bom_ref: impl Into<String>) -> Self {
        self.bom_ref = Some(bom_ref.into());
        self
    }

    pub fn with_group(mut self, group: impl Into<String>) -> Self {
        self.group = Some(group.into());
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_licenses(mut self, licenses: LicenseChoice) -> Self {
        self.licenses = Some(licenses);
        self
    }

    pub fn with_hashes(mut self, hashes: HashList) -> Self {
        self.hashes = Some(hashes);
        self
    }

    pub fn with_external_references(mut self, external_references: ExternalReferenceList) -> Self {
        self.external_references = Some(external_references);
        self
    }

    pub fn with_purl(mut self, purl: impl Into<String>) -> Self {
        self.purl = Some(purl.into());
        self
    }

    /// XML view of the record
    ///
    /// Keys prefixed with `@` are attributes of the component element, the
    /// rest are child elements in document order. `description` is wrapped
    /// as character data and absent nested structures are `null`.
    pub fn to_xml(&self) -> Value {
        let mut xml = Map::new();
        xml.insert(
            "@type".to_string(),
            json!(self.component_type.map(|t| t.as_str())),
        );
        xml.insert("@bom-ref".to_string(), json!(self.bom_ref));
        xml.insert("group".to_string(), json!(self.group));
        xml.insert("name".to_string(), json!(self.name));
        xml.insert("version".to_string(), json!(self.version));
        xml.insert(
            "description".to_string(),
            json!({ "#cdata": self.description }),
        );
        xml.insert(
            "hashes".to_string(),
            self.hashes.as_ref().map_or(Value::Null, HashList::to_xml),
        );
        xml.insert(
            "licenses".to_string(),
            self.licenses.as_ref().map_or(Value::Null, LicenseChoice::to_xml),
        );
        xml.insert("purl".to_string(), json!(self.purl));
        xml.insert(
            "externalReferences".to_string(),
            self.external_references
                .as_ref()
                .map_or(Value::Null, ExternalReferenceList::to_xml),
        );
        Value::Object(xml)
    }

    /// JSON view of the record in CycloneDX component shape
    ///
    /// # Errors
    /// Returns an error if serialization fails
    pub fn to_json(&self) -> Result<Value> {
        let view = ComponentJson {
            component_type: self.component_type,
            bom_ref: self.bom_ref.as_deref(),
            group: self.group.as_deref(),
            name: self.name.as_deref(),
            version: self.version.as_deref(),
            description: self.description.as_deref(),
            hashes: self.hashes.as_ref().map(HashList::to_json),
            licenses: self.licenses.as_ref().map(LicenseChoice::to_json),
            purl: self.purl.as_deref(),
            external_references: self
                .external_references
                .as_ref()
                .map(ExternalReferenceList::to_json),
        };

        serde_json::to_value(view).map_err(Into::into)
    }
}
