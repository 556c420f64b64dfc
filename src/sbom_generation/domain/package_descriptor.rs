//! Raw npm package descriptor
//!
//! The surrounding SBOM tool hands over an already-parsed `package.json`
//! object. Deserialization is deliberately lenient: a malformed field is
//! dropped instead of rejecting the whole descriptor.

use crate::shared::error::SbomError;
use crate::shared::Result;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// A license entry as it appears in `license` or the legacy `licenses` array
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum LicenseField {
    /// `"license": "MIT"`
    Text(String),
    /// `"license": { "type": "MIT", "url": "..." }`
    Object {
        #[serde(rename = "type", default)]
        license_type: Option<String>,
        #[serde(default)]
        url: Option<String>,
    },
}

impl LicenseField {
    /// The license identifier, name or expression carried by this entry
    pub fn value(&self) -> Option<&str> {
        match self {
            LicenseField::Text(text) => Some(text.as_str()),
            LicenseField::Object { license_type, .. } => license_type.as_deref(),
        }
    }

    pub fn url(&self) -> Option<&str> {
        match self {
            LicenseField::Text(_) => None,
            LicenseField::Object { url, .. } => url.as_deref(),
        }
    }
}

/// The `bugs` field: either a bare URL or an object
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum BugsField {
    Url(String),
    Object {
        #[serde(default)]
        url: Option<String>,
        #[serde(default)]
        email: Option<String>,
    },
}

impl BugsField {
    pub fn url(&self) -> Option<&str> {
        match self {
            BugsField::Url(url) => Some(url.as_str()),
            BugsField::Object { url, .. } => url.as_deref(),
        }
    }
}

/// The `repository` field: either a shorthand/URL string or an object
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum RepositoryField {
    Url(String),
    Object {
        #[serde(rename = "type", default)]
        repository_type: Option<String>,
        #[serde(default)]
        url: Option<String>,
        #[serde(default)]
        directory: Option<String>,
    },
}

impl RepositoryField {
    pub fn url(&self) -> Option<&str> {
        match self {
            RepositoryField::Url(url) => Some(url.as_str()),
            RepositoryField::Object { url, .. } => url.as_deref(),
        }
    }
}

/// PackageDescriptor - the raw package manifest a component is built from
///
/// Every field is optional. Only `name` is needed for a meaningful record;
/// the license, hash and reference fields are read by the resolvers.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct PackageDescriptor {
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: Option<String>,

    #[serde(default, deserialize_with = "lenient_string")]
    pub version: Option<String>,

    #[serde(default, deserialize_with = "lenient_string")]
    pub description: Option<String>,

    #[serde(default, deserialize_with = "lenient_keywords")]
    pub keywords: Option<Vec<String>>,

    #[serde(default, deserialize_with = "lenient")]
    pub license: Option<LicenseField>,

    #[serde(default, deserialize_with = "lenient_list")]
    pub licenses: Option<Vec<LicenseField>>,

    /// License text already read by the caller (e.g. from a LICENSE file)
    #[serde(rename = "licenseText", default, deserialize_with = "lenient_string")]
    pub license_text: Option<String>,

    /// Subresource Integrity string(s) recorded by npm
    #[serde(rename = "_integrity", default, deserialize_with = "lenient_string")]
    pub integrity: Option<String>,

    /// Legacy SHA-1 hex digest recorded by npm
    #[serde(rename = "_shasum", default, deserialize_with = "lenient_string")]
    pub shasum: Option<String>,

    #[serde(default, deserialize_with = "lenient_string")]
    pub homepage: Option<String>,

    #[serde(default, deserialize_with = "lenient")]
    pub bugs: Option<BugsField>,

    #[serde(default, deserialize_with = "lenient")]
    pub repository: Option<RepositoryField>,
}

impl PackageDescriptor {
    /// Creates a descriptor with just a name and a version
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            version: Some(version.into()),
            ..Self::default()
        }
    }

    /// Builds a descriptor from an already-parsed JSON value
    ///
    /// # Errors
    /// Returns an error if the value is not a JSON object
    pub fn from_value(value: Value) -> Result<Self> {
        if !value.is_object() {
            return Err(SbomError::DescriptorParseError {
                details: format!("expected a JSON object, found {}", json_kind(&value)),
            }
            .into());
        }

        serde_json::from_value(value).map_err(|e| {
            SbomError::DescriptorParseError {
                details: e.to_string(),
            }
            .into()
        })
    }

    /// Builds a descriptor from `package.json` text
    ///
    /// # Errors
    /// Returns an error if the text is not valid JSON or not a JSON object
    pub fn from_json_str(content: &str) -> Result<Self> {
        let value: Value =
            serde_json::from_str(content).map_err(|e| SbomError::DescriptorParseError {
                details: e.to_string(),
            })?;
        Self::from_value(value)
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.keywords = Some(keywords.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_license(mut self, license: impl Into<String>) -> Self {
        self.license = Some(LicenseField::Text(license.into()));
        self
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Accepts strings and numbers (as text); anything else becomes `None`
fn lenient_string<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) => Some(s),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}

/// Keeps string entries of a keyword array; a comma separated string is split
fn lenient_keywords<'de, D>(deserializer: D) -> std::result::Result<Option<Vec<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Array(items)) => Some(
            items
                .into_iter()
                .filter_map(|item| match item {
                    Value::String(s) => Some(s),
                    _ => None,
                })
                .collect(),
        ),
        Some(Value::String(s)) => Some(
            s.split(',')
                .map(str::trim)
                .filter(|k| !k.is_empty())
                .map(str::to_string)
                .collect(),
        ),
        _ => None,
    })
}

fn lenient<'de, D, T>(deserializer: D) -> std::result::Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| serde_json::from_value(v).ok()))
}

fn lenient_list<'de, D, T>(deserializer: D) -> std::result::Result<Option<Vec<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Array(items)) => Some(
            items
                .into_iter()
                .filter_map(|item| serde_json::from_value(item).ok())
                .collect(),
        ),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_value_full_manifest() {
        let descriptor = PackageDescriptor::from_value(json!({
            "name": "@acme/widget",
            "version": "1.2.3",
            "description": "Widgets",
            "keywords": ["ui", "Framework"],
            "license": "MIT",
            "_integrity": "sha512-AAAA",
            "homepage": "https://acme.dev",
            "bugs": { "url": "https://acme.dev/issues" },
            "repository": { "type": "git", "url": "git+https://github.com/acme/widget.git" }
        }))
        .unwrap();

        assert_eq!(descriptor.name.as_deref(), Some("@acme/widget"));
        assert_eq!(descriptor.version.as_deref(), Some("1.2.3"));
        assert_eq!(descriptor.description.as_deref(), Some("Widgets"));
        assert_eq!(
            descriptor.keywords,
            Some(vec!["ui".to_string(), "Framework".to_string()])
        );
        assert_eq!(descriptor.license, Some(LicenseField::Text("MIT".to_string())));
        assert_eq!(descriptor.integrity.as_deref(), Some("sha512-AAAA"));
        assert_eq!(descriptor.homepage.as_deref(), Some("https://acme.dev"));
        assert_eq!(
            descriptor.bugs.as_ref().and_then(|b| b.url()),
            Some("https://acme.dev/issues")
        );
        assert_eq!(
            descriptor.repository.as_ref().and_then(|r| r.url()),
            Some("git+https://github.com/acme/widget.git")
        );
    }

    #[test]
    fn test_from_value_skips_malformed_keywords() {
        let descriptor = PackageDescriptor::from_value(json!({
            "name": "x",
            "keywords": ["framework", 42, null, { "a": 1 }]
        }))
        .unwrap();

        assert_eq!(descriptor.keywords, Some(vec!["framework".to_string()]));
    }

    #[test]
    fn test_keywords_as_comma_separated_string() {
        let descriptor = PackageDescriptor::from_value(json!({
            "name": "x",
            "keywords": "web, framework"
        }))
        .unwrap();

        assert_eq!(
            descriptor.keywords,
            Some(vec!["web".to_string(), "framework".to_string()])
        );
    }

    #[test]
    fn test_numeric_version_passes_through_as_text() {
        let descriptor = PackageDescriptor::from_value(json!({ "name": "x", "version": 1 })).unwrap();
        assert_eq!(descriptor.version.as_deref(), Some("1"));
    }

    #[test]
    fn test_malformed_license_is_dropped() {
        let descriptor = PackageDescriptor::from_value(json!({
            "name": "x",
            "license": 42,
            "licenses": [{ "type": "MIT", "url": "https://opensource.org/licenses/MIT" }, true]
        }))
        .unwrap();

        assert!(descriptor.license.is_none());
        let licenses = descriptor.licenses.unwrap();
        assert_eq!(licenses.len(), 1);
        assert_eq!(licenses[0].value(), Some("MIT"));
        assert_eq!(licenses[0].url(), Some("https://opensource.org/licenses/MIT"));
    }

    #[test]
    fn test_string_bugs_and_repository() {
        let descriptor = PackageDescriptor::from_value(json!({
            "name": "x",
            "bugs": "https://example.com/bugs",
            "repository": "github:acme/x"
        }))
        .unwrap();

        assert_eq!(
            descriptor.bugs.as_ref().and_then(|b| b.url()),
            Some("https://example.com/bugs")
        );
        assert_eq!(
            descriptor.repository.as_ref().and_then(|r| r.url()),
            Some("github:acme/x")
        );
    }

    #[test]
    fn test_empty_object_is_valid() {
        let descriptor = PackageDescriptor::from_value(json!({})).unwrap();
        assert_eq!(descriptor, PackageDescriptor::default());
    }

    #[test]
    fn test_from_value_rejects_non_object() {
        let result = PackageDescriptor::from_value(json!(["not", "an", "object"]));
        assert!(result.is_err());
        let err = format!("{}", result.unwrap_err());
        assert!(err.contains("Failed to parse package descriptor"));
        assert!(err.contains("an array"));
    }

    #[test]
    fn test_from_json_str_invalid_json() {
        let result = PackageDescriptor::from_json_str("{ not json");
        assert!(result.is_err());
        assert!(format!("{}", result.unwrap_err()).contains("Failed to parse package descriptor"));
    }

    #[test]
    fn test_from_json_str_valid() {
        let descriptor =
            PackageDescriptor::from_json_str(r#"{"name": "lodash", "version": "4.17.21"}"#).unwrap();
        assert_eq!(descriptor, PackageDescriptor::new("lodash", "4.17.21"));
    }

    #[test]
    fn test_builder_helpers() {
        let descriptor = PackageDescriptor::new("express", "4.18.2")
            .with_description("Fast web framework")
            .with_keywords(["web", "framework"])
            .with_license("MIT");

        assert_eq!(descriptor.description.as_deref(), Some("Fast web framework"));
        assert_eq!(descriptor.keywords.as_ref().map(|k| k.len()), Some(2));
        assert_eq!(descriptor.license.as_ref().and_then(|l| l.value()), Some("MIT"));
    }
}
