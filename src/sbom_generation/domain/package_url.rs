use crate::shared::error::SbomError;
use crate::shared::Result;
use std::collections::BTreeMap;

/// Package URL (purl) identifying a package within an ecosystem
///
/// Renders as `pkg:type/[namespace/]name[@version][?qualifiers][#subpath]`.
/// Every segment is strictly percent-encoded: only unreserved characters
/// (`A-Z a-z 0-9 - . _ ~`) are kept, so an npm scope `@acme` is written as
/// `%40acme`. Qualifiers are emitted sorted by key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageUrl {
    ty: String,
    namespace: Option<String>,
    name: String,
    version: Option<String>,
    qualifiers: BTreeMap<String, String>,
    subpath: Option<String>,
}

impl PackageUrl {
    /// Creates a package URL with just a type and a name
    ///
    /// # Errors
    /// Returns an error if the type or name is empty, or the type contains
    /// characters other than ASCII alphanumerics, `.`, `+` and `-`
    pub fn new(ty: &str, name: &str) -> Result<Self> {
        if ty.is_empty() {
            return Err(SbomError::Validation {
                message: "Package URL type must not be empty".to_string(),
            }
            .into());
        }
        if !ty
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '.' || c == '+' || c == '-')
        {
            return Err(SbomError::Validation {
                message: format!("Package URL type '{}' contains invalid characters", ty),
            }
            .into());
        }
        if name.is_empty() {
            return Err(SbomError::Validation {
                message: "Package URL name must not be empty".to_string(),
            }
            .into());
        }

        Ok(Self {
            ty: ty.to_lowercase(),
            namespace: None,
            name: name.to_string(),
            version: None,
            qualifiers: BTreeMap::new(),
            subpath: None,
        })
    }

    /// Convenience constructor for the npm ecosystem
    pub fn npm(namespace: Option<&str>, name: &str, version: Option<&str>) -> Result<Self> {
        let mut purl = Self::new("npm", name)?;
        purl.namespace = namespace.filter(|ns| !ns.is_empty()).map(str::to_string);
        purl.version = version.map(str::to_string);
        Ok(purl)
    }

    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        let namespace = namespace.into();
        self.namespace = (!namespace.is_empty()).then_some(namespace);
        self
    }

    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    /// Adds a qualifier; empty values are dropped
    pub fn with_qualifier(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        let value = value.into();
        if !value.is_empty() {
            self.qualifiers.insert(key.into().to_lowercase(), value);
        }
        self
    }

    pub fn with_subpath(mut self, subpath: impl Into<String>) -> Self {
        let subpath = subpath.into();
        self.subpath = (!subpath.is_empty()).then_some(subpath);
        self
    }

    pub fn ty(&self) -> &str {
        &self.ty
    }

    pub fn namespace(&self) -> Option<&str> {
        self.namespace.as_deref()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    pub fn qualifiers(&self) -> &BTreeMap<String, String> {
        &self.qualifiers
    }

    pub fn subpath(&self) -> Option<&str> {
        self.subpath.as_deref()
    }
}

/// Encodes each `/`-separated segment, skipping empty and dot segments
fn encode_path(path: &str) -> String {
    path.split('/')
        .filter(|segment| !segment.is_empty() && *segment != "." && *segment != "..")
        .map(|segment| urlencoding::encode(segment).into_owned())
        .collect::<Vec<_>>()
        .join("/")
}

impl std::fmt::Display for PackageUrl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "pkg:{}/", self.ty)?;

        if let Some(namespace) = &self.namespace {
            let encoded = encode_path(namespace);
            if !encoded.is_empty() {
                write!(f, "{}/", encoded)?;
            }
        }

        write!(f, "{}", urlencoding::encode(&self.name))?;

        if let Some(version) = &self.version {
            write!(f, "@{}", urlencoding::encode(version))?;
        }

        if !self.qualifiers.is_empty() {
            let query = self
                .qualifiers
                .iter()
                .map(|(key, value)| format!("{}={}", key, urlencoding::encode(value)))
                .collect::<Vec<_>>()
                .join("&");
            write!(f, "?{}", query)?;
        }

        if let Some(subpath) = &self.subpath {
            let encoded = encode_path(subpath);
            if !encoded.is_empty() {
                write!(f, "#{}", encoded)?;
            }
        }

        Ok(())
    }
}
