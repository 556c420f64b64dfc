/// PackageName value object splitting an npm package name into scope and name
///
/// Supported conventions:
/// - `@scope/name` → namespace `@scope`, name `name`
/// - `@scope/a/b` → namespace `@scope`, name `a/b` (split at the first `/`)
/// - anything else → no namespace, name is the full input
///
/// Parsing never fails; names that do not match the scoped form degrade to
/// an unscoped name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PackageName {
    namespace: Option<String>,
    name: String,
}

impl PackageName {
    pub fn parse(raw: &str) -> Self {
        match Self::split_scoped(raw) {
            Some((scope, name)) => Self {
                namespace: Some(format!("@{}", scope)),
                name: name.to_string(),
            },
            None => Self {
                namespace: None,
                name: raw.to_string(),
            },
        }
    }

    /// Splits `@scope/name` at the first `/`; both segments must be non-empty
    fn split_scoped(raw: &str) -> Option<(&str, &str)> {
        let rest = raw.strip_prefix('@')?;
        let (scope, name) = rest.split_once('/')?;
        if scope.is_empty() || name.is_empty() {
            return None;
        }
        Some((scope, name))
    }

    /// Namespace including the leading `@`, if the name is scoped
    pub fn namespace(&self) -> Option<&str> {
        self.namespace.as_deref()
    }

    /// Base name with the namespace stripped
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_scoped(&self) -> bool {
        self.namespace.is_some()
    }

    pub fn into_parts(self) -> (Option<String>, String) {
        (self.namespace, self.name)
    }
}

impl std::fmt::Display for PackageName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.namespace {
            Some(namespace) => write!(f, "{}/{}", namespace, self.name),
            None => write!(f, "{}", self.name),
        }
    }
}
