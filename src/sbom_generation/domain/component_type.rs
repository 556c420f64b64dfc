use serde::{Deserialize, Serialize};

/// CycloneDX component classification supported for npm packages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComponentType {
    /// Reusable code consumed by an application (default)
    #[default]
    Library,
    /// A package whose author describes it as a framework
    Framework,
}

impl ComponentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ComponentType::Library => "library",
            ComponentType::Framework => "framework",
        }
    }
}

impl std::str::FromStr for ComponentType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "library" => Ok(ComponentType::Library),
            "framework" => Ok(ComponentType::Framework),
            _ => Err(format!(
                "Invalid component type: {}. Please specify 'library' or 'framework'",
                s
            )),
        }
    }
}

impl std::fmt::Display for ComponentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
