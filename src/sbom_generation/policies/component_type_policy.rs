use crate::sbom_generation::domain::ComponentType;

/// Keyword that promotes a package to a framework
const FRAMEWORK_KEYWORD: &str = "framework";

/// ComponentTypePolicy for classifying npm packages
///
/// If the author has described the package as a 'framework' in its
/// keywords, take their word for it; otherwise the package is a 'library'.
pub struct ComponentTypePolicy;

impl ComponentTypePolicy {
    /// Classifies a package from its keyword list
    ///
    /// # Arguments
    /// * `keywords` - The manifest's `keywords`, if present
    ///
    /// # Returns
    /// `Framework` if any keyword equals "framework" ignoring case, else `Library`
    pub fn classify(keywords: Option<&[String]>) -> ComponentType {
        let is_framework = keywords
            .unwrap_or_default()
            .iter()
            .any(|keyword| keyword.eq_ignore_ascii_case(FRAMEWORK_KEYWORD));

        if is_framework {
            ComponentType::Framework
        } else {
            ComponentType::Library
        }
    }
}
