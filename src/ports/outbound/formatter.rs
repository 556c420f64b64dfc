use crate::sbom_generation::domain::ComponentRecord;
use crate::shared::Result;

/// ComponentFormatter port for rendering a component record
///
/// This port abstracts the formatting logic for different CycloneDX
/// encodings (XML, JSON).
pub trait ComponentFormatter {
    /// Renders a single component
    ///
    /// # Arguments
    /// * `record` - The component record to render
    ///
    /// # Returns
    /// Formatted component content as a string
    ///
    /// # Errors
    /// Returns an error if formatting or serialization fails
    fn format(&self, record: &ComponentRecord) -> Result<String>;
}
