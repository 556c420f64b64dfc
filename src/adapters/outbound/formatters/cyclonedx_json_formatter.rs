use crate::ports::outbound::ComponentFormatter;
use crate::sbom_generation::domain::ComponentRecord;
use crate::shared::Result;

/// CycloneDxJsonFormatter adapter for rendering a component as CycloneDX JSON
///
/// This adapter implements the ComponentFormatter port by pretty-printing the
/// record's JSON view.
pub struct CycloneDxJsonFormatter;

impl CycloneDxJsonFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for CycloneDxJsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ComponentFormatter for CycloneDxJsonFormatter {
    fn format(&self, record: &ComponentRecord) -> Result<String> {
        let json = record.to_json()?;
        serde_json::to_string_pretty(&json).map_err(Into::into)
    }
}
