use crate::adapters::outbound::formatters::{CycloneDxJsonFormatter, CycloneDxXmlFormatter};
use crate::application::dto::OutputFormat;
use crate::ports::outbound::ComponentFormatter;

/// Factory for creating component formatters
///
/// This factory encapsulates the creation logic for different formatter implementations,
/// following the Factory Pattern. It belongs in the application layer as it orchestrates
/// the selection of infrastructure adapters based on application needs.
pub struct FormatterFactory;

impl FormatterFactory {
    /// Creates a formatter instance for the specified output format
    ///
    /// # Examples
    /// ```
    /// use npm_sbom_component::application::dto::OutputFormat;
    /// use npm_sbom_component::application::factories::FormatterFactory;
    /// use npm_sbom_component::ports::outbound::ComponentFormatter;
    /// use npm_sbom_component::sbom_generation::domain::ComponentRecord;
    ///
    /// let formatter = FormatterFactory::create(OutputFormat::Xml);
    /// let xml = formatter.format(&ComponentRecord::new()).unwrap();
    /// assert_eq!(xml, "<component/>");
    /// ```
    pub fn create(format: OutputFormat) -> Box<dyn ComponentFormatter> {
        match format {
            OutputFormat::Json => Box::new(CycloneDxJsonFormatter::new()),
            OutputFormat::Xml => Box::new(CycloneDxXmlFormatter::new()),
        }
    }
}
