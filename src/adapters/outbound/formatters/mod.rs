/// Formatter adapters for the CycloneDX output encodings
mod cyclonedx_json_formatter;
mod cyclonedx_xml_formatter;

pub use cyclonedx_json_formatter::CycloneDxJsonFormatter;
pub use cyclonedx_xml_formatter::CycloneDxXmlFormatter;
