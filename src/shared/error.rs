use thiserror::Error;

/// Application-specific errors for component record construction.
///
/// Uses thiserror to derive Display and Error traits automatically,
/// reducing boilerplate while maintaining user-friendly error messages.
#[derive(Debug, Error)]
pub enum SbomError {
    #[error("Package descriptor is missing required field '{field}'\n\n💡 Hint: Use the permissive identifier policy to build a record without it")]
    MissingField { field: String },

    #[error("Invalid package name: {name}\nReason: {reason}\n\n💡 Hint: npm package names look like 'name' or '@scope/name'")]
    InvalidPackageName { name: String, reason: String },

    #[error("Failed to parse package descriptor\nDetails: {details}\n\n💡 Hint: The descriptor must be a JSON object in package.json shape")]
    DescriptorParseError { details: String },

    #[error("Failed to parse component configuration\nDetails: {details}\n\n💡 Hint: Ensure the configuration is valid YAML")]
    ConfigParseError { details: String },

    #[error("Failed to render component XML\nDetails: {details}")]
    XmlRenderError { details: String },

    /// Validation error for builder patterns
    #[error("Validation error: {message}")]
    Validation { message: String },
}
