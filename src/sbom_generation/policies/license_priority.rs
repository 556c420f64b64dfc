use crate::sbom_generation::domain::LicenseField;

/// How a single license string should be represented in the SBOM
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LicenseKind {
    /// A known SPDX license id, normalized to its canonical spelling
    SpdxId(String),
    /// A compound SPDX expression such as `MIT OR Apache-2.0`
    Expression(String),
    /// Anything else, kept verbatim as a license name
    Name(String),
}

/// LicensePriority policy for determining license information precedence
///
/// This policy encodes the business rules for selecting license information
/// when an npm manifest carries both the modern and the legacy field.
///
/// Priority order:
/// 1. `license` field (if non-empty)
/// 2. entries of the legacy `licenses` array (non-empty ones, in order)
pub struct LicensePriority;

impl LicensePriority {
    /// Selects the license entries to report
    ///
    /// # Arguments
    /// * `license` - The `license` field from the manifest
    /// * `licenses` - The legacy `licenses` array from the manifest
    ///
    /// # Returns
    /// The entries to report, or an empty vector if no usable license found
    pub fn select_licenses<'a>(
        license: Option<&'a LicenseField>,
        licenses: Option<&'a [LicenseField]>,
    ) -> Vec<&'a LicenseField> {
        // Priority 1: license field
        if let Some(field) = license.filter(|f| Self::has_value(f)) {
            return vec![field];
        }

        // Priority 2: legacy licenses array
        licenses
            .unwrap_or_default()
            .iter()
            .filter(|f| Self::has_value(f))
            .collect()
    }

    /// Classifies a license string as SPDX id, SPDX expression or plain name
    ///
    /// A string is an expression only if it parses as valid SPDX and joins
    /// more than one license requirement; single ids are looked up in the
    /// SPDX license list.
    pub fn classify(value: &str) -> LicenseKind {
        let value = value.trim();

        if let Some(id) = spdx::license_id(value) {
            return LicenseKind::SpdxId(id.name.to_string());
        }

        if let Ok(expression) = spdx::Expression::parse(value) {
            if expression.requirements().count() > 1 {
                return LicenseKind::Expression(value.to_string());
            }
        }

        LicenseKind::Name(value.to_string())
    }

    fn has_value(field: &LicenseField) -> bool {
        field.value().is_some_and(|v| !v.trim().is_empty())
    }
}
