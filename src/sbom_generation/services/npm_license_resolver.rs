use crate::ports::outbound::LicenseResolver;
use crate::sbom_generation::domain::{License, LicenseChoice, PackageDescriptor};
use crate::sbom_generation::policies::{LicenseKind, LicensePriority};

/// NpmLicenseResolver builds a license choice from `license` / `licenses`
///
/// A lone compound SPDX expression is reported as an expression; every other
/// value becomes a license entry with an SPDX id when one is recognized.
/// License text, when requested and supplied by the caller, is attached to
/// the first license entry.
#[derive(Debug, Default, Clone, Copy)]
pub struct NpmLicenseResolver;

impl NpmLicenseResolver {
    pub fn new() -> Self {
        Self
    }
}

impl LicenseResolver for NpmLicenseResolver {
    fn resolve(
        &self,
        descriptor: &PackageDescriptor,
        include_license_text: bool,
    ) -> Option<LicenseChoice> {
        let selected = LicensePriority::select_licenses(
            descriptor.license.as_ref(),
            descriptor.licenses.as_deref(),
        );

        if selected.is_empty() {
            return None;
        }

        if let [single] = selected.as_slice() {
            if let Some(LicenseKind::Expression(expression)) =
                single.value().map(LicensePriority::classify)
            {
                return Some(LicenseChoice::Expression(expression));
            }
        }

        let mut licenses: Vec<License> = selected
            .iter()
            .filter_map(|field| {
                let value = field.value()?;
                let license = match LicensePriority::classify(value) {
                    LicenseKind::SpdxId(id) => License::from_spdx_id(id),
                    LicenseKind::Expression(expression) => License::from_name(expression),
                    LicenseKind::Name(name) => License::from_name(name),
                };
                Some(match field.url() {
                    Some(url) => license.with_url(url),
                    None => license,
                })
            })
            .collect();

        if include_license_text {
            if let (Some(text), Some(first)) =
                (descriptor.license_text.as_deref(), licenses.first_mut())
            {
                *first = first.clone().with_text(text);
            }
        }

        Some(LicenseChoice::Licenses(licenses))
    }
}
