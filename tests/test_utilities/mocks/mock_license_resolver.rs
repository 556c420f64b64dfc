use npm_sbom_component::prelude::*;
use std::cell::RefCell;

/// Mock LicenseResolver for testing
///
/// Returns a fixed license choice and records the `include_license_text`
/// flag of every call.
pub struct MockLicenseResolver {
    pub choice: Option<LicenseChoice>,
    pub calls: RefCell<Vec<bool>>,
}

impl MockLicenseResolver {
    pub fn new() -> Self {
        Self {
            choice: None,
            calls: RefCell::new(Vec::new()),
        }
    }

    pub fn with_choice(mut self, choice: LicenseChoice) -> Self {
        self.choice = Some(choice);
        self
    }

    pub fn call_count(&self) -> usize {
        self.calls.borrow().len()
    }
}

impl Default for MockLicenseResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl LicenseResolver for MockLicenseResolver {
    fn resolve(
        &self,
        _descriptor: &PackageDescriptor,
        include_license_text: bool,
    ) -> Option<LicenseChoice> {
        self.calls.borrow_mut().push(include_license_text);
        self.choice.clone()
    }
}
