mod component_type_policy;
mod identifier_policy;
mod license_priority;

pub use component_type_policy::ComponentTypePolicy;
pub use identifier_policy::IdentifierPolicy;
pub use license_priority::{LicenseKind, LicensePriority};
