pub mod component_record;
pub mod component_type;
pub mod external_reference;
pub mod hash_list;
pub mod license_choice;
pub mod package_descriptor;
pub mod package_name;
pub mod package_url;

pub use component_record::{ComponentParts, ComponentRecord};
pub use component_type::ComponentType;
pub use external_reference::{ExternalReference, ExternalReferenceList, ExternalReferenceType};
pub use hash_list::{Hash, HashAlgorithm, HashList};
pub use license_choice::{License, LicenseChoice};
pub use package_descriptor::{BugsField, LicenseField, PackageDescriptor, RepositoryField};
pub use package_name::PackageName;
pub use package_url::PackageUrl;
