/// Integration tests for component construction and rendering
mod test_utilities;

use npm_sbom_component::prelude::*;
use serde_json::json;
use test_utilities::mocks::*;

fn widget() -> PackageDescriptor {
    PackageDescriptor::from_value(json!({
        "name": "@acme/widget",
        "version": "1.2.3",
        "description": "Widgets & <gadgets>",
        "keywords": ["ui", "Framework"],
        "license": "Apache-2.0",
        "licenseText": "Licensed under the Apache License",
        "_integrity": "sha1-2jmj7l5rSw0yVb/vlWAYkK/YBwk=",
        "homepage": "https://acme.example/widget",
        "bugs": { "url": "https://acme.example/widget/issues" },
        "repository": { "type": "git", "url": "git+https://github.com/acme/widget.git" }
    }))
    .unwrap()
}

#[test]
fn test_build_with_mock_resolvers() {
    let license_resolver =
        MockLicenseResolver::new().with_choice(LicenseChoice::Expression("MIT OR ISC".to_string()));
    let hash_resolver = MockHashResolver::new().with_hash(HashAlgorithm::Sha256, "beef");
    let reference_resolver = MockExternalReferenceResolver::new()
        .with_reference(ExternalReferenceType::Website, "https://example.com");

    let factory = ComponentFactory::new(license_resolver, hash_resolver, reference_resolver)
        .with_include_license_text(false);
    let record = factory.build(Some(&widget())).unwrap();

    assert_eq!(record.licenses().and_then(|l| l.expression()), Some("MIT OR ISC"));
    assert_eq!(record.hashes().unwrap().hashes()[0].content(), "beef");
    assert_eq!(
        record.external_references().unwrap().references()[0].url(),
        "https://example.com"
    );
}

#[test]
fn test_build_passes_license_text_flag() {
    let factory = ComponentFactory::new(
        MockLicenseResolver::new(),
        MockHashResolver::new(),
        MockExternalReferenceResolver::new(),
    );

    factory.build(Some(&widget())).unwrap();
    let factory = factory.with_include_license_text(false);
    factory.build(Some(&widget())).unwrap();

    assert_eq!(*factory.license_resolver().calls.borrow(), vec![true, false]);
}

#[test]
fn test_build_without_descriptor_skips_resolvers() {
    let factory = ComponentFactory::new(
        MockLicenseResolver::new(),
        MockHashResolver::new(),
        MockExternalReferenceResolver::new(),
    );

    let record = factory.build(None).unwrap();

    assert_eq!(factory.license_resolver().call_count(), 0);
    assert_eq!(record.component_type(), None);
    assert_eq!(record.bom_ref(), None);
    assert_eq!(record.group(), None);
    assert_eq!(record.name(), None);
    assert_eq!(record.version(), None);
    assert_eq!(record.description(), None);
    assert_eq!(record.licenses(), None);
    assert_eq!(record.hashes(), None);
    assert_eq!(record.external_references(), None);
    assert_eq!(record.purl(), None);
}

#[test]
fn test_scoped_framework_end_to_end() {
    let record = ComponentFactory::npm().build(Some(&widget())).unwrap();

    assert_eq!(record.component_type(), Some(ComponentType::Framework));
    assert_eq!(record.group(), Some("@acme"));
    assert_eq!(record.name(), Some("widget"));
    assert_eq!(record.purl(), Some("pkg:npm/%40acme/widget@1.2.3"));
    assert_eq!(record.bom_ref(), record.purl());

    let json = record.to_json().unwrap();
    assert_eq!(
        json,
        json!({
            "type": "framework",
            "bom-ref": "pkg:npm/%40acme/widget@1.2.3",
            "group": "@acme",
            "name": "widget",
            "version": "1.2.3",
            "description": "Widgets & <gadgets>",
            "hashes": [{ "alg": "SHA-1", "content": "da39a3ee5e6b4b0d3255bfef95601890afd80709" }],
            "licenses": [{
                "license": {
                    "id": "Apache-2.0",
                    "text": { "contentType": "text/plain", "content": "Licensed under the Apache License" }
                }
            }],
            "purl": "pkg:npm/%40acme/widget@1.2.3",
            "externalReferences": [
                { "type": "website", "url": "https://acme.example/widget" },
                { "type": "issue-tracker", "url": "https://acme.example/widget/issues" },
                { "type": "vcs", "url": "git+https://github.com/acme/widget.git" }
            ]
        })
    );
}

#[test]
fn test_xml_rendering_end_to_end() {
    let record = ComponentFactory::npm().build(Some(&widget())).unwrap();
    let xml = FormatterFactory::create(OutputFormat::Xml)
        .format(&record)
        .unwrap();

    assert!(xml.starts_with(
        "<component type=\"framework\" bom-ref=\"pkg:npm/%40acme/widget@1.2.3\">"
    ));
    assert!(xml.contains("<description><![CDATA[Widgets & <gadgets>]]></description>"));
    assert!(xml.contains(
        "<hash alg=\"SHA-1\">da39a3ee5e6b4b0d3255bfef95601890afd80709</hash>"
    ));
    assert!(xml.contains("<reference type=\"issue-tracker\">"));
    assert!(xml.ends_with("</externalReferences></component>"));
}

#[test]
fn test_xml_view_keys_for_unscoped_library() {
    let descriptor = PackageDescriptor::from_json_str(r#"{"name":"lodash","version":"4.17.21"}"#)
        .unwrap();
    let record = ComponentRecord::from_descriptor(Some(&descriptor), true);
    let xml = record.to_xml();

    let keys: Vec<&str> = xml.as_object().unwrap().keys().map(String::as_str).collect();
    assert_eq!(
        keys,
        vec![
            "@type",
            "@bom-ref",
            "group",
            "name",
            "version",
            "description",
            "hashes",
            "licenses",
            "purl",
            "externalReferences"
        ]
    );
    assert_eq!(xml["@type"], "library");
    assert_eq!(xml["group"], serde_json::Value::Null);
    assert_eq!(xml["name"], "lodash");
    assert_eq!(xml["description"], json!({ "#cdata": null }));
    assert_eq!(xml["hashes"], serde_json::Value::Null);
}

#[test]
fn test_bom_ref_is_not_recomputed_by_mutators() {
    let record = ComponentFactory::npm()
        .build(Some(&PackageDescriptor::new("lodash", "4.17.21")))
        .unwrap()
        .with_purl("pkg:npm/lodash@5.0.0");

    assert_eq!(record.purl(), Some("pkg:npm/lodash@5.0.0"));
    assert_eq!(record.bom_ref(), Some("pkg:npm/lodash@4.17.21"));

    let record = record
        .with_version("4.17.22")
        .recompute_identifier()
        .with_bom_ref_from_purl();
    assert_eq!(record.purl(), Some("pkg:npm/lodash@4.17.22"));
    assert_eq!(record.bom_ref(), Some("pkg:npm/lodash@4.17.22"));
}

#[test]
fn test_configured_strict_factory() {
    let config = ComponentConfig::from_yaml_str("identifier_policy: strict").unwrap();
    let factory = ComponentFactory::npm().with_config(&config).unwrap();

    let nameless = PackageDescriptor::from_value(json!({ "version": "1.0.0" })).unwrap();
    let err = factory.build(Some(&nameless)).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<SbomError>(),
        Some(SbomError::MissingField { field }) if field == "name"
    ));

    let ok = factory.build(Some(&PackageDescriptor::new("lodash", "4.17.21")));
    assert!(ok.is_ok());
}

#[test]
fn test_malformed_fields_are_tolerated() {
    let descriptor = PackageDescriptor::from_value(json!({
        "name": "odd",
        "version": 1,
        "keywords": "framework, cli",
        "license": { "type": "MIT" },
        "_integrity": "md5-AAAA",
        "_shasum": "not-a-sha",
        "bugs": 42
    }))
    .unwrap();

    let record = ComponentRecord::from_descriptor(Some(&descriptor), false);

    assert_eq!(record.version(), Some("1"));
    assert_eq!(record.component_type(), Some(ComponentType::Framework));
    assert_eq!(record.licenses().unwrap().licenses()[0].id(), Some("MIT"));
    assert_eq!(record.hashes(), None);
    assert_eq!(record.external_references(), None);
}

#[test]
fn test_non_object_descriptor_is_rejected() {
    let err = PackageDescriptor::from_value(json!(["lodash"])).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<SbomError>(),
        Some(SbomError::DescriptorParseError { .. })
    ));
}
