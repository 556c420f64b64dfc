use serde_json::{json, Map, Value};

/// A single license entry: exactly one of an SPDX id or a free-form name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct License {
    id: Option<String>,
    name: Option<String>,
    text: Option<String>,
    url: Option<String>,
}

impl License {
    /// License identified by a canonical SPDX license id
    pub fn from_spdx_id(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            name: None,
            text: None,
            url: None,
        }
    }

    /// License known only by name
    pub fn from_name(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: Some(name.into()),
            text: None,
            url: None,
        }
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    fn to_xml(&self) -> Value {
        let mut license = Map::new();
        if let Some(id) = &self.id {
            license.insert("id".to_string(), json!(id));
        }
        if let Some(name) = &self.name {
            license.insert("name".to_string(), json!(name));
        }
        if let Some(text) = &self.text {
            license.insert(
                "text".to_string(),
                json!({ "@content-type": "text/plain", "#cdata": text }),
            );
        }
        if let Some(url) = &self.url {
            license.insert("url".to_string(), json!(url));
        }
        Value::Object(license)
    }

    fn to_json(&self) -> Value {
        let mut license = Map::new();
        if let Some(id) = &self.id {
            license.insert("id".to_string(), json!(id));
        }
        if let Some(name) = &self.name {
            license.insert("name".to_string(), json!(name));
        }
        if let Some(text) = &self.text {
            license.insert(
                "text".to_string(),
                json!({ "contentType": "text/plain", "content": text }),
            );
        }
        if let Some(url) = &self.url {
            license.insert("url".to_string(), json!(url));
        }
        json!({ "license": Value::Object(license) })
    }
}

/// LicenseChoice value object: either a list of licenses or one SPDX expression
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LicenseChoice {
    Licenses(Vec<License>),
    Expression(String),
}

impl LicenseChoice {
    pub fn licenses(&self) -> &[License] {
        match self {
            LicenseChoice::Licenses(licenses) => licenses,
            LicenseChoice::Expression(_) => &[],
        }
    }

    pub fn expression(&self) -> Option<&str> {
        match self {
            LicenseChoice::Licenses(_) => None,
            LicenseChoice::Expression(expression) => Some(expression),
        }
    }

    /// XML view: `{"license": [...]}` or `{"expression": "..."}`
    pub fn to_xml(&self) -> Value {
        match self {
            LicenseChoice::Licenses(licenses) => {
                json!({ "license": licenses.iter().map(License::to_xml).collect::<Vec<_>>() })
            }
            LicenseChoice::Expression(expression) => json!({ "expression": expression }),
        }
    }

    /// JSON view: CycloneDX `licenses` array
    pub fn to_json(&self) -> Value {
        match self {
            LicenseChoice::Licenses(licenses) => {
                Value::Array(licenses.iter().map(License::to_json).collect())
            }
            LicenseChoice::Expression(expression) => json!([{ "expression": expression }]),
        }
    }
}
