use crate::ports::outbound::ComponentFormatter;
use crate::sbom_generation::domain::ComponentRecord;
use crate::shared::error::SbomError;
use crate::shared::Result;
use quick_xml::events::{BytesCData, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use serde_json::{Map, Value};

const ROOT_ELEMENT: &str = "component";

/// CycloneDxXmlFormatter adapter for rendering a component as CycloneDX XML
///
/// Walks the record's XML view: `@` keys become attributes, `#text` and
/// `#cdata` become element content, arrays repeat their element and `null`
/// values are left out.
pub struct CycloneDxXmlFormatter;

impl CycloneDxXmlFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for CycloneDxXmlFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ComponentFormatter for CycloneDxXmlFormatter {
    fn format(&self, record: &ComponentRecord) -> Result<String> {
        let mut writer = Writer::new(Vec::new());

        match record.to_xml() {
            Value::Object(map) => write_object(&mut writer, ROOT_ELEMENT, &map, true)?,
            other => write_element(&mut writer, ROOT_ELEMENT, &other)?,
        }

        String::from_utf8(writer.into_inner()).map_err(render_error)
    }
}

fn render_error(e: impl std::fmt::Display) -> anyhow::Error {
    SbomError::XmlRenderError {
        details: e.to_string(),
    }
    .into()
}

fn write_event<'a>(writer: &mut Writer<Vec<u8>>, event: impl Into<Event<'a>>) -> Result<()> {
    writer.write_event(event).map_err(render_error)
}

fn write_element(writer: &mut Writer<Vec<u8>>, name: &str, value: &Value) -> Result<()> {
    match value {
        Value::Null => Ok(()),
        Value::Array(items) => {
            for item in items {
                write_element(writer, name, item)?;
            }
            Ok(())
        }
        Value::Object(map) => write_object(writer, name, map, false),
        scalar => {
            let Some(text) = scalar_text(scalar) else {
                return Ok(());
            };
            write_event(writer, Event::Start(BytesStart::new(name)))?;
            write_event(writer, Event::Text(BytesText::new(&text)))?;
            write_event(writer, Event::End(BytesEnd::new(name)))
        }
    }
}

/// Writes one element from an object node
///
/// A node with nothing to render is dropped unless `always` is set.
fn write_object(
    writer: &mut Writer<Vec<u8>>,
    name: &str,
    map: &Map<String, Value>,
    always: bool,
) -> Result<()> {
    let mut start = BytesStart::new(name);
    let mut has_attributes = false;
    let mut content: Vec<(&str, String)> = Vec::new();
    let mut children: Vec<(&str, &Value)> = Vec::new();

    for (key, value) in map {
        if let Some(attribute) = key.strip_prefix('@') {
            if let Some(text) = scalar_text(value) {
                start.push_attribute((attribute, text.as_str()));
                has_attributes = true;
            }
        } else if key == "#text" || key == "#cdata" {
            if let Some(text) = scalar_text(value) {
                content.push((key.as_str(), text));
            }
        } else if has_content(value) {
            children.push((key.as_str(), value));
        }
    }

    if !always && !has_attributes && content.is_empty() && children.is_empty() {
        return Ok(());
    }

    if content.is_empty() && children.is_empty() {
        return write_event(writer, Event::Empty(start));
    }

    write_event(writer, Event::Start(start))?;
    for (kind, text) in &content {
        if *kind == "#cdata" {
            write_cdata(writer, text)?;
        } else {
            write_event(writer, Event::Text(BytesText::new(text)))?;
        }
    }
    for (child, value) in children {
        write_element(writer, child, value)?;
    }
    write_event(writer, Event::End(BytesEnd::new(name)))
}

/// Writes text as CDATA, splitting around any `]]>` so the section stays well formed
fn write_cdata(writer: &mut Writer<Vec<u8>>, text: &str) -> Result<()> {
    let parts: Vec<&str> = text.split("]]>").collect();
    let last = parts.len() - 1;

    for (i, part) in parts.iter().enumerate() {
        let mut section = String::with_capacity(part.len() + 3);
        if i > 0 {
            section.push('>');
        }
        section.push_str(part);
        if i < last {
            section.push_str("]]");
        }
        write_event(writer, Event::CData(BytesCData::new(section)))?;
    }
    Ok(())
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn has_content(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Array(items) => items.iter().any(has_content),
        Value::Object(map) => map.values().any(has_content),
        _ => true,
    }
}
