use quick_xml::events::Event;
use quick_xml::Reader;
use serde::Serialize;

use crate::error::{Result, SettingsError};
use crate::profile::ConfigurationProfile;

const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="utf-8"?>"#;
const ROOT_ELEMENT: &str = "Settings";

/// Text serialization used by the settings store
pub trait ProfileCodec {
    fn serialize(&self, profile: &ConfigurationProfile) -> Result<String>;

    fn deserialize(&self, text: &str) -> Result<ConfigurationProfile>;

    /// File extension written by this codec, without the dot
    fn extension(&self) -> &'static str;
}

/// XML `<Settings>` documents
#[derive(Debug, Clone, Copy, Default)]
pub struct XmlCodec;

impl ProfileCodec for XmlCodec {
    fn serialize(&self, profile: &ConfigurationProfile) -> Result<String> {
        let mut body = String::new();
        let mut serializer = quick_xml::se::Serializer::new(&mut body);
        serializer.indent(' ', 2);
        profile
            .serialize(serializer)
            .map_err(|e| SettingsError::Serialization { message: e.to_string() })?;

        Ok(format!("{}\n{}\n", XML_DECLARATION, body))
    }

    fn deserialize(&self, text: &str) -> Result<ConfigurationProfile> {
        let text = text.trim_start_matches('\u{feff}');
        check_root_element(text)?;
        quick_xml::de::from_str(text).map_err(SettingsError::deserialization)
    }

    fn extension(&self) -> &'static str {
        "xml"
    }
}

/// The deserializer accepts any root name, so foreign documents are rejected here
fn check_root_element(text: &str) -> Result<()> {
    let mut reader = Reader::from_str(text);
    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) | Ok(Event::Empty(e)) => {
                let name = e.local_name();
                return if name.as_ref() == ROOT_ELEMENT.as_bytes() {
                    Ok(())
                } else {
                    Err(SettingsError::deserialization(format!(
                        "expected <{}> root element, found <{}>",
                        ROOT_ELEMENT,
                        String::from_utf8_lossy(name.as_ref())
                    )))
                };
            }
            Ok(Event::Eof) => {
                return Err(SettingsError::deserialization("document has no root element"));
            }
            Ok(_) => {}
            Err(e) => return Err(SettingsError::deserialization(e)),
        }
    }
}
