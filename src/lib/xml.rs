// SPDX-License-Identifier: Apache-2.0

//! Vendor neutral XML element tree with quick-xml based encoder and decoder.
//!
//! Element and attribute lookups use local names, so `junos:name` and `name`
//! are the same element. Whitespace-only text nodes are dropped while
//! decoding; empty text is stored as `None`.

use std::str::FromStr;

use quick_xml::{
    Reader, Writer,
    events::{BytesEnd, BytesStart, BytesText, Event},
};

use crate::{ErrorKind, NetmanError};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct XmlElement {
    pub name: String,
    pub attributes: Vec<(String, String)>,
    pub text: Option<String>,
    pub children: Vec<XmlElement>,
}

fn local_part(name: &str) -> &str {
    match name.rsplit_once(':') {
        Some((_, local)) => local,
        None => name,
    }
}

impl XmlElement {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Default::default()
        }
    }

    pub fn with_text(mut self, text: &str) -> Self {
        self.text = if text.is_empty() {
            None
        } else {
            Some(text.to_string())
        };
        self
    }

    pub fn with_attribute(mut self, key: &str, value: &str) -> Self {
        self.attributes.push((key.to_string(), value.to_string()));
        self
    }

    pub fn with_child(mut self, child: XmlElement) -> Self {
        self.children.push(child);
        self
    }

    pub fn push_child(&mut self, child: XmlElement) {
        self.children.push(child);
    }

    /// Element text with surrounding whitespace removed.
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref().map(str::trim).filter(|t| !t.is_empty())
    }

    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == key || local_part(k) == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn child(&self, name: &str) -> Option<&XmlElement> {
        self.children.iter().find(|c| c.name == name)
    }

    pub fn children_named<'a>(
        &'a self,
        name: &'a str,
    ) -> impl Iterator<Item = &'a XmlElement> + 'a {
        self.children.iter().filter(move |c| c.name == name)
    }

    pub fn child_text(&self, name: &str) -> Option<&str> {
        self.child(name).and_then(|c| c.text())
    }

    pub fn has_child(&self, name: &str) -> bool {
        self.child(name).is_some()
    }

    /// Follow the first matching child for each element of `path`.
    pub fn find(&self, path: &[&str]) -> Option<&XmlElement> {
        let mut cur = self;
        for name in path {
            cur = cur.child(name)?;
        }
        Some(cur)
    }

    /// Depth-first search for an element named `name`, including `self`.
    pub fn find_descendant(&self, name: &str) -> Option<&XmlElement> {
        if self.name == name {
            return Some(self);
        }
        self.children.iter().find_map(|c| c.find_descendant(name))
    }

    pub fn to_xml_string(&self) -> Result<String, NetmanError> {
        let mut writer = Writer::new(Vec::new());
        self.write_to(&mut writer)?;
        Ok(String::from_utf8(writer.into_inner())?)
    }

    pub fn to_pretty_xml_string(&self) -> Result<String, NetmanError> {
        let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);
        self.write_to(&mut writer)?;
        Ok(String::from_utf8(writer.into_inner())?)
    }

    fn write_to(
        &self,
        writer: &mut Writer<Vec<u8>>,
    ) -> Result<(), NetmanError> {
        let start = BytesStart::new(self.name.as_str()).with_attributes(
            self.attributes.iter().map(|(k, v)| (k.as_str(), v.as_str())),
        );
        if self.children.is_empty() && self.text.is_none() {
            writer.write_event(Event::Empty(start))?;
            return Ok(());
        }
        writer.write_event(Event::Start(start))?;
        if let Some(text) = self.text.as_deref() {
            writer.write_event(Event::Text(BytesText::new(text)))?;
        }
        for child in &self.children {
            child.write_to(writer)?;
        }
        writer.write_event(Event::End(BytesEnd::new(self.name.as_str())))?;
        Ok(())
    }
}

fn element_from_start(
    start: &BytesStart<'_>,
) -> Result<XmlElement, NetmanError> {
    let name = String::from_utf8_lossy(start.local_name().as_ref()).to_string();
    let mut element = XmlElement::new(&name);
    for attr in start.attributes() {
        let attr = attr?;
        element.attributes.push((
            String::from_utf8_lossy(attr.key.as_ref()).to_string(),
            attr.unescape_value()?.to_string(),
        ));
    }
    Ok(element)
}

fn append_text(stack: &mut [XmlElement], text: &str) {
    if text.trim().is_empty() {
        return;
    }
    if let Some(cur) = stack.last_mut() {
        match cur.text.as_mut() {
            Some(t) => t.push_str(text),
            None => cur.text = Some(text.to_string()),
        }
    }
}

impl FromStr for XmlElement {
    type Err = NetmanError;

    fn from_str(xml: &str) -> Result<Self, NetmanError> {
        let mut reader = Reader::from_str(xml);
        let mut stack: Vec<XmlElement> = Vec::new();
        let mut root: Option<XmlElement> = None;

        loop {
            let element = match reader.read_event()? {
                Event::Start(start) => {
                    stack.push(element_from_start(&start)?);
                    continue;
                }
                Event::Empty(start) => element_from_start(&start)?,
                Event::End(_) => match stack.pop() {
                    Some(e) => e,
                    None => {
                        return Err(NetmanError::new(
                            ErrorKind::InvalidArgument,
                            format!(
                                "Unexpected closing tag at position {}",
                                reader.buffer_position()
                            ),
                        ));
                    }
                },
                Event::Text(text) => {
                    append_text(&mut stack, &text.unescape()?);
                    continue;
                }
                Event::CData(data) => {
                    append_text(
                        &mut stack,
                        &String::from_utf8_lossy(data.as_ref()),
                    );
                    continue;
                }
                Event::Eof => break,
                _ => continue,
            };
            if let Some(parent) = stack.last_mut() {
                parent.children.push(element);
            } else if root.is_some() {
                return Err(NetmanError::new(
                    ErrorKind::InvalidArgument,
                    format!(
                        "XML document has more than one root element: {}",
                        element.name
                    ),
                ));
            } else {
                root = Some(element);
            }
        }

        if let Some(unclosed) = stack.last() {
            return Err(NetmanError::new(
                ErrorKind::InvalidArgument,
                format!("XML element {} is not closed", unclosed.name),
            ));
        }
        root.ok_or_else(|| {
            NetmanError::new(
                ErrorKind::InvalidArgument,
                "XML document has no root element".to_string(),
            )
        })
    }
}

impl std::fmt::Display for XmlElement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.to_xml_string() {
            Ok(s) => write!(f, "{s}"),
            Err(e) => {
                log::error!("BUG: Failed to convert {self:?} into XML: {e}");
                write!(f, "{self:?}")
            }
        }
    }
}
