//! Minimal XML reading on top of `quick-xml`.

use std::collections::{HashMap, HashSet};

use quick_xml::events::{BytesStart, Event};
use quick_xml::reader::Reader;

use crate::error::StructuredError;

type Result<T> = std::result::Result<T, StructuredError>;

/// Element text by tag name, keeping the first element in document order.
#[derive(Debug, Clone, Default)]
pub struct XmlDocument {
    texts: HashMap<String, (usize, String)>,
    elements: HashSet<String>,
}

struct OpenElement {
    name: String,
    order: usize,
    text: String,
}

impl XmlDocument {
    /// Parse a document. Mismatched or unclosed tags are errors.
    pub fn parse(xml: &str) -> Result<Self> {
        let mut reader = Reader::from_str(xml);
        reader.config_mut().trim_text(true);

        let mut document = XmlDocument::default();
        let mut stack: Vec<OpenElement> = Vec::new();
        let mut order = 0usize;

        loop {
            match reader.read_event()? {
                Event::Start(start) => {
                    let name = tag_name(&start);
                    document.elements.insert(name.clone());
                    stack.push(OpenElement { name, order, text: String::new() });
                    order += 1;
                }
                Event::Empty(start) => {
                    let name = tag_name(&start);
                    document.elements.insert(name.clone());
                    document.record(name, order, String::new());
                    order += 1;
                }
                Event::Text(text) => {
                    let text = text.unescape()?;
                    append_text(&mut stack, &text);
                }
                Event::CData(data) => {
                    let text = String::from_utf8_lossy(&data.into_inner()).into_owned();
                    append_text(&mut stack, &text);
                }
                Event::End(_) => {
                    if let Some(open) = stack.pop() {
                        document.record(open.name, open.order, open.text);
                    }
                }
                Event::Eof => break,
                _ => {}
            }
        }

        if let Some(open) = stack.last() {
            return Err(StructuredError::Xml(format!("unclosed element <{}>", open.name)));
        }

        Ok(document)
    }

    fn record(&mut self, name: String, order: usize, text: String) {
        let keep = match self.texts.get(&name) {
            Some((existing, _)) => order < *existing,
            None => true,
        };
        if keep {
            self.texts.insert(name, (order, text.trim().to_string()));
        }
    }

    /// Whether any element with this exact tag name exists.
    pub fn has_element(&self, tag: &str) -> bool {
        self.elements.contains(tag)
    }

    /// Trimmed text of the first element named `tag`. Missing or empty
    /// elements yield `None`.
    pub fn text(&self, tag: &str) -> Option<&str> {
        self.texts
            .get(tag)
            .map(|(_, text)| text.as_str())
            .filter(|text| !text.is_empty())
    }
}

fn append_text(stack: &mut [OpenElement], text: &str) {
    for open in stack.iter_mut() {
        if !open.text.is_empty() {
            open.text.push(' ');
        }
        open.text.push_str(text);
    }
}

fn tag_name(start: &BytesStart<'_>) -> String {
    String::from_utf8_lossy(start.name().as_ref()).into_owned()
}

/// Turn arbitrary XML into `Tag Name: value` lines for the heuristic parser.
///
/// Attributes become `Tag Attr: value` lines.
pub fn flatten_xml(xml: &str) -> Result<String> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut lines: Vec<String> = Vec::new();
    let mut stack: Vec<String> = Vec::new();

    loop {
        match reader.read_event()? {
            Event::Start(start) => {
                let name = readable_name(&tag_name(&start));
                push_attributes(&start, &name, &mut lines)?;
                stack.push(name);
            }
            Event::Empty(start) => {
                let name = readable_name(&tag_name(&start));
                push_attributes(&start, &name, &mut lines)?;
            }
            Event::Text(text) => {
                let text = text.unescape()?;
                let text = text.trim();
                if let (Some(name), false) = (stack.last(), text.is_empty()) {
                    lines.push(format!("{name}: {text}"));
                }
            }
            Event::End(_) => {
                stack.pop();
            }
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(lines.join("\n"))
}

fn push_attributes(start: &BytesStart<'_>, element: &str, lines: &mut Vec<String>) -> Result<()> {
    for attribute in start.attributes() {
        let attribute = attribute.map_err(|e| StructuredError::Xml(e.to_string()))?;
        let key = readable_name(&String::from_utf8_lossy(attribute.key.as_ref()));
        let value = attribute.unescape_value()?;
        lines.push(format!("{element} {key}: {value}"));
    }
    Ok(())
}

/// `orderDate` and `ORDER_DATE` style names as words.
fn readable_name(tag: &str) -> String {
    let mut out = String::with_capacity(tag.len() + 4);
    let mut previous: Option<char> = None;
    for c in tag.chars() {
        if c == '_' {
            out.push(' ');
        } else {
            if c.is_uppercase() && previous.is_some_and(|p| p.is_lowercase()) {
                out.push(' ');
            }
            out.push(c);
        }
        previous = Some(c);
    }
    out.trim().to_string()
}
