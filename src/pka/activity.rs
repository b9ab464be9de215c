//! Extraction of the password hash from a recovered activity document.

use log::{debug, trace};
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use super::models::{ACTIVITY_TAG, PASSWORD_ATTR, ROOT_TAG};
use super::error::{PkaError, Result};

/// Return the `PASS` attribute of the first `ACTIVITY` element directly under
/// the `PACKETTRACER5_ACTIVITY` root.
///
/// The whole document is read before answering, so malformed XML anywhere is
/// reported as [`PkaError::XmlParseError`] even when the attribute was already
/// found. A well-formed document without the expected structure yields
/// [`PkaError::SchemaError`].
pub fn extract_password_hash(xml: &str) -> Result<String> {
    let mut reader = Reader::from_str(xml);
    let mut buf = Vec::new();

    let mut depth = 0usize;
    let mut root: Option<String> = None;
    // Outer option: ACTIVITY seen. Inner option: PASS present on it.
    let mut activity: Option<Option<String>> = None;

    loop {
        let event = reader.read_event_into(&mut buf).map_err(|e| {
            PkaError::XmlParseError(format!("at byte {}: {}", reader.buffer_position(), e))
        })?;

        match event {
            Event::Start(ref e) | Event::Empty(ref e) => {
                let opens = matches!(event, Event::Start(_));
                let pass = scan_attributes(e, PASSWORD_ATTR)?;

                if depth == 0 {
                    if root.is_some() {
                        return Err(PkaError::XmlParseError(
                            "document has more than one root element".to_string(),
                        ));
                    }
                    let name = String::from_utf8_lossy(e.name().as_ref()).into_owned();
                    trace!("Root element: <{}>", name);
                    root = Some(name);
                } else if depth == 1
                    && activity.is_none()
                    && e.name().as_ref() == ACTIVITY_TAG.as_bytes()
                {
                    trace!("Found <{}> under root", ACTIVITY_TAG);
                    activity = Some(pass);
                }

                if opens {
                    depth += 1;
                }
            }
            Event::End(_) => depth = depth.saturating_sub(1),
            Event::Text(ref t) => {
                let text = t.unescape().map_err(|e| {
                    PkaError::XmlParseError(format!("failed to decode text: {}", e))
                })?;
                if depth == 0 && !text.trim().is_empty() {
                    let place = if root.is_some() { "after" } else { "before" };
                    return Err(PkaError::XmlParseError(format!(
                        "text data {} the root element",
                        place
                    )));
                }
            }
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    if depth > 0 {
        return Err(PkaError::XmlParseError(format!(
            "unexpected end of document with {} element(s) still open",
            depth
        )));
    }

    let root = root.ok_or_else(|| PkaError::XmlParseError("no root element found".to_string()))?;
    if root != ROOT_TAG {
        return Err(PkaError::SchemaError(format!(
            "root element is <{}>, expected <{}>",
            root, ROOT_TAG
        )));
    }

    match activity {
        None => Err(PkaError::SchemaError(format!(
            "no <{}> element under <{}>",
            ACTIVITY_TAG, ROOT_TAG
        ))),
        Some(None) => Err(PkaError::SchemaError(format!(
            "<{}> has no {} attribute",
            ACTIVITY_TAG, PASSWORD_ATTR
        ))),
        Some(Some(hash)) => {
            debug!("Extracted {} attribute ({} chars)", PASSWORD_ATTR, hash.len());
            Ok(hash)
        }
    }
}

/// Validate every attribute on `element` and return the unescaped value of `wanted`.
fn scan_attributes(element: &BytesStart<'_>, wanted: &str) -> Result<Option<String>> {
    let mut found = None;
    for attr_result in element.attributes() {
        let attr = attr_result.map_err(|e| {
            PkaError::XmlParseError(format!("failed to parse XML attribute: {}", e))
        })?;
        let value = attr.unescape_value().map_err(|e| {
            PkaError::XmlParseError(format!("failed to decode XML value: {}", e))
        })?;
        if found.is_none() && attr.key.as_ref() == wanted.as_bytes() {
            found = Some(value.into_owned());
        }
    }
    Ok(found)
}
