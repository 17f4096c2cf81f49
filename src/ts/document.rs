//! Qt Linguist `.ts` document parsing and serialization.
//!
//! The document is kept as the original text plus byte spans for every
//! `<translation>` element. Serialization splices replacement elements over
//! the spans of filled units and copies every other byte verbatim, so units
//! this crate does not touch round-trip unchanged.

use std::collections::HashMap;

use quick_xml::Reader;
use quick_xml::events::{
    BytesStart,
    Event,
};

use super::types::{
    TranslationUnit,
    TsError,
    UnitState,
};

/// A parsed `.ts` catalog document.
#[derive(Debug, Clone)]
pub struct TsDocument {
    text: String,
    units: Vec<TranslationUnit>,
}

/// Partial state collected while walking one `<message>` element.
#[derive(Default)]
struct PendingMessage {
    source: Option<String>,
    unit: Option<TranslationUnit>,
    /// Plural (`numerus="yes"`) messages hold `<numerusform>` children and
    /// are out of scope for the filler.
    numerus: bool,
}

impl TsDocument {
    /// Parses a `.ts` document, locating every translation unit.
    ///
    /// # Errors
    /// Returns [`TsError`] for malformed XML.
    pub fn parse(text: &str) -> Result<Self, TsError> {
        let mut reader = Reader::from_reader(text.as_bytes());
        let mut units = Vec::new();
        let mut message: Option<PendingMessage> = None;

        loop {
            let event_start = position(&reader);
            match reader.read_event()? {
                Event::Start(e) => match e.name().as_ref() {
                    b"message" => {
                        let numerus = has_attribute_value(&e, "numerus", "yes")?;
                        message = Some(PendingMessage { numerus, ..PendingMessage::default() });
                    }
                    b"source" => {
                        if let Some(msg) = message.as_mut() {
                            msg.source = Some(read_element_text(&mut reader, "source")?);
                        }
                    }
                    b"translation" => {
                        if let Some(msg) = message.as_mut() {
                            let state = unit_state(&e)?;
                            let text = read_element_text(&mut reader, "translation")?;
                            let span = event_start..position(&reader);
                            msg.unit = Some(TranslationUnit {
                                source: String::new(),
                                text,
                                state,
                                span,
                                dirty: false,
                            });
                        }
                    }
                    _ => {}
                },
                Event::Empty(e) => match e.name().as_ref() {
                    b"source" => {
                        if let Some(msg) = message.as_mut() {
                            msg.source = Some(String::new());
                        }
                    }
                    b"translation" => {
                        if let Some(msg) = message.as_mut() {
                            let state = unit_state(&e)?;
                            let span = event_start..position(&reader);
                            msg.unit = Some(TranslationUnit {
                                source: String::new(),
                                text: String::new(),
                                state,
                                span,
                                dirty: false,
                            });
                        }
                    }
                    _ => {}
                },
                Event::End(e) => {
                    if e.name().as_ref() == b"message"
                        && let Some(msg) = message.take()
                        && !msg.numerus
                        && let (Some(source), Some(mut unit)) = (msg.source, msg.unit)
                    {
                        unit.source = source;
                        units.push(unit);
                    }
                }
                Event::Eof => break,
                _ => {}
            }
        }

        Ok(Self { text: text.to_string(), units })
    }

    /// All translation units in document order.
    #[must_use]
    pub fn units(&self) -> &[TranslationUnit] {
        &self.units
    }

    pub fn units_mut(&mut self) -> &mut [TranslationUnit] {
        &mut self.units
    }

    /// Source phrase → text for every finished unit with a non-empty text.
    ///
    /// Feeds the derived-locale fallback: units finished earlier in the same
    /// run are visible here.
    #[must_use]
    pub fn finished_texts(&self) -> HashMap<String, String> {
        self.units
            .iter()
            .filter(|unit| unit.state == UnitState::Finished && !unit.text.is_empty())
            .map(|unit| (unit.source.clone(), unit.text.clone()))
            .collect()
    }

    /// Serializes the document back to text.
    ///
    /// Filled units get a fresh `<translation>` element with XML-escaped text
    /// spliced over the original element's byte span; every other byte of the
    /// document is copied verbatim.
    #[must_use]
    pub fn write_to_string(&self) -> String {
        let mut out = String::with_capacity(self.text.len());
        let mut cursor = 0usize;

        for unit in &self.units {
            if !unit.dirty {
                continue;
            }
            // Spans come from the parser and are always in bounds and in
            // document order.
            if let Some(before) = self.text.get(cursor..unit.span.start) {
                out.push_str(before);
            }
            out.push_str("<translation>");
            out.push_str(&quick_xml::escape::partial_escape(&unit.text));
            out.push_str("</translation>");
            cursor = unit.span.end;
        }
        if let Some(rest) = self.text.get(cursor..) {
            out.push_str(rest);
        }

        out
    }
}

/// Reader positions index into the in-memory document text and always fit
/// `usize`.
fn position(reader: &Reader<&[u8]>) -> usize {
    usize::try_from(reader.buffer_position()).unwrap_or(usize::MAX)
}

/// Reads the concatenated text content of the current element, consuming
/// events up to and including its end tag. Nested elements are skipped.
fn read_element_text(
    reader: &mut Reader<&[u8]>,
    element: &'static str,
) -> Result<String, TsError> {
    let mut out = String::new();
    loop {
        match reader.read_event()? {
            Event::Text(t) => out.push_str(&t.unescape()?),
            Event::Start(e) => {
                reader.read_to_end(e.name())?;
            }
            Event::End(e) if e.name().as_ref() == element.as_bytes() => break,
            Event::Eof => return Err(TsError::UnexpectedEof(element)),
            _ => {}
        }
    }
    Ok(out)
}

/// Maps the `type` attribute of a `<translation>` element to a unit state.
fn unit_state(element: &BytesStart<'_>) -> Result<UnitState, TsError> {
    let Some(attr) = element.try_get_attribute("type")? else {
        return Ok(UnitState::Finished);
    };
    let value = attr.unescape_value()?;
    // "vanished", "obsolete" and any unknown marker are all left alone.
    Ok(if value.as_ref() == "unfinished" { UnitState::Unfinished } else { UnitState::Obsolete })
}

fn has_attribute_value(
    element: &BytesStart<'_>,
    name: &str,
    expected: &str,
) -> Result<bool, TsError> {
    let Some(attr) = element.try_get_attribute(name)? else {
        return Ok(false);
    };
    Ok(attr.unescape_value()? == expected)
}
