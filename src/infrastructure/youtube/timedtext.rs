use quick_xml::Reader;
use quick_xml::escape::unescape;
use quick_xml::events::{BytesStart, Event};

use crate::application::ports::{CaptionFetchError, CaptionLine};

/// Decodes a timedtext document.
///
/// Handles both the legacy `<text start="1.5">` layout (seconds) and the
/// format 3 `<p t="1500">` layout (milliseconds). Caption text arrives
/// escaped twice, so entities are resolved a second time after parsing.
pub fn parse_timedtext(xml: &str) -> Result<Vec<CaptionLine>, CaptionFetchError> {
    let mut reader = Reader::from_str(xml);
    let mut lines = Vec::new();
    let mut current: Option<(f64, String)> = None;

    loop {
        let event = reader.read_event().map_err(invalid)?;

        match event {
            Event::Start(e) => {
                if let Some(start_secs) = start_of(&e)? {
                    current = Some((start_secs, String::new()));
                }
            }
            Event::Text(t) => {
                if let Some((_, text)) = current.as_mut() {
                    let once = t.unescape().map_err(invalid)?;
                    match unescape(&once) {
                        Ok(twice) => text.push_str(&twice),
                        Err(_) => text.push_str(&once),
                    }
                }
            }
            Event::End(e) => {
                if matches!(e.local_name().as_ref(), b"text" | b"p") {
                    if let Some((start_secs, text)) = current.take() {
                        let text = text.split_whitespace().collect::<Vec<_>>().join(" ");
                        if !text.is_empty() {
                            lines.push(CaptionLine::new(text, start_secs));
                        }
                    }
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(lines)
}

fn invalid(err: impl std::fmt::Display) -> CaptionFetchError {
    CaptionFetchError::InvalidResponse(format!("timedtext: {err}"))
}

fn start_of(element: &BytesStart<'_>) -> Result<Option<f64>, CaptionFetchError> {
    let (attribute, divisor) = match element.local_name().as_ref() {
        b"text" => ("start", 1.0),
        b"p" => ("t", 1000.0),
        _ => return Ok(None),
    };

    let value = element
        .try_get_attribute(attribute)
        .map_err(invalid)?
        .and_then(|attr| attr.unescape_value().ok())
        .and_then(|v| v.parse::<f64>().ok())
        .unwrap_or(0.0);

    Ok(Some(value / divisor))
}
