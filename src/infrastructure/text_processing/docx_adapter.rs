use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use quick_xml::Reader;
use quick_xml::escape::partial_escape;
use quick_xml::events::{BytesStart, Event};
use zip::ZipArchive;

use crate::application::ports::{ExtractionError, Extractor};
use crate::domain::{ExtractedUnit, ExtractorKind, SourceReference};

use super::upload_source::uploaded_file;

const DOCUMENT_PART: &str = "word/document.xml";

/// Renders the body of a `.docx` as HTML, in a single unit.
#[derive(Default)]
pub struct DocxAdapter;

impl DocxAdapter {
    pub fn new() -> Self {
        Self
    }

    fn convert(path: &Path) -> Result<String, ExtractionError> {
        let xml = read_document_part(path)?;
        render_html(&xml)
    }
}

#[async_trait]
impl Extractor for DocxAdapter {
    fn kind(&self) -> ExtractorKind {
        ExtractorKind::Docx
    }

    #[tracing::instrument(skip(self, reference), fields(source = %reference.describe()))]
    async fn extract(
        &self,
        reference: &SourceReference,
    ) -> Result<Vec<ExtractedUnit>, ExtractionError> {
        let file = uploaded_file(reference, ExtractorKind::Docx)?;
        let path: PathBuf = file.path().to_path_buf();

        let html = tokio::task::spawn_blocking(move || Self::convert(&path))
            .await
            .map_err(|e| ExtractionError::UnreadableDocument(format!("task join error: {e}")))??;

        tracing::info!(html_len = html.len(), "DOCX conversion complete");

        Ok(vec![ExtractedUnit::new(html)])
    }
}

fn unreadable(message: impl Into<String>) -> ExtractionError {
    ExtractionError::UnreadableDocument(message.into())
}

fn read_document_part(path: &Path) -> Result<String, ExtractionError> {
    let file = File::open(path).map_err(|e| unreadable(format!("failed to open DOCX: {e}")))?;
    let mut archive =
        ZipArchive::new(file).map_err(|e| unreadable(format!("not a DOCX archive: {e}")))?;
    let mut part = archive
        .by_name(DOCUMENT_PART)
        .map_err(|e| unreadable(format!("missing {DOCUMENT_PART}: {e}")))?;

    let mut xml = String::new();
    part.read_to_string(&mut xml)
        .map_err(|e| unreadable(format!("failed to read {DOCUMENT_PART}: {e}")))?;
    Ok(xml)
}

#[derive(Default)]
struct Paragraph {
    style: Option<String>,
    list_item: bool,
    html: String,
    nested: Vec<Paragraph>,
}

impl Paragraph {
    fn tag(&self) -> &'static str {
        let Some(style) = self.style.as_deref() else {
            return "p";
        };
        let style = style.to_ascii_lowercase();
        if style == "title" {
            return "h1";
        }
        match style.strip_prefix("heading") {
            Some("1") => "h1",
            Some("2") => "h2",
            Some("3") => "h3",
            Some("4") => "h4",
            Some("5") => "h5",
            Some("6") => "h6",
            _ => "p",
        }
    }
}

#[derive(Default)]
struct HtmlWriter {
    out: String,
    list_open: bool,
}

impl HtmlWriter {
    fn paragraph(&mut self, mut paragraph: Paragraph) {
        let nested = std::mem::take(&mut paragraph.nested);
        self.own_paragraph(paragraph);
        for inner in nested {
            self.paragraph(inner);
        }
    }

    fn own_paragraph(&mut self, paragraph: Paragraph) {
        if paragraph.html.trim().is_empty() {
            return;
        }

        if paragraph.list_item {
            if !self.list_open {
                self.out.push_str("<ul>");
                self.list_open = true;
            }
            self.out.push_str("<li>");
            self.out.push_str(&paragraph.html);
            self.out.push_str("</li>");
            return;
        }

        self.close_list();
        let tag = paragraph.tag();
        self.out.push_str(&format!("<{tag}>{}</{tag}>", paragraph.html));
    }

    fn close_list(&mut self) {
        if self.list_open {
            self.out.push_str("</ul>");
            self.list_open = false;
        }
    }

    fn finish(mut self) -> String {
        self.close_list();
        self.out
    }
}

fn style_value(element: &BytesStart<'_>) -> Result<Option<String>, ExtractionError> {
    let Some(attr) = element
        .try_get_attribute("w:val")
        .map_err(|e| unreadable(format!("malformed style attribute: {e}")))?
    else {
        return Ok(None);
    };

    attr.unescape_value()
        .map(|v| Some(v.into_owned()))
        .map_err(|e| unreadable(format!("malformed style attribute: {e}")))
}

/// Streams `word/document.xml` into paragraph, heading and list HTML.
///
/// Paragraphs nested in text boxes are emitted after the paragraph that
/// anchors them. `mc:Fallback` branches duplicate their `mc:Choice` and are skipped.
pub(crate) fn render_html(xml: &str) -> Result<String, ExtractionError> {
    let mut reader = Reader::from_str(xml);
    let mut writer = HtmlWriter::default();
    let mut paragraphs: Vec<Paragraph> = Vec::new();
    let mut run_depth = 0usize;
    let mut text_depth = 0usize;

    loop {
        let event = reader
            .read_event()
            .map_err(|e| unreadable(format!("malformed {DOCUMENT_PART}: {e}")))?;

        match event {
            Event::Start(e) => match e.local_name().as_ref() {
                b"p" => paragraphs.push(Paragraph::default()),
                b"r" => run_depth += 1,
                b"t" => text_depth += 1,
                b"numPr" => {
                    if let Some(p) = paragraphs.last_mut() {
                        p.list_item = true;
                    }
                }
                b"Fallback" => {
                    reader
                        .read_to_end(e.name())
                        .map_err(|e| unreadable(format!("malformed {DOCUMENT_PART}: {e}")))?;
                }
                _ => {}
            },
            Event::Empty(e) => {
                let Some(p) = paragraphs.last_mut() else {
                    continue;
                };
                match e.local_name().as_ref() {
                    b"pStyle" => p.style = style_value(&e)?,
                    b"numPr" => p.list_item = true,
                    b"tab" if run_depth > 0 => p.html.push('\t'),
                    b"br" | b"cr" if run_depth > 0 => p.html.push_str("<br />"),
                    _ => {}
                }
            }
            Event::Text(t) if text_depth > 0 => {
                let text = t
                    .unescape()
                    .map_err(|e| unreadable(format!("malformed text run: {e}")))?;
                if let Some(p) = paragraphs.last_mut() {
                    p.html.push_str(&partial_escape(text.as_ref()));
                }
            }
            Event::End(e) => match e.local_name().as_ref() {
                b"t" => text_depth = text_depth.saturating_sub(1),
                b"r" => run_depth = run_depth.saturating_sub(1),
                b"p" => {
                    if let Some(p) = paragraphs.pop() {
                        match paragraphs.last_mut() {
                            Some(anchor) => anchor.nested.push(p),
                            None => writer.paragraph(p),
                        }
                    }
                }
                _ => {}
            },
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(writer.finish())
}
