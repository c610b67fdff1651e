//! Text extraction from PDF and DOCX documents

use crate::error::{Result, ResumeParserError};
use crate::input::document::Document;
use log::debug;
use pdf_extract::{ConvertToFmt, MediaBox, OutputDev, OutputError, PlainTextOutput, Transform};
use quick_xml::events::Event;
use quick_xml::Reader;
use std::cell::RefCell;
use std::fmt;
use std::io::{Cursor, Read};
use std::rc::Rc;

const DOCX_BODY_PART: &str = "word/document.xml";

pub trait TextExtractor {
    fn extract(&self, document: &Document) -> Result<String>;
}

pub struct PdfExtractor;

impl TextExtractor for PdfExtractor {
    fn extract(&self, document: &Document) -> Result<String> {
        let bytes = document.bytes.as_slice();

        // pdf-extract panics on some malformed inputs instead of returning an error
        let outcome = std::panic::catch_unwind(|| PdfExtractor::decode_pages(bytes));

        match outcome {
            Ok(Ok(text)) => {
                debug!("Decoded {} characters from PDF text layer", text.len());
                Ok(text)
            }
            Ok(Err(e)) => Err(ResumeParserError::DocumentCorrupt(format!(
                "Failed to extract text from PDF '{}': {}",
                document.source().display(),
                e
            ))),
            Err(_) => Err(ResumeParserError::DocumentCorrupt(format!(
                "PDF decoder aborted on '{}'",
                document.source().display()
            ))),
        }
    }
}

impl PdfExtractor {
    /// Text layer of every page in document order, each page ending in a newline.
    fn decode_pages(bytes: &[u8]) -> std::result::Result<String, OutputError> {
        let pdf = lopdf::Document::load_mem(bytes).map_err(OutputError::PdfError)?;

        let text = PageText::default();
        let mut output = PagedTextOutput {
            text: text.clone(),
            inner: PlainTextOutput::new(text.clone()),
        };
        pdf_extract::output_doc(&pdf, &mut output)?;
        drop(output);

        Ok(text.into_string())
    }
}

/// Text buffer shared between the plain-text renderer and the page wrapper.
#[derive(Clone, Default)]
struct PageText(Rc<RefCell<String>>);

impl PageText {
    fn push(&self, c: char) {
        self.0.borrow_mut().push(c);
    }

    fn into_string(self) -> String {
        self.0.borrow().clone()
    }
}

impl fmt::Write for PageText {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.0.borrow_mut().push_str(s);
        Ok(())
    }
}

impl ConvertToFmt for PageText {
    type Writer = PageText;

    fn convert(self) -> Self::Writer {
        self
    }
}

/// pdf-extract's plain-text renderer with a line break after every page.
struct PagedTextOutput {
    text: PageText,
    inner: PlainTextOutput<PageText>,
}

impl OutputDev for PagedTextOutput {
    fn begin_page(
        &mut self,
        page_num: u32,
        media_box: &MediaBox,
        art_box: Option<(f64, f64, f64, f64)>,
    ) -> std::result::Result<(), OutputError> {
        self.inner.begin_page(page_num, media_box, art_box)
    }

    fn end_page(&mut self) -> std::result::Result<(), OutputError> {
        self.inner.end_page()?;
        self.text.push('\n');
        Ok(())
    }

    fn output_character(
        &mut self,
        trm: &Transform,
        width: f64,
        spacing: f64,
        font_size: f64,
        glyph: &str,
    ) -> std::result::Result<(), OutputError> {
        self.inner.output_character(trm, width, spacing, font_size, glyph)
    }

    fn begin_word(&mut self) -> std::result::Result<(), OutputError> {
        self.inner.begin_word()
    }

    fn end_word(&mut self) -> std::result::Result<(), OutputError> {
        self.inner.end_word()
    }

    fn end_line(&mut self) -> std::result::Result<(), OutputError> {
        self.inner.end_line()
    }
}

pub struct DocxExtractor;

impl TextExtractor for DocxExtractor {
    fn extract(&self, document: &Document) -> Result<String> {
        let corrupt = |what: String| {
            ResumeParserError::DocumentCorrupt(format!(
                "Failed to read DOCX '{}': {}",
                document.source().display(),
                what
            ))
        };

        let mut archive = zip::ZipArchive::new(Cursor::new(document.bytes.as_slice()))
            .map_err(|e| corrupt(format!("not a valid OOXML container ({})", e)))?;

        let mut body = archive
            .by_name(DOCX_BODY_PART)
            .map_err(|e| corrupt(format!("missing {} ({})", DOCX_BODY_PART, e)))?;

        let mut xml = String::new();
        body.read_to_string(&mut xml)
            .map_err(|e| corrupt(format!("unreadable {} ({})", DOCX_BODY_PART, e)))?;

        let paragraphs = DocxExtractor::paragraphs(&xml).map_err(corrupt)?;
        debug!("Read {} paragraphs from DOCX body", paragraphs.len());

        Ok(paragraphs.join("\n"))
    }
}

impl DocxExtractor {
    /// Text of every body paragraph in document order.
    ///
    /// Paragraphs nested in tables or text boxes are skipped. Inside a run,
    /// `w:tab` becomes a tab and `w:br`/`w:cr` a line break.
    pub fn paragraphs(xml: &str) -> std::result::Result<Vec<String>, String> {
        let mut reader = Reader::from_str(xml);

        let mut paragraphs = Vec::new();
        let mut current: Option<String> = None;
        let mut skip_depth: usize = 0;
        let mut in_run = false;
        let mut in_text = false;

        loop {
            match reader.read_event() {
                Ok(Event::Start(ref e)) => match e.name().as_ref() {
                    b"w:tbl" | b"w:txbxContent" => skip_depth += 1,
                    b"w:p" if skip_depth == 0 => current = Some(String::new()),
                    b"w:r" => in_run = true,
                    b"w:t" => in_text = true,
                    _ => {}
                },
                Ok(Event::Empty(ref e)) => {
                    if skip_depth > 0 {
                        continue;
                    }
                    match e.name().as_ref() {
                        b"w:p" => paragraphs.push(String::new()),
                        b"w:tab" if in_run => {
                            if let Some(text) = current.as_mut() {
                                text.push('\t');
                            }
                        }
                        b"w:br" | b"w:cr" if in_run => {
                            if let Some(text) = current.as_mut() {
                                text.push('\n');
                            }
                        }
                        _ => {}
                    }
                }
                Ok(Event::End(ref e)) => match e.name().as_ref() {
                    b"w:tbl" | b"w:txbxContent" => skip_depth = skip_depth.saturating_sub(1),
                    b"w:p" if skip_depth == 0 => {
                        if let Some(text) = current.take() {
                            paragraphs.push(text);
                        }
                    }
                    b"w:r" => in_run = false,
                    b"w:t" => in_text = false,
                    _ => {}
                },
                Ok(Event::Text(ref e)) => {
                    if in_text && skip_depth == 0 {
                        if let Some(text) = current.as_mut() {
                            let unescaped = e
                                .unescape()
                                .map_err(|err| format!("bad text entity: {}", err))?;
                            text.push_str(&unescaped);
                        }
                    }
                }
                Ok(Event::CData(ref e)) => {
                    if in_text && skip_depth == 0 {
                        if let Some(text) = current.as_mut() {
                            text.push_str(&String::from_utf8_lossy(e));
                        }
                    }
                }
                Ok(Event::Eof) => break,
                Err(e) => {
                    return Err(format!(
                        "malformed XML at position {}: {}",
                        reader.buffer_position(),
                        e
                    ));
                }
                _ => {}
            }
        }

        Ok(paragraphs)
    }
}
