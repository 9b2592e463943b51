//! Document text extraction for uploaded résumés.
//!
//! Supports PDF, DOCX and plain text. Every failure is reported as an
//! [`ExtractError`] value; a panic inside the PDF parser is caught and
//! converted too.

use std::fs;
use std::io::{Cursor, Read};
use std::panic;
use std::path::Path;

use quick_xml::events::Event;
use quick_xml::Reader;
use tracing::{debug, warn};
use zip::ZipArchive;

use crate::error::ExtractError;

const DOCX_BODY_PART: &str = "word/document.xml";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Pdf,
    Docx,
    Txt,
}

impl DocumentFormat {
    /// Accepts `pdf`, `.PDF`, etc. Anything else is `UnsupportedFormat`.
    pub fn from_extension(extension: &str) -> Result<Self, ExtractError> {
        let normalized = extension.trim_start_matches('.').to_lowercase();
        match normalized.as_str() {
            "pdf" => Ok(DocumentFormat::Pdf),
            "docx" => Ok(DocumentFormat::Docx),
            "txt" => Ok(DocumentFormat::Txt),
            _ => Err(ExtractError::UnsupportedFormat(format!(".{normalized}"))),
        }
    }
}

/// Extracts text from `path`, taking the format from the file's own extension.
pub fn extract_text(path: &Path) -> Result<String, ExtractError> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or_default();
    extract_text_as(path, extension)
}

/// Extracts text from `path` using the caller's declared extension.
///
/// Existence is checked first, so a missing `.rtf` file reports `FileNotFound`.
pub fn extract_text_as(path: &Path, declared_extension: &str) -> Result<String, ExtractError> {
    if !path.exists() {
        return Err(ExtractError::FileNotFound(path.to_path_buf()));
    }
    let format = DocumentFormat::from_extension(declared_extension)?;

    let bytes = fs::read(path).map_err(|e| {
        ExtractError::ExtractionFailed(format!("failed to read {}: {e}", path.display()))
    })?;

    let text = extract_format(&bytes, format)?;
    debug!(
        path = %path.display(),
        ?format,
        chars = text.chars().count(),
        "Extracted document text"
    );
    Ok(text)
}

/// Extracts text from an in-memory document.
pub fn extract_bytes(bytes: &[u8], extension: &str) -> Result<String, ExtractError> {
    let format = DocumentFormat::from_extension(extension)?;
    extract_format(bytes, format)
}

fn extract_format(bytes: &[u8], format: DocumentFormat) -> Result<String, ExtractError> {
    let raw = match format {
        DocumentFormat::Pdf => pdf_text(bytes)?,
        DocumentFormat::Docx => docx_text(bytes)?,
        DocumentFormat::Txt => String::from_utf8(bytes.to_vec()).map_err(|e| {
            ExtractError::ExtractionFailed(format!("text file is not valid UTF-8: {e}"))
        })?,
    };
    Ok(raw.trim().to_string())
}

/// One newline after every page, in page order. Blank pages leave just the newline.
///
/// `pdf-extract` panics on some malformed files. The panic is caught and
/// reported as `ExtractionFailed`, but the process-wide panic hook still runs
/// first, so the default hook prints a panic message to stderr. That line is
/// expected; the caught panic is also logged as a warning.
fn pdf_text(bytes: &[u8]) -> Result<String, ExtractError> {
    let pages = panic::catch_unwind(|| pdf_extract::extract_text_from_mem_by_pages(bytes))
        .map_err(|payload| {
            let reason = payload
                .downcast_ref::<&str>()
                .map(|s| s.to_string())
                .or_else(|| payload.downcast_ref::<String>().cloned())
                .unwrap_or_else(|| "unknown panic".to_string());
            warn!(
                %reason,
                bytes = bytes.len(),
                "PDF parser panicked; treating as extraction failure"
            );
            ExtractError::ExtractionFailed("PDF parser aborted on malformed input".to_string())
        })?
        .map_err(|e| ExtractError::ExtractionFailed(format!("failed to parse PDF: {e}")))?;

    let mut text = String::new();
    for page in pages {
        text.push_str(&page);
        text.push('\n');
    }
    Ok(text)
}

/// Text of `word/document.xml` only. Paragraphs inside table cells are
/// included in document order, so tabular résumé layouts still contribute
/// their text; headers, footers and footnotes live in other parts and are not.
fn docx_text(bytes: &[u8]) -> Result<String, ExtractError> {
    let mut archive = ZipArchive::new(Cursor::new(bytes))
        .map_err(|e| ExtractError::ExtractionFailed(format!("not a DOCX container: {e}")))?;

    let mut xml = String::new();
    archive
        .by_name(DOCX_BODY_PART)
        .map_err(|e| ExtractError::ExtractionFailed(format!("missing {DOCX_BODY_PART}: {e}")))?
        .read_to_string(&mut xml)
        .map_err(|e| ExtractError::ExtractionFailed(format!("unreadable {DOCX_BODY_PART}: {e}")))?;

    paragraphs_text(&xml)
        .map_err(|e| ExtractError::ExtractionFailed(format!("malformed {DOCX_BODY_PART}: {e}")))
}

/// Walks WordprocessingML and emits each `<w:p>` followed by a newline.
/// Only `<w:t>` content counts as text. Tabs and breaks map to `\t` and `\n`
/// only inside a run (`<w:r>`); the `<w:tab>` entries of a paragraph's
/// tab-stop list (`<w:pPr><w:tabs>`) are layout, not content.
fn paragraphs_text(xml: &str) -> quick_xml::Result<String> {
    let mut reader = Reader::from_str(xml);
    let mut text = String::new();
    let mut in_run_text = false;
    let mut run_depth = 0usize;

    loop {
        match reader.read_event()? {
            Event::Start(e) => match e.local_name().as_ref() {
                b"r" => run_depth += 1,
                b"t" => in_run_text = true,
                _ => {}
            },
            Event::End(e) => match e.local_name().as_ref() {
                b"r" => run_depth = run_depth.saturating_sub(1),
                b"t" => in_run_text = false,
                b"p" => text.push('\n'),
                _ => {}
            },
            Event::Empty(e) => match e.local_name().as_ref() {
                b"tab" if run_depth > 0 => text.push('\t'),
                b"br" | b"cr" if run_depth > 0 => text.push('\n'),
                b"p" => text.push('\n'),
                _ => {}
            },
            Event::Text(t) if in_run_text => text.push_str(&t.unescape()?),
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(text)
}
