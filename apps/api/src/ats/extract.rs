//! Document extraction — turns an uploaded resume file into plain text.
//!
//! `AppState` holds an `Arc<dyn DocumentExtractor>` so handlers never depend on
//! a concrete parser.

use std::io::{Cursor, Read};

use anyhow::{anyhow, Context};
use async_trait::async_trait;
use bytes::Bytes;
use quick_xml::events::Event;
use quick_xml::Reader;
use tracing::{debug, warn};
use zip::ZipArchive;

use crate::errors::AppError;

/// Upload formats recognised by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Pdf,
    Docx,
    /// Anything else is read as UTF-8 text.
    PlainText,
}

impl DocumentKind {
    pub fn from_filename(filename: &str) -> Self {
        let lower = filename.to_lowercase();
        if lower.ends_with(".pdf") {
            DocumentKind::Pdf
        } else if lower.ends_with(".docx") {
            DocumentKind::Docx
        } else {
            DocumentKind::PlainText
        }
    }
}

#[async_trait]
pub trait DocumentExtractor: Send + Sync {
    async fn extract_text(&self, filename: &str, bytes: Bytes) -> Result<String, AppError>;
}

/// Default extractor: dispatches on the file extension.
pub struct FileTypeExtractor;

#[async_trait]
impl DocumentExtractor for FileTypeExtractor {
    async fn extract_text(&self, filename: &str, bytes: Bytes) -> Result<String, AppError> {
        let kind = DocumentKind::from_filename(filename);
        debug!(filename, ?kind, size = bytes.len(), "Extracting resume text");

        match kind {
            DocumentKind::Pdf => {
                extract_blocking(filename, "PDF", bytes, |data| {
                    pdf_extract::extract_text_from_mem(data).map_err(|e| anyhow!("{e:?}"))
                })
                .await
            }
            DocumentKind::Docx => extract_blocking(filename, "DOCX", bytes, docx_text).await,
            DocumentKind::PlainText => Ok(String::from_utf8_lossy(&bytes).into_owned()),
        }
    }
}

/// Parsers are CPU-bound and may panic on malformed input, so they run on the
/// blocking pool and both failure modes become a 422.
async fn extract_blocking<F>(
    filename: &str,
    format: &str,
    bytes: Bytes,
    parse: F,
) -> Result<String, AppError>
where
    F: FnOnce(&[u8]) -> anyhow::Result<String> + Send + 'static,
{
    let unreadable = || {
        AppError::UnprocessableEntity(format!("Could not extract text from {format} '{filename}'"))
    };

    match tokio::task::spawn_blocking(move || parse(&bytes)).await {
        Ok(Ok(text)) => Ok(text),
        Ok(Err(e)) => {
            warn!(filename, format, error = ?e, "Text extraction failed");
            Err(unreadable())
        }
        Err(e) => {
            warn!(filename, format, error = %e, "Text extraction task aborted");
            Err(unreadable())
        }
    }
}

/// Reads the body text of a DOCX package: the `w:t` runs of `word/document.xml`,
/// one line per `w:p` paragraph.
fn docx_text(data: &[u8]) -> anyhow::Result<String> {
    let mut archive = ZipArchive::new(Cursor::new(data)).context("not a zip archive")?;
    let mut xml = String::new();
    archive
        .by_name("word/document.xml")
        .context("missing word/document.xml")?
        .read_to_string(&mut xml)?;

    document_xml_text(&xml)
}

fn document_xml_text(xml: &str) -> anyhow::Result<String> {
    let mut reader = Reader::from_str(xml);
    let mut paragraphs = Vec::new();
    let mut current = String::new();
    let mut in_text = false;

    loop {
        match reader.read_event().context("malformed word/document.xml")? {
            Event::Start(e) if e.local_name().as_ref() == b"t" => in_text = true,
            Event::End(e) => match e.local_name().as_ref() {
                b"t" => in_text = false,
                b"p" => paragraphs.push(std::mem::take(&mut current)),
                _ => {}
            },
            Event::Empty(e) => match e.local_name().as_ref() {
                b"tab" => current.push('\t'),
                b"br" | b"cr" => current.push('\n'),
                b"p" => paragraphs.push(std::mem::take(&mut current)),
                _ => {}
            },
            Event::Text(t) if in_text => current.push_str(&t.unescape()?),
            Event::Eof => break,
            _ => {}
        }
    }
    if !current.is_empty() {
        paragraphs.push(current);
    }

    Ok(paragraphs.join("\n"))
}
