use crate::error::PolitaError;
use crate::extraction::{BBox, PageContent, PdfExtractor, TextBlock, MAX_PAGES};
use std::io::Write;
use std::process::Command;

/// PDF extraction backend using pdftotext (from poppler-utils).
///
/// Uses `pdftotext -bbox-layout`, which reports a bounding box per line;
/// the parser needs those coordinates to rebuild reading order when the
/// internal text order of the PDF is column-scrambled.
pub struct PdftotextExtractor;

impl PdftotextExtractor {
    pub fn new() -> Self {
        PdftotextExtractor
    }

    /// Check if pdftotext is available on the system.
    pub fn is_available() -> bool {
        Command::new("pdftotext")
            .arg("-v")
            .output()
            .map(|o| o.status.success() || !o.stderr.is_empty())
            .unwrap_or(false)
    }
}

impl Default for PdftotextExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl PdfExtractor for PdftotextExtractor {
    fn extract_pages(&self, pdf_bytes: &[u8]) -> Result<Vec<PageContent>, PolitaError> {
        // Write PDF bytes to a temp file
        let mut tmpfile =
            tempfile::NamedTempFile::new().map_err(|e| PolitaError::Extraction(e.to_string()))?;
        tmpfile
            .write_all(pdf_bytes)
            .map_err(|e| PolitaError::Extraction(e.to_string()))?;

        let output = Command::new("pdftotext")
            .arg("-bbox-layout")
            .arg("-l")
            .arg(MAX_PAGES.to_string())
            .arg(tmpfile.path())
            .arg("-") // output to stdout
            .output()
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    PolitaError::PdftotextNotFound
                } else {
                    PolitaError::Extraction(format!("pdftotext failed: {}", e))
                }
            })?;

        if !output.status.success() {
            let code = output.status.code().unwrap_or(-1);
            let stderr = String::from_utf8_lossy(&output.stderr).to_string();
            return Err(PolitaError::PdftotextFailed { code, stderr });
        }

        let xml = String::from_utf8_lossy(&output.stdout);
        Ok(parse_bbox_pages(&xml))
    }

    fn backend_name(&self) -> &str {
        "pdftotext"
    }
}

/// Parse the -bbox-layout XML into per-page positioned text blocks.
///
/// The output nests word elements inside line/block/flow/page elements;
/// one TextBlock is produced per line element. Page elements carry no
/// number attribute, so pages are numbered in order of appearance.
fn parse_bbox_pages(xml: &str) -> Vec<PageContent> {
    let mut pages: Vec<PageContent> = Vec::new();
    let mut current_bbox: Option<BBox> = None;
    let mut current_words: Vec<String> = Vec::new();

    for raw in xml.lines() {
        let line = raw.trim();

        if line.starts_with("<page ") {
            pages.push(PageContent {
                page_number: pages.len() + 1,
                blocks: Vec::new(),
            });
            continue;
        }

        if line.starts_with("<line ") {
            current_bbox = parse_bbox(line);
            current_words.clear();
            continue;
        }

        if line.starts_with("<word ") {
            if let Some(word_text) = parse_word_text(line) {
                let w = decode_xml_entities(&word_text).trim().to_string();
                if !w.is_empty() {
                    current_words.push(w);
                }
            }
            continue;
        }

        if line.starts_with("</line>") {
            if let (Some(page), Some(bbox)) = (pages.last_mut(), current_bbox.take()) {
                let text = current_words.join(" ");
                if !text.is_empty() {
                    page.blocks.push(TextBlock { text, bbox });
                }
            }
            current_words.clear();
        }
    }

    pages
}

fn parse_attr_f32(tag: &str, name: &str) -> Option<f32> {
    parse_attr(tag, name)?.parse().ok()
}

fn parse_attr<'a>(tag: &'a str, name: &str) -> Option<&'a str> {
    let needle = format!("{}=\"", name);
    let start = tag.find(&needle)? + needle.len();
    let rest = &tag[start..];
    let end = rest.find('"')?;
    Some(&rest[..end])
}

fn parse_bbox(line_tag: &str) -> Option<BBox> {
    Some(BBox {
        x_min: parse_attr_f32(line_tag, "xMin")?,
        y_min: parse_attr_f32(line_tag, "yMin")?,
        x_max: parse_attr_f32(line_tag, "xMax")?,
        y_max: parse_attr_f32(line_tag, "yMax")?,
    })
}

fn parse_word_text(word_tag: &str) -> Option<String> {
    let start = word_tag.find('>')? + 1;
    let end = word_tag.rfind("</word>")?;
    Some(word_tag[start..end].to_string())
}

fn decode_xml_entities(s: &str) -> String {
    s.replace("&amp;", "&")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&apos;", "'")
}
