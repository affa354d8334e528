use crate::extraction::PageContent;

/// Reading-order text reconstructed from positioned page blocks.
#[derive(Debug, Clone)]
pub struct DocumentText {
    /// One entry per kept block, in reading order across all pages.
    pub lines: Vec<String>,
    /// The whole document as one whitespace-collapsed line.
    pub flat: String,
    /// Lowercase twin of `flat` with identical byte offsets.
    pub flat_lower: String,
}

impl DocumentText {
    /// Rebuild reading order from positioned blocks.
    ///
    /// Blocks are sorted per page by rounded top coordinate, then rounded
    /// left coordinate, which approximates top-to-bottom, left-to-right
    /// order even when the PDF stores them column-scrambled. Blocks that
    /// are empty after whitespace normalization are dropped.
    pub fn from_pages(pages: &[PageContent]) -> DocumentText {
        let mut lines = Vec::new();
        for page in pages {
            let mut blocks: Vec<(i64, i64, String)> = page
                .blocks
                .iter()
                .filter_map(|b| {
                    let text = normalize_ws(&b.text);
                    if text.is_empty() {
                        None
                    } else {
                        Some((
                            b.bbox.y_min.round() as i64,
                            b.bbox.x_min.round() as i64,
                            text,
                        ))
                    }
                })
                .collect();
            blocks.sort_by_key(|(y, x, _)| (*y, *x));
            lines.extend(blocks.into_iter().map(|(_, _, text)| text));
        }

        let flat = lines.join(" ");
        let flat_lower = lowercase_aligned(&flat);

        DocumentText {
            lines,
            flat,
            flat_lower,
        }
    }

    /// The newline-separated reconstructed document.
    pub fn reconstructed(&self) -> String {
        self.lines.join("\n")
    }

    pub fn is_empty(&self) -> bool {
        self.flat.is_empty()
    }
}

/// Lowercase `s` without moving any byte offset: a character whose
/// lowercase form would occupy a different number of bytes (or expand to
/// several characters) is kept as-is. Byte ranges found in the result are
/// therefore always valid ranges into `s`.
pub fn lowercase_aligned(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        let mut lower = c.to_lowercase();
        match (lower.next(), lower.next()) {
            (Some(l), None) if l.len_utf8() == c.len_utf8() => out.push(l),
            _ => out.push(c),
        }
    }
    out
}

fn normalize_ws(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Build a one-block document, for tests of the search routines.
#[cfg(test)]
pub(crate) fn doc_from(text: &str) -> DocumentText {
    use crate::extraction::{BBox, TextBlock};

    DocumentText::from_pages(&[PageContent {
        page_number: 1,
        blocks: vec![TextBlock {
            text: text.to_string(),
            bbox: BBox {
                x_min: 0.0,
                y_min: 0.0,
                x_max: 100.0,
                y_max: 10.0,
            },
        }],
    }])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extraction::{BBox, TextBlock};

    fn block(y: f32, x: f32, text: &str) -> TextBlock {
        TextBlock {
            text: text.to_string(),
            bbox: BBox {
                x_min: x,
                y_min: y,
                x_max: x + 100.0,
                y_max: y + 10.0,
            },
        }
    }

    fn page(blocks: Vec<TextBlock>) -> PageContent {
        PageContent {
            page_number: 1,
            blocks,
        }
    }

    #[test]
    fn blocks_sorted_by_row_then_column() {
        let doc = DocumentText::from_pages(&[page(vec![
            block(72.0, 300.0, "B 99 ABC"),
            block(40.0, 56.0, "POLIȚĂ RCA"),
            block(72.0, 56.0, "Nr. înmatriculare:"),
        ])]);
        assert_eq!(
            doc.lines,
            vec!["POLIȚĂ RCA", "Nr. înmatriculare:", "B 99 ABC"]
        );
        assert_eq!(doc.flat, "POLIȚĂ RCA Nr. înmatriculare: B 99 ABC");
    }

    #[test]
    fn near_equal_rows_collapse_after_rounding() {
        // 71.6 and 72.4 both round to 72, so the column order decides.
        let doc = DocumentText::from_pages(&[page(vec![
            block(72.4, 200.0, "dreapta"),
            block(71.6, 56.0, "stânga"),
        ])]);
        assert_eq!(doc.lines, vec!["stânga", "dreapta"]);
    }

    #[test]
    fn empty_blocks_are_dropped() {
        let doc = DocumentText::from_pages(&[page(vec![
            block(40.0, 56.0, "   "),
            block(50.0, 56.0, ""),
            block(60.0, 56.0, "Asigurat"),
        ])]);
        assert_eq!(doc.lines, vec!["Asigurat"]);
    }

    #[test]
    fn block_whitespace_is_collapsed() {
        let doc = DocumentText::from_pages(&[page(vec![block(
            40.0,
            56.0,
            "de la   01.03.2024\tpână la  01.03.2025",
        )])]);
        assert_eq!(doc.flat, "de la 01.03.2024 până la 01.03.2025");
    }

    #[test]
    fn no_pages_give_empty_document() {
        let doc = DocumentText::from_pages(&[]);
        assert!(doc.is_empty());
        assert_eq!(doc.reconstructed(), "");
    }

    #[test]
    fn lowercase_aligned_handles_romanian_diacritics() {
        let lower = lowercase_aligned("POLIȚĂ Șasiu ÎNMATRICULARE Â");
        assert_eq!(lower, "poliță șasiu înmatriculare â");
        assert_eq!(lower.len(), "POLIȚĂ Șasiu ÎNMATRICULARE Â".len());
    }

    #[test]
    fn lowercase_aligned_keeps_length_changing_chars() {
        // 'İ' lowercases to two code points; it must stay as-is so byte
        // offsets keep lining up.
        let original = "İSTANBUL";
        let lower = lowercase_aligned(original);
        assert_eq!(lower.len(), original.len());
        assert!(lower.starts_with('İ'));
        assert!(lower.ends_with("stanbul"));
    }
}
