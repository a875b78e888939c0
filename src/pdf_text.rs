// src/pdf_text.rs
//! Page-ordered text extraction from an uploaded profile PDF.

use lopdf::Document;
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("could not read the uploaded PDF: {0}")]
    InvalidPdf(#[from] lopdf::Error),

    #[error("the uploaded PDF is password protected")]
    Encrypted,
}

/// Extract the full text of a PDF held in memory.
///
/// Pages are visited in document order and their text concatenated with no
/// separator, so text on adjacent pages can merge without whitespace. A page
/// that yields no extractable text (scanned or image-only) contributes
/// nothing instead of failing the run. Pure function of the input bytes.
pub fn extract_profile_text(pdf_bytes: &[u8]) -> Result<String, ExtractionError> {
    let document = Document::load_mem(pdf_bytes)?;

    if document.is_encrypted() {
        return Err(ExtractionError::Encrypted);
    }

    let mut full_text = String::new();
    for (page_number, _page_id) in document.get_pages() {
        match document.extract_text(&[page_number]) {
            Ok(text) => full_text.push_str(&text),
            Err(e) => warn!("No text extracted from page {}: {}", page_number, e),
        }
    }

    debug!("Extracted {} characters of profile text", full_text.len());
    Ok(full_text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use lopdf::content::{Content, Operation};
    use lopdf::{dictionary, Object, Stream};

    fn pdf_with_pages(page_texts: &[&str]) -> Vec<u8> {
        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();

        let font_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Helvetica",
        });

        let mut kids: Vec<Object> = Vec::new();
        for text in page_texts {
            let content = Content {
                operations: vec![
                    Operation::new("BT", vec![]),
                    Operation::new("Tf", vec!["F1".into(), 24.into()]),
                    Operation::new("Td", vec![50.into(), 700.into()]),
                    Operation::new("Tj", vec![Object::string_literal(*text)]),
                    Operation::new("ET", vec![]),
                ],
            };
            let content_id =
                doc.add_object(Stream::new(dictionary! {}, content.encode().unwrap()));
            let page_id = doc.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "Contents" => content_id,
                "Resources" => dictionary! {
                    "Font" => dictionary! { "F1" => font_id },
                },
                "MediaBox" => vec![0.into(), 0.into(), 595.into(), 842.into()],
            });
            kids.push(page_id.into());
        }

        let count = kids.len() as i64;
        doc.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => kids,
                "Count" => count,
            }),
        );

        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);

        let mut bytes = Vec::new();
        doc.save_to(&mut bytes).unwrap();
        bytes
    }

    #[test]
    fn concatenates_pages_in_document_order() {
        let bytes = pdf_with_pages(&["AlphaResume", "BravoSkills"]);
        let text = extract_profile_text(&bytes).unwrap();

        let alpha = text.find("AlphaResume").expect("first page text missing");
        let bravo = text.find("BravoSkills").expect("second page text missing");
        assert!(alpha < bravo);
    }

    #[test]
    fn extraction_is_idempotent() {
        let bytes = pdf_with_pages(&["AlphaResume", "BravoSkills", "CharliePage"]);
        let first = extract_profile_text(&bytes).unwrap();
        let second = extract_profile_text(&bytes).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn page_without_text_contributes_nothing() {
        let bytes = pdf_with_pages(&["AlphaResume", "", "CharliePage"]);
        let text = extract_profile_text(&bytes).unwrap();
        assert!(text.contains("AlphaResume"));
        assert!(text.contains("CharliePage"));
    }

    #[test]
    fn garbage_bytes_are_rejected() {
        let result = extract_profile_text(b"this is not a pdf at all");
        assert!(matches!(result, Err(ExtractionError::InvalidPdf(_))));
    }
}
