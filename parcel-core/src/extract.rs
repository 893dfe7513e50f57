//! Recovering the carrier's tracking number from a label document.
//!
//! The carrier prints the tracking number on the label but does not return
//! it in the API response, so the label's text is searched for the first
//! 12-digit number standing on its own.

use crate::ParseError;
use lopdf::Document;
use regex::Regex;
use std::sync::LazyLock;

static TRACKING_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b\d{12}\b").expect("valid tracking number pattern"));

/// The first 12-digit run in `text` that is bounded by word boundaries.
pub fn find_tracking_number(text: &str) -> Option<&str> {
    TRACKING_NUMBER.find(text).map(|found| found.as_str())
}

/// The text of every page of a PDF, concatenated in page order without
/// separators.
pub fn pdf_text(document: &[u8]) -> Result<String, ParseError> {
    let document = Document::load_mem(document)?;

    let mut text = String::new();
    for page_number in document.get_pages().into_keys() {
        // lopdf ends every text object with a newline; drop the page's last one.
        let page_text = document.extract_text(&[page_number])?;
        text.push_str(page_text.strip_suffix('\n').unwrap_or(&page_text));
    }

    Ok(text)
}

/// Extract the tracking number from a stored label document.
///
/// Only PDFs are searched; for any other document this is `Ok(None)`
/// without looking at the bytes. A PDF without a match is also `Ok(None)`.
pub fn extract_tracking_number(
    document: &[u8],
    is_pdf: bool,
) -> Result<Option<String>, ParseError> {
    if !is_pdf {
        return Ok(None);
    }

    let text = pdf_text(document)?;
    Ok(find_tracking_number(&text).map(str::to_owned))
}

#[cfg(test)]
mod tests {
    use super::*;
    use lopdf::{
        Object, Stream,
        content::{Content, Operation},
        dictionary,
    };
    use rstest::rstest;

    // A minimal one-font PDF with one text line per page.
    fn pdf_with_pages(pages: &[&str]) -> Vec<u8> {
        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();
        let font_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Courier",
            "Encoding" => "WinAnsiEncoding",
        });
        let resources_id = doc.add_object(dictionary! {
            "Font" => dictionary! { "F1" => font_id },
        });

        let kids = pages
            .iter()
            .map(|line| {
                let content = Content {
                    operations: vec![
                        Operation::new("BT", vec![]),
                        Operation::new("Tf", vec!["F1".into(), 12.into()]),
                        Operation::new("Td", vec![72.into(), 720.into()]),
                        Operation::new("Tj", vec![Object::string_literal(*line)]),
                        Operation::new("ET", vec![]),
                    ],
                };
                let content_id =
                    doc.add_object(Stream::new(dictionary! {}, content.encode().unwrap()));
                doc.add_object(dictionary! {
                    "Type" => "Page",
                    "Parent" => pages_id,
                    "Contents" => content_id,
                    "Resources" => resources_id,
                })
                .into()
            })
            .collect::<Vec<Object>>();

        let count = kids.len() as i64;
        doc.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => kids,
                "Count" => count,
                "MediaBox" => vec![0.into(), 0.into(), 595.into(), 842.into()],
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

    #[rstest]
    #[case::surrounded("...Ref 123456789012 End...", Some("123456789012"))]
    #[case::punctuation("Tracking:123456789012.", Some("123456789012"))]
    #[case::first_wins("111111111111 222222222222", Some("111111111111"))]
    #[case::too_long("1234567890123", None)]
    #[case::too_short("12345678901", None)]
    #[case::glued_to_letters("ID123456789012", None)]
    #[case::none("no digits here", None)]
    fn finds_tracking_numbers(#[case] text: &str, #[case] expected: Option<&str>) {
        assert_eq!(find_tracking_number(text), expected);
    }

    #[test]
    fn extracts_from_pdf() {
        let pdf = pdf_with_pages(&["GLS Parcel", "Ref 123456789012 End"]);
        assert_eq!(
            extract_tracking_number(&pdf, true).unwrap().as_deref(),
            Some("123456789012")
        );
    }

    #[test]
    fn pages_are_read_in_order() {
        let pdf = pdf_with_pages(&["first 111111111111", "second 222222222222"]);
        let text = pdf_text(&pdf).unwrap();
        let first = text.find("first").unwrap();
        let second = text.find("second").unwrap();
        assert!(first < second);
        assert_eq!(find_tracking_number(&text), Some("111111111111"));
    }

    #[test]
    fn pages_are_joined_without_separators() {
        let pdf = pdf_with_pages(&["Ref 123456", "789012 End"]);
        assert_eq!(pdf_text(&pdf).unwrap(), "Ref 123456789012 End");
        assert_eq!(
            extract_tracking_number(&pdf, true).unwrap().as_deref(),
            Some("123456789012")
        );
    }

    #[test]
    fn pdf_without_number() {
        let pdf = pdf_with_pages(&["no tracking here"]);
        assert_eq!(extract_tracking_number(&pdf, true).unwrap(), None);
    }

    #[test]
    fn skips_non_pdf_documents() {
        assert_eq!(extract_tracking_number(b"not a pdf", false).unwrap(), None);
    }

    #[test]
    fn rejects_malformed_pdf() {
        assert!(matches!(
            extract_tracking_number(b"%PDF-garbage", true),
            Err(ParseError::Document(_))
        ));
    }
}
