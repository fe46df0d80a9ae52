// src/specs/exam.rs
//
// Course page → exam modality text. The section is a <div> with a direct
// <h3> child whose text is one of the labels; labels are tried in order.

use scraper::{ElementRef, Html};

use crate::core::html::{self, all_text, child_elements};
use crate::error::ScrapeError;

/// Text of the first exam section found, label stripped.
///
/// The heading must equal a label exactly apart from surrounding whitespace,
/// so `<h3> EXAM DESCRIPTION </h3>` matches but `EXAM DESCRIPTION (notes)` does not.
pub fn extract_exam_text(html_doc: &str, labels: &[&str]) -> Result<String, ScrapeError> {
    let doc = html::parse(html_doc);
    let container = labels
        .iter()
        .find_map(|label| find_section(&doc, label))
        .ok_or(ScrapeError::NotFound { what: "exam section" })?;

    let mut text = all_text(container).trim().to_string();
    for label in labels {
        text = text.replace(label, "").trim().to_string();
    }
    Ok(text)
}

fn find_section<'a>(doc: &'a Html, label: &str) -> Option<ElementRef<'a>> {
    doc.root_element()
        .descendants()
        .filter_map(ElementRef::wrap)
        .filter(|el| el.value().name() == "div")
        .find(|div| child_elements(*div, "h3").any(|h3| all_text(h3).trim() == label))
}
