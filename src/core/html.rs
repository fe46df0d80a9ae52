// src/core/html.rs
//
// Small DOM helpers on top of `scraper`. Everything here walks element
// children explicitly so that "direct child" semantics stay exact.

use scraper::{ElementRef, Html, Node};

/// One hop of a fixed structural path: the `tag` children of the current
/// element, optionally narrowed to the nth one (1-based, counted among same-tag siblings).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Step {
    pub tag: &'static str,
    pub nth: Option<usize>,
}

impl Step {
    pub const fn any(tag: &'static str) -> Self { Self { tag, nth: None } }
    pub const fn nth(tag: &'static str, n: usize) -> Self { Self { tag, nth: Some(n) } }

    fn apply<'a>(&self, el: ElementRef<'a>) -> Vec<ElementRef<'a>> {
        let matches = child_elements(el, self.tag);
        match self.nth {
            Some(n) if n >= 1 => matches.skip(n - 1).take(1).collect(),
            Some(_) => Vec::new(),
            None => matches.collect(),
        }
    }
}

pub fn parse(html: &str) -> Html {
    Html::parse_document(html)
}

/// Follow `path` from the `<html>` root; first match in document order.
pub fn select_path<'a>(doc: &'a Html, path: &[Step]) -> Option<ElementRef<'a>> {
    let mut frontier = vec![doc.root_element()];
    for step in path {
        frontier = frontier.into_iter().flat_map(|el| step.apply(el)).collect();
        if frontier.is_empty() {
            return None;
        }
    }
    frontier.into_iter().next()
}

/// Direct element children named `tag`.
pub fn child_elements<'a>(el: ElementRef<'a>, tag: &'static str) -> impl Iterator<Item = ElementRef<'a>> {
    el.children()
        .filter_map(ElementRef::wrap)
        .filter(move |c| c.value().name() == tag)
}

/// The element's own text nodes (not descendants), each trimmed, empty ones
/// dropped, joined with one space. `Anno<br>Corso` reads as "Anno Corso".
pub fn own_text(el: ElementRef) -> String {
    let parts: Vec<&str> = el
        .children()
        .filter_map(|child| match child.value() {
            Node::Text(t) => Some(t.trim()),
            _ => None,
        })
        .filter(|t| !t.is_empty())
        .collect();
    parts.join(" ")
}

/// Every descendant text node concatenated, markup skipped.
pub fn all_text(el: ElementRef) -> String {
    el.text().collect()
}

/// Rows of a table in document order: direct `<tr>` plus those inside
/// thead/tbody/tfoot. Rows of nested tables are not included.
pub fn table_rows<'a>(table: ElementRef<'a>) -> Vec<ElementRef<'a>> {
    let mut rows = Vec::new();
    for child in table.children().filter_map(ElementRef::wrap) {
        match child.value().name() {
            "tr" => rows.push(child),
            "thead" | "tbody" | "tfoot" => rows.extend(child_elements(child, "tr")),
            _ => {}
        }
    }
    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"<html><body>
        <div>
          <div>one</div><div>two</div><p>skip</p><div>three</div>
          <div id="fourth"><div>a</div><div>b</div><div id="target"><table id="t"></table></div></div>
        </div>
    </body></html>"#;

    #[test]
    fn select_path_counts_same_tag_siblings_only() {
        let doc = parse(PAGE);
        let path = [Step::any("body"), Step::any("div"), Step::nth("div", 4), Step::nth("div", 3), Step::any("table")];
        let table = select_path(&doc, &path).expect("table");
        assert_eq!(table.value().attr("id"), Some("t"));
    }

    #[test]
    fn select_path_misses_cleanly() {
        let doc = parse(PAGE);
        assert!(select_path(&doc, &[Step::any("body"), Step::nth("div", 2)]).is_none());
        assert!(select_path(&doc, &[Step::any("body"), Step::nth("div", 0)]).is_none());
    }

    #[test]
    fn own_text_skips_child_elements() {
        let doc = parse("<html><body><span> lead <a href='x'>link</a> tail </span></body></html>");
        let span = select_path(&doc, &[Step::any("body"), Step::any("span")]).unwrap();
        assert_eq!(own_text(span), "lead tail");
        assert_eq!(all_text(span).trim(), "lead link tail");
    }

    #[test]
    fn table_rows_sees_implied_tbody() {
        let doc = parse("<html><body><table><tr><th>H</th></tr><tbody><tr><td>1</td></tr></tbody></table></body></html>");
        let table = select_path(&doc, &[Step::any("body"), Step::any("table")]).unwrap();
        assert_eq!(table_rows(table).len(), 2);
    }
}
