// src/scrape/exam.rs
use crate::{
    core::PageSource,
    progress::Progress,
    specs::{catalog::Link, exam::extract_exam_text},
};

/// Fetch every course page in order and read its exam section.
///
/// Always returns exactly one string per link, in link order. A link whose page
/// cannot be fetched, or has no exam section, gets an empty string; the
/// remaining links are still processed.
pub fn fetch_contents(
    source: &dyn PageSource,
    links: &[Link],
    labels: &[&str],
    mut progress: Option<&mut dyn Progress>,
) -> Vec<String> {
    if let Some(p) = progress.as_deref_mut() {
        p.begin(links.len());
    }

    let mut contents = Vec::with_capacity(links.len());
    for (i, link) in links.iter().enumerate() {
        let outcome = source
            .get(&link.url)
            .and_then(|html| extract_exam_text(&html, labels));

        match outcome {
            Ok(text) => {
                if let Some(p) = progress.as_deref_mut() {
                    p.item_done(i, &link.url);
                }
                contents.push(text);
            }
            Err(e) => {
                if e.is_fetch() {
                    loge!("Exam: {e}");
                } else {
                    logw!("Exam: {e} at {}", link.url);
                }
                if let Some(p) = progress.as_deref_mut() {
                    p.item_failed(i, &link.url, &e.to_string());
                }
                contents.push(s!());
            }
        }
    }

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }
    contents
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::consts::EXAM_LABELS;
    use crate::error::ScrapeError;

    /// Serves pages from memory; anything else is a 404.
    struct Pages(Vec<(&'static str, &'static str)>);

    impl PageSource for Pages {
        fn get(&self, url: &str) -> Result<String, ScrapeError> {
            self.0
                .iter()
                .find(|(u, _)| *u == url)
                .map(|(_, body)| s!(*body))
                .ok_or(ScrapeError::Status { url: s!(url), status: reqwest::StatusCode::NOT_FOUND })
        }
    }

    #[derive(Default)]
    struct Tally { total: usize, done: Vec<usize>, failed: Vec<usize>, finished: bool }

    impl Progress for Tally {
        fn begin(&mut self, total: usize) { self.total = total; }
        fn item_done(&mut self, index: usize, _url: &str) { self.done.push(index); }
        fn item_failed(&mut self, index: usize, _url: &str, _reason: &str) { self.failed.push(index); }
        fn finish(&mut self) { self.finished = true; }
    }

    fn links(urls: &[&str]) -> Vec<Link> {
        urls.iter().enumerate().map(|(row, u)| Link { row, url: s!(*u) }).collect()
    }

    #[test]
    fn one_output_per_link_with_failures_in_place() {
        let pages = Pages(vec![
            ("a", "<html><body><div><h3>MODALITA' D'ESAME</h3>scritto</div></body></html>"),
            ("c", "<html><body><div><h3>ALTRO</h3>x</div></body></html>"),
            ("e", "<html><body><div><h3>EXAM DESCRIPTION</h3>oral</div></body></html>"),
        ]);
        let mut tally = Tally::default();
        let out = fetch_contents(&pages, &links(&["missing", "a", "b", "c", "e", "z"]), EXAM_LABELS, Some(&mut tally));

        assert_eq!(out, vec!["", "scritto", "", "", "oral", ""]);
        assert_eq!(tally.total, 6);
        assert_eq!(tally.done, vec![1, 4]);
        assert_eq!(tally.failed, vec![0, 2, 3, 5]);
        assert!(tally.finished);
    }

    #[test]
    fn no_links_no_fetches() {
        let out = fetch_contents(&Pages(Vec::new()), &[], EXAM_LABELS, None);
        assert!(out.is_empty());
    }
}
