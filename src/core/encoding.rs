// src/core/encoding.rs
//
// Body bytes → UTF-8 text. Charset comes from the Content-Type header, then
// a <meta> declaration in the first 1024 bytes, then defaults to UTF-8.

use std::sync::LazyLock;

use encoding_rs::{Encoding, UTF_8};
use regex::Regex;

/// `charset=` inside a Content-Type value.
#[allow(clippy::expect_used)]
static HEADER_CHARSET_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)charset\s*=\s*["']?([^"'\s;]+)"#).expect("valid regex")
});

/// `<meta charset=...>` and `<meta http-equiv=... content="...; charset=...">`.
#[allow(clippy::expect_used)]
static META_CHARSET_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]+charset\s*=\s*["']?([^"'\s;/>]+)"#).expect("valid regex")
});

/// Pick the encoding for a page body.
pub fn detect(body: &[u8], content_type: Option<&str>) -> &'static Encoding {
    let from_header = content_type.and_then(|ct| label(&HEADER_CHARSET_RE, ct));
    if let Some(enc) = from_header {
        return enc;
    }

    let head = String::from_utf8_lossy(&body[..body.len().min(1024)]);
    label(&META_CHARSET_RE, &head).unwrap_or(UTF_8)
}

fn label(re: &Regex, text: &str) -> Option<&'static Encoding> {
    let name = re.captures(text)?.get(1)?.as_str();
    Encoding::for_label(name.as_bytes())
}

/// Decode lossily; a byte-order mark overrides the detected encoding.
pub fn decode_page(body: &[u8], content_type: Option<&str>) -> String {
    let enc = detect(body, content_type);
    let (text, used, had_errors) = enc.decode(body);
    if had_errors {
        logw!("Decode: invalid {} sequences replaced", used.name());
    }
    text.into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use encoding_rs::WINDOWS_1252;

    // "Modalità" in ISO-8859-1
    const LATIN1_PAGE: &[u8] =
        b"<html><head><meta charset=\"ISO-8859-1\"></head><body>Modalit\xe0</body></html>";

    #[test]
    fn meta_charset_is_honoured_without_header_charset() {
        assert_eq!(detect(LATIN1_PAGE, Some("text/html")), WINDOWS_1252);
        assert!(decode_page(LATIN1_PAGE, Some("text/html")).contains("Modalità"));
    }

    #[test]
    fn http_equiv_meta_is_read() {
        let page = b"<meta http-equiv=\"Content-Type\" content=\"text/html; charset=iso-8859-1\">Universit\xe0";
        assert!(decode_page(page, None).ends_with("Università"));
    }

    #[test]
    fn header_charset_wins_over_meta() {
        let page = "<meta charset=\"iso-8859-1\">Università".as_bytes();
        assert_eq!(detect(page, Some("text/html; charset=UTF-8")), UTF_8);
        assert!(decode_page(page, Some("text/html; charset=UTF-8")).ends_with("Università"));
    }

    #[test]
    fn undeclared_defaults_to_utf8() {
        assert_eq!(detect(b"<p>plain</p>", None), UTF_8);
        assert_eq!(decode_page("<p>Modalità</p>".as_bytes(), None), "<p>Modalità</p>");
    }
}
