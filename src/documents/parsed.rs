use scraper::{ElementRef, Html, Selector};
use url::Url;

use crate::error::SnapshotError;
use crate::extract::text::squash_whitespace;

use super::{DomSnapshot, RawAnchor, ViewRect};

/// Builds a [`DomSnapshot`] from an HTML string.
///
/// Offline counterpart of the WebDriver capture: the effective base URL is
/// resolved from a `<base href>` tag against the document URL, anchors are
/// collected from the body subtree in document order, and article containment
/// is computed by tree ancestry. There is no layout engine behind this
/// backend, so geometry and scroll offsets report zero.
pub fn parse_document(html: &str, url: &str) -> Result<DomSnapshot, SnapshotError> {
    let document_url = Url::parse(url)?;
    let html = Html::parse_document(html);

    let base = effective_base_url(&html, &document_url);
    let article_selector = Selector::parse("article").unwrap();
    let article = html.select(&article_selector).next();

    let anchor_selector = Selector::parse("body a[href]").unwrap();
    let mut anchors = Vec::new();
    for elem in html.select(&anchor_selector) {
        let href = elem.value().attr("href").unwrap_or("");
        if href.is_empty() {
            continue;
        }
        anchors.push(RawAnchor {
            attributes: elem
                .value()
                .attrs()
                .map(|(name, value)| (name.to_string(), value.to_string()))
                .collect(),
            text: elem.text().collect(),
            rect: ViewRect::default(),
            in_article: article.map(|a| is_descendant(a, elem)).unwrap_or(false),
        });
    }

    ::log::debug!("Parsed document with {} anchors: {}", anchors.len(), base);

    Ok(DomSnapshot {
        base,
        title: document_title(&html),
        charset: detect_charset(&html),
        content_size: (0.0, 0.0),
        scroll: (0.0, 0.0),
        has_article: article.is_some(),
        anchors,
    })
}

/// Resolves the effective base URL: a `<base href>` joined against the
/// document URL when present, the document URL otherwise.
fn effective_base_url(html: &Html, document_url: &Url) -> Url {
    let base_selector = Selector::parse("base[href]").unwrap();
    html.select(&base_selector)
        .next()
        .and_then(|b| b.value().attr("href"))
        .and_then(|href| document_url.join(href.trim()).ok())
        .unwrap_or_else(|| document_url.clone())
}

/// Title text, stripped and collapsed the way browsers report it.
fn document_title(html: &Html) -> String {
    let title_selector = Selector::parse("title").unwrap();
    html.select(&title_selector)
        .next()
        .map(|t| squash_whitespace(&t.text().collect::<String>()))
        .unwrap_or_default()
}

/// Character encoding from `<meta charset>` or an http-equiv content-type
/// declaration, defaulting to UTF-8.
fn detect_charset(html: &Html) -> String {
    let charset_selector = Selector::parse("meta[charset]").unwrap();
    if let Some(meta) = html.select(&charset_selector).next() {
        if let Some(charset) = meta.value().attr("charset") {
            let charset = charset.trim();
            if !charset.is_empty() {
                return charset.to_string();
            }
        }
    }

    let http_equiv_selector = Selector::parse("meta[http-equiv]").unwrap();
    for meta in html.select(&http_equiv_selector) {
        let equiv = meta.value().attr("http-equiv").unwrap_or("");
        if !equiv.eq_ignore_ascii_case("content-type") {
            continue;
        }
        if let Some(content) = meta.value().attr("content") {
            if let Some(idx) = content.to_ascii_lowercase().find("charset=") {
                let charset = content[idx + "charset=".len()..]
                    .split(';')
                    .next()
                    .unwrap_or("")
                    .trim();
                if !charset.is_empty() {
                    return charset.to_string();
                }
            }
        }
    }

    "UTF-8".to_string()
}

/// Whether `inner` sits inside `outer`'s subtree.
fn is_descendant(outer: ElementRef, inner: ElementRef) -> bool {
    inner.ancestors().any(|node| node.id() == outer.id())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::documents::{DocumentLike, DomHandle};

    #[test]
    fn test_anchors_in_document_order() {
        let html = r#"
            <html><body>
                <a href="/first">First</a>
                <a href="/second">Second</a>
                <a href="/third">Third</a>
            </body></html>
        "#;
        let doc = parse_document(html, "https://example.com/").unwrap();
        let hrefs: Vec<_> = doc
            .anchors
            .iter()
            .map(|a| a.attributes["href"].clone())
            .collect();
        assert_eq!(hrefs, vec!["/first", "/second", "/third"]);
    }

    #[test]
    fn test_empty_href_is_skipped() {
        let html = r#"<body><a href="">nope</a><a href="/yes">yes</a></body>"#;
        let doc = parse_document(html, "https://example.com/").unwrap();
        assert_eq!(doc.anchors.len(), 1);
        assert_eq!(doc.anchors[0].attributes["href"], "/yes");
    }

    #[test]
    fn test_base_tag_overrides_document_url() {
        let html = r#"
            <html><head><base href="/sub/dir/"></head>
            <body><a href="page">x</a></body></html>
        "#;
        let doc = parse_document(html, "https://example.com/other/").unwrap();
        assert_eq!(doc.base.as_str(), "https://example.com/sub/dir/");
    }

    #[test]
    fn test_article_containment() {
        let html = r#"
            <body>
                <a href="/outside">out</a>
                <article><p><a href="/inside">in</a></p></article>
            </body>
        "#;
        let doc = parse_document(html, "https://example.com/").unwrap();
        assert!(doc.has_article);
        assert!(!doc.anchors[0].in_article);
        assert!(doc.anchors[1].in_article);
    }

    #[test]
    fn test_no_article_present() {
        let html = r#"<body><a href="/a">a</a></body>"#;
        let doc = parse_document(html, "https://example.com/").unwrap();
        assert!(!doc.has_article);
        assert!(doc.article_element().is_none());
    }

    #[test]
    fn test_title_and_charset() {
        let html = r#"
            <html><head>
                <meta charset="ISO-8859-1">
                <title>  A
                    Title  </title>
            </head><body></body></html>
        "#;
        let doc = parse_document(html, "https://example.com/").unwrap();
        assert_eq!(doc.title, "A Title");
        assert_eq!(doc.charset, "ISO-8859-1");
    }

    #[test]
    fn test_charset_from_http_equiv() {
        let html = r#"
            <head><meta http-equiv="Content-Type"
                        content="text/html; charset=windows-1252"></head>
        "#;
        let doc = parse_document(html, "https://example.com/").unwrap();
        assert_eq!(doc.charset, "windows-1252");
    }

    #[test]
    fn test_charset_defaults_to_utf8() {
        let doc = parse_document("<body></body>", "https://example.com/").unwrap();
        assert_eq!(doc.charset, "UTF-8");
    }

    #[test]
    fn test_attributes_are_raw() {
        let html = r#"<body><a href="/x" target=" _BLANK " rel="NoFollow,,UGC">x</a></body>"#;
        let doc = parse_document(html, "https://example.com/").unwrap();
        let anchor = DomHandle::Anchor(0);
        assert_eq!(doc.attr(anchor, "target").as_deref(), Some(" _BLANK "));
        assert_eq!(doc.attr(anchor, "rel").as_deref(), Some("NoFollow,,UGC"));
    }

    #[test]
    fn test_invalid_document_url() {
        assert!(parse_document("<body></body>", "not a url").is_err());
    }
}
