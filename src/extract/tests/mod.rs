mod text_tests;

use std::collections::HashMap;
use url::Url;

use crate::documents::{DomSnapshot, RawAnchor, ViewRect};

/// Empty document over the given base URL.
pub(crate) fn doc(base: &str) -> DomSnapshot {
    DomSnapshot::new(Url::parse(base).unwrap())
}

/// Anchor element state with just an href attribute.
pub(crate) fn raw_anchor(href: &str) -> RawAnchor {
    let mut attributes = HashMap::new();
    attributes.insert("href".to_string(), href.to_string());
    RawAnchor {
        attributes,
        text: String::new(),
        rect: ViewRect::default(),
        in_article: false,
    }
}

/// Anchor element state with an href and rendered text.
pub(crate) fn raw_anchor_with_text(href: &str, text: &str) -> RawAnchor {
    let mut anchor = raw_anchor(href);
    anchor.text = text.to_string();
    anchor
}
