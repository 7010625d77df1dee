use url::Url;

/// Resolves a possibly-relative URL string against `base` and canonicalizes
/// the result.
///
/// Canonical form means an absolute URL with its query parameters sorted by
/// name (so otherwise-equivalent URLs compare byte-identical) and an
/// internationalized host in its punycode representation. Host encoding is
/// handled by [`Url::join`] itself.
pub fn canonicalize(raw: &str, base: &Url) -> Result<Url, url::ParseError> {
    let mut resolved = base.join(raw)?;
    sort_query_pairs(&mut resolved);
    Ok(resolved)
}

/// Re-serializes the query with its pairs stably sorted by name.
///
/// Repeated keys keep their relative order. An absent or empty query is left
/// untouched.
fn sort_query_pairs(url: &mut Url) {
    match url.query() {
        None => return,
        Some(q) if q.is_empty() => return,
        Some(_) => {}
    }

    let mut pairs: Vec<(String, String)> = url
        .query_pairs()
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect();
    pairs.sort_by(|a, b| a.0.cmp(&b.0));

    url.query_pairs_mut().clear().extend_pairs(pairs);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> Url {
        Url::parse("https://example.com/docs/page.html").unwrap()
    }

    #[test]
    fn test_relative_resolution() {
        let url = canonicalize("../about", &base()).unwrap();
        assert_eq!(url.as_str(), "https://example.com/about");
    }

    #[test]
    fn test_query_order_is_canonical() {
        let a = canonicalize("/p?b=2&a=1", &base()).unwrap();
        let b = canonicalize("/p?a=1&b=2", &base()).unwrap();
        assert_eq!(a.as_str(), b.as_str());
        assert_eq!(a.as_str(), "https://example.com/p?a=1&b=2");
    }

    #[test]
    fn test_repeated_keys_keep_relative_order() {
        let url = canonicalize("/p?z=1&a=first&a=second", &base()).unwrap();
        assert_eq!(url.as_str(), "https://example.com/p?a=first&a=second&z=1");
    }

    #[test]
    fn test_idn_host_is_punycoded() {
        let url = canonicalize("https://bücher.example/katalog", &base()).unwrap();
        assert_eq!(url.as_str(), "https://xn--bcher-kva.example/katalog");
    }

    #[test]
    fn test_no_query_is_untouched() {
        let url = canonicalize("/plain", &base()).unwrap();
        assert_eq!(url.as_str(), "https://example.com/plain");
    }

    #[test]
    fn test_unresolvable_href_is_an_error() {
        assert!(canonicalize("http://[oops", &base()).is_err());
    }
}
