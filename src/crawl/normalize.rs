// src/crawl/normalize.rs
// =============================================================================
// This module turns hrefs into canonical URLs for the crawl.
//
// A normalized URL is:
// - absolute (relative hrefs are resolved against the page they came from)
// - fragment-free (everything after '#' is dropped)
// - http or https (mailto:, tel:, javascript:, data: never enter the crawl)
//
// The normalized string is the identity used by the frontier and the visited
// tracker, so normalizing it again must give back the exact same string.
//
// Rust concepts:
// - Option<T>: Unparseable links simply produce None instead of an error
// - Url::join: Standard relative reference resolution (like a browser)
// =============================================================================

use anyhow::{anyhow, Context, Result};
use url::Url;

// Parses the starting URL given on the command line
//
// Unlike discovered links, a bad start URL is a fatal error: there is
// nothing to crawl without it.
pub fn parse_start_url(raw: &str) -> Result<Url> {
    let mut url = Url::parse(raw.trim()).with_context(|| format!("Invalid URL '{}'", raw))?;

    if !is_crawlable_scheme(&url) {
        return Err(anyhow!("Only http and https URLs can be crawled: {}", raw));
    }

    if url.host_str().is_none() {
        return Err(anyhow!("URL has no host: {}", raw));
    }

    url.set_fragment(None);
    Ok(url)
}

// Resolves an href found on `base` into a normalized URL
//
// Returns None for:
// - bare fragment references ("#section") which point back into the same page
// - hrefs that cannot be parsed or joined
// - non-http(s) targets
//
// Examples (base = "https://example.com/docs/intro"):
//   "/docs/a"          -> "https://example.com/docs/a"
//   "b#part"           -> "https://example.com/docs/b"
//   "//cdn.example.com/x" -> "https://cdn.example.com/x"
//   "?page=2"          -> "https://example.com/docs/intro?page=2"
pub fn normalize(href: &str, base: &Url) -> Option<Url> {
    let href = href.trim();

    if is_fragment_only(href) {
        return None;
    }

    let mut url = base.join(href).ok()?;

    if !is_crawlable_scheme(&url) {
        return None;
    }

    url.set_fragment(None);
    Some(url)
}

// Normalizes an already-absolute URL
//
// Used when popping from the frontier: entries are stored normalized, so this
// is a no-op for them, but it keeps the engine safe if anything else is pushed.
pub fn normalize_absolute(url: &Url) -> Url {
    let mut url = url.clone();
    url.set_fragment(None);
    url
}

fn is_fragment_only(href: &str) -> bool {
    href.starts_with('#')
}

fn is_crawlable_scheme(url: &Url) -> bool {
    matches!(url.scheme(), "http" | "https")
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn base() -> Url {
        Url::parse("https://example.com/docs/intro").unwrap()
    }

    #[test]
    fn test_resolve_relative_path() {
        let url = normalize("guide", &base()).unwrap();
        assert_eq!(url.as_str(), "https://example.com/docs/guide");
    }

    #[test]
    fn test_resolve_absolute_path() {
        let url = normalize("/about", &base()).unwrap();
        assert_eq!(url.as_str(), "https://example.com/about");
    }

    #[test]
    fn test_resolve_protocol_relative() {
        let url = normalize("//other.example.com/x", &base()).unwrap();
        assert_eq!(url.as_str(), "https://other.example.com/x");
    }

    #[test]
    fn test_resolve_query_only() {
        let url = normalize("?page=2", &base()).unwrap();
        assert_eq!(url.as_str(), "https://example.com/docs/intro?page=2");
    }

    #[test]
    fn test_skip_fragment_only() {
        assert_eq!(normalize("#section", &base()), None);
        assert_eq!(normalize("  #top", &base()), None);
    }

    #[test]
    fn test_fragment_is_erased() {
        let with = normalize("/docs/b#section", &base()).unwrap();
        let without = normalize("/docs/b", &base()).unwrap();
        assert_eq!(with, without);
        assert_eq!(with.fragment(), None);
    }

    #[test]
    fn test_empty_fragment_matches_no_fragment() {
        let with = normalize("/docs/b#", &base()).unwrap();
        let without = normalize("/docs/b", &base()).unwrap();
        assert_eq!(with.as_str(), without.as_str());
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let hrefs = [
            "/docs/a",
            "../x/./y#frag",
            "https://Example.COM/Docs/?q=1#z",
            "//example.com/docs/",
            "?only=query",
        ];

        for href in hrefs {
            let once = normalize(href, &base()).unwrap();
            let twice = normalize(once.as_str(), &base()).unwrap();
            assert_eq!(once.as_str(), twice.as_str(), "href {}", href);
            assert_eq!(normalize_absolute(&once), once);
        }
    }

    #[test]
    fn test_skip_non_http_schemes() {
        assert_eq!(normalize("mailto:test@example.com", &base()), None);
        assert_eq!(normalize("javascript:void(0)", &base()), None);
        assert_eq!(normalize("tel:+15555555555", &base()), None);
    }

    #[test]
    fn test_unparseable_href_is_dropped() {
        assert_eq!(normalize("http://[::1", &base()), None);
    }

    #[test]
    fn test_parse_start_url_strips_fragment() {
        let url = parse_start_url("https://example.com/docs#intro").unwrap();
        assert_eq!(url.as_str(), "https://example.com/docs");
    }

    #[test]
    fn test_parse_start_url_rejects_bad_input() {
        assert!(parse_start_url("not a url").is_err());
        assert!(parse_start_url("ftp://example.com/").is_err());
        assert!(parse_start_url("mailto:someone@example.com").is_err());
    }

    // Relative, absolute-path and absolute hrefs, with optional query
    const HREF: &str =
        "(https://example\\.com/|/|\\.\\./)?[a-zA-Z0-9_.~é-]{1,8}(/[a-zA-Z0-9_.~é-]{0,8}){0,3}(\\?[a-z0-9=&]{0,10})?";

    proptest! {
        #[test]
        fn test_normalize_twice_is_normalize_once(href in HREF) {
            if let Some(once) = normalize(&href, &base()) {
                prop_assert_eq!(once.fragment(), None);
                prop_assert_eq!(normalize(once.as_str(), &base()), Some(once.clone()));
                prop_assert_eq!(normalize_absolute(&once), once);
            }
        }

        #[test]
        fn test_any_fragment_is_erased(href in HREF, fragment in "[a-zA-Z0-9_/-]{0,10}") {
            let with = normalize(&format!("{}#{}", href, fragment), &base());
            prop_assert_eq!(with, normalize(&href, &base()));
        }
    }
}
