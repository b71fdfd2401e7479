//! URL extraction from decoded mail text.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

use crate::config::URL_PATTERN;

static URL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(URL_PATTERN).expect("URL_PATTERN is a valid regex"));

/// Adds every `http(s)://` and `www.` token found in `text` to `urls`.
///
/// Matching is case-insensitive and stops at whitespace, `<`, `>` and quotes.
/// Returns how many matches were found in this text (duplicates included).
pub fn extract_urls_into(text: &str, urls: &mut HashSet<String>) -> usize {
    let mut found = 0;
    for m in URL_REGEX.find_iter(text) {
        urls.insert(m.as_str().to_string());
        found += 1;
    }
    found
}

/// Returns the set of URL tokens found in `text`.
pub fn extract_urls(text: &str) -> HashSet<String> {
    let mut urls = HashSet::new();
    extract_urls_into(text, &mut urls);
    urls
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_urls_http_and_https() {
        let urls = extract_urls("a http://one.example/x b https://two.example c");
        assert_eq!(urls.len(), 2);
        assert!(urls.contains("http://one.example/x"));
        assert!(urls.contains("https://two.example"));
    }

    #[test]
    fn test_extract_urls_keeps_original_case() {
        let urls = extract_urls("Click http://Evil-Site.biz/path?x=1 now");
        assert_eq!(
            urls,
            HashSet::from(["http://Evil-Site.biz/path?x=1".to_string()])
        );
    }

    #[test]
    fn test_extract_urls_scheme_is_case_insensitive() {
        let urls = extract_urls("HTTPS://SHOUT.EXAMPLE and WWW.Loud.Example");
        assert!(urls.contains("HTTPS://SHOUT.EXAMPLE"));
        assert!(urls.contains("WWW.Loud.Example"));
    }

    #[test]
    fn test_extract_urls_stops_at_delimiters() {
        let text = r#"<a href="http://quoted.example/a">x</a> <http://angle.example> 'www.single.example'"#;
        let urls = extract_urls(text);
        assert!(urls.contains("http://quoted.example/a"));
        assert!(urls.contains("http://angle.example"));
        assert!(urls.contains("www.single.example"));
        assert_eq!(urls.len(), 3);
    }

    #[test]
    fn test_extract_urls_requires_characters_after_prefix() {
        let urls = extract_urls("broken http:// and www. tokens");
        assert!(urls.is_empty());
    }

    #[test]
    fn test_extract_urls_into_deduplicates_across_texts() {
        let mut urls = HashSet::new();
        assert_eq!(extract_urls_into("http://same.example http://same.example", &mut urls), 2);
        assert_eq!(extract_urls_into("http://same.example", &mut urls), 1);
        assert_eq!(urls.len(), 1);
    }

    #[test]
    fn test_extract_urls_www_inside_http_is_single_match() {
        let urls = extract_urls("https://www.example.com/page");
        assert_eq!(urls.len(), 1);
        assert!(urls.contains("https://www.example.com/page"));
    }
}
