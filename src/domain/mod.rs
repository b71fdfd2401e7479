//! Domain normalization and validation.
//!
//! This module reduces raw URLs found in mail bodies to bare domain names and
//! checks that the result looks like a host name worth blocking.
//!
//! Key functions:
//! - `normalize_domain()` - Strips scheme, path, query and `www.` from a URL
//! - `is_valid_domain()` - Checks the host-name shape of a normalized domain

use std::sync::LazyLock;

use regex::Regex;

use crate::config::DOMAIN_PATTERN;

static DOMAIN_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(DOMAIN_PATTERN).expect("DOMAIN_PATTERN is a valid regex"));

/// Reduces a raw URL to a bare, lowercase domain.
///
/// Steps, in order:
/// 1. lowercase and trim
/// 2. strip a leading `http://` or `https://`
/// 3. cut at the first `/`, then `?`, then `=`
/// 4. strip a leading `www.`
/// 5. drop every character that is not alphanumeric, `.` or `-`
///
/// Never fails; garbage in gives (possibly empty) garbage out, which
/// `is_valid_domain` then rejects.
///
/// # Examples
///
/// ```
/// use phishblock::normalize_domain;
///
/// assert_eq!(normalize_domain("http://Evil-Site.biz/path?x=1"), "evil-site.biz");
/// assert_eq!(normalize_domain("www.example.com/login"), "example.com");
/// ```
pub fn normalize_domain(url: &str) -> String {
    let lowered = url.trim().to_lowercase();

    let mut rest = lowered.as_str();
    rest = rest
        .strip_prefix("http://")
        .or_else(|| rest.strip_prefix("https://"))
        .unwrap_or(rest);

    for delimiter in ['/', '?', '='] {
        if let Some((head, _)) = rest.split_once(delimiter) {
            rest = head;
        }
    }

    let rest = rest.strip_prefix("www.").unwrap_or(rest);

    rest.chars()
        .filter(|c| c.is_alphanumeric() || *c == '.' || *c == '-')
        .collect()
}

/// Returns `true` if `domain` has the shape `[a-z0-9.-]+\.[a-z]{2,}` (case-insensitive).
///
/// Only the overall shape is checked: consecutive dots (`a..com`) or leading
/// hyphens are accepted.
pub fn is_valid_domain(domain: &str) -> bool {
    DOMAIN_REGEX.is_match(domain)
}
