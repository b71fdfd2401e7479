// Domain module tests.

use super::*;

#[test]
fn test_normalize_domain_basic() {
    assert_eq!(normalize_domain("https://example.com"), "example.com");
}

#[test]
fn test_normalize_domain_mixed_case_path_and_query() {
    assert_eq!(
        normalize_domain("http://Evil-Site.biz/path?x=1"),
        "evil-site.biz"
    );
}

#[test]
fn test_normalize_domain_strips_www() {
    assert_eq!(normalize_domain("https://www.example.com/a"), "example.com");
    assert_eq!(normalize_domain("www.example.com"), "example.com");
    assert_eq!(normalize_domain("WWW.Example.COM"), "example.com");
}

#[test]
fn test_normalize_domain_only_leading_www_is_stripped() {
    assert_eq!(normalize_domain("http://mail.www.example.com"), "mail.www.example.com");
    assert_eq!(normalize_domain("http://wwwexample.com"), "wwwexample.com");
}

#[test]
fn test_normalize_domain_query_without_path() {
    assert_eq!(normalize_domain("https://example.com?id=3"), "example.com");
}

#[test]
fn test_normalize_domain_cuts_at_equals_sign() {
    // Tracking links glued to parameters without a '?' or '/'
    assert_eq!(normalize_domain("www.example.com=abc"), "example.com");
}

#[test]
fn test_normalize_domain_port_colon_is_removed_not_truncated() {
    // ':' is filtered out, so the port digits stay attached
    assert_eq!(normalize_domain("http://example.com:8080/x"), "example.com8080");
}

#[test]
fn test_normalize_domain_filters_punctuation() {
    assert_eq!(normalize_domain("http://exa_mple.com)."), "example.com.");
    assert_eq!(normalize_domain("http://user@host.com"), "userhost.com");
}

#[test]
fn test_normalize_domain_empty_and_scheme_only() {
    assert_eq!(normalize_domain(""), "");
    assert_eq!(normalize_domain("https://"), "");
    assert_eq!(normalize_domain("http:///path"), "");
}

#[test]
fn test_normalize_domain_trims_whitespace() {
    assert_eq!(normalize_domain("  http://example.org/ \n"), "example.org");
}

#[test]
fn test_normalize_domain_is_idempotent() {
    let inputs = [
        "http://Evil-Site.biz/path?x=1",
        "https://www.sub.Example.co.uk/login?next=/",
        "www.phish.example=track",
        "http://a..com",
        "HTTPS://WWW.UPPER.NET",
        "http://bücher.example/",
    ];
    for input in inputs {
        let once = normalize_domain(input);
        assert_eq!(normalize_domain(&once), once, "input: {input}");
    }
}

#[test]
fn test_is_valid_domain_accepts_host_names() {
    assert!(is_valid_domain("example.com"));
    assert!(is_valid_domain("evil-site.biz"));
    assert!(is_valid_domain("a.b.c.example.co.uk"));
    assert!(is_valid_domain("123.example.io"));
}

#[test]
fn test_is_valid_domain_is_case_insensitive() {
    assert!(is_valid_domain("Example.COM"));
}

#[test]
fn test_is_valid_domain_only_checks_shape() {
    assert!(is_valid_domain("a..com"));
    assert!(is_valid_domain("-leading.com"));
}

#[test]
fn test_is_valid_domain_rejects_bad_shapes() {
    assert!(!is_valid_domain(""));
    assert!(!is_valid_domain("example"));
    assert!(!is_valid_domain("example.c"));
    assert!(!is_valid_domain("example.c0m"));
    assert!(!is_valid_domain("192.168.0.1"));
    assert!(!is_valid_domain(".com"));
    assert!(!is_valid_domain("example.com8080"));
    assert!(!is_valid_domain("example.com."));
}
