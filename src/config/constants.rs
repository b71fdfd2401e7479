//! Configuration constants.
//!
//! This module defines the defaults and patterns used throughout the application:
//! default file locations, the DNS probe timeout, and the URL and domain regexes.

/// Default spam folder, relative to the user's home directory.
///
/// This is where Evolution keeps the messages of the local `Spam` folder
/// (maildir layout, one message per file).
pub const DEFAULT_MAILDIR: &str = ".local/share/evolution/mail/local/.SPAM/cur";

/// Default whitelist file, relative to the user's home directory.
pub const DEFAULT_WHITELIST: &str = "whitelist.txt";

/// Default blocklist output file, relative to the user's home directory.
pub const DEFAULT_OUTPUT: &str = "phishingblocker.txt";

/// DNS query timeout in seconds
/// Most lookups complete in well under a second, 3s fails fast on dead resolvers
pub const DNS_TIMEOUT_SECS: u64 = 3;

/// Number of attempts the resolver makes per name server before giving up.
pub const DNS_ATTEMPTS: usize = 2;

/// Matches `http(s)://...` and `www....` tokens, stopping at whitespace, angle brackets and quotes.
pub const URL_PATTERN: &str = r#"(?i)(https?://[^\s<>'"]+|www\.[^\s<>'"]+)"#;

/// Host-name shape accepted for blocklist entries: label characters, a dot,
/// and a final label of at least two letters.
pub const DOMAIN_PATTERN: &str = r"(?i)^[a-z0-9.-]+\.[a-z]{2,}$";

/// Detects a base64 content-transfer-encoding declaration in a header block.
pub const BASE64_ENCODING_PATTERN: &str = r"(?im)^content-transfer-encoding:[ \t]*base64\b";
