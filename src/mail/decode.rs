//! Best-effort base64 body decoding.

use std::sync::LazyLock;

use base64::alphabet;
use base64::engine::general_purpose::{GeneralPurpose, GeneralPurposeConfig};
use base64::engine::DecodePaddingMode;
use base64::Engine;
use log::trace;
use regex::Regex;

use crate::config::BASE64_ENCODING_PATTERN;

static BASE64_HEADER_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(BASE64_ENCODING_PATTERN).expect("BASE64_ENCODING_PATTERN is a valid regex")
});

/// Standard alphabet, padding optional, trailing bits tolerated.
const RELAXED: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new()
        .with_decode_padding_mode(DecodePaddingMode::Indifferent)
        .with_decode_allow_trailing_bits(true),
);

/// Decodes a mail whose headers declare `Content-Transfer-Encoding: base64`.
///
/// The text is split at the first blank line; the body is stripped of every
/// character outside the base64 alphabet (line breaks, stray punctuation),
/// cut after its first padding group, and decoded. Invalid UTF-8 in the decoded bytes is replaced, not rejected.
///
/// Returns the raw text unchanged if there is no base64 declaration, no
/// header/body split, or the body does not decode.
pub fn decode_mail(raw: &str) -> String {
    let Some((header, body)) = split_header_body(raw) else {
        return raw.to_string();
    };

    if !BASE64_HEADER_REGEX.is_match(header) {
        return raw.to_string();
    }

    let mut cleaned: String = body
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '/' | '='))
        .collect();
    // Data after the first padding group (signatures, footers, boundaries) is ignored
    if let Some(pad) = cleaned.find('=') {
        let end = pad + cleaned[pad..].bytes().take_while(|b| *b == b'=').count();
        cleaned.truncate(end);
    }

    match RELAXED.decode(cleaned.as_bytes()) {
        Ok(bytes) => String::from_utf8_lossy(&bytes).into_owned(),
        Err(e) => {
            trace!("base64 body did not decode, keeping raw text: {e}");
            raw.to_string()
        }
    }
}

/// Splits a message at its first blank line into header and body.
///
/// Accepts both `\n\n` and `\r\n\r\n` separators, whichever comes first.
fn split_header_body(raw: &str) -> Option<(&str, &str)> {
    let lf = raw.find("\n\n").map(|i| (i, 2));
    let crlf = raw.find("\r\n\r\n").map(|i| (i, 4));

    let (index, len) = [lf, crlf].into_iter().flatten().min_by_key(|(i, _)| *i)?;

    Some((&raw[..index], &raw[index + len..]))
}
