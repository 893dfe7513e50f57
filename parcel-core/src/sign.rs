//! Request signing for the marketplace API.
//!
//! The marketplace authenticates every call with an HMAC-SHA256 over the
//! method, the full URI, the body and a Unix timestamp, joined by newlines.
//! The signature is deterministic: there is no nonce, so the same inputs and
//! key always produce the same digest.

use hmac::{Hmac, Mac, digest::InvalidLength};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// The exact text that gets signed.
pub fn canonical_message(method: &str, uri: &str, body: &str, timestamp: &str) -> String {
    [method, uri, body, timestamp].join("\n")
}

/// Compute the lower-case hex signature for a request.
///
/// `body` must be the byte-for-byte body that is transmitted; any difference
/// makes the marketplace reject the request. HMAC accepts keys of any
/// length, including an empty one.
pub fn sign(
    method: &str,
    uri: &str,
    body: &str,
    timestamp: &str,
    secret_key: &str,
) -> Result<String, InvalidLength> {
    let mut mac = HmacSha256::new_from_slice(secret_key.as_bytes())?;
    mac.update(canonical_message(method, uri, body, timestamp).as_bytes());
    Ok(hex::encode(mac.finalize().into_bytes()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    const METHOD: &str = "POST";
    const URI: &str = "https://api.example/x";
    const BODY: &str = "{}";
    const TIMESTAMP: &str = "1700000000";
    const SECRET: &str = "secret";

    #[test]
    fn message_has_four_lines_and_no_trailing_newline() {
        assert_eq!(
            canonical_message(METHOD, URI, BODY, TIMESTAMP),
            "POST\nhttps://api.example/x\n{}\n1700000000"
        );
    }

    #[test]
    fn matches_reference_digest() {
        assert_eq!(
            sign(METHOD, URI, BODY, TIMESTAMP, SECRET).unwrap(),
            "7cd18bb9a82c3540cb97139799539a129c702130b5b82450b0dc72c8acc010b1"
        );
    }

    #[test]
    fn is_deterministic() {
        let first = sign(METHOD, URI, BODY, TIMESTAMP, SECRET).unwrap();
        let second = sign(METHOD, URI, BODY, TIMESTAMP, SECRET).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.len(), 64);
        assert!(first.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[rstest]
    #[case::empty("")]
    #[case::longer_than_a_block(&"k".repeat(200))]
    fn accepts_keys_of_any_length(#[case] secret: &str) {
        assert!(sign(METHOD, URI, BODY, TIMESTAMP, secret).is_ok());
    }

    #[rstest]
    #[case::method("GET", URI, BODY, TIMESTAMP, SECRET)]
    #[case::uri(METHOD, "https://api.example/y", BODY, TIMESTAMP, SECRET)]
    #[case::body(METHOD, URI, "{ }", TIMESTAMP, SECRET)]
    #[case::timestamp(METHOD, URI, BODY, "1700000001", SECRET)]
    #[case::key(METHOD, URI, BODY, TIMESTAMP, "Secret")]
    fn any_change_changes_the_digest(
        #[case] method: &str,
        #[case] uri: &str,
        #[case] body: &str,
        #[case] timestamp: &str,
        #[case] secret: &str,
    ) {
        assert_ne!(
            sign(method, uri, body, timestamp, secret).unwrap(),
            sign(METHOD, URI, BODY, TIMESTAMP, SECRET).unwrap()
        );
    }
}
