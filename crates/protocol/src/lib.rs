//! Wire contract for the open-platform REST gateway.
//!
//! Everything a request must carry to be accepted by the gateway router
//! lives here: the fixed protocol parameters, the bracketed-secret MD5
//! signature, timestamp formatting, and the response-envelope conventions.
//! This crate is pure — no I/O, no HTTP types — so the signing and
//! encoding rules can be golden-tested in isolation.

pub mod args;
pub mod envelope;
pub mod hash;
pub mod sign;
pub mod time;

pub use {
    args::ProtocolArgs,
    envelope::{ServiceFailure, project, response_key, service_failure},
    hash::HashEncoding,
    sign::{sign, signature_base, value_string},
    time::{TIMESTAMP_FORMAT, format_timestamp, format_timestamp_with},
};

// ── Constants ────────────────────────────────────────────────────────────────

/// Default router endpoint for the production gateway.
pub const DEFAULT_GATEWAY_URL: &str = "http://gw.api.taobao.com/router/rest";

/// Response serialization format requested on every call.
pub const FORMAT_JSON: &str = "json";

/// Gateway protocol version.
pub const PROTOCOL_VERSION: &str = "2.0";

/// Signature algorithm identifier sent as `sign_method`.
pub const SIGN_METHOD_MD5: &str = "md5";

/// Fixed partner identifier the gateway expects on every request.
pub const PARTNER_ID: &str = "top-sdk-deno-20230905";

// ── Form encoding ────────────────────────────────────────────────────────────

/// Encode `(key, value)` pairs as `application/x-www-form-urlencoded`.
///
/// Used for both the query string and the request body so the two sides
/// of the wire contract share one percent-encoding.
pub fn form_encode<'a, I>(pairs: I) -> String
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    let mut serializer = url::form_urlencoded::Serializer::new(String::new());
    for (key, value) in pairs {
        serializer.append_pair(key, value);
    }
    serializer.finish()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn form_encode_escapes_reserved_characters() {
        let encoded = form_encode([("q", "a b&c"), ("t", "2023-09-05 09:04:17")]);
        assert_eq!(encoded, "q=a+b%26c&t=2023-09-05+09%3A04%3A17");
    }

    #[test]
    fn form_encode_empty_iterator() {
        assert_eq!(form_encode([]), "");
    }

    #[test]
    fn form_encode_keeps_pair_order() {
        let encoded = form_encode([("b", "2"), ("a", "1")]);
        assert_eq!(encoded, "b=2&a=1");
    }
}
