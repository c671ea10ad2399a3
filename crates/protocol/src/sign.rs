//! Request signing.
//!
//! The gateway authenticates every call with an MD5 signature computed over
//! the union of caller parameters and protocol arguments: keys are sorted in
//! ascending byte order, concatenated with their values (no separators), the
//! whole string is bracketed with the application secret on both ends, and
//! the UTF-8 bytes are digested to uppercase hex. Same map plus same secret
//! always yields the same signature, which is what the golden tests pin.

use {
    serde_json::Value,
    std::{borrow::Cow, collections::BTreeMap},
};

use crate::hash::{self, HashEncoding};

/// String form of a parameter value as the gateway expects it.
///
/// Strings pass through unquoted; numbers and booleans use their display
/// form; `null` is the empty string; arrays and objects are rendered as
/// compact JSON text.
#[must_use]
pub fn value_string(value: &Value) -> Cow<'_, str> {
    match value {
        Value::Null => Cow::Borrowed(""),
        Value::String(s) => Cow::Borrowed(s.as_str()),
        Value::Bool(b) => Cow::Owned(b.to_string()),
        Value::Number(n) => Cow::Owned(n.to_string()),
        // Compact JSON text; `to_string` on a Value cannot fail.
        other => Cow::Owned(other.to_string()),
    }
}

/// The string that gets digested: `secret k1 v1 ... kn vn secret`.
///
/// `params` must already be the union of caller parameters and protocol
/// arguments, without a `sign` key. `BTreeMap` iteration gives the required
/// ascending byte order for free.
#[must_use]
pub fn signature_base(secret: &str, params: &BTreeMap<String, Value>) -> String {
    let mut base = String::from(secret);
    for (key, value) in params {
        base.push_str(key);
        base.push_str(&value_string(value));
    }
    base.push_str(secret);
    base
}

/// Uppercase-hex MD5 signature over the sorted parameter map.
#[must_use]
pub fn sign(secret: &str, params: &BTreeMap<String, Value>) -> String {
    hash::md5(signature_base(secret, params), HashEncoding::Hex).to_uppercase()
}
