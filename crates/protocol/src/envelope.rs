//! Response-envelope conventions.
//!
//! The gateway answers every call with a JSON object. Two conventions live
//! here: the legacy failure envelope (`response.flag == "failure"` with an
//! embedded message) and top-level key projection, which reduces a body to
//! the sub-object a caller asked for. Method names also map to the
//! conventional `*_response` key the gateway wraps results in.

use serde_json::{Map, Value};

/// A structured failure reported inside an otherwise-valid JSON body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceFailure {
    /// Human-readable message from the `response.message` field; empty when
    /// the envelope carries none.
    pub message: String,
    /// The full `response` sub-object, kept for diagnostics.
    pub envelope: Value,
}

/// Detect the legacy failure envelope: `body.response.flag == "failure"`.
#[must_use]
pub fn service_failure(body: &Value) -> Option<ServiceFailure> {
    let response = body.get("response")?;
    if response.get("flag").and_then(Value::as_str) != Some("failure") {
        return None;
    }
    Some(ServiceFailure {
        message: response
            .get("message")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string(),
        envelope: response.clone(),
    })
}

/// Reduce `body` to the named top-level keys.
///
/// An empty key list returns the body unchanged, whatever its shape. With a
/// non-empty list, absent keys are silently omitted and a non-object body
/// projects to an empty object.
#[must_use]
pub fn project(body: Value, keys: &[impl AsRef<str>]) -> Value {
    if keys.is_empty() {
        return body;
    }
    let Value::Object(mut fields) = body else {
        return Value::Object(Map::new());
    };
    let mut picked = Map::new();
    for key in keys {
        if let Some(value) = fields.remove(key.as_ref()) {
            picked.insert(key.as_ref().to_string(), value);
        }
    }
    Value::Object(picked)
}

/// The top-level key the gateway wraps a method's result in: strip a leading
/// `taobao.` segment, replace remaining dots with underscores, append
/// `_response`. `taobao.item.get` becomes `item_get_response`.
#[must_use]
pub fn response_key(method: &str) -> String {
    let trimmed = method.strip_prefix("taobao.").unwrap_or(method);
    let mut key = trimmed.replace('.', "_");
    key.push_str("_response");
    key
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use {super::*, rstest::rstest, serde_json::json};

    #[test]
    fn failure_envelope_is_detected() {
        let body = json!({
            "response": {"flag": "failure", "message": "invalid signature"}
        });
        let failure = service_failure(&body).unwrap();
        assert_eq!(failure.message, "invalid signature");
        assert_eq!(failure.envelope["flag"], "failure");
    }

    #[test]
    fn missing_message_yields_empty_string() {
        let body = json!({"response": {"flag": "failure"}});
        assert_eq!(service_failure(&body).unwrap().message, "");
    }

    #[test]
    fn success_flag_is_not_a_failure() {
        assert!(service_failure(&json!({"response": {"flag": "success"}})).is_none());
        assert!(service_failure(&json!({"response": {}})).is_none());
        assert!(service_failure(&json!({"item_get_response": {}})).is_none());
    }

    #[test]
    fn projection_keeps_only_named_keys() {
        let body = json!({"foo_response": {"x": 1}, "extra": 2});
        assert_eq!(
            project(body, &["foo_response"]),
            json!({"foo_response": {"x": 1}})
        );
    }

    #[test]
    fn empty_key_list_passes_body_through() {
        let body = json!({"foo_response": {"x": 1}, "extra": 2});
        let keys: &[&str] = &[];
        assert_eq!(project(body.clone(), keys), body);
    }

    #[test]
    fn absent_keys_are_omitted_not_errors() {
        let body = json!({"a": 1});
        assert_eq!(project(body, &["a", "missing"]), json!({"a": 1}));
    }

    #[test]
    fn non_object_body_projects_to_empty_object() {
        assert_eq!(project(json!([1, 2]), &["a"]), json!({}));
    }

    #[rstest]
    #[case("taobao.item.get", "item_get_response")]
    #[case("tmall.product.get", "tmall_product_get_response")]
    #[case("taobao.trade.fullinfo.get", "trade_fullinfo_get_response")]
    #[case("time.get", "time_get_response")]
    fn response_key_derivation(#[case] method: &str, #[case] expected: &str) {
        assert_eq!(response_key(method), expected);
    }
}
