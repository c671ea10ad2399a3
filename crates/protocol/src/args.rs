//! Per-call protocol arguments.
//!
//! Every request to the router carries the same fixed set of parameters in
//! its query string: the remote method name, a local-time timestamp, the
//! serialization format, credentials, protocol version, signature method,
//! partner identifier, and finally the computed signature. One call's args
//! are built, signed, serialized, and dropped — nothing here outlives the
//! request.

use crate::{FORMAT_JSON, PARTNER_ID, PROTOCOL_VERSION, SIGN_METHOD_MD5};

/// The fixed and derived parameters attached to a single gateway call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProtocolArgs {
    /// Remote method name, e.g. `taobao.item.get`.
    pub method: String,
    /// `yyyy-MM-dd HH:mm:ss`, sender-local time.
    pub timestamp: String,
    /// Always [`FORMAT_JSON`].
    pub format: &'static str,
    /// Application key from the client configuration.
    pub app_key: String,
    /// Always [`PROTOCOL_VERSION`].
    pub v: &'static str,
    /// Always [`SIGN_METHOD_MD5`].
    pub sign_method: &'static str,
    /// Target application key; empty string when unset.
    pub target_app_key: String,
    /// Always [`PARTNER_ID`].
    pub partner_id: &'static str,
    /// Computed signature; `None` until the signing layer fills it in.
    pub sign: Option<String>,
}

impl ProtocolArgs {
    /// Build the args for one call. `sign` starts out unset.
    #[must_use]
    pub fn new(
        method: impl Into<String>,
        timestamp: impl Into<String>,
        app_key: impl Into<String>,
        target_app_key: impl Into<String>,
    ) -> Self {
        Self {
            method: method.into(),
            timestamp: timestamp.into(),
            format: FORMAT_JSON,
            app_key: app_key.into(),
            v: PROTOCOL_VERSION,
            sign_method: SIGN_METHOD_MD5,
            target_app_key: target_app_key.into(),
            partner_id: PARTNER_ID,
            sign: None,
        }
    }

    /// The `(key, value)` pairs that participate in signing — everything
    /// except `sign` itself.
    #[must_use]
    pub fn signing_entries(&self) -> [(&'static str, &str); 8] {
        [
            ("method", &self.method),
            ("timestamp", &self.timestamp),
            ("format", self.format),
            ("app_key", &self.app_key),
            ("v", self.v),
            ("sign_method", self.sign_method),
            ("target_app_key", &self.target_app_key),
            ("partner_id", self.partner_id),
        ]
    }

    /// Ordered pairs for the request query string, `sign` last.
    #[must_use]
    pub fn query_pairs(&self) -> Vec<(&str, &str)> {
        let mut pairs = self.signing_entries().to_vec();
        if let Some(sign) = &self.sign {
            pairs.push(("sign", sign));
        }
        pairs
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn args() -> ProtocolArgs {
        ProtocolArgs::new("taobao.item.get", "2023-09-05 09:04:17", "100200", "")
    }

    #[test]
    fn new_fills_fixed_fields() {
        let args = args();
        assert_eq!(args.format, "json");
        assert_eq!(args.v, "2.0");
        assert_eq!(args.sign_method, "md5");
        assert_eq!(args.partner_id, "top-sdk-deno-20230905");
        assert_eq!(args.target_app_key, "");
        assert!(args.sign.is_none());
    }

    #[test]
    fn signing_entries_exclude_sign() {
        let mut args = args();
        args.sign = Some("ABC".into());
        assert!(
            args.signing_entries()
                .iter()
                .all(|(key, _)| *key != "sign")
        );
    }

    #[test]
    fn query_pairs_put_sign_last() {
        let mut args = args();
        args.sign = Some("ABC".into());
        let pairs = args.query_pairs();
        assert_eq!(pairs.len(), 9);
        assert_eq!(pairs.first().unwrap().0, "method");
        assert_eq!(*pairs.last().unwrap(), ("sign", "ABC"));
    }

    #[test]
    fn unsigned_args_omit_the_sign_pair() {
        assert_eq!(args().query_pairs().len(), 8);
    }
}
