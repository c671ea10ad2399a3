//! Per-call request parameters.
//!
//! A thin ordered-map newtype over `serde_json::Value` entries. Ordering is
//! ascending byte order of keys, which is exactly what signing needs, so
//! the same map backs both the signature and the form-encoded body.

use {
    serde::{Deserialize, Serialize},
    serde_json::Value,
    std::{borrow::Cow, collections::BTreeMap},
};

use {
    crate::error::{Error, Result},
    toprest_protocol::{form_encode, sign::value_string},
};

/// Caller-assembled parameters for one gateway call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RequestParams(BTreeMap<String, Value>);

impl RequestParams {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Chainable insert for building a call site-style parameter list.
    #[must_use]
    pub fn set(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    /// Insert in place, returning the previous value for the key.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.0.insert(key.into(), value.into())
    }

    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.0.remove(key)
    }

    #[must_use]
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(Value::as_str)
    }

    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The wire-string form of `key`, or a missing-parameter error naming it.
    pub fn require(&self, key: &str) -> Result<Cow<'_, str>> {
        self.0
            .get(key)
            .map(value_string)
            .ok_or_else(|| Error::missing_parameter(key))
    }

    /// Check several required keys at once; the first absent one is named
    /// in the error.
    pub fn require_all(&self, keys: &[&str]) -> Result<()> {
        for key in keys {
            if !self.0.contains_key(*key) {
                return Err(Error::missing_parameter(*key));
            }
        }
        Ok(())
    }

    /// Coerce every entry to its `(key, wire-string)` pair.
    ///
    /// Fails with [`Error::Unsupported`] when any value starts with `@` —
    /// the upload convention the SDK does not implement. The scan runs
    /// before anything touches the network.
    pub fn wire_pairs(&self) -> Result<Vec<(String, String)>> {
        self.0
            .iter()
            .map(|(key, value)| {
                let rendered = value_string(value);
                if rendered.starts_with('@') {
                    return Err(Error::unsupported(format!(
                        "file upload parameters are not supported (`{key}` starts with `@`)"
                    )));
                }
                Ok((key.clone(), rendered.into_owned()))
            })
            .collect()
    }

    /// `application/x-www-form-urlencoded` encoding of all entries.
    pub fn form_body(&self) -> Result<String> {
        let pairs = self.wire_pairs()?;
        Ok(form_encode(
            pairs.iter().map(|(k, v)| (k.as_str(), v.as_str())),
        ))
    }

    /// The underlying ordered map, for building the signing union.
    #[must_use]
    pub fn into_map(self) -> BTreeMap<String, Value> {
        self.0
    }
}

impl From<BTreeMap<String, Value>> for RequestParams {
    fn from(map: BTreeMap<String, Value>) -> Self {
        Self(map)
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for RequestParams {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}
