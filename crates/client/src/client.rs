//! The gateway client itself.
//!
//! One call is a single linear pass: check the required `method`, build the
//! protocol args with the clock's timestamp, sign the union of caller and
//! protocol parameters, split `method` out of the body, send, parse, detect
//! failure, project. No state survives the call except the immutable
//! configuration and the injected collaborators.

use {
    serde_json::Value,
    std::sync::Arc,
    tracing::{debug, trace},
};

use {
    crate::{
        clock::{Clock, SystemClock},
        config::{ClientConfig, FailureDetection},
        error::{Error, Result},
        params::RequestParams,
        transport::{HttpMethod, HttpRequest, HttpTransport, ReqwestTransport},
    },
    toprest_protocol::{ProtocolArgs, form_encode, format_timestamp, project, response_key,
        service_failure, sign},
};

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Client for a signed open-platform REST gateway.
pub struct GatewayClient {
    config: ClientConfig,
    transport: Arc<dyn HttpTransport>,
    clock: Arc<dyn Clock>,
}

impl GatewayClient {
    /// Build a client over the default reqwest transport and system clock.
    ///
    /// Fails with [`Error::Config`] when the application key or secret is
    /// empty.
    pub fn new(config: ClientConfig) -> Result<Self> {
        if config.app_key.is_empty() {
            return Err(Error::config("app_key must not be empty"));
        }
        if config.expose_secret().is_empty() {
            return Err(Error::config("app_secret must not be empty"));
        }
        Ok(Self {
            config,
            transport: Arc::new(ReqwestTransport::default()),
            clock: Arc::new(SystemClock),
        })
    }

    /// Swap in a different transport (tests use spies here).
    #[must_use]
    pub fn with_transport(mut self, transport: Arc<dyn HttpTransport>) -> Self {
        self.transport = transport;
        self
    }

    /// Swap in a different clock for deterministic timestamps.
    #[must_use]
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Signed POST. Projects the parsed body down to `response_keys` when
    /// the list is non-empty; returns the whole body otherwise.
    pub async fn execute(
        &self,
        params: RequestParams,
        response_keys: &[&str],
        headers: &[(&str, &str)],
    ) -> Result<Value> {
        self.request(HttpMethod::Post, params, response_keys, headers)
            .await
    }

    /// Signed GET. Caller params travel in the query string; the body is
    /// empty.
    pub async fn get(
        &self,
        params: RequestParams,
        response_keys: &[&str],
        headers: &[(&str, &str)],
    ) -> Result<Value> {
        self.request(HttpMethod::Get, params, response_keys, headers)
            .await
    }

    /// Convenience wrapper: call `method` and project to its conventional
    /// `*_response` key.
    pub async fn call(
        &self,
        method: &str,
        params: RequestParams,
        headers: &[(&str, &str)],
    ) -> Result<Value> {
        let key = response_key(method);
        let params = params.set("method", method);
        self.request(HttpMethod::Post, params, &[key.as_str()], headers)
            .await
    }

    /// The real work. `params` is consumed; the caller's own map is never
    /// touched, so concurrent calls on one client are safe.
    pub async fn request(
        &self,
        http_method: HttpMethod,
        params: RequestParams,
        response_keys: &[&str],
        headers: &[(&str, &str)],
    ) -> Result<Value> {
        let method = params.require("method")?.into_owned();

        let mut args = ProtocolArgs::new(
            &method,
            format_timestamp(self.clock.now()),
            &self.config.app_key,
            &self.config.target_app_key,
        );

        let mut union = params.clone().into_map();
        for (key, value) in args.signing_entries() {
            union.insert(key.to_string(), Value::String(value.to_string()));
        }
        trace!(keys = ?union.keys().collect::<Vec<_>>(), "signing request");
        args.sign = Some(sign(self.config.expose_secret(), &union));

        // `method` rides only in the signed query string, never in the body.
        let mut body_params = params;
        body_params.remove("method");
        let body_pairs = body_params.wire_pairs()?;

        let (url, body) = match http_method {
            HttpMethod::Post => (
                format!("{}?{}", self.config.url, form_encode(args.query_pairs())),
                form_encode(body_pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))),
            ),
            HttpMethod::Get => {
                let mut pairs: Vec<(&str, &str)> = args.query_pairs();
                pairs.extend(body_pairs.iter().map(|(k, v)| (k.as_str(), v.as_str())));
                (
                    format!("{}?{}", self.config.url, form_encode(pairs)),
                    String::new(),
                )
            },
        };

        let mut all_headers = vec![(String::from("Content-Type"), String::from(FORM_CONTENT_TYPE))];
        for (name, value) in headers {
            // The content type is pinned; a conflicting caller header is dropped.
            if name.eq_ignore_ascii_case("content-type") {
                continue;
            }
            all_headers.push(((*name).to_string(), (*value).to_string()));
        }

        debug!(%method, verb = http_method.as_str(), %url, "dispatching gateway request");
        let response = self
            .transport
            .send(HttpRequest {
                method: http_method,
                url,
                headers: all_headers,
                body,
            })
            .await?;
        debug!(%method, status = response.status, "gateway response");

        let parsed: Value = serde_json::from_str(&response.body)?;
        if parsed.is_null() {
            return Err(Error::EmptyResponse);
        }
        if self.config.failure_detection == FailureDetection::FlagEnvelope
            && let Some(failure) = service_failure(&parsed)
        {
            return Err(Error::Service {
                message: failure.message,
                envelope: failure.envelope,
            });
        }

        Ok(project(parsed, response_keys))
    }
}

impl std::fmt::Debug for GatewayClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GatewayClient")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
