//! Signed HTTP client for the open-platform REST gateway.
//!
//! The flow is one linear pass per call: merge fixed protocol parameters
//! into the caller's map, sign the union with the bracketed-secret MD5
//! scheme, POST (or GET) the form-encoded request, parse the JSON body,
//! detect the gateway's failure conventions, and optionally project the
//! body down to the keys the caller asked for.
//!
//! ```no_run
//! use toprest_client::{ClientConfig, GatewayClient, RequestParams};
//!
//! # async fn demo() -> toprest_client::Result<()> {
//! let client = GatewayClient::new(ClientConfig::new("app-key", "app-secret"))?;
//! let item = client
//!     .call(
//!         "taobao.item.get",
//!         RequestParams::new().set("num_iid", "12345"),
//!         &[],
//!     )
//!     .await?;
//! # let _ = item;
//! # Ok(())
//! # }
//! ```
//!
//! The HTTP transport and the clock are trait seams; tests inject spies and
//! a [`FixedClock`] to pin signatures and assert the wire contract exactly.

pub mod client;
pub mod clock;
pub mod config;
pub mod error;
pub mod params;
pub mod transport;

pub use {
    client::GatewayClient,
    clock::{Clock, FixedClock, SystemClock},
    config::{ClientConfig, FailureDetection},
    error::{Error, Result},
    params::RequestParams,
    transport::{HttpMethod, HttpRequest, HttpResponse, HttpTransport, ReqwestTransport},
};
