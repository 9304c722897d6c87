//! The seam between resource clients and the HTTP transport.
//!
//! Resource clients only ever call [`Connection::request`]. The crate ships a
//! `reqwest`-backed implementation in [`Client`](crate::Client); tests and
//! applications with their own transport can provide another one.

use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing_error::SpanTrace;

use crate::{
    error::{Error, Result},
    models::{ErrorResult, model_name},
};

/// Query string pairs, in the order they are sent.
pub type QueryPairs = Vec<(&'static str, String)>;

/// Issues a single request against the platform.
///
/// `path` is absolute below the host (`/api/v1/...`). `body` is the JSON
/// payload, if any. `query` is forwarded verbatim; an empty slice means no
/// query string.
#[allow(async_fn_in_trait)]
pub trait Connection {
    async fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
        query: &[(&'static str, String)],
    ) -> Result<ApiResponse>;
}

/// The raw outcome of a request: status plus parsed JSON payload.
///
/// Non-success statuses are carried here unchanged; nothing in the resource
/// clients inspects them.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: StatusCode,
    pub url: String,
    /// `None` when the response had an empty body.
    pub body: Option<Value>,
}

impl ApiResponse {
    #[must_use]
    pub fn new(status: StatusCode, url: impl Into<String>, body: Option<Value>) -> Self {
        Self {
            status,
            url: url.into(),
            body,
        }
    }

    #[must_use]
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// Deserializes the payload into `T`. An empty body is read as JSON `null`.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T> {
        let value = self.body.clone().unwrap_or(Value::Null);
        serde_json::from_value(value).map_err(|source| {
            let entity_type = model_name::<T>();
            error!(%source, %entity_type, url = %self.url, "failed to deserialize response");
            Error::DeserializationError {
                source,
                entity_type,
                url: Some(self.url.clone()),
                status_code: Some(self.status),
                response_body: self.body.as_ref().map(Value::to_string),
                span_trace: SpanTrace::capture(),
            }
        })
    }

    /// Parses the platform's problem-details payload from a failed response.
    ///
    /// Returns `None` for successful responses and for bodies that are not
    /// problem details.
    #[must_use]
    pub fn error_result(&self) -> Option<ErrorResult> {
        if self.is_success() {
            return None;
        }
        self.body
            .clone()
            .and_then(|body| serde_json::from_value(body).ok())
    }
}
