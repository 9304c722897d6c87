use miette::Diagnostic;
use thiserror::Error;
use tracing_error::SpanTrace;

/// Errors raised by the transport and by payload decoding.
///
/// HTTP error statuses are *not* errors: they come back as an
/// [`ApiResponse`](crate::connection::ApiResponse) for the caller to inspect.
#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("error making request: {source}")]
    #[diagnostic(
        code(lockstep_rs::request_error),
        help("Check your network connection and Lockstep API availability")
    )]
    Request {
        #[source]
        source: reqwest::Error,
        span_trace: SpanTrace,
    },

    #[error("error encoding request body: {source}")]
    #[diagnostic(
        code(lockstep_rs::serialization_error),
        help("The request body could not be represented as JSON")
    )]
    Serialization {
        #[source]
        source: serde_json::Error,
        span_trace: SpanTrace,
    },

    #[error("error decoding {entity_type} response: {source}")]
    #[diagnostic(
        code(lockstep_rs::deserialization_error),
        help("The API returned data in an unexpected format")
    )]
    DeserializationError {
        #[source]
        source: serde_json::Error,
        entity_type: String,
        url: Option<String>,
        status_code: Option<reqwest::StatusCode>,
        response_body: Option<String>,
        span_trace: SpanTrace,
    },

    #[error("endpoint could not be parsed as a URL: {path}")]
    #[diagnostic(
        code(lockstep_rs::invalid_endpoint),
        help("Check that the base URL and API path are correctly formatted")
    )]
    InvalidEndpoint { path: String, span_trace: SpanTrace },

    #[error("value for header {name} is not a valid HTTP header value")]
    #[diagnostic(
        code(lockstep_rs::invalid_header),
        help("API keys, bearer tokens and app names must be visible ASCII")
    )]
    InvalidHeader {
        name: &'static str,
        span_trace: SpanTrace,
    },

    #[error("invalid configuration: {message}")]
    #[diagnostic(
        code(lockstep_rs::configuration),
        help("Set LOCKSTEP_API_KEY or LOCKSTEP_BEARER_TOKEN, and optionally LOCKSTEP_ENVIRONMENT")
    )]
    Configuration { message: String, span_trace: SpanTrace },
}

impl Error {
    pub(crate) fn serialization(source: serde_json::Error) -> Self {
        Self::Serialization {
            source,
            span_trace: SpanTrace::capture(),
        }
    }

    pub(crate) fn invalid_endpoint(path: impl Into<String>) -> Self {
        Self::InvalidEndpoint {
            path: path.into(),
            span_trace: SpanTrace::capture(),
        }
    }

    pub(crate) fn invalid_header(name: &'static str) -> Self {
        Self::InvalidHeader {
            name,
            span_trace: SpanTrace::capture(),
        }
    }

    pub(crate) fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
            span_trace: SpanTrace::capture(),
        }
    }

    /// The async span trace captured when the error was created.
    #[must_use]
    pub fn span_trace(&self) -> &SpanTrace {
        match self {
            Self::Request { span_trace, .. }
            | Self::Serialization { span_trace, .. }
            | Self::DeserializationError { span_trace, .. }
            | Self::InvalidEndpoint { span_trace, .. }
            | Self::InvalidHeader { span_trace, .. }
            | Self::Configuration { span_trace, .. } => span_trace,
        }
    }

    /// The request URL, when the error is tied to one.
    #[must_use]
    pub fn url(&self) -> Option<&str> {
        match self {
            Self::Request { source, .. } => source.url().map(url::Url::as_str),
            Self::DeserializationError { url, .. } => url.as_deref(),
            _ => None,
        }
    }

    #[must_use]
    pub fn status_code(&self) -> Option<reqwest::StatusCode> {
        match self {
            Self::Request { source, .. } => source.status(),
            Self::DeserializationError { status_code, .. } => *status_code,
            _ => None,
        }
    }

    #[must_use]
    pub fn response_body(&self) -> Option<&str> {
        match self {
            Self::DeserializationError { response_body, .. } => response_body.as_deref(),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(source: reqwest::Error) -> Self {
        Self::Request {
            source,
            span_trace: SpanTrace::capture(),
        }
    }
}

/// Type alias for results from this crate.
///
/// This is already a Miette diagnostic result due to the implementation of
/// the Diagnostic trait for the Error type.
pub type Result<O> = std::result::Result<O, Error>;
