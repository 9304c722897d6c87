//! Sentry integration for lockstep-rs errors and responses.
//!
//! Only available when the `sentry` feature is enabled.
//!
//! ```toml
//! [dependencies]
//! lockstep-rs = { version = "0.1.0-alpha.1", features = ["sentry"] }
//! ```
//!
//! Errors from lockstep-rs include span traces when they occur within an
//! instrumented span and an `ErrorLayer` is installed.

use std::collections::BTreeMap;

use sentry_core::{Breadcrumb, Level, protocol::Value};

use crate::{connection::ApiResponse, error::Error};

/// Longest response body preview attached to Sentry context.
const BODY_PREVIEW_LEN: usize = 500;

/// Convert a lockstep-rs Error into a Sentry breadcrumb.
impl<'a> From<&'a Error> for Breadcrumb {
    fn from(error: &'a Error) -> Self {
        let (category, message, data) = match error {
            Error::Request { source, .. } => {
                let mut data = BTreeMap::new();
                if let Some(url) = source.url() {
                    data.insert("url".to_string(), Value::from(url.to_string()));
                }
                (
                    "http.request",
                    format!("HTTP request error: {source}"),
                    data,
                )
            }

            Error::Serialization { source, .. } => (
                "lockstep.request",
                format!("Failed to encode request body: {source}"),
                BTreeMap::new(),
            ),

            Error::DeserializationError {
                entity_type,
                url,
                status_code,
                ..
            } => {
                let mut data = BTreeMap::new();
                data.insert("entity_type".to_string(), Value::from(entity_type.clone()));
                if let Some(url) = url {
                    data.insert("url".to_string(), Value::from(url.clone()));
                }
                if let Some(status) = status_code {
                    data.insert("status_code".to_string(), Value::from(status.as_u16()));
                }
                (
                    "http.response",
                    format!("Failed to deserialize {entity_type} response"),
                    data,
                )
            }

            Error::InvalidEndpoint { path, .. } => {
                let mut data = BTreeMap::new();
                data.insert("path".to_string(), Value::from(path.clone()));
                ("lockstep.config", "Invalid endpoint URL".to_string(), data)
            }

            Error::InvalidHeader { name, .. } => {
                let mut data = BTreeMap::new();
                data.insert("header".to_string(), Value::from(*name));
                ("lockstep.config", "Invalid header value".to_string(), data)
            }

            Error::Configuration { message, .. } => (
                "lockstep.config",
                format!("Invalid configuration: {message}"),
                BTreeMap::new(),
            ),
        };

        Breadcrumb {
            ty: "error".to_string(),
            category: Some(category.to_string()),
            message: Some(message),
            data,
            level: Level::Error,
            ..Default::default()
        }
    }
}

/// Records an API call outcome; failed statuses are logged at warning level.
impl<'a> From<&'a ApiResponse> for Breadcrumb {
    fn from(response: &'a ApiResponse) -> Self {
        let mut data = BTreeMap::new();
        data.insert("url".to_string(), Value::from(response.url.clone()));
        data.insert(
            "status_code".to_string(),
            Value::from(response.status.as_u16()),
        );

        let mut message = format!("{} {}", response.status, response.url);
        if let Some(problem) = response.error_result() {
            if let Some(title) = &problem.title {
                message = format!("{message}: {title}");
            }
            if let Some(trace_id) = &problem.trace_id {
                data.insert("trace_id".to_string(), Value::from(trace_id.clone()));
            }
        }

        Breadcrumb {
            ty: "http".to_string(),
            category: Some("lockstep.response".to_string()),
            message: Some(message),
            data,
            level: if response.is_success() {
                Level::Info
            } else {
                Level::Warning
            },
            ..Default::default()
        }
    }
}

/// Convert a lockstep-rs Error into Sentry context data.
///
/// # Example
///
/// ```ignore
/// use sentry::configure_scope;
/// use lockstep_rs::sentry_integration::error_to_sentry_context;
///
/// if let Err(e) = client.invoices().query_invoices(&params).await {
///     configure_scope(|scope| {
///         for (key, value) in error_to_sentry_context(&e) {
///             scope.set_extra(&key, value);
///         }
///     });
/// }
/// ```
pub fn error_to_sentry_context(error: &Error) -> BTreeMap<String, Value> {
    let mut context = BTreeMap::new();

    context.insert(
        "lockstep.span_trace".to_string(),
        Value::from(error.span_trace().to_string()),
    );

    if let Some(url) = error.url() {
        context.insert("lockstep.url".to_string(), Value::from(url.to_string()));
    }

    if let Some(status) = error.status_code() {
        context.insert(
            "lockstep.status_code".to_string(),
            Value::from(status.as_u16()),
        );
    }

    if let Some(body) = error.response_body() {
        let truncated = if body.chars().count() > BODY_PREVIEW_LEN {
            format!("{}...", body.chars().take(BODY_PREVIEW_LEN).collect::<String>())
        } else {
            body.to_string()
        };
        context.insert("lockstep.response_body".to_string(), Value::from(truncated));
    }

    context
}
