use reqwest::{Method, RequestBuilder, header};
use serde_json::Value;
use tracing_error::SpanTrace;
use url::Url;

use crate::{
    clients::{
        AccountingProfilesClient, FeatureFlagsClient, InvoicesClient, LeadsClient, PaymentsClient,
        SyncClient, UserAccountsClient,
    },
    connection::{ApiResponse, Connection},
    credentials::{Credentials, Environment},
    endpoints::join_path,
    error::{Error, Result},
};

// Header names are case-insensitive; `HeaderMap` requires the lowercase form.

/// Header carrying an API key
const HEADER_API_KEY: &str = "api-key";
/// Header identifying the SDK language
const HEADER_SDK_TYPE: &str = "sdktype";
/// Header identifying the SDK release
const HEADER_SDK_VERSION: &str = "sdkversion";
/// Header naming the calling application, when configured
const HEADER_APP_NAME: &str = "appname";

const SDK_TYPE: &str = "Rust";
const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// The default [`Connection`]: issues requests with `reqwest` against one
/// platform environment, attaching credentials and SDK identification headers.
///
/// No retries or token refresh happen here; every call is a single request.
#[derive(Clone, Debug)]
pub struct Client {
    http_client: reqwest::Client,
    base_url: Url,
    headers: header::HeaderMap,
}

impl Client {
    /// Creates a client for `environment` authenticating with `credentials`.
    #[instrument]
    pub fn new(environment: Environment, credentials: Credentials) -> Result<Self> {
        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::ACCEPT,
            header::HeaderValue::from_static("application/json"),
        );
        headers.insert(HEADER_SDK_TYPE, header::HeaderValue::from_static(SDK_TYPE));
        headers.insert(
            HEADER_SDK_VERSION,
            header::HeaderValue::from_static(SDK_VERSION),
        );

        match credentials {
            Credentials::ApiKey(api_key) => {
                headers.insert(HEADER_API_KEY, sensitive_header(HEADER_API_KEY, &api_key)?);
            }
            Credentials::BearerToken(token) => {
                headers.insert(
                    header::AUTHORIZATION,
                    sensitive_header("authorization", &format!("Bearer {token}"))?,
                );
            }
        }

        Ok(Self {
            http_client: reqwest::Client::new(),
            base_url: environment.base_url()?,
            headers,
        })
    }

    /// Creates a client from `LOCKSTEP_ENVIRONMENT` (defaults to `sbx`),
    /// `LOCKSTEP_API_KEY` or `LOCKSTEP_BEARER_TOKEN`, and the optional
    /// `LOCKSTEP_APP_NAME`.
    pub fn from_env() -> Result<Self> {
        let environment = match std::env::var("LOCKSTEP_ENVIRONMENT") {
            Ok(environment) => environment.parse()?,
            Err(_) => Environment::default(),
        };
        let client = Self::new(environment, Credentials::from_env()?)?;

        match std::env::var("LOCKSTEP_APP_NAME") {
            Ok(app_name) => client.with_app_name(&app_name),
            Err(_) => Ok(client),
        }
    }

    /// Identifies the calling application to the platform.
    pub fn with_app_name(mut self, app_name: &str) -> Result<Self> {
        let value = header::HeaderValue::from_str(app_name)
            .map_err(|_| Error::invalid_header(HEADER_APP_NAME))?;
        self.headers.insert(HEADER_APP_NAME, value);
        Ok(self)
    }

    /// Replaces the underlying `reqwest` client, e.g. to configure timeouts or proxies.
    #[must_use]
    pub fn with_http_client(mut self, http_client: reqwest::Client) -> Self {
        self.http_client = http_client;
        self
    }

    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Build a request object with authentication and SDK headers.
    pub(crate) fn build_request(&self, method: Method, url: Url) -> RequestBuilder {
        self.http_client
            .request(method, url)
            .headers(self.headers.clone())
    }

    #[instrument(skip(response))]
    async fn handle_response(response: reqwest::Response) -> Result<ApiResponse> {
        let status = response.status();
        let url = response.url().to_string();
        let text = response.text().await?;

        debug!(%url, %status, "response body size: {} bytes", text.len());
        trace!("Response text:\n{}", text);

        if !status.is_success() {
            warn!(%url, %status, "request was not successful");
        }

        if text.trim().is_empty() {
            return Ok(ApiResponse::new(status, url, None));
        }

        match serde_json::from_str::<Value>(&text) {
            Ok(body) => Ok(ApiResponse::new(status, url, Some(body))),
            // Gateways in front of the platform answer failures with plain text or HTML.
            Err(_) if !status.is_success() => {
                Ok(ApiResponse::new(status, url, Some(Value::String(text))))
            }
            Err(source) => {
                error!(
                    "Deserialization error: {}, near position: {} - response text around that position: {}",
                    source,
                    source.column(),
                    text.chars()
                        .skip(source.column().saturating_sub(30))
                        .take(100)
                        .collect::<String>()
                );
                Err(Error::DeserializationError {
                    source,
                    entity_type: "ApiResponse".to_string(),
                    url: Some(url),
                    status_code: Some(status),
                    response_body: Some(text),
                    span_trace: SpanTrace::capture(),
                })
            }
        }
    }

    /// Access the invoices API
    #[must_use]
    pub fn invoices(&self) -> InvoicesClient<'_, Self> {
        InvoicesClient::new(self)
    }

    /// Access the leads API
    #[must_use]
    pub fn leads(&self) -> LeadsClient<'_, Self> {
        LeadsClient::new(self)
    }

    /// Access the accounting profiles API
    #[must_use]
    pub fn accounting_profiles(&self) -> AccountingProfilesClient<'_, Self> {
        AccountingProfilesClient::new(self)
    }

    /// Access the payments API
    #[must_use]
    pub fn payments(&self) -> PaymentsClient<'_, Self> {
        PaymentsClient::new(self)
    }

    /// Access the sync API
    #[must_use]
    pub fn sync(&self) -> SyncClient<'_, Self> {
        SyncClient::new(self)
    }

    /// Access the user accounts API
    #[must_use]
    pub fn user_accounts(&self) -> UserAccountsClient<'_, Self> {
        UserAccountsClient::new(self)
    }

    /// Access the feature flags API
    #[must_use]
    pub fn feature_flags(&self) -> FeatureFlagsClient<'_, Self> {
        FeatureFlagsClient::new(self)
    }
}

impl Connection for Client {
    #[instrument(skip(self, body))]
    async fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
        query: &[(&'static str, String)],
    ) -> Result<ApiResponse> {
        let url = join_path(&self.base_url, path)?;
        trace!(%method, %url, ?query, has_body = body.is_some(), "making request");

        let mut request = self.build_request(method, url);
        if !query.is_empty() {
            request = request.query(query);
        }
        if let Some(body) = &body {
            request = request.json(body);
        }

        let response = request.send().await?;
        Self::handle_response(response).await
    }
}

fn sensitive_header(name: &'static str, value: &str) -> Result<header::HeaderValue> {
    let mut value =
        header::HeaderValue::from_str(value).map_err(|_| Error::invalid_header(name))?;
    value.set_sensitive(true);
    Ok(value)
}
