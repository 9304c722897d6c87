use std::{fmt, str::FromStr};

use url::Url;

use crate::error::{Error, Result};

pub const SANDBOX_URL: &str = "https://api.sbx.lockstep.io/";
pub const PRODUCTION_URL: &str = "https://api.lockstep.io/";

/// The platform environment a [`Client`](crate::Client) talks to.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Environment {
    #[default]
    Sandbox,
    Production,
    /// Any other host, e.g. a local proxy or a mock server.
    Custom(Url),
}

impl Environment {
    pub fn base_url(&self) -> Result<Url> {
        match self {
            Self::Sandbox => Url::parse(SANDBOX_URL).map_err(|_| Error::invalid_endpoint(SANDBOX_URL)),
            Self::Production => {
                Url::parse(PRODUCTION_URL).map_err(|_| Error::invalid_endpoint(PRODUCTION_URL))
            }
            Self::Custom(url) => Ok(url.clone()),
        }
    }
}

/// Accepts `sbx`, `prd`, or an absolute URL.
impl FromStr for Environment {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sbx" | "sandbox" => Ok(Self::Sandbox),
            "prd" | "production" => Ok(Self::Production),
            _ => Url::parse(s.trim())
                .map(Self::Custom)
                .map_err(|_| Error::configuration(format!("unknown environment `{s}`"))),
        }
    }
}

/// Static credentials attached to every request.
///
/// Acquiring or refreshing bearer tokens is left to the caller.
#[derive(Clone)]
pub enum Credentials {
    /// Sent as the `Api-Key` header.
    ApiKey(String),
    /// Sent as `Authorization: Bearer <token>`.
    BearerToken(String),
}

impl Credentials {
    /// Reads `LOCKSTEP_API_KEY`, falling back to `LOCKSTEP_BEARER_TOKEN`.
    pub fn from_env() -> Result<Self> {
        if let Ok(api_key) = std::env::var("LOCKSTEP_API_KEY") {
            return Ok(Self::ApiKey(api_key));
        }
        std::env::var("LOCKSTEP_BEARER_TOKEN")
            .map(Self::BearerToken)
            .map_err(|_| Error::configuration("neither LOCKSTEP_API_KEY nor LOCKSTEP_BEARER_TOKEN is set"))
    }
}

// Secrets stay out of logs and `#[instrument]` fields.
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ApiKey(_) => f.write_str("ApiKey(***)"),
            Self::BearerToken(_) => f.write_str("BearerToken(***)"),
        }
    }
}
