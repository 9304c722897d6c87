use std::fmt;

use url::Url;
use uuid::Uuid;

use crate::error::{Error, Result};

/// Prefix shared by every versioned route of the platform.
pub const API_PREFIX: &str = "/api/v1";

/// A typed representation of Lockstep API routes.
///
/// Each variant renders to the fixed path template of one endpoint, with
/// record identifiers substituted in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LockstepEndpoint {
    // Invoices
    Invoices,
    Invoice(Uuid),
    InvoicesQuery,
    InvoiceSummaryView,
    AtRiskInvoiceSummaryView,

    // Leads
    Leads,

    // Accounting profiles
    AccountingProfiles,
    AccountingProfile(Uuid),
    AccountingProfilesQuery,
    AccountingProfileContactModels(Uuid),

    // Payments
    Payments,
    Payment(Uuid),
    PaymentsQuery,

    // Platform
    Sync,
    SyncRequest(Uuid),
    UserAccountInvite,
    FeatureFlags,

    // Custom route below the api prefix, one entry per path segment
    Custom(Vec<String>),
}

impl LockstepEndpoint {
    /// Renders the absolute request path, e.g. `/api/v1/Invoices/{id}`.
    #[must_use]
    pub fn path(&self) -> String {
        let relative = match self {
            Self::Invoices => "Invoices".to_string(),
            Self::Invoice(id) => format!("Invoices/{id}"),
            Self::InvoicesQuery => "Invoices/query".to_string(),
            Self::InvoiceSummaryView => "Invoices/views/summary".to_string(),
            Self::AtRiskInvoiceSummaryView => "Invoices/views/at-risk-summary".to_string(),
            Self::Leads => "Leads".to_string(),
            Self::AccountingProfiles => "profiles/accounting".to_string(),
            Self::AccountingProfile(id) => format!("profiles/accounting/{id}"),
            Self::AccountingProfilesQuery => "profiles/accounting/query".to_string(),
            Self::AccountingProfileContactModels(id) => {
                format!("profiles/accounting/{id}/contacts/models")
            }
            Self::Payments => "Payments".to_string(),
            Self::Payment(id) => format!("Payments/{id}"),
            Self::PaymentsQuery => "Payments/query".to_string(),
            Self::Sync => "Sync".to_string(),
            Self::SyncRequest(id) => format!("Sync/{id}"),
            Self::UserAccountInvite => "UserAccounts/invite".to_string(),
            Self::FeatureFlags => "FeatureFlags".to_string(),
            Self::Custom(components) => components.join("/"),
        };

        format!("{API_PREFIX}/{relative}")
    }

    /// Joins the endpoint onto `base`, keeping any path prefix the base carries.
    pub fn to_url(&self, base: &Url) -> Result<Url> {
        join_path(base, &self.path())
    }
}

/// Joins an absolute API path onto a base URL.
///
/// The base is treated as a directory, so `https://host/proxy` and
/// `https://host/proxy/` both yield `https://host/proxy/api/v1/...`.
pub(crate) fn join_path(base: &Url, path: &str) -> Result<Url> {
    let mut base = base.clone();
    if !base.path().ends_with('/') {
        let directory = format!("{}/", base.path());
        base.set_path(&directory);
    }

    base.join(path.trim_start_matches('/'))
        .map_err(|_| Error::invalid_endpoint(path))
}

impl fmt::Display for LockstepEndpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

// Allow conversion from LockstepEndpoint to a path string
impl From<LockstepEndpoint> for String {
    fn from(endpoint: LockstepEndpoint) -> Self {
        endpoint.path()
    }
}
