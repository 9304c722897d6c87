//! Resource clients: one per resource family, each method one endpoint.
//!
//! Clients borrow a [`Connection`](crate::connection::Connection) and return
//! its [`ApiResponse`](crate::connection::ApiResponse) untouched. Use
//! `response.json::<Model>()` to read the payload.

use serde::Serialize;
use serde_json::Value;

use crate::error::{Error, Result};

pub mod accounting_profiles;
pub mod feature_flags;
pub mod invoices;
pub mod leads;
pub mod payments;
pub mod sync;
pub mod user_accounts;

pub use accounting_profiles::AccountingProfilesClient;
pub use feature_flags::FeatureFlagsClient;
pub use invoices::InvoicesClient;
pub use leads::LeadsClient;
pub use payments::PaymentsClient;
pub use sync::SyncClient;
pub use user_accounts::UserAccountsClient;

/// Converts a caller-supplied body to JSON without adding or dropping fields.
pub(crate) fn to_body<B: Serialize + ?Sized>(body: &B) -> Result<Option<Value>> {
    serde_json::to_value(body)
        .map(Some)
        .map_err(Error::serialization)
}
