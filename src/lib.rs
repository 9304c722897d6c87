//! # lockstep-rs
//!
//! A Rust client library for the Lockstep Platform API: invoices, leads,
//! accounting profiles and payments, plus a few platform endpoints.
//!
//! ```no_run
//! use lockstep_rs::{Client, FetchResult, InvoiceModel, QueryParameters};
//!
//! # async fn run() -> lockstep_rs::error::Result<()> {
//! let client = Client::from_env()?;
//! let response = client
//!     .invoices()
//!     .query_invoices(
//!         &QueryParameters::new()
//!             .filter("invoiceStatusCode eq 'Open'")
//!             .page_size(50),
//!     )
//!     .await?;
//!
//! if response.is_success() {
//!     let page: FetchResult<InvoiceModel> = response.json()?;
//!     println!("{} open invoices", page.total_count.unwrap_or_default());
//! }
//! # Ok(())
//! # }
//! ```
//!
//! Resource clients return the raw [`ApiResponse`]: a non-success status is
//! not an [`Error`]. Only transport failures and undecodable payloads are.
//!
//! ## Sentry Integration
//!
//! Errors carry an async [`SpanTrace`] captured where they were created. With
//! the `sentry` feature enabled, errors and responses convert into Sentry
//! breadcrumbs (see the `sentry_integration` module).
//!
//! ```ignore
//! use tracing_subscriber::prelude::*;
//! use tracing_error::ErrorLayer;
//!
//! tracing_subscriber::registry()
//!     .with(tracing_subscriber::fmt::layer())
//!     .with(ErrorLayer::default())  // Required for SpanTrace capture
//!     .with(sentry::integrations::tracing::layer())
//!     .init();
//! ```

#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

#[macro_use]
extern crate tracing;

pub mod client;
pub mod clients;
pub mod connection;
pub mod credentials;
pub mod endpoints;
pub mod error;
pub mod models;
pub mod query;
pub mod utils;

#[cfg(feature = "sentry")]
pub mod sentry_integration;

pub use client::Client;
pub use connection::{ApiResponse, Connection};
pub use credentials::{Credentials, Environment};
pub use endpoints::LockstepEndpoint;
pub use error::Error;
pub use models::{FetchResult, Model, Patch};
pub use query::QueryParameters;
pub use utils::date_format::{CalendarDate, Timestamp};

// Re-export SpanTrace for users who want to access it
pub use tracing_error::SpanTrace;

// Re-export the resource models for convenience
pub use models::{
    AccountingProfileContactResultModel, AccountingProfileModel, AccountingProfileRequest,
    AtRiskInvoiceSummaryModel, ErrorResult, InvoiceModel, InvoiceSummaryModel, LeadModel,
    PaymentModel,
};
