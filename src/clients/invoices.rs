use reqwest::Method;
use serde::Serialize;
use uuid::Uuid;

use crate::{
    clients::to_body,
    connection::{ApiResponse, Connection},
    endpoints::LockstepEndpoint,
    error::Result,
    query::{QueryParameters, include_pairs},
};

/// Page size the server applies to invoice queries and views when none is given.
pub const DEFAULT_PAGE_SIZE: u32 = 200;

/// Collections that can be expanded on an invoice with `include`.
pub const INCLUDE_COLLECTIONS: &[&str] = &[
    "Addresses",
    "Lines",
    "Payments",
    "Notes",
    "Attachments",
    "Company",
    "Customer",
    "CustomFields",
    "CreditMemos",
];

/// API handler for Invoice endpoints
#[derive(Debug)]
pub struct InvoicesClient<'a, C> {
    connection: &'a C,
}

impl<'a, C: Connection> InvoicesClient<'a, C> {
    #[must_use]
    pub fn new(connection: &'a C) -> Self {
        Self { connection }
    }

    /// Retrieves the invoice with this platform id (not its ERP key).
    ///
    /// `include` names collections to expand, see [`INCLUDE_COLLECTIONS`].
    #[instrument(skip(self))]
    pub async fn retrieve_invoice(&self, id: Uuid, include: Option<&str>) -> Result<ApiResponse> {
        let path = LockstepEndpoint::Invoice(id).path();
        self.connection
            .request(Method::GET, &path, None, &include_pairs(include))
            .await
    }

    /// Updates only the fields present in `body`; all other fields stay as they are.
    ///
    /// `body` is typically a [`Patch`](crate::models::Patch).
    #[instrument(skip(self, body))]
    pub async fn update_invoice<B: Serialize + ?Sized>(
        &self,
        id: Uuid,
        body: &B,
    ) -> Result<ApiResponse> {
        let path = LockstepEndpoint::Invoice(id).path();
        self.connection
            .request(Method::PATCH, &path, to_body(body)?, &[])
            .await
    }

    #[instrument(skip(self))]
    pub async fn delete_invoice(&self, id: Uuid) -> Result<ApiResponse> {
        let path = LockstepEndpoint::Invoice(id).path();
        self.connection
            .request(Method::DELETE, &path, None, &[])
            .await
    }

    /// Creates one or more invoices and returns them as created.
    ///
    /// The platform expects an array, so pass a slice of
    /// [`InvoiceModel`](crate::models::InvoiceModel)s; the body is sent as given.
    #[instrument(skip(self, body))]
    pub async fn create_invoices<B: Serialize + ?Sized>(&self, body: &B) -> Result<ApiResponse> {
        let path = LockstepEndpoint::Invoices.path();
        self.connection
            .request(Method::POST, &path, to_body(body)?, &[])
            .await
    }

    /// Queries invoices with Searchlight filtering, sorting, expansion and paging.
    ///
    /// The payload is a `FetchResult<InvoiceModel>`.
    #[instrument(skip(self))]
    pub async fn query_invoices(&self, parameters: &QueryParameters) -> Result<ApiResponse> {
        let path = LockstepEndpoint::InvoicesQuery.path();
        self.connection
            .request(Method::GET, &path, None, &parameters.to_query_pairs())
            .await
    }

    /// Same as [`Self::query_invoices`], shaped as `FetchResult<InvoiceSummaryModel>`.
    /// No collections can be included yet.
    #[instrument(skip(self))]
    pub async fn query_invoice_summary_view(
        &self,
        parameters: &QueryParameters,
    ) -> Result<ApiResponse> {
        let path = LockstepEndpoint::InvoiceSummaryView.path();
        self.connection
            .request(Method::GET, &path, None, &parameters.to_query_pairs())
            .await
    }

    /// Queries at-risk invoices, shaped as `FetchResult<AtRiskInvoiceSummaryModel>`.
    #[instrument(skip(self))]
    pub async fn query_at_risk_invoice_summary_view(
        &self,
        parameters: &QueryParameters,
    ) -> Result<ApiResponse> {
        let path = LockstepEndpoint::AtRiskInvoiceSummaryView.path();
        self.connection
            .request(Method::GET, &path, None, &parameters.to_query_pairs())
            .await
    }
}
