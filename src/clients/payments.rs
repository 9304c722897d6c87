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

/// Page size the server applies to payment queries when none is given.
pub const DEFAULT_PAGE_SIZE: u32 = 200;

/// API handler for Payment endpoints
#[derive(Debug)]
pub struct PaymentsClient<'a, C> {
    connection: &'a C,
}

impl<'a, C: Connection> PaymentsClient<'a, C> {
    #[must_use]
    pub fn new(connection: &'a C) -> Self {
        Self { connection }
    }

    /// `include` accepts `Applications`, `Notes`, `Attachments`,
    /// `CustomFieldDefinitions` and `CustomFieldValues`.
    #[instrument(skip(self))]
    pub async fn retrieve_payment(&self, id: Uuid, include: Option<&str>) -> Result<ApiResponse> {
        let path = LockstepEndpoint::Payment(id).path();
        self.connection
            .request(Method::GET, &path, None, &include_pairs(include))
            .await
    }

    #[instrument(skip(self, body))]
    pub async fn update_payment<B: Serialize + ?Sized>(
        &self,
        id: Uuid,
        body: &B,
    ) -> Result<ApiResponse> {
        let path = LockstepEndpoint::Payment(id).path();
        self.connection
            .request(Method::PATCH, &path, to_body(body)?, &[])
            .await
    }

    #[instrument(skip(self))]
    pub async fn delete_payment(&self, id: Uuid) -> Result<ApiResponse> {
        let path = LockstepEndpoint::Payment(id).path();
        self.connection
            .request(Method::DELETE, &path, None, &[])
            .await
    }

    #[instrument(skip(self, body))]
    pub async fn create_payments<B: Serialize + ?Sized>(&self, body: &B) -> Result<ApiResponse> {
        let path = LockstepEndpoint::Payments.path();
        self.connection
            .request(Method::POST, &path, to_body(body)?, &[])
            .await
    }

    #[instrument(skip(self))]
    pub async fn query_payments(&self, parameters: &QueryParameters) -> Result<ApiResponse> {
        let path = LockstepEndpoint::PaymentsQuery.path();
        self.connection
            .request(Method::GET, &path, None, &parameters.to_query_pairs())
            .await
    }
}
