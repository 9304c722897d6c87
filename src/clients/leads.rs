use reqwest::Method;
use serde::Serialize;

use crate::{
    clients::to_body,
    connection::{ApiResponse, Connection},
    endpoints::LockstepEndpoint,
    error::Result,
};

/// API handler for Lead endpoints
#[derive(Debug)]
pub struct LeadsClient<'a, C> {
    connection: &'a C,
}

impl<'a, C: Connection> LeadsClient<'a, C> {
    #[must_use]
    pub fn new(connection: &'a C) -> Self {
        Self { connection }
    }

    /// Creates one or more [`LeadModel`](crate::models::LeadModel)s and returns them as created.
    #[instrument(skip(self, body))]
    pub async fn create_leads<B: Serialize + ?Sized>(&self, body: &B) -> Result<ApiResponse> {
        let path = LockstepEndpoint::Leads.path();
        self.connection
            .request(Method::POST, &path, to_body(body)?, &[])
            .await
    }
}
