use reqwest::Method;
use uuid::Uuid;

use crate::{
    clients::to_body,
    connection::{ApiResponse, Connection},
    endpoints::LockstepEndpoint,
    error::Result,
    models::SyncSubmitModel,
    query::include_pairs,
};

/// API handler for Sync endpoints
#[derive(Debug)]
pub struct SyncClient<'a, C> {
    connection: &'a C,
}

impl<'a, C: Connection> SyncClient<'a, C> {
    #[must_use]
    pub fn new(connection: &'a C) -> Self {
        Self { connection }
    }

    /// Starts a sync for an app enrollment. The payload is a `SyncRequestModel`
    /// to poll with [`Self::retrieve_sync`].
    #[instrument(skip(self))]
    pub async fn create_sync(&self, body: &SyncSubmitModel) -> Result<ApiResponse> {
        let path = LockstepEndpoint::Sync.path();
        self.connection
            .request(Method::POST, &path, to_body(body)?, &[])
            .await
    }

    /// `include` accepts `Details`.
    #[instrument(skip(self))]
    pub async fn retrieve_sync(&self, id: Uuid, include: Option<&str>) -> Result<ApiResponse> {
        let path = LockstepEndpoint::SyncRequest(id).path();
        self.connection
            .request(Method::GET, &path, None, &include_pairs(include))
            .await
    }
}
