use reqwest::Method;

use crate::{
    clients::to_body,
    connection::{ApiResponse, Connection},
    endpoints::LockstepEndpoint,
    error::Result,
    models::FeatureFlagsRequestModel,
};

/// API handler for the Feature Flags endpoint
#[derive(Debug)]
pub struct FeatureFlagsClient<'a, C> {
    connection: &'a C,
}

impl<'a, C: Connection> FeatureFlagsClient<'a, C> {
    #[must_use]
    pub fn new(connection: &'a C) -> Self {
        Self { connection }
    }

    /// Looks up the named flags. The lookup is a `POST`; the payload is a
    /// `FeatureFlagsResponseModel`.
    #[instrument(skip(self))]
    pub async fn retrieve_feature_flags(
        &self,
        body: &FeatureFlagsRequestModel,
    ) -> Result<ApiResponse> {
        let path = LockstepEndpoint::FeatureFlags.path();
        self.connection
            .request(Method::POST, &path, to_body(body)?, &[])
            .await
    }
}
