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

/// Page size the server applies to accounting profile queries when none is given.
pub const DEFAULT_PAGE_SIZE: u32 = 250;

/// Largest page size the server accepts for accounting profile queries.
pub const MAX_PAGE_SIZE: u32 = 500;

/// API handler for Accounting Profile endpoints
#[derive(Debug)]
pub struct AccountingProfilesClient<'a, C> {
    connection: &'a C,
}

impl<'a, C: Connection> AccountingProfilesClient<'a, C> {
    #[must_use]
    pub fn new(connection: &'a C) -> Self {
        Self { connection }
    }

    /// Retrieves one accounting profile. `include` accepts `Attachments`,
    /// `CustomFields` and `Notes`.
    #[instrument(skip(self))]
    pub async fn retrieve_accounting_profile(
        &self,
        id: Uuid,
        include: Option<&str>,
    ) -> Result<ApiResponse> {
        let path = LockstepEndpoint::AccountingProfile(id).path();
        self.connection
            .request(Method::GET, &path, None, &include_pairs(include))
            .await
    }

    /// Updates only the fields present in `body`.
    #[instrument(skip(self, body))]
    pub async fn update_accounting_profile<B: Serialize + ?Sized>(
        &self,
        id: Uuid,
        body: &B,
    ) -> Result<ApiResponse> {
        let path = LockstepEndpoint::AccountingProfile(id).path();
        self.connection
            .request(Method::PATCH, &path, to_body(body)?, &[])
            .await
    }

    #[instrument(skip(self))]
    pub async fn delete_accounting_profile(&self, id: Uuid) -> Result<ApiResponse> {
        let path = LockstepEndpoint::AccountingProfile(id).path();
        self.connection
            .request(Method::DELETE, &path, None, &[])
            .await
    }

    /// Creates one or more profiles from
    /// [`AccountingProfileRequest`](crate::models::AccountingProfileRequest)s.
    #[instrument(skip(self, body))]
    pub async fn create_accounting_profiles<B: Serialize + ?Sized>(
        &self,
        body: &B,
    ) -> Result<ApiResponse> {
        let path = LockstepEndpoint::AccountingProfiles.path();
        self.connection
            .request(Method::POST, &path, to_body(body)?, &[])
            .await
    }

    #[instrument(skip(self))]
    pub async fn query_accounting_profiles(
        &self,
        parameters: &QueryParameters,
    ) -> Result<ApiResponse> {
        let path = LockstepEndpoint::AccountingProfilesQuery.path();
        self.connection
            .request(Method::GET, &path, None, &parameters.to_query_pairs())
            .await
    }

    /// Retrieves every contact linked to the profile, as a list of
    /// [`AccountingProfileContactResultModel`](crate::models::AccountingProfileContactResultModel).
    #[instrument(skip(self))]
    pub async fn retrieve_all_accounting_profile_contacts(&self, id: Uuid) -> Result<ApiResponse> {
        let path = LockstepEndpoint::AccountingProfileContactModels(id).path();
        self.connection
            .request(Method::GET, &path, None, &[])
            .await
    }
}
