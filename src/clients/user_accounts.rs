use reqwest::Method;
use serde::Serialize;

use crate::{
    clients::to_body,
    connection::{ApiResponse, Connection},
    endpoints::LockstepEndpoint,
    error::Result,
};

/// API handler for User Account endpoints
#[derive(Debug)]
pub struct UserAccountsClient<'a, C> {
    connection: &'a C,
}

impl<'a, C: Connection> UserAccountsClient<'a, C> {
    #[must_use]
    pub fn new(connection: &'a C) -> Self {
        Self { connection }
    }

    /// Invites users by email. `body` is a slice of
    /// [`InviteSubmitModel`](crate::models::InviteSubmitModel)s; the payload
    /// lists one [`InviteModel`](crate::models::InviteModel) per address.
    #[instrument(skip(self, body))]
    pub async fn invite_user<B: Serialize + ?Sized>(&self, body: &B) -> Result<ApiResponse> {
        let path = LockstepEndpoint::UserAccountInvite.path();
        self.connection
            .request(Method::POST, &path, to_body(body)?, &[])
            .await
    }
}
