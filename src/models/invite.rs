use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Body for inviting a user to the account.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InviteSubmitModel {
    /// Email address of the user to invite
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// Outcome of one invitation.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InviteModel {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub success: Option<bool>,

    /// The user account created for the invitee
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invited_user: Option<Value>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}
