use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A person interested in the platform who needs features it does not have yet.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadModel {
    /// Assigned by the platform when the lead is created
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lead_id: Option<Uuid>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Name of the lead's company
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub email_address: Option<String>,

    /// The ERP system the lead would like to connect
    #[serde(skip_serializing_if = "Option::is_none")]
    pub erp_system: Option<String>,
}
