//! Accounting profiles.
//!
//! An accounting profile is a child of a company profile. Together they hold
//! what an accounting team needs to work with trading partners, financial
//! institutions and auditors.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::common::{AttachmentModel, CustomFieldDefinitionModel, CustomFieldValueModel, NoteModel};
use crate::utils::date_format::{Timestamp, datetime_option};

/// An accounting profile as returned by the API.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountingProfileModel {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accounting_profile_id: Option<Uuid>,

    /// The company profile this accounting profile belongs to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_id: Option<Uuid>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_key: Option<Uuid>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// The function this profile describes, e.g. `AR` or `AP`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub r#type: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub email_address: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub fax: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub address1: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub address2: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub address3: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,

    #[serde(default, with = "datetime_option", skip_serializing_if = "Option::is_none")]
    pub created: Option<Timestamp>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_user_id: Option<Uuid>,

    #[serde(default, with = "datetime_option", skip_serializing_if = "Option::is_none")]
    pub modified: Option<Timestamp>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified_user_id: Option<Uuid>,

    /// Expanded with `include=Notes`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<Vec<NoteModel>>,

    /// Expanded with `include=Attachments`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attachments: Option<Vec<AttachmentModel>>,

    /// Expanded with `include=CustomFields`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_field_definitions: Option<Vec<CustomFieldDefinitionModel>>,

    /// Expanded with `include=CustomFields`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_field_values: Option<Vec<CustomFieldValueModel>>,
}

/// Body for creating an accounting profile.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountingProfileRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_id: Option<Uuid>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub r#type: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub email_address: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub fax: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub address1: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub address2: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub address3: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,

    /// Contact to link as the profile's primary contact.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_contact_id: Option<Uuid>,
}

/// A contact linked to an accounting profile, joined with the contact's own fields.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountingProfileContactResultModel {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accounting_profile_contact_id: Option<Uuid>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub accounting_profile_id: Option<Uuid>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_id: Option<Uuid>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_primary: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_key: Option<Uuid>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_id: Option<Uuid>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub erp_key: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_code: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub role_code: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub email_address: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub fax: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub address1: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub address2: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub address3: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub state_region: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub country_code: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub webpage_url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub picture_url: Option<String>,

    #[serde(default, with = "datetime_option", skip_serializing_if = "Option::is_none")]
    pub created: Option<Timestamp>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_user_id: Option<Uuid>,

    #[serde(default, with = "datetime_option", skip_serializing_if = "Option::is_none")]
    pub modified: Option<Timestamp>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified_user_id: Option<Uuid>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub app_enrollment_id: Option<Uuid>,
}
