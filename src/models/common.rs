//! Metadata records that hang off many resources: notes, attachments and
//! custom fields. They appear as nested collections when requested through
//! the `include` parameter.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::utils::date_format::{Timestamp, datetime_option};

/// A note attached to a record.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NoteModel {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note_id: Option<Uuid>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_key: Option<Uuid>,

    /// Name of the table the note is attached to, e.g. `Invoice`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub table_key: Option<String>,

    /// Id of the record the note is attached to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub object_key: Option<Uuid>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub note_text: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub note_type: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_archived: Option<bool>,

    #[serde(default, with = "datetime_option", skip_serializing_if = "Option::is_none")]
    pub created: Option<Timestamp>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_user_id: Option<Uuid>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_user_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub activity_id: Option<Uuid>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub recipient_name: Option<String>,
}

/// A file attached to a record.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttachmentModel {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attachment_id: Option<Uuid>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_key: Option<Uuid>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub table_key: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub object_key: Option<Uuid>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_ext: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub attachment_type_id: Option<Uuid>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub attachment_type: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_archived: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub origin_attachment_id: Option<Uuid>,

    /// Visible to users inside the account
    #[serde(skip_serializing_if = "Option::is_none")]
    pub view_internal: Option<bool>,

    /// Visible to customers and vendors through shared links
    #[serde(skip_serializing_if = "Option::is_none")]
    pub view_external: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub erp_key: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub app_enrollment_id: Option<Uuid>,

    #[serde(default, with = "datetime_option", skip_serializing_if = "Option::is_none")]
    pub created: Option<Timestamp>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_user_id: Option<Uuid>,
}

/// Describes a custom field that can be set on records of one table.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomFieldDefinitionModel {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_key: Option<Uuid>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_field_definition_id: Option<Uuid>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub table_key: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub app_id: Option<Uuid>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_field_label: Option<String>,

    /// `Text`, `Integer`, `Date`, `Boolean`, `Currency` or `Url`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_type: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<i32>,

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

/// The value of one custom field on one record.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomFieldValueModel {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_key: Option<Uuid>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_field_definition_id: Option<Uuid>,

    /// Id of the record this value belongs to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub record_key: Option<Uuid>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub string_value: Option<String>,

    #[serde(
        default,
        with = "rust_decimal::serde::arbitrary_precision_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub numeric_value: Option<Decimal>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_field_definition: Option<CustomFieldDefinitionModel>,

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
