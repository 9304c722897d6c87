//! Sync requests load data from a connected ERP into the platform.
//!
//! Records are matched to existing data by app enrollment and ERP key: new
//! keys are inserted, known keys are updated when their data changed.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use crate::utils::date_format::{Timestamp, datetime_option};

/// Body for starting a sync.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SyncSubmitModel {
    /// The app enrollment whose connector should run
    #[serde(skip_serializing_if = "Option::is_none")]
    pub app_enrollment_id: Option<Uuid>,

    /// Process everything in the ERP instead of the changes since the last run
    #[serde(skip_serializing_if = "Option::is_none")]
    pub run_full_sync: Option<bool>,
}

/// A sync task and its progress.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SyncRequestModel {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sync_request_id: Option<Uuid>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_key: Option<Uuid>,

    /// `Ready`, `Connecting`, `Cancelled`, `Failed`, `Success`, ...
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_code: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub process_result_message: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub app_enrollment_id: Option<Uuid>,

    #[serde(default, with = "datetime_option", skip_serializing_if = "Option::is_none")]
    pub created: Option<Timestamp>,

    #[serde(default, with = "datetime_option", skip_serializing_if = "Option::is_none")]
    pub modified: Option<Timestamp>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified_user_id: Option<Uuid>,

    /// Per-table progress; expanded with `include=Details`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}
