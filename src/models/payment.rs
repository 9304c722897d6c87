//! Payments and their applications to invoices.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use super::common::{AttachmentModel, CustomFieldDefinitionModel, CustomFieldValueModel, NoteModel};
use crate::utils::date_format::{CalendarDate, Timestamp, date_option, datetime_option};

/// A payment made by a customer to the company, or by the company to a vendor.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentModel {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_key: Option<Uuid>,

    /// Platform id of this payment; see `erp_key` for the originating system's id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_id: Option<Uuid>,

    /// The company this payment belongs to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_id: Option<Uuid>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub erp_key: Option<String>,

    /// ERP write-back status: 0 normal, 1 pending, 2 failed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub erp_update_status: Option<i32>,

    /// ERP write-back action: 0 none, 1 insert, 2 update, 3 delete.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub erp_update_action: Option<i32>,

    /// `AR Payment` (customer to company) or `AP Payment` (company to vendor).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_type: Option<String>,

    /// `Cash`, `Check`, `Credit Card`, `Wire Transfer` or `Other`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tender_type: Option<String>,

    /// True while part of the payment is unapplied; `unapplied_amount` is then nonzero.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_open: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub memo_text: Option<String>,

    /// Date the payment was received.
    #[serde(default, with = "date_option", skip_serializing_if = "Option::is_none")]
    pub payment_date: Option<CalendarDate>,

    /// Date the payment was posted to a ledger.
    #[serde(default, with = "date_option", skip_serializing_if = "Option::is_none")]
    pub post_date: Option<CalendarDate>,

    #[serde(
        default,
        with = "rust_decimal::serde::arbitrary_precision_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub payment_amount: Option<Decimal>,

    #[serde(
        default,
        with = "rust_decimal::serde::arbitrary_precision_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub unapplied_amount: Option<Decimal>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency_code: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub bank_account_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference_code: Option<String>,

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

    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_voided: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub in_dispute: Option<bool>,

    #[serde(
        default,
        with = "rust_decimal::serde::arbitrary_precision_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub currency_rate: Option<Decimal>,

    #[serde(
        default,
        with = "rust_decimal::serde::arbitrary_precision_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub base_currency_payment_amount: Option<Decimal>,

    #[serde(
        default,
        with = "rust_decimal::serde::arbitrary_precision_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub base_currency_unapplied_amount: Option<Decimal>,

    /// Processing status, e.g. `PENDING`, `PAID`, `FAILED`, `REFUNDED`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_fabric_status: Option<String>,

    /// Last modification in the source ERP.
    #[serde(default, with = "datetime_option", skip_serializing_if = "Option::is_none")]
    pub source_modified_date: Option<Timestamp>,

    /// Expanded with `include=Applications`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub applications: Option<Vec<PaymentAppliedModel>>,

    /// Expanded with `include=Notes`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<Vec<NoteModel>>,

    /// Expanded with `include=Attachments`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attachments: Option<Vec<AttachmentModel>>,

    /// Expanded with `include=CustomFieldDefinitions`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_field_definitions: Option<Vec<CustomFieldDefinitionModel>>,

    /// Expanded with `include=CustomFieldValues`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_field_values: Option<Vec<CustomFieldValueModel>>,
}

/// Part of a payment applied to one invoice.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentAppliedModel {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_key: Option<Uuid>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_applied_id: Option<Uuid>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub invoice_id: Option<Uuid>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_id: Option<Uuid>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub erp_key: Option<String>,

    /// Order of this application among the payment's applications.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entry_number: Option<i32>,

    #[serde(default, with = "date_option", skip_serializing_if = "Option::is_none")]
    pub apply_to_invoice_date: Option<CalendarDate>,

    #[serde(
        default,
        with = "rust_decimal::serde::arbitrary_precision_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub payment_applied_amount: Option<Decimal>,

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

    /// Expanded with `include=Invoice`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invoice: Option<Value>,
}
