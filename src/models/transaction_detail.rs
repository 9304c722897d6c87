use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::utils::date_format::{Timestamp, datetime_option};

/// A transaction (invoice, credit memo or payment) applied to another transaction.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionDetailModel {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_key: Option<Uuid>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_currency_code: Option<String>,

    /// ERP-specific extra reference for the transaction.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference_number: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction_detail_id: Option<Uuid>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction_detail_applied_id: Option<Uuid>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction_id: Option<Uuid>,

    /// Invoice types (`AR Invoice`, `AP Credit Memo`, ...) or payment types (`AR Payment`, `AP Payment`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction_type: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction_sub_type: Option<String>,

    #[serde(default, with = "datetime_option", skip_serializing_if = "Option::is_none")]
    pub transaction_date: Option<Timestamp>,

    #[serde(default, with = "datetime_option", skip_serializing_if = "Option::is_none")]
    pub transaction_invoice_date: Option<Timestamp>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency_code: Option<String>,

    /// Total value including taxes and line items.
    #[serde(
        default,
        with = "rust_decimal::serde::arbitrary_precision_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub transaction_amount: Option<Decimal>,

    #[serde(
        default,
        with = "rust_decimal::serde::arbitrary_precision_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub outstanding_amount: Option<Decimal>,

    #[serde(
        default,
        with = "rust_decimal::serde::arbitrary_precision_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub base_currency_transaction_amount: Option<Decimal>,

    #[serde(
        default,
        with = "rust_decimal::serde::arbitrary_precision_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub base_currency_outstanding_amount: Option<Decimal>,

    /// When true, a PDF of the transaction can be fetched from the ERP.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supports_erp_pdf_retrieval: Option<bool>,
}
