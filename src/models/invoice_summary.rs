//! Rows of the invoice summary views.
//!
//! These are read-only projections of invoices with a few computed columns
//! such as `days_past_due`.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::utils::date_format::{CalendarDate, date_option};

/// A row of `/api/v1/Invoices/views/summary`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceSummaryModel {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_key: Option<Uuid>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<Uuid>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub invoice_id: Option<Uuid>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub invoice_number: Option<String>,

    #[serde(default, with = "date_option", skip_serializing_if = "Option::is_none")]
    pub invoice_date: Option<CalendarDate>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    #[serde(default, with = "date_option", skip_serializing_if = "Option::is_none")]
    pub payment_due_date: Option<CalendarDate>,

    #[serde(
        default,
        with = "rust_decimal::serde::arbitrary_precision_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub invoice_amount: Option<Decimal>,

    #[serde(
        default,
        with = "rust_decimal::serde::arbitrary_precision_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub outstanding_balance: Option<Decimal>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub invoice_type_code: Option<String>,

    /// Date of the most recent activity on this invoice.
    #[serde(default, with = "date_option", skip_serializing_if = "Option::is_none")]
    pub newest_activity: Option<CalendarDate>,

    /// Zero or negative when the invoice is not yet due.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub days_past_due: Option<i32>,

    /// Reference codes of the payments applied to this invoice.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_numbers: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_ids: Option<Vec<Uuid>>,
}

/// A row of `/api/v1/Invoices/views/at-risk-summary`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AtRiskInvoiceSummaryModel {
    /// Date the at-risk report was generated.
    #[serde(default, with = "date_option", skip_serializing_if = "Option::is_none")]
    pub report_date: Option<CalendarDate>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_key: Option<Uuid>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<Uuid>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub invoice_id: Option<Uuid>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub invoice_number: Option<String>,

    #[serde(default, with = "date_option", skip_serializing_if = "Option::is_none")]
    pub invoice_date: Option<CalendarDate>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    #[serde(default, with = "date_option", skip_serializing_if = "Option::is_none")]
    pub payment_due_date: Option<CalendarDate>,

    #[serde(
        default,
        with = "rust_decimal::serde::arbitrary_precision_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub invoice_amount: Option<Decimal>,

    #[serde(
        default,
        with = "rust_decimal::serde::arbitrary_precision_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub outstanding_balance: Option<Decimal>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub invoice_type_code: Option<String>,

    /// Date of the most recent activity on this invoice.
    #[serde(default, with = "date_option", skip_serializing_if = "Option::is_none")]
    pub newest_activity: Option<CalendarDate>,

    /// Zero or negative when the invoice is not yet due.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub days_past_due: Option<i32>,

    /// Reference codes of the payments applied to this invoice.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_numbers: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_ids: Option<Vec<Uuid>>,
}
