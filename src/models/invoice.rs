//! Invoices: bills sent from one company to another.
//!
//! The creator of an invoice is identified by `company_id` and the recipient
//! by `customer_id`. Most invoices carry both a platform id and the `erp_key`
//! generated by the system that originated them.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use super::common::{AttachmentModel, CustomFieldDefinitionModel, CustomFieldValueModel, NoteModel};
use crate::utils::date_format::{CalendarDate, Timestamp, date_option, datetime_option};

/// An invoice record.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceModel {
    /// Identifies the account that owns this record. All records of an account share it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_key: Option<Uuid>,

    /// Platform id of this invoice; not the ERP key.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invoice_id: Option<Uuid>,

    /// The company that created the invoice.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_id: Option<Uuid>,

    /// The company the invoice was sent to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<Uuid>,

    /// Primary key of this record in its originating financial system, if it was imported.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub erp_key: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub purchase_order_code: Option<String>,

    /// Human-readable invoice number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference_code: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub salesperson_code: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub salesperson_name: Option<String>,

    /// `AR Invoice`, `AP Invoice`, `AR Credit Memo` or `AP Credit Memo`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invoice_type_code: Option<String>,

    /// `Open`, `Closed`, `Cancelled` and similar; meaning varies by ERP.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invoice_status_code: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub terms_code: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub special_terms: Option<String>,

    /// ISO 4217 currency code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency_code: Option<String>,

    /// Total value including taxes and line items.
    #[serde(
        default,
        with = "rust_decimal::serde::arbitrary_precision_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub total_amount: Option<Decimal>,

    #[serde(
        default,
        with = "rust_decimal::serde::arbitrary_precision_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub sales_tax_amount: Option<Decimal>,

    #[serde(
        default,
        with = "rust_decimal::serde::arbitrary_precision_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub discount_amount: Option<Decimal>,

    /// Remaining balance; differs from `total_amount` once payments apply.
    #[serde(
        default,
        with = "rust_decimal::serde::arbitrary_precision_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub outstanding_balance_amount: Option<Decimal>,

    #[serde(default, with = "date_option", skip_serializing_if = "Option::is_none")]
    pub invoice_date: Option<CalendarDate>,

    /// Last day on which the early payment discount applies.
    #[serde(default, with = "date_option", skip_serializing_if = "Option::is_none")]
    pub discount_date: Option<CalendarDate>,

    #[serde(default, with = "date_option", skip_serializing_if = "Option::is_none")]
    pub posted_date: Option<CalendarDate>,

    #[serde(default, with = "date_option", skip_serializing_if = "Option::is_none")]
    pub invoice_closed_date: Option<CalendarDate>,

    #[serde(default, with = "date_option", skip_serializing_if = "Option::is_none")]
    pub payment_due_date: Option<CalendarDate>,

    #[serde(default, with = "date_option", skip_serializing_if = "Option::is_none")]
    pub imported_date: Option<CalendarDate>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_origin_address_id: Option<Uuid>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_bill_to_address_id: Option<Uuid>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_ship_to_address_id: Option<Uuid>,

    #[serde(default, with = "date_option", skip_serializing_if = "Option::is_none")]
    pub ship_date: Option<CalendarDate>,

    /// The date on which this record was created.
    #[serde(default, with = "datetime_option", skip_serializing_if = "Option::is_none")]
    pub created: Option<Timestamp>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_user_id: Option<Uuid>,

    /// The date on which this record was last modified.
    #[serde(default, with = "datetime_option", skip_serializing_if = "Option::is_none")]
    pub modified: Option<Timestamp>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified_user_id: Option<Uuid>,

    /// The app enrollment that imported this record, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub app_enrollment_id: Option<Uuid>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_voided: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub in_dispute: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclude_from_aging: Option<bool>,

    /// Rate from the account's base currency to this invoice's currency.
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
    pub base_currency_total_amount: Option<Decimal>,

    #[serde(
        default,
        with = "rust_decimal::serde::arbitrary_precision_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub base_currency_sales_tax_amount: Option<Decimal>,

    #[serde(
        default,
        with = "rust_decimal::serde::arbitrary_precision_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub base_currency_discount_amount: Option<Decimal>,

    #[serde(
        default,
        with = "rust_decimal::serde::arbitrary_precision_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub base_currency_outstanding_balance_amount: Option<Decimal>,

    /// Expanded with `include=Addresses`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub addresses: Option<Vec<InvoiceAddressModel>>,

    /// Expanded with `include=Lines`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lines: Option<Vec<InvoiceLineModel>>,

    /// Expanded with `include=Payments`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payments: Option<Vec<InvoicePaymentDetailModel>>,

    /// Expanded with `include=Notes`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<Vec<NoteModel>>,

    /// Expanded with `include=Attachments`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attachments: Option<Vec<AttachmentModel>>,

    /// Expanded with `include=Company`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<Value>,

    /// Expanded with `include=Customer`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer: Option<Value>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_primary_contact: Option<Value>,

    /// Expanded with `include=CreditMemos`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credit_memos: Option<Vec<Value>>,

    /// Expanded with `include=CustomFields`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_field_values: Option<Vec<CustomFieldValueModel>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_field_definitions: Option<Vec<CustomFieldDefinitionModel>>,
}

/// One line of an invoice.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceLineModel {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_key: Option<Uuid>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub invoice_line_id: Option<Uuid>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub invoice_id: Option<Uuid>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub erp_key: Option<String>,

    /// Line number as printed by the originating system.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_number: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_code: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit_measure_code: Option<String>,

    #[serde(
        default,
        with = "rust_decimal::serde::arbitrary_precision_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub unit_price: Option<Decimal>,

    #[serde(
        default,
        with = "rust_decimal::serde::arbitrary_precision_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub quantity: Option<Decimal>,

    #[serde(
        default,
        with = "rust_decimal::serde::arbitrary_precision_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub quantity_shipped: Option<Decimal>,

    #[serde(
        default,
        with = "rust_decimal::serde::arbitrary_precision_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub quantity_received: Option<Decimal>,

    #[serde(
        default,
        with = "rust_decimal::serde::arbitrary_precision_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub total_amount: Option<Decimal>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub exempt_reason_code: Option<String>,

    #[serde(default, with = "date_option", skip_serializing_if = "Option::is_none")]
    pub reporting_date: Option<CalendarDate>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub override_origin_address_id: Option<Uuid>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub override_bill_to_address_id: Option<Uuid>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub override_ship_to_address_id: Option<Uuid>,

    /// The date on which this record was created.
    #[serde(default, with = "datetime_option", skip_serializing_if = "Option::is_none")]
    pub created: Option<Timestamp>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_user_id: Option<Uuid>,

    /// The date on which this record was last modified.
    #[serde(default, with = "datetime_option", skip_serializing_if = "Option::is_none")]
    pub modified: Option<Timestamp>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified_user_id: Option<Uuid>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub app_enrollment_id: Option<Uuid>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<Vec<NoteModel>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub attachments: Option<Vec<AttachmentModel>>,
}

/// An address printed on an invoice (origin, bill-to or ship-to).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceAddressModel {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invoice_address_id: Option<Uuid>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_key: Option<Uuid>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub invoice_id: Option<Uuid>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub line1: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub line2: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub line3: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,

    #[serde(
        default,
        with = "rust_decimal::serde::arbitrary_precision_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub latitude: Option<Decimal>,

    #[serde(
        default,
        with = "rust_decimal::serde::arbitrary_precision_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub longitude: Option<Decimal>,

    /// The date on which this record was created.
    #[serde(default, with = "datetime_option", skip_serializing_if = "Option::is_none")]
    pub created: Option<Timestamp>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_user_id: Option<Uuid>,

    /// The date on which this record was last modified.
    #[serde(default, with = "datetime_option", skip_serializing_if = "Option::is_none")]
    pub modified: Option<Timestamp>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified_user_id: Option<Uuid>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub app_enrollment_id: Option<Uuid>,
}

/// A payment applied to an invoice, as embedded in `InvoiceModel::payments`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoicePaymentDetailModel {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_key: Option<Uuid>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_applied_id: Option<Uuid>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub invoice_id: Option<Uuid>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_id: Option<Uuid>,

    /// Date the payment was applied to this invoice.
    #[serde(default, with = "date_option", skip_serializing_if = "Option::is_none")]
    pub application_date: Option<CalendarDate>,

    /// Amount of the payment applied to this invoice.
    #[serde(
        default,
        with = "rust_decimal::serde::arbitrary_precision_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub payment_amount: Option<Decimal>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_type: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference_code: Option<String>,

    #[serde(default, with = "date_option", skip_serializing_if = "Option::is_none")]
    pub payment_date: Option<CalendarDate>,

    #[serde(default, with = "date_option", skip_serializing_if = "Option::is_none")]
    pub post_date: Option<CalendarDate>,

    #[serde(
        default,
        with = "rust_decimal::serde::arbitrary_precision_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub unapplied_amount: Option<Decimal>,
}
