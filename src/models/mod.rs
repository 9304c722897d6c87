//! Request and response records of the Lockstep Platform API.
//!
//! Every model is a plain serde struct. Rust field names are `snake_case`;
//! on the wire the same names appear in `camelCase`. All fields are optional:
//! absent or `null` keys read as `None`, and `None` fields are left out when a
//! model is serialized.

use serde::{Deserialize, Serialize, de::DeserializeOwned};
use serde_json::{Map, Value};
use tracing_error::SpanTrace;

use crate::error::{Error, Result};

pub mod accounting_profile;
pub mod common;
pub mod error_result;
pub mod feature_flags;
pub mod invite;
pub mod invoice;
pub mod invoice_summary;
pub mod lead;
pub mod naming;
pub mod payment;
pub mod sync;
pub mod transaction_detail;

pub use accounting_profile::{
    AccountingProfileContactResultModel, AccountingProfileModel, AccountingProfileRequest,
};
pub use common::{AttachmentModel, CustomFieldDefinitionModel, CustomFieldValueModel, NoteModel};
pub use error_result::ErrorResult;
pub use feature_flags::{FeatureFlagsRequestModel, FeatureFlagsResponseModel};
pub use invite::{InviteModel, InviteSubmitModel};
pub use invoice::{InvoiceAddressModel, InvoiceLineModel, InvoiceModel, InvoicePaymentDetailModel};
pub use invoice_summary::{AtRiskInvoiceSummaryModel, InvoiceSummaryModel};
pub use lead::LeadModel;
pub use payment::{PaymentAppliedModel, PaymentModel};
pub use sync::{SyncRequestModel, SyncSubmitModel};
pub use transaction_detail::TransactionDetailModel;

/// Conversions between a model and its JSON mapping.
///
/// The field-name mapping itself is the serde `camelCase` rename; see
/// [`naming`] for the same mapping applied to bare names.
pub trait Model: Serialize + DeserializeOwned {
    /// Reconstructs the model from a mapping keyed by wire (`camelCase`) names.
    fn from_wire(value: Value) -> Result<Self> {
        serde_json::from_value(value.clone()).map_err(|source| Error::DeserializationError {
            source,
            entity_type: model_name::<Self>(),
            url: None,
            status_code: None,
            response_body: Some(value.to_string()),
            span_trace: SpanTrace::capture(),
        })
    }

    /// Produces the mapping keyed by wire (`camelCase`) names.
    fn to_wire(&self) -> Result<Value> {
        serde_json::to_value(self).map_err(Error::serialization)
    }

    /// Constructs the model from a mapping keyed by Rust (`snake_case`) field
    /// names. Nested objects are renamed too; missing keys become `None`.
    fn from_local(fields: Map<String, Value>) -> Result<Self> {
        Self::from_wire(naming::camelize_keys(Value::Object(fields)))
    }
}

/// Short type name used in decode errors, e.g. `FetchResult` or `InvoiceModel`.
pub(crate) fn model_name<T: ?Sized>() -> String {
    let name = std::any::type_name::<T>();
    name.split('<')
        .next()
        .unwrap_or(name)
        .rsplit("::")
        .next()
        .unwrap_or("Unknown")
        .to_string()
}

macro_rules! impl_model {
    ($($model:ty),+ $(,)?) => {
        $(impl Model for $model {})+
    };
}

impl_model!(
    AccountingProfileContactResultModel,
    AccountingProfileModel,
    AccountingProfileRequest,
    AttachmentModel,
    AtRiskInvoiceSummaryModel,
    CustomFieldDefinitionModel,
    CustomFieldValueModel,
    ErrorResult,
    FeatureFlagsRequestModel,
    FeatureFlagsResponseModel,
    InviteModel,
    InviteSubmitModel,
    InvoiceAddressModel,
    InvoiceLineModel,
    InvoiceModel,
    InvoicePaymentDetailModel,
    InvoiceSummaryModel,
    LeadModel,
    NoteModel,
    PaymentAppliedModel,
    PaymentModel,
    SyncRequestModel,
    SyncSubmitModel,
    TransactionDetailModel,
);

impl<T: Serialize + DeserializeOwned> Model for FetchResult<T> {}

/// One page of results from a `query_*` or view endpoint.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", bound(deserialize = "T: Deserialize<'de>"))]
pub struct FetchResult<T> {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub records: Option<Vec<T>>,

    /// Number of records matching the filter across all pages
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_count: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_number: Option<u32>,
}

impl<T> FetchResult<T> {
    /// The records of this page; empty when the payload had none.
    #[must_use]
    pub fn records(&self) -> &[T] {
        self.records.as_deref().unwrap_or_default()
    }

    #[must_use]
    pub fn into_records(self) -> Vec<T> {
        self.records.unwrap_or_default()
    }
}

/// A partial field set for `PATCH` operations.
///
/// Field names may be given as Rust (`snake_case`) or wire (`camelCase`)
/// names; they are stored under the wire name. Values are forwarded exactly
/// as given, and fields that were never set are never sent.
///
/// ```
/// use lockstep_rs::models::Patch;
///
/// let patch = Patch::new()
///     .set("reference_code", "PO-1182")
///     .set("inDispute", true);
/// assert_eq!(
///     serde_json::to_value(&patch).unwrap(),
///     serde_json::json!({ "referenceCode": "PO-1182", "inDispute": true })
/// );
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Patch(Map<String, Value>);

impl Patch {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `field` to `value`. Use `Value::Null` to clear a field on the server.
    #[must_use]
    pub fn set(mut self, field: &str, value: impl Into<Value>) -> Self {
        self.0.insert(naming::wire_name(field), value.into());
        self
    }

    #[must_use]
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(&naming::wire_name(field))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
