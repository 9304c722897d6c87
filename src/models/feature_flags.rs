use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Names of the feature flags to look up.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureFlagsRequestModel {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub names: Option<Vec<String>>,
}

/// State of the requested feature flags, keyed by flag name.
///
/// Flag names are data, not field names: build this from the wire form,
/// not with `Model::from_local`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureFlagsResponseModel {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub values: Option<BTreeMap<String, bool>>,
}
