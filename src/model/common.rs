//! Small wrappers shared across ORCID resources.

// self
use crate::_prelude::*;

/// ORCID's `{ "value": ... }` string wrapper.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrcidStringValue {
	/// Wrapped string.
	pub value: Option<String>,
}
impl OrcidStringValue {
	/// Borrowed value, if present.
	pub fn as_deref(&self) -> Option<&str> {
		self.value.as_deref()
	}
}

/// External identifier attached to a work (DOI, ISBN, ...).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrcidExternalId {
	/// Identifier scheme, e.g. `doi`.
	#[serde(rename = "external-id-type")]
	pub external_id_type: Option<String>,
	/// Identifier value.
	#[serde(rename = "external-id-value")]
	pub external_id_value: Option<String>,
}

/// Container for [`OrcidExternalId`] entries.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrcidExternalIds {
	/// Identifier list.
	#[serde(rename = "external-id")]
	pub external_ids: Option<Vec<OrcidExternalId>>,
}

/// `last-modified-date` wrapper holding milliseconds since the Unix epoch.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LastModifiedDate {
	/// Epoch milliseconds.
	pub value: Option<i64>,
}
impl LastModifiedDate {
	/// Converts the epoch milliseconds into a UTC timestamp.
	pub fn as_datetime(&self) -> Option<OffsetDateTime> {
		let millis = self.value?;

		OffsetDateTime::from_unix_timestamp_nanos(i128::from(millis) * 1_000_000).ok()
	}
}
