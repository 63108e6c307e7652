//! `GET /{orcid}/record` response.

// self
use crate::{
	_prelude::*,
	model::{OrcidStringValue, OrcidWorksGroupContainer},
};

/// Public ORCID record.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrcidRecord {
	/// Identifier block.
	#[serde(rename = "orcid-identifier")]
	pub orcid_identifier: Option<OrcidIdentifier>,
	/// Person section.
	pub person: Option<OrcidPerson>,
	/// Activities summary section.
	#[serde(rename = "activities-summary")]
	pub activities_summary: Option<OrcidActivitiesSummary>,
}
impl OrcidRecord {
	/// Shortcut for `orcid-identifier.path`.
	pub fn orcid_path(&self) -> Option<&str> {
		self.orcid_identifier.as_ref()?.path.as_deref()
	}

	/// Shortcut for `person.name.given-names.value`.
	pub fn given_names(&self) -> Option<&str> {
		self.name()?.given_names.as_ref()?.as_deref()
	}

	/// Shortcut for `person.name.family-name.value`.
	pub fn family_name(&self) -> Option<&str> {
		self.name()?.family_name.as_ref()?.as_deref()
	}

	fn name(&self) -> Option<&OrcidName> {
		self.person.as_ref()?.name.as_ref()
	}
}

/// Identifier block.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrcidIdentifier {
	/// Full profile URI.
	pub uri: Option<String>,
	/// Bare iD.
	pub path: Option<String>,
	/// Issuing host.
	pub host: Option<String>,
}

/// Person section.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrcidPerson {
	/// Name block.
	pub name: Option<OrcidName>,
	/// Biography block.
	pub biography: Option<OrcidBiography>,
}

/// Name block of a person.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrcidName {
	/// Given names.
	#[serde(rename = "given-names")]
	pub given_names: Option<OrcidStringValue>,
	/// Family name.
	#[serde(rename = "family-name")]
	pub family_name: Option<OrcidStringValue>,
	/// Published credit name.
	#[serde(rename = "credit-name")]
	pub credit_name: Option<OrcidStringValue>,
}

/// Biography block of a person.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrcidBiography {
	/// Free-text biography.
	pub content: Option<String>,
}

/// Activities summary section.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrcidActivitiesSummary {
	/// Works grouped as in the works endpoint.
	pub works: Option<OrcidWorksGroupContainer>,
}
