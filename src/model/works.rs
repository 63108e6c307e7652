//! `GET /{orcid}/works` response.

// self
use crate::{
	_prelude::*,
	model::{LastModifiedDate, OrcidExternalIds, OrcidStringValue},
};

/// Public works summary.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrcidWorksResponse {
	/// Last modification of the works section.
	#[serde(rename = "last-modified-date")]
	pub last_modified_date: Option<LastModifiedDate>,
	/// Work groups; duplicates of one work share a group.
	pub group: Option<Vec<OrcidWorkGroup>>,
}
impl OrcidWorksResponse {
	/// Iterates every work summary across all groups.
	pub fn summaries(&self) -> impl Iterator<Item = &OrcidWorkSummary> {
		self.group
			.iter()
			.flatten()
			.flat_map(|group| group.work_summary.iter().flatten())
	}
}

/// Group of equivalent works.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrcidWorkGroup {
	/// Summaries in the group.
	#[serde(rename = "work-summary")]
	pub work_summary: Option<Vec<OrcidWorkSummary>>,
}

/// Single work summary.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrcidWorkSummary {
	/// Upstream item handle.
	#[serde(rename = "put-code")]
	pub put_code: Option<i64>,
	/// Title block.
	pub title: Option<OrcidWorkTitle>,
	/// Publication date.
	#[serde(rename = "publication-date")]
	pub publication_date: Option<OrcidPublicationDate>,
	/// External identifiers.
	#[serde(rename = "external-ids")]
	pub external_ids: Option<OrcidExternalIds>,
}
impl OrcidWorkSummary {
	/// Shortcut for `title.title.value`.
	pub fn title_text(&self) -> Option<&str> {
		self.title.as_ref()?.title.as_ref()?.as_deref()
	}
}

/// Title block of a work.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrcidWorkTitle {
	/// Main title.
	pub title: Option<OrcidStringValue>,
	/// Subtitle.
	pub subtitle: Option<OrcidStringValue>,
}

/// Publication date; each part is a zero-padded string.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrcidPublicationDate {
	/// Year, e.g. `2019`.
	pub year: Option<OrcidStringValue>,
	/// Month, e.g. `04`.
	pub month: Option<OrcidStringValue>,
	/// Day, e.g. `09`.
	pub day: Option<OrcidStringValue>,
}

/// Works container embedded in a record's activities summary.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrcidWorksGroupContainer {
	/// Work groups.
	pub group: Option<Vec<OrcidWorkGroup>>,
}
