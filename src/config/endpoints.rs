//! Path templates and media types for the ORCID endpoints.

// self
use crate::{_prelude::*, config::Environment, id::OrcidId};

/// Versioned JSON media type required by the data endpoints.
pub const ORCID_JSON: &str = "application/vnd.orcid+json";
/// Plain JSON media type returned by the token endpoint.
pub const JSON: &str = "application/json";
/// Media type of the token exchange body.
pub const FORM_URLENCODED: &str = "application/x-www-form-urlencoded";

/// Path of the authorize endpoint relative to the OAuth base.
pub const OAUTH_AUTHORIZE_PATH: &str = "oauth/authorize";
/// Path of the token endpoint relative to the OAuth base.
pub const OAUTH_TOKEN_PATH: &str = "oauth/token";

/// Read-only resources served per ORCID iD.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Resource {
	/// Full public record.
	Record,
	/// Works summary list.
	Works,
}
impl Resource {
	/// Path segment naming the resource.
	pub const fn as_str(self) -> &'static str {
		match self {
			Resource::Record => "record",
			Resource::Works => "works",
		}
	}
}
impl Display for Resource {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

impl Environment {
	/// `{api_base}/{id}/{resource}`.
	pub fn resource_url(&self, id: &OrcidId, resource: Resource) -> Result<Url> {
		append_path(&self.api_base, [id.as_str(), resource.as_str()])
	}

	/// `{oauth_base}/oauth/authorize`.
	pub fn authorize_url(&self) -> Result<Url> {
		append_path(&self.oauth_base, OAUTH_AUTHORIZE_PATH.split('/'))
	}

	/// `{oauth_base}/oauth/token`.
	pub fn token_url(&self) -> Result<Url> {
		append_path(&self.oauth_base, OAUTH_TOKEN_PATH.split('/'))
	}
}

/// Appends `segments` to `base`, tolerating a missing trailing slash.
///
/// Query and fragment on the base are dropped. Bases that cannot carry a path
/// (`mailto:`, `data:`) yield [`Error::InvalidUrl`].
pub(crate) fn append_path<I>(base: &Url, segments: I) -> Result<Url>
where
	I: IntoIterator,
	I::Item: AsRef<str>,
{
	let mut url = base.clone();

	url.set_query(None);
	url.set_fragment(None);
	url.path_segments_mut()
		.map_err(|_| Error::InvalidUrl { source: None })?
		.pop_if_empty()
		.extend(segments);

	Ok(url)
}
