//! Read-only resource fetches.

// crates.io
use oauth2::http::Method;
// self
use crate::{
	_prelude::*,
	client::OrcidClient,
	config::{ORCID_JSON, Resource},
	http::HttpTransport,
	id::OrcidId,
	model::{OrcidRecord, OrcidWorksResponse},
	obs::OperationKind,
};

impl<T> OrcidClient<T>
where
	T: ?Sized + HttpTransport,
{
	/// Fetches the public record of `id` from `{api_base}/{id}/record`.
	///
	/// Fields hidden by the researcher's visibility settings decode as `None`.
	pub async fn fetch_record(&self, id: &OrcidId) -> Result<OrcidRecord> {
		self.fetch(OperationKind::FetchRecord, id, Resource::Record).await
	}

	/// Fetches the works summary of `id` from `{api_base}/{id}/works`.
	///
	/// The list is returned exactly as the upstream serves it in one response.
	pub async fn fetch_works(&self, id: &OrcidId) -> Result<OrcidWorksResponse> {
		self.fetch(OperationKind::FetchWorks, id, Resource::Works).await
	}

	async fn fetch<R>(&self, kind: OperationKind, id: &OrcidId, resource: Resource) -> Result<R>
	where
		R: for<'de> Deserialize<'de>,
	{
		let url = self.environment().resource_url(id, resource)?;
		// The data endpoints degrade on a generic or missing `Accept`.
		let request = self.build_request(Method::GET, &url, ORCID_JSON, None)?;

		self.execute(kind, request).await
	}
}
